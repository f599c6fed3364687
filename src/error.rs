//! Error type for malformed solver inputs.
//!
//! "No solution exists" is never an error: the search engines report it by
//! emitting nothing (or returning `false`/`None`). `PuzzleError` only covers
//! call shapes the solver cannot work with at all.

use thiserror::Error;

/// Errors raised for malformed boards, pieces or puzzle files.
#[derive(Error, Debug)]
pub enum PuzzleError {
    /// A grid row has a different length than the first row.
    #[error("ragged board: row {row} has {found} cells, expected {expected}")]
    RaggedBoard {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A pyramid layer is not the square of the expected side length.
    #[error("malformed pyramid: layer {layer} should be {expected}x{expected}")]
    MalformedPyramid { layer: usize, expected: usize },
    /// A piece with no cells cannot be oriented or anchored.
    #[error("piece '{0}' has no cells")]
    EmptyPiece(char),
    /// Two pieces share a symbol, so solutions would be ambiguous.
    #[error("duplicate piece symbol '{0}'")]
    DuplicateSymbol(char),
    /// The used-piece set is a 64-bit mask.
    #[error("{0} pieces given, at most {max} are supported", max = crate::solver::MAX_PIECES)]
    TooManyPieces(usize),
    /// An N-Queens board must be square and hold only 0 or 1.
    #[error("invalid queen board: {0}")]
    InvalidQueenBoard(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
