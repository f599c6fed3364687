//! Exact-cover placement puzzles.
//!
//! One backtracking engine ([`solver`]) fills any [`Board`] with a set of
//! polyomino or polycube pieces, trying every rotation and reflection. Two
//! boards ship with the crate: the rectangular [`Grid`] and the stepped
//! [`Pyramid`]. The N-Queens placement problem lives alongside in [`queens`].

pub mod board;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod persistence;
pub mod pieces;
pub mod pyramid;
pub mod queens;
pub mod solver;
pub mod worker;

pub use board::{Board, Cell};
pub use error::PuzzleError;
pub use grid::Grid;
pub use pieces::{Piece, Piece2, Piece3};
pub use pyramid::Pyramid;
pub use queens::{solve_n_queens, QueenBoard};
pub use solver::{
    solve_polyspheres, solve_pyramid, AnchorStrategy, SearchMode, SearchOutcome, SearchSummary,
    Solver, SolverConfig,
};
pub use worker::{SolveRequest, SolverWorker, WorkerConfig, WorkerMessage};
