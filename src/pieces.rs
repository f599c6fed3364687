//! Piece definitions and built-in piece sets.
//!
//! A piece is a symbol plus a list of cell offsets. Offsets do not have to be
//! normalized; the solver normalizes every orientation before placing it.

use serde::{Deserialize, Serialize};

use crate::geometry::{Coord2, Coord3};

/// An immutable piece template.
///
/// The symbol is both the piece's identity and the marker written into every
/// board cell it covers. `color` is carried for presentation and never read by
/// the solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece<C> {
    pub symbol: char,
    pub coords: Vec<C>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A piece for rectangular boards.
pub type Piece2 = Piece<Coord2>;

/// A piece for pyramid boards.
pub type Piece3 = Piece<Coord3>;

impl<C> Piece<C> {
    pub fn new(symbol: char, coords: impl Into<Vec<C>>) -> Self {
        Self {
            symbol,
            coords: coords.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Number of board cells this piece covers.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.coords.len()
    }
}

/// The twelve pentominoes, as `(row, col)` offsets.
///
/// Together they cover 60 cells, tiling the 6x10, 5x12, 4x15 and 3x20
/// rectangles.
pub const PENTOMINOES: &[(char, &[Coord2])] = &[
    ('F', &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)]),
    ('I', &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]),
    ('L', &[(0, 0), (1, 0), (2, 0), (3, 0), (3, 1)]),
    ('N', &[(0, 1), (1, 1), (2, 0), (2, 1), (3, 0)]),
    ('P', &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]),
    ('T', &[(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)]),
    ('U', &[(0, 0), (0, 2), (1, 0), (1, 1), (1, 2)]),
    ('V', &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]),
    ('W', &[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)]),
    ('X', &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]),
    ('Y', &[(0, 1), (1, 0), (1, 1), (2, 1), (3, 1)]),
    ('Z', &[(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)]),
];

/// Four pieces that fill a size-3 pyramid (9 + 4 + 1 = 14 cells), as
/// `(layer, row, col)` offsets.
pub const PYRAMID_PIECES: &[(char, &[Coord3])] = &[
    // three-cube column
    ('A', &[(0, 0, 0), (1, 0, 0), (2, 0, 0)]),
    // flat L tromino
    ('B', &[(0, 0, 1), (0, 1, 0), (0, 1, 1)]),
    // flat L tetromino
    ('C', &[(0, 0, 1), (0, 0, 2), (0, 1, 2), (0, 2, 2)]),
    // flat square
    ('D', &[(0, 0, 0), (0, 0, 1), (0, 1, 0), (0, 1, 1)]),
];

/// Display colors handed out to preset pieces in order.
const PALETTE: &[&str] = &[
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6",
    "#bcf60c", "#fabebe", "#008080", "#e6beff",
];

fn from_table<C: Copy>(table: &[(char, &[C])]) -> Vec<Piece<C>> {
    table
        .iter()
        .zip(PALETTE.iter().cycle())
        .map(|(&(symbol, coords), &color)| Piece::new(symbol, coords).with_color(color))
        .collect()
}

/// The pentomino set as owned pieces.
pub fn pentominoes() -> Vec<Piece2> {
    from_table(PENTOMINOES)
}

/// The size-3 pyramid set as owned pieces.
pub fn pyramid_pieces() -> Vec<Piece3> {
    from_table(PYRAMID_PIECES)
}
