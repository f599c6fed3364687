//! The board abstraction shared by the 2D and pyramid search engines.

use crate::geometry::Coordinate;
use crate::pieces::Piece;

/// A board cell: `None` when empty, otherwise the symbol of the covering piece.
pub type Cell = Option<char>;

/// Operations the backtracking engine needs from a board.
///
/// Boards are values: `place` returns a fresh copy, so a search branch can be
/// abandoned simply by dropping its board.
pub trait Board: Clone {
    type Coord: Coordinate;

    /// The first empty cell in scan order, or `None` if the board is full.
    fn first_empty(&self) -> Option<Self::Coord>;

    /// Whether every `anchor + cell` is on the board and empty.
    fn can_place(&self, cells: &[Self::Coord], anchor: Self::Coord) -> bool;

    /// A copy of the board with `symbol` written at every `anchor + cell`.
    ///
    /// Callers check `can_place` first; out-of-bounds cells are skipped.
    fn place(&self, symbol: char, cells: &[Self::Coord], anchor: Self::Coord) -> Self;

    /// Every board position in scan order.
    fn positions(&self) -> Vec<Self::Coord>;

    /// The contents of one cell, or `None` when `coord` is off the board.
    fn cell(&self, coord: Self::Coord) -> Option<Cell>;

    /// Whether no empty cell remains.
    fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }
}

/// A placement made by an interactive caller: the board as it was before the
/// placement, plus the symbol that was placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move<B> {
    pub before: B,
    pub symbol: char,
}

/// Undo stack of manual placements.
#[derive(Debug, Clone)]
pub struct History<B> {
    moves: Vec<Move<B>>,
}

impl<B> Default for History<B> {
    fn default() -> Self {
        Self { moves: Vec::new() }
    }
}

impl<B: Board> History<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `piece` using `cells` (one of its orientations) at `anchor`.
    ///
    /// Returns the new board, or `None` when the placement does not fit, in
    /// which case nothing is recorded.
    pub fn place(
        &mut self,
        board: &B,
        piece: &Piece<B::Coord>,
        cells: &[B::Coord],
        anchor: B::Coord,
    ) -> Option<B> {
        if !board.can_place(cells, anchor) {
            return None;
        }
        self.moves.push(Move {
            before: board.clone(),
            symbol: piece.symbol,
        });
        Some(board.place(piece.symbol, cells, anchor))
    }

    /// Pops the latest move, returning the board as it was before it.
    pub fn undo(&mut self) -> Option<Move<B>> {
        self.moves.pop()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Symbols placed so far, oldest first.
    pub fn placed_symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.moves.iter().map(|m| m.symbol)
    }
}
