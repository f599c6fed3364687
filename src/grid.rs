//! Rectangular board for 2D placement puzzles.
//!
//! Cells are stored in a flat row-major vector; `(row, col)` maps to
//! `row * cols + col`. Cloning a grid copies every cell, which is what the
//! search engine relies on for branch isolation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell};
use crate::error::PuzzleError;
use crate::geometry::{Coord2, Coordinate};

/// A fixed-size rectangular board.
///
/// Serializes as a list of rows, each a list of `null` or one-character
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An empty `rows x cols` board.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Builds a grid from nested rows, rejecting rows of unequal length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, PuzzleError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(PuzzleError::RaggedBoard {
                    row: row_index,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Parses the text form produced by [`Grid::render`]: one line per row,
    /// `.` for an empty cell, any other character as a placed symbol.
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|ch| if ch == '.' { None } else { Some(ch) })
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Iterates over the rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> {
        // a zero-width grid still has `rows` (empty) rows
        (0..self.rows).map(move |r| &self.cells[r * self.cols..(r + 1) * self.cols])
    }

    /// Copies the board out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.row_slices().map(<[Cell]>::to_vec).collect()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Renders the board as text, one line per row, `.` for empty cells.
    pub fn render(&self) -> String {
        let mut output = String::with_capacity(self.rows * (self.cols + 1));
        for row in self.row_slices() {
            output.extend(row.iter().map(|cell| cell.unwrap_or('.')));
            output.push('\n');
        }
        output
    }

    #[inline]
    fn index(&self, (row, col): Coord2) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Index of `anchor + cell`; overflow counts as off the board.
    #[inline]
    fn target(&self, anchor: Coord2, cell: Coord2) -> Option<usize> {
        self.index(anchor.checked_offset(cell)?)
    }

    #[inline]
    fn coord_of(&self, index: usize) -> Coord2 {
        ((index / self.cols) as i32, (index % self.cols) as i32)
    }
}

impl Board for Grid {
    type Coord = Coord2;

    fn first_empty(&self) -> Option<Coord2> {
        self.cells
            .iter()
            .position(Option::is_none)
            .map(|index| self.coord_of(index))
    }

    fn can_place(&self, cells: &[Coord2], anchor: Coord2) -> bool {
        cells.iter().all(|&cell| {
            self.target(anchor, cell)
                .is_some_and(|index| self.cells[index].is_none())
        })
    }

    fn place(&self, symbol: char, cells: &[Coord2], anchor: Coord2) -> Self {
        let mut placed = self.clone();
        for &cell in cells {
            if let Some(index) = self.target(anchor, cell) {
                placed.cells[index] = Some(symbol);
            }
        }
        placed
    }

    fn positions(&self) -> Vec<Coord2> {
        (0..self.cells.len()).map(|i| self.coord_of(i)).collect()
    }

    fn cell(&self, coord: Coord2) -> Option<Cell> {
        self.index(coord).map(|index| self.cells[index])
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = PuzzleError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Cell>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
