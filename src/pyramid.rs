//! Stepped 3D board: a stack of square layers shrinking by one per level.
//!
//! Layer `l` of a size-`n` pyramid is an `(n - l) x (n - l)` grid, so layer 0
//! is the base and layer `n - 1` is the single apex cell. Cells are stored
//! flat, layer by layer, each layer row-major.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell};
use crate::error::PuzzleError;
use crate::geometry::{Coord3, Coordinate};

/// Sum of squares `1^2 + ... + n^2`.
const fn square_pyramidal(n: usize) -> usize {
    n * (n + 1) * (2 * n + 1) / 6
}

/// A pyramid board of `size` layers.
///
/// Serializes as a list of layers, each a list of rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Vec<Cell>>>", into = "Vec<Vec<Vec<Cell>>>")]
pub struct Pyramid {
    size: usize,
    cells: Vec<Cell>,
}

impl Pyramid {
    /// An empty pyramid whose base layer is `size x size`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; square_pyramidal(size)],
        }
    }

    /// Builds a pyramid from nested layers.
    ///
    /// Layer `i` must be a square of side `layers.len() - i`.
    pub fn from_layers(layers: Vec<Vec<Vec<Cell>>>) -> Result<Self, PuzzleError> {
        let size = layers.len();
        let mut cells = Vec::with_capacity(square_pyramidal(size));
        for (layer_index, layer) in layers.iter().enumerate() {
            let side = size - layer_index;
            if layer.len() != side || layer.iter().any(|row| row.len() != side) {
                return Err(PuzzleError::MalformedPyramid {
                    layer: layer_index,
                    expected: side,
                });
            }
            for row in layer {
                cells.extend_from_slice(row);
            }
        }
        Ok(Self { size, cells })
    }

    /// Side length of the base layer, which is also the number of layers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Side length of `layer`.
    #[inline]
    pub fn side(&self, layer: usize) -> usize {
        self.size - layer
    }

    /// Total number of cells across all layers.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// One layer's cells, row-major, or `None` above the apex.
    pub fn layer(&self, layer: usize) -> Option<&[Cell]> {
        (layer < self.size).then(|| self.layer_cells(layer))
    }

    /// Copies the board out as nested layers of rows.
    pub fn to_layers(&self) -> Vec<Vec<Vec<Cell>>> {
        (0..self.size)
            .map(|l| {
                self.layer_cells(l)
                    .chunks(self.side(l))
                    .map(<[Cell]>::to_vec)
                    .collect()
            })
            .collect()
    }

    /// Renders the layers side by side, base layer first, `.` for empty cells.
    pub fn render(&self) -> String {
        let width = self.size;
        let mut lines = vec![String::new(); self.size + 1];

        for layer in 0..self.size {
            let side = self.side(layer);
            if layer > 0 {
                for line in &mut lines {
                    line.push_str("  ");
                }
            }
            lines[0].push_str(&format!("{:<width$}", format!("l{layer}")));
            for (row, line) in lines[1..].iter_mut().enumerate() {
                let content: String = if row < side {
                    self.layer_cells(layer)[row * side..(row + 1) * side]
                        .iter()
                        .map(|cell| cell.unwrap_or('.'))
                        .collect()
                } else {
                    String::new()
                };
                line.push_str(&format!("{content:<width$}"));
            }
        }

        let mut output = String::new();
        for line in lines {
            output.push_str(line.trim_end());
            output.push('\n');
        }
        output
    }

    /// Callers keep `layer < size`.
    #[inline]
    fn layer_cells(&self, layer: usize) -> &[Cell] {
        &self.cells[self.layer_start(layer)..self.layer_start(layer + 1)]
    }

    #[inline]
    fn layer_start(&self, layer: usize) -> usize {
        square_pyramidal(self.size) - square_pyramidal(self.size - layer)
    }

    #[inline]
    fn index(&self, (layer, row, col): Coord3) -> Option<usize> {
        let layer = usize::try_from(layer).ok()?;
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        if layer >= self.size {
            return None;
        }
        // rows and columns are bounded by the target layer's own side
        let side = self.side(layer);
        (row < side && col < side).then(|| self.layer_start(layer) + row * side + col)
    }
}

impl Board for Pyramid {
    type Coord = Coord3;

    fn first_empty(&self) -> Option<Coord3> {
        (0..self.size).find_map(|layer| {
            let side = self.side(layer);
            self.layer_cells(layer)
                .iter()
                .position(Option::is_none)
                .map(|i| (layer as i32, (i / side) as i32, (i % side) as i32))
        })
    }

    fn can_place(&self, cells: &[Coord3], anchor: Coord3) -> bool {
        cells.iter().all(|&cell| {
            anchor
                .checked_offset(cell)
                .and_then(|coord| self.index(coord))
                .is_some_and(|index| self.cells[index].is_none())
        })
    }

    fn place(&self, symbol: char, cells: &[Coord3], anchor: Coord3) -> Self {
        let mut placed = self.clone();
        for &cell in cells {
            let target = anchor.checked_offset(cell).and_then(|coord| self.index(coord));
            if let Some(index) = target {
                placed.cells[index] = Some(symbol);
            }
        }
        placed
    }

    fn positions(&self) -> Vec<Coord3> {
        let mut positions = Vec::with_capacity(self.cells.len());
        for layer in 0..self.size {
            let side = self.side(layer) as i32;
            for row in 0..side {
                for col in 0..side {
                    positions.push((layer as i32, row, col));
                }
            }
        }
        positions
    }

    fn cell(&self, coord: Coord3) -> Option<Cell> {
        self.index(coord).map(|index| self.cells[index])
    }
}

impl TryFrom<Vec<Vec<Vec<Cell>>>> for Pyramid {
    type Error = PuzzleError;

    fn try_from(layers: Vec<Vec<Vec<Cell>>>) -> Result<Self, Self::Error> {
        Self::from_layers(layers)
    }
}

impl From<Pyramid> for Vec<Vec<Vec<Cell>>> {
    fn from(pyramid: Pyramid) -> Self {
        pyramid.to_layers()
    }
}

impl fmt::Display for Pyramid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
