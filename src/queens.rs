//! N-Queens validation and column-major backtracking.
//!
//! Boards may arrive with queens already placed by hand. The solver first
//! checks that those queens leave each other alone, then fills the remaining
//! columns left to right, skipping any column that already holds a queen.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;

/// Up-left, down-left, down-right and up-right.
const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (1, -1), (1, 1), (-1, 1)];

/// A square board where each cell either holds a queen or not.
///
/// Serializes as rows of `0`/`1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct QueenBoard {
    size: usize,
    queens: Vec<bool>,
}

impl QueenBoard {
    /// An empty `size x size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            queens: vec![false; size * size],
        }
    }

    /// A board with queens at the given `(row, col)` cells.
    pub fn with_queens(size: usize, queens: &[(usize, usize)]) -> Result<Self, PuzzleError> {
        let mut board = Self::new(size);
        for &(row, col) in queens {
            if row >= size || col >= size {
                return Err(PuzzleError::InvalidQueenBoard(format!(
                    "queen at ({row}, {col}) is off a {size}x{size} board"
                )));
            }
            board.set(row, col, true);
        }
        Ok(board)
    }

    /// Builds a board from rows of `0`/`1`.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, PuzzleError> {
        let size = rows.len();
        let mut queens = Vec::with_capacity(size * size);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(PuzzleError::InvalidQueenBoard(format!(
                    "row {row_index} has {} cells on a board with {size} rows",
                    row.len()
                )));
            }
            for value in row {
                match value {
                    0 => queens.push(false),
                    1 => queens.push(true),
                    other => {
                        return Err(PuzzleError::InvalidQueenBoard(format!(
                            "cell value {other} in row {row_index}"
                        )))
                    }
                }
            }
        }
        Ok(Self { size, queens })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether a queen sits at `(row, col)`. Off-board cells hold none.
    pub fn has_queen(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.queens[row * self.size + col]
    }

    /// Queen positions as `(row, col)`, row-major.
    pub fn queens(&self) -> Vec<(usize, usize)> {
        self.queens
            .iter()
            .enumerate()
            .filter(|&(_, &queen)| queen)
            .map(|(index, _)| (index / self.size, index % self.size))
            .collect()
    }

    pub fn queen_count(&self) -> usize {
        self.queens.iter().filter(|&&queen| queen).count()
    }

    /// Copies the board out as rows of `0`/`1`.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.queens
            .chunks(self.size)
            .map(|row| row.iter().map(|&queen| u8::from(queen)).collect())
            .collect()
    }

    /// Whether a queen at `(row, col)` would be attacked by any other queen.
    ///
    /// The cell itself is never compared against, so this answers the same
    /// whether or not `(row, col)` currently holds a queen.
    pub fn is_safe(&self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        let row_clear = (0..self.size).all(|c| c == col || !self.has_queen(row, c));
        let col_clear = (0..self.size).all(|r| r == row || !self.has_queen(r, col));
        row_clear
            && col_clear
            && DIAGONALS
                .iter()
                .all(|&step| !self.queen_along(row, col, step))
    }

    /// Whether every placed queen is safe from every other.
    pub fn is_valid(&self) -> bool {
        self.queens()
            .into_iter()
            .all(|(row, col)| self.is_safe(row, col))
    }

    /// Number of ways to complete this board, respecting pre-placed queens.
    pub fn count_solutions(&self) -> usize {
        if !self.is_valid() {
            return 0;
        }
        self.clone().count_from_column(0)
    }

    /// Walks from `(row, col)` in direction `step` until the edge, reporting
    /// whether a queen lies on the way.
    fn queen_along(&self, row: usize, col: usize, (dr, dc): (isize, isize)) -> bool {
        let mut r = row.checked_add_signed(dr);
        let mut c = col.checked_add_signed(dc);
        while let (Some(rr), Some(cc)) = (r, c) {
            if rr >= self.size || cc >= self.size {
                break;
            }
            if self.queens[rr * self.size + cc] {
                return true;
            }
            r = rr.checked_add_signed(dr);
            c = cc.checked_add_signed(dc);
        }
        false
    }

    fn set(&mut self, row: usize, col: usize, queen: bool) {
        self.queens[row * self.size + col] = queen;
    }

    fn column_has_queen(&self, col: usize) -> bool {
        (0..self.size).any(|row| self.has_queen(row, col))
    }

    fn place_from_column(&mut self, col: usize) -> bool {
        if col == self.size {
            return true;
        }
        if self.column_has_queen(col) {
            return self.place_from_column(col + 1);
        }
        for row in 0..self.size {
            if self.is_safe(row, col) {
                self.set(row, col, true);
                if self.place_from_column(col + 1) {
                    return true;
                }
                self.set(row, col, false);
            }
        }
        false
    }

    fn count_from_column(&mut self, col: usize) -> usize {
        if col == self.size {
            return 1;
        }
        if self.column_has_queen(col) {
            return self.count_from_column(col + 1);
        }
        let mut count = 0;
        for row in 0..self.size {
            if self.is_safe(row, col) {
                self.set(row, col, true);
                count += self.count_from_column(col + 1);
                self.set(row, col, false);
            }
        }
        count
    }
}

/// Completes `board` with one queen per column so that no two attack.
///
/// Returns `false` without searching if the pre-placed queens already attack
/// each other. On failure the board is left exactly as it was passed in.
pub fn solve_n_queens(board: &mut QueenBoard) -> bool {
    if !board.is_valid() {
        debug!("pre-placed queens attack each other: {:?}", board.queens());
        return false;
    }
    let solved = board.place_from_column(0);
    debug!("{}x{} queens solved: {solved}", board.size, board.size);
    solved
}

impl TryFrom<Vec<Vec<u8>>> for QueenBoard {
    type Error = PuzzleError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<QueenBoard> for Vec<Vec<u8>> {
    fn from(board: QueenBoard) -> Self {
        board.to_rows()
    }
}

impl fmt::Display for QueenBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                f.write_str(if self.has_queen(row, col) { "Q" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_solved(board: &QueenBoard) {
        assert_eq!(board.queen_count(), board.size());
        assert!(board.is_valid(), "queens attack each other:\n{board}");
    }

    #[test]
    fn test_preplaced_queen_is_kept() {
        let mut board = QueenBoard::with_queens(4, &[(0, 1)]).unwrap();
        assert!(solve_n_queens(&mut board));
        assert_solved(&board);
        assert!(board.has_queen(0, 1));
        assert_eq!(board.queens(), vec![(0, 1), (1, 3), (2, 0), (3, 2)]);
    }

    #[test]
    fn test_corner_queen_has_no_four_queens_completion() {
        let mut board = QueenBoard::with_queens(4, &[(0, 3)]).unwrap();
        let before = board.clone();
        assert!(board.is_valid());
        assert!(!solve_n_queens(&mut board));
        assert_eq!(board, before);
    }

    #[test]
    fn test_same_row_queens_are_invalid() {
        let mut board = QueenBoard::with_queens(4, &[(0, 2), (0, 3)]).unwrap();
        assert!(!board.is_valid());
        assert!(!solve_n_queens(&mut board));
    }

    #[test]
    fn test_preseeded_column_is_skipped() {
        let mut board = QueenBoard::with_queens(4, &[(2, 0)]).unwrap();
        assert!(solve_n_queens(&mut board));
        assert_eq!(board.queens(), vec![(0, 1), (1, 3), (2, 0), (3, 2)]);
    }

    #[test]
    fn test_empty_boards_solve() {
        for size in [1, 4, 5, 6, 8] {
            let mut board = QueenBoard::new(size);
            assert!(solve_n_queens(&mut board), "{size}x{size} should solve");
            assert_solved(&board);
        }
        for size in [2, 3] {
            assert!(!solve_n_queens(&mut QueenBoard::new(size)));
        }
    }

    #[test]
    fn test_solution_counts() {
        assert_eq!(QueenBoard::new(4).count_solutions(), 2);
        assert_eq!(QueenBoard::new(6).count_solutions(), 4);
        assert_eq!(QueenBoard::new(8).count_solutions(), 92);
        assert_eq!(
            QueenBoard::with_queens(4, &[(0, 1)]).unwrap().count_solutions(),
            1
        );
        assert_eq!(
            QueenBoard::with_queens(4, &[(0, 0), (1, 1)]).unwrap().count_solutions(),
            0
        );
    }

    #[test]
    fn test_is_safe_ignores_the_tested_cell() {
        let board = QueenBoard::with_queens(4, &[(1, 1)]).unwrap();
        assert!(board.is_safe(1, 1));
        assert!(!board.is_safe(1, 3));
        assert!(!board.is_safe(3, 1));
        assert!(!board.is_safe(3, 3));
        assert!(!board.is_safe(0, 2));
        assert!(!board.is_safe(2, 0));
        assert!(board.is_safe(0, 3));
        assert!(board.is_safe(3, 2));
        assert!(!board.is_safe(4, 0));
    }

    #[test]
    fn test_from_rows_validation() {
        let board = QueenBoard::from_rows(vec![vec![0, 1], vec![0, 0]]).unwrap();
        assert_eq!(board.queens(), vec![(0, 1)]);

        assert!(QueenBoard::from_rows(vec![vec![0, 1, 0], vec![0, 0, 0]]).is_err());
        assert!(QueenBoard::from_rows(vec![vec![0, 2], vec![0, 0]]).is_err());
        assert!(QueenBoard::with_queens(3, &[(3, 0)]).is_err());
    }

    #[test]
    fn test_serde_as_binary_rows() {
        let board = QueenBoard::with_queens(2, &[(1, 0)]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "[[0,0],[1,0]]");
        assert_eq!(serde_json::from_str::<QueenBoard>(&json).unwrap(), board);
        assert!(serde_json::from_str::<QueenBoard>("[[0,3],[1,0]]").is_err());
    }

    #[test]
    fn test_display() {
        let mut board = QueenBoard::new(4);
        solve_n_queens(&mut board);
        insta::assert_snapshot!(board.to_string(), @r"
        ..Q.
        Q...
        ...Q
        .Q..
        ");
    }

    fn mirrored(board: &QueenBoard, flip_rows: bool, flip_cols: bool) -> QueenBoard {
        let n = board.size();
        let queens: Vec<(usize, usize)> = board
            .queens()
            .into_iter()
            .map(|(r, c)| {
                (
                    if flip_rows { n - 1 - r } else { r },
                    if flip_cols { n - 1 - c } else { c },
                )
            })
            .collect();
        QueenBoard::with_queens(n, &queens).unwrap()
    }

    proptest! {
        #[test]
        fn prop_is_safe_mirror_symmetric(
            (n, queens, row, col) in (1usize..9).prop_flat_map(|n| (
                Just(n),
                prop::collection::vec((0..n, 0..n), 0..6),
                0..n,
                0..n,
            ))
        ) {
            let board = QueenBoard::with_queens(n, &queens).unwrap();
            let safe = board.is_safe(row, col);
            prop_assert_eq!(mirrored(&board, false, true).is_safe(row, n - 1 - col), safe);
            prop_assert_eq!(mirrored(&board, true, false).is_safe(n - 1 - row, col), safe);
        }
    }
}
