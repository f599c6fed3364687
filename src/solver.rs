//! Backtracking placement search.
//!
//! One engine drives every [`Board`] implementation:
//! - boards are copied on placement, so abandoning a branch is dropping a board
//! - used pieces are a `u64` bitmask passed by value down the recursion
//! - orientations are computed once per distinct shape through an
//!   [`OrientationCache`] owned by the solver
//! - solutions stream into a [`SolutionSink`] as soon as they are found
//!
//! With the default [`AnchorStrategy::FirstEmpty`], every attempted placement
//! covers the first empty cell in scan order with its own scan-minimum cell,
//! so each tiling is reached exactly once.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, trace};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::PuzzleError;
use crate::geometry::{Coordinate, Orientation, OrientationCache};
use crate::grid::Grid;
use crate::pieces::{Piece, Piece2, Piece3};
use crate::pyramid::Pyramid;

/// Largest piece set the used-piece bitmask can track.
pub const MAX_PIECES: usize = 64;

/// Whether the search halts at the first solution or enumerates them all.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    FirstSolution,
    #[default]
    AllSolutions,
}

/// Where orientations are anchored while searching.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorStrategy {
    /// Cover the first empty cell with each unused piece in turn.
    #[default]
    FirstEmpty,
    /// Place the first unused piece at every board cell, far more dead
    /// branches. Gives the same solutions as `FirstEmpty` only when the pieces
    /// cover the board exactly; when they cover fewer cells, this also
    /// reports placements that leave earlier cells empty.
    EveryCell,
}

/// Caller-level search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default)]
    pub mode: SearchMode,
    #[serde(default)]
    pub strategy: AnchorStrategy,
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchOutcome {
    /// Every branch was explored.
    Exhausted,
    /// First-solution mode found its solution, or the sink asked to stop.
    Stopped,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Counters reported when a search returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSummary {
    pub solutions: usize,
    /// Recursive calls made, including the root.
    pub nodes: u64,
    pub outcome: SearchOutcome,
}

/// Receives complete boards as the search finds them.
///
/// Returning `ControlFlow::Break` stops the search.
pub trait SolutionSink<B> {
    fn accept(&mut self, board: &B) -> ControlFlow<()>;
}

impl<B, F> SolutionSink<B> for F
where
    F: FnMut(&B) -> ControlFlow<()>,
{
    fn accept(&mut self, board: &B) -> ControlFlow<()> {
        self(board)
    }
}

/// A piece with its orientations resolved.
#[derive(Debug)]
struct PreparedPiece<C> {
    symbol: char,
    orientations: Arc<[Orientation<C>]>,
}

/// A reusable search over a fixed piece set.
#[derive(Debug)]
pub struct Solver<C> {
    pieces: Vec<PreparedPiece<C>>,
    config: SolverConfig,
    cancel: Option<Arc<AtomicBool>>,
}

impl<C: Coordinate> Solver<C> {
    /// Validates the piece set and resolves every piece's orientations.
    pub fn new(pieces: &[Piece<C>], config: SolverConfig) -> Result<Self, PuzzleError> {
        if pieces.len() > MAX_PIECES {
            return Err(PuzzleError::TooManyPieces(pieces.len()));
        }

        let mut cache = OrientationCache::new();
        let mut symbols = FxHashSet::default();
        let prepared = pieces
            .iter()
            .map(|piece| {
                if piece.coords.is_empty() {
                    return Err(PuzzleError::EmptyPiece(piece.symbol));
                }
                if !symbols.insert(piece.symbol) {
                    return Err(PuzzleError::DuplicateSymbol(piece.symbol));
                }
                Ok(PreparedPiece {
                    symbol: piece.symbol,
                    orientations: cache.get(&piece.coords),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "prepared {} pieces ({} distinct shapes, {} orientations), {:?}",
            prepared.len(),
            cache.len(),
            prepared.iter().map(|p| p.orientations.len()).sum::<usize>(),
            config
        );

        Ok(Self {
            pieces: prepared,
            config,
            cancel: None,
        })
    }

    /// Checks `flag` at every recursive call and abandons the search once it
    /// is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// Number of orientations of the piece at `index`.
    pub fn orientation_count(&self, index: usize) -> Option<usize> {
        self.pieces.get(index).map(|p| p.orientations.len())
    }

    /// Runs the search from `board`, writing each solution to `sink`.
    pub fn run<B, S>(&self, board: &B, sink: &mut S) -> SearchSummary
    where
        B: Board<Coord = C>,
        S: SolutionSink<B>,
    {
        let mut search = Search {
            pieces: &self.pieces,
            mode: self.config.mode,
            cancel: self.cancel.as_deref(),
            sink,
            solutions: 0,
            nodes: 0,
        };

        let all_unused = match self.pieces.len() {
            MAX_PIECES => u64::MAX,
            n => (1u64 << n) - 1,
        };

        let flow = match self.config.strategy {
            AnchorStrategy::FirstEmpty => search.cover_first_empty(board, all_unused),
            AnchorStrategy::EveryCell => {
                search.place_everywhere(board, all_unused, &board.positions())
            }
        };

        let outcome = match flow {
            ControlFlow::Continue(()) => SearchOutcome::Exhausted,
            ControlFlow::Break(Halt::Stopped) => SearchOutcome::Stopped,
            ControlFlow::Break(Halt::Cancelled) => SearchOutcome::Cancelled,
        };
        debug!(
            "search {:?}: {} solutions, {} nodes",
            outcome, search.solutions, search.nodes
        );

        SearchSummary {
            solutions: search.solutions,
            nodes: search.nodes,
            outcome,
        }
    }
}

/// Why the recursion is unwinding early.
#[derive(Debug, Clone, Copy)]
enum Halt {
    Stopped,
    Cancelled,
}

/// State of one running search.
struct Search<'a, B: Board, S> {
    pieces: &'a [PreparedPiece<B::Coord>],
    mode: SearchMode,
    cancel: Option<&'a AtomicBool>,
    sink: &'a mut S,
    solutions: usize,
    nodes: u64,
}

impl<B: Board, S: SolutionSink<B>> Search<'_, B, S> {
    fn enter(&mut self) -> ControlFlow<Halt> {
        if self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return ControlFlow::Break(Halt::Cancelled);
        }
        self.nodes += 1;
        ControlFlow::Continue(())
    }

    fn emit(&mut self, board: &B) -> ControlFlow<Halt> {
        self.solutions += 1;
        trace!("solution {} after {} nodes", self.solutions, self.nodes);
        if self.sink.accept(board).is_break() || self.mode == SearchMode::FirstSolution {
            return ControlFlow::Break(Halt::Stopped);
        }
        ControlFlow::Continue(())
    }

    fn cover_first_empty(&mut self, board: &B, unused: u64) -> ControlFlow<Halt> {
        self.enter()?;
        if unused == 0 {
            return self.emit(board);
        }
        // pieces remain but the board is full: dead end
        let Some(target) = board.first_empty() else {
            return ControlFlow::Continue(());
        };

        let pieces = self.pieces;
        for index in set_bits(unused) {
            let piece = &pieces[index];
            for orientation in piece.orientations.iter() {
                let Some(&lead) = orientation.first() else {
                    continue;
                };
                let anchor = target.relative_to(lead);
                if board.can_place(orientation, anchor) {
                    let placed = board.place(piece.symbol, orientation, anchor);
                    self.cover_first_empty(&placed, unused & !(1 << index))?;
                }
            }
        }
        ControlFlow::Continue(())
    }

    fn place_everywhere(
        &mut self,
        board: &B,
        unused: u64,
        positions: &[B::Coord],
    ) -> ControlFlow<Halt> {
        self.enter()?;
        if unused == 0 {
            return self.emit(board);
        }

        // fixing the piece order keeps each arrangement from being reached
        // once per permutation of the pieces
        let index = unused.trailing_zeros() as usize;
        let pieces = self.pieces;
        let piece = &pieces[index];
        for orientation in piece.orientations.iter() {
            for &anchor in positions {
                if board.can_place(orientation, anchor) {
                    let placed = board.place(piece.symbol, orientation, anchor);
                    self.place_everywhere(&placed, unused & !(1 << index), positions)?;
                }
            }
        }
        ControlFlow::Continue(())
    }
}

/// Indices of the set bits of `mask`, lowest first.
fn set_bits(mut mask: u64) -> impl Iterator<Item = usize> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let index = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        Some(index)
    })
}

/// Enumerates every solution of `board` with `pieces` into `sink`.
pub fn enumerate<B, S>(
    board: &B,
    pieces: &[Piece<B::Coord>],
    mut sink: S,
) -> Result<SearchSummary, PuzzleError>
where
    B: Board,
    S: SolutionSink<B>,
{
    let solver = Solver::new(pieces, SolverConfig::default())?;
    Ok(solver.run(board, &mut sink))
}

/// Collects every solution of `board` with `pieces`.
pub fn all_solutions<B: Board>(
    board: &B,
    pieces: &[Piece<B::Coord>],
) -> Result<Vec<B>, PuzzleError> {
    let mut solutions = Vec::new();
    enumerate(board, pieces, |solution: &B| {
        solutions.push(solution.clone());
        ControlFlow::Continue(())
    })?;
    Ok(solutions)
}

/// Finds one solution, stopping as soon as it is found.
pub fn solve_first<B: Board>(
    board: &B,
    pieces: &[Piece<B::Coord>],
) -> Result<Option<B>, PuzzleError> {
    let config = SolverConfig {
        mode: SearchMode::FirstSolution,
        ..SolverConfig::default()
    };
    let mut found = None;
    Solver::new(pieces, config)?.run(board, &mut |solution: &B| {
        found = Some(solution.clone());
        ControlFlow::Break(())
    });
    Ok(found)
}

/// Enumerates every tiling of a rectangular board, calling `on_solution` once
/// per tiling. Returns after the search space is exhausted.
pub fn solve_polyspheres<F>(
    board: &Grid,
    pieces: &[Piece2],
    mut on_solution: F,
) -> Result<SearchSummary, PuzzleError>
where
    F: FnMut(&Grid),
{
    enumerate(board, pieces, |solution: &Grid| {
        on_solution(solution);
        ControlFlow::Continue(())
    })
}

/// Enumerates every filling of a pyramid, calling `on_solution` once per
/// filling. Returns after the search space is exhausted.
pub fn solve_pyramid<F>(
    board: &Pyramid,
    pieces: &[Piece3],
    mut on_solution: F,
) -> Result<SearchSummary, PuzzleError>
where
    F: FnMut(&Pyramid),
{
    enumerate(board, pieces, |solution: &Pyramid| {
        on_solution(solution);
        ControlFlow::Continue(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Coord2;
    use crate::pieces::{pentominoes, pyramid_pieces};

    const DOMINO: &[Coord2] = &[(0, 0), (0, 1)];

    fn run_with<B: Board>(
        board: &B,
        pieces: &[Piece<B::Coord>],
        config: SolverConfig,
    ) -> (Vec<B>, SearchSummary) {
        let mut solutions = Vec::new();
        let summary = Solver::new(pieces, config)
            .unwrap()
            .run(board, &mut |solution: &B| {
                solutions.push(solution.clone());
                ControlFlow::Continue(())
            });
        (solutions, summary)
    }

    fn every_cell() -> SolverConfig {
        SolverConfig {
            strategy: AnchorStrategy::EveryCell,
            ..SolverConfig::default()
        }
    }

    #[test]
    fn test_empty_board_no_pieces_yields_board_itself() {
        let board = Grid::new(3, 2);
        let mut seen = Vec::new();
        let summary = solve_polyspheres(&board, &[], |b| seen.push(b.clone())).unwrap();
        assert_eq!(summary.solutions, 1);
        assert_eq!(summary.outcome, SearchOutcome::Exhausted);
        assert_eq!(seen, vec![board]);
    }

    #[test]
    fn test_empty_pyramid_no_pieces_yields_pyramid_itself() {
        let pyramid = Pyramid::new(3);
        assert_eq!(pyramid.cell_count(), 14);
        let mut seen = Vec::new();
        solve_pyramid(&pyramid, &[], |b| seen.push(b.clone())).unwrap();
        assert_eq!(seen, vec![pyramid]);
    }

    #[test]
    fn test_square_fills_square_board_once() {
        let square = Piece::new('S', [(0, 0), (1, 0), (0, 1), (1, 1)]);
        let solutions = all_solutions(&Grid::new(2, 2), &[square]).unwrap();
        assert_eq!(solutions, vec![Grid::parse("SS\nSS").unwrap()]);
    }

    #[test]
    fn test_domino_needs_rotation_to_fit_column() {
        let solutions = all_solutions(&Grid::new(2, 1), &[Piece::new('D', DOMINO)]).unwrap();
        assert_eq!(solutions, vec![Grid::parse("D\nD").unwrap()]);
    }

    #[test]
    fn test_labelled_dominoes_on_two_by_three() {
        let pieces = [
            Piece::new('A', DOMINO),
            Piece::new('B', DOMINO),
            Piece::new('C', DOMINO),
        ];
        let solutions = all_solutions(&Grid::new(2, 3), &pieces).unwrap();
        // 3 domino tilings of a 2x3 rectangle, 3! labellings each
        assert_eq!(solutions.len(), 18);
        let distinct: FxHashSet<&Grid> = solutions.iter().collect();
        assert_eq!(distinct.len(), 18);
        assert!(solutions.iter().all(Board::is_full));
    }

    #[test]
    fn test_solutions_never_overlap() {
        let tromino = [(0, 0), (1, 0), (1, 1)];
        let pieces = [Piece::new('A', tromino), Piece::new('B', tromino)];
        let solutions = all_solutions(&Grid::new(2, 3), &pieces).unwrap();
        assert_eq!(solutions.len(), 4);
        for solution in &solutions {
            for piece in &pieces {
                let covered = solution
                    .positions()
                    .into_iter()
                    .filter(|&p| solution.cell(p) == Some(Some(piece.symbol)))
                    .count();
                assert_eq!(covered, piece.cell_count());
            }
        }
    }

    #[test]
    fn test_prefilled_cells_are_respected() {
        let board = Grid::parse("X.\n..").unwrap();
        let tromino = Piece::new('L', [(0, 0), (1, 0), (1, 1)]);
        let solutions = all_solutions(&board, &[tromino]).unwrap();
        assert_eq!(solutions, vec![Grid::parse("XL\nLL").unwrap()]);
    }

    #[test]
    fn test_oversized_piece_yields_nothing() {
        let tromino = Piece::new('I', [(0, 0), (0, 1), (0, 2)]);
        assert!(all_solutions(&Grid::new(1, 2), &[tromino]).unwrap().is_empty());

        // translation is normalized away, but the extent is not
        let sprawling = Piece::new('F', [(0, 0), (40, 40)]);
        assert!(all_solutions(&Grid::new(1, 2), &[sprawling]).unwrap().is_empty());

        let shifted = Piece::new('D', [(40, 40), (40, 41)]);
        assert_eq!(all_solutions(&Grid::new(1, 2), &[shifted]).unwrap().len(), 1);
    }

    #[test]
    fn test_extreme_coordinates_yield_nothing() {
        let pieces = [
            Piece::new('A', [(0, 0)]),
            Piece::new('B', [(0, 0), (i32::MAX, 0)]),
        ];
        assert!(all_solutions(&Grid::new(2, 1), &pieces).unwrap().is_empty());

        let low = Piece::new('C', [(0, 0), (i32::MIN, 0)]);
        let solver = Solver::new(&[low], SolverConfig::default()).unwrap();
        assert_eq!(solver.orientation_count(0), Some(0));
        for config in [SolverConfig::default(), every_cell()] {
            let (solutions, summary) =
                run_with(&Grid::new(2, 1), &[Piece::new('C', [(0, 0), (i32::MIN, 0)])], config);
            assert!(solutions.is_empty());
            assert_eq!(summary.outcome, SearchOutcome::Exhausted);
        }

        let tower = Piece::new('T', [(0, 0, 0), (i32::MAX, i32::MIN, 0)]);
        assert!(all_solutions(&Pyramid::new(2), &[tower]).unwrap().is_empty());
    }

    #[test]
    fn test_running_out_of_pieces_still_reports_board() {
        let solutions = all_solutions(&Grid::new(1, 3), &[Piece::new('D', DOMINO)]).unwrap();
        assert_eq!(solutions, vec![Grid::parse("DD.").unwrap()]);
    }

    #[test]
    fn test_first_solution_mode_stops_early() {
        let pieces = [
            Piece::new('A', DOMINO),
            Piece::new('B', DOMINO),
            Piece::new('C', DOMINO),
        ];
        let config = SolverConfig {
            mode: SearchMode::FirstSolution,
            ..SolverConfig::default()
        };
        let (solutions, summary) = run_with(&Grid::new(2, 3), &pieces, config);
        assert_eq!(solutions.len(), 1);
        assert_eq!(summary.outcome, SearchOutcome::Stopped);

        let first = solve_first(&Grid::new(2, 3), &pieces).unwrap().unwrap();
        assert_eq!(first, solutions[0]);
        assert!(solve_first(&Grid::new(1, 3), &pieces[..1]).unwrap().is_some());
        assert!(solve_first(&Grid::new(1, 1), &pieces[..1]).unwrap().is_none());
    }

    #[test]
    fn test_sink_can_stop_enumeration() {
        let pieces = [Piece::new('A', DOMINO), Piece::new('B', DOMINO)];
        let mut count = 0;
        let summary = enumerate(&Grid::new(2, 2), &pieces, |_: &Grid| {
            count += 1;
            ControlFlow::Break(())
        })
        .unwrap();
        assert_eq!(count, 1);
        assert_eq!(summary.outcome, SearchOutcome::Stopped);
    }

    #[test]
    fn test_raised_cancel_flag_stops_before_searching() {
        let flag = Arc::new(AtomicBool::new(true));
        let solver = Solver::new(&pentominoes(), SolverConfig::default())
            .unwrap()
            .with_cancel_flag(flag);
        let summary = solver.run(&Grid::new(6, 10), &mut |_: &Grid| ControlFlow::Continue(()));
        assert_eq!(summary.outcome, SearchOutcome::Cancelled);
        assert_eq!(summary.solutions, 0);
        assert_eq!(summary.nodes, 0);
    }

    #[test]
    fn test_pentomino_rectangle_first_solution() {
        let solution = solve_first(&Grid::new(6, 10), &pentominoes())
            .unwrap()
            .unwrap();
        assert!(solution.is_full());
        for piece in pentominoes() {
            let covered = solution
                .positions()
                .into_iter()
                .filter(|&p| solution.cell(p) == Some(Some(piece.symbol)))
                .count();
            assert_eq!(covered, 5, "piece {} covers {covered} cells", piece.symbol);
        }
    }

    #[test]
    fn test_shared_shapes_share_orientations() {
        let pieces = [Piece::new('A', DOMINO), Piece::new('B', DOMINO)];
        let solver = Solver::new(&pieces, SolverConfig::default()).unwrap();
        assert!(Arc::ptr_eq(
            &solver.pieces[0].orientations,
            &solver.pieces[1].orientations
        ));
        assert_eq!(solver.orientation_count(0), Some(2));
        assert_eq!(solver.orientation_count(2), None);
    }

    #[test]
    fn test_strategies_agree_in_2d() {
        let pieces = [
            Piece::new('A', DOMINO),
            Piece::new('B', DOMINO),
            Piece::new('C', DOMINO),
        ];
        let board = Grid::new(2, 3);
        let (first_empty, _) = run_with(&board, &pieces, SolverConfig::default());
        let (every_cell, _) = run_with(&board, &pieces, every_cell());
        assert_eq!(sorted_grids(first_empty), sorted_grids(every_cell));
    }

    #[test]
    fn test_strategies_differ_on_partial_covers() {
        let domino = [Piece::new('D', DOMINO)];
        let board = Grid::new(1, 3);
        let (first_empty, _) = run_with(&board, &domino, SolverConfig::default());
        let (every_cell, _) = run_with(&board, &domino, every_cell());
        assert_eq!(sorted_grids(first_empty), vec!["DD.\n"]);
        assert_eq!(sorted_grids(every_cell), vec![".DD\n", "DD.\n"]);
    }

    fn sorted_grids(boards: Vec<Grid>) -> Vec<String> {
        let mut rendered: Vec<String> = boards.iter().map(Grid::render).collect();
        rendered.sort();
        rendered
    }

    fn sorted_pyramids(boards: Vec<Pyramid>) -> Vec<String> {
        let mut rendered: Vec<String> = boards.iter().map(Pyramid::render).collect();
        rendered.sort();
        rendered
    }

    #[test]
    fn test_single_cubes_fill_small_pyramid_in_every_order() {
        let cubes: Vec<Piece3> = "ABCDE".chars().map(|s| Piece::new(s, [(0, 0, 0)])).collect();
        let pyramid = Pyramid::new(2);
        let (first_empty, _) = run_with(&pyramid, &cubes, SolverConfig::default());
        let (every_cell, _) = run_with(&pyramid, &cubes, every_cell());
        assert_eq!(first_empty.len(), 120);
        assert_eq!(sorted_pyramids(first_empty), sorted_pyramids(every_cell));
    }

    #[test]
    fn test_square_and_cube_fill_size_two_pyramid() {
        let pieces = [
            Piece::new('A', [(0, 0, 0), (0, 0, 1), (0, 1, 0), (0, 1, 1)]),
            Piece::new('B', [(0, 0, 0)]),
        ];
        let solutions = all_solutions(&Pyramid::new(2), &pieces).unwrap();
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].layer(0), Some(&[Some('A'); 4][..]));
        assert_eq!(solutions[0].layer(1), Some(&[Some('B')][..]));
    }

    #[test]
    fn test_preset_pyramid_strategies_agree() {
        let pieces = pyramid_pieces();
        let pyramid = Pyramid::new(3);
        let (first_empty, summary) = run_with(&pyramid, &pieces, SolverConfig::default());
        let (every_cell, _) = run_with(&pyramid, &pieces, every_cell());

        assert_eq!(summary.solutions, 10);
        assert!(first_empty.iter().all(Board::is_full));
        assert_eq!(sorted_pyramids(first_empty), sorted_pyramids(every_cell));
    }

    #[test]
    fn test_invalid_piece_sets_are_rejected() {
        let empty = Piece::<Coord2>::new('E', Vec::new());
        assert!(matches!(
            Solver::new(&[empty], SolverConfig::default()),
            Err(PuzzleError::EmptyPiece('E'))
        ));

        let twins = [Piece::new('A', DOMINO), Piece::new('A', DOMINO)];
        assert!(matches!(
            Solver::new(&twins, SolverConfig::default()),
            Err(PuzzleError::DuplicateSymbol('A'))
        ));

        let crowd: Vec<Piece2> = (0..65u32)
            .filter_map(|i| char::from_u32(0x100 + i))
            .map(|s| Piece::new(s, [(0, 0)]))
            .collect();
        assert!(matches!(
            Solver::new(&crowd, SolverConfig::default()),
            Err(PuzzleError::TooManyPieces(65))
        ));
    }

    #[test]
    fn test_sixty_four_single_cells_fill_eight_by_eight() {
        let cells: Vec<Piece2> = (0..64u32)
            .filter_map(|i| char::from_u32(0x100 + i))
            .map(|s| Piece::new(s, [(0, 0)]))
            .collect();
        let solution = solve_first(&Grid::new(8, 8), &cells).unwrap().unwrap();
        assert!(solution.is_full());
        assert_eq!(solution.cell((7, 7)), Some(Some('\u{13f}')));
    }
}
