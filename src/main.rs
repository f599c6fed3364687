//! Polysolve
//!
//! Fills boards with polyomino and polycube pieces, and places queens on
//! chessboards. Solutions are printed as they are found and can be saved to
//! disk for later counting.

use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use polysolve::persistence::{self, PuzzleFile};
use polysolve::pieces::{pentominoes, pyramid_pieces};
use polysolve::worker::{self, SolveRequest, WorkerConfig};
use polysolve::{
    solve_n_queens, AnchorStrategy, Board, Grid, PuzzleError, Pyramid, QueenBoard, SearchMode,
    SolverConfig,
};

/// Solves exact-cover placement puzzles.
#[derive(Parser)]
#[command(name = "polysolve")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Place one queen per row and column with no two attacking.
    Queens {
        /// Board side length.
        #[arg(short, long, default_value_t = 8)]
        size: usize,
        /// Pre-placed queen as `row,col`; may be repeated.
        #[arg(short, long = "queen", value_parser = parse_square)]
        queens: Vec<(usize, usize)>,
        /// Count every completion instead of showing one.
        #[arg(long)]
        count: bool,
    },
    /// Fill a board with pieces, printing each solution.
    Solve {
        /// Puzzle definition (JSON).
        #[arg(required_unless_present = "preset", conflicts_with = "preset")]
        puzzle: Option<PathBuf>,
        /// Built-in puzzle to solve instead of a file.
        #[arg(short, long)]
        preset: Option<Preset>,
        /// Stop at the first solution.
        #[arg(long)]
        first: bool,
        #[arg(long, value_enum, default_value_t = AnchorStrategy::FirstEmpty)]
        strategy: AnchorStrategy,
        /// Stop after this many solutions.
        #[arg(short, long)]
        max: Option<usize>,
        /// Directory to write solutions.txt and solutions.json into.
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Show the number of saved solutions.
    Count {
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    #[value(name = "pentominoes-6x10")]
    Pentominoes6x10,
    #[value(name = "pentominoes-5x12")]
    Pentominoes5x12,
    #[value(name = "pentominoes-4x15")]
    Pentominoes4x15,
    #[value(name = "pentominoes-3x20")]
    Pentominoes3x20,
    Pyramid,
}

impl Preset {
    fn puzzle(self) -> PuzzleFile {
        let rectangle = |rows, cols| PuzzleFile::Grid {
            board: Grid::new(rows, cols),
            pieces: pentominoes(),
        };
        match self {
            Self::Pentominoes6x10 => rectangle(6, 10),
            Self::Pentominoes5x12 => rectangle(5, 12),
            Self::Pentominoes4x15 => rectangle(4, 15),
            Self::Pentominoes3x20 => rectangle(3, 20),
            Self::Pyramid => PuzzleFile::Pyramid {
                board: Pyramid::new(3),
                pieces: pyramid_pieces(),
            },
        }
    }
}

fn parse_square(text: &str) -> Result<(usize, usize), String> {
    let (row, col) = text
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{text}`"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid coordinate `{part}`: {e}"))
    };
    Ok((parse(row)?, parse(col)?))
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Queens {
            size,
            queens,
            count,
        } => queens_report(size, &queens, count).map(|report| print!("{report}")),
        Command::Solve {
            puzzle,
            preset,
            first,
            strategy,
            max,
            save,
        } => {
            let config = WorkerConfig {
                solver: SolverConfig {
                    mode: if first {
                        SearchMode::FirstSolution
                    } else {
                        SearchMode::AllSolutions
                    },
                    strategy,
                },
                max_solutions: max,
            };
            run_solve(puzzle.as_deref(), preset, config, save.as_deref())
        }
        Command::Count { dir } => {
            persistence::count(&dir).map(|count| println!("{count} solutions"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Solves or counts an N-Queens board and describes the result.
fn queens_report(
    size: usize,
    queens: &[(usize, usize)],
    count: bool,
) -> Result<String, PuzzleError> {
    let mut board = QueenBoard::with_queens(size, queens)?;
    let mut report = String::new();

    if count {
        // formatting into a String cannot fail
        let _ = writeln!(report, "{} solutions", board.count_solutions());
    } else if solve_n_queens(&mut board) {
        report.push_str(&board.to_string());
    } else {
        report.push_str("No solution\n");
    }
    Ok(report)
}

fn run_solve(
    path: Option<&Path>,
    preset: Option<Preset>,
    config: WorkerConfig,
    save: Option<&Path>,
) -> Result<(), PuzzleError> {
    let puzzle = match (path, preset) {
        (Some(path), _) => persistence::load_puzzle(path)?,
        (None, Some(preset)) => preset.puzzle(),
        // clap requires one of the two
        (None, None) => return Ok(()),
    };

    match puzzle {
        PuzzleFile::Grid { board, pieces } => stream(SolveRequest { board, pieces }, config, save),
        PuzzleFile::Pyramid { board, pieces } => {
            stream(SolveRequest { board, pieces }, config, save)
        }
    }
}

/// Prints solutions as the worker reports them, then the search summary.
fn stream<B>(
    request: SolveRequest<B, B::Coord>,
    config: WorkerConfig,
    save: Option<&Path>,
) -> Result<(), PuzzleError>
where
    B: Board + Send + Serialize + fmt::Display + 'static,
{
    let worker = worker::spawn(request, config);
    let mut kept = Vec::new();

    for (i, solution) in worker.solutions().enumerate() {
        println!("Solution {}:\n{solution}", i + 1);
        if save.is_some() {
            kept.push(solution);
        }
    }

    let summary = worker.join()?;
    println!(
        "Found {} solutions ({:?}, {} nodes)",
        summary.solutions, summary.outcome, summary.nodes
    );

    if let Some(dir) = save {
        persistence::save(dir, &kept)?;
        println!("Wrote {} solutions to {}", kept.len(), dir.display());
    }
    Ok(())
}
