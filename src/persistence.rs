//! File I/O for puzzle definitions and found solutions.
//!
//! A puzzle file is JSON tagged by board kind:
//!
//! ```json
//! {"kind": "grid", "board": [[null, null]], "pieces": [{"symbol": "D", "coords": [[0, 0], [0, 1]]}]}
//! ```
//!
//! Solutions are written to a directory as `solutions.txt` (rendered boards
//! for reading) and `solutions.json` (an array of boards for loading back).

use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;
use crate::grid::Grid;
use crate::pieces::{Piece2, Piece3};
use crate::pyramid::Pyramid;

pub const SOLUTIONS_JSON: &str = "solutions.json";
pub const SOLUTIONS_TXT: &str = "solutions.txt";

/// A puzzle definition: a starting board plus the pieces to place on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PuzzleFile {
    Grid { board: Grid, pieces: Vec<Piece2> },
    Pyramid { board: Pyramid, pieces: Vec<Piece3> },
}

impl PuzzleFile {
    pub fn piece_count(&self) -> usize {
        match self {
            Self::Grid { pieces, .. } => pieces.len(),
            Self::Pyramid { pieces, .. } => pieces.len(),
        }
    }
}

/// Reads a puzzle definition from a JSON file.
pub fn load_puzzle(path: impl AsRef<Path>) -> Result<PuzzleFile, PuzzleError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Writes a puzzle definition as pretty-printed JSON.
pub fn save_puzzle(path: impl AsRef<Path>, puzzle: &PuzzleFile) -> Result<(), PuzzleError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, puzzle)?;
    writer.flush()?;
    Ok(())
}

/// Saves solutions to both the text and JSON files under `dir`.
pub fn save<B>(dir: impl AsRef<Path>, solutions: &[B]) -> Result<(), PuzzleError>
where
    B: Serialize + fmt::Display,
{
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    save_text(&dir.join(SOLUTIONS_TXT), solutions)?;
    save_json(&dir.join(SOLUTIONS_JSON), solutions)?;
    Ok(())
}

fn save_text<B: fmt::Display>(path: &Path, solutions: &[B]) -> Result<(), PuzzleError> {
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "Found {} solutions:\n", solutions.len())?;
    for (i, solution) in solutions.iter().enumerate() {
        writeln!(file, "Solution {}:", i + 1)?;
        write!(file, "{solution}")?;
        writeln!(file)?;
    }
    file.flush()?;
    Ok(())
}

fn save_json<B: Serialize>(path: &Path, solutions: &[B]) -> Result<(), PuzzleError> {
    let mut file = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut file, solutions)?;
    file.flush()?;
    Ok(())
}

/// Loads every saved solution from `dir`.
pub fn load_all<B: DeserializeOwned>(dir: impl AsRef<Path>) -> Result<Vec<B>, PuzzleError> {
    let reader = BufReader::new(File::open(dir.as_ref().join(SOLUTIONS_JSON))?);
    Ok(serde_json::from_reader(reader)?)
}

/// Counts saved solutions without building the boards.
pub fn count(dir: impl AsRef<Path>) -> Result<usize, PuzzleError> {
    let reader = BufReader::new(File::open(dir.as_ref().join(SOLUTIONS_JSON))?);
    let entries: Vec<IgnoredAny> = serde_json::from_reader(reader)?;
    Ok(entries.len())
}
