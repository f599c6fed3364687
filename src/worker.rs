//! Runs a placement search on a background thread.
//!
//! The caller hands over a board and its pieces once, then reads
//! [`WorkerMessage`]s from a channel: one `Solution` per board found, then a
//! single `Complete`. The search polls a shared cancellation flag on every
//! recursive call, so [`SolverWorker::cancel`] takes effect promptly.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::PuzzleError;
use crate::geometry::{Coord2, Coord3};
use crate::grid::Grid;
use crate::pieces::Piece;
use crate::pyramid::Pyramid;
use crate::solver::{SearchOutcome, SearchSummary, Solver, SolverConfig};

/// Plain-data input for one solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest<B, C> {
    pub board: B,
    pub pieces: Vec<Piece<C>>,
}

pub type GridRequest = SolveRequest<Grid, Coord2>;
pub type PyramidRequest = SolveRequest<Pyramid, Coord3>;

/// Messages sent back from the worker thread.
///
/// Serializes as `{"type": "solution", "data": board}` and
/// `{"type": "complete"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum WorkerMessage<B> {
    Solution(B),
    Complete,
}

/// Search configuration plus the caller's cap on reported solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkerConfig {
    #[serde(default)]
    pub solver: SolverConfig,
    /// Stop after this many solutions have been sent.
    #[serde(default)]
    pub max_solutions: Option<usize>,
}

/// Handle to a search running on its own thread.
#[derive(Debug)]
pub struct SolverWorker<B> {
    messages: Receiver<WorkerMessage<B>>,
    cancel: Arc<AtomicBool>,
    handle: JoinHandle<Result<SearchSummary, PuzzleError>>,
}

/// Starts solving `request` on a new thread.
pub fn spawn<B>(request: SolveRequest<B, B::Coord>, config: WorkerConfig) -> SolverWorker<B>
where
    B: Board + Send + 'static,
{
    let (sender, messages) = mpsc::channel();
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    let handle = thread::spawn(move || {
        let result = run(&request, config, flag, &sender);
        // receivers stop on `Complete`, which is sent even after an error;
        // a dropped receiver is not an error here
        let _ = sender.send(WorkerMessage::Complete);
        result
    });

    SolverWorker {
        messages,
        cancel,
        handle,
    }
}

fn run<B: Board>(
    request: &SolveRequest<B, B::Coord>,
    config: WorkerConfig,
    cancel: Arc<AtomicBool>,
    sender: &Sender<WorkerMessage<B>>,
) -> Result<SearchSummary, PuzzleError> {
    let solver = Solver::new(&request.pieces, config.solver)?.with_cancel_flag(cancel);
    let limit_reached = |sent: usize| config.max_solutions.is_some_and(|max| sent >= max);

    let mut sent = 0;
    let summary = solver.run(&request.board, &mut |solution: &B| {
        if limit_reached(sent) {
            return ControlFlow::Break(());
        }
        if sender.send(WorkerMessage::Solution(solution.clone())).is_err() {
            // nobody is listening any more
            return ControlFlow::Break(());
        }
        sent += 1;
        if limit_reached(sent) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    match summary.outcome {
        SearchOutcome::Cancelled => warn!(
            "search cancelled after {} solutions, {} nodes",
            sent, summary.nodes
        ),
        _ => info!(
            "search finished ({:?}): {} solutions sent, {} nodes",
            summary.outcome, sent, summary.nodes
        ),
    }
    Ok(summary)
}

impl<B> SolverWorker<B> {
    /// Blocks for the next message; `None` once the worker has gone away.
    pub fn recv(&self) -> Option<WorkerMessage<B>> {
        self.messages.recv().ok()
    }

    /// The next message if one is ready.
    pub fn try_recv(&self) -> Option<WorkerMessage<B>> {
        match self.messages.try_recv() {
            Ok(message) => Some(message),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Blocking iterator over solutions, ending at `Complete`.
    pub fn solutions(&self) -> impl Iterator<Item = B> + '_ {
        self.messages.iter().map_while(|message| match message {
            WorkerMessage::Solution(board) => Some(board),
            WorkerMessage::Complete => None,
        })
    }

    /// Asks the search to stop at its next recursive call.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    /// Waits for the thread to finish and returns its summary.
    pub fn join(self) -> Result<SearchSummary, PuzzleError> {
        self.handle
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
    }
}
