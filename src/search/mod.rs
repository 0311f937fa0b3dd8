//! Search: iterative-deepening principal-variation alpha-beta with a
//! quiescence tail, plus the shared search context and score
//! conventions.
//!
//! Scores are centipawns from the side to move. Mate scores are offset
//! from [`MAX_MATE_SCORE`] by the ply distance, so faster mates score
//! higher; anything above [`MIN_MATE_SCORE`] in magnitude is a mate.

pub mod alpha_beta;
pub mod history;
pub mod iterative_deepening;
pub mod move_ordering;
pub mod quiescence;
pub mod see;

pub use history::HistoryTable;
pub use see::see;

use crate::eval::Evaluator;
use crate::move_generation::MoveGen;
use crate::move_types::Move;
use crate::transposition::TranspositionTable;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Hard bound on search recursion depth and per-ply buffers.
pub const MAX_PLY: usize = 128;

/// Score of a mate delivered at the root.
pub const MAX_MATE_SCORE: i32 = 30_000;

/// Any score whose magnitude exceeds this is a mate score.
pub const MIN_MATE_SCORE: i32 = MAX_MATE_SCORE - 1_000;

/// Moves until mate encoded by `score`, or `None` for ordinary scores.
/// Negative values mean the side to move is being mated.
pub fn mate_in(score: i32) -> Option<i32> {
    if score.abs() > MIN_MATE_SCORE {
        let moves = (MAX_MATE_SCORE - score.abs() + 1) / 2;
        Some(if score > 0 { moves } else { -moves })
    } else {
        None
    }
}

/// One progress report per root alpha improvement, rendered into an
/// `info` line by the host.
pub struct SearchInfo {
    pub depth: u32,
    pub sel_depth: usize,
    pub score_cp: i32,
    pub mate_in: Option<i32>,
    pub nodes: u64,
    pub nps: u64,
    pub elapsed_ms: u64,
    pub hash_permille: u32,
    pub pv: Vec<Move>,
}

/// Everything one search invocation reads and writes, borrowed from
/// the engine so the search functions stay free of global state.
pub struct SearchContext<'a> {
    pub move_gen: &'a MoveGen,
    pub evaluator: &'a mut Evaluator,
    pub tt: &'a mut TranspositionTable,
    pub history: &'a mut HistoryTable,
    pub lmr: &'a alpha_beta::LmrTable,
    /// One reusable move buffer per ply.
    pub move_lists: &'a mut [Vec<Move>],
    pub nodes: u64,
    pub sel_depth: usize,
    pub start_time: Instant,
    pub max_time_ms: u64,
    pub stop: &'a AtomicBool,
    pub info: Option<&'a mut dyn FnMut(&SearchInfo)>,
}

impl SearchContext<'_> {
    pub fn elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }

    /// Cooperative time poll. One node of staleness on the stop flag
    /// is acceptable, so acquire ordering is all that is needed.
    pub fn is_time_left(&self) -> bool {
        self.elapsed_ms() + 1 < self.max_time_ms && !self.stop.load(Ordering::Acquire)
    }
}
