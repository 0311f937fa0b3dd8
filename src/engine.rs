//! The engine facade the UCI host talks to.
//!
//! [`Engine`] owns every piece of search state — transposition table,
//! history, evaluator, per-ply move buffers, the stop flag — and
//! exposes the handful of operations a front-end needs: construction
//! with a hash size, new-game reset, hash resize, a blocking
//! best-move search, an async stop request, and a one-shot evaluation
//! for debugging.
//!
//! The stop flag is the only field touched from outside a search:
//! another thread may flip it true through [`Engine::stop_handle`],
//! and the search observes it at its next time poll.

use crate::board::Board;
use crate::boardstack::BoardStack;
use crate::eval::Evaluator;
use crate::eval_constants::EvalWeights;
use crate::move_generation::MoveGen;
use crate::move_types::Move;
use crate::search::alpha_beta::LmrTable;
use crate::search::iterative_deepening::iterative_deepening;
use crate::search::{HistoryTable, MAX_PLY, SearchContext, SearchInfo};
use crate::transposition::TranspositionTable;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

pub type InfoCallback = Box<dyn FnMut(&SearchInfo)>;

pub struct Engine {
    move_gen: MoveGen,
    evaluator: Evaluator,
    tt: TranspositionTable,
    history: HistoryTable,
    lmr: LmrTable,
    move_lists: Vec<Vec<Move>>,
    stop: Arc<AtomicBool>,
    info: Option<InfoCallback>,
    nodes: u64,
}

impl Engine {
    /// One-time construction with the requested hash size.
    pub fn new(hash_mb: usize) -> Engine {
        Engine {
            move_gen: MoveGen::new(),
            evaluator: Evaluator::new(),
            tt: TranspositionTable::new(hash_mb),
            history: HistoryTable::new(),
            lmr: LmrTable::new(),
            move_lists: vec![Vec::new(); MAX_PLY],
            stop: Arc::new(AtomicBool::new(false)),
            info: None,
            nodes: 0,
        }
    }

    /// Swap in a different evaluation weight blob.
    pub fn set_weights(&mut self, weights: EvalWeights) {
        self.evaluator = Evaluator::with_weights(weights);
    }

    /// Register the host's info-line sink.
    pub fn set_info_handler(&mut self, callback: InfoCallback) {
        self.info = Some(callback);
    }

    /// Forget everything learned from previous games.
    pub fn new_game(&mut self) {
        self.tt.clear();
        self.history.clear();
    }

    /// Reallocate the transposition table. Must not be called while a
    /// search is running; the table is exclusively the search's during
    /// one.
    pub fn set_hash(&mut self, hash_mb: usize) {
        self.tt = TranspositionTable::new(hash_mb);
    }

    /// A handle the host may set from another thread to end the
    /// current search early.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Request early termination of the running search.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn hash_usage_permille(&self) -> u32 {
        self.tt.usage_permille()
    }

    /// Run the iterative-deepening search and block until it finishes.
    /// Returns the best move of the last completed iteration; a null
    /// move means the position has no legal moves.
    pub fn best_move(
        &mut self,
        board: &mut BoardStack,
        max_depth: u32,
        max_time_ms: u64,
    ) -> Move {
        self.stop.store(false, Ordering::Release);

        let mut ctx = SearchContext {
            move_gen: &self.move_gen,
            evaluator: &mut self.evaluator,
            tt: &mut self.tt,
            history: &mut self.history,
            lmr: &self.lmr,
            move_lists: &mut self.move_lists,
            nodes: 0,
            sel_depth: 0,
            start_time: Instant::now(),
            max_time_ms,
            stop: self.stop.as_ref(),
            info: self.info.as_mut().map(|f| f.as_mut() as &mut dyn FnMut(&SearchInfo)),
        };

        let best = iterative_deepening(&mut ctx, board, max_depth);
        self.nodes = ctx.nodes;
        best
    }

    /// One-shot static evaluation: `(white_pov_score, phase)`.
    pub fn eval_debug(&mut self, board: &Board) -> (i32, f32) {
        let score = self.evaluator.evaluate_full(board);
        (score, self.evaluator.phase)
    }
}
