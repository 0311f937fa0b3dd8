//! Stack of positions for make/unmake traversal.
//!
//! Copy-make keeps every predecessor position alive, which makes
//! unmake a pop and gives repetition detection the whole line for
//! free. The stack owns the game history fed in by the host plus the
//! search's speculative moves on top.

use crate::board::Board;
use crate::move_types::Move;

#[derive(Clone)]
pub struct BoardStack {
    states: Vec<Board>,
}

impl BoardStack {
    pub fn new() -> BoardStack {
        BoardStack::with_board(Board::new())
    }

    pub fn with_board(board: Board) -> BoardStack {
        BoardStack {
            states: vec![board],
        }
    }

    pub fn new_from_fen(fen: &str) -> BoardStack {
        BoardStack::with_board(Board::new_from_fen(fen))
    }

    #[inline(always)]
    pub fn current_state(&self) -> &Board {
        self.states.last().expect("board stack is never empty")
    }

    pub fn make_move(&mut self, m: Move) {
        let next = self.current_state().apply_move_to_board(m);
        self.states.push(next);
    }

    pub fn undo_move(&mut self) {
        debug_assert!(self.states.len() > 1, "undo past the root position");
        self.states.pop();
    }

    pub fn make_null_move(&mut self) {
        let next = self.current_state().apply_null_move();
        self.states.push(next);
    }

    pub fn undo_null_move(&mut self) {
        debug_assert!(self.states.len() > 1, "undo past the root position");
        self.states.pop();
    }

    /// Replace the whole history with a single root position.
    pub fn reset_to(&mut self, board: Board) {
        self.states.clear();
        self.states.push(board);
    }

    /// Draw by repetition, the fifty-move rule, or insufficient
    /// material. A single prior occurrence of the current position
    /// counts as a repetition draw, which is the usual search-side
    /// shortcut.
    pub fn is_draw(&self) -> bool {
        let current = self.current_state();
        if current.halfmove_clock >= 100 {
            return true;
        }
        if current.insufficient_material() {
            return true;
        }

        // Only positions since the last irreversible move can repeat.
        let lookback = (current.halfmove_clock as usize).min(self.states.len() - 1);
        self.states[self.states.len() - 1 - lookback..self.states.len() - 1]
            .iter()
            .any(|prev| prev.zobrist_hash() == current.zobrist_hash())
    }
}

impl Default for BoardStack {
    fn default() -> Self {
        BoardStack::new()
    }
}
