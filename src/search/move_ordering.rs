//! Move ordering.
//!
//! [`MoveOrderer`] is a stateful iterator over a generated move list,
//! yielding moves in priority order: the hash move first, then
//! captures by MVV-LVA (most valuable victim, least valuable
//! attacker), then quiet moves by descending history score. The
//! quiescence variant scores captures only. Ties break on the move's
//! integer encoding, so the order is fully deterministic.
//!
//! Moves are selection-sorted lazily: each `next()` swaps the best
//! remaining guess to the front, which is cheap when a cutoff ends the
//! iteration early.

use crate::board::Board;
use crate::move_types::Move;
use crate::piece_types::{PAWN, QUEEN};
use crate::search::history::HistoryTable;

type Guess = i64;

const HASH_MOVE_BONUS: Guess = Guess::MAX;
const CAPTURE_BONUS: Guess = 1 << 30;
const PROMOTION_BONUS: Guess = 1 << 29;

/// Victim/attacker weights for MVV-LVA (pawn..king). The king entry
/// only matters as an attacker, where it must rank last.
const EXCHANGE_VALUES: [i64; 6] = [100, 300, 310, 500, 900, 1000];

struct MoveGuess {
    move_data: Move,
    guess: Guess,
}

pub struct MoveOrderer {
    guesses: Vec<MoveGuess>,
    yielded: usize,
}

fn mvv_lva(board: &Board, m: Move) -> Guess {
    let victim = match board.get_piece(m.to) {
        Some((_, piece)) => piece,
        // Only en passant captures land on an empty square.
        None => PAWN,
    };
    let attacker = board
        .get_piece(m.from)
        .map_or(0, |(_, piece)| piece);
    EXCHANGE_VALUES[victim] * 16 - EXCHANGE_VALUES[attacker] / 100
}

fn is_capture(board: &Board, m: Move) -> bool {
    board.get_piece(m.to).is_some()
        || (board.en_passant() == Some(m.to as u8)
            && board.get_piece(m.from).is_some_and(|(_, p)| p == PAWN))
}

impl MoveOrderer {
    /// Ordering for the main search: hash move, captures, quiets.
    pub fn pv_search(
        board: &Board,
        moves: &[Move],
        hash_move: Move,
        history: &HistoryTable,
    ) -> MoveOrderer {
        let guesses = moves
            .iter()
            .map(|&m| {
                let guess = if m == hash_move && !m.is_null() {
                    HASH_MOVE_BONUS
                } else if is_capture(board, m) {
                    CAPTURE_BONUS + mvv_lva(board, m)
                } else if m.promotion == Some(QUEEN) {
                    PROMOTION_BONUS
                } else {
                    Guess::from(history.get_score(&m))
                };
                MoveGuess {
                    move_data: m,
                    guess,
                }
            })
            .collect();
        MoveOrderer { guesses, yielded: 0 }
    }

    /// Ordering for quiescence: MVV-LVA over the non-quiet list.
    pub fn q_search(board: &Board, moves: &[Move]) -> MoveOrderer {
        let guesses = moves
            .iter()
            .map(|&m| MoveGuess {
                move_data: m,
                guess: mvv_lva(board, m),
            })
            .collect();
        MoveOrderer { guesses, yielded: 0 }
    }

    /// The next move in priority order, or `None` when exhausted.
    pub fn next(&mut self) -> Option<Move> {
        if self.yielded >= self.guesses.len() {
            return None;
        }

        let mut best = self.yielded;
        for i in self.yielded + 1..self.guesses.len() {
            let challenger = &self.guesses[i];
            let leader = &self.guesses[best];
            if challenger.guess > leader.guess
                || (challenger.guess == leader.guess
                    && challenger.move_data.encode() < leader.move_data.encode())
            {
                best = i;
            }
        }
        self.guesses.swap(self.yielded, best);
        let m = self.guesses[self.yielded].move_data;
        self.yielded += 1;
        Some(m)
    }
}
