//! Shared test utilities for the Goshawk test suite.

use goshawk::board::Board;
use goshawk::boardstack::BoardStack;
use goshawk::engine::Engine;
use goshawk::eval::Evaluator;
use goshawk::move_generation::MoveGen;
use goshawk::move_types::Move;
use goshawk::search::alpha_beta::{LmrTable, pv_search};
use goshawk::search::{HistoryTable, MAX_PLY, SearchContext};
use goshawk::transposition::TranspositionTable;
use std::collections::HashSet;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

pub fn board_from_fen(fen: &str) -> Board {
    Board::new_from_fen(fen)
}

/// All legal moves as a set for containment checks.
pub fn legal_moves_set(board: &Board, move_gen: &MoveGen) -> HashSet<Move> {
    move_gen.legal_moves(board).into_iter().collect()
}

/// Everything a direct `pv_search` call needs, owned in one place.
pub struct SearchHarness {
    pub move_gen: MoveGen,
    pub evaluator: Evaluator,
    pub tt: TranspositionTable,
    pub history: HistoryTable,
    pub lmr: LmrTable,
    pub move_lists: Vec<Vec<Move>>,
    pub stop: AtomicBool,
}

impl SearchHarness {
    pub fn new() -> SearchHarness {
        SearchHarness {
            move_gen: MoveGen::new(),
            evaluator: Evaluator::new(),
            tt: TranspositionTable::new(8),
            history: HistoryTable::new(),
            lmr: LmrTable::new(),
            move_lists: vec![Vec::new(); MAX_PLY],
            stop: AtomicBool::new(false),
        }
    }

    /// Run a search over `[alpha, beta]` and return (score, root move
    /// from the transposition table).
    pub fn search(
        &mut self,
        board: &mut BoardStack,
        alpha: i32,
        beta: i32,
        depth: u32,
    ) -> (i32, Move) {
        let root_key = board.current_state().zobrist_hash();
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
            max_time_ms: 600_000,
            stop: &self.stop,
            info: None,
        };
        let score = pv_search(&mut ctx, board, alpha, beta, depth, 0, false);
        let best = ctx
            .tt
            .get(root_key)
            .map(|entry| entry.best_move)
            .unwrap_or(Move::null());
        (score, best)
    }
}

/// An engine with a small hash, ready to search.
pub fn engine() -> Engine {
    Engine::new(8)
}

/// Standard test positions with known properties.
pub mod positions {
    pub const STARTING: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    pub const KINGS_ONLY: &str = "8/8/8/8/8/8/8/4K2k w - - 0 1";
    pub const KING_AND_PAWN: &str = "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1";
    pub const OPPOSITION_DRAW: &str = "8/8/8/3k4/3P4/3K4/8/8 w - - 0 1";
    pub const OPEN_GAME: &str =
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
    pub const BACK_RANK_MATE_IN_1: &str = "6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1";
    pub const STALEMATE: &str = "k7/1R6/K7/8/8/8/8/8 b - - 0 1";
    pub const EN_PASSANT: &str = "8/8/8/pP6/8/8/8/K6k w - a6 0 1";
    pub const CASTLING_BOTH: &str = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1";
    pub const PROMOTION: &str = "8/P7/8/8/8/8/8/K6k w - - 0 1";
    pub const KIWIPETE: &str =
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
}

/// Mirror a FEN vertically and swap colors. Evaluation must negate
/// under this transformation.
pub fn mirror_fen(fen: &str) -> String {
    let parts: Vec<&str> = fen.split_whitespace().collect();

    let swapped_case = |c: char| -> char {
        if c.is_ascii_uppercase() {
            c.to_ascii_lowercase()
        } else if c.is_ascii_lowercase() {
            c.to_ascii_uppercase()
        } else {
            c
        }
    };

    let board: Vec<String> = parts[0]
        .split('/')
        .rev()
        .map(|rank| rank.chars().map(swapped_case).collect())
        .collect();

    let stm = if parts[1] == "w" { "b" } else { "w" };

    let castling: String = if parts[2] == "-" {
        "-".to_string()
    } else {
        // Keep KQkq ordering after swapping colors.
        let swapped: String = parts[2].chars().map(swapped_case).collect();
        let mut ordered = String::new();
        for c in ['K', 'Q', 'k', 'q'] {
            if swapped.contains(c) {
                ordered.push(c);
            }
        }
        ordered
    };

    let en_passant = if parts[3] == "-" {
        "-".to_string()
    } else {
        let file = parts[3].chars().next().unwrap();
        let rank = parts[3].chars().nth(1).unwrap().to_digit(10).unwrap();
        format!("{file}{}", 9 - rank)
    };

    let halfmove = parts.get(4).copied().unwrap_or("0");
    let fullmove = parts.get(5).copied().unwrap_or("1");
    format!(
        "{} {stm} {castling} {en_passant} {halfmove} {fullmove}",
        board.join("/")
    )
}
