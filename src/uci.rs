//! UCI front-end.
//!
//! Parses GUI commands from stdin, drives the engine, and renders its
//! info callbacks as UCI `info` lines. Time management is decided
//! here: `go movetime`/`depth` pass straight through, and clock-based
//! `go` commands allocate a slice of the remaining time; the core only
//! ever sees a single wall-clock budget.

use crate::board::Board;
use crate::boardstack::BoardStack;
use crate::engine::Engine;
use crate::move_generation::MoveGen;
use crate::move_types::Move;
use crate::search::{MAX_PLY, SearchInfo};
use std::io::BufRead;

const DEFAULT_HASH_MB: usize = 64;

pub struct UCIEngine {
    engine: Engine,
    move_gen: MoveGen,
    board: BoardStack,
}

fn format_info(info: &SearchInfo) -> String {
    let mut line = format!(
        "info depth {} seldepth {} score cp {}",
        info.depth, info.sel_depth, info.score_cp
    );
    if let Some(mate) = info.mate_in {
        line.push_str(&format!(" mate {mate}"));
    }
    line.push_str(&format!(
        " nodes {} nps {} time {} hashfull {}",
        info.nodes, info.nps, info.elapsed_ms, info.hash_permille
    ));
    if !info.pv.is_empty() {
        line.push_str(" pv");
        for m in &info.pv {
            line.push_str(&format!(" {m}"));
        }
    }
    line
}

impl UCIEngine {
    pub fn new() -> UCIEngine {
        let mut engine = Engine::new(DEFAULT_HASH_MB);
        engine.set_info_handler(Box::new(|info| println!("{}", format_info(info))));
        UCIEngine {
            engine,
            move_gen: MoveGen::new(),
            board: BoardStack::new(),
        }
    }

    pub fn run(&mut self) {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if !self.handle_command(line.trim()) {
                break;
            }
        }
    }

    /// Handle one command; returns false on `quit`.
    pub fn handle_command(&mut self, line: &str) -> bool {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.first() {
            Some(&"uci") => {
                println!("id name Goshawk");
                println!("id author Goshawk developers");
                println!("option name Hash type spin default {DEFAULT_HASH_MB} min 1 max 4096");
                println!("uciok");
            }
            Some(&"isready") => println!("readyok"),
            Some(&"ucinewgame") => {
                self.engine.new_game();
                self.board = BoardStack::new();
            }
            Some(&"setoption") => self.handle_setoption(&tokens),
            Some(&"position") => self.handle_position(&tokens),
            Some(&"go") => self.handle_go(&tokens),
            Some(&"stop") => self.engine.stop(),
            Some(&"eval") => {
                let (score, phase) = self.engine.eval_debug(self.board.current_state());
                println!("evaluation: {score} phase: {phase:.3}");
            }
            Some(&"quit") => return false,
            _ => {}
        }
        true
    }

    fn handle_setoption(&mut self, tokens: &[&str]) {
        // setoption name <id> value <x>
        let name_pos = tokens.iter().position(|&t| t == "name");
        let value_pos = tokens.iter().position(|&t| t == "value");
        if let (Some(n), Some(v)) = (name_pos, value_pos) {
            if n + 1 > v {
                return;
            }
            let name = tokens[n + 1..v].join(" ");
            if name.eq_ignore_ascii_case("hash") {
                if let Some(megabytes) = tokens.get(v + 1).and_then(|t| t.parse().ok()) {
                    self.engine.set_hash(megabytes);
                }
            }
        }
    }

    fn handle_position(&mut self, tokens: &[&str]) {
        let moves_pos = tokens.iter().position(|&t| t == "moves");

        match tokens.get(1) {
            Some(&"startpos") => self.board = BoardStack::new(),
            Some(&"fen") => {
                let end = moves_pos.unwrap_or(tokens.len());
                let fen = tokens[2..end].join(" ");
                self.board = BoardStack::with_board(Board::new_from_fen(&fen));
            }
            _ => return,
        }

        if let Some(start) = moves_pos {
            for text in &tokens[start + 1..] {
                let Some(parsed) = Move::from_uci(text) else {
                    return;
                };
                // Match against legal moves so promotions and castling
                // land on generated move shapes.
                let legal = self
                    .move_gen
                    .legal_moves(self.board.current_state())
                    .into_iter()
                    .find(|m| *m == parsed);
                match legal {
                    Some(m) => self.board.make_move(m),
                    None => return,
                }
            }
        }
    }

    fn handle_go(&mut self, tokens: &[&str]) {
        let value_after = |key: &str| -> Option<u64> {
            tokens
                .iter()
                .position(|&t| t == key)
                .and_then(|i| tokens.get(i + 1))
                .and_then(|t| t.parse().ok())
        };

        let mut max_depth = MAX_PLY as u32 - 1;
        let mut max_time_ms = u64::MAX / 2;

        if let Some(depth) = value_after("depth") {
            max_depth = depth as u32;
            max_time_ms = u64::MAX / 2;
        }
        if let Some(movetime) = value_after("movetime") {
            max_time_ms = movetime;
        } else {
            let (time_key, inc_key) = if self.board.current_state().w_to_move {
                ("wtime", "winc")
            } else {
                ("btime", "binc")
            };
            if let Some(remaining) = value_after(time_key) {
                let increment = value_after(inc_key).unwrap_or(0);
                max_time_ms = (remaining / 25 + increment / 2).max(1);
            }
        }

        let best = self.engine.best_move(&mut self.board, max_depth, max_time_ms);
        if best.is_null() {
            println!("bestmove 0000");
        } else {
            println!("bestmove {best}");
        }
    }
}

impl Default for UCIEngine {
    fn default() -> Self {
        UCIEngine::new()
    }
}
