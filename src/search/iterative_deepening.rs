//! Iterative-deepening driver and search reporting.
//!
//! Runs the PV search at increasing depths over a full window until
//! the depth cap or the clock runs out. Each completed iteration
//! refreshes the best root move from the transposition table; an
//! aborted iteration is simply discarded, so the move returned always
//! comes from the last fully searched depth.

use crate::boardstack::BoardStack;
use crate::move_types::{Move, NULL_MOVE};
use crate::search::alpha_beta::pv_search;
use crate::search::{MAX_MATE_SCORE, MAX_PLY, SearchContext, SearchInfo, mate_in};

/// Search `board` to at most `max_depth`, returning the best move of
/// the last completed iteration (null only if no legal move exists).
pub fn iterative_deepening(
    ctx: &mut SearchContext,
    board: &mut BoardStack,
    max_depth: u32,
) -> Move {
    let max_depth = max_depth.clamp(1, MAX_PLY as u32 - 1);
    let root_key = board.current_state().zobrist_hash();
    let mut best_move = NULL_MOVE;

    for depth in 1..=max_depth {
        pv_search(ctx, board, -MAX_MATE_SCORE, MAX_MATE_SCORE, depth, 0, false);

        if let Some(entry) = ctx.tt.get(root_key) {
            if !entry.best_move.is_null() {
                best_move = entry.best_move;
            }
        }

        if !ctx.is_time_left() {
            break;
        }
    }

    best_move
}

/// Walk the transposition table from the current position, collecting
/// the stored best moves as the principal variation. Every hash move
/// is validated against the position before being played, and the walk
/// is depth-bounded so a cyclic table cannot loop forever.
pub fn extract_pv(ctx: &mut SearchContext, board: &mut BoardStack, max_length: usize) -> Vec<Move> {
    let mut pv = Vec::new();

    loop {
        if pv.len() >= max_length {
            break;
        }
        let current = board.current_state();
        let Some(entry) = ctx.tt.get(current.zobrist_hash()) else {
            break;
        };
        let m = entry.best_move;
        if m.is_null() {
            break;
        }

        let mut moves = Vec::new();
        ctx.move_gen.pseudo_legal_moves_into(current, &mut moves);
        if !moves.contains(&m) || !current.apply_move_to_board(m).is_legal() {
            break;
        }

        pv.push(m);
        board.make_move(m);
    }

    for _ in 0..pv.len() {
        board.undo_move();
    }
    pv
}

/// Report a root score improvement through the host's info callback.
pub fn emit_info(ctx: &mut SearchContext, board: &mut BoardStack, depth: u32, score: i32) {
    if ctx.info.is_none() {
        return;
    }

    let elapsed_ms = ctx.elapsed_ms();
    let pv_length = ctx.sel_depth.max(1);
    let info = SearchInfo {
        depth,
        sel_depth: ctx.sel_depth,
        score_cp: score,
        mate_in: mate_in(score),
        nodes: ctx.nodes,
        nps: ctx.nodes * 1000 / (elapsed_ms + 1),
        elapsed_ms,
        hash_permille: ctx.tt.usage_permille(),
        pv: extract_pv(ctx, board, pv_length),
    };
    if let Some(callback) = ctx.info.as_mut() {
        callback(&info);
    }
}
