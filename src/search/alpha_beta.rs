//! Principal-variation alpha-beta search.
//!
//! Fail-hard negamax: every return value is clipped into the caller's
//! [alpha, beta] window. The window also encodes the node type — a
//! one-centipawn window is a zero-window (expected-cut) probe, a wider
//! one is a PV node.
//!
//! Depth is unsigned on purpose: reductions may push it below zero,
//! and the resulting wraparound is caught by the `depth > MAX_PLY`
//! leaf test, which drops the node into quiescence exactly like the
//! zero-depth case.

use crate::board_utils::sq_ind_to_bit;
use crate::boardstack::BoardStack;
use crate::move_types::NULL_MOVE;
use crate::piece_types::{PAWN, flip_color};
use crate::search::iterative_deepening::emit_info;
use crate::search::move_ordering::MoveOrderer;
use crate::search::quiescence::q_search;
use crate::search::see::see;
use crate::search::{MAX_MATE_SCORE, MAX_PLY, SearchContext};
use crate::transposition::NodeType;

/// Late-move reduction table: `floor(1 + ln(depth) * ln(index) * 0.5)`
/// plies off ordinary late moves, zero at either index 0.
pub struct LmrTable {
    table: Box<[[u8; 256]; 256]>,
}

impl LmrTable {
    pub fn new() -> LmrTable {
        let mut table: Box<[[u8; 256]; 256]> =
            vec![[0u8; 256]; 256].into_boxed_slice().try_into().unwrap();
        for depth in 1..256 {
            for index in 1..256 {
                table[depth][index] =
                    (1.0 + (depth as f64).ln() * (index as f64).ln() * 0.5) as u8;
            }
        }
        LmrTable { table }
    }

    #[inline]
    pub fn get(&self, depth: u32, move_index: usize) -> u32 {
        u32::from(self.table[depth.min(255) as usize][move_index.min(255)])
    }
}

impl Default for LmrTable {
    fn default() -> Self {
        LmrTable::new()
    }
}

/// The main search. Returns a fail-hard score in `[alpha, beta]` for
/// the side to move. `_expected_cut` is advisory; the zero-window
/// shape of the recursion carries the same information today.
pub fn pv_search(
    ctx: &mut SearchContext,
    board: &mut BoardStack,
    mut alpha: i32,
    mut beta: i32,
    depth: u32,
    ply: usize,
    _expected_cut: bool,
) -> i32 {
    ctx.nodes += 1;

    // Cooperative abort: the throwaway score is discarded upstream.
    if !ctx.is_time_left() {
        return beta;
    }

    if ply > 0 && board.is_draw() {
        return 0;
    }

    if ply > ctx.sel_depth {
        ctx.sel_depth = ply;
    }

    // depth wrapped below zero through a reduction, or genuinely hit
    // the horizon: resolve tactics instead of evaluating mid-capture.
    if depth == 0 || depth > MAX_PLY as u32 || ply >= MAX_PLY - 1 {
        return q_search(ctx, board, alpha, beta, ply);
    }

    let zobrist = board.current_state().zobrist_hash();
    let is_pv = beta - alpha != 1;
    let original_alpha = alpha;
    let mut highest_score = -MAX_MATE_SCORE;
    let mut best_move = NULL_MOVE;
    let mut hash_move = NULL_MOVE;

    if let Some(entry) = ctx.tt.get(zobrist) {
        hash_move = entry.best_move;
        if u32::from(entry.depth) >= depth {
            let stored = i32::from(entry.score);
            match entry.node_type {
                NodeType::Pv => {
                    if stored >= alpha {
                        // Clipped so the fail-hard contract holds even
                        // when the stored score beats the window.
                        return stored.min(beta);
                    }
                }
                NodeType::Cut => {
                    if stored >= beta {
                        return beta;
                    }
                }
                NodeType::All => {
                    if stored <= alpha {
                        return alpha;
                    }
                }
            }
        }
    }

    let mut moves = std::mem::take(&mut ctx.move_lists[ply]);
    ctx.move_gen
        .pseudo_legal_moves_into(board.current_state(), &mut moves);

    let in_check = board.current_state().is_check();

    // Null-move pruning: hand the opponent a free move; if the
    // position still fails high at reduced depth, the real moves will
    // too. Unsound in zugzwang, so never at PV nodes or in check.
    if !is_pv && !in_check {
        board.make_null_move();
        let score = -pv_search(
            ctx,
            board,
            -beta,
            1 - beta,
            depth.wrapping_sub(3),
            ply + 1,
            false,
        );
        board.undo_null_move();
        if score >= beta {
            ctx.move_lists[ply] = moves;
            return beta;
        }
    }

    // Internal iterative deepening: a PV node without a hash move gets
    // a shallow pre-search just to seed the ordering.
    if depth >= 6 && is_pv && hash_move.is_null() {
        pv_search(ctx, board, alpha, beta, depth - 2, ply, false);
        if let Some(entry) = ctx.tt.get(zobrist) {
            hash_move = entry.best_move;
        }
    }

    // Mate-distance pruning: no mate from here can beat one already
    // found closer to the root.
    let mating_value = MAX_MATE_SCORE - ply as i32;
    if mating_value < beta {
        beta = mating_value;
        if alpha >= mating_value {
            ctx.move_lists[ply] = moves;
            return mating_value;
        }
    }
    let mated_value = -MAX_MATE_SCORE + ply as i32;
    if mated_value > alpha {
        alpha = mated_value;
        if beta <= mated_value {
            ctx.move_lists[ply] = moves;
            return mated_value;
        }
    }

    let mut orderer = MoveOrderer::pv_search(board.current_state(), &moves, hash_move, ctx.history);
    let mut legal_moves = 0usize;

    while let Some(m) = orderer.next() {
        let current = board.current_state();
        let next = current.apply_move_to_board(m);
        if !next.is_legal() {
            continue;
        }

        let gives_check = next.is_check();
        let mover_is_pawn = current.pieces[current.active_color()][PAWN] & sq_ind_to_bit(m.from) != 0;
        let is_capture = current.pieces_occ[flip_color(current.active_color())]
            & sq_ind_to_bit(m.to)
            != 0
            || (mover_is_pawn && current.en_passant() == Some(m.to as u8));

        // Checks that do not lose material get one extra ply.
        let extension = u32::from(gives_check && see(current, m.to, m.from) >= 0);

        let lmr = if is_pv || legal_moves == 0 || gives_check || depth < 2 || is_capture {
            0
        } else {
            ctx.lmr.get(depth, legal_moves)
        };

        board.make_move(m);

        let score = if legal_moves == 0 && is_pv {
            -pv_search(ctx, board, -beta, -alpha, depth - 1 + extension, ply + 1, false)
        } else {
            let mut score = -pv_search(
                ctx,
                board,
                -alpha - 1,
                -alpha,
                (depth - 1 + extension).wrapping_sub(lmr),
                ply + 1,
                false,
            );
            if lmr > 0 && score > alpha {
                // The reduced probe beat alpha: verify at full depth.
                score = -pv_search(
                    ctx,
                    board,
                    -alpha - 1,
                    -alpha,
                    depth - 1 + extension,
                    ply + 1,
                    false,
                );
            }
            if score > alpha && score < beta {
                score = -pv_search(
                    ctx,
                    board,
                    -beta,
                    -alpha,
                    depth - 1 + extension,
                    ply + 1,
                    false,
                );
            }
            score
        };

        board.undo_move();

        if score >= beta {
            ctx.tt.put(zobrist, beta, m, NodeType::Cut, depth);
            ctx.history.update(&m, depth);
            ctx.move_lists[ply] = moves;
            return beta;
        }

        if score > highest_score {
            highest_score = score;
            best_move = m;
        }
        if score > alpha {
            if ply == 0 {
                // Seed the root entry before reporting so the info
                // line's PV walk finds the new best move.
                ctx.tt.put(zobrist, alpha, best_move, NodeType::Pv, depth);
                emit_info(ctx, board, depth, score);
            }
            alpha = score;
            best_move = m;
        } else {
            ctx.history.penalize(&m, depth);
        }

        legal_moves += 1;
    }

    if legal_moves == 0 {
        ctx.move_lists[ply] = moves;
        return if in_check {
            -MAX_MATE_SCORE + ply as i32
        } else {
            0
        };
    }

    if alpha > original_alpha {
        ctx.tt.put(zobrist, alpha, best_move, NodeType::Pv, depth);
    } else {
        ctx.tt
            .put(zobrist, highest_score, best_move, NodeType::All, depth);
    }

    ctx.move_lists[ply] = moves;
    alpha
}
