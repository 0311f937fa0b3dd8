//! Pseudo-legal move generation.
//!
//! Moves are generated into caller-supplied buffers so the search can
//! reuse one list per ply. Generation is pseudo-legal: castling checks
//! the transit squares, but ordinary moves may leave the king in check
//! and are filtered by applying them and asking `Board::is_legal`.
//!
//! Non-quiet generation produces exactly the quiescence move set:
//! captures (including en passant) and promotions. Checking moves are
//! not considered non-quiet.

use crate::attacks::{
    BLACK_PAWN_ATTACKS, WHITE_PAWN_ATTACKS, bishop_attacks, king_attacks, knight_attacks,
    pawn_attacks, queen_attacks, rook_attacks,
};
use crate::bits::bits;
use crate::board::Board;
use crate::board_utils::{sq_ind_to_bit, sq_to_rank};
use crate::move_types::Move;
use crate::piece_types::{BISHOP, KING, KNIGHT, PAWN, QUEEN, ROOK, WHITE, flip_color};

pub struct MoveGen;

const PROMOTION_PIECES: [usize; 4] = [QUEEN, ROOK, BISHOP, KNIGHT];

impl MoveGen {
    pub fn new() -> MoveGen {
        MoveGen
    }

    /// All pseudo-legal moves for the side to move.
    pub fn pseudo_legal_moves_into(&self, board: &Board, buf: &mut Vec<Move>) {
        buf.clear();
        self.pawn_moves(board, buf, false);
        self.piece_moves(board, buf, false);
        self.castling_moves(board, buf);
    }

    /// Captures (including en passant) and promotions only.
    pub fn non_quiet_moves_into(&self, board: &Board, buf: &mut Vec<Move>) {
        buf.clear();
        self.pawn_moves(board, buf, true);
        self.piece_moves(board, buf, true);
    }

    /// Fully legal moves; used by the front-end and tests, not by the
    /// inner search loop.
    pub fn legal_moves(&self, board: &Board) -> Vec<Move> {
        let mut moves = Vec::new();
        self.pseudo_legal_moves_into(board, &mut moves);
        moves
            .into_iter()
            .filter(|&m| board.apply_move_to_board(m).is_legal())
            .collect()
    }

    fn pawn_moves(&self, board: &Board, buf: &mut Vec<Move>, captures_only: bool) {
        let us = board.active_color();
        let them = flip_color(us);
        let pawns = board.pieces[us][PAWN];
        let empty = !board.get_all_occupancy();
        let enemy = board.pieces_occ[them];
        let promotion_rank = if us == WHITE { 7 } else { 0 };
        let (push, double_start) = if us == WHITE { (8i32, 1) } else { (-8i32, 6) };

        for from in bits(&pawns) {
            let single = (from as i32 + push) as usize;
            let single_empty = empty & sq_ind_to_bit(single) != 0;

            if single_empty && sq_to_rank(single) == promotion_rank {
                for promo in PROMOTION_PIECES {
                    buf.push(Move::new(from, single, Some(promo)));
                }
            } else if single_empty && !captures_only {
                buf.push(Move::new(from, single, None));
                if sq_to_rank(from) == double_start {
                    let double = (from as i32 + 2 * push) as usize;
                    if empty & sq_ind_to_bit(double) != 0 {
                        buf.push(Move::new(from, double, None));
                    }
                }
            }

            for to in bits(&(pawn_attacks(us, from) & enemy)) {
                if sq_to_rank(to) == promotion_rank {
                    for promo in PROMOTION_PIECES {
                        buf.push(Move::new(from, to, Some(promo)));
                    }
                } else {
                    buf.push(Move::new(from, to, None));
                }
            }
        }

        if let Some(ep) = board.en_passant() {
            let ep = ep as usize;
            // Our pawns attacking the en-passant square stand on the
            // squares an enemy pawn on it would attack.
            let reverse_attacks = if us == WHITE {
                BLACK_PAWN_ATTACKS[ep]
            } else {
                WHITE_PAWN_ATTACKS[ep]
            };
            for from in bits(&(reverse_attacks & pawns)) {
                buf.push(Move::new(from, ep, None));
            }
        }
    }

    fn piece_moves(&self, board: &Board, buf: &mut Vec<Move>, captures_only: bool) {
        let us = board.active_color();
        let occupied = board.get_all_occupancy();
        let targets = if captures_only {
            board.pieces_occ[flip_color(us)]
        } else {
            !board.pieces_occ[us]
        };

        for piece in [KNIGHT, BISHOP, ROOK, QUEEN] {
            for from in bits(&board.pieces[us][piece]) {
                let attacks = match piece {
                    KNIGHT => knight_attacks(from),
                    BISHOP => bishop_attacks(from, occupied),
                    ROOK => rook_attacks(from, occupied),
                    _ => queen_attacks(from, occupied),
                };
                for to in bits(&(attacks & targets)) {
                    buf.push(Move::new(from, to, None));
                }
            }
        }

        let king_from = board.king_square(us);
        for to in bits(&(king_attacks(king_from) & targets)) {
            buf.push(Move::new(king_from, to, None));
        }
    }

    fn castling_moves(&self, board: &Board, buf: &mut Vec<Move>) {
        let us = board.active_color();
        let them = flip_color(us);
        let occupied = board.get_all_occupancy();
        let rights = board.castling_rights;

        let (kingside, queenside, king_from) = if us == WHITE {
            (rights.white_kingside, rights.white_queenside, 4)
        } else {
            (rights.black_kingside, rights.black_queenside, 60)
        };
        if !(kingside || queenside) || board.pieces[us][KING] & sq_ind_to_bit(king_from) == 0 {
            return;
        }

        if kingside
            && board.pieces[us][ROOK] & sq_ind_to_bit(king_from + 3) != 0
            && occupied & (sq_ind_to_bit(king_from + 1) | sq_ind_to_bit(king_from + 2)) == 0
            && !board.is_square_attacked(king_from, them)
            && !board.is_square_attacked(king_from + 1, them)
            && !board.is_square_attacked(king_from + 2, them)
        {
            buf.push(Move::new(king_from, king_from + 2, None));
        }

        if queenside
            && board.pieces[us][ROOK] & sq_ind_to_bit(king_from - 4) != 0
            && occupied
                & (sq_ind_to_bit(king_from - 1)
                    | sq_ind_to_bit(king_from - 2)
                    | sq_ind_to_bit(king_from - 3))
                == 0
            && !board.is_square_attacked(king_from, them)
            && !board.is_square_attacked(king_from - 1, them)
            && !board.is_square_attacked(king_from - 2, them)
        {
            buf.push(Move::new(king_from, king_from - 2, None));
        }
    }
}

impl Default for MoveGen {
    fn default() -> Self {
        MoveGen::new()
    }
}
