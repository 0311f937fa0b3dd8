//! Applying moves to the board: ordinary moves and all special cases.

mod common;

use common::{board_from_fen, positions};
use goshawk::board::Board;
use goshawk::move_types::Move;
use goshawk::piece_types::{KING, PAWN, QUEEN, ROOK, WHITE};

#[test]
fn test_standard_pawn_push() {
    let board = Board::new();
    let next = board.apply_move_to_board(Move::new(12, 20, None)); // e2e3

    assert_eq!(next.get_piece(20), Some((WHITE, PAWN)), "pawn on e3");
    assert_eq!(next.get_piece(12), None, "e2 empty");
    assert!(!next.w_to_move);
    assert_eq!(next.en_passant(), None);
}

#[test]
fn test_double_pawn_push_sets_en_passant() {
    let board = Board::new();
    let next = board.apply_move_to_board(Move::new(12, 28, None)); // e2e4

    assert_eq!(next.get_piece(28), Some((WHITE, PAWN)), "pawn on e4");
    assert_eq!(next.en_passant(), Some(20), "en passant square is e3");
}

#[test]
fn test_en_passant_capture_removes_victim() {
    let board = board_from_fen(positions::EN_PASSANT);
    let next = board.apply_move_to_board(Move::new(33, 40, None)); // b5xa6 e.p.

    assert_eq!(next.get_piece(40), Some((WHITE, PAWN)), "pawn landed on a6");
    assert_eq!(next.get_piece(33), None, "b5 empty");
    assert_eq!(next.get_piece(32), None, "captured pawn removed from a5");
}

#[test]
fn test_kingside_castling() {
    let board = board_from_fen(positions::CASTLING_BOTH);
    let next = board.apply_move_to_board(Move::new(4, 6, None)); // e1g1

    assert_eq!(next.get_piece(6), Some((WHITE, KING)), "king on g1");
    assert_eq!(next.get_piece(5), Some((WHITE, ROOK)), "rook on f1");
    assert_eq!(next.get_piece(4), None);
    assert_eq!(next.get_piece(7), None);
    assert!(!next.castling_rights.white_kingside);
    assert!(!next.castling_rights.white_queenside);
    assert!(next.castling_rights.black_kingside, "black rights untouched");
}

#[test]
fn test_queenside_castling() {
    let board = board_from_fen(positions::CASTLING_BOTH);
    let next = board.apply_move_to_board(Move::new(4, 2, None)); // e1c1

    assert_eq!(next.get_piece(2), Some((WHITE, KING)), "king on c1");
    assert_eq!(next.get_piece(3), Some((WHITE, ROOK)), "rook on d1");
    assert_eq!(next.get_piece(0), None, "a1 empty");
    assert!(!next.castling_rights.white_queenside);
}

#[test]
fn test_rook_capture_revokes_castling_right() {
    // White rook takes the a8 rook: black loses queenside castling.
    let board = board_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let next = board.apply_move_to_board(Move::new(0, 56, None)); // Ra1xa8

    assert!(!next.castling_rights.black_queenside);
    assert!(next.castling_rights.black_kingside);
    assert!(!next.castling_rights.white_queenside, "a1 rook left home");
    assert!(next.castling_rights.white_kingside);
}

#[test]
fn test_pawn_promotion() {
    let board = board_from_fen(positions::PROMOTION);
    let next = board.apply_move_to_board(Move::new(48, 56, Some(QUEEN)));

    assert_eq!(next.get_piece(56), Some((WHITE, QUEEN)), "queen on a8");
    assert_eq!(next.get_piece(48), None);
    assert_eq!(
        next.get_piece_bitboard(WHITE, PAWN),
        0,
        "no white pawns left"
    );
}

#[test]
fn test_halfmove_clock_resets_on_pawn_move_and_capture() {
    let board = board_from_fen("r3k3/8/8/8/8/8/4P3/R3K3 w - - 7 20");
    let pawn_push = board.apply_move_to_board(Move::new(12, 20, None));
    assert_eq!(pawn_push.halfmove_clock, 0);

    let rook_capture = board.apply_move_to_board(Move::new(0, 56, None)); // Ra1xa8
    assert_eq!(rook_capture.halfmove_clock, 0);

    let quiet = board.apply_move_to_board(Move::new(0, 1, None)); // Rb1
    assert_eq!(quiet.halfmove_clock, 8);
}
