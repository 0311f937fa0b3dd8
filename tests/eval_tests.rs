//! Static evaluation properties and end-to-end scenario values.

mod common;

use common::{board_from_fen, mirror_fen, positions};
use goshawk::board::Board;
use goshawk::eval::Evaluator;

#[test]
fn test_kings_only_is_zero() {
    let mut evaluator = Evaluator::new();
    let board = board_from_fen(positions::KINGS_ONLY);
    assert_eq!(evaluator.evaluate_full(&board), 0);
}

#[test]
fn test_start_position_is_tempo_only() {
    let mut evaluator = Evaluator::new();
    let board = board_from_fen(positions::STARTING);
    let score = evaluator.evaluate_full(&board);

    // Every feature is symmetric at the start; only the tempo term
    // remains, blended at phase zero.
    let tempo = i32::from(evaluator.weights.side_to_move.mg);
    assert_eq!(score, tempo);
    assert!(score.abs() <= 2 * tempo.abs());
}

#[test]
fn test_extra_pawn_is_positive() {
    let mut evaluator = Evaluator::new();
    let board = board_from_fen(positions::KING_AND_PAWN);
    assert!(
        evaluator.evaluate_full(&board) > 0,
        "a clean extra pawn evaluates in White's favor"
    );
}

#[test]
fn test_phase_monotone_in_material() {
    // Strictly shrinking non-pawn material: phase must not decrease.
    let fens = [
        positions::STARTING,
        "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq - 0 1", // no queens
        "rnb1kbn1/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBN1 w Qq - 0 1",   // one rook each
        "2b1kbn1/pppppppp/8/8/8/8/PPPPPPPP/2B1KBN1 w - - 0 1",
        "4kbn1/pppppppp/8/8/8/8/PPPPPPPP/4KBN1 w - - 0 1",
        "4k3/pppppppp/8/8/8/8/PPPPPPPP/4K3 w - - 0 1",
    ];
    let mut last_phase = -1.0f32;
    for fen in fens {
        let phase = Evaluator::game_phase(&board_from_fen(fen));
        assert!(
            phase >= last_phase,
            "phase decreased from {last_phase} to {phase} at {fen}"
        );
        assert!((0.0..=1.0).contains(&phase));
        last_phase = phase;
    }
}

#[test]
fn test_color_symmetry() {
    // Mirroring the board vertically and flipping colors must negate
    // the score exactly: the tempo term flips with the side to move,
    // and every other term flips with the colors.
    let fens = [
        positions::STARTING,
        positions::OPEN_GAME,
        positions::KIWIPETE,
        positions::KING_AND_PAWN,
        positions::OPPOSITION_DRAW,
        // Bishop pair on one side only, to exercise the white-pass
        // application of the set-wise bishop term.
        "rn1qkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        // Rook on an open file plus an advanced passer.
        "r3k3/1pp5/8/3P4/8/8/1PP5/4K2R w K - 0 1",
    ];

    let mut evaluator = Evaluator::new();
    for fen in fens {
        let score = evaluator.evaluate_full(&board_from_fen(fen));
        let mirrored = evaluator.evaluate_full(&board_from_fen(&mirror_fen(fen)));
        assert_eq!(
            score, -mirrored,
            "evaluation is not color-symmetric for {fen}"
        );
    }
}

#[test]
fn test_lazy_bounds_skip_deep_evaluation() {
    let mut evaluator = Evaluator::new();
    let board = board_from_fen(positions::STARTING);

    // Balanced material far below alpha: the guard returns the bare
    // material blend (zero here) without the tempo term.
    assert_eq!(evaluator.evaluate(&board, 5_000, 6_000), 0);
    assert_eq!(evaluator.evaluate(&board, -6_000, -5_000), 0);
    // Inside the window the full evaluation runs.
    assert_ne!(evaluator.evaluate(&board, -100, 100), 0);
}

#[test]
fn test_missing_mating_material_scales_down() {
    let mut evaluator = Evaluator::new();

    // A lone extra knight cannot mate; the score collapses toward zero.
    let knight_up = board_from_fen("8/8/8/8/8/8/8/N3K2k w - - 0 1");
    let score = evaluator.evaluate_full(&knight_up);
    assert!(
        score.abs() < 100,
        "lone-minor advantage should be scaled down, got {score}"
    );

    // The same material with a pawn added keeps its full value.
    let with_pawn = board_from_fen("8/8/8/8/8/8/P7/N3K2k w - - 0 1");
    let full = evaluator.evaluate_full(&with_pawn);
    assert!(full > score, "mating material restores the advantage");
    assert!(full > 200, "knight and pawn are a real advantage, got {full}");
}

#[test]
fn test_passer_gains_with_advancement() {
    let mut evaluator = Evaluator::new();

    let on_sixth = board_from_fen("4k3/8/3P4/8/8/8/8/4K3 w - - 0 1");
    let on_third = board_from_fen("4k3/8/8/8/8/3P4/8/4K3 w - - 0 1");
    let advanced = evaluator.evaluate_full(&on_sixth);
    let home = evaluator.evaluate_full(&on_third);

    assert!(
        advanced > home,
        "a passer on the sixth ({advanced}) must outscore one on the third ({home})"
    );
}

#[test]
fn test_eval_unchanged_by_make_unmake() {
    let move_gen = goshawk::move_generation::MoveGen::new();
    let mut evaluator = Evaluator::new();

    for fen in [positions::OPEN_GAME, positions::KIWIPETE] {
        let board = Board::new_from_fen(fen);
        let before = evaluator.evaluate_full(&board);
        let mut stack = goshawk::boardstack::BoardStack::with_board(board);
        for m in move_gen.legal_moves(stack.current_state()) {
            stack.make_move(m);
            stack.undo_move();
        }
        assert_eq!(
            evaluator.evaluate_full(stack.current_state()),
            before,
            "evaluation drifted after make/unmake cycles in {fen}"
        );
    }
}
