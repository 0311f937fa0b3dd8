//! Tuned evaluation parameters.
//!
//! Every weight the evaluator consumes lives in [`EvalWeights`] as
//! declarative data: `Default` carries the tuned values, and the whole
//! struct (de)serializes with serde, so an alternative tuning can be
//! loaded from a JSON blob without touching code.

use crate::score::{TaperedScore, m};
use serde::{Deserialize, Serialize};

/// Phase contribution per piece type (pawn..king). The starting
/// material sums to 24; the phase is the missing fraction of that.
pub const PHASE_VALUES: [i32; 6] = [0, 1, 1, 2, 4, 0];

/// Total non-pawn phase material at the start of the game.
pub const TOTAL_PHASE: i32 = 24;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Material values per piece type (pawn..king).
    pub piece_values: [TaperedScore; 6],

    pub side_to_move: TaperedScore,
    pub castling_rights: TaperedScore,

    // Pawn structure.
    pub pawn_structure: TaperedScore,
    pub pawn_isolated: TaperedScore,
    pub pawn_doubled: TaperedScore,
    pub pawn_doubled_and_isolated: TaperedScore,
    pub pawn_backward: TaperedScore,
    pub pawn_open: TaperedScore,
    pub pawn_blocked: TaperedScore,
    pub pawn_connected: TaperedScore,
    pub minor_behind_pawn: TaperedScore,

    // Passed pawns.
    pub pawn_passed_and_doubled: TaperedScore,
    pub pawn_passed_and_blocked: TaperedScore,
    pub pawn_passed_covered_promo: TaperedScore,
    pub pawn_passed_helper: TaperedScore,
    pub pawn_passed_and_defended: TaperedScore,
    pub pawn_passed_square_rule: TaperedScore,
    pub pawn_passed_edge_distance: TaperedScore,
    pub pawn_passed_king_tropism: TaperedScore,
    pub passer_rank: [TaperedScore; 8],
    pub candidate_passer: [TaperedScore; 8],

    // Knights.
    pub knight_outpost: TaperedScore,
    pub knight_distance_enemy_king: TaperedScore,
    pub safe_knight_check: TaperedScore,

    // Bishops.
    pub bishop_doubled: TaperedScore,
    pub bishop_fianchetto: TaperedScore,
    pub bishop_stunted: TaperedScore,
    pub bishop_piece_same_square_e: TaperedScore,
    pub safe_bishop_check: TaperedScore,
    pub bishop_pawn_same_color_own: [TaperedScore; 9],
    pub bishop_pawn_same_color_enemy: [TaperedScore; 9],

    // Rooks.
    pub rook_open_file: TaperedScore,
    pub rook_half_open_file: TaperedScore,
    pub rook_king_line: TaperedScore,
    pub safe_rook_check: TaperedScore,

    // Queens.
    pub queen_distance_enemy_king: TaperedScore,
    pub safe_queen_check: TaperedScore,

    // Kings.
    pub king_close_opponent: TaperedScore,
    pub king_pawn_shield: TaperedScore,

    // Threats.
    pub pawn_attack_minor: TaperedScore,
    pub pawn_attack_rook: TaperedScore,
    pub pawn_attack_queen: TaperedScore,
    pub minor_attack_rook: TaperedScore,
    pub minor_attack_queen: TaperedScore,
    pub rook_attack_queen: TaperedScore,

    // Mobility, indexed by the popcount of reachable mobility squares.
    pub mobility_knight: [TaperedScore; 9],
    pub mobility_bishop: [TaperedScore; 14],
    pub mobility_rook: [TaperedScore; 15],
    pub mobility_queen: [TaperedScore; 28],

    /// Per piece type (pawn..king) weight of a hanging piece.
    pub hanging: [TaperedScore; 5],

    /// Indexed by `pinned_piece * 3 + (pinner_piece - BISHOP)`.
    pub pinned: [TaperedScore; 15],

    /// King-zone attack weight per attacking piece type.
    pub king_safety_attack_weights: [i32; 6],
    /// Danger multiplier (percent) per number of attacking pieces.
    pub king_safety_attack_scale: [i32; 8],

    /// Skip the full evaluation when the material balance alone sits
    /// this far outside the search window.
    pub lazy_eval_alpha_bound: i32,
    pub lazy_eval_beta_bound: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            piece_values: [
                m(100, 128),
                m(422, 437),
                m(451, 466),
                m(605, 767),
                m(1379, 1469),
                m(0, 0),
            ],

            side_to_move: m(14, 14),
            castling_rights: m(16, 1),

            pawn_structure: m(8, 2),
            pawn_isolated: m(0, -7),
            pawn_doubled: m(-6, -7),
            pawn_doubled_and_isolated: m(-5, -21),
            pawn_backward: m(-9, -2),
            pawn_open: m(-9, -10),
            pawn_blocked: m(-4, -9),
            pawn_connected: m(8, 8),
            minor_behind_pawn: m(5, 19),

            pawn_passed_and_doubled: m(-12, -36),
            pawn_passed_and_blocked: m(1, -36),
            pawn_passed_covered_promo: m(-1, 8),
            pawn_passed_helper: m(2, 4),
            pawn_passed_and_defended: m(11, 0),
            pawn_passed_square_rule: m(4, 15),
            pawn_passed_edge_distance: m(-4, -4),
            pawn_passed_king_tropism: m(-2, 13),
            passer_rank: [
                m(0, 0),
                m(-13, 5),
                m(-22, 19),
                m(-15, 55),
                m(11, 92),
                m(31, 152),
                m(10, 61),
                m(0, 0),
            ],
            candidate_passer: [
                m(0, 0),
                m(-21, 6),
                m(-6, 13),
                m(-3, 23),
                m(3, 71),
                m(4, 65),
                m(0, 0),
                m(0, 0),
            ],

            knight_outpost: m(22, 19),
            knight_distance_enemy_king: m(-4, -1),
            safe_knight_check: m(11, 4),

            bishop_doubled: m(13, 74),
            bishop_fianchetto: m(23, 29),
            bishop_stunted: m(-6, -10),
            bishop_piece_same_square_e: m(3, 3),
            safe_bishop_check: m(5, 4),
            bishop_pawn_same_color_own: [
                m(-49, 39),
                m(-55, 41),
                m(-54, 28),
                m(-56, 19),
                m(-58, 10),
                m(-62, -1),
                m(-64, -17),
                m(-63, -31),
                m(-70, -69),
            ],
            bishop_pawn_same_color_enemy: [
                m(-38, 30),
                m(-55, 42),
                m(-59, 35),
                m(-63, 30),
                m(-66, 22),
                m(-69, 11),
                m(-70, -3),
                m(-68, -13),
                m(-76, -21),
            ],

            rook_open_file: m(23, -1),
            rook_half_open_file: m(1, -9),
            rook_king_line: m(8, 6),
            safe_rook_check: m(11, 4),

            queen_distance_enemy_king: m(-20, -12),
            safe_queen_check: m(5, 27),

            king_close_opponent: m(-13, 14),
            king_pawn_shield: m(26, 8),

            pawn_attack_minor: m(38, 65),
            pawn_attack_rook: m(39, 26),
            pawn_attack_queen: m(30, 28),
            minor_attack_rook: m(33, 25),
            minor_attack_queen: m(24, 37),
            rook_attack_queen: m(31, 16),

            mobility_knight: [
                m(-76, 12),
                m(-66, 57),
                m(-61, 83),
                m(-57, 97),
                m(-53, 107),
                m(-49, 116),
                m(-43, 117),
                m(-34, 112),
                m(-21, 96),
            ],
            mobility_bishop: [
                m(-21, -10),
                m(-12, 46),
                m(-5, 73),
                m(-1, 89),
                m(3, 102),
                m(6, 112),
                m(7, 119),
                m(6, 123),
                m(7, 126),
                m(10, 124),
                m(16, 119),
                m(31, 111),
                m(40, 120),
                m(63, 91),
            ],
            mobility_rook: [
                m(-76, 79),
                m(-70, 116),
                m(-67, 148),
                m(-66, 172),
                m(-65, 186),
                m(-60, 193),
                m(-54, 199),
                m(-47, 202),
                m(-43, 207),
                m(-38, 213),
                m(-34, 217),
                m(-30, 220),
                m(-20, 218),
                m(9, 200),
                m(63, 169),
            ],
            mobility_queen: [
                m(-195, 141),
                m(-179, 143),
                m(-167, 243),
                m(-164, 309),
                m(-162, 344),
                m(-161, 368),
                m(-160, 389),
                m(-158, 402),
                m(-157, 413),
                m(-154, 419),
                m(-152, 424),
                m(-150, 427),
                m(-149, 429),
                m(-148, 432),
                m(-148, 434),
                m(-149, 434),
                m(-149, 433),
                m(-149, 431),
                m(-147, 427),
                m(-139, 417),
                m(-131, 404),
                m(-128, 395),
                m(-131, 387),
                m(-114, 371),
                m(-174, 396),
                m(-57, 310),
                m(-89, 355),
                m(-197, 446),
            ],

            hanging: [m(-3, -1), m(-3, -1), m(-5, -6), m(-4, -4), m(-3, -6)],

            pinned: [
                m(3, -3),
                m(-6, 8),
                m(-6, 51),
                m(-18, -54),
                m(-14, -15),
                m(-17, 47),
                m(-2, -9),
                m(-20, -14),
                m(-13, 35),
                m(-10, -10),
                m(8, -10),
                m(-13, 39),
                m(12, -19),
                m(-4, -31),
                m(-16, 53),
            ],

            king_safety_attack_weights: [0, 22, 12, 46, 58, 0],
            king_safety_attack_scale: [0, 0, 36, 66, 91, 105, 1453, 99],

            lazy_eval_alpha_bound: 803,
            lazy_eval_beta_bound: 392,
        }
    }
}

impl EvalWeights {
    /// Load a weight blob from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<EvalWeights> {
        serde_json::from_str(text)
    }

    /// Load a weight blob from a JSON file.
    pub fn from_json_file(path: &std::path::Path) -> std::io::Result<EvalWeights> {
        let text = std::fs::read_to_string(path)?;
        EvalWeights::from_json(&text).map_err(std::io::Error::other)
    }
}
