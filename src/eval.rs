//! Static evaluation.
//!
//! The evaluator turns a quiescent position into a single centipawn
//! value from White's point of view. It works in three stages: a lazy
//! material-only estimate that can skip everything else when the
//! position is already far outside the search window, a feature pass
//! over pawns, pieces, and kings that fills a per-call scratchpad with
//! attack maps as it goes, and a final composition that tapers the
//! middlegame/endgame sums against the game phase.
//!
//! Feature passes run in a fixed order because later ones read
//! scratchpad state produced by earlier ones: pawns populate the pawn
//! attack maps, mobility masks, and file sets that every piece pass
//! consumes, and passed-pawn scoring reads the semi-open files left by
//! the pawn pass.

use crate::attacks::{KING_ATTACKS, KNIGHT_ATTACKS, bishop_attacks, rook_attacks};
use crate::bits::{bits, popcnt};
use crate::board::Board;
use crate::board_utils::{
    CENTER_SQUARES, DARK_SQUARES, IN_BETWEEN, LIGHT_SQUARES, PASSED_PAWN_MASKS, attack_front_spans,
    attack_rear_spans, chebyshev_distance, fill_file, fill_north, fill_south, get_file_mask,
    get_rank_mask, manhattan_distance, shift_east, shift_north, shift_north_east, shift_north_west,
    shift_south, shift_south_east, shift_south_west, shift_west, sq_ind_to_bit, sq_to_file,
    sq_to_rank,
};
use crate::eval_constants::{EvalWeights, PHASE_VALUES, TOTAL_PHASE};
use crate::piece_types::{BISHOP, BLACK, KING, KNIGHT, PAWN, QUEEN, ROOK, WHITE, flip_color};
use crate::score::{TaperedScore, ZERO_SCORE, m};

/// Per-evaluation scratchpad. Zeroed at the start of every full
/// evaluation; the pawn pass must run before any piece pass.
#[derive(Clone, Default)]
struct EvalData {
    attacks: [[u64; 6]; 2],
    all_attacks: [u64; 2],
    pawn_east_attacks: [u64; 2],
    pawn_west_attacks: [u64; 2],
    mobility_squares: [u64; 2],
    semi_open: [u64; 2],
    open_files: u64,
    king_square: [usize; 2],
    king_zone: [u64; 2],
    threats: [TaperedScore; 2],
    ks_attack_value: [i32; 2],
    ks_attack_count: [usize; 2],
}

pub struct Evaluator {
    pub weights: EvalWeights,
    data: EvalData,
    /// Game phase of the last evaluated position, in [0, 1].
    pub phase: f32,
}

/// A square is an outpost for `color` when a friendly pawn covers it
/// and no enemy pawn can ever chase the piece away.
fn is_outpost(sq: usize, color: usize, opponent_pawns: u64, pawn_cover: u64) -> bool {
    let lane = PASSED_PAWN_MASKS[color][sq] & !get_file_mask(sq_to_file(sq));
    lane & opponent_pawns == 0 && sq_ind_to_bit(sq) & pawn_cover != 0
}

impl Evaluator {
    pub fn new() -> Evaluator {
        Evaluator::with_weights(EvalWeights::default())
    }

    pub fn with_weights(weights: EvalWeights) -> Evaluator {
        Evaluator {
            weights,
            data: EvalData::default(),
            phase: 0.0,
        }
    }

    /// Game phase: 0.0 with full starting material, 1.0 once all
    /// non-pawn material is gone.
    pub fn game_phase(board: &Board) -> f32 {
        let mut remaining = TOTAL_PHASE;
        for piece in KNIGHT..=QUEEN {
            remaining -= PHASE_VALUES[piece]
                * popcnt(board.pieces[WHITE][piece] | board.pieces[BLACK][piece]) as i32;
        }
        (remaining as f32 / TOTAL_PHASE as f32).clamp(0.0, 1.0)
    }

    /// Packed material balance, White minus Black.
    pub fn material(&self, board: &Board) -> TaperedScore {
        let mut total = ZERO_SCORE;
        for piece in PAWN..=QUEEN {
            total += self.weights.piece_values[piece]
                * (popcnt(board.pieces[WHITE][piece]) as i32
                    - popcnt(board.pieces[BLACK][piece]) as i32);
        }
        total
    }

    /// Evaluate without a window, for debugging and the UCI `eval`
    /// command. Returns a White-POV score.
    pub fn evaluate_full(&mut self, board: &Board) -> i32 {
        self.evaluate(board, -1_000_000, 1_000_000)
    }

    /// Evaluate the position. The returned score is from White's point
    /// of view; callers negate it when Black is to move. `alpha` and
    /// `beta` are side-to-move bounds used only by the lazy guard.
    pub fn evaluate(&mut self, board: &Board, alpha: i32, beta: i32) -> i32 {
        let phase = Evaluator::game_phase(board);
        self.phase = phase;

        let material = self.material(board);
        let material_blend = material.blend(phase);

        let lazy = if board.w_to_move {
            material_blend
        } else {
            -material_blend
        };
        if lazy < alpha - self.weights.lazy_eval_alpha_bound
            || lazy > beta + self.weights.lazy_eval_beta_bound
        {
            return material_blend;
        }

        self.data = EvalData::default();
        for color in [WHITE, BLACK] {
            let king_sq = board.king_square(color);
            self.data.king_square[color] = king_sq;
            self.data.king_zone[color] = KING_ATTACKS[king_sq];
        }

        let mut feature_score = self.compute_pawns(board);
        for piece in [KNIGHT, BISHOP, ROOK, QUEEN] {
            feature_score +=
                self.compute_pieces(board, WHITE, piece) - self.compute_pieces(board, BLACK, piece);
        }
        feature_score += self.compute_kings(board, WHITE) - self.compute_kings(board, BLACK);

        let rights = board.castling_rights;
        feature_score += self.weights.castling_rights
            * (rights.white_kingside as i32 + rights.white_queenside as i32
                - rights.black_kingside as i32
                - rights.black_queenside as i32);
        feature_score += self.weights.side_to_move * if board.w_to_move { 1 } else { -1 };

        let hanging_score = self.compute_hanging(board);
        let pinned_score = self.compute_pinned(board, WHITE) - self.compute_pinned(board, BLACK);
        let passed_score =
            self.compute_passed_pawns(board, WHITE) - self.compute_passed_pawns(board, BLACK);
        let threat_score = self.data.threats[WHITE] - self.data.threats[BLACK];
        let king_safety_score = self.compute_king_safety(WHITE) - self.compute_king_safety(BLACK);

        let total = pinned_score
            + hanging_score
            + feature_score
            + passed_score
            + threat_score
            + king_safety_score
            + material;

        let mut result = (f32::from(total.mg) * (1.0 - phase)) as i32;

        // The endgame component shrinks as the stronger side runs out
        // of pawns; a pawnless advantage is hard to convert.
        let winner = if total.eg > 0 { WHITE } else { BLACK };
        let winner_pawns = popcnt(board.pieces[winner][PAWN]) as i32;
        let eg = i32::from(total.eg) * (120 - (8 - winner_pawns) * (8 - winner_pawns)) / 100;
        result += (eg as f32 * phase) as i32;

        let leader = if result > 0 { WHITE } else { BLACK };
        if !board.has_mating_material(leader) {
            result /= 10;
        }
        result
    }

    /// Pawn-structure pass. Also fills every pawn-derived scratchpad
    /// field the piece passes depend on.
    fn compute_pawns(&mut self, board: &Board) -> TaperedScore {
        let w = self.weights.clone();
        let mut res = ZERO_SCORE;

        let white_team = board.pieces_occ[WHITE];
        let black_team = board.pieces_occ[BLACK];
        let white_pawns = board.pieces[WHITE][PAWN];
        let black_pawns = board.pieces[BLACK][PAWN];

        // Doubled pawns: first every pawn with a friend somewhere ahead
        // of it on the file, then the rear members of those groups too.
        let white_doubled_front = shift_north(fill_north(white_pawns)) & white_pawns;
        let black_doubled_front = shift_south(fill_south(black_pawns)) & black_pawns;
        let white_doubled =
            white_doubled_front | (shift_south(fill_south(white_doubled_front)) & white_pawns);
        let black_doubled =
            black_doubled_front | (shift_north(fill_north(black_doubled_front)) & black_pawns);

        let white_isolated =
            white_pawns & !fill_file(shift_west(white_pawns) | shift_east(white_pawns));
        let black_isolated =
            black_pawns & !fill_file(shift_west(black_pawns) | shift_east(black_pawns));

        let white_blocked = shift_north(white_pawns) & (white_team | black_team);
        let black_blocked = shift_south(black_pawns) & (white_team | black_team);

        let white_connected = white_pawns
            & (shift_east(white_pawns) | shift_west(white_pawns))
            & (get_rank_mask(3) | get_rank_mask(4) | get_rank_mask(5) | get_rank_mask(6));
        let black_connected = black_pawns
            & (shift_east(black_pawns) | shift_west(black_pawns))
            & (get_rank_mask(4) | get_rank_mask(3) | get_rank_mask(2) | get_rank_mask(1));

        self.data.semi_open[WHITE] = !fill_file(black_pawns);
        self.data.semi_open[BLACK] = !fill_file(white_pawns);
        self.data.open_files = self.data.semi_open[WHITE] & self.data.semi_open[BLACK];

        let white_east_cover = shift_north_east(white_pawns) & white_pawns;
        let white_west_cover = shift_north_west(white_pawns) & white_pawns;
        let black_east_cover = shift_south_east(black_pawns) & black_pawns;
        let black_west_cover = shift_south_west(black_pawns) & black_pawns;

        self.data.pawn_east_attacks[WHITE] = shift_north_east(white_pawns);
        self.data.pawn_east_attacks[BLACK] = shift_south_east(black_pawns);
        self.data.pawn_west_attacks[WHITE] = shift_north_west(white_pawns);
        self.data.pawn_west_attacks[BLACK] = shift_south_west(black_pawns);

        self.data.attacks[WHITE][PAWN] =
            self.data.pawn_east_attacks[WHITE] | self.data.pawn_west_attacks[WHITE];
        self.data.attacks[BLACK][PAWN] =
            self.data.pawn_east_attacks[BLACK] | self.data.pawn_west_attacks[BLACK];
        self.data.all_attacks[WHITE] |= self.data.attacks[WHITE][PAWN];
        self.data.all_attacks[BLACK] |= self.data.attacks[BLACK][PAWN];

        self.data.mobility_squares[WHITE] = !white_team & !self.data.attacks[BLACK][PAWN];
        self.data.mobility_squares[BLACK] = !black_team & !self.data.attacks[WHITE][PAWN];

        for (us, them) in [(WHITE, BLACK), (BLACK, WHITE)] {
            let our_pawn_attacks = self.data.attacks[us][PAWN];
            let mut threats = w.pawn_attack_minor
                * popcnt(
                    our_pawn_attacks & (board.pieces[them][KNIGHT] | board.pieces[them][BISHOP]),
                ) as i32;
            threats +=
                w.pawn_attack_rook * popcnt(our_pawn_attacks & board.pieces[them][ROOK]) as i32;
            threats +=
                w.pawn_attack_queen * popcnt(our_pawn_attacks & board.pieces[them][QUEEN]) as i32;
            self.data.threats[us] = threats;
        }

        res += w.pawn_doubled_and_isolated
            * (popcnt(white_isolated & white_doubled) as i32
                - popcnt(black_isolated & black_doubled) as i32);
        res += w.pawn_doubled
            * (popcnt(!white_isolated & white_doubled) as i32
                - popcnt(!black_isolated & black_doubled) as i32);
        res += w.pawn_isolated
            * (popcnt(white_isolated & !white_doubled) as i32
                - popcnt(black_isolated & !black_doubled) as i32);
        res += w.pawn_structure
            * (popcnt(white_east_cover) as i32 + popcnt(white_west_cover) as i32
                - popcnt(black_east_cover) as i32
                - popcnt(black_west_cover) as i32);
        res += w.pawn_open
            * (popcnt(white_pawns & !self.data.attacks[WHITE][PAWN] & !fill_south(black_pawns))
                as i32
                - popcnt(black_pawns & !self.data.attacks[BLACK][PAWN] & !fill_north(white_pawns))
                    as i32);
        res += w.pawn_backward
            * (popcnt(
                fill_south(!attack_front_spans(WHITE, white_pawns) & self.data.attacks[BLACK][PAWN])
                    & white_pawns,
            ) as i32
                - popcnt(
                    fill_north(
                        !attack_front_spans(BLACK, black_pawns) & self.data.attacks[WHITE][PAWN],
                    ) & black_pawns,
                ) as i32);
        res += w.pawn_blocked * (popcnt(white_blocked) as i32 - popcnt(black_blocked) as i32);
        res += w.pawn_connected * (popcnt(white_connected) as i32 - popcnt(black_connected) as i32);
        res += w.minor_behind_pawn
            * (popcnt(
                shift_north(board.pieces[WHITE][KNIGHT] | board.pieces[WHITE][BISHOP])
                    & (white_pawns | black_pawns),
            ) as i32
                - popcnt(
                    shift_south(board.pieces[BLACK][KNIGHT] | board.pieces[BLACK][BISHOP])
                        & (white_pawns | black_pawns),
                ) as i32);
        res
    }

    /// Passed and candidate passed pawns for one color.
    fn compute_passed_pawns(&self, board: &Board, color: usize) -> TaperedScore {
        let w = &self.weights;
        let us = color;
        let them = flip_color(color);
        let mut h = ZERO_SCORE;

        let pawns = board.pieces[us][PAWN];
        let opp_pawns = board.pieces[them][PAWN];
        let king_sq = board.king_square(us);
        let opp_king_sq = board.king_square(them);

        for sq in bits(&pawns) {
            let relative_rank = if us == WHITE {
                sq_to_rank(sq)
            } else {
                7 - sq_to_rank(sq)
            };
            let file = sq_to_file(sq);
            let sq_bb = sq_ind_to_bit(sq);
            let advance_bb = if us == WHITE {
                shift_north(sq_bb)
            } else {
                shift_south(sq_bb)
            };
            let advance_sq = advance_bb.trailing_zeros() as usize;

            let passer_mask = PASSED_PAWN_MASKS[us][sq];
            let passed = passer_mask & opp_pawns == 0;

            if passed {
                let prom_bb = get_file_mask(file)
                    & if us == WHITE {
                        get_rank_mask(7)
                    } else {
                        get_rank_mask(0)
                    };
                let prom_sq = prom_bb.trailing_zeros() as usize;
                let prom_color_bb = if prom_bb & LIGHT_SQUARES != 0 {
                    LIGHT_SQUARES
                } else {
                    DARK_SQUARES
                };

                h += w.passer_rank[relative_rank]
                    + w.pawn_passed_edge_distance * file.min(7 - file) as i32;

                // Another friendly pawn right in front demotes the passer.
                h += w.pawn_passed_and_doubled * popcnt(advance_bb & pawns) as i32;

                // An enemy piece camping on the stop square.
                h += w.pawn_passed_and_blocked * popcnt(advance_bb & board.pieces_occ[them]) as i32;

                // Long-range cover of the promotion square.
                h += w.pawn_passed_covered_promo
                    * (popcnt(board.pieces[us][BISHOP] & prom_color_bb) as i32
                        + popcnt(board.pieces[us][QUEEN]) as i32
                        - popcnt(board.pieces[them][BISHOP] & prom_color_bb) as i32
                        - popcnt(board.pieces[them][QUEEN]) as i32);

                h += w.pawn_passed_helper * popcnt(pawns & attack_rear_spans(us, pawns)) as i32;

                h += w.pawn_passed_and_defended
                    * (popcnt(sq_bb & self.data.pawn_west_attacks[us]) as i32
                        + popcnt(sq_bb & self.data.pawn_east_attacks[us]) as i32);

                // Square rule: the enemy king cannot catch the runner.
                let tempo = (us != board.active_color()) as i32;
                let unstoppable =
                    (7 - relative_rank as i32 + tempo) < manhattan_distance(prom_sq, opp_king_sq);
                h += w.pawn_passed_square_rule * unstoppable as i32;

                h += w.pawn_passed_king_tropism
                    * (chebyshev_distance(opp_king_sq, advance_sq)
                        - chebyshev_distance(king_sq, advance_sq))
                    .clamp(-4, 4);
            }

            if !passed && sq_bb & self.data.semi_open[us] != 0 {
                // Candidate passer: every pawn denying passer status is
                // either already a lever, or becomes one after a push
                // that enough helpers can back up.
                let anti_passers = passer_mask & opp_pawns;
                let levers = opp_pawns
                    & if us == WHITE {
                        shift_north_east(sq_bb) | shift_north_west(sq_bb)
                    } else {
                        shift_south_east(sq_bb) | shift_south_west(sq_bb)
                    };
                let forward_levers = opp_pawns
                    & if us == WHITE {
                        shift_north_east(advance_bb) | shift_north_west(advance_bb)
                    } else {
                        shift_south_east(advance_bb) | shift_south_west(advance_bb)
                    };
                let helpers = (shift_east(sq_bb) | shift_west(sq_bb)) & pawns;

                let push = anti_passers ^ levers == 0;
                let helped = anti_passers ^ forward_levers == 0
                    && popcnt(helpers) >= popcnt(forward_levers);
                if push || helped {
                    h += w.candidate_passer[relative_rank];
                }
            }
        }
        h
    }

    /// One (color, piece type) pass: mobility, threats, per-type
    /// specials, and king-zone attack accumulation. X-ray occupancy
    /// lets sliders look through friendly pieces that would slide the
    /// same way, so a battery counts at full strength.
    fn compute_pieces(&mut self, board: &Board, color: usize, piece_type: usize) -> TaperedScore {
        let us = color;
        let them = flip_color(color);
        let mut score = ZERO_SCORE;

        let occupied = board.get_all_occupancy();
        let opp_king_sq = self.data.king_square[them];
        let opp_pawn_attacks = self.data.attacks[them][PAWN];
        let all_pawns = board.pieces[WHITE][PAWN] | board.pieces[BLACK][PAWN];

        for sq in bits(&board.pieces[us][piece_type]) {
            let sq_bb = sq_ind_to_bit(sq);
            let attacks = match piece_type {
                KNIGHT => KNIGHT_ATTACKS[sq],
                BISHOP => bishop_attacks(sq, occupied & !board.pieces[us][QUEEN]),
                ROOK => rook_attacks(
                    sq,
                    occupied & !board.pieces[us][QUEEN] & !board.pieces[us][ROOK],
                ),
                _ => {
                    rook_attacks(sq, occupied & !board.pieces[us][ROOK])
                        | bishop_attacks(sq, occupied & !board.pieces[us][BISHOP])
                }
            };

            self.data.attacks[us][piece_type] |= attacks;
            self.data.all_attacks[us] |= attacks;

            let mobility = popcnt(attacks & self.data.mobility_squares[us]) as usize;
            score += match piece_type {
                KNIGHT => self.weights.mobility_knight[mobility],
                BISHOP => self.weights.mobility_bishop[mobility],
                ROOK => self.weights.mobility_rook[mobility],
                _ => self.weights.mobility_queen[mobility],
            };

            if piece_type == KNIGHT || piece_type == BISHOP {
                self.data.threats[us] += self.weights.minor_attack_rook
                    * popcnt(attacks & board.pieces[them][ROOK]) as i32;
                self.data.threats[us] += self.weights.minor_attack_queen
                    * popcnt(attacks & board.pieces[them][QUEEN]) as i32;
            }

            match piece_type {
                KNIGHT => {
                    score += self.weights.knight_outpost
                        * is_outpost(sq, us, board.pieces[them][PAWN], self.data.attacks[us][PAWN])
                            as i32;
                    score += self.weights.knight_distance_enemy_king
                        * manhattan_distance(sq, opp_king_sq);
                    score += self.weights.safe_knight_check
                        * popcnt(
                            KNIGHT_ATTACKS[opp_king_sq]
                                & !board.pieces_occ[us]
                                & attacks
                                & !opp_pawn_attacks,
                        ) as i32;
                }
                BISHOP => {
                    let same_colored = if sq_bb & LIGHT_SQUARES != 0 {
                        LIGHT_SQUARES
                    } else {
                        DARK_SQUARES
                    };
                    score += self.weights.bishop_pawn_same_color_enemy
                        [popcnt(board.pieces[them][PAWN] & same_colored) as usize];
                    score += self.weights.bishop_pawn_same_color_own
                        [popcnt(board.pieces[us][PAWN] & same_colored) as usize];
                    score += self.weights.bishop_piece_same_square_e
                        * popcnt(board.pieces_occ[them] & same_colored) as i32;

                    // A non-central bishop biting through the pawn
                    // skeleton into the center.
                    if CENTER_SQUARES & sq_bb == 0
                        && popcnt(CENTER_SQUARES & bishop_attacks(sq, all_pawns)) > 1
                    {
                        score += self.weights.bishop_fianchetto;
                    }

                    if attacks & board.pieces[them][PAWN] & opp_pawn_attacks != 0 {
                        score += self.weights.bishop_stunted;
                    }

                    score += self.weights.safe_bishop_check
                        * popcnt(
                            bishop_attacks(opp_king_sq, occupied)
                                & !board.pieces_occ[us]
                                & attacks
                                & !opp_pawn_attacks,
                        ) as i32;
                }
                ROOK => {
                    self.data.threats[us] += self.weights.rook_attack_queen
                        * popcnt(attacks & board.pieces[them][QUEEN]) as i32;

                    score += self.weights.safe_rook_check
                        * popcnt(
                            rook_attacks(opp_king_sq, occupied)
                                & !board.pieces_occ[us]
                                & attacks
                                & !opp_pawn_attacks,
                        ) as i32;
                }
                _ => {
                    score += self.weights.queen_distance_enemy_king
                        * manhattan_distance(sq, opp_king_sq);

                    score += self.weights.safe_queen_check
                        * popcnt(
                            (rook_attacks(opp_king_sq, occupied) & !board.pieces_occ[us]
                                | bishop_attacks(opp_king_sq, occupied) & !board.pieces_occ[us])
                                & attacks
                                & !opp_pawn_attacks,
                        ) as i32;
                }
            }

            if self.data.king_zone[them] & attacks != 0 {
                self.data.ks_attack_value[them] += self.weights.king_safety_attack_weights
                    [piece_type]
                    * popcnt(self.data.king_zone[them] & attacks) as i32;
                self.data.ks_attack_count[them] += 1;
            }
        }

        // Set-wise terms are white-minus-black sums; applying them only
        // during the white pass keeps them from double counting.
        if color == WHITE {
            if piece_type == BISHOP {
                score += self.weights.bishop_doubled
                    * ((popcnt(board.pieces[WHITE][BISHOP]) == 2) as i32
                        - (popcnt(board.pieces[BLACK][BISHOP]) == 2) as i32);
            }
            if piece_type == ROOK {
                score += self.weights.rook_king_line
                    * (popcnt(
                        rook_attacks(self.data.king_square[BLACK], occupied)
                            & board.pieces[WHITE][ROOK],
                    ) as i32
                        - popcnt(
                            rook_attacks(self.data.king_square[WHITE], occupied)
                                & board.pieces[BLACK][ROOK],
                        ) as i32);
                score += self.weights.rook_open_file
                    * (popcnt(self.data.open_files & board.pieces[WHITE][ROOK]) as i32
                        - popcnt(self.data.open_files & board.pieces[BLACK][ROOK]) as i32);
                score += self.weights.rook_half_open_file
                    * (popcnt(
                        self.data.semi_open[WHITE]
                            & !self.data.open_files
                            & board.pieces[WHITE][ROOK],
                    ) as i32
                        - popcnt(
                            self.data.semi_open[BLACK]
                                & !self.data.open_files
                                & board.pieces[BLACK][ROOK],
                        ) as i32);
            }
        }

        score
    }

    fn compute_kings(&mut self, board: &Board, color: usize) -> TaperedScore {
        let us = color;
        let them = flip_color(color);
        let king_sq = self.data.king_square[us];

        self.data.attacks[us][KING] = KING_ATTACKS[king_sq];
        self.data.all_attacks[us] |= KING_ATTACKS[king_sq];

        let mut res = ZERO_SCORE;
        res += self.weights.king_pawn_shield
            * popcnt(KING_ATTACKS[king_sq] & board.pieces[us][PAWN]) as i32;
        res += self.weights.king_close_opponent
            * popcnt(KING_ATTACKS[king_sq] & board.pieces_occ[them]) as i32;
        res
    }

    /// Danger for `color`'s king from the attackers accumulated by the
    /// piece passes, scaled superlinearly in the attacker count.
    fn compute_king_safety(&self, color: usize) -> TaperedScore {
        let count = self.data.ks_attack_count[color].min(7);
        let danger =
            self.data.ks_attack_value[color] * self.weights.king_safety_attack_scale[count] / 100;
        m(
            -danger.clamp(i32::from(i16::MIN) + 1, i32::from(i16::MAX)) as i16,
            0,
        )
    }

    /// Pieces no friendly attack defends, White minus Black.
    fn compute_hanging(&self, board: &Board) -> TaperedScore {
        let white_undefended = !self.data.all_attacks[WHITE];
        let black_undefended = !self.data.all_attacks[BLACK];

        let mut res = ZERO_SCORE;
        for piece in PAWN..=QUEEN {
            res += self.weights.hanging[piece]
                * (popcnt(board.pieces[WHITE][piece] & white_undefended) as i32
                    - popcnt(board.pieces[BLACK][piece] & black_undefended) as i32);
        }
        res
    }

    /// Absolute pins against `color`'s king.
    fn compute_pinned(&self, board: &Board, color: usize) -> TaperedScore {
        let us = color;
        let them = flip_color(color);
        let mut result = ZERO_SCORE;

        let opponent_occ = board.pieces_occ[them];
        let our_occ = board.pieces_occ[us];
        let king_sq = board.king_square(us);

        // Sliders that would hit the king if only our pieces stood in
        // the way: scan over opponent occupancy alone.
        let rook_pinners = rook_attacks(king_sq, opponent_occ)
            & (board.pieces[them][ROOK] | board.pieces[them][QUEEN]);
        let bishop_pinners = bishop_attacks(king_sq, opponent_occ)
            & (board.pieces[them][BISHOP] | board.pieces[them][QUEEN]);

        for pinner_sq in bits(&(rook_pinners | bishop_pinners)) {
            let between = IN_BETWEEN[king_sq][pinner_sq] & our_occ;
            if between == 0 || between & (between - 1) != 0 {
                continue;
            }

            let pinned_sq = between.trailing_zeros() as usize;
            let (_, pinned_piece) = board.get_piece(pinned_sq).unwrap();
            let (_, pinner_piece) = board.get_piece(pinner_sq).unwrap();
            debug_assert!((BISHOP..=QUEEN).contains(&pinner_piece));

            result += self.weights.pinned[pinned_piece * 3 + (pinner_piece - BISHOP)];
        }
        result
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new()
    }
}
