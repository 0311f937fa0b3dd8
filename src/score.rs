//! Tapered middlegame/endgame score pair.
//!
//! Every evaluation term carries two weights: one for the middlegame
//! and one for the endgame. Terms are summed componentwise and only
//! collapsed to a single centipawn value at the end, by interpolating
//! against the game phase.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub struct TaperedScore {
    pub mg: i16,
    pub eg: i16,
}

/// Shorthand constructor, mirroring the usual `S(mg, eg)` idiom of
/// hand-tuned evaluations.
#[inline(always)]
pub const fn m(mg: i16, eg: i16) -> TaperedScore {
    TaperedScore { mg, eg }
}

pub const ZERO_SCORE: TaperedScore = m(0, 0);

impl TaperedScore {
    /// Interpolate to a scalar. `phase` runs from 0.0 (middlegame) to
    /// 1.0 (deep endgame) and is clamped into that range; the result
    /// is truncated toward zero.
    #[inline]
    pub fn blend(self, phase: f32) -> i32 {
        let phase = phase.clamp(0.0, 1.0);
        (f32::from(self.mg) * (1.0 - phase) + f32::from(self.eg) * phase) as i32
    }
}

impl Add for TaperedScore {
    type Output = TaperedScore;

    #[inline(always)]
    fn add(self, rhs: TaperedScore) -> TaperedScore {
        m(self.mg + rhs.mg, self.eg + rhs.eg)
    }
}

impl AddAssign for TaperedScore {
    #[inline(always)]
    fn add_assign(&mut self, rhs: TaperedScore) {
        *self = *self + rhs;
    }
}

impl Sub for TaperedScore {
    type Output = TaperedScore;

    #[inline(always)]
    fn sub(self, rhs: TaperedScore) -> TaperedScore {
        m(self.mg - rhs.mg, self.eg - rhs.eg)
    }
}

impl SubAssign for TaperedScore {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: TaperedScore) {
        *self = *self - rhs;
    }
}

impl Neg for TaperedScore {
    type Output = TaperedScore;

    #[inline(always)]
    fn neg(self) -> TaperedScore {
        m(-self.mg, -self.eg)
    }
}

impl Mul<i32> for TaperedScore {
    type Output = TaperedScore;

    #[inline(always)]
    fn mul(self, rhs: i32) -> TaperedScore {
        m(
            (i32::from(self.mg) * rhs) as i16,
            (i32::from(self.eg) * rhs) as i16,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn componentwise_arithmetic() {
        let a = m(10, -20);
        let b = m(-3, 5);
        assert_eq!(a + b, m(7, -15));
        assert_eq!(a - b, m(13, -25));
        assert_eq!(-a, m(-10, 20));
        assert_eq!(a * 3, m(30, -60));
        assert_eq!(a * -1, m(-10, 20));
    }

    #[test]
    fn blend_endpoints() {
        let s = m(40, -60);
        assert_eq!(s.blend(0.0), 40);
        assert_eq!(s.blend(1.0), -60);
    }

    #[test]
    fn blend_clamps_out_of_range_phase() {
        let s = m(40, -60);
        assert_eq!(s.blend(-1.5), s.blend(0.0));
        assert_eq!(s.blend(7.0), s.blend(1.0));
    }

    #[test]
    fn blend_truncates_toward_zero() {
        // 0.5 phase of (1, 0) is 0.5, which truncates to 0; of (-1, 0)
        // is -0.5, which also truncates to 0.
        assert_eq!(m(1, 0).blend(0.5), 0);
        assert_eq!(m(-1, 0).blend(0.5), 0);
    }
}
