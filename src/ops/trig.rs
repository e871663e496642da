// Monotone trigonometric pieces.
//
// These operate on one sector of the principal cylinder, where the
// function is monotone; the narrowers in `narrow::trig` compose them
// with the cylinder projection and sector reflections.

use crate::interval::Interval;
use crate::round::{
    acos_down, acos_up, asin_down, asin_up, atan_down, atan_up, cos_down, cos_up, sin_down,
    sin_up,
};

impl Interval {
    /// Sine over a sub-interval of `[-pi/2, pi/2]` (monotone
    /// increasing), clamped to the unit range.
    pub(crate) fn sin_mono(self) -> Self {
        Self::raw(
            sin_down(self.lo()).max(-1.0),
            sin_up(self.hi()).min(1.0),
        )
    }

    /// Arcsine of a sub-interval of `[-1, 1]`; monotone increasing.
    pub(crate) fn asin_mono(self) -> Self {
        Self::raw(asin_down(self.lo()), asin_up(self.hi()))
    }

    /// Cosine over a sub-interval of `[0, pi]` (monotone decreasing),
    /// clamped to the unit range.
    pub(crate) fn cos_mono(self) -> Self {
        Self::raw(
            cos_down(self.hi()).max(-1.0),
            cos_up(self.lo()).min(1.0),
        )
    }

    /// Arccosine of a sub-interval of `[-1, 1]`; monotone decreasing.
    pub(crate) fn acos_mono(self) -> Self {
        Self::raw(acos_down(self.hi()), acos_up(self.lo()))
    }

    /// Arctangent; monotone increasing and total.
    pub(crate) fn atan_mono(self) -> Self {
        Self::raw(atan_down(self.lo()), atan_up(self.hi()))
    }
}
