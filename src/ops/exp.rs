// Exponentials, logarithms, powers, and roots.

use crate::interval::{Infeasible, Interval, NarrowResult, Sign};
use crate::round::{exp_down, exp_up, ln_down, ln_up, powi_down, powi_up, root_down, root_up};

impl Interval {
    /// Interval exponential. Total; the lower bound is clamped at zero
    /// since `exp` never reaches it.
    pub fn exp(self) -> Self {
        Self::raw(exp_down(self.lo()).max(0.0), exp_up(self.hi()))
    }

    /// Interval natural logarithm; requires an upper bound above zero.
    /// The sub-zero part of the input contributes `ln(0) = -inf`.
    pub fn ln(self) -> NarrowResult<Self> {
        if !(self.hi() > 0.0) {
            return Err(Infeasible);
        }
        Ok(Self::raw(ln_down(self.lo().max(0.0)), ln_up(self.hi())))
    }

    /// General interval power `self ** exponent` via
    /// `exp(exponent * ln(self))`; callers restrict the base to the
    /// non-negative half-line first.
    pub fn pow(self, exponent: Self) -> NarrowResult<Self> {
        let lx = self.ln()?;
        Ok(exponent.mul(lx)?.exp())
    }

    /// Integer power, dispatching on sign class, exponent sign, and
    /// exponent parity. Negative exponents go through the reciprocal,
    /// so a base admitting zero saturates to infinity there.
    pub fn ipow(self, n: i32) -> NarrowResult<Self> {
        debug_assert!(n != 0 && n != i32::MIN);
        if n < 0 {
            return Self::ONE.odiv(self.ipow(-n)?);
        }
        let (a, b) = (self.lo(), self.hi());
        match (self.sign(), n % 2 == 0) {
            (Sign::Pos, _) => Self::new(powi_down(a, n), powi_up(b, n)),
            (Sign::Neg, true) => Self::new(powi_down(b, n), powi_up(a, n)),
            (Sign::Neg, false) => Self::new(powi_down(a, n), powi_up(b, n)),
            (Sign::Split, true) => Self::new(0.0, powi_up((-a).max(b), n)),
            (Sign::Split, false) => Self::new(powi_down(a, n), powi_up(b, n)),
        }
    }

    /// Principal `n`-th root of `self`, the inverse of [`Self::ipow`].
    ///
    /// For odd `n` the root is monotone and signed. For even `n` the
    /// radicand must reach the non-negative half-line, and the sign of
    /// the result is taken from `branch` (the current domain of the
    /// root variable): strictly positive keeps the positive branch,
    /// strictly negative the mirrored one, and anything touching zero
    /// keeps the hull of both.
    pub fn nroot(self, n: i32, branch: Self) -> NarrowResult<Self> {
        debug_assert!(n > 0);
        if n % 2 == 1 {
            return Self::new(root_down(self.lo(), n), root_up(self.hi(), n));
        }
        if self.hi() < 0.0 {
            return Err(Infeasible);
        }
        let r = Self::new(root_down(self.lo().max(0.0), n), root_up(self.hi(), n))?;
        if branch.lo() > 0.0 {
            Ok(r)
        } else if branch.hi() < 0.0 {
            Ok(r.neg())
        } else {
            Ok(r.neg().join(r))
        }
    }
}
