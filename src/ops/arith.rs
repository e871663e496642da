// Interval arithmetic: sums, products, quotients, order statistics.

use crate::interval::{Infeasible, Interval, NarrowResult, Sign};
use crate::round::{
    add_down, add_up, div_down, div_up, int_add, int_sub, mul_down, mul_up, sub_down, sub_up,
};

impl Interval {
    /// Interval sum.
    pub fn add(self, rhs: Self) -> NarrowResult<Self> {
        Self::new(add_down(self.lo(), rhs.lo()), add_up(self.hi(), rhs.hi()))
    }

    /// Interval difference.
    pub fn sub(self, rhs: Self) -> NarrowResult<Self> {
        Self::new(sub_down(self.lo(), rhs.hi()), sub_up(self.hi(), rhs.lo()))
    }

    /// Interval negation. Exact: negation never rounds.
    pub fn neg(self) -> Self {
        Self::raw(-self.hi(), -self.lo())
    }

    /// Interval product, dispatching on the sign class of each operand.
    pub fn mul(self, rhs: Self) -> NarrowResult<Self> {
        if self.is_zero_point() || rhs.is_zero_point() {
            return Ok(Self::ZERO);
        }
        let (a, b) = (self.lo(), self.hi());
        let (c, d) = (rhs.lo(), rhs.hi());
        match (self.sign(), rhs.sign()) {
            (Sign::Pos, Sign::Pos) => Self::new(mul_down(a, c), mul_up(b, d)),
            (Sign::Pos, Sign::Neg) => Self::new(mul_down(b, c), mul_up(a, d)),
            (Sign::Pos, Sign::Split) => Self::new(mul_down(b, c), mul_up(b, d)),
            (Sign::Neg, Sign::Pos) => Self::new(mul_down(a, d), mul_up(b, c)),
            (Sign::Neg, Sign::Neg) => Self::new(mul_down(b, d), mul_up(a, c)),
            (Sign::Neg, Sign::Split) => Self::new(mul_down(a, d), mul_up(a, c)),
            (Sign::Split, Sign::Pos) => Self::new(mul_down(a, d), mul_up(b, d)),
            (Sign::Split, Sign::Neg) => Self::new(mul_down(b, c), mul_up(a, c)),
            (Sign::Split, Sign::Split) => Self::new(
                mul_down(a, d).min(mul_down(b, c)),
                mul_up(a, c).max(mul_up(b, d)),
            ),
        }
    }

    /// Interval quotient for the relation `self = z * rhs`.
    ///
    /// A divisor straddling zero yields the universal interval (the
    /// true quotient set is two half-lines whose hull is unbounded).
    /// A zero-point divisor is consistent only with a numerator that
    /// admits zero. A zero endpoint on the divisor saturates the
    /// corresponding quotient bound to the correctly signed infinity.
    pub fn odiv(self, rhs: Self) -> NarrowResult<Self> {
        if rhs.is_zero_point() {
            return if self.contains_zero() {
                Ok(Self::UNIVERSAL)
            } else {
                Err(Infeasible)
            };
        }
        let (a, b) = (self.lo(), self.hi());
        let (c, d) = (rhs.lo(), rhs.hi());
        match rhs.sign() {
            Sign::Split => Ok(Self::UNIVERSAL),
            Sign::Pos => match self.sign() {
                Sign::Pos => Self::new(div_down(a, d), odiv_hi(b, c)),
                Sign::Neg => Self::new(odiv_lo(a, c), div_up(b, d)),
                Sign::Split => Self::new(odiv_lo(a, c), odiv_hi(b, c)),
            },
            Sign::Neg => match self.sign() {
                Sign::Pos => Self::new(odiv_lo(b, d), div_up(a, c)),
                Sign::Neg => Self::new(div_down(b, c), odiv_hi(a, d)),
                Sign::Split => Self::new(odiv_lo(b, d), odiv_hi(a, d)),
            },
        }
    }

    /// Endpointwise minimum. Exact.
    pub fn min(self, rhs: Self) -> Self {
        Self::raw(self.lo().min(rhs.lo()), self.hi().min(rhs.hi()))
    }

    /// Endpointwise maximum. Exact.
    pub fn max(self, rhs: Self) -> Self {
        Self::raw(self.lo().max(rhs.lo()), self.hi().max(rhs.hi()))
    }

    /// Absolute value. Exact.
    pub fn abs(self) -> Self {
        match self.sign() {
            Sign::Pos => self,
            Sign::Neg => self.neg(),
            Sign::Split => Self::raw(0.0, (-self.lo()).max(self.hi())),
        }
    }

    /// Integer point exclusion: when `v` sits exactly on an integral
    /// endpoint, step that endpoint inward. Meaningful for integer
    /// intervals only; fractional endpoints are left alone.
    pub fn exclude_point(self, v: f64) -> NarrowResult<Self> {
        if v.fract() != 0.0 {
            return Ok(self);
        }
        if v == self.lo() {
            Self::new(int_add(self.lo(), 1.0), self.hi())
        } else if v == self.hi() {
            Self::new(self.lo(), int_sub(self.hi(), 1.0))
        } else {
            Ok(self)
        }
    }
}

/// Quotient lower bound: division by a zero endpoint falls to the
/// negative infinity the sign analysis calls for.
fn odiv_lo(x: f64, y: f64) -> f64 {
    if y == 0.0 {
        f64::NEG_INFINITY
    } else {
        div_down(x, y)
    }
}

/// Quotient upper bound at a zero divisor endpoint.
fn odiv_hi(x: f64, y: f64) -> f64 {
    if y == 0.0 {
        f64::INFINITY
    } else {
        div_up(x, y)
    }
}
