/*!
The interval data model.

An [`Interval`] is a closed range `[lo, hi]` over the extended reals,
represented by a pair of IEEE 754 doubles with the infinities as
sentinels for unbounded ends. Intervals are immutable values: every
operation returns a fresh interval, so a host running a choice-point
search never observes partial mutation.

An empty set is never materialized. Any operation whose result would
have `hi < lo` fails with [`Infeasible`] instead, and that failure is
the kernel's only way of reporting that a constraint cannot hold.
*/

use std::fmt;

/// Failure signal of the kernel.
///
/// Infeasibility is a normal outcome of narrowing, not an exceptional
/// condition: it tells the host that the current domains admit no
/// solution of the relation being narrowed. Numeric faults (overflow,
/// zero divisors, domain errors) are recovered internally; only
/// genuinely undefined forms and empty intersections surface as this
/// error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Infeasible;

impl Infeasible {
    /// Message form of the failure.
    pub const fn as_str(&self) -> &'static str {
        "empty interval"
    }
}

impl fmt::Display for Infeasible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for Infeasible {}

/// Result type of every fallible kernel operation.
pub type NarrowResult<T> = Result<T, Infeasible>;

/// Largest magnitude at which every integer is exactly representable
/// as an `f64` (2^53). Beyond it, integral-valued doubles are rounded
/// arithmetic results rather than exact integers.
pub const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Sign class of an interval.
///
/// Multiplication, division, and integer powers dispatch on the sign
/// class of each operand; encoding the classification once keeps those
/// case tables exhaustive and cheap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    /// Entirely non-negative (`lo >= 0`).
    Pos,
    /// Entirely non-positive (`hi <= 0`).
    Neg,
    /// Straddles zero (`lo < 0 < hi`).
    Split,
}

/// A closed interval of extended reals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    /// The top of the interval lattice: `[-inf, +inf]`.
    pub const UNIVERSAL: Self = Self {
        lo: f64::NEG_INFINITY,
        hi: f64::INFINITY,
    };

    /// Default finite real domain: `[-MAX, +MAX]`.
    pub const FINITE_REAL: Self = Self {
        lo: -f64::MAX,
        hi: f64::MAX,
    };

    /// Default finite integer domain: the exactly representable
    /// integer range of the bound representation, `[-2^53, 2^53]`.
    pub const FINITE_INT: Self = Self {
        lo: -MAX_EXACT_INT,
        hi: MAX_EXACT_INT,
    };

    /// The undetermined boolean domain `[0, 1]`.
    pub const BOOL: Self = Self { lo: 0.0, hi: 1.0 };

    /// The point zero (boolean false).
    pub const ZERO: Self = Self { lo: 0.0, hi: 0.0 };

    /// The point one (boolean true).
    pub const ONE: Self = Self { lo: 1.0, hi: 1.0 };

    /// Constructs an interval from host-supplied bounds.
    ///
    /// A NaN bound or `lo > hi` is treated as infeasibility per the
    /// kernel's error policy: malformed input describes an empty set.
    pub fn new(lo: f64, hi: f64) -> NarrowResult<Self> {
        if lo.is_nan() || hi.is_nan() || lo > hi {
            Err(Infeasible)
        } else {
            Ok(Self { lo, hi })
        }
    }

    /// Constructs an interval whose invariant is upheld by the caller.
    pub(crate) const fn raw(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// The singleton interval `[v, v]`.
    pub fn point(v: f64) -> Self {
        debug_assert!(!v.is_nan());
        Self { lo: v, hi: v }
    }

    /// Lower bound.
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper bound.
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// True when the interval is a single value.
    pub fn is_point(&self) -> bool {
        self.lo == self.hi
    }

    /// True when the interval is exactly `[0, 0]`.
    pub fn is_zero_point(&self) -> bool {
        self.lo == 0.0 && self.hi == 0.0
    }

    /// True when both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite()
    }

    /// True when `v` lies within the interval.
    pub fn contains(&self, v: f64) -> bool {
        self.lo <= v && v <= self.hi
    }

    /// True when zero lies within the interval (possibly as a bound).
    pub fn contains_zero(&self) -> bool {
        self.lo <= 0.0 && 0.0 <= self.hi
    }

    /// Sign classification for case dispatch.
    pub fn sign(&self) -> Sign {
        if self.lo >= 0.0 {
            Sign::Pos
        } else if self.hi <= 0.0 {
            Sign::Neg
        } else {
            Sign::Split
        }
    }

    /// True when the intervals share no value.
    pub fn disjoint(&self, other: Self) -> bool {
        self.hi < other.lo || other.hi < self.lo
    }

    /// Intersection; fails when the intervals are disjoint.
    pub fn meet(self, other: Self) -> NarrowResult<Self> {
        let lo = self.lo.max(other.lo);
        let hi = self.hi.min(other.hi);
        if lo <= hi {
            Ok(Self { lo, hi })
        } else {
            Err(Infeasible)
        }
    }

    /// Interval union (convex hull of both operands).
    pub fn join(self, other: Self) -> Self {
        Self {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
        }
    }

    /// Inward rounding to integer bounds: the tightest integer-bounded
    /// interval inside `self`. Fails when no integer survives.
    pub fn integer(self) -> NarrowResult<Self> {
        Self::new(self.lo.ceil(), self.hi.floor())
    }
}
