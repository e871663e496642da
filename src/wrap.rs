/*!
Projection of periodic-function arguments onto a principal cylinder.

A trig narrower cannot treat an arbitrary input interval directly: the
function is only monotone per sector within one period. This module
picks integer multipliers `m = round(x / W)` for both bounds and shifts
the input onto the cylinder centered at zero. The period `W` is an
irrational multiple of pi, so it is carried as an outward-rounded
constant interval and all shifting is interval arithmetic; projection
and unwrapping never lose enclosure.

Inputs that are unbounded, wider than one period, or spread over more
than two cylinders are not projected at all.
*/

use std::f64::consts::PI;

use crate::interval::{Interval, NarrowResult};
use crate::round::{mul_down, mul_up, next_down, next_up};

/// A function period, nominal width plus enclosure of the true width.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Period {
    width: f64,
    enc: Interval,
}

impl Period {
    /// The sin/cos period `2*pi`.
    pub fn full_turn() -> Self {
        let w = 2.0 * PI;
        Self {
            width: w,
            enc: Interval::raw(next_down(w), next_up(w)),
        }
    }

    /// The tan period `pi`.
    pub fn half_turn() -> Self {
        Self {
            width: PI,
            enc: Interval::raw(next_down(PI), next_up(PI)),
        }
    }

    /// Enclosure of `m` periods, the offset of cylinder `m`.
    pub fn offset(&self, m: f64) -> Interval {
        if m >= 0.0 {
            Interval::raw(mul_down(m, self.enc.lo()), mul_up(m, self.enc.hi()))
        } else {
            Interval::raw(mul_down(m, self.enc.hi()), mul_up(m, self.enc.lo()))
        }
    }

    /// Enclosure of half a period, the cylinder radius.
    fn half(&self) -> Interval {
        Interval::raw(self.enc.lo() / 2.0, self.enc.hi() / 2.0)
    }
}

/// Enclosure of pi itself, for the sector reflections of `sin`.
pub(crate) fn pi_enclosure() -> Interval {
    Interval::raw(next_down(PI), next_up(PI))
}

/// Outcome of projecting an input interval onto the principal cylinder.
#[derive(Clone, Debug)]
pub(crate) enum Wrap {
    /// No projection: unbounded, too wide, or too many cylinders.
    Whole,
    /// The whole input lies on cylinder `m`.
    One(f64, Interval),
    /// The input spans two adjacent cylinders; each slice carries its
    /// own multiplier and overlaps the shared edge, so no point is
    /// dropped by the split.
    Two((f64, Interval), (f64, Interval)),
}

/// Projects `x` onto the principal cylinder of `p`.
pub(crate) fn cylinders(x: Interval, p: &Period) -> Wrap {
    if !x.is_finite() || x.hi() - x.lo() > p.width {
        return Wrap::Whole;
    }
    let ml = (x.lo() / p.width).round();
    let mh = (x.hi() / p.width).round();
    if ml == mh {
        match project(x, ml, p) {
            Ok(xp) => Wrap::One(ml, xp),
            Err(_) => Wrap::Whole,
        }
    } else if mh - ml == 1.0 {
        split_at_edge(x, ml, mh, p)
    } else {
        Wrap::Whole
    }
}

/// Shifts a slice onto its cylinder: `xs - m*W`.
fn project(xs: Interval, m: f64, p: &Period) -> NarrowResult<Interval> {
    xs.sub(p.offset(m))
}

fn split_at_edge(x: Interval, ml: f64, mh: f64, p: &Period) -> Wrap {
    let edge = match p.offset(ml).add(p.half()) {
        Ok(e) => e,
        Err(_) => return Wrap::Whole,
    };
    let below = x.meet(Interval::raw(f64::NEG_INFINITY, edge.hi()));
    let above = x.meet(Interval::raw(edge.lo(), f64::INFINITY));
    match (below, above) {
        (Ok(xa), Ok(xb)) => match (project(xa, ml, p), project(xb, mh, p)) {
            (Ok(pa), Ok(pb)) => Wrap::Two((ml, pa), (mh, pb)),
            _ => Wrap::Whole,
        },
        (Ok(xa), Err(_)) => match project(xa, ml, p) {
            Ok(pa) => Wrap::One(ml, pa),
            Err(_) => Wrap::Whole,
        },
        (Err(_), Ok(xb)) => match project(xb, mh, p) {
            Ok(pb) => Wrap::One(mh, pb),
            Err(_) => Wrap::Whole,
        },
        (Err(_), Err(_)) => Wrap::Whole,
    }
}
