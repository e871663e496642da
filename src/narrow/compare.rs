// Comparison narrowers.
//
// Each relation carries a boolean result interval Z. Tests used to
// settle Z are all stable under contraction (disjointness, decided
// orderings, point equality), so a settled Z is reported persistent
// and the host may retire the node.

use crate::interval::{Interval, NarrowResult};
use crate::round::{int_add, int_sub};

type Triple = (Interval, Interval, Interval);

/// Z = (X == Y)
pub fn eq(z: Interval, x: Interval, y: Interval) -> NarrowResult<(Triple, bool)> {
    let z = z.meet(Interval::BOOL)?;
    if z == Interval::ONE {
        let m = x.meet(y)?;
        return Ok(((z, m, m), m.is_point()));
    }
    if x.disjoint(y) {
        // can never be equal
        let z = z.meet(Interval::ZERO)?;
        return Ok(((z, x, y), true));
    }
    if x.is_point() && y.is_point() {
        // both fixed on the same value
        let z = z.meet(Interval::ONE)?;
        return Ok(((z, x, y), true));
    }
    Ok(((z, x, y), false))
}

/// Z = (X <> Y)
pub fn ne(z: Interval, x: Interval, y: Interval) -> NarrowResult<(Triple, bool)> {
    let z = z.meet(Interval::BOOL)?;
    if z == Interval::ONE {
        // a point operand resting on the other's integral endpoint
        // trims that endpoint
        let x = if y.is_point() {
            x.exclude_point(y.lo())?
        } else {
            x
        };
        let y = if x.is_point() {
            y.exclude_point(x.lo())?
        } else {
            y
        };
        return Ok(((z, x, y), x.disjoint(y)));
    }
    if z == Interval::ZERO {
        let m = x.meet(y)?;
        return Ok(((z, m, m), m.is_point()));
    }
    if x.disjoint(y) {
        let z = z.meet(Interval::ONE)?;
        return Ok(((z, x, y), true));
    }
    if x.is_point() && y.is_point() {
        let z = z.meet(Interval::ZERO)?;
        return Ok(((z, x, y), true));
    }
    Ok(((z, x, y), false))
}

/// Z = (X <= Y)
pub fn le(z: Interval, x: Interval, y: Interval) -> NarrowResult<(Triple, bool)> {
    let z = z.meet(Interval::BOOL)?;
    if x.hi() <= y.lo() {
        // already ordered, and contraction keeps it so
        let z = z.meet(Interval::ONE)?;
        return Ok(((z, x, y), true));
    }
    if y.hi() < x.lo() {
        let z = z.meet(Interval::ZERO)?;
        return Ok(((z, x, y), true));
    }
    if z == Interval::ONE {
        let x = x.meet(Interval::raw(f64::NEG_INFINITY, y.hi()))?;
        let y = y.meet(Interval::raw(x.lo(), f64::INFINITY))?;
        return Ok(((z, x, y), false));
    }
    if z == Interval::ZERO {
        // not (x <= y) is y < x
        let ((_, y, x), persistent) = lt(Interval::ONE, y, x)?;
        return Ok(((z, x, y), persistent));
    }
    Ok(((z, x, y), false))
}

/// Z = (X < Y), integer operands.
pub fn lt(z: Interval, x: Interval, y: Interval) -> NarrowResult<(Triple, bool)> {
    let z = z.meet(Interval::BOOL)?;
    if x.hi() < y.lo() {
        let z = z.meet(Interval::ONE)?;
        return Ok(((z, x, y), true));
    }
    if y.hi() <= x.lo() {
        let z = z.meet(Interval::ZERO)?;
        return Ok(((z, x, y), true));
    }
    if z == Interval::ONE {
        let x = x.meet(Interval::raw(f64::NEG_INFINITY, strict_below(y.hi())))?;
        let y = y.meet(Interval::raw(strict_above(x.lo()), f64::INFINITY))?;
        return Ok(((z, x, y), false));
    }
    if z == Interval::ZERO {
        // not (x < y) is y <= x
        let ((_, y, x), persistent) = le(Interval::ONE, y, x)?;
        return Ok(((z, x, y), persistent));
    }
    Ok(((z, x, y), false))
}

/// Z = (X subset of Y): narrows X into Y when they overlap.
pub fn sub(z: Interval, x: Interval, y: Interval) -> NarrowResult<(Triple, bool)> {
    let z = z.meet(Interval::BOOL)?;
    match x.meet(y) {
        Ok(m) => {
            let z = z.meet(Interval::ONE)?;
            Ok(((z, m, y), true))
        }
        Err(_) => {
            let z = z.meet(Interval::ZERO)?;
            Ok(((z, x, y), true))
        }
    }
}

/// Largest integer strictly below `b` (for integral `b`; fractional
/// bounds floor, which is the same set on integers).
fn strict_below(b: f64) -> f64 {
    if b.fract() == 0.0 {
        int_sub(b, 1.0)
    } else {
        b.floor()
    }
}

/// Smallest integer strictly above `b`.
fn strict_above(b: f64) -> f64 {
    if b.fract() == 0.0 {
        int_add(b, 1.0)
    } else {
        b.ceil()
    }
}
