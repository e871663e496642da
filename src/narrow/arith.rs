// Arithmetic narrowers.
//
// Each contractor composes a forward step (recompute the result from
// the operands) with backward steps (solve the relation for each
// operand), intersecting every variable with what the others admit.

use num_traits::cast;

use crate::interval::{Infeasible, Interval, NarrowResult, Sign};

type Triple = (Interval, Interval, Interval);
type Pair = (Interval, Interval);

/// Z = X + Y
pub fn add(z: Interval, x: Interval, y: Interval) -> NarrowResult<Triple> {
    let z = z.meet(x.add(y)?)?;
    let x = x.meet(z.sub(y)?)?;
    let y = y.meet(z.sub(x)?)?;
    Ok((z, x, y))
}

/// Z = X * Y
pub fn mul(z: Interval, x: Interval, y: Interval) -> NarrowResult<Triple> {
    let z = z.meet(x.mul(y)?)?;
    let y = div_refine(z, x, y)?;
    let x = div_refine(z, y, x)?;
    Ok((z, x, y))
}

/// `cur ∩ (num / den)`, refined when the divisor straddles zero and
/// the numerator does not: the quotient set is then two half-lines
/// around zero, and only the sides `cur` already reaches survive.
fn div_refine(num: Interval, den: Interval, cur: Interval) -> NarrowResult<Interval> {
    if den.sign() == Sign::Split && !num.contains_zero() {
        let below = num.odiv(Interval::raw(den.lo(), 0.0))?;
        let above = num.odiv(Interval::raw(0.0, den.hi()))?;
        match (cur.meet(below), cur.meet(above)) {
            (Ok(a), Ok(b)) => Ok(a.join(b)),
            (Ok(a), Err(_)) => Ok(a),
            (Err(_), Ok(b)) => Ok(b),
            (Err(_), Err(_)) => Err(Infeasible),
        }
    } else {
        cur.meet(num.odiv(den)?)
    }
}

/// Z = -X
pub fn minus(z: Interval, x: Interval) -> NarrowResult<Pair> {
    let z = z.meet(x.neg())?;
    let x = x.meet(z.neg())?;
    Ok((z, x))
}

/// Z = |X|
pub fn abs(z: Interval, x: Interval) -> NarrowResult<Pair> {
    let z = z.meet(x.abs())?;
    // X lies in the mirror image of Z, on whichever sides X reaches
    let x = match (x.meet(z.neg()), x.meet(z)) {
        (Ok(a), Ok(b)) => a.join(b),
        (Ok(a), Err(_)) => a,
        (Err(_), Ok(b)) => b,
        (Err(_), Err(_)) => return Err(Infeasible),
    };
    Ok((z, x))
}

/// Z = min(X, Y)
pub fn min(z: Interval, x: Interval, y: Interval) -> NarrowResult<Triple> {
    let z = z.meet(x.min(y))?;
    // both operands sit at or above the minimum
    let x = x.meet(Interval::raw(z.lo(), f64::INFINITY))?;
    let y = y.meet(Interval::raw(z.lo(), f64::INFINITY))?;
    // an operand out of Z's reach leaves the other to supply it
    if x.disjoint(z) {
        let y = y.meet(z)?;
        Ok((z, x, y))
    } else if y.disjoint(z) {
        let x = x.meet(z)?;
        Ok((z, x, y))
    } else {
        Ok((z, x, y))
    }
}

/// Z = max(X, Y)
pub fn max(z: Interval, x: Interval, y: Interval) -> NarrowResult<Triple> {
    let z = z.meet(x.max(y))?;
    let x = x.meet(Interval::raw(f64::NEG_INFINITY, z.hi()))?;
    let y = y.meet(Interval::raw(f64::NEG_INFINITY, z.hi()))?;
    if x.disjoint(z) {
        let y = y.meet(z)?;
        Ok((z, x, y))
    } else if y.disjoint(z) {
        let x = x.meet(z)?;
        Ok((z, x, y))
    } else {
        Ok((z, x, y))
    }
}

/// Z = exp(X)
pub fn exp(z: Interval, x: Interval) -> NarrowResult<Pair> {
    let z = z.meet(x.exp())?;
    let x = x.meet(z.ln()?)?;
    Ok((z, x))
}

/// Z = X ** Y
pub fn pow(z: Interval, x: Interval, y: Interval) -> NarrowResult<Triple> {
    // a fixed zero exponent settles the result: x^0 = 1, 0^0 included
    if y.is_zero_point() {
        return Ok((z.meet(Interval::ONE)?, x, y));
    }

    if let Some(n) = point_exponent(y) {
        let z = z.meet(x.ipow(n)?)?;
        let x = if n > 0 {
            x.meet(z.nroot(n, x)?)?
        } else {
            x.meet(Interval::ONE.odiv(z)?.nroot(-n, x)?)?
        };
        return Ok((z, x, y));
    }

    // general exponent: the base is confined to the non-negative ray
    let x = x.meet(Interval::raw(0.0, f64::INFINITY))?;
    let z = match x.pow(y) {
        Ok(f) => z.meet(f)?,
        // base fixed at zero: 0^y is 0 or blows up, never negative
        Err(_) => z.meet(Interval::raw(0.0, f64::INFINITY))?,
    };
    // X from Z^(1/Y), attempted only when the pieces are defined
    let x = match Interval::ONE.odiv(y).and_then(|iy| z.pow(iy)) {
        Ok(b) => x.meet(b)?,
        Err(_) => x,
    };
    // Y from log Z / log X needs a base bounded away from zero
    let y = if x.lo() > 0.0 {
        match z.ln().and_then(|lz| x.ln().and_then(|lx| lz.odiv(lx))) {
            Ok(b) => y.meet(b)?,
            Err(_) => y,
        }
    } else {
        y
    };
    Ok((z, x, y))
}

/// X integral: inward rounding to integer bounds.
pub fn integral(x: Interval) -> NarrowResult<Interval> {
    x.integer()
}

/// A point exponent that is an integer usable with `ipow`.
fn point_exponent(y: Interval) -> Option<i32> {
    if !y.is_point() || y.lo().fract() != 0.0 {
        return None;
    }
    match cast::<f64, i32>(y.lo()) {
        Some(n) if n != 0 && n != i32::MIN => Some(n),
        _ => None,
    }
}
