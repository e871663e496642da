// Boolean narrowers.
//
// Operands are forced into [0, 1] with integral bounds first, then a
// closed truth-table propagates: two determined positions force the
// third, partial information flows where the connective allows, and an
// otherwise unconstrained triple passes through unchanged.

use crate::interval::{Interval, NarrowResult};

type Triple = (Interval, Interval, Interval);

/// Three-valued truth carried by a boolean interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Truth {
    False,
    True,
    Unknown,
}

use Truth::{False, True};

fn truth(b: Interval) -> Truth {
    if b == Interval::ZERO {
        False
    } else if b == Interval::ONE {
        True
    } else {
        Truth::Unknown
    }
}

/// Forces an interval into the boolean domain.
fn force_bool(b: Interval) -> NarrowResult<Interval> {
    b.meet(Interval::BOOL)?.integer()
}

fn determined(b: Interval) -> bool {
    b == Interval::ZERO || b == Interval::ONE
}

fn persistent2(z: Interval, x: Interval) -> bool {
    determined(z) && determined(x)
}

fn persistent3(z: Interval, x: Interval, y: Interval) -> bool {
    determined(z) && determined(x) && determined(y)
}

/// Z = not X
pub fn not(z: Interval, x: Interval) -> NarrowResult<((Interval, Interval), bool)> {
    let z = force_bool(z)?;
    let x = force_bool(x)?;
    let z = z.meet(complement(x))?;
    let x = x.meet(complement(z))?;
    Ok(((z, x), persistent2(z, x)))
}

/// One minus a boolean interval; exact on {0, 1} bounds.
fn complement(b: Interval) -> Interval {
    Interval::raw(1.0 - b.hi(), 1.0 - b.lo())
}

/// Z = X and Y
pub fn and(z: Interval, x: Interval, y: Interval) -> NarrowResult<(Triple, bool)> {
    let z = force_bool(z)?;
    let x = force_bool(x)?;
    let y = force_bool(y)?;
    let (z, x, y) = match (truth(z), truth(x), truth(y)) {
        (_, False, _) | (_, _, False) => (z.meet(Interval::ZERO)?, x, y),
        (True, _, _) => (z, x.meet(Interval::ONE)?, y.meet(Interval::ONE)?),
        (_, True, True) => (z.meet(Interval::ONE)?, x, y),
        (False, True, _) => (z, x, y.meet(Interval::ZERO)?),
        (False, _, True) => (z, x.meet(Interval::ZERO)?, y),
        _ => (z, x, y),
    };
    Ok(((z, x, y), persistent3(z, x, y)))
}

/// Z = X or Y
pub fn or(z: Interval, x: Interval, y: Interval) -> NarrowResult<(Triple, bool)> {
    let z = force_bool(z)?;
    let x = force_bool(x)?;
    let y = force_bool(y)?;
    let (z, x, y) = match (truth(z), truth(x), truth(y)) {
        (_, True, _) | (_, _, True) => (z.meet(Interval::ONE)?, x, y),
        (False, _, _) => (z, x.meet(Interval::ZERO)?, y.meet(Interval::ZERO)?),
        (_, False, False) => (z.meet(Interval::ZERO)?, x, y),
        (True, False, _) => (z, x, y.meet(Interval::ONE)?),
        (True, _, False) => (z, x.meet(Interval::ONE)?, y),
        _ => (z, x, y),
    };
    Ok(((z, x, y), persistent3(z, x, y)))
}

/// Z = X xor Y
pub fn xor(z: Interval, x: Interval, y: Interval) -> NarrowResult<(Triple, bool)> {
    let z = force_bool(z)?;
    let x = force_bool(x)?;
    let y = force_bool(y)?;
    let (z, x, y) = match (truth(z), truth(x), truth(y)) {
        (_, True, True) | (_, False, False) => (z.meet(Interval::ZERO)?, x, y),
        (_, True, False) | (_, False, True) => (z.meet(Interval::ONE)?, x, y),
        (True, True, _) => (z, x, y.meet(Interval::ZERO)?),
        (True, False, _) => (z, x, y.meet(Interval::ONE)?),
        (True, _, True) => (z, x.meet(Interval::ZERO)?, y),
        (True, _, False) => (z, x.meet(Interval::ONE)?, y),
        (False, True, _) => (z, x, y.meet(Interval::ONE)?),
        (False, False, _) => (z, x, y.meet(Interval::ZERO)?),
        (False, _, True) => (z, x.meet(Interval::ONE)?, y),
        (False, _, False) => (z, x.meet(Interval::ZERO)?, y),
        _ => (z, x, y),
    };
    Ok(((z, x, y), persistent3(z, x, y)))
}

/// Z = X nand Y
pub fn nand(z: Interval, x: Interval, y: Interval) -> NarrowResult<(Triple, bool)> {
    let z = force_bool(z)?;
    let x = force_bool(x)?;
    let y = force_bool(y)?;
    let (z, x, y) = match (truth(z), truth(x), truth(y)) {
        (_, False, _) | (_, _, False) => (z.meet(Interval::ONE)?, x, y),
        (_, True, True) => (z.meet(Interval::ZERO)?, x, y),
        (False, _, _) => (z, x.meet(Interval::ONE)?, y.meet(Interval::ONE)?),
        (True, True, _) => (z, x, y.meet(Interval::ZERO)?),
        (True, _, True) => (z, x.meet(Interval::ZERO)?, y),
        _ => (z, x, y),
    };
    Ok(((z, x, y), persistent3(z, x, y)))
}

/// Z = X nor Y
pub fn nor(z: Interval, x: Interval, y: Interval) -> NarrowResult<(Triple, bool)> {
    let z = force_bool(z)?;
    let x = force_bool(x)?;
    let y = force_bool(y)?;
    let (z, x, y) = match (truth(z), truth(x), truth(y)) {
        (_, True, _) | (_, _, True) => (z.meet(Interval::ZERO)?, x, y),
        (_, False, False) => (z.meet(Interval::ONE)?, x, y),
        (True, _, _) => (z, x.meet(Interval::ZERO)?, y.meet(Interval::ZERO)?),
        (False, False, _) => (z, x, y.meet(Interval::ONE)?),
        (False, _, False) => (z, x.meet(Interval::ONE)?, y),
        _ => (z, x, y),
    };
    Ok(((z, x, y), persistent3(z, x, y)))
}

/// Z = (X implies Y)
pub fn implies(z: Interval, x: Interval, y: Interval) -> NarrowResult<(Triple, bool)> {
    let z = force_bool(z)?;
    let x = force_bool(x)?;
    let y = force_bool(y)?;
    let (z, x, y) = match (truth(z), truth(x), truth(y)) {
        (_, False, _) | (_, _, True) => (z.meet(Interval::ONE)?, x, y),
        (_, True, False) => (z.meet(Interval::ZERO)?, x, y),
        (False, _, _) => (z, x.meet(Interval::ONE)?, y.meet(Interval::ZERO)?),
        (True, True, _) => (z, x, y.meet(Interval::ONE)?),
        (True, _, False) => (z, x.meet(Interval::ZERO)?, y),
        _ => (z, x, y),
    };
    Ok(((z, x, y), persistent3(z, x, y)))
}
