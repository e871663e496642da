// Trigonometric narrowers.
//
// Within one cylinder the function is split into convex sectors where
// it is monotone; each sector narrows through the monotone primitive
// and its inverse, and the sector results are unioned. Inputs spanning
// two adjacent cylinders are split at the shared edge and each half is
// treated separately. Inputs too wide to project only clamp the
// output interval.

use std::f64::consts::FRAC_PI_2;

use crate::interval::{Infeasible, Interval, NarrowResult};
use crate::round::{tan_down, tan_up};
use crate::wrap::{cylinders, pi_enclosure, Period, Wrap};

type Pair = (Interval, Interval);

/// Z = sin(X)
pub fn sin(z: Interval, x: Interval) -> NarrowResult<Pair> {
    let z = z.meet(Interval::raw(-1.0, 1.0))?;
    narrow_periodic(z, x, &Period::full_turn(), sin_cylinder)
}

/// Z = cos(X)
pub fn cos(z: Interval, x: Interval) -> NarrowResult<Pair> {
    let z = z.meet(Interval::raw(-1.0, 1.0))?;
    narrow_periodic(z, x, &Period::full_turn(), cos_cylinder)
}

/// Z = tan(X)
pub fn tan(z: Interval, x: Interval) -> NarrowResult<Pair> {
    narrow_periodic(z, x, &Period::half_turn(), tan_cylinder)
}

/// Wrap, narrow per cylinder, unwrap. `cyl` contracts `(z, xp)` on the
/// principal cylinder and returns `None` when every sector is empty.
fn narrow_periodic(
    z: Interval,
    x: Interval,
    p: &Period,
    cyl: fn(Interval, Interval) -> Option<Pair>,
) -> NarrowResult<Pair> {
    match cylinders(x, p) {
        Wrap::Whole => Ok((z, x)),
        Wrap::One(m, xp) => {
            let (z1, xp1) = cyl(z, xp).ok_or(Infeasible)?;
            let x1 = x.meet(xp1.add(p.offset(m))?)?;
            Ok((z1, x1))
        }
        Wrap::Two((ma, xa), (mb, xb)) => {
            let ra = unwrapped(z, xa, ma, p, cyl);
            let rb = unwrapped(z, xb, mb, p, cyl);
            match (ra, rb) {
                (Some((za, ua)), Some((zb, ub))) => Ok((za.join(zb), x.meet(ua.join(ub))?)),
                (Some((za, ua)), None) => Ok((za, x.meet(ua)?)),
                (None, Some((zb, ub))) => Ok((zb, x.meet(ub)?)),
                (None, None) => Err(Infeasible),
            }
        }
    }
}

fn unwrapped(
    z: Interval,
    xp: Interval,
    m: f64,
    p: &Period,
    cyl: fn(Interval, Interval) -> Option<Pair>,
) -> Option<Pair> {
    let (z1, xp1) = cyl(z, xp)?;
    let x1 = xp1.add(p.offset(m)).ok()?;
    Some((z1, x1))
}

/// One cylinder of sin: three sectors, the outer two reflected into
/// the monotone middle through `+/-pi - x`.
fn sin_cylinder(z: Interval, xp: Interval) -> Option<Pair> {
    let pi = pi_enclosure();
    let mut acc = None;

    // middle [-pi/2, pi/2], monotone increasing
    if let Ok(s) = xp.meet(Interval::raw(-FRAC_PI_2, FRAC_PI_2)) {
        if let Some(r) = sin_sector(z, s) {
            merge(&mut acc, r);
        }
    }
    // left [-pi, -pi/2]: sin(x) = sin(-pi - x)
    if let Ok(s) = xp.meet(Interval::raw(f64::NEG_INFINITY, -FRAC_PI_2)) {
        if let Some(r) = reflected(z, s, pi.neg()) {
            merge(&mut acc, r);
        }
    }
    // right [pi/2, pi]: sin(x) = sin(pi - x)
    if let Ok(s) = xp.meet(Interval::raw(FRAC_PI_2, f64::INFINITY)) {
        if let Some(r) = reflected(z, s, pi) {
            merge(&mut acc, r);
        }
    }
    acc
}

/// Monotone narrowing of `z = sin(s)` inside the middle sector.
fn sin_sector(z: Interval, s: Interval) -> Option<Pair> {
    let zs = z.meet(s.sin_mono()).ok()?;
    let ss = s.meet(zs.asin_mono()).ok()?;
    Some((zs, ss))
}

/// Narrowing through the reflection `s' = axis - s`, which lands in
/// the monotone middle sector.
fn reflected(z: Interval, s: Interval, axis: Interval) -> Option<Pair> {
    let r = axis.sub(s).ok()?;
    let (zs, rs) = sin_sector(z, r)?;
    let ss = axis.sub(rs).ok()?.meet(s).ok()?;
    Some((zs, ss))
}

/// One cylinder of cos: two sectors, the negative one folded onto
/// `[0, pi]` by evenness.
fn cos_cylinder(z: Interval, xp: Interval) -> Option<Pair> {
    let mut acc = None;

    // [0, pi], monotone decreasing
    if let Ok(s) = xp.meet(Interval::raw(0.0, f64::INFINITY)) {
        if let Some(r) = cos_sector(z, s) {
            merge(&mut acc, r);
        }
    }
    // [-pi, 0]: cos(x) = cos(-x), an exact fold
    if let Ok(s) = xp.meet(Interval::raw(f64::NEG_INFINITY, 0.0)) {
        if let Some((zs, rs)) = cos_sector(z, s.neg()) {
            if let Ok(ss) = rs.neg().meet(s) {
                merge(&mut acc, (zs, ss));
            }
        }
    }
    acc
}

/// Monotone narrowing of `z = cos(s)` on the non-negative sector.
fn cos_sector(z: Interval, s: Interval) -> Option<Pair> {
    let zs = z.meet(s.cos_mono()).ok()?;
    let ss = s.meet(zs.acos_mono()).ok()?;
    Some((zs, ss))
}

/// One cylinder of tan: monotone between the asymptotes. A bound
/// resting on the cylinder edge stands for the asymptote itself, so
/// the range opens out to infinity there.
fn tan_cylinder(z: Interval, xp: Interval) -> Option<Pair> {
    let s = xp.meet(Interval::raw(-FRAC_PI_2, FRAC_PI_2)).ok()?;
    let range = Interval::raw(
        if s.lo() <= -FRAC_PI_2 {
            f64::NEG_INFINITY
        } else {
            tan_down(s.lo())
        },
        if s.hi() >= FRAC_PI_2 {
            f64::INFINITY
        } else {
            tan_up(s.hi())
        },
    );
    let zs = z.meet(range).ok()?;
    let ss = s.meet(zs.atan_mono()).ok()?;
    Some((zs, ss))
}

fn merge(acc: &mut Option<Pair>, (z1, s1): Pair) {
    *acc = Some(match acc.take() {
        Some((za, sa)) => (za.join(z1), sa.join(s1)),
        None => (z1, s1),
    });
}
