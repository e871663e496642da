/*!
Pure interval functions.

Every function here maps interval inputs to an interval output whose
bounds are outward rounded, so the output contains `f(x, y)` for every
real `x`, `y` drawn from the inputs. Functions whose domain can be
violated (division, logarithms, roots) return a [`NarrowResult`] and
fail instead of producing an empty or undefined interval.

[`NarrowResult`]: crate::interval::NarrowResult
*/

mod arith;
mod exp;
mod trig;
