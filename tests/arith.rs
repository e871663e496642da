// Tests for the pure interval functions and the rounding layer.

use itvnum::round::{int_add, int_mul, next_down, next_up};
use itvnum::Interval;

fn iv(lo: f64, hi: f64) -> Interval {
    Interval::new(lo, hi).unwrap()
}

// Within a relative slack that absorbs the one-step outward nudges.
fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= b.abs().max(1.0) * 1e-12
}

#[test]
fn add_and_sub_on_integer_bounds_are_exact() {
    assert_eq!(iv(2.0, 3.0).add(iv(-1.0, 4.0)).unwrap(), iv(1.0, 7.0));
    assert_eq!(iv(2.0, 3.0).sub(iv(-1.0, 4.0)).unwrap(), iv(-2.0, 4.0));
    assert_eq!(iv(-2.0, 4.0).neg(), iv(-4.0, 2.0));
}

#[test]
fn add_rounds_outward_on_inexact_bounds() {
    let z = iv(0.1, 0.1).add(iv(0.2, 0.2)).unwrap();
    assert!(z.lo() < 0.1 + 0.2 && 0.1 + 0.2 < z.hi());
    assert!(close(z.lo(), 0.3));
}

#[test]
fn opposed_infinities_are_infeasible() {
    let pinf = Interval::point(f64::INFINITY);
    let ninf = Interval::point(f64::NEG_INFINITY);
    assert!(pinf.add(ninf).is_err());
    assert!(pinf.sub(pinf).is_err());
}

#[test]
fn mul_sign_dispatch_grid() {
    assert_eq!(iv(1.0, 2.0).mul(iv(3.0, 4.0)).unwrap(), iv(3.0, 8.0));
    assert_eq!(iv(1.0, 2.0).mul(iv(-4.0, -3.0)).unwrap(), iv(-8.0, -3.0));
    assert_eq!(iv(1.0, 2.0).mul(iv(-3.0, 4.0)).unwrap(), iv(-6.0, 8.0));
    assert_eq!(iv(-2.0, -1.0).mul(iv(3.0, 4.0)).unwrap(), iv(-8.0, -3.0));
    assert_eq!(iv(-2.0, -1.0).mul(iv(-4.0, -3.0)).unwrap(), iv(3.0, 8.0));
    assert_eq!(iv(-2.0, -1.0).mul(iv(-3.0, 4.0)).unwrap(), iv(-8.0, 6.0));
    assert_eq!(iv(-2.0, 3.0).mul(iv(1.0, 4.0)).unwrap(), iv(-8.0, 12.0));
    assert_eq!(iv(-2.0, 3.0).mul(iv(-4.0, -1.0)).unwrap(), iv(-12.0, 8.0));
    assert_eq!(iv(-2.0, 3.0).mul(iv(-1.0, 4.0)).unwrap(), iv(-8.0, 12.0));
}

#[test]
fn mul_zero_short_circuits() {
    assert_eq!(Interval::ZERO.mul(Interval::UNIVERSAL).unwrap(), Interval::ZERO);
    assert_eq!(Interval::UNIVERSAL.mul(Interval::ZERO).unwrap(), Interval::ZERO);
}

#[test]
fn mul_with_unbounded_operand() {
    let z = iv(0.0, f64::INFINITY).mul(iv(2.0, 3.0)).unwrap();
    assert_eq!(z, iv(0.0, f64::INFINITY));
}

#[test]
fn odiv_straddling_divisor_is_universal() {
    assert_eq!(iv(1.0, 1.0).odiv(iv(-1.0, 1.0)).unwrap(), Interval::UNIVERSAL);
}

#[test]
fn odiv_zero_point_divisor() {
    // only a numerator admitting zero survives division by [0,0]
    assert_eq!(iv(-1.0, 1.0).odiv(Interval::ZERO).unwrap(), Interval::UNIVERSAL);
    assert_eq!(Interval::ZERO.odiv(Interval::ZERO).unwrap(), Interval::UNIVERSAL);
    assert!(iv(1.0, 2.0).odiv(Interval::ZERO).is_err());
}

#[test]
fn odiv_exact_integer_quotients() {
    assert_eq!(iv(4.0, 8.0).odiv(iv(2.0, 2.0)).unwrap(), iv(2.0, 4.0));
    assert_eq!(iv(-8.0, -4.0).odiv(iv(2.0, 4.0)).unwrap(), iv(-4.0, -1.0));
}

#[test]
fn odiv_zero_endpoint_saturates() {
    let z = iv(1.0, 2.0).odiv(iv(0.0, 4.0)).unwrap();
    assert!(close(z.lo(), 0.25) && z.lo() <= 0.25);
    assert_eq!(z.hi(), f64::INFINITY);

    let z = iv(1.0, 2.0).odiv(iv(-4.0, 0.0)).unwrap();
    assert_eq!(z.lo(), f64::NEG_INFINITY);
    assert!(close(z.hi(), -0.25) && z.hi() >= -0.25);
}

#[test]
fn min_max_abs_are_exact() {
    assert_eq!(iv(1.0, 5.0).min(iv(2.0, 3.0)), iv(1.0, 3.0));
    assert_eq!(iv(1.0, 5.0).max(iv(2.0, 3.0)), iv(2.0, 5.0));
    assert_eq!(iv(-2.0, 3.0).abs(), iv(0.0, 3.0));
    assert_eq!(iv(-5.0, -2.0).abs(), iv(2.0, 5.0));
    assert_eq!(iv(2.0, 5.0).abs(), iv(2.0, 5.0));
}

#[test]
fn exp_and_ln_enclose() {
    let z = iv(0.0, 1.0).exp();
    assert!(z.lo() <= 1.0 && close(z.lo(), 1.0));
    assert!(z.hi() >= std::f64::consts::E && close(z.hi(), std::f64::consts::E));

    let l = iv(1.0, std::f64::consts::E).ln().unwrap();
    assert!(l.lo() <= 0.0 && close(l.lo(), 0.0));
    assert!(l.hi() >= 1.0 && close(l.hi(), 1.0));

    // the sub-zero part of a log argument contributes -inf
    assert_eq!(iv(-1.0, 1.0).ln().unwrap().lo(), f64::NEG_INFINITY);
    assert!(iv(-2.0, -1.0).ln().is_err());
    assert!(iv(-2.0, 0.0).ln().is_err());
}

#[test]
fn exp_saturates_without_nan() {
    let z = iv(700.0, 720.0).exp();
    assert_eq!(z.hi(), f64::INFINITY);
    assert!(z.lo() > 0.0 && z.lo().is_finite());

    let z = iv(f64::NEG_INFINITY, 0.0).exp();
    assert_eq!(z.lo(), 0.0);
}

#[test]
fn ipow_sign_and_parity_dispatch() {
    assert_eq!(iv(-3.0, -1.0).ipow(2).unwrap(), iv(1.0, 9.0));
    assert_eq!(iv(-3.0, -1.0).ipow(3).unwrap(), iv(-27.0, -1.0));
    assert_eq!(iv(2.0, 3.0).ipow(2).unwrap(), iv(4.0, 9.0));
    assert_eq!(iv(-2.0, 3.0).ipow(2).unwrap(), iv(0.0, 9.0));
    assert_eq!(iv(-2.0, 3.0).ipow(3).unwrap(), iv(-8.0, 27.0));
}

#[test]
fn ipow_preserves_exact_zero() {
    assert_eq!(Interval::ZERO.ipow(3).unwrap(), Interval::ZERO);
    assert_eq!(iv(0.0, 2.0).ipow(2).unwrap(), iv(0.0, 4.0));
}

#[test]
fn ipow_negative_exponent() {
    let z = iv(2.0, 4.0).ipow(-1).unwrap();
    assert!(z.lo() <= 0.25 && close(z.lo(), 0.25));
    assert!(z.hi() >= 0.5 && close(z.hi(), 0.5));

    // zero in the base saturates the reciprocal
    let z = iv(0.0, 2.0).ipow(-2).unwrap();
    assert_eq!(z.hi(), f64::INFINITY);

    // a base fixed at zero cannot carry a negative power
    assert!(Interval::ZERO.ipow(-2).is_err());
}

#[test]
fn nroot_inverts_ipow() {
    // perfect squares come back exactly
    assert_eq!(iv(1.0, 4.0).nroot(2, iv(1.0, 10.0)).unwrap(), iv(1.0, 2.0));
    assert_eq!(
        iv(1.0, 4.0).nroot(2, iv(-10.0, -1.0)).unwrap(),
        iv(-2.0, -1.0)
    );
    // a branch touching zero keeps the hull of both signs
    assert_eq!(iv(1.0, 4.0).nroot(2, iv(-5.0, 0.0)).unwrap(), iv(-2.0, 2.0));
    // odd roots are signed and monotone (cube roots go through powf,
    // so only enclosure is guaranteed)
    let r = iv(-8.0, 27.0).nroot(3, Interval::UNIVERSAL).unwrap();
    assert!(r.lo() <= -2.0 && close(r.lo(), -2.0));
    assert!(r.hi() >= 3.0 && close(r.hi(), 3.0));
    // even root of a negative radicand is infeasible
    assert!(iv(-4.0, -1.0).nroot(2, Interval::UNIVERSAL).is_err());
}

#[test]
fn next_up_and_down_step_outward() {
    assert_eq!(next_down(0.0), -f64::from_bits(1));
    assert_eq!(next_up(0.0), f64::from_bits(1));
    assert!(next_down(1.0) < 1.0);
    assert!(next_up(1.0) > 1.0);
    // saturation: the adjustment may not overflow past MAX
    assert_eq!(next_up(f64::MAX), f64::MAX);
    assert_eq!(next_down(-f64::MAX), -f64::MAX);
    assert_eq!(next_up(f64::INFINITY), f64::INFINITY);
    assert_eq!(next_down(f64::NEG_INFINITY), f64::NEG_INFINITY);
    // subnormals still move strictly
    assert!(next_down(f64::from_bits(1)) < f64::from_bits(1));
}

#[test]
fn saturating_integer_ops() {
    assert_eq!(int_add(3.0, 4.0), 7.0);
    assert_eq!(int_add(-3.0, 4.0), 1.0);
    assert_eq!(int_mul(-6.0, 7.0), -42.0);
    // beyond the exact range the sum saturates by sign
    assert_eq!(
        int_add(9007199254740992.0, 9007199254740992.0),
        f64::INFINITY
    );
    assert_eq!(
        int_add(-9007199254740992.0, -9007199254740992.0),
        f64::NEG_INFINITY
    );
    assert_eq!(int_mul(1.0e300, 1.0e300), f64::INFINITY);
    assert_eq!(int_mul(1.0e300, -1.0e300), f64::NEG_INFINITY);
}

#[test]
fn exclude_point_trims_integral_endpoints() {
    assert_eq!(iv(1.0, 5.0).exclude_point(1.0).unwrap(), iv(2.0, 5.0));
    assert_eq!(iv(1.0, 5.0).exclude_point(5.0).unwrap(), iv(1.0, 4.0));
    assert_eq!(iv(1.0, 5.0).exclude_point(3.0).unwrap(), iv(1.0, 5.0));
    assert_eq!(iv(1.0, 5.0).exclude_point(1.5).unwrap(), iv(1.0, 5.0));
    assert!(iv(2.0, 2.0).exclude_point(2.0).is_err());
}
