// Tests for the interval data model and set operations.

use itvnum::{Interval, Sign};

fn iv(lo: f64, hi: f64) -> Interval {
    Interval::new(lo, hi).unwrap()
}

#[test]
fn malformed_input_is_infeasible() {
    assert!(Interval::new(2.0, 1.0).is_err());
    assert!(Interval::new(f64::NAN, 1.0).is_err());
    assert!(Interval::new(0.0, f64::NAN).is_err());
    assert!(Interval::new(1.0, 1.0).is_ok());
    assert!(Interval::new(f64::NEG_INFINITY, f64::INFINITY).is_ok());
}

#[test]
fn default_domains() {
    assert_eq!(Interval::UNIVERSAL.lo(), f64::NEG_INFINITY);
    assert_eq!(Interval::UNIVERSAL.hi(), f64::INFINITY);
    assert_eq!(Interval::FINITE_REAL, iv(-f64::MAX, f64::MAX));
    assert_eq!(
        Interval::FINITE_INT,
        iv(-9007199254740992.0, 9007199254740992.0)
    );
    assert_eq!(Interval::BOOL, iv(0.0, 1.0));
    assert!(Interval::ZERO.is_point());
    assert!(Interval::ONE.is_point());
}

#[test]
fn meet_is_intersection() {
    assert_eq!(iv(0.0, 5.0).meet(iv(3.0, 8.0)).unwrap(), iv(3.0, 5.0));
    assert_eq!(iv(0.0, 5.0).meet(iv(5.0, 8.0)).unwrap(), iv(5.0, 5.0));
    assert!(iv(0.0, 1.0).meet(iv(2.0, 3.0)).is_err());
    assert_eq!(
        Interval::UNIVERSAL.meet(iv(-2.0, 2.0)).unwrap(),
        iv(-2.0, 2.0)
    );
}

#[test]
fn join_is_hull() {
    assert_eq!(iv(0.0, 1.0).join(iv(4.0, 5.0)), iv(0.0, 5.0));
    assert_eq!(iv(-3.0, 1.0).join(iv(-1.0, 0.0)), iv(-3.0, 1.0));
}

#[test]
fn disjointness() {
    assert!(iv(0.0, 1.0).disjoint(iv(2.0, 3.0)));
    assert!(iv(2.0, 3.0).disjoint(iv(0.0, 1.0)));
    assert!(!iv(0.0, 2.0).disjoint(iv(2.0, 3.0)));
}

#[test]
fn sign_classes() {
    assert_eq!(iv(0.0, 3.0).sign(), Sign::Pos);
    assert_eq!(iv(1.0, 3.0).sign(), Sign::Pos);
    assert_eq!(iv(-3.0, 0.0).sign(), Sign::Neg);
    assert_eq!(iv(-3.0, -1.0).sign(), Sign::Neg);
    assert_eq!(iv(-1.0, 1.0).sign(), Sign::Split);
    assert_eq!(Interval::ZERO.sign(), Sign::Pos);
}

#[test]
fn integer_rounds_inward() {
    assert_eq!(iv(1.2, 3.9).integer().unwrap(), iv(2.0, 3.0));
    assert_eq!(iv(-2.7, -0.5).integer().unwrap(), iv(-2.0, -1.0));
    assert_eq!(iv(2.0, 3.0).integer().unwrap(), iv(2.0, 3.0));
    assert!(iv(1.2, 1.9).integer().is_err());
    assert_eq!(
        iv(f64::NEG_INFINITY, 2.5).integer().unwrap(),
        iv(f64::NEG_INFINITY, 2.0)
    );
}

#[test]
fn containment() {
    assert!(iv(-1.0, 1.0).contains(0.0));
    assert!(iv(-1.0, 1.0).contains(1.0));
    assert!(!iv(-1.0, 1.0).contains(1.5));
    assert!(iv(-1.0, 1.0).contains_zero());
    assert!(!iv(1.0, 2.0).contains_zero());
}
