// Tests for the statistics surface. These run in their own process
// (one binary per integration test file), so the global counters are
// fully under this file's control.

use std::time::Duration;

use itvnum::{eval_node, stats, Interval, Op, Params};

#[test]
fn counters_track_calls_and_failures() {
    stats::reset();
    let before = stats::snapshot();
    assert_eq!(before.primitive_calls, 0);
    assert_eq!(before.primitive_fails, 0);
    assert_eq!(before.user_time, Duration::ZERO);

    let x = Interval::new(2.0, 3.0).unwrap();
    let y = Interval::new(-1.0, 4.0).unwrap();
    for _ in 0..100 {
        eval_node(Op::Add, Params::default(), &[Interval::UNIVERSAL, x, y]).unwrap();
    }
    // an infeasible call counts as both a call and a failure
    let bad = Interval::new(10.0, 20.0).unwrap();
    let one = Interval::new(0.0, 1.0).unwrap();
    assert!(eval_node(Op::Add, Params::default(), &[bad, one, one]).is_err());

    let after = stats::snapshot();
    assert_eq!(after.primitive_calls, 101);
    assert_eq!(after.primitive_fails, 1);
    assert!(after.user_time > Duration::ZERO);

    stats::reset();
    let cleared = stats::snapshot();
    assert_eq!(cleared.primitive_calls, 0);
    assert_eq!(cleared.primitive_fails, 0);
    assert_eq!(cleared.user_time, Duration::ZERO);
}
