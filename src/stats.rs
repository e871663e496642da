/*!
Kernel statistics.

The narrowers themselves are pure; the only process-wide state in the
kernel is this block of counters, updated from [`eval_node`] and read
by the host. The counters are atomic so hosts that narrow independent
constraints from several threads need no extra synchronization, and
they are monotone between calls to [`reset`].

[`eval_node`]: crate::narrow::eval_node
*/

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static PRIMITIVE_CALLS: AtomicU64 = AtomicU64::new(0);
static PRIMITIVE_FAILS: AtomicU64 = AtomicU64::new(0);
static USER_TIME_NS: AtomicU64 = AtomicU64::new(0);

/// Snapshot of the kernel counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Narrowing primitives invoked since the last reset.
    pub primitive_calls: u64,
    /// Primitives that reported infeasibility.
    pub primitive_fails: u64,
    /// Time spent inside primitives.
    pub user_time: Duration,
}

/// Reads the counters.
pub fn snapshot() -> Stats {
    Stats {
        primitive_calls: PRIMITIVE_CALLS.load(Ordering::Relaxed),
        primitive_fails: PRIMITIVE_FAILS.load(Ordering::Relaxed),
        user_time: Duration::from_nanos(USER_TIME_NS.load(Ordering::Relaxed)),
    }
}

/// Zeroes the counters.
pub fn reset() {
    PRIMITIVE_CALLS.store(0, Ordering::Relaxed);
    PRIMITIVE_FAILS.store(0, Ordering::Relaxed);
    USER_TIME_NS.store(0, Ordering::Relaxed);
}

pub(crate) fn record_call() {
    PRIMITIVE_CALLS.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_fail() {
    PRIMITIVE_FAILS.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_time(elapsed: Duration) {
    USER_TIME_NS.fetch_add(elapsed.as_nanos() as u64, Ordering::Relaxed);
}
