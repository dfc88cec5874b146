//! Wall-clock measurement helpers.

use std::time::{Duration, Instant};

/// Measures wall-clock time for a synchronous operation.
///
/// Uses [`Instant`], which is monotonic.
pub fn measure<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    (result, elapsed)
}

/// Average nanoseconds per call, truncated.
pub(crate) fn nanos_per_call(elapsed: Duration, calls: usize) -> u64 {
    if calls == 0 {
        return 0;
    }
    let nanos = elapsed.as_nanos() / calls as u128;
    u64::try_from(nanos).unwrap_or(u64::MAX)
}
