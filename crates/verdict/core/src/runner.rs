//! Timing of bound callables.

use crate::case::TestCase;
use crate::record::TestBody;
use std::time::{Duration, Instant};

/// Nanoseconds in `duration`, saturating at `u64::MAX` and never below one:
/// anything that ran took at least a tick.
pub fn duration_ns(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX).max(1)
}

/// Run `f` once and return its result with the elapsed nanoseconds.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, u64) {
    let start = Instant::now();
    let value = f();
    (value, duration_ns(start.elapsed()))
}

/// Invoke `body` on `case` once, returning how long it took.
pub fn time_body(body: &TestBody, case: &mut TestCase) -> u64 {
    let ((), elapsed) = measure(|| body(case));
    elapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_returns_value_and_nonzero_time() {
        let (value, elapsed) = measure(|| 2 + 2);
        assert_eq!(value, 4);
        assert!(elapsed >= 1);
    }

    #[test]
    fn duration_conversion_clamps() {
        assert_eq!(duration_ns(Duration::ZERO), 1);
        assert_eq!(duration_ns(Duration::from_nanos(250)), 250);
        assert_eq!(duration_ns(Duration::MAX), u64::MAX);
    }

    #[test]
    fn sleeping_body_is_timed() {
        let mut case = TestCase::new("sleeper", crate::body(|_| {}), crate::location!())
            .with_sink(std::io::sink());
        let body: TestBody = crate::body(|_| std::thread::sleep(Duration::from_millis(2)));
        let elapsed = time_body(&body, &mut case);
        assert!(elapsed >= 2_000_000);
    }
}
