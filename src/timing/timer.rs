//! Wall-clock timing of synchronous and asynchronous work
//!
//! Measurements use [`Instant`], which is monotonic. The async variants
//! measure from the first poll to completion, so time spent suspended on
//! I/O counts towards the duration.

use std::future::Future;
use std::time::Instant;

use super::format::human_readable_duration;

/// A value paired with how long it took to produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedResult<T> {
    /// Result of the timed work
    pub value: T,
    /// Formatted elapsed time
    pub duration: String,
}

impl<T> TimedResult<T> {
    /// Split into `(value, duration)`
    pub fn into_parts(self) -> (T, String) {
        (self.value, self.duration)
    }
}

/// Time `f` using the default formatter
pub fn timed<T>(f: impl FnOnce() -> T) -> TimedResult<T> {
    timed_with(f, human_readable_duration)
}

/// Time `f`, rendering the elapsed nanoseconds with `formatter`
pub fn timed_with<T>(
    f: impl FnOnce() -> T,
    formatter: impl FnOnce(u128) -> String,
) -> TimedResult<T> {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed().as_nanos();

    TimedResult {
        value,
        duration: formatter(elapsed),
    }
}

/// Time a unit of work using the default formatter
pub async fn timed_async<F: Future>(unit: F) -> TimedResult<F::Output> {
    timed_async_with(unit, human_readable_duration).await
}

/// Time a unit of work, rendering the elapsed nanoseconds with `formatter`
pub async fn timed_async_with<F: Future>(
    unit: F,
    formatter: impl FnOnce(u128) -> String,
) -> TimedResult<F::Output> {
    let start = Instant::now();
    let value = unit.await;
    let elapsed = start.elapsed().as_nanos();

    TimedResult {
        value,
        duration: formatter(elapsed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Parse "12.345 ms" into (12.345, "ms")
    fn split(duration: &str) -> (f64, &str) {
        let (num, unit) = duration.split_once(' ').unwrap();
        (num.parse().unwrap(), unit)
    }

    #[test]
    fn test_timed_returns_value() {
        let result = timed(|| 40 + 2);
        assert_eq!(result.value, 42);
        assert!(result.duration.ends_with("µs") || result.duration.ends_with("ms"));
    }

    #[test]
    fn test_timed_sleep_tier() {
        let result = timed(|| std::thread::sleep(Duration::from_millis(25)));

        let (value, unit) = split(&result.duration);
        assert_eq!(unit, "ms", "unexpected duration {}", result.duration);
        assert!(value >= 25.0, "unexpected duration {}", result.duration);
    }

    #[test]
    fn test_timed_with_custom_formatter() {
        let result = timed_with(|| "done", |ns| format!("{}ns", ns > 0));
        assert_eq!(result.into_parts(), ("done", "truens".to_string()));
    }

    #[tokio::test]
    async fn test_timed_async_includes_suspension() {
        let result = timed_async(async {
            tokio::time::sleep(Duration::from_millis(30)).await;
            "slept"
        })
        .await;

        assert_eq!(result.value, "slept");
        let (value, unit) = split(&result.duration);
        assert_eq!(unit, "ms", "unexpected duration {}", result.duration);
        assert!(value >= 30.0, "unexpected duration {}", result.duration);
    }

    #[tokio::test]
    async fn test_timed_async_with_raw_nanos() {
        let result = timed_async_with(
            tokio::time::sleep(Duration::from_millis(5)),
            |ns| ns.to_string(),
        )
        .await;

        let nanos: u128 = result.duration.parse().unwrap();
        assert!(nanos >= 5_000_000);
    }

    #[tokio::test]
    async fn test_timed_async_starts_on_first_poll() {
        let unit = timed_async(async { 1 });
        // Not polled yet; this delay must not be counted
        tokio::time::sleep(Duration::from_millis(50)).await;

        let result = unit.await;
        assert!(!result.duration.ends_with("seconds"));
        let (value, unit) = split(&result.duration);
        assert!(unit == "µs" || value < 50.0, "unexpected duration {}", result.duration);
    }
}
