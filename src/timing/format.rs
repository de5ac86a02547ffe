//! Human-readable rendering of elapsed nanoseconds.
//!
//! The most significant non-zero unit wins, always followed by three digits
//! of the next finer unit. Division truncates; nothing is rounded.
//!
//! # Examples
//!
//! ```
//! use powerchord::timing::format::human_readable_duration;
//!
//! assert_eq!(human_readable_duration(0), "0.000 µs");
//! assert_eq!(human_readable_duration(1_500_000), "1.500 ms");
//! assert_eq!(human_readable_duration(2_250_000_000), "2.250 seconds");
//! assert_eq!(human_readable_duration(61_000_000_000), "1:01.000 minutes");
//! ```

const NANOS_PER_MINUTE: u128 = 60_000_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_MICRO: u128 = 1_000;

/// Format a duration given in nanoseconds.
///
/// | Largest unit | Output                  |
/// |--------------|-------------------------|
/// | minutes      | `1:01.000 minutes`      |
/// | seconds      | `1.000 seconds`         |
/// | milliseconds | `1.000 ms`              |
/// | otherwise    | `1.000 µs` / `0.000 µs` |
///
/// Minutes are never rolled up into hours.
pub fn human_readable_duration(nanoseconds: u128) -> String {
    let minutes = nanoseconds / NANOS_PER_MINUTE;
    let rest = nanoseconds % NANOS_PER_MINUTE;
    let seconds = rest / NANOS_PER_SECOND;
    let rest = rest % NANOS_PER_SECOND;
    let millis = rest / NANOS_PER_MILLI;
    let rest = rest % NANOS_PER_MILLI;
    let micros = rest / NANOS_PER_MICRO;
    let nanos = rest % NANOS_PER_MICRO;

    if minutes > 0 {
        format!("{minutes}:{seconds:02}.{millis:03} minutes")
    } else if seconds > 0 {
        format!("{seconds}.{millis:03} seconds")
    } else if millis > 0 {
        format!("{millis}.{micros:03} ms")
    } else {
        format!("{micros}.{nanos:03} µs")
    }
}
