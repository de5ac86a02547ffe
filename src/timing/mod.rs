//! Timing module
//!
//! Measures elapsed wall-clock time and renders it for humans.

pub mod format;
pub mod timer;

pub use format::human_readable_duration;
pub use timer::{timed, timed_async, timed_async_with, timed_with, TimedResult};
