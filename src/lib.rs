//! powerchord - run commands concurrently, report them in order
//!
//! Runs a set of shell commands at the same time and reports, for each one,
//! whether it succeeded, what it printed and how long it took.
//!
//! ## Building blocks
//!
//! - [`executor`] - Run one shell command and capture its output
//! - [`concurrent`] - Start every unit of work at once, collect results in
//!   submission order
//! - [`timing`] - Measure and format elapsed time
//!
//! ## Application layers
//!
//! - [`config`] - Layered configuration from pyproject.toml, env and CLI
//! - [`logging`] - Per-category log levels on top of `tracing`
//! - [`runner`] - Run the configured tasks and aggregate their outcomes
//! - [`cli`] - Argument parsing and fatal error messages

pub mod cli;
pub mod concurrent;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod runner;
pub mod timing;

pub use cli::Cli;
pub use concurrent::{map_concurrent, run_all, run_all_streaming, try_run_all, OrderedResults};
pub use config::{load_config, Config, LogLevel, LogLevels, Task};
pub use error::TaskError;
pub use executor::{execute, execute_with, CommandResult, Shell};
pub use runner::{TaskOutcome, TaskRunner};
pub use timing::{human_readable_duration, timed, timed_async, TimedResult};
