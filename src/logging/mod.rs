//! Logging setup
//!
//! Task outcomes are emitted on two dedicated targets so their verbosity can
//! be tuned apart from general output:
//! - [`SUCCESS_TARGET`] for tasks that exited 0
//! - [`FAIL_TARGET`] for tasks that did not

use std::io::IsTerminal;

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LogLevels;

/// Target for events about successful tasks
pub const SUCCESS_TARGET: &str = "powerchord::success";

/// Target for events about failed tasks
pub const FAIL_TARGET: &str = "powerchord::fail";

/// Filter directives for the given levels
pub fn directives(levels: &LogLevels) -> String {
    format!(
        "{},{}={},{}={}",
        levels.all.as_filter(),
        SUCCESS_TARGET,
        levels.success().as_filter(),
        FAIL_TARGET,
        levels.fail().as_filter(),
    )
}

/// Build the filter for the given levels
pub fn env_filter(levels: &LogLevels) -> Result<EnvFilter> {
    EnvFilter::try_new(directives(levels)).map_err(|e| anyhow!("Invalid log filter: {}", e))
}

/// Force coloured outcome markers on or off
///
/// `colored` checks stdout by default, but everything is written to stderr.
pub fn configure_colors(enabled: bool) {
    colored::control::set_override(enabled);
}

/// Install the global subscriber, writing to stderr
///
/// Fails if a global subscriber is already set.
pub fn init(levels: &LogLevels) -> Result<()> {
    let ansi = std::io::stderr().is_terminal();
    configure_colors(ansi);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(levels)?)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .with_level(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
