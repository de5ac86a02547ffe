//! CLI definition using clap

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigOverrides, LogLevel, TaskList};

/// Run a set of commands concurrently and report their results.
///
/// Tasks and log levels are read from `[tool.powerchord]` in pyproject.toml
/// and can be overridden on the command line.
#[derive(Parser, Debug)]
#[command(name = "powerchord")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command to run; repeat for more (replaces the configured tasks)
    #[arg(short, long = "task", value_name = "COMMAND")]
    pub tasks: Vec<String>,

    /// Log level per category: all, success or fail
    #[arg(short, long = "log-level", value_name = "KEY=LEVEL", value_parser = parse_log_level)]
    pub log_levels: Vec<(String, LogLevel)>,

    /// Extra config file, applied over pyproject.toml
    #[arg(short, long, env = "POWERCHORD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Shorthand for `--log-level all=debug`
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Configuration values given on the command line
    pub fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides::default();

        if !self.tasks.is_empty() {
            overrides.tasks = Some(TaskList::Commands(self.tasks.clone()));
        }

        if self.verbose {
            overrides.log_levels.all = Some(LogLevel::Debug);
        }
        for (key, level) in &self.log_levels {
            // Keys were validated while parsing
            let _ = overrides.log_levels.set(key, *level);
        }

        overrides
    }
}

/// Parse KEY=LEVEL argument
fn parse_log_level(s: &str) -> Result<(String, LogLevel), String> {
    let (key, level) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid log level '{}': expected KEY=LEVEL format", s))?;

    let key = key.trim().to_ascii_lowercase();
    if !matches!(key.as_str(), "all" | "success" | "fail") {
        return Err(format!(
            "unknown log category '{}': expected all, success or fail",
            key
        ));
    }

    Ok((key, level.parse()?))
}
