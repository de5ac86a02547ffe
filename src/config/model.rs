//! Configuration model for powerchord
//!
//! Defines the task list and log levels, plus the CLI-side overrides that
//! are layered on top of file and environment configuration.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Commands to run concurrently
    #[serde(default)]
    pub tasks: TaskList,

    /// Log levels per event category
    #[serde(default)]
    pub log_levels: LogLevels,
}

impl Config {
    /// Resolve the configured task list into named tasks
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.to_tasks()
    }
}

/// A named shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Name used in log output
    pub name: String,
    /// Command passed verbatim to the host shell
    pub command: String,
}

impl Task {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }

    /// A task whose name is its command
    pub fn from_command(command: impl Into<String>) -> Self {
        let command = command.into();
        Self {
            name: command.clone(),
            command,
        }
    }
}

/// Task definitions as written in configuration
///
/// Either `tasks = ["cmd", ...]` or a `[tasks]` table of `name = "cmd"`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TaskList {
    Commands(Vec<String>),
    Named(BTreeMap<String, String>),
}

impl Default for TaskList {
    fn default() -> Self {
        TaskList::Commands(Vec::new())
    }
}

impl TaskList {
    pub fn to_tasks(&self) -> Vec<Task> {
        match self {
            TaskList::Commands(commands) => {
                commands.iter().map(Task::from_command).collect()
            }
            TaskList::Named(named) => named
                .iter()
                .map(|(name, command)| Task::new(name, command))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            TaskList::Commands(commands) => commands.is_empty(),
            TaskList::Named(named) => named.is_empty(),
        }
    }
}

/// Verbosity threshold for one log category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }

    /// The `tracing` filter admitting this level and above
    pub fn as_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Off => LevelFilter::OFF,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(format!(
                "unknown log level '{}': expected trace, debug, info, warning, error or off",
                other
            )),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, String> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.as_str().to_string()
    }
}

/// Log levels per event category
///
/// `success` and `fail` fall back to `all` when unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogLevels {
    /// General output, and the fallback for the other categories
    #[serde(default = "default_level")]
    pub all: LogLevel,

    /// Events for tasks that succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<LogLevel>,

    /// Events for tasks that failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail: Option<LogLevel>,
}

fn default_level() -> LogLevel {
    LogLevel::Info
}

impl Default for LogLevels {
    fn default() -> Self {
        Self {
            all: default_level(),
            success: None,
            fail: None,
        }
    }
}

impl LogLevels {
    pub fn success(&self) -> LogLevel {
        self.success.unwrap_or(self.all)
    }

    pub fn fail(&self) -> LogLevel {
        self.fail.unwrap_or(self.all)
    }
}

/// Values supplied on the command line, highest priority of all layers
///
/// Unset fields are skipped during serialization so they don't mask lower
/// layers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<TaskList>,

    #[serde(skip_serializing_if = "LogLevelOverrides::is_empty")]
    pub log_levels: LogLevelOverrides,
}

/// Partial [`LogLevels`] for overriding single categories
#[derive(Debug, Clone, Default, Serialize)]
pub struct LogLevelOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<LogLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<LogLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail: Option<LogLevel>,
}

impl LogLevelOverrides {
    pub fn is_empty(&self) -> bool {
        self.all.is_none() && self.success.is_none() && self.fail.is_none()
    }

    /// Set a category by its configuration key
    pub fn set(&mut self, key: &str, level: LogLevel) -> Result<(), String> {
        match key {
            "all" => self.all = Some(level),
            "success" => self.success = Some(level),
            "fail" => self.fail = Some(level),
            other => {
                return Err(format!(
                    "unknown log category '{}': expected all, success or fail",
                    other
                ))
            }
        }
        Ok(())
    }
}
