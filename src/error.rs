//! Error types for powerchord
//!
//! A command that exits non-zero is not an error; it is reported through
//! [`CommandResult::success`](crate::executor::CommandResult). Everything
//! here is a fault that stops the caller.

use thiserror::Error;
use tokio::task::JoinError;

/// Main error type for task operations
#[derive(Error, Debug)]
pub enum TaskError {
    /// The host shell could not create the process
    #[error("Failed to spawn command: {command}: {error}")]
    SpawnFailed { command: String, error: String },

    /// A unit of work panicked before producing its result
    #[error("Unit {index} panicked: {message}")]
    UnitPanicked { index: usize, message: String },

    /// A unit of work was cancelled by the runtime
    #[error("Unit {index} was cancelled")]
    UnitCancelled { index: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TaskError {
    /// Translate a failed join on the unit at `index`
    pub fn from_join(index: usize, err: JoinError) -> Self {
        if err.is_cancelled() {
            return TaskError::UnitCancelled { index };
        }

        let payload = err.into_panic();
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };

        TaskError::UnitPanicked { index, message }
    }
}
