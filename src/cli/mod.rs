//! CLI module for powerchord
//!
//! Provides argument parsing and the translation of fatal errors into the
//! message printed before exiting.

pub mod commands;

pub use commands::Cli;

use crate::error::TaskError;

/// Message shown for errors that aren't ours to explain
pub const UNKNOWN_ERROR_MESSAGE: &str = "Something went wrong.";

/// The line printed to stderr when powerchord dies on `err`
pub fn fatal_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<TaskError>() {
        Some(task_err) => format!("💀 {}", task_err),
        None => format!("💀 {}", UNKNOWN_ERROR_MESSAGE),
    }
}
