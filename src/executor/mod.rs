//! Command execution module
//!
//! Runs a single shell command and captures:
//! - Exit status as a success flag
//! - Raw stdout and stderr bytes

pub mod command;

pub use command::*;
