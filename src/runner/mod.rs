//! Task runner module
//!
//! Runs the configured tasks concurrently and aggregates their outcomes
//! into a single success flag.

pub mod task_runner;

pub use task_runner::{TaskOutcome, TaskRunner};
