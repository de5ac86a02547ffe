//! Concurrent execution module
//!
//! Runs many independent units of work at once and hands their results
//! back in the order they were submitted, not the order they finished.

pub mod ordered;

pub use ordered::*;
