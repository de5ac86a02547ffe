//! Common test utilities for powerchord tests

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary project directory with the given pyproject.toml
pub fn create_pyproject(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let pyproject_path = dir.path().join("pyproject.toml");
    std::fs::write(&pyproject_path, content).expect("Failed to write pyproject.toml");
    let path = dir.path().to_path_buf();
    (dir, path)
}

/// Creates a temporary directory with no config files
pub fn create_empty_project() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().to_path_buf();
    (dir, path)
}

/// Delay for slot `index` out of `len`, scrambled so completion order
/// differs from submission order
pub fn scrambled_delay_ms(index: usize, len: usize) -> u64 {
    ((index * 7 + 3) % len) as u64 * 15
}

/// pyproject.toml where every task succeeds
pub const PASSING_PYPROJECT: &str = r#"
[project]
name = "demo"

[tool.powerchord]
tasks = ["echo first", "echo second"]
"#;

/// pyproject.toml with one failing task
pub const FAILING_PYPROJECT: &str = r#"
[tool.powerchord.tasks]
good = "echo all good"
bad = "printf 'broken %s' output; exit 3"
"#;

/// pyproject.toml with an unparseable log level
pub const INVALID_PYPROJECT: &str = r#"
[tool.powerchord.log_levels]
all = "deafening"
"#;
