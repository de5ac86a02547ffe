//! Configuration module for powerchord
//!
//! Provides layered configuration loading from the user config dir,
//! `pyproject.toml`, environment variables and CLI overrides.

pub mod loader;
pub mod model;

pub use loader::{load_config, load_config_from, user_config_file};
pub use model::*;
