//! Configuration loader with layered priority
//!
//! Loads configuration from multiple locations, lowest priority first:
//! 1. Built-in defaults
//! 2. `~/.config/powerchord/config.toml`
//! 3. `[tool.powerchord]` in the project's `pyproject.toml`
//! 4. An explicit config file (`--config`)
//! 5. `POWERCHORD_*` environment variables
//! 6. Command-line overrides

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use super::model::{Config, ConfigOverrides};
use crate::error::TaskError;

/// Application name used for config directories and the pyproject table
const APP_NAME: &str = "powerchord";

/// Project file holding the `[tool.powerchord]` table
const PYPROJECT: &str = "pyproject.toml";

/// Prefix for environment variable overrides
const ENV_PREFIX: &str = "POWERCHORD_";

/// Path of the per-user config file, if the platform has a config dir
pub fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME).join("config.toml"))
}

/// Load configuration for the project in the current directory
///
/// A relative `pyproject.toml` is searched for in the current directory and
/// its parents.
pub fn load_config(
    override_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<Config, TaskError> {
    let user_config = user_config_file();
    load_layers(
        user_config.as_deref(),
        Path::new(PYPROJECT),
        override_path,
        overrides,
        ENV_PREFIX,
    )
}

/// Load configuration for the project rooted at `project_dir`
pub fn load_config_from(
    project_dir: &Path,
    override_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<Config, TaskError> {
    let user_config = user_config_file();
    load_layers(
        user_config.as_deref(),
        &project_dir.join(PYPROJECT),
        override_path,
        overrides,
        ENV_PREFIX,
    )
}

fn load_layers(
    user_config: Option<&Path>,
    pyproject: &Path,
    override_path: Option<&Path>,
    overrides: &ConfigOverrides,
    env_prefix: &str,
) -> Result<Config, TaskError> {
    let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

    if let Some(path) = user_config.filter(|p| p.exists()) {
        tracing::debug!("Loading config from: {}", path.display());
        figment = figment.merge(Toml::file(path));
    }

    // Missing files contribute nothing; a missing table focuses to empty
    let table = format!("tool.{}", APP_NAME);
    figment = figment.merge(Figment::from(Toml::file(pyproject)).focus(&table));

    if let Some(path) = override_path {
        if path.exists() {
            tracing::debug!("Loading override config from: {}", path.display());
            figment = figment.merge(Toml::file(path));
        } else {
            tracing::warn!("Override config not found: {}", path.display());
        }
    }

    // Format: POWERCHORD_LOG_LEVELS__FAIL=error
    // Maps to: log_levels.fail = "error"
    figment = figment
        .merge(Env::prefixed(env_prefix).split("__"))
        .merge(Serialized::defaults(overrides));

    figment
        .extract()
        .map_err(|e| TaskError::Config(e.to_string()))
}
