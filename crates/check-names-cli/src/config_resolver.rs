//! Locating and loading `check-names.toml`.
//!
//! The first of these wins:
//!
//! 1. `--config <path>` (must exist)
//! 2. `./check-names.toml`, then `./.check-names.toml`
//! 3. `$CHECK_NAMES_CONFIG_DIR/config.toml`, or `~/.check-names/config.toml`
//! 4. built-in defaults

use anyhow::{Context, Result};
use check_names_core::Config;
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order.
pub const PROJECT_CONFIG_NAMES: &[&str] = &["check-names.toml", ".check-names.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";
const CONFIG_DIR_ENV: &str = "CHECK_NAMES_CONFIG_DIR";

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Found in the working directory.
    Project(PathBuf),
    /// Found in the per-user config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the config file path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Reads the configuration, or returns the defaults for [`ConfigSource::Default`].
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            tracing::debug!("No config file found, using defaults");
            return Ok(Config::default());
        };

        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        } else {
            tracing::debug!("Using config: {}", path.display());
        }

        Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// Resolves the configuration for a run started in `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }
    first_existing(candidates(project_dir, global_config_dir().as_deref()))
}

/// Implicit locations in priority order.
fn candidates(project_dir: &Path, global_dir: Option<&Path>) -> Vec<ConfigSource> {
    let mut found: Vec<_> = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| ConfigSource::Project(project_dir.join(name)))
        .collect();
    if let Some(dir) = global_dir {
        found.push(ConfigSource::Global(dir.join(GLOBAL_CONFIG_NAME)));
    }
    found
}

fn first_existing(candidates: Vec<ConfigSource>) -> ConfigSource {
    candidates
        .into_iter()
        .find(|c| c.path().is_some_and(Path::is_file))
        .unwrap_or(ConfigSource::Default)
}

/// Returns the per-user config directory.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) => Some(PathBuf::from(dir)),
        None => home::home_dir().map(|h| h.join(".check-names")),
    }
}
