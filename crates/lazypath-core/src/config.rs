//! Configuration for lazypath
//!
//! Configuration lives in `config.toml` under the platform config directory
//! (`~/.config/lazypath/` on Linux), overridable with `LAZYPATH_CONFIG_DIR`
//! or an explicit path.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LazypathError, Result};
use crate::graph::EngineOptions;

pub use types::{Config, EngineConfig, GraphConfig};

const CONFIG_DIR: &str = "lazypath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "LAZYPATH_CONFIG_DIR";

impl Config {
    /// Default location of the configuration file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    LazypathError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from the default location; a missing file yields defaults
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path; the file must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "reading config");
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Engine options derived from the `[engine]` table
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            validate_weights: self.engine.validate_weights,
        }
    }
}
