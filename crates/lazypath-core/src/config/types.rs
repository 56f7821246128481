//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Top-level lazypath configuration (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Graph construction defaults
    #[serde(default)]
    pub graph: GraphConfig,

    /// Shortest-path engine settings
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Defaults applied while building graphs from user input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Insert edges in both directions unless told otherwise
    #[serde(default = "default_undirected")]
    pub undirected: bool,
}

/// Settings for engine runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Re-check every edge weight before running
    #[serde(default = "default_validate_weights")]
    pub validate_weights: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            undirected: default_undirected(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            validate_weights: default_validate_weights(),
        }
    }
}

fn default_undirected() -> bool {
    true
}

fn default_validate_weights() -> bool {
    true
}
