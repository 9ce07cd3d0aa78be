//! Engine configuration
//!
//! Selects the search strategy and its knobs. Loaded from TOML:
//!
//! ```toml
//! strategy = "myopic"
//! depth = 4
//! seed = 7
//! ```

use std::path::Path;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use tracing::{debug, instrument};

use crate::search::DEFAULT_MYOPIC_DEPTH;

/// Which search strategy the engine runs
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    StrumDisplay,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StrategyKind {
    /// Exhaustive negamax
    Minimax,
    /// Exhaustive negamax with a score cache
    Memoize,
    /// Depth-limited negamax with heuristic leaves
    Myopic,
    /// Alpha-beta pruned negamax
    #[default]
    Pruning,
}

/// Settings for [`crate::engine::Engine`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub strategy: StrategyKind,
    /// Plies below each root move; only read by the myopic strategy
    pub depth: u32,
    /// Tie-breaking seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            depth: DEFAULT_MYOPIC_DEPTH,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// Read and parse a TOML file
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(strategy = %config.strategy, depth = config.depth, "config loaded");
        Ok(config)
    }
}

/// Configuration loading failures
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("failed to read config file {path}: {reason}")]
    Io { path: String, reason: String },
    #[display("failed to parse config: {reason}")]
    Parse { reason: String },
}
