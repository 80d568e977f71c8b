//! Undo engine configuration.
//!
//! Usually embedded in an editor settings file:
//!
//! ```toml
//! capacity = 4096
//! enabled = true
//! restore_policy = "discard"
//! ```
//!
//! Every key is optional.

use std::path::Path;

use serde::Deserialize;

use super::error::{UndoError, UndoResult};

/// Default number of transactions retained per undo log.
pub const DEFAULT_CAPACITY: usize = 8192;

/// What [`restore`](super::RuntimeUndo::restore) does with the history it
/// discards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestorePolicy {
    /// Purge every discarded record, as [`purge`](super::RuntimeUndo::purge)
    /// would.
    #[default]
    Purge,
    /// Drop the discarded records without running their purge callbacks.
    Discard,
}

/// Construction parameters for [`UndoEngine`](super::UndoEngine).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UndoConfig {
    /// Transactions retained per log. Must be greater than 0.
    pub capacity: usize,
    /// Initial value of the engine's enabled flag.
    pub enabled: bool,
    pub restore_policy: RestorePolicy,
}

impl Default for UndoConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            enabled: true,
            restore_policy: RestorePolicy::default(),
        }
    }
}

impl UndoConfig {
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_restore_policy(mut self, policy: RestorePolicy) -> Self {
        self.restore_policy = policy;
        self
    }

    /// Parses a config from TOML text.
    pub fn from_toml_str(content: &str) -> UndoResult<Self> {
        toml::from_str(content).map_err(|e| UndoError::Config(e.to_string()))
    }
}

/// Loads an undo config from a TOML file.
pub fn load_config(path: &Path) -> UndoResult<UndoConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| UndoError::Config(format!("failed to read {}: {e}", path.display())))?;
    toml::from_str(&content)
        .map_err(|e| UndoError::Config(format!("failed to parse {}: {e}", path.display())))
}
