//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::foundation::ConfigError;

/// Which elements [`validate_collection`](crate::engine::Engine::validate_collection) reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionMode {
    /// Only elements with at least one failing property.
    #[default]
    InvalidOnly,
    /// Every element; valid ones carry an empty error map.
    All,
}

/// Tunables of an [`Engine`](crate::engine::Engine).
///
/// Deserializes from JSON with every field optional:
///
/// ```rust,ignore
/// let config = EngineConfig::from_json(r#"{"collection_mode": "all"}"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Which collection elements appear in indexed reports.
    pub collection_mode: CollectionMode,
}

impl EngineConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the collection mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_collection_mode(mut self, mode: CollectionMode) -> Self {
        self.collection_mode = mode;
        self
    }
}
