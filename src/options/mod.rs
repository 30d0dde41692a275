//! Centralized picking options with TOML preset support.
//!
//! All tweakable settings (result shaping, road picking, diagnostics) are
//! consolidated here. Options serialize to/from TOML so hosts can keep them
//! alongside their other view settings.

mod debug;
mod picking;
mod roads;

use std::path::Path;

pub use debug::DebugOptions;
pub use picking::PickingOptions;
pub use roads::RoadOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PickError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[roads]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Result shaping.
    pub picking: PickingOptions,
    /// Road centerline picking.
    pub roads: RoadOptions,
    /// Diagnostics.
    pub debug: DebugOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, PickError> {
        toml::from_str(content)
            .map_err(|e| PickError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PickError> {
        let content = std::fs::read_to_string(path).map_err(PickError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PickError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PickError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PickError::Io)?;
        }
        std::fs::write(path, content).map_err(PickError::Io)
    }
}
