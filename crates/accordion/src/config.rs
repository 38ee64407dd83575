//! Accordion configuration.
//!
//! Configuration is plain data that can be built in code or loaded from TOML:
//!
//! ```toml
//! default_expanded = false
//! cache_projections = true
//!
//! [sort]
//! scope = "sections"   # "sections" | "items" | "both"
//! order = "ascending"  # "ascending" | "descending"
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use std::path::Path;

use accordion_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{ExpansionState, SortOrder, SortScope};

/// What a user-requested sort does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    /// Whether sections, items or both are reordered.
    pub scope: SortScope,
    /// Direction of the key comparison.
    pub order: SortOrder,
}

/// Configuration for an [`AccordionController`](crate::AccordionController).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccordionConfig {
    /// Whether newly added sections start expanded.
    pub default_expanded: bool,
    /// Whether the projector caches the last row list.
    pub cache_projections: bool,
    /// Sort behavior for [`on_sort_requested`](crate::AccordionController::on_sort_requested).
    pub sort: SortConfig,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            default_expanded: false,
            cache_projections: true,
            sort: SortConfig::default(),
        }
    }
}

impl AccordionConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    /// Serializes the configuration to TOML text.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Initial expansion state for new sections.
    pub fn default_state(&self) -> ExpansionState {
        ExpansionState::from_expanded(self.default_expanded)
    }

    /// Sets whether new sections start expanded.
    pub fn with_default_expanded(mut self, expanded: bool) -> Self {
        self.default_expanded = expanded;
        self
    }

    /// Sets whether projections are cached.
    pub fn with_cache_projections(mut self, cache: bool) -> Self {
        self.cache_projections = cache;
        self
    }

    /// Sets what a sort request reorders.
    pub fn with_sort_scope(mut self, scope: SortScope) -> Self {
        self.sort.scope = scope;
        self
    }

    /// Sets the sort direction.
    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort.order = order;
        self
    }
}
