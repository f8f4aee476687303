//! Plugin descriptor types.
//!
//! A [`FieldPlugin`] describes one dynamically registered field kind: the
//! kind string it handles, human-facing metadata, a JSON-schema-like
//! description of its own configurable properties, and its current instance
//! configuration. Descriptors arrive on the wire (plugin bundles register
//! themselves with deserialized JSON), so every type here is serde-derived
//! with the wire key names.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Administrative state of a registered plugin.
///
/// A plugin created without a status is *unspecified*, which is a distinct
/// condition from `Disabled`: resolution treats it as enabled, but audit
/// callers can still see that no operator ever set it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginStatus {
    Enabled,
    Disabled,
}

/// JSON-schema-like description of a plugin's configurable properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PluginSchema {
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// A registered field-type extension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldPlugin {
    /// Registry-unique identifier, chosen by the plugin author.
    pub id: String,
    /// The raw kind string this plugin handles (wire key `type`). Several
    /// plugins may compete for the same kind across upgrade windows.
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    /// Semantic version text, stored verbatim.
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub schema: PluginSchema,
    /// Current instance configuration, defaulting to empty.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub config: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PluginStatus>,
}

impl FieldPlugin {
    /// Create a descriptor with the required attributes and no status.
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            name: name.into(),
            version: version.into(),
            description: None,
            category: None,
            author: None,
            schema: PluginSchema::default(),
            config: Map::new(),
            status: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the property schema.
    pub fn with_schema(mut self, schema: PluginSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Set the instance configuration.
    pub fn with_config(mut self, config: Map<String, Value>) -> Self {
        self.config = config;
        self
    }

    /// Set an explicit status.
    pub fn with_status(mut self, status: PluginStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether resolution may match this plugin.
    ///
    /// Only an explicit `Disabled` opts a plugin out; an unspecified status
    /// behaves as enabled.
    pub fn is_active(&self) -> bool {
        !matches!(self.status, Some(PluginStatus::Disabled))
    }
}
