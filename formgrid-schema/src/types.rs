//! Field definition types extracted from schema trees.
//!
//! A schema tree is an arbitrary JSON value authored by an external form
//! designer. Any object carrying the reserved [`FIELD_KEY`] is a field
//! definition; everything else (layout wrappers, groups, rows) is structure
//! the extractor descends through without interpreting.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved discriminator key that marks an object as a field definition.
pub const FIELD_KEY: &str = "field";

/// A single option in an enumeration-style field (`componentProps.options`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectOption {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SelectOption {
    /// Create an option with no display label.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
        }
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Build an option from a raw `{value, label}` object, if it is one.
    ///
    /// The designer emits option values as strings, numbers, or booleans;
    /// scalars are kept as their text form, anything else is rejected.
    pub fn from_value(raw: &Value) -> Option<Self> {
        let obj = raw.as_object()?;
        let value = scalar_text(obj.get(OPTION_VALUE_KEY)?)?;
        let label = obj
            .get(OPTION_LABEL_KEY)
            .and_then(Value::as_str)
            .map(str::to_string);
        Some(Self { value, label })
    }
}

const OPTIONS_KEY: &str = "options";
const OPTION_VALUE_KEY: &str = "value";
const OPTION_LABEL_KEY: &str = "label";
const DICT_KEY: &str = "dict";

/// One addressable input extracted from a schema tree.
///
/// The shape mirrors what form designers emit on the wire: a `field`
/// identifier, a display `label`, a raw `type` kind string, and a free-form
/// `componentProps` bag. Extraction never edits the source tree; these are
/// copies of the matched nodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FieldDefinition {
    /// Identifier the compiled column is keyed by. May be empty when the
    /// source node carried no usable identifier; compilation rejects that.
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub label: String,
    /// Raw kind string as authored (`input`, `radio`, a plugin kind, ...).
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(
        default,
        rename = "componentProps",
        skip_serializing_if = "Map::is_empty"
    )]
    pub component_props: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl FieldDefinition {
    /// Build a definition from a matched schema node.
    ///
    /// Lenient by contract: unknown keys are ignored, missing keys default,
    /// and a scalar identifier is kept as its text form the way the source
    /// system coerces object keys. A malformed identifier leaves `field`
    /// empty rather than failing extraction; the compiler is the one place
    /// that rejects unaddressable fields.
    pub fn from_node(node: &Map<String, Value>) -> Self {
        Self {
            field: node
                .get(FIELD_KEY)
                .and_then(scalar_text)
                .unwrap_or_default(),
            label: node
                .get("label")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            kind: node
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            component_props: node
                .get("componentProps")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default(),
            required: node.get("required").and_then(Value::as_bool),
        }
    }

    /// The field identifier, or `None` when it is missing or empty.
    pub fn identifier(&self) -> Option<&str> {
        if self.field.is_empty() {
            None
        } else {
            Some(&self.field)
        }
    }

    /// Ordered enumeration options from `componentProps.options`.
    ///
    /// Returns `None` when the key is absent or not an array, `Some` (possibly
    /// empty) when it is present. Insertion order is preserved verbatim and
    /// determines display order downstream. Entries that are not
    /// `{value, label}` shaped are skipped.
    pub fn options(&self) -> Option<Vec<SelectOption>> {
        let items = self.component_props.get(OPTIONS_KEY)?.as_array()?;
        let mut options = Vec::with_capacity(items.len());
        for item in items {
            match SelectOption::from_value(item) {
                Some(option) => options.push(option),
                None => {
                    tracing::debug!(field = %self.field, "skipping malformed option entry");
                }
            }
        }
        Some(options)
    }

    /// Server-backed dictionary code from `componentProps.dict`, if any.
    pub fn dict_code(&self) -> Option<&str> {
        self.component_props
            .get(DICT_KEY)
            .and_then(Value::as_str)
            .filter(|code| !code.is_empty())
    }
}

/// Text form of a scalar JSON value (string, number, or boolean).
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
