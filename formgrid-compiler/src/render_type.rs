//! Rendering-type tags and the built-in kind mapping.
//!
//! A schema author writes a raw kind string (`input`, `select`, ...); the
//! renderer consumes a tag (`text`, `dict-select`, ...). The built-in mapping
//! below is the closed first tier of resolution; kinds it does not know fall
//! through to the plugin registry and finally pass through unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag telling the renderer how to draw a column or control.
///
/// Serializes as the bare tag string, so compiled configurations stay
/// byte-compatible with hand-authored ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RenderType {
    /// Single-line text.
    Text,
    /// Multi-line text.
    Textarea,
    /// Numeric input.
    Number,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Radio group backed by a dictionary.
    DictRadio,
    /// Checkbox group backed by a dictionary.
    DictCheckbox,
    /// Dropdown backed by a dictionary.
    DictSelect,
    /// Toggle backed by a dictionary.
    DictSwitch,
    /// A tag outside the built-in set: plugin kinds and verbatim passthrough.
    Custom(String),
}

impl RenderType {
    /// The tag string the renderer sees.
    pub fn as_str(&self) -> &str {
        match self {
            RenderType::Text => "text",
            RenderType::Textarea => "textarea",
            RenderType::Number => "number",
            RenderType::Date => "date",
            RenderType::Time => "time",
            RenderType::DictRadio => "dict-radio",
            RenderType::DictCheckbox => "dict-checkbox",
            RenderType::DictSelect => "dict-select",
            RenderType::DictSwitch => "dict-switch",
            RenderType::Custom(tag) => tag,
        }
    }
}

impl From<String> for RenderType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "text" => RenderType::Text,
            "textarea" => RenderType::Textarea,
            "number" => RenderType::Number,
            "date" => RenderType::Date,
            "time" => RenderType::Time,
            "dict-radio" => RenderType::DictRadio,
            "dict-checkbox" => RenderType::DictCheckbox,
            "dict-select" => RenderType::DictSelect,
            "dict-switch" => RenderType::DictSwitch,
            _ => RenderType::Custom(tag),
        }
    }
}

impl From<RenderType> for String {
    fn from(render_type: RenderType) -> Self {
        match render_type {
            RenderType::Custom(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for RenderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in mapping from raw schema kinds to rendering tags.
///
/// This set is closed; it is consulted before any plugin lookup and a hit
/// here can never be overridden.
pub fn static_render_type(kind: &str) -> Option<RenderType> {
    let render_type = match kind {
        "input" => RenderType::Text,
        "textarea" => RenderType::Textarea,
        "number" => RenderType::Number,
        "date" => RenderType::Date,
        "time" => RenderType::Time,
        "radio" => RenderType::DictRadio,
        "checkbox" => RenderType::DictCheckbox,
        "select" => RenderType::DictSelect,
        "switch" => RenderType::DictSwitch,
        _ => return None,
    };
    Some(render_type)
}
