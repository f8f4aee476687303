//! Compiled output model: per-field columns and the configuration root.
//!
//! The model mirrors what hand-authored grid configurations look like on the
//! wire. Every leaf is optional and absent leaves are skipped on output, so
//! an overlay can always tell "explicitly set" apart from "never mentioned".
//! That distinction is what the merge engine's precedence runs on.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use formgrid_schema::SelectOption;

use crate::render_type::RenderType;

/// Color hint applied to dictionary-bound columns.
pub const AUTO_COLOR: &str = "auto";

/// Dictionary binding attached to enumeration-style columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DictBinding {
    /// Inline value/label pairs, in display order.
    Options(Vec<SelectOption>),
    /// Code naming a server-backed dictionary.
    Code(String),
}

/// Search-panel settings for one column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
}

impl SearchOptions {
    /// True when no leaf is set; such blocks are skipped on output.
    pub fn is_unset(&self) -> bool {
        self.show.is_none()
    }
}

/// List-column settings for one column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentOptions>,
}

impl ColumnOptions {
    /// True when no leaf is set; such blocks are skipped on output.
    pub fn is_unset(&self) -> bool {
        self.show.is_none() && self.width.is_none() && self.component.is_none()
    }
}

/// Renderer component hints for one column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One renderer-ready column descriptor.
///
/// Keys beyond the known settings are carried verbatim in `extra`; overlays
/// may attach arbitrary renderer hints the compiler never interprets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompiledColumn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub render_type: Option<RenderType>,
    #[serde(default, skip_serializing_if = "SearchOptions::is_unset")]
    pub search: SearchOptions,
    #[serde(default, skip_serializing_if = "ColumnOptions::is_unset")]
    pub column: ColumnOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dict: Option<DictBinding>,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl CompiledColumn {
    /// Create a column with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column heading.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the rendering tag.
    pub fn with_render_type(mut self, render_type: RenderType) -> Self {
        self.render_type = Some(render_type);
        self
    }

    /// Set the list-column width in pixels.
    pub fn with_width(mut self, width: u32) -> Self {
        self.column.width = Some(width);
        self
    }

    /// Set whether the column appears in the search panel.
    pub fn with_search_shown(mut self, shown: bool) -> Self {
        self.search.show = Some(shown);
        self
    }

    /// Set whether the column appears in the list.
    pub fn with_column_shown(mut self, shown: bool) -> Self {
        self.column.show = Some(shown);
        self
    }

    /// Set the renderer color hint.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.column.component = Some(ComponentOptions {
            color: Some(color.into()),
        });
        self
    }

    /// Attach a dictionary binding.
    pub fn with_dict(mut self, dict: DictBinding) -> Self {
        self.dict = Some(dict);
        self
    }

    /// Attach a free-form renderer hint.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Root output of a compile pass: columns keyed by field identifier.
///
/// Column order is meaningful and preserved end to end; it is the order the
/// grid lays fields out in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompiledConfiguration {
    #[serde(default)]
    pub columns: IndexMap<String, CompiledColumn>,
}

impl CompiledConfiguration {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a column, builder style.
    pub fn with_column(mut self, field: impl Into<String>, column: CompiledColumn) -> Self {
        self.columns.insert(field.into(), column);
        self
    }

    /// Look up a column by field identifier.
    pub fn get(&self, field: &str) -> Option<&CompiledColumn> {
        self.columns.get(field)
    }

    /// Field identifiers in layout order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when no columns were produced.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_leaves_vanish_from_the_wire() {
        let wire = serde_json::to_value(CompiledColumn::new()).unwrap();
        assert_eq!(wire, json!({}));
    }

    #[test]
    fn serializes_with_config_file_key_names() {
        let column = CompiledColumn::new()
            .with_title("Status")
            .with_render_type(RenderType::DictSelect)
            .with_search_shown(true)
            .with_column_shown(true)
            .with_width(120)
            .with_color(AUTO_COLOR)
            .with_dict(DictBinding::Code("order_status".into()));

        let wire = serde_json::to_value(&column).unwrap();
        assert_eq!(
            wire,
            json!({
                "title": "Status",
                "type": "dict-select",
                "search": {"show": true},
                "column": {
                    "show": true,
                    "width": 120,
                    "component": {"color": "auto"}
                },
                "dict": "order_status"
            })
        );
    }

    #[test]
    fn inline_options_serialize_as_an_array() {
        let column = CompiledColumn::new().with_dict(DictBinding::Options(vec![
            SelectOption::new("1").with_label("Yes"),
            SelectOption::new("0").with_label("No"),
        ]));
        let wire = serde_json::to_value(&column).unwrap();
        assert_eq!(
            wire["dict"],
            json!([
                {"value": "1", "label": "Yes"},
                {"value": "0", "label": "No"}
            ])
        );
    }

    #[test]
    fn unknown_keys_round_trip_through_extra() {
        let wire = json!({
            "title": "Owner",
            "align": "left",
            "form": {"span": 12}
        });
        let column: CompiledColumn = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(column.title.as_deref(), Some("Owner"));
        assert_eq!(column.extra["align"], json!("left"));
        assert_eq!(column.extra["form"]["span"], json!(12));

        assert_eq!(serde_json::to_value(&column).unwrap(), wire);
    }

    #[test]
    fn dict_binding_parses_both_shapes() {
        let code: DictBinding = serde_json::from_value(json!("order_status")).unwrap();
        assert_eq!(code, DictBinding::Code("order_status".into()));

        let options: DictBinding =
            serde_json::from_value(json!([{"value": "a", "label": "A"}])).unwrap();
        assert_eq!(
            options,
            DictBinding::Options(vec![SelectOption::new("a").with_label("A")])
        );
    }

    #[test]
    fn configuration_preserves_column_order() {
        let config = CompiledConfiguration::new()
            .with_column("name", CompiledColumn::new().with_title("Name"))
            .with_column("status", CompiledColumn::new().with_title("Status"))
            .with_column("created", CompiledColumn::new().with_title("Created"));

        let fields: Vec<_> = config.fields().collect();
        assert_eq!(fields, ["name", "status", "created"]);
        assert_eq!(config.len(), 3);
        assert_eq!(config.get("status").unwrap().title.as_deref(), Some("Status"));
        assert_eq!(config.get("missing"), None);
    }
}
