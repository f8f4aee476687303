//! Merge engine for compiled configurations.
//!
//! A compile pass produces a fresh remote configuration from the schema; a
//! hand-authored base configuration overlays it. The precedence law, applied
//! per column and per key:
//!
//! - a key both sides set takes the base value
//! - a key only the remote sets is adopted from the remote
//! - nested objects merge recursively under the same law
//! - arrays never merge element-wise; the base array replaces the remote one
//!
//! Merging is pure: neither input is mutated, and the same inputs always
//! produce the same output, so re-merging after every schema reload is safe.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::column::{
    ColumnOptions, CompiledColumn, CompiledConfiguration, ComponentOptions, SearchOptions,
};

/// Overlay a base configuration onto a compiled remote one.
///
/// Columns keep the remote's layout order; columns only the base knows are
/// appended after it in base order.
pub fn merge_config(
    base: &CompiledConfiguration,
    remote: &CompiledConfiguration,
) -> CompiledConfiguration {
    let mut columns = IndexMap::with_capacity(remote.columns.len() + base.columns.len());
    for (field, remote_column) in &remote.columns {
        let merged = match base.columns.get(field) {
            Some(base_column) => merge_column(base_column, remote_column),
            None => remote_column.clone(),
        };
        columns.insert(field.clone(), merged);
    }
    for (field, base_column) in &base.columns {
        if !columns.contains_key(field) {
            columns.insert(field.clone(), base_column.clone());
        }
    }
    CompiledConfiguration { columns }
}

/// Merge one column under the precedence law.
///
/// The dictionary binding is a leaf: a base binding replaces the remote one
/// wholesale, option lists are never spliced together.
pub fn merge_column(base: &CompiledColumn, remote: &CompiledColumn) -> CompiledColumn {
    CompiledColumn {
        title: base.title.clone().or_else(|| remote.title.clone()),
        render_type: base
            .render_type
            .clone()
            .or_else(|| remote.render_type.clone()),
        search: SearchOptions {
            show: base.search.show.or(remote.search.show),
        },
        column: ColumnOptions {
            show: base.column.show.or(remote.column.show),
            width: base.column.width.or(remote.column.width),
            component: merge_component(base.column.component.as_ref(), remote.column.component.as_ref()),
        },
        dict: base.dict.clone().or_else(|| remote.dict.clone()),
        extra: merge_map(&base.extra, &remote.extra),
    }
}

fn merge_component(
    base: Option<&ComponentOptions>,
    remote: Option<&ComponentOptions>,
) -> Option<ComponentOptions> {
    match (base, remote) {
        (Some(base), Some(remote)) => Some(ComponentOptions {
            color: base.color.clone().or_else(|| remote.color.clone()),
        }),
        (Some(base), None) => Some(base.clone()),
        (None, Some(remote)) => Some(remote.clone()),
        (None, None) => None,
    }
}

/// Merge two free-form JSON values under the precedence law.
///
/// Only an object/object pairing recurses; every other pairing, arrays
/// included, takes the base value wholesale.
pub fn merge_value(base: &Value, remote: &Value) -> Value {
    match (base, remote) {
        (Value::Object(base_map), Value::Object(remote_map)) => {
            Value::Object(merge_map(base_map, remote_map))
        }
        _ => base.clone(),
    }
}

fn merge_map(base: &Map<String, Value>, remote: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = remote.clone();
    for (key, base_value) in base {
        let combined = match merged.get(key) {
            Some(remote_value) => merge_value(base_value, remote_value),
            None => base_value.clone(),
        };
        merged.insert(key.clone(), combined);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::DictBinding;
    use crate::render_type::RenderType;
    use formgrid_schema::SelectOption;
    use serde_json::json;

    #[test]
    fn base_wins_where_both_sides_set_a_key() {
        let base = CompiledConfiguration::new()
            .with_column("status", CompiledColumn::new().with_width(100));
        let remote = CompiledConfiguration::new()
            .with_column("status", CompiledColumn::new().with_width(200).with_title("X"));

        let merged = merge_config(&base, &remote);
        let column = merged.get("status").unwrap();
        assert_eq!(column.column.width, Some(100));
        assert_eq!(column.title.as_deref(), Some("X"));
    }

    #[test]
    fn remote_fills_keys_the_base_leaves_unset() {
        let base = CompiledConfiguration::new()
            .with_column("status", CompiledColumn::new().with_title("Status (fixed)"));
        let remote = CompiledConfiguration::new().with_column(
            "status",
            CompiledColumn::new()
                .with_title("Status")
                .with_render_type(RenderType::DictSelect)
                .with_search_shown(true)
                .with_column_shown(true),
        );

        let merged = merge_config(&base, &remote);
        let column = merged.get("status").unwrap();
        assert_eq!(column.title.as_deref(), Some("Status (fixed)"));
        assert_eq!(column.render_type, Some(RenderType::DictSelect));
        assert_eq!(column.search.show, Some(true));
        assert_eq!(column.column.show, Some(true));
    }

    #[test]
    fn columns_keep_remote_order_with_base_extras_appended() {
        let base = CompiledConfiguration::new()
            .with_column("actions", CompiledColumn::new().with_title("Actions"))
            .with_column("name", CompiledColumn::new().with_width(240));
        let remote = CompiledConfiguration::new()
            .with_column("name", CompiledColumn::new().with_title("Name"))
            .with_column("status", CompiledColumn::new().with_title("Status"));

        let merged = merge_config(&base, &remote);
        let fields: Vec<_> = merged.fields().collect();
        assert_eq!(fields, ["name", "status", "actions"]);
        assert_eq!(merged.get("name").unwrap().column.width, Some(240));
        assert_eq!(merged.get("name").unwrap().title.as_deref(), Some("Name"));
    }

    #[test]
    fn component_color_merges_leaf_by_leaf() {
        let base = CompiledColumn::new().with_color("red");
        let remote = CompiledColumn::new().with_color("auto").with_width(80);

        let merged = merge_column(&base, &remote);
        let component = merged.column.component.unwrap();
        assert_eq!(component.color.as_deref(), Some("red"));
        assert_eq!(merged.column.width, Some(80));

        let merged = merge_column(&CompiledColumn::new(), &remote);
        assert_eq!(
            merged.column.component.unwrap().color.as_deref(),
            Some("auto")
        );
    }

    #[test]
    fn dict_bindings_replace_wholesale() {
        let base = CompiledColumn::new().with_dict(DictBinding::Options(vec![
            SelectOption::new("manual").with_label("Manual"),
        ]));
        let remote = CompiledColumn::new().with_dict(DictBinding::Options(vec![
            SelectOption::new("a"),
            SelectOption::new("b"),
        ]));

        let merged = merge_column(&base, &remote);
        assert_eq!(
            merged.dict,
            Some(DictBinding::Options(vec![
                SelectOption::new("manual").with_label("Manual")
            ]))
        );

        let merged = merge_column(&CompiledColumn::new(), &remote);
        assert_eq!(merged.dict, remote.dict);
    }

    #[test]
    fn extra_objects_merge_recursively() {
        let base = CompiledColumn::new().with_extra("form", json!({"span": 12}));
        let remote = CompiledColumn::new()
            .with_extra("form", json!({"span": 24, "rules": ["required"]}))
            .with_extra("align", json!("left"));

        let merged = merge_column(&base, &remote);
        assert_eq!(merged.extra["form"], json!({"span": 12, "rules": ["required"]}));
        assert_eq!(merged.extra["align"], json!("left"));
    }

    #[test]
    fn arrays_in_extras_replace_wholesale() {
        let base = CompiledColumn::new().with_extra("rules", json!(["required"]));
        let remote =
            CompiledColumn::new().with_extra("rules", json!(["required", "max-length"]));

        let merged = merge_column(&base, &remote);
        assert_eq!(merged.extra["rules"], json!(["required"]));
    }

    #[test]
    fn mismatched_shapes_take_the_base_value() {
        let base = CompiledColumn::new().with_extra("form", json!("compact"));
        let remote = CompiledColumn::new().with_extra("form", json!({"span": 24}));

        let merged = merge_column(&base, &remote);
        assert_eq!(merged.extra["form"], json!("compact"));
    }

    #[test]
    fn merge_is_deterministic_and_leaves_inputs_alone() {
        let base = CompiledConfiguration::new()
            .with_column("a", CompiledColumn::new().with_width(100))
            .with_column("z", CompiledColumn::new().with_title("Z"));
        let remote = CompiledConfiguration::new()
            .with_column("a", CompiledColumn::new().with_width(200).with_title("A"));

        let first = merge_config(&base, &remote);
        let second = merge_config(&base, &remote);
        assert_eq!(first, second);

        // Inputs are untouched, so the next reload can re-merge.
        assert_eq!(base.get("a").unwrap().column.width, Some(100));
        assert_eq!(remote.get("a").unwrap().title.as_deref(), Some("A"));
    }

    #[test]
    fn value_merge_recurses_through_nested_objects() {
        let base = json!({"a": {"b": {"c": 1}}, "list": [1]});
        let remote = json!({"a": {"b": {"c": 2, "d": 3}, "e": 4}, "list": [2, 3], "f": 5});

        let merged = merge_value(&base, &remote);
        assert_eq!(
            merged,
            json!({"a": {"b": {"c": 1, "d": 3}, "e": 4}, "list": [1], "f": 5})
        );
    }
}
