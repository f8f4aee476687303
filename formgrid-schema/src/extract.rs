//! Depth-first field extraction over schema trees.
//!
//! The walk is pre-order: an object is checked for the [`FIELD_KEY`]
//! discriminator before its values are visited, so a field is always
//! reported before any fields nested inside it. Matching never stops the
//! descent: designers wrap fields in layout containers, and containers may
//! themselves be fields.

use serde_json::Value;

use crate::error::Result;
use crate::types::{FieldDefinition, FIELD_KEY};

/// Collect every field definition in `root`, in discovery order.
///
/// Pure and restartable: the same tree always yields the same sequence, and
/// the tree is never modified. A `null` (or otherwise empty) root yields an
/// empty vec.
pub fn extract_fields(root: &Value) -> Vec<FieldDefinition> {
    let mut fields = Vec::new();
    walk(root, &mut fields);
    fields
}

/// Parse `text` as a JSON schema document and extract its fields.
///
/// Blank input is an empty schema, not an error; anything else that fails to
/// parse is a [`crate::SchemaError::Parse`].
pub fn extract_fields_from_str(text: &str) -> Result<Vec<FieldDefinition>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let root: Value = serde_json::from_str(text)?;
    Ok(extract_fields(&root))
}

fn walk(node: &Value, fields: &mut Vec<FieldDefinition>) {
    match node {
        Value::Object(map) => {
            if map.contains_key(FIELD_KEY) {
                fields.push(FieldDefinition::from_node(map));
            }
            for child in map.values() {
                walk(child, fields);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, fields);
            }
        }
        // Scalars terminate the recursion
        _ => {}
    }
}
