//! Field resolution: dotted-path lookup into a JSON data context.
//!
//! Resolution never fails. Any traversal problem (missing key, bad array
//! index, non-container intermediate, null leaf) falls back to the field's
//! `default_value` so a single bad mapping cannot abort a generation. This
//! silent fallback is part of the contract, not error handling that was
//! forgotten.

use serde_json::Value;

use crate::template::models::Field;

/// Produce the display string for a field against a data context.
pub fn resolve(field: &Field, context: &Value) -> String {
    if field.mapping_field.is_empty() {
        return field.default_value.clone();
    }

    let mut current = context;
    for segment in field.mapping_field.split('.') {
        current = match current {
            Value::Object(map) => match map.get(segment) {
                Some(value) => value,
                None => return field.default_value.clone(),
            },
            // Numeric segments index into sequences
            Value::Array(items) => match segment.parse::<usize>().ok().and_then(|i| items.get(i)) {
                Some(value) => value,
                None => return field.default_value.clone(),
            },
            _ => return field.default_value.clone(),
        };
    }

    stringify(current).unwrap_or_else(|| field.default_value.clone())
}

/// Canonical string form of a resolved leaf value; `None` for null.
fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        // Container leaves serialize to compact JSON
        other => serde_json::to_string(other).ok(),
    }
}
