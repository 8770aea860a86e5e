use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

/// A user record consulted as the data context during field resolution.
///
/// Beyond `id` and `name` the record is an opaque JSON document; the
/// flattened `attributes` carry arbitrary nested data (pay details,
/// billing details, ...) owned by an external identity source.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct User {
    #[schema(example = "f1e2d3c4-b5a6-7890-1234-567890abcdef")]
    pub id: Uuid,
    #[schema(example = "Alice Johnson")]
    pub name: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub attributes: Map<String, Value>,
}

impl User {
    pub fn new(name: &str, attributes: Map<String, Value>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            attributes,
        }
    }

    /// The full record as a JSON document, for path resolution.
    pub fn as_context(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
