use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Horizontal text alignment of a rendered field line.
///
/// Variant names match the wire format used by existing clients
/// ("Left", "Center", "Right").
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A single labeled data point within a template.
///
/// `mapping_field` is a dot-separated path into the data context
/// (e.g. "payDetail.basic_pay"); when it is empty or does not resolve,
/// `default_value` is rendered instead.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct Field {
    #[serde(default)]
    #[schema(example = "Employee Name")]
    pub key: String,
    #[serde(default)]
    #[schema(example = "payDetail.basic_pay")]
    pub mapping_field: String,
    #[serde(default)]
    #[schema(example = "N/A")]
    pub default_value: String,
    #[serde(default)]
    pub alignment: Alignment,
}

/// The three ordered field groups of a template.
///
/// Serialized with capitalized keys ("Header", "Body", "Footer") to match
/// the payloads existing clients already send. Insertion order within each
/// group is preserved and drives rendering order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, ToSchema)]
pub struct Sections {
    #[serde(rename = "Header", default)]
    pub header: Vec<Field>,
    #[serde(rename = "Body", default)]
    pub body: Vec<Field>,
    #[serde(rename = "Footer", default)]
    pub footer: Vec<Field>,
}

impl Sections {
    /// Section titles and field slices in rendering order.
    pub fn in_order(&self) -> [(&'static str, &[Field]); 3] {
        [
            ("Header", self.header.as_slice()),
            ("Body", self.body.as_slice()),
            ("Footer", self.footer.as_slice()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.body.is_empty() && self.footer.is_empty()
    }
}

/// Whether generating from a template needs an external per-user data
/// context. Stored explicitly on the template instead of being inferred
/// from the template name at generation time.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DataBinding {
    #[default]
    None,
    User,
}

impl DataBinding {
    /// Legacy inference for payloads that omit `data_binding`: templates
    /// whose name contains "salary" (case-insensitively) bind to a user.
    /// Applied once at save time; generation only reads the stored field.
    pub fn infer_from_name(name: &str) -> Self {
        if name.to_lowercase().contains("salary") {
            DataBinding::User
        } else {
            DataBinding::None
        }
    }
}

/// A named, ordered blueprint for generating a PDF document.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct Template {
    #[schema(example = "Salary Slip")]
    pub name: String,
    #[serde(default)]
    pub data_binding: DataBinding,
    #[serde(flatten)]
    pub sections: Sections,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `POST /api/templates`. Timestamps and, when omitted, the
/// data binding are filled in by the store.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveTemplateRequest {
    #[schema(example = "Salary Slip")]
    pub name: String,
    #[serde(default)]
    pub data_binding: Option<DataBinding>,
    #[serde(flatten)]
    pub sections: Sections,
}
