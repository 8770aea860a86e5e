//! PDF generation: path resolution, layout and the generation endpoint.

pub mod composer;
pub mod fonts;
pub mod handlers;
pub mod resolver;
pub mod service;


use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Input pairing a template name with an optional user identifier.
/// Ephemeral; never persisted.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerationRequest {
    #[schema(example = "Salary Slip")]
    pub template_name: String,
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

/// Result of a successful generation.
#[derive(Debug)]
pub struct GeneratedPdf {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Sanitize a string for use in filenames.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut result = String::new();
    let mut last_dash = false;

    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            if !last_dash && !result.is_empty() {
                result.push('-');
                last_dash = true;
            }
        }
    }

    if result.is_empty() {
        return fallback.to_string();
    }

    result.trim_matches('-').to_string()
}
