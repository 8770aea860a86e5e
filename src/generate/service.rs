//! Generation orchestration: request validation, template and user lookup,
//! field resolution and PDF composition.
//!
//! Phases run in a fixed order (validate, load template, decide the user
//! requirement, load user, resolve, compose) so validation and not-found
//! errors fire before any resolution work. Generation never mutates the
//! stores; concurrent requests are independent.

use serde_json::Value;

use crate::error::ServiceError;
use crate::generate::composer::{self, ComposedDocument, ComposedLine, ComposedSection};
use crate::generate::resolver;
use crate::generate::{sanitize_filename, GeneratedPdf, GenerationRequest};
use crate::template::models::{DataBinding, Template};
use crate::template::store::TemplateStore;
use crate::user::store::UserStore;

/// Generate a PDF for the requested template, optionally bound to a user.
pub fn generate(
    request: &GenerationRequest,
    templates: &TemplateStore,
    users: &UserStore,
) -> Result<GeneratedPdf, ServiceError> {
    if request.template_name.trim().is_empty() {
        return Err(ServiceError::Validation(
            "Template name is required".to_string(),
        ));
    }

    let template = templates.get(&request.template_name)?;

    let context = match (template.data_binding, request.user_id) {
        (DataBinding::User, None) => {
            return Err(ServiceError::Validation(
                "User selection is required for this template".to_string(),
            ))
        }
        // A supplied user must exist even for unbound templates; its
        // document simply becomes the resolution context.
        (_, Some(user_id)) => users.get(user_id)?.as_context(),
        (DataBinding::None, None) => Value::Null,
    };

    let document = resolve_template(&template, &context);
    let bytes = composer::render(&document)?;
    log::info!(
        "Generated {} byte PDF for template '{}'",
        bytes.len(),
        template.name
    );

    Ok(GeneratedPdf {
        filename: format!("{}.pdf", sanitize_filename(&template.name, "document")),
        bytes,
    })
}

/// Resolve every field of every section, in order, into the composer's
/// input model. Empty sections are dropped here so the composer only sees
/// content that renders.
pub fn resolve_template(template: &Template, context: &Value) -> ComposedDocument {
    let sections = template
        .sections
        .in_order()
        .into_iter()
        .filter(|(_, fields)| !fields.is_empty())
        .map(|(title, fields)| ComposedSection {
            title: title.to_string(),
            lines: fields
                .iter()
                .map(|field| ComposedLine {
                    label: field.key.clone(),
                    value: resolver::resolve(field, context),
                    alignment: field.alignment,
                })
                .collect(),
        })
        .collect();

    ComposedDocument { sections }
}
