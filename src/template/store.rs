use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::error::ServiceError;
use crate::template::models::{DataBinding, SaveTemplateRequest, Template};

/// In-memory template store keyed by unique template name.
///
/// Backed by a `BTreeMap` so `list()` order is stable across calls absent
/// mutation. Writes serialize on the write lock, which covers the
/// per-name serialization requirement for concurrent saves.
#[derive(Default)]
pub struct TemplateStore {
    inner: RwLock<BTreeMap<String, Template>>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and upsert a template by name, returning the stored value.
    ///
    /// A second save with the same name overwrites the first; `created_at`
    /// survives the overwrite, `updated_at` is bumped. A missing
    /// `data_binding` is inferred from the name once, here.
    pub fn save(&self, request: SaveTemplateRequest) -> Result<Template, ServiceError> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(ServiceError::Validation(
                "Template name is required".to_string(),
            ));
        }

        let data_binding = request
            .data_binding
            .unwrap_or_else(|| DataBinding::infer_from_name(&name));

        let now = chrono::Utc::now();
        let mut templates = self.inner.write();
        let created_at = templates
            .get(&name)
            .map(|existing| existing.created_at)
            .unwrap_or(now);

        let template = Template {
            name: name.clone(),
            data_binding,
            sections: request.sections,
            created_at,
            updated_at: now,
        };
        templates.insert(name, template.clone());
        Ok(template)
    }

    /// All templates in stable (name) order.
    pub fn list(&self) -> Vec<Template> {
        self.inner.read().values().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Result<Template, ServiceError> {
        self.inner
            .read()
            .get(name.trim())
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("Template '{}' not found", name.trim())))
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Full snapshot for background persistence.
    pub fn snapshot(&self) -> Vec<Template> {
        self.list()
    }

    /// Replace the entire contents with a loaded snapshot.
    pub fn replace_all(&self, templates: Vec<Template>) {
        let mut inner = self.inner.write();
        inner.clear();
        for template in templates {
            inner.insert(template.name.clone(), template);
        }
    }
}
