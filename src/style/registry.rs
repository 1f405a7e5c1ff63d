//! Template registry.

use super::builtin;
use super::template::TemplateConfig;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Process-wide catalog of named templates.
///
/// Names are case-insensitive. Registration is expected to happen during a
/// single-threaded startup phase; afterwards the registry is read-only and
/// `Arc` handles can be shared freely across worker threads. Concurrent
/// registration requires an external lock supplied by the caller.
pub struct TemplateRegistry {
    templates: HashMap<String, Arc<TemplateConfig>>,
}

impl TemplateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Create a registry pre-loaded with the built-in templates.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for template in builtin::all() {
            registry
                .register(template)
                .expect("builtin templates validate");
        }
        registry
    }

    /// Register a template under its own name, overwriting silently.
    ///
    /// Fails only when the template violates schema constraints; the
    /// previous registration is kept in that case.
    pub fn register(&mut self, template: TemplateConfig) -> Result<()> {
        template.validate()?;
        self.templates
            .insert(template.name.to_lowercase(), Arc::new(template));
        Ok(())
    }

    /// Look up a template by name.
    pub fn get(&self, name: &str) -> Result<Arc<TemplateConfig>> {
        self.templates
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| Error::TemplateNotFound(name.to_string()))
    }

    /// Look up a template, falling back to the default template.
    pub fn get_or_default(&self, name: &str) -> Result<Arc<TemplateConfig>> {
        self.get(name).or_else(|_| self.get(builtin::DEFAULT_TEMPLATE))
    }

    /// Check whether a template is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(&name.to_lowercase())
    }

    /// List `(name, description)` pairs, sorted by name.
    pub fn list(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .templates
            .values()
            .map(|t| (t.name.clone(), t.description.clone()))
            .collect();
        entries.sort();
        entries
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
