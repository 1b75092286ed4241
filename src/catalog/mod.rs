mod builtin;

use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, Result};

pub use builtin::{DETAILED_CONTENTS, PROMPT_TEMPLATE};

pub const PLACEHOLDER: &str = "{detailed_content}";

/// Ordered, read-only list of drawing subjects plus the template they are
/// substituted into.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    template: String,
    items: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    template: Option<String>,
    items: Vec<String>,
}

impl ContentCatalog {
    pub fn new(template: impl Into<String>, items: Vec<String>) -> Result<Self> {
        let template = template.into();

        if items.is_empty() {
            return Err(AppError::EmptyCatalog);
        }
        if !template.contains(PLACEHOLDER) {
            return Err(AppError::Config(format!(
                "prompt template must contain {}",
                PLACEHOLDER
            )));
        }

        Ok(Self { template, items })
    }

    pub fn builtin() -> Self {
        Self {
            template: PROMPT_TEMPLATE.to_string(),
            items: DETAILED_CONTENTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Load a catalog from a TOML file with an `items` array and an optional
    /// `template`. Without a template the builtin one is used.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: CatalogFile = toml::from_str(&content)?;
        let template = file
            .template
            .unwrap_or_else(|| PROMPT_TEMPLATE.to_string());
        Self::new(template, file.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn prompt_for(&self, index: usize) -> Option<String> {
        self.get(index)
            .map(|content| self.template.replace(PLACEHOLDER, content))
    }
}
