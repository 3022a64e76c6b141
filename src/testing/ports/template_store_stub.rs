//! In-memory `TemplateStore`.

use std::collections::BTreeMap;

use crate::domain::AppError;
use crate::ports::TemplateStore;

#[derive(Clone, Debug, Default)]
pub struct FakeTemplateStore {
    templates: BTreeMap<String, String>,
}

impl FakeTemplateStore {
    pub fn with(mut self, path: &str, content: &str) -> Self {
        self.templates.insert(path.to_string(), content.to_string());
        self
    }
}

impl TemplateStore for FakeTemplateStore {
    fn fetch(&self, source: &str) -> Result<String, AppError> {
        self.templates.get(source).cloned().ok_or_else(|| AppError::TemplateNotFound(source.to_string()))
    }

    fn describe(&self) -> String {
        "in-memory templates".to_string()
    }
}
