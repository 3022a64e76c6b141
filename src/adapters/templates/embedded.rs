use include_dir::{Dir, include_dir};

use crate::domain::AppError;
use crate::ports::TemplateStore;

use super::validate_template_path;

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/template");

/// Templates bundled into the binary at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn fetch(&self, source: &str) -> Result<String, AppError> {
        validate_template_path(source)?;
        TEMPLATE_DIR
            .get_file(source)
            .and_then(|file| file.contents_utf8())
            .map(str::to_string)
            .ok_or_else(|| AppError::TemplateNotFound(source.to_string()))
    }

    fn describe(&self) -> String {
        "bundled templates".to_string()
    }
}

/// Every bundled template path, sorted.
#[cfg(test)]
pub(crate) fn bundled_paths() -> Vec<String> {
    use include_dir::DirEntry;

    fn collect(dir: &Dir, out: &mut Vec<String>) {
        for entry in dir.entries() {
            match entry {
                DirEntry::File(file) => out.push(file.path().to_string_lossy().replace('\\', "/")),
                DirEntry::Dir(sub) => collect(sub, out),
            }
        }
    }

    let mut paths = Vec::new();
    collect(&TEMPLATE_DIR, &mut paths);
    paths.sort();
    paths
}
