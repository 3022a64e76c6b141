use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::TemplateStore;

use super::validate_template_path;

/// Templates read from a local template directory.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateStore {
    root: PathBuf,
}

impl DirectoryTemplateStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl TemplateStore for DirectoryTemplateStore {
    fn fetch(&self, source: &str) -> Result<String, AppError> {
        validate_template_path(source)?;
        match fs::read_to_string(self.root.join(source)) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(AppError::TemplateNotFound(source.to_string()))
            }
            Err(err) => Err(AppError::Io(err)),
        }
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_nested_templates() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("config")).unwrap();
        fs::write(dir.path().join("config/cable.yml"), "adapter: solid_cable\n").unwrap();

        let store = DirectoryTemplateStore::new(dir.path().to_path_buf());
        assert_eq!(store.fetch("config/cable.yml").unwrap(), "adapter: solid_cable\n");
    }

    #[test]
    fn missing_template_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = DirectoryTemplateStore::new(dir.path().to_path_buf());
        assert!(matches!(store.fetch("Dockerfile"), Err(AppError::TemplateNotFound(_))));
    }
}
