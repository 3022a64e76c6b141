//! `RepositoryFilesystem` implementation for `FilesystemStore`.

use std::fs;

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::FilesystemStore;

impl RepositoryFilesystem for FilesystemStore {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.checked_path(path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.checked_path(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn remove_file(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.checked_path(path)?;
        if full_path.exists() {
            fs::remove_file(full_path)?;
        }
        Ok(())
    }

    fn rename(&self, from: &str, to: &str) -> Result<(), AppError> {
        let source = self.checked_path(from)?;
        let target = self.checked_path(to)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::rename(source, target).map_err(AppError::from)
    }

    fn set_executable(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.checked_path(path)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&full_path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&full_path, perms)?;
        }
        #[cfg(not(unix))]
        let _ = full_path;
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        match self.checked_path(path) {
            Ok(full_path) => full_path.exists(),
            Err(_) => false,
        }
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.checked_path(path)?;
        fs::create_dir_all(full_path).map_err(AppError::from)
    }
}
