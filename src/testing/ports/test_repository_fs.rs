//! Test double for `RepositoryFilesystem`.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::test_files::TestFiles;

/// In-memory implementation of `RepositoryFilesystem` for unit tests.
#[derive(Clone, Debug, Default)]
pub struct MockRepositoryFs {
    files: TestFiles,
    writes: Arc<AtomicUsize>,
}

impl MockRepositoryFs {
    pub fn new(files: TestFiles) -> Self {
        Self { files, writes: Arc::default() }
    }

    pub fn with_files(entries: &[(&str, &str)]) -> Self {
        let files = TestFiles::new();
        for (path, content) in entries {
            files.add(path, content);
        }
        Self::new(files)
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.files.lock().unwrap().get(path).cloned()
    }

    pub fn paths(&self) -> Vec<String> {
        self.files.files.lock().unwrap().keys().cloned().collect()
    }

    pub fn is_executable(&self, path: &str) -> bool {
        self.files.executables.lock().unwrap().contains(path)
    }

    /// Number of `write_file` calls made so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Snapshot of every file, for before/after comparisons.
    pub fn snapshot(&self) -> Vec<(String, String)> {
        self.files.files.lock().unwrap().iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

fn not_found(path: &str) -> AppError {
    AppError::from(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        format!("Mock file not found: {}", path),
    ))
}

impl RepositoryFilesystem for MockRepositoryFs {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.content(path).ok_or_else(|| not_found(path))
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.files.add(path, content);
        Ok(())
    }

    fn remove_file(&self, path: &str) -> Result<(), AppError> {
        self.files.files.lock().unwrap().remove(path);
        self.files.executables.lock().unwrap().remove(path);
        Ok(())
    }

    fn rename(&self, from: &str, to: &str) -> Result<(), AppError> {
        let mut files = self.files.files.lock().unwrap();
        let content = files.remove(from).ok_or_else(|| not_found(from))?;
        files.insert(to.to_string(), content);
        Ok(())
    }

    fn set_executable(&self, path: &str) -> Result<(), AppError> {
        if self.content(path).is_none() {
            return Err(not_found(path));
        }
        self.files.executables.lock().unwrap().insert(path.to_string());
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        let files = self.files.files.lock().unwrap();
        if files.contains_key(path) {
            return true;
        }
        let prefix = if path.ends_with('/') { path.to_string() } else { format!("{}/", path) };
        files.keys().any(|k| k.starts_with(&prefix))
    }

    fn create_dir_all(&self, _path: &str) -> Result<(), AppError> {
        Ok(())
    }
}
