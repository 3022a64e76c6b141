//! Project-level filesystem operations.
//!
//! All `path` arguments are relative to the project root of the generated
//! application. Provisioning steps never touch files outside it.

use crate::domain::AppError;

/// Port for filesystem operations on the generated project.
///
/// Implementations must reject paths that escape the root boundary.
pub trait RepositoryFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Remove a file. No-op if the file does not exist.
    fn remove_file(&self, path: &str) -> Result<(), AppError>;

    /// Move a file, creating the destination's parent directories.
    fn rename(&self, from: &str, to: &str) -> Result<(), AppError>;

    /// Set the executable bit on a file (Unix-only).
    fn set_executable(&self, path: &str) -> Result<(), AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &str) -> Result<(), AppError>;
}
