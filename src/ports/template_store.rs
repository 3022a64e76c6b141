use crate::domain::AppError;

/// Source of the static template files copied into the project.
///
/// `source` is a `/`-separated path relative to the template root
/// (for example `config/deploy.yml`).
pub trait TemplateStore {
    fn fetch(&self, source: &str) -> Result<String, AppError>;

    /// Human-readable origin, used in status output.
    fn describe(&self) -> String;
}
