use std::io;

use thiserror::Error;

/// Library-wide error type for jumbo operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Path resolves outside the project root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// Template is not present in the selected source.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Remote template could not be fetched.
    #[error("Failed to fetch template from {url}: {details}")]
    TemplateFetch { url: String, details: String },

    /// A generated file body failed to render.
    #[error("Failed to render {template}: {details}")]
    RenderError { template: String, details: String },

    /// External command could not be started.
    #[error("Failed to run '{command}': {details}")]
    CommandSpawn { command: String, details: String },

    /// External command exited unsuccessfully.
    #[error("Command '{command}' exited with {status}: {details}")]
    CommandFailed { command: String, status: String, details: String },

    /// JSON document could not be read or rewritten.
    #[error("Failed to edit {path}: {details}")]
    JsonEdit { path: String, details: String },

    /// File required by a step is absent.
    #[error("Required file not found: {0}")]
    MissingFile(String),

    /// Injection anchor is absent from the target file.
    #[error("Could not find '{anchor}' in {path}")]
    AnchorNotFound { path: String, anchor: String },

    /// Application name could not be derived.
    #[error("Invalid application name '{0}'")]
    InvalidAppName(String),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// A provisioning step failed.
    #[error("Step '{step}' failed: {source}")]
    Step {
        step: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Attach the failing step's name.
    pub fn in_step(self, step: &'static str) -> Self {
        AppError::Step { step, source: Box::new(self) }
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::PathTraversal(_)
            | AppError::RenderError { .. }
            | AppError::JsonEdit { .. }
            | AppError::InvalidAppName(_) => io::ErrorKind::InvalidInput,
            AppError::TemplateNotFound(_)
            | AppError::MissingFile(_)
            | AppError::AnchorNotFound { .. } => io::ErrorKind::NotFound,
            AppError::TemplateFetch { .. }
            | AppError::CommandSpawn { .. }
            | AppError::CommandFailed { .. }
            | AppError::Prompt(_) => io::ErrorKind::Other,
            AppError::Step { source, .. } => source.kind(),
        }
    }
}
