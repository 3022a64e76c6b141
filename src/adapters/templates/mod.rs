//! Template store adapters.
//!
//! The template source is chosen once at startup and injected into the
//! provisioning context; steps never probe for alternatives.

mod directory;
mod embedded;
mod remote;

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::domain::AppError;
use crate::ports::TemplateStore;

pub use directory::DirectoryTemplateStore;
pub use embedded::EmbeddedTemplateStore;
pub use remote::RemoteTemplateStore;

/// Where static templates are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates compiled into the binary.
    Bundled,
    /// A local checkout of the template directory.
    Directory(PathBuf),
    /// An HTTP root serving the template directory.
    Remote(Url),
}

impl TemplateSource {
    /// Interpret a configured root: `http(s)://` URLs are remote, anything else a directory.
    pub fn parse(root: &str) -> Result<Self, AppError> {
        if root.starts_with("http://") || root.starts_with("https://") {
            let url = Url::parse(root).map_err(|err| {
                AppError::config_error(format!("Invalid template root URL '{}': {}", root, err))
            })?;
            Ok(TemplateSource::Remote(url))
        } else {
            Ok(TemplateSource::Directory(PathBuf::from(root)))
        }
    }

    /// Build the store for this source.
    pub fn open(&self, timeout: Duration) -> Result<Box<dyn TemplateStore>, AppError> {
        Ok(match self {
            TemplateSource::Bundled => Box::new(EmbeddedTemplateStore::new()),
            TemplateSource::Directory(path) => {
                if !path.is_dir() {
                    return Err(AppError::config_error(format!(
                        "Template directory not found: {}",
                        path.display()
                    )));
                }
                Box::new(DirectoryTemplateStore::new(path.clone()))
            }
            TemplateSource::Remote(url) => Box::new(RemoteTemplateStore::new(url.clone(), timeout)?),
        })
    }
}

impl<T: TemplateStore + ?Sized> TemplateStore for Box<T> {
    fn fetch(&self, source: &str) -> Result<String, AppError> {
        (**self).fetch(source)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Reject template paths that could escape the template root.
pub(crate) fn validate_template_path(source: &str) -> Result<(), AppError> {
    let invalid = source.is_empty()
        || source.starts_with('/')
        || source.contains('\\')
        || source.split('/').any(|part| part == ".." || part.is_empty());
    if invalid {
        return Err(AppError::PathTraversal(source.to_string()));
    }
    Ok(())
}
