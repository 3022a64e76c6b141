//! Template fetches over HTTP using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::TemplateStore;

use super::validate_template_path;

/// Templates served from an HTTP root (`<root>/<source>`).
#[derive(Debug, Clone)]
pub struct RemoteTemplateStore {
    root: Url,
    client: Client,
}

impl RemoteTemplateStore {
    pub fn new(root: Url, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("jumbo/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::TemplateFetch {
                url: root.to_string(),
                details: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { root: with_trailing_slash(root), client })
    }

    fn url_for(&self, source: &str) -> Result<Url, AppError> {
        self.root.join(source).map_err(|e| AppError::TemplateFetch {
            url: format!("{}{}", self.root, source),
            details: e.to_string(),
        })
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

impl TemplateStore for RemoteTemplateStore {
    fn fetch(&self, source: &str) -> Result<String, AppError> {
        validate_template_path(source)?;
        let url = self.url_for(source)?;
        tracing::debug!(%url, "fetching remote template");

        let response = self.client.get(url.clone()).send().map_err(|e| AppError::TemplateFetch {
            url: url.to_string(),
            details: format!("HTTP request failed: {}", e),
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::TemplateNotFound(source.to_string()));
        }
        if !status.is_success() {
            return Err(AppError::TemplateFetch {
                url: url.to_string(),
                details: format!("HTTP {}", status),
            });
        }

        response.text().map_err(|e| AppError::TemplateFetch {
            url: url.to_string(),
            details: format!("Failed to read response body: {}", e),
        })
    }

    fn describe(&self) -> String {
        self.root.to_string()
    }
}
