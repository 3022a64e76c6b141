//! Project settings loaded from `.jumbo.toml`, with CLI and environment overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::adapters::TemplateSource;
use crate::domain::AppError;

/// Settings file name, looked up in the project directory.
pub const SETTINGS_FILE: &str = ".jumbo.toml";

/// On-disk shape of `.jumbo.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default)]
    pub templates: TemplatesConfig,
    #[serde(default)]
    pub commands: CommandsConfig,
    #[serde(default)]
    pub install: InstallConfig,
}

impl SettingsFile {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let file: SettingsFile = toml::from_str(content)?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.templates.timeout_secs == 0 {
            return Err(AppError::config_error("templates.timeout_secs must be greater than 0"));
        }
        if self.templates.root.as_deref().is_some_and(|root| root.trim().is_empty()) {
            return Err(AppError::config_error("templates.root must not be empty"));
        }
        self.commands.validate()
    }
}

/// `[templates]`: where static templates come from.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    /// URL (remote) or path (directory). Absent means bundled templates.
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self { root: None, timeout_secs: default_timeout() }
    }
}

/// `[commands]`: executables invoked by provisioning steps.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandsConfig {
    #[serde(default = "default_rails")]
    pub rails: String,
    #[serde(default = "default_bundle")]
    pub bundle: String,
    #[serde(default = "default_bun")]
    pub bun: String,
    #[serde(default = "default_bunx")]
    pub bunx: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            rails: default_rails(),
            bundle: default_bundle(),
            bun: default_bun(),
            bunx: default_bunx(),
        }
    }
}

impl CommandsConfig {
    fn validate(&self) -> Result<(), AppError> {
        for (key, value) in [
            ("rails", &self.rails),
            ("bundle", &self.bundle),
            ("bun", &self.bun),
            ("bunx", &self.bunx),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::config_error(format!("commands.{} must not be empty", key)));
            }
        }
        Ok(())
    }
}

/// `[install]`: the dependency install boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallConfig {
    #[serde(default = "default_true")]
    pub run_bundle: bool,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self { run_bundle: default_true() }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_rails() -> String {
    "bin/rails".to_string()
}

fn default_bundle() -> String {
    "bundle".to_string()
}

fn default_bun() -> String {
    "bun".to_string()
}

fn default_bunx() -> String {
    "bunx".to_string()
}

fn default_true() -> bool {
    true
}

/// Values supplied on the command line or through `JUMBO_*` variables.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub app_name: Option<String>,
    pub template_root: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub project_dir: PathBuf,
    pub app_name: Option<String>,
    pub template_source: TemplateSource,
    pub timeout: Duration,
    pub commands: CommandsConfig,
    pub run_bundle: bool,
}

impl Settings {
    /// Merge overrides over the project's settings file over defaults.
    pub fn load(project_dir: &Path, overrides: Overrides) -> Result<Self, AppError> {
        let path = project_dir.join(SETTINGS_FILE);
        let file = if path.is_file() {
            tracing::debug!(path = %path.display(), "loading settings file");
            SettingsFile::parse(&std::fs::read_to_string(&path)?)?
        } else {
            SettingsFile::default()
        };
        Self::resolve(project_dir, file, overrides)
    }

    pub fn resolve(
        project_dir: &Path,
        file: SettingsFile,
        overrides: Overrides,
    ) -> Result<Self, AppError> {
        let template_source = match overrides.template_root {
            Some(root) => TemplateSource::parse(&root)?,
            None => match file.templates.root.as_deref() {
                Some(root) => match TemplateSource::parse(root)? {
                    // Paths in the settings file are relative to the project.
                    TemplateSource::Directory(dir) if dir.is_relative() => {
                        TemplateSource::Directory(project_dir.join(dir))
                    }
                    source => source,
                },
                None => TemplateSource::Bundled,
            },
        };

        Ok(Self {
            project_dir: project_dir.to_path_buf(),
            app_name: overrides.app_name.filter(|name| !name.trim().is_empty()),
            template_source,
            timeout: Duration::from_secs(file.templates.timeout_secs),
            commands: file.commands,
            run_bundle: file.install.run_bundle,
        })
    }
}
