//! The `apply` command: resolve options, then provision the project.

pub mod manifest;
pub mod options;
pub mod orchestrator;
mod steps;
mod summary;

use std::path::Path;

use crate::adapters::{BundlerScaffold, FilesystemStore, ProcessCommandRunner};
use crate::app::ProvisionContext;
use crate::app::config::Settings;
use crate::domain::{AppError, AppName, SelectionMap, Step};
use crate::ports::{Console, Prompter, RepositoryFilesystem, Tone};

use self::manifest::APPLICATION_CONFIG;
use self::options::{Mode, resolve};

/// What an invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub mode: Mode,
    pub selection: SelectionMap,
    /// Steps executed, empty when help was shown.
    pub steps: Vec<Step>,
}

/// Resolve `args` and, unless help was requested, provision the project.
pub fn execute(
    args: &[String],
    settings: &Settings,
    prompter: &dyn Prompter,
    console: &dyn Console,
) -> Result<ApplyOutcome, AppError> {
    let resolution = resolve(args, prompter, console)?;
    if !resolution.should_provision() {
        return Ok(ApplyOutcome { mode: resolution.mode, selection: resolution.selection, steps: Vec::new() });
    }

    let fs = FilesystemStore::new(settings.project_dir.clone());
    let templates = settings.template_source.open(settings.timeout)?;
    let runner = ProcessCommandRunner::new(settings.project_dir.clone());
    let scaffold =
        BundlerScaffold::new(&fs, &runner, settings.commands.bundle.as_str(), settings.run_bundle);

    let app_name = resolve_app_name(settings.app_name.as_deref(), &fs, &settings.project_dir)?;
    tracing::info!(app = app_name.underscored(), templates = %templates.describe(), "provisioning");
    console.say(Tone::Plain, &format!("Using {}", templates.describe()));

    let ctx = ProvisionContext::new(
        &fs,
        templates.as_ref(),
        &runner,
        console,
        app_name,
        settings.commands.clone(),
    );
    let steps = orchestrator::provision(&resolution.selection, &scaffold, &ctx)?;

    Ok(ApplyOutcome { mode: resolution.mode, selection: resolution.selection, steps })
}

/// Explicit name, else the module in `config/application.rb`, else the directory name.
pub fn resolve_app_name(
    explicit: Option<&str>,
    fs: &dyn RepositoryFilesystem,
    project_dir: &Path,
) -> Result<AppName, AppError> {
    if let Some(name) = explicit {
        return AppName::derive(name);
    }

    if fs.file_exists(APPLICATION_CONFIG) {
        let content = fs.read_file(APPLICATION_CONFIG)?;
        if let Some(name) = AppName::from_application_config(&content) {
            return name;
        }
    }

    let dir_name = project_dir
        .canonicalize()
        .ok()
        .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        .ok_or_else(|| AppError::InvalidAppName(project_dir.display().to_string()))?;
    AppName::derive(&dir_name)
}
