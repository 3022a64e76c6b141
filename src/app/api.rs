//! API Facade for the application.
//!
//! Glues settings, terminal adapters and command execution together.

use std::path::{Path, PathBuf};

use crate::adapters::{DialoguerPrompter, StdoutConsole};
use crate::app::commands::apply;
use crate::app::config::{Overrides, Settings};
use crate::ports::{Console, Prompter};

pub use crate::app::commands::apply::ApplyOutcome;
pub use crate::app::commands::apply::options::Mode;
pub use crate::domain::AppError;

/// Apply the template to the project in the current directory.
pub fn apply(args: &[String], overrides: Overrides) -> Result<ApplyOutcome, AppError> {
    apply_at(std::env::current_dir()?, args, overrides)
}

/// Apply the template to the project at `project_dir`.
pub fn apply_at(
    project_dir: impl Into<PathBuf>,
    args: &[String],
    overrides: Overrides,
) -> Result<ApplyOutcome, AppError> {
    let project_dir: PathBuf = project_dir.into();
    apply_with(&project_dir, args, overrides, &DialoguerPrompter, &StdoutConsole)
}

/// Apply with caller-supplied prompt and output adapters.
pub fn apply_with(
    project_dir: &Path,
    args: &[String],
    overrides: Overrides,
    prompter: &dyn Prompter,
    console: &dyn Console,
) -> Result<ApplyOutcome, AppError> {
    if !project_dir.is_dir() {
        return Err(AppError::config_error(format!(
            "Project directory not found: {}",
            project_dir.display()
        )));
    }
    let settings = Settings::load(project_dir, overrides)?;
    apply::execute(args, &settings, prompter, console)
}
