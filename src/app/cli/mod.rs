//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::app::api;
use crate::app::config::Overrides;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "jumbo")]
#[command(version)]
#[command(
    about = "Apply the Jumbo template to a freshly generated Rails application",
    long_about = None,
    disable_help_flag = true
)]
struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long = "project-dir", env = "JUMBO_PROJECT_DIR", value_name = "DIR")]
    project_dir: Option<PathBuf>,
    /// Application name (defaults to the module in config/application.rb)
    #[arg(long, env = "JUMBO_APP_NAME")]
    app_name: Option<String>,
    /// Template root: a directory or an http(s) URL
    #[arg(long, env = "JUMBO_TEMPLATE_ROOT", value_name = "PATH_OR_URL")]
    template_root: Option<String>,
    /// Template options (-h, -i, --skip-<group>); pass after `--` when ambiguous
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "TEMPLATE ARGS")]
    args: Vec<String>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = run_apply(cli);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_apply(cli: Cli) -> Result<(), AppError> {
    let overrides = Overrides { app_name: cli.app_name, template_root: cli.template_root };
    let outcome = match cli.project_dir {
        Some(dir) => api::apply_at(dir, &cli.args, overrides)?,
        None => api::apply(&cli.args, overrides)?,
    };
    tracing::debug!(mode = ?outcome.mode, steps = outcome.steps.len(), "apply finished");
    Ok(())
}
