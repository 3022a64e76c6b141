//! Developer tooling steps.

use crate::app::ProvisionContext;
use crate::app::commands::apply::manifest::{
    DB_RESET_SCRIPT, ENV_EXAMPLE, LINTER_CONFIG, MULTIPLEXER_LAUNCHER, MULTIPLEXER_LAYOUT,
};
use crate::domain::templates::{GeneratedFile, render_static};
use crate::domain::{AppError, Environment};
use crate::ports::Tone;

use super::inject_settings_block;

pub fn copy_linter_config(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Copying RuboCop configuration...");
    ctx.copy_template(LINTER_CONFIG)
}

pub fn copy_env_example(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Copying .env.example...");
    ctx.copy_template(ENV_EXAMPLE)
}

pub fn install_multiplexer_config(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Setting up Zellij configuration...");
    ctx.copy_template(MULTIPLEXER_LAYOUT)?;
    ctx.copy_template(MULTIPLEXER_LAUNCHER)?;
    ctx.fs().set_executable(MULTIPLEXER_LAUNCHER)
}

pub fn install_helper_scripts(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Setting up custom bin scripts...");
    ctx.copy_template(DB_RESET_SCRIPT)?;
    ctx.fs().set_executable(DB_RESET_SCRIPT)
}

pub fn install_schema_annotations(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Installing annotaterb...");
    ctx.run(ctx.rails(&["generate", "annotate_rb:install"])).map(|_| ())
}

pub fn configure_development(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Configuring development hosts and letter_opener...");
    let block = render_static(GeneratedFile::DevelopmentSettings)?;
    inject_settings_block(ctx, &Environment::Development.settings_path(), &block)
}
