//! Containerised multi-environment deployment steps.

use crate::app::ProvisionContext;
use crate::app::commands::apply::manifest::{
    CONFIGURE_OPENER, DEPLOY_DESCRIPTOR, DEPLOY_SECRETS, DESTINATION_DESCRIPTORS, DOCKERFILE,
    LEGACY_SECRETS, SERVICE_CONFIGS,
};
use crate::domain::edits::{APP_NAME_PLACEHOLDER, replace_line_containing};
use crate::domain::templates::{GeneratedFile, render_static};
use crate::domain::{AppError, Environment};
use crate::ports::Tone;

use super::inject_settings_block;

pub fn copy_dockerfile(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Copying Dockerfile...");
    ctx.copy_template_with(DOCKERFILE, APP_NAME_PLACEHOLDER, ctx.app_name().underscored())
}

pub fn copy_service_configs(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Copying cable, cache, queue, and recurring configurations...");
    for path in SERVICE_CONFIGS {
        ctx.copy_template(path)?;
    }
    Ok(())
}

pub fn configure_deploy_descriptors(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Configuring Kamal deploy descriptors...");
    let app = ctx.app_name();
    ctx.copy_template_with(DEPLOY_DESCRIPTOR, APP_NAME_PLACEHOLDER, &app.hyphenated())?;
    for path in DESTINATION_DESCRIPTORS {
        ctx.copy_template_with(path, APP_NAME_PLACEHOLDER, app.underscored())?;
    }
    Ok(())
}

pub fn configure_deploy_secrets(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Configuring Kamal secrets...");
    ctx.fs().remove_file(LEGACY_SECRETS)?;
    for path in DEPLOY_SECRETS {
        ctx.copy_template(path)?;
    }
    Ok(())
}

pub fn configure_production(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Configuring production host authorization and SSL...");
    let block = render_static(GeneratedFile::ProductionSettings)?;
    inject_settings_block(ctx, &Environment::Production.settings_path(), &block)
}

/// Staging starts as a copy of the production settings.
pub fn create_staging_environment(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Creating staging environment from production...");
    let production_path = Environment::Production.settings_path();
    let production = ctx.read_required(&production_path)?;

    let header = render_static(GeneratedFile::StagingHeader)?;
    let staging = replace_line_containing(&production, CONFIGURE_OPENER, &header).ok_or_else(|| {
        AppError::AnchorNotFound { path: production_path.clone(), anchor: CONFIGURE_OPENER.to_string() }
    })?;
    ctx.fs().write_file(&Environment::Staging.settings_path(), &staging)
}
