//! Step actions, one function per `Step`.

mod application;
mod credentials;
mod database;
mod devtools;
mod frontend;
mod multistaging;

use crate::app::ProvisionContext;
use crate::domain::edits::{Injection, inject_before_final_end};
use crate::domain::{AppError, Step};

/// Run the action behind `step`.
pub fn perform(step: Step, ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    match step {
        Step::InstallFrontend => frontend::install_frontend(ctx),
        Step::ConfigurePathMappings => frontend::configure_path_mappings(ctx),
        Step::InstallUiComponents => frontend::install_ui_components(ctx),
        Step::NormalizePackageManager => frontend::normalize_package_manager(ctx),
        Step::WriteProcessManifest => frontend::write_process_manifest(ctx),
        Step::CopyDockerfile => multistaging::copy_dockerfile(ctx),
        Step::CopyServiceConfigs => multistaging::copy_service_configs(ctx),
        Step::ConfigureDeployDescriptors => multistaging::configure_deploy_descriptors(ctx),
        Step::ConfigureDeploySecrets => multistaging::configure_deploy_secrets(ctx),
        Step::WriteMultiDatabaseConfig => database::write_multi_database_config(ctx),
        Step::CopyAuxiliaryMigrations => database::copy_auxiliary_migrations(ctx),
        Step::WriteSeeds => database::write_seeds(ctx),
        Step::ConfigureProduction => multistaging::configure_production(ctx),
        Step::CreateStagingEnvironment => multistaging::create_staging_environment(ctx),
        Step::ProvisionCredentials => credentials::provision_credentials(ctx),
        Step::WriteSimpleDatabaseConfig => database::write_simple_database_config(ctx),
        Step::CopyLinterConfig => devtools::copy_linter_config(ctx),
        Step::CopyEnvExample => devtools::copy_env_example(ctx),
        Step::InstallMultiplexerConfig => devtools::install_multiplexer_config(ctx),
        Step::InstallHelperScripts => devtools::install_helper_scripts(ctx),
        Step::InstallSchemaAnnotations => devtools::install_schema_annotations(ctx),
        Step::ConfigureDevelopment => devtools::configure_development(ctx),
        Step::ConfigureApplication => application::configure_application(ctx),
    }
}

/// Append `block` inside the `configure do ... end` of an environment file.
fn inject_settings_block(ctx: &ProvisionContext<'_>, path: &str, block: &str) -> Result<(), AppError> {
    let content = ctx.read_required(path)?;
    match inject_before_final_end(&content, block) {
        Injection::Applied(updated) => ctx.fs().write_file(path, &updated),
        Injection::AlreadyPresent => {
            tracing::debug!(path, "settings block already present");
            Ok(())
        }
        Injection::AnchorMissing => {
            Err(AppError::AnchorNotFound { path: path.to_string(), anchor: "end".to_string() })
        }
    }
}
