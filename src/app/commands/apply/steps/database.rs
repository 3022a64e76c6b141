//! Database layout and seed steps.

use crate::app::ProvisionContext;
use crate::app::commands::apply::manifest::{
    AUXILIARY_MIGRATIONS, DATABASE_CONFIG, SEEDS_DIR, SEEDS_LOADER,
};
use crate::domain::templates::{
    GeneratedFile, environment_seed, multi_database_config, render_static, simple_database_config,
};
use crate::domain::{AppError, Environment};
use crate::ports::Tone;

pub fn write_multi_database_config(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Setting up database configuration...");
    ctx.fs().write_file(DATABASE_CONFIG, &multi_database_config(ctx.app_name())?)?;
    ctx.say(Tone::Success, "Database configuration created with multi-database support");
    Ok(())
}

pub fn write_simple_database_config(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Setting up database configuration...");
    ctx.fs().write_file(DATABASE_CONFIG, &simple_database_config(ctx.app_name())?)
}

pub fn copy_auxiliary_migrations(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Setting up multi-database migrations...");
    for path in AUXILIARY_MIGRATIONS {
        ctx.copy_template(path)?;
    }
    ctx.say(Tone::Success, "Multi-database migrations created:");
    for path in AUXILIARY_MIGRATIONS {
        if let Some((dir, _)) = path.rsplit_once('/') {
            ctx.say(Tone::Plain, &format!("  • {}/", dir));
        }
    }
    Ok(())
}

pub fn write_seeds(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Setting up environment-specific seeds...");
    ctx.fs().create_dir_all(SEEDS_DIR)?;
    ctx.fs().write_file(SEEDS_LOADER, &render_static(GeneratedFile::SeedsLoader)?)?;
    for env in Environment::ALL {
        ctx.fs().write_file(&env.seed_path(), &environment_seed(env)?)?;
    }

    ctx.say(Tone::Success, "Environment-specific seeds created:");
    ctx.say(Tone::Plain, &format!("  • {} (main loader)", SEEDS_LOADER));
    for env in Environment::ALL {
        ctx.say(Tone::Plain, &format!("  • {}", env.seed_path()));
    }
    Ok(())
}
