//! Per-environment encrypted credentials.

use crate::app::ProvisionContext;
use crate::app::commands::apply::manifest::{CREDENTIALS_DIR, DEFAULT_CREDENTIALS, MASTER_KEY};
use crate::domain::templates::credentials;
use crate::domain::{AppError, Environment};
use crate::ports::Tone;

pub fn provision_credentials(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Setting up environment-specific credentials...");
    ctx.fs().create_dir_all(CREDENTIALS_DIR)?;

    let development = Environment::Development;
    if ctx.fs().file_exists(MASTER_KEY) && ctx.fs().file_exists(DEFAULT_CREDENTIALS) {
        ctx.fs().rename(MASTER_KEY, &development.credentials_key_path())?;
        ctx.fs().rename(DEFAULT_CREDENTIALS, &development.credentials_file_path())?;
        ctx.say(Tone::Success, "Moved default credentials to development environment");
    } else {
        generate(ctx, development)?;
    }

    for env in [Environment::Staging, Environment::Production] {
        generate(ctx, env)?;
    }

    ctx.say(Tone::Success, "Environment-specific credentials created:");
    for env in Environment::DEPLOYED {
        ctx.say(
            Tone::Plain,
            &format!("  • {} + {}", env.credentials_key_path(), env.credentials_file_path()),
        );
    }
    ctx.say(Tone::Plain, "  (All include secret_key_base)");
    Ok(())
}

fn temp_file(env: Environment) -> String {
    format!("tmp_credentials_{}.yml", env.name())
}

/// Seed `env`'s credentials with a fresh `secret_key_base`.
///
/// The editor is replaced by a `cat` of a temporary payload file, which is
/// removed whether or not the edit succeeds.
fn generate(ctx: &ProvisionContext<'_>, env: Environment) -> Result<(), AppError> {
    let secret = ctx.run(ctx.rails(&["secret"]).captured())?;
    let secret = secret.trim();
    if secret.is_empty() {
        return Err(AppError::CommandFailed {
            command: format!("{} secret", ctx.commands().rails),
            status: "success".to_string(),
            details: "no secret printed".to_string(),
        });
    }

    let payload_path = temp_file(env);
    ctx.fs().write_file(&payload_path, &credentials(secret)?)?;

    let edit = ctx
        .rails(&["credentials:edit", "--environment", env.name()])
        .env("EDITOR", format!("cat {} >", payload_path))
        .captured();
    let edited = ctx.run(edit);
    let cleaned = ctx.fs().remove_file(&payload_path);

    edited?;
    cleaned
}
