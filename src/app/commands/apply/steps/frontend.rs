//! Inertia frontend steps.

use crate::app::ProvisionContext;
use crate::app::commands::apply::manifest::{
    PACKAGE_LOCK, PROCESS_MANIFEST, TSCONFIG, TSCONFIG_APP, VITE_BINSTUB,
};
use crate::domain::edits::{PathAliases, merge_compiler_paths};
use crate::domain::templates::{GeneratedFile, render_static};
use crate::domain::AppError;
use crate::ports::{CommandSpec, Tone};

const INERTIA_INSTALL: [&str; 10] = [
    "generate",
    "inertia:install",
    "--framework=react",
    "--typescript",
    "--package-manager=bun",
    "--tailwind",
    "--vite",
    "--verbose",
    "--example-page",
    "--force",
];

const APP_ALIASES: PathAliases<'static> =
    &[("@/*", &["./app/frontend/*"]), ("~/*", &["./app/frontend/*"])];
const ROOT_ALIASES: PathAliases<'static> = &[("@/*", &["./*"])];

pub fn install_frontend(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Setting up Inertia.js with React, TypeScript, and Tailwind...");
    ctx.run(ctx.rails(&INERTIA_INSTALL))?;

    if !ctx.fs().file_exists(VITE_BINSTUB) {
        ctx.say(Tone::Warning, "bin/vite missing after install, generating binstub");
        ctx.run(
            CommandSpec::new(ctx.commands().bundle.as_str()).args(["binstubs", "vite_ruby", "--force"]),
        )?;
    }
    Ok(())
}

pub fn configure_path_mappings(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Configuring TypeScript path aliases...");
    merge_tsconfig(ctx, TSCONFIG_APP, ".", APP_ALIASES)?;
    merge_tsconfig(ctx, TSCONFIG, "./app/frontend", ROOT_ALIASES)
}

fn merge_tsconfig(
    ctx: &ProvisionContext<'_>,
    path: &str,
    base_url: &str,
    aliases: PathAliases<'_>,
) -> Result<(), AppError> {
    if !ctx.fs().file_exists(path) {
        tracing::warn!(path, "tsconfig missing, path aliases not configured");
        ctx.say(Tone::Error, &format!("{} not found, skipping path aliases", path));
        return Ok(());
    }

    let current = ctx.fs().read_file(path)?;
    let merged = merge_compiler_paths(&current, base_url, aliases)
        .map_err(|err| AppError::JsonEdit { path: path.to_string(), details: err.to_string() })?;
    if merged != current {
        ctx.fs().write_file(path, &merged)?;
    }
    Ok(())
}

pub fn install_ui_components(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Initializing shadcn/ui...");
    ctx.run(
        CommandSpec::new(ctx.commands().bunx.as_str()).args(["shadcn@latest", "init", "--defaults", "--yes"]),
    )
    .map(|_| ())
}

pub fn normalize_package_manager(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    if ctx.fs().file_exists(PACKAGE_LOCK) {
        ctx.say(Tone::Plain, "Removing package-lock.json in favour of bun.lock");
        ctx.fs().remove_file(PACKAGE_LOCK)?;
    }
    ctx.run(CommandSpec::new(ctx.commands().bun.as_str()).arg("install")).map(|_| ())
}

pub fn write_process_manifest(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    let desired = render_static(GeneratedFile::ProcessManifest)?;

    if ctx.fs().file_exists(PROCESS_MANIFEST) {
        if ctx.fs().read_file(PROCESS_MANIFEST)? == desired {
            ctx.say(Tone::Success, "Procfile.dev already configured correctly");
            return Ok(());
        }
        ctx.say(Tone::Warning, "Updating Procfile.dev...");
    } else {
        ctx.say(Tone::Heading, "Creating Procfile.dev...");
    }
    ctx.fs().write_file(PROCESS_MANIFEST, &desired)
}
