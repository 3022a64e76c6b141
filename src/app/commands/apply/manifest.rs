//! Project paths touched by provisioning, and the templates they come from.

pub const DOCKERFILE: &str = "Dockerfile";

pub const SERVICE_CONFIGS: [&str; 4] =
    ["config/cable.yml", "config/cache.yml", "config/queue.yml", "config/recurring.yml"];

/// Shared deploy descriptor; takes the hyphenated service name.
pub const DEPLOY_DESCRIPTOR: &str = "config/deploy.yml";
/// Per-destination descriptors; take the underscored name.
pub const DESTINATION_DESCRIPTORS: [&str; 2] =
    ["config/deploy.staging.yml", "config/deploy.production.yml"];

pub const LEGACY_SECRETS: &str = ".kamal/secrets";
pub const DEPLOY_SECRETS: [&str; 3] =
    [".kamal/secrets-common", ".kamal/secrets.staging", ".kamal/secrets.production"];

pub const DATABASE_CONFIG: &str = "config/database.yml";

pub const AUXILIARY_MIGRATIONS: [&str; 3] = [
    "db/cable_migrate/001_create_cable_table.rb",
    "db/cache_migrate/001_create_cache_table.rb",
    "db/queue_migrate/001_create_queue_table.rb",
];

pub const SEEDS_DIR: &str = "db/seeds";
pub const SEEDS_LOADER: &str = "db/seeds.rb";

pub const CREDENTIALS_DIR: &str = "config/credentials";
pub const MASTER_KEY: &str = "config/master.key";
pub const DEFAULT_CREDENTIALS: &str = "config/credentials.yml.enc";

pub const APPLICATION_CONFIG: &str = "config/application.rb";
pub const APPLICATION_ANCHOR: &str = "class Application < Rails::Application\n";
pub const CONFIGURE_OPENER: &str = "Rails.application.configure do";

pub const TSCONFIG_APP: &str = "tsconfig.app.json";
pub const TSCONFIG: &str = "tsconfig.json";
pub const PACKAGE_LOCK: &str = "package-lock.json";
pub const PROCESS_MANIFEST: &str = "Procfile.dev";
pub const VITE_BINSTUB: &str = "bin/vite";

pub const LINTER_CONFIG: &str = ".rubocop.yml";
pub const ENV_EXAMPLE: &str = ".env.example";
pub const MULTIPLEXER_LAYOUT: &str = ".zellij/layout.kdl";
pub const MULTIPLEXER_LAUNCHER: &str = "bin/ze";
pub const DB_RESET_SCRIPT: &str = "bin/db-reset";

/// Every path fetched from the template source.
#[cfg(test)]
pub fn all_template_paths() -> Vec<String> {
    let mut paths: Vec<&str> = vec![DOCKERFILE, DEPLOY_DESCRIPTOR];
    paths.extend(SERVICE_CONFIGS);
    paths.extend(DESTINATION_DESCRIPTORS);
    paths.extend(DEPLOY_SECRETS);
    paths.extend(AUXILIARY_MIGRATIONS);
    paths.extend([LINTER_CONFIG, ENV_EXAMPLE, MULTIPLEXER_LAYOUT, MULTIPLEXER_LAUNCHER, DB_RESET_SCRIPT]);
    let mut paths: Vec<String> = paths.into_iter().map(str::to_string).collect();
    paths.sort();
    paths
}
