//! Typed definitions of generated file bodies.
//!
//! Every file body jumbo writes itself (as opposed to copying from the template
//! source) is one of these definitions, rendered through [`render`].

use minijinja::{Environment as Engine, UndefinedBehavior, Value};

use crate::domain::{AppError, AppName, Environment};

/// Auxiliary databases that share the deployed "trifecta" connection.
pub const AUXILIARY_DATABASES: [&str; 3] = ["cache", "queue", "cable"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratedFile {
    MultiDatabaseConfig,
    SimpleDatabaseConfig,
    SeedsLoader,
    EnvironmentSeed,
    ProcessManifest,
    ProductionSettings,
    DevelopmentSettings,
    StagingHeader,
    ApplicationGenerators,
    Credentials,
}

impl GeneratedFile {
    pub fn name(self) -> &'static str {
        match self {
            GeneratedFile::MultiDatabaseConfig => "database_multi.yml",
            GeneratedFile::SimpleDatabaseConfig => "database_simple.yml",
            GeneratedFile::SeedsLoader => "seeds.rb",
            GeneratedFile::EnvironmentSeed => "seed_environment.rb",
            GeneratedFile::ProcessManifest => "Procfile.dev",
            GeneratedFile::ProductionSettings => "production_settings.rb",
            GeneratedFile::DevelopmentSettings => "development_settings.rb",
            GeneratedFile::StagingHeader => "staging_header.rb",
            GeneratedFile::ApplicationGenerators => "application_generators.rb",
            GeneratedFile::Credentials => "credentials.yml",
        }
    }

    fn source(self) -> &'static str {
        match self {
            GeneratedFile::MultiDatabaseConfig => {
                include_str!("../assets/generated/database_multi.yml.j2")
            }
            GeneratedFile::SimpleDatabaseConfig => {
                include_str!("../assets/generated/database_simple.yml.j2")
            }
            GeneratedFile::SeedsLoader => include_str!("../assets/generated/seeds.rb.j2"),
            GeneratedFile::EnvironmentSeed => {
                include_str!("../assets/generated/seed_environment.rb.j2")
            }
            GeneratedFile::ProcessManifest => include_str!("../assets/generated/Procfile.dev.j2"),
            GeneratedFile::ProductionSettings => {
                include_str!("../assets/generated/production_settings.rb.j2")
            }
            GeneratedFile::DevelopmentSettings => {
                include_str!("../assets/generated/development_settings.rb.j2")
            }
            GeneratedFile::StagingHeader => include_str!("../assets/generated/staging_header.rb.j2"),
            GeneratedFile::ApplicationGenerators => {
                include_str!("../assets/generated/application_generators.rb.j2")
            }
            GeneratedFile::Credentials => include_str!("../assets/generated/credentials.yml.j2"),
        }
    }
}

/// Render a generated file with the given context.
pub fn render(file: GeneratedFile, context: Value) -> Result<String, AppError> {
    let mut env = Engine::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    env.render_str(file.source(), context).map_err(|err| AppError::RenderError {
        template: file.name().to_string(),
        details: err.to_string(),
    })
}

/// Render a file that takes no variables.
pub fn render_static(file: GeneratedFile) -> Result<String, AppError> {
    render(file, minijinja::context! {})
}

pub fn multi_database_config(app: &AppName) -> Result<String, AppError> {
    render(
        GeneratedFile::MultiDatabaseConfig,
        minijinja::context! {
            db => app.database_prefix(),
            host => app.host_prefix(),
            auxiliary => AUXILIARY_DATABASES,
            deployed => [Environment::Staging.name(), Environment::Production.name()],
        },
    )
}

pub fn simple_database_config(app: &AppName) -> Result<String, AppError> {
    render(GeneratedFile::SimpleDatabaseConfig, minijinja::context! { db => app.database_prefix() })
}

pub fn environment_seed(env: Environment) -> Result<String, AppError> {
    render(
        GeneratedFile::EnvironmentSeed,
        minijinja::context! { env => env.name(), title => env.title() },
    )
}

pub fn credentials(secret: &str) -> Result<String, AppError> {
    render(GeneratedFile::Credentials, minijinja::context! { secret => secret })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppName {
        AppName::derive("ShopFront").unwrap()
    }

    #[test]
    fn simple_database_config_covers_three_environments() {
        let yaml = simple_database_config(&app()).unwrap();
        assert!(yaml.contains("database: shop_front_development\n"));
        assert!(yaml.contains("database: shop_front_test\n"));
        assert!(yaml.contains("database: shop_front_production\n"));
        assert!(yaml.contains("password: <%= ENV[\"DATABASE_PASSWORD\"] %>\n"));
        assert!(!yaml.contains("staging"));
    }

    #[test]
    fn multi_database_config_lists_auxiliary_databases_per_environment() {
        let yaml = multi_database_config(&app()).unwrap();
        for env in ["development", "staging", "production"] {
            for aux in AUXILIARY_DATABASES {
                assert!(
                    yaml.contains(&format!("database: shop_front_{}_{}\n", env, aux)),
                    "missing {} {}",
                    env,
                    aux
                );
            }
        }
        assert!(yaml.contains("host: shop-front-postgres\n"));
        assert!(yaml.contains("host: shop-front-postgres-trifecta\n"));
        assert!(yaml.contains("<<: *trifecta_production\n"));
        assert!(yaml.contains("\n\nstaging:\n"));
        assert!(yaml.contains("\n\nproduction:\n"));
        assert!(yaml.ends_with("migrations_paths: db/cable_migrate\n"));
    }

    #[test]
    fn multi_database_config_is_valid_yaml() {
        let yaml = multi_database_config(&app()).unwrap();
        let doc: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        for env in ["development", "test", "staging", "production"] {
            assert!(doc.get(env).is_some(), "missing {}", env);
        }
        let staging = doc.get("staging").unwrap();
        for key in ["primary", "trifecta", "cache", "queue", "cable"] {
            assert!(staging.get(key).is_some(), "staging missing {}", key);
        }
    }

    #[test]
    fn seeds_keep_ruby_interpolation_literal() {
        let loader = render_static(GeneratedFile::SeedsLoader).unwrap();
        assert!(loader.starts_with("puts \"Seeding #{Rails.env.downcase} environment\"\n"));
    }

    #[test]
    fn environment_seed_names_the_environment() {
        let seed = environment_seed(Environment::Staging).unwrap();
        assert_eq!(
            seed,
            "# Staging environment seeds\nputs \"Loading staging seeds...\"\n\n# Add your staging-specific seed data here\n"
        );
    }

    #[test]
    fn process_manifest_is_two_lines() {
        assert_eq!(
            render_static(GeneratedFile::ProcessManifest).unwrap(),
            "web: bin/rails s\nvite: bin/vite dev\n"
        );
    }

    #[test]
    fn credentials_payload_holds_secret() {
        assert_eq!(credentials("abc123").unwrap(), "secret_key_base: abc123\n");
    }
}
