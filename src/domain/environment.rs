/// Rails environment a generated file targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 4] =
        [Environment::Development, Environment::Test, Environment::Staging, Environment::Production];

    /// Environments that receive encrypted credentials.
    pub const DEPLOYED: [Environment; 3] =
        [Environment::Development, Environment::Staging, Environment::Production];

    pub fn name(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Environment::Development => "Development",
            Environment::Test => "Test",
            Environment::Staging => "Staging",
            Environment::Production => "Production",
        }
    }

    pub fn credentials_key_path(self) -> String {
        format!("config/credentials/{}.key", self.name())
    }

    pub fn credentials_file_path(self) -> String {
        format!("config/credentials/{}.yml.enc", self.name())
    }

    pub fn seed_path(self) -> String {
        format!("db/seeds/{}.rb", self.name())
    }

    pub fn settings_path(self) -> String {
        format!("config/environments/{}.rb", self.name())
    }
}
