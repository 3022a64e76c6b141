//! Shared testing utilities for jumbo CLI tests.

use assert_cmd::Command;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Settings that replace every external tool with a harmless stand-in.
pub const STUB_SETTINGS: &str = r#"[commands]
rails = "echo"
bundle = "true"
bun = "true"
bunx = "true"
"#;

const APPLICATION_RB: &str = r#"require_relative "boot"

require "rails/all"

Bundler.require(*Rails.groups)

module ShopFront
  class Application < Rails::Application
    config.load_defaults 8.0
  end
end
"#;

const PRODUCTION_RB: &str = r#"require "active_support/core_ext/integer/time"

Rails.application.configure do
  config.enable_reloading = false
  config.eager_load = true
end
"#;

const DEVELOPMENT_RB: &str = r#"require "active_support/core_ext/integer/time"

Rails.application.configure do
  config.enable_reloading = true
end
"#;

/// Testing harness providing a freshly generated Rails skeleton.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a skeleton with stubbed external commands.
    pub fn new() -> Self {
        Self::with_settings(STUB_SETTINGS)
    }

    /// Create a skeleton with the given `.jumbo.toml` content.
    pub fn with_settings(settings: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("shop_front");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let ctx = Self { root, work_dir };
        ctx.write("Gemfile", "source \"https://rubygems.org\"\n\ngem \"rails\", \"~> 8.0\"\n");
        ctx.write("config/application.rb", APPLICATION_RB);
        ctx.write("config/environments/production.rb", PRODUCTION_RB);
        ctx.write("config/environments/development.rb", DEVELOPMENT_RB);
        ctx.write("config/database.yml", "default: {}\n");
        ctx.write("config/master.key", "0123456789abcdef\n");
        ctx.write("config/credentials.yml.enc", "encrypted\n");
        ctx.write(".kamal/secrets", "RAILS_MASTER_KEY=$(cat config/master.key)\n");
        ctx.write("package-lock.json", "{}\n");
        ctx.write("tsconfig.json", "{\n  \"files\": [],\n  \"references\": [{ \"path\": \"./tsconfig.app.json\" }]\n}\n");
        ctx.write(
            "tsconfig.app.json",
            "{\n  \"compilerOptions\": {\n    \"target\": \"ES2020\",\n\n    /* Bundler mode */\n    \"moduleResolution\": \"bundler\",\n\n    /* Linting */\n    \"strict\": true,\n  },\n  \"include\": [\"app/frontend\"]\n}\n",
        );
        ctx.write(".jumbo.toml", settings);
        ctx
    }

    /// Directory holding the Rails skeleton.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Scratch directory outside the project.
    pub fn outside_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `jumbo` binary in the project.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `jumbo` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("jumbo").expect("Failed to locate jumbo binary");
        cmd.current_dir(dir.as_ref())
            .env_remove("JUMBO_PROJECT_DIR")
            .env_remove("JUMBO_APP_NAME")
            .env_remove("JUMBO_TEMPLATE_ROOT")
            .env_remove("JUMBO_LOG");
        cmd
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Every file under the project with its content.
    pub fn snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        fn walk(base: &Path, dir: &Path, out: &mut BTreeMap<String, Vec<u8>>) {
            for entry in fs::read_dir(dir).expect("Failed to read directory") {
                let path = entry.expect("Failed to read entry").path();
                if path.is_dir() {
                    walk(base, &path, out);
                } else {
                    let rel = path.strip_prefix(base).unwrap().to_string_lossy().replace('\\', "/");
                    out.insert(rel, fs::read(&path).expect("Failed to read file"));
                }
            }
        }
        let mut out = BTreeMap::new();
        walk(&self.work_dir, &self.work_dir, &mut out);
        out
    }

    #[cfg(unix)]
    pub fn is_executable(&self, relative: &str) -> bool {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(self.path(relative)).map(|m| m.permissions().mode() & 0o111 != 0).unwrap_or(false)
    }
}
