//! Scaffold adapter: Gemfile declarations and `bundle install`.

use crate::domain::dependencies::merge_into_gemfile;
use crate::domain::{AppError, GemDeclaration};
use crate::ports::{CommandRunner, CommandSpec, RepositoryFilesystem, Scaffold};

const GEMFILE: &str = "Gemfile";

pub struct BundlerScaffold<'a, F: RepositoryFilesystem, C: CommandRunner> {
    fs: &'a F,
    runner: &'a C,
    bundle: String,
    run_install: bool,
}

impl<'a, F: RepositoryFilesystem, C: CommandRunner> BundlerScaffold<'a, F, C> {
    pub fn new(fs: &'a F, runner: &'a C, bundle: impl Into<String>, run_install: bool) -> Self {
        Self { fs, runner, bundle: bundle.into(), run_install }
    }
}

impl<F: RepositoryFilesystem, C: CommandRunner> Scaffold for BundlerScaffold<'_, F, C> {
    fn declare_dependencies(&self, declarations: &[GemDeclaration]) -> Result<(), AppError> {
        if declarations.is_empty() {
            return Ok(());
        }
        if !self.fs.file_exists(GEMFILE) {
            return Err(AppError::MissingFile(GEMFILE.to_string()));
        }

        let current = self.fs.read_file(GEMFILE)?;
        match merge_into_gemfile(&current, declarations) {
            Some(updated) => self.fs.write_file(GEMFILE, &updated),
            None => {
                tracing::debug!("Gemfile already declares every selected gem");
                Ok(())
            }
        }
    }

    fn complete_install(&self) -> Result<(), AppError> {
        if !self.run_install {
            tracing::debug!("bundle install disabled by settings");
            return Ok(());
        }
        self.runner.run(&CommandSpec::new(self.bundle.as_str()).arg("install")).map(|_| ())
    }
}
