use crate::app::config::CommandsConfig;
use crate::domain::{AppError, AppName};
use crate::ports::{CommandRunner, CommandSpec, Console, RepositoryFilesystem, TemplateStore, Tone};

/// Collaborators and project facts shared by every provisioning step.
pub struct ProvisionContext<'a> {
    fs: &'a dyn RepositoryFilesystem,
    templates: &'a dyn TemplateStore,
    runner: &'a dyn CommandRunner,
    console: &'a dyn Console,
    app_name: AppName,
    commands: CommandsConfig,
}

impl<'a> ProvisionContext<'a> {
    pub fn new(
        fs: &'a dyn RepositoryFilesystem,
        templates: &'a dyn TemplateStore,
        runner: &'a dyn CommandRunner,
        console: &'a dyn Console,
        app_name: AppName,
        commands: CommandsConfig,
    ) -> Self {
        Self { fs, templates, runner, console, app_name, commands }
    }

    pub fn fs(&self) -> &dyn RepositoryFilesystem {
        self.fs
    }

    pub fn templates(&self) -> &dyn TemplateStore {
        self.templates
    }

    pub fn runner(&self) -> &dyn CommandRunner {
        self.runner
    }

    pub fn console(&self) -> &dyn Console {
        self.console
    }

    pub fn app_name(&self) -> &AppName {
        &self.app_name
    }

    pub fn commands(&self) -> &CommandsConfig {
        &self.commands
    }

    pub fn say(&self, tone: Tone, message: &str) {
        self.console.say(tone, message);
    }

    /// `bin/rails <args>`
    pub fn rails(&self, args: &[&str]) -> CommandSpec {
        CommandSpec::new(self.commands.rails.as_str()).args(args.iter().copied())
    }

    pub fn run(&self, spec: CommandSpec) -> Result<String, AppError> {
        self.runner.run(&spec).map(|output| output.stdout)
    }

    /// Copy a template to the same project path, overwriting.
    pub fn copy_template(&self, path: &str) -> Result<(), AppError> {
        let content = self.templates.fetch(path)?;
        self.fs.write_file(path, &content)
    }

    /// Copy a template, replacing every occurrence of `token` with `value`.
    pub fn copy_template_with(&self, path: &str, token: &str, value: &str) -> Result<(), AppError> {
        let content = self.templates.fetch(path)?;
        self.fs.write_file(path, &crate::domain::edits::substitute_placeholder(&content, token, value))
    }

    /// Read a file a step cannot proceed without.
    pub fn read_required(&self, path: &str) -> Result<String, AppError> {
        if !self.fs.file_exists(path) {
            return Err(AppError::MissingFile(path.to_string()));
        }
        self.fs.read_file(path)
    }
}
