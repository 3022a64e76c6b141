pub mod bundler_scaffold;
pub mod dialoguer_prompter;
pub mod filesystem;
pub mod process_runner;
pub mod stdout_console;
pub mod templates;

pub use bundler_scaffold::BundlerScaffold;
pub use dialoguer_prompter::DialoguerPrompter;
pub use filesystem::FilesystemStore;
pub use process_runner::ProcessCommandRunner;
pub use stdout_console::StdoutConsole;
pub use templates::TemplateSource;
