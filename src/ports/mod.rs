mod command_runner;
mod console;
mod prompter;
mod repository_filesystem;
mod scaffold;
mod template_store;

pub use command_runner::{CommandOutput, CommandRunner, CommandSpec};
pub use console::{Console, Tone};
pub use prompter::Prompter;
pub use repository_filesystem::RepositoryFilesystem;
pub use scaffold::Scaffold;
pub use template_store::TemplateStore;
