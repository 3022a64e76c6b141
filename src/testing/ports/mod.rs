mod command_runner_stub;
mod interaction_stubs;
mod template_store_stub;
mod test_files;
mod test_repository_fs;

pub use self::command_runner_stub::RecordingCommandRunner;
pub use self::interaction_stubs::{CapturedConsole, FakeScaffold, ScriptedPrompter};
pub use self::template_store_stub::FakeTemplateStore;
pub use self::test_files::TestFiles;
pub use self::test_repository_fs::MockRepositoryFs;
