pub mod ports;

#[allow(unused_imports)]
pub use ports::CapturedConsole;
#[allow(unused_imports)]
pub use ports::FakeScaffold;
#[allow(unused_imports)]
pub use ports::FakeTemplateStore;
#[allow(unused_imports)]
pub use ports::MockRepositoryFs;
#[allow(unused_imports)]
pub use ports::RecordingCommandRunner;
#[allow(unused_imports)]
pub use ports::ScriptedPrompter;
#[allow(unused_imports)]
pub use ports::TestFiles;
