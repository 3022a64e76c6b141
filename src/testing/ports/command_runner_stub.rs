//! Recording test double for `CommandRunner`.

use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner, CommandSpec};

#[derive(Debug, Default)]
struct RunnerState {
    calls: Vec<CommandSpec>,
    responses: Vec<(String, String)>,
    failures: Vec<String>,
}

/// Records every command; answers captured commands from a prefix table.
#[derive(Clone, Debug, Default)]
pub struct RecordingCommandRunner {
    state: Arc<Mutex<RunnerState>>,
}

impl RecordingCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply with `stdout` to commands whose display line starts with `prefix`.
    pub fn respond(self, prefix: &str, stdout: &str) -> Self {
        self.state.lock().unwrap().responses.push((prefix.to_string(), stdout.to_string()));
        self
    }

    /// Fail commands whose display line starts with `prefix`.
    pub fn fail_on(self, prefix: &str) -> Self {
        self.state.lock().unwrap().failures.push(prefix.to_string());
        self
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(CommandSpec::display).collect()
    }
}

impl CommandRunner for RecordingCommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, AppError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(spec.clone());
        let line = spec.display();

        if state.failures.iter().any(|prefix| line.starts_with(prefix.as_str())) {
            return Err(AppError::CommandFailed {
                command: line,
                status: "status 1".to_string(),
                details: "scripted failure".to_string(),
            });
        }

        let stdout = state
            .responses
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix.as_str()))
            .map(|(_, stdout)| stdout.clone())
            .unwrap_or_default();
        Ok(CommandOutput { stdout })
    }
}
