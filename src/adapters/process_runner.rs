//! `CommandRunner` backed by `std::process::Command`.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner, CommandSpec};

/// Runs commands with the project directory as working directory.
#[derive(Debug, Clone)]
pub struct ProcessCommandRunner {
    root: PathBuf,
}

impl ProcessCommandRunner {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Project-relative programs (`bin/rails`) resolve against the root.
    fn program_path(&self, program: &str) -> PathBuf {
        let path = Path::new(program);
        if path.is_relative() && path.components().count() > 1 {
            self.root.join(path)
        } else {
            path.to_path_buf()
        }
    }
}

fn describe_status(status: &ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, AppError> {
        let mut command = Command::new(self.program_path(&spec.program));
        command.args(&spec.args);
        command.current_dir(&self.root);
        for (key, value) in &spec.env {
            command.env(key, value);
        }

        tracing::info!(command = %spec.display(), capture = spec.capture, "running external command");

        if spec.capture {
            command.stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped());
            let output = command.output().map_err(|e| AppError::CommandSpawn {
                command: spec.display(),
                details: e.to_string(),
            })?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                return Err(AppError::CommandFailed {
                    command: spec.display(),
                    status: describe_status(&output.status),
                    details: if stderr.is_empty() { "no error output".to_string() } else { stderr },
                });
            }

            return Ok(CommandOutput { stdout: String::from_utf8_lossy(&output.stdout).to_string() });
        }

        let status = command.status().map_err(|e| AppError::CommandSpawn {
            command: spec.display(),
            details: e.to_string(),
        })?;

        if !status.success() {
            return Err(AppError::CommandFailed {
                command: spec.display(),
                status: describe_status(&status),
                details: "see output above".to_string(),
            });
        }

        Ok(CommandOutput::default())
    }
}
