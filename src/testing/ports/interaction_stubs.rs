//! Test doubles for `Prompter`, `Console` and `Scaffold`.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, GemDeclaration};
use crate::ports::{Console, Prompter, Scaffold, Tone};

/// Answers prompts from a queue; an exhausted queue answers with empty input.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPrompter {
    answers: Arc<Mutex<VecDeque<String>>>,
    asked: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Arc::new(Mutex::new(answers.iter().map(|a| a.to_string()).collect())),
            asked: Arc::default(),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, prompt: &str) -> Result<String, AppError> {
        self.asked.lock().unwrap().push(prompt.to_string());
        Ok(self.answers.lock().unwrap().pop_front().unwrap_or_default())
    }
}

/// Collects status lines.
#[derive(Clone, Debug, Default)]
pub struct CapturedConsole {
    lines: Arc<Mutex<Vec<(Tone, String)>>>,
}

impl CapturedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().iter().map(|(_, line)| line.clone()).collect()
    }

    pub fn lines_with(&self, tone: Tone) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| *t == tone)
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}

impl Console for CapturedConsole {
    fn say(&self, tone: Tone, message: &str) {
        self.lines.lock().unwrap().push((tone, message.to_string()));
    }
}

/// Records declared gems and install boundary firings.
#[derive(Clone, Debug, Default)]
pub struct FakeScaffold {
    declared: Arc<Mutex<Vec<GemDeclaration>>>,
    installs: Arc<Mutex<usize>>,
}

impl FakeScaffold {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declared_names(&self) -> Vec<&'static str> {
        self.declared.lock().unwrap().iter().map(|d| d.name).collect()
    }

    pub fn install_count(&self) -> usize {
        *self.installs.lock().unwrap()
    }
}

impl Scaffold for FakeScaffold {
    fn declare_dependencies(&self, declarations: &[GemDeclaration]) -> Result<(), AppError> {
        self.declared.lock().unwrap().extend_from_slice(declarations);
        Ok(())
    }

    fn complete_install(&self) -> Result<(), AppError> {
        *self.installs.lock().unwrap() += 1;
        Ok(())
    }
}
