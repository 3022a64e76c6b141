use std::cell::RefCell;
use std::collections::VecDeque;

use jumbo::ports::{Console, Prompter, Tone};
use jumbo::{AppError, Mode, Overrides, Step, apply_with};

mod common;

use common::TestContext;

struct Answers(RefCell<VecDeque<&'static str>>);

impl Prompter for Answers {
    fn ask(&self, _prompt: &str) -> Result<String, AppError> {
        Ok(self.0.borrow_mut().pop_front().unwrap_or("").to_string())
    }
}

#[derive(Default)]
struct Lines(RefCell<Vec<String>>);

impl Console for Lines {
    fn say(&self, _tone: Tone, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

#[test]
fn interactive_declines_reach_the_minimal_plan() {
    let ctx = TestContext::new();
    let answers = Answers(RefCell::new(VecDeque::from(["n", "n", "n", "n", "n"])));
    let lines = Lines::default();

    let outcome = apply_with(
        ctx.work_dir(),
        &["--interactive".to_string(), "--skip-auth".to_string()],
        Overrides::default(),
        &answers,
        &lines,
    )
    .unwrap();

    assert_eq!(outcome.mode, Mode::Interactive);
    assert!(!outcome.selection.any_enabled());
    assert_eq!(outcome.steps, vec![Step::WriteSimpleDatabaseConfig, Step::ConfigureApplication]);
    assert!(lines.0.borrow().iter().any(|l| l == "No feature groups selected. Basic Rails app created."));
}

#[test]
fn interactive_defaults_accept_everything() {
    let ctx = TestContext::new();
    let answers = Answers(RefCell::new(VecDeque::new()));

    let outcome = apply_with(
        ctx.work_dir(),
        &["-i".to_string()],
        Overrides::default(),
        &answers,
        &Lines::default(),
    )
    .unwrap();

    assert!(outcome.selection.enabled().count() == 5);
    assert_eq!(outcome.steps.last(), Some(&Step::ConfigureApplication));
    assert!(outcome.steps.contains(&Step::WriteMultiDatabaseConfig));
}

#[test]
fn help_returns_without_steps() {
    let ctx = TestContext::new();
    let outcome = apply_with(
        ctx.work_dir(),
        &["--help".to_string()],
        Overrides::default(),
        &Answers(RefCell::new(VecDeque::new())),
        &Lines::default(),
    )
    .unwrap();
    assert_eq!(outcome.mode, Mode::Help);
    assert!(outcome.steps.is_empty());
    assert!(!ctx.exists("Procfile.dev"));
}

#[test]
fn missing_project_directory_is_an_error() {
    let ctx = TestContext::new();
    let err = apply_with(
        &ctx.outside_dir().join("nope"),
        &[],
        Overrides::default(),
        &Answers(RefCell::new(VecDeque::new())),
        &Lines::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("Project directory not found"));
}
