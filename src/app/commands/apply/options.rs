//! Option Resolver: raw template arguments to a feature selection.

use crate::domain::{AppError, CATALOG, FeatureGroup, SelectionMap};
use crate::ports::{Console, Prompter, Tone};

const HELP_FLAGS: [&str; 2] = ["-h", "--help"];
const INTERACTIVE_FLAGS: [&str; 2] = ["-i", "--interactive"];

/// Column width of the flag column in the help listing.
const FLAG_COLUMN: usize = 22;

/// How the selection was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Help was printed; nothing further should run.
    Help,
    Interactive,
    Flags,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub mode: Mode,
    pub selection: SelectionMap,
}

impl Resolution {
    pub fn should_provision(&self) -> bool {
        self.mode != Mode::Help
    }
}

/// Decide the selection from `args`.
///
/// Help wins over interactive, which wins over disable flags. Unrecognised
/// arguments are ignored.
pub fn resolve(
    args: &[String],
    prompter: &dyn Prompter,
    console: &dyn Console,
) -> Result<Resolution, AppError> {
    let present = |flags: &[&str]| args.iter().any(|arg| flags.contains(&arg.as_str()));

    if present(&HELP_FLAGS) {
        print_help(console);
        return Ok(Resolution { mode: Mode::Help, selection: SelectionMap::all(false) });
    }

    if present(&INTERACTIVE_FLAGS) {
        let selection = prompt_selection(prompter, console)?;
        return Ok(Resolution { mode: Mode::Interactive, selection });
    }

    let selection = selection_from_flags(args);
    print_flag_selection(console, &selection);
    Ok(Resolution { mode: Mode::Flags, selection })
}

/// Each group is enabled unless its disable flag appears verbatim.
pub fn selection_from_flags(args: &[String]) -> SelectionMap {
    SelectionMap::from_fn(|group| !args.iter().any(|arg| arg == group.disable_flag))
}

/// Empty input and anything starting with `y`/`Y` count as yes.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.is_empty() || answer.starts_with(['y', 'Y'])
}

fn prompt_selection(prompter: &dyn Prompter, console: &dyn Console) -> Result<SelectionMap, AppError> {
    console.say(Tone::Heading, "=== Select Feature Groups ===");
    console.say(Tone::Plain, "Choose which features to include in your app (press Enter to accept):");
    console.blank();

    let mut failure = None;
    let selection = SelectionMap::from_fn(|group| {
        if failure.is_some() {
            return false;
        }
        match prompter.ask(&prompt_text(group)) {
            Ok(answer) => is_affirmative(&answer),
            Err(err) => {
                failure = Some(err);
                false
            }
        }
    });

    match failure {
        Some(err) => Err(err),
        None => Ok(selection),
    }
}

fn prompt_text(group: &FeatureGroup) -> String {
    format!("Include {}? ({}) [Y/n]", group.display_name, group.description)
}

fn print_help(console: &dyn Console) {
    console.say(Tone::Heading, "=== Jumbo Template Options ===");
    console.blank();
    console.say(
        Tone::Plain,
        &format!("  {:<width$}Interactive mode - choose features", "-i, --interactive", width = FLAG_COLUMN),
    );
    for group in &CATALOG {
        console.say(
            Tone::Plain,
            &format!("  {:<width$}Skip {}", group.disable_flag, group.display_name, width = FLAG_COLUMN),
        );
    }
    console.say(Tone::Plain, &format!("  {:<width$}Show this help", "-h, --help", width = FLAG_COLUMN));
    console.blank();
    console.say(Tone::Heading, "Feature groups:");
    for group in &CATALOG {
        console.say(Tone::Plain, &format!("  {}: {}", group.display_name, group.description));
    }
    console.blank();
    console.say(Tone::Heading, "Examples:");
    console.say(Tone::Plain, "  jumbo                                  # Install all features");
    console.say(Tone::Plain, "  jumbo -- --interactive                 # Choose features interactively");
    console.say(Tone::Plain, "  jumbo -- --skip-inertia --skip-auth    # Skip specific features");
}

fn print_flag_selection(console: &dyn Console, selection: &SelectionMap) {
    let skipped: Vec<&str> = selection.disabled().map(|group| group.display_name).collect();
    if skipped.is_empty() {
        console.say(Tone::Heading, "=== Installing all features ===");
    } else {
        console.say(
            Tone::Heading,
            &format!("=== Installing features (skipping: {}) ===", skipped.join(", ")),
        );
    }

    for group in &CATALOG {
        if selection.is_enabled(group.feature) {
            console.say(Tone::Success, &format!("✓ {}", group.display_name));
        } else {
            console.say(Tone::Warning, &format!("✗ {}", group.display_name));
        }
    }
    console.blank();
}
