use crate::domain::SelectionMap;
use crate::ports::{Console, Tone};

/// Closing report: installed groups, skipped groups.
pub fn report(console: &dyn Console, selection: &SelectionMap) {
    console.blank();
    console.say(Tone::Success, "Jumbo template successfully applied!");
    console.blank();

    if !selection.any_enabled() {
        console.say(Tone::Plain, "No feature groups selected. Basic Rails app created.");
        return;
    }

    console.say(Tone::Heading, "Feature groups installed:");
    for group in selection.enabled() {
        console.say(Tone::Plain, &format!("  • {}", group.summary));
    }

    let skipped: Vec<&str> = selection.disabled().map(|group| group.display_name).collect();
    if !skipped.is_empty() {
        console.blank();
        console.say(Tone::Warning, &format!("Skipped: {}", skipped.join(", ")));
    }
}
