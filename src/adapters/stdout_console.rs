use crate::ports::{Console, Tone};

/// Prints status lines to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn say(&self, tone: Tone, message: &str) {
        match tone {
            Tone::Warning => println!("⚠️  {}", message),
            Tone::Error => println!("❌ {}", message),
            Tone::Plain | Tone::Heading | Tone::Success => println!("{}", message),
        }
    }
}
