/// Visual weight of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Success,
    Warning,
    Error,
}

/// Operator-facing status output.
pub trait Console {
    fn say(&self, tone: Tone, message: &str);

    fn blank(&self) {
        self.say(Tone::Plain, "");
    }
}
