use crate::domain::AppError;

/// Line-oriented question/answer with a human operator.
pub trait Prompter {
    /// Ask a question and return the raw response (may be empty).
    fn ask(&self, prompt: &str) -> Result<String, AppError>;
}
