use std::io::{BufRead, ErrorKind, IsTerminal, Write};

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Terminal prompt backed by dialoguer; piped stdin is read line by line.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn ask(&self, prompt: &str) -> Result<String, AppError> {
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            return read_answer(prompt, &mut stdin.lock(), &mut std::io::stdout());
        }

        match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
            Ok(value) => Ok(value),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                Err(AppError::Prompt("interrupted".to_string()))
            }
            Err(err) => Err(AppError::Prompt(err.to_string())),
        }
    }
}

/// Echo the prompt and read one line. End of input reads as an empty answer.
fn read_answer(
    prompt: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<String, AppError> {
    write!(output, "{} ", prompt).and_then(|_| output.flush()).map_err(prompt_error)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(prompt_error)?;
    writeln!(output).map_err(prompt_error)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn prompt_error(err: std::io::Error) -> AppError {
    AppError::Prompt(err.to_string())
}
