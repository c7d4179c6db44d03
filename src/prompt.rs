// Operator input. The deploy flow asks for at most three values (URL,
// username, password), one blocking question at a time. A trait seam keeps
// the orchestrator runnable against scripted answers in tests.

use anyhow::Result;
use dialoguer::{Input, Password};

pub trait Prompt {
    /// Ask one question and block for one line of input, trimmed.
    fn ask(&mut self, question: &str) -> Result<String>;

    /// Same, but without echoing the input back to the terminal.
    fn ask_hidden(&mut self, question: &str) -> Result<String>;
}

/// Terminal prompter built on `dialoguer`.
pub struct TermPrompt;

impl Prompt for TermPrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        let answer: String = Input::new().with_prompt(question).interact_text()?;
        Ok(answer.trim().to_string())
    }

    fn ask_hidden(&mut self, question: &str) -> Result<String> {
        let answer = Password::new().with_prompt(question).interact()?;
        Ok(answer.trim().to_string())
    }
}
