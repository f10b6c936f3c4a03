//! Interactive prompt provider
//!
//! Output-path resolution asks the user yes/no and free-text questions, each
//! with a default. The questions go through the [`Prompter`] trait so the
//! resolver can be driven by canned answers in tests and by `--yes` runs.

use std::collections::VecDeque;
use std::sync::Mutex;

use dialoguer::{Confirm, Input};
use is_terminal::IsTerminal;

use crate::error::DocbenchResult;

/// Source of interactive answers.
pub trait Prompter {
    /// Ask a yes/no question. `default` is used when the user just hits enter.
    fn confirm(&self, message: &str, default: bool) -> DocbenchResult<bool>;

    /// Ask for a line of text. `default` is used when the user just hits enter.
    fn input(&self, message: &str, default: &str) -> DocbenchResult<String>;
}

/// Terminal prompter backed by `dialoguer`.
///
/// When stdin is not a terminal (piped input, CI), prompting would either
/// block or fail, so every question resolves to its default instead.
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn confirm(&self, message: &str, default: bool) -> DocbenchResult<bool> {
        if !std::io::stdin().is_terminal() {
            return Ok(default);
        }
        Ok(Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()?)
    }

    fn input(&self, message: &str, default: &str) -> DocbenchResult<String> {
        if !std::io::stdin().is_terminal() {
            return Ok(default.to_string());
        }
        Ok(Input::<String>::new()
            .with_prompt(message)
            .default(default.to_string())
            .interact_text()?)
    }
}

/// Prompter that replays queued answers, falling back to the default when the
/// queue is empty.
///
/// An empty scripted prompter therefore answers every question with its
/// default, which is exactly the behavior of the `--yes` flag.
#[derive(Default)]
pub struct ScriptedPrompter {
    confirms: Mutex<VecDeque<bool>>,
    inputs: Mutex<VecDeque<String>>,
}

impl ScriptedPrompter {
    /// A prompter with no queued answers: every question gets its default.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Queue an answer for the next unanswered yes/no question.
    pub fn with_confirm(self, answer: bool) -> Self {
        self.confirms.lock().unwrap().push_back(answer);
        self
    }

    /// Queue an answer for the next unanswered text question.
    pub fn with_input(self, answer: &str) -> Self {
        self.inputs.lock().unwrap().push_back(answer.to_string());
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, _message: &str, default: bool) -> DocbenchResult<bool> {
        Ok(self.confirms.lock().unwrap().pop_front().unwrap_or(default))
    }

    fn input(&self, _message: &str, default: &str) -> DocbenchResult<String> {
        Ok(self
            .inputs
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| default.to_string()))
    }
}
