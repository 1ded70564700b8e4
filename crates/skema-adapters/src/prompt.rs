//! Scripted prompter for tests and non-interactive drivers.

use std::sync::Mutex;

use skema_core::{
    application::{ApplicationError, ports::Prompter},
    error::SkemaResult,
};

/// A prompter that replays canned answers in order and records every
/// question it was asked, so tests can assert on prompt ordering and copy.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: Mutex<Vec<String>>,
    questions: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    /// Answers are consumed front to back; running out of answers is a
    /// `PromptFailed`, mirroring an interrupted interactive session.
    pub fn with_answers<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        let mut answers: Vec<String> = answers.into_iter().map(Into::into).collect();
        answers.reverse();
        Self {
            answers: Mutex::new(answers),
            questions: Mutex::new(Vec::new()),
        }
    }

    /// Every question asked so far, in order.
    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }

    fn pop(&self) -> SkemaResult<String> {
        self.answers.lock().unwrap().pop().ok_or_else(|| {
            ApplicationError::PromptFailed {
                reason: "scripted prompter ran out of answers".into(),
            }
            .into()
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn select_schematic(&self, kinds: &[&'static str]) -> SkemaResult<String> {
        self.questions
            .lock()
            .unwrap()
            .push(format!("select schematic [{}]", kinds.join(", ")));
        self.pop()
    }

    fn input_name(&self, message: &str) -> SkemaResult<String> {
        self.questions.lock().unwrap().push(message.to_string());
        self.pop()
    }
}
