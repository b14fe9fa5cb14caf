use std::collections::VecDeque;

use crate::domain::{AppError, ConflictChoice};
use crate::ports::ConflictResolver;

/// Answers conflict prompts from a fixed script and remembers what was asked.
#[derive(Default)]
pub struct ScriptedResolver {
    answers: VecDeque<ConflictChoice>,
    pub asked: Vec<String>,
}

impl ScriptedResolver {
    pub fn new(answers: impl IntoIterator<Item = ConflictChoice>) -> Self {
        Self { answers: answers.into_iter().collect(), asked: Vec::new() }
    }
}

impl ConflictResolver for ScriptedResolver {
    fn resolve(&mut self, display_path: &str) -> Result<ConflictChoice, AppError> {
        self.asked.push(display_path.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| AppError::Prompt(format!("unexpected conflict prompt for {}", display_path)))
    }
}
