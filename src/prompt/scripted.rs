//! Scripted prompt provider for driving interactive flows in tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::prompt::interface::{
    ConfirmationConfig, ConfirmationPrompter, SingleChoiceConfig, SingleChoicePrompter,
    TextPromptConfig, TextPrompter,
};

#[derive(Debug, Clone)]
pub enum Answer {
    Confirm(bool),
    Choice(usize),
    Text(String),
}

/// Replays answers in order and records every prompt it was shown.
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self { answers: RefCell::new(answers.into()), prompts: RefCell::new(Vec::new()) }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.borrow().is_empty()
    }

    fn next(&self, prompt: &str) -> Result<Answer> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answers.borrow_mut().pop_front().ok_or_else(|| {
            Error::Other(anyhow::anyhow!("No scripted answer for '{prompt}'"))
        })
    }
}

fn unexpected<T>(prompt: &str, answer: Answer) -> Result<T> {
    Err(Error::Other(anyhow::anyhow!("Unexpected answer {answer:?} for '{prompt}'")))
}

impl TextPrompter for ScriptedPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        match self.next(&config.prompt)? {
            Answer::Text(text) => Ok(text),
            other => unexpected(&config.prompt, other),
        }
    }
}

impl SingleChoicePrompter for ScriptedPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        match self.next(&config.prompt)? {
            Answer::Choice(index) if index < config.choices.len() => Ok(index),
            other => unexpected(&config.prompt, other),
        }
    }
}

impl ConfirmationPrompter for ScriptedPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        match self.next(&config.prompt)? {
            Answer::Confirm(value) => Ok(value),
            other => unexpected(&config.prompt, other),
        }
    }
}
