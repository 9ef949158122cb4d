//! Prompter that replays a fixed script of answers.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use momo_core::{
    application::{ApplicationError, ports::Prompter},
    error::{MomoError, MomoResult},
};

/// One scripted reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Select(usize),
    Input(String),
    Confirm(bool),
    /// The operator pressed Esc / Ctrl-C.
    Cancel,
}

/// Replays answers in order. Running out of answers behaves like a
/// non-interactive terminal.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: Arc<Mutex<VecDeque<Answer>>>,
    asked: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: Arc::new(Mutex::new(answers.into_iter().collect())),
            asked: Arc::default(),
        }
    }

    /// Prompts shown so far.
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().map(|a| a.clone()).unwrap_or_default()
    }

    fn next(&self, prompt: &str) -> MomoResult<Answer> {
        if let Ok(mut asked) = self.asked.lock() {
            asked.push(prompt.to_string());
        }
        self.answers
            .lock()
            .map_err(|_| MomoError::Internal {
                message: "prompt script lock poisoned".into(),
            })?
            .pop_front()
            .ok_or_else(|| {
                ApplicationError::PromptUnavailable {
                    prompt: prompt.to_string(),
                }
                .into()
            })
    }
}

fn mismatch(prompt: &str, answer: &Answer) -> MomoError {
    MomoError::Internal {
        message: format!("scripted answer {answer:?} does not fit prompt \"{prompt}\""),
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, prompt: &str, items: &[String], _default: usize) -> MomoResult<Option<usize>> {
        match self.next(prompt)? {
            Answer::Select(i) if i < items.len() => Ok(Some(i)),
            Answer::Cancel => Ok(None),
            other => Err(mismatch(prompt, &other)),
        }
    }

    fn input(&self, prompt: &str, default: &str) -> MomoResult<Option<String>> {
        match self.next(prompt)? {
            Answer::Input(text) if text.is_empty() => Ok(Some(default.to_string())),
            Answer::Input(text) => Ok(Some(text)),
            Answer::Cancel => Ok(None),
            other => Err(mismatch(prompt, &other)),
        }
    }

    fn confirm(&self, prompt: &str, _default: bool) -> MomoResult<Option<bool>> {
        match self.next(prompt)? {
            Answer::Confirm(yes) => Ok(Some(yes)),
            Answer::Cancel => Ok(None),
            other => Err(mismatch(prompt, &other)),
        }
    }
}
