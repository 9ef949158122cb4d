//! Prompt adapters. The terminal prompter lives in the CLI crate.

mod scripted;

pub use scripted::{Answer, ScriptedPrompter};
