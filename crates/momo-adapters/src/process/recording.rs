//! Command runner that records instead of executing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use momo_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::CommandSpec,
    error::MomoResult,
};

/// Records every command and answers with canned results.
///
/// Clones share the log.
#[derive(Debug, Clone)]
pub struct RecordingRunner {
    log: Arc<Mutex<Vec<CommandSpec>>>,
    exit_code: Option<i32>,
    outputs: HashMap<String, String>,
}

impl Default for RecordingRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingRunner {
    /// Every command "succeeds" with exit code 0.
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
            exit_code: Some(0),
            outputs: HashMap::new(),
        }
    }

    /// Make `run` report this exit code.
    pub fn with_exit_code(mut self, code: Option<i32>) -> Self {
        self.exit_code = code;
        self
    }

    /// Stdout returned by `output` for `program`. Programs without an entry
    /// fail as if they were not installed.
    pub fn with_output(mut self, program: impl Into<String>, stdout: impl Into<String>) -> Self {
        self.outputs.insert(program.into(), stdout.into());
        self
    }

    /// Commands seen so far, in order.
    pub fn commands(&self) -> Vec<CommandSpec> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    fn record(&self, command: &CommandSpec) {
        if let Ok(mut log) = self.log.lock() {
            log.push(command.clone());
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> MomoResult<Option<i32>> {
        self.record(command);
        Ok(self.exit_code)
    }

    fn output(&self, command: &CommandSpec) -> MomoResult<String> {
        self.record(command);
        self.outputs.get(&command.program).cloned().ok_or_else(|| {
            ApplicationError::SpawnFailed {
                command: command.to_string(),
                reason: "not installed".into(),
            }
            .into()
        })
    }
}
