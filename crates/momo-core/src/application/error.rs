//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::CONFIG_FILE;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The marker config file is missing.
    #[error("Not inside a momo project: no momo.config.json in {dir}")]
    NotAProjectRoot { dir: PathBuf },

    /// The operator cancelled an interactive prompt.
    #[error("Operation cancelled")]
    Cancelled,

    /// The package manager exited non-zero while adding a dependency.
    #[error("Failed to install {package}")]
    InstallerFailed { package: String, code: Option<i32> },

    /// Any other external command exited non-zero.
    #[error("Command `{command}` failed{}", exit_suffix(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// A command could not be started at all.
    #[error("Could not run `{command}`: {reason}")]
    SpawnFailed { command: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// A package manifest exists but is not a JSON object.
    #[error("Invalid manifest {path}: {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    /// The prompt backend failed (terminal I/O error).
    #[error("Prompt failed: {0}")]
    PromptFailed(String),

    /// A prompt was needed but no interactive terminal is available.
    #[error("Cannot ask \"{prompt}\": no interactive terminal")]
    PromptUnavailable { prompt: String },

    /// `create` was run from inside an existing project.
    #[error("Already inside a momo project at {root}")]
    AlreadyInsideProject { root: PathBuf },

    /// The target directory of `create` has content.
    #[error("Directory {path} is not empty")]
    DirectoryNotEmpty { path: PathBuf },
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => " (terminated by signal)".to_string(),
    }
}

impl ApplicationError {
    /// Shorthand for filesystem failures from any `Display` error.
    pub fn filesystem(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Filesystem {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotAProjectRoot { .. } => vec![
                format!("Run this command from the project root (the directory containing {CONFIG_FILE})"),
                "Create a project first with 'momo create <name>'".into(),
            ],
            Self::InstallerFailed { .. } => vec![
                "Check the package manager output above".into(),
                "Make sure the package name is correct and the registry is reachable".into(),
            ],
            Self::CommandFailed { .. } => vec!["Check the command output above".into()],
            Self::SpawnFailed { command, .. } => vec![
                format!("Make sure the program behind `{command}` is installed and on PATH"),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ManifestParse { path, .. } => vec![
                format!("Fix the JSON in {}", path.display()),
            ],
            Self::PromptUnavailable { .. } => vec![
                "Pass the value as a flag instead (see --help)".into(),
                "Run from an interactive terminal".into(),
            ],
            Self::AlreadyInsideProject { root } => vec![
                format!("Leave {} before creating a new project", root.display()),
                "Use 'momo add app' or 'momo add package' to extend this project".into(),
            ],
            Self::DirectoryNotEmpty { .. } => vec![
                "Use --force to scaffold into it anyway".into(),
                "Choose a different project name".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotAProjectRoot { .. }
            | Self::AlreadyInsideProject { .. }
            | Self::PromptUnavailable { .. } => ErrorCategory::Validation,
            Self::DirectoryNotEmpty { .. } => ErrorCategory::Conflict,
            Self::ManifestParse { .. } => ErrorCategory::Configuration,
            Self::Cancelled => ErrorCategory::Cancelled,
            Self::InstallerFailed { .. }
            | Self::CommandFailed { .. }
            | Self::SpawnFailed { .. } => ErrorCategory::External,
            Self::Filesystem { .. } | Self::PromptFailed(_) => ErrorCategory::Internal,
        }
    }
}
