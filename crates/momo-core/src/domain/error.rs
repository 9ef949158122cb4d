// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::member::MemberKind;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel through `MomoError`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid scope '{scope}': {reason}")]
    InvalidScope { scope: String, reason: String },

    #[error("Unknown package manager '{0}'")]
    UnknownPackageManager(String),

    #[error("Unknown flavor '{0}'")]
    UnknownFlavor(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Package name cannot be empty")]
    EmptyPackageName,

    #[error("Invalid project structure: {0}")]
    InvalidStructure(String),

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("{kind} '{name}' not found")]
    TargetNotFound { kind: MemberKind, name: String },

    // ========================================================================
    // Conflicts
    // ========================================================================
    #[error("Duplicate workspace member name '{name}' ({first} and {second})")]
    DuplicateMember {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("{kind} '{name}' already exists at {path}")]
    MemberExists {
        kind: MemberKind,
        name: String,
        path: PathBuf,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { .. } => vec![
                "Names must be valid npm package names".into(),
                "Use lowercase letters, digits, and - . _ ~".into(),
                "Examples: web, ui, @acme/utils".into(),
            ],
            Self::InvalidScope { .. } => vec![
                "A scope starts with '@' followed by a lowercase npm name".into(),
                "Example: @momo".into(),
            ],
            Self::UnknownPackageManager(_) => {
                vec!["Supported package managers: npm, yarn, pnpm, bun".into()]
            }
            Self::UnknownFlavor(_) => {
                vec!["Run 'momo list' to see available flavors".into()]
            }
            Self::TargetNotFound { kind, name } => vec![
                format!("No {kind} named '{name}' exists in this workspace"),
                format!(
                    "Check the directories under {}/ or the \"name\" in their package.json",
                    kind.root_dir()
                ),
                "Omit the flag to pick a target interactively".into(),
            ],
            Self::DuplicateMember { name, .. } => vec![
                format!("Two workspace members declare the name '{name}'"),
                "Rename one of them in its package.json".into(),
            ],
            Self::MemberExists { path, .. } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different name".into(),
            ],
            _ => vec!["See 'momo --help' for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TargetNotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidConfig(_) => ErrorCategory::Configuration,
            Self::DuplicateMember { .. } | Self::MemberExists { .. } => ErrorCategory::Conflict,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Conflict,
    Configuration,
}
