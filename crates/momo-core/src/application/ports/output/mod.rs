//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `momo-adapters` crate provides implementations; the CLI provides the
//! terminal prompter.

use std::path::{Path, PathBuf};

use crate::domain::CommandSpec;
use crate::error::MomoResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `momo_adapters::filesystem::LocalFilesystem` (production)
/// - `momo_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Immediate subdirectories of `path`, in no particular order.
    ///
    /// A missing `path` yields an empty list.
    fn list_dirs(&self, path: &Path) -> MomoResult<Vec<PathBuf>>;

    /// Names of every entry (files and directories) directly under `path`.
    fn list_entries(&self, path: &Path) -> MomoResult<Vec<String>>;

    fn read_to_string(&self, path: &Path) -> MomoResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> MomoResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> MomoResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> MomoResult<()>;

    /// Every directory under `root` whose name is in `names`.
    ///
    /// Matched directories are not descended into.
    fn find_dirs_named(&self, root: &Path, names: &[String]) -> MomoResult<Vec<PathBuf>>;
}

/// Port for asking the operator.
///
/// Every method returns `Ok(None)` when the operator cancels.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Single choice among `items`; returns the chosen index.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> MomoResult<Option<usize>>;

    /// Free text, pre-filled with `default` when it is not empty.
    fn input(&self, prompt: &str, default: &str) -> MomoResult<Option<String>>;

    fn confirm(&self, prompt: &str, default: bool) -> MomoResult<Option<bool>>;
}

/// Port for running external programs.
///
/// Implemented by:
/// - `momo_adapters::process::SystemCommandRunner` (production)
/// - `momo_adapters::process::RecordingRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Run with inherited stdio and wait. Returns the exit code, `None` when
    /// the process was killed by a signal.
    fn run(&self, command: &CommandSpec) -> MomoResult<Option<i32>>;

    /// Run with captured stdout. Non-zero exit is an error.
    fn output(&self, command: &CommandSpec) -> MomoResult<String>;
}
