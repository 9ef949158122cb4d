//! Infrastructure adapters for momo.
//!
//! This crate implements the ports defined in `momo-core::application::ports`.
//! It contains the real I/O and the in-memory doubles used by tests.

pub mod filesystem;
pub mod process;
pub mod prompt;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{RecordingRunner, SystemCommandRunner};
pub use prompt::{Answer, ScriptedPrompter};
