//! Application ports (traits) for external dependencies.
//!
//! - **Driven (Output) Ports**: called by application, implemented by infrastructure
//!   - `Filesystem`: directory listing, manifest reads, file writes
//!   - `Prompter`: interactive questions with an explicit cancel result
//!   - `CommandRunner`: package manager and turbo invocations
//!
//! - **Driving (Input) Ports**: the service methods themselves, called by the CLI

pub mod output;

pub use output::{CommandRunner, Filesystem, Prompter};

#[cfg(test)]
pub use output::{MockCommandRunner, MockFilesystem, MockPrompter};
