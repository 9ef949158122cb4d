// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for momo.
//!
//! Pure data and decisions. No filesystem, no processes, no prompts; those
//! live behind the ports in `crate::application`.
//!
//! - **Members**: what a workspace is made of
//! - **Requests**: what the operator asked for and where it lands
//! - **Blueprints**: the files a new project or component starts with
//!
pub mod blueprint;
pub mod config;
pub mod error;
pub mod flavor;
pub mod member;
pub mod package_manager;
pub mod request;
pub mod structure;

mod validation;

pub use config::{CONFIG_FILE, MomoConfig};
pub use error::{DomainError, ErrorCategory};
pub use flavor::Flavor;
pub use member::{APPS_DIR, MANIFEST_FILE, MemberKind, PACKAGES_DIR, WorkspaceMember};
pub use package_manager::PackageManager;
pub use request::{
    CommandSpec, DependencyRequest, InstallTarget, TargetSelector, install_args,
};
pub use structure::{FileToWrite, FsEntry, ProjectStructure, to_pretty_json};
pub use validation::DomainValidator;
