//! momo core - hexagonal architecture implementation
//!
//! Domain and application layers for the momo monorepo CLI.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            momo-cli (CLI)               │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (DependencyService, ScaffoldService...) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ (Filesystem, Prompter, CommandRunner)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     momo-adapters (Infrastructure)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use momo_core::prelude::*;
//! # fn demo(service: DependencyService) -> MomoResult<()> {
//! let request = DependencyRequest::new("zod")?.dev(true).root(true);
//! let plan = service.add_dependency(std::path::Path::new("."), &request, PackageManager::Pnpm)?;
//! println!("ran {}", plan.command);
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, DependencyService, HealthService, ScaffoldService, TaskService,
        WorkspaceDiscovery,
        ports::{CommandRunner, Filesystem, Prompter},
    };
    pub use crate::domain::{
        CommandSpec, DependencyRequest, DomainError, Flavor, InstallTarget, MemberKind,
        MomoConfig, PackageManager, WorkspaceMember,
    };
    pub use crate::error::{ErrorCategory, MomoError, MomoResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
