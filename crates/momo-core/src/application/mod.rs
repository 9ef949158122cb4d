//! Application layer for momo.
//!
//! This layer contains:
//! - **Services**: use case orchestration (DependencyService, ScaffoldService, ...)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    CheckResult, ComponentOptions, ComponentPlan, CreateOptions, DependencyService,
    HealthReport, HealthService, InstallPlan, Placement, ProjectPlan, Resolution,
    ScaffoldService, TaskService, TurboTask, WorkspaceDiscovery,
};

pub use ports::{CommandRunner, Filesystem, Prompter};

pub use error::ApplicationError;
