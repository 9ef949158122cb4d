//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "add a dependency" or "create a project".

pub mod dependency_service;
pub mod discovery;
pub mod health_service;
pub mod scaffold_service;
pub mod task_service;

pub use dependency_service::{DependencyService, InstallPlan, Placement, Resolution};
pub use discovery::WorkspaceDiscovery;
pub use health_service::{CheckResult, HealthReport, HealthService};
pub use scaffold_service::{
    ComponentOptions, ComponentPlan, CreateOptions, ProjectPlan, ScaffoldService,
};
pub use task_service::{TaskService, TurboTask};
