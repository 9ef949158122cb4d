//! Command handlers.
//!
//! Each handler translates CLI arguments into a core request, runs the core
//! service with real adapters and reports the result. No business logic
//! lives here.

use momo_adapters::{LocalFilesystem, SystemCommandRunner};
use momo_core::application::{DependencyService, HealthService, ScaffoldService, TaskService};

use crate::prompt::terminal_prompter;

pub mod add;
pub mod completions;
pub mod config;
pub mod create;
pub mod dep;
pub mod doctor;
pub mod list;
pub mod task;

fn scaffold_service() -> ScaffoldService {
    ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        terminal_prompter(),
        Box::new(SystemCommandRunner::new()),
    )
}

fn dependency_service() -> DependencyService {
    DependencyService::new(
        Box::new(LocalFilesystem::new()),
        terminal_prompter(),
        Box::new(SystemCommandRunner::new()),
    )
}

fn task_service() -> TaskService {
    TaskService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemCommandRunner::new()),
    )
}

fn health_service() -> HealthService {
    HealthService::new(Box::new(LocalFilesystem::new()))
}
