//! Turbo task forwarding and `momo clean`.

use std::path::PathBuf;

use tracing::instrument;

use momo_core::application::{TaskService, TurboTask};

use crate::{
    cli::{TaskArgs, TaskKind},
    error::CliResult,
    output::OutputManager,
};

/// `momo build|dev|lint|start|test|graph`: run `npx turbo <task>` from the
/// project root with the terminal attached.
#[instrument(skip_all, fields(task = ?kind))]
pub fn execute(kind: TaskKind, args: TaskArgs, cwd: PathBuf, output: OutputManager) -> CliResult<()> {
    let task = TurboTask::from(kind);
    let service = super::task_service();

    let root = service.project_root(&cwd)?;
    let command = TaskService::turbo_command(&root, task, args.filter.as_deref(), &args.args);
    output.step(&format!("Running {command}"))?;

    service.run_task(&cwd, task, args.filter.as_deref(), &args.args)?;
    Ok(())
}

/// `momo login|logout|link|unlink`: turbo's remote-cache account commands,
/// run interactively from the project root.
pub fn remote_cache(kind: TaskKind, cwd: PathBuf, output: OutputManager) -> CliResult<()> {
    execute(kind, TaskArgs::default(), cwd, output)
}

/// `momo clean`.
#[instrument(skip_all)]
pub fn clean(cwd: PathBuf, output: OutputManager) -> CliResult<()> {
    let service = super::task_service();

    let spinner = output.spinner("Removing node_modules, dist and .turbo...");
    let removed = service.clean(&cwd);
    spinner.finish_and_clear();
    let removed = removed?;

    for dir in &removed {
        output.step(&format!("Removed {}", dir.display()))?;
    }
    match removed.len() {
        0 => output.info("Nothing to clean.")?,
        n => output.success(&format!("Removed {n} director{}", if n == 1 { "y" } else { "ies" }))?,
    }
    Ok(())
}
