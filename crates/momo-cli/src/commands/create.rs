//! Implementation of `momo create` / `create-momo`.

use std::path::PathBuf;

use clap::CommandFactory;
use tracing::{info, instrument};

use momo_adapters::LocalFilesystem;
use momo_core::{
    application::{CreateOptions, WorkspaceDiscovery},
    domain::{FsEntry, ProjectStructure},
};

use crate::{
    cli::{Cli, CreateArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// `momo` with no command: help inside a project, otherwise create one.
pub fn execute_default(cwd: PathBuf, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let filesystem = LocalFilesystem::new();
    if WorkspaceDiscovery::new(&filesystem).find_project_root(&cwd).is_some() {
        Cli::command().print_help()?;
        return Ok(());
    }
    execute(CreateArgs::default(), cwd, config, output)
}

/// Execute `momo create`.
///
/// 1. Settle name, scope and manager from flags or prompts
/// 2. Early-exit if `--dry-run`
/// 3. Write the skeleton (rolled back on failure)
/// 4. Print next steps
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("<prompt>")))]
pub fn execute(
    args: CreateArgs,
    cwd: PathBuf,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    output.header(&format!("create-momo v{}", env!("CARGO_PKG_VERSION")))?;

    let options = CreateOptions {
        name: args.name,
        scope: args.scope,
        manager: args.manager.map(Into::into),
        force: args.force,
        user_agent: std::env::var("npm_config_user_agent").ok(),
    };

    let service = super::scaffold_service();
    let plan = service.prepare_project(&cwd, &options, &config.settings, env!("CARGO_PKG_VERSION"))?;

    if args.dry_run {
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            plan.name,
            plan.root().display()
        ))?;
        output.info(&format!("  Scope:   {}", plan.scope))?;
        output.info(&format!("  Manager: {}@{}", plan.manager, plan.manager_version))?;
        print_structure(&plan.structure, &output)?;
        return Ok(());
    }

    let spinner = output.spinner("Creating project structure...");
    let written = service.write_project(&plan);
    spinner.finish_and_clear();
    written?;

    info!(project = %plan.name, root = %plan.root().display(), "Project created");
    output.success(&format!("Project {} created successfully!", output.accent(&plan.name)))?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        for step in plan.next_steps() {
            output.print(&format!("  {step}"))?;
        }
    }

    Ok(())
}

/// List what a plan would write, relative to its root.
pub(crate) fn print_structure(structure: &ProjectStructure, output: &OutputManager) -> CliResult<()> {
    for entry in structure.entries() {
        let path = entry.path();
        let line = match entry {
            FsEntry::Directory(_) => format!("  {}/", path.display()),
            FsEntry::File(_) => format!("  {}", path.display()),
        };
        output.step(&line)?;
    }
    Ok(())
}
