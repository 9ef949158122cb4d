//! Implementation of `momo add app` and `momo add package`.

use std::path::PathBuf;

use tracing::instrument;

use momo_adapters::LocalFilesystem;
use momo_core::{
    application::{ApplicationError, ComponentOptions, WorkspaceDiscovery},
    domain::MemberKind,
    error::MomoError,
};

use crate::{
    cli::ComponentArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Bare `momo add`: ask what to add, then continue as `add app` or
/// `add package` with every answer prompted.
pub fn execute_prompted(cwd: PathBuf, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // no point asking before we know there is a project to add to
    let filesystem = LocalFilesystem::new();
    if WorkspaceDiscovery::new(&filesystem).find_project_root(&cwd).is_none() {
        return Err(MomoError::from(ApplicationError::NotAProjectRoot { dir: cwd }).into());
    }

    let kind = super::scaffold_service().ask_component_kind()?;
    execute(kind, ComponentArgs::default(), cwd, config, output)
}

pub fn execute_app(
    args: ComponentArgs,
    cwd: PathBuf,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    execute(MemberKind::App, args, cwd, config, output)
}

pub fn execute_package(
    args: ComponentArgs,
    cwd: PathBuf,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    execute(MemberKind::Library, args, cwd, config, output)
}

#[instrument(skip_all, fields(kind = %kind))]
fn execute(
    kind: MemberKind,
    args: ComponentArgs,
    cwd: PathBuf,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let options = ComponentOptions {
        name: args.name,
        flavor: args.flavor.map(Into::into),
    };

    let service = super::scaffold_service();
    let plan = service.prepare_component(&cwd, kind, &options, &config.settings)?;

    if args.dry_run {
        output.info(&format!(
            "Dry run: would add {kind} '{}' ({}) at {}",
            plan.name,
            plan.flavor,
            plan.path.display()
        ))?;
        super::create::print_structure(&plan.structure, &output)?;
        return Ok(());
    }

    let spinner = output.spinner(&format!("Adding {kind} {}...", plan.name));
    let written = service.write_component(&plan);
    spinner.finish_and_clear();
    written?;

    if let Some(flavor) = plan.added_preset {
        output.step(&format!("Added {} preset to packages/config-typescript", flavor.label()))?;
    }
    output.success(&format!(
        "Added {kind} {} in {}",
        output.accent(&plan.name),
        plan.path.display()
    ))?;
    output.info(&format!(
        "Run '{} install' to link it into the workspace.",
        config.settings.manager
    ))?;

    Ok(())
}
