//! Implementation of `momo add dep` (also `momo dep` / `momo get`).

use std::path::PathBuf;

use tracing::{debug, instrument};

use momo_core::{
    application::Placement,
    domain::DependencyRequest,
    error::MomoError,
};

use crate::{
    cli::DepArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Install one dependency.
///
/// The target is settled before anything runs, so a bad `--app` / `--pkg`
/// or a cancelled picker leaves the workspace untouched.
#[instrument(skip_all, fields(package = %args.package))]
pub fn execute(
    args: DepArgs,
    cwd: PathBuf,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = build_request(args)?;
    let manager = config.settings.manager;

    let service = super::dependency_service();
    let root = service.ensure_project_root(&cwd)?;
    let plan = service.plan(&root, &request, manager)?;
    debug!(placement = ?plan.placement, internal = plan.internal, "Install planned");

    if plan.placement == Placement::NoMembers {
        output.warning("No apps or packages found. Installing to workspace root.")?;
    }
    if plan.internal {
        output.info(&format!(
            "{} is a workspace package, linking it with workspace:*",
            output.accent(&plan.package)
        ))?;
    }
    output.step(&format!("Running {}", plan.command))?;

    service.install(&plan)?;

    output.success(&format!(
        "Installed {} in {}",
        output.accent(&plan.package),
        plan.target
    ))?;
    Ok(())
}

/// Flags to request, validated once here.
fn build_request(args: DepArgs) -> CliResult<DependencyRequest> {
    let request = DependencyRequest::new(args.package)
        .map_err(MomoError::from)?
        .dev(args.dev)
        .app(args.app)
        .library(args.pkg)
        .root(args.root);
    Ok(request)
}
