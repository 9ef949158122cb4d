//! Implementation of `momo doctor`.

use std::path::PathBuf;

use tracing::instrument;

use momo_core::application::HealthReport;

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

/// Check the skeleton in the current directory. Always exits 0; problems
/// are reported, not raised.
#[instrument(skip_all, fields(cwd = %cwd.display()))]
pub fn execute(cwd: PathBuf, config: AppConfig, output: OutputManager) -> CliResult<()> {
    output.info("Checking project health...")?;

    let report = super::health_service().check(&cwd, config.settings.manager);
    print_report(&report, &output)?;

    if report.healthy() {
        output.success("Project is healthy! All required monorepo files are in place.")?;
    } else {
        output.warning("Some critical issues were found in your project setup.")?;
        output.info("Make sure you are in the root of your create-momo project.")?;
    }
    Ok(())
}

fn print_report(report: &HealthReport, output: &OutputManager) -> CliResult<()> {
    for check in &report.checks {
        let line = match (check.passed, check.required) {
            (true, _) => format!("\u{2714} {} found", check.name),
            (false, true) => format!("\u{2718} {} missing", check.name),
            (false, false) => format!("! {} not found (optional)", check.name),
        };
        output.step(&line)?;
    }
    Ok(())
}
