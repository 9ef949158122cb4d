//! Real process execution using std::process.

use std::process::{Command, Stdio};

use momo_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::CommandSpec,
    error::MomoResult,
};
use tracing::{debug, instrument};

/// Runs commands on the host, blocking until they exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(spec: &CommandSpec) -> Command {
        let mut command = Command::new(program_name(&spec.program));
        command.args(&spec.args).current_dir(&spec.cwd);
        command
    }
}

impl CommandRunner for SystemCommandRunner {
    #[instrument(skip_all, fields(command = %spec, cwd = %spec.cwd.display()))]
    fn run(&self, spec: &CommandSpec) -> MomoResult<Option<i32>> {
        let status = Self::command(spec)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ApplicationError::SpawnFailed {
                command: spec.to_string(),
                reason: e.to_string(),
            })?;

        debug!(code = ?status.code(), "Process exited");
        Ok(status.code())
    }

    #[instrument(skip_all, fields(command = %spec))]
    fn output(&self, spec: &CommandSpec) -> MomoResult<String> {
        let output = Self::command(spec)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| ApplicationError::SpawnFailed {
                command: spec.to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ApplicationError::CommandFailed {
                command: spec.to_string(),
                code: output.status.code(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Node tooling ships as `.cmd` shims on Windows.
#[cfg(windows)]
fn program_name(program: &str) -> String {
    match program {
        "npm" | "npx" | "pnpm" | "yarn" => format!("{program}.cmd"),
        other => other.to_string(),
    }
}

#[cfg(not(windows))]
fn program_name(program: &str) -> String {
    program.to_string()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use momo_core::error::MomoError;

    #[test]
    fn output_captures_stdout() {
        let spec = CommandSpec::new("echo", ".").arg("9.1.0");
        let out = SystemCommandRunner::new().output(&spec).unwrap();
        assert_eq!(out.trim(), "9.1.0");
    }

    #[test]
    fn run_reports_exit_code() {
        let spec = CommandSpec::new("sh", ".").args(["-c", "exit 3"]);
        assert_eq!(SystemCommandRunner::new().run(&spec).unwrap(), Some(3));
    }

    #[test]
    fn missing_program_is_spawn_failure() {
        let spec = CommandSpec::new("definitely-not-a-real-binary-momo", ".");
        let err = SystemCommandRunner::new().run(&spec).unwrap_err();
        assert!(matches!(
            err,
            MomoError::Application(ApplicationError::SpawnFailed { .. })
        ));
    }
}
