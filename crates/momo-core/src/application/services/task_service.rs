//! Workspace-wide tasks: turbo forwarding and cache cleanup.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem},
        services::discovery::WorkspaceDiscovery,
    },
    domain::CommandSpec,
    error::MomoResult,
};

/// Directories `clean` removes wherever they appear.
pub const CLEAN_TARGETS: [&str; 3] = ["node_modules", "dist", ".turbo"];

/// Turbo pipelines and remote-cache commands momo exposes as top-level
/// commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurboTask {
    Build,
    Dev,
    Lint,
    Start,
    Test,
    Graph,
    Login,
    Logout,
    Link,
    Unlink,
}

impl TurboTask {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Dev => "dev",
            Self::Lint => "lint",
            Self::Start => "start",
            Self::Test => "test",
            Self::Graph => "graph",
            Self::Login => "login",
            Self::Logout => "logout",
            Self::Link => "link",
            Self::Unlink => "unlink",
        }
    }

    /// Remote-cache account commands, as opposed to pipelines.
    pub const fn is_remote_cache(&self) -> bool {
        matches!(self, Self::Login | Self::Logout | Self::Link | Self::Unlink)
    }
}

impl fmt::Display for TurboTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct TaskService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
}

impl TaskService {
    pub fn new(filesystem: Box<dyn Filesystem>, runner: Box<dyn CommandRunner>) -> Self {
        Self { filesystem, runner }
    }

    /// Project root containing `cwd`.
    pub fn project_root(&self, cwd: &Path) -> MomoResult<PathBuf> {
        WorkspaceDiscovery::new(self.filesystem.as_ref())
            .find_project_root(cwd)
            .ok_or_else(|| {
                ApplicationError::NotAProjectRoot {
                    dir: cwd.to_path_buf(),
                }
                .into()
            })
    }

    /// The command `run_task` would execute.
    pub fn turbo_command(
        root: &Path,
        task: TurboTask,
        filter: Option<&str>,
        extra: &[String],
    ) -> CommandSpec {
        let mut command = CommandSpec::new("npx", root).args(["turbo", task.as_str()]);
        // remote-cache commands act on the account, not on packages
        if let Some(filter) = filter.filter(|_| !task.is_remote_cache()) {
            command = command.args(["--filter", filter]);
        }
        command.args(extra.iter().cloned())
    }

    /// `npx turbo <task>` in the project root, stdio inherited.
    #[instrument(skip(self, extra), fields(cwd = %cwd.display()))]
    pub fn run_task(
        &self,
        cwd: &Path,
        task: TurboTask,
        filter: Option<&str>,
        extra: &[String],
    ) -> MomoResult<()> {
        let root = self.project_root(cwd)?;
        let command = Self::turbo_command(&root, task, filter, extra);
        info!(%command, "Running turbo");

        match self.runner.run(&command)? {
            Some(0) => Ok(()),
            code => Err(ApplicationError::CommandFailed {
                command: command.to_string(),
                code,
            }
            .into()),
        }
    }

    /// Remove build output and installed modules across the workspace.
    /// Returns the removed directories.
    #[instrument(skip(self), fields(cwd = %cwd.display()))]
    pub fn clean(&self, cwd: &Path) -> MomoResult<Vec<PathBuf>> {
        let root = self.project_root(cwd)?;
        let names: Vec<String> = CLEAN_TARGETS.iter().map(|s| s.to_string()).collect();

        let found = self.filesystem.find_dirs_named(&root, &names)?;
        for dir in &found {
            self.filesystem.remove_dir_all(dir)?;
        }
        info!(removed = found.len(), "Workspace cleaned");
        Ok(found)
    }
}
