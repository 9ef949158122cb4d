//! Dependency Service - decides where a package goes and installs it there.
//!
//! Flow for one request:
//! 1. Guard: the working directory must be a project root
//! 2. Resolve the install target (flags first, then the picker)
//! 3. Classify the package as internal or external
//! 4. Build and run one package-manager command

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem, Prompter},
        services::discovery::{WorkspaceDiscovery, is_internal, lookup},
    },
    domain::{
        CONFIG_FILE, CommandSpec, DependencyRequest, DomainError, InstallTarget, PackageManager,
        TargetSelector, WorkspaceMember, install_args,
    },
    error::{MomoError, MomoResult},
};

/// Label of the synthetic picker entry that means "workspace root".
pub const ROOT_CHOICE: &str = "Workspace Root (shared dev dependencies)";

/// How the target was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// `--root` was given.
    Forced,
    /// `--app` or `--pkg` named the member.
    Explicit,
    /// The operator picked it.
    Chosen,
    /// Nothing to pick from, so the root it is.
    NoMembers,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub target: InstallTarget,
    pub placement: Placement,
}

/// Everything decided for one request, ready to execute.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallPlan {
    pub package: String,
    pub target: InstallTarget,
    pub placement: Placement,
    pub internal: bool,
    pub command: CommandSpec,
}

pub struct DependencyService {
    filesystem: Box<dyn Filesystem>,
    prompter: Box<dyn Prompter>,
    runner: Box<dyn CommandRunner>,
}

impl DependencyService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        prompter: Box<dyn Prompter>,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            filesystem,
            prompter,
            runner,
        }
    }

    /// Resolve, build and run in one go.
    #[instrument(skip_all, fields(package = %request.package_name, manager = %manager))]
    pub fn add_dependency(
        &self,
        cwd: &Path,
        request: &DependencyRequest,
        manager: PackageManager,
    ) -> MomoResult<InstallPlan> {
        let root = self.ensure_project_root(cwd)?;
        let plan = self.plan(&root, request, manager)?;
        self.install(&plan)?;
        Ok(plan)
    }

    /// `cwd` itself must contain `momo.config.json`; ancestors do not count.
    pub fn ensure_project_root(&self, cwd: &Path) -> MomoResult<PathBuf> {
        if self.filesystem.exists(&cwd.join(CONFIG_FILE)) {
            Ok(cwd.to_path_buf())
        } else {
            Err(ApplicationError::NotAProjectRoot {
                dir: cwd.to_path_buf(),
            }
            .into())
        }
    }

    /// Decide target and command without running anything.
    ///
    /// The workspace is scanned once; the same member set answers both the
    /// target lookup and the internal-package check.
    pub fn plan(
        &self,
        root: &Path,
        request: &DependencyRequest,
        manager: PackageManager,
    ) -> MomoResult<InstallPlan> {
        let members = WorkspaceDiscovery::new(self.filesystem.as_ref()).discover(root)?;
        let Resolution { target, placement } = self.resolve_among(&members, request)?;

        let internal = is_internal(&members, &request.package_name);
        if internal {
            info!(package = %request.package_name, "Internal workspace package, using workspace protocol");
        }

        let command = CommandSpec::new(manager.as_str(), root).args(install_args(
            manager, &target, request, internal,
        ));
        debug!(%command, "Install command built");

        Ok(InstallPlan {
            package: request.package_name.clone(),
            target,
            placement,
            internal,
            command,
        })
    }

    /// Pick the install target.
    ///
    /// Explicit flags never fall through to the picker: an unknown `--app`
    /// or `--pkg` is an error even when the terminal is interactive.
    #[instrument(skip_all, fields(package = %request.package_name))]
    pub fn resolve_target(
        &self,
        root: &Path,
        request: &DependencyRequest,
    ) -> MomoResult<Resolution> {
        if request.selector() == TargetSelector::Root {
            return self.resolve_among(&[], request);
        }
        let members = WorkspaceDiscovery::new(self.filesystem.as_ref()).discover(root)?;
        self.resolve_among(&members, request)
    }

    fn resolve_among(
        &self,
        members: &[WorkspaceMember],
        request: &DependencyRequest,
    ) -> MomoResult<Resolution> {
        match request.selector() {
            TargetSelector::Root => Ok(Resolution {
                target: InstallTarget::Root,
                placement: Placement::Forced,
            }),
            TargetSelector::Named { kind, name } => {
                let member = lookup(members, name, kind).ok_or_else(|| {
                    MomoError::from(DomainError::TargetNotFound {
                        kind,
                        name: name.to_string(),
                    })
                })?;
                Ok(Resolution {
                    target: InstallTarget::Member(member.clone()),
                    placement: Placement::Explicit,
                })
            }
            TargetSelector::Interactive => {
                if members.is_empty() {
                    return Ok(Resolution {
                        target: InstallTarget::Root,
                        placement: Placement::NoMembers,
                    });
                }
                let target = self.pick_target(&request.package_name, members)?;
                Ok(Resolution {
                    target,
                    placement: Placement::Chosen,
                })
            }
        }
    }

    /// Run the planned command. Non-zero exit names the package.
    pub fn install(&self, plan: &InstallPlan) -> MomoResult<()> {
        info!(command = %plan.command, target = %plan.target, "Installing");
        match self.runner.run(&plan.command)? {
            Some(0) => Ok(()),
            code => Err(ApplicationError::InstallerFailed {
                package: plan.package.clone(),
                code,
            }
            .into()),
        }
    }

    fn pick_target(
        &self,
        package: &str,
        members: &[WorkspaceMember],
    ) -> MomoResult<InstallTarget> {
        let mut items: Vec<String> = members
            .iter()
            .map(|m| format!("{} ({})", m.name, m.kind))
            .collect();
        items.push(ROOT_CHOICE.to_string());

        let prompt = format!("Where should {package} be installed?");
        let choice = self
            .prompter
            .select(&prompt, &items, 0)?
            .ok_or(ApplicationError::Cancelled)?;

        if choice == members.len() {
            Ok(InstallTarget::Root)
        } else if choice < members.len() {
            Ok(InstallTarget::Member(members[choice].clone()))
        } else {
            Err(MomoError::Internal {
                message: format!("picker returned index {choice} of {}", items.len()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockCommandRunner, MockFilesystem, MockPrompter};
    use crate::domain::MemberKind;

    /// Filesystem mock exposing `apps/web` (name "web") and
    /// `packages/ui` (name "@momo/ui") under `/repo`.
    fn workspace_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| true);
        fs.expect_list_dirs().returning(|p| {
            Ok(match p.to_str() {
                Some("/repo/apps") => vec![PathBuf::from("/repo/apps/web")],
                Some("/repo/packages") => vec![PathBuf::from("/repo/packages/ui")],
                _ => vec![],
            })
        });
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string().returning(|p| {
            Ok(if p.starts_with("/repo/apps/web") {
                r#"{ "name": "web" }"#.to_string()
            } else {
                r#"{ "name": "@momo/ui" }"#.to_string()
            })
        });
        fs
    }

    fn empty_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| false);
        fs.expect_exists().returning(|_| true);
        fs
    }

    fn no_prompts() -> MockPrompter {
        let mut prompter = MockPrompter::new();
        prompter.expect_select().never();
        prompter
    }

    fn no_runs() -> MockCommandRunner {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();
        runner
    }

    fn service(fs: MockFilesystem, prompter: MockPrompter, runner: MockCommandRunner) -> DependencyService {
        DependencyService::new(Box::new(fs), Box::new(prompter), Box::new(runner))
    }

    #[test]
    fn plan_scans_workspace_once() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| true);
        // one listing each for apps/ and packages/
        fs.expect_list_dirs().times(2).returning(|p| {
            Ok(match p.to_str() {
                Some("/repo/apps") => vec![PathBuf::from("/repo/apps/web")],
                Some("/repo/packages") => vec![PathBuf::from("/repo/packages/ui")],
                _ => vec![],
            })
        });
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string().times(2).returning(|p| {
            Ok(if p.starts_with("/repo/apps/web") {
                r#"{ "name": "web" }"#.to_string()
            } else {
                r#"{ "name": "@momo/ui" }"#.to_string()
            })
        });
        let svc = service(fs, no_prompts(), no_runs());

        let request = DependencyRequest::new("@momo/ui")
            .unwrap()
            .app(Some("web".into()));
        let plan = svc
            .plan(Path::new("/repo"), &request, PackageManager::Pnpm)
            .unwrap();
        assert!(plan.internal);
        assert_eq!(plan.placement, Placement::Explicit);
    }

    #[test]
    fn force_root_skips_discovery_for_resolution() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().never();
        fs.expect_list_dirs().never();
        let svc = service(fs, no_prompts(), no_runs());

        let request = DependencyRequest::new("zod")
            .unwrap()
            .app(Some("web".into()))
            .root(true);
        let resolution = svc.resolve_target(Path::new("/repo"), &request).unwrap();
        assert_eq!(resolution.target, InstallTarget::Root);
        assert_eq!(resolution.placement, Placement::Forced);
    }

    #[test]
    fn empty_workspace_installs_to_root_without_prompt() {
        let svc = service(empty_fs(), no_prompts(), no_runs());
        let request = DependencyRequest::new("zod").unwrap();

        let plan = svc
            .plan(Path::new("/repo"), &request, PackageManager::Pnpm)
            .unwrap();
        assert_eq!(plan.target, InstallTarget::Root);
        assert_eq!(plan.placement, Placement::NoMembers);
        assert_eq!(plan.command.program, "pnpm");
        assert_eq!(plan.command.args, ["add", "-w", "zod"]);
        assert_eq!(plan.command.cwd, PathBuf::from("/repo"));
    }

    #[test]
    fn explicit_app_targets_member() {
        let svc = service(workspace_fs(), no_prompts(), no_runs());
        let request = DependencyRequest::new("lodash")
            .unwrap()
            .app(Some("web".into()));

        let plan = svc
            .plan(Path::new("/repo"), &request, PackageManager::Pnpm)
            .unwrap();
        assert_eq!(plan.placement, Placement::Explicit);
        assert_eq!(plan.command.args, ["add", "--filter", "web", "lodash"]);
    }

    #[test]
    fn unknown_library_fails_without_prompt() {
        let svc = service(workspace_fs(), no_prompts(), no_runs());
        let request = DependencyRequest::new("@momo/ui")
            .unwrap()
            .library(Some("missing-pkg".into()));

        let err = svc.resolve_target(Path::new("/repo"), &request).unwrap_err();
        assert!(matches!(
            err,
            MomoError::Domain(DomainError::TargetNotFound { kind: MemberKind::Library, ref name })
                if name == "missing-pkg"
        ));
    }

    #[test]
    fn app_flag_does_not_match_library() {
        let svc = service(workspace_fs(), no_prompts(), no_runs());
        let request = DependencyRequest::new("zod").unwrap().app(Some("ui".into()));
        assert!(svc.resolve_target(Path::new("/repo"), &request).is_err());
    }

    #[test]
    fn internal_package_gets_workspace_protocol() {
        let svc = service(workspace_fs(), no_prompts(), no_runs());
        let request = DependencyRequest::new("@momo/ui")
            .unwrap()
            .app(Some("web".into()));

        let plan = svc
            .plan(Path::new("/repo"), &request, PackageManager::Pnpm)
            .unwrap();
        assert!(plan.internal);
        assert_eq!(
            plan.command.args.last().map(String::as_str),
            Some("@momo/ui@workspace:*")
        );
    }

    #[test]
    fn picker_lists_members_then_root() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_select()
            .withf(|prompt, items, _| {
                prompt == "Where should zod be installed?"
                    && items.len() == 3
                    && items[0] == "web (app)"
                    && items[1] == "@momo/ui (package)"
                    && items[2] == ROOT_CHOICE
            })
            .times(1)
            .returning(|_, _, _| Ok(Some(1)));
        let svc = service(workspace_fs(), prompter, no_runs());

        let request = DependencyRequest::new("zod").unwrap().dev(true);
        let plan = svc
            .plan(Path::new("/repo"), &request, PackageManager::Pnpm)
            .unwrap();
        assert_eq!(plan.placement, Placement::Chosen);
        assert_eq!(plan.command.args, ["add", "-D", "--filter", "@momo/ui", "zod"]);
    }

    #[test]
    fn picking_root_entry_targets_root() {
        let mut prompter = MockPrompter::new();
        prompter.expect_select().returning(|_, _, _| Ok(Some(2)));
        let svc = service(workspace_fs(), prompter, no_runs());

        let request = DependencyRequest::new("zod").unwrap();
        let resolution = svc.resolve_target(Path::new("/repo"), &request).unwrap();
        assert!(resolution.target.is_root());
    }

    #[test]
    fn cancelled_picker_aborts_before_install() {
        let mut prompter = MockPrompter::new();
        prompter.expect_select().returning(|_, _, _| Ok(None));
        let svc = service(workspace_fs(), prompter, no_runs());

        let request = DependencyRequest::new("zod").unwrap();
        let err = svc
            .add_dependency(Path::new("/repo"), &request, PackageManager::Pnpm)
            .unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn missing_marker_file_is_not_a_project_root() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        let svc = service(fs, no_prompts(), no_runs());

        let request = DependencyRequest::new("zod").unwrap();
        let err = svc
            .add_dependency(Path::new("/tmp/nowhere"), &request, PackageManager::Pnpm)
            .unwrap_err();
        assert!(matches!(
            err,
            MomoError::Application(ApplicationError::NotAProjectRoot { .. })
        ));
    }

    #[test]
    fn installer_failure_names_package() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(1).returning(|_| Ok(Some(1)));
        let svc = service(empty_fs(), no_prompts(), runner);

        let request = DependencyRequest::new("left-pad").unwrap().root(true);
        let err = svc
            .add_dependency(Path::new("/repo"), &request, PackageManager::Npm)
            .unwrap_err();
        assert!(matches!(
            err,
            MomoError::Application(ApplicationError::InstallerFailed { ref package, code: Some(1) })
                if package == "left-pad"
        ));
    }

    #[test]
    fn successful_install_runs_exactly_once() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|cmd| cmd.program == "bun" && cmd.args == ["add", "--dev", "vitest"])
            .times(1)
            .returning(|_| Ok(Some(0)));
        let svc = service(empty_fs(), no_prompts(), runner);

        let request = DependencyRequest::new("vitest").unwrap().dev(true).root(true);
        let plan = svc
            .add_dependency(Path::new("/repo"), &request, PackageManager::Bun)
            .unwrap();
        assert!(plan.target.is_root());
    }
}
