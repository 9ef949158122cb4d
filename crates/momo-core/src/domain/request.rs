//! Dependency requests and the placement decisions derived from them.

use std::fmt;
use std::path::PathBuf;

use crate::domain::error::DomainError;
use crate::domain::member::{MemberKind, WorkspaceMember};
use crate::domain::package_manager::PackageManager;

/// A request to add one dependency, validated once at the CLI boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependencyRequest {
    pub package_name: String,
    pub dev: bool,
    pub explicit_app: Option<String>,
    pub explicit_library: Option<String>,
    pub force_root: bool,
}

impl DependencyRequest {
    /// Start a request for `package_name` with no placement flags.
    pub fn new(package_name: impl Into<String>) -> Result<Self, DomainError> {
        let package_name = package_name.into();
        if package_name.trim().is_empty() {
            return Err(DomainError::EmptyPackageName);
        }
        Ok(Self {
            package_name,
            ..Self::default()
        })
    }

    pub fn dev(mut self, dev: bool) -> Self {
        self.dev = dev;
        self
    }

    pub fn app(mut self, name: Option<String>) -> Self {
        self.explicit_app = name;
        self
    }

    pub fn library(mut self, name: Option<String>) -> Self {
        self.explicit_library = name;
        self
    }

    pub fn root(mut self, force_root: bool) -> Self {
        self.force_root = force_root;
        self
    }

    /// Collapse the placement flags into a single selector.
    ///
    /// Precedence: root, then app, then library, then interactive.
    pub fn selector(&self) -> TargetSelector<'_> {
        if self.force_root {
            TargetSelector::Root
        } else if let Some(app) = self.explicit_app.as_deref() {
            TargetSelector::Named {
                kind: MemberKind::App,
                name: app,
            }
        } else if let Some(lib) = self.explicit_library.as_deref() {
            TargetSelector::Named {
                kind: MemberKind::Library,
                name: lib,
            }
        } else {
            TargetSelector::Interactive
        }
    }
}

/// How the destination of an install is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSelector<'a> {
    Root,
    Named { kind: MemberKind, name: &'a str },
    Interactive,
}

/// Where a dependency ends up.
///
/// Cancelling the interactive picker is an error, not a third variant, so a
/// resolved target is always actionable.
#[derive(Debug, Clone, PartialEq)]
pub enum InstallTarget {
    /// The top-level workspace manifest.
    Root,
    /// One app or library.
    Member(WorkspaceMember),
}

impl InstallTarget {
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }
}

impl fmt::Display for InstallTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("workspace root"),
            Self::Member(m) => write!(f, "{}", m.name),
        }
    }
}

/// A fully described external command. Core builds these; adapters run them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Build the argument vector for adding `request.package_name` at `target`.
///
/// `internal` rewrites the package to the workspace protocol.
pub fn install_args(
    manager: PackageManager,
    target: &InstallTarget,
    request: &DependencyRequest,
    internal: bool,
) -> Vec<String> {
    let mut args: Vec<String> = Vec::with_capacity(6);

    match (target, manager.filter_flag()) {
        (InstallTarget::Member(member), None) => {
            args.push("workspace".into());
            args.push(member.name.clone());
            args.push("add".into());
        }
        _ => args.push("add".into()),
    }

    if request.dev {
        args.push(manager.dev_flag().into());
    }

    match target {
        InstallTarget::Root => {
            if let Some(flag) = manager.root_flag() {
                args.push(flag.into());
            }
        }
        InstallTarget::Member(member) => {
            if let Some(flag) = manager.filter_flag() {
                args.push(flag.into());
                args.push(member.name.clone());
            }
        }
    }

    args.push(if internal {
        format!("{}@workspace:*", request.package_name)
    } else {
        request.package_name.clone()
    });

    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, kind: MemberKind) -> WorkspaceMember {
        WorkspaceMember::from_manifest(
            PathBuf::from("/repo").join(kind.root_dir()).join(name),
            kind,
            serde_json::Map::new(),
        )
    }

    #[test]
    fn empty_package_name_is_rejected() {
        assert_eq!(
            DependencyRequest::new("  "),
            Err(DomainError::EmptyPackageName)
        );
    }

    #[test]
    fn root_beats_every_other_flag() {
        let req = DependencyRequest::new("zod")
            .unwrap()
            .app(Some("web".into()))
            .library(Some("ui".into()))
            .root(true);
        assert_eq!(req.selector(), TargetSelector::Root);
    }

    #[test]
    fn app_beats_library() {
        let req = DependencyRequest::new("zod")
            .unwrap()
            .app(Some("web".into()))
            .library(Some("ui".into()));
        assert_eq!(
            req.selector(),
            TargetSelector::Named {
                kind: MemberKind::App,
                name: "web"
            }
        );
    }

    #[test]
    fn no_flags_is_interactive() {
        let req = DependencyRequest::new("zod").unwrap();
        assert_eq!(req.selector(), TargetSelector::Interactive);
    }

    #[test]
    fn pnpm_root_install() {
        let req = DependencyRequest::new("zod").unwrap();
        let args = install_args(PackageManager::Pnpm, &InstallTarget::Root, &req, false);
        assert_eq!(args, ["add", "-w", "zod"]);
    }

    #[test]
    fn pnpm_member_install() {
        let req = DependencyRequest::new("lodash").unwrap();
        let target = InstallTarget::Member(member("web", MemberKind::App));
        let args = install_args(PackageManager::Pnpm, &target, &req, false);
        assert_eq!(args, ["add", "--filter", "web", "lodash"]);
    }

    #[test]
    fn dev_flag_comes_before_placement() {
        let req = DependencyRequest::new("vitest").unwrap().dev(true);
        let args = install_args(PackageManager::Pnpm, &InstallTarget::Root, &req, false);
        assert_eq!(args, ["add", "-D", "-w", "vitest"]);
    }

    #[test]
    fn internal_package_uses_workspace_protocol() {
        let req = DependencyRequest::new("@momo/ui").unwrap();
        let target = InstallTarget::Member(member("web", MemberKind::App));
        let args = install_args(PackageManager::Pnpm, &target, &req, true);
        assert_eq!(args.last().map(String::as_str), Some("@momo/ui@workspace:*"));
    }

    #[test]
    fn filter_uses_manifest_name_not_directory() {
        let mut m = member("ui", MemberKind::Library);
        m.name = "@momo/ui".into();
        let req = DependencyRequest::new("clsx").unwrap();
        let args = install_args(PackageManager::Pnpm, &InstallTarget::Member(m), &req, false);
        assert_eq!(args, ["add", "--filter", "@momo/ui", "clsx"]);
    }

    #[test]
    fn npm_dialect() {
        let req = DependencyRequest::new("zod").unwrap().dev(true);
        assert_eq!(
            install_args(PackageManager::Npm, &InstallTarget::Root, &req, false),
            ["add", "-D", "zod"]
        );
        let target = InstallTarget::Member(member("web", MemberKind::App));
        assert_eq!(
            install_args(PackageManager::Npm, &target, &req, false),
            ["add", "-D", "--workspace", "web", "zod"]
        );
    }

    #[test]
    fn yarn_member_install_uses_workspace_prefix() {
        let req = DependencyRequest::new("zod").unwrap().dev(true);
        let target = InstallTarget::Member(member("web", MemberKind::App));
        assert_eq!(
            install_args(PackageManager::Yarn, &target, &req, false),
            ["workspace", "web", "add", "-D", "zod"]
        );
        assert_eq!(
            install_args(PackageManager::Yarn, &InstallTarget::Root, &req, false),
            ["add", "-D", "-W", "zod"]
        );
    }

    #[test]
    fn bun_dialect() {
        let req = DependencyRequest::new("zod").unwrap().dev(true);
        let target = InstallTarget::Member(member("web", MemberKind::App));
        assert_eq!(
            install_args(PackageManager::Bun, &target, &req, false),
            ["add", "--dev", "--filter", "web", "zod"]
        );
    }

    #[test]
    fn command_spec_display() {
        let cmd = CommandSpec::new("pnpm", "/repo").args(["add", "-w", "zod"]);
        assert_eq!(cmd.to_string(), "pnpm add -w zod");
    }
}
