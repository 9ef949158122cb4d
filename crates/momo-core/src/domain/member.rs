//! Workspace members: the apps and libraries living under `apps/` and
//! `packages/`.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory that holds application members.
pub const APPS_DIR: &str = "apps";
/// Directory that holds library members.
pub const PACKAGES_DIR: &str = "packages";
/// Manifest file every member must carry.
pub const MANIFEST_FILE: &str = "package.json";

/// Which workspace root a member lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    /// A deployable application under `apps/`.
    App,
    /// A shared library under `packages/`.
    #[serde(rename = "package")]
    Library,
}

impl MemberKind {
    /// Both kinds, in discovery order.
    pub const ALL: [MemberKind; 2] = [MemberKind::App, MemberKind::Library];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Library => "package",
        }
    }

    /// Directory (relative to the workspace root) holding members of this kind.
    pub const fn root_dir(&self) -> &'static str {
        match self {
            Self::App => APPS_DIR,
            Self::Library => PACKAGES_DIR,
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member discovered on disk.
///
/// Members are recomputed on every discovery pass and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceMember {
    /// Manifest `name`, or the directory name when the manifest has none.
    pub name: String,
    /// Location of the member directory.
    pub path: PathBuf,
    pub kind: MemberKind,
    /// Raw manifest content. Only `name` is interpreted.
    pub manifest: serde_json::Map<String, serde_json::Value>,
}

impl WorkspaceMember {
    /// Build a member from its directory and parsed manifest.
    pub fn from_manifest(
        path: impl Into<PathBuf>,
        kind: MemberKind,
        manifest: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        let path = path.into();
        let name = manifest
            .get("name")
            .and_then(serde_json::Value::as_str)
            .filter(|n| !n.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| dir_name(&path).to_owned());

        Self {
            name,
            path,
            kind,
            manifest,
        }
    }

    /// Final path component of the member directory.
    pub fn dir_name(&self) -> &str {
        dir_name(&self.path)
    }

    /// Whether `candidate` names this member, either by manifest name or by
    /// directory alias.
    pub fn answers_to(&self, candidate: &str) -> bool {
        self.name == candidate || self.dir_name() == candidate
    }
}

fn dir_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}
