//! Workspace discovery: who lives under `apps/` and `packages/`.
//!
//! Nothing here is cached. Every call re-reads the filesystem.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{CONFIG_FILE, DomainError, MANIFEST_FILE, MemberKind, WorkspaceMember},
    error::MomoResult,
};

/// Reads workspace members through a borrowed filesystem port.
pub struct WorkspaceDiscovery<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> WorkspaceDiscovery<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// All members under `root`: apps first, then packages, each sorted by
    /// directory name.
    ///
    /// Directories without a manifest are skipped. A manifest that is not a
    /// JSON object, or two members sharing a name, fails the whole pass.
    #[instrument(skip(self), fields(root = %root.display()))]
    pub fn discover(&self, root: &Path) -> MomoResult<Vec<WorkspaceMember>> {
        let mut members = Vec::new();

        for kind in MemberKind::ALL {
            let kind_root = root.join(kind.root_dir());
            if !self.filesystem.is_dir(&kind_root) {
                debug!(dir = %kind_root.display(), "No {} directory", kind.root_dir());
                continue;
            }

            let mut dirs = self.filesystem.list_dirs(&kind_root)?;
            dirs.sort();

            for dir in dirs {
                if let Some(member) = self.read_member(dir, kind)? {
                    members.push(member);
                }
            }
        }

        ensure_unique(&members)?;
        debug!(count = members.len(), "Discovered workspace members");
        Ok(members)
    }

    /// Nearest directory at or above `start` that holds `momo.config.json`.
    pub fn find_project_root(&self, start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| self.filesystem.exists(&dir.join(CONFIG_FILE)))
            .map(Path::to_path_buf)
    }

    fn read_member(&self, dir: PathBuf, kind: MemberKind) -> MomoResult<Option<WorkspaceMember>> {
        let manifest_path = dir.join(MANIFEST_FILE);
        if !self.filesystem.exists(&manifest_path) {
            debug!(dir = %dir.display(), "Skipping directory without manifest");
            return Ok(None);
        }

        let raw = match self.filesystem.read_to_string(&manifest_path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %manifest_path.display(), error = %e, "Skipping unreadable manifest");
                return Ok(None);
            }
        };

        let manifest = match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Object(map)) => map,
            Ok(_) => {
                return Err(ApplicationError::ManifestParse {
                    path: manifest_path,
                    reason: "expected a JSON object".into(),
                }
                .into());
            }
            Err(e) => {
                return Err(ApplicationError::ManifestParse {
                    path: manifest_path,
                    reason: e.to_string(),
                }
                .into());
            }
        };

        Ok(Some(WorkspaceMember::from_manifest(dir, kind, manifest)))
    }
}

/// First member of `kind` answering to `candidate`.
///
/// Members of the other kind never match, even with the same name.
pub fn lookup<'m>(
    members: &'m [WorkspaceMember],
    candidate: &str,
    kind: MemberKind,
) -> Option<&'m WorkspaceMember> {
    members
        .iter()
        .filter(|m| m.kind == kind)
        .find(|m| m.answers_to(candidate))
}

/// Exact, case-sensitive name match against the member set.
pub fn is_internal(members: &[WorkspaceMember], package: &str) -> bool {
    members.iter().any(|m| m.name == package)
}

fn ensure_unique(members: &[WorkspaceMember]) -> Result<(), DomainError> {
    let mut seen: HashMap<&str, &Path> = HashMap::with_capacity(members.len());
    for member in members {
        if let Some(first) = seen.insert(&member.name, &member.path) {
            return Err(DomainError::DuplicateMember {
                name: member.name.clone(),
                first: first.to_path_buf(),
                second: member.path.clone(),
            });
        }
    }
    Ok(())
}
