//! Project health checks behind `momo doctor`.

use std::path::Path;

use tracing::instrument;

use crate::{
    application::ports::Filesystem,
    domain::{APPS_DIR, MANIFEST_FILE, PACKAGES_DIR, PackageManager},
};

/// Result of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub required: bool,
}

impl CheckResult {
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            required: true,
        }
    }

    pub fn fail(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            required: true,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// All checks for one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub checks: Vec<CheckResult>,
}

impl HealthReport {
    /// No required check failed.
    pub fn healthy(&self) -> bool {
        self.checks.iter().all(|c| c.passed || !c.required)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed && c.required)
    }
}

pub struct HealthService {
    filesystem: Box<dyn Filesystem>,
}

impl HealthService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Check the monorepo skeleton in `dir`. Never fails; problems are
    /// reported as failed checks.
    #[instrument(skip(self), fields(dir = %dir.display()))]
    pub fn check(&self, dir: &Path, manager: PackageManager) -> HealthReport {
        let mut expected = vec![
            (MANIFEST_FILE, MANIFEST_FILE),
            ("turbo.json", "turbo.json"),
            ("packages directory", PACKAGES_DIR),
            ("apps directory", APPS_DIR),
        ];
        if manager == PackageManager::Pnpm {
            expected.push(("pnpm-workspace.yaml", "pnpm-workspace.yaml"));
        }

        let checks = expected
            .into_iter()
            .map(|(name, relative)| {
                if self.filesystem.exists(&dir.join(relative)) {
                    CheckResult::pass(name)
                } else {
                    CheckResult::fail(name)
                }
            })
            .collect();

        HealthReport { checks }
    }
}
