//! Supported package managers and their command-line dialects.
//!
//! # Adding a manager
//!
//! 1. Add the variant and its `as_str` / `FromStr` arms
//! 2. Fill in the flag methods below
//! 3. The install builder only talks to these methods

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A JavaScript package manager that momo can drive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    #[default]
    Pnpm,
    Bun,
}

impl PackageManager {
    pub const ALL: [PackageManager; 4] = [Self::Bun, Self::Npm, Self::Pnpm, Self::Yarn];

    /// Binary name, which is also the config spelling.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
        }
    }

    /// Human label used in prompts.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Npm => "NPM",
            Self::Yarn => "Yarn",
            Self::Pnpm => "PNPM",
            Self::Bun => "Bun",
        }
    }

    /// Flag marking a development-only dependency.
    pub const fn dev_flag(&self) -> &'static str {
        match self {
            Self::Bun => "--dev",
            Self::Npm | Self::Yarn | Self::Pnpm => "-D",
        }
    }

    /// Flag that targets the workspace root manifest.
    ///
    /// `None` means the manager installs into the root by default when run
    /// from the root directory.
    pub const fn root_flag(&self) -> Option<&'static str> {
        match self {
            Self::Pnpm => Some("-w"),
            Self::Yarn => Some("-W"),
            Self::Npm | Self::Bun => None,
        }
    }

    /// Flag that scopes an install to one member, followed by its name.
    ///
    /// Yarn has no such flag; it takes `workspace <name>` before the verb.
    pub const fn filter_flag(&self) -> Option<&'static str> {
        match self {
            Self::Pnpm | Self::Bun => Some("--filter"),
            Self::Npm => Some("--workspace"),
            Self::Yarn => None,
        }
    }

    /// Version assumed when `<pm> --version` cannot be run.
    pub const fn fallback_version(&self) -> &'static str {
        match self {
            Self::Pnpm => "9.0.0",
            Self::Yarn => "1.22.0",
            Self::Bun => "1.0.0",
            Self::Npm => "10.0.0",
        }
    }

    /// Command that starts the dev task (`npm run dev`, `pnpm dev`, ...).
    pub fn dev_command(&self) -> String {
        match self {
            Self::Npm => "npm run dev".into(),
            other => format!("{} dev", other.as_str()),
        }
    }

    /// Guess the invoking manager from `npm_config_user_agent`.
    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.contains("yarn") {
            Self::Yarn
        } else if user_agent.contains("bun") {
            Self::Bun
        } else if user_agent.contains("npm") && !user_agent.contains("pnpm") {
            Self::Npm
        } else {
            Self::Pnpm
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            "pnpm" => Ok(Self::Pnpm),
            "bun" => Ok(Self::Bun),
            other => Err(DomainError::UnknownPackageManager(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("PNPM".parse::<PackageManager>().unwrap(), PackageManager::Pnpm);
        assert_eq!("bun".parse::<PackageManager>().unwrap(), PackageManager::Bun);
        assert!("cargo".parse::<PackageManager>().is_err());
    }

    #[test]
    fn default_is_pnpm() {
        assert_eq!(PackageManager::default(), PackageManager::Pnpm);
    }

    #[test]
    fn user_agent_detection() {
        assert_eq!(
            PackageManager::from_user_agent("yarn/1.22.19 npm/? node/v20.0.0"),
            PackageManager::Yarn
        );
        assert_eq!(
            PackageManager::from_user_agent("bun/1.1.0 npm/? node/v20.0.0"),
            PackageManager::Bun
        );
        assert_eq!(
            PackageManager::from_user_agent("npm/10.2.0 node/v20.0.0"),
            PackageManager::Npm
        );
        assert_eq!(
            PackageManager::from_user_agent("pnpm/9.1.0 npm/? node/v20.0.0"),
            PackageManager::Pnpm
        );
        assert_eq!(PackageManager::from_user_agent(""), PackageManager::Pnpm);
    }

    #[test]
    fn pnpm_dialect() {
        let pm = PackageManager::Pnpm;
        assert_eq!(pm.dev_flag(), "-D");
        assert_eq!(pm.root_flag(), Some("-w"));
        assert_eq!(pm.filter_flag(), Some("--filter"));
    }

    #[test]
    fn dev_command_uses_run_for_npm_only() {
        assert_eq!(PackageManager::Npm.dev_command(), "npm run dev");
        assert_eq!(PackageManager::Bun.dev_command(), "bun dev");
    }
}
