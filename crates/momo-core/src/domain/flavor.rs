//! Component flavors: which shared TypeScript preset a new app or package
//! extends.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    #[default]
    Base,
    Nextjs,
    React,
    Node,
}

impl Flavor {
    pub const ALL: [Flavor; 4] = [Self::Base, Self::Nextjs, Self::React, Self::Node];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Nextjs => "nextjs",
            Self::React => "react",
            Self::Node => "node",
        }
    }

    /// Short label used in pickers.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Base => "Vanilla / Base",
            Self::Nextjs => "Next.js",
            Self::React => "React (Vite)",
            Self::Node => "Node.js / Express",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Base => "Vanilla / Generic TypeScript",
            Self::Nextjs => "Next.js Optimized",
            Self::React => "React (Vite) Optimized",
            Self::Node => "Node.js / Express Optimized",
        }
    }

    /// File name of the preset inside `packages/config-typescript`.
    pub fn preset_file(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flavor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "base" | "vanilla" => Ok(Self::Base),
            "nextjs" | "next" => Ok(Self::Nextjs),
            "react" | "vite" => Ok(Self::React),
            "node" | "express" => Ok(Self::Node),
            other => Err(DomainError::UnknownFlavor(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!("Next".parse::<Flavor>().unwrap(), Flavor::Nextjs);
        assert_eq!("vite".parse::<Flavor>().unwrap(), Flavor::React);
        assert!("svelte".parse::<Flavor>().is_err());
    }

    #[test]
    fn preset_file_name() {
        assert_eq!(Flavor::Node.preset_file(), "node.json");
    }
}
