//! Name rules shared by project creation, component creation, and config.
//!
//! All validation logic lives here, not scattered across commands.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::DomainError;

const MAX_NAME_LEN: usize = 214;
const RESERVED_NAMES: [&str; 2] = ["node_modules", "favicon.ico"];

static NPM_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z0-9-*~][a-z0-9-*._~]*/)?[a-z0-9-~][a-z0-9-._~]*$")
        .expect("npm name pattern is valid")
});

static NPM_SCOPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@[a-z0-9-~][a-z0-9-._~]*$").expect("scope pattern is valid"));

/// Centralized domain validation.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a project or member name against npm package naming rules.
    pub fn package_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(invalid("name is too long"));
        }
        if !NPM_NAME.is_match(name) {
            return Err(invalid(
                "must be a valid npm package name (lowercase, no spaces, allowed special chars: -_.~)",
            ));
        }
        if RESERVED_NAMES.contains(&name) {
            return Err(invalid("name is reserved"));
        }
        Ok(())
    }

    /// Validate an npm scope such as `@momo`.
    pub fn scope(scope: &str) -> Result<(), DomainError> {
        if scope.is_empty() {
            return Err(DomainError::InvalidScope {
                scope: scope.to_string(),
                reason: "scope cannot be empty".into(),
            });
        }
        if !NPM_SCOPE.is_match(scope) {
            return Err(DomainError::InvalidScope {
                scope: scope.to_string(),
                reason: "must start with @ and be a valid npm scope".into(),
            });
        }
        Ok(())
    }

    /// Default scope derived from a project name: `My App!` → `@myapp`.
    pub fn scope_from_project_name(project_name: &str) -> String {
        let cleaned: String = project_name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect::<String>()
            .to_ascii_lowercase();
        format!("@{cleaned}")
    }
}
