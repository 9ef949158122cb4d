//! Project-level configuration persisted in `momo.config.json`.
//!
//! The CLI loads one `MomoConfig` per invocation and passes it down by
//! value; nothing in core holds config as global state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::package_manager::PackageManager;
use crate::domain::validation::DomainValidator;

/// Marker file identifying a momo project root. Also the local config file.
pub const CONFIG_FILE: &str = "momo.config.json";

/// Settings read by scaffolding and dependency commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MomoConfig {
    pub scope: String,
    #[serde(
        rename = "packageScope",
        alias = "package_scope",
        skip_serializing_if = "Option::is_none"
    )]
    pub package_scope: Option<String>,
    pub author: String,
    pub license: String,
    pub manager: PackageManager,
    /// Unknown keys survive a load/save round trip.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for MomoConfig {
    fn default() -> Self {
        Self {
            scope: "@momo".into(),
            package_scope: None,
            author: "Anonymous".into(),
            license: "MIT".into(),
            manager: PackageManager::default(),
            extra: BTreeMap::new(),
        }
    }
}

impl MomoConfig {
    /// Config written into a freshly created project.
    pub fn for_project(scope: impl Into<String>, manager: PackageManager) -> Self {
        Self {
            scope: scope.into(),
            manager,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        DomainValidator::scope(&self.scope)
            .map_err(|e| DomainError::InvalidConfig(format!("scope: {e}")))?;
        if let Some(package_scope) = &self.package_scope {
            DomainValidator::scope(package_scope)
                .map_err(|e| DomainError::InvalidConfig(format!("packageScope: {e}")))?;
        }
        Ok(())
    }

    /// Scope to suggest for a new project: `packageScope`, then `scope`.
    pub fn preferred_scope(&self) -> &str {
        self.package_scope.as_deref().unwrap_or(&self.scope)
    }

    /// Look up a key by its JSON spelling.
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let value = serde_json::to_value(self).ok()?;
        value.get(key).cloned()
    }

    /// Return a copy with `key` set to `value`, validated.
    ///
    /// Values are stored as JSON strings, except `true`/`false`/numbers for
    /// keys momo does not know about.
    pub fn with_value(&self, key: &str, value: &str) -> Result<Self, DomainError> {
        let mut object = match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => return Err(DomainError::InvalidConfig("config is not an object".into())),
        };

        let known = matches!(
            key,
            "scope" | "packageScope" | "author" | "license" | "manager"
        );
        let parsed = if known {
            serde_json::Value::String(value.to_string())
        } else {
            serde_json::from_str::<serde_json::Value>(value)
                .ok()
                .filter(|v| v.is_boolean() || v.is_number())
                .unwrap_or_else(|| serde_json::Value::String(value.to_string()))
        };
        object.insert(key.to_string(), parsed);

        let updated: Self = serde_json::from_value(serde_json::Value::Object(object))
            .map_err(|e| DomainError::InvalidConfig(format!("{key}: {e}")))?;
        updated.validate()?;
        Ok(updated)
    }

    /// All entries in display order.
    pub fn entries(&self) -> Vec<(String, serde_json::Value)> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map.into_iter().collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_schema() {
        let cfg = MomoConfig::default();
        assert_eq!(cfg.scope, "@momo");
        assert_eq!(cfg.author, "Anonymous");
        assert_eq!(cfg.license, "MIT");
        assert_eq!(cfg.manager, PackageManager::Pnpm);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn missing_keys_take_defaults() {
        let cfg: MomoConfig = serde_json::from_value(json!({ "manager": "bun" })).unwrap();
        assert_eq!(cfg.manager, PackageManager::Bun);
        assert_eq!(cfg.scope, "@momo");
    }

    #[test]
    fn unknown_keys_pass_through() {
        let cfg: MomoConfig =
            serde_json::from_value(json!({ "scope": "@acme", "telemetry": false })).unwrap();
        assert_eq!(cfg.extra.get("telemetry"), Some(&json!(false)));
        let back = serde_json::to_value(&cfg).unwrap();
        assert_eq!(back["telemetry"], json!(false));
    }

    #[test]
    fn package_scope_is_camel_case_on_disk() {
        let cfg = MomoConfig {
            package_scope: Some("@pkg".into()),
            ..MomoConfig::default()
        };
        let value = serde_json::to_value(&cfg).unwrap();
        assert_eq!(value["packageScope"], json!("@pkg"));
        assert_eq!(cfg.preferred_scope(), "@pkg");
    }

    #[test]
    fn invalid_scope_fails_validation() {
        let cfg = MomoConfig {
            scope: "momo".into(),
            ..MomoConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(DomainError::InvalidConfig(_))));
    }

    #[test]
    fn with_value_sets_manager() {
        let cfg = MomoConfig::default().with_value("manager", "yarn").unwrap();
        assert_eq!(cfg.manager, PackageManager::Yarn);
    }

    #[test]
    fn with_value_rejects_unknown_manager() {
        assert!(MomoConfig::default().with_value("manager", "cargo").is_err());
    }

    #[test]
    fn with_value_rejects_bad_scope() {
        assert!(MomoConfig::default().with_value("scope", "acme").is_err());
    }

    #[test]
    fn with_value_keeps_unknown_keys() {
        let cfg = MomoConfig::default().with_value("telemetry", "false").unwrap();
        assert_eq!(cfg.get("telemetry"), Some(json!(false)));
        let cfg = cfg.with_value("editor", "zed").unwrap();
        assert_eq!(cfg.get("editor"), Some(json!("zed")));
    }

    #[test]
    fn get_reads_json_keys() {
        let cfg = MomoConfig::default();
        assert_eq!(cfg.get("manager"), Some(json!("pnpm")));
        assert_eq!(cfg.get("nope"), None);
    }
}
