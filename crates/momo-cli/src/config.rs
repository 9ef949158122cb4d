//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns loading and saving; core only sees the resulting
//! [`MomoConfig`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `MOMO_*` environment variables (`MOMO_MANAGER=bun`)
//! 3. Config file: `--config`, else `./momo.config.json`, else
//!    `~/.momo/config.json`
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use momo_core::domain::{CONFIG_FILE, MomoConfig, to_pretty_json};

/// Keys `MomoConfig` knows, in their JSON spelling.
const KNOWN_KEYS: [&str; 5] = ["scope", "packageScope", "author", "license", "manager"];

/// Loaded configuration plus the file it belongs to.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Effective settings.
    pub settings: MomoConfig,
    /// File that `config set` writes to.
    pub path: PathBuf,
}

impl AppConfig {
    /// Load configuration for an invocation in `cwd`.
    ///
    /// An unreadable or invalid file logs a warning and falls back to the
    /// defaults. Only failing to locate the home directory is an error.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<Self> {
        let path = Self::resolve_path(explicit, cwd)?;

        let settings = match read_layers(&path, true) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Invalid configuration in {}. Using defaults. ({e:#})", path.display());
                MomoConfig::default()
            }
        };

        debug!(path = %path.display(), manager = %settings.manager, "Configuration loaded");
        Ok(Self { settings, path })
    }

    /// The file settings are read from and saved to.
    pub fn resolve_path(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        let local = cwd.join(CONFIG_FILE);
        if local.is_file() {
            return Ok(local);
        }
        Self::global_path()
    }

    /// `~/.momo/config.json`.
    pub fn global_path() -> anyhow::Result<PathBuf> {
        let dirs = directories::BaseDirs::new().context("Cannot locate the home directory")?;
        Ok(dirs.home_dir().join(".momo").join("config.json"))
    }

    /// Settings stored in the file alone, without environment overrides.
    /// This is what `config set` starts from.
    pub fn stored(&self) -> anyhow::Result<MomoConfig> {
        read_layers(&self.path, false)
    }

    /// Validate and write `settings` to [`Self::path`] as pretty JSON,
    /// creating the parent directory when needed.
    pub fn save(&self, settings: &MomoConfig) -> anyhow::Result<PathBuf> {
        settings
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let value = serde_json::to_value(settings).context("Failed to serialise config")?;
        std::fs::write(&self.path, to_pretty_json(&value))
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        debug!(path = %self.path.display(), "Configuration saved");
        Ok(self.path.clone())
    }
}

/// Merge the optional JSON file and, when `with_env`, `MOMO_*` variables.
fn read_layers(path: &Path, with_env: bool) -> anyhow::Result<MomoConfig> {
    let mut builder = Config::builder().add_source(
        File::from(path)
            .format(FileFormat::Json)
            .required(false),
    );
    if with_env {
        builder = builder.add_source(Environment::with_prefix("MOMO"));
    }

    let raw: Map<String, Value> = builder
        .build()
        .with_context(|| format!("Failed to read {}", path.display()))?
        .try_deserialize()
        .context("Failed to parse configuration")?;

    let normalised: Map<String, Value> = raw
        .into_iter()
        .map(|(key, value)| (canonical_key(&key), value))
        .collect();

    let settings: MomoConfig = serde_json::from_value(Value::Object(normalised))
        .context("Configuration does not match the schema")?;
    settings.validate()?;
    Ok(settings)
}

/// Map `packagescope` / `package_scope` (env spelling) back to `packageScope`.
fn canonical_key(key: &str) -> String {
    let squashed = key.replace('_', "");
    KNOWN_KEYS
        .iter()
        .find(|known| known.eq_ignore_ascii_case(&squashed))
        .map(|known| known.to_string())
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use momo_core::domain::PackageManager;
    use tempfile::TempDir;

    fn app_config(dir: &TempDir) -> AppConfig {
        AppConfig {
            settings: MomoConfig::default(),
            path: dir.path().join(CONFIG_FILE),
        }
    }

    #[test]
    fn canonical_keys() {
        assert_eq!(canonical_key("package_scope"), "packageScope");
        assert_eq!(canonical_key("packagescope"), "packageScope");
        assert_eq!(canonical_key("MANAGER"), "manager");
        assert_eq!(canonical_key("telemetry"), "telemetry");
    }

    #[test]
    fn local_file_wins_over_global() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{}").unwrap();
        let path = AppConfig::resolve_path(None, dir.path()).unwrap();
        assert_eq!(path, dir.path().join(CONFIG_FILE));
    }

    #[test]
    fn explicit_path_wins() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("custom.json");
        let path = AppConfig::resolve_path(Some(&explicit), dir.path()).unwrap();
        assert_eq!(path, explicit);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = app_config(&dir);
        assert_eq!(config.stored().unwrap(), MomoConfig::default());
    }

    #[test]
    fn save_then_read_back() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            settings: MomoConfig::default(),
            path: dir.path().join("nested").join("config.json"),
        };
        let updated = MomoConfig::default().with_value("manager", "bun").unwrap();
        config.save(&updated).unwrap();

        let text = std::fs::read_to_string(&config.path).unwrap();
        assert!(text.contains("  \"manager\": \"bun\""));
        assert_eq!(config.stored().unwrap().manager, PackageManager::Bun);
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{ "scope": "no-at-sign" }"#).unwrap();
        let config = AppConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.settings, MomoConfig::default());
        assert_eq!(config.path, dir.path().join(CONFIG_FILE));
    }

    #[test]
    fn save_rejects_invalid_settings() {
        let dir = TempDir::new().unwrap();
        let config = app_config(&dir);
        let bad = MomoConfig {
            scope: "momo".into(),
            ..MomoConfig::default()
        };
        assert!(config.save(&bad).is_err());
        assert!(!config.path.exists());
    }
}
