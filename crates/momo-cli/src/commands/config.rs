//! Implementation of `momo config`.

use tracing::{debug, instrument};

use momo_core::error::MomoError;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::List => list(&config, &output),
        ConfigCommands::Get { key } => get(&config, &key),
        ConfigCommands::Set { key, value } => set(&config, &key, &value, &output),
        ConfigCommands::Path => {
            println!("{}", config.path.display());
            Ok(())
        }
    }
}

fn list(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    output.header("Configuration")?;
    output.info(&format!("Source: {}", config.path.display()))?;
    for (key, value) in config.settings.entries() {
        output.print(&format!("  {} = {}", output.accent(&key), render(&value)))?;
    }
    Ok(())
}

fn get(config: &AppConfig, key: &str) -> CliResult<()> {
    let value = config
        .settings
        .get(key)
        .ok_or_else(|| CliError::UnknownConfigKey { key: key.into() })?;
    // Bare value on stdout so it can be captured by scripts.
    println!("{}", render(&value));
    Ok(())
}

/// Values are written to the file in use, without environment overrides.
fn set(config: &AppConfig, key: &str, value: &str, output: &OutputManager) -> CliResult<()> {
    let stored = config
        .stored()
        .map_err(|e| CliError::config("Failed to read configuration", e))?;
    let updated = stored.with_value(key, value).map_err(MomoError::from)?;
    debug!(key, "Updating configuration");

    let path = config
        .save(&updated)
        .map_err(|e| CliError::config("Failed to save configuration", e))?;

    output.success(&format!("Set {} to {value}", output.accent(key)))?;
    output.info(&format!("Saved to {}", path.display()))?;
    Ok(())
}

fn render(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_render_without_quotes() {
        assert_eq!(render(&json!("@acme")), "@acme");
        assert_eq!(render(&json!(true)), "true");
        assert_eq!(render(&json!(3)), "3");
    }

    #[test]
    fn unknown_key_is_not_found() {
        let config = AppConfig {
            settings: Default::default(),
            path: "momo.config.json".into(),
        };
        let err = get(&config, "nope").unwrap_err();
        assert!(matches!(err, CliError::UnknownConfigKey { ref key } if key == "nope"));
        assert_eq!(err.exit_code(), 3);
    }
}
