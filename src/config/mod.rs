//! Configuration module for Thermal Scout
//!
//! Handles loading and validating settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use tracing::info;

/// Global settings instance
static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// Install the global settings
pub fn init(settings: Settings) -> Result<()> {
    SETTINGS
        .set(settings)
        .map_err(|_| anyhow::anyhow!("Settings already initialized"))?;
    Ok(())
}

/// Get a reference to the global settings, falling back to defaults
pub fn get() -> &'static Settings {
    SETTINGS.get_or_init(Settings::default)
}

/// Load settings from an explicit path, the environment, or the default
/// locations, then apply `THERMAL_SCOUT_*` overrides
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        info!("Loading settings from: {}", path.display());
        return from_path(path);
    }

    if let Ok(path) = std::env::var("THERMAL_SCOUT_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            return from_path(&path);
        }
    }

    for path in default_paths() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            return from_path(&path);
        }
    }

    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}

fn from_path(path: &Path) -> Result<Settings> {
    let mut settings = Settings::from_file(path)?;
    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}

fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("thermal-scout/settings.yml"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_explicit_missing_file() {
        let missing = Path::new("/nonexistent/thermal-scout/settings.yml");
        assert!(load(Some(missing)).is_err());
    }

    #[test]
    fn test_env_override_applies_before_validation() {
        let path = std::env::temp_dir().join(format!("thermal-scout-{}.yml", std::process::id()));
        std::fs::write(&path, "hub:\n  api_url: not a url\n").unwrap();

        std::env::set_var("THERMAL_SCOUT_HUB_URL", "http://127.0.0.1:9/api/models");
        let loaded = load(Some(&path));
        std::env::remove_var("THERMAL_SCOUT_HUB_URL");
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.unwrap().hub.api_url, "http://127.0.0.1:9/api/models");
    }

    #[test]
    fn test_get_falls_back_to_defaults() {
        assert_eq!(get().search.max_limit, 100);
    }
}
