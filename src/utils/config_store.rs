//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::domain::config::AppConfig;
use crate::error::{Error, Result};

/// Config file name inside the application config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the config file path
pub const CONFIG_ENV: &str = "UI_CHALLENGES_CONFIG";

/// Get the application config directory
pub fn app_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("org", "ui-challenges", "ui-challenges")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(Error::NoConfigDir)
}

/// Resolve the config file path, honoring the environment override
pub fn config_path() -> Result<PathBuf> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(app_config_dir()?.join(CONFIG_FILE)),
    }
}

/// Load the application config from its default location
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path()?)
}

/// Load a TOML config file, returning defaults when it doesn't exist
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save the application config to its default location
pub fn save_config(config: &AppConfig) -> Result<()> {
    save_config_to(&config_path()?, config)
}

/// Save a TOML config file, creating parent directories as needed
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.exists()
    {
        fs::create_dir_all(dir)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::counter::StepConfig;
    use crate::i18n::Locale;

    /// Per-test scratch directory, removed by the test when done
    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ui-challenges-test-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = scratch_dir("missing");
        let config = load_config_from(&dir.join(CONFIG_FILE)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(!dir.exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = scratch_dir("saved");
        let path = dir.join("nested").join(CONFIG_FILE);
        let config = AppConfig {
            counter: StepConfig::new(2, 9).unwrap(),
            locale: Locale::ZhCN,
            ..AppConfig::default()
        };

        save_config_to(&path, &config).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded, config);

        fs::remove_dir_all(&dir).unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn test_invalid_step_is_an_error() {
        let dir = scratch_dir("invalid");
        let path = dir.join(CONFIG_FILE);
        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, "[counter]\nstep = 0\nmax = 10\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, Error::TomlDe { .. }));

        fs::remove_dir_all(&dir).unwrap();
        assert!(!dir.exists());
    }
}
