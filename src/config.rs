use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::constants::{
    CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILE_PREFIX, DEFAULT_RECENT_WINDOW_DAYS,
    LOG_DIR_ENV, MAX_RECENT_WINDOW_DAYS, RECENT_DAYS_ENV, SEED_ENV,
};
use crate::error::{CatalogError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub seed_bootstrap: bool,
    pub declare_builtins: bool,
    pub recent_window_days: i64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_bootstrap: true,
            declare_builtins: true,
            recent_window_days: DEFAULT_RECENT_WINDOW_DAYS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for the rolling JSON log; console only when unset
    pub directory: Option<String>,
    pub file_prefix: String,
    pub json_console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_prefix: DEFAULT_LOG_FILE_PREFIX.to_string(),
            json_console: false,
        }
    }
}

impl Config {
    /// Load `.env`, then the config file (`UNIT_CATALOG_CONFIG` or `catalog.toml`),
    /// then apply environment overrides. A missing file means defaults.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let config_path = Self::path();
        let mut config = if Path::new(&config_path).exists() {
            Self::from_path(&config_path)?
        } else {
            // Usually runs before logging is up; hosts that need it log `Config::path()` later
            debug!("No config file at '{}', using defaults", config_path);
            Self::default()
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Config file location: `UNIT_CATALOG_CONFIG` if set, else `catalog.toml`.
    pub fn path() -> String {
        env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_content = fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&config_content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(dir) = env::var(LOG_DIR_ENV) {
            if !dir.trim().is_empty() {
                self.logging.directory = Some(dir);
            }
        }

        if let Ok(days) = env::var(RECENT_DAYS_ENV) {
            self.catalog.recent_window_days = days.trim().parse().map_err(|_| {
                CatalogError::Config(format!(
                    "{} must be an integer, got '{}'",
                    RECENT_DAYS_ENV, days
                ))
            })?;
        }

        if let Ok(seed) = env::var(SEED_ENV) {
            let disabled = matches!(seed.trim().to_lowercase().as_str(), "0" | "false" | "no");
            self.catalog.seed_bootstrap = !disabled;
        }

        self.validate()
    }

    fn validate(&self) -> Result<()> {
        let days = self.catalog.recent_window_days;
        if !(0..=MAX_RECENT_WINDOW_DAYS).contains(&days) {
            return Err(CatalogError::Config(format!(
                "recent_window_days must be between 0 and {}, got {}",
                MAX_RECENT_WINDOW_DAYS, days
            )));
        }
        if self.logging.file_prefix.trim().is_empty() {
            return Err(CatalogError::Config("logging.file_prefix must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert!(config.catalog.seed_bootstrap);
        assert!(config.catalog.declare_builtins);
        assert_eq!(config.catalog.recent_window_days, 7);
        assert!(config.logging.directory.is_none());
        assert_eq!(config.logging.file_prefix, "unit_catalog.log");
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [catalog]
            seed_bootstrap = false

            [logging]
            directory = "logs"
            "#,
        )
        .unwrap();
        assert!(!config.catalog.seed_bootstrap);
        assert!(config.catalog.declare_builtins);
        assert_eq!(config.logging.directory.as_deref(), Some("logs"));
    }

    #[test]
    fn test_negative_window_is_rejected() {
        let err = Config::from_toml_str("[catalog]\nrecent_window_days = -1\n").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn test_oversized_window_is_rejected() {
        let err =
            Config::from_toml_str("[catalog]\nrecent_window_days = 1000000000\n").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));

        let max = format!("[catalog]\nrecent_window_days = {}\n", MAX_RECENT_WINDOW_DAYS);
        assert!(Config::from_toml_str(&max).is_ok());
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let err = Config::from_toml_str("[catalog\n").unwrap_err();
        assert!(matches!(err, CatalogError::Toml(_)));
    }

    #[test]
    fn test_from_path_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[catalog]\nrecent_window_days = 30").unwrap();

        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.catalog.recent_window_days, 30);
    }

    #[test]
    fn test_path_defaults_to_catalog_toml() {
        if env::var(CONFIG_PATH_ENV).is_err() {
            assert_eq!(Config::path(), DEFAULT_CONFIG_PATH);
        }
    }

    #[test]
    fn test_from_missing_path_is_config_error() {
        let err = Config::from_path("/definitely/not/here/catalog.toml").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }
}
