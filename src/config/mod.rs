use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the catalog service.
    #[serde(default = "default_service_url")]
    pub service_url: String,
    pub log_level: String,
    #[serde(default = "default_config_version")]
    pub config_version: u32,
}

fn default_service_url() -> String {
    // The address the catalog service binds when self-hosted.
    "http://localhost:8080".to_string()
}

fn default_config_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            log_level: "info".to_string(),
            config_version: default_config_version(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)?;

            match toml::from_str::<Config>(&contents) {
                Ok(mut config) => {
                    if config.config_version < default_config_version() {
                        log::info!(
                            "Migrating config from version {} to {}",
                            config.config_version,
                            default_config_version()
                        );
                        config = Self::migrate_config(config)?;
                        config.save()?;
                    }
                    config.validate()?;
                    Ok(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config: {}. Using defaults and merging.", e);
                    let mut config = Self::default();

                    // Salvage recognizable fields from the broken file.
                    if let Ok(value) = toml::from_str::<toml::Value>(&contents) {
                        if let Some(table) = value.as_table() {
                            if let Some(url) = table.get("service_url").and_then(|v| v.as_str()) {
                                config.service_url = url.to_string();
                            }
                            if let Some(level) = table.get("log_level").and_then(|v| v.as_str()) {
                                config.log_level = level.to_string();
                            }
                        }
                    }

                    config.validate()?;
                    config.save()?;
                    Ok(config)
                }
            }
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Migrate config from older versions
    fn migrate_config(mut config: Config) -> Result<Self> {
        let current_version = config.config_version;
        let target_version = default_config_version();

        log::info!("Migrating config from v{} to v{}", current_version, target_version);

        if current_version < 1 {
            // Migration to v1: service_url gained a default.
            if config.service_url.is_empty() {
                config.service_url = default_service_url();
            }
        }

        config.config_version = target_version;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "Invalid log level: '{}'. Must be one of: {}",
                self.log_level,
                valid_log_levels.join(", ")
            )));
        }

        if !self.service_url.starts_with("http://") && !self.service_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "Invalid service URL: '{}'. Must start with http:// or https://",
                self.service_url
            )));
        }

        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "gamedex")
            .ok_or_else(|| Error::Config("Failed to determine project directories".to_string()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.service_url, "http://localhost:8080");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.service_url, deserialized.service_url);
        assert_eq!(config.log_level, deserialized.log_level);
    }

    #[test]
    fn test_validate_rejects_bad_log_level() {
        let config = Config {
            log_level: "loud".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_service_url() {
        let config = Config {
            service_url: "localhost:8080".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
