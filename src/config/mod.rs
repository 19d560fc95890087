use crate::error::AppError;
use crate::season::calendar::{SeasonWeeks, StaticSeasonCalendar};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Week constants for one season, overriding the built-in calendar.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SeasonOverride {
    pub year: i32,
    pub first_competition_week: i32,
    pub championship_week: i32,
}

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Per-season calendar overrides, written as `[[seasons]]` tables.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seasons: Vec<SeasonOverride>,
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing file yields the default configuration.
    ///
    /// # Environment Variables
    /// - `FRC_EVENTS_CONFIG` - Alternate config file path
    /// - `FRC_EVENTS_LOG_FILE` - Override log file path
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - File could not be read, parsed or validated
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Config::load_from_path(&config_path).await?
        } else {
            tracing::debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        if let Ok(log_file_path) = std::env::var(crate::constants::env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.log_file_path, &self.seasons)
    }

    /// Builds the season calendar: built-in seasons plus configured overrides.
    pub fn season_calendar(&self) -> StaticSeasonCalendar {
        self.seasons
            .iter()
            .fold(StaticSeasonCalendar::default(), |calendar, season| {
                calendar.with_season(
                    season.year,
                    SeasonWeeks {
                        first_competition_week: season.first_competition_week,
                        championship_week: season.championship_week,
                    },
                )
            })
    }

    /// Returns the path of the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location, log location and season overrides
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{}", crate::constants::DEFAULT_LOG_FILE_NAME);
                println!("(Default location)");
            }
            println!("────────────────────────────────────");
            println!("Season Overrides:");
            if config.seasons.is_empty() {
                println!("(none)");
            }
            for season in &config.seasons {
                println!(
                    "{}: first week {}, championship week {}",
                    season.year, season.first_competition_week, season.championship_week
                );
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent directory.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads the file at `path` for editing. Only a missing file yields the
    /// defaults; unreadable or malformed files are errors so they are never
    /// overwritten. No env overrides and no validation are applied.
    pub async fn load_for_update(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Config::load_from_path(path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::calendar::SeasonCalendar;
    use serial_test::serial;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
log_file_path = "/custom/log/path"

[[seasons]]
year = 2030
first_competition_week = 9
championship_week = 7
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(
            config.seasons,
            vec![SeasonOverride {
                year: 2030,
                first_competition_week: 9,
                championship_week: 7,
            }]
        );
    }

    #[tokio::test]
    async fn test_config_empty_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "seasons = \"not a list\"")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;

        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[tokio::test]
    async fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/definitely/not/here/config.toml").await;
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("dir").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            log_file_path: Some("/custom/log/path".to_string()),
            seasons: vec![SeasonOverride {
                year: 2016,
                first_competition_week: 7,
                championship_week: 10,
            }],
        };

        config.save_to_path(&config_path_str).await.unwrap();
        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(content.contains("[[seasons]]"), "Content: {content}");

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_load_for_update() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        let broken = temp_dir.path().join("broken.toml");
        tokio::fs::write(&broken, "[[seasons]]\nyear = \"soon\"\n")
            .await
            .unwrap();

        let config = Config::load_for_update(&missing.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());

        let result = Config::load_for_update(&broken.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[test]
    fn test_season_calendar_applies_overrides() {
        let config = Config {
            log_file_path: None,
            seasons: vec![SeasonOverride {
                year: 2019,
                first_competition_week: 9,
                championship_week: 9,
            }],
        };

        let calendar = config.season_calendar();

        assert_eq!(calendar.first_competition_week(2019), 9);
        assert_eq!(calendar.championship_week(2019), 9);
        // Built-in seasons survive
        assert_eq!(calendar.championship_week(2016), 10);
    }

    #[test]
    fn test_config_validation_valid_configs() {
        let valid = Config {
            log_file_path: None,
            seasons: vec![
                SeasonOverride {
                    year: 1992,
                    first_competition_week: 1,
                    championship_week: 1,
                },
                SeasonOverride {
                    year: 2100,
                    first_competition_week: 53,
                    championship_week: 12,
                },
            ],
        };
        assert!(valid.validate().is_ok());
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_configs() {
        let season = |year, first_competition_week, championship_week| SeasonOverride {
            year,
            first_competition_week,
            championship_week,
        };
        let invalid_configs = vec![
            Config {
                log_file_path: Some(String::new()),
                seasons: vec![],
            },
            Config {
                log_file_path: None,
                seasons: vec![season(1991, 8, 8)],
            },
            Config {
                log_file_path: None,
                seasons: vec![season(2019, 0, 8)],
            },
            Config {
                log_file_path: None,
                seasons: vec![season(2019, 54, 8)],
            },
            Config {
                log_file_path: None,
                seasons: vec![season(2019, 8, 0)],
            },
            Config {
                log_file_path: None,
                seasons: vec![season(2019, 8, 8), season(2019, 9, 9)],
            },
        ];

        for config in invalid_configs {
            assert!(
                config.validate().is_err(),
                "Config should be invalid: {config:?}"
            );
        }
    }

    #[test]
    fn test_log_dir_path_generation() {
        let path = Config::get_log_dir_path();
        assert!(path.ends_with("logs"));
        assert!(path.contains("frc_events"));
    }

    #[tokio::test]
    #[serial]
    async fn test_environment_variable_override() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let log_path = temp_dir.path().join("logs").join("env.log");
        tokio::fs::write(&config_path, "log_file_path = \"/file/log/path.log\"\n")
            .await
            .unwrap();

        unsafe {
            std::env::set_var("FRC_EVENTS_CONFIG", &config_path);
            std::env::set_var("FRC_EVENTS_LOG_FILE", &log_path);
        }

        assert_eq!(Config::get_config_path(), config_path.to_string_lossy());
        let config = Config::load().await;

        unsafe {
            std::env::remove_var("FRC_EVENTS_CONFIG");
            std::env::remove_var("FRC_EVENTS_LOG_FILE");
        }

        let config = config.unwrap();
        assert_eq!(
            config.log_file_path,
            Some(log_path.to_string_lossy().to_string())
        );
        // Validation creates the log directory
        assert!(temp_dir.path().join("logs").exists());
    }

    #[tokio::test]
    #[serial]
    async fn test_load_missing_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("absent.toml");

        unsafe {
            std::env::set_var("FRC_EVENTS_CONFIG", &config_path);
            std::env::remove_var("FRC_EVENTS_LOG_FILE");
        }

        let config = Config::load().await;

        unsafe {
            std::env::remove_var("FRC_EVENTS_CONFIG");
        }

        assert_eq!(config.unwrap(), Config::default());
    }
}
