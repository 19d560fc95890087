use std::collections::HashSet;
use std::path::Path;

use crate::constants::season::{MAX_SEASON_YEAR, MIN_SEASON_YEAR};
use crate::error::AppError;

use super::SeasonOverride;

/// Validates the configuration settings
///
/// # Validation Rules
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
/// - Season override years must lie in 1992..=2100 and appear once
/// - `first_competition_week` must be a calendar week (1..=53)
/// - `championship_week` must be at least 1
pub fn validate_config(
    log_file_path: &Option<String>,
    seasons: &[SeasonOverride],
) -> Result<(), AppError> {
    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let mut seen_years = HashSet::new();
    for season in seasons {
        if !(MIN_SEASON_YEAR..=MAX_SEASON_YEAR).contains(&season.year) {
            return Err(AppError::config_error(format!(
                "Season year {} is outside {MIN_SEASON_YEAR}..={MAX_SEASON_YEAR}",
                season.year
            )));
        }
        if !seen_years.insert(season.year) {
            return Err(AppError::config_error(format!(
                "Season {} is configured more than once",
                season.year
            )));
        }
        if !(1..=53).contains(&season.first_competition_week) {
            return Err(AppError::config_error(format!(
                "Season {}: first_competition_week must be between 1 and 53, got {}",
                season.year, season.first_competition_week
            )));
        }
        if season.championship_week < 1 {
            return Err(AppError::config_error(format!(
                "Season {}: championship_week must be at least 1, got {}",
                season.year, season.championship_week
            )));
        }
    }

    Ok(())
}
