use std::path::Path;

use crate::constants::{APP_DIR_NAME, env_vars};

/// Returns the path of the config file.
///
/// # Notes
/// - `FRC_EVENTS_CONFIG` takes precedence when set and non-empty
/// - Otherwise uses the platform config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    if let Ok(path) = std::env::var(env_vars::CONFIG_PATH)
        && !path.is_empty()
    {
        return path;
    }
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR_NAME)
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR_NAME)
        .join("logs")
        .to_string_lossy()
        .to_string()
}
