//! Centralized configuration paths for dragmenu
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/dragmenu/`
//! - Windows: `%APPDATA%\dragmenu\`

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "dragmenu";

/// Base config directory for dragmenu
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/dragmenu`
///   - Else: `~/.config/dragmenu`
///
/// Windows:
///   - `%APPDATA%\dragmenu`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/dragmenu/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/dragmenu/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
///
/// Runs before logging is initialized; the caller reports the error.
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or("No config directory available for dragmenu logs")?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create log directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
