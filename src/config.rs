//! Controller configuration persistence
//!
//! Stores tuning values in `~/.config/dragmenu/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Timing of the settle animation that runs after a drag is released
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettleConfig {
    /// Duration of a settle over zero distance, scaled up with travel distance
    #[serde(default = "default_base_duration_ms")]
    pub base_duration_ms: u64,
    /// Upper bound on any settle duration
    #[serde(default = "default_max_duration_ms")]
    pub max_duration_ms: u64,
    /// Hard cap on animation ticks; the settle snaps to its target when reached
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u32,
    /// Distance (pixels) at which the interpolated offset counts as arrived
    #[serde(default = "default_epsilon_px")]
    pub epsilon_px: f32,
}

fn default_base_duration_ms() -> u64 {
    256
}

fn default_max_duration_ms() -> u64 {
    600
}

fn default_max_ticks() -> u32 {
    120
}

fn default_epsilon_px() -> f32 {
    0.5
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            base_duration_ms: default_base_duration_ms(),
            max_duration_ms: default_max_duration_ms(),
            max_ticks: default_max_ticks(),
            epsilon_px: default_epsilon_px(),
        }
    }
}

/// Controller configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragConfig {
    #[serde(default)]
    pub settle: SettleConfig,
    /// Frame interval the replay host uses between animation ticks
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    /// How far back the velocity tracker looks when a drag is released
    #[serde(default = "default_velocity_window_ms")]
    pub velocity_window_ms: u64,
}

fn default_frame_interval_ms() -> u64 {
    16
}

fn default_velocity_window_ms() -> u64 {
    100
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            settle: SettleConfig::default(),
            frame_interval_ms: default_frame_interval_ms(),
            velocity_window_ms: default_velocity_window_ms(),
        }
    }
}

impl DragConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Parse config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Save config to the default location
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
