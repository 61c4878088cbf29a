//! Command-line argument parsing for the replay tool
//!
//! Supports:
//! - Replaying a touch script (YAML or JSON), or a built-in demo
//! - Sizing the menu and the demo list
//! - Text or JSON output

use clap::Parser;
use std::path::PathBuf;

/// Replay touch input against a drag-to-reveal menu
#[derive(Parser, Debug)]
#[command(name = "dragmenu", version, about = "Replay touch input against a drag menu")]
pub struct CliArgs {
    /// Touch script to replay (defaults to a built-in open/close demo)
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Height of the menu panel in pixels
    #[arg(long, value_name = "PX", default_value_t = 300)]
    pub menu_height: i32,

    /// Number of rows in the demo list
    #[arg(long, value_name = "N", default_value_t = 200)]
    pub rows: usize,

    /// Height of one list row in pixels
    #[arg(long, value_name = "PX", default_value_t = 48)]
    pub row_height: i32,

    /// Visible height of the list in pixels
    #[arg(long, value_name = "PX", default_value_t = 1200)]
    pub viewport_height: i32,

    /// Initial list scroll position in pixels
    #[arg(long, value_name = "PX", default_value_t = 0)]
    pub scroll: i32,

    /// Config file (defaults to ~/.config/dragmenu/config.yaml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print events as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Validated settings derived from CLI arguments
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    pub script: Option<PathBuf>,
    pub menu_height: i32,
    pub rows: usize,
    pub row_height: i32,
    pub viewport_height: i32,
    pub initial_scroll: i32,
    pub config_path: Option<PathBuf>,
    pub json: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into replay configuration
    pub fn into_config(self) -> Result<ReplayConfig, String> {
        if self.menu_height < 0 {
            return Err(format!("--menu-height must be >= 0, got {}", self.menu_height));
        }
        if self.row_height <= 0 {
            return Err(format!("--row-height must be > 0, got {}", self.row_height));
        }
        if self.viewport_height < 0 {
            return Err(format!(
                "--viewport-height must be >= 0, got {}",
                self.viewport_height
            ));
        }
        if self.scroll < 0 {
            return Err(format!("--scroll must be >= 0, got {}", self.scroll));
        }

        Ok(ReplayConfig {
            script: self.script,
            menu_height: self.menu_height,
            rows: self.rows,
            row_height: self.row_height,
            viewport_height: self.viewport_height,
            initial_scroll: self.scroll,
            config_path: self.config,
            json: self.json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["dragmenu"]);
        let config = args.into_config().unwrap();
        assert_eq!(config.menu_height, 300);
        assert_eq!(config.rows, 200);
        assert!(config.script.is_none());
        assert!(!config.json);
    }

    #[test]
    fn test_script_and_flags() {
        let args = CliArgs::parse_from([
            "dragmenu",
            "touches.yaml",
            "--menu-height",
            "240",
            "--scroll",
            "96",
            "--json",
        ]);
        let config = args.into_config().unwrap();
        assert_eq!(config.script, Some(PathBuf::from("touches.yaml")));
        assert_eq!(config.menu_height, 240);
        assert_eq!(config.initial_scroll, 96);
        assert!(config.json);
    }

    #[test]
    fn test_rejects_zero_row_height() {
        let args = CliArgs::parse_from(["dragmenu", "--row-height", "0"]);
        assert!(args.into_config().is_err());
    }

    #[test]
    fn test_rejects_negative_menu_height() {
        let args = CliArgs::parse_from(["dragmenu", "--menu-height=-5"]);
        assert!(args.into_config().is_err());
    }
}
