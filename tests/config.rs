//! Config loading and persistence

use dragmenu::config::{DragConfig, SettleConfig};
use dragmenu::config_paths;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = DragConfig::default();
    assert_eq!(config.settle.base_duration_ms, 256);
    assert_eq!(config.settle.max_duration_ms, 600);
    assert_eq!(config.settle.max_ticks, 120);
    assert_eq!(config.settle.epsilon_px, 0.5);
    assert_eq!(config.frame_interval_ms, 16);
    assert_eq!(config.velocity_window_ms, 100);
}

#[test]
fn test_empty_yaml_gives_defaults() {
    let config = DragConfig::from_yaml("{}").unwrap();
    assert_eq!(config, DragConfig::default());
}

#[test]
fn test_partial_yaml_fills_in_defaults() {
    let yaml = r#"
settle:
  max_duration_ms: 400
frame_interval_ms: 8
"#;
    let config = DragConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.settle.max_duration_ms, 400);
    assert_eq!(config.settle.base_duration_ms, 256);
    assert_eq!(config.frame_interval_ms, 8);
    assert_eq!(config.velocity_window_ms, 100);
}

#[test]
fn test_malformed_yaml_is_an_error() {
    assert!(DragConfig::from_yaml("settle: [1, 2").is_err());
    assert!(DragConfig::from_yaml("frame_interval_ms: fast").is_err());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = DragConfig {
        settle: SettleConfig {
            base_duration_ms: 200,
            ..SettleConfig::default()
        },
        frame_interval_ms: 10,
        ..DragConfig::default()
    };
    config.save_to(&path).unwrap();

    assert!(path.exists());
    assert_eq!(DragConfig::load_from(&path).unwrap(), config);
}

#[test]
fn test_load_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.yaml");

    let err = DragConfig::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("missing.yaml"));
}

#[test]
fn test_config_paths_live_under_app_dir() {
    if let Some(file) = config_paths::config_file() {
        assert!(file.ends_with("dragmenu/config.yaml"));
    }
    if let Some(logs) = config_paths::logs_dir() {
        assert!(logs.ends_with("dragmenu/logs"));
    }
}
