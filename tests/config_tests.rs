use particle_term_config::{AnimationStyle, Config, ConfigError, LogLevel, VisualTheme};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.cols, 80);
    assert_eq!(config.rows, 25);
    assert_eq!(config.density, 8);
    assert_eq!(config.zoom_level, 1.0);
    assert_eq!(config.font_id, 0);
    assert_eq!(config.max_particles, 8_000_000);
    assert_eq!(config.animation_style, AnimationStyle::Normal);
    assert_eq!(config.theme, VisualTheme::Cyberpunk);
    assert_eq!(config.log_level, LogLevel::Off);
}

#[test]
fn test_save_and_load_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("config.yaml");

    let config = Config {
        cols: 120,
        font_id: 4,
        animation_style: AnimationStyle::Sonic,
        theme: VisualTheme::Synthwave,
        ..Default::default()
    };
    config.save_to(&path).expect("save");
    assert!(!path.with_extension("yaml.tmp").exists());

    let loaded = Config::load_from(&path).expect("load");
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "cols: 100\ntheme: retro\nlog_level: debug\n").expect("write");

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.cols, 100);
    assert_eq!(config.rows, 25);
    assert_eq!(config.theme, VisualTheme::Retro);
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn test_out_of_range_values_are_clamped_on_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "density: 500\nzoom_level: 9.0\ndrag: 1.5\ncols: 0\n").expect("write");

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.density, 64);
    assert_eq!(config.zoom_level, 4.0);
    assert_eq!(config.drag, 1.0);
    assert_eq!(config.cols, 80);
}

#[test]
fn test_invalid_yaml_reports_parse_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "cols: [not, a, number]\n").expect("write");

    let err = Config::load_from(&path).expect_err("should fail");
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Parse(_))
    ));
}

#[test]
fn test_missing_file_reports_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = Config::load_from(&temp_dir.path().join("absent.yaml")).expect_err("should fail");
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Io(_))
    ));
}
