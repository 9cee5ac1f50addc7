use cadence_config::{Config, ConfigError, ConfigManager};
use cadence_domain::WeekStart;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn default_config_matches_documented_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.week_start, WeekStart::Sunday);
    assert_eq!(cfg.date_format, "%m/%d/%Y");
    assert!(!cfg.diagnostics);
    assert!(cfg.ui_color_enabled);
    assert!(!cfg.accessibility.plain_output);
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());

    let mut cfg = Config::default();
    cfg.week_start = WeekStart::Monday;
    cfg.diagnostics = true;
    cfg.default_input = Some(PathBuf::from("ledger.csv"));

    manager.save(&cfg).expect("save config");
    assert!(manager.config_path().ends_with("config/config.json"));
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("absent.json"));

    assert_eq!(manager.load().expect("load"), Config::default());
}

#[test]
fn partial_file_fills_missing_fields_with_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "week_start": "monday" }"#).expect("write");

    let loaded = ConfigManager::new(path).load().expect("load");
    assert_eq!(loaded.week_start, WeekStart::Monday);
    assert_eq!(loaded.date_format, Config::default_date_format());
    assert!(loaded.ui_color_enabled);
}

#[test]
fn malformed_file_reports_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").expect("write");

    let err = ConfigManager::new(path).load().expect_err("malformed config");
    assert!(matches!(err, ConfigError::Serde(_)));
}

#[test]
fn resolve_input_prefers_explicit_then_configured_path() {
    let mut cfg = Config::default();
    assert_eq!(cfg.resolve_input(None), PathBuf::from("sample.csv"));

    cfg.default_input = Some(PathBuf::from("configured.csv"));
    assert_eq!(cfg.resolve_input(None), PathBuf::from("configured.csv"));
    assert_eq!(
        cfg.resolve_input(Some(PathBuf::from("explicit.csv"))),
        PathBuf::from("explicit.csv")
    );
}

#[test]
fn unknown_week_start_fails_at_load() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "week_start": "friday" }"#).expect("write");

    let err = ConfigManager::new(path).load().expect_err("invalid week start");
    assert!(matches!(err, ConfigError::Serde(_)));
}

#[test]
fn loading_from_an_absent_base_dir_creates_nothing() {
    let dir = tempdir().expect("tempdir");
    let base = dir.path().join("fresh");
    let manager = ConfigManager::with_base_dir(base.clone());

    assert_eq!(manager.load().expect("load"), Config::default());
    assert!(!base.exists());
}

#[test]
fn io_errors_name_the_offending_path() {
    let dir = tempdir().expect("tempdir");
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").expect("write");
    let manager = ConfigManager::with_base_dir(blocker);

    let err = manager.save(&Config::default()).expect_err("parent is a file");
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("blocker"), "{err}");
}
