//! Config loading from a variable map (no process env mutation).

use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use travel_core::AppConfig;
use tracing::Level;

fn load(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn defaults_when_nothing_set() {
    let config = load(&[]).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.export_filename, "my_indore_trip.json");
    assert_eq!(config.login_error_timeout, Duration::from_secs(3));
    assert_eq!(config.log_level, Level::INFO);
}

#[test]
fn overrides_are_applied() {
    let config = load(&[
        ("TRAVEL_LOG_LEVEL", "Debug"),
        ("TRAVEL_EXPORT_FILENAME", "goa.json"),
        ("TRAVEL_LOGIN_ERROR_MS", "1500"),
        ("TRAVEL_DEMO_USERNAME", "me"),
        ("TRAVEL_DEMO_PASSWORD", "pw"),
        ("TRAVEL_DATA_DIR", "/tmp/travel"),
    ])
    .unwrap();
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(config.export_filename, "goa.json");
    assert_eq!(config.login_error_timeout, Duration::from_millis(1500));
    assert_eq!(config.demo_username, "me");
    assert_eq!(config.demo_password, "pw");
    assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/travel")));
}

#[test]
fn blank_export_filename_falls_back() {
    let config = load(&[("TRAVEL_EXPORT_FILENAME", "  ")]).unwrap();
    assert_eq!(config.export_filename, "my_indore_trip.json");
}

#[test]
fn bad_values_are_errors() {
    assert!(load(&[("TRAVEL_LOG_LEVEL", "loud")]).is_err());
    assert!(load(&[("TRAVEL_LOGIN_ERROR_MS", "soon")]).is_err());
}
