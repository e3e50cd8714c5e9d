use anyhow::Context;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

pub const DEFAULT_EXPORT_FILENAME: &str = "my_indore_trip.json";
pub const DEFAULT_LOGIN_ERROR_MS: u64 = 3000;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub log_level: Level,
    pub export_filename: String,
    pub login_error_timeout: Duration,
    pub demo_username: String,
    pub demo_password: String,
    /// Desktop only. `None` means the platform data dir.
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
            login_error_timeout: Duration::from_millis(DEFAULT_LOGIN_ERROR_MS),
            demo_username: "admin".to_string(),
            demo_password: "password123".to_string(),
            data_dir: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any variable source; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = match lookup("TRAVEL_LOG_LEVEL") {
            Some(level) => level
                .trim()
                .parse::<Level>()
                .with_context(|| format!("TRAVEL_LOG_LEVEL is not a log level: {level:?}"))?,
            None => defaults.log_level,
        };
        let login_error_timeout = match lookup("TRAVEL_LOGIN_ERROR_MS") {
            Some(ms) => Duration::from_millis(
                ms.trim()
                    .parse()
                    .with_context(|| format!("TRAVEL_LOGIN_ERROR_MS is not a number: {ms:?}"))?,
            ),
            None => defaults.login_error_timeout,
        };

        Ok(Self {
            log_level,
            export_filename: lookup("TRAVEL_EXPORT_FILENAME")
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(defaults.export_filename),
            login_error_timeout,
            demo_username: lookup("TRAVEL_DEMO_USERNAME").unwrap_or(defaults.demo_username),
            demo_password: lookup("TRAVEL_DEMO_PASSWORD").unwrap_or(defaults.demo_password),
            data_dir: lookup("TRAVEL_DATA_DIR").map(PathBuf::from),
        })
    }
}
