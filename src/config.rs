use crate::model::{ConfigError, DEFAULT_CAPACITY};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub prices_path: String,
    pub report_path: String,
    pub max_points: usize,
    pub max_growth_years: i64,
    pub currency: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prices_path: "prices.txt".into(),
            report_path: "report.txt".into(),
            max_points: DEFAULT_CAPACITY,
            max_growth_years: 10_000,
            currency: "PKR".into(),
            log_level: "warn".into(),
        }
    }
}

impl AppConfig {
    fn validate(self) -> Result<Self, ConfigError> {
        if self.max_points == 0 {
            return Err(ConfigError::Invalid("max_points must be at least 1".into()));
        }
        if self.max_growth_years < 0 {
            return Err(ConfigError::Invalid("max_growth_years must not be negative".into()));
        }
        Ok(self)
    }
}

/// Loads the config file. Returns `Ok(None)` if the file does not exist.
pub fn load_config(path: impl AsRef<Path>) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let config: AppConfig = serde_json::from_str(&content)?;
    config.validate().map(Some)
}
