use std::fs;

use config as config_rs;
use serde::Deserialize;
use thiserror::Error;

use crate::analyzer::DEFAULT_IC_THRESHOLD;

/// Shift applied when the caller picks the shift scheme without a value.
pub const DEFAULT_SHIFT: i32 = 3;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_shift")]
    pub default_shift: i32,
    #[serde(default = "default_ic_threshold")]
    pub ic_threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_shift: DEFAULT_SHIFT,
            ic_threshold: DEFAULT_IC_THRESHOLD,
        }
    }
}

fn default_shift() -> i32 {
    DEFAULT_SHIFT
}

fn default_ic_threshold() -> f64 {
    DEFAULT_IC_THRESHOLD
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(#[from] config_rs::ConfigError),
}

/// Loads settings from an optional JSON file, then layers overrides:
/// environment variables, then CLI flags take precedence.
pub fn load_settings(
    path: Option<&str>,
    shift_flag: Option<i32>,
    threshold_flag: Option<f64>,
) -> Result<Settings, ConfigError> {
    let file_settings: Settings = match path {
        Some(p) => {
            let content = fs::read_to_string(p)?;
            serde_json::from_str(&content)?
        }
        None => Settings::default(),
    };

    let mut builder = config_rs::Config::builder()
        .set_default("default_shift", i64::from(file_settings.default_shift))?
        .set_default("ic_threshold", file_settings.ic_threshold)?;

    if let Ok(shift) = std::env::var("CIPHER_DEFAULT_SHIFT") {
        builder = builder.set_override("default_shift", shift)?;
    }
    if let Ok(threshold) = std::env::var("CIPHER_IC_THRESHOLD") {
        builder = builder.set_override("ic_threshold", threshold)?;
    }

    // CLI flags take precedence
    if let Some(shift) = shift_flag {
        builder = builder.set_override("default_shift", i64::from(shift))?;
    }
    if let Some(threshold) = threshold_flag {
        builder = builder.set_override("ic_threshold", threshold)?;
    }

    let cfg = builder.build()?;

    Ok(Settings {
        default_shift: cfg.get::<i32>("default_shift")?,
        ic_threshold: cfg.get::<f64>("ic_threshold")?,
    })
}
