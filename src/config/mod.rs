#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::toml_config::TomlConfig;
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_range, Validate,
};

pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_LISTEN_PORT: u16 = 10847;
pub const DEFAULT_LOG_LEVEL: &str = "INFO";
pub const DEFAULT_COUNTIES_FILE_PATH: &str = "./data/counties.json";
pub const DEFAULT_POSTAL_CODES_FILE_PATH: &str = "./data/zipcodes.csv";
pub const DEFAULT_MAX_BATCH_SIZE: usize = 1000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(ServiceError::InvalidConfigValueError {
                field: "logging.format".to_string(),
                value: other.to_string(),
                reason: "Supported formats: compact, json".to_string(),
            }),
        }
    }
}

/// Fully resolved service settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub listen_address: String,
    pub listen_port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub counties_file_path: String,
    pub postal_codes_file_path: String,
    pub max_batch_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listen_address: DEFAULT_LISTEN_ADDRESS.to_string(),
            listen_port: DEFAULT_LISTEN_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::default(),
            counties_file_path: DEFAULT_COUNTIES_FILE_PATH.to_string(),
            postal_codes_file_path: DEFAULT_POSTAL_CODES_FILE_PATH.to_string(),
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }
}

/// Values given on the command line or through the environment. `None` means
/// "not set here", so the config file or the default applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub listen_address: Option<String>,
    pub listen_port: Option<u16>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
    pub counties_file_path: Option<String>,
    pub postal_codes_file_path: Option<String>,
    pub max_batch_size: Option<usize>,
}

impl Settings {
    /// 優先順序：命令列 / 環境變數 > 設定檔 > 預設值
    pub fn resolve(overrides: SettingsOverrides, file: Option<&TomlConfig>) -> Self {
        let mut settings = Settings::default();

        if let Some(file) = file {
            file.apply_to(&mut settings);
        }

        if let Some(value) = overrides.listen_address {
            settings.listen_address = value;
        }
        if let Some(value) = overrides.listen_port {
            settings.listen_port = value;
        }
        if let Some(value) = overrides.log_level {
            settings.log_level = value;
        }
        if let Some(value) = overrides.log_format {
            settings.log_format = value;
        }
        if let Some(value) = overrides.counties_file_path {
            settings.counties_file_path = value;
        }
        if let Some(value) = overrides.postal_codes_file_path {
            settings.postal_codes_file_path = value;
        }
        if let Some(value) = overrides.max_batch_size {
            settings.max_batch_size = value;
        }

        settings
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.listen_address, self.listen_port)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.listen_address", &self.listen_address)?;
        validate_range("server.listen_port", self.listen_port, 1, u16::MAX)?;
        validate_path("data.counties_file_path", &self.counties_file_path)?;
        validate_path("data.postal_codes_file_path", &self.postal_codes_file_path)?;
        validate_positive_number("limits.max_batch_size", self.max_batch_size, 1)?;
        Ok(())
    }
}
