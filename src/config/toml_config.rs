use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{LogFormat, Settings};
use crate::utils::error::{Result, ServiceError};

static ENV_VAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Optional configuration file. Every table and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerConfig>,
    pub logging: Option<LoggingConfig>,
    pub data: Option<DataConfig>,
    pub limits: Option<LimitsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub listen_address: Option<String>,
    pub listen_port: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    pub counties_file_path: Option<String>,
    pub postal_codes_file_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub max_batch_size: Option<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ServiceError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(server) = &self.server {
            if let Some(address) = &server.listen_address {
                settings.listen_address = address.clone();
            }
            if let Some(port) = server.listen_port {
                settings.listen_port = port;
            }
        }

        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                settings.log_level = level.clone();
            }
            if let Some(format) = logging.format {
                settings.log_format = format;
            }
        }

        if let Some(data) = &self.data {
            if let Some(path) = &data.counties_file_path {
                settings.counties_file_path = path.clone();
            }
            if let Some(path) = &data.postal_codes_file_path {
                settings.postal_codes_file_path = path.clone();
            }
        }

        if let Some(limits) = &self.limits {
            if let Some(size) = limits.max_batch_size {
                settings.max_batch_size = size;
            }
        }
    }
}
