use clap::Parser;

use crate::config::toml_config::TomlConfig;
use crate::config::{LogFormat, Settings, SettingsOverrides};
use crate::utils::error::Result;

#[derive(Debug, Clone, Parser)]
#[command(name = "phone-zip-api")]
#[command(about = "Phone number validation and zip code region lookup service")]
pub struct ServerArgs {
    /// Optional TOML configuration file
    #[arg(long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    #[arg(long, env = "LISTEN_ADDRESS")]
    pub listen_address: Option<String>,

    #[arg(long, env = "LISTEN_PORT")]
    pub listen_port: Option<u16>,

    /// DEBUG, INFO, WARNING, ERROR or CRITICAL
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// compact or json
    #[arg(long, env = "LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    #[arg(long, env = "COUNTIES_FILE_PATH")]
    pub counties_file_path: Option<String>,

    #[arg(long, env = "POSTAL_CODES_FILE_PATH")]
    pub postal_codes_file_path: Option<String>,

    #[arg(long, env = "MAX_BATCH_SIZE")]
    pub max_batch_size: Option<usize>,
}

impl ServerArgs {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            listen_address: self.listen_address.clone(),
            listen_port: self.listen_port,
            log_level: self.log_level.clone(),
            log_format: self.log_format,
            counties_file_path: self.counties_file_path.clone(),
            postal_codes_file_path: self.postal_codes_file_path.clone(),
            max_batch_size: self.max_batch_size,
        }
    }

    /// 讀取設定檔（若有指定）並套用命令列 / 環境變數覆蓋
    pub fn into_settings(self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };
        Ok(Settings::resolve(self.overrides(), file.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_become_overrides() {
        let args = ServerArgs::try_parse_from([
            "phone-zip-api",
            "--listen-port",
            "9999",
            "--log-format",
            "json",
            "--max-batch-size",
            "10",
        ])
        .unwrap();

        let overrides = args.overrides();
        assert_eq!(overrides.listen_port, Some(9999));
        assert_eq!(overrides.log_format, Some(LogFormat::Json));
        assert_eq!(overrides.max_batch_size, Some(10));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(ServerArgs::try_parse_from(["phone-zip-api", "--listen-port", "70000"]).is_err());
    }
}
