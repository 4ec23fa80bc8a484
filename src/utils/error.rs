use thiserror::Error;

/// 啟動、配置與資料載入階段的錯誤
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Dataset error: {message}")]
    DatasetError { message: String },

    #[error("County '{county}' is mapped to both '{existing}' and '{conflicting}'")]
    ConflictingCountyMapping {
        county: String,
        existing: String,
        conflicting: String,
    },
}

impl ServiceError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ServiceError::IoError(_) => "Check that the data files exist and are readable",
            ServiceError::CsvError(_) => {
                "Check the postal code CSV header: zip_code,city,county,state,latitude,longitude,area_codes"
            }
            ServiceError::SerializationError(_) => {
                "Check that the county map is a flat JSON object of county -> region"
            }
            ServiceError::TomlError(_) => "Check the configuration file for TOML syntax errors",
            ServiceError::ConfigError { .. } | ServiceError::InvalidConfigValueError { .. } => {
                "Review the configuration file, environment variables and CLI flags"
            }
            ServiceError::DatasetError { .. } => "Regenerate the postal code dataset",
            ServiceError::ConflictingCountyMapping { .. } => {
                "Each county must belong to exactly one region; fix the mapping file"
            }
        }
    }
}

/// 郵遞區號查詢失敗的原因
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("invalid zip code '{code}'")]
    InvalidFormat { code: String },

    #[error("zip code '{code}' not found")]
    NotFound { code: String },

    #[error("zip code '{code}' matches {matches} dataset records")]
    AmbiguousRecord { code: String, matches: usize },
}

/// 請求內容不符合預期格式
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("{message}")]
    BadRequest { message: String },
}

impl RequestError {
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        RequestError::BadRequest {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
