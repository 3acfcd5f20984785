use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgeError {
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AgeError {
    pub fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            AgeError::InvalidDate { input, .. } => format!("無法解析日期: {}", input),
            AgeError::MissingField { field } => format!("缺少必要欄位: {}", field),
            AgeError::ConfigError { message } => format!("配置錯誤: {}", message),
            AgeError::InvalidConfigValueError { field, reason, .. } => {
                format!("配置值無效 ({}): {}", field, reason)
            }
            AgeError::IoError(e) => format!("檔案讀寫失敗: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AgeError::InvalidDate { .. } => "Use an ISO 8601 date such as 2000-06-15",
            AgeError::MissingField { .. } => "Send a JSON body with the required date fields",
            AgeError::ConfigError { .. } | AgeError::InvalidConfigValueError { .. } => {
                "Check the TOML file and command line flags"
            }
            AgeError::IoError(_) => "Make sure the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, AgeError>;
