use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate bike id: {id}")]
    DuplicateBikeId { id: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::TomlParseError(_)
            | AppError::UrlError(_)
            | AppError::ConfigError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AppError::SerializationError(_) | AppError::DuplicateBikeId { .. } => {
                ErrorCategory::Data
            }
            AppError::IoError(_) | AppError::ServerError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::System => match self {
                AppError::IoError(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
                    ErrorSeverity::Medium
                }
                _ => ErrorSeverity::Critical,
            },
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AppError::TomlParseError(_) => {
                "Check the config file for TOML syntax errors".to_string()
            }
            AppError::UrlError(_) => {
                "Use an absolute http(s) URL such as https://book.oahu.bike".to_string()
            }
            AppError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file or CLI flags", field)
            }
            AppError::ConfigError { .. } => "Review the configuration file".to_string(),
            AppError::DuplicateBikeId { id } => {
                format!("Remove or renumber the duplicate [[bikes]] entry with id '{}'", id)
            }
            AppError::SerializationError(_) => "Check the bike fixture data".to_string(),
            AppError::IoError(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
                "Pick another --bind address or stop the process holding the port".to_string()
            }
            AppError::IoError(_) => "Check file paths and permissions".to_string(),
            AppError::ServerError { .. } => "Restart the server".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Data => format!("Bike data problem: {}", self),
            ErrorCategory::System => format!("System problem: {}", self),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = AppError::InvalidConfigValueError {
            field: "booking.base_url".to_string(),
            value: "ftp://x".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.recovery_suggestion().contains("booking.base_url"));
    }

    #[test]
    fn test_addr_in_use_is_retryable() {
        let err = AppError::from(std::io::Error::from(std::io::ErrorKind::AddrInUse));
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_duplicate_id_message() {
        let err = AppError::DuplicateBikeId { id: "3".to_string() };
        assert!(err.user_friendly_message().starts_with("Bike data problem"));
        assert_eq!(err.to_string(), "Duplicate bike id: 3");
    }
}
