use thiserror::Error;

#[derive(Error, Debug)]
pub enum FizzBuzzError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 使用者可修正的錯誤 (設定、參數)
    High,
    /// 系統層級錯誤 (IO、序列化)
    Critical,
}

impl FizzBuzzError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FizzBuzzError::ConfigValidationError { .. }
            | FizzBuzzError::InvalidConfigValueError { .. }
            | FizzBuzzError::ProcessingError { .. } => ErrorSeverity::High,
            FizzBuzzError::IoError(_)
            | FizzBuzzError::SerializationError(_)
            | FizzBuzzError::CsvError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FizzBuzzError::IoError(e) => format!("Could not write output: {}", e),
            FizzBuzzError::SerializationError(_) | FizzBuzzError::CsvError(_) => {
                "Could not render the sequence".to_string()
            }
            FizzBuzzError::ConfigValidationError { field, message } => {
                format!("Configuration problem with '{}': {}", field, message)
            }
            FizzBuzzError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            FizzBuzzError::ProcessingError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FizzBuzzError::IoError(_) => "Check that the output path is writable",
            FizzBuzzError::SerializationError(_) | FizzBuzzError::CsvError(_) => {
                "Try a different --format"
            }
            FizzBuzzError::ConfigValidationError { .. } => {
                "Check the configuration file against the documented [range]/[output] tables"
            }
            FizzBuzzError::InvalidConfigValueError { .. } => {
                "Make sure start <= end and the range is not too large"
            }
            FizzBuzzError::ProcessingError { .. } => "This is a bug, please report it",
        }
    }
}

pub type Result<T> = std::result::Result<T, FizzBuzzError>;
