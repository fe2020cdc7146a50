use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoxError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid input for {field}: '{token}' is not an integer")]
    InputFormatError { field: String, token: String },

    #[error("Missing input for {field}: input ended before a value was read")]
    MissingInputError { field: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BoxError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BoxError::InputFormatError { .. } | BoxError::MissingInputError { .. } => {
                ErrorCategory::Input
            }
            BoxError::ConfigError { .. }
            | BoxError::ConfigValidationError { .. }
            | BoxError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            BoxError::SerializationError(_) | BoxError::CsvError(_) => ErrorCategory::Output,
            BoxError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BoxError::InputFormatError { field, .. } => {
                format!("Enter a whole number for {}, e.g. 10", field)
            }
            BoxError::MissingInputError { .. } => {
                "Provide three whole numbers: height, width, length".to_string()
            }
            BoxError::ConfigError { .. } | BoxError::ConfigValidationError { .. } => {
                "Check that the config file exists and is valid TOML".to_string()
            }
            BoxError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file or on the command line", field)
            }
            BoxError::SerializationError(_) | BoxError::CsvError(_) => {
                "Try a different output format with --format".to_string()
            }
            BoxError::IoError(_) => "Check that stdin and stdout are available".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BoxError::InputFormatError { field, token } => {
                format!("Could not read {}: '{}' is not a whole number", field, token)
            }
            BoxError::MissingInputError { field } => {
                format!("No value was entered for {}", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoxError>;
