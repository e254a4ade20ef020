use thiserror::Error;

#[derive(Error, Debug)]
pub enum LunchError {
    #[error("{message}")]
    ValidationError { message: String },

    #[error("{message}")]
    ConfigurationError { message: String },

    #[error("{message}")]
    DataError { message: String },

    #[error("File not found: {path}")]
    NotFoundError { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, LunchError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LunchError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    pub fn data(message: impl Into<String>) -> Self {
        Self::DataError {
            message: message.into(),
        }
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFoundError { path: path.into() }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::ConfigurationError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::DataError { .. } | Self::NotFoundError { .. } | Self::SerializationError(_) => {
                ErrorCategory::Data
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Errors caused by the caller's input or call order rather than by the
    /// data source or the host. The HTTP boundary maps these to 400.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::ValidationError { .. } | Self::ConfigurationError { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ValidationError { .. } => {
                "Check that dates use the YYYY-MM-DD format and every record has its required fields"
            }
            Self::ConfigurationError { .. } => {
                "Load both ingredients and recipes and assemble lunches before querying"
            }
            Self::DataError { .. } | Self::SerializationError(_) => {
                "Check that the catalog files are valid JSON with the expected top-level keys"
            }
            Self::NotFoundError { .. } => "Check the data directory and catalog file names",
            Self::IoError(_) => "Check file permissions and available disk space",
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Review the configuration file and CLI arguments",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Validation => format!("Invalid input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Data => format!("Could not read catalog data: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_display_bare_message() {
        let err = LunchError::validation("title missing");
        assert_eq!(err.to_string(), "title missing");

        let err = LunchError::configuration("Recipes required to assemble lunches");
        assert_eq!(err.to_string(), "Recipes required to assemble lunches");
    }

    #[test]
    fn client_errors_are_validation_and_configuration() {
        assert!(LunchError::validation("x").is_client_error());
        assert!(LunchError::configuration("x").is_client_error());
        assert!(!LunchError::data("x").is_client_error());
        assert!(!LunchError::not_found("x.json").is_client_error());
    }

    #[test]
    fn severity_follows_category() {
        assert_eq!(LunchError::validation("x").severity(), ErrorSeverity::Medium);
        assert_eq!(LunchError::data("x").severity(), ErrorSeverity::High);
        let io = LunchError::from(std::io::Error::other("disk"));
        assert_eq!(io.category(), ErrorCategory::System);
        assert_eq!(io.severity(), ErrorSeverity::Critical);
    }
}
