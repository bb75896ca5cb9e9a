use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestDataError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Download from {url} failed with HTTP status {status}")]
    DownloadStatus { url: String, status: u16 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid BSN candidate '{value}': {reason}")]
    InvalidInput { value: String, reason: String },

    #[error("No valid BSN generated after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Configuration,
    Data,
    Generation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TestDataError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::DownloadStatus { .. } => ErrorCategory::Network,
            Self::IoError(_) => ErrorCategory::Io,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::CsvError(_) | Self::InvalidInput { .. } | Self::ProcessingError { .. } => {
                ErrorCategory::Data
            }
            Self::GenerationExhausted { .. } => ErrorCategory::Generation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Generation | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ApiError(_) => "Check the network connection and the download endpoint",
            Self::DownloadStatus { .. } => "The sample data service may be unavailable, retry later",
            Self::CsvError(_) => "Inspect the downloaded CSV for malformed rows",
            Self::IoError(_) => "Check that the root directory exists and is writable",
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => "Fix the configuration file or command line flags",
            Self::InvalidInput { .. } => "Provide exactly 9 digits, or fewer to be zero-padded",
            Self::GenerationExhausted { .. } => "Raise --max-attempts or check the random source",
            Self::ProcessingError { .. } => "Rerun with --verbose for more details",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not download sample data: {}", self),
            ErrorCategory::Io => format!("Could not write files: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Data => format!("Invalid data: {}", self),
            ErrorCategory::Generation => format!("Generation failed: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, TestDataError>;
