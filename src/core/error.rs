/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Provider name not known to the selector
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// Transaction processing errors
    #[error("Processing error: {0}")]
    Processing(String),

    /// Transaction logging errors
    #[error("Logging error: {0}")]
    Logging(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn unsupported_provider(name: impl Into<String>) -> Self {
        AppError::UnsupportedProvider(name.into())
    }

    pub fn processing(msg: impl Into<String>) -> Self {
        AppError::Processing(msg.into())
    }

    pub fn logging(msg: impl Into<String>) -> Self {
        AppError::Logging(msg.into())
    }
}
