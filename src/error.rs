use thiserror::Error;

pub type Result<T> = std::result::Result<T, MeteoError>;

#[derive(Error, Debug)]
pub enum MeteoError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Tool already registered: {name}")]
    DuplicateTool { name: String },

    #[error("Tool not found: {name}")]
    ToolNotFound { name: String },
}

impl MeteoError {
    pub fn api_error(msg: impl Into<String>) -> Self {
        MeteoError::ApiError(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        MeteoError::ConfigError(msg.into())
    }

    pub fn validation_error(msg: impl Into<String>) -> Self {
        MeteoError::ValidationError(msg.into())
    }

    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        MeteoError::InvalidArguments(msg.into())
    }

    /// True for failures caused by the caller's input rather than the upstream.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            MeteoError::ValidationError(_) | MeteoError::InvalidArguments(_)
        )
    }
}
