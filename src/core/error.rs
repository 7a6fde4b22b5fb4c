use thiserror::Error;

/// Error types for the DevOrbit client
#[derive(Error, Debug)]
pub enum DevOrbitError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Interactive command errors
    #[error("Command failed: {0}")]
    CommandError(String),
}

impl From<serde_json::Error> for DevOrbitError {
    fn from(err: serde_json::Error) -> Self {
        DevOrbitError::SerializationError(err.to_string())
    }
}
