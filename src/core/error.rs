//! Error types for the logging framework

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Malformed logger name rejected at the boundary
    #[error("Invalid logger name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Sink-side delivery error
    #[error("Sink error: {0}")]
    SinkError(String),
}

impl LoggerError {
    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        LoggerError::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a sink error
    pub fn sink<S: Into<String>>(msg: S) -> Self {
        LoggerError::SinkError(msg.into())
    }
}
