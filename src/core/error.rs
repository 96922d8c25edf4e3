//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// No token of a level string matched a known severity
    #[error("unknown level: {0}")]
    UnknownLevel(String),

    /// A level value with no canonical bit set has no text form
    #[error("not a valid logger level {0}")]
    InvalidLevel(u32),

    /// Lookup of a backend name that was never registered
    #[error("unknown logger: {0}")]
    UnknownBackend(String),

    /// The requested level cannot be expressed in a backend's own severity scale
    #[error("unknown logger level for {backend}: {level}")]
    UnmappableLevel { backend: String, level: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create an unknown level error for the given input text
    pub fn unknown_level(text: impl Into<String>) -> Self {
        LoggerError::UnknownLevel(text.into())
    }

    /// Create an unknown backend error
    pub fn unknown_backend(name: impl Into<String>) -> Self {
        LoggerError::UnknownBackend(name.into())
    }

    /// Create an unmappable level error
    pub fn unmappable_level(backend: impl Into<String>, level: impl Into<String>) -> Self {
        LoggerError::UnmappableLevel {
            backend: backend.into(),
            level: level.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}
