//! Error types for the log bridge

pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Exporter already shut down
    #[error("Exporter '{exporter}' already shut down")]
    ExporterShutdown { exporter: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl BridgeError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        BridgeError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        BridgeError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn exporter_shutdown(exporter: impl Into<String>) -> Self {
        BridgeError::ExporterShutdown {
            exporter: exporter.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        BridgeError::Other(msg.into())
    }
}
