//! Error types for tasklab.

use thiserror::Error;

/// Result type for tasklab operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for tasklab operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A task type was not found in the registry.
    #[error("Unknown task type: {0}")]
    UnknownTask(String),

    /// A schema or descriptor was malformed.
    #[error("Schema error: {0}")]
    Schema(String),

    /// A task type was registered twice.
    #[error("Duplicate task registration: {0}")]
    DuplicateTask(String),

    /// A processor was invoked without a configured output builder.
    #[error("Processor not configured: {0}")]
    NotConfigured(String),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create an unknown-task error.
    pub fn unknown_task(task: impl Into<String>) -> Self {
        Error::UnknownTask(task.into())
    }

    /// Create a schema error.
    pub fn schema(msg: impl Into<String>) -> Self {
        Error::Schema(msg.into())
    }

    /// Create a duplicate-registration error.
    pub fn duplicate_task(task: impl Into<String>) -> Self {
        Error::DuplicateTask(task.into())
    }

    /// Create a processor-not-configured error.
    pub fn not_configured(msg: impl Into<String>) -> Self {
        Error::NotConfigured(msg.into())
    }
}
