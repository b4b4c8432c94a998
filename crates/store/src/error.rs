use chromactl_core::Error as CoreError;
use thiserror::Error;

/// Store-specific error types
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    #[error("Request rejected by store: {0}")]
    RequestRejected(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ConnectionFailed(msg) => CoreError::connection(msg),
            StoreError::CollectionNotFound(msg) => CoreError::not_found(msg),
            StoreError::InvalidConfig(msg) => CoreError::config(msg),
            StoreError::RequestRejected(msg)
            | StoreError::BackendError(msg)
            | StoreError::SerializationError(msg) => CoreError::store(msg),
        }
    }
}
