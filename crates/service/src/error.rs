//! Typed error enum for the service layer.

use sample_crud_storage::StorageError;
use thiserror::Error;

/// Service-layer error wrapping storage failures and missing entities.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (connection, query, migration).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Requested entity does not exist.
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            Self::NotFound { .. } => false,
        }
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
