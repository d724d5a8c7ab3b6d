use thiserror::Error;

use menagerie_gate::GateError;
use menagerie_store::StoreError;
use menagerie_types::CreatureId;

/// Errors surfaced by resource-service operations.
///
/// All three are expected, local, and non-fatal: they describe why a single
/// request was refused, never a broken service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The access gate denied the request.
    #[error("unauthorized: {0}")]
    Unauthorized(#[from] GateError),

    /// A required field was empty or absent.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No creature exists under the given identifier.
    #[error("creature not found: {0}")]
    NotFound(CreatureId),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Invalid(e) => ServiceError::Validation(e.to_string()),
            StoreError::CreatureNotFound(id) => ServiceError::NotFound(id),
        }
    }
}

/// Result alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
