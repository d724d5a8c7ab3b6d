use menagerie_types::{CreatureId, TypeError};

/// Errors from store operations.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A submitted value failed type-level validation.
    #[error("invalid input: {0}")]
    Invalid(#[from] TypeError),

    /// No creature exists under the given identifier.
    #[error("creature not found: {0}")]
    CreatureNotFound(CreatureId),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
