use thiserror::Error;

/// Errors produced when constructing or validating foundation types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// Message text was empty or contained only whitespace.
    #[error("message must not be empty")]
    EmptyMessage,
}

/// Result alias for type-level operations.
pub type TypeResult<T> = Result<T, TypeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TypeError::EmptyMessage.to_string(),
            "message must not be empty"
        );
    }
}
