/// Errors produced when the access gate denies a request.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum GateError {
    /// No credential accompanied the request.
    #[error("missing credential")]
    MissingCredential,

    /// The presented credential does not match the configured key.
    #[error("invalid credential")]
    InvalidCredential,
}
