use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use menagerie_protocol::ErrorResponse;
use menagerie_service::ServiceError;

/// Errors from running the server itself, as opposed to refusing a request.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// A refused request, ready to render as an HTTP response.
///
/// The mapping onto status codes is fixed: gate denials answer 401, missing
/// creatures 404, and everything the caller could fix 400. Every body is the
/// uniform [`ErrorResponse`] shape.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The core refused the operation.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The multipart body could not be decoded.
    #[error("malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Service(ServiceError::Unauthorized(_)) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            ApiError::Service(ServiceError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Creature not found".to_string())
            }
            ApiError::Service(ServiceError::Validation(reason)) => {
                (StatusCode::BAD_REQUEST, reason)
            }
            ApiError::Multipart(_) => {
                (StatusCode::BAD_REQUEST, "Malformed multipart body".to_string())
            }
        };
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
