use axum::http::StatusCode;
use axum::response::IntoResponse;

use labkit_core::DomainError;

/// Map a domain failure to its HTTP response.
///
/// The detail stays in the logs; the client gets the fixed message for the
/// error kind.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound(detail) => {
            tracing::warn!(%detail, "not found");
            text_error(StatusCode::NOT_FOUND, "Item not found")
        }
        DomainError::InvalidArgument(detail) => {
            tracing::warn!(%detail, "invalid argument");
            text_error(StatusCode::BAD_REQUEST, "Invalid price value")
        }
    }
}

/// Plain-text error body: the message followed by a newline.
pub fn text_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    let mut body = message.into();
    body.push('\n');
    (status, body).into_response()
}
