//! Error types for the HTTP transport.
//!
//! [`ApiError`] unifies the transport's failure modes into a single
//! enum that converts into an HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Note
//! that engine operations themselves never fail; everything here is a
//! boundary concern (malformed bodies, serialization).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur in the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be interpreted as an action request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Serialization(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("JSON error: {e}"))
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
