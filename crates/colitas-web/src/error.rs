//! Error types for the web layer.
//!
//! [`WebError`] unifies all request-time failure modes into a single enum
//! that converts into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use colitas_directory::QueryError;
use tracing::error;

use crate::render::RenderError;

/// Errors that can occur while handling a request.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// The requested record was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A path parameter is not a well-formed identifier.
    #[error("invalid request: {0}")]
    InvalidQuery(#[from] QueryError),

    /// A page template failed to render.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// A serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::InvalidQuery(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::Render(e) => {
                error!(error = %e, "Page render failed");
                (StatusCode::INTERNAL_SERVER_ERROR, String::from("render error"))
            }
            Self::Serialization(e) => {
                error!(error = %e, "Response serialization failed");
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
