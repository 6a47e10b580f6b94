use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use devmatch_core::ErrorBody;

/// Error response produced by the server itself rather than by a handler.
///
/// Serializes as `{"message": "<reason phrase>"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
}

impl ApiError {
    pub fn new(status: StatusCode) -> Self {
        Self { status }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self
            .status
            .canonical_reason()
            .unwrap_or("Unknown Error")
            .to_string();
        (self.status, Json(ErrorBody { message })).into_response()
    }
}

/// Turn a caught handler panic into a 500 response.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "handler panicked");

    ApiError::internal().into_response()
}
