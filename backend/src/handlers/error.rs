use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use tracing::error;

use crate::schema::response::StatusMessage;
use crate::store::StoreError;

/// Messages reported when a handler faults unexpectedly.
pub const WEBHOOK_FAULT: &str = "Error processing webhook";
pub const DELETE_FAULT: &str = "Error deleting data";
pub const INTERNAL_FAULT: &str = "Internal server error";

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let msg = match err {
            StoreError::InvalidArgument(_) => {
                "Invalid indices. Both fromIndex and toIndex must be integers."
            }
            StoreError::OutOfRange { .. } => "Indices out of range.",
            StoreError::InvalidRange { .. } => {
                "fromIndex should be less than or equal to toIndex."
            }
        };
        ApiError::BadRequest(msg.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(StatusMessage::failed(msg))).into_response()
            }

            ApiError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusMessage::failed(msg)),
            )
                .into_response(),
        }
    }
}

/// Builds a `CatchPanicLayer` handler that reports a panicking handler as a
/// 500 carrying `message`, leaving the process and the store running.
pub fn panic_response(
    message: &'static str,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone {
    move |panic: Box<dyn Any + Send + 'static>| {
        let detail = panic
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        error!(panic = %detail, "Handler panicked: {}", message);
        ApiError::InternalServerError(message.to_string()).into_response()
    }
}
