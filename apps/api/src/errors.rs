use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::contact::relay::RelayError;
use crate::contact::validation::ContactFieldError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Completion failures never appear here: the chat service always recovers
/// them with the local responder.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Contact form invalid: {0}")]
    ContactField(#[from] ContactFieldError),

    #[error("Contact relay failed: {0}")]
    Relay(#[from] RelayError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ContactField(e) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                e.to_string(),
            ),
            AppError::Relay(RelayError::Unconfigured) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "RELAY_UNAVAILABLE",
                RelayError::Unconfigured.user_message().to_string(),
            ),
            AppError::Relay(e) => {
                tracing::error!("Contact relay error: {e:?}");
                (
                    StatusCode::BAD_GATEWAY,
                    "RELAY_ERROR",
                    e.user_message().to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
