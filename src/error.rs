//! Error types and Axum response conversions.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application error types.
///
/// The taxonomy separates the challenge authority explicitly rejecting a
/// token (a client problem, 400) from the verification call itself failing
/// (a server-side problem, 502): a transport error is not proof the client
/// is a bot.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Challenge rejected")]
    ChallengeRejected,

    #[error("Verification unavailable: {0}")]
    VerificationUnavailable(String),

    #[error("Key material error: {0}")]
    KeyMaterial(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            // Explicit rejection is a bare 400: no body, matching what gated
            // clients expect.
            AppError::ChallengeRejected => {
                return StatusCode::BAD_REQUEST.into_response();
            }
            AppError::VerificationUnavailable(msg) => {
                // Log detailed error server-side, return generic message to client
                tracing::error!(error = %msg, "Challenge verification unavailable");
                (
                    StatusCode::BAD_GATEWAY,
                    "Challenge verification unavailable".to_string(),
                )
            }
            AppError::KeyMaterial(msg) => {
                tracing::error!(error = %msg, "Signing key material error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Signing(msg) => {
                tracing::error!(error = %msg, "Signing failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// Convenience conversions from common error types
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::VerificationUnavailable(format!("Verification request failed: {}", err))
    }
}
