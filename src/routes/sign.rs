//! POST — the verify-then-sign flow.

use crate::error::AppError;
use crate::models::SignRequest;
use crate::routes::AppState;
use crate::signing::NonceSigner;
use axum::{
    extract::Request,
    http::header,
    response::{IntoResponse, Response},
};

/// Request bodies carry a challenge token and a nonce, nothing larger.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Gate a signing request on challenge verification, then sign the nonce.
///
/// A signature is produced if and only if the verification authority accepted
/// the challenge token in this same request. The signature bytes are the
/// entire response body: no envelope, no base64.
pub async fn issue_signature(state: &AppState, request: Request) -> Result<Response, AppError> {
    let body = axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {}", e)))?;

    let req: SignRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?;

    // Key material is imported per request, before the verification call:
    // corrupt material fails every POST with a server error rather than ever
    // producing a garbage signature.
    let signer = NonceSigner::from_pem(&state.config.private_signing_key)?;

    // Gate: sign only on explicit acceptance
    let outcome = state.verifier.verify(&req.turnstile_response).await?;
    if !outcome.success {
        return Err(AppError::ChallengeRejected);
    }
    let signature = signer.sign(&req.sha_nonce)?;

    tracing::info!(
        action = "signature_issued",
        nonce_len = req.sha_nonce.len(),
        signature_len = signature.len(),
        "Issued signature for verified challenge"
    );

    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        signature,
    )
        .into_response())
}
