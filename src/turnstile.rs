//! Turnstile challenge verification.
//!
//! One outbound call per request to the siteverify endpoint, no retries: the
//! verifier is a synchronous pass/fail gate, not a resilient subsystem. A
//! transport or decoding failure is surfaced as
//! [`AppError::VerificationUnavailable`] and is distinct from the authority
//! explicitly answering `success: false`.

use crate::error::AppError;
use crate::models::TurnstileOutcome;
use std::time::Duration;

/// Client for the external verification authority.
#[derive(Clone)]
pub struct TurnstileVerifier {
    client: reqwest::Client,
    verify_url: String,
    secret_key: String,
}

impl TurnstileVerifier {
    /// Build a verifier with a bounded request timeout. An unbounded hang on
    /// the siteverify call would block the whole request indefinitely.
    pub fn new(
        verify_url: &str,
        secret_key: &str,
        timeout_secs: u64,
    ) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(TurnstileVerifier {
            client,
            verify_url: verify_url.to_string(),
            secret_key: secret_key.to_string(),
        })
    }

    /// Submit a challenge token to the verification authority.
    ///
    /// The token is opaque to this service; no local validation of its shape
    /// is performed. The authority's answer is interpreted solely through its
    /// boolean `success` field.
    pub async fn verify(&self, token: &str) -> Result<TurnstileOutcome, AppError> {
        let response = self
            .client
            .post(&self.verify_url)
            .form(&[
                ("secret", self.secret_key.as_str()),
                ("response", token),
            ])
            .send()
            .await?;

        let outcome: TurnstileOutcome = response.json().await.map_err(|e| {
            AppError::VerificationUnavailable(format!(
                "Malformed verification response: {}",
                e
            ))
        })?;

        if !outcome.success {
            tracing::warn!(
                action = "challenge_rejected",
                error_codes = ?outcome.error_codes,
                "Turnstile rejected challenge token"
            );
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::post, Router};

    /// Spawn a stub siteverify endpoint answering with a fixed body.
    async fn spawn_stub(body: &'static str) -> String {
        let app = Router::new().route("/siteverify", post(move || async move { body }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/siteverify", addr)
    }

    #[tokio::test]
    async fn test_verify_accepted() {
        let url = spawn_stub(r#"{"success":true}"#).await;
        let verifier = TurnstileVerifier::new(&url, "test-secret", 5).unwrap();

        let outcome = verifier.verify("tok123").await.unwrap();
        assert!(outcome.success);
    }

    #[tokio::test]
    async fn test_verify_rejected() {
        let url = spawn_stub(r#"{"success":false,"error-codes":["invalid-input-response"]}"#).await;
        let verifier = TurnstileVerifier::new(&url, "test-secret", 5).unwrap();

        let outcome = verifier.verify("bad-token").await.unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.error_codes, vec!["invalid-input-response"]);
    }

    #[tokio::test]
    async fn test_verify_malformed_response() {
        let url = spawn_stub("this is not json").await;
        let verifier = TurnstileVerifier::new(&url, "test-secret", 5).unwrap();

        let result = verifier.verify("tok123").await;
        assert!(matches!(
            result.unwrap_err(),
            AppError::VerificationUnavailable(_)
        ));
    }

    #[tokio::test]
    async fn test_verify_unreachable_authority() {
        // Bind a listener to reserve a port, then drop it so nothing answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{}/siteverify", addr);
        let verifier = TurnstileVerifier::new(&url, "test-secret", 1).unwrap();

        let result = verifier.verify("tok123").await;
        assert!(matches!(
            result.unwrap_err(),
            AppError::VerificationUnavailable(_)
        ));
    }
}
