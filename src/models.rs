//! Request and response models for the API.
//!
//! All of these are transient and request-scoped; nothing is persisted.

use serde::Deserialize;

/// POST body: a challenge token plus the nonce to sign.
///
/// Field names are fixed by the widget-side client contract.
#[derive(Debug, Clone, Deserialize)]
pub struct SignRequest {
    /// Opaque token produced by the Turnstile widget.
    #[serde(rename = "cf-turnstile-response")]
    pub turnstile_response: String,

    /// Caller-supplied string to sign.
    #[serde(rename = "shaNonce")]
    pub sha_nonce: String,
}

/// Answer from the Turnstile siteverify endpoint.
///
/// The real endpoint returns richer diagnostics (hostname, challenge
/// timestamp, action); only `success` is load-bearing here. `error-codes`
/// is kept for logging.
#[derive(Debug, Clone, Deserialize)]
pub struct TurnstileOutcome {
    pub success: bool,

    #[serde(rename = "error-codes", default)]
    pub error_codes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_request_field_names() {
        let req: SignRequest = serde_json::from_str(
            r#"{"cf-turnstile-response":"tok123","shaNonce":"abc"}"#,
        )
        .unwrap();
        assert_eq!(req.turnstile_response, "tok123");
        assert_eq!(req.sha_nonce, "abc");
    }

    #[test]
    fn test_sign_request_rejects_missing_fields() {
        assert!(serde_json::from_str::<SignRequest>(r#"{"shaNonce":"abc"}"#).is_err());
        assert!(
            serde_json::from_str::<SignRequest>(r#"{"cf-turnstile-response":"tok"}"#).is_err()
        );
    }

    #[test]
    fn test_outcome_ignores_extra_fields() {
        let outcome: TurnstileOutcome = serde_json::from_str(
            r#"{"success":true,"challenge_ts":"2024-01-01T00:00:00Z","hostname":"example.com"}"#,
        )
        .unwrap();
        assert!(outcome.success);
        assert!(outcome.error_codes.is_empty());
    }

    #[test]
    fn test_outcome_error_codes() {
        let outcome: TurnstileOutcome = serde_json::from_str(
            r#"{"success":false,"error-codes":["invalid-input-response"]}"#,
        )
        .unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.error_codes, vec!["invalid-input-response"]);
    }
}
