//! Method-discriminated request dispatch.
//!
//! The service exposes a single surface: POST (any path) runs the
//! verify-then-sign flow, every other method renders an HTML page. Dispatch
//! therefore lives in a fallback handler rather than per-path routes.

pub mod pages;
pub mod sign;

use crate::config::Config;
use crate::error::AppError;
use crate::turnstile::TurnstileVerifier;
use axum::{
    extract::{Request, State},
    http::Method,
    response::Response,
    Router,
};
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub verifier: TurnstileVerifier,
}

/// Build the router. Every request lands in [`dispatch`].
pub fn router() -> Router<AppState> {
    Router::new().fallback(dispatch)
}

async fn dispatch(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, AppError> {
    if request.method() == Method::POST {
        sign::issue_signature(&state, request).await
    } else {
        pages::serve_page(&state, &request)
    }
}
