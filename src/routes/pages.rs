//! Non-POST — HTML page rendering.

use crate::error::AppError;
use crate::routes::AppState;
use axum::{
    extract::Request,
    http::header,
    response::{Html, IntoResponse, Response},
};

/// Render the page selected by the request path.
///
/// The serving origin is derived from the request: `x-forwarded-proto` when
/// present (the usual reverse-proxy deployment), `http` otherwise, plus the
/// `Host` header.
pub fn serve_page(state: &AppState, request: &Request) -> Result<Response, AppError> {
    let headers = request.headers();

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("Missing Host header".to_string()))?;

    let origin = format!("{}://{}", scheme, host);

    let html = crate::pages::render(
        request.uri().path(),
        &state.config.public_signing_key,
        &state.config.turnstile_site_key,
        &origin,
    );

    Ok(Html(html).into_response())
}
