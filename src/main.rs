//! Signgate application entry point.
//!
//! Bootstraps the server:
//! 1. Load configuration from environment
//! 2. Build the Turnstile verifier
//! 3. Build the method-dispatching router
//! 4. Apply security headers middleware
//! 5. Start Axum server

use signgate::{
    config::Config, middleware::security_headers, routes, routes::AppState,
    turnstile::TurnstileVerifier,
};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Initialize tracing with env filter support (RUST_LOG)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load config from environment. This also validates that the configured
    // private key imports, so corrupt material is caught at startup.
    let config = Config::from_env().expect("Failed to load config");
    tracing::info!("Starting signgate on {}", config.bind_addr);

    let verifier = TurnstileVerifier::new(
        &config.verify_url,
        &config.turnstile_secret_key,
        config.verify_timeout_secs,
    )
    .expect("Failed to build Turnstile verifier");

    // Build shared state
    let state = AppState {
        config: Arc::new(config.clone()),
        verifier,
    };

    let app = routes::router()
        .layer(axum::middleware::from_fn(security_headers))
        .with_state(state);

    // Bind to configured address
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind");
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
