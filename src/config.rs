use std::env;
use std::net::SocketAddr;

/// Default Cloudflare Turnstile verification endpoint.
pub const DEFAULT_VERIFY_URL: &str = "https://challenges.cloudflare.com/turnstile/v0/siteverify";

#[derive(Clone)]
pub struct Config {
    // Signing keys
    pub public_signing_key: String,
    pub private_signing_key: String,

    // Turnstile
    pub turnstile_site_key: String,
    pub turnstile_secret_key: String,
    pub verify_url: String,
    pub verify_timeout_secs: u64,

    // Server
    pub bind_addr: SocketAddr,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("public_signing_key", &self.public_signing_key)
            .field("private_signing_key", &"[REDACTED]")
            .field("turnstile_site_key", &self.turnstile_site_key)
            .field("turnstile_secret_key", &"[REDACTED]")
            .field("verify_url", &self.verify_url)
            .field("verify_timeout_secs", &self.verify_timeout_secs)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),

    #[error("Failed to parse {0}: {1}")]
    ParseError(String, String),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Attempt to load .env file, but don't fail if it doesn't exist
        // (env vars may be set directly in production)
        let _ = dotenvy::dotenv();

        let public_signing_key = require_var("PUBLIC_SIGNING_KEY")?;
        let private_signing_key = require_var("PRIVATE_SIGNING_KEY")?;
        let turnstile_site_key = require_var("CF_TURNSTILE_SITE_KEY")?;
        let turnstile_secret_key = require_var("CF_TURNSTILE_SECRET_KEY")?;

        // Validate the private key imports at startup so corrupt material is
        // caught at deploy time, not on the first signing request. The
        // per-request import in the signer remains the authoritative gate.
        crate::signing::NonceSigner::from_pem(&private_signing_key).map_err(|e| {
            ConfigError::InvalidValue("PRIVATE_SIGNING_KEY".to_string(), e.to_string())
        })?;

        // Turnstile verification endpoint, overridable for testing
        let verify_url =
            env::var("TURNSTILE_VERIFY_URL").unwrap_or_else(|_| DEFAULT_VERIFY_URL.to_string());

        let verify_timeout_secs = parse_env_or_default("VERIFY_TIMEOUT_SECS", 10)?;

        // Server
        let bind_addr_str = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_addr = bind_addr_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::ParseError("BIND_ADDR".to_string(), e.to_string()))?;

        Ok(Config {
            public_signing_key,
            private_signing_key,
            turnstile_site_key,
            turnstile_secret_key,
            verify_url,
            verify_timeout_secs,
            bind_addr,
        })
    }
}

/// Fetch a required, non-empty environment variable.
fn require_var(key: &str) -> Result<String, ConfigError> {
    let value = env::var(key).map_err(|_| ConfigError::MissingVar(key.to_string()))?;
    if value.is_empty() {
        return Err(ConfigError::InvalidValue(
            key.to_string(),
            "cannot be empty".to_string(),
        ));
    }
    Ok(value)
}

/// Helper function to parse environment variable with a default value
fn parse_env_or_default<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| ConfigError::ParseError(key.to_string(), format!("{}: {}", e, val))),
        Err(_) => Ok(default),
    }
}
