//! Opaque session tokens.
//!
//! A token is a random UUID v4 string handed to the client at login. The
//! server keeps only its SHA-256 hash, mapped to the user id, so a dump of
//! the session table does not expose usable tokens. Tokens carry no claims;
//! identity is resolved by table lookup.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Default session lifetime in seconds.
const DEFAULT_SESSION_TTL_SECS: i64 = 3600;

/// Longest accepted session lifetime: ten years.
pub const MAX_SESSION_TTL_SECS: i64 = 10 * 365 * 24 * 60 * 60;

/// Default minimum password length.
const DEFAULT_MIN_PASSWORD_LENGTH: usize = 1;

/// Session and credential settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Session lifetime in seconds (default: 3600).
    pub ttl_secs: i64,
    /// Minimum accepted password length at registration (default: 1).
    pub min_password_length: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_SESSION_TTL_SECS,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var               | Default |
    /// |-----------------------|---------|
    /// | `SESSION_TTL_SECS`    | `3600`  |
    /// | `MIN_PASSWORD_LENGTH` | `1`     |
    ///
    /// # Panics
    ///
    /// Panics if a variable is set but not a valid number, or if the TTL is
    /// outside `1..=MAX_SESSION_TTL_SECS`.
    pub fn from_env() -> Self {
        let ttl_secs: i64 = std::env::var("SESSION_TTL_SECS")
            .unwrap_or_else(|_| DEFAULT_SESSION_TTL_SECS.to_string())
            .parse()
            .expect("SESSION_TTL_SECS must be a valid i64");
        let ttl_secs = check_session_ttl(ttl_secs).unwrap_or_else(|e| panic!("{e}"));

        let min_password_length: usize = std::env::var("MIN_PASSWORD_LENGTH")
            .unwrap_or_else(|_| DEFAULT_MIN_PASSWORD_LENGTH.to_string())
            .parse()
            .expect("MIN_PASSWORD_LENGTH must be a valid usize");

        Self {
            ttl_secs,
            min_password_length,
        }
    }
}

/// Accept a session lifetime only if it is positive and at most
/// [`MAX_SESSION_TTL_SECS`].
pub fn check_session_ttl(ttl_secs: i64) -> Result<i64, String> {
    if !(1..=MAX_SESSION_TTL_SECS).contains(&ttl_secs) {
        return Err(format!(
            "SESSION_TTL_SECS must be between 1 and {MAX_SESSION_TTL_SECS}, got {ttl_secs}"
        ));
    }
    Ok(ttl_secs)
}

/// Generate a random session token.
///
/// Returns a tuple of `(plaintext_token, sha256_hex_hash)`. The plaintext is
/// sent to the client; only the hash should be kept server-side.
pub fn generate_session_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a session token.
///
/// Use this to look up an incoming bearer token.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
