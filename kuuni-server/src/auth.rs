//! Admin session tokens
//!
//! Opaque token issued on login and replayed by the admin UI: a JSON payload
//! joined to the shared secret with a `.` separator, base64-encoded. There is
//! no signature and no tamper protection. Functionally this is a capability
//! flag, not a security boundary.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Tokens expire 24 hours after issue
const TOKEN_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Static admin credentials and token secret, environment-configurable
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
    pub secret: String,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "kuuni2024".to_string()),
            secret: std::env::var("AUTH_SECRET")
                .unwrap_or_else(|_| "kuuni-secret-key-change-in-production".to_string()),
        }
    }
}

/// Token verification failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Not base64, not valid JSON, or wrong secret suffix
    Invalid,
    /// Well-formed but past its expiry timestamp
    Expired,
}

#[derive(Debug, Serialize, Deserialize)]
struct TokenPayload {
    username: String,
    /// Expiry as unix milliseconds
    exp: i64,
}

/// Issue a session token for the given username
pub fn issue_token(username: &str, secret: &str) -> String {
    let payload = TokenPayload {
        username: username.to_string(),
        exp: chrono::Utc::now().timestamp_millis() + TOKEN_TTL_MS,
    };

    let json = serde_json::to_string(&payload).unwrap();
    STANDARD.encode(format!("{}.{}", json, secret))
}

/// Verify a session token and return the username it was issued for
pub fn verify_token(token: &str, secret: &str) -> Result<String, TokenError> {
    let decoded = STANDARD.decode(token).map_err(|_| TokenError::Invalid)?;
    let decoded = String::from_utf8(decoded).map_err(|_| TokenError::Invalid)?;

    let payload_str = decoded
        .strip_suffix(&format!(".{}", secret))
        .ok_or(TokenError::Invalid)?;

    let payload: TokenPayload =
        serde_json::from_str(payload_str).map_err(|_| TokenError::Invalid)?;

    if payload.exp < chrono::Utc::now().timestamp_millis() {
        return Err(TokenError::Expired);
    }

    Ok(payload.username)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_token_round_trip() {
        let token = issue_token("admin", SECRET);
        let username = verify_token(&token, SECRET).unwrap();
        assert_eq!(username, "admin");
    }

    #[test]
    fn test_expired_token_rejected() {
        let payload = TokenPayload {
            username: "admin".to_string(),
            exp: chrono::Utc::now().timestamp_millis() - 1000,
        };
        let json = serde_json::to_string(&payload).unwrap();
        let token = STANDARD.encode(format!("{}.{}", json, SECRET));

        assert_eq!(verify_token(&token, SECRET), Err(TokenError::Expired));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue_token("admin", "other-secret");
        assert_eq!(verify_token(&token, SECRET), Err(TokenError::Invalid));
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert_eq!(verify_token("not base64!!", SECRET), Err(TokenError::Invalid));

        let not_json = STANDARD.encode(format!("hello.{}", SECRET));
        assert_eq!(verify_token(&not_json, SECRET), Err(TokenError::Invalid));
    }
}
