//! Admin Service
//!
//! Business logic for the admin session check.

use kuuni_core::dto::admin::LoginRequest;

use crate::auth::{self, AuthConfig, TokenError};

/// Service error type
#[derive(Debug, PartialEq, Eq)]
pub enum AdminError {
    InvalidCredentials,
    InvalidToken,
    ExpiredToken,
}

pub type Result<T> = std::result::Result<T, AdminError>;

/// Check the submitted credentials and issue a session token
pub fn login(config: &AuthConfig, req: &LoginRequest) -> Result<String> {
    if req.username == config.username && req.password == config.password {
        let token = auth::issue_token(&req.username, &config.secret);

        tracing::info!("Admin login: {}", req.username);

        return Ok(token);
    }

    tracing::warn!("Failed admin login attempt for: {}", req.username);

    Err(AdminError::InvalidCredentials)
}

/// Verify a replayed session token and return the username it carries
pub fn verify(config: &AuthConfig, token: &str) -> Result<String> {
    match auth::verify_token(token, &config.secret) {
        Ok(username) => Ok(username),
        Err(TokenError::Expired) => Err(AdminError::ExpiredToken),
        Err(TokenError::Invalid) => Err(AdminError::InvalidToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            username: "admin".to_string(),
            password: "kuuni2024".to_string(),
            secret: "test-secret".to_string(),
        }
    }

    #[test]
    fn test_login_with_valid_credentials() {
        let config = test_config();
        let req = LoginRequest {
            username: "admin".to_string(),
            password: "kuuni2024".to_string(),
        };

        let token = login(&config, &req).unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_login_with_wrong_password() {
        let config = test_config();
        let req = LoginRequest {
            username: "admin".to_string(),
            password: "nope".to_string(),
        };

        assert_eq!(login(&config, &req), Err(AdminError::InvalidCredentials));
    }

    #[test]
    fn test_verify_issued_token() {
        let config = test_config();
        let req = LoginRequest {
            username: "admin".to_string(),
            password: "kuuni2024".to_string(),
        };

        let token = login(&config, &req).unwrap();
        let username = verify(&config, &token).unwrap();
        assert_eq!(username, "admin");
    }

    #[test]
    fn test_verify_rejects_foreign_token() {
        let config = test_config();
        let other = AuthConfig {
            secret: "another-secret".to_string(),
            ..test_config()
        };

        let token = auth::issue_token("admin", &other.secret);
        assert_eq!(verify(&config, &token), Err(AdminError::InvalidToken));
    }
}
