//! Admin API Handlers
//!
//! HTTP endpoints for the admin session check.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header},
};
use kuuni_core::dto::admin::{LoginRequest, LoginResponse, VerifyResponse};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::admin_service;

/// POST /api/admin/login
/// Check credentials and issue a session token
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let token = admin_service::login(&state.auth, &req).map_err(|e| match e {
        admin_service::AdminError::InvalidCredentials => {
            ApiError::Unauthorized("Identifiants incorrects".to_string())
        }
        admin_service::AdminError::InvalidToken => {
            ApiError::Unauthorized("Token invalide".to_string())
        }
        admin_service::AdminError::ExpiredToken => {
            ApiError::Unauthorized("Token expiré".to_string())
        }
    })?;

    Ok(Json(LoginResponse {
        success: true,
        token,
        message: "Connexion réussie".to_string(),
    }))
}

/// GET /api/admin/verify
/// Verify the bearer token replayed by the admin UI
pub async fn verify(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<VerifyResponse>> {
    let token = bearer_token(&headers)
        .ok_or_else(|| ApiError::Unauthorized("Token manquant".to_string()))?;

    let username = admin_service::verify(&state.auth, token).map_err(|e| match e {
        admin_service::AdminError::ExpiredToken => {
            ApiError::Unauthorized("Token expiré".to_string())
        }
        admin_service::AdminError::InvalidToken => {
            ApiError::Unauthorized("Token invalide".to_string())
        }
        admin_service::AdminError::InvalidCredentials => {
            ApiError::Unauthorized("Identifiants incorrects".to_string())
        }
    })?;

    Ok(Json(VerifyResponse {
        success: true,
        username,
    }))
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc123"),
        );

        assert_eq!(bearer_token(&headers), Some("abc123"));
    }

    #[test]
    fn test_missing_or_malformed_header() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("abc123"));
        assert_eq!(bearer_token(&headers), None);
    }
}
