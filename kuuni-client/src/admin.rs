//! Admin session API endpoints

use crate::KuuniClient;
use crate::error::{ClientError, Result};
use kuuni_core::dto::admin::{LoginRequest, LoginResponse, VerifyResponse};

impl KuuniClient {
    // =============================================================================
    // Admin Session
    // =============================================================================

    /// Log in with the admin credentials
    ///
    /// On success the response carries a session token; store it with
    /// [`KuuniClient::set_token`] to replay it on subsequent requests.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let url = format!("{}/api/admin/login", self.base_url);
        let req = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self.client.post(&url).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// Verify the stored session token
    ///
    /// # Errors
    /// Returns `InvalidRequest` when no token has been stored, or the API's
    /// 401 when the token is missing, invalid, or expired server-side.
    pub async fn verify(&self) -> Result<VerifyResponse> {
        if self.token.is_none() {
            return Err(ClientError::InvalidRequest(
                "No session token set; call login first".to_string(),
            ));
        }

        let url = format!("{}/api/admin/verify", self.base_url);
        let response = self.with_auth(self.client.get(&url)).send().await?;

        self.handle_response(response).await
    }
}
