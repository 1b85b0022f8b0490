//! Kuuni HTTP Client
//!
//! A simple, type-safe HTTP client for communicating with the Kuuni server API.
//!
//! This crate provides a unified interface for the CLI and any other Rust
//! consumer to interact with the server, eliminating code duplication and
//! ensuring consistency.
//!
//! # Example
//!
//! ```no_run
//! use kuuni_client::KuuniClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut client = KuuniClient::new("http://localhost:8080");
//!
//!     // Log in and keep the session token for later calls
//!     let session = client.login("admin", "kuuni2024").await?;
//!     client.set_token(session.token);
//!
//!     let bookings = client.list_bookings(None).await?;
//!     println!("{} booking request(s)", bookings.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod admin;
mod bookings;
mod experiences;
mod news;
mod reviews;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// HTTP client for the Kuuni server API
///
/// This client provides methods for all server endpoints, organized into
/// logical groups:
/// - Experience management (create, list, get, update, delete)
/// - Booking intake and handling (create, list, status updates)
/// - Review intake and moderation
/// - News article management
/// - Admin session (login, verify)
#[derive(Debug, Clone)]
pub struct KuuniClient {
    /// Base URL of the server (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Admin session token, replayed as a bearer header when set
    token: Option<String>,
}

impl KuuniClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the server API (e.g., "http://localhost:8080")
    ///
    /// # Example
    /// ```
    /// use kuuni_client::KuuniClient;
    ///
    /// let client = KuuniClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            token: None,
        }
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the server API
    /// * `client` - A configured reqwest Client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            token: None,
        }
    }

    /// Get the base URL of the server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Store an admin session token for subsequent requests
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Get the stored session token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    // =============================================================================
    // Request / Response Handlers
    // =============================================================================

    /// Attach the stored session token as a bearer header, when present
    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::debug!("API request failed ({}): {}", status, error_text);
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response that returns no content (e.g., DELETE operations)
    ///
    /// This method checks the status code and returns an error if the request failed.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::debug!("API request failed ({}): {}", status, error_text);
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = KuuniClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert!(client.token().is_none());
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = KuuniClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_stores_token() {
        let mut client = KuuniClient::new("http://localhost:8080");
        client.set_token("abc123");
        assert_eq!(client.token(), Some("abc123"));
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = KuuniClient::with_client("http://localhost:8080", http_client);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
