//! Configuration module
//!
//! Handles CLI configuration including the server URL and session token.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the Kuuni server
    pub api_url: String,
    /// Admin session token, when already logged in
    pub token: Option<String>,
}
