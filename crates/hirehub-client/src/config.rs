//! Client configuration.

use std::time::Duration;

/// Configuration for the HireHub API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin, no trailing slash
    pub base_url: String,
    /// Request timeout
    pub request_timeout: Duration,
    /// Account that is always granted the admin role at login
    pub admin_email: String,
    /// Google Maps key; reverse geocoding is disabled when unset
    pub maps_api_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            request_timeout: Duration::from_secs(30),
            admin_email: "admin@hirehub.com".to_string(),
            maps_api_key: None,
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("HIREHUB_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            request_timeout: Duration::from_secs(
                std::env::var("HIREHUB_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            admin_email: std::env::var("HIREHUB_ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@hirehub.com".to_string()),
            maps_api_key: std::env::var("HIREHUB_MAPS_API_KEY").ok(),
        }
    }

    /// Override the backend origin; trailing slashes are stripped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url: String = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }
}
