// Environment-driven configuration for the directory backend connection

use std::env;

/// Default backend address, matching the local development server
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001";

/// Fallback user id until real authentication exists upstream
pub const DEFAULT_USER_ID: &str = "demo-user-123";

/// Connection settings for the directory backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the directory backend
    pub base_url: String,
    /// User id sent with saved-tool and history requests
    pub user_id: String,
}

impl ApiConfig {
    /// Read configuration from `FINAI_API_BASE_URL` and `FINAI_USER_ID`,
    /// falling back to the development defaults.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("FINAI_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            user_id: env::var("FINAI_USER_ID").unwrap_or_else(|_| DEFAULT_USER_ID.to_string()),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
        }
    }
}
