//! Gateway configuration.
//!
//! Read from environment variables; the share surface carries no config
//! files of its own.

use sharegen_core::error::{Result, SharegenError};
use std::env;

const DEFAULT_BASE_URL: &str = "http://localhost:5001/api";

/// Connection settings for the HTTP Remote Gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// API base URL, without a trailing slash.
    pub base_url: String,
    /// Bearer token for the share-surface scope, when the deployment
    /// requires one.
    pub access_token: Option<String>,
}

impl GatewayConfig {
    /// Creates a config from explicit parts, normalizing the base URL.
    pub fn new(base_url: impl Into<String>, access_token: Option<String>) -> Result<Self> {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(SharegenError::config("gateway base URL must not be empty"));
        }
        Ok(Self {
            base_url,
            access_token,
        })
    }

    /// Loads configuration from environment variables.
    ///
    /// `SHAREGEN_API_URL` overrides the base URL (defaults to a local API);
    /// `SHAREGEN_ACCESS_TOKEN` supplies the optional bearer token.
    pub fn try_from_env() -> Result<Self> {
        let base_url =
            env::var("SHAREGEN_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let access_token = env::var("SHAREGEN_ACCESS_TOKEN").ok();
        Self::new(base_url, access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_normalized() {
        let config = GatewayConfig::new("https://api.example.com/v1/", None).unwrap();
        assert_eq!(config.base_url, "https://api.example.com/v1");
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        assert!(GatewayConfig::new("", None).is_err());
        assert!(GatewayConfig::new("/", None).is_err());
    }
}
