// API configuration - built once at startup and passed explicitly into the loader

use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.congress.gov/v3";
pub const API_KEY_VAR: &str = "CONGRESS_API_KEY";
pub const BASE_URL_VAR: &str = "CONGRESS_API_BASE_URL";

/// Settings for talking to the legislative-data API.
///
/// Construct with [`ApiConfig::new`] or [`ApiConfig::from_env`], then call
/// [`ApiConfig::validate`] before handing it to a loader. A config that fails
/// validation never reaches the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub base_url: String,
    /// Members requested per page
    pub page_limit: u32,
    /// Upper bound on `pagination.next` hops per chamber
    pub max_pages: u32,
    pub timeout_secs: u64,
    /// How long a fetched roster stays valid in the cache
    pub cache_ttl_secs: i64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            page_limit: 250,
            max_pages: 5,
            timeout_secs: 30,
            cache_ttl_secs: 600,
        }
    }
}

impl ApiConfig {
    pub fn new(api_key: Option<String>) -> Self {
        ApiConfig {
            api_key,
            ..Default::default()
        }
    }

    /// Read `CONGRESS_API_KEY` and `CONGRESS_API_BASE_URL` from the process environment
    pub fn from_env() -> Self {
        let mut config = ApiConfig::new(env::var(API_KEY_VAR).ok());
        if let Ok(base_url) = env::var(BASE_URL_VAR) {
            config.base_url = base_url;
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit;
        self
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_cache_ttl_secs(mut self, secs: i64) -> Self {
        self.cache_ttl_secs = secs;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.api_key()?;

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ChartError::Configuration(format!(
                "Invalid API base URL '{}': must start with http:// or https://",
                self.base_url
            )));
        }

        if self.page_limit == 0 || self.max_pages == 0 {
            return Err(ChartError::Configuration(
                "page limit and max pages must both be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// The credential, or a configuration error if it is absent or blank
    pub fn api_key(&self) -> Result<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ChartError::missing_api_key()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.cache_ttl_secs)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_fails_validation() {
        let config = ApiConfig::new(None);
        assert!(matches!(config.validate(), Err(ChartError::Configuration(_))));
    }

    #[test]
    fn test_blank_key_fails_validation() {
        let config = ApiConfig::new(Some("   ".to_string()));
        assert!(matches!(config.validate(), Err(ChartError::Configuration(_))));
    }

    #[test]
    fn test_valid_config() {
        let config = ApiConfig::new(Some("abc123".to_string()));
        assert!(config.validate().is_ok());
        assert_eq!(config.api_key().unwrap(), "abc123");
    }

    #[test]
    fn test_bad_base_url() {
        let config = ApiConfig::new(Some("k".to_string())).with_base_url("ftp://example");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ftp://example"));
    }

    #[test]
    fn test_zero_page_limit_rejected() {
        let config = ApiConfig::new(Some("k".to_string())).with_page_limit(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_endpoint_joins_slashes() {
        let config = ApiConfig::default().with_base_url("http://localhost:1234/v3/");
        assert_eq!(config.endpoint("/member"), "http://localhost:1234/v3/member");
    }
}
