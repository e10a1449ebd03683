//! Proxy Configuration
//!
//! Runtime settings for the hashtag proxy:
//! - Listen address
//! - RapidAPI credential (optional, checked per request)
//! - Upstream base URL (overridable for local testing)

use serde::{Deserialize, Serialize};

/// Host of the third-party scraping API, sent as `x-rapidapi-host`.
pub const RAPIDAPI_HOST: &str = "instagram-scraper-api2.p.rapidapi.com";

/// Default base URL of the scraping API.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://instagram-scraper-api2.p.rapidapi.com";

/// Complete proxy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// RapidAPI key; `None` makes every lookup fail with a configuration error
    #[serde(skip_serializing)]
    pub rapidapi_key: Option<String>,
    /// Base URL the hashtag path is appended to
    pub upstream_base_url: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            rapidapi_key: None,
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
        }
    }
}

impl ProxyConfig {
    /// Set the RapidAPI key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.rapidapi_key = Some(key.into());
        self
    }

    /// Point lookups at a different upstream base URL
    pub fn with_upstream_base_url(mut self, url: impl Into<String>) -> Self {
        self.upstream_base_url = url.into();
        self
    }

    /// The API key, treating an empty value as missing.
    pub fn api_key(&self) -> Option<&str> {
        self.rapidapi_key.as_deref().filter(|k| !k.is_empty())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
