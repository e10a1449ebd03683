//! Upstream client for the Instagram scraping API
//!
//! Issues the single outbound request behind a hashtag lookup:
//! ```text
//! GET {base_url}/v1/hashtag?hashtag=<percent-encoded>
//!     x-rapidapi-key:  <key>
//!     x-rapidapi-host: instagram-scraper-api2.p.rapidapi.com
//! ```
//!
//! The response body is read as raw text and never parsed. There is no
//! retry and no timeout beyond the client defaults.

use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::api::errors::{ProxyError, ProxyResult};
use crate::config::{ProxyConfig, RAPIDAPI_HOST};

/// Path of the hashtag lookup on the upstream host
pub const HASHTAG_PATH: &str = "/v1/hashtag";

/// Header carrying the RapidAPI credential
pub const API_KEY_HEADER: &str = "x-rapidapi-key";

/// Header naming the RapidAPI target host
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Successful upstream reply, relayed as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

/// Escapes `urlencoding` emits for characters a URI component keeps literal.
const COMPONENT_SAFE_ESCAPES: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encode a query value like `encodeURIComponent`: everything but
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped.
pub fn encode_component(value: &str) -> String {
    // every '%' in the output starts an escape, so these matches are aligned
    COMPONENT_SAFE_ESCAPES
        .iter()
        .fold(urlencoding::encode(value).into_owned(), |acc, &(escape, literal)| {
            acc.replace(escape, literal)
        })
}

pub struct UpstreamClient {
    base_url: String,
    client: reqwest::Client,
}

impl UpstreamClient {
    pub fn new(config: &ProxyConfig) -> Self {
        Self {
            base_url: config.upstream_base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Outbound URL for `hashtag`, with the value percent-encoded.
    pub fn hashtag_url(&self, hashtag: &str) -> String {
        format!(
            "{}{}?hashtag={}",
            self.base_url,
            HASHTAG_PATH,
            encode_component(hashtag)
        )
    }

    /// Look up `hashtag` upstream.
    ///
    /// Any non-2xx status becomes [`ProxyError::UpstreamStatus`]; transport
    /// and body-read failures become [`ProxyError::UpstreamRequest`].
    pub async fn fetch_hashtag(&self, api_key: &str, hashtag: &str) -> ProxyResult<UpstreamReply> {
        let url = self.hashtag_url(hashtag);
        debug!("Fetching from RapidAPI: {}", url);

        let resp = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .header(API_HOST_HEADER, RAPIDAPI_HOST)
            .send()
            .await?;

        let status = resp.status();
        debug!("RapidAPI response status: {}", status);

        if !status.is_success() {
            return Err(ProxyError::UpstreamStatus(status.as_u16()));
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = resp.text().await?;
        debug!("RapidAPI raw response: {} bytes", body.len());

        Ok(UpstreamReply {
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(base_url: &str) -> UpstreamClient {
        UpstreamClient::new(&ProxyConfig::default().with_upstream_base_url(base_url))
    }

    #[test]
    fn test_hashtag_url_default_host() {
        let client = UpstreamClient::new(&ProxyConfig::default());
        assert_eq!(
            client.hashtag_url("travel"),
            "https://instagram-scraper-api2.p.rapidapi.com/v1/hashtag?hashtag=travel"
        );
    }

    #[test]
    fn test_hashtag_url_encodes_spaces_and_symbols() {
        let client = client_for("http://localhost:8080/");
        assert_eq!(
            client.hashtag_url("summer vibes&more#1"),
            "http://localhost:8080/v1/hashtag?hashtag=summer%20vibes%26more%231"
        );
        assert_eq!(
            client.hashtag_url("wow!(a)*b'"),
            "http://localhost:8080/v1/hashtag?hashtag=wow!(a)*b'"
        );
        assert_eq!(
            client.hashtag_url("100% ~real~"),
            "http://localhost:8080/v1/hashtag?hashtag=100%25%20~real~"
        );
        assert_eq!(
            client.hashtag_url("café"),
            "http://localhost:8080/v1/hashtag?hashtag=caf%C3%A9"
        );
    }

    #[tokio::test]
    async fn test_fetch_sends_credentials() {
        let server = MockServer::start_async().await;

        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/hashtag")
                    .query_param("hashtag", "travel")
                    .header("x-rapidapi-key", "test-key")
                    .header("x-rapidapi-host", RAPIDAPI_HOST);
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"posts":[]}"#);
            })
            .await;

        let reply = client_for(&server.base_url())
            .fetch_hashtag("test-key", "travel")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(reply.status, 200);
        assert_eq!(reply.content_type.as_deref(), Some("application/json"));
        assert_eq!(reply.body, r#"{"posts":[]}"#);
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let server = MockServer::start_async().await;

        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/hashtag");
                then.status(403).body("forbidden");
            })
            .await;

        let err = client_for(&server.base_url())
            .fetch_hashtag("bad-key", "travel")
            .await
            .unwrap_err();

        assert_eq!(err, ProxyError::UpstreamStatus(403));
    }

    #[tokio::test]
    async fn test_fetch_connection_error() {
        let err = client_for("http://127.0.0.1:65534")
            .fetch_hashtag("test-key", "travel")
            .await
            .unwrap_err();

        assert!(matches!(err, ProxyError::UpstreamRequest(ref msg) if !msg.is_empty()));
    }
}
