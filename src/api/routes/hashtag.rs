//! Hashtag lookup proxy.
//!
//! Forwards a hashtag lookup to the scraping API and relays its raw body:
//! - missing `hashtag` parameter: 400, no outbound call
//! - missing API key: 500, no outbound call
//! - upstream non-2xx or transport failure: 500
//! - otherwise the upstream status and content type, body wrapped as `{"data": ...}`

use axum::{
    extract::{Query, State},
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::api::errors::{ProxyError, ProxyResult};
use crate::api::ApiState;
use crate::upstream_client::UpstreamReply;

/// Content type used when the upstream sends none
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Query pairs in request order. Parsing into pairs never rejects a query
/// string, so malformed or repeated parameters still reach the handler.
pub type QueryPairs = Vec<(String, String)>;

/// First `hashtag` value of the query, like `URLSearchParams::get`.
pub fn first_hashtag(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(name, _)| name == "hashtag")
        .map(|(_, value)| value.as_str())
}

/// Success envelope; `data` is the upstream body verbatim.
#[derive(Debug, Serialize)]
pub struct DataEnvelope<'a> {
    pub data: &'a str,
}

/// Run one lookup. Every branch resolves to either the relayed upstream
/// reply or a [`ProxyError`].
pub async fn lookup_hashtag(state: &ApiState, hashtag: Option<&str>) -> ProxyResult<UpstreamReply> {
    let hashtag = match hashtag.filter(|h| !h.is_empty()) {
        Some(h) => h,
        None => {
            warn!("No hashtag provided");
            return Err(ProxyError::MissingParameter);
        }
    };

    let api_key = match state.config.api_key() {
        Some(k) => k,
        None => {
            error!("RapidAPI key not found");
            return Err(ProxyError::MissingConfiguration);
        }
    };

    state.upstream.fetch_hashtag(api_key, hashtag).await
}

/// Turn a successful upstream reply into the relayed response.
pub fn relay(reply: &UpstreamReply) -> ProxyResult<Response> {
    let status = StatusCode::from_u16(reply.status)
        .map_err(|e| ProxyError::UpstreamRequest(e.to_string()))?;

    let content_type = reply
        .content_type
        .as_deref()
        .and_then(|ct| HeaderValue::from_str(ct).ok())
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));

    let body = serde_json::to_vec(&DataEnvelope { data: &reply.body })
        .map_err(|e| ProxyError::UpstreamRequest(e.to_string()))?;

    Ok((status, [(CONTENT_TYPE, content_type)], body).into_response())
}

/// GET /api/instagram/hashtag?hashtag=<tag>
pub async fn get_hashtag(
    State(state): State<Arc<ApiState>>,
    Query(pairs): Query<QueryPairs>,
) -> Response {
    let hashtag = first_hashtag(&pairs);
    info!("Received request for hashtag: {:?}", hashtag);

    let result = lookup_hashtag(&state, hashtag)
        .await
        .and_then(|reply| relay(&reply));

    match result {
        Ok(response) => response,
        Err(e) => {
            if e.status_code().is_server_error() {
                error!("Error in Instagram API route: {}", e);
            }
            e.into_response()
        }
    }
}
