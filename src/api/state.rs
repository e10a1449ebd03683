//! API state and configuration.
//!
//! Contains the shared state used across all API endpoints. It is built once
//! at startup and never mutated, so handlers share it through an `Arc`.

use std::sync::Arc;

use crate::config::ProxyConfig;
use crate::dashboard::{ForwardedSession, SessionProvider};
use crate::upstream_client::UpstreamClient;

pub struct ApiState {
    pub config: ProxyConfig,
    pub upstream: UpstreamClient,
    pub session: Arc<dyn SessionProvider>,
}

impl ApiState {
    pub fn new(config: ProxyConfig) -> Self {
        Self::with_session(config, Arc::new(ForwardedSession))
    }

    /// Build state with a custom session collaborator
    pub fn with_session(config: ProxyConfig, session: Arc<dyn SessionProvider>) -> Self {
        let upstream = UpstreamClient::new(&config);
        Self {
            config,
            upstream,
            session,
        }
    }
}
