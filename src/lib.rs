//! Instagram growth dashboard backend
//!
//! A small HTTP service that proxies hashtag lookups to a third-party
//! scraping API and serves the dashboard view model.
//!
//! ## Module Structure
//!
//! - `config`: Listen address, RapidAPI credential, upstream base URL
//! - `upstream_client`: Outbound hashtag request to the scraping API
//! - `api`: REST handlers, shared state and error envelope
//! - `dashboard`: Tool catalogue and session-aware header
//! - `server`: Router assembly and startup

/// Runtime configuration
pub mod config;

/// Outbound client for the scraping API
pub mod upstream_client;

/// REST API
pub mod api;

/// Dashboard view model
pub mod dashboard;

/// HTTP server
pub mod server;

pub use api::{ApiState, ProxyError, ProxyResult};
pub use config::ProxyConfig;
pub use dashboard::{DashboardView, ForwardedSession, SessionProvider, SessionUser};
pub use server::{build_router, run_server};
pub use upstream_client::{UpstreamClient, UpstreamReply};
