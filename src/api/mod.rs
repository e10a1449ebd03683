//! REST API implementation.

pub mod errors;
pub mod routes;
pub mod state;

pub use errors::{ProxyError, ProxyResult};
pub use state::ApiState;
