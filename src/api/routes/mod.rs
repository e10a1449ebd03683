//! API route handlers.
//!
//! Each submodule handles a specific group of endpoints:
//! - `hashtag`: Instagram hashtag lookup proxy
//! - `dashboard`: Dashboard view model

pub mod dashboard;
pub mod hashtag;

pub use dashboard::get_dashboard;
pub use hashtag::{first_hashtag, get_hashtag, lookup_hashtag, relay, QueryPairs};
