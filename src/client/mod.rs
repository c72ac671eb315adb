//! HTTP client for the remote index server.
//!
//! One method per endpoint, JSON bodies deserialized into the
//! [`index`](crate::index) wire types. Transport failures collapse into the
//! [`FetchError`] taxonomy; callers degrade every variant to "no result".

mod api;
mod config;
mod error;

pub use api::{ApiClient, INDEX_DIR, REFERENCES_PER_PAGE, encode_component};
pub use config::{DEFAULT_BASE_URL, ServerConfig};
pub use error::FetchError;
