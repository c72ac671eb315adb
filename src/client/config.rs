//! Client configuration.

use serde::Deserialize;

/// Default index server address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Where to reach the index server.
///
/// The host passes this through from editor settings; the only knob is the
/// server's base URL.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        // Tolerate a trailing slash in user settings.
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}
