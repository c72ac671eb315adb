//! The index server API surface.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::DeserializeOwned;

use super::config::ServerConfig;
use super::error::FetchError;
use crate::index::{DefinitionSite, GlobalReferences, ModuleInfo, SourceFile};

/// Directory inside each indexed package where the index artifacts live.
pub const INDEX_DIR: &str = ".haskell-code-explorer";

/// Server-side page size for reference queries. Large enough that one page
/// returns everything in practice; there is no client-side pagination loop.
pub const REFERENCES_PER_PAGE: u32 = 10_000;

/// Characters escaped in a URL path component, matching JavaScript's
/// `encodeURIComponent` (everything but alphanumerics and `-_.!~*'()`).
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single URL path component.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Async client for the index server's read-only API.
///
/// Holds a connection-pooling [`reqwest::Client`]; cheap to clone via the
/// pool. Issues plain GETs with no retry, no cancellation, and no timeout
/// beyond what the transport itself imposes.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    /// Fetch a module's identifier/occurrence tables.
    ///
    /// `relative_path` is the module's path relative to its package root.
    /// The path is percent-encoded twice: the server stores index files
    /// under the URL-encoded file name, so the file-name encoding must
    /// itself survive URL decoding.
    pub async fn module_info(
        &self,
        package_key: &str,
        relative_path: &str,
    ) -> Result<ModuleInfo, FetchError> {
        let encoded = encode_component(&encode_component(relative_path));
        let url = format!(
            "{}/files/{}/{}/{}.json",
            self.base_url, package_key, INDEX_DIR, encoded
        );
        self.get_json(url).await
    }

    /// Resolve an approximate location to a definition site.
    ///
    /// `escaped_name` must already have gone through definition-resolver
    /// name escaping (dots replaced) so `.`/`..` segments survive URL
    /// normalization in the transport layer.
    pub async fn definition_site(
        &self,
        package_key: &str,
        component_id: &str,
        module_name: &str,
        entity: &str,
        escaped_name: &str,
    ) -> Result<DefinitionSite, FetchError> {
        let url = format!(
            "{}/api/definitionSite/{}/{}/{}/{}/{}",
            self.base_url, package_key, component_id, module_name, entity, escaped_name
        );
        self.get_json(url).await
    }

    /// Which packages contain at least one reference to `external_id`.
    pub async fn global_references(
        &self,
        external_id: &str,
    ) -> Result<Vec<GlobalReferences>, FetchError> {
        let url = format!(
            "{}/api/globalReferences/{}",
            self.base_url,
            encode_component(external_id)
        );
        self.get_json(url).await
    }

    /// All references to `external_id` within one package.
    pub async fn package_references(
        &self,
        package_key: &str,
        external_id: &str,
    ) -> Result<Vec<SourceFile>, FetchError> {
        let url = format!(
            "{}/api/references/{}/{}?per_page={}",
            self.base_url,
            package_key,
            encode_component(external_id),
            REFERENCES_PER_PAGE
        );
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, FetchError> {
        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() {
                FetchError::ConnectionRefused { url: url.clone() }
            } else {
                FetchError::Transport(e)
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound { url });
        }
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        response.json::<T>().await.map_err(|e| FetchError::Decode {
            url,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component_plain() {
        assert_eq!(encode_component("Data.Map"), "Data.Map");
        assert_eq!(encode_component("foo'"), "foo'");
    }

    #[test]
    fn test_encode_component_reserved() {
        assert_eq!(encode_component("src/M.hs"), "src%2FM.hs");
        assert_eq!(encode_component("a|b"), "a%7Cb");
    }

    #[test]
    fn test_double_encoding_escapes_percent() {
        let once = encode_component("src/M.hs");
        let twice = encode_component(&once);
        assert_eq!(twice, "src%252FM.hs");
    }
}
