//! Definition resolution: location descriptors to concrete coordinates.

use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use super::log_fetch_failure;
use crate::client::ApiClient;
use crate::index::{DefinitionSite, LocatableEntity, LocationInfo, PackageId};
use crate::project::{ConcreteLocation, PackageRegistry};

/// How many remote definition-site lookups a single resolution may chain.
///
/// Exactly one: a site whose own location is still approximate is treated
/// as unresolved rather than chased further, which bounds latency and rules
/// out cycles.
pub const MAX_RESOLVE_HOPS: usize = 1;

/// Escape an entity name for the definition-site URL and cache key.
///
/// A literal `.` or `..` path segment would collapse under URL
/// normalization before the server ever saw it, so bare dot names map to
/// reserved percent tokens and every embedded dot is escaped the same way.
pub fn escape_name(name: &str) -> String {
    match name {
        "." => "%2E".to_string(),
        ".." => "%2E%2E".to_string(),
        _ => name.replace('.', "%2E"),
    }
}

/// Resolves a [`LocationInfo`] to host coordinates, following approximate
/// descriptors through the definition-site endpoint with a per-descriptor
/// cache.
pub struct DefinitionResolver {
    client: ApiClient,
    registry: Arc<PackageRegistry>,
    sites: Mutex<FxHashMap<String, DefinitionSite>>,
}

impl DefinitionResolver {
    pub fn new(client: ApiClient, registry: Arc<PackageRegistry>) -> Self {
        Self {
            client,
            registry,
            sites: Mutex::new(FxHashMap::default()),
        }
    }

    /// Deterministic cache key for an approximate location; doubles as the
    /// URL tail of the definition-site endpoint.
    pub fn cache_key(
        package_id: &PackageId,
        component_id: &str,
        module_name: &str,
        entity: LocatableEntity,
        name: &str,
    ) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            package_id,
            component_id,
            module_name,
            entity.as_str(),
            escape_name(name)
        )
    }

    /// Resolve a location descriptor to a concrete location.
    ///
    /// - `ExactLocation` translates directly, zero network calls.
    /// - `UnknownLocation` is absent, zero network calls.
    /// - `ApproximateLocation` costs one definition-site lookup on a cold
    ///   cache and none on a warm one; the answer's own location is used
    ///   only if it came back exact.
    pub async fn resolve_location(&self, location: &LocationInfo) -> Option<ConcreteLocation> {
        let mut current = location.clone();
        let mut hops = 0;

        while let LocationInfo::ApproximateLocation {
            ref package_id,
            ref module_name,
            entity,
            ref name,
            ref component_id,
            ..
        } = current
        {
            if hops == MAX_RESOLVE_HOPS {
                tracing::debug!(
                    "definition site still approximate after {MAX_RESOLVE_HOPS} hop(s), giving up"
                );
                return None;
            }
            hops += 1;
            let site = self
                .lookup_site(package_id, component_id, module_name, entity, name)
                .await?;
            current = site.location;
        }

        match current {
            LocationInfo::ExactLocation {
                package_id,
                module_path,
                start_line,
                end_line,
                start_column,
                end_column,
                ..
            } => self.registry.locate_exact(
                &package_id,
                &module_path,
                start_line,
                start_column,
                end_line,
                end_column,
            ),
            LocationInfo::UnknownLocation => None,
            LocationInfo::ApproximateLocation { .. } => unreachable!("loop exits on non-approximate"),
        }
    }

    /// The definition site already cached for an approximate location, if
    /// any. Never fetches; hover uses this to attach documentation it
    /// happens to have.
    pub fn cached_site(&self, location: &LocationInfo) -> Option<DefinitionSite> {
        let LocationInfo::ApproximateLocation {
            package_id,
            module_name,
            entity,
            name,
            component_id,
            ..
        } = location
        else {
            return None;
        };
        let key = Self::cache_key(package_id, component_id, module_name, *entity, name);
        self.sites.lock().get(&key).cloned()
    }

    async fn lookup_site(
        &self,
        package_id: &PackageId,
        component_id: &str,
        module_name: &str,
        entity: LocatableEntity,
        name: &str,
    ) -> Option<DefinitionSite> {
        let key = Self::cache_key(package_id, component_id, module_name, entity, name);
        if let Some(site) = self.sites.lock().get(&key) {
            return Some(site.clone());
        }

        match self
            .client
            .definition_site(
                &package_id.to_string(),
                component_id,
                module_name,
                entity.as_str(),
                &escape_name(name),
            )
            .await
        {
            Ok(site) => {
                self.sites.lock().insert(key, site.clone());
                Some(site)
            }
            Err(error) => {
                log_fetch_failure("definition site lookup", &error);
                None
            }
        }
    }
}
