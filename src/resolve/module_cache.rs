//! Per-file memoized fetch of module identifier/occurrence tables.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use super::log_fetch_failure;
use crate::client::ApiClient;
use crate::index::ModuleInfo;
use crate::project::PackageRegistry;

/// Cache of [`ModuleInfo`] keyed by absolute file path.
///
/// A miss resolves the owning package through the registry, fetches the
/// module's tables from the index server, and caches the parsed result for
/// the process lifetime. Fetch failures are never cached; a later call for
/// the same file retries. Staleness against freshly-edited files is
/// accepted by design.
pub struct ModuleCache {
    client: ApiClient,
    registry: Arc<PackageRegistry>,
    modules: Mutex<FxHashMap<PathBuf, Arc<ModuleInfo>>>,
}

impl ModuleCache {
    pub fn new(client: ApiClient, registry: Arc<PackageRegistry>) -> Self {
        Self {
            client,
            registry,
            modules: Mutex::new(FxHashMap::default()),
        }
    }

    /// Get the module tables for a file, fetching on a miss.
    pub async fn get(&self, file: &Path) -> Option<Arc<ModuleInfo>> {
        if let Some(module) = self.modules.lock().get(file) {
            return Some(Arc::clone(module));
        }

        let Some((package_key, relative)) = self.registry.package_for_file(file) else {
            tracing::debug!(
                file = %file.display(),
                "file belongs to no discovered package, cannot fetch module info"
            );
            return None;
        };
        let relative = relative.to_string_lossy().replace('\\', "/");

        match self.client.module_info(&package_key, &relative).await {
            Ok(module) => {
                let module = Arc::new(module);
                self.modules
                    .lock()
                    .insert(file.to_path_buf(), Arc::clone(&module));
                Some(module)
            }
            Err(error) => {
                log_fetch_failure("module info fetch", &error);
                None
            }
        }
    }

    /// Fire-and-forget background fetch so a later lookup is more likely to
    /// succeed. Errors are swallowed; nothing awaits the task.
    pub fn prefetch(self: &Arc<Self>, file: PathBuf) {
        let cache = Arc::clone(self);
        tokio::spawn(async move {
            let _ = cache.get(&file).await;
        });
    }

    /// Whether a module is already cached (no fetch).
    pub fn contains(&self, file: &Path) -> bool {
        self.modules.lock().contains_key(file)
    }
}
