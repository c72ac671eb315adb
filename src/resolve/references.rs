//! Cross-package reference aggregation.

use std::sync::Arc;

use futures::future::join_all;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use super::log_fetch_failure;
use crate::client::ApiClient;
use crate::index::IdentifierSrcSpan;

/// One reference to an external identifier, tagged with the package it was
/// found in so the registry can later translate it to a local path.
#[derive(Debug, Clone)]
pub struct PackageReference {
    /// Canonical `name-version` key of the package containing the reference.
    pub package_key: String,
    /// Source file name as reported by the index server.
    pub source_file: String,
    /// Server-rendered source line around the reference, for host display.
    pub source_code_html: String,
    pub span: IdentifierSrcSpan,
}

/// Two-phase fan-out for find-references, with a per-identifier cache.
///
/// Phase one asks the global index which packages reference the identifier;
/// phase two queries every such package concurrently. The merge preserves
/// discovery order (not completion order), and a single package's failure
/// only empties that package's contribution.
pub struct ReferenceAggregator {
    client: ApiClient,
    references: Mutex<FxHashMap<String, Arc<Vec<PackageReference>>>>,
}

impl ReferenceAggregator {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            references: Mutex::new(FxHashMap::default()),
        }
    }

    /// All known references to an external identifier, across all packages
    /// the index knows about.
    ///
    /// `None` means discovery itself failed; nothing is cached in that case
    /// and the next identical query starts from scratch. A partially failed
    /// fan-out caches whatever merged successfully for the rest of the
    /// session.
    pub async fn find_references(&self, external_id: &str) -> Option<Arc<Vec<PackageReference>>> {
        if let Some(cached) = self.references.lock().get(external_id) {
            return Some(Arc::clone(cached));
        }

        let discovered = match self.client.global_references(external_id).await {
            Ok(discovered) => discovered,
            Err(error) => {
                log_fetch_failure("global reference discovery", &error);
                return None;
            }
        };
        tracing::debug!(
            external_id,
            packages = discovered.len(),
            "reference discovery complete, fanning out"
        );

        // All per-package queries start together; join_all buffers completed
        // results and yields them in initiating (= discovery) order.
        let queries = discovered.into_iter().map(|global| {
            let client = self.client.clone();
            let external_id = external_id.to_string();
            async move {
                let result = client
                    .package_references(&global.package_id, &external_id)
                    .await;
                (global.package_id, result)
            }
        });
        let responses = join_all(queries).await;

        let mut merged = Vec::new();
        for (package_key, result) in responses {
            match result {
                Ok(files) => {
                    for file in files {
                        for reference in file.references {
                            merged.push(PackageReference {
                                package_key: package_key.clone(),
                                source_file: file.name.clone(),
                                source_code_html: reference.source_code_html,
                                span: reference.id_src_span,
                            });
                        }
                    }
                }
                Err(error) => {
                    log_fetch_failure("per-package reference query", &error);
                    tracing::warn!(
                        package = %package_key,
                        "dropping package from reference results"
                    );
                }
            }
        }

        let merged = Arc::new(merged);
        self.references
            .lock()
            .insert(external_id.to_string(), Arc::clone(&merged));
        Some(merged)
    }
}
