//! Analysis — unified entry point for IDE features.
//!
//! One `Analysis` per editing session: it owns the API client, the package
//! registry, and the three caches (modules, definition sites, merged
//! references). Queries take `&self`; cache mutation is interior and safe
//! to drive from concurrent host requests.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::base::Position;
use crate::client::{ApiClient, ServerConfig};
use crate::project::PackageRegistry;
use crate::resolve::{
    DefinitionResolver, ModuleCache, PositionResolver, ReferenceAggregator, ResolvedPosition,
};

use super::{GotoResult, HoverResult, ReferenceResult, goto, hover, references};

/// Owns all session state for the IDE layer.
pub struct Analysis {
    registry: Arc<PackageRegistry>,
    positions: PositionResolver,
    definitions: DefinitionResolver,
    aggregator: ReferenceAggregator,
}

impl Analysis {
    /// Create a session talking to the given index server, with an empty
    /// package registry. Call [`set_workspace_folders`](Self::set_workspace_folders)
    /// before issuing queries.
    pub fn new(config: &ServerConfig) -> Self {
        let client = ApiClient::new(config);
        let registry = Arc::new(PackageRegistry::new());
        let modules = Arc::new(ModuleCache::new(client.clone(), Arc::clone(&registry)));
        Self {
            positions: PositionResolver::new(modules),
            definitions: DefinitionResolver::new(client.clone(), Arc::clone(&registry)),
            aggregator: ReferenceAggregator::new(client),
            registry,
        }
    }

    /// Re-discover packages when the host's folder set changes.
    pub fn set_workspace_folders(&self, roots: &[PathBuf]) {
        self.registry.refresh(roots);
    }

    /// The package registry (for hosts that manage entries directly).
    pub fn registry(&self) -> &PackageRegistry {
        &self.registry
    }

    /// Get hover information at a position.
    ///
    /// `text` is the current document content as the host sees it; the
    /// tokenizer runs over it to find the word under the cursor.
    pub async fn hover(&self, file: &Path, text: &str, position: Position) -> Option<HoverResult> {
        let resolved = self.resolve(file, text, position).await?;
        hover::hover_for(&resolved, &self.definitions)
    }

    /// Go to definition at a position.
    pub async fn goto_definition(&self, file: &Path, text: &str, position: Position) -> GotoResult {
        match self.resolve(file, text, position).await {
            Some(resolved) => goto::goto_definition(&resolved, &self.definitions).await,
            None => GotoResult::empty(),
        }
    }

    /// Find all cross-package references to the identifier at a position.
    pub async fn find_references(
        &self,
        file: &Path,
        text: &str,
        position: Position,
    ) -> ReferenceResult {
        match self.resolve(file, text, position).await {
            Some(resolved) => {
                references::find_references(&resolved, &self.aggregator, &self.registry).await
            }
            None => ReferenceResult::empty(),
        }
    }

    async fn resolve(
        &self,
        file: &Path,
        text: &str,
        position: Position,
    ) -> Option<ResolvedPosition> {
        self.positions.resolve(file, text, position).await
    }
}
