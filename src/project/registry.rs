//! Package registry and location translation.
//!
//! The registry maps a package key (`name-version`) to its local root
//! folder. It is the bridge between the index server's module-relative
//! coordinates and absolute paths on the user's machine: translation fails
//! for packages the workspace has not discovered, rather than guessing.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use parking_lot::RwLock;

use super::manifest::{self, PackageInfo};
use crate::base::Span;
use crate::index::{IdentifierSrcSpan, PackageId};

/// A fully translated, host-ready location: absolute file plus a 0-indexed
/// range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcreteLocation {
    pub file: PathBuf,
    pub span: Span,
}

/// Maps package identities to local root folders.
///
/// Built from manifest discovery and refreshed when the host's folder set
/// changes. Insertion order is kept so repeated lookups are stable across a
/// session.
#[derive(Debug, Default)]
pub struct PackageRegistry {
    packages: RwLock<IndexMap<String, PathBuf>>,
}

impl PackageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the registry from a set of workspace roots.
    pub fn refresh(&self, roots: &[PathBuf]) {
        let mut packages = IndexMap::new();
        for root in roots {
            for info in manifest::discover_packages(root) {
                packages.insert(info.package_id.to_string(), info.package_folder);
            }
        }
        tracing::debug!(count = packages.len(), "package registry refreshed");
        *self.packages.write() = packages;
    }

    /// Register a single package.
    pub fn insert(&self, info: PackageInfo) {
        self.packages
            .write()
            .insert(info.package_id.to_string(), info.package_folder);
    }

    /// Local root folder for a package key, if the workspace knows it.
    pub fn folder_of(&self, package_key: &str) -> Option<PathBuf> {
        self.packages.read().get(package_key).cloned()
    }

    /// Which known package owns `file`, and the file's path relative to the
    /// package root.
    ///
    /// The deepest matching root wins so a package nested inside another
    /// workspace folder resolves to its own manifest.
    pub fn package_for_file(&self, file: &Path) -> Option<(String, PathBuf)> {
        let packages = self.packages.read();
        let mut best: Option<(String, PathBuf)> = None;
        let mut best_depth = 0;

        for (key, folder) in packages.iter() {
            let Ok(relative) = file.strip_prefix(folder) else {
                continue;
            };
            let depth = folder.components().count();
            if best.is_none() || depth > best_depth {
                best = Some((key.clone(), relative.to_path_buf()));
                best_depth = depth;
            }
        }

        best
    }

    /// Translate exact index coordinates into a host location.
    ///
    /// Index coordinates are 1-based; the host convention is 0-based.
    pub fn locate_exact(
        &self,
        package_id: &PackageId,
        module_path: &str,
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
    ) -> Option<ConcreteLocation> {
        let folder = self.folder_of(&package_id.to_string())?;
        Some(ConcreteLocation {
            file: folder.join(module_path),
            span: Span::new(
                crate::base::Position::new(
                    start_line.saturating_sub(1) as usize,
                    start_column.saturating_sub(1) as usize,
                ),
                crate::base::Position::new(
                    end_line.saturating_sub(1) as usize,
                    end_column.saturating_sub(1) as usize,
                ),
            ),
        })
    }

    /// Translate a reference span from a reference-query response.
    pub fn locate_reference(
        &self,
        package_key: &str,
        span: &IdentifierSrcSpan,
    ) -> Option<ConcreteLocation> {
        let folder = self.folder_of(package_key)?;
        let line = span.line.saturating_sub(1) as usize;
        Some(ConcreteLocation {
            file: folder.join(&span.module_path),
            span: Span::single_line(
                line,
                span.start_column.saturating_sub(1) as usize,
                span.end_column.saturating_sub(1) as usize,
            ),
        })
    }
}
