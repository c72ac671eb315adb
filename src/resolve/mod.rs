//! The resolution/caching engine.
//!
//! Control flow for every host request:
//!
//! ```text
//! cursor position
//!   → position resolver (module cache)   → identifier / module subject
//!   → definition resolver or reference aggregator
//!   → package registry                    → ConcreteLocation
//! ```
//!
//! The three caches here (modules, definition sites, merged references) are
//! explicit objects owned by the engine, unbounded, and live for the
//! process. The index is static per session, so nothing is ever
//! invalidated. Locks are taken only for map access, never held across an
//! await, and there is no single-flight dedup: two concurrent misses for
//! the same key may both fetch, and the second insert wins harmlessly.
//!
//! Nothing in this module raises; every failure degrades to `None` with a
//! log line.

mod definition;
mod module_cache;
mod position;
mod references;

pub use definition::{DefinitionResolver, MAX_RESOLVE_HOPS, escape_name};
pub use module_cache::ModuleCache;
pub use position::{PositionResolver, ResolvedPosition, Subject};
pub use references::{PackageReference, ReferenceAggregator};

use crate::client::FetchError;

/// Uniform logging for the fetch-failure taxonomy.
///
/// Connection refused and transport faults are warnings; a 404 means the
/// entity legitimately has no indexed data and only gets a debug line.
pub(crate) fn log_fetch_failure(what: &str, error: &FetchError) {
    if error.is_not_found() {
        tracing::debug!(%error, "{what}: no indexed data");
    } else if matches!(error, FetchError::ConnectionRefused { .. }) {
        tracing::warn!(%error, "{what}: index server unreachable");
    } else {
        tracing::warn!(%error, "{what} failed");
    }
}
