//! Find references implementation.

use crate::project::{ConcreteLocation, PackageRegistry};
use crate::resolve::{ReferenceAggregator, ResolvedPosition, Subject};

/// Result of a find-references request.
#[derive(Clone, Debug)]
pub struct ReferenceResult {
    /// All references found, ordered by package discovery order and, within
    /// a package, by server response order.
    pub references: Vec<Reference>,
}

impl ReferenceResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            references: Vec::new(),
        }
    }

    /// Check if any references were found.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Get the number of references.
    pub fn len(&self) -> usize {
        self.references.len()
    }
}

/// A reference to an identifier, translated to local coordinates.
#[derive(Clone, Debug)]
pub struct Reference {
    pub location: ConcreteLocation,
    /// Server-rendered source line around the reference, for host display.
    pub source_code_html: String,
}

/// Find all cross-package references for a resolved position.
///
/// Only externally-visible identifiers carry the external id the global
/// reference index is keyed by; anything else yields an empty result.
/// References in packages the workspace has not discovered are dropped
/// during translation: there is no local file to point at.
pub(crate) async fn find_references(
    resolved: &ResolvedPosition,
    aggregator: &ReferenceAggregator,
    registry: &PackageRegistry,
) -> ReferenceResult {
    let Subject::Identifier(info) = &resolved.subject else {
        tracing::debug!("module names have no cross-package reference search");
        return ReferenceResult::empty();
    };
    let Some(external_id) = info.external_id.as_deref() else {
        tracing::debug!(
            occ_name = %info.occ_name,
            "identifier is not externally visible, find-references unavailable"
        );
        return ReferenceResult::empty();
    };

    let Some(merged) = aggregator.find_references(external_id).await else {
        return ReferenceResult::empty();
    };

    let references = merged
        .iter()
        .filter_map(|reference| {
            let location = registry.locate_reference(&reference.package_key, &reference.span)?;
            Some(Reference {
                location,
                source_code_html: reference.source_code_html.clone(),
            })
        })
        .collect();

    ReferenceResult { references }
}
