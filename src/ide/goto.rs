//! Go-to-definition implementation.

use crate::project::ConcreteLocation;
use crate::resolve::{DefinitionResolver, ResolvedPosition, Subject};

/// Result of a go-to-definition request.
#[derive(Clone, Debug)]
pub struct GotoResult {
    /// The targets to jump to.
    pub targets: Vec<GotoTarget>,
}

impl GotoResult {
    /// Create an empty result (no targets found).
    pub fn empty() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Create a result with a single target.
    pub fn single(target: GotoTarget) -> Self {
        Self {
            targets: vec![target],
        }
    }

    /// Check if any targets were found.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A target location for go-to-definition.
#[derive(Clone, Debug)]
pub struct GotoTarget {
    pub location: ConcreteLocation,
    /// The identifier or module name being jumped to.
    pub name: String,
}

/// Resolve a position's subject to its definition.
///
/// A binder occurrence is never a target: the cursor is already on the
/// definition, and jumping a definition to itself is meaningless.
pub(crate) async fn goto_definition(
    resolved: &ResolvedPosition,
    definitions: &DefinitionResolver,
) -> GotoResult {
    if resolved.occurrence.is_binder {
        tracing::trace!("cursor on a binder occurrence, no goto target");
        return GotoResult::empty();
    }

    let (location, name) = match &resolved.subject {
        Subject::Identifier(info) => {
            let name = info
                .demangled_occ_name
                .clone()
                .unwrap_or_else(|| info.occ_name.clone());
            (&info.location_info, name)
        }
        Subject::Module(location) => {
            let name = match location {
                crate::index::LocationInfo::ExactLocation { module_name, .. }
                | crate::index::LocationInfo::ApproximateLocation { module_name, .. } => {
                    module_name.clone()
                }
                crate::index::LocationInfo::UnknownLocation => String::new(),
            };
            (location, name)
        }
    };

    match definitions.resolve_location(location).await {
        Some(concrete) => GotoResult::single(GotoTarget {
            location: concrete,
            name,
        }),
        None => GotoResult::empty(),
    }
}
