//! Hover information implementation.

use crate::base::Span;
use crate::index::{IdentifierInfo, IdentifierOccurrence, LocationInfo};
use crate::resolve::{DefinitionResolver, ResolvedPosition, Subject};

/// Result of a hover request.
#[derive(Clone, Debug)]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
    /// The word range the hover applies to (0-indexed).
    pub span: Span,
}

/// Build hover content for a resolved position.
///
/// Uses only data already in hand: the occurrence's type, the identifier's
/// type, and any definition-site documentation the resolver has cached.
/// Never fetches.
pub(crate) fn hover_for(
    resolved: &ResolvedPosition,
    definitions: &DefinitionResolver,
) -> Option<HoverResult> {
    let contents = match &resolved.subject {
        Subject::Identifier(info) => identifier_contents(info, &resolved.occurrence, definitions),
        Subject::Module(location) => module_contents(location),
    };
    Some(HoverResult {
        contents,
        span: resolved.span,
    })
}

fn identifier_contents(
    info: &IdentifierInfo,
    occurrence: &IdentifierOccurrence,
    definitions: &DefinitionResolver,
) -> String {
    let name = info.demangled_occ_name.as_deref().unwrap_or(&info.occ_name);

    // The occurrence-site type is instantiated and more precise than the
    // identifier's general type; prefer it.
    let ty = occurrence
        .id_occ_type
        .as_ref()
        .or(info.id_type.as_ref())
        .map(|t| t.render());

    let mut contents = String::new();
    contents.push_str("```haskell\n");
    match &ty {
        Some(ty) => contents.push_str(&format!("{name} :: {ty}\n")),
        None => contents.push_str(&format!("{name}\n")),
    }
    contents.push_str("```\n");

    if let Some(site) = definitions.cached_site(&info.location_info) {
        if let Some(documentation) = site.documentation {
            contents.push_str("\n---\n\n");
            contents.push_str(&documentation);
            contents.push('\n');
        }
    }

    contents
}

fn module_contents(location: &LocationInfo) -> String {
    let module_name = match location {
        LocationInfo::ExactLocation { module_name, .. } => module_name.as_str(),
        LocationInfo::ApproximateLocation { module_name, .. } => module_name.as_str(),
        LocationInfo::UnknownLocation => "?",
    };
    format!("```haskell\nmodule {module_name}\n```\n")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::client::{ApiClient, ServerConfig};
    use crate::index::{IdType, NameSort, OccurrenceSort, TypeComponent};
    use crate::project::PackageRegistry;

    fn plain_occurrence() -> IdentifierOccurrence {
        IdentifierOccurrence {
            internal_id: Some("x1".to_string()),
            is_binder: false,
            id_occ_type: None,
            sort: OccurrenceSort::ValueId,
        }
    }

    fn info_with_type(ty: Option<IdType>) -> IdentifierInfo {
        IdentifierInfo {
            sort: NameSort::External,
            occ_name: "foo".to_string(),
            demangled_occ_name: None,
            location_info: LocationInfo::UnknownLocation,
            id_type: ty,
            external_id: None,
        }
    }

    fn text_type(text: &str) -> IdType {
        IdType {
            components: vec![TypeComponent::Text {
                contents: text.to_string(),
            }],
            components_expanded: None,
        }
    }

    fn definitions() -> DefinitionResolver {
        DefinitionResolver::new(
            ApiClient::new(&ServerConfig::default()),
            Arc::new(PackageRegistry::new()),
        )
    }

    fn resolved(subject: Subject, occurrence: IdentifierOccurrence) -> ResolvedPosition {
        ResolvedPosition {
            span: Span::single_line(0, 0, 3),
            occurrence,
            subject,
        }
    }

    #[test]
    fn test_hover_shows_name_and_type() {
        let info = info_with_type(Some(text_type("Int -> Int")));
        let result = hover_for(
            &resolved(Subject::Identifier(info), plain_occurrence()),
            &definitions(),
        )
        .unwrap();
        assert!(result.contents.contains("foo :: Int -> Int"));
        assert_eq!(result.span, Span::single_line(0, 0, 3));
    }

    #[test]
    fn test_hover_prefers_occurrence_type() {
        let info = info_with_type(Some(text_type("forall a. a -> a")));
        let mut occurrence = plain_occurrence();
        occurrence.id_occ_type = Some(text_type("Int -> Int"));
        let result = hover_for(
            &resolved(Subject::Identifier(info), occurrence),
            &definitions(),
        )
        .unwrap();
        assert!(result.contents.contains("foo :: Int -> Int"));
    }

    #[test]
    fn test_hover_without_type_still_shows_name() {
        let info = info_with_type(None);
        let result = hover_for(
            &resolved(Subject::Identifier(info), plain_occurrence()),
            &definitions(),
        )
        .unwrap();
        assert!(result.contents.contains("foo"));
    }

    #[test]
    fn test_hover_on_module_name() {
        let location = LocationInfo::ApproximateLocation {
            package_id: crate::index::PackageId::new("pkg", "1.0"),
            module_name: "Data.Maybe".to_string(),
            entity: crate::index::LocatableEntity::Mod,
            name: "Data.Maybe".to_string(),
            component_id: "c1".to_string(),
            haddock_anchor_id: None,
        };
        let occurrence = IdentifierOccurrence {
            internal_id: None,
            is_binder: false,
            id_occ_type: None,
            sort: OccurrenceSort::ModuleId {
                contents: location.clone(),
            },
        };
        let result = hover_for(&resolved(Subject::Module(location), occurrence), &definitions())
            .unwrap();
        assert!(result.contents.contains("module Data.Maybe"));
    }
}
