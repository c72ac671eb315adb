//! Records and tagged unions returned by the index server.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A package identity: name plus version.
///
/// The canonical string form `name-version` is used as a cache key, as a
/// registry lookup key, and as a path segment in remote URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageId {
    pub name: String,
    pub version: String,
}

impl PackageId {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Parse the canonical `name-version` form.
    ///
    /// The version is the text after the last `-`, so multi-segment names
    /// like `text-short-1.2` split correctly. Returns `None` if either part
    /// would be empty.
    pub fn parse(key: &str) -> Option<Self> {
        let (name, version) = key.rsplit_once('-')?;
        if name.is_empty() || version.is_empty() {
            return None;
        }
        Some(Self::new(name, version))
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name, self.version)
    }
}

/// Per-module identifier and occurrence tables.
///
/// Fetched lazily on first need for a file and cached for the process
/// lifetime. Staleness against freshly-edited files is accepted; the tables
/// describe whatever the index server last indexed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleInfo {
    /// Identifiers keyed by internal id (unique within one module).
    #[serde(default)]
    pub identifiers: HashMap<String, IdentifierInfo>,
    /// Occurrences keyed by the `line-startColumn-endColumn` string form of
    /// [`OccurrenceKey`](super::OccurrenceKey).
    #[serde(default)]
    pub occurrences: HashMap<String, IdentifierOccurrence>,
}

/// Whether an identifier is visible outside its defining module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum NameSort {
    External,
    Internal,
}

/// An identifier as the index knows it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierInfo {
    pub sort: NameSort,
    pub occ_name: String,
    #[serde(default)]
    pub demangled_occ_name: Option<String>,
    pub location_info: LocationInfo,
    #[serde(default)]
    pub id_type: Option<IdType>,
    /// Present only for externally-visible identifiers; the key for
    /// cross-package reference search. Identifiers without it cannot have
    /// find-references performed.
    #[serde(default)]
    pub external_id: Option<String>,
}

/// A specific textual appearance of an identifier in a module.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierOccurrence {
    #[serde(default)]
    pub internal_id: Option<String>,
    /// True at the occurrence that introduces the identifier (its own
    /// definition site). Binders are excluded from go-to-definition.
    pub is_binder: bool,
    #[serde(default)]
    pub id_occ_type: Option<IdType>,
    pub sort: OccurrenceSort,
}

/// What kind of name an occurrence refers to.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "tag")]
pub enum OccurrenceSort {
    ValueId,
    TypeId,
    /// A module name; carries the module's own location so module-name
    /// hovers and jumps need no identifier lookup.
    ModuleId { contents: LocationInfo },
}

/// Where a definition lives, at varying levels of precision.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "tag")]
pub enum LocationInfo {
    /// Fully resolved file coordinates (1-based). Terminal.
    #[serde(rename_all = "camelCase")]
    ExactLocation {
        package_id: PackageId,
        module_path: String,
        module_name: String,
        start_line: u32,
        end_line: u32,
        start_column: u32,
        end_column: u32,
    },
    /// Names a definition by package/module/entity/name without concrete
    /// coordinates. Must be resolved via a remote definition-site lookup
    /// before use; the only variant eligible for that lookup.
    #[serde(rename_all = "camelCase")]
    ApproximateLocation {
        package_id: PackageId,
        module_name: String,
        entity: LocatableEntity,
        name: String,
        component_id: String,
        #[serde(default)]
        haddock_anchor_id: Option<String>,
    },
    /// Terminal and unresolvable; no network call is ever attempted.
    UnknownLocation,
}

/// The kind of entity an approximate location names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LocatableEntity {
    Typ,
    Val,
    Inst,
    Mod,
}

impl LocatableEntity {
    /// URL path segment for the definition-site endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            LocatableEntity::Typ => "Typ",
            LocatableEntity::Val => "Val",
            LocatableEntity::Inst => "Inst",
            LocatableEntity::Mod => "Mod",
        }
    }
}

/// A rendered type, as a sequence of text and type-constructor pieces.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdType {
    pub components: Vec<TypeComponent>,
    #[serde(default)]
    pub components_expanded: Option<Vec<TypeComponent>>,
}

impl IdType {
    /// Flatten the components into a plain-text signature.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for component in &self.components {
            match component {
                TypeComponent::Text { contents } => out.push_str(contents),
                TypeComponent::TyCon { name, .. } => out.push_str(name),
            }
        }
        out
    }
}

/// One piece of a rendered type.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "tag")]
pub enum TypeComponent {
    Text { contents: String },
    #[serde(rename_all = "camelCase")]
    TyCon { internal_id: String, name: String },
}

/// The result of resolving an approximate location.
///
/// Its own `location` is expected to be exact but may legally come back as
/// any variant; a non-exact answer means "could not resolve", not an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionSite {
    pub location: LocationInfo,
    #[serde(default)]
    pub documentation: Option<String>,
}

/// One entry per package known to reference a given external identifier.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalReferences {
    pub count: u32,
    /// Canonical `name-version` package key.
    pub package_id: String,
}

/// Per-package reference-query response: one source file plus the
/// references it contains, in server order.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceFile {
    pub name: String,
    #[serde(default)]
    pub references: Vec<ReferenceWithSource>,
}

/// A single reference with the server-rendered source line around it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceWithSource {
    pub source_code_html: String,
    pub id_src_span: IdentifierSrcSpan,
}

/// Coordinates of a reference inside its module (1-based, single line).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierSrcSpan {
    pub module_path: String,
    pub line: u32,
    pub start_column: u32,
    pub end_column: u32,
}
