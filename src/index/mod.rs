//! Wire types for the remote code index.
//!
//! These mirror the JSON bodies served by the index server. Location
//! descriptors and occurrence sorts are closed sum types so an unrecognized
//! variant is a deserialization error, not a silent no-op.

mod model;
mod occurrence;

pub use model::{
    DefinitionSite, GlobalReferences, IdType, IdentifierInfo, IdentifierOccurrence,
    IdentifierSrcSpan, LocatableEntity, LocationInfo, ModuleInfo, NameSort, OccurrenceSort,
    PackageId, ReferenceWithSource, SourceFile, TypeComponent,
};
pub use occurrence::OccurrenceKey;
