//! # glance-base
//!
//! Core library for resolving hover, go-to-definition, and find-references
//! queries against a remote Haskell code index.
//!
//! The index is static and pre-built; this crate never parses source or
//! watches files. It maps cursor positions to occurrence records, follows
//! occurrences to identifiers and their (possibly indirect) location
//! descriptors, resolves indirection through the index server with
//! memoization, and fans reference queries out across every package that
//! uses an identifier.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → entry points per host request (hover, goto-def, references)
//!   ↓
//! resolve   → module cache, position/definition resolvers, reference fan-out
//!   ↓
//! project   → manifest discovery, package registry, location translation
//!   ↓
//! client    → index server HTTP API, config, error taxonomy
//!   ↓
//! index     → wire types for the index's JSON bodies
//!   ↓
//! core      → identifier tokenizer
//!   ↓
//! base      → coordinate primitives (Position, Span)
//! ```

// ============================================================================
// MODULES (dependency order: base → core → index → client → project → resolve → ide)
// ============================================================================

/// Foundation types: Position, Span
pub mod base;

/// Text utilities: the identifier token grammar
pub mod core;

/// Wire types for the remote index
pub mod index;

/// HTTP client for the index server
pub mod client;

/// Workspace packages: manifest discovery and the package registry
pub mod project;

/// The resolution/caching engine
pub mod resolve;

/// IDE features: hover, go-to-definition, find-references
pub mod ide;

// Re-export foundation types
pub use base::{Position, Span};
pub use client::ServerConfig;
pub use ide::Analysis;
