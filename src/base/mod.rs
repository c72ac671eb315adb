//! Foundation types for the glance engine.
//!
//! This module provides the coordinate primitives used throughout the crate:
//! - [`Position`], [`Span`] - 0-indexed line/column coordinates (host convention)
//!
//! This module has NO dependencies on other glance modules.

mod position;

pub use position::{Position, Span};
