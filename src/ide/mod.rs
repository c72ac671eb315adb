//! IDE features — High-level APIs for editor hosts.
//!
//! This module is the interface between the resolution engine and the
//! editor extension. Each function corresponds to one host request.
//!
//! ## Design Principles
//!
//! 1. **No host types**: positions and ranges use our own 0-indexed types,
//!    converted at the extension boundary
//! 2. **Soft failure**: every entry point degrades to empty/`None`; the
//!    worst outcome is a feature silently not activating
//!
//! ## Usage
//!
//! The recommended way to use this module is through [`Analysis`]:
//!
//! ```ignore
//! use glance::ide::Analysis;
//!
//! let analysis = Analysis::new(&ServerConfig::default());
//! analysis.set_workspace_folders(&folders);
//!
//! let hover = analysis.hover(&file, &text, position).await;
//! ```

mod analysis;
mod goto;
mod hover;
mod references;

pub use analysis::Analysis;
pub use goto::{GotoResult, GotoTarget};
pub use hover::HoverResult;
pub use references::{Reference, ReferenceResult};
