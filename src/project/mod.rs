//! Workspace packages: manifest discovery and package-to-folder mapping.

pub mod manifest;
mod registry;

pub use manifest::{PackageInfo, discover_packages};
pub use registry::{ConcreteLocation, PackageRegistry};
