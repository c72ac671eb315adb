//! Cabal manifest discovery.
//!
//! Walks workspace roots looking for `*.cabal` files and reads the package
//! name and version out of them. A manifest missing either field yields no
//! entry; everything else about the manifest is ignored.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::index::PackageId;

/// Local-filesystem binding of a package identity to its root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub package_id: PackageId,
    pub package_folder: PathBuf,
}

/// Find all packages under a workspace root.
///
/// The package folder is the directory containing the manifest. Hidden
/// directories and cabal build output are skipped.
pub fn discover_packages(root: &Path) -> Vec<PackageInfo> {
    let mut packages = Vec::new();

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        // The root itself is always walked, whatever it is named.
        if entry.depth() == 0 {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        !(entry.file_type().is_dir() && (name.starts_with('.') || name == "dist-newstyle"))
    });

    for entry in walker.filter_map(Result::ok) {
        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension() != Some(std::ffi::OsStr::new("cabal"))
        {
            continue;
        }
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "unreadable manifest, skipping");
                continue;
            }
        };
        let Some(package_id) = parse_manifest(&content) else {
            tracing::debug!(path = %path.display(), "manifest missing name or version, skipping");
            continue;
        };
        let Some(folder) = path.parent() else {
            continue;
        };
        packages.push(PackageInfo {
            package_id,
            package_folder: folder.to_path_buf(),
        });
    }

    packages
}

/// Extract `name:` and `version:` fields from cabal manifest text.
///
/// Field names are case-insensitive per the cabal format; only top-level
/// occurrences (no leading indentation) count, so a `version:` inside a
/// conditional block is not mistaken for the package version.
pub fn parse_manifest(content: &str) -> Option<PackageId> {
    let mut name = None;
    let mut version = None;

    for line in content.lines() {
        if line.starts_with(|c: char| c.is_whitespace()) {
            continue;
        }
        let Some((field, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match field.trim().to_ascii_lowercase().as_str() {
            "name" if name.is_none() => name = Some(value.to_string()),
            "version" if version.is_none() => version = Some(value.to_string()),
            _ => {}
        }
    }

    Some(PackageId {
        name: name?,
        version: version?,
    })
}
