//! Reference resolver

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fs::{normalize_path, FileSystem};

/// References whose text contains this (case-insensitive) name the engine's
/// own core library, which every script already gets implicitly.
pub const ENGINE_CORE_MARKER: &str = "cake.core";

/// A resolved assembly reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MetadataReference {
    pub path: PathBuf,
}

impl MetadataReference {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Display string recorded in the aggregate context
    #[must_use]
    pub fn display(&self) -> String {
        self.path.display().to_string()
    }
}

impl fmt::Display for MetadataReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Outcome of resolving one raw reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceEntry {
    Resolved(MetadataReference),
    /// Names the engine core library; dropped
    EngineCore(String),
    /// Absolute path with no file behind it; dropped
    Missing(PathBuf),
}

/// Resolves raw references against the file system and the engine assembly directory
pub struct ReferenceResolver<'a> {
    fs: &'a dyn FileSystem,
    assembly_directory: &'a Path,
}

impl<'a> ReferenceResolver<'a> {
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem, assembly_directory: &'a Path) -> Self {
        Self {
            fs,
            assembly_directory,
        }
    }

    /// Resolve a single raw reference.
    ///
    /// Absolute paths must exist. Relative paths are anchored at the engine
    /// assembly directory and are not checked.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> ReferenceEntry {
        if raw.to_lowercase().contains(ENGINE_CORE_MARKER) {
            return ReferenceEntry::EngineCore(raw.to_string());
        }

        let path = Path::new(raw);
        if path.is_absolute() {
            let path = normalize_path(path, self.assembly_directory);
            if self.fs.exists(&path) {
                ReferenceEntry::Resolved(MetadataReference::new(path))
            } else {
                ReferenceEntry::Missing(path)
            }
        } else {
            ReferenceEntry::Resolved(MetadataReference::new(normalize_path(
                path,
                self.assembly_directory,
            )))
        }
    }

    /// Resolve the engine defaults followed by the script's own references.
    ///
    /// The result keeps first-seen order and holds no duplicates.
    pub fn resolve_all<D, R>(&self, defaults: D, references: R) -> Vec<MetadataReference>
    where
        D: IntoIterator,
        D::Item: AsRef<Path>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        let mut resolved = Vec::new();
        for default in defaults {
            let raw = default.as_ref().display().to_string();
            self.import(&raw, &mut resolved);
        }
        for reference in references {
            self.import(reference.as_ref(), &mut resolved);
        }
        resolved
    }

    fn import(&self, raw: &str, resolved: &mut Vec<MetadataReference>) {
        match self.resolve(raw) {
            ReferenceEntry::Resolved(reference) => {
                if !resolved.contains(&reference) {
                    resolved.push(reference);
                }
            }
            ReferenceEntry::EngineCore(raw) => {
                debug!("Skipping engine core reference {raw}");
            }
            ReferenceEntry::Missing(path) => {
                debug!("Skipping missing reference {}", path.display());
            }
        }
    }
}
