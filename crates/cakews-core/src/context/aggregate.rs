//! Cake context aggregate

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::fs::normalize_path;

/// Script files, references and namespaces touched by a pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CakeContext {
    pub cake_files: BTreeSet<PathBuf>,
    pub references: BTreeSet<String>,
    pub usings: BTreeSet<String>,
    /// Root directory of the last pass that found scripts
    pub path: Option<PathBuf>,
}

impl CakeContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    pub fn record_cake_files<I, P>(&mut self, files: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.cake_files.extend(files.into_iter().map(Into::into));
    }

    pub fn record_references<I, S>(&mut self, references: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.references.extend(references.into_iter().map(Into::into));
    }

    pub fn record_usings<I, S>(&mut self, usings: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.usings.extend(usings.into_iter().map(Into::into));
    }

    /// Whether `path` is one of the script files found by the pass.
    ///
    /// Relative paths are taken relative to the scanned root.
    #[must_use]
    pub fn is_cake_file(&self, path: &Path) -> bool {
        let base = self.path.as_deref().unwrap_or_else(|| Path::new(""));
        self.cake_files.contains(&normalize_path(path, base))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cake_files.is_empty()
            && self.references.is_empty()
            && self.usings.is_empty()
            && self.path.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
