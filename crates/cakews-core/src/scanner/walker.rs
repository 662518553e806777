//! Entry script walker

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::fs::{normalize_path, FileSystem};

/// Extension of Cake build scripts
pub const CAKE_EXTENSION: &str = "cake";

/// Errors that can occur while discovering entry scripts
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Cannot list script directory {}: {source}", path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Scanner for discovering entry scripts in a directory
#[derive(Debug, Clone)]
pub struct Scanner {
    root: PathBuf,
    extension: String,
}

impl Scanner {
    /// Create a new scanner for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: CAKE_EXTENSION.to_string(),
        }
    }

    /// Match a different script extension (without the leading dot)
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Scan the root and return the absolute, normalised, sorted entry script paths.
    ///
    /// An empty result means "no script files" and is not an error.
    ///
    /// # Errors
    /// Returns [`DiscoveryError`] if the root directory cannot be listed.
    pub fn scan(&self, fs: &dyn FileSystem) -> Result<Vec<PathBuf>, DiscoveryError> {
        let cwd = std::env::current_dir().unwrap_or_default();
        let mut files: Vec<PathBuf> = fs
            .list_files(&self.root, &self.extension)
            .map_err(|source| DiscoveryError::ListDirectory {
                path: self.root.clone(),
                source,
            })?
            .into_iter()
            .map(|path| normalize_path(&path, &cwd))
            .collect();

        files.sort();
        files.dedup();
        debug!("Discovered {} entry scripts in {}", files.len(), self.root.display());
        Ok(files)
    }

    /// Get the root directory being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the extension being matched
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }
}
