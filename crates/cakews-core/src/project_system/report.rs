//! Outcome of an initialize pass

use std::collections::BTreeSet;
use std::path::PathBuf;

use thiserror::Error;

use crate::context::CakeContext;
use crate::directive::ProcessError;
use crate::projector::ProjectionError;
use crate::workspace::{ProjectId, WorkspaceError};

/// Errors that cause one entry script to be skipped
#[derive(Debug, Error)]
pub enum EntryError {
    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error("Workspace registration failed: {0}")]
    Workspace(#[from] WorkspaceError),
}

/// An entry script that was projected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedEntry {
    pub path: PathBuf,
    pub project: ProjectId,
    /// Projects of the loaded scripts, in load order
    pub loaded: Vec<ProjectId>,
    pub loaded_scripts: Vec<PathBuf>,
    pub addins: BTreeSet<String>,
    pub tools: BTreeSet<String>,
}

/// An entry script that was skipped
#[derive(Debug)]
pub struct EntryFailure {
    pub path: PathBuf,
    pub error: EntryError,
}

/// Result of [`CakeProjectSystem::initialize`](super::CakeProjectSystem::initialize)
#[derive(Debug, Default)]
pub struct InitializeReport {
    pub context: CakeContext,
    pub entries: Vec<ProjectedEntry>,
    pub failures: Vec<EntryFailure>,
}

impl InitializeReport {
    /// Whether the pass found no entry scripts at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.failures.is_empty()
    }

    /// Number of projects registered by the pass
    #[must_use]
    pub fn project_count(&self) -> usize {
        self.entries.iter().map(|e| 1 + e.loaded.len()).sum()
    }

    /// Find the projected entry for `path`
    #[must_use]
    pub fn entry(&self, path: &std::path::Path) -> Option<&ProjectedEntry> {
        self.entries.iter().find(|e| e.path == path)
    }
}
