//! Buffered per-entry projection

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::directive::ScriptContext;
use crate::fs::FileSystem;
use crate::reference::MetadataReference;
use crate::workspace::{
    CompilationOptions, DocumentNode, ParseOptions, ProjectId, ProjectNode, WorkspaceError,
    WorkspaceMutation,
};

/// Errors that can occur while building a projection
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("Cannot read script {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Settings shared by every projected project
pub struct Projector<'a> {
    fs: &'a dyn FileSystem,
    language_version: String,
    host_object_type: Option<String>,
}

impl<'a> Projector<'a> {
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem, language_version: impl Into<String>) -> Self {
        Self {
            fs,
            language_version: language_version.into(),
            host_object_type: None,
        }
    }

    /// Set the host object type of projected projects
    #[must_use]
    pub fn with_host_object_type(mut self, host_object_type: impl Into<String>) -> Self {
        self.host_object_type = Some(host_object_type.into());
        self
    }

    /// Build the projection of one entry script.
    ///
    /// The entry project imports `default_namespaces` followed by the
    /// closure's own namespaces. Every loaded script gets a project with the
    /// same options and references, referenced from the entry project.
    ///
    /// # Errors
    /// Returns [`ProjectionError::Read`] if any script text cannot be read.
    pub fn project(
        &self,
        context: &ScriptContext,
        default_namespaces: &[String],
        references: &[MetadataReference],
    ) -> Result<Projection, ProjectionError> {
        let compilation_options = CompilationOptions::library(
            default_namespaces
                .iter()
                .chain(context.namespaces.iter())
                .cloned(),
        );
        let parse_options = ParseOptions::script(self.language_version.clone());
        let entry_name = file_name(&context.entry);

        let new_project = |name: String| {
            let project = ProjectNode::new(name, compilation_options.clone(), parse_options.clone())
                .with_references(references.to_vec());
            match &self.host_object_type {
                Some(host) => project.with_host_object_type(host.clone()),
                None => project,
            }
        };

        let entry = new_project(entry_name.clone());
        let entry_document = self.document(entry.id, &context.entry)?;

        let mut loaded: Vec<(ProjectNode, DocumentNode)> = Vec::new();
        let mut seen: Vec<&Path> = vec![context.entry.as_path()];
        for path in &context.loaded_scripts {
            if seen.contains(&path.as_path()) {
                continue;
            }
            seen.push(path);

            let project = new_project(format!("{}-LoadedFrom-{entry_name}", file_name(path)));
            let document = self.document(project.id, path)?;
            loaded.push((project, document));
        }

        debug!(
            "Projected {} with {} loaded scripts",
            context.entry.display(),
            loaded.len()
        );

        Ok(Projection {
            entry,
            entry_document,
            loaded,
        })
    }

    fn document(&self, project: ProjectId, path: &Path) -> Result<DocumentNode, ProjectionError> {
        let text = self
            .fs
            .read_all_text(path)
            .map_err(|source| ProjectionError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(DocumentNode::new(project, path, text))
    }
}

/// Projects and documents of one entry script, not yet registered
#[derive(Debug, Clone)]
pub struct Projection {
    entry: ProjectNode,
    entry_document: DocumentNode,
    loaded: Vec<(ProjectNode, DocumentNode)>,
}

/// Ids of a projection registered in a workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedProjection {
    pub entry: ProjectId,
    pub loaded: Vec<ProjectId>,
}

impl Projection {
    /// The entry script's project
    #[must_use]
    pub fn entry(&self) -> &ProjectNode {
        &self.entry
    }

    /// Loaded scripts' projects and documents
    #[must_use]
    pub fn loaded(&self) -> &[(ProjectNode, DocumentNode)] {
        &self.loaded
    }

    /// Namespaces imported by every project of this projection
    #[must_use]
    pub fn usings(&self) -> &[String] {
        &self.entry.compilation_options.usings
    }

    /// References shared by every project of this projection
    #[must_use]
    pub fn references(&self) -> &[MetadataReference] {
        &self.entry.metadata_references
    }

    /// Paths of every document in this projection, entry first
    pub fn script_paths(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.entry_document.file_path.as_path())
            .chain(self.loaded.iter().map(|(_, doc)| doc.file_path.as_path()))
    }

    /// Register everything in `workspace`.
    ///
    /// Projects are added first, then documents, then the entry → loaded
    /// edges. If any step fails the projects added by this call are removed
    /// again before the error is returned.
    ///
    /// # Errors
    /// Returns the first [`WorkspaceError`] raised by the workspace.
    pub fn commit(
        self,
        workspace: &mut dyn WorkspaceMutation,
    ) -> Result<CommittedProjection, WorkspaceError> {
        let committed = CommittedProjection {
            entry: self.entry.id,
            loaded: self.loaded.iter().map(|(project, _)| project.id).collect(),
        };

        let mut registered: Vec<ProjectId> = Vec::new();
        if let Err(e) = self.register(workspace, &mut registered) {
            rollback(workspace, &registered);
            return Err(e);
        }
        Ok(committed)
    }

    fn register(
        self,
        workspace: &mut dyn WorkspaceMutation,
        registered: &mut Vec<ProjectId>,
    ) -> Result<(), WorkspaceError> {
        let entry_id = self.entry.id;
        let (projects, documents): (Vec<_>, Vec<_>) = self.loaded.into_iter().unzip();
        let loaded_ids: Vec<ProjectId> = projects.iter().map(|p| p.id).collect();

        for project in std::iter::once(self.entry).chain(projects) {
            let id = project.id;
            workspace.add_project(project)?;
            registered.push(id);
        }
        for document in std::iter::once(self.entry_document).chain(documents) {
            workspace.add_document(document)?;
        }
        for loaded_id in loaded_ids {
            workspace.add_project_reference(entry_id, loaded_id)?;
        }
        Ok(())
    }
}

fn rollback(workspace: &mut dyn WorkspaceMutation, registered: &[ProjectId]) {
    for id in registered.iter().rev() {
        if let Err(e) = workspace.remove_project(*id) {
            warn!("Failed to roll back project {}: {}", id, e);
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
