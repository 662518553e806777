//! Workspace mutation seam

use thiserror::Error;

use super::model::{DocumentId, DocumentNode, ProjectId, ProjectNode};

/// Errors that can occur while registering entities in a workspace
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Project {0} already exists")]
    DuplicateProject(ProjectId),

    #[error("Document {0} already exists")]
    DuplicateDocument(DocumentId),

    #[error("Unknown project {0}")]
    UnknownProject(ProjectId),

    #[error("Project {0} cannot reference itself")]
    SelfReference(ProjectId),

    #[error("Workspace rejected the change: {0}")]
    Rejected(String),
}

/// Mutation interface of the host workspace
pub trait WorkspaceMutation {
    /// Register a project
    ///
    /// # Errors
    /// Returns an error if the workspace refuses the project.
    fn add_project(&mut self, project: ProjectNode) -> Result<(), WorkspaceError>;

    /// Register a document in its owning project
    ///
    /// # Errors
    /// Returns an error if the workspace refuses the document.
    fn add_document(&mut self, document: DocumentNode) -> Result<(), WorkspaceError>;

    /// Add a reference edge from `from` to `to`
    ///
    /// # Errors
    /// Returns an error if the workspace refuses the edge.
    fn add_project_reference(
        &mut self,
        from: ProjectId,
        to: ProjectId,
    ) -> Result<(), WorkspaceError>;

    /// Remove a project with its documents and every edge touching it
    ///
    /// # Errors
    /// Returns an error if the project is unknown.
    fn remove_project(&mut self, id: ProjectId) -> Result<(), WorkspaceError>;
}
