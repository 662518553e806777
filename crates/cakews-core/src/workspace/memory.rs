//! In-memory workspace

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::model::{DocumentNode, ProjectId, ProjectNode, ProjectReferenceEdge};
use super::mutation::{WorkspaceError, WorkspaceMutation};

/// A workspace held in memory, in registration order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryWorkspace {
    projects: Vec<ProjectNode>,
    documents: Vec<DocumentNode>,
    project_references: Vec<ProjectReferenceEdge>,
}

impl InMemoryWorkspace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn projects(&self) -> &[ProjectNode] {
        &self.projects
    }

    #[must_use]
    pub fn documents(&self) -> &[DocumentNode] {
        &self.documents
    }

    #[must_use]
    pub fn project_references(&self) -> &[ProjectReferenceEdge] {
        &self.project_references
    }

    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<&ProjectNode> {
        self.projects.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn project_by_name(&self, name: &str) -> Option<&ProjectNode> {
        self.projects.iter().find(|p| p.name == name)
    }

    /// Documents owned by `project`
    pub fn documents_of(&self, project: ProjectId) -> impl Iterator<Item = &DocumentNode> {
        self.documents.iter().filter(move |d| d.project() == project)
    }

    /// Documents for the file at `path`, across all projects
    pub fn documents_for_path<'a>(
        &'a self,
        path: &'a Path,
    ) -> impl Iterator<Item = &'a DocumentNode> + 'a {
        self.documents.iter().filter(move |d| d.file_path == path)
    }

    /// Projects referenced by `project`
    pub fn references_from(&self, project: ProjectId) -> impl Iterator<Item = ProjectId> + '_ {
        self.project_references
            .iter()
            .filter(move |edge| edge.from == project)
            .map(|edge| edge.to)
    }

    fn contains_project(&self, id: ProjectId) -> bool {
        self.projects.iter().any(|p| p.id == id)
    }
}

impl WorkspaceMutation for InMemoryWorkspace {
    fn add_project(&mut self, project: ProjectNode) -> Result<(), WorkspaceError> {
        if self.contains_project(project.id) {
            return Err(WorkspaceError::DuplicateProject(project.id));
        }
        self.projects.push(project);
        Ok(())
    }

    fn add_document(&mut self, document: DocumentNode) -> Result<(), WorkspaceError> {
        if !self.contains_project(document.project()) {
            return Err(WorkspaceError::UnknownProject(document.project()));
        }
        if self.documents.iter().any(|d| d.id == document.id) {
            return Err(WorkspaceError::DuplicateDocument(document.id));
        }
        self.documents.push(document);
        Ok(())
    }

    fn add_project_reference(
        &mut self,
        from: ProjectId,
        to: ProjectId,
    ) -> Result<(), WorkspaceError> {
        if from == to {
            return Err(WorkspaceError::SelfReference(from));
        }
        for id in [from, to] {
            if !self.contains_project(id) {
                return Err(WorkspaceError::UnknownProject(id));
            }
        }
        let edge = ProjectReferenceEdge { from, to };
        if !self.project_references.contains(&edge) {
            self.project_references.push(edge);
        }
        Ok(())
    }

    fn remove_project(&mut self, id: ProjectId) -> Result<(), WorkspaceError> {
        if !self.contains_project(id) {
            return Err(WorkspaceError::UnknownProject(id));
        }
        self.projects.retain(|p| p.id != id);
        self.documents.retain(|d| d.project() != id);
        self.project_references
            .retain(|edge| edge.from != id && edge.to != id);
        Ok(())
    }
}
