//! Workspace module: Editor workspace model
//!
//! Defines the project, document and project-reference entities the
//! projector creates, the [`WorkspaceMutation`] seam through which they are
//! registered, and an in-memory workspace implementing it.

pub mod memory;
pub mod model;
mod mutation;

pub use memory::InMemoryWorkspace;
pub use model::{
    CompilationOptions, DocumentId, DocumentNode, DocumentationMode, OutputKind, ParseOptions,
    ProjectId, ProjectNode, ProjectReferenceEdge, SourceCodeKind, CSHARP,
};
pub use mutation::{WorkspaceError, WorkspaceMutation};
