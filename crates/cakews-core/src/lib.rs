//! cakews-core: Core library for projecting Cake build scripts into an editor workspace
//!
//! Discovers the top-level `.cake` scripts of a directory, follows their
//! `#load` and `#r` directives into a transitive closure, and registers one
//! project per entry script plus one per loaded script in a workspace model.
//!
//! # Pipeline
//!
//! - **scanner** - entry script discovery
//! - **directive** - directive parsing and load closure
//! - **reference** - assembly reference resolution
//! - **projector** - buffered, atomic workspace projection
//! - **project_system** - the full `initialize` pass

pub mod context;
pub mod directive;
pub mod engine;
pub mod fs;
pub mod project_system;
pub mod projector;
pub mod reference;
pub mod scanner;
pub mod workspace;

// Re-export commonly used types
pub use context::CakeContext;
pub use directive::{Directive, DirectiveProcessor, ProcessError, ScriptContext};
pub use engine::{CakeEngineDefaults, EngineConfig, EngineDefaults, Severity};
pub use fs::{normalize_path, FileSystem, PhysicalFileSystem};
pub use project_system::{CakeProjectSystem, EntryError, InitializeReport};
pub use projector::Projection;
pub use reference::{MetadataReference, ReferenceEntry, ReferenceResolver};
pub use scanner::{DiscoveryError, Scanner};
pub use workspace::{InMemoryWorkspace, WorkspaceError, WorkspaceMutation};
