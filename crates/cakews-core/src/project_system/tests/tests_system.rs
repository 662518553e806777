//! Tests for CakeProjectSystem

#![allow(clippy::expect_used)]

use crate::engine::{EngineConfig, EngineDefaults};
use crate::fs::FileSystem;
use crate::project_system::{CakeProjectSystem, EntryError};
use crate::workspace::{
    DocumentNode, InMemoryWorkspace, ProjectId, ProjectNode, WorkspaceError, WorkspaceMutation,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Engine defaults with fixed values and no disk access
struct FixedEngine {
    assembly_directory: PathBuf,
    references: Vec<PathBuf>,
}

impl EngineDefaults for FixedEngine {
    fn default_namespaces(&self) -> Vec<String> {
        vec!["System".to_string(), "Cake.Core".to_string()]
    }

    fn default_references(&self, _fs: &dyn FileSystem) -> Vec<PathBuf> {
        self.references.clone()
    }

    fn assembly_directory(&self) -> &Path {
        &self.assembly_directory
    }
}

/// Workspace that refuses to remove projects while locked
struct LockedWorkspace {
    inner: InMemoryWorkspace,
    locked: bool,
}

impl WorkspaceMutation for LockedWorkspace {
    fn add_project(&mut self, project: ProjectNode) -> Result<(), WorkspaceError> {
        self.inner.add_project(project)
    }

    fn add_document(&mut self, document: DocumentNode) -> Result<(), WorkspaceError> {
        self.inner.add_document(document)
    }

    fn add_project_reference(
        &mut self,
        from: ProjectId,
        to: ProjectId,
    ) -> Result<(), WorkspaceError> {
        self.inner.add_project_reference(from, to)
    }

    fn remove_project(&mut self, id: ProjectId) -> Result<(), WorkspaceError> {
        if self.locked {
            return Err(WorkspaceError::Rejected("locked".to_string()));
        }
        self.inner.remove_project(id)
    }
}

fn system(root: &Path, engine: FixedEngine) -> CakeProjectSystem {
    CakeProjectSystem::new(root, EngineConfig::default()).with_engine_defaults(Box::new(engine))
}

#[test]
fn test_initialize_uses_injected_engine_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let engine_dir = temp_dir.path().join("engine");
    fs::create_dir(&engine_dir).expect("Failed to create dir");
    let system_dll = engine_dir.join("System.dll");
    let cake_core = engine_dir.join("Cake.Core.dll");
    fs::write(&system_dll, "").expect("Failed to write file");
    fs::write(&cake_core, "").expect("Failed to write file");
    fs::write(
        temp_dir.path().join("build.cake"),
        "#r \"Extra.dll\"\nusing Tasks;\n",
    )
    .expect("Failed to write file");

    let mut system = system(
        temp_dir.path(),
        FixedEngine {
            assembly_directory: engine_dir.clone(),
            references: vec![system_dll.clone(), cake_core],
        },
    );
    let mut workspace = InMemoryWorkspace::new();

    let report = system
        .initialize(&mut workspace)
        .expect("Failed to initialize");

    let project = workspace
        .project_by_name("build.cake")
        .expect("Missing entry project");
    assert_eq!(
        project.compilation_options.usings,
        vec!["System", "Cake.Core", "Tasks"]
    );
    let references: Vec<_> = project
        .metadata_references
        .iter()
        .map(|r| r.path.clone())
        .collect();
    assert_eq!(references, vec![system_dll, engine_dir.join("Extra.dll")]);
    assert!(report.context.usings.contains("Cake.Core"));
    assert_eq!(report.context.references.len(), 2);
}

#[test]
fn test_initialize_twice_rebuilds_instead_of_accumulating() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("a.cake"), "#load \"b.cake\"").expect("Failed to write file");
    fs::write(temp_dir.path().join("b.cake"), "").expect("Failed to write file");

    let mut system = CakeProjectSystem::new(temp_dir.path(), EngineConfig::default());
    let mut workspace = InMemoryWorkspace::new();

    let first = system.initialize(&mut workspace).expect("Failed to initialize");
    let first_ids = system.registered_projects().to_vec();
    let second = system.initialize(&mut workspace).expect("Failed to initialize");

    assert_eq!(first.project_count(), second.project_count());
    assert_eq!(workspace.projects().len(), second.project_count());
    assert_eq!(workspace.documents().len(), second.project_count());
    assert!(first_ids
        .iter()
        .all(|id| workspace.project(*id).is_none()));
    assert_eq!(first.context, second.context);
}

#[test]
fn test_initialize_after_scripts_removed_clears_workspace() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let script = temp_dir.path().join("a.cake");
    fs::write(&script, "").expect("Failed to write file");

    let mut system = CakeProjectSystem::new(temp_dir.path(), EngineConfig::default());
    let mut workspace = InMemoryWorkspace::new();
    system.initialize(&mut workspace).expect("Failed to initialize");
    assert_eq!(workspace.projects().len(), 1);

    fs::remove_file(&script).expect("Failed to remove file");
    let report = system.initialize(&mut workspace).expect("Failed to initialize");

    assert!(report.is_empty());
    assert!(report.context.path.is_none());
    assert!(workspace.projects().is_empty());
}

#[test]
fn test_initialize_tolerates_projects_removed_externally() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("a.cake"), "").expect("Failed to write file");

    let mut system = CakeProjectSystem::new(temp_dir.path(), EngineConfig::default());
    let mut workspace = InMemoryWorkspace::new();
    system.initialize(&mut workspace).expect("Failed to initialize");
    for id in system.registered_projects().to_vec() {
        workspace.remove_project(id).expect("Failed to remove project");
    }

    let report = system.initialize(&mut workspace).expect("Failed to initialize");

    assert_eq!(report.entries.len(), 1);
    assert_eq!(workspace.projects().len(), 1);
}

#[test]
fn test_initialize_retries_projects_that_failed_to_remove() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("a.cake"), "").expect("Failed to write file");

    let mut system = CakeProjectSystem::new(temp_dir.path(), EngineConfig::default());
    let mut workspace = LockedWorkspace {
        inner: InMemoryWorkspace::new(),
        locked: false,
    };
    system.initialize(&mut workspace).expect("Failed to initialize");
    let first = system.registered_projects().to_vec();

    workspace.locked = true;
    system.initialize(&mut workspace).expect("Failed to initialize");
    assert_eq!(workspace.inner.projects().len(), 2);
    assert_eq!(system.registered_projects().len(), 2);
    assert!(system.registered_projects().contains(&first[0]));

    workspace.locked = false;
    system.initialize(&mut workspace).expect("Failed to initialize");
    assert_eq!(workspace.inner.projects().len(), 1);
    assert_eq!(system.registered_projects().len(), 1);
    assert!(workspace.inner.project(first[0]).is_none());
}

#[test]
fn test_initialize_missing_root_keeps_previous_projects() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path().join("scripts");
    fs::create_dir(&root).expect("Failed to create dir");
    fs::write(root.join("a.cake"), "").expect("Failed to write file");

    let mut system = CakeProjectSystem::new(&root, EngineConfig::default());
    let mut workspace = InMemoryWorkspace::new();
    system.initialize(&mut workspace).expect("Failed to initialize");

    fs::remove_dir_all(&root).expect("Failed to remove dir");
    let result = system.initialize(&mut workspace);

    assert!(result.is_err());
    assert_eq!(workspace.projects().len(), 1);
}

#[test]
fn test_initialize_reports_failed_entries() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("a.cake"), "#load \"missing.cake\"").expect("Failed to write file");

    let mut system = CakeProjectSystem::new(temp_dir.path(), EngineConfig::default());
    let mut workspace = InMemoryWorkspace::new();

    let report = system.initialize(&mut workspace).expect("Failed to initialize");

    assert!(report.entries.is_empty());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path, temp_dir.path().join("a.cake"));
    assert!(matches!(report.failures[0].error, EntryError::Process(_)));
    assert!(workspace.projects().is_empty());
    assert!(report.context.cake_files.is_empty());
    assert_eq!(report.context.path.as_deref(), Some(temp_dir.path()));
}

#[test]
fn test_initialize_honours_configured_extension() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("a.cake"), "").expect("Failed to write file");
    fs::write(temp_dir.path().join("b.csx"), "").expect("Failed to write file");

    let mut system = CakeProjectSystem::new(
        temp_dir.path(),
        EngineConfig::default().with_extension("csx"),
    );
    let mut workspace = InMemoryWorkspace::new();

    let report = system.initialize(&mut workspace).expect("Failed to initialize");

    assert_eq!(report.entries.len(), 1);
    assert!(workspace.project_by_name("b.csx").is_some());
}

#[test]
fn test_initialize_records_packages() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        temp_dir.path().join("a.cake"),
        "#addin \"Cake.Git\"\n#tool \"GitVersion.CommandLine\"\n",
    )
    .expect("Failed to write file");

    let mut system = CakeProjectSystem::new(temp_dir.path(), EngineConfig::default());
    let mut workspace = InMemoryWorkspace::new();

    let report = system.initialize(&mut workspace).expect("Failed to initialize");

    let entry = report
        .entry(&temp_dir.path().join("a.cake"))
        .expect("Missing entry");
    assert!(entry.addins.contains("Cake.Git"));
    assert!(entry.tools.contains("GitVersion.CommandLine"));
}
