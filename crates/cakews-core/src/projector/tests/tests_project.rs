//! Tests for building projections

#![allow(clippy::expect_used)]

use crate::directive::ScriptContext;
use crate::fs::PhysicalFileSystem;
use crate::projector::{ProjectionError, Projector};
use crate::reference::MetadataReference;
use std::fs;
use tempfile::TempDir;

fn context_with_loads(dir: &TempDir, loads: &[&str]) -> ScriptContext {
    fs::write(dir.path().join("build.cake"), "Task(\"Default\");").expect("Failed to write file");
    let mut context = ScriptContext::new(dir.path().join("build.cake"));
    for name in loads {
        let path = dir.path().join(name);
        fs::write(&path, format!("// {name}")).expect("Failed to write file");
        context.loaded_scripts.push(path);
    }
    context
}

#[test]
fn test_project_names_and_documents() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let context = context_with_loads(&temp_dir, &["b.cake", "c.cake"]);
    let fs = PhysicalFileSystem::new();

    let projection = Projector::new(&fs, "CSharp6")
        .project(&context, &[], &[])
        .expect("Failed to project");

    assert_eq!(projection.entry().name, "build.cake");
    let names: Vec<_> = projection
        .loaded()
        .iter()
        .map(|(project, _)| project.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["b.cake-LoadedFrom-build.cake", "c.cake-LoadedFrom-build.cake"]
    );
    let (project, document) = &projection.loaded()[0];
    assert_eq!(document.project(), project.id);
    assert_eq!(document.text, "// b.cake");
    assert_eq!(projection.script_paths().count(), 3);
}

#[test]
fn test_project_usings_are_defaults_then_discovered_without_duplicates() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut context = context_with_loads(&temp_dir, &[]);
    context.namespaces.insert("System".to_string());
    context.namespaces.insert("Tasks".to_string());
    let fs = PhysicalFileSystem::new();

    let projection = Projector::new(&fs, "CSharp6")
        .project(&context, &["System".to_string(), "Cake.Core".to_string()], &[])
        .expect("Failed to project");

    assert_eq!(projection.usings(), ["System", "Cake.Core", "Tasks"]);
}

#[test]
fn test_loaded_projects_share_options_and_references() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let context = context_with_loads(&temp_dir, &["b.cake"]);
    let references = vec![MetadataReference::new("/engine/System.dll")];
    let fs = PhysicalFileSystem::new();

    let projection = Projector::new(&fs, "CSharp6")
        .with_host_object_type("Cake.Core.Scripting.IScriptHost")
        .project(&context, &["System".to_string()], &references)
        .expect("Failed to project");

    let entry = projection.entry();
    let (loaded, _) = &projection.loaded()[0];
    assert_eq!(loaded.metadata_references, references);
    assert_eq!(loaded.compilation_options, entry.compilation_options);
    assert_eq!(loaded.parse_options, entry.parse_options);
    assert_eq!(loaded.host_object_type, entry.host_object_type);
    assert_ne!(loaded.id, entry.id);
}

#[test]
fn test_project_skips_entry_and_repeated_loaded_paths() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut context = context_with_loads(&temp_dir, &["b.cake"]);
    context.loaded_scripts.push(temp_dir.path().join("b.cake"));
    context.loaded_scripts.push(temp_dir.path().join("build.cake"));
    let fs = PhysicalFileSystem::new();

    let projection = Projector::new(&fs, "CSharp6")
        .project(&context, &[], &[])
        .expect("Failed to project");

    assert_eq!(projection.loaded().len(), 1);
}

#[test]
fn test_project_unreadable_loaded_script() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut context = context_with_loads(&temp_dir, &[]);
    context.loaded_scripts.push(temp_dir.path().join("gone.cake"));
    let fs = PhysicalFileSystem::new();

    let result = Projector::new(&fs, "CSharp6").project(&context, &[], &[]);

    assert!(matches!(result, Err(ProjectionError::Read { .. })));
}
