//! Tests for reference resolution

#![allow(clippy::expect_used)]

use crate::fs::PhysicalFileSystem;
use crate::reference::{MetadataReference, ReferenceEntry, ReferenceResolver};
use rstest::rstest;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[rstest]
#[case("Cake.Core.dll")]
#[case("CAKE.CORE.dll")]
#[case("/opt/tools/cake.core/Cake.Core.dll")]
#[case("lib/CaKe.CoRe.Testing.dll")]
fn test_engine_core_is_filtered_in_any_casing(#[case] raw: &str) {
    let fs = PhysicalFileSystem::new();
    let resolver = ReferenceResolver::new(&fs, Path::new("/engine"));

    assert_eq!(
        resolver.resolve(raw),
        ReferenceEntry::EngineCore(raw.to_string())
    );
}

#[test]
fn test_missing_absolute_reference_is_dropped() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("Missing.dll");
    let fs = PhysicalFileSystem::new();
    let resolver = ReferenceResolver::new(&fs, temp_dir.path());

    assert_eq!(
        resolver.resolve(&missing.display().to_string()),
        ReferenceEntry::Missing(missing.clone())
    );

    let resolved = resolver.resolve_all(Vec::<PathBuf>::new(), [missing.display().to_string()]);
    assert!(resolved.is_empty());
}

#[test]
fn test_existing_absolute_reference_is_kept() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dll = temp_dir.path().join("Foo.dll");
    fs::write(&dll, "").expect("Failed to write file");
    let fs = PhysicalFileSystem::new();
    let resolver = ReferenceResolver::new(&fs, Path::new("/engine"));

    assert_eq!(
        resolver.resolve(&dll.display().to_string()),
        ReferenceEntry::Resolved(MetadataReference::new(dll))
    );
}

#[test]
fn test_relative_reference_is_not_existence_checked() {
    let engine_dir = TempDir::new().expect("Failed to create temp dir");
    let fs = PhysicalFileSystem::new();
    let resolver = ReferenceResolver::new(&fs, engine_dir.path());

    let entry = resolver.resolve("System.Net.Http.dll");

    assert_eq!(
        entry,
        ReferenceEntry::Resolved(MetadataReference::new(
            engine_dir.path().join("System.Net.Http.dll")
        ))
    );
    assert!(!engine_dir.path().join("System.Net.Http.dll").exists());
}

#[test]
fn test_resolve_all_puts_defaults_first_and_deduplicates() {
    let engine_dir = TempDir::new().expect("Failed to create temp dir");
    let system = engine_dir.path().join("System.dll");
    let cake_core = engine_dir.path().join("Cake.Core.dll");
    fs::write(&system, "").expect("Failed to write file");
    fs::write(&cake_core, "").expect("Failed to write file");

    let fs = PhysicalFileSystem::new();
    let resolver = ReferenceResolver::new(&fs, engine_dir.path());
    let raw: BTreeSet<String> = ["System.dll", "Other.dll", "Cake.Core.dll"]
        .map(String::from)
        .into();

    let resolved = resolver.resolve_all([system.clone(), cake_core], &raw);

    assert_eq!(
        resolved,
        vec![
            MetadataReference::new(system),
            MetadataReference::new(engine_dir.path().join("Other.dll")),
        ]
    );
}

#[test]
fn test_metadata_reference_display() {
    let reference = MetadataReference::new("/engine/System.dll");
    assert_eq!(reference.display(), "/engine/System.dll");
    assert_eq!(reference.to_string(), "/engine/System.dll");
}
