//! Workspace model types

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::reference::MetadataReference;

/// Language name of projected projects
pub const CSHARP: &str = "C#";

/// Unique identifier of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Mint a fresh id
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier of a document within its project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentId {
    pub project: ProjectId,
    pub id: Uuid,
}

impl DocumentId {
    /// Mint a fresh id owned by `project`
    #[must_use]
    pub fn new(project: ProjectId) -> Self {
        Self {
            project,
            id: Uuid::new_v4(),
        }
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.project, self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputKind {
    DynamicallyLinkedLibrary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceCodeKind {
    Regular,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentationMode {
    None,
    Parse,
    Diagnose,
}

/// How project sources are parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    pub language_version: String,
    pub documentation_mode: DocumentationMode,
    pub kind: SourceCodeKind,
}

impl ParseOptions {
    /// Script parsing for the given language version
    #[must_use]
    pub fn script(language_version: impl Into<String>) -> Self {
        Self {
            language_version: language_version.into(),
            documentation_mode: DocumentationMode::Parse,
            kind: SourceCodeKind::Script,
        }
    }
}

/// How a project is compiled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationOptions {
    pub output_kind: OutputKind,
    /// Namespaces imported into every document, without duplicates
    pub usings: Vec<String>,
}

impl CompilationOptions {
    /// Library output importing `usings`; repeated namespaces keep their first position
    #[must_use]
    pub fn library<I, S>(usings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut distinct: Vec<String> = Vec::new();
        for using in usings {
            let using = using.into();
            if !distinct.contains(&using) {
                distinct.push(using);
            }
        }
        Self {
            output_kind: OutputKind::DynamicallyLinkedLibrary,
            usings: distinct,
        }
    }
}

/// A logical compilation unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectNode {
    pub id: ProjectId,
    pub version: DateTime<Utc>,
    /// Display name
    pub name: String,
    pub assembly_name: String,
    pub language: String,
    pub compilation_options: CompilationOptions,
    pub parse_options: ParseOptions,
    pub metadata_references: Vec<MetadataReference>,
    pub is_submission: bool,
    /// Type name of the script host object, if any
    pub host_object_type: Option<String>,
}

impl ProjectNode {
    /// Create a new C# submission project named `name`
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        compilation_options: CompilationOptions,
        parse_options: ParseOptions,
    ) -> Self {
        let name = name.into();
        Self {
            id: ProjectId::new(),
            version: Utc::now(),
            assembly_name: format!("{name}.dll"),
            name,
            language: CSHARP.to_string(),
            compilation_options,
            parse_options,
            metadata_references: Vec::new(),
            is_submission: true,
            host_object_type: None,
        }
    }

    /// Set the metadata references
    #[must_use]
    pub fn with_references(mut self, references: Vec<MetadataReference>) -> Self {
        self.metadata_references = references;
        self
    }

    /// Set the host object type
    #[must_use]
    pub fn with_host_object_type(mut self, host_object_type: impl Into<String>) -> Self {
        self.host_object_type = Some(host_object_type.into());
        self
    }
}

/// One script file's text bound into a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentNode {
    pub id: DocumentId,
    pub name: String,
    pub file_path: PathBuf,
    pub source_kind: SourceCodeKind,
    pub text: String,
    /// SHA-256 of `text`, lowercase hex
    pub checksum: String,
    pub version: DateTime<Utc>,
}

impl DocumentNode {
    /// Create a script document for `file_path` owned by `project`
    #[must_use]
    pub fn new(project: ProjectId, file_path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let file_path = file_path.into();
        let text = text.into();
        let name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            id: DocumentId::new(project),
            name,
            file_path,
            source_kind: SourceCodeKind::Script,
            checksum: compute_checksum(&text),
            text,
            version: Utc::now(),
        }
    }

    /// The project this document belongs to
    #[must_use]
    pub fn project(&self) -> ProjectId {
        self.id.project
    }
}

/// Directed edge from an entry project to a loaded script's project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectReferenceEdge {
    pub from: ProjectId,
    pub to: ProjectId,
}

fn compute_checksum(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}
