//! Engine-contributed defaults

use std::path::{Path, PathBuf};

use crate::fs::{normalize_path, FileSystem};

use super::EngineConfig;

/// Implicit configuration contributed by the script engine
pub trait EngineDefaults {
    /// Namespaces imported into every script
    fn default_namespaces(&self) -> Vec<String>;

    /// Assembly locations referenced by every script
    fn default_references(&self, fs: &dyn FileSystem) -> Vec<PathBuf>;

    /// Directory containing the engine's own assemblies
    fn assembly_directory(&self) -> &Path;
}

/// [`EngineDefaults`] backed by an [`EngineConfig`]
#[derive(Debug, Clone)]
pub struct CakeEngineDefaults {
    namespaces: Vec<String>,
    references: Vec<String>,
    assembly_directory: PathBuf,
}

impl CakeEngineDefaults {
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            namespaces: config.default_namespaces.clone(),
            references: config.default_references.clone(),
            assembly_directory: config.resolved_assembly_directory(),
        }
    }
}

impl Default for CakeEngineDefaults {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl EngineDefaults for CakeEngineDefaults {
    fn default_namespaces(&self) -> Vec<String> {
        self.namespaces.clone()
    }

    /// Only assemblies present on disk are contributed; the engine cannot
    /// load the others either.
    fn default_references(&self, fs: &dyn FileSystem) -> Vec<PathBuf> {
        self.references
            .iter()
            .map(|reference| normalize_path(Path::new(reference), &self.assembly_directory))
            .filter(|path| fs.exists(path))
            .collect()
    }

    fn assembly_directory(&self) -> &Path {
        &self.assembly_directory
    }
}
