//! Engine configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scanner::CAKE_EXTENSION;

/// Errors that can occur while loading an engine configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings for the script engine and the projected compilation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Script file extension, without the dot
    pub extension: String,
    /// Directory holding the engine's own assemblies; relative references
    /// resolve against it. Defaults to the directory of the running binary.
    pub assembly_directory: Option<PathBuf>,
    /// Namespaces imported into every script
    pub default_namespaces: Vec<String>,
    /// Assemblies referenced by every script, absolute or relative to
    /// `assembly_directory`
    pub default_references: Vec<String>,
    /// Language version used to parse scripts
    pub language_version: String,
    /// Type name of the script host object
    pub host_object_type: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            extension: CAKE_EXTENSION.to_string(),
            assembly_directory: None,
            default_namespaces: [
                "System",
                "System.Collections.Generic",
                "System.Linq",
                "System.Text",
                "System.Threading.Tasks",
                "System.IO",
                "Cake.Core",
                "Cake.Core.IO",
                "Cake.Core.Scripting",
                "Cake.Core.Diagnostics",
            ]
            .map(String::from)
            .to_vec(),
            default_references: [
                "mscorlib.dll",
                "System.dll",
                "System.Core.dll",
                "System.Data.dll",
                "System.Xml.dll",
                "System.Xml.Linq.dll",
                "Cake.Core.dll",
                "Cake.Common.dll",
            ]
            .map(String::from)
            .to_vec(),
            language_version: "CSharp6".to_string(),
            host_object_type: "Cake.Core.Scripting.IScriptHost".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Set the script extension
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set the engine assembly directory
    #[must_use]
    pub fn with_assembly_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.assembly_directory = Some(directory.into());
        self
    }

    /// Replace the default namespaces
    #[must_use]
    pub fn with_default_namespaces(mut self, namespaces: Vec<String>) -> Self {
        self.default_namespaces = namespaces;
        self
    }

    /// Replace the default references
    #[must_use]
    pub fn with_default_references(mut self, references: Vec<String>) -> Self {
        self.default_references = references;
        self
    }

    /// The configured assembly directory, or the directory of the running binary
    #[must_use]
    pub fn resolved_assembly_directory(&self) -> PathBuf {
        self.assembly_directory.clone().unwrap_or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
                .unwrap_or_default()
        })
    }
}
