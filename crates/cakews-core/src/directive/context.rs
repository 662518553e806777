//! Per-entry script context

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::engine::Severity;

/// A message raised while reading a script's directives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub path: PathBuf,
    /// 1-based line of the directive
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    /// Write the diagnostic to the log at its severity
    pub fn emit(&self) {
        self.severity.emit(&format!(
            "{}:{}: {}",
            self.path.display(),
            self.line,
            self.message
        ));
    }
}

/// Everything collected from one entry script and its transitive loads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptContext {
    /// The entry script, normalised
    pub entry: PathBuf,
    /// Namespaces imported by `using` directives
    pub namespaces: BTreeSet<String>,
    /// Raw `#r` arguments, unresolved
    pub references: BTreeSet<String>,
    /// Transitively loaded scripts in discovery order, entry excluded, no repeats
    pub loaded_scripts: Vec<PathBuf>,
    /// Raw `#addin` arguments
    pub addins: BTreeSet<String>,
    /// Raw `#tool` arguments
    pub tools: BTreeSet<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ScriptContext {
    #[must_use]
    pub fn new(entry: impl Into<PathBuf>) -> Self {
        Self {
            entry: entry.into(),
            namespaces: BTreeSet::new(),
            references: BTreeSet::new(),
            loaded_scripts: Vec::new(),
            addins: BTreeSet::new(),
            tools: BTreeSet::new(),
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn diagnose(
        &mut self,
        severity: Severity,
        path: &Path,
        line: usize,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(Diagnostic {
            severity,
            path: path.to_path_buf(),
            line,
            message: message.into(),
        });
    }
}
