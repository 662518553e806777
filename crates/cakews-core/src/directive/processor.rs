//! Recursive directive processor

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::engine::Severity;
use crate::fs::{normalize_path, FileSystem};

use super::parser::{parse_line, Directive, LineKind, LoadTarget, ScriptLines};
use super::ScriptContext;

/// Errors that can occur while processing a script's directives
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Cannot read script {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Builds the [`ScriptContext`] of an entry script
pub struct DirectiveProcessor<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> DirectiveProcessor<'a> {
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Process `entry` and everything it loads.
    ///
    /// A relative `entry` is taken relative to the current directory.
    ///
    /// # Errors
    /// Returns [`ProcessError::Read`] if the entry or any loaded script cannot be read.
    pub fn process(&self, entry: &Path) -> Result<ScriptContext, ProcessError> {
        let cwd = std::env::current_dir().unwrap_or_default();
        let entry = normalize_path(entry, &cwd);

        let mut visited = HashSet::from([entry.clone()]);
        let mut context = ScriptContext::new(entry.clone());
        self.process_file(&entry, &mut visited, &mut context)?;
        Ok(context)
    }

    fn process_file(
        &self,
        path: &Path,
        visited: &mut HashSet<PathBuf>,
        context: &mut ScriptContext,
    ) -> Result<(), ProcessError> {
        let text = self
            .fs
            .read_all_text(path)
            .map_err(|source| ProcessError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let base = path.parent().unwrap_or(path);

        for (line_number, line) in ScriptLines::new(&text) {
            let directive = match parse_line(line) {
                LineKind::Directive(directive) => directive,
                LineKind::Malformed(reason) => {
                    context.diagnose(
                        Severity::Debug,
                        path,
                        line_number,
                        format!("ignoring malformed directive ({reason}): {}", line.trim()),
                    );
                    continue;
                }
                LineKind::Code => continue,
            };

            match directive {
                Directive::Load(raw) => {
                    self.load(&raw, base, (path, line_number), visited, context)?;
                }
                Directive::Reference(raw) => {
                    context.references.insert(raw);
                }
                Directive::Using(namespace) => {
                    context.namespaces.insert(namespace);
                }
                Directive::Addin(raw) => {
                    context.diagnose(
                        Severity::Information,
                        path,
                        line_number,
                        format!("addin '{raw}' is recorded but not restored"),
                    );
                    context.addins.insert(raw);
                }
                Directive::Tool(raw) => {
                    context.diagnose(
                        Severity::Information,
                        path,
                        line_number,
                        format!("tool '{raw}' is recorded but not restored"),
                    );
                    context.tools.insert(raw);
                }
            }
        }

        Ok(())
    }

    fn load(
        &self,
        raw: &str,
        base: &Path,
        (origin, line_number): (&Path, usize),
        visited: &mut HashSet<PathBuf>,
        context: &mut ScriptContext,
    ) -> Result<(), ProcessError> {
        let file = match LoadTarget::parse(raw) {
            LoadTarget::File(file) => file,
            LoadTarget::Unsupported { scheme } => {
                context.diagnose(
                    Severity::Warning,
                    origin,
                    line_number,
                    format!("unsupported load scheme '{scheme}' in '{raw}'"),
                );
                return Ok(());
            }
        };

        let target = normalize_path(Path::new(&file), base);
        if !visited.insert(target.clone()) {
            debug!("Skipping already loaded script {}", target.display());
            return Ok(());
        }

        context.loaded_scripts.push(target.clone());
        self.process_file(&target, visited, context)
    }
}
