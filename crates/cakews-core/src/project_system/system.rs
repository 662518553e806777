//! Cake project system

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::context::CakeContext;
use crate::directive::DirectiveProcessor;
use crate::engine::{CakeEngineDefaults, EngineConfig, EngineDefaults};
use crate::fs::{normalize_path, FileSystem, PhysicalFileSystem};
use crate::projector::Projector;
use crate::reference::ReferenceResolver;
use crate::scanner::{DiscoveryError, Scanner};
use crate::workspace::{ProjectId, WorkspaceError, WorkspaceMutation};

use super::report::{EntryError, EntryFailure, InitializeReport, ProjectedEntry};

/// Projects the Cake scripts of one root directory into a workspace
pub struct CakeProjectSystem {
    root: PathBuf,
    config: EngineConfig,
    fs: Box<dyn FileSystem>,
    engine: Box<dyn EngineDefaults>,
    /// Projects registered by the previous pass
    registered: Vec<ProjectId>,
}

struct EngineInputs {
    namespaces: Vec<String>,
    references: Vec<PathBuf>,
}

impl CakeProjectSystem {
    /// Create a project system over the local disk with engine defaults from `config`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, config: EngineConfig) -> Self {
        let engine = CakeEngineDefaults::new(&config);
        Self {
            root: root.into(),
            config,
            fs: Box::new(PhysicalFileSystem::new()),
            engine: Box::new(engine),
            registered: Vec::new(),
        }
    }

    /// Use a different file system
    #[must_use]
    pub fn with_file_system(mut self, fs: Box<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    /// Use different engine defaults
    #[must_use]
    pub fn with_engine_defaults(mut self, engine: Box<dyn EngineDefaults>) -> Self {
        self.engine = engine;
        self
    }

    /// Projects this system has registered and not yet removed
    #[must_use]
    pub fn registered_projects(&self) -> &[ProjectId] {
        &self.registered
    }

    /// Discover the entry scripts and project each one into `workspace`.
    ///
    /// Projects registered by a previous pass of this system are removed
    /// first. A failing entry script is logged and reported; the others are
    /// still processed.
    ///
    /// # Errors
    /// Returns [`DiscoveryError`] if the root directory cannot be listed.
    /// Nothing in the workspace is touched in that case.
    pub fn initialize(
        &mut self,
        workspace: &mut dyn WorkspaceMutation,
    ) -> Result<InitializeReport, DiscoveryError> {
        info!("Detecting Cake files in '{}'.", self.root.display());

        let entries = Scanner::new(&self.root)
            .with_extension(self.config.extension.as_str())
            .scan(self.fs.as_ref())?;

        self.clear_previous(workspace);

        let mut report = InitializeReport::default();
        if entries.is_empty() {
            info!("Could not find any Cake files");
            return Ok(report);
        }

        let cwd = std::env::current_dir().unwrap_or_default();
        report.context.set_path(normalize_path(&self.root, &cwd));
        info!("Found {} Cake files.", entries.len());

        let inputs = EngineInputs {
            namespaces: self.engine.default_namespaces(),
            references: self.engine.default_references(self.fs.as_ref()),
        };

        for entry in entries {
            match self.process_entry(&entry, &inputs, workspace, &mut report.context) {
                Ok(projected) => {
                    self.registered.push(projected.project);
                    self.registered.extend(projected.loaded.iter().copied());
                    report.entries.push(projected);
                }
                Err(e) => {
                    error!(
                        "{} will be ignored due to the following error: {}",
                        entry.display(),
                        e
                    );
                    report.failures.push(EntryFailure { path: entry, error: e });
                }
            }
        }

        info!(
            "Projected {} of {} Cake files into {} projects",
            report.entries.len(),
            report.entries.len() + report.failures.len(),
            report.project_count()
        );
        Ok(report)
    }

    fn process_entry(
        &self,
        entry: &Path,
        inputs: &EngineInputs,
        workspace: &mut dyn WorkspaceMutation,
        context: &mut CakeContext,
    ) -> Result<ProjectedEntry, EntryError> {
        let script = DirectiveProcessor::new(self.fs.as_ref()).process(entry)?;
        for diagnostic in &script.diagnostics {
            diagnostic.emit();
        }

        let references = ReferenceResolver::new(self.fs.as_ref(), self.engine.assembly_directory())
            .resolve_all(&inputs.references, &script.references);

        let projection = Projector::new(self.fs.as_ref(), self.config.language_version.as_str())
            .with_host_object_type(self.config.host_object_type.as_str())
            .project(&script, &inputs.namespaces, &references)?;

        let scripts: Vec<PathBuf> = projection.script_paths().map(Path::to_path_buf).collect();
        let usings = projection.usings().to_vec();
        let reference_names: Vec<String> =
            projection.references().iter().map(|r| r.display()).collect();

        let committed = projection.commit(workspace)?;

        context.record_cake_files(scripts);
        context.record_references(reference_names);
        context.record_usings(usings);

        debug!(
            "{} projected with {} loaded scripts",
            entry.display(),
            committed.loaded.len()
        );

        Ok(ProjectedEntry {
            path: script.entry,
            project: committed.entry,
            loaded: committed.loaded,
            loaded_scripts: script.loaded_scripts,
            addins: script.addins,
            tools: script.tools,
        })
    }

    fn clear_previous(&mut self, workspace: &mut dyn WorkspaceMutation) {
        if self.registered.is_empty() {
            return;
        }
        debug!("Removing {} projects from the previous pass", self.registered.len());
        for id in std::mem::take(&mut self.registered) {
            match workspace.remove_project(id) {
                Ok(()) | Err(WorkspaceError::UnknownProject(_)) => {}
                Err(e) => {
                    error!("Failed to remove project {}: {}", id, e);
                    self.registered.push(id);
                }
            }
        }
    }
}
