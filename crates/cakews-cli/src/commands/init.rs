//! Init command: Project the scripts of a directory into a workspace

use std::path::Path;

use anyhow::Result;
use cakews_core::{CakeProjectSystem, EngineConfig, InMemoryWorkspace, InitializeReport};
use serde::Serialize;
use tracing::info;

/// Run the init command
///
/// # Errors
/// Returns an error if the directory cannot be listed or the output cannot be rendered.
pub fn run(path: &Path, config: &EngineConfig, json: bool) -> Result<()> {
    let (report, workspace) = initialize(path, config)?;

    if json {
        println!("{}", render_json(&report, &workspace)?);
    } else {
        print!("{}", render_summary(&report, &workspace));
    }
    Ok(())
}

/// Run one pass against a fresh in-memory workspace
///
/// # Errors
/// Returns an error if the directory cannot be listed.
pub fn initialize(path: &Path, config: &EngineConfig) -> Result<(InitializeReport, InMemoryWorkspace)> {
    info!("Initializing Cake workspace: {}", path.display());

    let mut system = CakeProjectSystem::new(path, config.clone());
    let mut workspace = InMemoryWorkspace::new();
    let report = system.initialize(&mut workspace)?;
    Ok((report, workspace))
}

#[derive(Serialize)]
struct FailureView<'a> {
    path: &'a Path,
    error: String,
}

#[derive(Serialize)]
struct InitView<'a> {
    context: &'a cakews_core::CakeContext,
    workspace: &'a InMemoryWorkspace,
    failures: Vec<FailureView<'a>>,
}

/// Render the context, workspace and failures as pretty JSON
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_json(report: &InitializeReport, workspace: &InMemoryWorkspace) -> Result<String> {
    let view = InitView {
        context: &report.context,
        workspace,
        failures: report
            .failures
            .iter()
            .map(|f| FailureView {
                path: &f.path,
                error: f.error.to_string(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&view)?)
}

/// Render a human readable summary of the pass
#[must_use]
pub fn render_summary(report: &InitializeReport, workspace: &InMemoryWorkspace) -> String {
    let mut out = String::new();

    if report.is_empty() {
        out.push_str("No Cake files found\n");
        return out;
    }

    for entry in &report.entries {
        let name = workspace
            .project(entry.project)
            .map_or("?", |p| p.name.as_str());
        out.push_str(&format!("{name} ({})\n", entry.path.display()));
        for id in &entry.loaded {
            if let Some(project) = workspace.project(*id) {
                out.push_str(&format!("  -> {}\n", project.name));
            }
        }
        for addin in &entry.addins {
            out.push_str(&format!("  addin {addin} (not restored)\n"));
        }
        for tool in &entry.tools {
            out.push_str(&format!("  tool {tool} (not restored)\n"));
        }
    }

    for failure in &report.failures {
        out.push_str(&format!(
            "failed {}: {}\n",
            failure.path.display(),
            failure.error
        ));
    }

    out.push_str(&format!(
        "{} projects, {} documents, {} references, {} usings\n",
        workspace.projects().len(),
        workspace.documents().len(),
        report.context.references.len(),
        report.context.usings.len()
    ));
    out
}
