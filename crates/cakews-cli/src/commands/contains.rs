//! Contains command: Check whether a file is one of the discovered scripts

use std::path::Path;

use anyhow::Result;
use cakews_core::EngineConfig;

/// Run the contains command. Returns whether `file` was found.
///
/// # Errors
/// Returns an error if the directory cannot be listed.
pub fn run(path: &Path, file: &Path, config: &EngineConfig) -> Result<bool> {
    let found = check(path, file, config)?;
    println!("{}", if found { "yes" } else { "no" });
    Ok(found)
}

/// Whether `file` is among the scripts reachable from `path`
///
/// # Errors
/// Returns an error if the directory cannot be listed.
pub fn check(path: &Path, file: &Path, config: &EngineConfig) -> Result<bool> {
    let (report, _) = super::init::initialize(path, config)?;
    Ok(report.context.is_cake_file(file))
}
