//! File system module: the file access seam used by every pass
//!
//! All reads and existence checks go through [`FileSystem`] so the project
//! system can be driven against the real disk or a test double.

mod path;
mod physical;

pub use path::normalize_path;
pub use physical::PhysicalFileSystem;

use std::io;
use std::path::{Path, PathBuf};

/// File access required by discovery, directive processing and reference resolution
pub trait FileSystem {
    /// Whether a file exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file as UTF-8 text
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or is not valid UTF-8.
    fn read_all_text(&self, path: &Path) -> io::Result<String>;

    /// List the files directly inside `directory` whose extension matches
    /// `extension` (case-insensitive). Subdirectories are not descended.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be listed.
    fn list_files(&self, directory: &Path, extension: &str) -> io::Result<Vec<PathBuf>>;
}
