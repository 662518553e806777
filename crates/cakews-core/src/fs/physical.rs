//! File system backed by the local disk

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::FileSystem;

/// [`FileSystem`] implementation over `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct PhysicalFileSystem;

impl PhysicalFileSystem {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FileSystem for PhysicalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_all_text(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn list_files(&self, directory: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
        if !directory.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("not a directory: {}", directory.display()),
            ));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(directory)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = match entry {
                Ok(entry) => entry,
                // A dangling symlink is not a file.
                Err(err) if err.depth() > 0 && is_not_found(&err) => continue,
                Err(err) => return Err(io::Error::from(err)),
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let matches = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
            if matches {
                files.push(entry.into_path());
            }
        }
        files.sort();
        Ok(files)
    }
}

fn is_not_found(err: &walkdir::Error) -> bool {
    err.io_error()
        .is_some_and(|source| source.kind() == io::ErrorKind::NotFound)
}
