//! Lexical path normalisation

use std::path::{Component, Path, PathBuf};

/// Normalise a path without touching the disk.
///
/// Relative paths are anchored at `base`. `.` components are dropped and
/// `..` pops the previous component; a `..` at the root is discarded.
/// Symlinks are not resolved, so a missing file still gets a stable identity.
#[must_use]
pub fn normalize_path(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir | Component::Prefix(_))
                );
                if !at_root {
                    out.pop();
                }
            }
            Component::Normal(name) => out.push(name),
        }
    }
    out
}
