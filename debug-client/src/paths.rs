// Source path normalization
//
// Breakpoints are compared in one canonical form: relative to the project root.
// Normalization is purely lexical; remote paths need not exist locally.

use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Fold `.` and `..` components without touching the filesystem
pub fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    out
}

/// Convert `path` to the canonical form used for breakpoint identity.
///
/// Absolute paths under `root` become root-relative. Relative paths are taken
/// to be root-relative already. Absolute paths outside the root cannot be
/// resolved and are returned cleaned but still absolute.
pub fn normalize(path: &Path, root: &Path) -> PathBuf {
    let cleaned = clean(path);

    if !cleaned.is_absolute() {
        return cleaned;
    }

    match cleaned.strip_prefix(clean(root)) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
        _ => {
            debug!(
                "Path {} is outside project root {}, keeping it absolute",
                cleaned.display(),
                root.display()
            );
            cleaned
        }
    }
}
