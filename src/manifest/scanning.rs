//! Directory scanning utilities for harvesting asset paths.

use std::fs;
use std::path::{Component, Path, PathBuf};

use same_file::is_same_file;

/// Walk `dir` top-down and return the path of every regular file, prefixed by `display_root`.
///
/// Files of a directory are listed before its subdirectories are entered, in the order the
/// filesystem reports them. A missing or unreadable directory contributes nothing. Symbolic
/// links to files are listed; symbolic links to directories are not followed. When `skip` is
/// given, the file it refers to is left out of the listing.
pub fn collect_asset_paths(dir: &Path, display_root: &Path, skip: Option<&Path>) -> Vec<String> {
    let mut paths = Vec::new();
    collect_recursively(dir, display_root, skip, &mut paths);
    paths
}

fn collect_recursively(
    dir: &Path,
    relative_root: &Path,
    skip: Option<&Path>,
    paths: &mut Vec<String>,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!(dir = %dir.display(), error = %err, "skipping unreadable directory");
            return;
        }
    };

    let mut subdirs: Vec<(PathBuf, PathBuf)> = Vec::new();

    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();
        let next_relative = relative_root.join(entry.file_name());

        if file_type.is_dir() {
            subdirs.push((path, next_relative));
            continue;
        }

        let is_file = file_type.is_file()
            || (file_type.is_symlink() && fs::metadata(&path).is_ok_and(|meta| meta.is_file()));
        if !is_file {
            continue;
        }

        if skip.is_some_and(|skip| is_same_file(&path, skip).unwrap_or(false)) {
            tracing::debug!(path = %path.display(), "leaving output file out of the manifest");
            continue;
        }

        let Some(rel_path_str) = manifest_path(&next_relative) else {
            tracing::warn!(path = %path.display(), "skipping asset with a non UTF-8 file name");
            continue;
        };
        tracing::debug!(asset = %rel_path_str, "discovered asset");
        paths.push(rel_path_str);
    }

    for (path, next_relative) in subdirs {
        collect_recursively(&path, &next_relative, skip, paths);
    }
}

/// Join the components of `path` with `/`, leaving separator-like characters inside a file
/// name untouched. Returns `None` when any component is not valid UTF-8.
fn manifest_path(path: &Path) -> Option<String> {
    let mut joined = String::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => joined.push_str(prefix.as_os_str().to_str()?),
            Component::RootDir => joined.push('/'),
            other => {
                if !joined.is_empty() && !joined.ends_with('/') {
                    joined.push('/');
                }
                joined.push_str(other.as_os_str().to_str()?);
            }
        }
    }
    Some(joined)
}
