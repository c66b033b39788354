//! Resolution of path arguments to repository-relative paths.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{OpenError, Result};

/// Resolve `arg` against the process working directory.
///
/// See [`resolve_path_from`].
pub fn resolve_path(arg: &str, repo_root: &Path) -> Result<String> {
    if arg.is_empty() {
        return Ok(String::new());
    }
    let cwd = std::env::current_dir().map_err(|_| OpenError::PathNotFound(PathBuf::from(arg)))?;
    resolve_path_from(arg, repo_root, &cwd)
}

/// Resolve `arg` (relative to `base_dir` unless absolute) to a forward-slash
/// path relative to `repo_root`.
///
/// An empty argument yields an empty path. The path must exist and must lie
/// inside `repo_root`; the root itself resolves to an empty path.
pub fn resolve_path_from(arg: &str, repo_root: &Path, base_dir: &Path) -> Result<String> {
    if arg.is_empty() {
        return Ok(String::new());
    }

    let absolute = normalize(&base_dir.join(arg));
    if !absolute.exists() {
        return Err(OpenError::PathNotFound(absolute));
    }

    let root = normalize(repo_root);
    let relative = absolute
        .strip_prefix(&root)
        .map_err(|_| OpenError::PathOutsideRepository {
            path: absolute.clone(),
            root: root.clone(),
        })?;

    let resolved = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(segment) => Some(segment.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");

    debug!(arg, resolved = %resolved, "resolved path argument");
    Ok(resolved)
}

/// Lexically resolve `.` and `..` components. `..` at the root stays at
/// the root.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            other => normalized.push(other),
        }
    }
    normalized
}
