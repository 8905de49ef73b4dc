use crate::{Error, Result};
use std::path::Path;
use wsnav_types::{WorkspaceRef, META_FILE};

/// Scan the root's immediate children for valid workspaces.
///
/// A child is a workspace when it is a directory, its name does not start
/// with `.`, and it contains a `ws_info.toml`. Results come back in
/// directory-listing order; callers that need determinism sort by name.
/// Unreadable children are excluded without failing the scan; only an
/// unlistable root is an error.
pub fn discover(root: &Path) -> Result<Vec<WorkspaceRef>> {
    let entries = std::fs::read_dir(root)?;

    let mut workspaces = Vec::new();
    for entry in entries {
        let Ok(entry) = entry else {
            continue;
        };
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if !file_type.is_dir() {
            continue;
        }

        let path = entry.path();
        if path.join(META_FILE).is_file() {
            workspaces.push(WorkspaceRef::new(name, path));
        }
    }
    Ok(workspaces)
}

/// Resolve a workspace by name without scanning the whole root.
pub fn resolve(root: &Path, name: &str) -> Result<WorkspaceRef> {
    let path = root.join(name);
    if !path.is_dir() {
        return Err(Error::UnknownWorkspace {
            name: name.to_string(),
            root: root.to_path_buf(),
        });
    }
    Ok(WorkspaceRef::new(name, path))
}
