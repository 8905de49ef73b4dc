use crate::{Diagnostic, Result};
use std::path::Path;
use wsnav_types::META_FILE;

/// Immediate children of a workspace, split into directories and files.
/// Ordering follows the filesystem listing; callers re-sort when needed.
#[derive(Debug, Default)]
pub struct WorkspaceListing {
    pub dirs: Vec<String>,
    pub files: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Enumerate a workspace's direct contents, excluding `ws_info.toml` and
/// hidden entries. Entries that cannot be stat-ed are reported and left out.
pub fn list_entries(workspace: &Path) -> Result<WorkspaceListing> {
    let entries = std::fs::read_dir(workspace)?;

    let mut listing = WorkspaceListing::default();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                listing.diagnostics.push(Diagnostic::EntrySkipped {
                    path: workspace.to_path_buf(),
                    reason: err.to_string(),
                });
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if name == META_FILE || name.starts_with('.') {
            continue;
        }

        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => listing.dirs.push(name),
            Ok(_) => listing.files.push(name),
            Err(err) => listing.diagnostics.push(Diagnostic::EntrySkipped {
                path: entry.path(),
                reason: err.to_string(),
            }),
        }
    }
    Ok(listing)
}
