use crate::meta::META_FILE;
use std::path::{Path, PathBuf};

/// A discovered workspace: its base name and absolute path under the root.
///
/// Only valid for the current invocation; every command re-discovers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRef {
    pub name: String,
    pub path: PathBuf,
}

impl WorkspaceRef {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Path of this workspace's `ws_info.toml`.
    pub fn meta_path(&self) -> PathBuf {
        self.path.join(META_FILE)
    }
}

impl AsRef<Path> for WorkspaceRef {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}
