use crate::{Error, Result};
use std::path::Path;
use wsnav_types::{WorkspaceMeta, META_FILE};

/// Result of a template-creation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    AlreadyExists,
}

/// Write a template `ws_info.toml` into `workspace` unless one already
/// exists. An existing file is never overwritten.
pub fn create_meta(workspace: &Path) -> Result<CreateOutcome> {
    if !workspace.is_dir() {
        return Err(Error::NotADirectory(workspace.to_path_buf()));
    }

    let meta_path = workspace.join(META_FILE);
    if meta_path.exists() {
        return Ok(CreateOutcome::AlreadyExists);
    }

    WorkspaceMeta::example().save(&meta_path)?;
    Ok(CreateOutcome::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_creates_template_once() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();

        assert_eq!(create_meta(temp_dir.path())?, CreateOutcome::Created);
        let meta = WorkspaceMeta::load(&temp_dir.path().join(META_FILE))?;
        assert_eq!(meta.info.aliases, vec!["example-alias"]);

        // Second run must not touch the existing file.
        fs::write(temp_dir.path().join(META_FILE), "[accounts]\nkept = \"1\"\n").unwrap();
        assert_eq!(create_meta(temp_dir.path())?, CreateOutcome::AlreadyExists);
        let meta = WorkspaceMeta::load(&temp_dir.path().join(META_FILE))?;
        assert_eq!(meta.accounts.get("kept").map(String::as_str), Some("1"));
        Ok(())
    }

    #[test]
    fn test_missing_workspace_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        match create_meta(&missing) {
            Err(Error::NotADirectory(path)) => assert_eq!(path, missing),
            other => panic!("expected NotADirectory, got {:?}", other),
        }
    }
}
