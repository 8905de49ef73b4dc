//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join("workspaces");
        fs::create_dir_all(&root).expect("Failed to create root dir");

        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Create a workspace directory with the given metadata content.
    pub fn add_workspace(&self, name: &str, meta: &str) -> PathBuf {
        let dir = self.root.join(name);
        fs::create_dir_all(&dir).expect("Failed to create workspace dir");
        fs::write(dir.join("ws_info.toml"), meta).expect("Failed to write metadata");
        dir
    }

    /// Create a plain directory without metadata (not a workspace).
    pub fn add_plain_dir(&self, name: &str) -> PathBuf {
        let dir = self.root.join(name);
        fs::create_dir_all(&dir).expect("Failed to create dir");
        dir
    }

    /// A `wsnav` command pointed at this fixture's root via WSNAV_ROOT.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("wsnav").expect("Failed to find wsnav binary");
        cmd.env("WSNAV_ROOT", &self.root);
        cmd
    }
}
