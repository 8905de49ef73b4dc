//! End-to-end checks over a real on-disk root: discovery feeding the
//! aggregator, sizing, and listing together.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wsnav_engine::{aggregate, discover, list_entries, measure, shell_directives, Diagnostic};
use wsnav_types::META_FILE;

fn write_workspace(root: &Path, name: &str, meta: &str) {
    let dir = root.join(name);
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join(META_FILE), meta).unwrap();
}

#[test]
fn overlapping_aliases_resolve_to_later_workspace() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_workspace(root, "proj-a", "[info]\naliases = [\"pa\"]\n");
    write_workspace(root, "proj-b", "[info]\naliases = [\"pb\", \"pa\"]\n");

    let workspaces = discover(root).unwrap();
    assert_eq!(workspaces.len(), 2);

    let result = aggregate(&workspaces);
    assert_eq!(result.table.get("pa"), Some("proj-b"));
    assert_eq!(result.table.get("pb"), Some("proj-b"));
    assert_eq!(
        result.diagnostics,
        vec![Diagnostic::AliasOverwritten {
            alias: "pa".to_string(),
            previous: "proj-a".to_string(),
            current: "proj-b".to_string(),
        }]
    );

    let (directives, diagnostics) = shell_directives(&result.table, &workspaces);
    assert!(diagnostics.is_empty());
    let rendered: Vec<String> = directives.iter().map(|d| d.render()).collect();
    assert_eq!(
        rendered,
        vec![
            format!("alias pa=\"cd '{}'\"", root.join("proj-b").display()),
            format!("alias pb=\"cd '{}'\"", root.join("proj-b").display()),
        ]
    );
}

#[test]
fn workspace_with_only_hidden_entries_lists_empty_and_sizes_zero() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_workspace(root, "quiet", "[info]\ntags = [\"t\"]\n");

    let ws = root.join("quiet");
    fs::create_dir(ws.join(".git")).unwrap();
    fs::write(ws.join(".envrc"), "export A=1\n").unwrap();

    let listing = list_entries(&ws).unwrap();
    assert!(listing.dirs.is_empty());
    assert!(listing.files.is_empty());

    // Hidden entries still count toward size; only the metadata file is
    // excluded from the walk.
    let report = measure(&ws).unwrap();
    assert_eq!(report.total_bytes, "export A=1\n".len() as u64);
}

#[test]
fn discovery_is_fresh_on_every_call() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_workspace(root, "one", "");
    assert_eq!(discover(root).unwrap().len(), 1);

    write_workspace(root, "two", "");
    let mut names: Vec<String> = discover(root)
        .unwrap()
        .into_iter()
        .map(|ws| ws.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["one", "two"]);

    fs::remove_dir_all(root.join("one")).unwrap();
    let names: Vec<String> = discover(root)
        .unwrap()
        .into_iter()
        .map(|ws| ws.name)
        .collect();
    assert_eq!(names, vec!["two"]);
}
