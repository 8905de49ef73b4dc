use crate::Diagnostic;
use std::collections::BTreeMap;
use std::path::PathBuf;
use wsnav_types::{WorkspaceMeta, WorkspaceRef};

/// Alias name -> owning workspace name, unique by construction.
///
/// Enumeration is lexicographic by alias; determinism here is a contract,
/// not a side effect of the map implementation.
#[derive(Debug, Default, Clone)]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (alias, workspace) pairs in lexicographic alias order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(alias, ws)| (alias.as_str(), ws.as_str()))
    }
}

/// Outcome of one aggregation pass: the merged table plus every warning
/// produced while building it.
#[derive(Debug, Default)]
pub struct Aggregation {
    pub table: AliasTable,
    pub diagnostics: Vec<Diagnostic>,
}

/// Merge alias declarations from every workspace into one namespace.
///
/// Workspaces are processed in lexicographic name order so that the
/// last-writer-wins collision policy resolves the same way on every run,
/// independent of filesystem listing order. A workspace whose metadata
/// fails to decode is skipped with a diagnostic; one bad workspace never
/// hides the aliases of all the others. Re-declaring an alias within the
/// same workspace re-asserts the mapping silently.
pub fn aggregate(workspaces: &[WorkspaceRef]) -> Aggregation {
    let mut ordered: Vec<&WorkspaceRef> = workspaces.iter().collect();
    ordered.sort_by(|a, b| a.name.cmp(&b.name));

    let mut entries = BTreeMap::new();
    let mut diagnostics = Vec::new();

    for ws in ordered {
        let meta = match WorkspaceMeta::load(&ws.meta_path()) {
            Ok(meta) => meta,
            Err(err) => {
                diagnostics.push(Diagnostic::MetaSkipped {
                    workspace: ws.name.clone(),
                    reason: err.to_string(),
                });
                continue;
            }
        };

        for alias in &meta.info.aliases {
            if let Some(previous) = entries.insert(alias.clone(), ws.name.clone()) {
                if previous != ws.name {
                    diagnostics.push(Diagnostic::AliasOverwritten {
                        alias: alias.clone(),
                        previous,
                        current: ws.name.clone(),
                    });
                }
            }
        }
    }

    Aggregation {
        table: AliasTable { entries },
        diagnostics,
    }
}

/// One `alias <name>="cd '<path>'"` binding for shell consumption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasDirective {
    pub alias: String,
    pub path: PathBuf,
}

impl AliasDirective {
    pub fn render(&self) -> String {
        format!("alias {}=\"cd '{}'\"", self.alias, self.path.display())
    }
}

/// Bind each aggregated alias to the absolute path of its owner.
///
/// An alias whose recorded owner no longer resolves to a discovered
/// workspace is reported instead of emitted.
pub fn shell_directives(
    table: &AliasTable,
    workspaces: &[WorkspaceRef],
) -> (Vec<AliasDirective>, Vec<Diagnostic>) {
    let by_name: BTreeMap<&str, &WorkspaceRef> = workspaces
        .iter()
        .map(|ws| (ws.name.as_str(), ws))
        .collect();

    let mut directives = Vec::new();
    let mut diagnostics = Vec::new();
    for (alias, owner) in table.iter() {
        match by_name.get(owner) {
            Some(ws) => directives.push(AliasDirective {
                alias: alias.to_string(),
                path: ws.path.clone(),
            }),
            None => diagnostics.push(Diagnostic::AliasUnresolved {
                alias: alias.to_string(),
                workspace: owner.to_string(),
            }),
        }
    }
    (directives, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use wsnav_types::META_FILE;

    fn add_workspace(root: &Path, name: &str, aliases: &[&str]) -> WorkspaceRef {
        let dir = root.join(name);
        fs::create_dir(&dir).unwrap();
        let alias_list = aliases
            .iter()
            .map(|a| format!("\"{}\"", a))
            .collect::<Vec<_>>()
            .join(", ");
        fs::write(
            dir.join(META_FILE),
            format!("[info]\naliases = [{}]\n", alias_list),
        )
        .unwrap();
        WorkspaceRef::new(name, dir)
    }

    #[test]
    fn test_distinct_aliases_all_kept() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let workspaces = vec![
            add_workspace(root, "proj-b", &["pb"]),
            add_workspace(root, "proj-a", &["pa"]),
        ];

        let result = aggregate(&workspaces);
        assert_eq!(result.table.len(), 2);
        assert_eq!(result.table.get("pa"), Some("proj-a"));
        assert_eq!(result.table.get("pb"), Some("proj-b"));
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_collision_last_writer_wins_with_one_diagnostic() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        // Input order deliberately reversed: aggregation sorts by name,
        // so proj-b always processes after proj-a.
        let workspaces = vec![
            add_workspace(root, "proj-b", &["pb", "pa"]),
            add_workspace(root, "proj-a", &["pa"]),
        ];

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
    }

    #[test]
    fn test_repeat_within_one_workspace_is_silent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let workspaces = vec![add_workspace(root, "proj-a", &["pa", "pa"])];

        let result = aggregate(&workspaces);
        assert_eq!(result.table.len(), 1);
        assert_eq!(result.table.get("pa"), Some("proj-a"));
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_unparseable_workspace_skipped_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let good = add_workspace(root, "good", &["g"]);

        let bad_dir = root.join("bad");
        fs::create_dir(&bad_dir).unwrap();
        fs::write(bad_dir.join(META_FILE), "[info\nbroken").unwrap();
        let bad = WorkspaceRef::new("bad", bad_dir);

        let result = aggregate(&[good, bad]);
        assert_eq!(result.table.len(), 1);
        assert_eq!(result.table.get("g"), Some("good"));
        assert!(matches!(
            result.diagnostics.as_slice(),
            [Diagnostic::MetaSkipped { workspace, .. }] if workspace == "bad"
        ));
    }

    #[test]
    fn test_table_enumeration_is_lexicographic() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let workspaces = vec![add_workspace(root, "ws", &["zulu", "alpha", "mike"])];

        let result = aggregate(&workspaces);
        let aliases: Vec<&str> = result.table.iter().map(|(alias, _)| alias).collect();
        assert_eq!(aliases, vec!["alpha", "mike", "zulu"]);
    }

    #[test]
    fn test_shell_directives_report_missing_owner() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let workspaces = vec![add_workspace(root, "proj-a", &["pa"])];

        let result = aggregate(&workspaces);
        // Simulate the owner disappearing between aggregation and emission.
        let (directives, diagnostics) = shell_directives(&result.table, &[]);
        assert!(directives.is_empty());
        assert_eq!(
            diagnostics,
            vec![Diagnostic::AliasUnresolved {
                alias: "pa".to_string(),
                workspace: "proj-a".to_string(),
            }]
        );

        let (directives, diagnostics) = shell_directives(&result.table, &workspaces);
        assert_eq!(directives.len(), 1);
        assert_eq!(directives[0].alias, "pa");
        assert_eq!(directives[0].path, root.join("proj-a"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_directive_render_quotes_path() {
        let directive = AliasDirective {
            alias: "pa".to_string(),
            path: PathBuf::from("/tmp/root/proj a"),
        };
        assert_eq!(directive.render(), "alias pa=\"cd '/tmp/root/proj a'\"");
    }
}
