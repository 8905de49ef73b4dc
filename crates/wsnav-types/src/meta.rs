use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Well-known metadata file name at the root of every workspace.
pub const META_FILE: &str = "ws_info.toml";

/// The declared contents of one workspace's `ws_info.toml`.
///
/// Built fresh on every load; nothing caches these between commands.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorkspaceMeta {
    #[serde(default)]
    pub accounts: HashMap<String, String>,
    #[serde(default)]
    pub info: InfoSection,
}

/// The `[info]` table: free-form tags plus globally-unique navigation aliases.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InfoSection {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl WorkspaceMeta {
    /// Decode a metadata file. Either the whole document decodes or the
    /// call fails; a missing section just yields empty containers.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|err| Error::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Write the document to `path` as pretty TOML.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|err| Error::Encode(err.to_string()))?;
        std::fs::write(path, content).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Template document written by `wsnav new`, intended for the operator
    /// to edit.
    pub fn example() -> Self {
        WorkspaceMeta {
            accounts: HashMap::from([("default_account".to_string(), "abc123".to_string())]),
            info: InfoSection {
                tags: vec!["example-tag".to_string()],
                aliases: vec!["example-alias".to_string()],
            },
        }
    }

    /// Account entries sorted by label, for deterministic display.
    pub fn sorted_accounts(&self) -> Vec<(&String, &String)> {
        let mut accounts: Vec<_> = self.accounts.iter().collect();
        accounts.sort_by_key(|(label, _)| *label);
        accounts
    }
}
