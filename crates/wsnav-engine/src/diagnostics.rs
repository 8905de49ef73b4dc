use std::fmt;
use std::path::PathBuf;

/// A recovered error or policy-driven overwrite, surfaced as a warning.
///
/// Carried in result values rather than printed at the point of failure, so
/// callers (and tests) can inspect exactly what was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A workspace's metadata failed to decode during aggregation
    MetaSkipped { workspace: String, reason: String },

    /// Two workspaces declared the same alias; the later claim won
    AliasOverwritten {
        alias: String,
        previous: String,
        current: String,
    },

    /// An aggregated alias points at a workspace that is no longer discoverable
    AliasUnresolved { alias: String, workspace: String },

    /// A filesystem entry could not be traversed and was left out
    EntrySkipped { path: PathBuf, reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MetaSkipped { workspace, reason } => {
                write!(f, "skipping workspace '{}': {}", workspace, reason)
            }
            Diagnostic::AliasOverwritten {
                alias,
                previous,
                current,
            } => write!(
                f,
                "duplicate alias '{}': definition from '{}' overwritten by '{}'",
                alias, previous, current
            ),
            Diagnostic::AliasUnresolved { alias, workspace } => write!(
                f,
                "workspace '{}' not found for alias '{}'",
                workspace, alias
            ),
            Diagnostic::EntrySkipped { path, reason } => {
                write!(f, "skipping '{}': {}", path.display(), reason)
            }
        }
    }
}
