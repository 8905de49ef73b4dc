use crate::{Diagnostic, Error, Result};
use std::path::Path;
use walkdir::WalkDir;
use wsnav_types::META_FILE;

/// Total byte count for one workspace at one point in time, plus every
/// entry that had to be skipped along the way. Never incremental; refresh
/// means a full re-walk.
#[derive(Debug, Default)]
pub struct SizeReport {
    pub total_bytes: u64,
    pub diagnostics: Vec<Diagnostic>,
}

/// Sum the sizes of all files reachable under `workspace`.
///
/// Entries named `ws_info.toml` are excluded at any depth (simple
/// name-based filter). Directories contribute nothing. Per-entry traversal
/// errors become diagnostics and the walk continues; only a root that
/// cannot be walked at all is fatal. Hard links are not de-duplicated.
pub fn measure(workspace: &Path) -> Result<SizeReport> {
    let root_meta = std::fs::metadata(workspace)?;
    if !root_meta.is_dir() {
        return Err(Error::NotADirectory(workspace.to_path_buf()));
    }

    let mut report = SizeReport::default();
    for entry in WalkDir::new(workspace) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| workspace.to_path_buf());
                report.diagnostics.push(Diagnostic::EntrySkipped {
                    path,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        if entry.file_name() == META_FILE {
            continue;
        }
        if !entry.file_type().is_file() {
            continue;
        }

        match entry.metadata() {
            Ok(meta) => report.total_bytes += meta.len(),
            Err(err) => report.diagnostics.push(Diagnostic::EntrySkipped {
                path: entry.path().to_path_buf(),
                reason: err.to_string(),
            }),
        }
    }
    Ok(report)
}
