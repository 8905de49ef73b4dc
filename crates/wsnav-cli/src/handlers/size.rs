use crate::config::Config;
use crate::handlers::select;
use crate::presentation::{emit_warnings, format_bytes};
use anyhow::{Context, Result};
use wsnav_engine::{measure, resolve};
use wsnav_types::WorkspaceMeta;

pub fn handle(config: &Config, workspace: Option<&str>) -> Result<()> {
    let name = match workspace {
        Some(name) => name.to_string(),
        None => select::choose(config)?,
    };

    let ws = resolve(&config.root_directory, &name)?;
    // Sizing a directory that is not a workspace is almost always a typo;
    // require the metadata to decode first.
    WorkspaceMeta::load(&ws.meta_path()).with_context(|| {
        format!("workspace '{}' does not have a valid ws_info.toml", name)
    })?;

    let report = measure(&ws.path)?;
    emit_warnings(&report.diagnostics);

    println!(
        "Total size of workspace '{}': {}",
        name,
        format_bytes(report.total_bytes)
    );
    Ok(())
}
