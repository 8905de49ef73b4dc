use crate::config::Config;
use crate::presentation::emit_warnings;
use anyhow::{Context, Result};
use wsnav_engine::{aggregate, discover};

pub fn handle(config: &Config) -> Result<()> {
    let workspaces =
        discover(&config.root_directory).context("failed to list workspaces")?;

    if workspaces.is_empty() {
        println!("No valid workspaces found.");
        return Ok(());
    }

    let result = aggregate(&workspaces);
    emit_warnings(&result.diagnostics);

    if result.table.is_empty() {
        println!("No aliases found in any workspace.");
        return Ok(());
    }

    println!("Aliases for each workspace:");
    for (alias, workspace) in result.table.iter() {
        println!("Alias: {} => Workspace: {}", alias, workspace);
    }
    Ok(())
}
