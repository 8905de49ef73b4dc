use crate::config::Config;
use crate::presentation::emit_warnings;
use anyhow::{Context, Result};
use wsnav_engine::{aggregate, discover, shell_directives};

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

    let (directives, unresolved) = shell_directives(&result.table, &workspaces);

    println!("# Generated aliases for wsnav");
    for diag in &unresolved {
        println!("# Warning: {}", diag);
    }
    for directive in &directives {
        println!("{}", directive.render());
    }
    Ok(())
}
