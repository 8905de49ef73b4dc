use crate::config::Config;
use anyhow::{Context, Result};
use wsnav_engine::discover;

pub fn handle(config: &Config) -> Result<()> {
    let workspaces =
        discover(&config.root_directory).context("failed to list workspaces")?;

    if workspaces.is_empty() {
        println!("No valid workspaces found.");
        return Ok(());
    }

    let mut names: Vec<String> = workspaces.into_iter().map(|ws| ws.name).collect();
    names.sort();

    println!("Workspaces:");
    for name in names {
        println!("- {}", name);
    }
    Ok(())
}
