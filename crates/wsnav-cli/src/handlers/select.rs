use crate::config::Config;
use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use std::io::Write;
use wsnav_engine::{discover, resolve_choice};

/// Present the discovered workspaces as a numbered list and resolve one
/// prompt/response exchange into a workspace name.
pub fn choose(config: &Config) -> Result<String> {
    let workspaces =
        discover(&config.root_directory).context("failed to list workspaces")?;

    if workspaces.is_empty() {
        bail!(
            "no workspaces found in root directory '{}'",
            config.root_directory.display()
        );
    }

    if !std::io::stdin().is_terminal() {
        bail!("workspace name required when stdin is not a terminal");
    }

    println!("Available Workspaces:");
    for (i, ws) in workspaces.iter().enumerate() {
        println!("{}) {}", i + 1, ws.name);
    }

    print!(
        "Enter the number of the workspace to load (1-{}): ",
        workspaces.len()
    );
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    let index = resolve_choice(&input, workspaces.len())?;
    Ok(workspaces[index].name.clone())
}
