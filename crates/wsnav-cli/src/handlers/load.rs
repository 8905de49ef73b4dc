use crate::config::Config;
use crate::handlers::select;
use crate::presentation::{emit_warnings, print_meta};
use anyhow::Result;
use wsnav_engine::{list_entries, resolve};
use wsnav_types::WorkspaceMeta;

pub fn handle(config: &Config, workspace: Option<&str>) -> Result<()> {
    let name = match workspace {
        Some(name) => name.to_string(),
        None => select::choose(config)?,
    };

    let ws = resolve(&config.root_directory, &name)?;
    let meta = WorkspaceMeta::load(&ws.meta_path())?;

    println!();
    println!("Contents of {}:", ws.meta_path().display());
    print_meta(&meta, true);

    println!();
    println!("Contents of workspace '{}':", name);
    let listing = list_entries(&ws.path)?;
    emit_warnings(&listing.diagnostics);

    if listing.dirs.is_empty() {
        println!("No subdirectories found.");
    } else {
        println!("Directories:");
        for dir in &listing.dirs {
            println!("  - {}", dir);
        }
    }

    if listing.files.is_empty() {
        println!("No files found.");
    } else {
        println!("Files:");
        for file in &listing.files {
            println!("  - {}", file);
        }
    }
    Ok(())
}
