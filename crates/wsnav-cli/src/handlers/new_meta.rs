use crate::config::Config;
use anyhow::Result;
use wsnav_engine::{create_meta, CreateOutcome};
use wsnav_types::META_FILE;

pub fn handle(config: &Config, workspace: &str) -> Result<()> {
    let workspace_path = config.root_directory.join(workspace);
    let meta_path = workspace_path.join(META_FILE);

    match create_meta(&workspace_path)? {
        CreateOutcome::Created => {
            println!("Created default {} at {}", META_FILE, meta_path.display());
        }
        CreateOutcome::AlreadyExists => {
            println!(
                "{} already exists at {}; skipping creation.",
                META_FILE,
                meta_path.display()
            );
        }
    }
    Ok(())
}
