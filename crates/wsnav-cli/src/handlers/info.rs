use crate::config::Config;
use crate::presentation::print_meta;
use anyhow::Result;
use wsnav_engine::resolve;
use wsnav_types::WorkspaceMeta;

pub fn handle(config: &Config, workspace: &str) -> Result<()> {
    let ws = resolve(&config.root_directory, workspace)?;
    let meta = WorkspaceMeta::load(&ws.meta_path())?;

    println!("Contents of {}:", ws.meta_path().display());
    print_meta(&meta, false);
    Ok(())
}
