use crate::args::{Cli, Commands};
use crate::config::Config;
use crate::handlers;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::List => handlers::list::handle(&config),
        Commands::Aliases => handlers::aliases::handle(&config),
        Commands::GenerateAliases => handlers::generate::handle(&config),
        Commands::Info { workspace } => handlers::info::handle(&config, &workspace),
        Commands::Load { workspace } => handlers::load::handle(&config, workspace.as_deref()),
        Commands::Size { workspace } => handlers::size::handle(&config, workspace.as_deref()),
        Commands::New { workspace } => handlers::new_meta::handle(&config, &workspace),
        Commands::Repl => handlers::repl::handle(&config),
    }
}
