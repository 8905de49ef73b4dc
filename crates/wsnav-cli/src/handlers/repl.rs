use crate::config::Config;
use crate::handlers;
use anyhow::{anyhow, Result};
use std::io::{BufRead, Write};

const HELP_TEXT: &str = "
Available Commands:
  list                  List all workspaces
  aliases               List all aliases for each workspace
  generate-aliases      Generate shell alias commands
  info <workspace>      Display workspace metadata
  load [workspace]      Display workspace metadata and contents
  size [workspace]      Calculate the size of a workspace
  new <workspace>       Create a default ws_info.toml
  help                  Show this help
  exit, quit            Leave the shell
";

pub fn handle(config: &Config) -> Result<()> {
    println!("Welcome to the wsnav shell. Type 'help' to see available commands.");

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("wsnav> ");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF ends the loop like an explicit exit.
            println!();
            return Ok(());
        }

        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        let outcome = match command.to_lowercase().as_str() {
            "help" => {
                println!("{}", HELP_TEXT);
                Ok(())
            }
            "exit" | "quit" => {
                println!("Goodbye!");
                return Ok(());
            }
            "list" => handlers::list::handle(config),
            "aliases" => handlers::aliases::handle(config),
            "generate-aliases" => handlers::generate::handle(config),
            "info" => match args.first() {
                Some(workspace) => handlers::info::handle(config, workspace),
                None => Err(anyhow!("workspace name is required")),
            },
            "load" => handlers::load::handle(config, args.first().copied()),
            "size" => handlers::size::handle(config, args.first().copied()),
            "new" => match args.first() {
                Some(workspace) => handlers::new_meta::handle(config, workspace),
                None => Err(anyhow!("workspace name is required")),
            },
            other => {
                println!("Unknown command: {}", other);
                Ok(())
            }
        };

        // Errors inside the loop are reported, never fatal.
        if let Err(err) = outcome {
            eprintln!("Error: {:#}", err);
        }
    }
}
