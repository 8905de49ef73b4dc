use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wsnav")]
#[command(about = "Manage workspace directories and their navigation aliases", long_about = None)]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all workspaces under the configured root
    List,

    /// List all aliases declared across workspaces
    Aliases,

    /// Generate shell alias commands for quick navigation
    GenerateAliases,

    /// Display the metadata of a workspace
    Info {
        /// Workspace name under the root
        workspace: String,
    },

    /// Display a workspace's metadata and its contents
    Load {
        /// Workspace name; prompts for a selection when omitted
        workspace: Option<String>,
    },

    /// Calculate the total size of a workspace
    Size {
        /// Workspace name; prompts for a selection when omitted
        workspace: Option<String>,
    },

    /// Create a default ws_info.toml in the given workspace
    New {
        /// Workspace name under the root
        workspace: String,
    },

    /// Start the interactive wsnav shell
    Repl,
}
