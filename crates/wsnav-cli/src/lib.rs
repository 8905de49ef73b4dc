mod args;
mod commands;
pub mod config;
mod handlers;
mod presentation;

pub use args::{Cli, Commands};
pub use commands::run;
