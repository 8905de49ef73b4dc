// Engine module - the workspace registry core (discovery, aggregation, sizing)
// This layer sits between the on-disk metadata (types) and CLI presentation

pub mod aliases;
pub mod diagnostics;
pub mod discover;
pub mod error;
pub mod listing;
pub mod select;
pub mod size;
pub mod template;

pub use aliases::{aggregate, shell_directives, Aggregation, AliasDirective, AliasTable};
pub use diagnostics::Diagnostic;
pub use discover::{discover, resolve};
pub use error::{Error, Result};
pub use listing::{list_entries, WorkspaceListing};
pub use select::resolve_choice;
pub use size::{measure, SizeReport};
pub use template::{create_meta, CreateOutcome};
