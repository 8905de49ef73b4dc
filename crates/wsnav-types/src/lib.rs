pub mod error;
pub mod meta;
pub mod workspace;

pub use error::{Error, Result};
pub use meta::{InfoSection, WorkspaceMeta, META_FILE};
pub use workspace::WorkspaceRef;
