use std::fmt;
use std::path::PathBuf;

/// Result type for wsnav-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// Metadata decode failed for a directly targeted workspace
    Meta(wsnav_types::Error),

    /// IO operation failed (root unreadable, walk could not start)
    Io(std::io::Error),

    /// Path exists but is not a directory
    NotADirectory(PathBuf),

    /// Named workspace does not exist under the root
    UnknownWorkspace { name: String, root: PathBuf },

    /// Invalid interactive selection input
    Selection(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Meta(err) => write!(f, "Metadata error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::NotADirectory(path) => write!(f, "Not a directory: {}", path.display()),
            Error::UnknownWorkspace { name, root } => {
                write!(f, "Workspace '{}' not found under {}", name, root.display())
            }
            Error::Selection(msg) => write!(f, "Invalid selection: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Meta(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::NotADirectory(_) | Error::UnknownWorkspace { .. } | Error::Selection(_) => None,
        }
    }
}

impl From<wsnav_types::Error> for Error {
    fn from(err: wsnav_types::Error) -> Self {
        Error::Meta(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
