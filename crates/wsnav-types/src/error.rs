use std::fmt;
use std::path::PathBuf;

/// Result type for wsnav-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Metadata file could not be read
    Io { path: PathBuf, source: std::io::Error },

    /// Metadata file is not valid TOML or does not match the schema
    Parse { path: PathBuf, message: String },

    /// Metadata document could not be serialized
    Encode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            Error::Parse { path, message } => {
                write!(f, "cannot parse {}: {}", path.display(), message)
            }
            Error::Encode(msg) => write!(f, "cannot encode metadata: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Parse { .. } | Error::Encode(_) => None,
        }
    }
}
