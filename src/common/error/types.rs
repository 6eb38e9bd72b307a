//! Unified error type for the packaging pipeline.
//!
//! Every step of a build reports through this enum. No step recovers from an
//! error: the first failure aborts the build and is surfaced to the caller.
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lomenu operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Filesystem error tied to a concrete path
    #[error("IO error at {}: {source}", path.display())]
    PathIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The static extension source tree does not exist
    #[error("Extension source tree not found: {}", .0.display())]
    SourceTreeMissing(PathBuf),

    /// An embedded icon payload is not valid base64
    #[error("Cannot decode icon '{name}': {reason}")]
    IconDecode { name: String, reason: String },

    /// Invalid or inconsistent extension configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid package format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// XML writing or parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Wrap an IO error with the path it occurred at.
    pub fn at_path(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::PathIo {
            path: path.into(),
            source,
        }
    }
}

/// Result type for lomenu operations.
pub type Result<T> = std::result::Result<T, Error>;
