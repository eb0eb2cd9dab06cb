use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for platform detection
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The hardware-descriptor source could not be opened or read.
    #[error("Hardware info source unavailable ({}): {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No `Revision` line was found in the hardware-descriptor source.
    #[error("Could not determine Raspberry Pi revision from {}", path.display())]
    RevisionUndetermined { path: PathBuf },

    #[error("Optional capability missing: {0}")]
    CapabilityMissing(String),

    #[error("Unknown platform code: {0}")]
    UnknownPlatformCode(u8),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for platform detection
pub type Result<T> = std::result::Result<T, PlatformError>;

impl PlatformError {
    /// Create a source unavailable error for `path`
    pub fn source_unavailable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        PlatformError::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn revision_undetermined<P: Into<PathBuf>>(path: P) -> Self {
        PlatformError::RevisionUndetermined { path: path.into() }
    }

    pub fn capability_missing<S: Into<String>>(msg: S) -> Self {
        PlatformError::CapabilityMissing(msg.into())
    }

    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        PlatformError::Config(msg.into())
    }
}
