use std::{io, path::PathBuf};

/// Errors produced while encoding a shortcut.
#[derive(Debug, thiserror::Error)]
pub enum LnkError {
    /// Bad destination extension, unknown run mode, or a value too large
    /// for its length prefix.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Non-ASCII text reached a field written in the 8-bit encoding.
    #[error("cannot write {0:?} as 8-bit text")]
    Encoding(String),

    /// Metadata for a path level could not be read.
    #[error("cannot read metadata for '{}': {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the destination stream or file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, LnkError>;
