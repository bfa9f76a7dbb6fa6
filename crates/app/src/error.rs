use std::{io, path::PathBuf};

use firelink_lnk::LnkError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A required executable or file could not be located.
    #[error("{0}")]
    NotFound(String),

    #[error("{action} '{}': {source}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{tool} failed: {detail}")]
    ExternalToolFailure { tool: String, detail: String },

    #[error("invalid app manifest '{}': {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Shortcut(#[from] LnkError),
}

impl AppError {
    pub(crate) fn fs(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| AppError::Filesystem {
            action,
            path,
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
