use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while generating a resource class.
///
/// Missing or blank configuration values never fail; they fall back to the
/// resource kind's defaults.
#[derive(Debug, Error)]
pub enum Error {
    #[error("asset traversal failed at '{}'", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to write generated source")]
    Write(#[from] std::io::Error),
}

impl Error {
    /// Create a traversal error, preferring the entry walkdir reports over the root.
    pub(crate) fn traversal(root: &Path, source: walkdir::Error) -> Self {
        let path = source.path().unwrap_or(root).to_path_buf();
        Error::Traversal { path, source }
    }

    /// The path that could not be traversed, if this is a traversal failure.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::Traversal { path, .. } => Some(path),
            _ => None,
        }
    }
}
