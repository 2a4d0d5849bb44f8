use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LockError {
    #[error("Timeout waiting for lock on {} ({description})", .path.display())]
    Timeout { path: PathBuf, description: String },

    #[error("I/O error during {operation} on {}: {source}", .path.display())]
    Io {
        #[source]
        source: std::io::Error,
        path: PathBuf,
        operation: &'static str,
    },
}

impl LockError {
    pub(crate) fn io(source: std::io::Error, path: &Path, operation: &'static str) -> Self {
        LockError::Io {
            source,
            path: path.to_path_buf(),
            operation,
        }
    }
}
