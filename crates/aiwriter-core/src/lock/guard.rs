use std::fs::File;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::LockMode;

/// Held lock; released on drop
#[derive(Debug)]
pub struct LockGuard {
    file: File,
    path: PathBuf,
    mode: LockMode,
}

impl LockGuard {
    pub(crate) fn new(file: File, path: PathBuf, mode: LockMode) -> Self {
        Self { file, path, mode }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> LockMode {
        self.mode
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        // Closing the descriptor releases the lock anyway
        let _ = FileExt::unlock(&self.file);
        tracing::trace!(path = %self.path.display(), "lock released");
    }
}
