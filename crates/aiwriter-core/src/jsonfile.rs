//! A JSON document on disk, read under a shared lock and rewritten under an
//! exclusive one.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{AiWriterError, Result};
use crate::fsio;
use crate::lock::{self, LockGuard};

#[derive(Debug, Clone)]
pub(crate) struct JsonFile {
    path: PathBuf,
    lock_path: PathBuf,
}

impl JsonFile {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lock_path = path.with_extension("lock");
        Self { path, lock_path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn read<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let _guard = self.lock(false)?;
        self.read_unlocked()
    }

    /// Read-modify-write in one critical section. Nothing is written when
    /// `f` fails.
    pub(crate) fn update<T, R, F>(&self, f: F) -> Result<R>
    where
        T: DeserializeOwned + Serialize + Default,
        F: FnOnce(&mut T) -> Result<R>,
    {
        let _guard = self.lock(true)?;
        let mut doc: T = self.read_unlocked()?;
        let out = f(&mut doc)?;

        let content = serde_json::to_string_pretty(&doc)
            .map_err(|e| AiWriterError::store(&self.path, format!("failed to serialize: {}", e)))?;
        fsio::atomic_write(&self.path, &content)
            .map_err(|e| AiWriterError::store(&self.path, format!("failed to write: {}", e)))?;
        Ok(out)
    }

    fn read_unlocked<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        if !self.path.exists() {
            return Ok(T::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| AiWriterError::store(&self.path, format!("failed to read: {}", e)))?;
        serde_json::from_str(&content)
            .map_err(|e| AiWriterError::store(&self.path, format!("failed to parse: {}", e)))
    }

    fn lock(&self, exclusive: bool) -> Result<LockGuard> {
        let description = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let result = if exclusive {
            lock::acquire_lock(&self.lock_path, lock::WRITE_TIMEOUT, &description)
        } else {
            lock::acquire_shared_lock(&self.lock_path, lock::READ_TIMEOUT, &description)
        };
        result.map_err(|e| AiWriterError::store(&self.lock_path, e))
    }
}
