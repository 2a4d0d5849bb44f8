use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::consts::{env, files};
use super::model::Settings;
use crate::error::{AiWriterError, Result};
use crate::fsio;

/// Where settings live
pub trait SettingsStore {
    fn load(&self) -> Result<Settings>;
    fn save(&self, settings: &Settings) -> Result<()>;
}

/// `settings.toml` inside the config directory
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(files::SETTINGS),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for TomlSettingsStore {
    /// A missing file yields the defaults
    fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            AiWriterError::Settings(format!("failed to read {}: {}", self.path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            AiWriterError::Settings(format!("failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        let content = toml::to_string_pretty(settings)
            .map_err(|e| AiWriterError::Settings(format!("failed to serialize: {}", e)))?;
        fsio::atomic_write(&self.path, &content).map_err(|e| {
            AiWriterError::Settings(format!("failed to write {}: {}", self.path.display(), e))
        })?;
        tracing::debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

/// In-memory store for tests and embedding
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    settings: Mutex<Settings>,
}

impl MemorySettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Mutex::new(settings),
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Settings> {
        let guard = self
            .settings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        let mut guard = self
            .settings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = settings.clone();
        Ok(())
    }
}

/// Picks the config directory: `$AIWRITER_CONFIG_DIR`, then `flag`, then
/// the platform config dir.
pub fn resolve_config_dir(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(env::CONFIG_DIR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    dirs::config_dir()
        .map(|dir| dir.join("aiwriter"))
        .ok_or_else(|| AiWriterError::Settings("could not determine a config directory".to_string()))
}
