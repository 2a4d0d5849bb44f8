//! Environment isolation for tests that read settings from disk
//!
//! The CLI resolves its settings directory from `AIWRITER_CONFIG_DIR` and
//! reads `OPENAI_API_KEY` / `AIWRITER_API_BASE_URL`. Tests touching those
//! variables go through [`with_isolated_config`] so they never see the
//! developer's real settings or each other's.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes tests that modify environment variables
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

const CONFIG_DIR_VAR: &str = "AIWRITER_CONFIG_DIR";
const API_BASE_URL_VAR: &str = "AIWRITER_API_BASE_URL";
const API_KEY_VAR: &str = "OPENAI_API_KEY";

const MANAGED_VARS: [&str; 3] = [CONFIG_DIR_VAR, API_BASE_URL_VAR, API_KEY_VAR];

/// A throwaway settings directory
pub struct IsolatedConfig {
    dir: PathBuf,
}

impl IsolatedConfig {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.join("settings.toml")
    }

    /// Writes `settings.toml` verbatim
    pub fn write_settings(&self, toml: &str) {
        std::fs::write(self.settings_path(), toml).expect("failed to write settings.toml");
    }
}

/// Runs `f` with `AIWRITER_CONFIG_DIR` pointing at a fresh temp dir.
///
/// `api_base_url` sets `AIWRITER_API_BASE_URL` (usually a mock server);
/// `None` removes it. `OPENAI_API_KEY` is always removed. All three are
/// restored afterwards.
pub fn with_isolated_config<F, R>(api_base_url: Option<&str>, f: F) -> R
where
    F: FnOnce(&IsolatedConfig) -> R,
{
    let _guard = ENV_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let original: Vec<(&str, Option<String>)> = MANAGED_VARS
        .iter()
        .map(|name| (*name, std::env::var(name).ok()))
        .collect();

    let temp = TempDir::new().expect("failed to create temp dir");
    let config = IsolatedConfig {
        dir: temp.path().join("aiwriter"),
    };
    std::fs::create_dir_all(&config.dir).expect("failed to create config dir");

    // SAFETY: ENV_LOCK is held for the whole closure, so no other test
    // modifies the environment concurrently.
    unsafe {
        std::env::set_var(CONFIG_DIR_VAR, &config.dir);
        match api_base_url {
            Some(url) => std::env::set_var(API_BASE_URL_VAR, url),
            None => std::env::remove_var(API_BASE_URL_VAR),
        }
        std::env::remove_var(API_KEY_VAR);
    }

    let result = f(&config);

    drop(temp);

    // SAFETY: still holding ENV_LOCK
    unsafe {
        for (name, value) in original {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets_config_dir_and_base_url() {
        with_isolated_config(Some("http://127.0.0.1:9/v1"), |config| {
            assert!(config.dir().is_dir());
            assert_eq!(
                std::env::var(CONFIG_DIR_VAR).unwrap(),
                config.dir().to_string_lossy()
            );
            assert_eq!(
                std::env::var(API_BASE_URL_VAR).unwrap(),
                "http://127.0.0.1:9/v1"
            );
            assert!(std::env::var(API_KEY_VAR).is_err());
        });
    }

    #[test]
    fn test_restores_environment() {
        let before: Vec<_> = MANAGED_VARS
            .iter()
            .map(|name| std::env::var(name).ok())
            .collect();

        let dir = with_isolated_config(None, |config| {
            config.write_settings("api_key = \"sk-test\"\n");
            assert!(config.settings_path().exists());
            config.dir().to_path_buf()
        });

        let after: Vec<_> = MANAGED_VARS
            .iter()
            .map(|name| std::env::var(name).ok())
            .collect();
        assert_eq!(before, after);
        assert!(!dir.exists(), "temp dir should be removed");
    }

    #[test]
    fn test_each_run_gets_a_clean_dir() {
        with_isolated_config(None, |config| {
            std::fs::write(config.dir().join("marker"), "1").unwrap();
        });
        with_isolated_config(None, |config| {
            assert!(!config.dir().join("marker").exists());
        });
    }
}
