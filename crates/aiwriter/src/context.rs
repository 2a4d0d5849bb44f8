//! Application context shared by command handlers

use std::path::Path;

use aiwriter_core::config::{TomlSettingsStore, resolve_config_dir};
use aiwriter_core::library::JsonContentLibrary;
use aiwriter_core::permissions::GrantedCapabilities;
use aiwriter_core::posts::JsonPostStore;
use aiwriter_core::SettingsStore;
use aiwriter_pipeline::Actions;
use aiwriter_pipeline::openai::ReqwestTransport;
use anyhow::{Context as _, Result};

/// Stores and transport, built once per invocation
pub struct AppContext {
    pub settings: TomlSettingsStore,
    pub permissions: GrantedCapabilities,
    pub posts: JsonPostStore,
    pub library: JsonContentLibrary,
    pub transport: ReqwestTransport,
}

impl AppContext {
    /// Resolves the config directory and reads settings once for the
    /// capability set and site URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file exists but cannot be parsed,
    /// or the HTTP client cannot be built
    pub fn new(config_dir_flag: Option<&Path>) -> Result<Self> {
        let config_dir = resolve_config_dir(config_dir_flag)?;
        tracing::debug!(dir = %config_dir.display(), "using config directory");

        let settings = TomlSettingsStore::in_dir(&config_dir);
        let loaded = settings.load()?;

        let transport = ReqwestTransport::new().context("failed to initialise HTTP client")?;

        Ok(Self {
            permissions: GrantedCapabilities::from_settings(&loaded),
            posts: JsonPostStore::in_dir(&config_dir, loaded.site_url.clone()),
            library: JsonContentLibrary::in_dir(&config_dir),
            settings,
            transport,
        })
    }

    pub fn actions(&self) -> Actions<'_> {
        Actions::new(
            &self.settings,
            &self.permissions,
            &self.posts,
            &self.library,
            &self.transport,
        )
    }
}
