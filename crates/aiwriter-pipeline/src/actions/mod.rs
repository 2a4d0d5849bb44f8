//! The four editor actions: generate, save, create post, test connection
//!
//! [`Actions`] borrows its collaborators as trait objects, so the same code
//! runs against the local JSON stores in the CLI and against fakes in tests.

mod connection;
mod generate;
mod post;
mod save;


pub use connection::ConnectionTested;
pub use generate::{GenerateInput, GeneratedContent};
pub use post::{CreatedPost, PostInput};
pub use save::SavedContent;

use aiwriter_core::library::ContentStore;
use aiwriter_core::permissions::PermissionChecker;
use aiwriter_core::posts::PostStore;
use aiwriter_core::{ApiSettings, Result, SettingsStore};

use crate::openai::HttpTransport;

/// Reads an environment variable
pub type EnvLookup = fn(&str) -> Option<String>;

pub struct Actions<'a> {
    settings: &'a dyn SettingsStore,
    permissions: &'a dyn PermissionChecker,
    posts: &'a dyn PostStore,
    library: &'a dyn ContentStore,
    transport: &'a dyn HttpTransport,
    env: EnvLookup,
}

impl<'a> Actions<'a> {
    pub fn new(
        settings: &'a dyn SettingsStore,
        permissions: &'a dyn PermissionChecker,
        posts: &'a dyn PostStore,
        library: &'a dyn ContentStore,
        transport: &'a dyn HttpTransport,
    ) -> Self {
        Self {
            settings,
            permissions,
            posts,
            library,
            transport,
            env: process_env,
        }
    }

    /// Replaces the process environment as the source of
    /// `OPENAI_API_KEY` / `AIWRITER_API_BASE_URL`
    pub fn with_env(mut self, env: EnvLookup) -> Self {
        self.env = env;
        self
    }

    fn api_settings(&self) -> Result<ApiSettings> {
        Ok(self.settings.load()?.api_settings_with_env(self.env))
    }
}

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
