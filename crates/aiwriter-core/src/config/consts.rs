//! Defaults and limits shared across the workspace

/// API parameter limits
pub mod limits {
    /// Smallest accepted `max_tokens`
    pub const MIN_MAX_TOKENS: u32 = 100;

    /// Largest accepted `max_tokens`
    pub const MAX_MAX_TOKENS: u32 = 4000;

    pub const MIN_TEMPERATURE: f64 = 0.0;

    pub const MAX_TEMPERATURE: f64 = 2.0;

    /// Minimum topic length (characters, after trimming)
    pub const MIN_TOPIC_CHARS: usize = 3;
}

/// Values used when a setting is absent
pub mod defaults {
    pub const MODEL: &str = "gpt-3.5-turbo";

    pub const MAX_TOKENS: u32 = 1000;

    pub const TEMPERATURE: f64 = 0.7;

    pub const TONE: &str = "professional";

    pub const API_BASE_URL: &str = "https://api.openai.com/v1";

    pub const SITE_URL: &str = "http://localhost";

    pub const AUTHOR_ID: u64 = 1;
}

/// Environment variables recognised by the settings layer
pub mod env {
    /// Overrides the settings directory
    pub const CONFIG_DIR: &str = "AIWRITER_CONFIG_DIR";

    /// Overrides `api_base_url` (mock servers in tests)
    pub const API_BASE_URL: &str = "AIWRITER_API_BASE_URL";

    /// Used when no key is stored
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
}

/// File names inside the settings directory
pub mod files {
    pub const SETTINGS: &str = "settings.toml";

    pub const LIBRARY: &str = "library.json";

    pub const POSTS: &str = "posts.json";
}
