use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::consts::{defaults, env, limits};
use crate::error::{AiWriterError, Result};

/// settings.toml schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub default_tone: String,
    pub auto_save: bool,
    pub api_base_url: String,
    pub site_url: String,
    pub user: UserConfig,
}

/// The local user the CLI acts as
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub id: u64,
    pub capabilities: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: defaults::MODEL.to_string(),
            max_tokens: defaults::MAX_TOKENS,
            temperature: defaults::TEMPERATURE,
            default_tone: defaults::TONE.to_string(),
            auto_save: false,
            api_base_url: defaults::API_BASE_URL.to_string(),
            site_url: defaults::SITE_URL.to_string(),
            user: UserConfig::default(),
        }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            id: defaults::AUTHOR_ID,
            capabilities: vec!["edit_posts".to_string(), "manage_options".to_string()],
        }
    }
}

/// Keys addressable through `settings get` / `settings set`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    ApiKey,
    Model,
    MaxTokens,
    Temperature,
    DefaultTone,
    AutoSave,
    ApiBaseUrl,
    SiteUrl,
}

impl SettingKey {
    pub const ALL: [SettingKey; 8] = [
        SettingKey::ApiKey,
        SettingKey::Model,
        SettingKey::MaxTokens,
        SettingKey::Temperature,
        SettingKey::DefaultTone,
        SettingKey::AutoSave,
        SettingKey::ApiBaseUrl,
        SettingKey::SiteUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::ApiKey => "api_key",
            SettingKey::Model => "model",
            SettingKey::MaxTokens => "max_tokens",
            SettingKey::Temperature => "temperature",
            SettingKey::DefaultTone => "default_tone",
            SettingKey::AutoSave => "auto_save",
            SettingKey::ApiBaseUrl => "api_base_url",
            SettingKey::SiteUrl => "site_url",
        }
    }
}

impl FromStr for SettingKey {
    type Err = AiWriterError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        SettingKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| AiWriterError::UnknownSetting(s.to_string()))
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Settings {
    /// Current value of `key` as text
    pub fn get(&self, key: SettingKey) -> String {
        match key {
            SettingKey::ApiKey => self.api_key.clone(),
            SettingKey::Model => self.model.clone(),
            SettingKey::MaxTokens => self.max_tokens.to_string(),
            SettingKey::Temperature => self.temperature.to_string(),
            SettingKey::DefaultTone => self.default_tone.clone(),
            SettingKey::AutoSave => self.auto_save.to_string(),
            SettingKey::ApiBaseUrl => self.api_base_url.clone(),
            SettingKey::SiteUrl => self.site_url.clone(),
        }
    }

    /// Like [`Settings::get`], with the API key masked
    pub fn display_value(&self, key: SettingKey) -> String {
        match key {
            SettingKey::ApiKey => mask_key(&self.api_key),
            other => self.get(other),
        }
    }

    /// Parses and stores `value`, clamping numeric settings into range.
    pub fn set(&mut self, key: SettingKey, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            SettingKey::ApiKey => self.api_key = value.to_string(),
            SettingKey::Model => self.model = non_empty_or(value, defaults::MODEL),
            SettingKey::MaxTokens => {
                let parsed: i64 = value.parse().map_err(|_| invalid(key, "expected an integer"))?;
                self.max_tokens = ApiSettings::clamp_max_tokens(parsed);
            }
            SettingKey::Temperature => {
                let parsed: f64 = value.parse().map_err(|_| invalid(key, "expected a number"))?;
                if !parsed.is_finite() {
                    return Err(invalid(key, "expected a finite number"));
                }
                self.temperature = ApiSettings::clamp_temperature(parsed);
            }
            SettingKey::DefaultTone => {
                self.default_tone = non_empty_or(&value.to_lowercase(), defaults::TONE)
            }
            SettingKey::AutoSave => {
                self.auto_save =
                    parse_bool(value).ok_or_else(|| invalid(key, "expected true or false"))?
            }
            SettingKey::ApiBaseUrl => self.api_base_url = parse_url(key, value)?,
            SettingKey::SiteUrl => self.site_url = parse_url(key, value)?,
        }
        Ok(())
    }

    /// API parameters for one pipeline run, read from the process environment.
    pub fn api_settings(&self) -> ApiSettings {
        self.api_settings_with_env(|name| std::env::var(name).ok())
    }

    /// Resolves the API parameters.
    ///
    /// `OPENAI_API_KEY` fills in an empty stored key and
    /// `AIWRITER_API_BASE_URL` replaces the base URL. Numeric values are
    /// clamped here so a hand-edited file can't push them out of range.
    pub fn api_settings_with_env<F>(&self, lookup: F) -> ApiSettings
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = if self.api_key.trim().is_empty() {
            non_blank(env::OPENAI_API_KEY).unwrap_or_default()
        } else {
            self.api_key.clone()
        };

        let base_url = non_blank(env::API_BASE_URL).unwrap_or_else(|| self.api_base_url.clone());

        ApiSettings {
            api_key: api_key.trim().to_string(),
            model: non_empty_or(self.model.trim(), defaults::MODEL),
            max_tokens: ApiSettings::clamp_max_tokens(i64::from(self.max_tokens)),
            temperature: ApiSettings::clamp_temperature(self.temperature),
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn has_capability(&self, capability: &str) -> bool {
        self.user.capabilities.iter().any(|c| c == capability)
    }
}

/// Parameters the completion client needs; already clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSettings {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub base_url: String,
}

impl ApiSettings {
    pub fn clamp_max_tokens(value: i64) -> u32 {
        value.clamp(
            i64::from(limits::MIN_MAX_TOKENS),
            i64::from(limits::MAX_MAX_TOKENS),
        ) as u32
    }

    pub fn clamp_temperature(value: f64) -> f64 {
        if value.is_nan() {
            return defaults::TEMPERATURE;
        }
        value.clamp(limits::MIN_TEMPERATURE, limits::MAX_TEMPERATURE)
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.trim().chars().collect();
    match chars.len() {
        0 => String::new(),
        n if n <= 8 => "*".repeat(n),
        n => {
            let head: String = chars[..3].iter().collect();
            let tail: String = chars[n - 4..].iter().collect();
            format!("{}...{}", head, tail)
        }
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_url(key: SettingKey, value: &str) -> Result<String> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.trim_end_matches('/').to_string())
    } else {
        Err(invalid(key, "expected an http:// or https:// URL"))
    }
}

fn invalid(key: SettingKey, reason: &str) -> AiWriterError {
    AiWriterError::InvalidSettingValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
