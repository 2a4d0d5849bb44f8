//! Settings commands
//!
//! These run without an [`AppContext`](crate::context::AppContext) so that a
//! broken `settings.toml` can still be inspected and repaired.

use std::collections::BTreeMap;
use std::path::Path;

use aiwriter_core::config::{SettingKey, TomlSettingsStore, resolve_config_dir};
use aiwriter_core::permissions::{Capability, GrantedCapabilities, PermissionChecker};
use aiwriter_core::{AiWriterError, Settings, SettingsStore};
use anyhow::{Context as _, Result};
use colored::Colorize;

use crate::cli::SettingsCommands;
use crate::output;

pub fn run(config_dir_flag: Option<&Path>, command: SettingsCommands) -> Result<()> {
    let store = TomlSettingsStore::in_dir(resolve_config_dir(config_dir_flag)?);
    match command {
        SettingsCommands::Show { json } => show(&store, json),
        SettingsCommands::Get { key } => get(&store, &key),
        SettingsCommands::Set { key, value } => set(&store, &key, &value),
    }
}

fn show(store: &TomlSettingsStore, json: bool) -> Result<()> {
    let settings = output::report(store.load(), json)?;

    if json {
        let values: BTreeMap<&str, String> = SettingKey::ALL
            .iter()
            .map(|key| (key.as_str(), settings.display_value(*key)))
            .collect();
        return output::print_success(&values);
    }

    println!("{}", "Settings".bold());
    println!("  File: {}", store.path().display());
    println!();
    for key in SettingKey::ALL {
        println!("  {:<14} {}", key.as_str(), settings.display_value(key));
    }
    Ok(())
}

/// The API key is printed masked
fn get(store: &TomlSettingsStore, key: &str) -> Result<()> {
    let key: SettingKey = key.parse()?;
    let settings = store.load()?;
    println!("{}", settings.display_value(key));
    Ok(())
}

/// An unparsable file is kept as `settings.toml.bak` and replaced by
/// defaults plus the new value.
fn set(store: &TomlSettingsStore, key: &str, value: &str) -> Result<()> {
    let key: SettingKey = key.parse()?;

    let mut settings = match store.load() {
        Ok(settings) => settings,
        Err(AiWriterError::Settings(reason)) => {
            let backup = store.path().with_extension("toml.bak");
            std::fs::copy(store.path(), &backup)
                .with_context(|| format!("failed to back up {}", store.path().display()))?;
            tracing::debug!(%reason, backup = %backup.display(), "settings unreadable, starting from defaults");
            eprintln!(
                "{} {} could not be read; previous contents saved to {}",
                "⚠".yellow(),
                store.path().display(),
                backup.display()
            );
            Settings::default()
        }
        Err(other) => return Err(other.into()),
    };

    GrantedCapabilities::from_settings(&settings)
        .require(Capability::ManageOptions, "Insufficient permissions.")?;

    settings.set(key, value)?;
    store.save(&settings)?;

    tracing::info!(%key, "setting updated");
    println!(
        "{} {} = {}",
        "✓".green(),
        key.as_str(),
        settings.display_value(key)
    );
    Ok(())
}
