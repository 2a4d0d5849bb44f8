pub mod consts;
mod model;
mod store;

pub use model::{ApiSettings, SettingKey, Settings, UserConfig};
pub use store::{MemorySettingsStore, SettingsStore, TomlSettingsStore, resolve_config_dir};
