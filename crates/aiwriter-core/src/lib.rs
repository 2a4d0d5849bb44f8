// Core modules
pub mod config;
pub mod error;
pub mod library;
pub mod lock;
pub mod permissions;
pub mod posts;
pub mod request;

mod fsio;
mod jsonfile;

// Re-export commonly used types
pub use config::{ApiSettings, Settings, SettingsStore};
pub use error::{AiWriterError, Result};
pub use request::{ContentLength, ContentType, GenerationRequest, Tone};
