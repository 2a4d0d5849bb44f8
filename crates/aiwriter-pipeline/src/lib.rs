//! Content generation pipeline for aiwriter.
//!
//! # Flow
//!
//! ```text
//! GenerationRequest
//!     ↓ prompt::build_prompt
//! Prompt (system + user)
//!     ↓ openai::request_completion   (one POST, 60 s)
//! completion body
//!     ↓ response::parse_completion   (fence strip, JSON or HTML fallback)
//! CompletionResult { title, content }
//!     ↓ blocks::convert_to_blocks    (on post creation)
//! block markup → PostStore
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use aiwriter_core::config::{MemorySettingsStore, Settings};
//! use aiwriter_core::library::JsonContentLibrary;
//! use aiwriter_core::permissions::GrantedCapabilities;
//! use aiwriter_core::posts::JsonPostStore;
//! use aiwriter_pipeline::actions::{Actions, GenerateInput};
//! use aiwriter_pipeline::openai::ReqwestTransport;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut settings = Settings::default();
//! settings.api_key = "sk-...".to_string();
//! let permissions = GrantedCapabilities::from_settings(&settings);
//! let store = MemorySettingsStore::new(settings);
//! let posts = JsonPostStore::in_dir("/tmp/aiwriter", "http://localhost");
//! let library = JsonContentLibrary::in_dir("/tmp/aiwriter");
//! let transport = ReqwestTransport::new()?;
//!
//! let actions = Actions::new(&store, &permissions, &posts, &library, &transport);
//! let generated = actions.generate(&GenerateInput {
//!     topic: "WordPress Development".to_string(),
//!     ..Default::default()
//! })?;
//! println!("{}", generated.title);
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod blocks;
pub mod content;
pub mod openai;
pub mod prompt;
pub mod response;

pub use actions::Actions;
pub use blocks::convert_to_blocks;
pub use prompt::{Prompt, build_prompt};
pub use response::{CompletionResult, parse_completion};

pub type Result<T> = aiwriter_core::Result<T>;
