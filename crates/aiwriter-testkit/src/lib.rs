//! Test utilities shared by the aiwriter crates
//!
//! - [`env`]: isolated settings directories and environment overrides
//! - [`mock`]: a shared mockito server standing in for the OpenAI API
//! - [`fixtures`]: canned API bodies

pub mod env;
pub mod fixtures;
pub mod mock;

pub use env::{ENV_LOCK, IsolatedConfig, with_isolated_config};
pub use fixtures::{completion_body, error_body, models_body, structured_completion_body};
pub use mock::{get_shared_mock_server, shared_api_base};
