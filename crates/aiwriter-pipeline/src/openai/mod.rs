//! Calls to the OpenAI HTTP API
//!
//! - [`transport`]: the outbound HTTP seam and its reqwest implementation
//! - [`completion`]: one chat-completion POST per generation
//! - [`models`]: the model-listing GET behind the connection test

pub mod client;
pub mod completion;
pub mod models;
pub mod status;
pub mod transport;
pub mod url;

pub use client::{DEFAULT_TIMEOUT, USER_AGENT, build_client};
pub use completion::{COMPLETION_TIMEOUT, request_completion};
pub use models::{CONNECTION_TIMEOUT, ConnectionReport, RELEVANT_MODELS, test_connection};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportError};
pub use url::{UrlError, endpoint};

/// Headers common to both endpoints. The key itself is never logged.
pub(crate) fn auth_headers(api_key: &str) -> Vec<(&'static str, String)> {
    tracing::debug!(key_len = api_key.len(), "using bearer auth");
    vec![
        ("Authorization", format!("Bearer {}", api_key)),
        ("User-Agent", USER_AGENT.to_string()),
    ]
}
