//! Chat completion request

use std::time::Duration;

use aiwriter_core::{AiWriterError, ApiSettings, Result};
use serde::Serialize;
use serde_json::Value;

use super::status::{check_status, transport_error};
use super::transport::HttpTransport;
use super::url::base_url_error;
use super::{auth_headers, endpoint};
use crate::prompt::Prompt;

pub const COMPLETION_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
    frequency_penalty: f64,
    presence_penalty: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Sends one chat-completion request and returns the decoded 200 body.
///
/// No retries. A missing API key fails before anything is sent.
pub fn request_completion(
    transport: &dyn HttpTransport,
    api: &ApiSettings,
    prompt: &Prompt,
) -> Result<Value> {
    if !api.has_api_key() {
        return Err(AiWriterError::MissingApiKey);
    }

    let url = endpoint(&api.base_url, &["chat", "completions"])
        .map_err(base_url_error)?;

    let request = ChatRequest {
        model: &api.model,
        messages: [
            ChatMessage {
                role: "system",
                content: &prompt.system,
            },
            ChatMessage {
                role: "user",
                content: &prompt.user,
            },
        ],
        max_tokens: api.max_tokens,
        temperature: api.temperature,
        top_p: 1.0,
        frequency_penalty: 0.0,
        presence_penalty: 0.0,
    };
    let body = serde_json::to_string(&request).map_err(|_| AiWriterError::InvalidResponse)?;

    tracing::debug!(
        %url,
        model = %api.model,
        max_tokens = api.max_tokens,
        temperature = api.temperature,
        "requesting completion"
    );

    let response = transport
        .post(&url, &auth_headers(&api.api_key), body, COMPLETION_TIMEOUT)
        .map_err(transport_error)?;

    tracing::debug!(status = response.status, bytes = response.body.len(), "completion response");
    check_status(&response)?;

    serde_json::from_str(&response.body).map_err(|e| {
        tracing::warn!(error = %e, "completion body is not JSON");
        AiWriterError::InvalidResponse
    })
}
