//! Turning a completion body into a title and HTML content
//!
//! Models are asked for `{"title": ..., "content": ...}` but do not always
//! comply: the JSON may come wrapped in a markdown fence, or the reply may be
//! plain HTML. Both shapes are accepted; only a missing or empty message is
//! an error.

use std::sync::LazyLock;

use aiwriter_core::{AiWriterError, Result};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::content::{fallback_title, format_content, normalize_title};

static JSON_FENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").unwrap());

static FENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```\s*(.*?)\s*```").unwrap());

/// A successful generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionResult {
    pub title: String,
    /// Formatted HTML, never empty
    pub content: String,
    pub usage_tokens: Option<u64>,
}

struct StructuredReply {
    content: String,
    title: Option<String>,
}

pub fn parse_completion(body: &Value) -> Result<CompletionResult> {
    let message = body
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .ok_or(AiWriterError::InvalidResponse)?
        .trim();

    if message.is_empty() {
        return Err(AiWriterError::EmptyResponse);
    }

    let cleaned = strip_fences(message);
    let usage_tokens = body.pointer("/usage/total_tokens").and_then(Value::as_u64);

    let (content, title) = match structured_reply(&cleaned) {
        Some(reply) => {
            tracing::debug!("using structured reply");
            let content = format_content(&reply.content);
            let title = reply
                .title
                .as_deref()
                .and_then(normalize_title)
                .unwrap_or_else(|| fallback_title(&content));
            (content, title)
        }
        None => {
            tracing::warn!("reply is not the requested JSON, treating it as HTML");
            let content = format_content(&cleaned);
            let title = fallback_title(&content);
            (content, title)
        }
    };

    if content.is_empty() {
        return Err(AiWriterError::EmptyResponse);
    }

    tracing::info!(%title, usage_tokens, "completion parsed");
    Ok(CompletionResult {
        title,
        content,
        usage_tokens,
    })
}

fn strip_fences(message: &str) -> String {
    let unfenced = JSON_FENCE_REGEX.replace_all(message, "$1");
    let unfenced = FENCE_REGEX.replace_all(&unfenced, "$1");
    unfenced.trim().to_string()
}

/// Some only for a JSON object whose `content` is a string
fn structured_reply(cleaned: &str) -> Option<StructuredReply> {
    let value: Value = serde_json::from_str(cleaned).ok()?;
    let content = value.get("content")?.as_str()?.to_string();
    let title = value
        .get("title")
        .and_then(Value::as_str)
        .map(str::to_string);
    Some(StructuredReply { content, title })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(content: &str) -> Value {
        json!({
            "choices": [{"message": {"role": "assistant", "content": content}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 32, "total_tokens": 42}
        })
    }

    #[test]
    fn test_structured_reply() {
        let reply = r#"{"title": "Ten Rust Tips", "content": "<h2>Start</h2><p>Use clippy.</p>"}"#;
        let result = parse_completion(&body(reply)).unwrap();
        assert_eq!(result.title, "Ten Rust Tips");
        assert_eq!(result.content, "<h2>Start</h2>\n\n<p>Use clippy.</p>");
        assert_eq!(result.usage_tokens, Some(42));
    }

    #[test]
    fn test_fenced_json_reply() {
        let reply = "```json\n{\"title\": \"Fenced\", \"content\": \"<p>Inside</p>\"}\n```";
        let result = parse_completion(&body(reply)).unwrap();
        assert_eq!(result.title, "Fenced");
        assert_eq!(result.content, "<p>Inside</p>");

        let reply = "```\n{\"content\": \"<h3>Bare fence</h3><p>x</p>\"}\n```";
        let result = parse_completion(&body(reply)).unwrap();
        assert_eq!(result.title, "Bare fence");
    }

    #[test]
    fn test_missing_or_blank_title_uses_fallback() {
        let reply = r#"{"title": "  ", "content": "<p>First sentence here. Second.</p>"}"#;
        let result = parse_completion(&body(reply)).unwrap();
        assert_eq!(result.title, "First sentence here");
    }

    #[test]
    fn test_plain_html_reply() {
        let reply = "<h2>Sample Generated Content</h2><p>This is a test content generated by AI.</p>";
        let result = parse_completion(&body(reply)).unwrap();
        assert_eq!(result.title, "Sample Generated Content");
        assert!(result.content.contains("<h2>Sample Generated Content</h2>"));
        assert!(result.content.contains("<p>This is a test content generated by AI.</p>"));
    }

    #[test]
    fn test_non_string_content_field_is_treated_as_html() {
        let reply = r#"{"title": "T", "content": ["not", "a", "string"]}"#;
        let result = parse_completion(&body(reply)).unwrap();
        assert!(result.content.starts_with("<p>{"));
        assert!(!result.content.is_empty());
    }

    #[test]
    fn test_missing_message_is_invalid() {
        let err = parse_completion(&json!({"choices": []})).unwrap_err();
        assert!(matches!(err, AiWriterError::InvalidResponse));

        let err = parse_completion(&json!({"choices": [{"message": {"content": null}}]})).unwrap_err();
        assert!(matches!(err, AiWriterError::InvalidResponse));
    }

    #[test]
    fn test_empty_message_is_empty_response() {
        let err = parse_completion(&body("  \n ")).unwrap_err();
        assert!(matches!(err, AiWriterError::EmptyResponse));

        let err = parse_completion(&body(r#"{"title": "x", "content": "   "}"#)).unwrap_err();
        assert!(matches!(err, AiWriterError::EmptyResponse));
    }

    #[test]
    fn test_usage_is_optional() {
        let result = parse_completion(&json!({
            "choices": [{"message": {"content": "<p>Hi there.</p>"}}]
        }))
        .unwrap();
        assert_eq!(result.usage_tokens, None);
        assert_eq!(result.title, "Hi there");
    }
}
