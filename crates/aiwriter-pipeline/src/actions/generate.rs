use aiwriter_core::permissions::Capability;
use aiwriter_core::{AiWriterError, GenerationRequest, Result};
use serde::Serialize;

use super::Actions;
use crate::content::word_count;
use crate::openai::request_completion;
use crate::prompt::build_prompt;
use crate::response::parse_completion;

#[derive(Debug, Clone, Default)]
pub struct GenerateInput {
    pub topic: String,
    pub content_type: String,
    pub length: String,
    /// `None` uses the `default_tone` setting
    pub tone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedContent {
    pub message: String,
    pub title: String,
    pub content: String,
    pub word_count: usize,
    pub usage_tokens: Option<u64>,
    /// Library id when auto-save stored the result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_id: Option<u64>,
}

impl Actions<'_> {
    /// Validates, calls the completion API once and parses the reply.
    ///
    /// Validation and configuration errors return before any request.
    pub fn generate(&self, input: &GenerateInput) -> Result<GeneratedContent> {
        self.permissions
            .require(Capability::EditPosts, "Insufficient permissions.")?;

        let settings = self.settings.load()?;
        let tone = input
            .tone
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&settings.default_tone);
        let request = GenerationRequest::new(&input.topic, &input.content_type, &input.length, tone)?;

        let api = settings.api_settings_with_env(self.env);
        if !api.has_api_key() {
            return Err(AiWriterError::MissingApiKey);
        }

        tracing::info!(
            topic = request.topic(),
            content_type = request.content_type().as_str(),
            length = request.length().as_str(),
            tone = request.tone().as_str(),
            "generating content"
        );

        let prompt = build_prompt(&request);
        let body = request_completion(self.transport, &api, &prompt)?;
        let result = parse_completion(&body)?;

        let saved_id = if settings.auto_save {
            match self.library.save(&result.title, &result.content) {
                Ok(entry) => Some(entry.id),
                Err(e) => {
                    tracing::warn!(error = %e, "auto-save failed");
                    None
                }
            }
        } else {
            None
        };

        Ok(GeneratedContent {
            message: "Content generated successfully!".to_string(),
            word_count: word_count(&result.content),
            title: result.title,
            content: result.content,
            usage_tokens: result.usage_tokens,
            saved_id,
        })
    }
}
