use aiwriter_core::permissions::Capability;
use aiwriter_core::{AiWriterError, Result};
use serde::Serialize;

use super::Actions;
use crate::content::{DEFAULT_TITLE, sanitize_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedContent {
    pub message: String,
    pub id: u64,
    pub title: String,
}

impl Actions<'_> {
    /// Stores `content` in the content library
    pub fn save_content(&self, title: Option<&str>, content: &str) -> Result<SavedContent> {
        self.permissions
            .require(Capability::EditPosts, "Insufficient permissions.")?;

        let content = content.trim();
        if content.is_empty() {
            return Err(AiWriterError::Validation("No content to save.".to_string()));
        }

        let title = title.map(sanitize_text).unwrap_or_default();
        let title = if title.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            title
        };

        let entry = self.library.save(&title, content)?;
        Ok(SavedContent {
            message: "Content saved successfully!".to_string(),
            id: entry.id,
            title: entry.title,
        })
    }
}
