use std::collections::BTreeMap;

use aiwriter_core::permissions::Capability;
use aiwriter_core::posts::{META_GENERATED, META_GENERATED_AT, NewPost, PostId, PostStatus};
use aiwriter_core::{AiWriterError, Result};
use chrono::Local;
use serde::Serialize;

use super::Actions;
use crate::blocks::convert_to_blocks;
use crate::content::{format_content, sanitize_text};

#[derive(Debug, Clone, Default)]
pub struct PostInput {
    pub title: String,
    /// HTML; bare text is wrapped in paragraphs first
    pub content: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedPost {
    pub message: String,
    pub post_id: PostId,
    pub status: PostStatus,
    pub edit_url: String,
}

impl Actions<'_> {
    pub fn create_post(&self, input: &PostInput) -> Result<CreatedPost> {
        self.permissions.require(
            Capability::EditPosts,
            "You do not have permission to create posts.",
        )?;

        let title = sanitize_text(&input.title);
        if title.is_empty() {
            return Err(AiWriterError::Validation("Post title is required.".to_string()));
        }
        if input.content.trim().is_empty() {
            return Err(AiWriterError::Validation("Post content is required.".to_string()));
        }
        let status = PostStatus::parse(&input.status);

        let blocks = convert_to_blocks(&format_content(&input.content))
            .map_err(|e| AiWriterError::PostCreation(e.to_string()))?;

        let meta = BTreeMap::from([
            (META_GENERATED.to_string(), serde_json::Value::Bool(true)),
            (
                META_GENERATED_AT.to_string(),
                serde_json::Value::String(Local::now().format("%Y-%m-%d %H:%M:%S").to_string()),
            ),
        ]);

        let post = NewPost {
            title: title.clone(),
            content: blocks,
            status,
            author_id: self.permissions.current_user_id(),
            meta,
        };

        let post_id = self.posts.insert_post(post).map_err(|e| match e {
            AiWriterError::PostCreation(_) => e,
            other => AiWriterError::PostCreation(other.to_string()),
        })?;

        tracing::info!(%post_id, %status, "post created");
        Ok(CreatedPost {
            message: format!("Post \"{}\" created successfully!", title),
            post_id,
            status,
            edit_url: self.posts.edit_url_for(post_id),
        })
    }
}
