//! Post creation
//!
//! [`PostStore`] is the seam to whatever hosts the posts. The CLI uses
//! [`JsonPostStore`], which keeps them in a local `posts.json`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

mod json;

pub use json::{JsonPostStore, StoredPost};

/// Meta key marking generated posts
pub const META_GENERATED: &str = "_ai_writer_generated";

/// Meta key holding the generation timestamp
pub const META_GENERATED_AT: &str = "_ai_writer_generated_at";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Publish,
    Private,
}

impl PostStatus {
    /// Anything outside {draft, publish, private} becomes a draft
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "publish" => PostStatus::Publish,
            "private" => PostStatus::Private,
            _ => PostStatus::Draft,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Publish => "publish",
            PostStatus::Private => "private",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    /// Block markup
    pub content: String,
    pub status: PostStatus,
    pub author_id: u64,
    pub meta: BTreeMap<String, serde_json::Value>,
}

pub trait PostStore {
    fn insert_post(&self, post: NewPost) -> Result<PostId>;

    fn edit_url_for(&self, id: PostId) -> String;
}

/// `<site>/wp-admin/post.php?post=<id>&action=edit`
pub fn admin_edit_url(site_url: &str, id: PostId) -> String {
    format!(
        "{}/wp-admin/post.php?post={}&action=edit",
        site_url.trim_end_matches('/'),
        id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_falls_back_to_draft() {
        assert_eq!(PostStatus::parse("publish"), PostStatus::Publish);
        assert_eq!(PostStatus::parse(" Private "), PostStatus::Private);
        assert_eq!(PostStatus::parse("pending"), PostStatus::Draft);
        assert_eq!(PostStatus::parse(""), PostStatus::Draft);
    }

    #[test]
    fn test_admin_edit_url() {
        assert_eq!(
            admin_edit_url("https://blog.example.com/", PostId(42)),
            "https://blog.example.com/wp-admin/post.php?post=42&action=edit"
        );
    }
}
