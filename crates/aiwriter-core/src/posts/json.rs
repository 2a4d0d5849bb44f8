use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{NewPost, PostId, PostStatus, PostStore, admin_edit_url};
use crate::config::consts::files;
use crate::error::{AiWriterError, Result};
use crate::jsonfile::JsonFile;

/// A post as persisted in `posts.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPost {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    pub author_id: u64,
    #[serde(default)]
    pub meta: BTreeMap<String, serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PostsDocument {
    next_id: u64,
    posts: Vec<StoredPost>,
}

#[derive(Debug, Clone)]
pub struct JsonPostStore {
    file: JsonFile,
    site_url: String,
}

impl JsonPostStore {
    pub fn in_dir(dir: impl AsRef<Path>, site_url: impl Into<String>) -> Self {
        Self::at(dir.as_ref().join(files::POSTS), site_url)
    }

    pub fn at(path: impl Into<PathBuf>, site_url: impl Into<String>) -> Self {
        Self {
            file: JsonFile::new(path),
            site_url: site_url.into(),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn get(&self, id: PostId) -> Result<Option<StoredPost>> {
        let doc: PostsDocument = self.file.read()?;
        Ok(doc.posts.into_iter().find(|p| p.id == id))
    }
}

impl PostStore for JsonPostStore {
    fn insert_post(&self, post: NewPost) -> Result<PostId> {
        let id = self.file.update(|doc: &mut PostsDocument| {
            let next = doc
                .posts
                .iter()
                .map(|p| p.id.0)
                .max()
                .unwrap_or(0)
                .max(doc.next_id)
                + 1;
            let id = PostId(next);
            doc.next_id = next;
            doc.posts.push(StoredPost {
                id,
                title: post.title,
                content: post.content,
                status: post.status,
                author_id: post.author_id,
                meta: post.meta,
                created_at: Utc::now(),
            });
            Ok(id)
        });

        match id {
            Ok(id) => {
                tracing::info!(%id, path = %self.path().display(), "post stored");
                Ok(id)
            }
            Err(AiWriterError::Store { reason, .. }) => Err(AiWriterError::PostCreation(reason)),
            Err(other) => Err(other),
        }
    }

    fn edit_url_for(&self, id: PostId) -> String {
        admin_edit_url(&self.site_url, id)
    }
}
