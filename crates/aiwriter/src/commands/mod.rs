//! CLI command implementations

pub mod connection;
pub mod generate;
pub mod library;
pub mod post;
pub mod save;
pub mod settings;

use anyhow::{Context as _, Result};

use crate::cli::ContentSource;

/// Inline `--content` or the contents of `--content-file`
pub(crate) fn read_content(source: ContentSource) -> Result<String> {
    match (source.content, source.content_file) {
        (Some(content), _) => Ok(content),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display())),
        (None, None) => Ok(String::new()),
    }
}
