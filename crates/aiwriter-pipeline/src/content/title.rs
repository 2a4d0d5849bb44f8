//! Titles for generated content

use std::sync::LazyLock;

use regex::Regex;

use super::text::{collapse_whitespace, plain_text};

pub const MAX_TITLE_CHARS: usize = 60;

pub const DEFAULT_TITLE: &str = "Generated Content";

const TRUNCATED_CHARS: usize = MAX_TITLE_CHARS - 3;

static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h[1-6]\b[^>]*>(.*?)</h[1-6]\s*>").unwrap());

static SENTENCE_END_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// Derives a title from formatted content.
///
/// The first heading wins if it is short enough, then the first sentence
/// (truncated), then [`DEFAULT_TITLE`].
pub fn fallback_title(content: &str) -> String {
    if let Some(caps) = HEADING_REGEX.captures(content) {
        let heading = collapse_whitespace(&plain_text(&caps[1]));
        let len = heading.chars().count();
        if len > 0 && len <= MAX_TITLE_CHARS {
            return heading;
        }
    }

    let text = plain_text(content);
    SENTENCE_END_REGEX
        .split(&text)
        .map(collapse_whitespace)
        .find(|sentence| !sentence.is_empty())
        .map(|sentence| truncate(&sentence))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// Cleans a model-supplied title; `None` when nothing usable is left.
pub fn normalize_title(title: &str) -> Option<String> {
    let title = collapse_whitespace(&plain_text(title));
    if title.is_empty() {
        None
    } else {
        Some(truncate(&title))
    }
}

fn truncate(title: &str) -> String {
    if title.chars().count() > MAX_TITLE_CHARS {
        let head: String = title.chars().take(TRUNCATED_CHARS).collect();
        format!("{}...", head)
    } else {
        title.to_string()
    }
}
