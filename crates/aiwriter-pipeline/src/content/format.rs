//! HTML normalisation applied to every generated body

use std::sync::LazyLock;

use regex::{Captures, Regex};

static H1_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1\b[^>]*>(.*?)</h1\s*>").unwrap());

/// An opening `<p>` with or without attributes, not `<pre>` or `<param>`
static P_OPEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<p[\s>]").unwrap());

static BLANK_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t]*\n").unwrap());

/// Segments starting with one of these are left unwrapped
static BLOCK_START_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^<(?:h[1-6]|ul|ol|blockquote|pre|table|div|hr|figure|p)\b").unwrap()
});

/// Container tags whose top-level close ends a segment, plus `<hr>`
static CONTAINER_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(/?)(ul|ol|blockquote|pre|table|div|figure)\b[^>]*>|<hr\b[^>]*>").unwrap()
});

static OPEN_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(?:h[1-6]|p)[\s>]").unwrap());

static CLOSE_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</(?:h[1-6]|p)\s*>").unwrap());

/// Any whitespace run holding two or more newlines
static NEWLINE_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\r]*\n\s*\n\s*").unwrap());

/// Demotes h1 to h2, wraps bare text in paragraphs and puts every heading
/// and paragraph on its own block. Formatting twice gives the same string.
pub fn format_content(content: &str) -> String {
    let content = demote_h1(content);
    let content = if P_OPEN_REGEX.is_match(&content) {
        content
    } else {
        wrap_paragraphs(&content)
    };
    space_blocks(&content)
}

fn demote_h1(content: &str) -> String {
    H1_REGEX
        .replace_all(content, |caps: &Captures| format!("<h2>{}</h2>", &caps[1]))
        .into_owned()
}

fn wrap_paragraphs(content: &str) -> String {
    // Break after headings and top-level containers first so trailing
    // text gets its own segment
    let spaced = space_blocks(&break_after_containers(content));

    BLANK_LINE_REGEX
        .split(&spaced)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if BLOCK_START_REGEX.is_match(segment) {
                segment.to_string()
            } else {
                format!("<p>{}</p>", segment)
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Inserts a blank line after each container that closes at depth zero
fn break_after_containers(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut depth = 0usize;
    let mut last = 0;

    for caps in CONTAINER_TAG_REGEX.captures_iter(content) {
        let Some(tag) = caps.get(0) else { continue };
        let top_level_end = match caps.get(1) {
            // <hr>
            None => depth == 0,
            Some(slash) if slash.as_str().is_empty() => {
                depth += 1;
                false
            }
            Some(_) => {
                depth = depth.saturating_sub(1);
                depth == 0
            }
        };
        if top_level_end {
            out.push_str(&content[last..tag.end()]);
            out.push_str("\n\n");
            last = tag.end();
        }
    }
    out.push_str(&content[last..]);
    out
}

fn space_blocks(content: &str) -> String {
    let content = OPEN_TAG_REGEX.replace_all(content, "\n\n$0");
    let content = CLOSE_TAG_REGEX.replace_all(&content, "$0\n\n");
    NEWLINE_RUN_REGEX
        .replace_all(&content, "\n\n")
        .trim()
        .to_string()
}
