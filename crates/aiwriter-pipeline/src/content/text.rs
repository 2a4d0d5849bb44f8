//! Tag stripping and word counting

use std::sync::LazyLock;

use regex::Regex;

/// Comments first, so a `>` inside one doesn't end the match early
static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>").unwrap());

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Removes tags and comments; entities are left alone
pub fn strip_tags(html: &str) -> String {
    TAG_REGEX.replace_all(html, "").into_owned()
}

/// Tag-free text with entities decoded
pub fn plain_text(html: &str) -> String {
    html_escape::decode_html_entities(&strip_tags(html)).into_owned()
}

/// Single-line text: tags removed, whitespace runs collapsed, trimmed
pub fn sanitize_text(value: &str) -> String {
    collapse_whitespace(&strip_tags(value))
}

pub fn collapse_whitespace(value: &str) -> String {
    WHITESPACE_REGEX.replace_all(value.trim(), " ").into_owned()
}

/// Counts words in the text of `html`.
///
/// A word starts with a letter and continues through letters, apostrophes
/// and hyphens.
pub fn word_count(html: &str) -> usize {
    let text = plain_text(html);
    let mut count = 0;
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if !in_word {
                count += 1;
                in_word = true;
            }
        } else if !(in_word && (c == '\'' || c == '-')) {
            in_word = false;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        assert_eq!(
            strip_tags("<h2 class=\"x\">Hi</h2><!-- a > b --><p>there &amp; back</p>"),
            "Hithere &amp; back"
        );
    }

    #[test]
    fn test_plain_text_decodes_entities() {
        assert_eq!(plain_text("<p>Fish &amp; Chips&nbsp;&#8217;</p>"), "Fish & Chips\u{a0}\u{2019}");
    }

    #[test]
    fn test_sanitize_text() {
        assert_eq!(sanitize_text("  <b>Rate</b>\n\n limit\t hit "), "Rate limit hit");
    }

    #[test]
    fn test_word_count() {
        let html = "<h2>Sample Generated Content</h2>\n\n<p>This is a test content generated by AI.</p>";
        assert_eq!(word_count(html), 11);
        assert_eq!(word_count("<p>It's a well-known fact - 42 times.</p>"), 5);
        assert_eq!(word_count("<p>&amp; 123 --</p>"), 0);
        assert_eq!(word_count(""), 0);
    }
}
