use super::{BlockRender, wrap_block};
use crate::blocks::parse::BlockElement;
use crate::blocks::sanitize::sanitize_inline;

/// Sanitized inline content in a fresh `<p>`; `None` when nothing is left
pub struct ParagraphRenderer;

impl BlockRender for ParagraphRenderer {
    fn render(&self, element: &BlockElement) -> Option<String> {
        let inline = match sanitize_inline(&element.raw_html) {
            Ok(inline) => inline,
            Err(e) => {
                tracing::warn!(error = %e, "sanitizing failed, using plain text");
                html_escape::encode_text(&element.plain_text).into_owned()
            }
        };
        let inline = inline.trim();
        if inline.is_empty() {
            return None;
        }
        Some(wrap_block("paragraph", None, &format!("<p>{}</p>", inline)))
    }
}
