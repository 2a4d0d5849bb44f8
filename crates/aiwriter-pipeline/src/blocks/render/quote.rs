use super::{BlockRender, wrap_block};
use crate::blocks::parse::BlockElement;

/// Quote text only, escaped, in a single inner paragraph
pub struct QuoteRenderer;

impl BlockRender for QuoteRenderer {
    fn render(&self, element: &BlockElement) -> Option<String> {
        let body = format!(
            "<blockquote class=\"wp-block-quote\"><p>{}</p></blockquote>",
            html_escape::encode_text(&element.plain_text)
        );
        Some(wrap_block("quote", None, &body))
    }
}
