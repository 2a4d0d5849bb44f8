//! Block markup rendering
//!
//! Each renderer turns one [`BlockElement`] into a complete block (opening
//! comment, markup, closing comment) or `None` when there is nothing to emit.

mod heading;
mod list;
mod paragraph;
mod quote;

pub use heading::HeadingRenderer;
pub use list::ListRenderer;
pub use paragraph::ParagraphRenderer;
pub use quote::QuoteRenderer;

use super::parse::{BlockElement, BlockTag};

pub trait BlockRender {
    fn render(&self, element: &BlockElement) -> Option<String>;
}

/// Dispatches on the element's tag; unknown tags use the paragraph rule
pub fn render_block(element: &BlockElement) -> Option<String> {
    match element.tag {
        BlockTag::Heading(_) => HeadingRenderer.render(element),
        BlockTag::UnorderedList | BlockTag::OrderedList => ListRenderer.render(element),
        BlockTag::Blockquote => QuoteRenderer.render(element),
        BlockTag::Paragraph | BlockTag::Other(_) => ParagraphRenderer.render(element),
    }
}

/// `<!-- wp:name attrs -->`, body, `<!-- /wp:name -->` on three lines
pub(crate) fn wrap_block(name: &str, attrs: Option<&str>, body: &str) -> String {
    let open = match attrs {
        Some(attrs) => format!("<!-- wp:{} {} -->", name, attrs),
        None => format!("<!-- wp:{} -->", name),
    };
    format!("{}\n{}\n<!-- /wp:{} -->", open, body, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_block() {
        assert_eq!(
            wrap_block("list", Some("{\"ordered\":false}"), "<ul></ul>"),
            "<!-- wp:list {\"ordered\":false} -->\n<ul></ul>\n<!-- /wp:list -->"
        );
        assert_eq!(
            wrap_block("paragraph", None, "<p>x</p>"),
            "<!-- wp:paragraph -->\n<p>x</p>\n<!-- /wp:paragraph -->"
        );
    }

    #[test]
    fn test_unknown_tag_renders_as_paragraph() {
        let element = BlockElement {
            tag: BlockTag::Other("div".to_string()),
            raw_html: "<div>Inside <b>div</b></div>".to_string(),
            plain_text: "Inside div".to_string(),
        };
        assert_eq!(
            render_block(&element).unwrap(),
            "<!-- wp:paragraph -->\n<p>Inside <b>div</b></p>\n<!-- /wp:paragraph -->"
        );
    }
}
