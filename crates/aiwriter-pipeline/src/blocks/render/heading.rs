use super::{BlockRender, wrap_block};
use crate::blocks::parse::{BlockElement, BlockTag};

/// `<hN class="wp-block-heading">` with escaped text; emitted even when empty
pub struct HeadingRenderer;

impl BlockRender for HeadingRenderer {
    fn render(&self, element: &BlockElement) -> Option<String> {
        let BlockTag::Heading(level) = element.tag else {
            return None;
        };
        let body = format!(
            "<h{level} class=\"wp-block-heading\">{}</h{level}>",
            html_escape::encode_text(&element.plain_text)
        );
        Some(wrap_block(
            "heading",
            Some(&format!("{{\"level\":{}}}", level)),
            &body,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_text_is_escaped() {
        let element = BlockElement {
            tag: BlockTag::Heading(3),
            raw_html: "<h3>Fish &amp; <em>Chips</em></h3>".to_string(),
            plain_text: "Fish & Chips".to_string(),
        };
        assert_eq!(
            HeadingRenderer.render(&element).unwrap(),
            "<!-- wp:heading {\"level\":3} -->\n\
             <h3 class=\"wp-block-heading\">Fish &amp; Chips</h3>\n\
             <!-- /wp:heading -->"
        );
    }
}
