//! HTML to block-annotated post markup
//!
//! # Architecture
//!
//! - [`parse`]: splits HTML into top-level [`BlockElement`]s (html5ever, with
//!   a regex fallback)
//! - [`sanitize`]: reduces paragraph markup to a small inline allow-list
//! - [`render`]: one [`BlockRender`] per block kind
//!
//! Rendered fragments are joined with a blank line.

pub mod parse;
pub mod render;
pub mod sanitize;

pub use parse::{BlockElement, BlockTag, ConversionError, parse_elements};
pub use render::{BlockRender, render_block};

/// Converts formatted HTML into block markup.
///
/// Elements that render to nothing (empty paragraphs) are dropped.
pub fn convert_to_blocks(html: &str) -> Result<String, ConversionError> {
    let elements = parse_elements(html.trim())?;
    let blocks: Vec<String> = elements.iter().filter_map(render_block).collect();
    tracing::debug!(elements = elements.len(), blocks = blocks.len(), "converted to blocks");
    Ok(blocks.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_then_paragraph() {
        let out = convert_to_blocks("<h2>Title</h2><p>Body</p>").unwrap();
        assert_eq!(
            out,
            "<!-- wp:heading {\"level\":2} -->\n\
             <h2 class=\"wp-block-heading\">Title</h2>\n\
             <!-- /wp:heading -->\n\n\
             <!-- wp:paragraph -->\n\
             <p>Body</p>\n\
             <!-- /wp:paragraph -->"
        );
    }

    #[test]
    fn test_mixed_document() {
        let html = "<h3>Steps</h3>\n\n<ol><li>One</li><li>Two</li></ol>\n\n\
                    <blockquote>Be <em>kind</em></blockquote>\n\n<p></p>\n\n<p>End &amp; done</p>";
        let out = convert_to_blocks(html).unwrap();
        let blocks: Vec<&str> = out.split("\n\n").collect();

        assert_eq!(blocks.len(), 4);
        assert!(blocks[0].starts_with("<!-- wp:heading {\"level\":3} -->"));
        assert_eq!(
            blocks[1],
            "<!-- wp:list {\"ordered\":true} -->\n<ol><li>One</li><li>Two</li></ol>\n<!-- /wp:list -->"
        );
        assert_eq!(
            blocks[2],
            "<!-- wp:quote -->\n<blockquote class=\"wp-block-quote\"><p>Be kind</p></blockquote>\n<!-- /wp:quote -->"
        );
        assert_eq!(
            blocks[3],
            "<!-- wp:paragraph -->\n<p>End &amp; done</p>\n<!-- /wp:paragraph -->"
        );
    }

    #[test]
    fn test_plain_text_yields_nothing() {
        assert_eq!(convert_to_blocks("just words").unwrap(), "");
        assert_eq!(convert_to_blocks("").unwrap(), "");
    }

    #[test]
    fn test_formatted_text_after_list_keeps_its_block() {
        let html = crate::content::format_content("<ul><li>a</li></ul> tail\n\nnext");
        let out = convert_to_blocks(&html).unwrap();
        assert_eq!(
            out,
            "<!-- wp:list {\"ordered\":false} -->\n<ul><li>a</li></ul>\n<!-- /wp:list -->\n\n\
             <!-- wp:paragraph -->\n<p>tail</p>\n<!-- /wp:paragraph -->\n\n\
             <!-- wp:paragraph -->\n<p>next</p>\n<!-- /wp:paragraph -->"
        );
    }
}
