use super::{BlockRender, wrap_block};
use crate::blocks::parse::{BlockElement, BlockTag};

/// Lists keep their markup as parsed
pub struct ListRenderer;

impl BlockRender for ListRenderer {
    fn render(&self, element: &BlockElement) -> Option<String> {
        let ordered = match element.tag {
            BlockTag::OrderedList => true,
            BlockTag::UnorderedList => false,
            _ => return None,
        };
        Some(wrap_block(
            "list",
            Some(&format!("{{\"ordered\":{}}}", ordered)),
            &element.raw_html,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unordered_list_verbatim() {
        let element = BlockElement {
            tag: BlockTag::UnorderedList,
            raw_html: "<ul><li><a href=\"/x\">x</a></li></ul>".to_string(),
            plain_text: "x".to_string(),
        };
        assert_eq!(
            ListRenderer.render(&element).unwrap(),
            "<!-- wp:list {\"ordered\":false} -->\n<ul><li><a href=\"/x\">x</a></li></ul>\n<!-- /wp:list -->"
        );
    }
}
