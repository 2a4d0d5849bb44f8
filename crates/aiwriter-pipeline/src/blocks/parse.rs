//! Top-level element extraction

use std::sync::LazyLock;

use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
use html5ever::tendril::TendrilSink;
use html5ever::parse_document;
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};
use regex::Regex;
use thiserror::Error;

use crate::content::plain_text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockTag {
    Heading(u8),
    Paragraph,
    UnorderedList,
    OrderedList,
    Blockquote,
    Other(String),
}

impl BlockTag {
    pub fn from_name(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                BlockTag::Heading(name.as_bytes()[1] - b'0')
            }
            "p" => BlockTag::Paragraph,
            "ul" => BlockTag::UnorderedList,
            "ol" => BlockTag::OrderedList,
            "blockquote" => BlockTag::Blockquote,
            _ => BlockTag::Other(name),
        }
    }
}

/// One top-level element of the post body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockElement {
    pub tag: BlockTag,
    /// Serialized element, tags included
    pub raw_html: String,
    /// Text content, trimmed
    pub plain_text: String,
}

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),
}

static OPEN_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(h[1-6]|p|ul|ol|blockquote)\b[^>]*>").unwrap());

/// Parses `html` and returns the element children of `<body>`.
///
/// Falls back to [`extract_with_regex`] when the DOM yields none.
pub fn parse_elements(html: &str) -> Result<Vec<BlockElement>, ConversionError> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| ConversionError::ParseError(e.to_string()))?;

    let mut elements = Vec::new();
    if let Some(body) = find_body(&dom.document) {
        for child in body.children.borrow().iter() {
            if let NodeData::Element { name, .. } = &child.data {
                elements.push(BlockElement {
                    tag: BlockTag::from_name(name.local.as_ref()),
                    raw_html: serialize_node(child)?,
                    plain_text: collect_text(child).trim().to_string(),
                });
            }
        }
    }

    if elements.is_empty() {
        tracing::debug!("no elements in DOM, trying regex extraction");
        elements = extract_with_regex(html);
    }
    Ok(elements)
}

/// Finds `<h1-6|p|ul|ol|blockquote>...</same>` pairs in source order.
///
/// Unclosed elements are skipped. Nesting of the same tag is not tracked.
pub fn extract_with_regex(html: &str) -> Vec<BlockElement> {
    let lower = html.to_ascii_lowercase();
    let mut elements = Vec::new();
    let mut pos = 0;

    while let Some(open) = OPEN_BLOCK_REGEX.captures_at(html, pos) {
        let (Some(whole), Some(name)) = (open.get(0), open.get(1)) else {
            break;
        };
        let tag = name.as_str().to_ascii_lowercase();
        let close = format!("</{}>", tag);

        match lower[whole.end()..].find(&close) {
            Some(offset) => {
                let inner_end = whole.end() + offset;
                let end = inner_end + close.len();
                elements.push(BlockElement {
                    tag: BlockTag::from_name(&tag),
                    raw_html: html[whole.start()..end].to_string(),
                    plain_text: plain_text(&html[whole.end()..inner_end]).trim().to_string(),
                });
                pos = end;
            }
            None => pos = whole.end(),
        }
    }
    elements
}

pub(crate) fn find_body(handle: &Handle) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if let NodeData::Element { name, .. } = &child.data {
            if name.local.as_ref() == "body" {
                return Some(child.clone());
            }
            if let Some(body) = find_body(child) {
                return Some(body);
            }
        }
    }
    None
}

pub(crate) fn serialize_node(handle: &Handle) -> Result<String, ConversionError> {
    let mut bytes = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    serialize(&mut bytes, &SerializableHandle::from(handle.clone()), opts)
        .map_err(|e| ConversionError::ParseError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ConversionError::ParseError(e.to_string()))
}

/// Concatenated text of all descendants
pub(crate) fn collect_text(handle: &Handle) -> String {
    let mut text = String::new();
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => text.push_str(&contents.borrow()),
            NodeData::Element { .. } => text.push_str(&collect_text(child)),
            _ => {}
        }
    }
    text
}
