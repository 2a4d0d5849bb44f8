//! Inline allow-list for paragraph blocks
//!
//! Keeps `strong`, `b`, `em`, `i`, `br` and `a` (with `href` and `title`).
//! Other elements are unwrapped; script-like elements are dropped with
//! their content.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever::Attribute;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::cell::RefCell;

use super::parse::{ConversionError, find_body};

const INLINE_TAGS: [&str; 4] = ["strong", "b", "em", "i"];

const DROPPED_TAGS: [&str; 8] = [
    "script", "style", "iframe", "object", "embed", "template", "noscript", "svg",
];

const SAFE_SCHEMES: [&str; 3] = ["http:", "https:", "mailto:"];

/// Returns the allowed inline markup of `html`, text escaped, untrimmed
pub fn sanitize_inline(html: &str) -> Result<String, ConversionError> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| ConversionError::ParseError(e.to_string()))?;

    let mut out = String::new();
    if let Some(body) = find_body(&dom.document) {
        write_children(&body, &mut out);
    }
    Ok(out)
}

fn write_children(handle: &Handle, out: &mut String) {
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => {
                out.push_str(&html_escape::encode_text(&**contents.borrow()));
            }
            NodeData::Element { name, attrs, .. } => {
                let tag = name.local.as_ref();
                if DROPPED_TAGS.contains(&tag) {
                    continue;
                }
                match tag {
                    "br" => out.push_str("<br>"),
                    "a" => {
                        out.push_str("<a");
                        write_link_attrs(attrs, out);
                        out.push('>');
                        write_children(child, out);
                        out.push_str("</a>");
                    }
                    t if INLINE_TAGS.contains(&t) => {
                        out.push_str(&format!("<{}>", t));
                        write_children(child, out);
                        out.push_str(&format!("</{}>", t));
                    }
                    _ => write_children(child, out),
                }
            }
            _ => {}
        }
    }
}

fn write_link_attrs(attrs: &RefCell<Vec<Attribute>>, out: &mut String) {
    for attr in attrs.borrow().iter() {
        let value = attr.value.to_string();
        let keep = match attr.name.local.as_ref() {
            "href" => is_safe_href(&value),
            "title" => true,
            _ => false,
        };
        if keep {
            out.push_str(&format!(
                " {}=\"{}\"",
                attr.name.local.as_ref(),
                html_escape::encode_double_quoted_attribute(&value)
            ));
        }
    }
}

/// http(s), mailto, or a relative reference
fn is_safe_href(href: &str) -> bool {
    let href = href.trim().to_ascii_lowercase();
    let scheme_end = href.find(|c| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if href[i..].starts_with(':') => {
            SAFE_SCHEMES.iter().any(|scheme| href.starts_with(scheme))
        }
        _ => true,
    }
}
