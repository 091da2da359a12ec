use std::borrow::Cow;

use memchr::memchr;

use crate::Node;

pub const NBSP: char = '\u{00A0}';

// First byte of the UTF-8 encoding of U+00A0; cheap presence probe.
const NBSP_LEAD: u8 = 0xC2;

/// Concatenated text of the subtree, in document order. Comments do not
/// contribute.
pub fn text_content(node: &Node, out: &mut String) {
    match node {
        Node::Text { text, .. } => out.push_str(text),
        Node::Document { children, .. } | Node::Element { children, .. } => {
            for c in children {
                text_content(c, out);
            }
        }
        Node::Comment { .. } => {}
    }
}

pub fn text_content_string(node: &Node) -> String {
    let mut out = String::new();
    text_content(node, &mut out);
    out
}

fn has_nbsp(text: &str) -> bool {
    memchr(NBSP_LEAD, text.as_bytes()).is_some() && text.contains(NBSP)
}

/// Replace every non-breaking space with an ordinary space.
pub fn replace_nbsp_with_space(text: &str) -> Cow<'_, str> {
    if !has_nbsp(text) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace(NBSP, " "))
}

/// Drop every non-breaking space.
pub fn strip_nbsp(text: &str) -> Cow<'_, str> {
    if !has_nbsp(text) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().filter(|&c| c != NBSP).collect())
}
