//! Rich-text tag splitter.
//!
//! Splits strings like `"click <b>here</b> now"` into a [`TagNode`] tree.
//! Tags carry no attributes; names are trimmed and compared case-sensitively.
//! Same-named tags nest, so `<b>x<b>y</b>z</b>` is one `b` region whose
//! content holds a second one. A self-closing tag (`<br/>`, `<icon />`) is a
//! region with no content. An opening tag with no matching close makes the
//! rest of the string literal text.

use tracing::warn;
use winnow::combinator::{alt, delimited, preceded};
use winnow::prelude::*;
use winnow::token::take_while;

use super::ast::TagNode;

/// Position and name of a tag token inside a string.
struct TagToken<'a> {
    start: usize,
    end: usize,
    name: &'a str,
    self_closing: bool,
}

/// Split a string into a tree of literal runs and tagged regions.
///
/// An empty input produces no nodes; input without tags produces a single
/// literal node. Siblings are collected iteratively, so only nesting depth
/// recurses.
///
/// # Example
///
/// ```
/// use lexi::parser::{TagNode, split_tags};
///
/// let nodes = split_tags("a<b>c</b>d<br/>");
/// assert_eq!(
///     nodes,
///     vec![
///         TagNode::tagged("a", "b", vec![TagNode::literal("c")]),
///         TagNode::tagged("d", "br", Vec::new()),
///     ]
/// );
/// ```
pub fn split_tags(input: &str) -> Vec<TagNode> {
    let mut nodes = Vec::new();
    let mut rest = input;
    while !rest.is_empty() {
        let Some(open) = find_opening_tag(rest) else {
            nodes.push(TagNode::literal(rest));
            break;
        };
        let prefix = &rest[..open.start];
        let content_and_rest = &rest[open.end..];
        if open.self_closing {
            nodes.push(TagNode::tagged(prefix, open.name, Vec::new()));
            rest = content_and_rest;
            continue;
        }
        let Some(close) = find_closing_tag(content_and_rest, open.name) else {
            warn!(tag = open.name, "unbalanced tag, rendering remainder as literal text");
            nodes.push(TagNode::literal(rest));
            break;
        };
        let children = split_tags(&content_and_rest[..close.start]);
        nodes.push(TagNode::tagged(prefix, open.name, children));
        rest = &content_and_rest[close.end..];
    }
    nodes
}

/// Name of the first opening tag that has no matching close, if any.
///
/// [`split_tags`] renders such input as literal text; this reports it.
///
/// ```
/// use lexi::parser::find_unbalanced_tag;
///
/// assert_eq!(find_unbalanced_tag("a<b>c</b>d<br/>"), None);
/// assert_eq!(find_unbalanced_tag("<i>x</i><b>y"), Some("b"));
/// ```
pub fn find_unbalanced_tag(input: &str) -> Option<&str> {
    let mut rest = input;
    while let Some(open) = find_opening_tag(rest) {
        let content_and_rest = &rest[open.end..];
        if open.self_closing {
            rest = content_and_rest;
            continue;
        }
        let Some(close) = find_closing_tag(content_and_rest, open.name) else {
            return Some(open.name);
        };
        if let Some(name) = find_unbalanced_tag(&content_and_rest[..close.start]) {
            return Some(name);
        }
        rest = &content_and_rest[close.end..];
    }
    None
}

/// Find the first `<name>` or `<name/>` in `input`.
fn find_opening_tag(input: &str) -> Option<TagToken<'_>> {
    input
        .match_indices('<')
        .find_map(|(start, _)| parse_at(input, start, opening_tag))
}

/// Find the `</name>` that closes an already consumed `<name>`.
///
/// Each further `<name>` raises the depth and each `</name>` lowers it; the
/// closing tag that brings depth to zero is the match. Self-closing tags
/// leave the depth alone.
fn find_closing_tag<'a>(input: &'a str, name: &str) -> Option<TagToken<'a>> {
    let mut depth: usize = 1;
    for (start, _) in input.match_indices('<') {
        if let Some(token) = parse_at(input, start, closing_tag) {
            if token.name == name {
                depth -= 1;
                if depth == 0 {
                    return Some(token);
                }
            }
        } else if let Some(token) = parse_at(input, start, opening_tag) {
            if token.name == name && !token.self_closing {
                depth += 1;
            }
        }
    }
    None
}

/// Run a tag parser at byte offset `start`, returning the consumed span.
fn parse_at<'a>(
    input: &'a str,
    start: usize,
    mut parser: impl FnMut(&mut &'a str) -> ModalResult<(&'a str, bool)>,
) -> Option<TagToken<'a>> {
    let mut remaining = &input[start..];
    let (name, self_closing) = parser(&mut remaining).ok()?;
    Some(TagToken {
        start,
        end: input.len() - remaining.len(),
        name,
        self_closing,
    })
}

/// `<name>` or `<name/>`; the flag tells which.
fn opening_tag<'i>(input: &mut &'i str) -> ModalResult<(&'i str, bool)> {
    (
        preceded('<', tag_name),
        alt(("/>".value(true), '>'.value(false))),
    )
        .parse_next(input)
}

/// `</name>`
fn closing_tag<'i>(input: &mut &'i str) -> ModalResult<(&'i str, bool)> {
    delimited("</", tag_name, '>')
        .map(|name| (name, false))
        .parse_next(input)
}

/// A tag name with optional surrounding whitespace, which is discarded.
fn tag_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited(ws, take_while(1.., is_tag_char), ws).parse_next(input)
}

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., char::is_whitespace)
        .void()
        .parse_next(input)
}

fn is_tag_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '<' | '>' | '/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_tag_trims_name() {
        let mut input = "< b >rest";
        assert_eq!(opening_tag(&mut input).unwrap(), ("b", false));
        assert_eq!(input, "rest");
    }

    #[test]
    fn opening_tag_reports_self_closing() {
        let mut input = "<br/>";
        assert_eq!(opening_tag(&mut input).unwrap(), ("br", true));
        let mut input = "< icon />";
        assert_eq!(opening_tag(&mut input).unwrap(), ("icon", true));
    }

    #[test]
    fn opening_tag_rejects_attributes() {
        let mut input = "<a href>";
        assert!(opening_tag(&mut input).is_err());
    }

    #[test]
    fn closing_tag_is_not_an_opening_tag() {
        let mut input = "</b>";
        assert!(opening_tag(&mut input).is_err());
        let mut input = "</b>";
        assert_eq!(closing_tag(&mut input).unwrap(), ("b", false));
    }

    #[test]
    fn closing_search_skips_other_names() {
        let token = find_closing_tag("x</i></b>", "b").unwrap();
        assert_eq!(token.start, 5);
        assert_eq!(token.end, 9);
    }

    #[test]
    fn closing_search_ignores_self_closing_same_name() {
        let token = find_closing_tag("x<b/>y</b>", "b").unwrap();
        assert_eq!(token.start, 6);
    }

    #[test]
    fn unbalanced_tag_inside_region_is_found() {
        assert_eq!(find_unbalanced_tag("<b>x<i>y</b>"), Some("i"));
        assert_eq!(find_unbalanced_tag("plain"), None);
        assert_eq!(find_unbalanced_tag("<br/><hr />"), None);
    }
}
