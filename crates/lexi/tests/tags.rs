//! Integration tests for rich-text tag splitting and component rendering.

use lexi::ComponentRegistry;
use lexi::interpreter::render_nodes;
use lexi::parser::{TagNode, split_tags};
use proptest::prelude::*;

fn brackets() -> ComponentRegistry {
    ComponentRegistry::new()
        .with("b", |s| format!("[{s}]"))
        .with("i", |s| format!("({s})"))
}

fn render(input: &str, components: &ComponentRegistry) -> String {
    render_nodes(&split_tags(input), components)
}

// =============================================================================
// Splitting
// =============================================================================

#[test]
fn plain_text_is_one_literal() {
    assert_eq!(split_tags("hello"), vec![TagNode::literal("hello")]);
}

#[test]
fn empty_input_has_no_nodes() {
    assert!(split_tags("").is_empty());
}

#[test]
fn tag_region_and_trailing_text() {
    assert_eq!(
        split_tags("click <b>here</b> now"),
        vec![
            TagNode::tagged("click ", "b", vec![TagNode::literal("here")]),
            TagNode::literal(" now"),
        ]
    );
}

#[test]
fn sibling_tags() {
    assert_eq!(
        split_tags("<b>x</b><i>y</i>"),
        vec![
            TagNode::tagged("", "b", vec![TagNode::literal("x")]),
            TagNode::tagged("", "i", vec![TagNode::literal("y")]),
        ]
    );
}

#[test]
fn nested_same_name_tags_form_one_region() {
    assert_eq!(
        split_tags("<b>x<b>y</b>z</b>"),
        vec![TagNode::tagged(
            "",
            "b",
            vec![
                TagNode::tagged("x", "b", vec![TagNode::literal("y")]),
                TagNode::literal("z"),
            ]
        )]
    );
}

#[test]
fn empty_tag_content() {
    assert_eq!(
        split_tags("a<b></b>"),
        vec![TagNode::tagged("a", "b", vec![])]
    );
}

#[test]
fn names_inside_brackets_are_trimmed() {
    assert_eq!(
        split_tags("< b >x</ b >"),
        vec![TagNode::tagged("", "b", vec![TagNode::literal("x")])]
    );
}

#[test]
fn tags_with_attributes_are_text() {
    assert_eq!(
        split_tags("<a href=x>y</a>"),
        vec![TagNode::literal("<a href=x>y</a>")]
    );
}

#[test]
fn tag_names_are_case_sensitive() {
    assert_eq!(split_tags("<b>x</B>"), vec![TagNode::literal("<b>x</B>")]);
}

#[test]
fn dangling_open_tag_becomes_literal() {
    assert_eq!(split_tags("a<b>c"), vec![TagNode::literal("a<b>c")]);
}

#[test]
fn stray_closing_tag_is_literal() {
    assert_eq!(split_tags("a</b>c"), vec![TagNode::literal("a</b>c")]);
}

#[test]
fn self_closing_tags_have_no_content() {
    assert_eq!(
        split_tags("a<br/>b< icon />"),
        vec![
            TagNode::tagged("a", "br", vec![]),
            TagNode::tagged("b", "icon", vec![]),
        ]
    );
}

#[test]
fn self_closing_tag_inside_region() {
    assert_eq!(
        split_tags("<b>x<b/>y</b>"),
        vec![TagNode::tagged(
            "",
            "b",
            vec![TagNode::tagged("x", "b", vec![]), TagNode::literal("y")]
        )]
    );
}

#[test]
fn thousands_of_sibling_tags_split_without_deep_recursion() {
    let input = "<b>x</b>".repeat(20_000);
    let nodes = split_tags(&input);
    assert_eq!(nodes.len(), 20_000);
    assert_eq!(render(&input, &brackets()).len(), 60_000);
    assert_eq!(lexi::parser::find_unbalanced_tag(&input), None);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn renders_components_around_content() {
    assert_eq!(render("a<b>c</b>d", &brackets()), "a[c]d");
}

#[test]
fn nested_same_name_tags_render_once_each() {
    let identity = ComponentRegistry::new().with("b", str::to_string);
    assert_eq!(render("<b>x<b>y</b>z</b>", &identity), "xyz");
    assert_eq!(render("<b>x<b>y</b>z</b>", &brackets()), "[x[y]z]");
}

#[test]
fn nested_different_tags_render_inside_out() {
    assert_eq!(render("<b>1<i>2</i>3</b>4", &brackets()), "[1(2)3]4");
}

#[test]
fn unknown_tags_render_content_only() {
    assert_eq!(render("a<u>b</u>c", &brackets()), "abc");
}

#[test]
fn self_closing_component_receives_empty_content() {
    let components = ComponentRegistry::new()
        .with("br", |s| format!("\n{s}"))
        .with("icon", |s| format!("[icon{s}]"));
    assert_eq!(render("a<br/>b <icon />", &components), "a\nb [icon]");
    assert_eq!(render("a<br/>b", &ComponentRegistry::new()), "ab");
}

#[test]
fn unbalanced_input_renders_verbatim() {
    assert_eq!(render("a<b>c", &brackets()), "a<b>c");
    assert_eq!(render("x<i>y</i>z<b>w", &brackets()), "x(y)z<b>w");
}

#[test]
fn component_sees_rendered_children() {
    let components = ComponentRegistry::new()
        .with("len", |s| s.chars().count().to_string())
        .with("b", |s| format!("**{s}**"));
    assert_eq!(render("<len><b>ab</b></len>", &components), "6");
}

#[test]
fn element_components_wrap_in_markup() {
    let components = ComponentRegistry::new().with_element("b", "strong");
    assert_eq!(render("hi <b>you</b>", &components), "hi <strong>you</strong>");
}

proptest! {
    #[test]
    fn text_without_tags_renders_unchanged(text in "[^<>]*") {
        prop_assert_eq!(render(&text, &brackets()), text);
    }

    #[test]
    fn wrapped_text_renders_through_component(inner in "[a-z ]{0,16}", outer in "[a-z ]{0,8}") {
        let input = format!("{outer}<b>{inner}</b>{outer}");
        prop_assert_eq!(render(&input, &brackets()), format!("{outer}[{inner}]{outer}"));
    }
}
