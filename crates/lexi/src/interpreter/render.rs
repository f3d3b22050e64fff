//! Component rendering over split rich text.

use super::components::ComponentRegistry;
use crate::parser::TagNode;

/// Render a tag tree to a string.
///
/// Each node contributes its literal text followed by its tag's content:
/// children are rendered first, then passed through the tag's component.
///
/// # Example
///
/// ```
/// use lexi::ComponentRegistry;
/// use lexi::interpreter::render_nodes;
/// use lexi::parser::split_tags;
///
/// let components = ComponentRegistry::new().with("b", |s| format!("[{s}]"));
/// assert_eq!(render_nodes(&split_tags("a<b>c</b>d"), &components), "a[c]d");
/// ```
pub fn render_nodes(nodes: &[TagNode], components: &ComponentRegistry) -> String {
    let mut output = String::new();
    for node in nodes {
        output.push_str(&node.text);
        if !node.is_literal() {
            let content = render_nodes(&node.children, components);
            output.push_str(&components.render(&node.tag, &content));
        }
    }
    output
}
