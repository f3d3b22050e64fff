//! Registry of caller-supplied tag renderers.

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};

/// Renders the already rendered content of a tag.
pub type ComponentFn = Box<dyn Fn(&str) -> String>;

/// Maps tag names to rendering functions.
///
/// Tags without a registered component render their content unchanged.
///
/// # Example
///
/// ```
/// use lexi::ComponentRegistry;
///
/// let components = ComponentRegistry::new()
///     .with("b", |content| format!("[{content}]"))
///     .with_element("i", "em");
///
/// assert_eq!(components.render("b", "x"), "[x]");
/// assert_eq!(components.render("i", "x"), "<em>x</em>");
/// assert_eq!(components.render("u", "x"), "x");
/// ```
#[derive(Default)]
pub struct ComponentRegistry {
    components: BTreeMap<String, ComponentFn>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component, replacing any previous one for `tag`.
    pub fn register(&mut self, tag: impl Into<String>, component: impl Fn(&str) -> String + 'static) {
        self.components.insert(tag.into(), Box::new(component));
    }

    /// Builder-style [`ComponentRegistry::register`].
    #[must_use]
    pub fn with(mut self, tag: impl Into<String>, component: impl Fn(&str) -> String + 'static) -> Self {
        self.register(tag, component);
        self
    }

    /// Render `tag` as a literal `<element>...</element>` wrapper.
    #[must_use]
    pub fn with_element(self, tag: impl Into<String>, element: impl Into<String>) -> Self {
        let element = element.into();
        self.with(tag, move |content| format!("<{element}>{content}</{element}>"))
    }

    /// Look up the component for `tag`.
    pub fn get(&self, tag: &str) -> Option<&ComponentFn> {
        self.components.get(tag)
    }

    /// Check if a component is registered for `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.components.contains_key(tag)
    }

    /// Apply the component for `tag` to `content`, or return `content`
    /// unchanged when none is registered.
    pub fn render(&self, tag: &str, content: &str) -> String {
        match self.get(tag) {
            Some(component) => component(content),
            None => content.to_string(),
        }
    }
}

impl Debug for ComponentRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(self.components.keys()).finish()
    }
}
