use std::collections::BTreeMap;

use tracing::trace;

use super::plural_set::PluralSet;

/// A value stored under a catalog key.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A translation template.
    Text(String),
    /// A nested namespace of keys.
    Tree(ValueTree),
    /// Alternatives selected by a numeric count.
    Plural(PluralSet),
}

impl Entry {
    /// Whether this entry is something a lookup can render.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Entry::Tree(_))
    }
}

impl From<&str> for Entry {
    fn from(s: &str) -> Self {
        Entry::Text(s.to_string())
    }
}

impl From<String> for Entry {
    fn from(s: String) -> Self {
        Entry::Text(s)
    }
}

impl From<ValueTree> for Entry {
    fn from(tree: ValueTree) -> Self {
        Entry::Tree(tree)
    }
}

impl From<PluralSet> for Entry {
    fn from(set: PluralSet) -> Self {
        Entry::Plural(set)
    }
}

/// Where a dotted lookup stopped.
///
/// `segment` is the index of the first key segment that could not be found,
/// and `parent` is the tree it was looked up in (used for suggestions).
#[derive(Debug, Clone, Copy)]
pub struct MissingKey<'a> {
    pub segment: usize,
    pub parent: Option<&'a ValueTree>,
}

/// A tree of translation keys.
///
/// # Example
///
/// ```
/// use lexi::catalog::{Entry, ValueTree};
///
/// let mut header = ValueTree::new();
/// header.insert("title", "Welcome");
/// let mut root = ValueTree::new();
/// root.insert("header", header);
///
/// assert_eq!(root.resolve("header.title"), Some(&Entry::from("Welcome")));
/// assert_eq!(root.resolve("header.missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueTree {
    entries: BTreeMap<String, Entry>,
}

impl ValueTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous entry under `key`.
    pub fn insert(&mut self, key: impl Into<String>, entry: impl Into<Entry>) {
        self.entries.insert(key.into(), entry.into());
    }

    /// Builder-style [`ValueTree::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, entry: impl Into<Entry>) -> Self {
        self.insert(key, entry);
        self
    }

    /// Get a direct child entry.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Direct child keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over direct children.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tree has no children.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Walk a dotted key through the tree.
    ///
    /// Returns `None` if any segment is absent or an intermediate segment is
    /// not a tree. The result may itself be a tree.
    pub fn resolve(&self, key: &str) -> Option<&Entry> {
        self.resolve_partial(key).ok()
    }

    /// Like [`ValueTree::resolve`], but reports where the walk stopped.
    pub fn resolve_partial(&self, key: &str) -> Result<&Entry, MissingKey<'_>> {
        let mut current = Some(self);
        let mut found = None;
        for (index, segment) in key.split('.').enumerate() {
            let Some(tree) = current else {
                return Err(MissingKey {
                    segment: index,
                    parent: None,
                });
            };
            let Some(entry) = tree.get(segment) else {
                trace!(key, segment, "key segment not found");
                return Err(MissingKey {
                    segment: index,
                    parent: Some(tree),
                });
            };
            current = match entry {
                Entry::Tree(subtree) => Some(subtree),
                Entry::Text(_) | Entry::Plural(_) => None,
            };
            found = Some(entry);
        }
        found.ok_or(MissingKey {
            segment: 0,
            parent: Some(self),
        })
    }

    /// Dotted paths of every leaf in the tree, sorted.
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        self.collect_leaf_keys("", &mut keys);
        keys
    }

    fn collect_leaf_keys(&self, prefix: &str, out: &mut Vec<String>) {
        for (key, entry) in &self.entries {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            match entry {
                Entry::Tree(subtree) => subtree.collect_leaf_keys(&path, out),
                Entry::Text(_) | Entry::Plural(_) => out.push(path),
            }
        }
    }
}

impl FromIterator<(String, Entry)> for ValueTree {
    fn from_iter<I: IntoIterator<Item = (String, Entry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ValueTree {
        ValueTree::new()
            .with("greet", "Hi")
            .with("home", ValueTree::new().with("title", "Home"))
    }

    #[test]
    fn resolve_walks_nested_trees() {
        let tree = sample();
        assert_eq!(tree.resolve("home.title"), Some(&Entry::from("Home")));
        assert!(matches!(tree.resolve("home"), Some(Entry::Tree(_))));
    }

    #[test]
    fn resolve_stops_at_leaf() {
        let tree = sample();
        let missing = tree.resolve_partial("greet.more").unwrap_err();
        assert_eq!(missing.segment, 1);
        assert!(missing.parent.is_none());
    }

    #[test]
    fn resolve_reports_parent_of_missing_segment() {
        let tree = sample();
        let missing = tree.resolve_partial("home.titel").unwrap_err();
        assert_eq!(missing.segment, 1);
        let parent_keys: Vec<_> = missing.parent.unwrap().keys().collect();
        assert_eq!(parent_keys, vec!["title"]);
    }

    #[test]
    fn leaf_keys_are_dotted() {
        assert_eq!(sample().leaf_keys(), vec!["greet", "home.title"]);
    }
}
