//! Public AST types for rich text and plural predicates.
//!
//! These types are public so that tooling (the CLI `check` command, linters)
//! can inspect catalogs without rendering them.

use std::ops::Bound;

/// One unit of split rich text.
///
/// `text` is the literal run that precedes the tag. When `tag` is empty the
/// node is a plain literal and has no children; otherwise `children` holds the
/// recursively split content between `<tag>` and its matching `</tag>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagNode {
    pub text: String,
    pub tag: String,
    pub children: Vec<TagNode>,
}

impl TagNode {
    /// A literal node with no tag association.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: String::new(),
            children: Vec::new(),
        }
    }

    /// A node whose `tag` region contains `children`, preceded by `text`.
    pub fn tagged(text: impl Into<String>, tag: impl Into<String>, children: Vec<TagNode>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
            children,
        }
    }

    /// Whether this node is plain text.
    pub fn is_literal(&self) -> bool {
        self.tag.is_empty()
    }
}

/// A numeric condition attached to a plural rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PluralPredicate {
    /// Matches exactly one value.
    Exact(f64),
    /// `start..end` or `start..=end`; `None` start is unbounded below.
    Range { start: Option<f64>, end: Bound<f64> },
    /// `_`: matches every count.
    Any,
}

impl PluralPredicate {
    /// Check whether `count` satisfies this predicate.
    pub fn matches(&self, count: f64) -> bool {
        match *self {
            PluralPredicate::Exact(value) => count == value,
            PluralPredicate::Range { start, end } => {
                let above_start = start.is_none_or(|min| count >= min);
                let below_end = match end {
                    Bound::Included(max) => count <= max,
                    Bound::Excluded(max) => count < max,
                    Bound::Unbounded => true,
                };
                above_start && below_end
            }
            PluralPredicate::Any => true,
        }
    }
}
