//! Translation catalogs.
//!
//! A [`Catalog`] maps each supported locale to a [`ValueTree`]: nested keys
//! whose leaves are plain strings or [`PluralSet`]s. Catalogs can be built in
//! code, merged from namespaces, or loaded from JSON (see
//! [`crate::I18nConfig::from_json_str`]).

mod load;
mod namespace;
mod plural_set;
mod tree;

use std::collections::BTreeMap;

pub(crate) use load::{catalog_from_json, catalog_from_namespaces_json};
pub use namespace::merge_namespaces;
pub use plural_set::{PluralRule, PluralSet};
pub use tree::{Entry, MissingKey, ValueTree};

/// Per-locale value trees. The set of locales is fixed once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    locales: BTreeMap<String, ValueTree>,
}

impl Catalog {
    /// Create a catalog from one tree per locale.
    pub fn from_locales(locales: BTreeMap<String, ValueTree>) -> Self {
        Self { locales }
    }

    /// Create a catalog from namespaced catalogs.
    ///
    /// Each locale's tree gets one top-level key per namespace, holding that
    /// namespace's tree for the locale.
    pub fn from_namespaces(namespaces: BTreeMap<String, BTreeMap<String, ValueTree>>) -> Self {
        Self {
            locales: merge_namespaces(namespaces),
        }
    }

    /// Get the tree for a locale.
    pub fn tree(&self, locale: &str) -> Option<&ValueTree> {
        self.locales.get(locale)
    }

    /// Check whether a locale is supported.
    pub fn contains_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Supported locale ids, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Iterate over `(locale, tree)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValueTree)> {
        self.locales
            .iter()
            .map(|(locale, tree)| (locale.as_str(), tree))
    }

    /// Number of supported locales.
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Whether no locale is supported.
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
