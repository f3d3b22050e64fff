use std::collections::BTreeMap;

use super::tree::{Entry, ValueTree};

/// Merge `{namespace -> {locale -> tree}}` into `{locale -> tree}`.
///
/// The result satisfies `merged[locale][namespace] == namespaces[namespace][locale]`.
/// A locale missing from some namespace simply lacks that namespace key.
pub fn merge_namespaces(
    namespaces: BTreeMap<String, BTreeMap<String, ValueTree>>,
) -> BTreeMap<String, ValueTree> {
    let mut merged: BTreeMap<String, ValueTree> = BTreeMap::new();
    for (namespace, locales) in namespaces {
        for (locale, tree) in locales {
            merged
                .entry(locale)
                .or_default()
                .insert(namespace.clone(), Entry::Tree(tree));
        }
    }
    merged
}
