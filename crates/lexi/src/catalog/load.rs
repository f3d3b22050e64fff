//! Conversion from raw JSON values into catalog trees.
//!
//! Strings become [`Entry::Text`], objects become [`Entry::Tree`], and arrays
//! become [`Entry::Plural`]. Each plural rule is an array whose first element
//! is the template and whose remaining elements are predicates: JSON numbers
//! for exact values, strings for the predicate language (`"2..=5"`, `"_"`).

use std::collections::BTreeMap;

use serde_json::{Map, Value as JsonValue};

use super::plural_set::{PluralRule, PluralSet};
use super::tree::{Entry, ValueTree};
use super::Catalog;
use crate::interpreter::LoadError;
use crate::parser::{PluralPredicate, parse_predicates};

/// Build a catalog from `{locale -> json tree}`.
pub(crate) fn catalog_from_json(locales: BTreeMap<String, JsonValue>) -> Result<Catalog, LoadError> {
    let mut trees = BTreeMap::new();
    for (locale, value) in locales {
        let tree = root_from_json(&value, &locale, Vec::new())?;
        trees.insert(locale, tree);
    }
    Ok(Catalog::from_locales(trees))
}

/// Build a catalog from `{namespace -> {locale -> json tree}}`.
pub(crate) fn catalog_from_namespaces_json(
    namespaces: BTreeMap<String, BTreeMap<String, JsonValue>>,
) -> Result<Catalog, LoadError> {
    let mut converted = BTreeMap::new();
    for (namespace, locales) in namespaces {
        let mut trees = BTreeMap::new();
        for (locale, value) in locales {
            let tree = root_from_json(&value, &locale, vec![namespace.clone()])?;
            trees.insert(locale, tree);
        }
        converted.insert(namespace, trees);
    }
    Ok(Catalog::from_namespaces(converted))
}

fn root_from_json(value: &JsonValue, locale: &str, mut path: Vec<String>) -> Result<ValueTree, LoadError> {
    match value {
        JsonValue::Object(map) => tree_from_json(map, locale, &mut path),
        other => Err(invalid(
            locale,
            &path,
            format!("locale root must be an object, found {}", kind(other)),
        )),
    }
}

fn tree_from_json(
    map: &Map<String, JsonValue>,
    locale: &str,
    path: &mut Vec<String>,
) -> Result<ValueTree, LoadError> {
    let mut tree = ValueTree::new();
    for (key, value) in map {
        path.push(key.clone());
        let entry = entry_from_json(value, locale, path)?;
        path.pop();
        tree.insert(key.clone(), entry);
    }
    Ok(tree)
}

fn entry_from_json(value: &JsonValue, locale: &str, path: &mut Vec<String>) -> Result<Entry, LoadError> {
    match value {
        JsonValue::String(s) => Ok(Entry::Text(s.clone())),
        JsonValue::Object(map) => Ok(Entry::Tree(tree_from_json(map, locale, path)?)),
        JsonValue::Array(rules) => {
            let key_path: &[String] = path;
            let rules = rules
                .iter()
                .map(|rule| rule_from_json(rule, locale, key_path))
                .collect::<Result<PluralSet, _>>()?;
            Ok(Entry::Plural(rules))
        }
        other => Err(invalid(
            locale,
            path,
            format!(
                "expected a string, an object or a plural array, found {}",
                kind(other)
            ),
        )),
    }
}

fn rule_from_json(rule: &JsonValue, locale: &str, path: &[String]) -> Result<PluralRule, LoadError> {
    let items = match rule {
        JsonValue::String(template) => return Ok(PluralRule::fallback(template.clone())),
        JsonValue::Array(items) => items,
        other => {
            return Err(invalid(
                locale,
                path,
                format!("plural rule must be an array, found {}", kind(other)),
            ));
        }
    };

    let Some((first, rest)) = items.split_first() else {
        return Err(invalid(locale, path, "plural rule is empty".to_string()));
    };
    let JsonValue::String(template) = first else {
        return Err(invalid(
            locale,
            path,
            format!("plural rule template must be a string, found {}", kind(first)),
        ));
    };

    let mut predicates = Vec::new();
    for item in rest {
        match item {
            JsonValue::Number(n) => {
                let value = n.as_f64().ok_or_else(|| {
                    invalid(locale, path, format!("plural count {n} is not representable"))
                })?;
                predicates.push(PluralPredicate::Exact(value));
            }
            JsonValue::String(s) => {
                let parsed = parse_predicates(s).map_err(|source| LoadError::InvalidPredicate {
                    locale: locale.to_string(),
                    key: path.join("."),
                    predicate: s.clone(),
                    source,
                })?;
                predicates.extend(parsed);
            }
            other => {
                return Err(invalid(
                    locale,
                    path,
                    format!("plural predicate must be a number or a string, found {}", kind(other)),
                ));
            }
        }
    }

    Ok(PluralRule::new(template.clone(), predicates))
}

fn invalid(locale: &str, path: &[String], message: String) -> LoadError {
    LoadError::InvalidEntry {
        locale: locale.to_string(),
        key: path.join("."),
        message,
    }
}

fn kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_objects_become_trees() {
        let catalog = catalog_from_json(BTreeMap::from([(
            "en".to_string(),
            json!({ "home": { "title": "Home" } }),
        )]))
        .unwrap();
        let tree = catalog.tree("en").unwrap();
        assert_eq!(tree.resolve("home.title"), Some(&Entry::from("Home")));
    }

    #[test]
    fn wildcard_rule_is_fallback() {
        let catalog = catalog_from_json(BTreeMap::from([(
            "en".to_string(),
            json!({ "items": [["one", 1], ["many", "_"]] }),
        )]))
        .unwrap();
        let Some(Entry::Plural(set)) = catalog.tree("en").unwrap().get("items") else {
            panic!("expected plural");
        };
        assert!(set.rules()[1].is_fallback());
        assert!(!set.rules()[0].is_fallback());
    }

    #[test]
    fn invalid_leaf_names_the_key() {
        let err = catalog_from_json(BTreeMap::from([(
            "fr".to_string(),
            json!({ "a": { "b": true } }),
        )]))
        .unwrap_err();
        match err {
            LoadError::InvalidEntry { locale, key, .. } => {
                assert_eq!(locale, "fr");
                assert_eq!(key, "a.b");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
