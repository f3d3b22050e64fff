//! Error types for loading catalogs and resolving translations.

use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

/// Errors that occur while loading a catalog configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a catalog file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON or does not have the config shape.
    #[error("{path}:{line}:{column}: {message}")]
    Json {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Both or neither of `locales` and `namespaces` were given.
    #[error("{path}: expected exactly one of `locales` or `namespaces`")]
    ConfigShape { path: PathBuf },

    /// The default locale has no catalog.
    #[error("default locale '{locale}' is not among the catalog locales: {}", available.join(", "))]
    UnknownDefaultLocale {
        locale: String,
        available: Vec<String>,
    },

    /// A catalog value has an unsupported shape.
    #[error("invalid entry '{key}' in locale '{locale}': {message}")]
    InvalidEntry {
        locale: String,
        key: String,
        message: String,
    },

    /// A plural predicate string failed to parse.
    #[error("invalid plural predicate '{predicate}' for '{key}' in locale '{locale}': {source}")]
    InvalidPredicate {
        locale: String,
        key: String,
        predicate: String,
        #[source]
        source: ParseError,
    },
}

/// An error that occurred while resolving a translation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Strict lookup of a key that does not exist.
    #[error("key not found: '{key}' in locale '{locale}'{}", format_suggestions(suggestions))]
    KeyNotFound {
        locale: String,
        key: String,
        suggestions: Vec<String>,
    },

    /// Strict lookup of a key that names a sub-tree instead of a translation.
    #[error("key '{key}' in locale '{locale}' is a namespace, not a translation")]
    KeyIsNamespace { locale: String, key: String },

    /// A locale outside the supported set.
    #[error("unknown locale '{locale}', available: {}", available.join(", "))]
    UnknownLocale {
        locale: String,
        available: Vec<String>,
    },

    /// A plural set was used without a count and has no fallback rule.
    #[error("plural '{key}' has no fallback rule to use without a count")]
    NoPluralDefault { key: String },

    /// No plural rule accepts the count and there is no fallback rule.
    #[error("no plural rule of '{key}' matches count {count}")]
    NoPluralMatch { key: String, count: f64 },

    /// The plural count is not a number.
    #[error("plural count for '{key}' must be a number, got '{value}'")]
    InvalidCount { key: String, value: String },

    /// A `$t(...)` reference names a key that does not exist.
    #[error("'{key}' references missing key '{target}'")]
    ForeignKeyNotFound { key: String, target: String },

    /// `$t(...)` references lead back to a key already being rendered.
    #[error("foreign key cycle: {}", chain.join(" -> "))]
    ForeignKeyCycle { chain: Vec<String> },

    /// A `$t(...)` reference is malformed or names a namespace.
    #[error("invalid foreign key in '{key}': {message}")]
    InvalidForeignKey { key: String, message: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute up to three close spellings of `name` among `available`.
///
/// Names of up to three characters allow a single edit, longer names two.
/// Exact matches are excluded; results are ordered by distance.
pub fn compute_suggestions(name: &str, available: &[String]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &String)> = available
        .iter()
        .filter_map(|candidate| {
            let distance = strsim::levenshtein(name, candidate);
            (distance > 0 && distance <= max_distance).then_some((distance, candidate))
        })
        .collect();
    suggestions.sort_by_key(|(distance, _)| *distance);
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, s)| s.clone())
        .collect()
}
