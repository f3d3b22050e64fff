//! Engine configuration: a default locale plus the catalog.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use bon::bon;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::catalog::{Catalog, catalog_from_json, catalog_from_namespaces_json};
use crate::interpreter::LoadError;

/// A validated catalog and default locale.
///
/// The default locale is always one of the catalog's locales.
///
/// # Example
///
/// ```
/// use lexi::I18nConfig;
///
/// let config = I18nConfig::from_json_str(r#"{
///     "default_locale": "en",
///     "locales": {
///         "en": { "greet": "Hi {{ name }}" },
///         "fr": { "greet": "Salut {{ name }}" }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.default_locale(), "en");
/// assert_eq!(config.catalog().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct I18nConfig {
    default_locale: String,
    catalog: Catalog,
}

/// On-disk shape: exactly one of `locales` or `namespaces`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    default_locale: String,
    #[serde(default)]
    locales: Option<BTreeMap<String, JsonValue>>,
    #[serde(default)]
    namespaces: Option<BTreeMap<String, BTreeMap<String, JsonValue>>>,
}

#[bon]
impl I18nConfig {
    /// Validate a catalog against its default locale.
    #[builder(on(String, into))]
    pub fn new(default_locale: String, catalog: Catalog) -> Result<Self, LoadError> {
        if !catalog.contains_locale(&default_locale) {
            return Err(LoadError::UnknownDefaultLocale {
                locale: default_locale,
                available: catalog.locales().map(str::to_string).collect(),
            });
        }
        Ok(Self {
            default_locale,
            catalog,
        })
    }
}

impl I18nConfig {
    /// Load a configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_source(&content, path)
    }

    /// Load a configuration from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        Self::from_json_source(content, Path::new("<inline>"))
    }

    /// Load a configuration from JSON text read from `path`. The path only
    /// labels errors.
    pub fn from_json_source(content: &str, path: &Path) -> Result<Self, LoadError> {
        let raw: RawConfig = serde_json::from_str(content).map_err(|e| LoadError::Json {
            path: path.to_path_buf(),
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })?;

        let catalog = match (raw.locales, raw.namespaces) {
            (Some(locales), None) => catalog_from_json(locales)?,
            (None, Some(namespaces)) => catalog_from_namespaces_json(namespaces)?,
            _ => {
                return Err(LoadError::ConfigShape {
                    path: PathBuf::from(path),
                });
            }
        };
        debug!(
            path = %path.display(),
            locales = catalog.len(),
            default_locale = %raw.default_locale,
            "loaded catalog"
        );

        Self::builder()
            .default_locale(raw.default_locale)
            .catalog(catalog)
            .build()
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Split into default locale and catalog.
    pub fn into_parts(self) -> (String, Catalog) {
        (self.default_locale, self.catalog)
    }
}
