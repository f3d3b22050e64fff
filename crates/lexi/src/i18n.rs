//! The translation facade.
//!
//! [`I18n`] owns the catalog and the current locale, and composes the
//! resolution pipeline: key lookup, plural selection, `$t(...)` expansion,
//! interpolation and component rendering.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::future::Future;
use std::pin::Pin;

use tracing::{debug, warn};

use crate::catalog::{Catalog, MissingKey, ValueTree};
use crate::config::I18nConfig;
use crate::interpreter::{
    AcceptLanguage, Args, EvalError, compute_suggestions, match_locale, render_entry,
};
use crate::scope::Scope;

/// Future returned by a locale-change callback.
pub type LocaleChangeFuture = Pin<Box<dyn Future<Output = ()>>>;

/// Callback invoked with the new locale after a tracked locale change.
pub type LocaleChangeCallback = Box<dyn FnMut(String) -> LocaleChangeFuture>;

/// Translation engine state: catalog, default locale and current locale.
///
/// Lookups are pure. The current locale changes only through
/// [`I18n::set_locale`] and [`I18n::set_locale_untracked`].
///
/// # Example
///
/// ```
/// use lexi::{Args, I18n, I18nConfig, vars};
///
/// let config = I18nConfig::from_json_str(r#"{
///     "default_locale": "en",
///     "locales": {
///         "en": { "greet": "Hi {{name}}" },
///         "fr": { "greet": "Salut {{name}}" }
///     }
/// }"#).unwrap();
/// let mut i18n = I18n::new(config, "fr-CA");
///
/// let args = Args::with_vars(vars! { "name" => "Al" });
/// assert_eq!(i18n.t("greet", &args).unwrap(), "Salut Al");
/// assert_eq!(i18n.td("en", "greet", &args).unwrap(), "Hi Al");
///
/// i18n.set_locale_untracked("en").unwrap();
/// assert_eq!(i18n.t("greet", &args).unwrap(), "Hi Al");
/// ```
pub struct I18n {
    locale: String,
    default_locale: String,
    catalog: Catalog,
    on_locale_change: Option<LocaleChangeCallback>,
}

impl I18n {
    /// Create an engine whose locale is `requested` matched against the
    /// catalog (see [`match_locale`]).
    pub fn new(config: I18nConfig, requested: &str) -> Self {
        let (default_locale, catalog) = config.into_parts();
        let locale = {
            let supported: Vec<&str> = catalog.locales().collect();
            match_locale(requested, &supported, &default_locale).to_string()
        };
        Self {
            locale,
            default_locale,
            catalog,
            on_locale_change: None,
        }
    }

    /// Create an engine whose locale is negotiated from an
    /// `Accept-Language` header.
    pub fn from_accept_language(config: I18nConfig, accepted: &AcceptLanguage) -> Self {
        let (default_locale, catalog) = config.into_parts();
        let locale = {
            let supported: Vec<&str> = catalog.locales().collect();
            accepted.negotiate(&supported, &default_locale).to_string()
        };
        debug!(locale, "negotiated locale from Accept-Language");
        Self {
            locale,
            default_locale,
            catalog,
            on_locale_change: None,
        }
    }

    // =========================================================================
    // Locale State
    // =========================================================================

    /// The current locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The default locale.
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Supported locales, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.catalog.locales()
    }

    /// The catalog (read-only).
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve an arbitrary tag to a supported locale, as done on
    /// construction.
    pub fn match_locale<'a>(&'a self, requested: &str) -> &'a str {
        let supported: Vec<&str> = self.catalog.locales().collect();
        match_locale(requested, &supported, &self.default_locale)
    }

    /// Register the callback run after every [`I18n::set_locale`].
    ///
    /// Registering again replaces the previous callback.
    pub fn on_locale_change(&mut self, callback: impl FnMut(String) -> LocaleChangeFuture + 'static) {
        self.on_locale_change = Some(Box::new(callback));
    }

    /// Change the current locale, then run the locale-change callback and
    /// wait for it to finish.
    ///
    /// Unsupported locales are rejected and leave the state unchanged.
    pub async fn set_locale(&mut self, locale: &str) -> Result<(), EvalError> {
        self.set_locale_untracked(locale)?;
        if let Some(callback) = self.on_locale_change.as_mut() {
            callback(self.locale.clone()).await;
        }
        Ok(())
    }

    /// Change the current locale without running the locale-change callback.
    pub fn set_locale_untracked(&mut self, locale: &str) -> Result<(), EvalError> {
        if !self.catalog.contains_locale(locale) {
            return Err(self.unknown_locale(locale));
        }
        debug!(from = %self.locale, to = locale, "locale changed");
        self.locale = locale.to_string();
        Ok(())
    }

    /// Build an absolute path for the current locale.
    ///
    /// The default locale has no prefix; other locales are prefixed with
    /// `/{locale}`. Slashes around `path` are ignored.
    ///
    /// ```
    /// # use lexi::{I18n, I18nConfig};
    /// # let config = I18nConfig::from_json_str(
    /// #     r#"{"default_locale": "en", "locales": {"en": {}, "fr": {}}}"#,
    /// # ).unwrap();
    /// let mut i18n = I18n::new(config, "en");
    /// assert_eq!(i18n.url(None), "/");
    /// assert_eq!(i18n.url(Some("/about")), "/about");
    ///
    /// i18n.set_locale_untracked("fr").unwrap();
    /// assert_eq!(i18n.url(Some("about")), "/fr/about");
    /// ```
    pub fn url(&self, path: Option<&str>) -> String {
        let path = path.unwrap_or_default().trim_matches('/');
        let prefix = (self.locale != self.default_locale).then_some(self.locale.as_str());
        let segments: Vec<&str> = prefix
            .into_iter()
            .chain((!path.is_empty()).then_some(path))
            .collect();
        format!("/{}", segments.join("/"))
    }

    // =========================================================================
    // Translation
    // =========================================================================

    /// Translate `key` in the current locale.
    ///
    /// A missing key renders as the key itself. Errors are reserved for
    /// malformed catalogs: plural sets that cannot cover the count, and
    /// `$t(...)` references that are broken or cyclic.
    pub fn t(&self, key: &str, args: &Args) -> Result<String, EvalError> {
        self.td(&self.locale, key, args)
    }

    /// Translate `key` in an explicit locale, ignoring the current one.
    pub fn td(&self, locale: &str, key: &str, args: &Args) -> Result<String, EvalError> {
        let found = self
            .catalog
            .tree(locale)
            .and_then(|tree| Some((tree, tree.resolve(key)?)));
        let Some((tree, entry)) = found else {
            warn!(locale, key, "missing translation");
            return Ok(key.to_string());
        };
        match render_entry(tree, key, entry, args)? {
            Some(rendered) => Ok(rendered),
            None => {
                warn!(locale, key, "key names a namespace, not a translation");
                Ok(key.to_string())
            }
        }
    }

    /// Translate `key` in the current locale; a missing key is an error.
    pub fn try_t(&self, key: &str, args: &Args) -> Result<String, EvalError> {
        self.try_td(&self.locale, key, args)
    }

    /// Translate `key` in an explicit locale; a missing key or unknown
    /// locale is an error.
    pub fn try_td(&self, locale: &str, key: &str, args: &Args) -> Result<String, EvalError> {
        let tree = self
            .catalog
            .tree(locale)
            .ok_or_else(|| self.unknown_locale(locale))?;
        let entry = tree
            .resolve_partial(key)
            .map_err(|missing| key_not_found(locale, key, missing))?;
        render_entry(tree, key, entry, args)?.ok_or_else(|| EvalError::KeyIsNamespace {
            locale: locale.to_string(),
            key: key.to_string(),
        })
    }

    /// A view that prefixes every key with `prefix` and a dot.
    pub fn scope(&self, prefix: impl Into<String>) -> Scope<'_> {
        Scope::new(self, prefix.into())
    }

    fn unknown_locale(&self, locale: &str) -> EvalError {
        EvalError::UnknownLocale {
            locale: locale.to_string(),
            available: self.catalog.locales().map(str::to_string).collect(),
        }
    }
}

impl Debug for I18n {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("I18n")
            .field("locale", &self.locale)
            .field("default_locale", &self.default_locale)
            .field("catalog", &self.catalog)
            .field("on_locale_change", &self.on_locale_change.is_some())
            .finish()
    }
}

/// Build a [`EvalError::KeyNotFound`] with suggestions from the tree level
/// where the lookup stopped.
fn key_not_found(locale: &str, key: &str, missing: MissingKey<'_>) -> EvalError {
    let segments: Vec<&str> = key.split('.').collect();
    let suggestions = match missing.parent {
        Some(parent) => {
            let prefix = segments[..missing.segment].join(".");
            let siblings = sibling_keys(parent, &prefix);
            let wanted = segments[..=missing.segment].join(".");
            compute_suggestions(&wanted, &siblings)
        }
        None => Vec::new(),
    };
    EvalError::KeyNotFound {
        locale: locale.to_string(),
        key: key.to_string(),
        suggestions,
    }
}

fn sibling_keys(tree: &ValueTree, prefix: &str) -> Vec<String> {
    tree.keys()
        .map(|key| {
            if prefix.is_empty() {
                key.to_string()
            } else {
                format!("{prefix}.{key}")
            }
        })
        .collect()
}
