//! Key-prefixed views over an [`I18n`].

use crate::i18n::I18n;
use crate::interpreter::{Args, EvalError};

/// A borrowed view of an [`I18n`] that resolves keys under a fixed prefix.
///
/// # Example
///
/// ```
/// use lexi::{Args, I18n, I18nConfig};
///
/// let config = I18nConfig::from_json_str(r#"{
///     "default_locale": "en",
///     "locales": { "en": { "home": { "header": { "title": "Welcome" } } } }
/// }"#).unwrap();
/// let i18n = I18n::new(config, "en");
///
/// let header = i18n.scope("home").scope("header");
/// assert_eq!(header.t("title", &Args::default()).unwrap(), "Welcome");
/// assert_eq!(header.t("nope", &Args::default()).unwrap(), "home.header.nope");
/// ```
#[derive(Debug, Clone)]
pub struct Scope<'a> {
    i18n: &'a I18n,
    prefix: String,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(i18n: &'a I18n, prefix: String) -> Self {
        Self { i18n, prefix }
    }

    /// The dotted prefix of this scope.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Narrow the scope further.
    pub fn scope(&self, prefix: &str) -> Scope<'a> {
        Scope::new(self.i18n, self.key(prefix))
    }

    /// Scoped [`I18n::t`]. A missing key renders as the full dotted key.
    pub fn t(&self, key: &str, args: &Args) -> Result<String, EvalError> {
        self.i18n.t(&self.key(key), args)
    }

    /// Scoped [`I18n::td`].
    pub fn td(&self, locale: &str, key: &str, args: &Args) -> Result<String, EvalError> {
        self.i18n.td(locale, &self.key(key), args)
    }

    /// Scoped [`I18n::try_t`].
    pub fn try_t(&self, key: &str, args: &Args) -> Result<String, EvalError> {
        self.i18n.try_t(&self.key(key), args)
    }

    fn key(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.prefix)
        }
    }
}
