//! `Accept-Language` header negotiation.

use std::cmp::Ordering;

use super::locale_match::find_locale;

/// Language tags from an `Accept-Language` header, most preferred first.
///
/// # Example
///
/// ```
/// use lexi::interpreter::AcceptLanguage;
///
/// let accepted = AcceptLanguage::parse("fr-CH, fr;q=0.9, en;q=0.8, *;q=0.5");
/// assert_eq!(accepted.tags(), ["fr-CH", "fr", "en", "*"]);
/// assert_eq!(accepted.negotiate(&["en", "fr"], "en"), "fr");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcceptLanguage {
    preferred: Option<String>,
    tags: Vec<String>,
}

impl AcceptLanguage {
    /// Parse a header value.
    ///
    /// Entries are separated by `,` and look like `tag` or `tag;q=weight`.
    /// Missing or unparsable weights count as 1.0; entries keep header order
    /// among equal weights. Entries with weight 0 and entries whose tag is
    /// not a language range (`*` or letters, digits and `-`) are dropped.
    pub fn parse(header: &str) -> Self {
        let mut weighted: Vec<(f32, &str)> = header
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.split(';');
                let tag = parts.next()?.trim();
                if !is_language_range(tag) {
                    return None;
                }
                let quality = parts
                    .filter_map(|param| param.trim().strip_prefix("q="))
                    .map(|q| q.trim().parse::<f32>().unwrap_or(1.0))
                    .next()
                    .unwrap_or(1.0);
                (quality > 0.0).then_some((quality, tag))
            })
            .collect();

        weighted.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        Self {
            preferred: None,
            tags: weighted.into_iter().map(|(_, tag)| tag.to_string()).collect(),
        }
    }

    /// Put a tag ahead of everything in the header, such as a locale the
    /// user picked earlier.
    #[must_use]
    pub fn with_preferred(mut self, preferred: impl Into<String>) -> Self {
        self.preferred = Some(preferred.into());
        self
    }

    /// Tags in preference order, excluding the preferred tag.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Pick the first tag that resolves to a supported locale, or `default`.
    pub fn negotiate<'a>(&self, supported: &[&'a str], default: &'a str) -> &'a str {
        self.preferred
            .iter()
            .chain(&self.tags)
            .find_map(|tag| find_locale(tag, supported))
            .unwrap_or(default)
    }
}

fn is_language_range(tag: &str) -> bool {
    tag == "*"
        || (!tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'))
}
