//! BCP-47 style prefix fallback for locale tags.

use tracing::debug;

/// Find the supported locale closest to `requested`.
///
/// The full tag is tried first, then the tag with its last `-` segment
/// dropped, and so on until nothing is left. `fr-FR` is tried as `fr-FR`,
/// then `fr`.
///
/// # Example
///
/// ```
/// use lexi::interpreter::find_locale;
///
/// let supported = ["en", "fr"];
/// assert_eq!(find_locale("fr-FR", &supported), Some("fr"));
/// assert_eq!(find_locale("de-DE", &supported), None);
/// ```
pub fn find_locale<'a>(requested: &str, supported: &[&'a str]) -> Option<&'a str> {
    let mut candidate = requested;
    loop {
        if let Some(found) = supported.iter().copied().find(|locale| *locale == candidate) {
            return Some(found);
        }
        let (head, _) = candidate.rsplit_once('-')?;
        candidate = head;
    }
}

/// Resolve `requested` to a supported locale, or `default` if nothing matches.
///
/// Never fails: an unmatched tag silently selects the default locale.
pub fn match_locale<'a>(requested: &str, supported: &[&'a str], default: &'a str) -> &'a str {
    match find_locale(requested, supported) {
        Some(found) => {
            debug!(requested, matched = found, "matched locale");
            found
        }
        None => {
            debug!(requested, default, "no supported locale matches, using default");
            default
        }
    }
}
