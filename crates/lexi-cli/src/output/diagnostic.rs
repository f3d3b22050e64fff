//! Miette diagnostic wrapper for catalog load errors.

use std::path::Path;

use lexi::LoadError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing into a catalog file.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(lexi::catalog))]
pub struct LexiDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl LexiDiagnostic {
    /// Create a diagnostic for errors that can be located in `content`.
    ///
    /// JSON syntax errors carry a position. Bad plural predicates are located
    /// by searching for the quoted predicate. Other errors return `None`.
    pub fn from_load_error(path: &Path, content: &str, err: &LoadError) -> Option<Self> {
        let (offset, len, message, help) = match err {
            LoadError::Json {
                line,
                column,
                message,
                ..
            } => (
                line_column_offset(content, *line, *column),
                1,
                format!("invalid catalog JSON: {message}"),
                None,
            ),
            LoadError::InvalidPredicate {
                locale,
                key,
                predicate,
                source,
            } => {
                let quoted = format!("\"{predicate}\"");
                let offset = content.find(&quoted)?;
                (
                    offset,
                    quoted.len(),
                    format!("invalid plural predicate for '{key}' in locale '{locale}': {source}"),
                    Some("predicates look like `3`, `2..=5`, `..0`, `10..` or `_`, joined with `|`".to_string()),
                )
            }
            _ => return None,
        };

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());
        let len = len.min(content.len() - offset);

        Some(LexiDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, len).into(),
            message,
            help,
        })
    }
}

/// Convert a 1-based line and column to a byte offset.
fn line_column_offset(content: &str, line: usize, column: usize) -> usize {
    content
        .lines()
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum::<usize>()
        + column.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_counts_previous_lines() {
        assert_eq!(line_column_offset("ab\ncd", 2, 2), 4);
        assert_eq!(line_column_offset("ab", 1, 1), 0);
    }

    #[test]
    fn json_error_is_located() {
        let content = "{\n  oops\n}";
        let err = LoadError::Json {
            path: "cat.json".into(),
            line: 2,
            column: 3,
            message: "key must be a string".to_string(),
        };
        let diagnostic = LexiDiagnostic::from_load_error(Path::new("cat.json"), content, &err).unwrap();
        assert_eq!(diagnostic.span.offset(), 4);
    }

    #[test]
    fn unlocatable_errors_are_skipped() {
        let err = LoadError::ConfigShape { path: "cat.json".into() };
        assert!(LexiDiagnostic::from_load_error(Path::new("cat.json"), "{}", &err).is_none());
    }
}
