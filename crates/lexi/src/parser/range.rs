//! Plural predicate parser using winnow.
//!
//! Parses the string form of plural rule conditions:
//! - Exact values: `0`, `-3`, `2.5`
//! - Ranges: `1..5`, `1..=5`, `..0`, `..=0`, `10..`, `..`
//! - The wildcard `_`
//! - Alternatives joined with `|`: `0 | 5`, `1..5 | 6..10`

use std::ops::Bound;

use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, opt, preceded, separated};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use super::ast::PluralPredicate;
use super::error::{ParseError, calculate_position};

/// Parse a predicate string into its alternatives.
///
/// # Example
///
/// ```
/// use lexi::parser::{PluralPredicate, parse_predicates};
/// use std::ops::Bound;
///
/// let preds = parse_predicates("0 | 2..=5").unwrap();
/// assert_eq!(
///     preds,
///     vec![
///         PluralPredicate::Exact(0.0),
///         PluralPredicate::Range { start: Some(2.0), end: Bound::Included(5.0) },
///     ]
/// );
/// ```
pub fn parse_predicates(input: &str) -> Result<Vec<PluralPredicate>, ParseError> {
    let mut remaining = input;
    match predicates(&mut remaining) {
        Ok(preds) => {
            if remaining.is_empty() {
                Ok(preds)
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            if remaining.trim().is_empty() {
                Err(ParseError::UnexpectedEof { line, column })
            } else {
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!("parse error: {e}"),
                })
            }
        }
    }
}

/// `alternative ( '|' alternative )*`
fn predicates(input: &mut &str) -> ModalResult<Vec<PluralPredicate>> {
    separated(1.., delimited(ws, alternative, ws), '|').parse_next(input)
}

fn alternative(input: &mut &str) -> ModalResult<PluralPredicate> {
    alt(('_'.value(PluralPredicate::Any), range_or_exact)).parse_next(input)
}

/// A number, optionally followed by a range tail, or a range with no start.
fn range_or_exact(input: &mut &str) -> ModalResult<PluralPredicate> {
    let start = opt(number).parse_next(input)?;
    let _ = ws(input)?;
    let end = opt(range_tail).parse_next(input)?;

    match (start, end) {
        (Some(value), None) => Ok(PluralPredicate::Exact(value)),
        (start, Some(end)) => Ok(PluralPredicate::Range { start, end }),
        (None, None) => Err(winnow::error::ErrMode::Backtrack(
            winnow::error::ContextError::new(),
        )),
    }
}

/// `..end`, `..=end` or a bare `..`
fn range_tail(input: &mut &str) -> ModalResult<Bound<f64>> {
    preceded(
        "..",
        alt((
            preceded(('=', ws), number).map(Bound::Included),
            preceded(ws, opt(number)).map(|end| end.map_or(Bound::Unbounded, Bound::Excluded)),
        )),
    )
    .parse_next(input)
}

/// A signed decimal number.
fn number(input: &mut &str) -> ModalResult<f64> {
    (opt(one_of(['-', '+'])), digit1, opt(('.', digit1)))
        .take()
        .try_map(str::parse::<f64>)
        .parse_next(input)
}

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}
