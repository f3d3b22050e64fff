//! `$t(key)` references to other catalog entries.
//!
//! A template may embed another entry of the same locale with `$t(key)`, or
//! pass it variables with `$t(key, {"name": "value", "count": 3})`. The
//! argument object is JSON; its string, number and boolean members become
//! variables of the referenced entry.

use std::collections::BTreeMap;

use serde_json::Value as JsonValue;
use winnow::combinator::{alt, delimited};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::take_while;

use super::error::{ParseError, calculate_position};
use crate::types::Value;

/// A `$t(...)` reference located in a template.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey<'a> {
    /// Byte offset of `$t(`.
    pub start: usize,
    /// Byte offset just past the closing `)`.
    pub end: usize,
    /// The referenced key as written, e.g. `home.title` or `common:ok`.
    pub key: &'a str,
    /// Variables passed to the referenced entry.
    pub args: BTreeMap<String, Value>,
}

impl ForeignKey<'_> {
    /// The referenced key as a dotted path. A `namespace:` prefix names the
    /// namespace's top-level key.
    pub fn path(&self) -> String {
        self.key.replacen(':', ".", 1)
    }
}

/// Find the first foreign key reference in `input`.
///
/// Returns `None` when there is no `$t(`, and an error when there is one but
/// it is malformed.
///
/// # Example
///
/// ```
/// use lexi::parser::find_foreign_key;
/// use lexi::Value;
///
/// let found = find_foreign_key(r#"see $t(help.link, {"n": 2}) now"#).unwrap().unwrap();
/// assert_eq!(found.key, "help.link");
/// assert_eq!(found.args["n"], Value::Number(2));
/// assert_eq!((found.start, found.end), (4, 27));
/// ```
pub fn find_foreign_key(input: &str) -> Option<Result<ForeignKey<'_>, ParseError>> {
    let start = input.find("$t(")?;
    let mut remaining = &input[start..];
    let Ok((key, raw_args)) = reference(&mut remaining) else {
        return Some(Err(syntax(
            input,
            remaining,
            "malformed foreign key, expected `$t(key)` or `$t(key, {...})`".to_string(),
        )));
    };
    let args = match raw_args.map(parse_args).transpose() {
        Ok(args) => args.unwrap_or_default(),
        Err(message) => return Some(Err(syntax(input, &input[start..], message))),
    };
    Some(Ok(ForeignKey {
        start,
        end: input.len() - remaining.len(),
        key,
        args,
    }))
}

fn syntax(original: &str, remaining: &str, message: String) -> ParseError {
    let (line, column) = calculate_position(original, remaining);
    ParseError::Syntax {
        line,
        column,
        message,
    }
}

/// `$t( key )` or `$t( key, {json} )`
fn reference<'i>(input: &mut &'i str) -> ModalResult<(&'i str, Option<&'i str>)> {
    let _ = ("$t(", ws).parse_next(input)?;
    let key = key_path.parse_next(input)?;
    let _ = ws(input)?;
    let args = alt((
        ')'.value(None),
        delimited((',', ws), json_object, (ws, ')')).map(Some),
    ))
    .parse_next(input)?;
    Ok((key, args))
}

fn key_path<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| {
        !c.is_whitespace() && !matches!(c, ',' | '(' | ')' | '{' | '}')
    })
    .parse_next(input)
}

/// A balanced `{...}`, skipping braces inside JSON strings.
fn json_object<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    let source = *input;
    if !source.starts_with('{') {
        return Err(ErrMode::Backtrack(ContextError::new()));
    }
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (index, c) in source.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        } else if c == '{' {
            depth += 1;
        } else if c == '}' {
            depth -= 1;
            if depth == 0 {
                let end = index + c.len_utf8();
                *input = &source[end..];
                return Ok(&source[..end]);
            }
        }
    }
    Err(ErrMode::Backtrack(ContextError::new()))
}

fn parse_args(raw: &str) -> Result<BTreeMap<String, Value>, String> {
    let members: BTreeMap<String, JsonValue> =
        serde_json::from_str(raw).map_err(|e| format!("invalid foreign key arguments: {e}"))?;
    members
        .into_iter()
        .map(|(name, member)| {
            let value = match member {
                JsonValue::String(s) => Value::String(s),
                JsonValue::Bool(b) => Value::String(b.to_string()),
                JsonValue::Number(n) => match n.as_i64() {
                    Some(i) => Value::Number(i),
                    None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
                },
                JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => {
                    return Err(format!(
                        "foreign key argument '{name}' must be a string, a number or a boolean"
                    ));
                }
            };
            Ok((name.trim().to_string(), value))
        })
        .collect()
}

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., char::is_whitespace)
        .void()
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_object_honors_strings() {
        let mut input = r#"{"a": "}{"} )"#;
        assert_eq!(json_object(&mut input).unwrap(), r#"{"a": "}{"}"#);
        assert_eq!(input, " )");
    }

    #[test]
    fn namespace_prefix_becomes_a_segment() {
        let found = find_foreign_key("$t(common:ok)").unwrap().unwrap();
        assert_eq!(found.path(), "common.ok");
    }

    #[test]
    fn unclosed_reference_is_an_error() {
        assert!(matches!(
            find_foreign_key("x $t(a"),
            Some(Err(ParseError::Syntax { .. }))
        ));
        assert!(matches!(
            find_foreign_key(r#"$t(a, {"n": [1]})"#),
            Some(Err(ParseError::Syntax { column: 1, .. }))
        ));
    }
}
