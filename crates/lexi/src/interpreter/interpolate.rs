//! `{{ name }}` placeholder substitution.

use std::collections::BTreeMap;

use winnow::prelude::*;
use winnow::token::take_while;

use crate::types::Value;

/// Replace `{{ name }}` placeholders with values from `vars`.
///
/// Every supplied key is recognized between `{{` and `}}`, with optional
/// whitespace on either side, so keys may contain spaces or punctuation.
/// Keys match case-insensitively; an exact match is preferred. The template
/// is scanned once, so substituted values are never scanned again and the
/// order of `vars` cannot matter. Placeholders without a matching variable
/// are left as written.
///
/// # Example
///
/// ```
/// use lexi::{interpreter::interpolate, vars};
///
/// let vars = vars! { "count" => 3, "first name" => "Al" };
/// assert_eq!(interpolate("Count: {{ count }}", &vars), "Count: 3");
/// assert_eq!(interpolate("{{COUNT}} / {{ total }}", &vars), "3 / {{ total }}");
/// assert_eq!(interpolate("Hi {{first name}}", &vars), "Hi Al");
/// ```
pub fn interpolate(template: &str, vars: &BTreeMap<String, Value>) -> String {
    if vars.is_empty() {
        return template.to_string();
    }

    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find("{{") {
        output.push_str(&rest[..pos]);
        match placeholder(&rest[pos..], vars) {
            Some((value, consumed)) => {
                output.push_str(&value.to_string());
                rest = &rest[pos + consumed..];
            }
            None => {
                // Step past one brace so `{{{ name }}}` still finds the inner placeholder.
                output.push('{');
                rest = &rest[pos + 1..];
            }
        }
    }
    output.push_str(rest);
    output
}

/// Match `{{ key }}` at the start of `input` for some key of `vars`.
///
/// Returns the value and the number of bytes consumed.
fn placeholder<'a>(input: &str, vars: &'a BTreeMap<String, Value>) -> Option<(&'a Value, usize)> {
    let mut body = input;
    ("{{", ws).parse_next(&mut body).ok()?;

    let candidates = || vars.iter().filter(|(key, _)| !key.is_empty());
    let (value, remaining) = candidates()
        .find_map(|(key, value)| {
            closing_after(body, key, |found| found == key.as_str()).map(|rest| (value, rest))
        })
        .or_else(|| {
            candidates().find_map(|(key, value)| {
                let lowered = key.to_lowercase();
                closing_after(body, key, |found| found.to_lowercase() == lowered)
                    .map(|rest| (value, rest))
            })
        })?;
    Some((value, input.len() - remaining))
}

/// If `body` starts with `key` (as judged by `same`) followed by optional
/// whitespace and `}}`, return the length left after the braces.
fn closing_after(body: &str, key: &str, same: impl Fn(&str) -> bool) -> Option<usize> {
    let found = body.get(..key.len())?;
    if !same(found) {
        return None;
    }
    let mut tail = &body[key.len()..];
    (ws, "}}").parse_next(&mut tail).ok()?;
    Some(tail.len())
}

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., char::is_whitespace)
        .void()
        .parse_next(input)
}
