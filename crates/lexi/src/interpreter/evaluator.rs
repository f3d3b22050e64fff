//! The rendering pipeline for a resolved catalog entry.
//!
//! Plural entries first select a template by count, with `count` added to
//! the variables. The template's `$t(key)` references are then expanded
//! and the text between them interpolated. Finally the whole string is split
//! into tags and rendered through the caller's components.

use std::borrow::Cow;
use std::collections::BTreeMap;

use tracing::trace;

use super::args::Args;
use super::interpolate::interpolate;
use super::plural::select_plural;
use super::render::render_nodes;
use crate::catalog::{Entry, ValueTree};
use crate::interpreter::EvalError;
use crate::parser::{ForeignKey, find_foreign_key, split_tags};
use crate::types::Value;

/// Render a catalog entry found under `key` in `tree`.
///
/// `tree` is the locale's root, used to resolve `$t(...)` references.
/// Returns `Ok(None)` when the entry is a sub-tree, which has nothing to
/// render.
pub fn render_entry(
    tree: &ValueTree,
    key: &str,
    entry: &Entry,
    args: &Args,
) -> Result<Option<String>, EvalError> {
    let mut chain = vec![key.to_string()];
    let Some(text) = resolve_text(tree, key, entry, args.vars(), args.count(), &mut chain)?
    else {
        return Ok(None);
    };
    Ok(Some(render_nodes(&split_tags(&text), args.components())))
}

/// Resolve an entry to interpolated text, before tag rendering.
///
/// `chain` holds the keys being expanded, outermost first.
fn resolve_text(
    tree: &ValueTree,
    key: &str,
    entry: &Entry,
    vars: &BTreeMap<String, Value>,
    count: Option<&Value>,
    chain: &mut Vec<String>,
) -> Result<Option<String>, EvalError> {
    let text = match entry {
        Entry::Text(template) => expand(tree, key, template, vars, count, chain)?,
        Entry::Plural(set) => {
            let numeric = count
                .map(|value| {
                    value.as_float().ok_or_else(|| EvalError::InvalidCount {
                        key: key.to_string(),
                        value: value.to_string(),
                    })
                })
                .transpose()?;
            let template = select_plural(key, set, numeric)?;
            let vars = match count {
                Some(count) => {
                    let mut vars = vars.clone();
                    vars.insert("count".to_string(), count.clone());
                    Cow::Owned(vars)
                }
                None => Cow::Borrowed(vars),
            };
            expand(tree, key, template, &vars, count, chain)?
        }
        Entry::Tree(_) => return Ok(None),
    };
    Ok(Some(text))
}

/// Expand `$t(...)` references in `template` and interpolate the rest.
fn expand(
    tree: &ValueTree,
    key: &str,
    template: &str,
    vars: &BTreeMap<String, Value>,
    count: Option<&Value>,
    chain: &mut Vec<String>,
) -> Result<String, EvalError> {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(found) = find_foreign_key(rest) {
        let reference = found.map_err(|e| EvalError::InvalidForeignKey {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        output.push_str(&interpolate(&rest[..reference.start], vars));
        output.push_str(&resolve_reference(tree, key, &reference, vars, count, chain)?);
        rest = &rest[reference.end..];
    }
    output.push_str(&interpolate(rest, vars));
    Ok(output)
}

/// Render the entry a reference points at.
///
/// The referenced entry sees the caller's variables overlaid with the
/// reference's arguments; string arguments are interpolated with the
/// caller's variables first. A `count` argument replaces the caller's count.
fn resolve_reference(
    tree: &ValueTree,
    key: &str,
    reference: &ForeignKey<'_>,
    vars: &BTreeMap<String, Value>,
    count: Option<&Value>,
    chain: &mut Vec<String>,
) -> Result<String, EvalError> {
    let target = reference.path();
    if chain.contains(&target) {
        let mut cycle = chain.clone();
        cycle.push(target);
        return Err(EvalError::ForeignKeyCycle { chain: cycle });
    }
    let entry = tree
        .resolve(&target)
        .ok_or_else(|| EvalError::ForeignKeyNotFound {
            key: key.to_string(),
            target: target.clone(),
        })?;
    trace!(key, referenced = %target, "expanding foreign key");

    let mut merged = vars.clone();
    for (name, value) in &reference.args {
        let value = match value {
            Value::String(s) => Value::String(interpolate(s, vars)),
            other => other.clone(),
        };
        merged.insert(name.clone(), value);
    }
    let count = reference.args.get("count").or(count);

    chain.push(target.clone());
    let resolved = resolve_text(tree, &target, entry, &merged, count, chain);
    chain.pop();
    resolved?.ok_or_else(|| EvalError::InvalidForeignKey {
        key: key.to_string(),
        message: format!("'{target}' is a namespace, not a translation"),
    })
}
