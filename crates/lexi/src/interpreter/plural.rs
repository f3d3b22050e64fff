//! Plural alternative selection by numeric count.

use tracing::trace;

use crate::catalog::{PluralRule, PluralSet};
use crate::interpreter::EvalError;

/// Select the template of a plural set for `count`.
///
/// Without a count, the fallback rule (no predicates) is used. With a count,
/// rules are tried in declaration order and the first whose predicates accept
/// it wins; the fallback rule applies only when no other rule does. A
/// missing fallback is an error, since the catalog cannot cover the request.
///
/// `key` only labels errors.
pub fn select_plural<'a>(key: &str, set: &'a PluralSet, count: Option<f64>) -> Result<&'a str, EvalError> {
    let Some(count) = count else {
        return set
            .fallback()
            .map(PluralRule::template)
            .ok_or_else(|| EvalError::NoPluralDefault {
                key: key.to_string(),
            });
    };

    let rule = set
        .first_match(count)
        .or_else(|| set.fallback())
        .ok_or_else(|| EvalError::NoPluralMatch {
            key: key.to_string(),
            count,
        })?;
    trace!(key, count, template = rule.template(), "selected plural rule");
    Ok(rule.template())
}
