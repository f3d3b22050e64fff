//! Resolution engine for catalog entries.
//!
//! This module turns a resolved catalog [`Entry`](crate::catalog::Entry) into
//! a rendered string: plural selection, `$t(key)` expansion, `{{ name }}`
//! interpolation, tag splitting and component rendering. It also hosts locale negotiation.

mod accept_language;
mod args;
mod components;
mod error;
mod evaluator;
mod interpolate;
mod locale_match;
mod plural;
mod render;

pub use accept_language::AcceptLanguage;
pub use args::Args;
pub use components::{ComponentFn, ComponentRegistry};
pub use error::{EvalError, LoadError, compute_suggestions};
pub use evaluator::render_entry;
pub use interpolate::interpolate;
pub use locale_match::{find_locale, match_locale};
pub use plural::select_plural;
pub use render::render_nodes;
