//! Parsers for the small languages embedded in catalog values.
//!
//! Translation strings may carry rich-text regions (`<b>...</b>`) that are
//! split into a [`TagNode`] tree and references to other entries
//! (`$t(key)`) found with [`find_foreign_key`]. Plural rules carry numeric
//! predicates (`3`, `2..=5`, `..0 | 10..`) that are parsed into
//! [`PluralPredicate`]s.

pub mod ast;
pub mod error;
mod foreign;
mod range;
mod tags;

pub use ast::*;
pub use error::ParseError;
pub use foreign::{ForeignKey, find_foreign_key};
pub use range::parse_predicates;
pub use tags::{find_unbalanced_tag, split_tags};
