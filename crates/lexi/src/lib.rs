pub mod catalog;
mod config;
mod i18n;
pub mod interpreter;
pub mod parser;
mod scope;
pub mod types;

pub use catalog::{Catalog, Entry, PluralRule, PluralSet, ValueTree};
pub use config::I18nConfig;
pub use i18n::{I18n, LocaleChangeCallback, LocaleChangeFuture};
pub use interpreter::{
    AcceptLanguage, Args, ComponentRegistry, EvalError, LoadError, compute_suggestions,
    match_locale,
};
pub use scope::Scope;
pub use types::Value;

/// Creates a `BTreeMap<String, Value>` of interpolation variables.
///
/// Values are converted via `Into<Value>`, so integers, floats and strings
/// can be passed directly.
///
/// # Example
///
/// ```
/// use lexi::{vars, Value};
///
/// let v = vars! { "count" => 3, "name" => "Alice" };
/// assert_eq!(v.len(), 2);
/// assert_eq!(v["count"].as_number(), Some(3));
/// assert_eq!(v["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! vars {
    {} => {
        ::std::collections::BTreeMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::BTreeMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
