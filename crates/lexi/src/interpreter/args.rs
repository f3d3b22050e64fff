//! Per-call translation arguments.

use std::collections::BTreeMap;

use bon::Builder;

use super::components::ComponentRegistry;
use crate::types::Value;

/// Variables, components and plural count for one translation call.
///
/// # Example
///
/// ```
/// use lexi::{Args, ComponentRegistry, vars};
///
/// let args = Args::builder()
///     .vars(vars! { "name" => "Al" })
///     .components(ComponentRegistry::new().with_element("b", "strong"))
///     .count(3)
///     .build();
///
/// assert_eq!(args.count().and_then(|c| c.as_number()), Some(3));
/// ```
#[derive(Debug, Default, Builder)]
pub struct Args {
    /// Values for `{{ name }}` placeholders.
    #[builder(default)]
    vars: BTreeMap<String, Value>,

    /// Renderers for `<tag>` regions.
    #[builder(default)]
    components: ComponentRegistry,

    /// Count used to select among plural alternatives. Also available to the
    /// selected template as `{{ count }}`.
    #[builder(into)]
    count: Option<Value>,
}

impl Args {
    /// Arguments with only variables.
    pub fn with_vars(vars: BTreeMap<String, Value>) -> Self {
        Self {
            vars,
            ..Self::default()
        }
    }

    /// Arguments with only a plural count.
    pub fn with_count(count: impl Into<Value>) -> Self {
        Self {
            count: Some(count.into()),
            ..Self::default()
        }
    }

    pub fn vars(&self) -> &BTreeMap<String, Value> {
        &self.vars
    }

    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    pub fn count(&self) -> Option<&Value> {
        self.count.as_ref()
    }
}
