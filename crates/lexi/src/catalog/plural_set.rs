use crate::parser::PluralPredicate;

/// One alternative of a plural set: a template and the counts it applies to.
///
/// A rule without predicates is a fallback rule. A `_` predicate makes the
/// whole rule a fallback, so it is normalized away on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PluralRule {
    template: String,
    predicates: Vec<PluralPredicate>,
}

impl PluralRule {
    /// Create a rule matching any of `predicates`.
    pub fn new(template: impl Into<String>, predicates: Vec<PluralPredicate>) -> Self {
        let predicates = if predicates.contains(&PluralPredicate::Any) {
            Vec::new()
        } else {
            predicates
        };
        Self {
            template: template.into(),
            predicates,
        }
    }

    /// Create a fallback rule.
    pub fn fallback(template: impl Into<String>) -> Self {
        Self::new(template, Vec::new())
    }

    /// Create a rule matching exactly `value`.
    pub fn exact(template: impl Into<String>, value: f64) -> Self {
        Self::new(template, vec![PluralPredicate::Exact(value)])
    }

    /// The template rendered when this rule is selected.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The rule's predicates; empty for a fallback rule.
    pub fn predicates(&self) -> &[PluralPredicate] {
        &self.predicates
    }

    /// Whether this rule has no predicates.
    pub fn is_fallback(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Whether one of the predicates accepts `count`. Always false for a
    /// fallback rule.
    pub fn matches(&self, count: f64) -> bool {
        self.predicates.iter().any(|p| p.matches(count))
    }
}

/// Ordered plural alternatives. Declaration order decides between
/// overlapping rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluralSet {
    rules: Vec<PluralRule>,
}

impl PluralSet {
    /// Create a set from rules in priority order.
    pub fn new(rules: Vec<PluralRule>) -> Self {
        Self { rules }
    }

    /// All rules in declaration order.
    pub fn rules(&self) -> &[PluralRule] {
        &self.rules
    }

    /// The first rule without predicates.
    pub fn fallback(&self) -> Option<&PluralRule> {
        self.rules.iter().find(|rule| rule.is_fallback())
    }

    /// The first non-fallback rule accepting `count`.
    pub fn first_match(&self, count: f64) -> Option<&PluralRule> {
        self.rules.iter().find(|rule| rule.matches(count))
    }
}

impl FromIterator<PluralRule> for PluralSet {
    fn from_iter<I: IntoIterator<Item = PluralRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
