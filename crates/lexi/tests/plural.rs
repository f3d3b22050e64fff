//! Integration tests for plural rule selection.

use std::ops::Bound;

use lexi::interpreter::select_plural;
use lexi::parser::{ParseError, PluralPredicate, parse_predicates};
use lexi::{Args, EvalError, I18n, I18nConfig, PluralRule, PluralSet};

fn items() -> PluralSet {
    PluralSet::new(vec![
        PluralRule::exact("one item", 1.0),
        PluralRule::fallback("{{count}} items"),
    ])
}

fn ranges() -> PluralSet {
    PluralSet::new(vec![
        PluralRule::new("zero", vec![PluralPredicate::Exact(0.0)]),
        PluralRule::new("few", parse_predicates("2..=5").unwrap()),
        PluralRule::new("negative", parse_predicates("..0").unwrap()),
        PluralRule::fallback("other"),
    ])
}

// =============================================================================
// Predicate Parsing
// =============================================================================

#[test]
fn parses_exact_values() {
    assert_eq!(parse_predicates("3").unwrap(), vec![PluralPredicate::Exact(3.0)]);
    assert_eq!(parse_predicates("-2").unwrap(), vec![PluralPredicate::Exact(-2.0)]);
    assert_eq!(parse_predicates(" 0.5 ").unwrap(), vec![PluralPredicate::Exact(0.5)]);
}

#[test]
fn parses_range_forms() {
    assert_eq!(
        parse_predicates("1..5").unwrap(),
        vec![PluralPredicate::Range { start: Some(1.0), end: Bound::Excluded(5.0) }]
    );
    assert_eq!(
        parse_predicates("..=0").unwrap(),
        vec![PluralPredicate::Range { start: None, end: Bound::Included(0.0) }]
    );
    assert_eq!(
        parse_predicates("10..").unwrap(),
        vec![PluralPredicate::Range { start: Some(10.0), end: Bound::Unbounded }]
    );
}

#[test]
fn parses_alternatives_and_wildcard() {
    assert_eq!(
        parse_predicates("0 | 5 | _").unwrap(),
        vec![
            PluralPredicate::Exact(0.0),
            PluralPredicate::Exact(5.0),
            PluralPredicate::Any,
        ]
    );
}

#[test]
fn rejects_garbage() {
    assert!(matches!(
        parse_predicates("one"),
        Err(ParseError::Syntax { column: 1, .. })
    ));
    assert!(matches!(
        parse_predicates("1..=x"),
        Err(ParseError::Syntax { .. })
    ));
    assert!(matches!(
        parse_predicates(""),
        Err(ParseError::UnexpectedEof { .. })
    ));
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn exact_rule_wins_for_its_count() {
    assert_eq!(select_plural("items", &items(), Some(1.0)).unwrap(), "one item");
    assert_eq!(select_plural("items", &items(), Some(5.0)).unwrap(), "{{count}} items");
}

#[test]
fn no_count_uses_fallback() {
    assert_eq!(select_plural("items", &items(), None).unwrap(), "{{count}} items");
}

#[test]
fn inclusive_range_bounds() {
    let set = ranges();
    for count in [2.0, 3.0, 4.0, 5.0] {
        assert_eq!(select_plural("r", &set, Some(count)).unwrap(), "few");
    }
    for count in [1.0, 6.0] {
        assert_eq!(select_plural("r", &set, Some(count)).unwrap(), "other");
    }
}

#[test]
fn open_lower_range_excludes_its_end() {
    let set = ranges();
    for count in [-1.0, -100.0, -0.00001] {
        assert_eq!(select_plural("r", &set, Some(count)).unwrap(), "negative");
    }
    assert_eq!(select_plural("r", &set, Some(0.0)).unwrap(), "zero");
}

#[test]
fn first_matching_rule_wins_on_overlap() {
    let set = PluralSet::new(vec![
        PluralRule::new("wide", parse_predicates("0..10").unwrap()),
        PluralRule::new("narrow", parse_predicates("3").unwrap()),
        PluralRule::fallback("other"),
    ]);
    assert_eq!(select_plural("o", &set, Some(3.0)).unwrap(), "wide");
}

#[test]
fn fallback_declared_first_does_not_shadow_later_rules() {
    let set = PluralSet::new(vec![
        PluralRule::fallback("other"),
        PluralRule::exact("one", 1.0),
    ]);
    assert_eq!(select_plural("o", &set, Some(1.0)).unwrap(), "one");
    assert_eq!(select_plural("o", &set, Some(2.0)).unwrap(), "other");
}

#[test]
fn missing_fallback_is_an_error() {
    let set = PluralSet::new(vec![PluralRule::exact("one", 1.0)]);
    assert_eq!(
        select_plural("only_one", &set, None),
        Err(EvalError::NoPluralDefault { key: "only_one".to_string() })
    );
    assert_eq!(
        select_plural("only_one", &set, Some(2.0)),
        Err(EvalError::NoPluralMatch { key: "only_one".to_string(), count: 2.0 })
    );
}

// =============================================================================
// Through the Facade
// =============================================================================

fn counter() -> I18n {
    let config = I18nConfig::from_json_str(
        r#"{
            "default_locale": "en",
            "locales": {
                "en": {
                    "items": [["one item", 1], ["{{count}} items"]],
                    "money": [
                        ["You are broke", 0],
                        ["You owe money", "..0"],
                        ["You have {{ count }}€", "_"]
                    ],
                    "or_range": [
                        ["0 or 5", "0 | 5"],
                        ["1..5 | 6..10", "1..5 | 6..10"],
                        ["10..15 | 20", "10..15", 20],
                        ["fallback"]
                    ],
                    "strict": [["<b>{{ count }}</b> exactly", 2]]
                }
            }
        }"#,
    )
    .unwrap();
    I18n::new(config, "en")
}

#[test]
fn count_is_injected_into_template() {
    let i18n = counter();
    assert_eq!(i18n.t("items", &Args::with_count(1)).unwrap(), "one item");
    assert_eq!(i18n.t("items", &Args::with_count(5)).unwrap(), "5 items");
    assert_eq!(i18n.t("items", &Args::default()).unwrap(), "{{count}} items");
}

#[test]
fn float_counts() {
    let i18n = counter();
    assert_eq!(i18n.t("money", &Args::with_count(0.0)).unwrap(), "You are broke");
    assert_eq!(i18n.t("money", &Args::with_count(-57.69)).unwrap(), "You owe money");
    assert_eq!(i18n.t("money", &Args::with_count(57.69)).unwrap(), "You have 57.69€");
}

#[test]
fn or_ranges() {
    let i18n = counter();
    let render = |count: i64| i18n.t("or_range", &Args::with_count(count)).unwrap();
    for count in [0, 5] {
        assert_eq!(render(count), "0 or 5");
    }
    for count in [1, 4, 6, 9] {
        assert_eq!(render(count), "1..5 | 6..10");
    }
    for count in [10, 12, 14, 20] {
        assert_eq!(render(count), "10..15 | 20");
    }
    for count in [15, 17, 21, 56] {
        assert_eq!(render(count), "fallback");
    }
}

#[test]
fn selected_template_goes_through_tags() {
    let i18n = counter();
    let args = Args::builder()
        .count(2)
        .components(lexi::ComponentRegistry::new().with("b", |s| format!("*{s}*")))
        .build();
    assert_eq!(i18n.t("strict", &args).unwrap(), "*2* exactly");
}

#[test]
fn malformed_plural_surfaces_errors() {
    let i18n = counter();
    assert!(matches!(
        i18n.t("strict", &Args::with_count(3)),
        Err(EvalError::NoPluralMatch { .. })
    ));
    assert!(matches!(
        i18n.t("strict", &Args::default()),
        Err(EvalError::NoPluralDefault { .. })
    ));
}

#[test]
fn string_count_is_rejected() {
    let i18n = counter();
    assert_eq!(
        i18n.t("items", &Args::with_count("many")),
        Err(EvalError::InvalidCount {
            key: "items".to_string(),
            value: "many".to_string(),
        })
    );
}
