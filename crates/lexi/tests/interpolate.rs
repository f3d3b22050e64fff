//! Integration tests for `{{ name }}` interpolation.

use lexi::interpreter::interpolate;
use lexi::{Value, vars};
use proptest::prelude::*;

#[test]
fn substitutes_with_and_without_spaces() {
    let v = vars! { "count" => 3 };
    assert_eq!(interpolate("Count: {{ count }}", &v), "Count: 3");
    assert_eq!(interpolate("Count: {{count}}", &v), "Count: 3");
    assert_eq!(interpolate("Count: {{   count\t}}", &v), "Count: 3");
}

#[test]
fn substitutes_every_occurrence() {
    let v = vars! { "x" => "a" };
    assert_eq!(interpolate("{{x}}-{{ x }}-{{x}}", &v), "a-a-a");
}

#[test]
fn names_match_case_insensitively() {
    let v = vars! { "name" => "Al" };
    assert_eq!(interpolate("Hi {{ NAME }} / {{Name}}", &v), "Hi Al / Al");
}

#[test]
fn keys_may_contain_spaces_and_punctuation() {
    let v = vars! { "first name" => "Al", "user.id" => 7 };
    assert_eq!(interpolate("Hi {{ first name }}", &v), "Hi Al");
    assert_eq!(interpolate("Hi {{FIRST NAME}} #{{user.id}}", &v), "Hi Al #7");
    assert_eq!(interpolate("{{ first  name }}", &v), "{{ first  name }}");
}

#[test]
fn exact_name_is_preferred_over_case_insensitive_match() {
    let v = vars! { "Name" => "upper", "name" => "lower" };
    assert_eq!(interpolate("{{name}} {{Name}}", &v), "lower upper");
}

#[test]
fn longer_key_is_not_shadowed_by_its_prefix() {
    let v = vars! { "a" => 1, "a b" => 2 };
    assert_eq!(interpolate("{{a}} {{ a b }}", &v), "1 2");
}

#[test]
fn unknown_placeholders_are_left_alone() {
    let v = vars! { "a" => 1 };
    assert_eq!(interpolate("{{ a }} {{ b }}", &v), "1 {{ b }}");
}

#[test]
fn substituted_values_are_not_rescanned() {
    let v = vars! { "a" => "{{ b }}", "b" => "B" };
    assert_eq!(interpolate("{{a}}", &v), "{{ b }}");
    let v = vars! { "b" => "{{ a }}", "a" => "A" };
    assert_eq!(interpolate("{{b}} {{a}}", &v), "{{ a }} A");
}

#[test]
fn extra_braces_around_placeholder_survive() {
    let v = vars! { "n" => 2 };
    assert_eq!(interpolate("{{{ n }}}", &v), "{2}");
}

#[test]
fn single_braces_are_not_placeholders() {
    let v = vars! { "n" => 2 };
    assert_eq!(interpolate("{n} { n }", &v), "{n} { n }");
}

#[test]
fn floats_and_strings_display_naturally() {
    let v = vars! { "price" => 2.5, "whole" => Value::Float(4.0), "who" => "you" };
    assert_eq!(
        interpolate("{{who}} owe {{price}} and {{whole}}", &v),
        "you owe 2.5 and 4"
    );
}

#[test]
fn count_round_trip_is_stable() {
    let v = vars! { "count" => 3 };
    let once = interpolate("Count: {{ count }}", &v);
    assert_eq!(once, "Count: 3");
    assert_eq!(interpolate(&once, &v), once);
}

proptest! {
    #[test]
    fn text_without_placeholders_is_unchanged(text in "[^{}]*") {
        let v = vars! { "a" => 1, "b" => "x" };
        prop_assert_eq!(interpolate(&text, &v), text);
    }

    #[test]
    fn interpolation_is_idempotent_for_plain_values(
        value in "[a-z0-9 ]{0,12}",
        prefix in "[a-z ]{0,8}",
    ) {
        let v = vars! { "name" => value.clone() };
        let template = format!("{prefix}{{{{ name }}}}{prefix}");
        let once = interpolate(&template, &v);
        prop_assert_eq!(&once, &format!("{prefix}{value}{prefix}"));
        prop_assert_eq!(interpolate(&once, &v), once);
    }
}
