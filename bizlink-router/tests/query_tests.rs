use bizlink_router::{ParameterMap, parse_parameters};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn map(pairs: &[(&str, &str)]) -> ParameterMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ── Basic splitting ──────────────────────────────────────────────

#[test]
fn splits_on_ampersand() {
    assert_eq!(
        parse_parameters("user=john&pass=smith&age=41"),
        map(&[("user", "john"), ("pass", "smith"), ("age", "41")])
    );
}

#[test]
fn splits_on_newline() {
    assert_eq!(
        parse_parameters("owner=c:abc\nacct=def"),
        map(&[("owner", "c:abc"), ("acct", "def")])
    );
}

#[test]
fn first_occurrence_wins() {
    assert_eq!(parse_parameters("a=1&b=2&a=3"), map(&[("a", "1"), ("b", "2")]));
}

#[test]
fn empty_input_is_empty_map() {
    assert!(parse_parameters("").is_empty());
}

// ── Edge cases ───────────────────────────────────────────────────

#[test]
fn pairs_without_equals_are_skipped() {
    assert_eq!(parse_parameters("flag&a=1&&"), map(&[("a", "1")]));
}

#[test]
fn only_garbage_is_empty_map() {
    assert!(parse_parameters("no pairs here").is_empty());
}

#[test]
fn value_keeps_later_equals_signs() {
    assert_eq!(parse_parameters("expr=a=b"), map(&[("expr", "a=b")]));
}

#[test]
fn empty_key_is_kept_once() {
    assert_eq!(parse_parameters("=x&=y"), map(&[("", "x")]));
}

#[test]
fn empty_value_is_kept() {
    assert_eq!(parse_parameters("acct="), map(&[("acct", "")]));
}

#[test]
fn keys_are_case_sensitive() {
    assert_eq!(
        parse_parameters("Owner=1&owner=2"),
        map(&[("Owner", "1"), ("owner", "2")])
    );
}

#[test]
fn no_decoding_or_trimming() {
    assert_eq!(
        parse_parameters(" a = %20b "),
        map(&[(" a ", " %20b ")])
    );
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn never_panics(raw in ".{0,200}") {
        let _ = parse_parameters(&raw);
    }

    #[test]
    fn every_key_comes_from_a_pair_in_the_input(raw in "[a-c=&\n]{0,40}") {
        let params = parse_parameters(&raw);
        for (key, value) in &params {
            let pair = format!("{key}={value}");
            prop_assert!(raw.split(['&', '\n']).any(|p| p == pair));
        }
    }

    #[test]
    fn value_is_from_first_pair_with_that_key(raw in "[ab]=[0-9]{1,3}(&[ab]=[0-9]{1,3}){0,6}") {
        let params = parse_parameters(&raw);
        for (key, value) in &params {
            let first = raw
                .split('&')
                .filter_map(|p| p.split_once('='))
                .find(|(k, _)| k == key)
                .map(|(_, v)| v);
            prop_assert_eq!(first, Some(value.as_str()));
        }
    }
}
