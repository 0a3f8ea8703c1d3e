//! Property-based tests for the escape codec, token substitution and the
//! key/value comparator.

use parser_power::compare::str_case_cmp;
use parser_power::escape::find_unescaped;
use parser_power::{apply_pattern, escape, unescape, SortKeyValueComparator, SortOptions};
use proptest::prelude::*;
use std::cmp::Ordering;

/// Text drawn heavily from the significant characters.
fn delimiter_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just('\\'),
            Just('|'),
            Just('='),
            Just('{'),
            Just('}'),
            Just('['),
            Just(']'),
            Just('n'),
            Just('_'),
            Just(' '),
            any::<char>(),
        ],
        0..24,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn options() -> impl Strategy<Value = SortOptions> {
    (0u8..8).prop_map(|bits| SortOptions::from_bits(bits).unwrap())
}

fn sort_key() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<i64>().prop_map(|n| n.to_string()),
        (-1000.0f64..1000.0).prop_map(|f| f.to_string()),
        "[a-zA-Z]{0,4}",
    ]
}

proptest! {
    #[test]
    fn prop_escape_round_trip(text in delimiter_text()) {
        prop_assert_eq!(unescape(&escape(&text)), text);
    }

    #[test]
    fn prop_unescape_once_removes_one_layer(text in delimiter_text()) {
        let once = escape(&text);
        prop_assert_eq!(unescape(&escape(&once)), once);
    }

    #[test]
    fn prop_escaped_text_has_no_bare_delimiters(text in delimiter_text()) {
        let escaped = escape(&text);
        prop_assert!(find_unescaped(&escaped, '|').is_none());
        prop_assert!(find_unescaped(&escaped, '=').is_none());
    }

    #[test]
    fn prop_unescape_without_marker_is_identity(text in "[^\\\\]*") {
        prop_assert_eq!(unescape(&text), text);
    }

    #[test]
    fn prop_pattern_without_token_unchanged(value in ".*", pattern in "[a-w ]*") {
        prop_assert_eq!(apply_pattern(&value, "x", &pattern), pattern);
    }

    #[test]
    fn prop_pattern_replaces_every_token(
        value in "[a-z]{0,5}",
        parts in prop::collection::vec("[a-w]{0,4}", 1..6),
    ) {
        let pattern = parts.join("x");
        let expected = parts.join(value.as_str());
        prop_assert_eq!(apply_pattern(&value, "x", &pattern), expected);
    }

    #[test]
    fn prop_pattern_empty_token_unchanged(value in ".*", pattern in ".*") {
        prop_assert_eq!(apply_pattern(&value, "", &pattern), pattern);
    }

    #[test]
    fn prop_value_direction_negates_tie_break(
        key_options in options(),
        value_options in options(),
        key in sort_key(),
        a in sort_key(),
        b in sort_key(),
    ) {
        let asc = SortKeyValueComparator::new(
            key_options,
            Some(value_options.with_descending(false)),
        );
        let desc = SortKeyValueComparator::new(
            key_options,
            Some(value_options.with_descending(true)),
        );
        let pair1 = (key.as_str(), a.as_str());
        let pair2 = (key.as_str(), b.as_str());
        prop_assert_eq!(desc.compare(&pair1, &pair2), asc.compare(&pair1, &pair2).reverse());
    }

    #[test]
    fn prop_comparator_antisymmetric(
        key_options in options(),
        value_options in proptest::option::of(options()),
        k1 in sort_key(), v1 in sort_key(),
        k2 in sort_key(), v2 in sort_key(),
    ) {
        let comparator = SortKeyValueComparator::new(key_options, value_options);
        let pair1 = (k1.as_str(), v1.as_str());
        let pair2 = (k2.as_str(), v2.as_str());
        prop_assert_eq!(
            comparator.compare(&pair1, &pair2),
            comparator.compare(&pair2, &pair1).reverse()
        );
    }

    #[test]
    fn prop_sort_output_is_ordered(
        key_options in options(),
        keys in prop::collection::vec(sort_key(), 0..16),
    ) {
        let comparator = SortKeyValueComparator::by_key(key_options);
        let mut pairs: Vec<(String, String)> =
            keys.into_iter().enumerate().map(|(i, k)| (k, i.to_string())).collect();
        comparator.sort(&mut pairs);
        for window in pairs.windows(2) {
            prop_assert_ne!(comparator.compare(&window[0], &window[1]), Ordering::Greater);
        }
    }

    #[test]
    fn prop_sort_is_stable_for_equal_keys(
        keys in prop::collection::vec("[a-cA-C]", 0..16),
    ) {
        let mut pairs: Vec<(String, String)> =
            keys.into_iter().enumerate().map(|(i, k)| (k, format!("{i:02}"))).collect();
        SortKeyValueComparator::by_key(SortOptions::new()).sort(&mut pairs);
        for window in pairs.windows(2) {
            if str_case_cmp(&window[0].0, &window[1].0) == Ordering::Equal {
                prop_assert!(window[0].1 < window[1].1);
            }
        }
    }
}
