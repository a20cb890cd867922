// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::wish::parse_leading_integer;
use crate::{Rule, WishSet};

fn us_rule() -> Rule {
    Rule::new(5, 69, 1, 26, false).unwrap()
}

#[test]
fn test_parse_leading_integer_reads_plain_numbers() {
    assert_eq!(parse_leading_integer("7"), Some(7));
    assert_eq!(parse_leading_integer("  14 "), Some(14));
    assert_eq!(parse_leading_integer("+3"), Some(3));
    assert_eq!(parse_leading_integer("-5"), Some(-5));
}

#[test]
fn test_parse_leading_integer_stops_at_first_non_digit() {
    assert_eq!(parse_leading_integer("7abc"), Some(7));
    assert_eq!(parse_leading_integer("12.9"), Some(12));
    assert_eq!(parse_leading_integer("3 4"), Some(3));
}

#[test]
fn test_parse_leading_integer_rejects_non_numeric_tokens() {
    assert_eq!(parse_leading_integer(""), None);
    assert_eq!(parse_leading_integer("   "), None);
    assert_eq!(parse_leading_integer("abc"), None);
    assert_eq!(parse_leading_integer("-"), None);
    assert_eq!(parse_leading_integer("x7"), None);
}

#[test]
fn test_parse_leading_integer_saturates_huge_values() {
    assert_eq!(
        parse_leading_integer("99999999999999999999999"),
        Some(i64::MAX)
    );
}

#[test]
fn test_wish_set_parse_reads_comma_separated_input() {
    let wishes: WishSet = WishSet::parse("7, 14", &us_rule());
    assert_eq!(wishes.iter().collect::<Vec<u8>>(), vec![7, 14]);
}

#[test]
fn test_wish_set_parse_discards_invalid_tokens() {
    let wishes: WishSet = WishSet::parse("abc, , 0, 70, -3, 12", &us_rule());
    assert_eq!(wishes.iter().collect::<Vec<u8>>(), vec![12]);
}

#[test]
fn test_wish_set_parse_collapses_duplicates() {
    let wishes: WishSet = WishSet::parse("5,5, 05 ,5abc", &us_rule());
    assert_eq!(wishes.len(), 1);
    assert!(wishes.contains(5));
}

#[test]
fn test_wish_set_parse_of_empty_input_is_empty() {
    let wishes: WishSet = WishSet::parse("", &us_rule());
    assert!(wishes.is_empty());
    assert_eq!(wishes, WishSet::empty());
}

#[test]
fn test_wish_set_parse_is_deterministic() {
    let rule: Rule = us_rule();
    let input: &str = "69, 1, 33, 1, banana, 100";
    assert_eq!(WishSet::parse(input, &rule), WishSet::parse(input, &rule));
}

#[test]
fn test_wish_set_from_numbers_filters_range() {
    let wishes: WishSet = WishSet::from_numbers([-1, 0, 1, 69, 70, 256, 300], &us_rule());
    assert_eq!(wishes.iter().collect::<Vec<u8>>(), vec![1, 69]);
}

#[test]
fn test_wish_set_text_and_numbers_agree() {
    let rule: Rule = us_rule();
    assert_eq!(
        WishSet::parse("14, 7, 7", &rule),
        WishSet::from_numbers([7, 14], &rule)
    );
}
