// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Properties that must hold for every draw made with the thread-local generator.

use crate::{CoreError, draw, draw_for_country};
use global_lotto_domain::{DomainError, DrawResult, Rule, RuleCatalog, WishSet};

use super::helpers::{assert_valid_draw, eu_rule, jp_rule, kr_rule, us_rule};

#[test]
fn test_every_builtin_rule_produces_valid_draws() {
    let catalog: RuleCatalog = RuleCatalog::builtin();
    for (_, rule) in catalog.entries() {
        for _ in 0..200 {
            let result: DrawResult = draw(rule, &WishSet::empty()).unwrap();
            assert_valid_draw(rule, &result);
        }
    }
}

#[test]
fn test_kr_draws_never_repeat_numbers() {
    let rule: Rule = kr_rule();
    for _ in 0..1000 {
        let result: DrawResult = draw(&rule, &WishSet::empty()).unwrap();
        assert_valid_draw(&rule, &result);
        assert!(!result.main_numbers().contains(&result.bonus_numbers()[0]));
    }
}

#[test]
fn test_us_draw_includes_wishes() {
    let rule: Rule = us_rule();
    let wishes: WishSet = WishSet::from_numbers([7, 14], &rule);
    for _ in 0..100 {
        let result: DrawResult = draw(&rule, &wishes).unwrap();
        assert_valid_draw(&rule, &result);
        assert!(result.main_numbers().contains(&7));
        assert!(result.main_numbers().contains(&14));
        assert_eq!(result.bonus_numbers().len(), 1);
    }
}

#[test]
fn test_jp_draw_has_no_bonus_numbers() {
    let rule: Rule = jp_rule();
    let result: DrawResult = draw(&rule, &WishSet::empty()).unwrap();
    assert_valid_draw(&rule, &result);
    assert!(result.bonus_numbers().is_empty());
    assert_eq!(result.main_numbers().len(), 7);
}

#[test]
fn test_eu_draw_has_two_bonus_numbers() {
    let rule: Rule = eu_rule();
    let result: DrawResult = draw(&rule, &WishSet::empty()).unwrap();
    assert_valid_draw(&rule, &result);
    assert_eq!(result.bonus_numbers().len(), 2);
}

#[test]
fn test_wishes_at_range_edges_are_always_included() {
    let catalog: RuleCatalog = RuleCatalog::builtin();
    for (_, rule) in catalog.entries() {
        let wishes: WishSet = WishSet::from_numbers([1, i64::from(rule.main_max())], rule);
        for _ in 0..50 {
            let result: DrawResult = draw(rule, &wishes).unwrap();
            assert_valid_draw(rule, &result);
            assert!(wishes.iter().all(|n| result.main_numbers().contains(&n)));
        }
    }
}

#[test]
fn test_full_wish_set_becomes_the_main_numbers() {
    let catalog: RuleCatalog = RuleCatalog::builtin();
    for (_, rule) in catalog.entries() {
        let wishes: WishSet = WishSet::from_numbers(1..=i64::from(rule.main_count()), rule);
        let result: DrawResult = draw(rule, &wishes).unwrap();
        assert_eq!(result.main_numbers(), wishes.iter().collect::<Vec<u8>>().as_slice());
    }
}

#[test]
fn test_one_wish_too_many_fails_for_every_rule() {
    let catalog: RuleCatalog = RuleCatalog::builtin();
    for (_, rule) in catalog.entries() {
        let wishes: WishSet = WishSet::from_numbers(1..=i64::from(rule.main_count()) + 1, rule);
        let result: Result<DrawResult, CoreError> = draw(rule, &wishes);
        assert!(matches!(
            result,
            Err(CoreError::DomainViolation(DomainError::TooManyWishNumbers { .. }))
        ));
    }
}

#[test]
fn test_failed_draw_does_not_affect_next_draw() {
    let rule: Rule = us_rule();
    let too_many: WishSet = WishSet::parse("1,2,3,4,5,6,7", &rule);
    assert!(draw(&rule, &too_many).is_err());

    let result: DrawResult = draw(&rule, &WishSet::empty()).unwrap();
    assert_valid_draw(&rule, &result);
}

#[test]
fn test_dense_rule_draws_whole_range() {
    let rule: Rule = Rule::new(45, 45, 0, 0, false).unwrap();
    let result: DrawResult = draw(&rule, &WishSet::empty()).unwrap();
    assert_eq!(result.main_numbers(), (1..=45).collect::<Vec<u8>>().as_slice());
}

#[test]
fn test_draw_for_country_parses_wish_input() {
    let catalog: RuleCatalog = RuleCatalog::builtin();
    let result: DrawResult = draw_for_country(&catalog, "us", "7, 14, banana").unwrap();
    assert_valid_draw(&us_rule(), &result);
    assert!(result.main_numbers().contains(&7));
    assert!(result.main_numbers().contains(&14));
}

#[test]
fn test_draw_for_country_rejects_unknown_country() {
    let catalog: RuleCatalog = RuleCatalog::builtin();
    let result: Result<DrawResult, CoreError> = draw_for_country(&catalog, "xx", "");
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::UnknownCountry(
            String::from("xx")
        )))
    );
}
