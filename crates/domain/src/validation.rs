// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Rule;
use crate::wish::WishSet;

/// Validates that a rule can always be satisfied by a draw.
///
/// This function is pure, deterministic, and has no side effects.
///
/// # Arguments
///
/// * `rule` - The rule to validate
///
/// # Returns
///
/// * `Ok(())` if every draw under this rule terminates
/// * `Err(DomainError::ImpossibleRule)` otherwise
///
/// # Errors
///
/// Returns an error if:
/// - The rule draws no main numbers
/// - The rule draws more main numbers than its main range holds
/// - The rule draws more bonus numbers than its bonus range holds
/// - Bonus numbers must avoid the main numbers but the bonus range
///   cannot hold both
pub fn validate_rule(rule: &Rule) -> Result<(), DomainError> {
    // Rule: at least one main number
    if rule.main_count() == 0 {
        return Err(DomainError::ImpossibleRule {
            reason: String::from("main count must be at least 1"),
        });
    }

    // Rule: main numbers fit in 1..=main_max
    if rule.main_count() > rule.main_max() {
        return Err(DomainError::ImpossibleRule {
            reason: format!(
                "cannot draw {} distinct main numbers from 1..={}",
                rule.main_count(),
                rule.main_max()
            ),
        });
    }

    if rule.bonus_count() == 0 {
        return Ok(());
    }

    // Rule: bonus numbers fit in 1..=bonus_max
    if rule.bonus_count() > rule.bonus_max() {
        return Err(DomainError::ImpossibleRule {
            reason: format!(
                "cannot draw {} distinct bonus numbers from 1..={}",
                rule.bonus_count(),
                rule.bonus_max()
            ),
        });
    }

    // Rule: in the worst case every main number lands in the bonus range
    if rule.bonus_disjoint_from_main()
        && rule.bonus_max().saturating_sub(rule.main_count()) < rule.bonus_count()
    {
        return Err(DomainError::ImpossibleRule {
            reason: format!(
                "cannot draw {} bonus numbers from 1..={} that avoid {} main numbers",
                rule.bonus_count(),
                rule.bonus_max(),
                rule.main_count()
            ),
        });
    }

    Ok(())
}

/// Validates that a wish set fits in the rule's main numbers.
///
/// Only wishes inside the rule's main range count; the draw drops the rest.
///
/// # Errors
///
/// Returns `DomainError::TooManyWishNumbers` if more in-range wishes were
/// supplied than the rule draws.
pub fn validate_wish_count(wishes: &WishSet, rule: &Rule) -> Result<(), DomainError> {
    let count: usize = wishes.iter().filter(|n| rule.accepts_main(*n)).count();
    if count > usize::from(rule.main_count()) {
        return Err(DomainError::TooManyWishNumbers {
            count,
            max: rule.main_count(),
        });
    }
    Ok(())
}
