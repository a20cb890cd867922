// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The draw engine.
//!
//! ## Draw Procedure
//!
//! 1. Re-check the rule and the wish count. Nothing random happens before
//!    both checks pass.
//! 2. Seed the main numbers with the wish numbers.
//! 3. Fill the main numbers up to `main_count` distinct values from `1..=main_max`.
//! 4. Fill the bonus numbers up to `bonus_count` distinct values from
//!    `1..=bonus_max`, skipping main numbers when the rule requires it.
//! 5. Sort both sequences ascending.
//!
//! ## Sampling
//!
//! Filling uses rejection sampling (draw, discard repeats) while the numbers
//! still needed are at most half of the free pool. Denser fills switch to a
//! partial Fisher-Yates shuffle over the free values, so every draw finishes
//! in a bounded number of steps.

use crate::error::CoreError;
use crate::random::{NumberSource, ThreadNumberSource};
use global_lotto_domain::{DrawResult, Rule, WishSet, validate_rule, validate_wish_count};
use tracing::debug;

/// Draws numbers for a rule using the thread-local generator.
///
/// # Arguments
///
/// * `rule` - The drawing rule
/// * `wishes` - Wish numbers that must appear among the main numbers
///
/// # Returns
///
/// * `Ok(DrawResult)` with sorted main and bonus numbers
/// * `Err(CoreError)` if the draw is rejected during validation
///
/// # Errors
///
/// Returns an error if:
/// - The rule cannot be satisfied (`ImpossibleRule`)
/// - There are more wish numbers than main numbers (`TooManyWishNumbers`)
pub fn draw(rule: &Rule, wishes: &WishSet) -> Result<DrawResult, CoreError> {
    draw_with(rule, wishes, &mut ThreadNumberSource)
}

/// Draws numbers for a rule using the given number source.
///
/// # Errors
///
/// Returns an error if:
/// - The rule cannot be satisfied (`ImpossibleRule`)
/// - There are more wish numbers than main numbers (`TooManyWishNumbers`)
pub fn draw_with<S>(rule: &Rule, wishes: &WishSet, source: &mut S) -> Result<DrawResult, CoreError>
where
    S: NumberSource + ?Sized,
{
    validate_rule(rule)?;
    validate_wish_count(wishes, rule)?;

    // Wishes normalized against a different rule may fall outside this one
    let mut main_numbers: Vec<u8> = wishes.iter().filter(|n| rule.accepts_main(*n)).collect();
    fill_distinct(
        &mut main_numbers,
        usize::from(rule.main_count()),
        rule.main_max(),
        |_| false,
        source,
    );

    let mut bonus_numbers: Vec<u8> = Vec::with_capacity(usize::from(rule.bonus_count()));
    if rule.bonus_count() > 0 {
        let disjoint: bool = rule.bonus_disjoint_from_main();
        fill_distinct(
            &mut bonus_numbers,
            usize::from(rule.bonus_count()),
            rule.bonus_max(),
            |n| disjoint && main_numbers.contains(&n),
            source,
        );
    }

    let result: DrawResult = DrawResult::new(main_numbers, bonus_numbers);
    debug!(
        rule = %rule,
        wishes = wishes.len(),
        main = ?result.main_numbers(),
        bonus = ?result.bonus_numbers(),
        "Completed draw"
    );
    Ok(result)
}

/// Adds distinct values from `1..=upper` to `chosen` until it holds `target` values.
///
/// Values for which `excluded` returns true are never added. The caller
/// guarantees enough free values exist (see `validate_rule`).
fn fill_distinct<F, S>(chosen: &mut Vec<u8>, target: usize, upper: u8, excluded: F, source: &mut S)
where
    F: Fn(u8) -> bool,
    S: NumberSource + ?Sized,
{
    if chosen.len() >= target {
        return;
    }
    let needed: usize = target - chosen.len();
    let is_free = |n: u8| !chosen.contains(&n) && !excluded(n);

    let mut free: Vec<u8> = (1..=upper).filter(|n| is_free(*n)).collect();
    if free.len() < needed {
        // Unreachable for validated rules; take what exists instead of spinning.
        chosen.append(&mut free);
        return;
    }

    if needed * 2 <= free.len() {
        while chosen.len() < target {
            let candidate: u8 = source.pick(upper);
            if !chosen.contains(&candidate) && !excluded(candidate) {
                chosen.push(candidate);
            }
        }
    } else {
        partial_shuffle(&mut free, needed, source);
        chosen.extend_from_slice(&free[..needed]);
    }
}

/// Shuffles the first `count` positions of `values` (partial Fisher-Yates).
fn partial_shuffle<S>(values: &mut [u8], count: usize, source: &mut S)
where
    S: NumberSource + ?Sized,
{
    for i in 0..count {
        let remaining: u8 = u8::try_from(values.len() - i).unwrap_or(u8::MAX);
        let offset: usize = usize::from(source.pick(remaining)) - 1;
        values.swap(i, i + offset);
    }
}
