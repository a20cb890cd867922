// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wish-number normalization.
//!
//! Wish numbers are user-supplied numbers that must appear among the main
//! numbers of a draw. Raw input is normalized against a rule before drawing:
//!
//! - text input is split on commas and each token's leading integer is read
//!   (`" 7"` → 7, `"7abc"` → 7, `"abc"` → discarded)
//! - values outside `1..=main_max` are discarded
//! - duplicates collapse
//!
//! The size limit (`main_count`) is not enforced here; see
//! [`crate::validate_wish_count`].

use crate::types::Rule;
use std::collections::BTreeSet;

/// A normalized set of wish numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishSet {
    numbers: BTreeSet<u8>,
}

impl WishSet {
    /// Creates an empty wish set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            numbers: BTreeSet::new(),
        }
    }

    /// Normalizes comma-separated wish input against a rule.
    #[must_use]
    pub fn parse(input: &str, rule: &Rule) -> Self {
        Self::from_numbers(input.split(',').filter_map(parse_leading_integer), rule)
    }

    /// Normalizes a sequence of wish numbers against a rule.
    #[must_use]
    pub fn from_numbers<I>(numbers: I, rule: &Rule) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let numbers: BTreeSet<u8> = numbers
            .into_iter()
            .filter_map(|n| u8::try_from(n).ok())
            .filter(|n| rule.accepts_main(*n))
            .collect();
        Self { numbers }
    }

    /// Returns the number of distinct wish numbers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Returns whether there are no wish numbers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Returns whether `number` is one of the wish numbers.
    #[must_use]
    pub fn contains(&self, number: u8) -> bool {
        self.numbers.contains(&number)
    }

    /// Iterates over the wish numbers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.numbers.iter().copied()
    }
}

/// Reads the integer at the start of a token, ignoring surrounding whitespace.
///
/// An optional sign is accepted. Reading stops at the first non-digit.
/// Returns `None` if the token does not start with a digit (after the sign).
/// Values too large for `i64` saturate, which keeps them out of every range.
pub(crate) fn parse_leading_integer(token: &str) -> Option<i64> {
    let trimmed: &str = token.trim();
    let (negative, digits): (bool, &str) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit: bool = false;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(10) else {
            break;
        };
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}
