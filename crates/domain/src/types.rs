// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::validate_rule;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifies a country (or multi-country lottery) in the rule catalog.
///
/// Codes are normalized to upper case, so `"kr"` and `"KR"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode {
    value: String,
}

impl CountryCode {
    /// Parses and normalizes a country code.
    ///
    /// Surrounding whitespace is ignored and letters are upper-cased.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCountryCode` if the trimmed code is empty
    /// or contains anything other than ASCII letters and digits.
    pub fn parse(code: &str) -> Result<Self, DomainError> {
        let trimmed: &str = code.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::InvalidCountryCode(code.to_string()));
        }
        Ok(Self {
            value: trimmed.to_ascii_uppercase(),
        })
    }

    /// Wraps a code that is already upper-case ASCII alphanumeric.
    pub(crate) fn new_unchecked(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the normalized code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl FromStr for CountryCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.value
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The drawing rule of one lottery format.
///
/// A `Rule` can only be obtained through [`Rule::new`] or deserialization,
/// both of which reject configurations no draw could satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RuleFields")]
pub struct Rule {
    main_count: u8,
    main_max: u8,
    bonus_count: u8,
    bonus_max: u8,
    bonus_disjoint_from_main: bool,
}

/// Unvalidated rule fields as they appear in a catalog file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleFields {
    main_count: u8,
    main_max: u8,
    #[serde(default)]
    bonus_count: u8,
    #[serde(default)]
    bonus_max: u8,
    #[serde(default)]
    bonus_disjoint_from_main: bool,
}

impl TryFrom<RuleFields> for Rule {
    type Error = DomainError;

    fn try_from(fields: RuleFields) -> Result<Self, Self::Error> {
        Self::new(
            fields.main_count,
            fields.main_max,
            fields.bonus_count,
            fields.bonus_max,
            fields.bonus_disjoint_from_main,
        )
    }
}

impl Rule {
    /// Creates a validated rule.
    ///
    /// # Arguments
    ///
    /// * `main_count` - How many main numbers a draw produces
    /// * `main_max` - Main numbers are drawn from `1..=main_max`
    /// * `bonus_count` - How many bonus numbers a draw produces (may be 0)
    /// * `bonus_max` - Bonus numbers are drawn from `1..=bonus_max`
    /// * `bonus_disjoint_from_main` - Whether a bonus number may repeat a main number
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ImpossibleRule` if no draw could satisfy the rule.
    pub fn new(
        main_count: u8,
        main_max: u8,
        bonus_count: u8,
        bonus_max: u8,
        bonus_disjoint_from_main: bool,
    ) -> Result<Self, DomainError> {
        let rule: Self = Self::new_unchecked(
            main_count,
            main_max,
            bonus_count,
            bonus_max,
            bonus_disjoint_from_main,
        );
        validate_rule(&rule)?;
        Ok(rule)
    }

    /// Creates a rule without validation. Only used for the builtin catalog,
    /// whose entries are covered by tests.
    pub(crate) const fn new_unchecked(
        main_count: u8,
        main_max: u8,
        bonus_count: u8,
        bonus_max: u8,
        bonus_disjoint_from_main: bool,
    ) -> Self {
        Self {
            main_count,
            main_max,
            bonus_count,
            bonus_max,
            bonus_disjoint_from_main,
        }
    }

    /// Returns how many main numbers a draw produces.
    #[must_use]
    pub const fn main_count(&self) -> u8 {
        self.main_count
    }

    /// Returns the largest main number.
    #[must_use]
    pub const fn main_max(&self) -> u8 {
        self.main_max
    }

    /// Returns how many bonus numbers a draw produces.
    #[must_use]
    pub const fn bonus_count(&self) -> u8 {
        self.bonus_count
    }

    /// Returns the largest bonus number.
    #[must_use]
    pub const fn bonus_max(&self) -> u8 {
        self.bonus_max
    }

    /// Returns whether bonus numbers must differ from every main number.
    #[must_use]
    pub const fn bonus_disjoint_from_main(&self) -> bool {
        self.bonus_disjoint_from_main
    }

    /// Returns whether `number` lies in the main-number range.
    #[must_use]
    pub const fn accepts_main(&self, number: u8) -> bool {
        number >= 1 && number <= self.main_max
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.main_count, self.main_max)?;
        if self.bonus_count > 0 {
            write!(f, " + {}/{}", self.bonus_count, self.bonus_max)?;
            if self.bonus_disjoint_from_main {
                write!(f, " (disjoint)")?;
            }
        }
        Ok(())
    }
}

/// The outcome of one draw.
///
/// Both sequences are sorted ascending and contain no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    main_numbers: Vec<u8>,
    bonus_numbers: Vec<u8>,
}

impl DrawResult {
    /// Creates a draw result, sorting both sequences ascending.
    #[must_use]
    pub fn new(mut main_numbers: Vec<u8>, mut bonus_numbers: Vec<u8>) -> Self {
        main_numbers.sort_unstable();
        bonus_numbers.sort_unstable();
        Self {
            main_numbers,
            bonus_numbers,
        }
    }

    /// Returns the main numbers in ascending order.
    #[must_use]
    pub fn main_numbers(&self) -> &[u8] {
        &self.main_numbers
    }

    /// Returns the bonus numbers in ascending order.
    #[must_use]
    pub fn bonus_numbers(&self) -> &[u8] {
        &self.bonus_numbers
    }
}
