// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The rule catalog: a read-only mapping from country code to drawing rule.
//!
//! ## Builtin Formats
//!
//! | Code | Main    | Bonus   | Bonus avoids main |
//! |------|---------|---------|-------------------|
//! | KR   | 6 of 45 | 1 of 45 | yes               |
//! | US   | 5 of 69 | 1 of 26 | no                |
//! | JP   | 7 of 37 | none    | no                |
//! | EU   | 5 of 50 | 2 of 12 | no                |
//!
//! ## Invariants
//!
//! - Every rule in a catalog has passed [`crate::validate_rule`]
//! - Country codes are unique
//! - A catalog holds at least one rule

use crate::error::DomainError;
use crate::types::{CountryCode, Rule};
use crate::validation::validate_rule;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Builtin formats as (code, `main_count`, `main_max`, `bonus_count`, `bonus_max`, disjoint).
const BUILTIN_RULES: [(&str, u8, u8, u8, u8, bool); 4] = [
    ("KR", 6, 45, 1, 45, true),
    ("US", 5, 69, 1, 26, false),
    ("JP", 7, 37, 0, 0, false),
    ("EU", 5, 50, 2, 12, false),
];

/// A read-only lookup from country code to drawing rule.
///
/// Entries keep the order in which they were supplied. In JSON a catalog is
/// an object mapping country codes to rules, read and written in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCatalog {
    entries: Vec<(CountryCode, Rule)>,
}

impl RuleCatalog {
    /// Creates a catalog from `(code, rule)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No entries are supplied
    /// - A country code appears more than once
    pub fn new<I>(entries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (CountryCode, Rule)>,
    {
        let mut collected: Vec<(CountryCode, Rule)> = Vec::new();
        for (code, rule) in entries {
            if collected.iter().any(|(existing, _)| existing == &code) {
                return Err(DomainError::DuplicateCountry(code.to_string()));
            }
            collected.push((code, rule));
        }

        if collected.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }

        Ok(Self { entries: collected })
    }

    /// Returns the builtin catalog of real-world lottery formats.
    #[must_use]
    pub fn builtin() -> Self {
        let entries: Vec<(CountryCode, Rule)> = BUILTIN_RULES
            .iter()
            .map(
                |&(code, main_count, main_max, bonus_count, bonus_max, disjoint)| {
                    (
                        CountryCode::new_unchecked(code),
                        Rule::new_unchecked(main_count, main_max, bonus_count, bonus_max, disjoint),
                    )
                },
            )
            .collect();
        debug_assert!(
            entries.iter().all(|(_, rule)| validate_rule(rule).is_ok()),
            "builtin rule table holds an impossible rule"
        );
        Self { entries }
    }

    /// Looks up the rule for a country code.
    ///
    /// The code is matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownCountry` if the code is not in the catalog
    /// (including codes that are not well-formed).
    pub fn get_rule(&self, country_code: &str) -> Result<&Rule, DomainError> {
        let unknown = || DomainError::UnknownCountry(country_code.trim().to_string());
        let code: CountryCode = CountryCode::parse(country_code).map_err(|_| unknown())?;
        self.entries
            .iter()
            .find(|(existing, _)| existing == &code)
            .map(|(_, rule)| rule)
            .ok_or_else(unknown)
    }

    /// Returns whether the catalog has a rule for `code`.
    #[must_use]
    pub fn contains(&self, code: &CountryCode) -> bool {
        self.entries.iter().any(|(existing, _)| existing == code)
    }

    /// Iterates over the country codes in catalog order.
    pub fn countries(&self) -> impl Iterator<Item = &CountryCode> {
        self.entries.iter().map(|(code, _)| code)
    }

    /// Iterates over `(code, rule)` pairs in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (&CountryCode, &Rule)> {
        self.entries.iter().map(|(code, rule)| (code, rule))
    }

    /// Returns the number of countries in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a catalog holds at least one rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Serialize for RuleCatalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (code, rule) in &self.entries {
            map.serialize_entry(code, rule)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RuleCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// Collects catalog entries in file order, repeated codes included.
struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = RuleCatalog;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from country code to rule")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries: Vec<(CountryCode, Rule)> =
            Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((code, rule)) = access.next_entry::<CountryCode, Rule>()? {
            entries.push((code, rule));
        }
        RuleCatalog::new(entries).map_err(serde::de::Error::custom)
    }
}
