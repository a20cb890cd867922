// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use global_lotto_domain::{CountryCode, DrawResult, Rule, RuleCatalog, WishSet};

/// Public description of one country's drawing rule.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RuleInfo {
    /// The normalized country code.
    pub country: String,
    /// How many main numbers a draw produces.
    pub main_count: u8,
    /// The largest main number.
    pub main_max: u8,
    /// How many bonus numbers a draw produces.
    pub bonus_count: u8,
    /// The largest bonus number (0 when no bonus numbers are drawn).
    pub bonus_max: u8,
    /// Whether bonus numbers must differ from every main number.
    pub bonus_disjoint_from_main: bool,
}

impl RuleInfo {
    /// Describes a catalog entry.
    #[must_use]
    pub fn new(country: &CountryCode, rule: &Rule) -> Self {
        Self {
            country: country.to_string(),
            main_count: rule.main_count(),
            main_max: rule.main_max(),
            bonus_count: rule.bonus_count(),
            bonus_max: rule.bonus_max(),
            bonus_disjoint_from_main: rule.bonus_disjoint_from_main(),
        }
    }
}

/// API response listing every supported country.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListCountriesResponse {
    /// The supported countries in catalog order.
    pub countries: Vec<RuleInfo>,
}

impl ListCountriesResponse {
    /// Lists every entry of a catalog.
    #[must_use]
    pub fn from_catalog(catalog: &RuleCatalog) -> Self {
        Self {
            countries: catalog
                .entries()
                .map(|(code, rule)| RuleInfo::new(code, rule))
                .collect(),
        }
    }
}

/// API request to look up one country's rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRuleRequest {
    /// The country code (case-insensitive).
    pub country: String,
}

/// Wish numbers as supplied by a client.
///
/// Accepts either the text typed into a wish field (`"7, 14"`) or a
/// JSON array of integers (`[7, 14]`).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum WishInput {
    /// Comma-separated wish numbers.
    Text(String),
    /// Individual wish numbers.
    Numbers(Vec<i64>),
}

impl WishInput {
    /// Normalizes this input against a rule.
    #[must_use]
    pub fn normalize(&self, rule: &Rule) -> WishSet {
        match self {
            Self::Text(text) => WishSet::parse(text, rule),
            Self::Numbers(numbers) => WishSet::from_numbers(numbers.iter().copied(), rule),
        }
    }
}

/// API request to draw numbers for a country.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DrawRequest {
    /// The country code (case-insensitive).
    pub country: String,
    /// Optional wish numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wishes: Option<WishInput>,
}

/// API response for a successful draw.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DrawResponse {
    /// The normalized country code.
    pub country: String,
    /// The wish numbers that were applied, after normalization.
    pub wish_numbers: Vec<u8>,
    /// The main numbers in ascending order.
    pub main_numbers: Vec<u8>,
    /// The bonus numbers in ascending order (empty if the rule has none).
    pub bonus_numbers: Vec<u8>,
}

impl DrawResponse {
    /// Builds a response from a completed draw.
    #[must_use]
    pub fn new(country: &CountryCode, wishes: &WishSet, result: &DrawResult) -> Self {
        Self {
            country: country.to_string(),
            wish_numbers: wishes.iter().collect(),
            main_numbers: result.main_numbers().to_vec(),
            bonus_numbers: result.bonus_numbers().to_vec(),
        }
    }
}
