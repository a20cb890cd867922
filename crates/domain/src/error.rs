// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during rule lookup, rule validation, or draw validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The requested country code is not in the catalog.
    UnknownCountry(String),
    /// A country code is empty or contains characters other than ASCII letters and digits.
    InvalidCountryCode(String),
    /// More wish numbers were supplied than the rule draws main numbers.
    TooManyWishNumbers {
        /// The number of distinct valid wish numbers supplied.
        count: usize,
        /// The rule's main-number count.
        max: u8,
    },
    /// A rule cannot be satisfied by any draw.
    ImpossibleRule {
        /// Description of the violated constraint.
        reason: String,
    },
    /// A country code appears more than once in a catalog.
    DuplicateCountry(String),
    /// A catalog was built without any rules.
    EmptyCatalog,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCountry(code) => write!(f, "Unknown country code '{code}'"),
            Self::InvalidCountryCode(code) => write!(f, "Invalid country code '{code}'"),
            Self::TooManyWishNumbers { count, max } => {
                write!(
                    f,
                    "Too many wish numbers: {count} supplied, at most {max} allowed"
                )
            }
            Self::ImpossibleRule { reason } => write!(f, "Impossible rule: {reason}"),
            Self::DuplicateCountry(code) => {
                write!(f, "Country code '{code}' is defined more than once")
            }
            Self::EmptyCatalog => write!(f, "Rule catalog must contain at least one country"),
        }
    }
}

impl std::error::Error for DomainError {}
