// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod error;
mod types;
mod validation;
mod wish;

#[cfg(test)]
mod tests;

pub use catalog::RuleCatalog;
pub use error::DomainError;
pub use types::{CountryCode, DrawResult, Rule};
pub use validation::{validate_rule, validate_wish_count};
pub use wish::WishSet;
