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

mod engine;
mod error;
mod random;

#[cfg(test)]
mod tests;

use global_lotto_domain::{DrawResult, Rule, RuleCatalog, WishSet};

// Re-export public types and functions
pub use engine::{draw, draw_with};
pub use error::CoreError;
pub use random::{NumberSource, ThreadNumberSource};

/// Looks up a country's rule and draws numbers for it from comma-separated wish input.
///
/// # Arguments
///
/// * `catalog` - The rule catalog
/// * `country_code` - The country to draw for
/// * `wish_input` - Comma-separated wish numbers (may be empty)
///
/// # Errors
///
/// Returns an error if:
/// - The country is not in the catalog
/// - There are more valid wish numbers than main numbers
pub fn draw_for_country(
    catalog: &RuleCatalog,
    country_code: &str,
    wish_input: &str,
) -> Result<DrawResult, CoreError> {
    let rule: &Rule = catalog.get_rule(country_code)?;
    let wishes: WishSet = WishSet::parse(wish_input, rule);
    draw(rule, &wishes)
}
