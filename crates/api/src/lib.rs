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
    clippy::all
)]

mod catalog_source;
mod error;
mod request_response;

#[cfg(test)]
mod tests;

use global_lotto::{NumberSource, ThreadNumberSource, draw_with};
use global_lotto_domain::{CountryCode, DrawResult, Rule, RuleCatalog, WishSet};
use tracing::{info, warn};

pub use catalog_source::{CatalogLoadError, load_catalog, parse_catalog};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use request_response::{
    DrawRequest, DrawResponse, GetRuleRequest, ListCountriesResponse, RuleInfo, WishInput,
};

/// Lists every country in the catalog with its rule.
#[must_use]
pub fn list_countries(catalog: &RuleCatalog) -> ListCountriesResponse {
    ListCountriesResponse::from_catalog(catalog)
}

/// Looks up one country's rule.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the country is not in the catalog.
pub fn get_rule(catalog: &RuleCatalog, request: &GetRuleRequest) -> Result<RuleInfo, ApiError> {
    let (code, rule): (CountryCode, &Rule) = resolve_country(catalog, &request.country)?;
    Ok(RuleInfo::new(&code, rule))
}

/// Draws numbers for a country using the thread-local generator.
///
/// # Errors
///
/// Returns an error if:
/// - The country is not in the catalog
/// - More valid wish numbers were supplied than the rule draws
pub fn draw_numbers(catalog: &RuleCatalog, request: &DrawRequest) -> Result<DrawResponse, ApiError> {
    draw_numbers_with(catalog, request, &mut ThreadNumberSource)
}

/// Draws numbers for a country using the given number source.
///
/// # Errors
///
/// Returns an error if:
/// - The country is not in the catalog
/// - More valid wish numbers were supplied than the rule draws
pub fn draw_numbers_with<S>(
    catalog: &RuleCatalog,
    request: &DrawRequest,
    source: &mut S,
) -> Result<DrawResponse, ApiError>
where
    S: NumberSource + ?Sized,
{
    let (code, rule): (CountryCode, &Rule) = resolve_country(catalog, &request.country)?;
    let wishes: WishSet = request
        .wishes
        .as_ref()
        .map_or_else(WishSet::empty, |input| input.normalize(rule));

    let result: DrawResult = draw_with(rule, &wishes, source).inspect_err(|err| {
        warn!(country = %code, error = %err, "Draw rejected");
    })?;

    info!(country = %code, wishes = wishes.len(), "Draw completed");
    Ok(DrawResponse::new(&code, &wishes, &result))
}

/// Resolves a raw country code to its normalized code and rule.
fn resolve_country<'a>(
    catalog: &'a RuleCatalog,
    country: &str,
) -> Result<(CountryCode, &'a Rule), ApiError> {
    let rule: &Rule = catalog.get_rule(country)?;
    let code: CountryCode = CountryCode::parse(country)?;
    Ok((code, rule))
}
