// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loading the rule catalog.
//!
//! The builtin catalog is used unless a JSON file is supplied. A file maps
//! country codes to rules:
//!
//! ```json
//! { "KR": { "main_count": 6, "main_max": 45, "bonus_count": 1,
//!           "bonus_max": 45, "bonus_disjoint_from_main": true } }
//! ```
//!
//! Every rule is validated while the file is parsed, so an unsatisfiable
//! rule is reported at load time rather than during a draw.

use global_lotto_domain::RuleCatalog;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Rule catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The catalog file could not be read.
    #[error("Failed to read rule catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The catalog file is not a valid catalog.
    #[error("Invalid rule catalog {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Loads the rule catalog.
///
/// # Arguments
///
/// * `path` - A JSON catalog file, or `None` for the builtin catalog
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or
/// contains a rule no draw could satisfy.
pub fn load_catalog(path: Option<&Path>) -> Result<RuleCatalog, CatalogLoadError> {
    let Some(path) = path else {
        let catalog: RuleCatalog = RuleCatalog::builtin();
        info!(countries = catalog.len(), "Using builtin rule catalog");
        return Ok(catalog);
    };

    let contents: String = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog: RuleCatalog =
        parse_catalog(&contents).map_err(|source| CatalogLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        path = %path.display(),
        countries = catalog.len(),
        "Loaded rule catalog"
    );
    Ok(catalog)
}

/// Parses a JSON rule catalog.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or any rule is invalid.
pub fn parse_catalog(json: &str) -> Result<RuleCatalog, serde_json::Error> {
    serde_json::from_str(json)
}
