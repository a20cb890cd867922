// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::CoreError;
use global_lotto_domain::DomainError;

#[test]
fn test_core_error_wraps_domain_error() {
    let err: CoreError = CoreError::from(DomainError::UnknownCountry(String::from("xx")));
    assert_eq!(
        err,
        CoreError::DomainViolation(DomainError::UnknownCountry(String::from("xx")))
    );
}

#[test]
fn test_core_error_display() {
    let err: CoreError = CoreError::DomainViolation(DomainError::TooManyWishNumbers {
        count: 8,
        max: 7,
    });
    assert_eq!(
        format!("{err}"),
        "Domain violation: Too many wish numbers: 8 supplied, at most 7 allowed"
    );
}
