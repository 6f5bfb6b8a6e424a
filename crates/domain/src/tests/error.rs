// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidPageSize(0);
    assert_eq!(format!("{err}"), "Invalid page size: 0. Must be at least 1");

    let err: DomainError = DomainError::InvalidLabel {
        field: "label",
        reason: String::from("must not be empty"),
    };
    assert_eq!(format!("{err}"), "Invalid label: must not be empty");

    let err: DomainError = DomainError::InvalidActivationKey(String::from("key must not be empty"));
    assert_eq!(
        format!("{err}"),
        "Invalid activation key: key must not be empty"
    );

    let err: DomainError = DomainError::UnknownCryptoKeyType(String::from("PGP"));
    assert_eq!(
        format!("{err}"),
        "Unknown crypto key type 'PGP'. Expected GPG or SSL"
    );

    let err: DomainError = DomainError::InvalidUsageLimit(-3);
    assert_eq!(format!("{err}"), "Invalid usage limit: -3. Must be positive");
}
