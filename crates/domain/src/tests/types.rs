// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CryptoKeyType, DomainError, NewActivationKey, OrgId, normalize_activation_key, validate_label,
};
use std::str::FromStr;

fn create_test_key(usage_limit: Option<i64>) -> NewActivationKey {
    NewActivationKey {
        org_id: OrgId::new(7),
        user_id: None,
        key: String::from("ak-test"),
        note: String::new(),
        usage_limit,
        org_default: false,
    }
}

#[test]
fn test_org_id_display_and_value() {
    let org_id: OrgId = OrgId::new(42);
    assert_eq!(org_id.value(), 42);
    assert_eq!(org_id.to_string(), "42");
}

#[test]
fn test_crypto_key_type_round_trips_through_str() {
    assert_eq!(CryptoKeyType::from_str("GPG").unwrap(), CryptoKeyType::Gpg);
    assert_eq!(CryptoKeyType::from_str("SSL").unwrap(), CryptoKeyType::Ssl);
    assert_eq!(CryptoKeyType::Gpg.as_str(), "GPG");
    assert_eq!(CryptoKeyType::Ssl.to_string(), "SSL");
}

#[test]
fn test_crypto_key_type_rejects_unknown_value() {
    let result = CryptoKeyType::from_str("gpg");
    assert_eq!(
        result,
        Err(DomainError::UnknownCryptoKeyType(String::from("gpg")))
    );
}

#[test]
fn test_validate_label_rejects_blank() {
    assert!(validate_label("label", "ks-rhel").is_ok());
    assert!(matches!(
        validate_label("label", "   "),
        Err(DomainError::InvalidLabel { field: "label", .. })
    ));
}

#[test]
fn test_normalize_activation_key_adds_org_prefix() {
    let token: String = normalize_activation_key(OrgId::new(7), "  ak-web ").unwrap();
    assert_eq!(token, "7-ak-web");
}

#[test]
fn test_normalize_activation_key_keeps_existing_prefix() {
    let token: String = normalize_activation_key(OrgId::new(7), "7-ak-web").unwrap();
    assert_eq!(token, "7-ak-web");

    // A prefix for another org is part of the key itself.
    let token: String = normalize_activation_key(OrgId::new(7), "8-ak-web").unwrap();
    assert_eq!(token, "7-8-ak-web");
}

#[test]
fn test_normalize_activation_key_rejects_empty() {
    assert!(matches!(
        normalize_activation_key(OrgId::new(1), " "),
        Err(DomainError::InvalidActivationKey(_))
    ));
}

#[test]
fn test_usage_limit_validation() {
    assert!(create_test_key(None).validate_usage_limit().is_ok());
    assert!(create_test_key(Some(1)).validate_usage_limit().is_ok());
    assert_eq!(
        create_test_key(Some(0)).validate_usage_limit(),
        Err(DomainError::InvalidUsageLimit(0))
    );
}
