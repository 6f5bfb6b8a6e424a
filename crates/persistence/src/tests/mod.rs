// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;

use crate::Persistence;
use kickstart_lister_domain::{CryptoKeyType, NewActivationKey, NewCryptoKey, NewFileList, OrgId};

/// Creates an in-memory store with one organization.
pub fn create_test_store() -> (Persistence, OrgId) {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let org_id: OrgId = persistence.create_org("Test Org").unwrap();
    (persistence, org_id)
}

/// Creates a kickstart tree labelled `label`.
pub fn create_test_tree(persistence: &mut Persistence, label: &str) -> i64 {
    persistence
        .create_kickstart_tree(label, "/var/lib/trees/test")
        .unwrap()
}

pub fn create_test_activation_key(org_id: OrgId, key: &str) -> NewActivationKey {
    NewActivationKey {
        org_id,
        user_id: None,
        key: key.to_string(),
        note: String::new(),
        usage_limit: Some(1),
        org_default: false,
    }
}

pub fn create_test_crypto_key(org_id: OrgId, description: &str) -> NewCryptoKey {
    NewCryptoKey {
        org_id,
        description: description.to_string(),
        key_type: CryptoKeyType::Gpg,
        key_material: b"-----BEGIN PGP PUBLIC KEY BLOCK-----".to_vec(),
    }
}

pub fn create_test_file_list(org_id: OrgId, label: &str, files: &[&str]) -> NewFileList {
    NewFileList {
        org_id,
        label: label.to_string(),
        files: files.iter().map(|f| (*f).to_string()).collect(),
    }
}
