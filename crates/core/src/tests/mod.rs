// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod pagination_tests;

use crate::{KickstartLister, ListerConfig, RecordStore};
use kickstart_lister_domain::{
    ActivationKeyDto, CryptoKeyDto, CryptoKeyType, FilePreservationDto, KickstartDto,
    NewActivationKey, NewCryptoKey, NewFileList, NewKickstart, OrgId, UserContext,
};
use kickstart_lister_persistence::{Persistence, PersistenceError};
use kickstart_lister_provisioning::{
    CobblerConnection, Distro, InMemoryCobbler, NewDistro, Profile, ProvisioningBackend,
    ProvisioningError,
};
use std::collections::BTreeMap;

pub type TestLister = KickstartLister<Persistence, InMemoryCobbler>;

/// Builds a lister over a fresh in-memory store and backend, with one
/// organization and one user named `test`.
pub fn create_test_lister() -> (TestLister, UserContext) {
    create_test_lister_with_config(ListerConfig::default())
}

pub fn create_test_lister_with_config(config: ListerConfig) -> (TestLister, UserContext) {
    let mut store = Persistence::new_in_memory().unwrap();
    let org_id: OrgId = store.create_org("Test Org").unwrap();
    let user: UserContext = store.create_user(org_id, "test").unwrap();
    let lister = KickstartLister::new(store, InMemoryCobbler::new(), config).unwrap();
    (lister, user)
}

/// Creates a tree and a kickstart on it, returning the kickstart id.
pub fn create_test_kickstart(lister: &mut TestLister, org_id: OrgId, label: &str) -> i64 {
    let store = lister.store_mut();
    let tree_label: String = format!("tree-{label}");
    let tree_id: i64 = store
        .create_kickstart_tree(&tree_label, "/var/lib/trees/test")
        .unwrap();
    store
        .create_kickstart(&NewKickstart::new(org_id, label, tree_id))
        .unwrap()
}

pub fn create_test_crypto_key(lister: &mut TestLister, org_id: OrgId, description: &str) -> i64 {
    lister
        .store_mut()
        .create_crypto_key(&NewCryptoKey {
            org_id,
            description: description.to_string(),
            key_type: CryptoKeyType::Gpg,
            key_material: b"-----BEGIN PGP PUBLIC KEY BLOCK-----".to_vec(),
        })
        .unwrap()
}

pub fn create_test_file_list(lister: &mut TestLister, org_id: OrgId, label: &str) -> i64 {
    lister
        .store_mut()
        .create_file_list(&NewFileList {
            org_id,
            label: label.to_string(),
            files: vec![String::from("/etc/hosts"), String::from("/etc/motd")],
        })
        .unwrap()
}

pub fn create_test_activation_key(lister: &mut TestLister, org_id: OrgId, key: &str) -> i64 {
    lister
        .store_mut()
        .create_activation_key(&NewActivationKey {
            org_id,
            user_id: None,
            key: key.to_string(),
            note: String::from("test key"),
            usage_limit: Some(1),
            org_default: false,
        })
        .unwrap()
}

/// Creates a provisioning profile on a distro named after it.
pub fn create_test_profile(lister: &TestLister, name: &str) -> Profile {
    let backend: &InMemoryCobbler = lister.provisioning();
    let conn = backend.connect("admin").unwrap();
    let distro: Distro = Distro::builder()
        .name(&format!("{name}-distro"))
        .kernel("test-kernel")
        .initrd("test-initrd")
        .ks_meta(BTreeMap::new())
        .build(backend, &conn)
        .unwrap();
    let profile: Profile = backend.create_profile(&conn, name, &distro).unwrap();
    backend.disconnect(&conn).unwrap();
    profile
}

/// A record store whose every query fails.
#[derive(Debug, Default)]
pub struct FailingStore;

impl FailingStore {
    fn failure() -> PersistenceError {
        PersistenceError::QueryFailed(String::from("database is locked"))
    }
}

impl RecordStore for FailingStore {
    type Error = PersistenceError;

    fn kickstarts(&mut self, _org: OrgId) -> Result<Vec<KickstartDto>, Self::Error> {
        Err(Self::failure())
    }

    fn crypto_keys(&mut self, _org: OrgId) -> Result<Vec<CryptoKeyDto>, Self::Error> {
        Err(Self::failure())
    }

    fn file_lists(&mut self, _org: OrgId) -> Result<Vec<FilePreservationDto>, Self::Error> {
        Err(Self::failure())
    }

    fn activation_keys(&mut self, _org: OrgId) -> Result<Vec<ActivationKeyDto>, Self::Error> {
        Err(Self::failure())
    }

    fn active_activation_keys(
        &mut self,
        _org: OrgId,
    ) -> Result<Vec<ActivationKeyDto>, Self::Error> {
        Err(Self::failure())
    }

    fn cobbler_ids(&mut self, _org: OrgId) -> Result<Vec<String>, Self::Error> {
        Err(Self::failure())
    }
}

/// A provisioning backend that opens sessions but fails every listing.
#[derive(Debug, Default)]
pub struct UnlistableBackend {
    pub inner: InMemoryCobbler,
}

impl ProvisioningBackend for UnlistableBackend {
    fn connect(&self, login: &str) -> Result<CobblerConnection, ProvisioningError> {
        self.inner.connect(login)
    }

    fn disconnect(&self, conn: &CobblerConnection) -> Result<(), ProvisioningError> {
        self.inner.disconnect(conn)
    }

    fn list_profiles(&self, _conn: &CobblerConnection) -> Result<Vec<Profile>, ProvisioningError> {
        Err(ProvisioningError::Unavailable(String::from("listing timed out")))
    }

    fn create_distro(
        &self,
        conn: &CobblerConnection,
        distro: NewDistro,
    ) -> Result<Distro, ProvisioningError> {
        self.inner.create_distro(conn, distro)
    }

    fn create_profile(
        &self,
        conn: &CobblerConnection,
        name: &str,
        distro: &Distro,
    ) -> Result<Profile, ProvisioningError> {
        self.inner.create_profile(conn, name, distro)
    }

    fn delete_profile(&self, conn: &CobblerConnection, name: &str) -> Result<(), ProvisioningError> {
        self.inner.delete_profile(conn, name)
    }

    fn delete_distro(&self, conn: &CobblerConnection, name: &str) -> Result<(), ProvisioningError> {
        self.inner.delete_distro(conn, name)
    }
}
