// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Every other test opens an in-memory store, so connection setup and
//! migrations are exercised implicitly. These tests cover the properties
//! the rest take for granted.

use crate::{Persistence, PersistenceError};
use kickstart_lister_domain::OrgId;

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_key_enforcement_is_verified() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = Persistence::new_in_memory().unwrap();
    let mut db2 = Persistence::new_in_memory().unwrap();

    db1.create_org("Org One").unwrap();

    assert_eq!(db1.list_orgs().unwrap().len(), 1, "db1 should have 1 org");
    assert!(db2.list_orgs().unwrap().is_empty(), "db2 should be isolated");
}

#[test]
fn test_migrations_applied_on_initialization() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    // Every listing table must exist, even when empty
    let org_id: OrgId = OrgId::new(1);
    assert!(persistence.list_kickstarts(org_id).unwrap().is_empty());
    assert!(persistence.list_crypto_keys(org_id).unwrap().is_empty());
    assert!(persistence.list_file_lists(org_id).unwrap().is_empty());
    assert!(persistence.list_activation_keys(org_id).unwrap().is_empty());
}

#[test]
fn test_file_database_persists_across_reopen() {
    let path = std::env::temp_dir().join(format!(
        "kickstart_lister_test_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let mut persistence = Persistence::new_with_file(&path).unwrap();
        persistence.create_org("Persistent Org").unwrap();
    }

    let mut reopened = Persistence::new_with_file(&path).unwrap();
    let orgs = reopened.list_orgs().unwrap();
    assert_eq!(orgs.len(), 1);
    assert_eq!(orgs[0].1, "Persistent Org");

    drop(reopened);
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
}
