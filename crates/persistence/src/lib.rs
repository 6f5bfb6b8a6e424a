// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record store for the Kickstart Lister.
//!
//! This crate persists organizations and the provisioning records they own:
//! kickstart profiles (and the trees they install from), cryptographic keys,
//! file preservation lists and activation keys. It is built on Diesel and
//! `SQLite`.
//!
//! ## Scoping
//!
//! Every listing query takes an organization id and returns only that
//! organization's rows. Foreign key enforcement is verified when a
//! connection is opened; a store without it refuses to start.
//!
//! ## Databases
//!
//! - `Persistence::new_in_memory()`: a uniquely named shared in-memory
//!   database, used by tests
//! - `Persistence::new_with_file()`: a file database in WAL mode
//!
//! Migrations live in `migrations/` and are embedded at compile time.
//!
//! ## Testing Philosophy
//!
//! - Every test gets its own in-memory database
//! - No test depends on external infrastructure

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
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use kickstart_lister_domain::{
    ActivationKeyDto, CryptoKeyDto, FilePreservationDto, KickstartDto, NewActivationKey,
    NewCryptoKey, NewFileList, NewKickstart, OrgId, UserContext,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use backend::sqlite::JournalMode;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID so that
/// tests running in parallel never share a database.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// `SQLite` record store.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a record store backed by a fresh in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String =
            format!("file:kickstart_lister_mem_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::open(&shared_memory_url, JournalMode::Default)?;

        Ok(Self { conn })
    }

    /// Creates a record store backed by a database file.
    ///
    /// The file is created if missing and migrated to the current schema.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let conn: SqliteConnection = backend::sqlite::open(path_str, JournalMode::Wal)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Organizations, users & trees
    // ========================================================================

    /// Creates an organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or already taken.
    pub fn create_org(&mut self, name: &str) -> Result<OrgId, PersistenceError> {
        mutations::orgs::create_org(&mut self.conn, name)
    }

    /// Returns an organization's name, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_org_name(&mut self, org_id: OrgId) -> Result<Option<String>, PersistenceError> {
        queries::orgs::get_org_name(&mut self.conn, org_id)
    }

    /// Lists all organizations as `(id, name)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_orgs(&mut self) -> Result<Vec<(OrgId, String)>, PersistenceError> {
        queries::orgs::list_orgs(&mut self.conn)
    }

    /// Creates a user in an organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the login is empty or taken, or the org does not exist.
    pub fn create_user(
        &mut self,
        org_id: OrgId,
        login_name: &str,
    ) -> Result<UserContext, PersistenceError> {
        mutations::orgs::create_user(&mut self.conn, org_id, login_name)
    }

    /// Retrieves a user by login name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_user_by_login(
        &mut self,
        login_name: &str,
    ) -> Result<Option<UserContext>, PersistenceError> {
        queries::orgs::get_user_by_login(&mut self.conn, login_name)
    }

    /// Creates a kickstart tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is empty or already taken.
    pub fn create_kickstart_tree(
        &mut self,
        label: &str,
        base_path: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::orgs::create_kickstart_tree(&mut self.conn, label, base_path)
    }

    /// Retrieves the label of a kickstart tree.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the tree does not exist.
    pub fn get_tree_label(&mut self, tree_id: i64) -> Result<String, PersistenceError> {
        queries::orgs::get_tree_label(&mut self.conn, tree_id)
    }

    // ========================================================================
    // Kickstarts
    // ========================================================================

    /// Creates a kickstart profile.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the org or tree does not exist.
    pub fn create_kickstart(&mut self, kickstart: &NewKickstart) -> Result<i64, PersistenceError> {
        mutations::kickstarts::create_kickstart(&mut self.conn, kickstart)
    }

    /// Binds a kickstart to a provisioning profile id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the kickstart does not exist.
    pub fn set_kickstart_cobbler_id(
        &mut self,
        kickstart_id: i64,
        cobbler_id: Option<&str>,
    ) -> Result<(), PersistenceError> {
        mutations::kickstarts::set_kickstart_cobbler_id(&mut self.conn, kickstart_id, cobbler_id)
    }

    /// Lists the kickstarts of an organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_kickstarts(&mut self, org_id: OrgId) -> Result<Vec<KickstartDto>, PersistenceError> {
        queries::kickstarts::list_kickstarts(&mut self.conn, org_id)
    }

    /// Lists the provisioning profile ids bound to an organization's kickstarts.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_cobbler_ids(&mut self, org_id: OrgId) -> Result<Vec<String>, PersistenceError> {
        queries::kickstarts::list_cobbler_ids(&mut self.conn, org_id)
    }

    // ========================================================================
    // Crypto keys & file lists
    // ========================================================================

    /// Saves a cryptographic key.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the org does not exist.
    pub fn create_crypto_key(&mut self, key: &NewCryptoKey) -> Result<i64, PersistenceError> {
        mutations::crypto_keys::create_crypto_key(&mut self.conn, key)
    }

    /// Lists the cryptographic keys of an organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_crypto_keys(&mut self, org_id: OrgId) -> Result<Vec<CryptoKeyDto>, PersistenceError> {
        queries::crypto_keys::list_crypto_keys(&mut self.conn, org_id)
    }

    /// Saves a file preservation list.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the org does not exist.
    pub fn create_file_list(&mut self, file_list: &NewFileList) -> Result<i64, PersistenceError> {
        mutations::file_lists::create_file_list(&mut self.conn, file_list)
    }

    /// Lists the file preservation lists of an organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_file_lists(
        &mut self,
        org_id: OrgId,
    ) -> Result<Vec<FilePreservationDto>, PersistenceError> {
        queries::file_lists::list_file_lists(&mut self.conn, org_id)
    }

    // ========================================================================
    // Activation keys
    // ========================================================================

    /// Creates an activation key.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the token exists, or the org
    /// or user does not exist.
    pub fn create_activation_key(&mut self, key: &NewActivationKey) -> Result<i64, PersistenceError> {
        mutations::activation_keys::create_activation_key(&mut self.conn, key)
    }

    /// Sets or clears the bootstrap flag of an activation key.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the key does not exist.
    pub fn set_activation_key_bootstrap(
        &mut self,
        activation_key_id: i64,
        bootstrap: bool,
    ) -> Result<(), PersistenceError> {
        mutations::activation_keys::set_activation_key_bootstrap(
            &mut self.conn,
            activation_key_id,
            bootstrap,
        )
    }

    /// Disables or re-enables an activation key.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the key does not exist.
    pub fn set_activation_key_disabled(
        &mut self,
        activation_key_id: i64,
        disabled: bool,
    ) -> Result<(), PersistenceError> {
        mutations::activation_keys::set_activation_key_disabled(
            &mut self.conn,
            activation_key_id,
            disabled,
        )
    }

    /// Lists every activation key of an organization, bootstrap keys included.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_activation_keys(
        &mut self,
        org_id: OrgId,
    ) -> Result<Vec<ActivationKeyDto>, PersistenceError> {
        queries::activation_keys::list_activation_keys(&mut self.conn, org_id)
    }

    /// Lists the activation keys of an organization that are not disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_active_activation_keys(
        &mut self,
        org_id: OrgId,
    ) -> Result<Vec<ActivationKeyDto>, PersistenceError> {
        queries::activation_keys::list_active_activation_keys(&mut self.conn, org_id)
    }
}
