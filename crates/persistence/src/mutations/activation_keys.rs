// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Activation key mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use kickstart_lister_domain::{
    ACTIVATION_KEY_BOOTSTRAP_FLAG, NewActivationKey, normalize_activation_key,
};
use tracing::{debug, info};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::activation_keys;
use crate::error::PersistenceError;

/// Creates an activation key.
///
/// The key is stored as an org-prefixed token. When `org_default` is set,
/// the default flag is cleared on every other key of the organization in the
/// same transaction.
///
/// # Errors
///
/// Returns an error if the key is empty, the usage limit is not positive,
/// the token already exists, or the org or user does not exist.
pub fn create_activation_key(
    conn: &mut SqliteConnection,
    key: &NewActivationKey,
) -> Result<i64, PersistenceError> {
    key.validate_usage_limit()?;
    let token: String = normalize_activation_key(key.org_id, &key.key)?;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        if key.org_default {
            let cleared: usize = diesel::update(
                activation_keys::table.filter(activation_keys::org_id.eq(key.org_id.value())),
            )
            .set(activation_keys::is_org_default.eq(0))
            .execute(conn)?;
            debug!(cleared, "Cleared previous default activation keys");
        }

        diesel::insert_into(activation_keys::table)
            .values((
                activation_keys::org_id.eq(key.org_id.value()),
                activation_keys::user_id.eq(key.user_id),
                activation_keys::token.eq(&token),
                activation_keys::note.eq(&key.note),
                activation_keys::usage_limit.eq(key.usage_limit),
                activation_keys::is_org_default.eq(i32::from(key.org_default)),
            ))
            .execute(conn)?;

        let activation_key_id: i64 = get_last_insert_rowid(conn)?;
        info!(
            activation_key_id,
            org_id = key.org_id.value(),
            "Created activation key '{}'",
            token
        );

        Ok(activation_key_id)
    })
}

/// Sets or clears the bootstrap flag of an activation key.
///
/// # Errors
///
/// Returns `NotFound` if the key does not exist.
pub fn set_activation_key_bootstrap(
    conn: &mut SqliteConnection,
    activation_key_id: i64,
    bootstrap: bool,
) -> Result<(), PersistenceError> {
    let flag: &str = if bootstrap {
        ACTIVATION_KEY_BOOTSTRAP_FLAG
    } else {
        "N"
    };

    let updated: usize = diesel::update(
        activation_keys::table.filter(activation_keys::activation_key_id.eq(activation_key_id)),
    )
    .set(activation_keys::bootstrap.eq(flag))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Activation key {activation_key_id}"
        )));
    }

    info!(activation_key_id, bootstrap, "Updated activation key bootstrap flag");
    Ok(())
}

/// Disables or re-enables an activation key.
///
/// # Errors
///
/// Returns `NotFound` if the key does not exist.
pub fn set_activation_key_disabled(
    conn: &mut SqliteConnection,
    activation_key_id: i64,
    disabled: bool,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(
        activation_keys::table.filter(activation_keys::activation_key_id.eq(activation_key_id)),
    )
    .set(activation_keys::is_disabled.eq(i32::from(disabled)))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Activation key {activation_key_id}"
        )));
    }

    info!(activation_key_id, disabled, "Updated activation key status");
    Ok(())
}
