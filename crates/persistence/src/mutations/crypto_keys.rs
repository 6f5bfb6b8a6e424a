// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cryptographic key mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use kickstart_lister_domain::{NewCryptoKey, validate_label};
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::crypto_keys;
use crate::error::PersistenceError;

/// Saves a cryptographic key.
///
/// # Errors
///
/// Returns an error if the description is empty or already used in the
/// org, or the org does not exist.
pub fn create_crypto_key(
    conn: &mut SqliteConnection,
    key: &NewCryptoKey,
) -> Result<i64, PersistenceError> {
    validate_label("key description", &key.description)?;

    diesel::insert_into(crypto_keys::table)
        .values((
            crypto_keys::org_id.eq(key.org_id.value()),
            crypto_keys::description.eq(key.description.trim()),
            crypto_keys::key_type.eq(key.key_type.as_str()),
            crypto_keys::key_material.eq(key.key_material.as_slice()),
        ))
        .execute(conn)?;

    let crypto_key_id: i64 = get_last_insert_rowid(conn)?;
    info!(
        crypto_key_id,
        org_id = key.org_id.value(),
        key_type = key.key_type.as_str(),
        "Saved crypto key"
    );

    Ok(crypto_key_id)
}
