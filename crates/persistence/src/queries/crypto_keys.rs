// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cryptographic key queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use kickstart_lister_domain::{CryptoKeyDto, CryptoKeyType, OrgId};
use std::str::FromStr;
use tracing::debug;

use crate::diesel_schema::crypto_keys;
use crate::error::PersistenceError;

/// Diesel Queryable struct for key rows, without the key material.
#[derive(Queryable, Selectable)]
#[diesel(table_name = crypto_keys)]
struct CryptoKeyRow {
    crypto_key_id: i64,
    org_id: i64,
    description: String,
    key_type: String,
}

/// Lists the cryptographic keys of an organization, ordered by description ignoring case.
///
/// # Errors
///
/// Returns an error if the database cannot be queried, or
/// `InvalidRecord` if a stored key type is unknown.
pub fn list_crypto_keys(
    conn: &mut SqliteConnection,
    org_id: OrgId,
) -> Result<Vec<CryptoKeyDto>, PersistenceError> {
    debug!("Listing crypto keys for org {}", org_id);

    let rows: Vec<CryptoKeyRow> = crypto_keys::table
        .filter(crypto_keys::org_id.eq(org_id.value()))
        .order(crypto_keys::description.asc())
        .select(CryptoKeyRow::as_select())
        .load(conn)?;

    rows.into_iter()
        .map(|row| -> Result<CryptoKeyDto, PersistenceError> {
            let key_type: CryptoKeyType = CryptoKeyType::from_str(&row.key_type).map_err(|e| {
                PersistenceError::InvalidRecord(format!("crypto key {}: {e}", row.crypto_key_id))
            })?;
            Ok(CryptoKeyDto {
                id: row.crypto_key_id,
                org_id: OrgId::new(row.org_id),
                description: row.description,
                key_type,
            })
        })
        .collect()
}
