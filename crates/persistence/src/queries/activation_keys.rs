// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Activation key queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use kickstart_lister_domain::{ActivationKeyDto, OrgId};
use tracing::debug;

use crate::diesel_schema::activation_keys;
use crate::error::PersistenceError;

/// Diesel Queryable struct for activation key rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = activation_keys)]
struct ActivationKeyRow {
    activation_key_id: i64,
    org_id: i64,
    user_id: Option<i64>,
    token: String,
    note: String,
    usage_limit: Option<i64>,
    is_disabled: i32,
    is_org_default: i32,
    bootstrap: String,
}

impl From<ActivationKeyRow> for ActivationKeyDto {
    fn from(row: ActivationKeyRow) -> Self {
        Self {
            id: row.activation_key_id,
            org_id: OrgId::new(row.org_id),
            user_id: row.user_id,
            token: row.token,
            note: row.note,
            usage_limit: row.usage_limit,
            active: row.is_disabled == 0,
            org_default: row.is_org_default != 0,
            bootstrap: row.bootstrap,
        }
    }
}

/// Lists every activation key of an organization, ordered by token.
///
/// Bootstrap keys are included; excluding them is the caller's concern.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn list_activation_keys(
    conn: &mut SqliteConnection,
    org_id: OrgId,
) -> Result<Vec<ActivationKeyDto>, PersistenceError> {
    debug!("Listing activation keys for org {}", org_id);

    let rows: Vec<ActivationKeyRow> = activation_keys::table
        .filter(activation_keys::org_id.eq(org_id.value()))
        .order(activation_keys::token.asc())
        .select(ActivationKeyRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(ActivationKeyDto::from).collect())
}

/// Lists the activation keys of an organization that are not disabled.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn list_active_activation_keys(
    conn: &mut SqliteConnection,
    org_id: OrgId,
) -> Result<Vec<ActivationKeyDto>, PersistenceError> {
    debug!("Listing active activation keys for org {}", org_id);

    let rows: Vec<ActivationKeyRow> = activation_keys::table
        .filter(activation_keys::org_id.eq(org_id.value()))
        .filter(activation_keys::is_disabled.eq(0))
        .order(activation_keys::token.asc())
        .select(ActivationKeyRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(ActivationKeyDto::from).collect())
}
