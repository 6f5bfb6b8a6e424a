// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Organization, user and kickstart tree lookups.

use diesel::prelude::*;
use diesel::SqliteConnection;
use kickstart_lister_domain::{OrgId, UserContext};
use tracing::debug;

use crate::diesel_schema::{kickstart_trees, orgs, users};
use crate::error::PersistenceError;

/// Returns the name of an organization, or `None` if it does not exist.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_org_name(
    conn: &mut SqliteConnection,
    org_id: OrgId,
) -> Result<Option<String>, PersistenceError> {
    debug!("Looking up org {}", org_id);

    let name: Option<String> = orgs::table
        .filter(orgs::org_id.eq(org_id.value()))
        .select(orgs::name)
        .first::<String>(conn)
        .optional()?;

    Ok(name)
}

/// Lists all organizations as `(id, name)` pairs, ordered by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_orgs(conn: &mut SqliteConnection) -> Result<Vec<(OrgId, String)>, PersistenceError> {
    let rows = orgs::table
        .select((orgs::org_id, orgs::name))
        .order(orgs::org_id.asc())
        .load::<(i64, String)>(conn)?;

    Ok(rows
        .into_iter()
        .map(|(id, name)| (OrgId::new(id), name))
        .collect())
}

/// Retrieves a user by login name.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no user has this login.
pub fn get_user_by_login(
    conn: &mut SqliteConnection,
    login_name: &str,
) -> Result<Option<UserContext>, PersistenceError> {
    debug!("Looking up user by login_name: {}", login_name);

    let row: Option<(i64, i64, String)> = users::table
        .filter(users::login_name.eq(login_name))
        .select((users::user_id, users::org_id, users::login_name))
        .first::<(i64, i64, String)>(conn)
        .optional()?;

    Ok(row.map(|(user_id, org_id, login)| UserContext::new(user_id, OrgId::new(org_id), &login)))
}

/// Retrieves the label of a kickstart tree.
///
/// # Errors
///
/// Returns `NotFound` if the tree does not exist.
pub fn get_tree_label(conn: &mut SqliteConnection, tree_id: i64) -> Result<String, PersistenceError> {
    kickstart_trees::table
        .filter(kickstart_trees::tree_id.eq(tree_id))
        .select(kickstart_trees::label)
        .first::<String>(conn)
        .optional()?
        .ok_or_else(|| PersistenceError::NotFound(format!("Kickstart tree {tree_id}")))
}
