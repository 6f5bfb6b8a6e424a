// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Organization, user and kickstart tree mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use kickstart_lister_domain::{OrgId, UserContext, validate_label};
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{kickstart_trees, orgs, users};
use crate::error::PersistenceError;

/// Creates a new organization.
///
/// # Errors
///
/// Returns an error if the name is empty or already taken.
pub fn create_org(conn: &mut SqliteConnection, name: &str) -> Result<OrgId, PersistenceError> {
    validate_label("org name", name)?;

    diesel::insert_into(orgs::table)
        .values(orgs::name.eq(name.trim()))
        .execute(conn)?;

    let org_id: OrgId = OrgId::new(get_last_insert_rowid(conn)?);
    info!(org_id = org_id.value(), "Created org '{}'", name.trim());

    Ok(org_id)
}

/// Creates a user in an organization.
///
/// # Errors
///
/// Returns an error if the login is empty or taken, or the org does not exist.
pub fn create_user(
    conn: &mut SqliteConnection,
    org_id: OrgId,
    login_name: &str,
) -> Result<UserContext, PersistenceError> {
    validate_label("login name", login_name)?;
    let login: &str = login_name.trim();

    diesel::insert_into(users::table)
        .values((users::org_id.eq(org_id.value()), users::login_name.eq(login)))
        .execute(conn)?;

    let user_id: i64 = get_last_insert_rowid(conn)?;
    info!(user_id, org_id = org_id.value(), "Created user '{}'", login);

    Ok(UserContext::new(user_id, org_id, login))
}

/// Creates a kickstart tree. Trees are shared across organizations.
///
/// # Errors
///
/// Returns an error if the label is empty or already taken.
pub fn create_kickstart_tree(
    conn: &mut SqliteConnection,
    label: &str,
    base_path: &str,
) -> Result<i64, PersistenceError> {
    validate_label("tree label", label)?;

    diesel::insert_into(kickstart_trees::table)
        .values((
            kickstart_trees::label.eq(label.trim()),
            kickstart_trees::base_path.eq(base_path),
        ))
        .execute(conn)?;

    let tree_id: i64 = get_last_insert_rowid(conn)?;
    info!(tree_id, "Created kickstart tree '{}'", label.trim());

    Ok(tree_id)
}
