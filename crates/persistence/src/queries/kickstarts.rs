// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Kickstart profile queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use kickstart_lister_domain::{KickstartDto, OrgId};
use tracing::debug;

use crate::diesel_schema::{kickstart_trees, kickstarts};
use crate::error::PersistenceError;

type KickstartRow = (i64, i64, String, String, i32, i32, i32, Option<String>);

/// Lists the kickstarts of an organization, ordered by label ignoring case.
///
/// The tree label is joined in from `kickstart_trees`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `org_id` - The owning organization
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn list_kickstarts(
    conn: &mut SqliteConnection,
    org_id: OrgId,
) -> Result<Vec<KickstartDto>, PersistenceError> {
    debug!("Listing kickstarts for org {}", org_id);

    let rows: Vec<KickstartRow> = kickstarts::table
        .inner_join(kickstart_trees::table)
        .filter(kickstarts::org_id.eq(org_id.value()))
        .order((kickstarts::label.asc(), kickstarts::kickstart_id.asc()))
        .select((
            kickstarts::kickstart_id,
            kickstarts::org_id,
            kickstarts::label,
            kickstart_trees::label,
            kickstarts::is_org_default,
            kickstarts::is_active,
            kickstarts::advanced_mode,
            kickstarts::cobbler_id,
        ))
        .load::<KickstartRow>(conn)?;

    Ok(rows
        .into_iter()
        .map(
            |(id, org, label, tree_label, is_default, is_active, advanced, cobbler_id)| {
                KickstartDto {
                    id,
                    org_id: OrgId::new(org),
                    label,
                    tree_label,
                    org_default: is_default != 0,
                    active: is_active != 0,
                    advanced_mode: advanced != 0,
                    cobbler_id,
                }
            },
        )
        .collect())
}

/// Lists the provisioning profile ids bound to kickstarts of an organization.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn list_cobbler_ids(
    conn: &mut SqliteConnection,
    org_id: OrgId,
) -> Result<Vec<String>, PersistenceError> {
    let ids: Vec<Option<String>> = kickstarts::table
        .filter(kickstarts::org_id.eq(org_id.value()))
        .filter(kickstarts::cobbler_id.is_not_null())
        .select(kickstarts::cobbler_id)
        .order(kickstarts::cobbler_id.asc())
        .load::<Option<String>>(conn)?;

    Ok(ids.into_iter().flatten().collect())
}
