// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Kickstart profile mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use kickstart_lister_domain::{NewKickstart, validate_label};
use tracing::{debug, info};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::kickstarts;
use crate::error::PersistenceError;

/// Creates a kickstart profile.
///
/// When `org_default` is set, the default flag is cleared on every other
/// kickstart of the organization in the same transaction.
///
/// # Errors
///
/// Returns an error if the label is empty, already used in the org, or the
/// org or tree does not exist.
pub fn create_kickstart(
    conn: &mut SqliteConnection,
    kickstart: &NewKickstart,
) -> Result<i64, PersistenceError> {
    validate_label("kickstart label", &kickstart.label)?;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        if kickstart.org_default {
            let cleared: usize = diesel::update(
                kickstarts::table.filter(kickstarts::org_id.eq(kickstart.org_id.value())),
            )
            .set(kickstarts::is_org_default.eq(0))
            .execute(conn)?;
            debug!(cleared, "Cleared previous default kickstarts");
        }

        diesel::insert_into(kickstarts::table)
            .values((
                kickstarts::org_id.eq(kickstart.org_id.value()),
                kickstarts::label.eq(kickstart.label.trim()),
                kickstarts::tree_id.eq(kickstart.tree_id),
                kickstarts::is_org_default.eq(i32::from(kickstart.org_default)),
                kickstarts::is_active.eq(i32::from(kickstart.active)),
                kickstarts::advanced_mode.eq(i32::from(kickstart.advanced_mode)),
                kickstarts::cobbler_id.eq(kickstart.cobbler_id.as_deref()),
            ))
            .execute(conn)?;

        let kickstart_id: i64 = get_last_insert_rowid(conn)?;
        info!(
            kickstart_id,
            org_id = kickstart.org_id.value(),
            "Created kickstart '{}'",
            kickstart.label.trim()
        );

        Ok(kickstart_id)
    })
}

/// Binds a kickstart to a provisioning profile id, or unbinds it with `None`.
///
/// # Errors
///
/// Returns `NotFound` if the kickstart does not exist.
pub fn set_kickstart_cobbler_id(
    conn: &mut SqliteConnection,
    kickstart_id: i64,
    cobbler_id: Option<&str>,
) -> Result<(), PersistenceError> {
    let updated: usize =
        diesel::update(kickstarts::table.filter(kickstarts::kickstart_id.eq(kickstart_id)))
            .set(kickstarts::cobbler_id.eq(cobbler_id))
            .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Kickstart {kickstart_id}")));
    }

    debug!(kickstart_id, ?cobbler_id, "Updated kickstart provisioning id");
    Ok(())
}
