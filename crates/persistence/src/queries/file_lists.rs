// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! File preservation list queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use kickstart_lister_domain::{FilePreservationDto, OrgId};
use std::collections::BTreeMap;
use tracing::debug;

use crate::diesel_schema::{file_list_entries, file_lists};
use crate::error::PersistenceError;

/// Lists the file preservation lists of an organization, ordered by label
/// ignoring case.
///
/// Paths for all lists are fetched in a second query and attached in path
/// order.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn list_file_lists(
    conn: &mut SqliteConnection,
    org_id: OrgId,
) -> Result<Vec<FilePreservationDto>, PersistenceError> {
    debug!("Listing file preservation lists for org {}", org_id);

    let lists: Vec<(i64, i64, String)> = file_lists::table
        .filter(file_lists::org_id.eq(org_id.value()))
        .order((file_lists::label.asc(), file_lists::file_list_id.asc()))
        .select((file_lists::file_list_id, file_lists::org_id, file_lists::label))
        .load::<(i64, i64, String)>(conn)?;

    if lists.is_empty() {
        return Ok(Vec::new());
    }

    let list_ids: Vec<i64> = lists.iter().map(|(id, _, _)| *id).collect();
    let entries: Vec<(i64, String)> = file_list_entries::table
        .filter(file_list_entries::file_list_id.eq_any(list_ids))
        .order((file_list_entries::file_list_id.asc(), file_list_entries::path.asc()))
        .select((file_list_entries::file_list_id, file_list_entries::path))
        .load::<(i64, String)>(conn)?;

    let mut paths_by_list: BTreeMap<i64, Vec<String>> = BTreeMap::new();
    for (list_id, path) in entries {
        paths_by_list.entry(list_id).or_default().push(path);
    }

    Ok(lists
        .into_iter()
        .map(|(id, org, label)| FilePreservationDto {
            id,
            org_id: OrgId::new(org),
            label,
            files: paths_by_list.remove(&id).unwrap_or_default(),
        })
        .collect())
}
