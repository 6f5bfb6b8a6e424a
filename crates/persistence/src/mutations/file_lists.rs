// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! File preservation list mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use kickstart_lister_domain::{NewFileList, validate_label};
use std::collections::BTreeSet;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{file_list_entries, file_lists};
use crate::error::PersistenceError;

/// Saves a file preservation list and its paths.
///
/// Paths are trimmed and de-duplicated; blank paths are rejected.
///
/// # Errors
///
/// Returns an error if the label or a path is empty, the label is already
/// used in the org, or the org does not exist.
pub fn create_file_list(
    conn: &mut SqliteConnection,
    file_list: &NewFileList,
) -> Result<i64, PersistenceError> {
    validate_label("file list label", &file_list.label)?;
    for path in &file_list.files {
        validate_label("file path", path)?;
    }
    let paths: BTreeSet<&str> = file_list.files.iter().map(|p| p.trim()).collect();

    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::insert_into(file_lists::table)
            .values((
                file_lists::org_id.eq(file_list.org_id.value()),
                file_lists::label.eq(file_list.label.trim()),
            ))
            .execute(conn)?;

        let file_list_id: i64 = get_last_insert_rowid(conn)?;

        let entries: Vec<_> = paths
            .iter()
            .map(|path| {
                (
                    file_list_entries::file_list_id.eq(file_list_id),
                    file_list_entries::path.eq(*path),
                )
            })
            .collect();

        if !entries.is_empty() {
            diesel::insert_into(file_list_entries::table)
                .values(entries)
                .execute(conn)?;
        }

        info!(
            file_list_id,
            org_id = file_list.org_id.value(),
            files = paths.len(),
            "Saved file preservation list '{}'",
            file_list.label.trim()
        );

        Ok(file_list_id)
    })
}
