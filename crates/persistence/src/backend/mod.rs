// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! The record store runs on `SQLite` only. Everything that cannot be written
//! in Diesel DSL (PRAGMA statements, `last_insert_rowid()`) is confined to
//! the `sqlite` module; queries and mutations stay in Diesel DSL.

pub mod sqlite;
