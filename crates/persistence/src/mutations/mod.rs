// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules for the record store.
//!
//! Records are created by the surrounding application; the listing facade
//! never writes. These mutations exist so that the application (and test
//! setup) can populate the store with the same rules the application
//! enforces: non-empty labels, org-prefixed activation key tokens, and at
//! most one org default per entity type.

pub mod activation_keys;
pub mod crypto_keys;
pub mod file_lists;
pub mod kickstarts;
pub mod orgs;
