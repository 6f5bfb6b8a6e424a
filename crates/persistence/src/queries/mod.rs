// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for the record store.
//!
//! This module contains all read-only queries. Every listing query takes an
//! `OrgId` and filters on the owning `org_id` column; no query returns rows
//! from more than one organization.
//!
//! ## Module Organization
//!
//! - `orgs`: Organization, user and kickstart tree lookups
//! - `kickstarts`: Kickstart profiles and their bound provisioning ids
//! - `crypto_keys`: Cryptographic keys
//! - `file_lists`: File preservation lists with their paths
//! - `activation_keys`: Activation keys, all and active-only

pub mod activation_keys;
pub mod crypto_keys;
pub mod file_lists;
pub mod kickstarts;
pub mod orgs;
