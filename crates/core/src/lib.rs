// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Organization-scoped listings of provisioning records.
//!
//! `KickstartLister` answers "what does this organization have?" for
//! kickstart profiles, cryptographic keys, file preservation lists,
//! activation keys and provisioning-backend profiles. It owns no data: the
//! record store and the provisioning backend are injected, and every call
//! returns a fully materialized `DataResult`.
//!
//! Records reserved for bootstrap enrollment never appear in a listing.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod error;
mod lister;
mod store;

#[cfg(test)]
mod tests;

pub use config::ListerConfig;
pub use error::ListerError;
pub use lister::KickstartLister;
pub use store::RecordStore;
