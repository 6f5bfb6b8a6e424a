// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Provisioning backend contract for the Kickstart Lister.
//!
//! The provisioning backend (Cobbler) is an external service that holds
//! distributions and the profiles built on them. This crate defines what the
//! listing facade needs from it, `ProvisioningBackend`, and ships
//! `InMemoryCobbler`, an in-process implementation with the same
//! observable rules: login before use, unique names, profiles must reference
//! an existing distribution, distributions in use cannot be deleted.
//!
//! The profile named `BOOTSTRAP_PROFILE_NAME` is an ordinary profile to the
//! backend; hiding it is the facade's job.

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

mod backend;
mod error;
mod memory;
mod model;

#[cfg(test)]
mod tests;

pub use backend::ProvisioningBackend;
pub use error::ProvisioningError;
pub use kickstart_lister_domain::BOOTSTRAP_PROFILE_NAME;
pub use memory::InMemoryCobbler;
pub use model::{CobblerConnection, Distro, DistroBuilder, NewDistro, Profile};
