// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types for the Kickstart Lister.
//!
//! This crate holds everything the listing facade, the record store and the
//! provisioning backend agree on:
//!
//! - identifiers and user context (`OrgId`, `UserContext`)
//! - transfer records returned by listings (`KickstartDto`, `CryptoKeyDto`,
//!   `FilePreservationDto`, `ActivationKeyDto`, `CobblerProfileDto`)
//! - creation inputs used by the record store mutations
//! - pagination (`PageControl`, `DataResult`)
//! - predicate-based exclusion (`ExclusionRule`, `ExclusionSet`)

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

mod error;
mod exclusion;
mod page;
mod types;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use exclusion::{BootstrapMarked, ExclusionRule, ExclusionSet};
pub use page::{DEFAULT_PAGE_SIZE, DataResult, Filterable, PageControl};
pub use types::{
    ACTIVATION_KEY_BOOTSTRAP_FLAG, ActivationKeyDto, BOOTSTRAP_PROFILE_NAME, CobblerProfileDto,
    CryptoKeyDto, CryptoKeyType, FilePreservationDto, KickstartDto, NewActivationKey,
    NewCryptoKey, NewFileList, NewKickstart, OrgId, UserContext, normalize_activation_key,
    validate_label,
};
