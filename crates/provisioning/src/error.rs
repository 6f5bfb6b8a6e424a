// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Provisioning backend errors.

use thiserror::Error;

/// Errors returned by a provisioning backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProvisioningError {
    /// The backend refused the login.
    #[error("Authentication failed for login '{login}'")]
    AuthenticationFailed { login: String },

    /// The connection token is unknown to the backend.
    #[error("Invalid or expired provisioning token")]
    InvalidToken,

    /// The named distribution does not exist.
    #[error("Distro '{0}' not found")]
    DistroNotFound(String),

    /// The named profile does not exist.
    #[error("Profile '{0}' not found")]
    ProfileNotFound(String),

    /// An object with this name already exists.
    #[error("{kind} '{name}' already exists")]
    Duplicate { kind: &'static str, name: String },

    /// The distribution is still referenced by profiles.
    #[error("Distro '{distro}' is used by {profiles} profile(s)")]
    DistroInUse { distro: String, profiles: usize },

    /// A required builder field was not set.
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    /// The backend could not be reached.
    #[error("Provisioning backend unavailable: {0}")]
    Unavailable(String),
}
