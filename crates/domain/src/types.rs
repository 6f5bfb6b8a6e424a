// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Name of the provisioning profile reserved for bootstrap enrollment.
pub const BOOTSTRAP_PROFILE_NAME: &str = "pxe-default-profile";

/// Flag value marking an activation key as a bootstrap key.
pub const ACTIVATION_KEY_BOOTSTRAP_FLAG: &str = "Y";

/// Represents an organization identifier.
///
/// Organizations are the tenant boundary: every listing is scoped to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrgId(i64);

impl OrgId {
    /// Creates a new organization identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for OrgId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The user on whose behalf a provisioning listing is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    /// The user's identifier.
    pub user_id: i64,
    /// The organization the user belongs to.
    pub org_id: OrgId,
    /// The login name used to open provisioning sessions.
    pub login: String,
}

impl UserContext {
    /// Creates a new user context.
    #[must_use]
    pub fn new(user_id: i64, org_id: OrgId, login: &str) -> Self {
        Self {
            user_id,
            org_id,
            login: login.to_string(),
        }
    }
}

/// The kind of material held by a cryptographic key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CryptoKeyType {
    /// A GPG public key used to verify packages.
    Gpg,
    /// An SSL certificate.
    Ssl,
}

impl CryptoKeyType {
    /// Converts this key type to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gpg => "GPG",
            Self::Ssl => "SSL",
        }
    }
}

impl FromStr for CryptoKeyType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GPG" => Ok(Self::Gpg),
            "SSL" => Ok(Self::Ssl),
            _ => Err(DomainError::UnknownCryptoKeyType(s.to_string())),
        }
    }
}

impl std::fmt::Display for CryptoKeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A kickstart profile as returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KickstartDto {
    pub id: i64,
    pub org_id: OrgId,
    pub label: String,
    pub tree_label: String,
    pub org_default: bool,
    pub active: bool,
    pub advanced_mode: bool,
    /// Identifier of the provisioning profile this kickstart is bound to.
    pub cobbler_id: Option<String>,
}

/// A cryptographic key as returned by listings.
///
/// Key material is never part of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoKeyDto {
    pub id: i64,
    pub org_id: OrgId,
    pub description: String,
    pub key_type: CryptoKeyType,
}

/// A file preservation list as returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePreservationDto {
    pub id: i64,
    pub org_id: OrgId,
    pub label: String,
    /// File paths, ordered by path.
    pub files: Vec<String>,
}

/// An activation key as returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationKeyDto {
    pub id: i64,
    pub org_id: OrgId,
    /// The user who created the key, if any.
    pub user_id: Option<i64>,
    pub token: String,
    pub note: String,
    pub usage_limit: Option<i64>,
    pub active: bool,
    pub org_default: bool,
    /// Bootstrap flag as stored (`"Y"` marks a bootstrap key).
    pub bootstrap: String,
}

/// A provisioning profile as returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CobblerProfileDto {
    pub id: String,
    pub name: String,
    pub distro_name: String,
    pub kernel: String,
    pub initrd: String,
    pub ks_meta: BTreeMap<String, String>,
}

/// Input for creating a kickstart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewKickstart {
    pub org_id: OrgId,
    pub label: String,
    pub tree_id: i64,
    pub org_default: bool,
    pub active: bool,
    pub advanced_mode: bool,
    pub cobbler_id: Option<String>,
}

impl NewKickstart {
    /// Creates an active, non-default kickstart input for the given tree.
    #[must_use]
    pub fn new(org_id: OrgId, label: &str, tree_id: i64) -> Self {
        Self {
            org_id,
            label: label.to_string(),
            tree_id,
            org_default: false,
            active: true,
            advanced_mode: false,
            cobbler_id: None,
        }
    }
}

/// Input for creating a cryptographic key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCryptoKey {
    pub org_id: OrgId,
    pub description: String,
    pub key_type: CryptoKeyType,
    pub key_material: Vec<u8>,
}

/// Input for creating a file preservation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFileList {
    pub org_id: OrgId,
    pub label: String,
    pub files: Vec<String>,
}

/// Input for creating an activation key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivationKey {
    pub org_id: OrgId,
    pub user_id: Option<i64>,
    /// The key as entered; it is prefixed with the org id when stored.
    pub key: String,
    pub note: String,
    pub usage_limit: Option<i64>,
    pub org_default: bool,
}

impl NewActivationKey {
    /// Validates the usage limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the usage limit is present and not positive.
    pub fn validate_usage_limit(&self) -> Result<(), DomainError> {
        match self.usage_limit {
            Some(limit) if limit < 1 => Err(DomainError::InvalidUsageLimit(limit)),
            _ => Ok(()),
        }
    }
}

/// Validates that a label-like field is non-empty after trimming.
///
/// # Errors
///
/// Returns an error if the trimmed value is empty.
pub fn validate_label(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidLabel {
            field,
            reason: String::from("must not be empty"),
        });
    }
    Ok(())
}

/// Normalizes an activation key to its stored token form.
///
/// Tokens are prefixed with the owning org id (`"{org}-{key}"`) unless the
/// key already carries that prefix. Whitespace is trimmed.
///
/// # Errors
///
/// Returns an error if the key is empty after trimming.
pub fn normalize_activation_key(org_id: OrgId, key: &str) -> Result<String, DomainError> {
    let trimmed: &str = key.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidActivationKey(String::from(
            "key must not be empty",
        )));
    }

    let prefix: String = format!("{org_id}-");
    if trimmed.starts_with(&prefix) {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{prefix}{trimmed}"))
    }
}
