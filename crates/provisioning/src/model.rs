// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Objects held by the provisioning backend.

use kickstart_lister_domain::CobblerProfileDto;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::backend::ProvisioningBackend;
use crate::error::ProvisioningError;

/// An open session with the provisioning backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CobblerConnection {
    login: String,
    token: String,
}

impl CobblerConnection {
    /// Creates a connection handle. Backends call this from `connect`.
    #[must_use]
    pub fn new(login: &str, token: &str) -> Self {
        Self {
            login: login.to_string(),
            token: token.to_string(),
        }
    }

    /// The login this session was opened for.
    #[must_use]
    pub fn login(&self) -> &str {
        &self.login
    }

    /// The session token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Input for creating a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDistro {
    pub name: String,
    pub kernel: String,
    pub initrd: String,
    #[serde(default)]
    pub ks_meta: BTreeMap<String, String>,
}

/// A distribution: the kernel and initrd a profile boots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distro {
    pub id: String,
    pub name: String,
    pub kernel: String,
    pub initrd: String,
    pub ks_meta: BTreeMap<String, String>,
}

impl Distro {
    /// Starts building a distribution.
    #[must_use]
    pub fn builder() -> DistroBuilder {
        DistroBuilder::default()
    }
}

/// A named profile and the distribution it boots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub distro: Distro,
}

impl From<Profile> for CobblerProfileDto {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            distro_name: profile.distro.name,
            kernel: profile.distro.kernel,
            initrd: profile.distro.initrd,
            ks_meta: profile.distro.ks_meta,
        }
    }
}

/// Builder for distributions, created on the backend by `build`.
#[derive(Debug, Clone, Default)]
pub struct DistroBuilder {
    name: Option<String>,
    kernel: Option<String>,
    initrd: Option<String>,
    ks_meta: BTreeMap<String, String>,
}

impl DistroBuilder {
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    #[must_use]
    pub fn kernel(mut self, kernel: &str) -> Self {
        self.kernel = Some(kernel.to_string());
        self
    }

    #[must_use]
    pub fn initrd(mut self, initrd: &str) -> Self {
        self.initrd = Some(initrd.to_string());
        self
    }

    #[must_use]
    pub fn ks_meta(mut self, ks_meta: BTreeMap<String, String>) -> Self {
        self.ks_meta = ks_meta;
        self
    }

    /// Validates the builder into a `NewDistro` without contacting a backend.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if name, kernel or initrd is unset or blank.
    pub fn into_new_distro(self) -> Result<NewDistro, ProvisioningError> {
        fn required(value: Option<String>, field: &'static str) -> Result<String, ProvisioningError> {
            value
                .filter(|v| !v.trim().is_empty())
                .ok_or(ProvisioningError::MissingField(field))
        }

        Ok(NewDistro {
            name: required(self.name, "name")?,
            kernel: required(self.kernel, "kernel")?,
            initrd: required(self.initrd, "initrd")?,
            ks_meta: self.ks_meta,
        })
    }

    /// Creates the distribution on `backend`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or the backend
    /// rejects the distribution.
    pub fn build<B: ProvisioningBackend + ?Sized>(
        self,
        backend: &B,
        conn: &CobblerConnection,
    ) -> Result<Distro, ProvisioningError> {
        let distro: NewDistro = self.into_new_distro()?;
        backend.create_distro(conn, distro)
    }
}
