// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use crate::error::ProvisioningError;
use crate::model::{CobblerConnection, Distro, NewDistro, Profile};

/// Operations the listing facade and its setup code need from the
/// provisioning backend.
///
/// Every operation other than `connect` takes the connection returned by
/// `connect`; a connection the backend does not recognize is rejected with
/// `ProvisioningError::InvalidToken`.
pub trait ProvisioningBackend {
    /// Opens a session for `login`.
    ///
    /// # Errors
    ///
    /// Returns an error if the login is refused or the backend is unreachable.
    fn connect(&self, login: &str) -> Result<CobblerConnection, ProvisioningError>;

    /// Closes the session opened by `connect`.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection is not an open session or the
    /// backend is unreachable.
    fn disconnect(&self, conn: &CobblerConnection) -> Result<(), ProvisioningError>;

    /// Lists every profile, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection is invalid or the backend is unreachable.
    fn list_profiles(&self, conn: &CobblerConnection) -> Result<Vec<Profile>, ProvisioningError>;

    /// Creates a distribution.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is taken.
    fn create_distro(
        &self,
        conn: &CobblerConnection,
        distro: NewDistro,
    ) -> Result<Distro, ProvisioningError>;

    /// Creates a profile on an existing distribution.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is taken or the distribution is unknown.
    fn create_profile(
        &self,
        conn: &CobblerConnection,
        name: &str,
        distro: &Distro,
    ) -> Result<Profile, ProvisioningError>;

    /// Deletes a profile by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile does not exist.
    fn delete_profile(&self, conn: &CobblerConnection, name: &str) -> Result<(), ProvisioningError>;

    /// Deletes a distribution by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the distribution does not exist or is still in use.
    fn delete_distro(&self, conn: &CobblerConnection, name: &str) -> Result<(), ProvisioningError>;
}

impl<T: ProvisioningBackend + ?Sized> ProvisioningBackend for Arc<T> {
    fn connect(&self, login: &str) -> Result<CobblerConnection, ProvisioningError> {
        (**self).connect(login)
    }

    fn disconnect(&self, conn: &CobblerConnection) -> Result<(), ProvisioningError> {
        (**self).disconnect(conn)
    }

    fn list_profiles(&self, conn: &CobblerConnection) -> Result<Vec<Profile>, ProvisioningError> {
        (**self).list_profiles(conn)
    }

    fn create_distro(
        &self,
        conn: &CobblerConnection,
        distro: NewDistro,
    ) -> Result<Distro, ProvisioningError> {
        (**self).create_distro(conn, distro)
    }

    fn create_profile(
        &self,
        conn: &CobblerConnection,
        name: &str,
        distro: &Distro,
    ) -> Result<Profile, ProvisioningError> {
        (**self).create_profile(conn, name, distro)
    }

    fn delete_profile(&self, conn: &CobblerConnection, name: &str) -> Result<(), ProvisioningError> {
        (**self).delete_profile(conn, name)
    }

    fn delete_distro(&self, conn: &CobblerConnection, name: &str) -> Result<(), ProvisioningError> {
        (**self).delete_distro(conn, name)
    }
}
