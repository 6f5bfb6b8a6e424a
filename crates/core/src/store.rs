// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kickstart_lister_domain::{
    ActivationKeyDto, CryptoKeyDto, FilePreservationDto, KickstartDto, OrgId,
};
use kickstart_lister_persistence::{Persistence, PersistenceError};

/// Org-scoped queries the lister runs against its record store.
///
/// Implementations return every matching record for the organization;
/// exclusion and pagination are applied by the lister.
pub trait RecordStore {
    /// The error the store reports.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Kickstart profiles owned by `org`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn kickstarts(&mut self, org: OrgId) -> Result<Vec<KickstartDto>, Self::Error>;

    /// Cryptographic keys owned by `org`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn crypto_keys(&mut self, org: OrgId) -> Result<Vec<CryptoKeyDto>, Self::Error>;

    /// File preservation lists owned by `org`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn file_lists(&mut self, org: OrgId) -> Result<Vec<FilePreservationDto>, Self::Error>;

    /// Every activation key owned by `org`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn activation_keys(&mut self, org: OrgId) -> Result<Vec<ActivationKeyDto>, Self::Error>;

    /// The activation keys of `org` that are not disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn active_activation_keys(&mut self, org: OrgId)
    -> Result<Vec<ActivationKeyDto>, Self::Error>;

    /// Provisioning profile ids bound to the kickstarts of `org`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn cobbler_ids(&mut self, org: OrgId) -> Result<Vec<String>, Self::Error>;
}

impl RecordStore for Persistence {
    type Error = PersistenceError;

    fn kickstarts(&mut self, org: OrgId) -> Result<Vec<KickstartDto>, Self::Error> {
        self.list_kickstarts(org)
    }

    fn crypto_keys(&mut self, org: OrgId) -> Result<Vec<CryptoKeyDto>, Self::Error> {
        self.list_crypto_keys(org)
    }

    fn file_lists(&mut self, org: OrgId) -> Result<Vec<FilePreservationDto>, Self::Error> {
        self.list_file_lists(org)
    }

    fn activation_keys(&mut self, org: OrgId) -> Result<Vec<ActivationKeyDto>, Self::Error> {
        self.list_activation_keys(org)
    }

    fn active_activation_keys(
        &mut self,
        org: OrgId,
    ) -> Result<Vec<ActivationKeyDto>, Self::Error> {
        self.list_active_activation_keys(org)
    }

    fn cobbler_ids(&mut self, org: OrgId) -> Result<Vec<String>, Self::Error> {
        self.list_cobbler_ids(org)
    }
}
