// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeSet;

use kickstart_lister_domain::{
    ActivationKeyDto, CobblerProfileDto, CryptoKeyDto, DataResult, ExclusionRule, ExclusionSet,
    FilePreservationDto, Filterable, KickstartDto, OrgId, PageControl, UserContext,
};
use kickstart_lister_provisioning::{CobblerConnection, ProvisioningBackend};
use tracing::{debug, info, warn};

use crate::config::ListerConfig;
use crate::error::ListerError;
use crate::store::RecordStore;

/// Applies exclusions, then the page control, to a full listing.
///
/// Without a page control every visible record is returned.
fn paginate<T: Filterable>(
    records: Vec<T>,
    exclusions: &ExclusionSet<T>,
    pc: Option<&PageControl>,
) -> DataResult<T> {
    let fetched: usize = records.len();
    let visible: Vec<T> = exclusions.apply(records);
    if visible.len() != fetched {
        debug!(
            excluded = fetched - visible.len(),
            "Dropped excluded records from listing"
        );
    }

    match pc {
        Some(pc) => pc.apply(visible),
        None => DataResult::unpaged(visible),
    }
}

/// Listing facade over a record store and a provisioning backend.
///
/// The lister holds no state of its own between calls. Each operation
/// fetches the organization's records, drops the ones reserved for
/// bootstrap enrollment, and pages the rest.
#[derive(Debug)]
pub struct KickstartLister<S, P> {
    store: S,
    provisioning: P,
    config: ListerConfig,
}

impl<S, P> KickstartLister<S, P>
where
    S: RecordStore,
    P: ProvisioningBackend,
{
    /// Creates a lister over the given collaborators.
    ///
    /// # Errors
    ///
    /// Returns `ListerError::Config` if `config` fails validation.
    pub fn new(store: S, provisioning: P, config: ListerConfig) -> Result<Self, ListerError> {
        config.validate()?;
        Ok(Self {
            store,
            provisioning,
            config,
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ListerConfig {
        &self.config
    }

    /// Returns the record store, for seeding and inspection.
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Returns the provisioning backend.
    #[must_use]
    pub const fn provisioning(&self) -> &P {
        &self.provisioning
    }

    /// Lists the kickstart profiles of an organization, ordered by label.
    ///
    /// # Errors
    ///
    /// Returns `ListerError::RecordStore` if the store query fails.
    pub fn kickstarts_in_org(
        &mut self,
        org: OrgId,
        pc: Option<&PageControl>,
    ) -> Result<DataResult<KickstartDto>, ListerError> {
        debug!(org = %org, "Listing kickstarts");
        let kickstarts: Vec<KickstartDto> = self
            .store
            .kickstarts(org)
            .map_err(|e| ListerError::record_store("kickstarts_in_org", e))?;

        Ok(paginate(kickstarts, &ExclusionSet::new(), pc))
    }

    /// Lists the cryptographic keys of an organization, ordered by description.
    ///
    /// # Errors
    ///
    /// Returns `ListerError::RecordStore` if the store query fails.
    pub fn crypto_keys_in_org(
        &mut self,
        org: OrgId,
        pc: Option<&PageControl>,
    ) -> Result<DataResult<CryptoKeyDto>, ListerError> {
        debug!(org = %org, "Listing crypto keys");
        let keys: Vec<CryptoKeyDto> = self
            .store
            .crypto_keys(org)
            .map_err(|e| ListerError::record_store("crypto_keys_in_org", e))?;

        Ok(paginate(keys, &ExclusionSet::new(), pc))
    }

    /// Lists the file preservation lists of an organization, ordered by label.
    ///
    /// # Errors
    ///
    /// Returns `ListerError::RecordStore` if the store query fails.
    pub fn preservation_lists_in_org(
        &mut self,
        org: OrgId,
        pc: Option<&PageControl>,
    ) -> Result<DataResult<FilePreservationDto>, ListerError> {
        debug!(org = %org, "Listing file preservation lists");
        let lists: Vec<FilePreservationDto> = self
            .store
            .file_lists(org)
            .map_err(|e| ListerError::record_store("preservation_lists_in_org", e))?;

        Ok(paginate(lists, &ExclusionSet::new(), pc))
    }

    /// Lists the activation keys of an organization, bootstrap keys excluded.
    ///
    /// Disabled keys are included.
    ///
    /// # Errors
    ///
    /// Returns `ListerError::RecordStore` if the store query fails.
    pub fn activation_keys_in_org(
        &mut self,
        org: OrgId,
        pc: Option<&PageControl>,
    ) -> Result<DataResult<ActivationKeyDto>, ListerError> {
        debug!(org = %org, "Listing activation keys");
        let keys: Vec<ActivationKeyDto> = self
            .store
            .activation_keys(org)
            .map_err(|e| ListerError::record_store("activation_keys_in_org", e))?;

        Ok(paginate(keys, &activation_key_exclusions(), pc))
    }

    /// Lists the active activation keys of an organization, bootstrap keys
    /// excluded.
    ///
    /// # Errors
    ///
    /// Returns `ListerError::RecordStore` if the store query fails.
    pub fn active_activation_keys_in_org(
        &mut self,
        org: OrgId,
        pc: Option<&PageControl>,
    ) -> Result<DataResult<ActivationKeyDto>, ListerError> {
        debug!(org = %org, "Listing active activation keys");
        let keys: Vec<ActivationKeyDto> = self
            .store
            .active_activation_keys(org)
            .map_err(|e| ListerError::record_store("active_activation_keys_in_org", e))?;

        Ok(paginate(keys, &activation_key_exclusions(), pc))
    }

    /// Lists the provisioning profiles visible to a user.
    ///
    /// The provisioning session opened for the listing is closed before
    /// this returns. The reserved bootstrap profile is always hidden. When
    /// `exclude_managed_profiles` is set, profiles already bound to a
    /// kickstart of the user's organization are hidden too.
    ///
    /// # Errors
    ///
    /// Returns `ListerError::Provisioning` if the backend refuses the
    /// session or the listing, and `ListerError::RecordStore` if the bound
    /// profile ids cannot be read.
    pub fn list_cobbler_profiles(
        &mut self,
        user: &UserContext,
        pc: Option<&PageControl>,
    ) -> Result<DataResult<CobblerProfileDto>, ListerError> {
        const OPERATION: &str = "list_cobbler_profiles";
        debug!(login = %user.login, org = %user.org_id, "Listing provisioning profiles");

        let conn: CobblerConnection = self
            .provisioning
            .connect(&user.login)
            .map_err(|e| ListerError::provisioning(OPERATION, e))?;
        let listed = self.provisioning.list_profiles(&conn);
        if let Err(e) = self.provisioning.disconnect(&conn) {
            warn!(login = %user.login, "Failed to close provisioning session: {}", e);
        }
        let profiles: Vec<CobblerProfileDto> = listed
            .map_err(|e| ListerError::provisioning(OPERATION, e))?
            .into_iter()
            .map(CobblerProfileDto::from)
            .collect();

        let mut exclusions: ExclusionSet<CobblerProfileDto> =
            ExclusionSet::new().with(bootstrap_profile_rule(&self.config.bootstrap_profile_name));

        if self.config.exclude_managed_profiles {
            let managed: BTreeSet<String> = self
                .store
                .cobbler_ids(user.org_id)
                .map_err(|e| ListerError::record_store(OPERATION, e))?
                .into_iter()
                .collect();
            if !managed.is_empty() {
                info!(
                    count = managed.len(),
                    "Hiding provisioning profiles bound to kickstarts"
                );
                exclusions.push(ExclusionRule::new(
                    "managed",
                    move |profile: &CobblerProfileDto| managed.contains(&profile.id),
                ));
            }
        }

        Ok(paginate(profiles, &exclusions, pc))
    }
}

fn activation_key_exclusions() -> ExclusionSet<ActivationKeyDto> {
    ExclusionSet::new().with(ExclusionRule::bootstrap())
}

fn bootstrap_profile_rule(name: &str) -> ExclusionRule<CobblerProfileDto> {
    let reserved: String = name.to_string();
    ExclusionRule::new("bootstrap", move |profile: &CobblerProfileDto| {
        profile.name == reserved
    })
}
