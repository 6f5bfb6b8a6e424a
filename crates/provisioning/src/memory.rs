// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-process provisioning backend.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::backend::ProvisioningBackend;
use crate::error::ProvisioningError;
use crate::model::{CobblerConnection, Distro, NewDistro, Profile};

#[derive(Debug, Default)]
struct CobblerState {
    /// token -> login
    sessions: BTreeMap<String, String>,
    distros: BTreeMap<String, Distro>,
    /// Profiles keep only the distro name; the distro is resolved on read.
    profiles: BTreeMap<String, (String, String)>,
    next_id: u64,
}

impl CobblerState {
    fn next_uid(&mut self) -> String {
        self.next_id += 1;
        format!("{:016x}", self.next_id)
    }

    fn check_session(&self, conn: &CobblerConnection) -> Result<(), ProvisioningError> {
        match self.sessions.get(conn.token()) {
            Some(login) if login == conn.login() => Ok(()),
            _ => Err(ProvisioningError::InvalidToken),
        }
    }
}

/// A provisioning backend held in memory.
///
/// Safe to share between threads; all state sits behind one mutex.
#[derive(Debug)]
pub struct InMemoryCobbler {
    state: Mutex<CobblerState>,
    allowed_logins: Option<BTreeSet<String>>,
    available: AtomicBool,
}

impl Default for InMemoryCobbler {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCobbler {
    /// Creates an empty backend that accepts any non-blank login.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CobblerState::default()),
            allowed_logins: None,
            available: AtomicBool::new(true),
        }
    }

    /// Creates an empty backend that accepts only the given logins.
    #[must_use]
    pub fn with_logins(logins: &[&str]) -> Self {
        Self {
            allowed_logins: Some(logins.iter().map(|l| (*l).to_string()).collect()),
            ..Self::new()
        }
    }

    /// Marks the backend reachable or unreachable.
    ///
    /// While unreachable every operation fails with `Unavailable`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
        if !available {
            warn!("In-memory provisioning backend marked unavailable");
        }
    }

    /// Number of sessions currently open.
    ///
    /// # Errors
    ///
    /// Returns `Unavailable` if the backend is offline.
    pub fn session_count(&self) -> Result<usize, ProvisioningError> {
        Ok(self.lock()?.sessions.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, CobblerState>, ProvisioningError> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(ProvisioningError::Unavailable(String::from(
                "backend is offline",
            )));
        }
        self.state
            .lock()
            .map_err(|_| ProvisioningError::Unavailable(String::from("state lock poisoned")))
    }
}

impl ProvisioningBackend for InMemoryCobbler {
    fn connect(&self, login: &str) -> Result<CobblerConnection, ProvisioningError> {
        let mut state = self.lock()?;

        let permitted: bool = !login.trim().is_empty()
            && self
                .allowed_logins
                .as_ref()
                .is_none_or(|allowed| allowed.contains(login));
        if !permitted {
            return Err(ProvisioningError::AuthenticationFailed {
                login: login.to_string(),
            });
        }

        let token: String = format!("token-{}", state.next_uid());
        state.sessions.insert(token.clone(), login.to_string());
        debug!("Opened provisioning session for '{}'", login);

        Ok(CobblerConnection::new(login, &token))
    }

    fn disconnect(&self, conn: &CobblerConnection) -> Result<(), ProvisioningError> {
        let mut state = self.lock()?;
        state.check_session(conn)?;

        state.sessions.remove(conn.token());
        debug!("Closed provisioning session for '{}'", conn.login());

        Ok(())
    }

    fn list_profiles(&self, conn: &CobblerConnection) -> Result<Vec<Profile>, ProvisioningError> {
        let state = self.lock()?;
        state.check_session(conn)?;

        state
            .profiles
            .iter()
            .map(|(name, (id, distro_name))| -> Result<Profile, ProvisioningError> {
                let distro: &Distro = state
                    .distros
                    .get(distro_name)
                    .ok_or_else(|| ProvisioningError::DistroNotFound(distro_name.clone()))?;
                Ok(Profile {
                    id: id.clone(),
                    name: name.clone(),
                    distro: distro.clone(),
                })
            })
            .collect()
    }

    fn create_distro(
        &self,
        conn: &CobblerConnection,
        distro: NewDistro,
    ) -> Result<Distro, ProvisioningError> {
        let mut state = self.lock()?;
        state.check_session(conn)?;

        if state.distros.contains_key(&distro.name) {
            return Err(ProvisioningError::Duplicate {
                kind: "Distro",
                name: distro.name,
            });
        }

        let created: Distro = Distro {
            id: state.next_uid(),
            name: distro.name,
            kernel: distro.kernel,
            initrd: distro.initrd,
            ks_meta: distro.ks_meta,
        };
        state.distros.insert(created.name.clone(), created.clone());
        info!("Created distro '{}'", created.name);

        Ok(created)
    }

    fn create_profile(
        &self,
        conn: &CobblerConnection,
        name: &str,
        distro: &Distro,
    ) -> Result<Profile, ProvisioningError> {
        let mut state = self.lock()?;
        state.check_session(conn)?;

        if name.trim().is_empty() {
            return Err(ProvisioningError::MissingField("name"));
        }
        if state.profiles.contains_key(name) {
            return Err(ProvisioningError::Duplicate {
                kind: "Profile",
                name: name.to_string(),
            });
        }
        let stored: Distro = state
            .distros
            .get(&distro.name)
            .cloned()
            .ok_or_else(|| ProvisioningError::DistroNotFound(distro.name.clone()))?;

        let id: String = state.next_uid();
        state
            .profiles
            .insert(name.to_string(), (id.clone(), stored.name.clone()));
        info!("Created profile '{}' on distro '{}'", name, stored.name);

        Ok(Profile {
            id,
            name: name.to_string(),
            distro: stored,
        })
    }

    fn delete_profile(&self, conn: &CobblerConnection, name: &str) -> Result<(), ProvisioningError> {
        let mut state = self.lock()?;
        state.check_session(conn)?;

        state
            .profiles
            .remove(name)
            .ok_or_else(|| ProvisioningError::ProfileNotFound(name.to_string()))?;
        info!("Deleted profile '{}'", name);

        Ok(())
    }

    fn delete_distro(&self, conn: &CobblerConnection, name: &str) -> Result<(), ProvisioningError> {
        let mut state = self.lock()?;
        state.check_session(conn)?;

        if !state.distros.contains_key(name) {
            return Err(ProvisioningError::DistroNotFound(name.to_string()));
        }
        let profiles: usize = state
            .profiles
            .values()
            .filter(|(_, distro_name)| distro_name == name)
            .count();
        if profiles > 0 {
            return Err(ProvisioningError::DistroInUse {
                distro: name.to_string(),
                profiles,
            });
        }

        state.distros.remove(name);
        info!("Deleted distro '{}'", name);

        Ok(())
    }
}
