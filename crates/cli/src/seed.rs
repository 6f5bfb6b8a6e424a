// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loading provisioning profiles into the in-memory backend.

use std::collections::BTreeMap;
use std::path::Path;

use kickstart_lister_provisioning::{
    CobblerConnection, Distro, InMemoryCobbler, ProvisioningBackend, ProvisioningError,
};
use serde::Deserialize;
use tracing::info;

/// Login used for the seeding session.
const SEED_LOGIN: &str = "seed";

/// A distribution as written in a seed file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedDistro {
    pub name: String,
    pub kernel: String,
    pub initrd: String,
    #[serde(default)]
    pub ks_meta: BTreeMap<String, String>,
}

/// A profile as written in a seed file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedProfile {
    pub name: String,
    pub distro: SeedDistro,
}

/// Parses a JSON array of profiles.
///
/// # Errors
///
/// Returns an error if the text is not a valid seed document.
pub fn parse_seed(json: &str) -> Result<Vec<SeedProfile>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Creates every seeded profile, and the distributions they boot, on `backend`.
///
/// Profiles sharing a distribution name reuse the first definition.
///
/// # Errors
///
/// Returns an error if the backend rejects a distribution or profile.
pub fn seed_backend(
    backend: &InMemoryCobbler,
    profiles: Vec<SeedProfile>,
) -> Result<usize, ProvisioningError> {
    let conn: CobblerConnection = backend.connect(SEED_LOGIN)?;
    let mut distros: BTreeMap<String, Distro> = BTreeMap::new();
    let count: usize = profiles.len();

    for profile in profiles {
        let distro_name: String = profile.distro.name.clone();
        if !distros.contains_key(&distro_name) {
            let created: Distro = Distro::builder()
                .name(&profile.distro.name)
                .kernel(&profile.distro.kernel)
                .initrd(&profile.distro.initrd)
                .ks_meta(profile.distro.ks_meta)
                .build(backend, &conn)?;
            distros.insert(distro_name.clone(), created);
        }
        if let Some(distro) = distros.get(&distro_name) {
            backend.create_profile(&conn, &profile.name, distro)?;
        }
    }

    backend.disconnect(&conn)?;
    info!(count, "Seeded provisioning profiles");
    Ok(count)
}

/// Reads a seed file and loads it into a new backend.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or seeding fails.
pub fn load_backend(path: &Path) -> Result<InMemoryCobbler, Box<dyn std::error::Error>> {
    let json: String = std::fs::read_to_string(path)?;
    let profiles: Vec<SeedProfile> = parse_seed(&json)?;
    let backend = InMemoryCobbler::new();
    seed_backend(&backend, profiles)?;
    Ok(backend)
}
