// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kickstart_lister_domain::BOOTSTRAP_PROFILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::ListerError;

/// Settings for a `KickstartLister`.
///
/// Every field has a default, so an empty JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListerConfig {
    /// Provisioning profile name reserved for bootstrap enrollment.
    pub bootstrap_profile_name: String,
    /// Hide provisioning profiles already bound to one of the org's kickstarts.
    pub exclude_managed_profiles: bool,
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self {
            bootstrap_profile_name: BOOTSTRAP_PROFILE_NAME.to_string(),
            exclude_managed_profiles: true,
        }
    }
}

impl ListerConfig {
    /// Parses a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ListerError::Config` if the text is not a valid config.
    pub fn from_json_str(json: &str) -> Result<Self, ListerError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ListerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ListerError::Config` if the file cannot be read or parsed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ListerError> {
        let path: &Path = path.as_ref();
        debug!("Loading lister config from {}", path.display());

        let json: String = std::fs::read_to_string(path)
            .map_err(|e| ListerError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    /// Checks that the config can be used.
    ///
    /// # Errors
    ///
    /// Returns `ListerError::Config` if the bootstrap profile name is blank.
    pub fn validate(&self) -> Result<(), ListerError> {
        if self.bootstrap_profile_name.trim().is_empty() {
            return Err(ListerError::Config(String::from(
                "bootstrap_profile_name must not be empty",
            )));
        }
        Ok(())
    }
}
