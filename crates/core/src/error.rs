// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kickstart_lister_provisioning::ProvisioningError;
use thiserror::Error;

type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by `KickstartLister`.
#[derive(Debug, Error)]
pub enum ListerError {
    /// The record store failed while serving a listing.
    #[error("Record store failed during {operation}: {source}")]
    RecordStore {
        operation: &'static str,
        #[source]
        source: BoxedError,
    },

    /// The provisioning backend failed while serving a listing.
    #[error("Provisioning backend failed during {operation}: {source}")]
    Provisioning {
        operation: &'static str,
        #[source]
        source: ProvisioningError,
    },

    /// The lister configuration is invalid.
    #[error("Invalid lister configuration: {0}")]
    Config(String),
}

impl ListerError {
    pub(crate) fn record_store<E>(operation: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::RecordStore {
            operation,
            source: Box::new(source),
        }
    }

    pub(crate) const fn provisioning(operation: &'static str, source: ProvisioningError) -> Self {
        Self::Provisioning { operation, source }
    }

    /// Returns the listing operation that failed, if the error came from a
    /// collaborator.
    #[must_use]
    pub const fn operation(&self) -> Option<&'static str> {
        match self {
            Self::RecordStore { operation, .. } | Self::Provisioning { operation, .. } => {
                Some(*operation)
            }
            Self::Config(_) => None,
        }
    }
}
