// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A page size of zero was requested.
    InvalidPageSize(usize),
    /// A label, name or description is empty or invalid.
    InvalidLabel {
        /// The field that was validated.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// An activation key was empty after normalization.
    InvalidActivationKey(String),
    /// The key type string is not one of the known types.
    UnknownCryptoKeyType(String),
    /// A usage limit must be positive when present.
    InvalidUsageLimit(i64),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPageSize(size) => {
                write!(f, "Invalid page size: {size}. Must be at least 1")
            }
            Self::InvalidLabel { field, reason } => {
                write!(f, "Invalid {field}: {reason}")
            }
            Self::InvalidActivationKey(msg) => write!(f, "Invalid activation key: {msg}"),
            Self::UnknownCryptoKeyType(value) => {
                write!(f, "Unknown crypto key type '{value}'. Expected GPG or SSL")
            }
            Self::InvalidUsageLimit(limit) => {
                write!(f, "Invalid usage limit: {limit}. Must be positive")
            }
        }
    }
}

impl std::error::Error for DomainError {}
