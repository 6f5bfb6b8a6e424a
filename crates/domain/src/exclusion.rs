// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Predicate-based exclusion of records from listings.
//!
//! Each entity type gets an `ExclusionSet` of named rules. A record is
//! dropped from a listing when any rule in its set matches it.

use crate::types::{ACTIVATION_KEY_BOOTSTRAP_FLAG, ActivationKeyDto};

/// Records that carry a bootstrap marker of their own.
pub trait BootstrapMarked {
    /// Returns `true` if this record is reserved for bootstrap enrollment.
    fn is_bootstrap(&self) -> bool;
}

impl BootstrapMarked for ActivationKeyDto {
    fn is_bootstrap(&self) -> bool {
        self.bootstrap == ACTIVATION_KEY_BOOTSTRAP_FLAG
    }
}

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// A named predicate selecting records to exclude.
pub struct ExclusionRule<T> {
    name: String,
    predicate: Predicate<T>,
}

impl<T> ExclusionRule<T> {
    /// Creates a rule that excludes every record for which `predicate` holds.
    pub fn new<F>(name: &str, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            predicate: Box::new(predicate),
        }
    }

    /// Returns the rule name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if this rule excludes `record`.
    pub fn excludes(&self, record: &T) -> bool {
        (self.predicate)(record)
    }
}

impl<T: BootstrapMarked + 'static> ExclusionRule<T> {
    /// Creates the rule excluding records marked as bootstrap.
    #[must_use]
    pub fn bootstrap() -> Self {
        Self::new("bootstrap", |record: &T| record.is_bootstrap())
    }
}

impl<T> std::fmt::Debug for ExclusionRule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExclusionRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The exclusion rules applied to one entity type.
#[derive(Debug)]
pub struct ExclusionSet<T> {
    rules: Vec<ExclusionRule<T>>,
}

impl<T> Default for ExclusionSet<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T> ExclusionSet<T> {
    /// Creates an empty set that excludes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this set with `rule` added.
    #[must_use]
    pub fn with(mut self, rule: ExclusionRule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds a rule to this set.
    pub fn push(&mut self, rule: ExclusionRule<T>) {
        self.rules.push(rule);
    }

    /// Number of rules in this set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if this set has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the name of the first rule that excludes `record`.
    pub fn excluded_by(&self, record: &T) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.excludes(record))
            .map(ExclusionRule::name)
    }

    /// Drops every excluded record, preserving the order of the rest.
    #[must_use]
    pub fn apply(&self, records: Vec<T>) -> Vec<T> {
        if self.rules.is_empty() {
            return records;
        }
        records
            .into_iter()
            .filter(|record| self.excluded_by(record).is_none())
            .collect()
    }
}
