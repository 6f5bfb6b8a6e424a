// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pagination for listings.
//!
//! A `PageControl` selects a window of a fully materialized listing. Windows
//! are 1-based: `start = 1` is the first record. Filtering by text happens
//! before the window is taken, so `DataResult::total_size` always reports the
//! number of records that matched, not the number on the page.

use crate::error::DomainError;
use crate::types::{
    ActivationKeyDto, CobblerProfileDto, CryptoKeyDto, FilePreservationDto, KickstartDto,
};
use serde::{Deserialize, Serialize};

/// Page size used by `PageControl::default()`.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Records that can be matched by a page control's filter text.
pub trait Filterable {
    /// The value the filter text is matched against.
    fn filter_key(&self) -> &str;
}

impl Filterable for KickstartDto {
    fn filter_key(&self) -> &str {
        &self.label
    }
}

impl Filterable for CryptoKeyDto {
    fn filter_key(&self) -> &str {
        &self.description
    }
}

impl Filterable for FilePreservationDto {
    fn filter_key(&self) -> &str {
        &self.label
    }
}

impl Filterable for ActivationKeyDto {
    fn filter_key(&self) -> &str {
        &self.token
    }
}

impl Filterable for CobblerProfileDto {
    fn filter_key(&self) -> &str {
        &self.name
    }
}

/// A page control as it appears on the wire, before validation.
#[derive(Debug, Deserialize)]
struct RawPageControl {
    #[serde(default)]
    start: usize,
    page_size: Option<usize>,
    #[serde(default)]
    filter_data: Option<String>,
}

impl TryFrom<RawPageControl> for PageControl {
    type Error = DomainError;

    fn try_from(raw: RawPageControl) -> Result<Self, Self::Error> {
        let mut pc: Self = Self::unbounded().with_start(raw.start);
        if let Some(size) = raw.page_size {
            pc = pc.with_page_size(size)?;
        }
        if let Some(filter) = raw.filter_data {
            pc = pc.with_filter(&filter);
        }
        Ok(pc)
    }
}

/// Selects a window of a listing.
///
/// Deserialized page controls go through the same checks as built ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPageControl")]
pub struct PageControl {
    start: usize,
    page_size: Option<usize>,
    filter_data: Option<String>,
}

impl Default for PageControl {
    fn default() -> Self {
        Self {
            start: 1,
            page_size: Some(DEFAULT_PAGE_SIZE),
            filter_data: None,
        }
    }
}

impl PageControl {
    /// Creates a page control for the first page with the default page size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a page control that returns every record from the first on.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: 1,
            page_size: None,
            filter_data: None,
        }
    }

    /// Sets the 1-based start position. A start of 0 is treated as 1.
    pub fn set_start(&mut self, start: usize) {
        self.start = start.max(1);
    }

    /// Returns this page control with a new 1-based start position.
    #[must_use]
    pub fn with_start(mut self, start: usize) -> Self {
        self.set_start(start);
        self
    }

    /// Returns this page control with a new page size.
    ///
    /// # Errors
    ///
    /// Returns an error if `page_size` is zero.
    pub fn with_page_size(mut self, page_size: usize) -> Result<Self, DomainError> {
        if page_size == 0 {
            return Err(DomainError::InvalidPageSize(page_size));
        }
        self.page_size = Some(page_size);
        Ok(self)
    }

    /// Returns this page control with filter text.
    ///
    /// Blank text clears the filter.
    #[must_use]
    pub fn with_filter(mut self, filter_data: &str) -> Self {
        let trimmed: &str = filter_data.trim();
        self.filter_data = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    /// Returns the 1-based start position.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the page size, or `None` when unbounded.
    #[must_use]
    pub const fn page_size(&self) -> Option<usize> {
        self.page_size
    }

    /// Returns the filter text, if any.
    #[must_use]
    pub fn filter_data(&self) -> Option<&str> {
        self.filter_data.as_deref()
    }

    /// Applies the filter text and the window to a listing.
    #[must_use]
    pub fn apply<T: Filterable>(&self, records: Vec<T>) -> DataResult<T> {
        let matching: Vec<T> = match &self.filter_data {
            Some(filter) => {
                let needle: String = filter.to_lowercase();
                records
                    .into_iter()
                    .filter(|record| record.filter_key().to_lowercase().contains(&needle))
                    .collect()
            }
            None => records,
        };

        let total_size: usize = matching.len();
        let offset: usize = self.start.saturating_sub(1);
        let window = matching.into_iter().skip(offset);
        let items: Vec<T> = match self.page_size {
            Some(size) => window.take(size).collect(),
            None => window.collect(),
        };

        DataResult {
            items,
            start: self.start,
            total_size,
        }
    }
}

/// A page of listing results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataResult<T> {
    items: Vec<T>,
    start: usize,
    total_size: usize,
}

impl<T> DataResult<T> {
    /// Wraps a complete listing as a single page starting at 1.
    #[must_use]
    pub fn unpaged(items: Vec<T>) -> Self {
        let total_size: usize = items.len();
        Self {
            items,
            start: 1,
            total_size,
        }
    }

    /// Number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the record at `index` on this page.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns the records on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page and returns its records.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Iterates over the records on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// 1-based position of the first record on this page.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// 1-based position of the last record on this page, or 0 when empty.
    #[must_use]
    pub fn end(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.start + self.items.len() - 1
        }
    }

    /// Number of records that matched before the window was taken.
    #[must_use]
    pub const fn total_size(&self) -> usize {
        self.total_size
    }
}

impl<T> IntoIterator for DataResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DataResult<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
