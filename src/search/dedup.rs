// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result deduplication across search fields.
//!
//! Each field (title, excerpt, tags) answers a query with its own ranked list,
//! and a record that matches in two fields shows up in both. The merged result
//! must list every record at most once.
//!
//! `ResultMerger` keys on the record id alone and keeps the **first**
//! occurrence. Lists are merged in field declaration order, so a title hit
//! outranks the same record's excerpt hit without any score comparison.
//!
//! **Invariant**: Each record appears at most once in search results.

use std::collections::HashSet;

/// Order-preserving, first-occurrence-wins merger of record ids.
///
/// # Example
///
/// ```ignore
/// let mut merger = ResultMerger::new();
/// merger.merge_all(title_hits);
/// merger.merge_all(excerpt_hits);
/// merger.merge_all(tag_hits);
/// let ids = merger.into_ids();
/// ```
#[derive(Debug, Default)]
pub struct ResultMerger {
    seen: HashSet<u32>,
    order: Vec<u32>,
}

impl ResultMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a merger with room for `capacity` unique records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Append `record` unless it is already present. Returns whether it was
    /// added.
    pub fn merge(&mut self, record: u32) -> bool {
        if self.seen.insert(record) {
            self.order.push(record);
            true
        } else {
            false
        }
    }

    /// Merge multiple records at once, in order.
    pub fn merge_all(&mut self, records: impl IntoIterator<Item = u32>) {
        for record in records {
            self.merge(record);
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, record: u32) -> bool {
        self.seen.contains(&record)
    }

    /// Record ids in first-seen order.
    pub fn into_ids(self) -> Vec<u32> {
        self.order
    }
}
