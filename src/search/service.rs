// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! An owned, swappable search index for long-lived callers.
//!
//! Readers take a cheap `Arc` clone of the current index and search it
//! without holding the lock. `rebuild` builds the replacement outside the
//! lock and swaps it in, so a query never observes a half-built index and a
//! rebuild never waits on a slow query.

use parking_lot::RwLock;
use std::sync::Arc;

use super::index::SearchIndex;
use super::query::QuerySource;
use crate::types::SearchRecord;

#[derive(Debug, Default)]
pub struct SearchService {
    current: RwLock<Arc<SearchIndex>>,
}

impl SearchService {
    pub fn new(index: SearchIndex) -> Self {
        SearchService {
            current: RwLock::new(Arc::new(index)),
        }
    }

    pub fn from_records(records: Vec<SearchRecord>) -> Self {
        Self::new(SearchIndex::build(records))
    }

    /// The index queries currently run against.
    pub fn snapshot(&self) -> Arc<SearchIndex> {
        Arc::clone(&self.current.read())
    }

    /// Replace the index with one built from `records`. Returns the new index.
    pub fn rebuild(&self, records: Vec<SearchRecord>) -> Arc<SearchIndex> {
        let fresh = Arc::new(SearchIndex::build(records));
        *self.current.write() = Arc::clone(&fresh);
        tracing::debug!(records = fresh.len(), "search index rebuilt");
        fresh
    }

    /// Search the current index. Results are owned so they outlive a rebuild.
    pub fn query(&self, text: &str, limit: usize) -> Vec<SearchRecord> {
        self.query_detailed(text, limit).0
    }

    pub fn query_detailed(&self, text: &str, limit: usize) -> (Vec<SearchRecord>, QuerySource) {
        let index = self.snapshot();
        let outcome = index.query_detailed(text, limit);
        (outcome.hits.into_iter().cloned().collect(), outcome.source)
    }
}
