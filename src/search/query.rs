// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query execution: field search, merge, visibility filter, limit.
//!
//! ```text
//! text ─▶ blank? ──yes──▶ []                                  (Blank)
//!           │no
//!           ▼
//!        tokenize ─▶ title ─┐
//!                  ─▶ excerpt ─▶ ResultMerger ─▶ visible ─▶ limit   (Index)
//!                  ─▶ tags ──┘
//!           │ SearchError
//!           ▼
//!        fallback::scan ─▶ limit                               (Fallback)
//! ```
//!
//! The caller never sees a `SearchError`. A broken index costs result quality
//! (substring instead of ranked prefix matching), not availability.

use serde::Serialize;

use super::dedup::ResultMerger;
use super::fallback;
use super::index::{SearchField, SearchIndex};
use crate::error::SearchError;
use crate::types::SearchRecord;
use crate::utils::tokenize;

/// How many results a query returns unless told otherwise.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Which path answered a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuerySource {
    /// Query text was empty or whitespace; nothing was searched.
    Blank,
    /// Answered from the inverted index.
    Index,
    /// The index failed and the linear scan answered.
    Fallback,
}

/// Results of a query together with the path that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome<'a> {
    pub hits: Vec<&'a SearchRecord>,
    pub source: QuerySource,
}

impl SearchIndex {
    /// Search for `text`, returning at most `limit` visible records.
    pub fn query(&self, text: &str, limit: usize) -> Vec<&SearchRecord> {
        self.query_detailed(text, limit).hits
    }

    /// Like `query`, but also reports which path answered.
    pub fn query_detailed(&self, text: &str, limit: usize) -> QueryOutcome<'_> {
        if text.trim().is_empty() {
            return QueryOutcome {
                hits: Vec::new(),
                source: QuerySource::Blank,
            };
        }

        match self.query_index(text, limit) {
            Ok(hits) => QueryOutcome {
                hits,
                source: QuerySource::Index,
            },
            Err(err) => {
                tracing::warn!(error = %err, query = text, "search index failed, scanning records");
                QueryOutcome {
                    hits: fallback::scan(&self.records, text, limit),
                    source: QuerySource::Fallback,
                }
            }
        }
    }

    /// The ranked prefix search. Errors only on a malformed index.
    ///
    /// The tables are validated before any lookup: binary search over an
    /// unsorted vocabulary would quietly miss terms instead of failing.
    pub fn query_index(&self, text: &str, limit: usize) -> Result<Vec<&SearchRecord>, SearchError> {
        self.validate()?;

        let terms = tokenize(text);
        let mut merger = ResultMerger::with_capacity(limit);

        for &field in &SearchField::ALL {
            let matches = self.field(field)?.search(&terms, self.records.len())?;
            merger.merge_all(matches.into_iter().map(|m| m.record));
        }

        Ok(merger
            .into_ids()
            .into_iter()
            .filter_map(|id| self.records.get(id as usize))
            .filter(|record| record.is_visible())
            .take(limit)
            .collect())
    }
}
