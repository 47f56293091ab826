// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where a typed query becomes a list of writings.
//!
//! Build a `SearchIndex` once from a snapshot of `SearchRecord`s, then query
//! it as often as needed. Prefix matching runs per field (title, excerpt,
//! tags) and the field lists are merged in that order with duplicates
//! dropped. Hidden records never come back. If the index turns out to be
//! malformed the query quietly degrades to a substring scan.

pub mod dedup;
pub mod fallback;
mod index;
mod query;
mod service;

pub use index::{FieldIndex, FieldMatch, Posting, SearchField, SearchIndex};
pub use query::{QueryOutcome, QuerySource, DEFAULT_SEARCH_LIMIT};
pub use service::SearchService;
