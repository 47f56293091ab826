// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading, indexing and publishing.
//!
//! Two families. `GardenError` covers everything that touches disk: reading
//! content files, parsing headers, reading config, writing artifacts. These
//! propagate to the caller. `SearchError` covers a malformed search index and
//! never leaves the search module: `SearchIndex::query` catches it and answers
//! from the linear scan instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for fallible garden operations.
pub type Result<T, E = GardenError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum GardenError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid frontmatter in {path}: {source}")]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid {field} date {value:?} in {path}")]
    InvalidDate {
        path: PathBuf,
        field: &'static str,
        value: String,
    },

    #[error("duplicate slug {slug:?} declared by {} and {}", first.display(), second.display())]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid search data in {path}: {source}")]
    SearchData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A search index whose internal tables do not line up.
///
/// Only reachable through a deserialized prebuilt index; an index produced by
/// `SearchIndex::build` is well formed by construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("posting references record {record} but the index holds {len} records")]
    DanglingPosting { record: u32, len: usize },

    #[error("expected {expected} field tables, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("vocabulary of field {field} is not sorted at term {term:?}")]
    UnsortedVocabulary { field: &'static str, term: String },
}
