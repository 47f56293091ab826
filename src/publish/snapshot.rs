// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search snapshot: a JSON array of `SearchRecord`s that a client (or
//! `garden search`) builds its `SearchIndex` from.

use std::path::Path;

use crate::error::{GardenError, Result};
use crate::types::{ContentItem, SearchRecord};

/// Snapshot file name under the output directory.
pub const SNAPSHOT_FILE: &str = "search-index.json";

/// Prebuilt inverted index file name under the output directory.
pub const PREBUILT_INDEX_FILE: &str = "search-index.inverted.json";

/// Records for every public writing, in the order given.
pub fn snapshot_records<'a>(items: impl IntoIterator<Item = &'a ContentItem>) -> Vec<SearchRecord> {
    items
        .into_iter()
        .filter(|item| item.is_public)
        .map(SearchRecord::from)
        .collect()
}

/// Pretty-printed snapshot JSON.
pub fn render_search_snapshot<'a>(
    items: impl IntoIterator<Item = &'a ContentItem>,
) -> Result<String> {
    serde_json::to_string_pretty(&snapshot_records(items)).map_err(|source| {
        GardenError::Serialize {
            what: "search snapshot",
            source,
        }
    })
}

/// Parse a snapshot previously written by `render_search_snapshot`.
pub fn parse_search_snapshot(path: &Path, json: &str) -> Result<Vec<SearchRecord>> {
    serde_json::from_str(json).map_err(|source| GardenError::SearchData {
        path: path.to_path_buf(),
        source,
    })
}
