// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Linear substring scan: the search path of last resort.
//!
//! Used when the inverted index turns out to be malformed. It looks only at
//! the record table, so it works as long as the records themselves load, and
//! it has no failure mode of its own.

use crate::types::SearchRecord;

/// Case-insensitive substring match of `text` against title, excerpt or any
/// tag. Hidden records are skipped. At most `limit` records, in snapshot order.
pub fn scan<'a>(records: &'a [SearchRecord], text: &str, limit: usize) -> Vec<&'a SearchRecord> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .filter(|record| record.is_visible())
        .filter(|record| {
            record.title.to_lowercase().contains(&needle)
                || record.excerpt.to_lowercase().contains(&needle)
                || record
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
        })
        .take(limit)
        .collect()
}
