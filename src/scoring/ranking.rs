// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking related writings.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Published date** - newest first
//! 3. **Slug** - ascending, so equal dates still order the same way every run
//!
//! The result depends only on the inputs. Nothing is cached between calls;
//! every call rescans the whole collection.

use std::cmp::Ordering;

use super::core::score;
use crate::types::ContentItem;

/// How many related writings a page shows unless told otherwise.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// Compare two scored candidates for ranking. `Ordering::Less` means `a`
/// ranks first.
pub fn compare_related(a: (&ContentItem, u32), b: (&ContentItem, u32)) -> Ordering {
    b.1.cmp(&a.1)
        .then_with(|| b.0.published_date.cmp(&a.0.published_date))
        .then_with(|| a.0.slug.cmp(&b.0.slug))
}

/// The writings most related to `target_slug`, best first, at most `limit`.
///
/// An unknown slug yields an empty list. The target never appears in its own
/// results, and neither does anything scoring zero.
pub fn related_to<'a>(
    target_slug: &str,
    items: &'a [ContentItem],
    limit: usize,
) -> Vec<&'a ContentItem> {
    let Some(target) = items.iter().find(|item| item.slug == target_slug) else {
        return Vec::new();
    };

    let mut scored: Vec<(&ContentItem, u32)> = items
        .iter()
        .filter(|candidate| candidate.slug != target_slug)
        .map(|candidate| (candidate, score(target, candidate)))
        .filter(|&(_, s)| s > 0)
        .collect();

    scored.sort_by(|a, b| compare_related(*a, *b));
    scored.into_iter().take(limit).map(|(item, _)| item).collect()
}
