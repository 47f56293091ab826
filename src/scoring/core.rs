// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The relatedness score between two writings.
//!
//! ```text
//! score(t, c) = TAG_WEIGHT      × |distinct tags of c that t also has|
//!             + BACKLINK_WEIGHT × [t.backlinks ∋ c.slug]
//!             + BACKLINK_WEIGHT × [c.backlinks ∋ t.slug]
//! ```
//!
//! With these weights a mutual backlink (6) outranks two shared tags (4), and
//! a single backlink (3) outranks one shared tag (2).

use std::collections::HashSet;

use crate::types::ContentItem;

/// Points per tag shared between target and candidate.
pub const TAG_WEIGHT: u32 = 2;

/// Points per backlink between target and candidate, counted once per direction.
pub const BACKLINK_WEIGHT: u32 = 3;

/// Number of distinct tags the two writings have in common.
pub fn tag_overlap(target: &ContentItem, candidate: &ContentItem) -> usize {
    let target_tags: HashSet<&str> = target.tags.iter().map(String::as_str).collect();
    candidate
        .tags
        .iter()
        .map(String::as_str)
        .collect::<HashSet<&str>>()
        .intersection(&target_tags)
        .count()
}

/// Relatedness of `candidate` to `target`. Zero means unrelated.
pub fn score(target: &ContentItem, candidate: &ContentItem) -> u32 {
    let mut score = TAG_WEIGHT * tag_overlap(target, candidate) as u32;
    if target.links_to(&candidate.slug) {
        score += BACKLINK_WEIGHT;
    }
    if candidate.links_to(&target.slug) {
        score += BACKLINK_WEIGHT;
    }
    score
}
