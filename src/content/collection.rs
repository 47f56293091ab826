// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The loaded garden: every writing, newest first, addressable by slug.

use std::collections::HashMap;

use crate::error::{GardenError, Result};
use crate::types::{ContentItem, SearchRecord};

/// An immutable, ordered set of writings with unique slugs.
///
/// Order is published date descending, slug ascending within a day. Nothing
/// mutates a `Collection` after construction; reloading means building a new
/// one.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    items: Vec<ContentItem>,
    by_slug: HashMap<String, usize>,
}

impl Collection {
    /// Sort `items` and index them by slug. Two items with the same slug are
    /// rejected rather than letting one silently replace the other.
    pub fn new(mut items: Vec<ContentItem>) -> Result<Self> {
        items.sort_by(|a, b| {
            b.published_date
                .cmp(&a.published_date)
                .then_with(|| a.slug.cmp(&b.slug))
        });

        let mut by_slug = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if let Some(&existing) = by_slug.get(&item.slug) {
                let first: &ContentItem = &items[existing];
                tracing::error!(slug = %item.slug, "duplicate slug");
                return Err(GardenError::DuplicateSlug {
                    slug: item.slug.clone(),
                    first: first.source.clone(),
                    second: item.source.clone(),
                });
            }
            by_slug.insert(item.slug.clone(), position);
        }

        Ok(Collection { items, by_slug })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All writings, drafts included, newest first.
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn get(&self, slug: &str) -> Option<&ContentItem> {
        self.by_slug.get(slug).map(|&i| &self.items[i])
    }

    /// Writings that get a route, a feed entry and a search entry.
    pub fn public_items(&self) -> impl Iterator<Item = &ContentItem> {
        self.items.iter().filter(|item| item.is_public)
    }

    /// Tag usage across all writings, most used first, ties alphabetical.
    pub fn tag_counts(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for item in &self.items {
            for tag in &item.tags {
                *counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }

        let mut counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(tag, n)| (tag.to_string(), n))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }

    /// Search projection of every writing, in collection order.
    pub fn search_records(&self) -> Vec<SearchRecord> {
        self.items.iter().map(SearchRecord::from).collect()
    }
}
