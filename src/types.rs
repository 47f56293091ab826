// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data model shared by the loader, the scorer and the search index.
//!
//! | Type             | Produced by          | Consumed by                   |
//! |------------------|----------------------|-------------------------------|
//! | `Frontmatter`    | `content::frontmatter` | `content::loader`           |
//! | `ContentItem`    | `content::loader`    | `scoring`, `publish`, CLI     |
//! | `SearchRecord`   | `ContentItem` projection | `search`, search snapshot |
//! | `Heading`        | `content::toc`       | CLI `toc`, page navigation    |
//!
//! # Invariants
//!
//! - **ContentItem**: `slug` is unique within one loaded `Collection`.
//!   `revised_date >= published_date` is *not* enforced; authors occasionally
//!   backdate and the value is display-only.
//! - **SearchRecord**: `is_public == Some(false)` hides the record from every
//!   search path. `None` means public.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Audience shown on a writing when the header does not name one.
pub const DEFAULT_AUDIENCE: &str = "SOFTWARE ENGINEERS";

/// Title used when the header has none.
pub const UNTITLED: &str = "Untitled";

// =============================================================================
// GROWTH STATUS
// =============================================================================

/// Editorial maturity of a writing. Purely cosmetic: nothing ever moves an
/// item from one status to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStatus {
    #[default]
    Sprout,
    Budding,
    Evergreen,
}

impl GrowthStatus {
    pub fn label(self) -> &'static str {
        match self {
            GrowthStatus::Sprout => "sprout",
            GrowthStatus::Budding => "budding",
            GrowthStatus::Evergreen => "evergreen",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            GrowthStatus::Sprout => "🌱",
            GrowthStatus::Budding => "🌿",
            GrowthStatus::Evergreen => "🌳",
        }
    }
}

impl fmt::Display for GrowthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// FRONTMATTER
// =============================================================================

/// The metadata header exactly as authored. Every key is optional here;
/// defaults are applied when the loader turns this into a `ContentItem`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Frontmatter {
    pub title: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub tended_date: Option<String>,
    pub status: Option<GrowthStatus>,
    pub intended_audience: Option<String>,
    pub hits: Option<u64>,
    pub tags: Vec<String>,
    pub excerpt: Option<String>,
    pub image: Option<String>,
    pub is_public: Option<bool>,
    pub slug: Option<String>,
    pub backlinks: Vec<String>,
}

// =============================================================================
// CONTENT ITEM
// =============================================================================

/// One heading in a writing's table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Anchor id, unique within the writing.
    pub id: String,
    pub text: String,
    /// 1 through 4.
    pub level: u8,
}

/// One writing, published or draft, with its derived reading statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub slug: String,
    pub title: String,
    pub author: Option<String>,
    pub excerpt: String,
    pub published_date: NaiveDate,
    /// Last time the writing was tended. Falls back to `published_date`.
    pub revised_date: NaiveDate,
    pub status: GrowthStatus,
    pub intended_audience: String,
    pub hits: u64,
    pub tags: Vec<String>,
    pub backlinks: Vec<String>,
    pub image: Option<String>,
    pub is_public: bool,
    #[serde(skip)]
    pub body: String,
    pub word_count: usize,
    pub reading_minutes: u32,
    pub headings: Vec<Heading>,
    #[serde(skip)]
    pub source: PathBuf,
}

impl ContentItem {
    /// URL path of the writing relative to the site root.
    pub fn path(&self) -> String {
        format!("/writings/{}", self.slug)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn links_to(&self, slug: &str) -> bool {
        self.backlinks.iter().any(|b| b == slug)
    }
}

// =============================================================================
// SEARCH RECORD
// =============================================================================

/// The slice of a `ContentItem` the search index sees.
///
/// This is also the element type of the published `search-index.json`
/// snapshot, so the JSON shape is part of the public contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

impl SearchRecord {
    /// Absence of the flag counts as public.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.is_public != Some(false)
    }
}

impl From<&ContentItem> for SearchRecord {
    fn from(item: &ContentItem) -> Self {
        SearchRecord {
            slug: item.slug.clone(),
            title: item.title.clone(),
            excerpt: item.excerpt.clone(),
            tags: item.tags.clone(),
            is_public: Some(item.is_public),
        }
    }
}
