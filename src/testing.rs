//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use chrono::NaiveDate;
use std::path::PathBuf;

use crate::content::{reading_minutes, word_count, DEFAULT_WORDS_PER_MINUTE};
use crate::types::{ContentItem, GrowthStatus, SearchRecord, DEFAULT_AUDIENCE};

/// Parse a `YYYY-MM-DD` literal. Panics on malformed input.
pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("test date must be YYYY-MM-DD")
}

/// Create a public writing with the given slug, publish date and tags.
///
/// This is the canonical implementation used across all tests.
pub fn item(slug: &str, published: &str, tags: &[&str]) -> ContentItem {
    let body = format!("Notes about {}.", slug);
    let words = word_count(&body);
    ContentItem {
        slug: slug.to_string(),
        title: format!("Title of {}", slug),
        author: None,
        excerpt: format!("Excerpt for {}", slug),
        published_date: date(published),
        revised_date: date(published),
        status: GrowthStatus::Sprout,
        intended_audience: DEFAULT_AUDIENCE.to_string(),
        hits: 0,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        backlinks: Vec::new(),
        image: None,
        is_public: true,
        body,
        word_count: words,
        reading_minutes: reading_minutes(words, DEFAULT_WORDS_PER_MINUTE),
        headings: Vec::new(),
        source: PathBuf::from(format!("content/writings/{}.mdx", slug)),
    }
}

/// Same as `item`, with author-declared backlinks.
pub fn linked_item(slug: &str, published: &str, tags: &[&str], backlinks: &[&str]) -> ContentItem {
    let mut item = item(slug, published, tags);
    item.backlinks = backlinks.iter().map(|b| b.to_string()).collect();
    item
}

/// Create a search record with no explicit visibility flag.
pub fn record(slug: &str, title: &str, excerpt: &str, tags: &[&str]) -> SearchRecord {
    SearchRecord {
        slug: slug.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        is_public: None,
    }
}

/// Same as `record`, hidden from search.
pub fn private_record(slug: &str, title: &str, excerpt: &str, tags: &[&str]) -> SearchRecord {
    SearchRecord {
        is_public: Some(false),
        ..record(slug, title, excerpt, tags)
    }
}
