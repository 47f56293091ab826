// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Frontmatter parsing: split the `---` header from the body, then apply the
//! defaults that turn an authored header into a `ContentItem`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::path::Path;

use super::loader::LoadOptions;
use super::reading::{reading_minutes, word_count};
use super::toc::extract_headings;
use crate::error::{GardenError, Result};
use crate::types::{ContentItem, Frontmatter, DEFAULT_AUDIENCE, UNTITLED};

const FENCE: &str = "---";

/// Split a raw file into `(header, body)`.
///
/// The header exists only when the very first line is `---` and a later line
/// is `---` as well. Anything else, including an opening fence that is never
/// closed, is treated as a file with no header.
pub fn split_frontmatter(raw: &str) -> (Option<&str>, &str) {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let Some(first_line_end) = raw.find('\n') else {
        return (None, raw);
    };
    if raw[..first_line_end].trim_end() != FENCE {
        return (None, raw);
    }

    let header_start = first_line_end + 1;
    let mut offset = header_start;
    for line in raw[header_start..].split_inclusive('\n') {
        if line.trim_end() == FENCE {
            let header = &raw[header_start..offset];
            let body = &raw[offset + line.len()..];
            return (Some(header), body);
        }
        offset += line.len();
    }

    (None, raw)
}

/// Parse a calendar date written as `YYYY-MM-DD` or as a full timestamp.
/// Only the date part of a timestamp is kept.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return Some(stamp.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .map(|stamp| stamp.date())
}

fn parse_header(header: Option<&str>, path: &Path) -> Result<Frontmatter> {
    match header {
        Some(yaml) if !yaml.trim().is_empty() => {
            serde_yaml::from_str(yaml).map_err(|source| GardenError::Frontmatter {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => Ok(Frontmatter::default()),
    }
}

fn resolve_date(
    value: Option<&str>,
    field: &'static str,
    path: &Path,
) -> Result<Option<NaiveDate>> {
    match value {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_date(raw).map(Some).ok_or_else(|| GardenError::InvalidDate {
            path: path.to_path_buf(),
            field,
            value: raw.to_string(),
        }),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Parse one content file into a `ContentItem`.
///
/// `fallback_slug` (normally the file stem) is used when the header does not
/// declare a slug. `path` is only used for error messages and provenance.
pub fn parse_document(
    raw: &str,
    fallback_slug: &str,
    path: &Path,
    options: &LoadOptions,
) -> Result<ContentItem> {
    let (header, body) = split_frontmatter(raw);
    let fm = parse_header(header, path)?;

    let published_date =
        resolve_date(fm.date.as_deref(), "date", path)?.unwrap_or(options.today);
    let revised_date =
        resolve_date(fm.tended_date.as_deref(), "tendedDate", path)?.unwrap_or(published_date);

    let words = word_count(body);

    Ok(ContentItem {
        slug: non_empty(fm.slug).unwrap_or_else(|| fallback_slug.to_string()),
        title: non_empty(fm.title).unwrap_or_else(|| UNTITLED.to_string()),
        author: non_empty(fm.author),
        excerpt: fm.excerpt.unwrap_or_default(),
        published_date,
        revised_date,
        status: fm.status.unwrap_or_default(),
        intended_audience: non_empty(fm.intended_audience)
            .unwrap_or_else(|| DEFAULT_AUDIENCE.to_string()),
        hits: fm.hits.unwrap_or(0),
        tags: fm.tags,
        backlinks: fm.backlinks,
        image: non_empty(fm.image),
        is_public: fm.is_public.unwrap_or(true),
        body: body.to_string(),
        word_count: words,
        reading_minutes: reading_minutes(words, options.words_per_minute),
        headings: extract_headings(body),
        source: path.to_path_buf(),
    })
}
