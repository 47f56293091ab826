// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Directory-level loading, in parallel when the `parallel` feature is on.
//!
//! Reading and parsing files is embarrassingly parallel, so with the default
//! features every file goes through `par_iter()`. Order is restored
//! afterwards by `Collection::new`, so parallelism never shows in the output.
//!
//! A missing content directory is an empty garden, not an error.

use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use super::collection::Collection;
use super::frontmatter::parse_document;
use super::reading::DEFAULT_WORDS_PER_MINUTE;
use crate::error::{GardenError, Result};
use crate::types::ContentItem;

/// Recognized content file extensions, in lookup priority order.
pub const CONTENT_EXTENSIONS: [&str; 2] = ["mdx", "md"];

/// Knobs that affect how a file becomes a `ContentItem`.
#[derive(Clone, Debug)]
pub struct LoadOptions {
    pub words_per_minute: u32,
    /// Date assigned to writings whose header has no `date`.
    pub today: NaiveDate,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            today: Local::now().date_naive(),
        }
    }
}

impl LoadOptions {
    pub fn from_config(config: &crate::config::GardenConfig) -> Self {
        LoadOptions {
            words_per_minute: config.words_per_minute,
            ..LoadOptions::default()
        }
    }
}

fn content_stem(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    if !CONTENT_EXTENSIONS.contains(&ext) {
        return None;
    }
    path.file_stem()?.to_str().map(str::to_string)
}

/// List the identifiers (file stems) of every content file in `dir`, sorted
/// and deduplicated. `foo.md` and `foo.mdx` share the identifier `foo`.
pub fn list_slugs(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "content directory missing");
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir).map_err(|source| GardenError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut slugs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| GardenError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match content_stem(&path) {
            Some(stem) => slugs.push(stem),
            None => tracing::trace!(path = %path.display(), "skipping non-content file"),
        }
    }

    slugs.sort();
    slugs.dedup();
    Ok(slugs)
}

/// Resolve the file backing an identifier, preferring `.mdx` over `.md`.
fn resolve_path(dir: &Path, stem: &str) -> Option<PathBuf> {
    let mut found = CONTENT_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", stem, ext)))
        .filter(|path| path.is_file());

    let chosen = found.next()?;
    if let Some(shadowed) = found.next() {
        tracing::warn!(
            used = %chosen.display(),
            ignored = %shadowed.display(),
            "two files share one identifier"
        );
    }
    Some(chosen)
}

fn load_path(path: &Path, stem: &str, options: &LoadOptions) -> Result<ContentItem> {
    let raw = fs::read_to_string(path).map_err(|source| GardenError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&raw, stem, path, options)
}

/// Load a single writing by file identifier (the file stem, not a declared
/// `slug`). `Ok(None)` when no file exists. Use `Collection::get` to look a
/// writing up by the slug it declares.
pub fn load_item(dir: &Path, slug: &str, options: &LoadOptions) -> Result<Option<ContentItem>> {
    match resolve_path(dir, slug) {
        Some(path) => load_path(&path, slug, options).map(Some),
        None => Ok(None),
    }
}

/// Load every writing in `dir` into a sorted, slug-unique `Collection`.
#[cfg(feature = "parallel")]
pub fn load_collection(dir: &Path, options: &LoadOptions) -> Result<Collection> {
    let slugs = list_slugs(dir)?;
    let items = slugs
        .par_iter()
        .filter_map(|stem| resolve_path(dir, stem).map(|path| (stem, path)))
        .map(|(stem, path)| load_path(&path, stem, options))
        .collect::<Result<Vec<ContentItem>>>()?;
    Collection::new(items)
}

/// Load every writing in `dir` into a sorted, slug-unique `Collection`.
#[cfg(not(feature = "parallel"))]
pub fn load_collection(dir: &Path, options: &LoadOptions) -> Result<Collection> {
    let slugs = list_slugs(dir)?;
    let mut items = Vec::with_capacity(slugs.len());
    for stem in &slugs {
        if let Some(item) = load_item(dir, stem, options)? {
            items.push(item);
        }
    }
    Collection::new(items)
}

/// Load every writing in parallel, advancing `progress` once per file.
#[cfg(feature = "parallel")]
pub fn load_collection_with_progress(
    dir: &Path,
    options: &LoadOptions,
    progress: &ProgressBar,
) -> Result<Collection> {
    let slugs = list_slugs(dir)?;
    let total = slugs.len();
    progress.set_length(total as u64);
    let counter = AtomicUsize::new(0);

    let items = slugs
        .par_iter()
        .filter_map(|stem| resolve_path(dir, stem).map(|path| (stem, path)))
        .map(|(stem, path)| {
            let item = load_path(&path, stem, options)?;

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            Ok(item)
        })
        .collect::<Result<Vec<ContentItem>>>()?;

    Collection::new(items)
}
