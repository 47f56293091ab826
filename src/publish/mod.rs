// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Build-time artifacts: feed, sitemap and search snapshot.
//!
//! Each artifact is a pure `render_*` function over the collection plus a
//! `write_site` driver that puts them all in the output directory. Only
//! public writings appear in any of them.

pub mod feed;
pub mod sitemap;
pub mod snapshot;

use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::GardenConfig;
use crate::content::Collection;
use crate::error::{GardenError, Result};
use crate::search::SearchIndex;

pub use feed::{render_feed, FEED_FILE};
pub use sitemap::{render_sitemap, SITEMAP_FILE};
pub use snapshot::{
    parse_search_snapshot, render_search_snapshot, snapshot_records, PREBUILT_INDEX_FILE,
    SNAPSHOT_FILE,
};

/// Escape the five XML special characters.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// What to write and when "now" is.
#[derive(Clone, Debug)]
pub struct PublishOptions {
    pub build_time: DateTime<Utc>,
    /// Also write the serialized inverted index next to the snapshot.
    pub prebuilt_index: bool,
}

impl Default for PublishOptions {
    fn default() -> Self {
        PublishOptions {
            build_time: Utc::now(),
            prebuilt_index: false,
        }
    }
}

/// One file written by `write_site`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Outcome of a site build.
#[derive(Clone, Debug, Default)]
pub struct BuildSummary {
    pub files: Vec<WrittenFile>,
    pub total_items: usize,
    pub public_items: usize,
    pub indexed_terms: usize,
}

impl BuildSummary {
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.bytes).sum()
    }
}

fn write_file(dir: &Path, name: &str, contents: &str) -> Result<WrittenFile> {
    let path = dir.join(name);
    fs::write(&path, contents).map_err(|source| GardenError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(WrittenFile {
        path,
        bytes: contents.len(),
    })
}

/// Write every artifact for `collection` into `out_dir`, creating it if needed.
pub fn write_site(
    collection: &Collection,
    config: &GardenConfig,
    out_dir: &Path,
    options: &PublishOptions,
) -> Result<BuildSummary> {
    fs::create_dir_all(out_dir).map_err(|source| GardenError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let items = collection.items();
    let today = options.build_time.date_naive();
    let records = snapshot_records(items);
    let index = SearchIndex::build(records);

    let mut summary = BuildSummary {
        total_items: items.len(),
        public_items: index.len(),
        indexed_terms: index.term_count(),
        ..BuildSummary::default()
    };

    let feed = render_feed(items, config, options.build_time);
    summary.files.push(write_file(out_dir, FEED_FILE, &feed)?);

    let sitemap = render_sitemap(items, config, today);
    summary.files.push(write_file(out_dir, SITEMAP_FILE, &sitemap)?);

    let snapshot = render_search_snapshot(items)?;
    summary.files.push(write_file(out_dir, SNAPSHOT_FILE, &snapshot)?);

    if options.prebuilt_index {
        let json = index.to_json()?;
        summary.files.push(write_file(out_dir, PREBUILT_INDEX_FILE, &json)?);
    }

    tracing::info!(
        items = summary.total_items,
        public = summary.public_items,
        files = summary.files.len(),
        "site artifacts written"
    );
    Ok(summary)
}
