// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subcommand handlers. Each one loads what it needs, calls into the library
//! and prints. Progress and status go to stderr, results to stdout.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use garden::format::{format_date, format_reading_time, truncate};
use garden::publish::parse_search_snapshot;
use garden::{
    related_to, score, write_site, Collection, ContentItem, GardenConfig, LoadOptions,
    PublishOptions, SearchIndex,
};

use super::display::{
    format_size, pad_right, row, score_value, section_bot, section_top, source_label,
    status_badge, tag_list, themed, BOLD, CYAN, GRAY,
};

#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Load the whole collection, with a progress bar when loading in parallel.
fn load(config: &GardenConfig) -> Result<Collection> {
    let options = LoadOptions::from_config(config);
    let dir = config.content_dir.as_path();

    #[cfg(feature = "parallel")]
    let collection = {
        let multi = MultiProgress::new();
        let load_pb = multi.add(ProgressBar::new(0));
        load_pb.set_style(create_progress_style());
        load_pb.set_prefix("Loading");
        load_pb.set_message("writings...");

        let collection = garden::content::load_collection_with_progress(dir, &options, &load_pb)
            .with_context(|| format!("loading writings from {}", dir.display()))?;
        load_pb.finish_with_message(format!("loaded {} writings", collection.len()));
        collection
    };

    #[cfg(not(feature = "parallel"))]
    let collection = garden::load_collection(dir, &options)
        .with_context(|| format!("loading writings from {}", dir.display()))?;

    Ok(collection)
}

/// Look a writing up by its declared slug, which may differ from its file name.
fn find_writing<'a>(
    collection: &'a Collection,
    config: &GardenConfig,
    slug: &str,
) -> Result<&'a ContentItem> {
    match collection.get(slug) {
        Some(item) => Ok(item),
        None => bail!("no writing with slug {:?} in {}", slug, config.content_dir.display()),
    }
}

pub fn run_build(config: &GardenConfig, out_dir: &Path, prebuilt_index: bool) -> Result<()> {
    let collection = load(config)?;

    if collection.is_empty() {
        eprintln!(
            "⚠️  No writings found in {}; writing empty artifacts",
            config.content_dir.display()
        );
    }

    let options = PublishOptions {
        prebuilt_index,
        ..PublishOptions::default()
    };
    let summary = write_site(&collection, config, out_dir, &options)
        .with_context(|| format!("writing site artifacts to {}", out_dir.display()))?;

    for file in &summary.files {
        eprintln!("  ✓ {} ({})", file.path.display(), format_size(file.bytes));
    }

    eprintln!();
    eprintln!("✅ Build complete");
    eprintln!(
        "   {} writings │ {} public │ {} terms │ {}",
        summary.total_items,
        summary.public_items,
        summary.indexed_terms,
        format_size(summary.total_bytes())
    );
    Ok(())
}

/// Where `garden search` reads its records from.
pub enum SearchSource<'a> {
    Content,
    Snapshot(&'a Path),
    Prebuilt(&'a Path),
}

fn load_index(config: &GardenConfig, source: SearchSource<'_>) -> Result<SearchIndex> {
    match source {
        SearchSource::Content => Ok(SearchIndex::build(load(config)?.search_records())),
        SearchSource::Snapshot(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Ok(SearchIndex::build(parse_search_snapshot(path, &json)?))
        }
        SearchSource::Prebuilt(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Ok(SearchIndex::from_json(path, &json)?)
        }
    }
}

pub fn run_search(
    config: &GardenConfig,
    query: &str,
    limit: usize,
    source: SearchSource<'_>,
) -> Result<()> {
    let index = load_index(config, source)?;
    let outcome = index.query_detailed(query, limit);

    section_top(&format!("SEARCH \"{}\"", truncate(query, 40)));
    row(&format!(
        "{} results via {}",
        outcome.hits.len(),
        source_label(outcome.source)
    ));
    for record in &outcome.hits {
        row("");
        row(&themed(CYAN, &[BOLD], &truncate(&record.title, 68)));
        row(&themed(GRAY, &[], &format!("/writings/{}", record.slug)));
        if !record.excerpt.is_empty() {
            row(&truncate(&record.excerpt, 68));
        }
        if !record.tags.is_empty() {
            row(&tag_list(&record.tags));
        }
    }
    section_bot();
    Ok(())
}

pub fn run_related(config: &GardenConfig, slug: &str, limit: usize) -> Result<()> {
    let collection = load(config)?;
    let target = find_writing(&collection, config, slug)?;

    let related = related_to(slug, collection.items(), limit);

    section_top(&format!("RELATED TO {}", truncate(&target.title, 50)));
    if related.is_empty() {
        row(&themed(GRAY, &[], "nothing shares a tag or a backlink"));
    }
    for item in related {
        row(&format!(
            "{}  {}  {}",
            score_value(score(target, item)),
            pad_right(&truncate(&item.title, 44), 44),
            themed(GRAY, &[], &format_date(item.published_date))
        ));
    }
    section_bot();
    Ok(())
}

pub fn run_tags(config: &GardenConfig) -> Result<()> {
    let collection = load(config)?;
    let counts = collection.tag_counts();

    section_top("TAGS");
    if counts.is_empty() {
        row(&themed(GRAY, &[], "no tags"));
    }
    for (tag, count) in counts {
        row(&format!("{:>4}  #{}", count, tag));
    }
    section_bot();
    Ok(())
}

pub fn run_toc(config: &GardenConfig, slug: &str) -> Result<()> {
    let collection = load(config)?;
    let item = find_writing(&collection, config, slug)?;

    section_top(&truncate(&item.title, 60));
    row(&format!(
        "{}  {}  {}",
        status_badge(item.status),
        format_reading_time(item.reading_minutes),
        themed(GRAY, &[], &format!("tended {}", format_date(item.revised_date)))
    ));
    row("");
    if item.headings.is_empty() {
        row(&themed(GRAY, &[], "no headings"));
    }
    for heading in &item.headings {
        let indent = "  ".repeat(usize::from(heading.level.saturating_sub(1)));
        row(&format!(
            "{}{} {}",
            indent,
            truncate(&heading.text, 50),
            themed(GRAY, &[], &format!("#{}", heading.id))
        ));
    }
    section_bot();
    Ok(())
}
