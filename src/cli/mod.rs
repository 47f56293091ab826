// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the garden command-line interface.
//!
//! Five subcommands: `build` writes the feed, sitemap and search snapshot,
//! `search` queries the writings, `related` lists suggestions for one writing,
//! `tags` prints tag counts and `toc` prints a writing's table of contents.
//! Global flags override `garden.json`, which overrides the built-in defaults.

pub mod commands;
pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "garden",
    about = "Content pipeline for a digital garden",
    version
)]
pub struct Cli {
    /// Path to the site config file
    #[arg(short, long, global = true, default_value = "garden.json")]
    pub config: PathBuf,

    /// Directory holding the .md/.mdx writings (overrides contentDir)
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,

    /// Absolute site URL used in the feed and sitemap (overrides siteUrl)
    #[arg(long, global = true, env = "SITE_URL")]
    pub site_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write rss.xml, sitemap.xml and search-index.json
    Build {
        /// Output directory (overrides outputDir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write the serialized inverted index
        ///
        /// Lets clients skip building the index at startup. A corrupt copy is
        /// tolerated: queries fall back to a linear scan of the records.
        #[arg(long)]
        prebuilt_index: bool,
    },

    /// Search titles, excerpts and tags by word prefix
    Search {
        /// Search query
        query: String,

        /// Maximum number of results (overrides searchLimit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Query a search-index.json snapshot instead of the content directory
        #[arg(long, conflicts_with = "index")]
        snapshot: Option<PathBuf>,

        /// Query a prebuilt search-index.inverted.json
        #[arg(long)]
        index: Option<PathBuf>,
    },

    /// List the writings most related to one writing
    Related {
        /// Slug of the writing
        slug: String,

        /// Maximum number of suggestions (overrides relatedLimit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print every tag with the number of writings carrying it
    Tags,

    /// Print the table of contents of one writing
    Toc {
        /// Slug of the writing
        slug: String,
    },
}
