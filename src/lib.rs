//! Content pipeline for a digital garden.
//!
//! Markdown/MDX writings with a YAML header go in; a sorted collection,
//! related-writing suggestions, a prefix search index and the feed, sitemap
//! and search snapshot come out.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  content    │────▶│  scoring     │     │  publish    │
//! │ (load, toc, │     │ (related_to) │     │ (rss, site- │
//! │  reading)   │──┐  └──────────────┘  ┌─▶│  map, JSON) │
//! └─────────────┘  │                    │  └─────────────┘
//!                  │  ┌──────────────┐  │
//!                  └─▶│  search      │──┘
//!                     │ (SearchIndex,│
//!                     │  fallback)   │
//!                     └──────────────┘
//! ```
//!
//! Everything below `content` is a pure function of its inputs. Nothing is
//! cached between calls; a changed garden means loading a new `Collection`
//! and building a new `SearchIndex`. Long-lived callers hold the index in a
//! `SearchService`, which swaps the new one in without blocking readers.
//!
//! # Usage
//!
//! ```ignore
//! use garden::{load_collection, related_to, LoadOptions, SearchIndex};
//!
//! let garden = load_collection(Path::new("content/writings"), &LoadOptions::default())?;
//! let related = related_to("on-compost", garden.items(), 4);
//!
//! let index = SearchIndex::build(garden.search_records());
//! let hits = index.query("comp", 10);
//! ```

// Module declarations
pub mod config;
pub mod content;
pub mod error;
pub mod format;
pub mod publish;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use config::GardenConfig;
pub use content::{
    extract_headings, list_slugs, load_collection, load_item, parse_document, Collection,
    LoadOptions,
};
pub use error::{GardenError, Result, SearchError};
pub use publish::{write_site, BuildSummary, PublishOptions};
pub use scoring::{related_to, score, DEFAULT_RELATED_LIMIT};
pub use search::{QueryOutcome, QuerySource, SearchIndex, SearchService, DEFAULT_SEARCH_LIMIT};
pub use types::{
    ContentItem, Frontmatter, GrowthStatus, Heading, SearchRecord, DEFAULT_AUDIENCE, UNTITLED,
};
pub use utils::{normalize, slugify, tokenize};
