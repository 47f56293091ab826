// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Content loading: Markdown/MDX files with a YAML header become `ContentItem`s.
//!
//! The pipeline for one file is:
//!
//! ```text
//! raw text ─▶ frontmatter::split ─▶ serde_yaml ─▶ Frontmatter
//!                    │
//!                    └─▶ body ─▶ reading::word_count ─▶ reading_minutes
//!                          └──▶ toc::extract_headings
//! ```
//!
//! `loader` runs that over a directory (in parallel with the `parallel`
//! feature) and hands the results to `Collection`, which sorts them and
//! rejects duplicate slugs.

pub mod collection;
pub mod frontmatter;
pub mod loader;
pub mod reading;
pub mod toc;

pub use collection::Collection;
pub use frontmatter::{parse_date, parse_document, split_frontmatter};
pub use loader::{list_slugs, load_collection, load_item, LoadOptions, CONTENT_EXTENSIONS};
#[cfg(feature = "parallel")]
pub use loader::load_collection_with_progress;
pub use reading::{reading_minutes, word_count, DEFAULT_WORDS_PER_MINUTE};
pub use toc::extract_headings;
