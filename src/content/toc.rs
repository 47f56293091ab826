// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Table-of-contents extraction.
//!
//! Headings of level 1 through 4 become navigation entries. Ids follow the
//! same rule the page renderer uses for anchors (see `utils::slugify`), with
//! `heading-<n>` for headings that have no alphanumeric text and a numeric
//! suffix when two headings would otherwise share an id.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use std::collections::HashMap;

use crate::types::Heading;
use crate::utils::slugify;

/// Deepest heading level included in the table of contents.
pub const MAX_TOC_LEVEL: u8 = 4;

fn level_number(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Extract the table of contents from a Markdown body.
pub fn extract_headings(body: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    // (level, text so far) while inside a heading
    let mut current: Option<(u8, String)> = None;

    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((level_number(level), String::new()));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push(' ');
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                let Some((level, text)) = current.take() else {
                    continue;
                };
                if level > MAX_TOC_LEVEL {
                    continue;
                }

                let text = text.trim().to_string();
                let mut id = slugify(&text);
                if id.is_empty() {
                    id = format!("heading-{}", headings.len());
                }

                let count = seen.entry(id.clone()).or_insert(0);
                if *count > 0 {
                    id = format!("{}-{}", id, count);
                }
                *count += 1;

                headings.push(Heading { id, text, level });
            }
            _ => {}
        }
    }

    headings
}
