// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! sitemap.xml: the home page plus one entry per public writing.

use chrono::NaiveDate;

use super::escape_xml;
use crate::config::GardenConfig;
use crate::types::ContentItem;

/// Sitemap file name under the output directory.
pub const SITEMAP_FILE: &str = "sitemap.xml";

struct Entry {
    loc: String,
    lastmod: NaiveDate,
    changefreq: &'static str,
    priority: &'static str,
}

/// Render the sitemap. `today` is the home page's `lastmod`.
pub fn render_sitemap<'a>(
    items: impl IntoIterator<Item = &'a ContentItem>,
    config: &GardenConfig,
    today: NaiveDate,
) -> String {
    let home = Entry {
        loc: config.url("/"),
        lastmod: today,
        changefreq: "weekly",
        priority: "1.0",
    };
    let writings = items
        .into_iter()
        .filter(|item| item.is_public)
        .map(|item| Entry {
            loc: config.url(&item.path()),
            lastmod: item.revised_date,
            changefreq: "monthly",
            priority: "0.8",
        });

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for entry in std::iter::once(home).chain(writings) {
        out.push_str("  <url>\n");
        out.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
        out.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.lastmod.format("%Y-%m-%d")
        ));
        out.push_str(&format!("    <changefreq>{}</changefreq>\n", entry.changefreq));
        out.push_str(&format!("    <priority>{}</priority>\n", entry.priority));
        out.push_str("  </url>\n");
    }
    out.push_str("</urlset>\n");
    out
}
