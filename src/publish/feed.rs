// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! RSS 2.0 feed of public writings.

use chrono::{DateTime, NaiveDate, Utc};

use super::escape_xml;
use crate::config::GardenConfig;
use crate::types::ContentItem;

/// Feed file name under the output directory.
pub const FEED_FILE: &str = "rss.xml";

fn rfc2822(date: NaiveDate) -> String {
    date.and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc().to_rfc2822())
        .unwrap_or_default()
}

/// Render the feed. Drafts are skipped; items keep the order given.
pub fn render_feed<'a>(
    items: impl IntoIterator<Item = &'a ContentItem>,
    config: &GardenConfig,
    build_time: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<rss version=\"2.0\" xmlns:atom=\"http://www.w3.org/2005/Atom\">\n");
    out.push_str("  <channel>\n");
    out.push_str(&format!("    <title>{}</title>\n", escape_xml(&config.site_title)));
    out.push_str(&format!("    <link>{}</link>\n", escape_xml(&config.site_url)));
    out.push_str(&format!(
        "    <description>{}</description>\n",
        escape_xml(&config.site_description)
    ));
    out.push_str(&format!("    <language>{}</language>\n", escape_xml(&config.language)));
    out.push_str(&format!(
        "    <lastBuildDate>{}</lastBuildDate>\n",
        build_time.to_rfc2822()
    ));
    out.push_str(&format!(
        "    <atom:link href=\"{}\" rel=\"self\" type=\"application/rss+xml\"/>\n",
        escape_xml(&config.url(&format!("/{}", FEED_FILE)))
    ));

    for item in items.into_iter().filter(|item| item.is_public) {
        let link = escape_xml(&config.url(&item.path()));
        out.push_str("    <item>\n");
        out.push_str(&format!("      <title>{}</title>\n", escape_xml(&item.title)));
        out.push_str(&format!("      <link>{}</link>\n", link));
        out.push_str(&format!("      <guid isPermaLink=\"true\">{}</guid>\n", link));
        out.push_str(&format!(
            "      <description>{}</description>\n",
            escape_xml(&item.excerpt)
        ));
        out.push_str(&format!(
            "      <pubDate>{}</pubDate>\n",
            rfc2822(item.published_date)
        ));
        for tag in &item.tags {
            out.push_str(&format!("      <category>{}</category>\n", escape_xml(tag)));
        }
        out.push_str("    </item>\n");
    }

    out.push_str("  </channel>\n");
    out.push_str("</rss>\n");
    out
}
