// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Display helpers for writing cards and page headers.

use chrono::NaiveDate;

/// "Less than 1 min read", "1 min read", "7 min read".
pub fn format_reading_time(minutes: u32) -> String {
    match minutes {
        0 => "Less than 1 min read".to_string(),
        1 => "1 min read".to_string(),
        n => format!("{} min read", n),
    }
}

/// Long US-style date: "January 15, 2024".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Shorten `text` to at most `max_chars` characters plus "...".
/// Text that already fits is returned unchanged.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim())
}
