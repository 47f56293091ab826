//! Header defaults and reading statistics for files on disk.

use garden::{load_item, GardenError, GrowthStatus, DEFAULT_AUDIENCE, UNTITLED};

use crate::common::{date, options, Garden};

#[test]
fn test_headerless_file_gets_defaults() {
    let garden = Garden::new();
    garden.raw("bare.md", "Just a few words.\n");

    let item = load_item(garden.path(), "bare", &options()).unwrap().unwrap();
    assert_eq!(item.slug, "bare");
    assert_eq!(item.title, UNTITLED);
    assert_eq!(item.intended_audience, DEFAULT_AUDIENCE);
    assert_eq!(item.status, GrowthStatus::Sprout);
    assert_eq!(item.published_date, date("2025-06-01"));
    assert_eq!(item.revised_date, item.published_date);
    assert_eq!(item.hits, 0);
    assert!(item.is_public);
    assert!(item.tags.is_empty());
}

#[test]
fn test_declared_slug_overrides_stem() {
    let garden = Garden::new();
    garden.writing("2024-01-01-notes", &["slug: notes"], "Body\n");

    let item = load_item(garden.path(), "2024-01-01-notes", &options()).unwrap().unwrap();
    assert_eq!(item.slug, "notes");
}

#[test]
fn test_unclosed_header_is_body() {
    let garden = Garden::new();
    garden.raw("open.mdx", "---\ntitle: Never closed\n\nStill writing.\n");

    let item = load_item(garden.path(), "open", &options()).unwrap().unwrap();
    assert_eq!(item.title, UNTITLED);
    assert!(item.body.contains("Never closed"));
}

#[test]
fn test_invalid_date_is_error() {
    let garden = Garden::new();
    garden.writing("when", &["date: sometime soon"], "Body\n");

    let err = load_item(garden.path(), "when", &options()).unwrap_err();
    match err {
        GardenError::InvalidDate { field, value, .. } => {
            assert_eq!(field, "date");
            assert_eq!(value, "sometime soon");
        }
        other => panic!("expected InvalidDate, got {other}"),
    }
}

#[test]
fn test_reading_time_uses_words_per_minute() {
    let garden = Garden::new();
    let body = "word ".repeat(450);
    garden.writing("long", &["title: Long"], &body);

    let item = load_item(garden.path(), "long", &options()).unwrap().unwrap();
    assert_eq!(item.word_count, 450);
    assert_eq!(item.reading_minutes, 3);

    let mut fast = options();
    fast.words_per_minute = 500;
    let item = load_item(garden.path(), "long", &fast).unwrap().unwrap();
    assert_eq!(item.reading_minutes, 1);
}

#[test]
fn test_optional_fields() {
    let garden = Garden::new();
    garden.writing(
        "full",
        &[
            "title: Full",
            "author: Sam",
            "hits: 42",
            "image: /img/full.png",
            "intendedAudience: GARDENERS",
        ],
        "Body\n",
    );

    let item = load_item(garden.path(), "full", &options()).unwrap().unwrap();
    assert_eq!(item.author.as_deref(), Some("Sam"));
    assert_eq!(item.hits, 42);
    assert_eq!(item.image.as_deref(), Some("/img/full.png"));
    assert_eq!(item.intended_audience, "GARDENERS");
}
