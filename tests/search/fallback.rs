//! A malformed prebuilt index degrades to the linear scan.

use garden::search::fallback::scan;
use garden::{GardenError, QuerySource, SearchIndex, SearchRecord};
use serde_json::{json, Value};
use std::path::Path;

use crate::common::{private_record, record};

fn slugs(hits: &[&SearchRecord]) -> Vec<String> {
    hits.iter().map(|r| r.slug.clone()).collect()
}

fn index_json() -> Value {
    let index = SearchIndex::build(vec![
        record("compost", "Compost Basics", "Scraps become soil", &["garden"]),
        record("mulch", "Mulch Matters", "Cover the beds", &["garden"]),
        private_record("draft", "Compost Draft", "", &[]),
    ]);
    serde_json::from_str(&index.to_json().unwrap()).unwrap()
}

fn load(value: Value) -> SearchIndex {
    SearchIndex::from_json(Path::new("search-index.inverted.json"), &value.to_string()).unwrap()
}

#[test]
fn test_missing_field_tables_use_scan() {
    let mut value = index_json();
    value["fields"] = json!([]);
    let index = load(value);

    assert!(index.validate().is_err());
    let outcome = index.query_detailed("compost", 10);
    assert_eq!(outcome.source, QuerySource::Fallback);
    assert_eq!(slugs(&outcome.hits), vec!["compost"]);
}

#[test]
fn test_dangling_posting_uses_scan() {
    let mut value = index_json();
    value["records"]
        .as_array_mut()
        .unwrap()
        .truncate(1);
    let index = load(value);

    let outcome = index.query_detailed("garden", 10);
    assert_eq!(outcome.source, QuerySource::Fallback);
    assert_eq!(slugs(&outcome.hits), vec!["compost"]);
}

#[test]
fn test_unsorted_title_vocabulary_uses_scan() {
    let index = SearchIndex::build(vec![
        record("a", "Apple Banana Cherry", "", &[]),
        record("z", "Zebra Yak", "", &[]),
    ]);
    let mut value: Value = serde_json::from_str(&index.to_json().unwrap()).unwrap();
    value["fields"][0]["vocabulary"].as_array_mut().unwrap().reverse();
    value["fields"][0]["postings"].as_array_mut().unwrap().reverse();
    let index = load(value);

    let outcome = index.query_detailed("apple", 10);
    assert_eq!(outcome.source, QuerySource::Fallback);
    assert_eq!(slugs(&outcome.hits), vec!["a"]);
}

#[test]
fn test_vocabulary_postings_length_mismatch_uses_scan() {
    let mut value = index_json();
    value["fields"][0]["postings"].as_array_mut().unwrap().pop();
    let index = load(value);

    let outcome = index.query_detailed("mulch", 10);
    assert_eq!(outcome.source, QuerySource::Fallback);
    assert_eq!(slugs(&outcome.hits), vec!["mulch"]);
}

#[test]
fn test_scan_trims_surrounding_whitespace() {
    let mut value = index_json();
    value["fields"] = json!([]);
    let index = load(value);

    let outcome = index.query_detailed("  mulch\t", 10);
    assert_eq!(outcome.source, QuerySource::Fallback);
    assert_eq!(slugs(&outcome.hits), vec!["mulch"]);
    assert_eq!(slugs(&scan(index.records(), " compost basics ", 10)), vec!["compost"]);
}

#[test]
fn test_scan_matches_substrings_not_just_prefixes() {
    let mut value = index_json();
    value["fields"] = json!([]);
    let index = load(value);

    // "ulch" is inside a word; the index would never match it
    assert_eq!(slugs(&index.query("ulch", 10)), vec!["mulch"]);
    assert_eq!(slugs(&index.query("GARDEN", 10)), vec!["compost", "mulch"]);
    assert_eq!(index.query("garden", 1).len(), 1);
}

#[test]
fn test_blank_query_skips_scan() {
    let mut value = index_json();
    value["fields"] = json!([]);
    let index = load(value);

    let outcome = index.query_detailed("   ", 10);
    assert_eq!(outcome.source, QuerySource::Blank);
    assert!(outcome.hits.is_empty());
}

#[test]
fn test_unparseable_json_is_load_error() {
    let err = SearchIndex::from_json(Path::new("bad.json"), "{\"records\": 7}").unwrap_err();
    assert!(matches!(err, GardenError::SearchData { .. }));
    assert!(err.to_string().contains("bad.json"), "{err}");
}

#[test]
fn test_scan_directly() {
    let records = vec![
        record("a", "Seed Saving", "", &["Heirloom"]),
        private_record("b", "Seed Swap", "", &[]),
    ];
    assert_eq!(slugs(&scan(&records, "heir", 10)), vec!["a"]);
    assert_eq!(slugs(&scan(&records, "seed", 10)), vec!["a"]);
    assert!(scan(&records, "  ", 10).is_empty());
}
