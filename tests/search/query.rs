//! Prefix search through the inverted index.

use garden::{load_collection, QuerySource, SearchIndex, SearchRecord, DEFAULT_SEARCH_LIMIT};

use crate::common::{options, private_record, record, sample_garden};

fn slugs(hits: &[&SearchRecord]) -> Vec<String> {
    hits.iter().map(|r| r.slug.clone()).collect()
}

fn records() -> Vec<SearchRecord> {
    vec![
        record("ownership", "Rust Ownership", "Moves and borrows", &["rust"]),
        record("compost", "Compost Basics", "Scraps become soil", &["garden"]),
        record("testing", "Testing in Rust", "Unit and property tests", &["rust", "testing"]),
        private_record("secret", "Test Article", "Hidden draft", &["testing"]),
    ]
}

#[test]
fn test_private_record_never_returned() {
    let index = SearchIndex::build(records());
    let hits = index.query("test", DEFAULT_SEARCH_LIMIT);
    assert_eq!(slugs(&hits), vec!["testing"]);
}

#[test]
fn test_title_excerpt_and_tag_prefixes() {
    let index = SearchIndex::build(records());
    assert_eq!(slugs(&index.query("owner", 10)), vec!["ownership"]);
    assert_eq!(slugs(&index.query("scra", 10)), vec!["compost"]);
    assert_eq!(slugs(&index.query("gard", 10)), vec!["compost"]);
}

#[test]
fn test_case_and_diacritics_ignored() {
    let index = SearchIndex::build(vec![record("cafe", "Café Culture", "", &[])]);
    assert_eq!(slugs(&index.query("CAFE", 10)), vec!["cafe"]);
    assert_eq!(slugs(&index.query("café", 10)), vec!["cafe"]);
}

#[test]
fn test_record_matching_several_fields_appears_once() {
    let index = SearchIndex::build(records());
    let hits = index.query("rust", 10);
    assert_eq!(slugs(&hits), vec!["ownership", "testing"]);
}

#[test]
fn test_limit_caps_results() {
    let many: Vec<SearchRecord> = (0..25)
        .map(|i| record(&format!("note-{i:02}"), &format!("Garden note {i}"), "", &[]))
        .collect();
    let index = SearchIndex::build(many);

    assert_eq!(index.query("garden", DEFAULT_SEARCH_LIMIT).len(), 10);
    assert_eq!(index.query("garden", 3).len(), 3);
    assert!(index.query("garden", 0).is_empty());
}

#[test]
fn test_no_match_is_empty_index_answer() {
    let index = SearchIndex::build(records());
    let outcome = index.query_detailed("zebra", 10);
    assert!(outcome.hits.is_empty());
    assert_eq!(outcome.source, QuerySource::Index);
}

#[test]
fn test_whitespace_query_is_blank() {
    let index = SearchIndex::build(records());
    let outcome = index.query_detailed("  \t ", 10);
    assert!(outcome.hits.is_empty());
    assert_eq!(outcome.source, QuerySource::Blank);
}

#[test]
fn test_index_over_loaded_collection() {
    let garden = sample_garden();
    let collection = load_collection(garden.path(), &options()).unwrap();
    let index = SearchIndex::build(collection.search_records());

    // drafts carries the soil tag but is not public
    assert_eq!(slugs(&index.query("soil", 10)), vec!["compost", "mulch"]);
    assert_eq!(slugs(&index.query("borrow", 10)), vec!["rust-tips"]);
}

#[test]
fn test_prebuilt_index_round_trip_answers_the_same() {
    let index = SearchIndex::build(records());
    let json = index.to_json().unwrap();
    let loaded = SearchIndex::from_json(std::path::Path::new("search-index.inverted.json"), &json)
        .unwrap();

    assert!(loaded.validate().is_ok());
    assert_eq!(slugs(&loaded.query("rust", 10)), slugs(&index.query("rust", 10)));
}
