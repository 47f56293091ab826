//! The swappable index shared between readers and a rebuilder.

use garden::{QuerySource, SearchService};
use std::sync::Arc;

use crate::common::record;

#[test]
fn test_empty_service_finds_nothing() {
    let service = SearchService::default();
    let (hits, source) = service.query_detailed("anything", 10);
    assert!(hits.is_empty());
    assert_eq!(source, QuerySource::Index);
}

#[test]
fn test_rebuild_picks_up_new_records() {
    let service = SearchService::from_records(vec![record("a", "Apple Trees", "", &[])]);
    assert!(service.query("pear", 10).is_empty());

    service.rebuild(vec![
        record("a", "Apple Trees", "", &[]),
        record("p", "Pear Trees", "", &[]),
    ]);
    let hits = service.query("pear", 10);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].slug, "p");
}

#[test]
fn test_old_snapshot_survives_rebuild() {
    let service = SearchService::from_records(vec![record("a", "Apple Trees", "", &[])]);
    let old = service.snapshot();
    service.rebuild(Vec::new());

    assert_eq!(old.query("apple", 10).len(), 1);
    assert!(service.query("apple", 10).is_empty());
    assert!(!Arc::ptr_eq(&old, &service.snapshot()));
}
