//! Directory listing, collection ordering and duplicate handling.

use garden::{list_slugs, load_collection, load_item, GardenError, GrowthStatus};

use crate::common::{date, options, sample_garden, Garden};

fn slugs(collection: &garden::Collection) -> Vec<&str> {
    collection.items().iter().map(|i| i.slug.as_str()).collect()
}

#[test]
fn test_missing_directory_is_empty_garden() {
    let garden = Garden::new();
    let missing = garden.path().join("nope");

    assert!(list_slugs(&missing).unwrap().is_empty());
    assert!(load_collection(&missing, &options()).unwrap().is_empty());
    assert!(load_item(&missing, "anything", &options()).unwrap().is_none());
}

#[test]
fn test_list_slugs_ignores_other_files() {
    let garden = sample_garden();
    garden.raw("notes.txt", "not content");
    garden.raw("README", "no extension");
    std::fs::create_dir(garden.path().join("nested.md")).unwrap();

    let slugs = list_slugs(garden.path()).unwrap();
    assert_eq!(slugs, vec!["compost", "drafts", "mulch", "rust-tips"]);
}

#[test]
fn test_collection_sorted_newest_first() {
    let garden = sample_garden();
    let collection = load_collection(garden.path(), &options()).unwrap();
    assert_eq!(slugs(&collection), vec!["drafts", "compost", "mulch", "rust-tips"]);
}

#[test]
fn test_equal_dates_order_by_slug() {
    let garden = Garden::new();
    for stem in ["zeta", "alpha", "mid"] {
        garden.writing(stem, &["date: 2024-01-01"], "Body.\n");
    }
    let collection = load_collection(garden.path(), &options()).unwrap();
    assert_eq!(slugs(&collection), vec!["alpha", "mid", "zeta"]);
}

#[test]
fn test_load_item_reads_all_fields() {
    let garden = sample_garden();
    let item = load_item(garden.path(), "compost", &options()).unwrap().unwrap();

    assert_eq!(item.title, "Composting at Home");
    assert_eq!(item.published_date, date("2024-03-01"));
    assert_eq!(item.revised_date, date("2024-05-20"));
    assert_eq!(item.status, GrowthStatus::Evergreen);
    assert_eq!(item.tags, vec!["soil", "garden"]);
    assert_eq!(item.backlinks, vec!["mulch"]);
    assert!(item.is_public);
    assert_eq!(item.headings.len(), 2);
    assert_eq!(item.headings[0].id, "why-compost");
    assert_eq!(item.headings[1].level, 2);
    assert_eq!(item.path(), "/writings/compost");
}

#[test]
fn test_load_item_unknown_slug() {
    let garden = sample_garden();
    assert!(load_item(garden.path(), "missing", &options()).unwrap().is_none());
}

#[test]
fn test_md_extension_loads() {
    let garden = sample_garden();
    let item = load_item(garden.path(), "rust-tips", &options()).unwrap().unwrap();
    assert_eq!(item.title, "Rust Tips");
    assert!(item.source.ends_with("rust-tips.md"));
}

#[test]
fn test_mdx_wins_over_md() {
    let garden = Garden::new();
    garden.raw("twin.md", "---\ntitle: From md\n---\n");
    garden.raw("twin.mdx", "---\ntitle: From mdx\n---\n");

    assert_eq!(list_slugs(garden.path()).unwrap(), vec!["twin"]);

    let collection = load_collection(garden.path(), &options()).unwrap();
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.items()[0].title, "From mdx");
}

#[test]
fn test_declared_slug_differs_from_file_stem() {
    let garden = Garden::new();
    garden.writing(
        "file-stem",
        &["title: Declared", "slug: declared"],
        "# Intro\n\n## Details\n",
    );

    let collection = load_collection(garden.path(), &options()).unwrap();
    let item = collection.get("declared").unwrap();
    assert!(item.source.ends_with("file-stem.mdx"));
    assert_eq!(item.headings.len(), 2);
    assert!(collection.get("file-stem").is_none());

    // load_item addresses files, so it takes the stem and reports the declared slug
    let by_stem = load_item(garden.path(), "file-stem", &options()).unwrap().unwrap();
    assert_eq!(by_stem.slug, "declared");
    assert!(load_item(garden.path(), "declared", &options()).unwrap().is_none());
}

#[test]
fn test_duplicate_declared_slug_fails() {
    let garden = Garden::new();
    garden.writing("one", &["slug: same"], "A\n");
    garden.writing("two", &["slug: same"], "B\n");

    let err = load_collection(garden.path(), &options()).unwrap_err();
    match err {
        GardenError::DuplicateSlug { slug, .. } => assert_eq!(slug, "same"),
        other => panic!("expected DuplicateSlug, got {other}"),
    }
}

#[test]
fn test_bad_header_names_file() {
    let garden = Garden::new();
    garden.raw("broken.mdx", "---\ntitle: [unclosed\n---\nBody\n");

    let err = load_collection(garden.path(), &options()).unwrap_err();
    assert!(matches!(err, GardenError::Frontmatter { .. }));
    assert!(err.to_string().contains("broken.mdx"), "{err}");
}

#[test]
fn test_public_items_and_tag_counts() {
    let garden = sample_garden();
    let collection = load_collection(garden.path(), &options()).unwrap();

    let public: Vec<&str> = collection.public_items().map(|i| i.slug.as_str()).collect();
    assert_eq!(public, vec!["compost", "mulch", "rust-tips"]);

    assert_eq!(
        collection.tag_counts(),
        vec![
            ("soil".to_string(), 3),
            ("garden".to_string(), 1),
            ("rust".to_string(), 1),
        ]
    );
    assert_eq!(collection.get("mulch").map(|i| i.title.as_str()), Some("Mulch Matters"));
}
