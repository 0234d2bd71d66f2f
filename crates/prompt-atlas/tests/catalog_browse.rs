use prompt_atlas::catalog::{
    CatalogCache, CatalogError, FilePromptSource, PromptCatalog, PromptQuery, FEATURED_ROLES,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/prompts.csv")
}

fn fixture_catalog() -> PromptCatalog {
    let data = include_bytes!("fixtures/prompts.csv");
    PromptCatalog::from_reader(&data[..]).expect("fixture parses")
}

#[test]
fn fixture_rows_keep_csv_order() {
    let catalog = fixture_catalog();
    assert_eq!(catalog.len(), 8);
    assert_eq!(catalog.entries()[0].act, "Linux Terminal");
    assert_eq!(catalog.entries()[7].act, "Project Manager");
    assert!(catalog
        .entries()
        .iter()
        .enumerate()
        .all(|(position, entry)| entry.index == position));
}

#[test]
fn term_search_pages_through_matches() {
    let catalog = fixture_catalog();
    let query = PromptQuery {
        search: Some("write".to_string()),
        page: Some(2),
        ..PromptQuery::default()
    };

    let page = catalog.search(&query, 2);
    assert_eq!(page.total_matches, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.page, 2);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].role, "Travel Guide");
    assert_eq!(page.items[0].index, 6);
}

#[test]
fn featured_role_filter_narrows_results() {
    let catalog = fixture_catalog();
    let query = PromptQuery {
        role: Some(FEATURED_ROLES[1].to_string()),
        ..PromptQuery::default()
    };

    let page = catalog.search(&query, 5);
    assert_eq!(page.total_matches, 1);
    assert_eq!(page.items[0].role, "Marketing Expert");
}

#[test]
fn csv_without_prompt_column_is_rejected() {
    let err = PromptCatalog::from_reader("act,text\nPoet,Write a poem.\n".as_bytes())
        .expect_err("prompt column missing");
    assert!(matches!(err, CatalogError::MissingColumns { .. }));
}

#[tokio::test]
async fn cache_serves_file_source_snapshot() {
    let cache = Arc::new(CatalogCache::new(
        FilePromptSource::new(fixture_path()),
        Duration::from_secs(3600),
    ));

    let first = cache.catalog().await.expect("fixture loads");
    let second = cache.catalog().await.expect("cached");
    assert!(Arc::ptr_eq(&first, &second));

    let snapshot = cache.snapshot().await.expect("snapshot stored");
    assert_eq!(snapshot.catalog.len(), 8);
}
