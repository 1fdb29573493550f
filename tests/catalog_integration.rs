//! Integration tests for catalog filtering using a fixture file.

use catalog_search::catalog::Catalog;
use catalog_search::filters::FilterCriteria;
use catalog_search::state::FilterInputs;

const CATALOG_FIXTURE: &str = include_str!("fixtures/product_details.json");

fn load() -> Catalog {
    Catalog::from_json(CATALOG_FIXTURE).unwrap()
}

fn ids(catalog: &Catalog, inputs: &FilterInputs) -> Vec<String> {
    catalog.filter_and_rank(&inputs.criteria()).iter().map(|p| p.id.to_string()).collect()
}

fn inputs(category: &str, max_price: &str, filter_term: &str) -> FilterInputs {
    FilterInputs {
        category: category.to_string(),
        max_price: max_price.to_string(),
        filter_term: filter_term.to_string(),
    }
}

#[test]
fn test_parse_fixture() {
    let catalog = load();
    assert_eq!(catalog.len(), 6);

    // Null and missing descriptions both load
    assert!(catalog.products()[3].description.is_none());
    assert!(catalog.products()[5].description.is_none());
}

#[test]
fn test_categories_trimmed_in_first_seen_order() {
    assert_eq!(load().categories(), vec!["All", "Clothing", "Footwear", "Bags", "Toys"]);
}

#[test]
fn test_no_filters_rank_everything() {
    let catalog = load();
    // 4.5 tie between ids 1 and 5 keeps file order
    assert_eq!(ids(&catalog, &FilterInputs::default()), vec!["2", "3", "1", "5", "6", "4"]);
}

#[test]
fn test_category_is_exact_match() {
    let catalog = load();
    assert_eq!(ids(&catalog, &inputs("Bags", "", "")), vec!["6", "4"]);

    // The stored category has a leading space, so the trimmed label misses it
    assert!(ids(&catalog, &inputs("Footwear", "", "")).is_empty());
}

#[test]
fn test_price_and_keyword() {
    let catalog = load();
    assert_eq!(ids(&catalog, &inputs("All", "1000", "shirt")), vec!["1"]);
    assert_eq!(ids(&catalog, &inputs("All", "1500", "shirt")), vec!["2", "1"]);
}

#[test]
fn test_whole_word_keyword() {
    let catalog = load();
    // "red" must not match inside "bored"
    assert_eq!(ids(&catalog, &inputs("All", "", "red")), vec!["1"]);
    assert_eq!(ids(&catalog, &inputs("All", "", "bored")), vec!["5"]);
}

#[test]
fn test_keywords_across_fields() {
    let catalog = load();
    // "white" in the description, "running" in the name
    assert_eq!(ids(&catalog, &inputs("All", "", "WHITE running")), vec!["3"]);
    // "white" in the name, "bags" in the category
    assert_eq!(ids(&catalog, &inputs("All", "", "white bags")), vec!["6"]);
}

#[test]
fn test_malformed_price_is_ignored() {
    let catalog = load();
    assert_eq!(ids(&catalog, &inputs("Bags", "under 5k", "")), vec!["6", "4"]);
}

#[test]
fn test_punctuation_keyword_is_literal() {
    let catalog = load();
    assert_eq!(ids(&catalog, &inputs("All", "", "t-shirt")), vec!["2", "1"]);
    assert!(ids(&catalog, &inputs("All", "", "100%")).is_empty());
    assert!(ids(&catalog, &inputs("All", "", "t.shirt")).is_empty());
}

#[test]
fn test_filter_and_rank_free_function() {
    let catalog = load();
    let criteria = FilterCriteria { max_price: Some(650.0), ..Default::default() };
    let result = catalog_search::filter_and_rank(catalog.products(), &criteria);

    let names: Vec<&str> = result.iter().map(|p| p.product_name.as_str()).collect();
    assert_eq!(names, vec!["Red T-Shirt", "Canvas Tote"]);
}
