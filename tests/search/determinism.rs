//! Same input, same output, whichever entry point is used.

use crate::common::{assert_results_well_formed, keep_all, COUNTRIES};
use fuzzmark::{search, search_json, search_sparse, Filter, FuzzyFilter, SearchOptions};

const NEEDLES: &[&str] = &["an", "united", "new gu", "AUS", "zz", "a", "ia"];

#[test]
fn test_repeated_searches_are_identical() {
    for needle in NEEDLES {
        let first = search(needle, COUNTRIES, &keep_all());
        let second = search(needle, COUNTRIES, &keep_all());
        assert_eq!(first, second, "search {:?} differs between runs", needle);
        assert_results_well_formed(COUNTRIES, &first);
    }
}

#[test]
fn test_entry_points_agree() {
    let json = serde_json::to_value(COUNTRIES).unwrap();
    let options = SearchOptions::default().limit(5);
    let filter = FuzzyFilter::new(options.clone());

    for needle in NEEDLES {
        let dense = search(needle, COUNTRIES, &options);
        let sparse = search_sparse(needle, COUNTRIES.iter().copied().enumerate(), &options);
        let from_json = search_json(needle, &json, &options);
        let filtered = filter.filter_all(needle, COUNTRIES);

        assert_eq!(dense, sparse, "sparse differs for {:?}", needle);
        assert_eq!(dense, from_json, "json differs for {:?}", needle);
        assert_eq!(dense, filtered, "filter differs for {:?}", needle);
    }
}

#[test]
fn test_needle_case_does_not_change_ranking() {
    for needle in NEEDLES {
        let lower = search(&needle.to_lowercase(), COUNTRIES, &keep_all());
        let upper = search(&needle.to_uppercase(), COUNTRIES, &keep_all());
        assert_eq!(lower, upper, "case changes results for {:?}", needle);
    }
}

#[test]
fn test_results_serialize_with_stable_field_names() {
    let results = search("chi", COUNTRIES, &SearchOptions::default().limit(1));
    let value = serde_json::to_value(&results[0]).unwrap();
    for field in [
        "index",
        "haystack_length",
        "match_percentage",
        "match_count",
        "longest_chain",
        "longest_chain_index",
        "highlight_text",
    ] {
        assert!(value.get(field).is_some(), "missing field {}", field);
    }
    assert_eq!(value["highlight_text"], "<mark>Chi</mark>le");
}
