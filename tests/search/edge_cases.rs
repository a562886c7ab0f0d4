//! Edge cases: empty inputs, case folding, non-ASCII text, odd input shapes.

use crate::common::{
    assert_input_order, assert_results_well_formed, indices, keep_all, make_records, unmarked,
    UNICODE_LABELS,
};
use fuzzmark::{search, search_json, search_sparse, Haystack, MatchedSpan, SearchOptions};
use serde_json::json;

// ============================================================================
// EMPTY INPUTS
// ============================================================================

#[test]
fn test_empty_needle_without_non_matches() {
    assert!(search("", &["a", "b"], &SearchOptions::default()).is_empty());
}

#[test]
fn test_empty_needle_returns_everything_unranked() {
    let haystacks = ["zulu", "alpha", "mike"];
    let results = search("", &haystacks, &keep_all().limit(1));
    // Limit does not apply when there is nothing to rank
    assert_eq!(indices(&results), vec![0, 1, 2]);
    for (result, text) in results.iter().zip(haystacks) {
        assert_eq!(result.highlight_text, text);
        assert_eq!(result.match_count, 0);
        assert_eq!(result.match_percentage, 0.0);
    }
}

#[test]
fn test_empty_haystack_list() {
    let empty: [&str; 0] = [];
    assert!(search("abc", &empty, &keep_all()).is_empty());
}

#[test]
fn test_empty_haystack_text() {
    let haystacks = ["", "x"];
    let results = search("x", &haystacks, &keep_all());
    assert_eq!(indices(&results), vec![1, 0]);
    assert_eq!(results[1].haystack_length, 0);
    assert_eq!(results[1].match_percentage, 0.0);
    assert_eq!(results[1].highlight_text, "");
}

// ============================================================================
// NEEDLE SHAPES
// ============================================================================

#[test]
fn test_single_char_needle_uses_alphabet_only() {
    let results = search("a", &["bab", "ccc"], &SearchOptions::default());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].spans, vec![MatchedSpan::new(1, 1)]);
    assert_eq!(results[0].longest_chain, 1);
    assert_eq!(results[0].longest_chain_index, 2);
    assert_eq!(results[0].highlight_text, "b<mark>a</mark>b");
}

#[test]
fn test_needle_longer_than_haystack() {
    let results = search("category", &["cat"], &SearchOptions::default());
    assert_eq!(results[0].longest_chain, 3);
    assert_eq!(results[0].match_percentage, 1.0);
    assert_eq!(results[0].highlight_text, "<mark>cat</mark>");
}

#[test]
fn test_repeated_needle_chars() {
    let results = search("aaa", &["aaaa"], &SearchOptions::default());
    assert_eq!(
        results[0].spans,
        vec![MatchedSpan::new(0, 3), MatchedSpan::new(3, 1)]
    );
    assert_eq!(results[0].highlight_text, "<mark>aaa</mark><mark>a</mark>");
    assert_eq!(results[0].match_percentage, 1.0);
}

#[test]
fn test_scattered_fallback_chars() {
    let results = search("cat", &["concatenate"], &SearchOptions::default());
    assert_eq!(
        results[0].highlight_text,
        "<mark>c</mark>on<mark>cat</mark>en<mark>at</mark>e"
    );
    assert_eq!(results[0].match_count, 6);
    assert_eq!(results[0].longest_chain_index, 6);
}

// ============================================================================
// CASE AND UNICODE
// ============================================================================

#[test]
fn test_case_insensitive_keeps_original_casing() {
    let results = search("CAT", &["Category"], &SearchOptions::default());
    assert_eq!(results[0].highlight_text, "<mark>Cat</mark>egory");
}

#[test]
fn test_offsets_count_chars_not_bytes() {
    let results = search("ström", &["Ångström"], &SearchOptions::default());
    assert_eq!(results[0].haystack_length, 8);
    assert_eq!(results[0].spans, vec![MatchedSpan::new(3, 5)]);
    assert_eq!(results[0].longest_chain_index, 8);
    assert_eq!(results[0].highlight_text, "Ång<mark>ström</mark>");
}

#[test]
fn test_accented_chars_are_distinct_from_plain() {
    // 'a' is in the needle, 'e' is not ('é' is)
    let results = search("café", &["naïve café"], &SearchOptions::default());
    assert_eq!(
        results[0].spans,
        vec![MatchedSpan::new(1, 1), MatchedSpan::new(6, 4)]
    );
    assert_eq!(results[0].highlight_text, "n<mark>a</mark>ïve <mark>café</mark>");
}

#[test]
fn test_uppercase_accents_fold() {
    let results = search("école", &["ÉCOLE"], &SearchOptions::default());
    assert_eq!(results[0].longest_chain, 5);
    assert_eq!(results[0].highlight_text, "<mark>ÉCOLE</mark>");
}

#[test]
fn test_cjk_text() {
    let results = search("テキ", &["日本語テキスト"], &SearchOptions::default());
    assert_eq!(results[0].spans, vec![MatchedSpan::new(3, 2)]);
    assert_eq!(results[0].highlight_text, "日本語<mark>テキ</mark>スト");
}

#[test]
fn test_unicode_labels_are_well_formed() {
    for needle in ["ö", "straße", "本語", "café", "e"] {
        let results = search(needle, UNICODE_LABELS, &keep_all());
        assert_eq!(results.len(), UNICODE_LABELS.len());
        assert_results_well_formed(UNICODE_LABELS, &results);
        for result in &results {
            assert_eq!(unmarked(result), UNICODE_LABELS[result.index]);
        }
    }
}

#[test]
fn test_markup_in_haystack_is_not_escaped() {
    let results = search("b", &["<b>bold</b>"], &SearchOptions::default());
    assert_eq!(
        results[0].highlight_text,
        "<<mark>b</mark>><mark>b</mark>old</<mark>b</mark>>"
    );
}

// ============================================================================
// INPUT SHAPES
// ============================================================================

#[test]
fn test_sparse_entries_keep_their_indices() {
    let entries = [(0, "alpha"), (5, "alpine")];
    let results = search_sparse("alp", entries, &SearchOptions::default());
    assert_eq!(indices(&results), vec![0, 5]);
}

#[test]
fn test_sparse_holes_never_appear() {
    let entries = [(1, "one"), (3, "three")];
    let results = search_sparse("", entries, &keep_all());
    assert_eq!(indices(&results), vec![1, 3]);
    assert_input_order(&results);
}

#[test]
fn test_records_and_nulls() {
    let records = make_records(&["Apple", "Banana"]);
    let results = search("ban", &records, &SearchOptions::default());
    // The 'A' of Apple is a single-char fallback match
    assert_eq!(indices(&results), vec![1, 0]);
    assert_eq!(results[1].longest_chain, 1);

    let entries: Vec<Option<&str>> = vec![None, Some("banana")];
    let results = search("ban", &entries, &keep_all());
    assert_eq!(indices(&results), vec![1, 0]);
    assert_eq!(results[1].highlight_text, "");
}

#[test]
fn test_json_shapes() {
    let haystacks = json!(["cat", null, {"text": "cat"}, {"label": "cat"}, 7, {"text": 7}]);
    let results = search_json("cat", &haystacks, &SearchOptions::default());
    assert_eq!(indices(&results), vec![0, 2]);

    let results = search_json("cat", &haystacks, &keep_all());
    assert_eq!(results.len(), 6);
}

#[test]
fn test_json_non_array_is_empty() {
    for value in [json!(null), json!("cat"), json!({"text": "cat"}), json!(3)] {
        assert!(search_json("cat", &value, &keep_all()).is_empty());
    }
}

#[test]
fn test_haystack_enum_from_json() {
    let haystacks: Vec<Haystack> =
        serde_json::from_value(json!(["dog", {"text": "cat"}, null])).unwrap();
    let results = search("cat", &haystacks, &SearchOptions::default());
    assert_eq!(indices(&results), vec![1]);
}
