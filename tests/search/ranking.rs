//! Ranking order tests.
//!
//! Each test isolates one key of the comparator by holding the keys above it
//! equal.

use crate::common::{assert_results_well_formed, indices, labels, COUNTRIES};
use fuzzmark::{search, SearchOptions};

fn ranked(needle: &str, haystacks: &[&str]) -> Vec<usize> {
    let results = search(needle, haystacks, &SearchOptions::default());
    assert_results_well_formed(haystacks, &results);
    indices(&results)
}

#[test]
fn test_earlier_chain_end_wins() {
    // Both contain "cat" whole; category ends it at 3, concatenate at 6
    let haystacks = ["dog", "concatenate", "category"];
    assert_eq!(ranked("cat", &haystacks), vec![2, 1]);
}

#[test]
fn test_longest_chain_beats_everything_below_it() {
    // "adbc" is short and dense, but its longest chain is only 2
    let haystacks = ["adbc", "abcd plus a long tail of text"];
    assert_eq!(ranked("abcd", &haystacks), vec![1, 0]);
}

#[test]
fn test_chain_position_beats_length() {
    let haystacks = ["xxabc", "abcxxxxxxx"];
    assert_eq!(ranked("abc", &haystacks), vec![1, 0]);
}

#[test]
fn test_shorter_haystack_wins_tie() {
    let haystacks = ["abxxx", "ab"];
    assert_eq!(ranked("ab", &haystacks), vec![1, 0]);
}

#[test]
fn test_higher_percentage_wins_tie() {
    // Same chain, same chain end, same length; the trailing 'c' adds coverage
    let haystacks = ["abzzzz", "abzzzc"];
    let results = search("abc", &haystacks, &SearchOptions::default());
    assert_eq!(indices(&results), vec![1, 0]);
    assert!(results[0].match_percentage > results[1].match_percentage);
}

#[test]
fn test_identical_haystacks_keep_input_order() {
    let haystacks = ["same", "other", "same"];
    assert_eq!(ranked("sa", &haystacks), vec![0, 2]);
}

#[test]
fn test_limit_is_a_prefix_of_the_full_ranking() {
    let all = search("an", COUNTRIES, &SearchOptions::default());
    let limited = search("an", COUNTRIES, &SearchOptions::default().limit(3));
    assert_eq!(limited.len(), 3);
    assert_eq!(limited, all[..3].to_vec());
}

#[test]
fn test_limit_larger_than_results() {
    let results = search("zeal", COUNTRIES, &SearchOptions::default().limit(100));
    assert_results_well_formed(COUNTRIES, &results);
    assert_eq!(labels(&results, COUNTRIES)[0], "New Zealand");
}

#[test]
fn test_country_picker_prefers_whole_word() {
    let results = search("united", COUNTRIES, &SearchOptions::default());
    assert_results_well_formed(COUNTRIES, &results);
    // Both United entries carry the full chain at the start
    let top: Vec<&str> = labels(&results, COUNTRIES).into_iter().take(2).collect();
    assert_eq!(top, vec!["United States", "United Kingdom"]);
}

#[test]
fn test_non_matches_rank_last() {
    let haystacks = ["qqq", "cat", "xyz"];
    let results = search("cat", &haystacks, &SearchOptions::default().include_non_matches(true));
    assert_eq!(indices(&results), vec![1, 0, 2]);
    assert!(!results[1].is_match());
    assert!(!results[2].is_match());
}
