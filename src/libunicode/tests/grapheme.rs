// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Grapheme cluster segmentation and string operation tests.

use libunicode::grapheme::{
    clusters, count, extract, find, find_case_insensitive, find_str, find_str_case_insensitive,
    rfind, rfind_case_insensitive, substr, ExtractUnit, Extracted, GraphemeError, Position,
};
use libunicode::normalization::nfd;

//
// Segmentation
//

#[test]
fn segments_simple_text() {
    let collected: Vec<&str> = clusters("abc").collect();
    assert_eq!(collected, ["a", "b", "c"]);
    assert_eq!(clusters("").next(), None);
}

#[test]
fn combining_marks_stay_attached() {
    let collected: Vec<&str> = clusters("de\u{301}ja\u{300}").collect();
    assert_eq!(collected, ["d", "e\u{301}", "j", "a\u{300}"]);
}

#[test]
fn crlf_is_one_cluster() {
    let collected: Vec<&str> = clusters("a\r\nb\rc\nd").collect();
    assert_eq!(collected, ["a", "\r\n", "b", "\r", "c", "\n", "d"]);
}

#[test]
fn hangul_syllables_cluster_in_any_normalization() {
    assert_eq!(count("\u{D55C}\u{AD6D}\u{C5B4}"), 3);
    assert_eq!(count(&nfd("\u{D55C}\u{AD6D}\u{C5B4}")), 3);
}

#[test]
fn regional_indicators_pair_up() {
    // Two flags: four regional indicator symbols, two clusters.
    let flags = "\u{1F1FA}\u{1F1F8}\u{1F1EB}\u{1F1F7}";
    assert_eq!(count(flags), 2);
    // An odd trailing indicator is its own cluster.
    assert_eq!(count("\u{1F1FA}\u{1F1F8}\u{1F1EB}"), 2);
}

#[test]
fn emoji_zwj_sequence_is_one_cluster() {
    // Family: man, ZWJ, woman, ZWJ, girl.
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
    assert_eq!(count(family), 1);
    // A ZWJ after a non-pictographic base does not join the next emoji.
    assert_eq!(count("a\u{200D}\u{1F468}"), 2);
}

#[test]
fn cluster_count_is_invariant_under_normalization() {
    for s in &["de\u{301}ja\u{300}", "d\u{E9}j\u{E0}", "\u{1E69}\u{1EBF}"] {
        assert_eq!(count(s), count(&nfd(s)));
    }
}

//
// Substring
//

#[test]
fn substr_counts_clusters() {
    let s = "de\u{301}ja\u{300} vu";
    assert_eq!(substr(s, 0, Some(2)), Ok("de\u{301}"));
    assert_eq!(substr(s, 1, Some(3)), Ok("e\u{301}ja\u{300}"));
    assert_eq!(substr(s, 5, None), Ok("vu"));
}

#[test]
fn substr_negative_indices() {
    let s = "abcdef";
    assert_eq!(substr(s, -2, None), Ok("ef"));
    assert_eq!(substr(s, -4, Some(2)), Ok("cd"));
    assert_eq!(substr(s, 1, Some(-1)), Ok("bcde"));
    // A start before the beginning clamps to the beginning.
    assert_eq!(substr(s, -100, Some(3)), Ok("abc"));
}

#[test]
fn substr_empty_window_is_not_an_error() {
    assert_eq!(substr("abc", 3, None), Ok(""));
    assert_eq!(substr("abc", 1, Some(0)), Ok(""));
    assert_eq!(substr("abc", 2, Some(-2)), Ok(""));
}

#[test]
fn substr_start_past_the_end_fails() {
    assert_eq!(
        substr("abc", 4, None),
        Err(GraphemeError::StartOutOfRange { start: 4, count: 3 })
    );
}

//
// Extraction
//

#[test]
fn extract_never_splits_a_cluster() {
    // "é" is two bytes: a 2-byte budget stops after "d".
    let s = "d\u{E9}j\u{E0}";
    assert_eq!(
        extract(s, 2, ExtractUnit::Bytes, 0),
        Ok(Extracted { slice: "d", next: 1 })
    );
    assert_eq!(
        extract(s, 3, ExtractUnit::Bytes, 0),
        Ok(Extracted { slice: "d\u{E9}", next: 3 })
    );
}

#[test]
fn extract_by_clusters_and_codepoints() {
    let s = "de\u{301}ja\u{300}";
    assert_eq!(
        extract(s, 2, ExtractUnit::Clusters, 0),
        Ok(Extracted { slice: "de\u{301}", next: 4 })
    );
    // "e" plus its combining mark is two codepoints.
    assert_eq!(
        extract(s, 3, ExtractUnit::CodePoints, 0),
        Ok(Extracted { slice: "de\u{301}", next: 4 })
    );
}

#[test]
fn extract_resumes_and_snaps_to_boundaries() {
    let s = "de\u{301}ja\u{300}";
    let first = extract(s, 2, ExtractUnit::Clusters, 0).unwrap();
    let second = extract(s, 2, ExtractUnit::Clusters, first.next as isize).unwrap();
    assert_eq!(second.slice, "ja\u{300}");

    // A start in the middle of "e\u{301}" snaps to the next boundary.
    let snapped = extract(s, 1, ExtractUnit::Clusters, 2).unwrap();
    assert_eq!(snapped.slice, "j");
}

#[test]
fn extract_validates_the_start_offset() {
    assert!(extract("abc", 1, ExtractUnit::Clusters, 3).is_err());
    assert_eq!(
        extract("abc", 2, ExtractUnit::Clusters, -2),
        Ok(Extracted { slice: "bc", next: 3 })
    );
}

//
// Search
//

#[test]
fn find_reports_cluster_positions() {
    let s = "de\u{301}ja\u{300} vu";
    assert_eq!(
        find(s, "ja\u{300}", 0),
        Ok(Some(Position { clusters: 2, bytes: 4 }))
    );
    assert_eq!(find(s, "vu", 0), Ok(Some(Position { clusters: 5, bytes: 9 })));
    assert_eq!(find(s, "xyz", 0), Ok(None));
}

#[test]
fn find_honors_cluster_offsets() {
    let s = "abcabc";
    assert_eq!(find(s, "abc", 1), Ok(Some(Position { clusters: 3, bytes: 3 })));
    assert_eq!(find(s, "abc", -3), Ok(Some(Position { clusters: 3, bytes: 3 })));
    assert_eq!(rfind(s, "abc", 0), Ok(Some(Position { clusters: 3, bytes: 3 })));
    assert_eq!(rfind(s, "abc", 4), Ok(None));
}

#[test]
fn search_rejects_bad_arguments() {
    assert_eq!(find("abc", "", 0), Err(GraphemeError::EmptyNeedle));
    assert_eq!(find("abc", "a", 4), Err(GraphemeError::OffsetOutOfRange { offset: 4 }));
    assert_eq!(find("abc", "a", -4), Err(GraphemeError::OffsetOutOfRange { offset: -4 }));
    assert_eq!(rfind_case_insensitive("abc", "", 0), Err(GraphemeError::EmptyNeedle));
}

#[test]
fn case_insensitive_search_folds_both_sides() {
    let s = "Stra\u{DF}e";
    assert_eq!(
        find_case_insensitive(s, "STRASSE", 0),
        Ok(Some(Position { clusters: 0, bytes: 0 }))
    );
    assert_eq!(
        find_case_insensitive("xx\u{C9}xx", "\u{E9}", 0),
        Ok(Some(Position { clusters: 2, bytes: 2 }))
    );
    assert_eq!(
        rfind_case_insensitive("AbaB", "b", 0),
        Ok(Some(Position { clusters: 3, bytes: 3 }))
    );
}

#[test]
fn find_str_returns_the_matched_tail_or_head() {
    assert_eq!(find_str("name@example.com", "@", false), Some("@example.com"));
    assert_eq!(find_str("name@example.com", "@", true), Some("name"));
    assert_eq!(find_str("abc", "x", false), None);
    assert_eq!(find_str("abc", "", false), None);

    assert_eq!(find_str_case_insensitive("aBcDe", "bcd", false), Some("BcDe"));
    assert_eq!(find_str_case_insensitive("aBcDe", "BCD", true), Some("a"));
}
