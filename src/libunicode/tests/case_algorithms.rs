// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Unicode default case algorithm tests.
//!
//! This module contains tests for _Default Case Algorithms_. The mappings
//! are the default context-free ones, so Greek final sigma placement and
//! other tailorings are intentionally absent.

use libunicode::case_algorithms::{case_fold, to_lowercase, to_nfkc_casefold, to_uppercase};

//
// Default Case Conversion
//

#[test]
fn uppercase_ascii() {
    assert_eq!(to_uppercase("hello world"), "HELLO WORLD");
    assert_eq!(to_uppercase("already UP 123"), "ALREADY UP 123");
}

#[test]
fn uppercase_expands() {
    // Sharp s and ligatures expand under the full mapping.
    assert_eq!(to_uppercase("gro\u{DF}e"), "GROSSE");
    assert_eq!(to_uppercase("\u{FB01}ne"), "FINE");
    assert_eq!(to_uppercase("\u{131}i"), "II");
    assert_eq!(to_uppercase("h\u{E9}llo"), "H\u{C9}LLO");
    // Titlecase digraphs map to their uppercase form.
    assert_eq!(to_uppercase("\u{1C6}"), "\u{1C4}");
}

#[test]
fn lowercase_mappings() {
    assert_eq!(to_lowercase("HELLO"), "hello");
    assert_eq!(to_lowercase("\u{1C5}"), "\u{1C6}");
    // Dotted capital I keeps its dot as a combining mark.
    assert_eq!(to_lowercase("\u{130}"), "i\u{307}");
    // Context-free: no final sigma tailoring.
    assert_eq!(to_lowercase("\u{391}\u{3A3}"), "\u{3B1}\u{3C3}");
}

//
// Default Case Folding
//

#[test]
fn case_fold_full_mappings() {
    assert_eq!(case_fold("Stra\u{DF}e"), "strasse");
    assert_eq!(case_fold("WEI\u{DF}"), "weiss");
    assert_eq!(case_fold("\u{1E9E}"), "ss");
    // All three sigmas fold to the same character.
    assert_eq!(case_fold("\u{3A3}\u{3C2}\u{3C3}"), "\u{3C3}\u{3C3}\u{3C3}");
}

#[test]
fn case_fold_enables_caseless_matching() {
    assert_eq!(case_fold("MASSE"), case_fold("ma\u{DF}e"));
    assert_ne!("MASSE".to_string(), "ma\u{DF}e".to_string());
}

//
// toNFKC_Casefold
//

#[test]
fn nfkc_casefold_folds_compatibility_characters() {
    assert_eq!(to_nfkc_casefold("\u{2460}\u{216B}"), "1xii");
    assert_eq!(to_nfkc_casefold("Hen\u{DF} \u{24B6}"), "henss a");
}

#[test]
fn nfkc_casefold_is_idempotent() {
    for s in &["Hen\u{DF} \u{24B6}", "\u{2460}\u{216B}", "Stra\u{DF}e \u{FB01}ne"] {
        let once = to_nfkc_casefold(s);
        assert_eq!(to_nfkc_casefold(&once), once);
    }
}
