// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Transliterator tests.
//!
//! The expected strings were recorded from a reference ICU engine
//! running the same rule strings.

use libtranslit::{RuleError, Transliterator};

//
// Construction
//

#[test]
fn create_accepts_registered_identifiers() {
    assert!(Transliterator::create("Latin-ASCII").is_some());
    assert!(Transliterator::create("Any-Upper").is_some());
    assert!(Transliterator::create("de-ASCII").is_some());
    // Locale codes resolve to their language transform.
    assert!(Transliterator::create("de").is_some());
    assert!(Transliterator::create("de_AT").is_some());
}

#[test]
fn create_rejects_unknown_identifiers() {
    assert!(Transliterator::create("Frobnicate").is_none());
    assert!(Transliterator::create("xx-ASCII-xx").is_none());
}

#[test]
fn create_from_rules_rejects_global_filters() {
    // A rule consisting only of a global filter has no transform.
    assert!(Transliterator::create_from_rules(":: [\u{164}\u{C4}] lower();").is_none());
}

#[test]
fn create_from_rules_rejects_unbalanced_brackets() {
    assert!(Transliterator::create_from_rules("[:Nonspacing Mark: Remove;").is_none());
}

#[test]
fn create_from_rules_skips_unknown_steps() {
    let translit = Transliterator::create_from_rules("Bogus-Transform; Any-Upper;").unwrap();
    assert_eq!(translit.transliterate("abc"), "ABC");

    assert_eq!(
        Transliterator::create_from_rules_strict("Bogus-Transform; Any-Upper;").unwrap_err(),
        RuleError::UnknownStep("Bogus-Transform".to_string())
    );
}

#[test]
fn list_ids_names_the_registry() {
    let ids = Transliterator::list_ids();
    assert!(ids.contains(&"Latin-ASCII"));
    assert!(ids.contains(&"Any-Latin"));
    assert!(ids.contains(&"de-ASCII"));
}

//
// Transliteration
//

#[test]
fn accent_stripping_chain() {
    let translit = Transliterator::create_from_rules(
        "NFKC; [:Nonspacing Mark:] Remove; NFKC; Any-Latin; Latin-ASCII;",
    )
    .unwrap();
    assert_eq!(translit.transliterate("d\u{E9}j\u{E0}"), "deja");
    assert_eq!(translit.transliterate("de\u{301}ja\u{300}"), "deja");
}

#[test]
fn full_chain_end_to_end() {
    let translit = Transliterator::create_from_rules(
        "NFKC; [:Nonspacing Mark:] Remove; NFKC; Any-Upper; Any-Latin; Latin-ASCII; \
         [AU] lower();",
    )
    .unwrap();
    let input = "\u{2039}\u{164}\u{C9}\u{15A}\u{162}\u{203A} - \u{F6}\u{E4}\u{FC} - 123 - \
                 abc - \u{2026}";
    assert_eq!(
        translit.transliterate(input),
        "<TEST> - Oau - 123 - aBC - ..."
    );
}

#[test]
fn steps_apply_in_order() {
    // The substitution sees the output of the case step.
    let translit = Transliterator::create_from_rules("Any-Upper; ABC > abc;").unwrap();
    assert_eq!(translit.transliterate("abc abc"), "abc abc");

    let reversed = Transliterator::create_from_rules("ABC > abc; Any-Upper;").unwrap();
    assert_eq!(reversed.transliterate("abc abc"), "ABC ABC");
}

#[test]
fn set_replacement_and_removal() {
    let translit = Transliterator::create_from_rules("[:Punctuation:] > '*';").unwrap();
    assert_eq!(translit.transliterate("a,b.c"), "a*b*c");

    let removed = Transliterator::create_from_rules("[:Space:] Remove;").unwrap();
    assert_eq!(removed.transliterate("a b\u{A0}c"), "abc");
}

#[test]
fn language_tailored_ascii() {
    let translit = Transliterator::create("de-ASCII").unwrap();
    assert_eq!(translit.transliterate("K\u{E4}\u{DF}e"), "Kaesse");
    assert_eq!(translit.transliterate("M\u{FC}nchen"), "Muenchen");

    let danish = Transliterator::create("da-ASCII").unwrap();
    assert_eq!(danish.transliterate("\u{C5}rhus"), "Aarhus");

    // Austrian German writes the sharp s out as "sz".
    let austrian = Transliterator::create("at-ASCII").unwrap();
    assert_eq!(austrian.transliterate("K\u{E4}\u{DF}e"), "Kaesze");
    assert!(Transliterator::list_ids().contains(&"at-ASCII"));
}

//
// Ranges
//

#[test]
fn range_bounds_are_codepoints() {
    let translit = Transliterator::create_from_rules("Any-Upper;").unwrap();
    let s = "d\u{E9}j\u{E0} vu";
    assert_eq!(
        translit.transliterate_range(s, 0, 3).as_deref(),
        Some("D\u{C9}J\u{C0} vu")
    );
    assert_eq!(
        translit.transliterate_range(s, 5, 0).as_deref(),
        Some("d\u{E9}j\u{E0} VU")
    );
}

#[test]
fn empty_range_is_a_no_op() {
    let translit = Transliterator::create_from_rules("Any-Upper;").unwrap();
    assert_eq!(
        translit.transliterate_range("abc", 2, 2).as_deref(),
        Some("abc")
    );
}

#[test]
fn out_of_range_offsets_fail() {
    let translit = Transliterator::create_from_rules("Any-Upper;").unwrap();
    assert_eq!(translit.transliterate_range("abc", -2, 2), None);
    assert_eq!(translit.transliterate_range("abc", 2, -2), None);
    assert_eq!(translit.transliterate_range("abc", 4, 0), None);
    assert_eq!(translit.transliterate_range("abc", 0, 4), None);
}

//
// Error reporting
//

#[test]
fn error_state_is_always_clear() {
    let translit = Transliterator::create("Latin-ASCII").unwrap();
    let _ = translit.transliterate("\u{2026}");
    assert_eq!(translit.error_code(), 0);
    assert_eq!(translit.error_message(), "U_ZERO_ERROR");
}
