// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Unicode normalization tests.
//!
//! The expected values were produced offline by a reference implementation
//! of UAX #15 over the same Unicode Character Database version as the
//! generated tables.

use libunicode::canonical_combining_class;
use libunicode::normalization::{is_normalized, nfc, nfd, nfkc, nfkd, normalize, Form};

const FORMS: [Form; 4] = [Form::Nfc, Form::Nfd, Form::Nfkc, Form::Nfkd];

/// Verify all four normalizations of a source string against reference
/// values, plus idempotence of each form on its own output.
fn check(source: &str, c: &str, d: &str, kc: &str, kd: &str) {
    assert_eq!(nfc(source), c, "NFC of {:?}", source);
    assert_eq!(nfd(source), d, "NFD of {:?}", source);
    assert_eq!(nfkc(source), kc, "NFKC of {:?}", source);
    assert_eq!(nfkd(source), kd, "NFKD of {:?}", source);

    for &form in &FORMS {
        let once = normalize(source, form);
        assert_eq!(normalize(&once, form), once, "{:?} not idempotent", form);
        assert!(is_normalized(&once, form));
    }
}

//
// Reference vectors
//

#[test]
fn empty_string() {
    check("", "", "", "", "");
}

#[test]
fn ascii_passthrough() {
    check("Hello, world!", "Hello, world!", "Hello, world!", "Hello, world!", "Hello, world!");
}

#[test]
fn latin_composition() {
    check("A\u{301}",
          "\u{C1}",
          "A\u{301}",
          "\u{C1}",
          "A\u{301}",
    );
    check("\u{C5}str\u{F6}m",
          "\u{C5}str\u{F6}m",
          "A\u{30A}stro\u{308}m",
          "\u{C5}str\u{F6}m",
          "A\u{30A}stro\u{308}m",
    );
    check("de\u{301}ja\u{300} vu",
          "d\u{E9}j\u{E0} vu",
          "de\u{301}ja\u{300} vu",
          "d\u{E9}j\u{E0} vu",
          "de\u{301}ja\u{300} vu",
    );
}

#[test]
fn compatibility_decomposition() {
    check("\u{FB01}ne",
          "\u{FB01}ne",
          "\u{FB01}ne",
          "fine",
          "fine",
    );
    check("\u{2460}\u{2461}",
          "\u{2460}\u{2461}",
          "\u{2460}\u{2461}",
          "12",
          "12",
    );
    check("\u{BD} cup",
          "\u{BD} cup",
          "\u{BD} cup",
          "1\u{2044}2 cup",
          "1\u{2044}2 cup",
    );
    check("\u{3310}",
          "\u{3310}",
          "\u{3310}",
          "\u{30AE}\u{30AC}",
          "\u{30AD}\u{3099}\u{30AB}\u{3099}",
    );
    check("\u{FF76}\u{FF9E}",
          "\u{FF76}\u{FF9E}",
          "\u{FF76}\u{FF9E}",
          "\u{30AC}",
          "\u{30AB}\u{3099}",
    );
}

#[test]
fn singleton_decompositions() {
    check("\u{212B}",
          "\u{C5}",
          "A\u{30A}",
          "\u{C5}",
          "A\u{30A}",
    );
    check("\u{2126}",
          "\u{3A9}",
          "\u{3A9}",
          "\u{3A9}",
          "\u{3A9}",
    );
}

#[test]
fn composition_exclusions() {
    // U+0958 DEVANAGARI LETTER QA decomposes but never recomposes.
    check("\u{958}",
          "\u{915}\u{93C}",
          "\u{915}\u{93C}",
          "\u{915}\u{93C}",
          "\u{915}\u{93C}",
    );
}

#[test]
fn hangul_syllables() {
    check("\u{D55C}\u{AD6D}\u{C5B4}",
          "\u{D55C}\u{AD6D}\u{C5B4}",
          "\u{1112}\u{1161}\u{11AB}\u{1100}\u{116E}\u{11A8}\u{110B}\u{1165}",
          "\u{D55C}\u{AD6D}\u{C5B4}",
          "\u{1112}\u{1161}\u{11AB}\u{1100}\u{116E}\u{11A8}\u{110B}\u{1165}",
    );
}

#[test]
fn multiple_combining_marks() {
    check("\u{1E69}",
          "\u{1E69}",
          "s\u{323}\u{307}",
          "\u{1E69}",
          "s\u{323}\u{307}",
    );
    check("s\u{323}\u{307}",
          "\u{1E69}",
          "s\u{323}\u{307}",
          "\u{1E69}",
          "s\u{323}\u{307}",
    );
    check("\u{1EBF}",
          "\u{1EBF}",
          "e\u{302}\u{301}",
          "\u{1EBF}",
          "e\u{302}\u{301}",
    );
    check("\u{105}\u{301}",
          "\u{105}\u{301}",
          "a\u{328}\u{301}",
          "\u{105}\u{301}",
          "a\u{328}\u{301}",
    );
}

#[test]
fn two_level_composites() {
    // GREEK SMALL LETTER IOTA WITH DIALYTIKA AND TONOS composes in two
    // steps: iota with the dialytika first, then the tonos onto the result.
    check("\u{3B9}\u{308}\u{301}",
          "\u{390}",
          "\u{3B9}\u{308}\u{301}",
          "\u{390}",
          "\u{3B9}\u{308}\u{301}",
    );
    // Vietnamese stacked diacritics recompose through the intermediate
    // circumflex form, and the precomposed character survives NFC.
    check("a\u{302}\u{301}",
          "\u{1EA5}",
          "a\u{302}\u{301}",
          "\u{1EA5}",
          "a\u{302}\u{301}",
    );
    check("\u{1EA5}",
          "\u{1EA5}",
          "a\u{302}\u{301}",
          "\u{1EA5}",
          "a\u{302}\u{301}",
    );

    assert!(is_normalized("\u{390}", Form::Nfc));
    assert!(is_normalized("\u{1D5}", Form::Nfc));
}

#[test]
fn canonical_reordering() {
    // Marks out of canonical order (ccc 230 before ccc 220) are reordered
    // under every form.
    check("q\u{307}\u{323}",
          "q\u{323}\u{307}",
          "q\u{323}\u{307}",
          "q\u{323}\u{307}",
          "q\u{323}\u{307}",
    );
}

//
// Properties
//

#[test]
fn nfd_output_is_canonically_ordered() {
    let inputs = [
        "q\u{307}\u{323}",
        "\u{1EBF}\u{323}\u{301}",
        "a\u{301}\u{328}\u{5B8}\u{5BC}",
        "\u{D55C}\u{301}",
    ];
    for input in &inputs {
        let mut last_ccc = 0;
        for c in nfd(input).chars() {
            let ccc = canonical_combining_class(c);
            if ccc != 0 {
                assert!(last_ccc <= ccc, "unordered marks in NFD of {:?}", input);
            }
            last_ccc = ccc;
        }
    }
}

#[test]
fn is_normalized_detects_denormalized_text() {
    assert!(!is_normalized("A\u{301}", Form::Nfc));
    assert!(is_normalized("A\u{301}", Form::Nfd));
    assert!(!is_normalized("\u{C1}", Form::Nfd));
    assert!(is_normalized("\u{C1}", Form::Nfc));
    assert!(!is_normalized("\u{FB01}", Form::Nfkc));
    assert!(is_normalized("\u{FB01}", Form::Nfc));

    // Out-of-order combining marks are normalized under no form.
    for &form in &FORMS {
        assert!(!is_normalized("q\u{307}\u{323}", form));
    }

    // The empty string is normalized under every form.
    for &form in &FORMS {
        assert!(is_normalized("", form));
    }
}
