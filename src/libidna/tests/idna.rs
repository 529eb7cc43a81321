// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! UTS #46 domain processing tests.
//!
//! Expected ACE forms were recorded from a reference IDNA
//! implementation over the same mapping table.

use libidna::{to_ascii, to_unicode, IdnaErrors, IdnaOptions};

fn default() -> IdnaOptions {
    IdnaOptions::empty()
}

fn strict() -> IdnaOptions {
    IdnaOptions::USE_STD3_RULES
        | IdnaOptions::CHECK_BIDI
        | IdnaOptions::CHECK_CONTEXTJ
        | IdnaOptions::CHECK_CONTEXTO
        | IdnaOptions::NONTRANSITIONAL_TO_ASCII
        | IdnaOptions::NONTRANSITIONAL_TO_UNICODE
}

//
// Round Trips
//

#[test]
fn encodes_and_decodes_a_basic_idn() {
    let info = to_ascii("m\u{FC}nchen.example", default());
    assert_eq!(info.result, "xn--mnchen-3ya.example");
    assert!(info.errors.is_empty());
    assert!(!info.is_transitional_different);

    let back = to_unicode("xn--mnchen-3ya.example", default());
    assert_eq!(back.result, "m\u{FC}nchen.example");
    assert!(back.errors.is_empty());
}

#[test]
fn mapping_folds_case_and_dots() {
    assert_eq!(
        to_ascii("M\u{DC}NCHEN.EXAMPLE", default()).result,
        "xn--mnchen-3ya.example"
    );
    // Ideographic full stops separate labels like ASCII dots.
    assert_eq!(
        to_ascii("a\u{3002}example", default()).result,
        "a.example"
    );
}

#[test]
fn ascii_domains_pass_through() {
    let info = to_ascii("example.com", default());
    assert_eq!(info.result, "example.com");
    assert!(info.errors.is_empty());
    // A single trailing root dot is preserved and not an error.
    assert!(to_ascii("example.com.", default()).errors.is_empty());
}

//
// Transitional Processing
//

#[test]
fn sharp_s_differs_between_modes() {
    let transitional = to_ascii("fa\u{DF}.example", default());
    assert_eq!(transitional.result, "fass.example");
    assert!(transitional.is_transitional_different);
    assert!(transitional.errors.is_empty());

    let nontransitional = to_ascii(
        "fa\u{DF}.example",
        IdnaOptions::NONTRANSITIONAL_TO_ASCII,
    );
    assert_eq!(nontransitional.result, "xn--fa-hia.example");
    assert!(nontransitional.is_transitional_different);
    assert!(nontransitional.errors.is_empty());
}

#[test]
fn plain_domains_report_no_transitional_difference() {
    assert!(!to_ascii("m\u{FC}nchen.example", default()).is_transitional_different);
    assert!(!to_ascii("example.com", default()).is_transitional_different);
}

//
// Error Accumulation
//

#[test]
fn empty_labels_are_flagged() {
    assert!(to_ascii("a..b", default())
        .errors
        .contains(IdnaErrors::EMPTY_LABEL));
    assert!(to_ascii("", default())
        .errors
        .contains(IdnaErrors::EMPTY_LABEL));
}

#[test]
fn hyphen_placement_is_checked() {
    let errors = to_ascii("-a-.example", default()).errors;
    assert!(errors.contains(IdnaErrors::LEADING_HYPHEN));
    assert!(errors.contains(IdnaErrors::TRAILING_HYPHEN));

    assert!(to_ascii("ab--cd.example", default())
        .errors
        .contains(IdnaErrors::HYPHEN_3_4));
}

#[test]
fn disallowed_characters_are_flagged_but_kept() {
    let info = to_ascii("a\u{2260}b.example", default());
    assert!(info.errors.contains(IdnaErrors::DISALLOWED));

    // Multiple violations accumulate instead of failing fast.
    let info = to_ascii("-a\u{2260}.b..c", default());
    assert!(info.errors.contains(IdnaErrors::DISALLOWED));
    assert!(info.errors.contains(IdnaErrors::LEADING_HYPHEN));
    assert!(info.errors.contains(IdnaErrors::EMPTY_LABEL));
}

#[test]
fn std3_rules_restrict_ascii() {
    assert!(to_ascii("a_b.example", default()).errors.is_empty());
    assert!(to_ascii("a_b.example", IdnaOptions::USE_STD3_RULES)
        .errors
        .contains(IdnaErrors::DISALLOWED));
}

#[test]
fn length_limits_are_enforced() {
    let long_label = "a".repeat(64);
    assert!(to_ascii(&long_label, default())
        .errors
        .contains(IdnaErrors::LABEL_TOO_LONG));
    assert!(!to_ascii(&"a".repeat(63), default())
        .errors
        .contains(IdnaErrors::LABEL_TOO_LONG));

    let long_domain = vec!["a".repeat(63); 5].join(".");
    assert!(to_ascii(&long_domain, default())
        .errors
        .contains(IdnaErrors::DOMAIN_NAME_TOO_LONG));
}

#[test]
fn bad_ace_labels_are_flagged() {
    // Not valid Punycode after the prefix.
    assert!(to_unicode("xn--a+b.example", default())
        .errors
        .contains(IdnaErrors::PUNYCODE));
    // Decodes to pure ASCII, which a correct encoder never produces.
    assert!(to_unicode("xn--abc-.example", default())
        .errors
        .contains(IdnaErrors::INVALID_ACE_LABEL));
}

//
// Context Rules
//

#[test]
fn joiners_require_context() {
    // The ZWJ is a deviation character: transitional processing maps it
    // away, so the context rule only ever sees it in nontransitional mode.
    let domain = "a\u{200D}b.example";
    let transitional = to_ascii(domain, IdnaOptions::CHECK_CONTEXTJ);
    assert_eq!(transitional.result, "ab.example");
    assert!(transitional.errors.is_empty());

    let nontransitional = IdnaOptions::CHECK_CONTEXTJ | IdnaOptions::NONTRANSITIONAL_TO_ASCII;
    assert!(to_ascii(domain, IdnaOptions::NONTRANSITIONAL_TO_ASCII)
        .errors
        .is_empty());
    assert!(to_ascii(domain, nontransitional)
        .errors
        .contains(IdnaErrors::CONTEXTJ));

    // ZWJ directly after a virama is permitted.
    let devanagari = "\u{915}\u{94D}\u{200D}\u{924}";
    assert!(!to_ascii(devanagari, nontransitional)
        .errors
        .contains(IdnaErrors::CONTEXTJ));
}

#[test]
fn middle_dot_requires_ells() {
    assert!(!to_ascii("co\u{B7}lecci\u{F3}", IdnaOptions::CHECK_CONTEXTO)
        .errors
        .is_empty());
    assert!(to_ascii("col\u{B7}lecci\u{F3}", IdnaOptions::CHECK_CONTEXTO)
        .errors
        .is_empty());
}

#[test]
fn arabic_digit_sets_must_not_mix() {
    let mixed = "\u{661}\u{6F1}";
    assert!(to_ascii(mixed, IdnaOptions::CHECK_CONTEXTO)
        .errors
        .contains(IdnaErrors::CONTEXTO_DIGITS));
    assert!(!to_ascii("\u{661}\u{662}", IdnaOptions::CHECK_CONTEXTO)
        .errors
        .contains(IdnaErrors::CONTEXTO_DIGITS));
}

//
// Bidi Rule
//

#[test]
fn bidi_rule_applies_to_mixed_direction_domains() {
    // All-RTL and all-LTR labels coexist fine.
    let info = to_ascii("abc.\u{5D0}\u{5D1}\u{5D2}", IdnaOptions::CHECK_BIDI);
    assert!(info.errors.is_empty());

    // Mixing directions inside one label violates the rule.
    let info = to_ascii("a\u{5D0}.\u{5D1}\u{5D2}", IdnaOptions::CHECK_BIDI);
    assert!(info.errors.contains(IdnaErrors::BIDI));

    // Without an RTL character the rule is not applied at all.
    assert!(to_ascii("0leading-digit", IdnaOptions::CHECK_BIDI)
        .errors
        .is_empty());
}

#[test]
fn strict_options_accept_a_clean_idn() {
    let info = to_ascii("m\u{FC}nchen.example", strict());
    assert_eq!(info.result, "xn--mnchen-3ya.example");
    assert!(info.errors.is_empty());
}
