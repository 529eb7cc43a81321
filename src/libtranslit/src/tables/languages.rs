// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Language-specific ASCII substitution tables.
//!
//! These capture conventions that differ from plain accent stripping, such
//! as German umlauts expanding to digraphs. Each table is a list of
//! (needle, replacement) pairs applied by direct substring substitution
//! before the generic folding tables get a chance.

/// Per-language substitution tables, keyed by primary language subtag.
/// The generic union in `fold` takes the first mapping for a character,
/// so the regional `at` table sits after `de`.
pub static LANGUAGES: &[(&str, &[(&str, &str)])] = &[
    ("da", DANISH),
    ("de", GERMAN),
    ("at", AUSTRIAN),
];

static GERMAN: &[(&str, &str)] = &[
    ("\u{C4}", "AE"),
    ("\u{D6}", "OE"),
    ("\u{DC}", "UE"),
    ("\u{E4}", "ae"),
    ("\u{F6}", "oe"),
    ("\u{FC}", "ue"),
    ("\u{DF}", "ss"),
    ("\u{1E9E}", "SS"),
];

// Austrian German renders the sharp s as "sz" instead of "ss".
static AUSTRIAN: &[(&str, &str)] = &[
    ("\u{C4}", "AE"),
    ("\u{D6}", "OE"),
    ("\u{DC}", "UE"),
    ("\u{E4}", "ae"),
    ("\u{F6}", "oe"),
    ("\u{FC}", "ue"),
    ("\u{DF}", "sz"),
    ("\u{1E9E}", "SZ"),
];

static DANISH: &[(&str, &str)] = &[
    ("\u{C5}", "Aa"),
    ("\u{E5}", "aa"),
    ("\u{C6}", "Ae"),
    ("\u{E6}", "ae"),
    ("\u{D8}", "Oe"),
    ("\u{F8}", "oe"),
];

/// Resolve a language name to its canonical table key.
pub fn language_key(name: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|&(key, _)| key)
}

/// Look up the substitution table for a language.
pub fn language_table(name: &str) -> Option<&'static [(&'static str, &'static str)]> {
    LANGUAGES
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|&(_, table)| table)
}
