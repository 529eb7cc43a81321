// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! ASCII folding passes.
//!
//! Two strengths are provided. [`latin_fold`] is the gentle one: it maps
//! accented Latin letters, typographic punctuation, and compatibility
//! glyphs to ASCII and leaves everything else alone. [`to_ascii`] is the
//! exhaustive one: it layers language-specific substitutions, the generic
//! multi-language table, and the banked per-codepoint fallback, and it
//! never emits a non-ASCII character.

use once_cell::sync::Lazy;

use crate::tables;
use crate::tables::languages::{language_table, LANGUAGES};

/// Substituted for codepoints with no known ASCII rendition.
pub const PLACEHOLDER: char = '?';

/// The generic multi-language substitution table: the union of every
/// per-language table, first language wins on conflicts.
static GENERIC: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    let mut union: Vec<(&str, &str)> = Vec::new();
    for &(_, table) in LANGUAGES {
        for &(from, to) in table {
            if !union.iter().any(|&(seen, _)| seen == from) {
                union.push((from, to));
            }
        }
    }
    union
});

/// Fold Latin letters and typographic punctuation to ASCII, leaving
/// unmapped characters untouched.
pub fn latin_fold(s: &str) -> String {
    let mut folded = String::with_capacity(s.len());
    for c in s.chars() {
        match tables::latin_ascii(c) {
            Some(replacement) => folded.push_str(replacement),
            None => folded.push(c),
        }
    }
    folded
}

/// Transliterate a string to pure ASCII.
///
/// Language-specific substitutions apply first, then the generic table,
/// then the banked codepoint fallback. Codepoints that no layer knows
/// come out as [`PLACEHOLDER`].
pub fn to_ascii(s: &str, language: Option<&str>) -> String {
    let mut text = s.to_string();
    if let Some(table) = language.and_then(language_table) {
        for &(from, to) in table {
            if text.contains(from) {
                text = text.replace(from, to);
            }
        }
    }
    for &(from, to) in GENERIC.iter() {
        if text.contains(from) {
            text = text.replace(from, to);
        }
    }

    let mut ascii = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            ascii.push(c);
        } else if let Some(replacement) = tables::ascii_bank(c as u32) {
            ascii.push_str(replacement);
        } else {
            ascii.push(PLACEHOLDER);
        }
    }
    ascii
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_fold_leaves_other_scripts_alone() {
        assert_eq!(latin_fold("d\u{E9}j\u{E0} \u{2026}"), "deja ...");
        assert_eq!(latin_fold("\u{3B1}\u{3B2}"), "\u{3B1}\u{3B2}");
    }

    #[test]
    fn to_ascii_layers_language_tables() {
        assert_eq!(to_ascii("\u{FC}ber", Some("de")), "ueber");
        // The generic table still applies without a language.
        assert_eq!(to_ascii("\u{FC}ber", None), "ueber");
        // The regional table never shadows the generic sharp s.
        assert_eq!(to_ascii("\u{DF}", Some("at")), "sz");
        assert_eq!(to_ascii("\u{DF}", None), "ss");
    }

    #[test]
    fn to_ascii_romanizes_through_the_banks() {
        assert_eq!(to_ascii("\u{3B1}\u{3B2}\u{3B3}", None), "abg");
        assert_eq!(to_ascii("\u{43C}\u{438}\u{440}", None), "mir");
    }

    #[test]
    fn to_ascii_substitutes_a_placeholder() {
        // CJK has no bank.
        assert_eq!(to_ascii("a\u{4E2D}b", None), "a?b");
    }
}
