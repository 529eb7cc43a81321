// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Unicode default case algorithms.
//!
//! This module implements _Default Case Algorithms_ as defined by [Unicode Standard 3.13][US-3].
//! Case algorithms are used to transform characters of bicameral scripts between their lowercase
//! and uppercase forms.
//!
//! The algorithms are called _default_ because they are not tailored for a specific locale,
//! language, or purpose. In general, case mappings are context-dependent, but these algorithms
//! are context-free.
//!
//! [US-3]: http://www.unicode.org/versions/latest/ch03.pdf

use crate::normalization;
use crate::tables::case_mappings;

//
// Default Case Conversion
//

/// Convert a string to uppercase according to **toUppercase** (_R1_).
///
/// This is a full case conversion: the result may be longer than the input
/// (e.g. "\u{00DF}" becomes "SS").
pub fn to_uppercase(s: &str) -> String {
    convert(s, case_mappings::uppercase_mapping)
}

/// Convert a string to lowercase according to **toLowercase** (_R2_).
pub fn to_lowercase(s: &str) -> String {
    convert(s, case_mappings::lowercase_mapping)
}

fn convert(s: &str, mapping: fn(char) -> Option<&'static str>) -> String {
    let mut converted = String::with_capacity(s.len());

    for c in s.chars() {
        match mapping(c) {
            Some(slice) => converted.push_str(slice),
            None => converted.push(c),
        }
    }

    converted
}

//
// Default Case Folding
//

/// Fold a string according to **toCasefold** (_R4_).
///
/// Case folding maps case variants of a string to a common form, enabling
/// case-insensitive comparison. The folded form is not meant to be shown to
/// users. Full foldings are used, so the result may change length.
pub fn case_fold(s: &str) -> String {
    let mut folded = String::with_capacity(s.len());

    for c in s.chars() {
        // The folding table stores only entries that differ from the full
        // lowercase mapping.
        match case_mappings::case_folding(c).or_else(|| case_mappings::lowercase_mapping(c)) {
            Some(slice) => folded.push_str(slice),
            None => folded.push(c),
        }
    }

    folded
}

/// Fold case and normalize a string, approximating **toNFKC_Casefold** (_R5_).
///
/// The result is stable under repeated application, which makes it suitable
/// for caseless, compatibility-insensitive identifier matching (it backs the
/// IDNA mapping step). Default ignorable codepoints are the caller's concern.
pub fn to_nfkc_casefold(s: &str) -> String {
    let folded = case_fold(&normalization::nfkc(s));

    normalization::nfkc(&folded)
}
