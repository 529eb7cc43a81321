// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! UTS #46 domain name processing.
//!
//! [`to_ascii`] and [`to_unicode`] process each dot-separated label
//! independently and accumulate every violated rule in an error bitmask
//! instead of failing fast, so callers can inspect which invariants
//! failed. The result string is always produced, even when errors are
//! flagged.

use bitflags::bitflags;

use libunicode::canonical_combining_class;
use libunicode::normalization::{is_normalized, nfc, Form};

use crate::punycode;
use crate::tables::{
    bidi_class, codepoint_class, is_combining_mark, joining_type, script, uts46_status,
    BidiClass, CodepointClass, JoiningType, Script, Status,
};

bitflags! {
    /// Processing options for [`to_ascii`] and [`to_unicode`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct IdnaOptions: u32 {
        /// Restrict ASCII characters to letters, digits, and hyphens.
        const USE_STD3_RULES = 0x0002;
        /// Enforce the RFC 5893 bidi rule on mixed-direction domains.
        const CHECK_BIDI = 0x0004;
        /// Enforce the RFC 5892 joiner context rules.
        const CHECK_CONTEXTJ = 0x0008;
        /// Keep deviation characters in `to_ascii` instead of remapping.
        const NONTRANSITIONAL_TO_ASCII = 0x0010;
        /// Keep deviation characters in `to_unicode` instead of remapping.
        const NONTRANSITIONAL_TO_UNICODE = 0x0020;
        /// Enforce the RFC 5892 punctuation and digit context rules.
        const CHECK_CONTEXTO = 0x0040;
    }
}

bitflags! {
    /// Accumulated rule violations.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct IdnaErrors: u32 {
        const EMPTY_LABEL = 0x0001;
        const LABEL_TOO_LONG = 0x0002;
        const DOMAIN_NAME_TOO_LONG = 0x0004;
        const LEADING_HYPHEN = 0x0008;
        const TRAILING_HYPHEN = 0x0010;
        const HYPHEN_3_4 = 0x0020;
        const LEADING_COMBINING_MARK = 0x0040;
        const DISALLOWED = 0x0080;
        const PUNYCODE = 0x0100;
        const LABEL_HAS_DOT = 0x0200;
        const INVALID_ACE_LABEL = 0x0400;
        const BIDI = 0x0800;
        const CONTEXTJ = 0x1000;
        const CONTEXTO_PUNCTUATION = 0x2000;
        const CONTEXTO_DIGITS = 0x4000;
    }
}

/// The outcome of a [`to_ascii`] or [`to_unicode`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdnaInfo {
    /// The processed domain name, produced even when errors are set.
    pub result: String,
    /// Whether transitional and nontransitional processing differ for
    /// this input, which happens exactly when it contains a deviation
    /// character.
    pub is_transitional_different: bool,
    /// Every rule violated anywhere in the domain.
    pub errors: IdnaErrors,
}

/// Maximum length of one ACE-encoded label.
const MAX_LABEL_LENGTH: usize = 63;
/// Maximum length of the full ACE-encoded domain, excluding a root dot.
const MAX_DOMAIN_LENGTH: usize = 255;

/// Convert a domain name to its ASCII Compatibility Encoding.
pub fn to_ascii(domain: &str, options: IdnaOptions) -> IdnaInfo {
    let transitional = !options.contains(IdnaOptions::NONTRANSITIONAL_TO_ASCII);
    let processed = process(domain, options, transitional);
    let mut errors = processed.errors;

    let mut labels = Vec::with_capacity(processed.labels.len());
    for label in &processed.labels {
        if label.is_ascii() {
            labels.push(label.clone());
        } else {
            match punycode::encode(label) {
                Some(encoded) => labels.push(format!("xn--{}", encoded)),
                None => {
                    errors |= IdnaErrors::PUNYCODE;
                    labels.push(label.clone());
                }
            }
        }
    }
    for label in &labels {
        if label.len() > MAX_LABEL_LENGTH {
            errors |= IdnaErrors::LABEL_TOO_LONG;
        }
    }

    let result = labels.join(".");
    // A single root dot is not counted against the limit.
    if result.strip_suffix('.').unwrap_or(&result).len() > MAX_DOMAIN_LENGTH {
        errors |= IdnaErrors::DOMAIN_NAME_TOO_LONG;
    }
    IdnaInfo {
        result,
        is_transitional_different: processed.is_transitional_different,
        errors,
    }
}

/// Convert a domain name to its Unicode form, decoding ACE labels.
pub fn to_unicode(domain: &str, options: IdnaOptions) -> IdnaInfo {
    let transitional = !options.contains(IdnaOptions::NONTRANSITIONAL_TO_UNICODE);
    let processed = process(domain, options, transitional);
    IdnaInfo {
        result: processed.labels.join("."),
        is_transitional_different: processed.is_transitional_different,
        errors: processed.errors,
    }
}

struct Processed {
    labels: Vec<String>,
    errors: IdnaErrors,
    is_transitional_different: bool,
}

/// The shared mapping, label splitting, and validation pipeline. The
/// returned labels are in Unicode form, ACE labels already decoded.
fn process(domain: &str, options: IdnaOptions, transitional: bool) -> Processed {
    let mut errors = IdnaErrors::empty();
    let mut is_transitional_different = false;

    let mut mapped = String::with_capacity(domain.len());
    for c in domain.chars() {
        match uts46_status(c) {
            Status::Valid => mapped.push(c),
            Status::Mapped(to) => mapped.push_str(to),
            Status::Deviation(to) => {
                is_transitional_different = true;
                if transitional {
                    mapped.push_str(to);
                } else {
                    mapped.push(c);
                }
            }
            Status::Ignored => {}
            Status::Disallowed => {
                errors |= IdnaErrors::DISALLOWED;
                mapped.push(c);
            }
        }
    }
    let mapped = nfc(&mapped);

    let raw: Vec<&str> = mapped.split('.').collect();
    let mut labels = Vec::with_capacity(raw.len());
    for (index, &label) in raw.iter().enumerate() {
        if label.is_empty() {
            // Only the root label may be empty.
            if index + 1 != raw.len() || index == 0 {
                errors |= IdnaErrors::EMPTY_LABEL;
            }
            labels.push(String::new());
            continue;
        }
        if let Some(ace) = label.strip_prefix("xn--") {
            match punycode::decode(ace) {
                Some(decoded) if !decoded.is_empty() => {
                    // Decoding must produce something non-ASCII and
                    // already normalized, or the ACE form was bogus.
                    if decoded.is_ascii() || !is_normalized(&decoded, Form::Nfc) {
                        errors |= IdnaErrors::INVALID_ACE_LABEL;
                    }
                    let label_errors = validate_label(&decoded, options);
                    if !label_errors.is_empty() {
                        errors |= label_errors | IdnaErrors::INVALID_ACE_LABEL;
                    }
                    labels.push(decoded);
                }
                _ => {
                    errors |= IdnaErrors::PUNYCODE;
                    labels.push(label.to_string());
                }
            }
        } else {
            errors |= validate_label(label, options);
            labels.push(label.to_string());
        }
    }

    if options.contains(IdnaOptions::CHECK_BIDI) && is_bidi_domain(&labels) {
        for label in &labels {
            if !label.is_empty() && !bidi_rule(label) {
                errors |= IdnaErrors::BIDI;
            }
        }
    }

    Processed {
        labels,
        errors,
        is_transitional_different,
    }
}

//
// Label Validity
//

/// Check one Unicode label against the UTS #46 validity criteria.
fn validate_label(label: &str, options: IdnaOptions) -> IdnaErrors {
    let mut errors = IdnaErrors::empty();
    let chars: Vec<char> = label.chars().collect();

    if label.starts_with('-') {
        errors |= IdnaErrors::LEADING_HYPHEN;
    }
    if label.ends_with('-') {
        errors |= IdnaErrors::TRAILING_HYPHEN;
    }
    if chars.len() >= 4 && chars[2] == '-' && chars[3] == '-' {
        errors |= IdnaErrors::HYPHEN_3_4;
    }
    if label.contains('.') {
        errors |= IdnaErrors::LABEL_HAS_DOT;
    }
    if is_combining_mark(chars[0]) {
        errors |= IdnaErrors::LEADING_COMBINING_MARK;
    }

    for (index, &c) in chars.iter().enumerate() {
        if c.is_ascii() {
            match c {
                'a'..='z' | '0'..='9' | '-' => {}
                // The mapping stage lowercases, so uppercase can only
                // arrive through a decoded ACE label.
                'A'..='Z' => errors |= IdnaErrors::DISALLOWED,
                _ if options.contains(IdnaOptions::USE_STD3_RULES) => {
                    errors |= IdnaErrors::DISALLOWED
                }
                _ => {}
            }
            continue;
        }
        match codepoint_class(c) {
            CodepointClass::Pvalid => {}
            CodepointClass::ContextJ => {
                if options.contains(IdnaOptions::CHECK_CONTEXTJ) && !contextj_rule(&chars, index)
                {
                    errors |= IdnaErrors::CONTEXTJ;
                }
            }
            CodepointClass::ContextO => {
                if options.contains(IdnaOptions::CHECK_CONTEXTO) {
                    errors |= contexto_rule(&chars, index);
                }
            }
            CodepointClass::Disallowed => errors |= IdnaErrors::DISALLOWED,
        }
    }
    errors
}

/// RFC 5892 Appendix A rules for ZERO WIDTH JOINER and ZERO WIDTH
/// NON-JOINER.
fn contextj_rule(chars: &[char], index: usize) -> bool {
    if index == 0 {
        return false;
    }
    // Both joiners are permitted directly after a virama.
    if canonical_combining_class(chars[index - 1]) == 9 {
        return true;
    }
    if chars[index] == '\u{200D}' {
        return false;
    }

    // ZWNJ also splits a cursive connection: a left- or dual-joining
    // character before it and a right- or dual-joining one after it,
    // with transparent characters skipped on both sides.
    let mut joined_before = false;
    for &previous in chars[..index].iter().rev() {
        match joining_type(previous) {
            Some(JoiningType::Transparent) => continue,
            Some(JoiningType::LeftJoining) | Some(JoiningType::DualJoining) => {
                joined_before = true;
            }
            _ => {}
        }
        break;
    }
    if !joined_before {
        return false;
    }
    for &next in &chars[index + 1..] {
        match joining_type(next) {
            Some(JoiningType::Transparent) => continue,
            Some(JoiningType::RightJoining) | Some(JoiningType::DualJoining) => return true,
            _ => return false,
        }
    }
    false
}

/// RFC 5892 Appendix A rules for the CONTEXTO punctuation and digit
/// characters.
fn contexto_rule(chars: &[char], index: usize) -> IdnaErrors {
    match chars[index] {
        // MIDDLE DOT: between two ells.
        '\u{B7}' => {
            if index > 0
                && index + 1 < chars.len()
                && chars[index - 1] == 'l'
                && chars[index + 1] == 'l'
            {
                IdnaErrors::empty()
            } else {
                IdnaErrors::CONTEXTO_PUNCTUATION
            }
        }
        // GREEK LOWER NUMERAL SIGN: followed by Greek.
        '\u{375}' => {
            if chars.get(index + 1).map(|&c| script(c)) == Some(Some(Script::Greek)) {
                IdnaErrors::empty()
            } else {
                IdnaErrors::CONTEXTO_PUNCTUATION
            }
        }
        // HEBREW PUNCTUATION GERESH and GERSHAYIM: preceded by Hebrew.
        '\u{5F3}' | '\u{5F4}' => {
            if index > 0 && script(chars[index - 1]) == Some(Script::Hebrew) {
                IdnaErrors::empty()
            } else {
                IdnaErrors::CONTEXTO_PUNCTUATION
            }
        }
        // KATAKANA MIDDLE DOT: the label contains some Japanese script.
        '\u{30FB}' => {
            let japanese = chars.iter().any(|&c| {
                matches!(
                    script(c),
                    Some(Script::Hiragana) | Some(Script::Katakana) | Some(Script::Han)
                )
            });
            if japanese {
                IdnaErrors::empty()
            } else {
                IdnaErrors::CONTEXTO_PUNCTUATION
            }
        }
        // The two Arabic digit sets must not mix within a label.
        '\u{660}'..='\u{669}' => {
            if chars.iter().any(|&c| ('\u{6F0}'..='\u{6F9}').contains(&c)) {
                IdnaErrors::CONTEXTO_DIGITS
            } else {
                IdnaErrors::empty()
            }
        }
        '\u{6F0}'..='\u{6F9}' => {
            if chars.iter().any(|&c| ('\u{660}'..='\u{669}').contains(&c)) {
                IdnaErrors::CONTEXTO_DIGITS
            } else {
                IdnaErrors::empty()
            }
        }
        _ => IdnaErrors::empty(),
    }
}

//
// Bidi Rule
//

/// A bidi domain name is one with an RTL character in any label.
fn is_bidi_domain(labels: &[String]) -> bool {
    labels.iter().flat_map(|label| label.chars()).any(|c| {
        matches!(
            bidi_class(c),
            Some(BidiClass::RightToLeft)
                | Some(BidiClass::ArabicLetter)
                | Some(BidiClass::ArabicNumber)
        )
    })
}

/// RFC 5893 section 2, the per-label bidi rule.
fn bidi_rule(label: &str) -> bool {
    let chars: Vec<char> = label.chars().collect();
    let rtl = match bidi_class(chars[0]) {
        Some(BidiClass::RightToLeft) | Some(BidiClass::ArabicLetter) => true,
        Some(BidiClass::LeftToRight) => false,
        _ => return false,
    };

    let mut seen_en = false;
    let mut seen_an = false;
    for &c in &chars {
        let class = match bidi_class(c) {
            Some(class) => class,
            None => return false,
        };
        let allowed = match class {
            BidiClass::RightToLeft | BidiClass::ArabicLetter | BidiClass::ArabicNumber => rtl,
            BidiClass::LeftToRight => !rtl,
            _ => true,
        };
        if !allowed {
            return false;
        }
        match class {
            BidiClass::EuropeanNumber => seen_en = true,
            BidiClass::ArabicNumber => seen_an = true,
            _ => {}
        }
    }
    if rtl && seen_en && seen_an {
        return false;
    }

    // The last character, ignoring trailing nonspacing marks.
    let last = chars
        .iter()
        .rev()
        .filter_map(|&c| bidi_class(c))
        .find(|&class| class != BidiClass::NonspacingMark);
    match last {
        Some(BidiClass::RightToLeft)
        | Some(BidiClass::ArabicLetter)
        | Some(BidiClass::ArabicNumber) => rtl,
        Some(BidiClass::EuropeanNumber) => true,
        Some(BidiClass::LeftToRight) => !rtl,
        _ => false,
    }
}
