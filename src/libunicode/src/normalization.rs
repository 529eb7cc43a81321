// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Unicode normalization algorithms.
//!
//! This module implements _Unicode Normalization Forms_ as defined by [Unicode Standard
//! Annex #15][UAX-15]. Unicode normalization is used to ensure that visually equivalent
//! strings have equivalent binary representations.
//!
//! [UAX-15]: http://www.unicode.org/reports/tr15/

use std::iter::FromIterator;

use crate::tables::{composition_mappings, decomposition_mappings};
use crate::util::charcc;

//
// Normalization Forms
//

/// A Unicode normalization form.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Form {
    /// Canonical Decomposition followed by Canonical Composition (_D120_).
    Nfc,
    /// Canonical Decomposition (_D118_).
    Nfd,
    /// Compatibility Decomposition followed by Canonical Composition (_D121_).
    Nfkc,
    /// Compatibility Decomposition (_D119_).
    Nfkd,
}

impl Form {
    fn compatibility(self) -> bool {
        matches!(self, Form::Nfkc | Form::Nfkd)
    }

    fn composed(self) -> bool {
        matches!(self, Form::Nfc | Form::Nfkc)
    }
}

/// Normalize a string according to the given normalization form.
pub fn normalize(s: &str, form: Form) -> String {
    if quick_check(s, form) == Quick::Yes {
        return s.to_owned();
    }

    let mut buffer = decomposed(s, form);
    if form.composed() {
        compose_canonically(&mut buffer);
    }
    String::from_iter(buffer.iter().map(|cc| cc.to_char()))
}

/// Normalize a string according to **Normalization Form C**.
pub fn nfc(s: &str) -> String {
    normalize(s, Form::Nfc)
}

/// Normalize a string according to **Normalization Form D**.
pub fn nfd(s: &str) -> String {
    normalize(s, Form::Nfd)
}

/// Normalize a string according to **Normalization Form KC**.
pub fn nfkc(s: &str) -> String {
    normalize(s, Form::Nfkc)
}

/// Normalize a string according to **Normalization Form KD**.
pub fn nfkd(s: &str) -> String {
    normalize(s, Form::Nfkd)
}

/// Check whether a string is already in the given normalization form.
///
/// Equivalent to `normalize(s, form) == s`, with cheap early answers for
/// ASCII text and for strings with out-of-order combining marks.
pub fn is_normalized(s: &str, form: Form) -> bool {
    match quick_check(s, form) {
        Quick::Yes => true,
        Quick::No => false,
        Quick::Maybe => normalize(s, form) == s,
    }
}

//
// Quick Check
//

#[derive(PartialEq, Eq)]
enum Quick {
    Yes,
    No,
    Maybe,
}

/// Scan for cheap answers to `is_normalized`.
///
/// ASCII text is normalized under every form, and a string whose combining
/// marks violate canonical ordering is normalized under none. Everything
/// else needs the full algorithm.
fn quick_check(s: &str, _form: Form) -> Quick {
    use crate::tables::character_properties::canonical_combining_class as ccc;

    let mut verdict = Quick::Yes;
    let mut last_ccc = 0;

    for c in s.chars() {
        if c <= '\u{7F}' {
            last_ccc = 0;
            continue;
        }

        let this_ccc = ccc(c);
        if last_ccc > this_ccc && this_ccc != 0 {
            return Quick::No;
        }
        last_ccc = this_ccc;
        verdict = Quick::Maybe;
    }

    verdict
}

//
// Decomposition
//

/// Produce the full decomposition of a string under the given form,
/// in canonical order.
fn decomposed(s: &str, form: Form) -> Vec<charcc> {
    let mut buffer = Vec::with_capacity(s.len());

    for c in s.chars() {
        push_decomposition(c, form.compatibility(), &mut buffer);
    }
    reorder_canonically(&mut buffer);

    buffer
}

/// Push the full decomposition of a single character into the buffer.
///
/// The generated tables are expanded to their fixed point offline, so this
/// is a single lookup rather than a recursive substitution. Compatibility
/// entries equal to the canonical ones are stored only once, hence the
/// fallback chain.
fn push_decomposition(c: char, compatibility: bool, buffer: &mut Vec<charcc>) {
    if push_hangul_decomposition(c, buffer) {
        return;
    }

    let mapping = if compatibility {
        decomposition_mappings::compatibility_mapping(c)
            .or_else(|| decomposition_mappings::canonical_mapping(c))
    } else {
        decomposition_mappings::canonical_mapping(c)
    };

    match mapping {
        Some(expansion) => buffer.extend_from_slice(expansion),
        None => buffer.push(charcc::from_char(c)),
    }
}

//
// Conjoining Jamo Behavior
//

const S_BASE: u32 = 0xAC00;
const L_BASE: u32 = 0x1100;
const V_BASE: u32 = 0x1161;
const T_BASE: u32 = 0x11A7;
const L_COUNT: u32 = 19;
const V_COUNT: u32 = 21;
const T_COUNT: u32 = 28;
const N_COUNT: u32 = V_COUNT * T_COUNT;
const S_COUNT: u32 = L_COUNT * N_COUNT;

/// Decompose a Precomposed Hangul syllable (D132) into conjoining jamo.
///
/// Returns false without touching the buffer if the character is not a
/// precomposed syllable. Jamo and syllables all have combining class zero,
/// which is guaranteed to never change, so the table lookup is skipped.
fn push_hangul_decomposition(c: char, buffer: &mut Vec<charcc>) -> bool {
    let cp = c as u32;
    if !(S_BASE..S_BASE + S_COUNT).contains(&cp) {
        return false;
    }

    let s_index = cp - S_BASE;
    let l = L_BASE + s_index / N_COUNT;
    let v = V_BASE + (s_index % N_COUNT) / T_COUNT;
    let t = T_BASE + s_index % T_COUNT;

    // The arithmetic keeps all three codepoints inside the jamo blocks,
    // so the unchecked conversions are valid.
    unsafe {
        buffer.push(charcc::from_char_with_ccc(std::char::from_u32_unchecked(l), 0));
        buffer.push(charcc::from_char_with_ccc(std::char::from_u32_unchecked(v), 0));
        if t != T_BASE {
            buffer.push(charcc::from_char_with_ccc(std::char::from_u32_unchecked(t), 0));
        }
    }

    true
}

/// Compose an <L, V> or <LV, T> jamo pair into a Precomposed Hangul
/// syllable (D132), if the pair forms one.
fn compose_hangul(c1: char, c2: char) -> Option<charcc> {
    let (a, b) = (c1 as u32, c2 as u32);

    if (L_BASE..L_BASE + L_COUNT).contains(&a) && (V_BASE..V_BASE + V_COUNT).contains(&b) {
        let lv = S_BASE + (a - L_BASE) * N_COUNT + (b - V_BASE) * T_COUNT;
        // Safe: the arithmetic stays inside the syllable block.
        let c = unsafe { std::char::from_u32_unchecked(lv) };
        return Some(charcc::from_char_with_ccc(c, 0));
    }

    if (S_BASE..S_BASE + S_COUNT).contains(&a)
        && (a - S_BASE) % T_COUNT == 0
        && (T_BASE + 1..T_BASE + T_COUNT).contains(&b)
    {
        // Safe: an LV syllable plus a trailing jamo index stays inside the block.
        let c = unsafe { std::char::from_u32_unchecked(a + (b - T_BASE)) };
        return Some(charcc::from_char_with_ccc(c, 0));
    }

    None
}

//
// Canonical Ordering Algorithm
//

/// Apply the Canonical Ordering Algorithm (D109) to a decomposed buffer.
///
/// Characters with combining class zero are never reordered, so this is an
/// insertion sort that only ever moves a combining mark back across marks of
/// a strictly greater class. Equal classes keep their relative order, which
/// makes the sort stable as the algorithm requires. Runs of marks are short
/// in real-world text (usually 2..5), so quadratic behavior is not a concern.
fn reorder_canonically(buffer: &mut [charcc]) {
    for i in 1..buffer.len() {
        let ccc = buffer[i].ccc();
        if ccc == 0 {
            continue;
        }
        let mut j = i;
        while j > 0 && buffer[j - 1].ccc() > ccc {
            buffer.swap(j - 1, j);
            j -= 1;
        }
    }
}

//
// Canonical Composition Algorithm
//

/// Apply the Canonical Composition Algorithm (D117) to a decomposed,
/// canonically ordered buffer, in place.
///
/// The buffer is rewritten front to back while tracking the position of the
/// last starter that may still take part in a composition. A character
/// composes with that starter when nothing blocks it (D115): either it is
/// immediately adjacent, or the last surviving mark in between has a
/// strictly smaller combining class.
fn compose_canonically(buffer: &mut Vec<charcc>) {
    let mut composed: Vec<charcc> = Vec::with_capacity(buffer.len());
    let mut starter: Option<usize> = None;
    let mut last_ccc = 0;

    for &cc in buffer.iter() {
        let ccc = cc.ccc();

        if let Some(si) = starter {
            let adjacent = composed.len() == si + 1;
            if adjacent || (ccc != 0 && last_ccc < ccc) {
                if let Some(p) = primary_composite(composed[si].to_char(), cc.to_char()) {
                    composed[si] = p;
                    continue;
                }
            }
        }

        if ccc == 0 {
            starter = Some(composed.len());
            last_ccc = 0;
        } else {
            last_ccc = ccc;
        }
        composed.push(cc);
    }

    *buffer = composed;
}

/// Check for a Primary Composite (D114) equivalent to the given pair.
fn primary_composite(c1: char, c2: char) -> Option<charcc> {
    compose_hangul(c1, c2).or_else(|| composition_mappings::primary(c1, c2))
}
