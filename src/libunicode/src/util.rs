// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Unicode utilities.
//!
//! This module contains miscellaneous minor utilities used in Unicode processing.

/// A `char` with its canonical combining class packed into the high octet.
///
/// Normalization constantly consults the canonical combining class of the
/// characters it shuffles around. Codepoints need only 21 bits, so the class
/// can ride along in the otherwise unused high octet of a `u32`, halving the
/// footprint of the working buffers compared to naive `(char, u8)` tuples.
/// The generated data tables store decomposition expansions and composites
/// in this packed form directly.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct charcc(u32);

const CODEPOINT_MASK: u32 = 0x00FF_FFFF;

impl charcc {
    /// Pack a character, looking up its canonical combining class.
    pub fn from_char(c: char) -> charcc {
        use crate::tables::character_properties::canonical_combining_class as ccc;

        charcc::from_char_with_ccc(c, ccc(c))
    }

    /// Pack a character whose canonical combining class is already known
    /// (e.g. guaranteed to be zero by the Hangul syllable arithmetic).
    pub fn from_char_with_ccc(c: char, ccc: u8) -> charcc {
        debug_assert!(charcc::well_formed(u32::from(c) | (u32::from(ccc) << 24)));

        charcc(u32::from(c) | (u32::from(ccc) << 24))
    }

    /// Reconstruct a charcc from its raw `u32` form, as stored in the
    /// generated data tables.
    pub fn from_u32(raw: u32) -> charcc {
        debug_assert!(charcc::well_formed(raw));

        charcc(raw)
    }

    /// Cast a raw table slice into a charcc slice.
    #[allow(clippy::transmute_ptr_to_ptr)]
    pub fn from_u32_slice(raw: &[u32]) -> &[charcc] {
        debug_assert!(raw.iter().all(|&value| charcc::well_formed(value)));

        // Safe: charcc is a transparent u32 and the slice has been validated.
        unsafe { std::mem::transmute(raw) }
    }

    /// Extract the character.
    pub fn to_char(self) -> char {
        // Safe: the codepoint part is validated on construction.
        unsafe { std::char::from_u32_unchecked(self.0 & CODEPOINT_MASK) }
    }

    /// Extract the canonical combining class.
    pub fn ccc(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Verify that the codepoint part is a valid scalar value and that the
    /// high octet holds its actual canonical combining class.
    fn well_formed(raw: u32) -> bool {
        use crate::tables::character_properties::canonical_combining_class as ccc;

        match std::char::from_u32(raw & CODEPOINT_MASK) {
            Some(c) => ccc(c) == (raw >> 24) as u8,
            None => false,
        }
    }
}
