// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Bidirectional classes for the RFC 5893 bidi rule.
//!
//! Generated offline from the Unicode Character Database. Only classes
//! the rule distinguishes are listed; everything else reports `None`
//! and cannot appear in a bidi domain name. Ranges are half-open and
//! sorted. Do not edit by hand.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidiClass {
    LeftToRight,
    RightToLeft,
    ArabicLetter,
    ArabicNumber,
    EuropeanNumber,
    EuropeanSeparator,
    CommonSeparator,
    EuropeanTerminator,
    OtherNeutral,
    BoundaryNeutral,
    NonspacingMark,
}

/// Look up the bidirectional class of a character.
pub fn bidi_class(c: char) -> Option<BidiClass> {
    let cp = c as u32;
    let index = BIDI_CLASSES.partition_point(|&(start, _, _)| start <= cp);
    if index == 0 {
        return None;
    }
    let (_, end, class) = BIDI_CLASSES[index - 1];
    if cp < end {
        Some(class)
    } else {
        None
    }
}

#[rustfmt::skip]
static BIDI_CLASSES: &[(u32, u32, BidiClass)] = &[
    (0x0000, 0x0009, BidiClass::BoundaryNeutral),
    (0x000E, 0x001C, BidiClass::BoundaryNeutral),
    (0x0021, 0x0023, BidiClass::OtherNeutral),
    (0x0023, 0x0026, BidiClass::EuropeanTerminator),
    (0x0026, 0x002B, BidiClass::OtherNeutral),
    (0x002B, 0x002C, BidiClass::EuropeanSeparator),
    (0x002C, 0x002D, BidiClass::CommonSeparator),
    (0x002D, 0x002E, BidiClass::EuropeanSeparator),
    (0x002E, 0x0030, BidiClass::CommonSeparator),
    (0x0030, 0x003A, BidiClass::EuropeanNumber),
    (0x003A, 0x003B, BidiClass::CommonSeparator),
    (0x003B, 0x0041, BidiClass::OtherNeutral),
    (0x0041, 0x005B, BidiClass::LeftToRight),
    (0x005B, 0x0061, BidiClass::OtherNeutral),
    (0x0061, 0x007B, BidiClass::LeftToRight),
    (0x007B, 0x007F, BidiClass::OtherNeutral),
    (0x007F, 0x0085, BidiClass::BoundaryNeutral),
    (0x0086, 0x00A0, BidiClass::BoundaryNeutral),
    (0x00A0, 0x00A1, BidiClass::CommonSeparator),
    (0x00A1, 0x00A2, BidiClass::OtherNeutral),
    (0x00A2, 0x00A6, BidiClass::EuropeanTerminator),
    (0x00A6, 0x00AA, BidiClass::OtherNeutral),
    (0x00AA, 0x00AB, BidiClass::LeftToRight),
    (0x00AB, 0x00AD, BidiClass::OtherNeutral),
    (0x00AD, 0x00AE, BidiClass::BoundaryNeutral),
    (0x00AE, 0x00B0, BidiClass::OtherNeutral),
    (0x00B0, 0x00B2, BidiClass::EuropeanTerminator),
    (0x00B2, 0x00B4, BidiClass::EuropeanNumber),
    (0x00B4, 0x00B5, BidiClass::OtherNeutral),
    (0x00B5, 0x00B6, BidiClass::LeftToRight),
    (0x00B6, 0x00B9, BidiClass::OtherNeutral),
    (0x00B9, 0x00BA, BidiClass::EuropeanNumber),
    (0x00BA, 0x00BB, BidiClass::LeftToRight),
    (0x00BB, 0x00C0, BidiClass::OtherNeutral),
    (0x00C0, 0x00D7, BidiClass::LeftToRight),
    (0x00D7, 0x00D8, BidiClass::OtherNeutral),
    (0x00D8, 0x00F7, BidiClass::LeftToRight),
    (0x00F7, 0x00F8, BidiClass::OtherNeutral),
    (0x00F8, 0x02B9, BidiClass::LeftToRight),
    (0x02B9, 0x02BB, BidiClass::OtherNeutral),
    (0x02BB, 0x02C2, BidiClass::LeftToRight),
    (0x02C2, 0x02D0, BidiClass::OtherNeutral),
    (0x02D0, 0x02D2, BidiClass::LeftToRight),
    (0x02D2, 0x02E0, BidiClass::OtherNeutral),
    (0x02E0, 0x02E5, BidiClass::LeftToRight),
    (0x02E5, 0x02EE, BidiClass::OtherNeutral),
    (0x02EE, 0x02EF, BidiClass::LeftToRight),
    (0x02EF, 0x0300, BidiClass::OtherNeutral),
    (0x0300, 0x0370, BidiClass::NonspacingMark),
    (0x0370, 0x0374, BidiClass::LeftToRight),
    (0x0374, 0x0376, BidiClass::OtherNeutral),
    (0x0376, 0x0378, BidiClass::LeftToRight),
    (0x037A, 0x037E, BidiClass::LeftToRight),
    (0x037E, 0x037F, BidiClass::OtherNeutral),
    (0x037F, 0x0380, BidiClass::LeftToRight),
    (0x0384, 0x0386, BidiClass::OtherNeutral),
    (0x0386, 0x0387, BidiClass::LeftToRight),
    (0x0387, 0x0388, BidiClass::OtherNeutral),
    (0x0388, 0x038B, BidiClass::LeftToRight),
    (0x038C, 0x038D, BidiClass::LeftToRight),
    (0x038E, 0x03A2, BidiClass::LeftToRight),
    (0x03A3, 0x03F6, BidiClass::LeftToRight),
    (0x03F6, 0x03F7, BidiClass::OtherNeutral),
    (0x03F7, 0x0483, BidiClass::LeftToRight),
    (0x0483, 0x048A, BidiClass::NonspacingMark),
    (0x048A, 0x0530, BidiClass::LeftToRight),
    (0x0531, 0x0557, BidiClass::LeftToRight),
    (0x0559, 0x058A, BidiClass::LeftToRight),
    (0x058A, 0x058B, BidiClass::OtherNeutral),
    (0x058D, 0x058F, BidiClass::OtherNeutral),
    (0x058F, 0x0590, BidiClass::EuropeanTerminator),
    (0x0591, 0x05BE, BidiClass::NonspacingMark),
    (0x05BE, 0x05BF, BidiClass::RightToLeft),
    (0x05BF, 0x05C0, BidiClass::NonspacingMark),
    (0x05C0, 0x05C1, BidiClass::RightToLeft),
    (0x05C1, 0x05C3, BidiClass::NonspacingMark),
    (0x05C3, 0x05C4, BidiClass::RightToLeft),
    (0x05C4, 0x05C6, BidiClass::NonspacingMark),
    (0x05C6, 0x05C7, BidiClass::RightToLeft),
    (0x05C7, 0x05C8, BidiClass::NonspacingMark),
    (0x05D0, 0x05EB, BidiClass::RightToLeft),
    (0x05EF, 0x05F5, BidiClass::RightToLeft),
    (0x0600, 0x0606, BidiClass::ArabicNumber),
    (0x0606, 0x0608, BidiClass::OtherNeutral),
    (0x0608, 0x0609, BidiClass::ArabicLetter),
    (0x0609, 0x060B, BidiClass::EuropeanTerminator),
    (0x060B, 0x060C, BidiClass::ArabicLetter),
    (0x060C, 0x060D, BidiClass::CommonSeparator),
    (0x060D, 0x060E, BidiClass::ArabicLetter),
    (0x060E, 0x0610, BidiClass::OtherNeutral),
    (0x0610, 0x061B, BidiClass::NonspacingMark),
    (0x061B, 0x064B, BidiClass::ArabicLetter),
    (0x064B, 0x0660, BidiClass::NonspacingMark),
    (0x0660, 0x066A, BidiClass::ArabicNumber),
    (0x066A, 0x066B, BidiClass::EuropeanTerminator),
    (0x066B, 0x066D, BidiClass::ArabicNumber),
    (0x066D, 0x0670, BidiClass::ArabicLetter),
    (0x0670, 0x0671, BidiClass::NonspacingMark),
    (0x0671, 0x06D6, BidiClass::ArabicLetter),
    (0x06D6, 0x06DD, BidiClass::NonspacingMark),
    (0x06DD, 0x06DE, BidiClass::ArabicNumber),
    (0x06DE, 0x06DF, BidiClass::OtherNeutral),
    (0x06DF, 0x06E5, BidiClass::NonspacingMark),
    (0x06E5, 0x06E7, BidiClass::ArabicLetter),
    (0x06E7, 0x06E9, BidiClass::NonspacingMark),
    (0x06E9, 0x06EA, BidiClass::OtherNeutral),
    (0x06EA, 0x06EE, BidiClass::NonspacingMark),
    (0x06EE, 0x06F0, BidiClass::ArabicLetter),
    (0x06F0, 0x06FA, BidiClass::EuropeanNumber),
    (0x06FA, 0x070E, BidiClass::ArabicLetter),
    (0x070F, 0x0711, BidiClass::ArabicLetter),
    (0x0711, 0x0712, BidiClass::NonspacingMark),
    (0x0712, 0x0730, BidiClass::ArabicLetter),
    (0x0730, 0x074B, BidiClass::NonspacingMark),
    (0x074D, 0x07A6, BidiClass::ArabicLetter),
    (0x07A6, 0x07B1, BidiClass::NonspacingMark),
    (0x07B1, 0x07B2, BidiClass::ArabicLetter),
    (0x07C0, 0x07EB, BidiClass::RightToLeft),
    (0x07EB, 0x07F4, BidiClass::NonspacingMark),
    (0x07F4, 0x07F6, BidiClass::RightToLeft),
    (0x07F6, 0x07FA, BidiClass::OtherNeutral),
    (0x07FA, 0x07FB, BidiClass::RightToLeft),
    (0x07FD, 0x07FE, BidiClass::NonspacingMark),
    (0x07FE, 0x0816, BidiClass::RightToLeft),
    (0x0816, 0x081A, BidiClass::NonspacingMark),
    (0x081A, 0x081B, BidiClass::RightToLeft),
    (0x081B, 0x0824, BidiClass::NonspacingMark),
    (0x0824, 0x0825, BidiClass::RightToLeft),
    (0x0825, 0x0828, BidiClass::NonspacingMark),
    (0x0828, 0x0829, BidiClass::RightToLeft),
    (0x0829, 0x082E, BidiClass::NonspacingMark),
    (0x0830, 0x083F, BidiClass::RightToLeft),
    (0x0840, 0x0859, BidiClass::RightToLeft),
    (0x0859, 0x085C, BidiClass::NonspacingMark),
    (0x085E, 0x085F, BidiClass::RightToLeft),
    (0x0860, 0x086B, BidiClass::ArabicLetter),
    (0x0870, 0x088F, BidiClass::ArabicLetter),
    (0x0890, 0x0892, BidiClass::ArabicNumber),
    (0x0898, 0x08A0, BidiClass::NonspacingMark),
    (0x08A0, 0x08CA, BidiClass::ArabicLetter),
    (0x08CA, 0x08E2, BidiClass::NonspacingMark),
    (0x08E2, 0x08E3, BidiClass::ArabicNumber),
    (0x08E3, 0x0903, BidiClass::NonspacingMark),
    (0x0903, 0x093A, BidiClass::LeftToRight),
    (0x093A, 0x093B, BidiClass::NonspacingMark),
    (0x093B, 0x093C, BidiClass::LeftToRight),
    (0x093C, 0x093D, BidiClass::NonspacingMark),
    (0x093D, 0x0941, BidiClass::LeftToRight),
    (0x0941, 0x0949, BidiClass::NonspacingMark),
    (0x0949, 0x094D, BidiClass::LeftToRight),
    (0x094D, 0x094E, BidiClass::NonspacingMark),
    (0x094E, 0x0951, BidiClass::LeftToRight),
    (0x0951, 0x0958, BidiClass::NonspacingMark),
    (0x0958, 0x0962, BidiClass::LeftToRight),
    (0x0962, 0x0964, BidiClass::NonspacingMark),
    (0x0964, 0x0981, BidiClass::LeftToRight),
    (0x0981, 0x0982, BidiClass::NonspacingMark),
    (0x0982, 0x0984, BidiClass::LeftToRight),
    (0x0985, 0x098D, BidiClass::LeftToRight),
    (0x098F, 0x0991, BidiClass::LeftToRight),
    (0x0993, 0x09A9, BidiClass::LeftToRight),
    (0x09AA, 0x09B1, BidiClass::LeftToRight),
    (0x09B2, 0x09B3, BidiClass::LeftToRight),
    (0x09B6, 0x09BA, BidiClass::LeftToRight),
    (0x09BC, 0x09BD, BidiClass::NonspacingMark),
    (0x09BD, 0x09C1, BidiClass::LeftToRight),
    (0x09C1, 0x09C5, BidiClass::NonspacingMark),
    (0x09C7, 0x09C9, BidiClass::LeftToRight),
    (0x09CB, 0x09CD, BidiClass::LeftToRight),
    (0x09CD, 0x09CE, BidiClass::NonspacingMark),
    (0x09CE, 0x09CF, BidiClass::LeftToRight),
    (0x09D7, 0x09D8, BidiClass::LeftToRight),
    (0x09DC, 0x09DE, BidiClass::LeftToRight),
    (0x09DF, 0x09E2, BidiClass::LeftToRight),
    (0x09E2, 0x09E4, BidiClass::NonspacingMark),
    (0x09E6, 0x09F2, BidiClass::LeftToRight),
    (0x09F2, 0x09F4, BidiClass::EuropeanTerminator),
    (0x09F4, 0x09FB, BidiClass::LeftToRight),
    (0x09FB, 0x09FC, BidiClass::EuropeanTerminator),
    (0x09FC, 0x09FE, BidiClass::LeftToRight),
    (0x09FE, 0x09FF, BidiClass::NonspacingMark),
    (0x0A01, 0x0A03, BidiClass::NonspacingMark),
    (0x0A03, 0x0A04, BidiClass::LeftToRight),
    (0x0A05, 0x0A0B, BidiClass::LeftToRight),
    (0x0A0F, 0x0A11, BidiClass::LeftToRight),
    (0x0A13, 0x0A29, BidiClass::LeftToRight),
    (0x0A2A, 0x0A31, BidiClass::LeftToRight),
    (0x0A32, 0x0A34, BidiClass::LeftToRight),
    (0x0A35, 0x0A37, BidiClass::LeftToRight),
    (0x0A38, 0x0A3A, BidiClass::LeftToRight),
    (0x0A3C, 0x0A3D, BidiClass::NonspacingMark),
    (0x0A3E, 0x0A41, BidiClass::LeftToRight),
    (0x0A41, 0x0A43, BidiClass::NonspacingMark),
    (0x0A47, 0x0A49, BidiClass::NonspacingMark),
    (0x0A4B, 0x0A4E, BidiClass::NonspacingMark),
    (0x0A51, 0x0A52, BidiClass::NonspacingMark),
    (0x0A59, 0x0A5D, BidiClass::LeftToRight),
    (0x0A5E, 0x0A5F, BidiClass::LeftToRight),
    (0x0A66, 0x0A70, BidiClass::LeftToRight),
    (0x0A70, 0x0A72, BidiClass::NonspacingMark),
    (0x0A72, 0x0A75, BidiClass::LeftToRight),
    (0x0A75, 0x0A76, BidiClass::NonspacingMark),
    (0x0A76, 0x0A77, BidiClass::LeftToRight),
    (0x0A81, 0x0A83, BidiClass::NonspacingMark),
    (0x0A83, 0x0A84, BidiClass::LeftToRight),
    (0x0A85, 0x0A8E, BidiClass::LeftToRight),
    (0x0A8F, 0x0A92, BidiClass::LeftToRight),
    (0x0A93, 0x0AA9, BidiClass::LeftToRight),
    (0x0AAA, 0x0AB1, BidiClass::LeftToRight),
    (0x0AB2, 0x0AB4, BidiClass::LeftToRight),
    (0x0AB5, 0x0ABA, BidiClass::LeftToRight),
    (0x0ABC, 0x0ABD, BidiClass::NonspacingMark),
    (0x0ABD, 0x0AC1, BidiClass::LeftToRight),
    (0x0AC1, 0x0AC6, BidiClass::NonspacingMark),
    (0x0AC7, 0x0AC9, BidiClass::NonspacingMark),
    (0x0AC9, 0x0ACA, BidiClass::LeftToRight),
    (0x0ACB, 0x0ACD, BidiClass::LeftToRight),
    (0x0ACD, 0x0ACE, BidiClass::NonspacingMark),
    (0x0AD0, 0x0AD1, BidiClass::LeftToRight),
    (0x0AE0, 0x0AE2, BidiClass::LeftToRight),
    (0x0AE2, 0x0AE4, BidiClass::NonspacingMark),
    (0x0AE6, 0x0AF1, BidiClass::LeftToRight),
    (0x0AF1, 0x0AF2, BidiClass::EuropeanTerminator),
    (0x0AF9, 0x0AFA, BidiClass::LeftToRight),
    (0x0AFA, 0x0B00, BidiClass::NonspacingMark),
    (0x0B01, 0x0B02, BidiClass::NonspacingMark),
    (0x0B02, 0x0B04, BidiClass::LeftToRight),
    (0x0B05, 0x0B0D, BidiClass::LeftToRight),
    (0x0B0F, 0x0B11, BidiClass::LeftToRight),
    (0x0B13, 0x0B29, BidiClass::LeftToRight),
    (0x0B2A, 0x0B31, BidiClass::LeftToRight),
    (0x0B32, 0x0B34, BidiClass::LeftToRight),
    (0x0B35, 0x0B3A, BidiClass::LeftToRight),
    (0x0B3C, 0x0B3D, BidiClass::NonspacingMark),
    (0x0B3D, 0x0B3F, BidiClass::LeftToRight),
    (0x0B3F, 0x0B40, BidiClass::NonspacingMark),
    (0x0B40, 0x0B41, BidiClass::LeftToRight),
    (0x0B41, 0x0B45, BidiClass::NonspacingMark),
    (0x0B47, 0x0B49, BidiClass::LeftToRight),
    (0x0B4B, 0x0B4D, BidiClass::LeftToRight),
    (0x0B4D, 0x0B4E, BidiClass::NonspacingMark),
    (0x0B55, 0x0B57, BidiClass::NonspacingMark),
    (0x0B57, 0x0B58, BidiClass::LeftToRight),
    (0x0B5C, 0x0B5E, BidiClass::LeftToRight),
    (0x0B5F, 0x0B62, BidiClass::LeftToRight),
    (0x0B62, 0x0B64, BidiClass::NonspacingMark),
    (0x0B66, 0x0B78, BidiClass::LeftToRight),
    (0x0B82, 0x0B83, BidiClass::NonspacingMark),
    (0x0B83, 0x0B84, BidiClass::LeftToRight),
    (0x0B85, 0x0B8B, BidiClass::LeftToRight),
    (0x0B8E, 0x0B91, BidiClass::LeftToRight),
    (0x0B92, 0x0B96, BidiClass::LeftToRight),
    (0x0B99, 0x0B9B, BidiClass::LeftToRight),
    (0x0B9C, 0x0B9D, BidiClass::LeftToRight),
    (0x0B9E, 0x0BA0, BidiClass::LeftToRight),
    (0x0BA3, 0x0BA5, BidiClass::LeftToRight),
    (0x0BA8, 0x0BAB, BidiClass::LeftToRight),
    (0x0BAE, 0x0BBA, BidiClass::LeftToRight),
    (0x0BBE, 0x0BC0, BidiClass::LeftToRight),
    (0x0BC0, 0x0BC1, BidiClass::NonspacingMark),
    (0x0BC1, 0x0BC3, BidiClass::LeftToRight),
    (0x0BC6, 0x0BC9, BidiClass::LeftToRight),
    (0x0BCA, 0x0BCD, BidiClass::LeftToRight),
    (0x0BCD, 0x0BCE, BidiClass::NonspacingMark),
    (0x0BD0, 0x0BD1, BidiClass::LeftToRight),
    (0x0BD7, 0x0BD8, BidiClass::LeftToRight),
    (0x0BE6, 0x0BF3, BidiClass::LeftToRight),
    (0x0BF3, 0x0BF9, BidiClass::OtherNeutral),
    (0x0BF9, 0x0BFA, BidiClass::EuropeanTerminator),
    (0x0BFA, 0x0BFB, BidiClass::OtherNeutral),
    (0x0C00, 0x0C01, BidiClass::NonspacingMark),
    (0x0C01, 0x0C04, BidiClass::LeftToRight),
    (0x0C04, 0x0C05, BidiClass::NonspacingMark),
    (0x0C05, 0x0C0D, BidiClass::LeftToRight),
    (0x0C0E, 0x0C11, BidiClass::LeftToRight),
    (0x0C12, 0x0C29, BidiClass::LeftToRight),
    (0x0C2A, 0x0C3A, BidiClass::LeftToRight),
    (0x0C3C, 0x0C3D, BidiClass::NonspacingMark),
    (0x0C3D, 0x0C3E, BidiClass::LeftToRight),
    (0x0C3E, 0x0C41, BidiClass::NonspacingMark),
    (0x0C41, 0x0C45, BidiClass::LeftToRight),
    (0x0C46, 0x0C49, BidiClass::NonspacingMark),
    (0x0C4A, 0x0C4E, BidiClass::NonspacingMark),
    (0x0C55, 0x0C57, BidiClass::NonspacingMark),
    (0x0C58, 0x0C5B, BidiClass::LeftToRight),
    (0x0C5D, 0x0C5E, BidiClass::LeftToRight),
    (0x0C60, 0x0C62, BidiClass::LeftToRight),
    (0x0C62, 0x0C64, BidiClass::NonspacingMark),
    (0x0C66, 0x0C70, BidiClass::LeftToRight),
    (0x0C77, 0x0C78, BidiClass::LeftToRight),
    (0x0C78, 0x0C7F, BidiClass::OtherNeutral),
    (0x0C7F, 0x0C81, BidiClass::LeftToRight),
    (0x0C81, 0x0C82, BidiClass::NonspacingMark),
    (0x0C82, 0x0C8D, BidiClass::LeftToRight),
    (0x0C8E, 0x0C91, BidiClass::LeftToRight),
    (0x0C92, 0x0CA9, BidiClass::LeftToRight),
    (0x0CAA, 0x0CB4, BidiClass::LeftToRight),
    (0x0CB5, 0x0CBA, BidiClass::LeftToRight),
    (0x0CBC, 0x0CBD, BidiClass::NonspacingMark),
    (0x0CBD, 0x0CC5, BidiClass::LeftToRight),
    (0x0CC6, 0x0CC9, BidiClass::LeftToRight),
    (0x0CCA, 0x0CCC, BidiClass::LeftToRight),
    (0x0CCC, 0x0CCE, BidiClass::NonspacingMark),
    (0x0CD5, 0x0CD7, BidiClass::LeftToRight),
    (0x0CDD, 0x0CDF, BidiClass::LeftToRight),
    (0x0CE0, 0x0CE2, BidiClass::LeftToRight),
    (0x0CE2, 0x0CE4, BidiClass::NonspacingMark),
    (0x0CE6, 0x0CF0, BidiClass::LeftToRight),
    (0x0CF1, 0x0CF3, BidiClass::LeftToRight),
    (0x0D00, 0x0D02, BidiClass::NonspacingMark),
    (0x0D02, 0x0D0D, BidiClass::LeftToRight),
    (0x0D0E, 0x0D11, BidiClass::LeftToRight),
    (0x0D12, 0x0D3B, BidiClass::LeftToRight),
    (0x0D3B, 0x0D3D, BidiClass::NonspacingMark),
    (0x0D3D, 0x0D41, BidiClass::LeftToRight),
    (0x0D41, 0x0D45, BidiClass::NonspacingMark),
    (0x0D46, 0x0D49, BidiClass::LeftToRight),
    (0x0D4A, 0x0D4D, BidiClass::LeftToRight),
    (0x0D4D, 0x0D4E, BidiClass::NonspacingMark),
    (0x0D4E, 0x0D50, BidiClass::LeftToRight),
    (0x0D54, 0x0D62, BidiClass::LeftToRight),
    (0x0D62, 0x0D64, BidiClass::NonspacingMark),
    (0x0D66, 0x0D80, BidiClass::LeftToRight),
    (0x0D81, 0x0D82, BidiClass::NonspacingMark),
    (0x0D82, 0x0D84, BidiClass::LeftToRight),
    (0x0D85, 0x0D97, BidiClass::LeftToRight),
    (0x0D9A, 0x0DB2, BidiClass::LeftToRight),
    (0x0DB3, 0x0DBC, BidiClass::LeftToRight),
    (0x0DBD, 0x0DBE, BidiClass::LeftToRight),
    (0x0DC0, 0x0DC7, BidiClass::LeftToRight),
    (0x0DCA, 0x0DCB, BidiClass::NonspacingMark),
    (0x0DCF, 0x0DD2, BidiClass::LeftToRight),
    (0x0DD2, 0x0DD5, BidiClass::NonspacingMark),
    (0x0DD6, 0x0DD7, BidiClass::NonspacingMark),
    (0x0DD8, 0x0DE0, BidiClass::LeftToRight),
    (0x0DE6, 0x0DF0, BidiClass::LeftToRight),
    (0x0DF2, 0x0DF5, BidiClass::LeftToRight),
    (0x0E01, 0x0E31, BidiClass::LeftToRight),
    (0x0E31, 0x0E32, BidiClass::NonspacingMark),
    (0x0E32, 0x0E34, BidiClass::LeftToRight),
    (0x0E34, 0x0E3B, BidiClass::NonspacingMark),
    (0x0E3F, 0x0E40, BidiClass::EuropeanTerminator),
    (0x0E40, 0x0E47, BidiClass::LeftToRight),
    (0x0E47, 0x0E4F, BidiClass::NonspacingMark),
    (0x0E4F, 0x0E5C, BidiClass::LeftToRight),
    (0x0E81, 0x0E83, BidiClass::LeftToRight),
    (0x0E84, 0x0E85, BidiClass::LeftToRight),
    (0x0E86, 0x0E8B, BidiClass::LeftToRight),
    (0x0E8C, 0x0EA4, BidiClass::LeftToRight),
    (0x0EA5, 0x0EA6, BidiClass::LeftToRight),
    (0x0EA7, 0x0EB1, BidiClass::LeftToRight),
    (0x0EB1, 0x0EB2, BidiClass::NonspacingMark),
    (0x0EB2, 0x0EB4, BidiClass::LeftToRight),
    (0x0EB4, 0x0EBD, BidiClass::NonspacingMark),
    (0x0EBD, 0x0EBE, BidiClass::LeftToRight),
    (0x0EC0, 0x0EC5, BidiClass::LeftToRight),
    (0x0EC6, 0x0EC7, BidiClass::LeftToRight),
    (0x0EC8, 0x0ECE, BidiClass::NonspacingMark),
    (0x0ED0, 0x0EDA, BidiClass::LeftToRight),
    (0x0EDC, 0x0EE0, BidiClass::LeftToRight),
    (0x0F00, 0x0F18, BidiClass::LeftToRight),
    (0x0F18, 0x0F1A, BidiClass::NonspacingMark),
    (0x0F1A, 0x0F35, BidiClass::LeftToRight),
    (0x0F35, 0x0F36, BidiClass::NonspacingMark),
    (0x0F36, 0x0F37, BidiClass::LeftToRight),
    (0x0F37, 0x0F38, BidiClass::NonspacingMark),
    (0x0F38, 0x0F39, BidiClass::LeftToRight),
    (0x0F39, 0x0F3A, BidiClass::NonspacingMark),
    (0x0F3A, 0x0F3E, BidiClass::OtherNeutral),
    (0x0F3E, 0x0F48, BidiClass::LeftToRight),
    (0x0F49, 0x0F6D, BidiClass::LeftToRight),
    (0x0F71, 0x0F7F, BidiClass::NonspacingMark),
    (0x0F7F, 0x0F80, BidiClass::LeftToRight),
    (0x0F80, 0x0F85, BidiClass::NonspacingMark),
    (0x0F85, 0x0F86, BidiClass::LeftToRight),
    (0x0F86, 0x0F88, BidiClass::NonspacingMark),
    (0x0F88, 0x0F8D, BidiClass::LeftToRight),
    (0x0F8D, 0x0F98, BidiClass::NonspacingMark),
    (0x0F99, 0x0FBD, BidiClass::NonspacingMark),
    (0x0FBE, 0x0FC6, BidiClass::LeftToRight),
    (0x0FC6, 0x0FC7, BidiClass::NonspacingMark),
    (0x0FC7, 0x0FCD, BidiClass::LeftToRight),
    (0x0FCE, 0x0FDB, BidiClass::LeftToRight),
    (0x1000, 0x102D, BidiClass::LeftToRight),
    (0x102D, 0x1031, BidiClass::NonspacingMark),
    (0x1031, 0x1032, BidiClass::LeftToRight),
    (0x1032, 0x1038, BidiClass::NonspacingMark),
    (0x1038, 0x1039, BidiClass::LeftToRight),
    (0x1039, 0x103B, BidiClass::NonspacingMark),
    (0x103B, 0x103D, BidiClass::LeftToRight),
    (0x103D, 0x103F, BidiClass::NonspacingMark),
    (0x103F, 0x1058, BidiClass::LeftToRight),
    (0x1058, 0x105A, BidiClass::NonspacingMark),
    (0x105A, 0x105E, BidiClass::LeftToRight),
    (0x105E, 0x1061, BidiClass::NonspacingMark),
    (0x1061, 0x1071, BidiClass::LeftToRight),
    (0x1071, 0x1075, BidiClass::NonspacingMark),
    (0x1075, 0x1082, BidiClass::LeftToRight),
    (0x1082, 0x1083, BidiClass::NonspacingMark),
    (0x1083, 0x1085, BidiClass::LeftToRight),
    (0x1085, 0x1087, BidiClass::NonspacingMark),
    (0x1087, 0x108D, BidiClass::LeftToRight),
    (0x108D, 0x108E, BidiClass::NonspacingMark),
    (0x108E, 0x109D, BidiClass::LeftToRight),
    (0x109D, 0x109E, BidiClass::NonspacingMark),
    (0x109E, 0x10C6, BidiClass::LeftToRight),
    (0x10C7, 0x10C8, BidiClass::LeftToRight),
    (0x10CD, 0x10CE, BidiClass::LeftToRight),
    (0x10D0, 0x1249, BidiClass::LeftToRight),
    (0x124A, 0x124E, BidiClass::LeftToRight),
    (0x1250, 0x1257, BidiClass::LeftToRight),
    (0x1258, 0x1259, BidiClass::LeftToRight),
    (0x125A, 0x125E, BidiClass::LeftToRight),
    (0x1260, 0x1289, BidiClass::LeftToRight),
    (0x128A, 0x128E, BidiClass::LeftToRight),
    (0x1290, 0x12B1, BidiClass::LeftToRight),
    (0x12B2, 0x12B6, BidiClass::LeftToRight),
    (0x12B8, 0x12BF, BidiClass::LeftToRight),
    (0x12C0, 0x12C1, BidiClass::LeftToRight),
    (0x12C2, 0x12C6, BidiClass::LeftToRight),
    (0x12C8, 0x12D7, BidiClass::LeftToRight),
    (0x12D8, 0x1311, BidiClass::LeftToRight),
    (0x1312, 0x1316, BidiClass::LeftToRight),
    (0x1318, 0x135B, BidiClass::LeftToRight),
    (0x135D, 0x1360, BidiClass::NonspacingMark),
    (0x1360, 0x137D, BidiClass::LeftToRight),
    (0x1380, 0x1390, BidiClass::LeftToRight),
    (0x1390, 0x139A, BidiClass::OtherNeutral),
    (0x13A0, 0x13F6, BidiClass::LeftToRight),
    (0x13F8, 0x13FE, BidiClass::LeftToRight),
    (0x1400, 0x1401, BidiClass::OtherNeutral),
    (0x1401, 0x1680, BidiClass::LeftToRight),
    (0x1681, 0x169B, BidiClass::LeftToRight),
    (0x169B, 0x169D, BidiClass::OtherNeutral),
    (0x16A0, 0x16F9, BidiClass::LeftToRight),
    (0x1700, 0x1712, BidiClass::LeftToRight),
    (0x1712, 0x1715, BidiClass::NonspacingMark),
    (0x1715, 0x1716, BidiClass::LeftToRight),
    (0x171F, 0x1732, BidiClass::LeftToRight),
    (0x1732, 0x1734, BidiClass::NonspacingMark),
    (0x1734, 0x1737, BidiClass::LeftToRight),
    (0x1740, 0x1752, BidiClass::LeftToRight),
    (0x1752, 0x1754, BidiClass::NonspacingMark),
    (0x1760, 0x176D, BidiClass::LeftToRight),
    (0x176E, 0x1771, BidiClass::LeftToRight),
    (0x1772, 0x1774, BidiClass::NonspacingMark),
    (0x1780, 0x17B4, BidiClass::LeftToRight),
    (0x17B4, 0x17B6, BidiClass::NonspacingMark),
    (0x17B6, 0x17B7, BidiClass::LeftToRight),
    (0x17B7, 0x17BE, BidiClass::NonspacingMark),
    (0x17BE, 0x17C6, BidiClass::LeftToRight),
    (0x17C6, 0x17C7, BidiClass::NonspacingMark),
    (0x17C7, 0x17C9, BidiClass::LeftToRight),
    (0x17C9, 0x17D4, BidiClass::NonspacingMark),
    (0x17D4, 0x17DB, BidiClass::LeftToRight),
    (0x17DB, 0x17DC, BidiClass::EuropeanTerminator),
    (0x17DC, 0x17DD, BidiClass::LeftToRight),
    (0x17DD, 0x17DE, BidiClass::NonspacingMark),
    (0x17E0, 0x17EA, BidiClass::LeftToRight),
    (0x17F0, 0x17FA, BidiClass::OtherNeutral),
    (0x1800, 0x180B, BidiClass::OtherNeutral),
    (0x180B, 0x180E, BidiClass::NonspacingMark),
    (0x180E, 0x180F, BidiClass::BoundaryNeutral),
    (0x180F, 0x1810, BidiClass::NonspacingMark),
    (0x1810, 0x181A, BidiClass::LeftToRight),
    (0x1820, 0x1879, BidiClass::LeftToRight),
    (0x1880, 0x1885, BidiClass::LeftToRight),
    (0x1885, 0x1887, BidiClass::NonspacingMark),
    (0x1887, 0x18A9, BidiClass::LeftToRight),
    (0x18A9, 0x18AA, BidiClass::NonspacingMark),
    (0x18AA, 0x18AB, BidiClass::LeftToRight),
    (0x18B0, 0x18F6, BidiClass::LeftToRight),
    (0x1900, 0x191F, BidiClass::LeftToRight),
    (0x1920, 0x1923, BidiClass::NonspacingMark),
    (0x1923, 0x1927, BidiClass::LeftToRight),
    (0x1927, 0x1929, BidiClass::NonspacingMark),
    (0x1929, 0x192C, BidiClass::LeftToRight),
    (0x1930, 0x1932, BidiClass::LeftToRight),
    (0x1932, 0x1933, BidiClass::NonspacingMark),
    (0x1933, 0x1939, BidiClass::LeftToRight),
    (0x1939, 0x193C, BidiClass::NonspacingMark),
    (0x1940, 0x1941, BidiClass::OtherNeutral),
    (0x1944, 0x1946, BidiClass::OtherNeutral),
    (0x1946, 0x196E, BidiClass::LeftToRight),
    (0x1970, 0x1975, BidiClass::LeftToRight),
    (0x1980, 0x19AC, BidiClass::LeftToRight),
    (0x19B0, 0x19CA, BidiClass::LeftToRight),
    (0x19D0, 0x19DB, BidiClass::LeftToRight),
    (0x19DE, 0x1A00, BidiClass::OtherNeutral),
    (0x1A00, 0x1A17, BidiClass::LeftToRight),
    (0x1A17, 0x1A19, BidiClass::NonspacingMark),
    (0x1A19, 0x1A1B, BidiClass::LeftToRight),
    (0x1A1B, 0x1A1C, BidiClass::NonspacingMark),
    (0x1A1E, 0x1A56, BidiClass::LeftToRight),
    (0x1A56, 0x1A57, BidiClass::NonspacingMark),
    (0x1A57, 0x1A58, BidiClass::LeftToRight),
    (0x1A58, 0x1A5F, BidiClass::NonspacingMark),
    (0x1A60, 0x1A61, BidiClass::NonspacingMark),
    (0x1A61, 0x1A62, BidiClass::LeftToRight),
    (0x1A62, 0x1A63, BidiClass::NonspacingMark),
    (0x1A63, 0x1A65, BidiClass::LeftToRight),
    (0x1A65, 0x1A6D, BidiClass::NonspacingMark),
    (0x1A6D, 0x1A73, BidiClass::LeftToRight),
    (0x1A73, 0x1A7D, BidiClass::NonspacingMark),
    (0x1A7F, 0x1A80, BidiClass::NonspacingMark),
    (0x1A80, 0x1A8A, BidiClass::LeftToRight),
    (0x1A90, 0x1A9A, BidiClass::LeftToRight),
    (0x1AA0, 0x1AAE, BidiClass::LeftToRight),
    (0x1AB0, 0x1ACF, BidiClass::NonspacingMark),
    (0x1B00, 0x1B04, BidiClass::NonspacingMark),
    (0x1B04, 0x1B34, BidiClass::LeftToRight),
    (0x1B34, 0x1B35, BidiClass::NonspacingMark),
    (0x1B35, 0x1B36, BidiClass::LeftToRight),
    (0x1B36, 0x1B3B, BidiClass::NonspacingMark),
    (0x1B3B, 0x1B3C, BidiClass::LeftToRight),
    (0x1B3C, 0x1B3D, BidiClass::NonspacingMark),
    (0x1B3D, 0x1B42, BidiClass::LeftToRight),
    (0x1B42, 0x1B43, BidiClass::NonspacingMark),
    (0x1B43, 0x1B4D, BidiClass::LeftToRight),
    (0x1B50, 0x1B6B, BidiClass::LeftToRight),
    (0x1B6B, 0x1B74, BidiClass::NonspacingMark),
    (0x1B74, 0x1B7F, BidiClass::LeftToRight),
    (0x1B80, 0x1B82, BidiClass::NonspacingMark),
    (0x1B82, 0x1BA2, BidiClass::LeftToRight),
    (0x1BA2, 0x1BA6, BidiClass::NonspacingMark),
    (0x1BA6, 0x1BA8, BidiClass::LeftToRight),
    (0x1BA8, 0x1BAA, BidiClass::NonspacingMark),
    (0x1BAA, 0x1BAB, BidiClass::LeftToRight),
    (0x1BAB, 0x1BAE, BidiClass::NonspacingMark),
    (0x1BAE, 0x1BE6, BidiClass::LeftToRight),
    (0x1BE6, 0x1BE7, BidiClass::NonspacingMark),
    (0x1BE7, 0x1BE8, BidiClass::LeftToRight),
    (0x1BE8, 0x1BEA, BidiClass::NonspacingMark),
    (0x1BEA, 0x1BED, BidiClass::LeftToRight),
    (0x1BED, 0x1BEE, BidiClass::NonspacingMark),
    (0x1BEE, 0x1BEF, BidiClass::LeftToRight),
    (0x1BEF, 0x1BF2, BidiClass::NonspacingMark),
    (0x1BF2, 0x1BF4, BidiClass::LeftToRight),
    (0x1BFC, 0x1C2C, BidiClass::LeftToRight),
    (0x1C2C, 0x1C34, BidiClass::NonspacingMark),
    (0x1C34, 0x1C36, BidiClass::LeftToRight),
    (0x1C36, 0x1C38, BidiClass::NonspacingMark),
    (0x1C3B, 0x1C4A, BidiClass::LeftToRight),
    (0x1C4D, 0x1C89, BidiClass::LeftToRight),
    (0x1C90, 0x1CBB, BidiClass::LeftToRight),
    (0x1CBD, 0x1CC8, BidiClass::LeftToRight),
    (0x1CD0, 0x1CD3, BidiClass::NonspacingMark),
    (0x1CD3, 0x1CD4, BidiClass::LeftToRight),
    (0x1CD4, 0x1CE1, BidiClass::NonspacingMark),
    (0x1CE1, 0x1CE2, BidiClass::LeftToRight),
    (0x1CE2, 0x1CE9, BidiClass::NonspacingMark),
    (0x1CE9, 0x1CED, BidiClass::LeftToRight),
    (0x1CED, 0x1CEE, BidiClass::NonspacingMark),
    (0x1CEE, 0x1CF4, BidiClass::LeftToRight),
    (0x1CF4, 0x1CF5, BidiClass::NonspacingMark),
    (0x1CF5, 0x1CF8, BidiClass::LeftToRight),
    (0x1CF8, 0x1CFA, BidiClass::NonspacingMark),
    (0x1CFA, 0x1CFB, BidiClass::LeftToRight),
    (0x1D00, 0x1DC0, BidiClass::LeftToRight),
    (0x1DC0, 0x1E00, BidiClass::NonspacingMark),
    (0x1E00, 0x1F16, BidiClass::LeftToRight),
    (0x1F18, 0x1F1E, BidiClass::LeftToRight),
    (0x1F20, 0x1F46, BidiClass::LeftToRight),
    (0x1F48, 0x1F4E, BidiClass::LeftToRight),
    (0x1F50, 0x1F58, BidiClass::LeftToRight),
    (0x1F59, 0x1F5A, BidiClass::LeftToRight),
    (0x1F5B, 0x1F5C, BidiClass::LeftToRight),
    (0x1F5D, 0x1F5E, BidiClass::LeftToRight),
    (0x1F5F, 0x1F7E, BidiClass::LeftToRight),
    (0x1F80, 0x1FB5, BidiClass::LeftToRight),
    (0x1FB6, 0x1FBD, BidiClass::LeftToRight),
    (0x1FBD, 0x1FBE, BidiClass::OtherNeutral),
    (0x1FBE, 0x1FBF, BidiClass::LeftToRight),
    (0x1FBF, 0x1FC2, BidiClass::OtherNeutral),
    (0x1FC2, 0x1FC5, BidiClass::LeftToRight),
    (0x1FC6, 0x1FCD, BidiClass::LeftToRight),
    (0x1FCD, 0x1FD0, BidiClass::OtherNeutral),
    (0x1FD0, 0x1FD4, BidiClass::LeftToRight),
    (0x1FD6, 0x1FDC, BidiClass::LeftToRight),
    (0x1FDD, 0x1FE0, BidiClass::OtherNeutral),
    (0x1FE0, 0x1FED, BidiClass::LeftToRight),
    (0x1FED, 0x1FF0, BidiClass::OtherNeutral),
    (0x1FF2, 0x1FF5, BidiClass::LeftToRight),
    (0x1FF6, 0x1FFD, BidiClass::LeftToRight),
    (0x1FFD, 0x1FFF, BidiClass::OtherNeutral),
    (0x200B, 0x200E, BidiClass::BoundaryNeutral),
    (0x200E, 0x200F, BidiClass::LeftToRight),
    (0x200F, 0x2010, BidiClass::RightToLeft),
    (0x2010, 0x2028, BidiClass::OtherNeutral),
    (0x202F, 0x2030, BidiClass::CommonSeparator),
    (0x2030, 0x2035, BidiClass::EuropeanTerminator),
    (0x2035, 0x2044, BidiClass::OtherNeutral),
    (0x2044, 0x2045, BidiClass::CommonSeparator),
    (0x2045, 0x205F, BidiClass::OtherNeutral),
    (0x2060, 0x2065, BidiClass::BoundaryNeutral),
    (0x206A, 0x2070, BidiClass::BoundaryNeutral),
    (0x2070, 0x2071, BidiClass::EuropeanNumber),
    (0x2071, 0x2072, BidiClass::LeftToRight),
    (0x2074, 0x207A, BidiClass::EuropeanNumber),
    (0x207A, 0x207C, BidiClass::EuropeanSeparator),
    (0x207C, 0x207F, BidiClass::OtherNeutral),
    (0x207F, 0x2080, BidiClass::LeftToRight),
    (0x2080, 0x208A, BidiClass::EuropeanNumber),
    (0x208A, 0x208C, BidiClass::EuropeanSeparator),
    (0x208C, 0x208F, BidiClass::OtherNeutral),
    (0x2090, 0x209D, BidiClass::LeftToRight),
    (0x20A0, 0x20C1, BidiClass::EuropeanTerminator),
    (0x20D0, 0x20F1, BidiClass::NonspacingMark),
    (0x2100, 0x2102, BidiClass::OtherNeutral),
    (0x2102, 0x2103, BidiClass::LeftToRight),
    (0x2103, 0x2107, BidiClass::OtherNeutral),
    (0x2107, 0x2108, BidiClass::LeftToRight),
    (0x2108, 0x210A, BidiClass::OtherNeutral),
    (0x210A, 0x2114, BidiClass::LeftToRight),
    (0x2114, 0x2115, BidiClass::OtherNeutral),
    (0x2115, 0x2116, BidiClass::LeftToRight),
    (0x2116, 0x2119, BidiClass::OtherNeutral),
    (0x2119, 0x211E, BidiClass::LeftToRight),
    (0x211E, 0x2124, BidiClass::OtherNeutral),
    (0x2124, 0x2125, BidiClass::LeftToRight),
    (0x2125, 0x2126, BidiClass::OtherNeutral),
    (0x2126, 0x2127, BidiClass::LeftToRight),
    (0x2127, 0x2128, BidiClass::OtherNeutral),
    (0x2128, 0x2129, BidiClass::LeftToRight),
    (0x2129, 0x212A, BidiClass::OtherNeutral),
    (0x212A, 0x212E, BidiClass::LeftToRight),
    (0x212E, 0x212F, BidiClass::EuropeanTerminator),
    (0x212F, 0x213A, BidiClass::LeftToRight),
    (0x213A, 0x213C, BidiClass::OtherNeutral),
    (0x213C, 0x2140, BidiClass::LeftToRight),
    (0x2140, 0x2145, BidiClass::OtherNeutral),
    (0x2145, 0x214A, BidiClass::LeftToRight),
    (0x214A, 0x214E, BidiClass::OtherNeutral),
    (0x214E, 0x2150, BidiClass::LeftToRight),
    (0x2150, 0x2160, BidiClass::OtherNeutral),
    (0x2160, 0x2189, BidiClass::LeftToRight),
    (0x2189, 0x218C, BidiClass::OtherNeutral),
    (0x2190, 0x2212, BidiClass::OtherNeutral),
    (0x2212, 0x2213, BidiClass::EuropeanSeparator),
    (0x2213, 0x2214, BidiClass::EuropeanTerminator),
    (0x2214, 0x2336, BidiClass::OtherNeutral),
    (0x2336, 0x237B, BidiClass::LeftToRight),
    (0x237B, 0x2395, BidiClass::OtherNeutral),
    (0x2395, 0x2396, BidiClass::LeftToRight),
    (0x2396, 0x2427, BidiClass::OtherNeutral),
    (0x2440, 0x244B, BidiClass::OtherNeutral),
    (0x2460, 0x2488, BidiClass::OtherNeutral),
    (0x2488, 0x249C, BidiClass::EuropeanNumber),
    (0x249C, 0x24EA, BidiClass::LeftToRight),
    (0x24EA, 0x26AC, BidiClass::OtherNeutral),
    (0x26AC, 0x26AD, BidiClass::LeftToRight),
    (0x26AD, 0x2800, BidiClass::OtherNeutral),
    (0x2800, 0x2900, BidiClass::LeftToRight),
    (0x2900, 0x2B74, BidiClass::OtherNeutral),
    (0x2B76, 0x2B96, BidiClass::OtherNeutral),
    (0x2B97, 0x2C00, BidiClass::OtherNeutral),
    (0x2C00, 0x2CE5, BidiClass::LeftToRight),
    (0x2CE5, 0x2CEB, BidiClass::OtherNeutral),
    (0x2CEB, 0x2CEF, BidiClass::LeftToRight),
    (0x2CEF, 0x2CF2, BidiClass::NonspacingMark),
    (0x2CF2, 0x2CF4, BidiClass::LeftToRight),
    (0x2CF9, 0x2D00, BidiClass::OtherNeutral),
    (0x2D00, 0x2D26, BidiClass::LeftToRight),
    (0x2D27, 0x2D28, BidiClass::LeftToRight),
    (0x2D2D, 0x2D2E, BidiClass::LeftToRight),
    (0x2D30, 0x2D68, BidiClass::LeftToRight),
    (0x2D6F, 0x2D71, BidiClass::LeftToRight),
    (0x2D7F, 0x2D80, BidiClass::NonspacingMark),
    (0x2D80, 0x2D97, BidiClass::LeftToRight),
    (0x2DA0, 0x2DA7, BidiClass::LeftToRight),
    (0x2DA8, 0x2DAF, BidiClass::LeftToRight),
    (0x2DB0, 0x2DB7, BidiClass::LeftToRight),
    (0x2DB8, 0x2DBF, BidiClass::LeftToRight),
    (0x2DC0, 0x2DC7, BidiClass::LeftToRight),
    (0x2DC8, 0x2DCF, BidiClass::LeftToRight),
    (0x2DD0, 0x2DD7, BidiClass::LeftToRight),
    (0x2DD8, 0x2DDF, BidiClass::LeftToRight),
    (0x2DE0, 0x2E00, BidiClass::NonspacingMark),
    (0x2E00, 0x2E5E, BidiClass::OtherNeutral),
    (0x2E80, 0x2E9A, BidiClass::OtherNeutral),
    (0x2E9B, 0x2EF4, BidiClass::OtherNeutral),
    (0x2F00, 0x2FD6, BidiClass::OtherNeutral),
    (0x2FF0, 0x2FFC, BidiClass::OtherNeutral),
    (0x3001, 0x3005, BidiClass::OtherNeutral),
    (0x3005, 0x3008, BidiClass::LeftToRight),
    (0x3008, 0x3021, BidiClass::OtherNeutral),
    (0x3021, 0x302A, BidiClass::LeftToRight),
    (0x302A, 0x302E, BidiClass::NonspacingMark),
    (0x302E, 0x3030, BidiClass::LeftToRight),
    (0x3030, 0x3031, BidiClass::OtherNeutral),
    (0x3031, 0x3036, BidiClass::LeftToRight),
    (0x3036, 0x3038, BidiClass::OtherNeutral),
    (0x3038, 0x303D, BidiClass::LeftToRight),
    (0x303D, 0x3040, BidiClass::OtherNeutral),
    (0x3041, 0x3097, BidiClass::LeftToRight),
    (0x3099, 0x309B, BidiClass::NonspacingMark),
    (0x309B, 0x309D, BidiClass::OtherNeutral),
    (0x309D, 0x30A0, BidiClass::LeftToRight),
    (0x30A0, 0x30A1, BidiClass::OtherNeutral),
    (0x30A1, 0x30FB, BidiClass::LeftToRight),
    (0x30FB, 0x30FC, BidiClass::OtherNeutral),
    (0x30FC, 0x3100, BidiClass::LeftToRight),
    (0x3105, 0x3130, BidiClass::LeftToRight),
    (0x3131, 0x318F, BidiClass::LeftToRight),
    (0x3190, 0x31C0, BidiClass::LeftToRight),
    (0x31C0, 0x31E4, BidiClass::OtherNeutral),
    (0x31F0, 0x321D, BidiClass::LeftToRight),
    (0x321D, 0x321F, BidiClass::OtherNeutral),
    (0x3220, 0x3250, BidiClass::LeftToRight),
    (0x3250, 0x3260, BidiClass::OtherNeutral),
    (0x3260, 0x327C, BidiClass::LeftToRight),
    (0x327C, 0x327F, BidiClass::OtherNeutral),
    (0x327F, 0x32B1, BidiClass::LeftToRight),
    (0x32B1, 0x32C0, BidiClass::OtherNeutral),
    (0x32C0, 0x32CC, BidiClass::LeftToRight),
    (0x32CC, 0x32D0, BidiClass::OtherNeutral),
    (0x32D0, 0x3377, BidiClass::LeftToRight),
    (0x3377, 0x337B, BidiClass::OtherNeutral),
    (0x337B, 0x33DE, BidiClass::LeftToRight),
    (0x33DE, 0x33E0, BidiClass::OtherNeutral),
    (0x33E0, 0x33FF, BidiClass::LeftToRight),
    (0x33FF, 0x3400, BidiClass::OtherNeutral),
    (0x3400, 0x4DC0, BidiClass::LeftToRight),
    (0x4DC0, 0x4E00, BidiClass::OtherNeutral),
    (0x4E00, 0xA48D, BidiClass::LeftToRight),
    (0xA490, 0xA4C7, BidiClass::OtherNeutral),
    (0xA4D0, 0xA60D, BidiClass::LeftToRight),
    (0xA60D, 0xA610, BidiClass::OtherNeutral),
    (0xA610, 0xA62C, BidiClass::LeftToRight),
    (0xA640, 0xA66F, BidiClass::LeftToRight),
    (0xA66F, 0xA673, BidiClass::NonspacingMark),
    (0xA673, 0xA674, BidiClass::OtherNeutral),
    (0xA674, 0xA67E, BidiClass::NonspacingMark),
    (0xA67E, 0xA680, BidiClass::OtherNeutral),
    (0xA680, 0xA69E, BidiClass::LeftToRight),
    (0xA69E, 0xA6A0, BidiClass::NonspacingMark),
    (0xA6A0, 0xA6F0, BidiClass::LeftToRight),
    (0xA6F0, 0xA6F2, BidiClass::NonspacingMark),
    (0xA6F2, 0xA6F8, BidiClass::LeftToRight),
    (0xA700, 0xA722, BidiClass::OtherNeutral),
    (0xA722, 0xA788, BidiClass::LeftToRight),
    (0xA788, 0xA789, BidiClass::OtherNeutral),
    (0xA789, 0xA7CB, BidiClass::LeftToRight),
    (0xA7D0, 0xA7D2, BidiClass::LeftToRight),
    (0xA7D3, 0xA7D4, BidiClass::LeftToRight),
    (0xA7D5, 0xA7DA, BidiClass::LeftToRight),
    (0xA7F2, 0xA802, BidiClass::LeftToRight),
    (0xA802, 0xA803, BidiClass::NonspacingMark),
    (0xA803, 0xA806, BidiClass::LeftToRight),
    (0xA806, 0xA807, BidiClass::NonspacingMark),
    (0xA807, 0xA80B, BidiClass::LeftToRight),
    (0xA80B, 0xA80C, BidiClass::NonspacingMark),
    (0xA80C, 0xA825, BidiClass::LeftToRight),
    (0xA825, 0xA827, BidiClass::NonspacingMark),
    (0xA827, 0xA828, BidiClass::LeftToRight),
    (0xA828, 0xA82C, BidiClass::OtherNeutral),
    (0xA82C, 0xA82D, BidiClass::NonspacingMark),
    (0xA830, 0xA838, BidiClass::LeftToRight),
    (0xA838, 0xA83A, BidiClass::EuropeanTerminator),
    (0xA840, 0xA874, BidiClass::LeftToRight),
    (0xA874, 0xA878, BidiClass::OtherNeutral),
    (0xA880, 0xA8C4, BidiClass::LeftToRight),
    (0xA8C4, 0xA8C6, BidiClass::NonspacingMark),
    (0xA8CE, 0xA8DA, BidiClass::LeftToRight),
    (0xA8E0, 0xA8F2, BidiClass::NonspacingMark),
    (0xA8F2, 0xA8FF, BidiClass::LeftToRight),
    (0xA8FF, 0xA900, BidiClass::NonspacingMark),
    (0xA900, 0xA926, BidiClass::LeftToRight),
    (0xA926, 0xA92E, BidiClass::NonspacingMark),
    (0xA92E, 0xA947, BidiClass::LeftToRight),
    (0xA947, 0xA952, BidiClass::NonspacingMark),
    (0xA952, 0xA954, BidiClass::LeftToRight),
    (0xA95F, 0xA97D, BidiClass::LeftToRight),
    (0xA980, 0xA983, BidiClass::NonspacingMark),
    (0xA983, 0xA9B3, BidiClass::LeftToRight),
    (0xA9B3, 0xA9B4, BidiClass::NonspacingMark),
    (0xA9B4, 0xA9B6, BidiClass::LeftToRight),
    (0xA9B6, 0xA9BA, BidiClass::NonspacingMark),
    (0xA9BA, 0xA9BC, BidiClass::LeftToRight),
    (0xA9BC, 0xA9BE, BidiClass::NonspacingMark),
    (0xA9BE, 0xA9CE, BidiClass::LeftToRight),
    (0xA9CF, 0xA9DA, BidiClass::LeftToRight),
    (0xA9DE, 0xA9E5, BidiClass::LeftToRight),
    (0xA9E5, 0xA9E6, BidiClass::NonspacingMark),
    (0xA9E6, 0xA9FF, BidiClass::LeftToRight),
    (0xAA00, 0xAA29, BidiClass::LeftToRight),
    (0xAA29, 0xAA2F, BidiClass::NonspacingMark),
    (0xAA2F, 0xAA31, BidiClass::LeftToRight),
    (0xAA31, 0xAA33, BidiClass::NonspacingMark),
    (0xAA33, 0xAA35, BidiClass::LeftToRight),
    (0xAA35, 0xAA37, BidiClass::NonspacingMark),
    (0xAA40, 0xAA43, BidiClass::LeftToRight),
    (0xAA43, 0xAA44, BidiClass::NonspacingMark),
    (0xAA44, 0xAA4C, BidiClass::LeftToRight),
    (0xAA4C, 0xAA4D, BidiClass::NonspacingMark),
    (0xAA4D, 0xAA4E, BidiClass::LeftToRight),
    (0xAA50, 0xAA5A, BidiClass::LeftToRight),
    (0xAA5C, 0xAA7C, BidiClass::LeftToRight),
    (0xAA7C, 0xAA7D, BidiClass::NonspacingMark),
    (0xAA7D, 0xAAB0, BidiClass::LeftToRight),
    (0xAAB0, 0xAAB1, BidiClass::NonspacingMark),
    (0xAAB1, 0xAAB2, BidiClass::LeftToRight),
    (0xAAB2, 0xAAB5, BidiClass::NonspacingMark),
    (0xAAB5, 0xAAB7, BidiClass::LeftToRight),
    (0xAAB7, 0xAAB9, BidiClass::NonspacingMark),
    (0xAAB9, 0xAABE, BidiClass::LeftToRight),
    (0xAABE, 0xAAC0, BidiClass::NonspacingMark),
    (0xAAC0, 0xAAC1, BidiClass::LeftToRight),
    (0xAAC1, 0xAAC2, BidiClass::NonspacingMark),
    (0xAAC2, 0xAAC3, BidiClass::LeftToRight),
    (0xAADB, 0xAAEC, BidiClass::LeftToRight),
    (0xAAEC, 0xAAEE, BidiClass::NonspacingMark),
    (0xAAEE, 0xAAF6, BidiClass::LeftToRight),
    (0xAAF6, 0xAAF7, BidiClass::NonspacingMark),
    (0xAB01, 0xAB07, BidiClass::LeftToRight),
    (0xAB09, 0xAB0F, BidiClass::LeftToRight),
    (0xAB11, 0xAB17, BidiClass::LeftToRight),
    (0xAB20, 0xAB27, BidiClass::LeftToRight),
    (0xAB28, 0xAB2F, BidiClass::LeftToRight),
    (0xAB30, 0xAB6A, BidiClass::LeftToRight),
    (0xAB6A, 0xAB6C, BidiClass::OtherNeutral),
    (0xAB70, 0xABE5, BidiClass::LeftToRight),
    (0xABE5, 0xABE6, BidiClass::NonspacingMark),
    (0xABE6, 0xABE8, BidiClass::LeftToRight),
    (0xABE8, 0xABE9, BidiClass::NonspacingMark),
    (0xABE9, 0xABED, BidiClass::LeftToRight),
    (0xABED, 0xABEE, BidiClass::NonspacingMark),
    (0xABF0, 0xABFA, BidiClass::LeftToRight),
    (0xAC00, 0xD7A4, BidiClass::LeftToRight),
    (0xD7B0, 0xD7C7, BidiClass::LeftToRight),
    (0xD7CB, 0xD7FC, BidiClass::LeftToRight),
    (0xD800, 0xFA6E, BidiClass::LeftToRight),
    (0xFA70, 0xFADA, BidiClass::LeftToRight),
    (0xFB00, 0xFB07, BidiClass::LeftToRight),
    (0xFB13, 0xFB18, BidiClass::LeftToRight),
    (0xFB1D, 0xFB1E, BidiClass::RightToLeft),
    (0xFB1E, 0xFB1F, BidiClass::NonspacingMark),
    (0xFB1F, 0xFB29, BidiClass::RightToLeft),
    (0xFB29, 0xFB2A, BidiClass::EuropeanSeparator),
    (0xFB2A, 0xFB37, BidiClass::RightToLeft),
    (0xFB38, 0xFB3D, BidiClass::RightToLeft),
    (0xFB3E, 0xFB3F, BidiClass::RightToLeft),
    (0xFB40, 0xFB42, BidiClass::RightToLeft),
    (0xFB43, 0xFB45, BidiClass::RightToLeft),
    (0xFB46, 0xFB50, BidiClass::RightToLeft),
    (0xFB50, 0xFBC3, BidiClass::ArabicLetter),
    (0xFBD3, 0xFD3E, BidiClass::ArabicLetter),
    (0xFD3E, 0xFD50, BidiClass::OtherNeutral),
    (0xFD50, 0xFD90, BidiClass::ArabicLetter),
    (0xFD92, 0xFDC8, BidiClass::ArabicLetter),
    (0xFDCF, 0xFDD0, BidiClass::OtherNeutral),
    (0xFDF0, 0xFDFD, BidiClass::ArabicLetter),
    (0xFDFD, 0xFE00, BidiClass::OtherNeutral),
    (0xFE00, 0xFE10, BidiClass::NonspacingMark),
    (0xFE10, 0xFE1A, BidiClass::OtherNeutral),
    (0xFE20, 0xFE30, BidiClass::NonspacingMark),
    (0xFE30, 0xFE50, BidiClass::OtherNeutral),
    (0xFE50, 0xFE51, BidiClass::CommonSeparator),
    (0xFE51, 0xFE52, BidiClass::OtherNeutral),
    (0xFE52, 0xFE53, BidiClass::CommonSeparator),
    (0xFE54, 0xFE55, BidiClass::OtherNeutral),
    (0xFE55, 0xFE56, BidiClass::CommonSeparator),
    (0xFE56, 0xFE5F, BidiClass::OtherNeutral),
    (0xFE5F, 0xFE60, BidiClass::EuropeanTerminator),
    (0xFE60, 0xFE62, BidiClass::OtherNeutral),
    (0xFE62, 0xFE64, BidiClass::EuropeanSeparator),
    (0xFE64, 0xFE67, BidiClass::OtherNeutral),
    (0xFE68, 0xFE69, BidiClass::OtherNeutral),
    (0xFE69, 0xFE6B, BidiClass::EuropeanTerminator),
    (0xFE6B, 0xFE6C, BidiClass::OtherNeutral),
    (0xFE70, 0xFE75, BidiClass::ArabicLetter),
    (0xFE76, 0xFEFD, BidiClass::ArabicLetter),
    (0xFEFF, 0xFF00, BidiClass::BoundaryNeutral),
    (0xFF01, 0xFF03, BidiClass::OtherNeutral),
    (0xFF03, 0xFF06, BidiClass::EuropeanTerminator),
    (0xFF06, 0xFF0B, BidiClass::OtherNeutral),
    (0xFF0B, 0xFF0C, BidiClass::EuropeanSeparator),
    (0xFF0C, 0xFF0D, BidiClass::CommonSeparator),
    (0xFF0D, 0xFF0E, BidiClass::EuropeanSeparator),
    (0xFF0E, 0xFF10, BidiClass::CommonSeparator),
    (0xFF10, 0xFF1A, BidiClass::EuropeanNumber),
    (0xFF1A, 0xFF1B, BidiClass::CommonSeparator),
    (0xFF1B, 0xFF21, BidiClass::OtherNeutral),
    (0xFF21, 0xFF3B, BidiClass::LeftToRight),
    (0xFF3B, 0xFF41, BidiClass::OtherNeutral),
    (0xFF41, 0xFF5B, BidiClass::LeftToRight),
    (0xFF5B, 0xFF66, BidiClass::OtherNeutral),
    (0xFF66, 0xFFBF, BidiClass::LeftToRight),
    (0xFFC2, 0xFFC8, BidiClass::LeftToRight),
    (0xFFCA, 0xFFD0, BidiClass::LeftToRight),
    (0xFFD2, 0xFFD8, BidiClass::LeftToRight),
    (0xFFDA, 0xFFDD, BidiClass::LeftToRight),
    (0xFFE0, 0xFFE2, BidiClass::EuropeanTerminator),
    (0xFFE2, 0xFFE5, BidiClass::OtherNeutral),
    (0xFFE5, 0xFFE7, BidiClass::EuropeanTerminator),
    (0xFFE8, 0xFFEF, BidiClass::OtherNeutral),
    (0xFFF9, 0xFFFE, BidiClass::OtherNeutral),
    (0x10000, 0x1000C, BidiClass::LeftToRight),
    (0x1000D, 0x10027, BidiClass::LeftToRight),
    (0x10028, 0x1003B, BidiClass::LeftToRight),
    (0x1003C, 0x1003E, BidiClass::LeftToRight),
    (0x1003F, 0x1004E, BidiClass::LeftToRight),
    (0x10050, 0x1005E, BidiClass::LeftToRight),
    (0x10080, 0x100FB, BidiClass::LeftToRight),
    (0x10100, 0x10101, BidiClass::LeftToRight),
    (0x10101, 0x10102, BidiClass::OtherNeutral),
    (0x10102, 0x10103, BidiClass::LeftToRight),
    (0x10107, 0x10134, BidiClass::LeftToRight),
    (0x10137, 0x10140, BidiClass::LeftToRight),
    (0x10140, 0x1018D, BidiClass::OtherNeutral),
    (0x1018D, 0x1018F, BidiClass::LeftToRight),
    (0x10190, 0x1019D, BidiClass::OtherNeutral),
    (0x101A0, 0x101A1, BidiClass::OtherNeutral),
    (0x101D0, 0x101FD, BidiClass::LeftToRight),
    (0x101FD, 0x101FE, BidiClass::NonspacingMark),
    (0x10280, 0x1029D, BidiClass::LeftToRight),
    (0x102A0, 0x102D1, BidiClass::LeftToRight),
    (0x102E0, 0x102E1, BidiClass::NonspacingMark),
    (0x102E1, 0x102FC, BidiClass::EuropeanNumber),
    (0x10300, 0x10324, BidiClass::LeftToRight),
    (0x1032D, 0x1034B, BidiClass::LeftToRight),
    (0x10350, 0x10376, BidiClass::LeftToRight),
    (0x10376, 0x1037B, BidiClass::NonspacingMark),
    (0x10380, 0x1039E, BidiClass::LeftToRight),
    (0x1039F, 0x103C4, BidiClass::LeftToRight),
    (0x103C8, 0x103D6, BidiClass::LeftToRight),
    (0x10400, 0x1049E, BidiClass::LeftToRight),
    (0x104A0, 0x104AA, BidiClass::LeftToRight),
    (0x104B0, 0x104D4, BidiClass::LeftToRight),
    (0x104D8, 0x104FC, BidiClass::LeftToRight),
    (0x10500, 0x10528, BidiClass::LeftToRight),
    (0x10530, 0x10564, BidiClass::LeftToRight),
    (0x1056F, 0x1057B, BidiClass::LeftToRight),
    (0x1057C, 0x1058B, BidiClass::LeftToRight),
    (0x1058C, 0x10593, BidiClass::LeftToRight),
    (0x10594, 0x10596, BidiClass::LeftToRight),
    (0x10597, 0x105A2, BidiClass::LeftToRight),
    (0x105A3, 0x105B2, BidiClass::LeftToRight),
    (0x105B3, 0x105BA, BidiClass::LeftToRight),
    (0x105BB, 0x105BD, BidiClass::LeftToRight),
    (0x10600, 0x10737, BidiClass::LeftToRight),
    (0x10740, 0x10756, BidiClass::LeftToRight),
    (0x10760, 0x10768, BidiClass::LeftToRight),
    (0x10780, 0x10786, BidiClass::LeftToRight),
    (0x10787, 0x107B1, BidiClass::LeftToRight),
    (0x107B2, 0x107BB, BidiClass::LeftToRight),
    (0x10800, 0x10806, BidiClass::RightToLeft),
    (0x10808, 0x10809, BidiClass::RightToLeft),
    (0x1080A, 0x10836, BidiClass::RightToLeft),
    (0x10837, 0x10839, BidiClass::RightToLeft),
    (0x1083C, 0x1083D, BidiClass::RightToLeft),
    (0x1083F, 0x10856, BidiClass::RightToLeft),
    (0x10857, 0x1089F, BidiClass::RightToLeft),
    (0x108A7, 0x108B0, BidiClass::RightToLeft),
    (0x108E0, 0x108F3, BidiClass::RightToLeft),
    (0x108F4, 0x108F6, BidiClass::RightToLeft),
    (0x108FB, 0x1091C, BidiClass::RightToLeft),
    (0x1091F, 0x10920, BidiClass::OtherNeutral),
    (0x10920, 0x1093A, BidiClass::RightToLeft),
    (0x1093F, 0x10940, BidiClass::RightToLeft),
    (0x10980, 0x109B8, BidiClass::RightToLeft),
    (0x109BC, 0x109D0, BidiClass::RightToLeft),
    (0x109D2, 0x10A01, BidiClass::RightToLeft),
    (0x10A01, 0x10A04, BidiClass::NonspacingMark),
    (0x10A05, 0x10A07, BidiClass::NonspacingMark),
    (0x10A0C, 0x10A10, BidiClass::NonspacingMark),
    (0x10A10, 0x10A14, BidiClass::RightToLeft),
    (0x10A15, 0x10A18, BidiClass::RightToLeft),
    (0x10A19, 0x10A36, BidiClass::RightToLeft),
    (0x10A38, 0x10A3B, BidiClass::NonspacingMark),
    (0x10A3F, 0x10A40, BidiClass::NonspacingMark),
    (0x10A40, 0x10A49, BidiClass::RightToLeft),
    (0x10A50, 0x10A59, BidiClass::RightToLeft),
    (0x10A60, 0x10AA0, BidiClass::RightToLeft),
    (0x10AC0, 0x10AE5, BidiClass::RightToLeft),
    (0x10AE5, 0x10AE7, BidiClass::NonspacingMark),
    (0x10AEB, 0x10AF7, BidiClass::RightToLeft),
    (0x10B00, 0x10B36, BidiClass::RightToLeft),
    (0x10B39, 0x10B40, BidiClass::OtherNeutral),
    (0x10B40, 0x10B56, BidiClass::RightToLeft),
    (0x10B58, 0x10B73, BidiClass::RightToLeft),
    (0x10B78, 0x10B92, BidiClass::RightToLeft),
    (0x10B99, 0x10B9D, BidiClass::RightToLeft),
    (0x10BA9, 0x10BB0, BidiClass::RightToLeft),
    (0x10C00, 0x10C49, BidiClass::RightToLeft),
    (0x10C80, 0x10CB3, BidiClass::RightToLeft),
    (0x10CC0, 0x10CF3, BidiClass::RightToLeft),
    (0x10CFA, 0x10D00, BidiClass::RightToLeft),
    (0x10D00, 0x10D24, BidiClass::ArabicLetter),
    (0x10D24, 0x10D28, BidiClass::NonspacingMark),
    (0x10D30, 0x10D3A, BidiClass::ArabicNumber),
    (0x10E60, 0x10E7F, BidiClass::ArabicNumber),
    (0x10E80, 0x10EAA, BidiClass::RightToLeft),
    (0x10EAB, 0x10EAD, BidiClass::NonspacingMark),
    (0x10EAD, 0x10EAE, BidiClass::RightToLeft),
    (0x10EB0, 0x10EB2, BidiClass::RightToLeft),
    (0x10F00, 0x10F28, BidiClass::RightToLeft),
    (0x10F30, 0x10F46, BidiClass::ArabicLetter),
    (0x10F46, 0x10F51, BidiClass::NonspacingMark),
    (0x10F51, 0x10F5A, BidiClass::ArabicLetter),
    (0x10F70, 0x10F82, BidiClass::RightToLeft),
    (0x10F82, 0x10F86, BidiClass::NonspacingMark),
    (0x10F86, 0x10F8A, BidiClass::RightToLeft),
    (0x10FB0, 0x10FCC, BidiClass::RightToLeft),
    (0x10FE0, 0x10FF7, BidiClass::RightToLeft),
    (0x11000, 0x11001, BidiClass::LeftToRight),
    (0x11001, 0x11002, BidiClass::NonspacingMark),
    (0x11002, 0x11038, BidiClass::LeftToRight),
    (0x11038, 0x11047, BidiClass::NonspacingMark),
    (0x11047, 0x1104E, BidiClass::LeftToRight),
    (0x11052, 0x11066, BidiClass::OtherNeutral),
    (0x11066, 0x11070, BidiClass::LeftToRight),
    (0x11070, 0x11071, BidiClass::NonspacingMark),
    (0x11071, 0x11073, BidiClass::LeftToRight),
    (0x11073, 0x11075, BidiClass::NonspacingMark),
    (0x11075, 0x11076, BidiClass::LeftToRight),
    (0x1107F, 0x11082, BidiClass::NonspacingMark),
    (0x11082, 0x110B3, BidiClass::LeftToRight),
    (0x110B3, 0x110B7, BidiClass::NonspacingMark),
    (0x110B7, 0x110B9, BidiClass::LeftToRight),
    (0x110B9, 0x110BB, BidiClass::NonspacingMark),
    (0x110BB, 0x110C2, BidiClass::LeftToRight),
    (0x110C2, 0x110C3, BidiClass::NonspacingMark),
    (0x110CD, 0x110CE, BidiClass::LeftToRight),
    (0x110D0, 0x110E9, BidiClass::LeftToRight),
    (0x110F0, 0x110FA, BidiClass::LeftToRight),
    (0x11100, 0x11103, BidiClass::NonspacingMark),
    (0x11103, 0x11127, BidiClass::LeftToRight),
    (0x11127, 0x1112C, BidiClass::NonspacingMark),
    (0x1112C, 0x1112D, BidiClass::LeftToRight),
    (0x1112D, 0x11135, BidiClass::NonspacingMark),
    (0x11136, 0x11148, BidiClass::LeftToRight),
    (0x11150, 0x11173, BidiClass::LeftToRight),
    (0x11173, 0x11174, BidiClass::NonspacingMark),
    (0x11174, 0x11177, BidiClass::LeftToRight),
    (0x11180, 0x11182, BidiClass::NonspacingMark),
    (0x11182, 0x111B6, BidiClass::LeftToRight),
    (0x111B6, 0x111BF, BidiClass::NonspacingMark),
    (0x111BF, 0x111C9, BidiClass::LeftToRight),
    (0x111C9, 0x111CD, BidiClass::NonspacingMark),
    (0x111CD, 0x111CF, BidiClass::LeftToRight),
    (0x111CF, 0x111D0, BidiClass::NonspacingMark),
    (0x111D0, 0x111E0, BidiClass::LeftToRight),
    (0x111E1, 0x111F5, BidiClass::LeftToRight),
    (0x11200, 0x11212, BidiClass::LeftToRight),
    (0x11213, 0x1122F, BidiClass::LeftToRight),
    (0x1122F, 0x11232, BidiClass::NonspacingMark),
    (0x11232, 0x11234, BidiClass::LeftToRight),
    (0x11234, 0x11235, BidiClass::NonspacingMark),
    (0x11235, 0x11236, BidiClass::LeftToRight),
    (0x11236, 0x11238, BidiClass::NonspacingMark),
    (0x11238, 0x1123E, BidiClass::LeftToRight),
    (0x1123E, 0x1123F, BidiClass::NonspacingMark),
    (0x11280, 0x11287, BidiClass::LeftToRight),
    (0x11288, 0x11289, BidiClass::LeftToRight),
    (0x1128A, 0x1128E, BidiClass::LeftToRight),
    (0x1128F, 0x1129E, BidiClass::LeftToRight),
    (0x1129F, 0x112AA, BidiClass::LeftToRight),
    (0x112B0, 0x112DF, BidiClass::LeftToRight),
    (0x112DF, 0x112E0, BidiClass::NonspacingMark),
    (0x112E0, 0x112E3, BidiClass::LeftToRight),
    (0x112E3, 0x112EB, BidiClass::NonspacingMark),
    (0x112F0, 0x112FA, BidiClass::LeftToRight),
    (0x11300, 0x11302, BidiClass::NonspacingMark),
    (0x11302, 0x11304, BidiClass::LeftToRight),
    (0x11305, 0x1130D, BidiClass::LeftToRight),
    (0x1130F, 0x11311, BidiClass::LeftToRight),
    (0x11313, 0x11329, BidiClass::LeftToRight),
    (0x1132A, 0x11331, BidiClass::LeftToRight),
    (0x11332, 0x11334, BidiClass::LeftToRight),
    (0x11335, 0x1133A, BidiClass::LeftToRight),
    (0x1133B, 0x1133D, BidiClass::NonspacingMark),
    (0x1133D, 0x11340, BidiClass::LeftToRight),
    (0x11340, 0x11341, BidiClass::NonspacingMark),
    (0x11341, 0x11345, BidiClass::LeftToRight),
    (0x11347, 0x11349, BidiClass::LeftToRight),
    (0x1134B, 0x1134E, BidiClass::LeftToRight),
    (0x11350, 0x11351, BidiClass::LeftToRight),
    (0x11357, 0x11358, BidiClass::LeftToRight),
    (0x1135D, 0x11364, BidiClass::LeftToRight),
    (0x11366, 0x1136D, BidiClass::NonspacingMark),
    (0x11370, 0x11375, BidiClass::NonspacingMark),
    (0x11400, 0x11438, BidiClass::LeftToRight),
    (0x11438, 0x11440, BidiClass::NonspacingMark),
    (0x11440, 0x11442, BidiClass::LeftToRight),
    (0x11442, 0x11445, BidiClass::NonspacingMark),
    (0x11445, 0x11446, BidiClass::LeftToRight),
    (0x11446, 0x11447, BidiClass::NonspacingMark),
    (0x11447, 0x1145C, BidiClass::LeftToRight),
    (0x1145D, 0x1145E, BidiClass::LeftToRight),
    (0x1145E, 0x1145F, BidiClass::NonspacingMark),
    (0x1145F, 0x11462, BidiClass::LeftToRight),
    (0x11480, 0x114B3, BidiClass::LeftToRight),
    (0x114B3, 0x114B9, BidiClass::NonspacingMark),
    (0x114B9, 0x114BA, BidiClass::LeftToRight),
    (0x114BA, 0x114BB, BidiClass::NonspacingMark),
    (0x114BB, 0x114BF, BidiClass::LeftToRight),
    (0x114BF, 0x114C1, BidiClass::NonspacingMark),
    (0x114C1, 0x114C2, BidiClass::LeftToRight),
    (0x114C2, 0x114C4, BidiClass::NonspacingMark),
    (0x114C4, 0x114C8, BidiClass::LeftToRight),
    (0x114D0, 0x114DA, BidiClass::LeftToRight),
    (0x11580, 0x115B2, BidiClass::LeftToRight),
    (0x115B2, 0x115B6, BidiClass::NonspacingMark),
    (0x115B8, 0x115BC, BidiClass::LeftToRight),
    (0x115BC, 0x115BE, BidiClass::NonspacingMark),
    (0x115BE, 0x115BF, BidiClass::LeftToRight),
    (0x115BF, 0x115C1, BidiClass::NonspacingMark),
    (0x115C1, 0x115DC, BidiClass::LeftToRight),
    (0x115DC, 0x115DE, BidiClass::NonspacingMark),
    (0x11600, 0x11633, BidiClass::LeftToRight),
    (0x11633, 0x1163B, BidiClass::NonspacingMark),
    (0x1163B, 0x1163D, BidiClass::LeftToRight),
    (0x1163D, 0x1163E, BidiClass::NonspacingMark),
    (0x1163E, 0x1163F, BidiClass::LeftToRight),
    (0x1163F, 0x11641, BidiClass::NonspacingMark),
    (0x11641, 0x11645, BidiClass::LeftToRight),
    (0x11650, 0x1165A, BidiClass::LeftToRight),
    (0x11660, 0x1166D, BidiClass::OtherNeutral),
    (0x11680, 0x116AB, BidiClass::LeftToRight),
    (0x116AB, 0x116AC, BidiClass::NonspacingMark),
    (0x116AC, 0x116AD, BidiClass::LeftToRight),
    (0x116AD, 0x116AE, BidiClass::NonspacingMark),
    (0x116AE, 0x116B0, BidiClass::LeftToRight),
    (0x116B0, 0x116B6, BidiClass::NonspacingMark),
    (0x116B6, 0x116B7, BidiClass::LeftToRight),
    (0x116B7, 0x116B8, BidiClass::NonspacingMark),
    (0x116B8, 0x116BA, BidiClass::LeftToRight),
    (0x116C0, 0x116CA, BidiClass::LeftToRight),
    (0x11700, 0x1171B, BidiClass::LeftToRight),
    (0x1171D, 0x11720, BidiClass::NonspacingMark),
    (0x11720, 0x11722, BidiClass::LeftToRight),
    (0x11722, 0x11726, BidiClass::NonspacingMark),
    (0x11726, 0x11727, BidiClass::LeftToRight),
    (0x11727, 0x1172C, BidiClass::NonspacingMark),
    (0x11730, 0x11747, BidiClass::LeftToRight),
    (0x11800, 0x1182F, BidiClass::LeftToRight),
    (0x1182F, 0x11838, BidiClass::NonspacingMark),
    (0x11838, 0x11839, BidiClass::LeftToRight),
    (0x11839, 0x1183B, BidiClass::NonspacingMark),
    (0x1183B, 0x1183C, BidiClass::LeftToRight),
    (0x118A0, 0x118F3, BidiClass::LeftToRight),
    (0x118FF, 0x11907, BidiClass::LeftToRight),
    (0x11909, 0x1190A, BidiClass::LeftToRight),
    (0x1190C, 0x11914, BidiClass::LeftToRight),
    (0x11915, 0x11917, BidiClass::LeftToRight),
    (0x11918, 0x11936, BidiClass::LeftToRight),
    (0x11937, 0x11939, BidiClass::LeftToRight),
    (0x1193B, 0x1193D, BidiClass::NonspacingMark),
    (0x1193D, 0x1193E, BidiClass::LeftToRight),
    (0x1193E, 0x1193F, BidiClass::NonspacingMark),
    (0x1193F, 0x11943, BidiClass::LeftToRight),
    (0x11943, 0x11944, BidiClass::NonspacingMark),
    (0x11944, 0x11947, BidiClass::LeftToRight),
    (0x11950, 0x1195A, BidiClass::LeftToRight),
    (0x119A0, 0x119A8, BidiClass::LeftToRight),
    (0x119AA, 0x119D4, BidiClass::LeftToRight),
    (0x119D4, 0x119D8, BidiClass::NonspacingMark),
    (0x119DA, 0x119DC, BidiClass::NonspacingMark),
    (0x119DC, 0x119E0, BidiClass::LeftToRight),
    (0x119E0, 0x119E1, BidiClass::NonspacingMark),
    (0x119E1, 0x119E5, BidiClass::LeftToRight),
    (0x11A00, 0x11A01, BidiClass::LeftToRight),
    (0x11A01, 0x11A07, BidiClass::NonspacingMark),
    (0x11A07, 0x11A09, BidiClass::LeftToRight),
    (0x11A09, 0x11A0B, BidiClass::NonspacingMark),
    (0x11A0B, 0x11A33, BidiClass::LeftToRight),
    (0x11A33, 0x11A39, BidiClass::NonspacingMark),
    (0x11A39, 0x11A3B, BidiClass::LeftToRight),
    (0x11A3B, 0x11A3F, BidiClass::NonspacingMark),
    (0x11A3F, 0x11A47, BidiClass::LeftToRight),
    (0x11A47, 0x11A48, BidiClass::NonspacingMark),
    (0x11A50, 0x11A51, BidiClass::LeftToRight),
    (0x11A51, 0x11A57, BidiClass::NonspacingMark),
    (0x11A57, 0x11A59, BidiClass::LeftToRight),
    (0x11A59, 0x11A5C, BidiClass::NonspacingMark),
    (0x11A5C, 0x11A8A, BidiClass::LeftToRight),
    (0x11A8A, 0x11A97, BidiClass::NonspacingMark),
    (0x11A97, 0x11A98, BidiClass::LeftToRight),
    (0x11A98, 0x11A9A, BidiClass::NonspacingMark),
    (0x11A9A, 0x11AA3, BidiClass::LeftToRight),
    (0x11AB0, 0x11AF9, BidiClass::LeftToRight),
    (0x11C00, 0x11C09, BidiClass::LeftToRight),
    (0x11C0A, 0x11C30, BidiClass::LeftToRight),
    (0x11C30, 0x11C37, BidiClass::NonspacingMark),
    (0x11C38, 0x11C3E, BidiClass::NonspacingMark),
    (0x11C3E, 0x11C46, BidiClass::LeftToRight),
    (0x11C50, 0x11C6D, BidiClass::LeftToRight),
    (0x11C70, 0x11C90, BidiClass::LeftToRight),
    (0x11C92, 0x11CA8, BidiClass::NonspacingMark),
    (0x11CA9, 0x11CAA, BidiClass::LeftToRight),
    (0x11CAA, 0x11CB1, BidiClass::NonspacingMark),
    (0x11CB1, 0x11CB2, BidiClass::LeftToRight),
    (0x11CB2, 0x11CB4, BidiClass::NonspacingMark),
    (0x11CB4, 0x11CB5, BidiClass::LeftToRight),
    (0x11CB5, 0x11CB7, BidiClass::NonspacingMark),
    (0x11D00, 0x11D07, BidiClass::LeftToRight),
    (0x11D08, 0x11D0A, BidiClass::LeftToRight),
    (0x11D0B, 0x11D31, BidiClass::LeftToRight),
    (0x11D31, 0x11D37, BidiClass::NonspacingMark),
    (0x11D3A, 0x11D3B, BidiClass::NonspacingMark),
    (0x11D3C, 0x11D3E, BidiClass::NonspacingMark),
    (0x11D3F, 0x11D46, BidiClass::NonspacingMark),
    (0x11D46, 0x11D47, BidiClass::LeftToRight),
    (0x11D47, 0x11D48, BidiClass::NonspacingMark),
    (0x11D50, 0x11D5A, BidiClass::LeftToRight),
    (0x11D60, 0x11D66, BidiClass::LeftToRight),
    (0x11D67, 0x11D69, BidiClass::LeftToRight),
    (0x11D6A, 0x11D8F, BidiClass::LeftToRight),
    (0x11D90, 0x11D92, BidiClass::NonspacingMark),
    (0x11D93, 0x11D95, BidiClass::LeftToRight),
    (0x11D95, 0x11D96, BidiClass::NonspacingMark),
    (0x11D96, 0x11D97, BidiClass::LeftToRight),
    (0x11D97, 0x11D98, BidiClass::NonspacingMark),
    (0x11D98, 0x11D99, BidiClass::LeftToRight),
    (0x11DA0, 0x11DAA, BidiClass::LeftToRight),
    (0x11EE0, 0x11EF3, BidiClass::LeftToRight),
    (0x11EF3, 0x11EF5, BidiClass::NonspacingMark),
    (0x11EF5, 0x11EF9, BidiClass::LeftToRight),
    (0x11FB0, 0x11FB1, BidiClass::LeftToRight),
    (0x11FC0, 0x11FD5, BidiClass::LeftToRight),
    (0x11FD5, 0x11FDD, BidiClass::OtherNeutral),
    (0x11FDD, 0x11FE1, BidiClass::EuropeanTerminator),
    (0x11FE1, 0x11FF2, BidiClass::OtherNeutral),
    (0x11FFF, 0x1239A, BidiClass::LeftToRight),
    (0x12400, 0x1246F, BidiClass::LeftToRight),
    (0x12470, 0x12475, BidiClass::LeftToRight),
    (0x12480, 0x12544, BidiClass::LeftToRight),
    (0x12F90, 0x12FF3, BidiClass::LeftToRight),
    (0x13000, 0x1342F, BidiClass::LeftToRight),
    (0x13430, 0x13439, BidiClass::LeftToRight),
    (0x14400, 0x14647, BidiClass::LeftToRight),
    (0x16800, 0x16A39, BidiClass::LeftToRight),
    (0x16A40, 0x16A5F, BidiClass::LeftToRight),
    (0x16A60, 0x16A6A, BidiClass::LeftToRight),
    (0x16A6E, 0x16ABF, BidiClass::LeftToRight),
    (0x16AC0, 0x16ACA, BidiClass::LeftToRight),
    (0x16AD0, 0x16AEE, BidiClass::LeftToRight),
    (0x16AF0, 0x16AF5, BidiClass::NonspacingMark),
    (0x16AF5, 0x16AF6, BidiClass::LeftToRight),
    (0x16B00, 0x16B30, BidiClass::LeftToRight),
    (0x16B30, 0x16B37, BidiClass::NonspacingMark),
    (0x16B37, 0x16B46, BidiClass::LeftToRight),
    (0x16B50, 0x16B5A, BidiClass::LeftToRight),
    (0x16B5B, 0x16B62, BidiClass::LeftToRight),
    (0x16B63, 0x16B78, BidiClass::LeftToRight),
    (0x16B7D, 0x16B90, BidiClass::LeftToRight),
    (0x16E40, 0x16E9B, BidiClass::LeftToRight),
    (0x16F00, 0x16F4B, BidiClass::LeftToRight),
    (0x16F4F, 0x16F50, BidiClass::NonspacingMark),
    (0x16F50, 0x16F88, BidiClass::LeftToRight),
    (0x16F8F, 0x16F93, BidiClass::NonspacingMark),
    (0x16F93, 0x16FA0, BidiClass::LeftToRight),
    (0x16FE0, 0x16FE2, BidiClass::LeftToRight),
    (0x16FE2, 0x16FE3, BidiClass::OtherNeutral),
    (0x16FE3, 0x16FE4, BidiClass::LeftToRight),
    (0x16FE4, 0x16FE5, BidiClass::NonspacingMark),
    (0x16FF0, 0x16FF2, BidiClass::LeftToRight),
    (0x17000, 0x187F8, BidiClass::LeftToRight),
    (0x18800, 0x18CD6, BidiClass::LeftToRight),
    (0x18D00, 0x18D09, BidiClass::LeftToRight),
    (0x1AFF0, 0x1AFF4, BidiClass::LeftToRight),
    (0x1AFF5, 0x1AFFC, BidiClass::LeftToRight),
    (0x1AFFD, 0x1AFFF, BidiClass::LeftToRight),
    (0x1B000, 0x1B123, BidiClass::LeftToRight),
    (0x1B150, 0x1B153, BidiClass::LeftToRight),
    (0x1B164, 0x1B168, BidiClass::LeftToRight),
    (0x1B170, 0x1B2FC, BidiClass::LeftToRight),
    (0x1BC00, 0x1BC6B, BidiClass::LeftToRight),
    (0x1BC70, 0x1BC7D, BidiClass::LeftToRight),
    (0x1BC80, 0x1BC89, BidiClass::LeftToRight),
    (0x1BC90, 0x1BC9A, BidiClass::LeftToRight),
    (0x1BC9C, 0x1BC9D, BidiClass::LeftToRight),
    (0x1BC9D, 0x1BC9F, BidiClass::NonspacingMark),
    (0x1BC9F, 0x1BCA0, BidiClass::LeftToRight),
    (0x1BCA0, 0x1BCA4, BidiClass::BoundaryNeutral),
    (0x1CF00, 0x1CF2E, BidiClass::NonspacingMark),
    (0x1CF30, 0x1CF47, BidiClass::NonspacingMark),
    (0x1CF50, 0x1CFC4, BidiClass::LeftToRight),
    (0x1D000, 0x1D0F6, BidiClass::LeftToRight),
    (0x1D100, 0x1D127, BidiClass::LeftToRight),
    (0x1D129, 0x1D167, BidiClass::LeftToRight),
    (0x1D167, 0x1D16A, BidiClass::NonspacingMark),
    (0x1D16A, 0x1D173, BidiClass::LeftToRight),
    (0x1D173, 0x1D17B, BidiClass::BoundaryNeutral),
    (0x1D17B, 0x1D183, BidiClass::NonspacingMark),
    (0x1D183, 0x1D185, BidiClass::LeftToRight),
    (0x1D185, 0x1D18C, BidiClass::NonspacingMark),
    (0x1D18C, 0x1D1AA, BidiClass::LeftToRight),
    (0x1D1AA, 0x1D1AE, BidiClass::NonspacingMark),
    (0x1D1AE, 0x1D1E9, BidiClass::LeftToRight),
    (0x1D1E9, 0x1D1EB, BidiClass::OtherNeutral),
    (0x1D200, 0x1D242, BidiClass::OtherNeutral),
    (0x1D242, 0x1D245, BidiClass::NonspacingMark),
    (0x1D245, 0x1D246, BidiClass::OtherNeutral),
    (0x1D2E0, 0x1D2F4, BidiClass::LeftToRight),
    (0x1D300, 0x1D357, BidiClass::OtherNeutral),
    (0x1D360, 0x1D379, BidiClass::LeftToRight),
    (0x1D400, 0x1D455, BidiClass::LeftToRight),
    (0x1D456, 0x1D49D, BidiClass::LeftToRight),
    (0x1D49E, 0x1D4A0, BidiClass::LeftToRight),
    (0x1D4A2, 0x1D4A3, BidiClass::LeftToRight),
    (0x1D4A5, 0x1D4A7, BidiClass::LeftToRight),
    (0x1D4A9, 0x1D4AD, BidiClass::LeftToRight),
    (0x1D4AE, 0x1D4BA, BidiClass::LeftToRight),
    (0x1D4BB, 0x1D4BC, BidiClass::LeftToRight),
    (0x1D4BD, 0x1D4C4, BidiClass::LeftToRight),
    (0x1D4C5, 0x1D506, BidiClass::LeftToRight),
    (0x1D507, 0x1D50B, BidiClass::LeftToRight),
    (0x1D50D, 0x1D515, BidiClass::LeftToRight),
    (0x1D516, 0x1D51D, BidiClass::LeftToRight),
    (0x1D51E, 0x1D53A, BidiClass::LeftToRight),
    (0x1D53B, 0x1D53F, BidiClass::LeftToRight),
    (0x1D540, 0x1D545, BidiClass::LeftToRight),
    (0x1D546, 0x1D547, BidiClass::LeftToRight),
    (0x1D54A, 0x1D551, BidiClass::LeftToRight),
    (0x1D552, 0x1D6A6, BidiClass::LeftToRight),
    (0x1D6A8, 0x1D6DB, BidiClass::LeftToRight),
    (0x1D6DB, 0x1D6DC, BidiClass::OtherNeutral),
    (0x1D6DC, 0x1D715, BidiClass::LeftToRight),
    (0x1D715, 0x1D716, BidiClass::OtherNeutral),
    (0x1D716, 0x1D74F, BidiClass::LeftToRight),
    (0x1D74F, 0x1D750, BidiClass::OtherNeutral),
    (0x1D750, 0x1D789, BidiClass::LeftToRight),
    (0x1D789, 0x1D78A, BidiClass::OtherNeutral),
    (0x1D78A, 0x1D7C3, BidiClass::LeftToRight),
    (0x1D7C3, 0x1D7C4, BidiClass::OtherNeutral),
    (0x1D7C4, 0x1D7CC, BidiClass::LeftToRight),
    (0x1D7CE, 0x1D800, BidiClass::EuropeanNumber),
    (0x1D800, 0x1DA00, BidiClass::LeftToRight),
    (0x1DA00, 0x1DA37, BidiClass::NonspacingMark),
    (0x1DA37, 0x1DA3B, BidiClass::LeftToRight),
    (0x1DA3B, 0x1DA6D, BidiClass::NonspacingMark),
    (0x1DA6D, 0x1DA75, BidiClass::LeftToRight),
    (0x1DA75, 0x1DA76, BidiClass::NonspacingMark),
    (0x1DA76, 0x1DA84, BidiClass::LeftToRight),
    (0x1DA84, 0x1DA85, BidiClass::NonspacingMark),
    (0x1DA85, 0x1DA8C, BidiClass::LeftToRight),
    (0x1DA9B, 0x1DAA0, BidiClass::NonspacingMark),
    (0x1DAA1, 0x1DAB0, BidiClass::NonspacingMark),
    (0x1DF00, 0x1DF1F, BidiClass::LeftToRight),
    (0x1E000, 0x1E007, BidiClass::NonspacingMark),
    (0x1E008, 0x1E019, BidiClass::NonspacingMark),
    (0x1E01B, 0x1E022, BidiClass::NonspacingMark),
    (0x1E023, 0x1E025, BidiClass::NonspacingMark),
    (0x1E026, 0x1E02B, BidiClass::NonspacingMark),
    (0x1E100, 0x1E12D, BidiClass::LeftToRight),
    (0x1E130, 0x1E137, BidiClass::NonspacingMark),
    (0x1E137, 0x1E13E, BidiClass::LeftToRight),
    (0x1E140, 0x1E14A, BidiClass::LeftToRight),
    (0x1E14E, 0x1E150, BidiClass::LeftToRight),
    (0x1E290, 0x1E2AE, BidiClass::LeftToRight),
    (0x1E2AE, 0x1E2AF, BidiClass::NonspacingMark),
    (0x1E2C0, 0x1E2EC, BidiClass::LeftToRight),
    (0x1E2EC, 0x1E2F0, BidiClass::NonspacingMark),
    (0x1E2F0, 0x1E2FA, BidiClass::LeftToRight),
    (0x1E2FF, 0x1E300, BidiClass::EuropeanTerminator),
    (0x1E7E0, 0x1E7E7, BidiClass::LeftToRight),
    (0x1E7E8, 0x1E7EC, BidiClass::LeftToRight),
    (0x1E7ED, 0x1E7EF, BidiClass::LeftToRight),
    (0x1E7F0, 0x1E7FF, BidiClass::LeftToRight),
    (0x1E800, 0x1E8C5, BidiClass::RightToLeft),
    (0x1E8C7, 0x1E8D0, BidiClass::RightToLeft),
    (0x1E8D0, 0x1E8D7, BidiClass::NonspacingMark),
    (0x1E900, 0x1E944, BidiClass::RightToLeft),
    (0x1E944, 0x1E94B, BidiClass::NonspacingMark),
    (0x1E94B, 0x1E94C, BidiClass::RightToLeft),
    (0x1E950, 0x1E95A, BidiClass::RightToLeft),
    (0x1E95E, 0x1E960, BidiClass::RightToLeft),
    (0x1EC71, 0x1ECB5, BidiClass::ArabicLetter),
    (0x1ED01, 0x1ED3E, BidiClass::ArabicLetter),
    (0x1EE00, 0x1EE04, BidiClass::ArabicLetter),
    (0x1EE05, 0x1EE20, BidiClass::ArabicLetter),
    (0x1EE21, 0x1EE23, BidiClass::ArabicLetter),
    (0x1EE24, 0x1EE25, BidiClass::ArabicLetter),
    (0x1EE27, 0x1EE28, BidiClass::ArabicLetter),
    (0x1EE29, 0x1EE33, BidiClass::ArabicLetter),
    (0x1EE34, 0x1EE38, BidiClass::ArabicLetter),
    (0x1EE39, 0x1EE3A, BidiClass::ArabicLetter),
    (0x1EE3B, 0x1EE3C, BidiClass::ArabicLetter),
    (0x1EE42, 0x1EE43, BidiClass::ArabicLetter),
    (0x1EE47, 0x1EE48, BidiClass::ArabicLetter),
    (0x1EE49, 0x1EE4A, BidiClass::ArabicLetter),
    (0x1EE4B, 0x1EE4C, BidiClass::ArabicLetter),
    (0x1EE4D, 0x1EE50, BidiClass::ArabicLetter),
    (0x1EE51, 0x1EE53, BidiClass::ArabicLetter),
    (0x1EE54, 0x1EE55, BidiClass::ArabicLetter),
    (0x1EE57, 0x1EE58, BidiClass::ArabicLetter),
    (0x1EE59, 0x1EE5A, BidiClass::ArabicLetter),
    (0x1EE5B, 0x1EE5C, BidiClass::ArabicLetter),
    (0x1EE5D, 0x1EE5E, BidiClass::ArabicLetter),
    (0x1EE5F, 0x1EE60, BidiClass::ArabicLetter),
    (0x1EE61, 0x1EE63, BidiClass::ArabicLetter),
    (0x1EE64, 0x1EE65, BidiClass::ArabicLetter),
    (0x1EE67, 0x1EE6B, BidiClass::ArabicLetter),
    (0x1EE6C, 0x1EE73, BidiClass::ArabicLetter),
    (0x1EE74, 0x1EE78, BidiClass::ArabicLetter),
    (0x1EE79, 0x1EE7D, BidiClass::ArabicLetter),
    (0x1EE7E, 0x1EE7F, BidiClass::ArabicLetter),
    (0x1EE80, 0x1EE8A, BidiClass::ArabicLetter),
    (0x1EE8B, 0x1EE9C, BidiClass::ArabicLetter),
    (0x1EEA1, 0x1EEA4, BidiClass::ArabicLetter),
    (0x1EEA5, 0x1EEAA, BidiClass::ArabicLetter),
    (0x1EEAB, 0x1EEBC, BidiClass::ArabicLetter),
    (0x1EEF0, 0x1EEF2, BidiClass::OtherNeutral),
    (0x1F000, 0x1F02C, BidiClass::OtherNeutral),
    (0x1F030, 0x1F094, BidiClass::OtherNeutral),
    (0x1F0A0, 0x1F0AF, BidiClass::OtherNeutral),
    (0x1F0B1, 0x1F0C0, BidiClass::OtherNeutral),
    (0x1F0C1, 0x1F0D0, BidiClass::OtherNeutral),
    (0x1F0D1, 0x1F0F6, BidiClass::OtherNeutral),
    (0x1F100, 0x1F10B, BidiClass::EuropeanNumber),
    (0x1F10B, 0x1F110, BidiClass::OtherNeutral),
    (0x1F110, 0x1F12F, BidiClass::LeftToRight),
    (0x1F12F, 0x1F130, BidiClass::OtherNeutral),
    (0x1F130, 0x1F16A, BidiClass::LeftToRight),
    (0x1F16A, 0x1F170, BidiClass::OtherNeutral),
    (0x1F170, 0x1F1AD, BidiClass::LeftToRight),
    (0x1F1AD, 0x1F1AE, BidiClass::OtherNeutral),
    (0x1F1E6, 0x1F203, BidiClass::LeftToRight),
    (0x1F210, 0x1F23C, BidiClass::LeftToRight),
    (0x1F240, 0x1F249, BidiClass::LeftToRight),
    (0x1F250, 0x1F252, BidiClass::LeftToRight),
    (0x1F260, 0x1F266, BidiClass::OtherNeutral),
    (0x1F300, 0x1F6D8, BidiClass::OtherNeutral),
    (0x1F6DD, 0x1F6ED, BidiClass::OtherNeutral),
    (0x1F6F0, 0x1F6FD, BidiClass::OtherNeutral),
    (0x1F700, 0x1F774, BidiClass::OtherNeutral),
    (0x1F780, 0x1F7D9, BidiClass::OtherNeutral),
    (0x1F7E0, 0x1F7EC, BidiClass::OtherNeutral),
    (0x1F7F0, 0x1F7F1, BidiClass::OtherNeutral),
    (0x1F800, 0x1F80C, BidiClass::OtherNeutral),
    (0x1F810, 0x1F848, BidiClass::OtherNeutral),
    (0x1F850, 0x1F85A, BidiClass::OtherNeutral),
    (0x1F860, 0x1F888, BidiClass::OtherNeutral),
    (0x1F890, 0x1F8AE, BidiClass::OtherNeutral),
    (0x1F8B0, 0x1F8B2, BidiClass::OtherNeutral),
    (0x1F900, 0x1FA54, BidiClass::OtherNeutral),
    (0x1FA60, 0x1FA6E, BidiClass::OtherNeutral),
    (0x1FA70, 0x1FA75, BidiClass::OtherNeutral),
    (0x1FA78, 0x1FA7D, BidiClass::OtherNeutral),
    (0x1FA80, 0x1FA87, BidiClass::OtherNeutral),
    (0x1FA90, 0x1FAAD, BidiClass::OtherNeutral),
    (0x1FAB0, 0x1FABB, BidiClass::OtherNeutral),
    (0x1FAC0, 0x1FAC6, BidiClass::OtherNeutral),
    (0x1FAD0, 0x1FADA, BidiClass::OtherNeutral),
    (0x1FAE0, 0x1FAE8, BidiClass::OtherNeutral),
    (0x1FAF0, 0x1FAF7, BidiClass::OtherNeutral),
    (0x1FB00, 0x1FB93, BidiClass::OtherNeutral),
    (0x1FB94, 0x1FBCB, BidiClass::OtherNeutral),
    (0x1FBF0, 0x1FBFA, BidiClass::EuropeanNumber),
    (0x20000, 0x2A6E0, BidiClass::LeftToRight),
    (0x2A700, 0x2B739, BidiClass::LeftToRight),
    (0x2B740, 0x2B81E, BidiClass::LeftToRight),
    (0x2B820, 0x2CEA2, BidiClass::LeftToRight),
    (0x2CEB0, 0x2EBE1, BidiClass::LeftToRight),
    (0x2F800, 0x2FA1E, BidiClass::LeftToRight),
    (0x30000, 0x3134B, BidiClass::LeftToRight),
    (0xE0001, 0xE0002, BidiClass::BoundaryNeutral),
    (0xE0020, 0xE0080, BidiClass::BoundaryNeutral),
    (0xE0100, 0xE01F0, BidiClass::NonspacingMark),
    (0xF0000, 0xFFFFE, BidiClass::LeftToRight),
    (0x100000, 0x10FFFE, BidiClass::LeftToRight),
];
