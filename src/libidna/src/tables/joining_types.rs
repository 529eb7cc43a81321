// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Joining types for the RFC 5892 zero-width-non-joiner rule.
//!
//! Generated offline from ArabicShaping.txt. Ranges are half-open and
//! sorted. Do not edit by hand.

/// Arabic shaping joining type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoiningType {
    JoinCausing,
    DualJoining,
    LeftJoining,
    RightJoining,
    Transparent,
}

/// Look up the joining type of a character, `None` for non-joining.
pub fn joining_type(c: char) -> Option<JoiningType> {
    let cp = c as u32;
    let index = JOINING_TYPES.partition_point(|&(start, _, _)| start <= cp);
    if index == 0 {
        return None;
    }
    let (_, end, joining_type) = JOINING_TYPES[index - 1];
    if cp < end {
        Some(joining_type)
    } else {
        None
    }
}

#[rustfmt::skip]
static JOINING_TYPES: &[(u32, u32, JoiningType)] = &[
    (0x00AD, 0x00AE, JoiningType::Transparent),
    (0x0300, 0x0370, JoiningType::Transparent),
    (0x0483, 0x048A, JoiningType::Transparent),
    (0x0591, 0x05BE, JoiningType::Transparent),
    (0x05BF, 0x05C0, JoiningType::Transparent),
    (0x05C1, 0x05C3, JoiningType::Transparent),
    (0x05C4, 0x05C6, JoiningType::Transparent),
    (0x05C7, 0x05C8, JoiningType::Transparent),
    (0x0610, 0x061B, JoiningType::Transparent),
    (0x061C, 0x061D, JoiningType::Transparent),
    (0x0620, 0x0621, JoiningType::DualJoining),
    (0x0622, 0x0626, JoiningType::RightJoining),
    (0x0626, 0x0627, JoiningType::DualJoining),
    (0x0627, 0x0628, JoiningType::RightJoining),
    (0x0628, 0x0629, JoiningType::DualJoining),
    (0x0629, 0x062A, JoiningType::RightJoining),
    (0x062A, 0x062F, JoiningType::DualJoining),
    (0x062F, 0x0633, JoiningType::RightJoining),
    (0x0633, 0x0640, JoiningType::DualJoining),
    (0x0640, 0x0641, JoiningType::JoinCausing),
    (0x0641, 0x0648, JoiningType::DualJoining),
    (0x0648, 0x0649, JoiningType::RightJoining),
    (0x0649, 0x064B, JoiningType::DualJoining),
    (0x064B, 0x0660, JoiningType::Transparent),
    (0x066E, 0x0670, JoiningType::DualJoining),
    (0x0670, 0x0671, JoiningType::Transparent),
    (0x0671, 0x0674, JoiningType::RightJoining),
    (0x0675, 0x0678, JoiningType::RightJoining),
    (0x0678, 0x0688, JoiningType::DualJoining),
    (0x0688, 0x069A, JoiningType::RightJoining),
    (0x069A, 0x06C0, JoiningType::DualJoining),
    (0x06C0, 0x06C1, JoiningType::RightJoining),
    (0x06C1, 0x06C3, JoiningType::DualJoining),
    (0x06C3, 0x06CC, JoiningType::RightJoining),
    (0x06CC, 0x06CD, JoiningType::DualJoining),
    (0x06CD, 0x06CE, JoiningType::RightJoining),
    (0x06CE, 0x06CF, JoiningType::DualJoining),
    (0x06CF, 0x06D0, JoiningType::RightJoining),
    (0x06D0, 0x06D2, JoiningType::DualJoining),
    (0x06D2, 0x06D4, JoiningType::RightJoining),
    (0x06D5, 0x06D6, JoiningType::RightJoining),
    (0x06D6, 0x06DD, JoiningType::Transparent),
    (0x06DF, 0x06E5, JoiningType::Transparent),
    (0x06E7, 0x06E9, JoiningType::Transparent),
    (0x06EA, 0x06EE, JoiningType::Transparent),
    (0x06EE, 0x06F0, JoiningType::RightJoining),
    (0x06FA, 0x06FD, JoiningType::DualJoining),
    (0x06FF, 0x0700, JoiningType::DualJoining),
    (0x070F, 0x0710, JoiningType::Transparent),
    (0x0710, 0x0711, JoiningType::RightJoining),
    (0x0711, 0x0712, JoiningType::Transparent),
    (0x0712, 0x0715, JoiningType::DualJoining),
    (0x0715, 0x071A, JoiningType::RightJoining),
    (0x071A, 0x071E, JoiningType::DualJoining),
    (0x071E, 0x071F, JoiningType::RightJoining),
    (0x071F, 0x0728, JoiningType::DualJoining),
    (0x0728, 0x0729, JoiningType::RightJoining),
    (0x0729, 0x072A, JoiningType::DualJoining),
    (0x072A, 0x072B, JoiningType::RightJoining),
    (0x072B, 0x072C, JoiningType::DualJoining),
    (0x072C, 0x072D, JoiningType::RightJoining),
    (0x072D, 0x072F, JoiningType::DualJoining),
    (0x072F, 0x0730, JoiningType::RightJoining),
    (0x0730, 0x074B, JoiningType::Transparent),
    (0x074D, 0x074E, JoiningType::RightJoining),
    (0x074E, 0x0759, JoiningType::DualJoining),
    (0x0759, 0x075C, JoiningType::RightJoining),
    (0x075C, 0x076B, JoiningType::DualJoining),
    (0x076B, 0x076D, JoiningType::RightJoining),
    (0x076D, 0x0771, JoiningType::DualJoining),
    (0x0771, 0x0772, JoiningType::RightJoining),
    (0x0772, 0x0773, JoiningType::DualJoining),
    (0x0773, 0x0775, JoiningType::RightJoining),
    (0x0775, 0x0778, JoiningType::DualJoining),
    (0x0778, 0x077A, JoiningType::RightJoining),
    (0x077A, 0x0780, JoiningType::DualJoining),
    (0x07A6, 0x07B1, JoiningType::Transparent),
    (0x07CA, 0x07EB, JoiningType::DualJoining),
    (0x07EB, 0x07F4, JoiningType::Transparent),
    (0x07FA, 0x07FB, JoiningType::JoinCausing),
    (0x07FD, 0x07FE, JoiningType::Transparent),
    (0x0816, 0x081A, JoiningType::Transparent),
    (0x081B, 0x0824, JoiningType::Transparent),
    (0x0825, 0x0828, JoiningType::Transparent),
    (0x0829, 0x082E, JoiningType::Transparent),
    (0x0840, 0x0841, JoiningType::RightJoining),
    (0x0841, 0x0846, JoiningType::DualJoining),
    (0x0846, 0x0848, JoiningType::RightJoining),
    (0x0848, 0x0849, JoiningType::DualJoining),
    (0x0849, 0x084A, JoiningType::RightJoining),
    (0x084A, 0x0854, JoiningType::DualJoining),
    (0x0854, 0x0855, JoiningType::RightJoining),
    (0x0855, 0x0856, JoiningType::DualJoining),
    (0x0856, 0x0859, JoiningType::RightJoining),
    (0x0859, 0x085C, JoiningType::Transparent),
    (0x0860, 0x0861, JoiningType::DualJoining),
    (0x0862, 0x0866, JoiningType::DualJoining),
    (0x0867, 0x0868, JoiningType::RightJoining),
    (0x0868, 0x0869, JoiningType::DualJoining),
    (0x0869, 0x086B, JoiningType::RightJoining),
    (0x0870, 0x0883, JoiningType::RightJoining),
    (0x0883, 0x0886, JoiningType::JoinCausing),
    (0x0886, 0x0887, JoiningType::DualJoining),
    (0x0889, 0x088E, JoiningType::DualJoining),
    (0x088E, 0x088F, JoiningType::RightJoining),
    (0x088F, 0x0890, JoiningType::DualJoining),
    (0x0897, 0x08A0, JoiningType::Transparent),
    (0x08A0, 0x08AA, JoiningType::DualJoining),
    (0x08AA, 0x08AD, JoiningType::RightJoining),
    (0x08AE, 0x08AF, JoiningType::RightJoining),
    (0x08AF, 0x08B1, JoiningType::DualJoining),
    (0x08B1, 0x08B3, JoiningType::RightJoining),
    (0x08B3, 0x08B9, JoiningType::DualJoining),
    (0x08B9, 0x08BA, JoiningType::RightJoining),
    (0x08BA, 0x08C9, JoiningType::DualJoining),
    (0x08CA, 0x08E2, JoiningType::Transparent),
    (0x08E3, 0x0903, JoiningType::Transparent),
    (0x093A, 0x093B, JoiningType::Transparent),
    (0x093C, 0x093D, JoiningType::Transparent),
    (0x0941, 0x0949, JoiningType::Transparent),
    (0x094D, 0x094E, JoiningType::Transparent),
    (0x0951, 0x0958, JoiningType::Transparent),
    (0x0962, 0x0964, JoiningType::Transparent),
    (0x0981, 0x0982, JoiningType::Transparent),
    (0x09BC, 0x09BD, JoiningType::Transparent),
    (0x09C1, 0x09C5, JoiningType::Transparent),
    (0x09CD, 0x09CE, JoiningType::Transparent),
    (0x09E2, 0x09E4, JoiningType::Transparent),
    (0x09FE, 0x09FF, JoiningType::Transparent),
    (0x0A01, 0x0A03, JoiningType::Transparent),
    (0x0A3C, 0x0A3D, JoiningType::Transparent),
    (0x0A41, 0x0A43, JoiningType::Transparent),
    (0x0A47, 0x0A49, JoiningType::Transparent),
    (0x0A4B, 0x0A4E, JoiningType::Transparent),
    (0x0A51, 0x0A52, JoiningType::Transparent),
    (0x0A70, 0x0A72, JoiningType::Transparent),
    (0x0A75, 0x0A76, JoiningType::Transparent),
    (0x0A81, 0x0A83, JoiningType::Transparent),
    (0x0ABC, 0x0ABD, JoiningType::Transparent),
    (0x0AC1, 0x0AC6, JoiningType::Transparent),
    (0x0AC7, 0x0AC9, JoiningType::Transparent),
    (0x0ACD, 0x0ACE, JoiningType::Transparent),
    (0x0AE2, 0x0AE4, JoiningType::Transparent),
    (0x0AFA, 0x0B00, JoiningType::Transparent),
    (0x0B01, 0x0B02, JoiningType::Transparent),
    (0x0B3C, 0x0B3D, JoiningType::Transparent),
    (0x0B3F, 0x0B40, JoiningType::Transparent),
    (0x0B41, 0x0B45, JoiningType::Transparent),
    (0x0B4D, 0x0B4E, JoiningType::Transparent),
    (0x0B55, 0x0B57, JoiningType::Transparent),
    (0x0B62, 0x0B64, JoiningType::Transparent),
    (0x0B82, 0x0B83, JoiningType::Transparent),
    (0x0BC0, 0x0BC1, JoiningType::Transparent),
    (0x0BCD, 0x0BCE, JoiningType::Transparent),
    (0x0C00, 0x0C01, JoiningType::Transparent),
    (0x0C04, 0x0C05, JoiningType::Transparent),
    (0x0C3C, 0x0C3D, JoiningType::Transparent),
    (0x0C3E, 0x0C41, JoiningType::Transparent),
    (0x0C46, 0x0C49, JoiningType::Transparent),
    (0x0C4A, 0x0C4E, JoiningType::Transparent),
    (0x0C55, 0x0C57, JoiningType::Transparent),
    (0x0C62, 0x0C64, JoiningType::Transparent),
    (0x0C81, 0x0C82, JoiningType::Transparent),
    (0x0CBC, 0x0CBD, JoiningType::Transparent),
    (0x0CBF, 0x0CC0, JoiningType::Transparent),
    (0x0CC6, 0x0CC7, JoiningType::Transparent),
    (0x0CCC, 0x0CCE, JoiningType::Transparent),
    (0x0CE2, 0x0CE4, JoiningType::Transparent),
    (0x0D00, 0x0D02, JoiningType::Transparent),
    (0x0D3B, 0x0D3D, JoiningType::Transparent),
    (0x0D41, 0x0D45, JoiningType::Transparent),
    (0x0D4D, 0x0D4E, JoiningType::Transparent),
    (0x0D62, 0x0D64, JoiningType::Transparent),
    (0x0D81, 0x0D82, JoiningType::Transparent),
    (0x0DCA, 0x0DCB, JoiningType::Transparent),
    (0x0DD2, 0x0DD5, JoiningType::Transparent),
    (0x0DD6, 0x0DD7, JoiningType::Transparent),
    (0x0E31, 0x0E32, JoiningType::Transparent),
    (0x0E34, 0x0E3B, JoiningType::Transparent),
    (0x0E47, 0x0E4F, JoiningType::Transparent),
    (0x0EB1, 0x0EB2, JoiningType::Transparent),
    (0x0EB4, 0x0EBD, JoiningType::Transparent),
    (0x0EC8, 0x0ECF, JoiningType::Transparent),
    (0x0F18, 0x0F1A, JoiningType::Transparent),
    (0x0F35, 0x0F36, JoiningType::Transparent),
    (0x0F37, 0x0F38, JoiningType::Transparent),
    (0x0F39, 0x0F3A, JoiningType::Transparent),
    (0x0F71, 0x0F7F, JoiningType::Transparent),
    (0x0F80, 0x0F85, JoiningType::Transparent),
    (0x0F86, 0x0F88, JoiningType::Transparent),
    (0x0F8D, 0x0F98, JoiningType::Transparent),
    (0x0F99, 0x0FBD, JoiningType::Transparent),
    (0x0FC6, 0x0FC7, JoiningType::Transparent),
    (0x102D, 0x1031, JoiningType::Transparent),
    (0x1032, 0x1038, JoiningType::Transparent),
    (0x1039, 0x103B, JoiningType::Transparent),
    (0x103D, 0x103F, JoiningType::Transparent),
    (0x1058, 0x105A, JoiningType::Transparent),
    (0x105E, 0x1061, JoiningType::Transparent),
    (0x1071, 0x1075, JoiningType::Transparent),
    (0x1082, 0x1083, JoiningType::Transparent),
    (0x1085, 0x1087, JoiningType::Transparent),
    (0x108D, 0x108E, JoiningType::Transparent),
    (0x109D, 0x109E, JoiningType::Transparent),
    (0x135D, 0x1360, JoiningType::Transparent),
    (0x1712, 0x1715, JoiningType::Transparent),
    (0x1732, 0x1734, JoiningType::Transparent),
    (0x1752, 0x1754, JoiningType::Transparent),
    (0x1772, 0x1774, JoiningType::Transparent),
    (0x17B4, 0x17B6, JoiningType::Transparent),
    (0x17B7, 0x17BE, JoiningType::Transparent),
    (0x17C6, 0x17C7, JoiningType::Transparent),
    (0x17C9, 0x17D4, JoiningType::Transparent),
    (0x17DD, 0x17DE, JoiningType::Transparent),
    (0x1807, 0x1808, JoiningType::DualJoining),
    (0x180A, 0x180B, JoiningType::JoinCausing),
    (0x180B, 0x180E, JoiningType::Transparent),
    (0x180F, 0x1810, JoiningType::Transparent),
    (0x1820, 0x1879, JoiningType::DualJoining),
    (0x1885, 0x1887, JoiningType::Transparent),
    (0x1887, 0x18A9, JoiningType::DualJoining),
    (0x18A9, 0x18AA, JoiningType::Transparent),
    (0x18AA, 0x18AB, JoiningType::DualJoining),
    (0x1920, 0x1923, JoiningType::Transparent),
    (0x1927, 0x1929, JoiningType::Transparent),
    (0x1932, 0x1933, JoiningType::Transparent),
    (0x1939, 0x193C, JoiningType::Transparent),
    (0x1A17, 0x1A19, JoiningType::Transparent),
    (0x1A1B, 0x1A1C, JoiningType::Transparent),
    (0x1A56, 0x1A57, JoiningType::Transparent),
    (0x1A58, 0x1A5F, JoiningType::Transparent),
    (0x1A60, 0x1A61, JoiningType::Transparent),
    (0x1A62, 0x1A63, JoiningType::Transparent),
    (0x1A65, 0x1A6D, JoiningType::Transparent),
    (0x1A73, 0x1A7D, JoiningType::Transparent),
    (0x1A7F, 0x1A80, JoiningType::Transparent),
    (0x1AB0, 0x1ADE, JoiningType::Transparent),
    (0x1AE0, 0x1AEC, JoiningType::Transparent),
    (0x1B00, 0x1B04, JoiningType::Transparent),
    (0x1B34, 0x1B35, JoiningType::Transparent),
    (0x1B36, 0x1B3B, JoiningType::Transparent),
    (0x1B3C, 0x1B3D, JoiningType::Transparent),
    (0x1B42, 0x1B43, JoiningType::Transparent),
    (0x1B6B, 0x1B74, JoiningType::Transparent),
    (0x1B80, 0x1B82, JoiningType::Transparent),
    (0x1BA2, 0x1BA6, JoiningType::Transparent),
    (0x1BA8, 0x1BAA, JoiningType::Transparent),
    (0x1BAB, 0x1BAE, JoiningType::Transparent),
    (0x1BE6, 0x1BE7, JoiningType::Transparent),
    (0x1BE8, 0x1BEA, JoiningType::Transparent),
    (0x1BED, 0x1BEE, JoiningType::Transparent),
    (0x1BEF, 0x1BF2, JoiningType::Transparent),
    (0x1C2C, 0x1C34, JoiningType::Transparent),
    (0x1C36, 0x1C38, JoiningType::Transparent),
    (0x1CD0, 0x1CD3, JoiningType::Transparent),
    (0x1CD4, 0x1CE1, JoiningType::Transparent),
    (0x1CE2, 0x1CE9, JoiningType::Transparent),
    (0x1CED, 0x1CEE, JoiningType::Transparent),
    (0x1CF4, 0x1CF5, JoiningType::Transparent),
    (0x1CF8, 0x1CFA, JoiningType::Transparent),
    (0x1DC0, 0x1E00, JoiningType::Transparent),
    (0x200B, 0x200C, JoiningType::Transparent),
    (0x200D, 0x200E, JoiningType::JoinCausing),
    (0x200E, 0x2010, JoiningType::Transparent),
    (0x202A, 0x202F, JoiningType::Transparent),
    (0x2060, 0x2065, JoiningType::Transparent),
    (0x206A, 0x2070, JoiningType::Transparent),
    (0x20D0, 0x20F1, JoiningType::Transparent),
    (0x2CEF, 0x2CF2, JoiningType::Transparent),
    (0x2D7F, 0x2D80, JoiningType::Transparent),
    (0x2DE0, 0x2E00, JoiningType::Transparent),
    (0x302A, 0x302E, JoiningType::Transparent),
    (0x3099, 0x309B, JoiningType::Transparent),
    (0xA66F, 0xA673, JoiningType::Transparent),
    (0xA674, 0xA67E, JoiningType::Transparent),
    (0xA69E, 0xA6A0, JoiningType::Transparent),
    (0xA6F0, 0xA6F2, JoiningType::Transparent),
    (0xA802, 0xA803, JoiningType::Transparent),
    (0xA806, 0xA807, JoiningType::Transparent),
    (0xA80B, 0xA80C, JoiningType::Transparent),
    (0xA825, 0xA827, JoiningType::Transparent),
    (0xA82C, 0xA82D, JoiningType::Transparent),
    (0xA840, 0xA872, JoiningType::DualJoining),
    (0xA872, 0xA873, JoiningType::LeftJoining),
    (0xA8C4, 0xA8C6, JoiningType::Transparent),
    (0xA8E0, 0xA8F2, JoiningType::Transparent),
    (0xA8FF, 0xA900, JoiningType::Transparent),
    (0xA926, 0xA92E, JoiningType::Transparent),
    (0xA947, 0xA952, JoiningType::Transparent),
    (0xA980, 0xA983, JoiningType::Transparent),
    (0xA9B3, 0xA9B4, JoiningType::Transparent),
    (0xA9B6, 0xA9BA, JoiningType::Transparent),
    (0xA9BC, 0xA9BE, JoiningType::Transparent),
    (0xA9E5, 0xA9E6, JoiningType::Transparent),
    (0xAA29, 0xAA2F, JoiningType::Transparent),
    (0xAA31, 0xAA33, JoiningType::Transparent),
    (0xAA35, 0xAA37, JoiningType::Transparent),
    (0xAA43, 0xAA44, JoiningType::Transparent),
    (0xAA4C, 0xAA4D, JoiningType::Transparent),
    (0xAA7C, 0xAA7D, JoiningType::Transparent),
    (0xAAB0, 0xAAB1, JoiningType::Transparent),
    (0xAAB2, 0xAAB5, JoiningType::Transparent),
    (0xAAB7, 0xAAB9, JoiningType::Transparent),
    (0xAABE, 0xAAC0, JoiningType::Transparent),
    (0xAAC1, 0xAAC2, JoiningType::Transparent),
    (0xAAEC, 0xAAEE, JoiningType::Transparent),
    (0xAAF6, 0xAAF7, JoiningType::Transparent),
    (0xABE5, 0xABE6, JoiningType::Transparent),
    (0xABE8, 0xABE9, JoiningType::Transparent),
    (0xABED, 0xABEE, JoiningType::Transparent),
    (0xFB1E, 0xFB1F, JoiningType::Transparent),
    (0xFE00, 0xFE10, JoiningType::Transparent),
    (0xFE20, 0xFE30, JoiningType::Transparent),
    (0xFEFF, 0xFF00, JoiningType::Transparent),
    (0xFFF9, 0xFFFC, JoiningType::Transparent),
    (0x101FD, 0x101FE, JoiningType::Transparent),
    (0x102E0, 0x102E1, JoiningType::Transparent),
    (0x10376, 0x1037B, JoiningType::Transparent),
    (0x10A01, 0x10A04, JoiningType::Transparent),
    (0x10A05, 0x10A07, JoiningType::Transparent),
    (0x10A0C, 0x10A10, JoiningType::Transparent),
    (0x10A38, 0x10A3B, JoiningType::Transparent),
    (0x10A3F, 0x10A40, JoiningType::Transparent),
    (0x10AC0, 0x10AC5, JoiningType::DualJoining),
    (0x10AC5, 0x10AC6, JoiningType::RightJoining),
    (0x10AC7, 0x10AC8, JoiningType::RightJoining),
    (0x10AC9, 0x10ACB, JoiningType::RightJoining),
    (0x10ACD, 0x10ACE, JoiningType::LeftJoining),
    (0x10ACE, 0x10AD3, JoiningType::RightJoining),
    (0x10AD3, 0x10AD7, JoiningType::DualJoining),
    (0x10AD7, 0x10AD8, JoiningType::LeftJoining),
    (0x10AD8, 0x10ADD, JoiningType::DualJoining),
    (0x10ADD, 0x10ADE, JoiningType::RightJoining),
    (0x10ADE, 0x10AE1, JoiningType::DualJoining),
    (0x10AE1, 0x10AE2, JoiningType::RightJoining),
    (0x10AE4, 0x10AE5, JoiningType::RightJoining),
    (0x10AE5, 0x10AE7, JoiningType::Transparent),
    (0x10AEB, 0x10AEF, JoiningType::DualJoining),
    (0x10AEF, 0x10AF0, JoiningType::RightJoining),
    (0x10B80, 0x10B81, JoiningType::DualJoining),
    (0x10B81, 0x10B82, JoiningType::RightJoining),
    (0x10B82, 0x10B83, JoiningType::DualJoining),
    (0x10B83, 0x10B86, JoiningType::RightJoining),
    (0x10B86, 0x10B89, JoiningType::DualJoining),
    (0x10B89, 0x10B8A, JoiningType::RightJoining),
    (0x10B8A, 0x10B8C, JoiningType::DualJoining),
    (0x10B8C, 0x10B8D, JoiningType::RightJoining),
    (0x10B8D, 0x10B8E, JoiningType::DualJoining),
    (0x10B8E, 0x10B90, JoiningType::RightJoining),
    (0x10B90, 0x10B91, JoiningType::DualJoining),
    (0x10B91, 0x10B92, JoiningType::RightJoining),
    (0x10BA9, 0x10BAD, JoiningType::RightJoining),
    (0x10BAD, 0x10BAF, JoiningType::DualJoining),
    (0x10D00, 0x10D01, JoiningType::LeftJoining),
    (0x10D01, 0x10D22, JoiningType::DualJoining),
    (0x10D22, 0x10D23, JoiningType::RightJoining),
    (0x10D23, 0x10D24, JoiningType::DualJoining),
    (0x10D24, 0x10D28, JoiningType::Transparent),
    (0x10D69, 0x10D6E, JoiningType::Transparent),
    (0x10EAB, 0x10EAD, JoiningType::Transparent),
    (0x10EC2, 0x10EC3, JoiningType::RightJoining),
    (0x10EC3, 0x10EC5, JoiningType::DualJoining),
    (0x10EC6, 0x10EC8, JoiningType::DualJoining),
    (0x10EFA, 0x10F00, JoiningType::Transparent),
    (0x10F30, 0x10F33, JoiningType::DualJoining),
    (0x10F33, 0x10F34, JoiningType::RightJoining),
    (0x10F34, 0x10F45, JoiningType::DualJoining),
    (0x10F46, 0x10F51, JoiningType::Transparent),
    (0x10F51, 0x10F54, JoiningType::DualJoining),
    (0x10F54, 0x10F55, JoiningType::RightJoining),
    (0x10F70, 0x10F74, JoiningType::DualJoining),
    (0x10F74, 0x10F76, JoiningType::RightJoining),
    (0x10F76, 0x10F82, JoiningType::DualJoining),
    (0x10F82, 0x10F86, JoiningType::Transparent),
    (0x10FB0, 0x10FB1, JoiningType::DualJoining),
    (0x10FB2, 0x10FB4, JoiningType::DualJoining),
    (0x10FB4, 0x10FB7, JoiningType::RightJoining),
    (0x10FB8, 0x10FB9, JoiningType::DualJoining),
    (0x10FB9, 0x10FBB, JoiningType::RightJoining),
    (0x10FBB, 0x10FBD, JoiningType::DualJoining),
    (0x10FBD, 0x10FBE, JoiningType::RightJoining),
    (0x10FBE, 0x10FC0, JoiningType::DualJoining),
    (0x10FC1, 0x10FC2, JoiningType::DualJoining),
    (0x10FC2, 0x10FC4, JoiningType::RightJoining),
    (0x10FC4, 0x10FC5, JoiningType::DualJoining),
    (0x10FC9, 0x10FCA, JoiningType::RightJoining),
    (0x10FCA, 0x10FCB, JoiningType::DualJoining),
    (0x10FCB, 0x10FCC, JoiningType::LeftJoining),
    (0x11001, 0x11002, JoiningType::Transparent),
    (0x11038, 0x11047, JoiningType::Transparent),
    (0x11070, 0x11071, JoiningType::Transparent),
    (0x11073, 0x11075, JoiningType::Transparent),
    (0x1107F, 0x11082, JoiningType::Transparent),
    (0x110B3, 0x110B7, JoiningType::Transparent),
    (0x110B9, 0x110BB, JoiningType::Transparent),
    (0x110C2, 0x110C3, JoiningType::Transparent),
    (0x11100, 0x11103, JoiningType::Transparent),
    (0x11127, 0x1112C, JoiningType::Transparent),
    (0x1112D, 0x11135, JoiningType::Transparent),
    (0x11173, 0x11174, JoiningType::Transparent),
    (0x11180, 0x11182, JoiningType::Transparent),
    (0x111B6, 0x111BF, JoiningType::Transparent),
    (0x111C9, 0x111CD, JoiningType::Transparent),
    (0x111CF, 0x111D0, JoiningType::Transparent),
    (0x1122F, 0x11232, JoiningType::Transparent),
    (0x11234, 0x11235, JoiningType::Transparent),
    (0x11236, 0x11238, JoiningType::Transparent),
    (0x1123E, 0x1123F, JoiningType::Transparent),
    (0x11241, 0x11242, JoiningType::Transparent),
    (0x112DF, 0x112E0, JoiningType::Transparent),
    (0x112E3, 0x112EB, JoiningType::Transparent),
    (0x11300, 0x11302, JoiningType::Transparent),
    (0x1133B, 0x1133D, JoiningType::Transparent),
    (0x11340, 0x11341, JoiningType::Transparent),
    (0x11366, 0x1136D, JoiningType::Transparent),
    (0x11370, 0x11375, JoiningType::Transparent),
    (0x113BB, 0x113C1, JoiningType::Transparent),
    (0x113CE, 0x113CF, JoiningType::Transparent),
    (0x113D0, 0x113D1, JoiningType::Transparent),
    (0x113D2, 0x113D3, JoiningType::Transparent),
    (0x113E1, 0x113E3, JoiningType::Transparent),
    (0x11438, 0x11440, JoiningType::Transparent),
    (0x11442, 0x11445, JoiningType::Transparent),
    (0x11446, 0x11447, JoiningType::Transparent),
    (0x1145E, 0x1145F, JoiningType::Transparent),
    (0x114B3, 0x114B9, JoiningType::Transparent),
    (0x114BA, 0x114BB, JoiningType::Transparent),
    (0x114BF, 0x114C1, JoiningType::Transparent),
    (0x114C2, 0x114C4, JoiningType::Transparent),
    (0x115B2, 0x115B6, JoiningType::Transparent),
    (0x115BC, 0x115BE, JoiningType::Transparent),
    (0x115BF, 0x115C1, JoiningType::Transparent),
    (0x115DC, 0x115DE, JoiningType::Transparent),
    (0x11633, 0x1163B, JoiningType::Transparent),
    (0x1163D, 0x1163E, JoiningType::Transparent),
    (0x1163F, 0x11641, JoiningType::Transparent),
    (0x116AB, 0x116AC, JoiningType::Transparent),
    (0x116AD, 0x116AE, JoiningType::Transparent),
    (0x116B0, 0x116B6, JoiningType::Transparent),
    (0x116B7, 0x116B8, JoiningType::Transparent),
    (0x1171D, 0x1171E, JoiningType::Transparent),
    (0x1171F, 0x11720, JoiningType::Transparent),
    (0x11722, 0x11726, JoiningType::Transparent),
    (0x11727, 0x1172C, JoiningType::Transparent),
    (0x1182F, 0x11838, JoiningType::Transparent),
    (0x11839, 0x1183B, JoiningType::Transparent),
    (0x1193B, 0x1193D, JoiningType::Transparent),
    (0x1193E, 0x1193F, JoiningType::Transparent),
    (0x11943, 0x11944, JoiningType::Transparent),
    (0x119D4, 0x119D8, JoiningType::Transparent),
    (0x119DA, 0x119DC, JoiningType::Transparent),
    (0x119E0, 0x119E1, JoiningType::Transparent),
    (0x11A01, 0x11A0B, JoiningType::Transparent),
    (0x11A33, 0x11A39, JoiningType::Transparent),
    (0x11A3B, 0x11A3F, JoiningType::Transparent),
    (0x11A47, 0x11A48, JoiningType::Transparent),
    (0x11A51, 0x11A57, JoiningType::Transparent),
    (0x11A59, 0x11A5C, JoiningType::Transparent),
    (0x11A8A, 0x11A97, JoiningType::Transparent),
    (0x11A98, 0x11A9A, JoiningType::Transparent),
    (0x11B60, 0x11B61, JoiningType::Transparent),
    (0x11B62, 0x11B65, JoiningType::Transparent),
    (0x11B66, 0x11B67, JoiningType::Transparent),
    (0x11C30, 0x11C37, JoiningType::Transparent),
    (0x11C38, 0x11C3E, JoiningType::Transparent),
    (0x11C3F, 0x11C40, JoiningType::Transparent),
    (0x11C92, 0x11CA8, JoiningType::Transparent),
    (0x11CAA, 0x11CB1, JoiningType::Transparent),
    (0x11CB2, 0x11CB4, JoiningType::Transparent),
    (0x11CB5, 0x11CB7, JoiningType::Transparent),
    (0x11D31, 0x11D37, JoiningType::Transparent),
    (0x11D3A, 0x11D3B, JoiningType::Transparent),
    (0x11D3C, 0x11D3E, JoiningType::Transparent),
    (0x11D3F, 0x11D46, JoiningType::Transparent),
    (0x11D47, 0x11D48, JoiningType::Transparent),
    (0x11D90, 0x11D92, JoiningType::Transparent),
    (0x11D95, 0x11D96, JoiningType::Transparent),
    (0x11D97, 0x11D98, JoiningType::Transparent),
    (0x11EF3, 0x11EF5, JoiningType::Transparent),
    (0x11F00, 0x11F02, JoiningType::Transparent),
    (0x11F36, 0x11F3B, JoiningType::Transparent),
    (0x11F40, 0x11F41, JoiningType::Transparent),
    (0x11F42, 0x11F43, JoiningType::Transparent),
    (0x11F5A, 0x11F5B, JoiningType::Transparent),
    (0x13430, 0x13441, JoiningType::Transparent),
    (0x13447, 0x13456, JoiningType::Transparent),
    (0x1611E, 0x1612A, JoiningType::Transparent),
    (0x1612D, 0x16130, JoiningType::Transparent),
    (0x16AF0, 0x16AF5, JoiningType::Transparent),
    (0x16B30, 0x16B37, JoiningType::Transparent),
    (0x16F4F, 0x16F50, JoiningType::Transparent),
    (0x16F8F, 0x16F93, JoiningType::Transparent),
    (0x16FE4, 0x16FE5, JoiningType::Transparent),
    (0x1BC9D, 0x1BC9F, JoiningType::Transparent),
    (0x1BCA0, 0x1BCA4, JoiningType::Transparent),
    (0x1CF00, 0x1CF2E, JoiningType::Transparent),
    (0x1CF30, 0x1CF47, JoiningType::Transparent),
    (0x1D167, 0x1D16A, JoiningType::Transparent),
    (0x1D173, 0x1D183, JoiningType::Transparent),
    (0x1D185, 0x1D18C, JoiningType::Transparent),
    (0x1D1AA, 0x1D1AE, JoiningType::Transparent),
    (0x1D242, 0x1D245, JoiningType::Transparent),
    (0x1DA00, 0x1DA37, JoiningType::Transparent),
    (0x1DA3B, 0x1DA6D, JoiningType::Transparent),
    (0x1DA75, 0x1DA76, JoiningType::Transparent),
    (0x1DA84, 0x1DA85, JoiningType::Transparent),
    (0x1DA9B, 0x1DAA0, JoiningType::Transparent),
    (0x1DAA1, 0x1DAB0, JoiningType::Transparent),
    (0x1E000, 0x1E007, JoiningType::Transparent),
    (0x1E008, 0x1E019, JoiningType::Transparent),
    (0x1E01B, 0x1E022, JoiningType::Transparent),
    (0x1E023, 0x1E025, JoiningType::Transparent),
    (0x1E026, 0x1E02B, JoiningType::Transparent),
    (0x1E08F, 0x1E090, JoiningType::Transparent),
    (0x1E130, 0x1E137, JoiningType::Transparent),
    (0x1E2AE, 0x1E2AF, JoiningType::Transparent),
    (0x1E2EC, 0x1E2F0, JoiningType::Transparent),
    (0x1E4EC, 0x1E4F0, JoiningType::Transparent),
    (0x1E5EE, 0x1E5F0, JoiningType::Transparent),
    (0x1E6E3, 0x1E6E4, JoiningType::Transparent),
    (0x1E6E6, 0x1E6E7, JoiningType::Transparent),
    (0x1E6EE, 0x1E6F0, JoiningType::Transparent),
    (0x1E6F5, 0x1E6F6, JoiningType::Transparent),
    (0x1E8D0, 0x1E8D7, JoiningType::Transparent),
    (0x1E900, 0x1E944, JoiningType::DualJoining),
    (0x1E944, 0x1E94C, JoiningType::Transparent),
    (0xE0001, 0xE0002, JoiningType::Transparent),
    (0xE0020, 0xE0080, JoiningType::Transparent),
    (0xE0100, 0xE01F0, JoiningType::Transparent),
];
