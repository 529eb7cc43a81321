// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! RFC 5892 codepoint classes and combining mark ranges.
//!
//! Generated offline. Ranges are half-open and sorted. Do not edit by
//! hand.

/// How RFC 5892 classifies a codepoint for use in a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodepointClass {
    /// Permitted unconditionally.
    Pvalid,
    /// Permitted when its joiner context rule holds.
    ContextJ,
    /// Permitted when its punctuation or digit context rule holds.
    ContextO,
    /// Not permitted.
    Disallowed,
}

/// Classify a codepoint for label validation.
pub fn codepoint_class(c: char) -> CodepointClass {
    let cp = c as u32;
    if contains(PVALID, cp) {
        CodepointClass::Pvalid
    } else if contains(CONTEXTJ, cp) {
        CodepointClass::ContextJ
    } else if contains(CONTEXTO, cp) {
        CodepointClass::ContextO
    } else {
        CodepointClass::Disallowed
    }
}

/// True for general categories Mn, Mc, and Me.
pub fn is_combining_mark(c: char) -> bool {
    contains(COMBINING_MARKS, c as u32)
}

fn contains(ranges: &[(u32, u32)], cp: u32) -> bool {
    let index = ranges.partition_point(|&(start, _)| start <= cp);
    index > 0 && cp < ranges[index - 1].1
}

#[rustfmt::skip]
static PVALID: &[(u32, u32)] = &[
    (0x002D, 0x002E),
    (0x0030, 0x003A),
    (0x0061, 0x007B),
    (0x00DF, 0x00F7),
    (0x00F8, 0x0100),
    (0x0101, 0x0102),
    (0x0103, 0x0104),
    (0x0105, 0x0106),
    (0x0107, 0x0108),
    (0x0109, 0x010A),
    (0x010B, 0x010C),
    (0x010D, 0x010E),
    (0x010F, 0x0110),
    (0x0111, 0x0112),
    (0x0113, 0x0114),
    (0x0115, 0x0116),
    (0x0117, 0x0118),
    (0x0119, 0x011A),
    (0x011B, 0x011C),
    (0x011D, 0x011E),
    (0x011F, 0x0120),
    (0x0121, 0x0122),
    (0x0123, 0x0124),
    (0x0125, 0x0126),
    (0x0127, 0x0128),
    (0x0129, 0x012A),
    (0x012B, 0x012C),
    (0x012D, 0x012E),
    (0x012F, 0x0130),
    (0x0131, 0x0132),
    (0x0135, 0x0136),
    (0x0137, 0x0139),
    (0x013A, 0x013B),
    (0x013C, 0x013D),
    (0x013E, 0x013F),
    (0x0142, 0x0143),
    (0x0144, 0x0145),
    (0x0146, 0x0147),
    (0x0148, 0x0149),
    (0x014B, 0x014C),
    (0x014D, 0x014E),
    (0x014F, 0x0150),
    (0x0151, 0x0152),
    (0x0153, 0x0154),
    (0x0155, 0x0156),
    (0x0157, 0x0158),
    (0x0159, 0x015A),
    (0x015B, 0x015C),
    (0x015D, 0x015E),
    (0x015F, 0x0160),
    (0x0161, 0x0162),
    (0x0163, 0x0164),
    (0x0165, 0x0166),
    (0x0167, 0x0168),
    (0x0169, 0x016A),
    (0x016B, 0x016C),
    (0x016D, 0x016E),
    (0x016F, 0x0170),
    (0x0171, 0x0172),
    (0x0173, 0x0174),
    (0x0175, 0x0176),
    (0x0177, 0x0178),
    (0x017A, 0x017B),
    (0x017C, 0x017D),
    (0x017E, 0x017F),
    (0x0180, 0x0181),
    (0x0183, 0x0184),
    (0x0185, 0x0186),
    (0x0188, 0x0189),
    (0x018C, 0x018E),
    (0x0192, 0x0193),
    (0x0195, 0x0196),
    (0x0199, 0x019C),
    (0x019E, 0x019F),
    (0x01A1, 0x01A2),
    (0x01A3, 0x01A4),
    (0x01A5, 0x01A6),
    (0x01A8, 0x01A9),
    (0x01AA, 0x01AC),
    (0x01AD, 0x01AE),
    (0x01B0, 0x01B1),
    (0x01B4, 0x01B5),
    (0x01B6, 0x01B7),
    (0x01B9, 0x01BC),
    (0x01BD, 0x01C4),
    (0x01CE, 0x01CF),
    (0x01D0, 0x01D1),
    (0x01D2, 0x01D3),
    (0x01D4, 0x01D5),
    (0x01D6, 0x01D7),
    (0x01D8, 0x01D9),
    (0x01DA, 0x01DB),
    (0x01DC, 0x01DE),
    (0x01DF, 0x01E0),
    (0x01E1, 0x01E2),
    (0x01E3, 0x01E4),
    (0x01E5, 0x01E6),
    (0x01E7, 0x01E8),
    (0x01E9, 0x01EA),
    (0x01EB, 0x01EC),
    (0x01ED, 0x01EE),
    (0x01EF, 0x01F1),
    (0x01F5, 0x01F6),
    (0x01F9, 0x01FA),
    (0x01FB, 0x01FC),
    (0x01FD, 0x01FE),
    (0x01FF, 0x0200),
    (0x0201, 0x0202),
    (0x0203, 0x0204),
    (0x0205, 0x0206),
    (0x0207, 0x0208),
    (0x0209, 0x020A),
    (0x020B, 0x020C),
    (0x020D, 0x020E),
    (0x020F, 0x0210),
    (0x0211, 0x0212),
    (0x0213, 0x0214),
    (0x0215, 0x0216),
    (0x0217, 0x0218),
    (0x0219, 0x021A),
    (0x021B, 0x021C),
    (0x021D, 0x021E),
    (0x021F, 0x0220),
    (0x0221, 0x0222),
    (0x0223, 0x0224),
    (0x0225, 0x0226),
    (0x0227, 0x0228),
    (0x0229, 0x022A),
    (0x022B, 0x022C),
    (0x022D, 0x022E),
    (0x022F, 0x0230),
    (0x0231, 0x0232),
    (0x0233, 0x023A),
    (0x023C, 0x023D),
    (0x023F, 0x0241),
    (0x0242, 0x0243),
    (0x0247, 0x0248),
    (0x0249, 0x024A),
    (0x024B, 0x024C),
    (0x024D, 0x024E),
    (0x024F, 0x02B0),
    (0x02B9, 0x02C2),
    (0x02C6, 0x02D2),
    (0x02EC, 0x02ED),
    (0x02EE, 0x02EF),
    (0x0300, 0x0340),
    (0x0342, 0x0343),
    (0x0346, 0x034F),
    (0x0350, 0x0370),
    (0x0371, 0x0372),
    (0x0373, 0x0374),
    (0x0377, 0x0378),
    (0x037B, 0x037E),
    (0x0390, 0x0391),
    (0x03AC, 0x03CF),
    (0x03D7, 0x03D8),
    (0x03D9, 0x03DA),
    (0x03DB, 0x03DC),
    (0x03DD, 0x03DE),
    (0x03DF, 0x03E0),
    (0x03E1, 0x03E2),
    (0x03E3, 0x03E4),
    (0x03E5, 0x03E6),
    (0x03E7, 0x03E8),
    (0x03E9, 0x03EA),
    (0x03EB, 0x03EC),
    (0x03ED, 0x03EE),
    (0x03EF, 0x03F0),
    (0x03F3, 0x03F4),
    (0x03F8, 0x03F9),
    (0x03FB, 0x03FD),
    (0x0430, 0x0460),
    (0x0461, 0x0462),
    (0x0463, 0x0464),
    (0x0465, 0x0466),
    (0x0467, 0x0468),
    (0x0469, 0x046A),
    (0x046B, 0x046C),
    (0x046D, 0x046E),
    (0x046F, 0x0470),
    (0x0471, 0x0472),
    (0x0473, 0x0474),
    (0x0475, 0x0476),
    (0x0477, 0x0478),
    (0x0479, 0x047A),
    (0x047B, 0x047C),
    (0x047D, 0x047E),
    (0x047F, 0x0480),
    (0x0481, 0x0482),
    (0x0483, 0x0488),
    (0x048B, 0x048C),
    (0x048D, 0x048E),
    (0x048F, 0x0490),
    (0x0491, 0x0492),
    (0x0493, 0x0494),
    (0x0495, 0x0496),
    (0x0497, 0x0498),
    (0x0499, 0x049A),
    (0x049B, 0x049C),
    (0x049D, 0x049E),
    (0x049F, 0x04A0),
    (0x04A1, 0x04A2),
    (0x04A3, 0x04A4),
    (0x04A5, 0x04A6),
    (0x04A7, 0x04A8),
    (0x04A9, 0x04AA),
    (0x04AB, 0x04AC),
    (0x04AD, 0x04AE),
    (0x04AF, 0x04B0),
    (0x04B1, 0x04B2),
    (0x04B3, 0x04B4),
    (0x04B5, 0x04B6),
    (0x04B7, 0x04B8),
    (0x04B9, 0x04BA),
    (0x04BB, 0x04BC),
    (0x04BD, 0x04BE),
    (0x04BF, 0x04C0),
    (0x04C2, 0x04C3),
    (0x04C4, 0x04C5),
    (0x04C6, 0x04C7),
    (0x04C8, 0x04C9),
    (0x04CA, 0x04CB),
    (0x04CC, 0x04CD),
    (0x04CE, 0x04D0),
    (0x04D1, 0x04D2),
    (0x04D3, 0x04D4),
    (0x04D5, 0x04D6),
    (0x04D7, 0x04D8),
    (0x04D9, 0x04DA),
    (0x04DB, 0x04DC),
    (0x04DD, 0x04DE),
    (0x04DF, 0x04E0),
    (0x04E1, 0x04E2),
    (0x04E3, 0x04E4),
    (0x04E5, 0x04E6),
    (0x04E7, 0x04E8),
    (0x04E9, 0x04EA),
    (0x04EB, 0x04EC),
    (0x04ED, 0x04EE),
    (0x04EF, 0x04F0),
    (0x04F1, 0x04F2),
    (0x04F3, 0x04F4),
    (0x04F5, 0x04F6),
    (0x04F7, 0x04F8),
    (0x04F9, 0x04FA),
    (0x04FB, 0x04FC),
    (0x04FD, 0x04FE),
    (0x04FF, 0x0500),
    (0x0501, 0x0502),
    (0x0503, 0x0504),
    (0x0505, 0x0506),
    (0x0507, 0x0508),
    (0x0509, 0x050A),
    (0x050B, 0x050C),
    (0x050D, 0x050E),
    (0x050F, 0x0510),
    (0x0511, 0x0512),
    (0x0513, 0x0514),
    (0x0515, 0x0516),
    (0x0517, 0x0518),
    (0x0519, 0x051A),
    (0x051B, 0x051C),
    (0x051D, 0x051E),
    (0x051F, 0x0520),
    (0x0521, 0x0522),
    (0x0523, 0x0524),
    (0x0525, 0x0526),
    (0x0527, 0x0528),
    (0x0529, 0x052A),
    (0x052B, 0x052C),
    (0x052D, 0x052E),
    (0x052F, 0x0530),
    (0x0559, 0x055A),
    (0x0560, 0x0587),
    (0x0588, 0x0589),
    (0x0591, 0x05BE),
    (0x05BF, 0x05C0),
    (0x05C1, 0x05C3),
    (0x05C4, 0x05C6),
    (0x05C7, 0x05C8),
    (0x05D0, 0x05EB),
    (0x05EF, 0x05F3),
    (0x0610, 0x061B),
    (0x0620, 0x0640),
    (0x0641, 0x0660),
    (0x066E, 0x0675),
    (0x0679, 0x06D4),
    (0x06D5, 0x06DD),
    (0x06DF, 0x06E9),
    (0x06EA, 0x06F0),
    (0x06FA, 0x0700),
    (0x0710, 0x074B),
    (0x074D, 0x07B2),
    (0x07C0, 0x07F6),
    (0x07FD, 0x07FE),
    (0x0800, 0x082E),
    (0x0840, 0x085C),
    (0x0860, 0x086B),
    (0x0870, 0x0888),
    (0x0889, 0x0890),
    (0x0897, 0x08E2),
    (0x08E3, 0x0958),
    (0x0960, 0x0964),
    (0x0966, 0x0970),
    (0x0971, 0x0984),
    (0x0985, 0x098D),
    (0x098F, 0x0991),
    (0x0993, 0x09A9),
    (0x09AA, 0x09B1),
    (0x09B2, 0x09B3),
    (0x09B6, 0x09BA),
    (0x09BC, 0x09C5),
    (0x09C7, 0x09C9),
    (0x09CB, 0x09CF),
    (0x09D7, 0x09D8),
    (0x09E0, 0x09E4),
    (0x09E6, 0x09F2),
    (0x09FC, 0x09FD),
    (0x09FE, 0x09FF),
    (0x0A01, 0x0A04),
    (0x0A05, 0x0A0B),
    (0x0A0F, 0x0A11),
    (0x0A13, 0x0A29),
    (0x0A2A, 0x0A31),
    (0x0A32, 0x0A33),
    (0x0A35, 0x0A36),
    (0x0A38, 0x0A3A),
    (0x0A3C, 0x0A3D),
    (0x0A3E, 0x0A43),
    (0x0A47, 0x0A49),
    (0x0A4B, 0x0A4E),
    (0x0A51, 0x0A52),
    (0x0A5C, 0x0A5D),
    (0x0A66, 0x0A76),
    (0x0A81, 0x0A84),
    (0x0A85, 0x0A8E),
    (0x0A8F, 0x0A92),
    (0x0A93, 0x0AA9),
    (0x0AAA, 0x0AB1),
    (0x0AB2, 0x0AB4),
    (0x0AB5, 0x0ABA),
    (0x0ABC, 0x0AC6),
    (0x0AC7, 0x0ACA),
    (0x0ACB, 0x0ACE),
    (0x0AD0, 0x0AD1),
    (0x0AE0, 0x0AE4),
    (0x0AE6, 0x0AF0),
    (0x0AF9, 0x0B00),
    (0x0B01, 0x0B04),
    (0x0B05, 0x0B0D),
    (0x0B0F, 0x0B11),
    (0x0B13, 0x0B29),
    (0x0B2A, 0x0B31),
    (0x0B32, 0x0B34),
    (0x0B35, 0x0B3A),
    (0x0B3C, 0x0B45),
    (0x0B47, 0x0B49),
    (0x0B4B, 0x0B4E),
    (0x0B55, 0x0B58),
    (0x0B5F, 0x0B64),
    (0x0B66, 0x0B70),
    (0x0B71, 0x0B72),
    (0x0B82, 0x0B84),
    (0x0B85, 0x0B8B),
    (0x0B8E, 0x0B91),
    (0x0B92, 0x0B96),
    (0x0B99, 0x0B9B),
    (0x0B9C, 0x0B9D),
    (0x0B9E, 0x0BA0),
    (0x0BA3, 0x0BA5),
    (0x0BA8, 0x0BAB),
    (0x0BAE, 0x0BBA),
    (0x0BBE, 0x0BC3),
    (0x0BC6, 0x0BC9),
    (0x0BCA, 0x0BCE),
    (0x0BD0, 0x0BD1),
    (0x0BD7, 0x0BD8),
    (0x0BE6, 0x0BF0),
    (0x0C00, 0x0C0D),
    (0x0C0E, 0x0C11),
    (0x0C12, 0x0C29),
    (0x0C2A, 0x0C3A),
    (0x0C3C, 0x0C45),
    (0x0C46, 0x0C49),
    (0x0C4A, 0x0C4E),
    (0x0C55, 0x0C57),
    (0x0C58, 0x0C5B),
    (0x0C5C, 0x0C5E),
    (0x0C60, 0x0C64),
    (0x0C66, 0x0C70),
    (0x0C80, 0x0C84),
    (0x0C85, 0x0C8D),
    (0x0C8E, 0x0C91),
    (0x0C92, 0x0CA9),
    (0x0CAA, 0x0CB4),
    (0x0CB5, 0x0CBA),
    (0x0CBC, 0x0CC5),
    (0x0CC6, 0x0CC9),
    (0x0CCA, 0x0CCE),
    (0x0CD5, 0x0CD7),
    (0x0CDC, 0x0CDF),
    (0x0CE0, 0x0CE4),
    (0x0CE6, 0x0CF0),
    (0x0CF1, 0x0CF4),
    (0x0D00, 0x0D0D),
    (0x0D0E, 0x0D11),
    (0x0D12, 0x0D45),
    (0x0D46, 0x0D49),
    (0x0D4A, 0x0D4F),
    (0x0D54, 0x0D58),
    (0x0D5F, 0x0D64),
    (0x0D66, 0x0D70),
    (0x0D7A, 0x0D80),
    (0x0D81, 0x0D84),
    (0x0D85, 0x0D97),
    (0x0D9A, 0x0DB2),
    (0x0DB3, 0x0DBC),
    (0x0DBD, 0x0DBE),
    (0x0DC0, 0x0DC7),
    (0x0DCA, 0x0DCB),
    (0x0DCF, 0x0DD5),
    (0x0DD6, 0x0DD7),
    (0x0DD8, 0x0DE0),
    (0x0DE6, 0x0DF0),
    (0x0DF2, 0x0DF4),
    (0x0E01, 0x0E33),
    (0x0E34, 0x0E3B),
    (0x0E40, 0x0E4F),
    (0x0E50, 0x0E5A),
    (0x0E81, 0x0E83),
    (0x0E84, 0x0E85),
    (0x0E86, 0x0E8B),
    (0x0E8C, 0x0EA4),
    (0x0EA5, 0x0EA6),
    (0x0EA7, 0x0EB3),
    (0x0EB4, 0x0EBE),
    (0x0EC0, 0x0EC5),
    (0x0EC6, 0x0EC7),
    (0x0EC8, 0x0ECF),
    (0x0ED0, 0x0EDA),
    (0x0EDE, 0x0EE0),
    (0x0F00, 0x0F01),
    (0x0F0B, 0x0F0C),
    (0x0F18, 0x0F1A),
    (0x0F20, 0x0F2A),
    (0x0F35, 0x0F36),
    (0x0F37, 0x0F38),
    (0x0F39, 0x0F3A),
    (0x0F3E, 0x0F43),
    (0x0F44, 0x0F48),
    (0x0F49, 0x0F4D),
    (0x0F4E, 0x0F52),
    (0x0F53, 0x0F57),
    (0x0F58, 0x0F5C),
    (0x0F5D, 0x0F69),
    (0x0F6A, 0x0F6D),
    (0x0F71, 0x0F73),
    (0x0F74, 0x0F75),
    (0x0F7A, 0x0F81),
    (0x0F82, 0x0F85),
    (0x0F86, 0x0F93),
    (0x0F94, 0x0F98),
    (0x0F99, 0x0F9D),
    (0x0F9E, 0x0FA2),
    (0x0FA3, 0x0FA7),
    (0x0FA8, 0x0FAC),
    (0x0FAD, 0x0FB9),
    (0x0FBA, 0x0FBD),
    (0x0FC6, 0x0FC7),
    (0x1000, 0x104A),
    (0x1050, 0x109E),
    (0x10D0, 0x10FB),
    (0x10FD, 0x1100),
    (0x1200, 0x1249),
    (0x124A, 0x124E),
    (0x1250, 0x1257),
    (0x1258, 0x1259),
    (0x125A, 0x125E),
    (0x1260, 0x1289),
    (0x128A, 0x128E),
    (0x1290, 0x12B1),
    (0x12B2, 0x12B6),
    (0x12B8, 0x12BF),
    (0x12C0, 0x12C1),
    (0x12C2, 0x12C6),
    (0x12C8, 0x12D7),
    (0x12D8, 0x1311),
    (0x1312, 0x1316),
    (0x1318, 0x135B),
    (0x135D, 0x1360),
    (0x1380, 0x1390),
    (0x13A0, 0x13F6),
    (0x1401, 0x166D),
    (0x166F, 0x1680),
    (0x1681, 0x169B),
    (0x16A0, 0x16EB),
    (0x16F1, 0x16F9),
    (0x1700, 0x1716),
    (0x171F, 0x1735),
    (0x1740, 0x1754),
    (0x1760, 0x176D),
    (0x176E, 0x1771),
    (0x1772, 0x1774),
    (0x1780, 0x17B4),
    (0x17B6, 0x17D4),
    (0x17D7, 0x17D8),
    (0x17DC, 0x17DE),
    (0x17E0, 0x17EA),
    (0x1810, 0x181A),
    (0x1820, 0x1879),
    (0x1880, 0x18AB),
    (0x18B0, 0x18F6),
    (0x1900, 0x191F),
    (0x1920, 0x192C),
    (0x1930, 0x193C),
    (0x1946, 0x196E),
    (0x1970, 0x1975),
    (0x1980, 0x19AC),
    (0x19B0, 0x19CA),
    (0x19D0, 0x19DA),
    (0x1A00, 0x1A1C),
    (0x1A20, 0x1A5F),
    (0x1A60, 0x1A7D),
    (0x1A7F, 0x1A8A),
    (0x1A90, 0x1A9A),
    (0x1AA7, 0x1AA8),
    (0x1AB0, 0x1ABE),
    (0x1ABF, 0x1ADE),
    (0x1AE0, 0x1AEC),
    (0x1B00, 0x1B4D),
    (0x1B50, 0x1B5A),
    (0x1B6B, 0x1B74),
    (0x1B80, 0x1BF4),
    (0x1C00, 0x1C38),
    (0x1C40, 0x1C4A),
    (0x1C4D, 0x1C7E),
    (0x1C8A, 0x1C8B),
    (0x1CD0, 0x1CD3),
    (0x1CD4, 0x1CFB),
    (0x1D00, 0x1D2C),
    (0x1D2F, 0x1D30),
    (0x1D3B, 0x1D3C),
    (0x1D4E, 0x1D4F),
    (0x1D6B, 0x1D78),
    (0x1D79, 0x1D9B),
    (0x1DC0, 0x1E00),
    (0x1E01, 0x1E02),
    (0x1E03, 0x1E04),
    (0x1E05, 0x1E06),
    (0x1E07, 0x1E08),
    (0x1E09, 0x1E0A),
    (0x1E0B, 0x1E0C),
    (0x1E0D, 0x1E0E),
    (0x1E0F, 0x1E10),
    (0x1E11, 0x1E12),
    (0x1E13, 0x1E14),
    (0x1E15, 0x1E16),
    (0x1E17, 0x1E18),
    (0x1E19, 0x1E1A),
    (0x1E1B, 0x1E1C),
    (0x1E1D, 0x1E1E),
    (0x1E1F, 0x1E20),
    (0x1E21, 0x1E22),
    (0x1E23, 0x1E24),
    (0x1E25, 0x1E26),
    (0x1E27, 0x1E28),
    (0x1E29, 0x1E2A),
    (0x1E2B, 0x1E2C),
    (0x1E2D, 0x1E2E),
    (0x1E2F, 0x1E30),
    (0x1E31, 0x1E32),
    (0x1E33, 0x1E34),
    (0x1E35, 0x1E36),
    (0x1E37, 0x1E38),
    (0x1E39, 0x1E3A),
    (0x1E3B, 0x1E3C),
    (0x1E3D, 0x1E3E),
    (0x1E3F, 0x1E40),
    (0x1E41, 0x1E42),
    (0x1E43, 0x1E44),
    (0x1E45, 0x1E46),
    (0x1E47, 0x1E48),
    (0x1E49, 0x1E4A),
    (0x1E4B, 0x1E4C),
    (0x1E4D, 0x1E4E),
    (0x1E4F, 0x1E50),
    (0x1E51, 0x1E52),
    (0x1E53, 0x1E54),
    (0x1E55, 0x1E56),
    (0x1E57, 0x1E58),
    (0x1E59, 0x1E5A),
    (0x1E5B, 0x1E5C),
    (0x1E5D, 0x1E5E),
    (0x1E5F, 0x1E60),
    (0x1E61, 0x1E62),
    (0x1E63, 0x1E64),
    (0x1E65, 0x1E66),
    (0x1E67, 0x1E68),
    (0x1E69, 0x1E6A),
    (0x1E6B, 0x1E6C),
    (0x1E6D, 0x1E6E),
    (0x1E6F, 0x1E70),
    (0x1E71, 0x1E72),
    (0x1E73, 0x1E74),
    (0x1E75, 0x1E76),
    (0x1E77, 0x1E78),
    (0x1E79, 0x1E7A),
    (0x1E7B, 0x1E7C),
    (0x1E7D, 0x1E7E),
    (0x1E7F, 0x1E80),
    (0x1E81, 0x1E82),
    (0x1E83, 0x1E84),
    (0x1E85, 0x1E86),
    (0x1E87, 0x1E88),
    (0x1E89, 0x1E8A),
    (0x1E8B, 0x1E8C),
    (0x1E8D, 0x1E8E),
    (0x1E8F, 0x1E90),
    (0x1E91, 0x1E92),
    (0x1E93, 0x1E94),
    (0x1E95, 0x1E9A),
    (0x1E9C, 0x1E9E),
    (0x1E9F, 0x1EA0),
    (0x1EA1, 0x1EA2),
    (0x1EA3, 0x1EA4),
    (0x1EA5, 0x1EA6),
    (0x1EA7, 0x1EA8),
    (0x1EA9, 0x1EAA),
    (0x1EAB, 0x1EAC),
    (0x1EAD, 0x1EAE),
    (0x1EAF, 0x1EB0),
    (0x1EB1, 0x1EB2),
    (0x1EB3, 0x1EB4),
    (0x1EB5, 0x1EB6),
    (0x1EB7, 0x1EB8),
    (0x1EB9, 0x1EBA),
    (0x1EBB, 0x1EBC),
    (0x1EBD, 0x1EBE),
    (0x1EBF, 0x1EC0),
    (0x1EC1, 0x1EC2),
    (0x1EC3, 0x1EC4),
    (0x1EC5, 0x1EC6),
    (0x1EC7, 0x1EC8),
    (0x1EC9, 0x1ECA),
    (0x1ECB, 0x1ECC),
    (0x1ECD, 0x1ECE),
    (0x1ECF, 0x1ED0),
    (0x1ED1, 0x1ED2),
    (0x1ED3, 0x1ED4),
    (0x1ED5, 0x1ED6),
    (0x1ED7, 0x1ED8),
    (0x1ED9, 0x1EDA),
    (0x1EDB, 0x1EDC),
    (0x1EDD, 0x1EDE),
    (0x1EDF, 0x1EE0),
    (0x1EE1, 0x1EE2),
    (0x1EE3, 0x1EE4),
    (0x1EE5, 0x1EE6),
    (0x1EE7, 0x1EE8),
    (0x1EE9, 0x1EEA),
    (0x1EEB, 0x1EEC),
    (0x1EED, 0x1EEE),
    (0x1EEF, 0x1EF0),
    (0x1EF1, 0x1EF2),
    (0x1EF3, 0x1EF4),
    (0x1EF5, 0x1EF6),
    (0x1EF7, 0x1EF8),
    (0x1EF9, 0x1EFA),
    (0x1EFB, 0x1EFC),
    (0x1EFD, 0x1EFE),
    (0x1EFF, 0x1F08),
    (0x1F10, 0x1F16),
    (0x1F20, 0x1F28),
    (0x1F30, 0x1F38),
    (0x1F40, 0x1F46),
    (0x1F50, 0x1F58),
    (0x1F60, 0x1F68),
    (0x1F70, 0x1F71),
    (0x1F72, 0x1F73),
    (0x1F74, 0x1F75),
    (0x1F76, 0x1F77),
    (0x1F78, 0x1F79),
    (0x1F7A, 0x1F7B),
    (0x1F7C, 0x1F7D),
    (0x1FB0, 0x1FB2),
    (0x1FB6, 0x1FB7),
    (0x1FC6, 0x1FC7),
    (0x1FD0, 0x1FD3),
    (0x1FD6, 0x1FD8),
    (0x1FE0, 0x1FE3),
    (0x1FE4, 0x1FE8),
    (0x1FF6, 0x1FF7),
    (0x214E, 0x214F),
    (0x2184, 0x2185),
    (0x2C30, 0x2C60),
    (0x2C61, 0x2C62),
    (0x2C65, 0x2C67),
    (0x2C68, 0x2C69),
    (0x2C6A, 0x2C6B),
    (0x2C6C, 0x2C6D),
    (0x2C71, 0x2C72),
    (0x2C73, 0x2C75),
    (0x2C76, 0x2C7C),
    (0x2C81, 0x2C82),
    (0x2C83, 0x2C84),
    (0x2C85, 0x2C86),
    (0x2C87, 0x2C88),
    (0x2C89, 0x2C8A),
    (0x2C8B, 0x2C8C),
    (0x2C8D, 0x2C8E),
    (0x2C8F, 0x2C90),
    (0x2C91, 0x2C92),
    (0x2C93, 0x2C94),
    (0x2C95, 0x2C96),
    (0x2C97, 0x2C98),
    (0x2C99, 0x2C9A),
    (0x2C9B, 0x2C9C),
    (0x2C9D, 0x2C9E),
    (0x2C9F, 0x2CA0),
    (0x2CA1, 0x2CA2),
    (0x2CA3, 0x2CA4),
    (0x2CA5, 0x2CA6),
    (0x2CA7, 0x2CA8),
    (0x2CA9, 0x2CAA),
    (0x2CAB, 0x2CAC),
    (0x2CAD, 0x2CAE),
    (0x2CAF, 0x2CB0),
    (0x2CB1, 0x2CB2),
    (0x2CB3, 0x2CB4),
    (0x2CB5, 0x2CB6),
    (0x2CB7, 0x2CB8),
    (0x2CB9, 0x2CBA),
    (0x2CBB, 0x2CBC),
    (0x2CBD, 0x2CBE),
    (0x2CBF, 0x2CC0),
    (0x2CC1, 0x2CC2),
    (0x2CC3, 0x2CC4),
    (0x2CC5, 0x2CC6),
    (0x2CC7, 0x2CC8),
    (0x2CC9, 0x2CCA),
    (0x2CCB, 0x2CCC),
    (0x2CCD, 0x2CCE),
    (0x2CCF, 0x2CD0),
    (0x2CD1, 0x2CD2),
    (0x2CD3, 0x2CD4),
    (0x2CD5, 0x2CD6),
    (0x2CD7, 0x2CD8),
    (0x2CD9, 0x2CDA),
    (0x2CDB, 0x2CDC),
    (0x2CDD, 0x2CDE),
    (0x2CDF, 0x2CE0),
    (0x2CE1, 0x2CE2),
    (0x2CE3, 0x2CE5),
    (0x2CEC, 0x2CED),
    (0x2CEE, 0x2CF2),
    (0x2CF3, 0x2CF4),
    (0x2D00, 0x2D26),
    (0x2D27, 0x2D28),
    (0x2D2D, 0x2D2E),
    (0x2D30, 0x2D68),
    (0x2D7F, 0x2D97),
    (0x2DA0, 0x2DA7),
    (0x2DA8, 0x2DAF),
    (0x2DB0, 0x2DB7),
    (0x2DB8, 0x2DBF),
    (0x2DC0, 0x2DC7),
    (0x2DC8, 0x2DCF),
    (0x2DD0, 0x2DD7),
    (0x2DD8, 0x2DDF),
    (0x2DE0, 0x2E00),
    (0x2E2F, 0x2E30),
    (0x3005, 0x3008),
    (0x302A, 0x302E),
    (0x303C, 0x303D),
    (0x3041, 0x3097),
    (0x3099, 0x309B),
    (0x309D, 0x309F),
    (0x30A1, 0x30FB),
    (0x30FC, 0x30FF),
    (0x3105, 0x3130),
    (0x31A0, 0x31C0),
    (0x31F0, 0x3200),
    (0x3400, 0x4DC0),
    (0x4E00, 0xA48D),
    (0xA4D0, 0xA4FE),
    (0xA500, 0xA60D),
    (0xA610, 0xA62C),
    (0xA641, 0xA642),
    (0xA643, 0xA644),
    (0xA645, 0xA646),
    (0xA647, 0xA648),
    (0xA649, 0xA64A),
    (0xA64B, 0xA64C),
    (0xA64D, 0xA64E),
    (0xA64F, 0xA650),
    (0xA651, 0xA652),
    (0xA653, 0xA654),
    (0xA655, 0xA656),
    (0xA657, 0xA658),
    (0xA659, 0xA65A),
    (0xA65B, 0xA65C),
    (0xA65D, 0xA65E),
    (0xA65F, 0xA660),
    (0xA661, 0xA662),
    (0xA663, 0xA664),
    (0xA665, 0xA666),
    (0xA667, 0xA668),
    (0xA669, 0xA66A),
    (0xA66B, 0xA66C),
    (0xA66D, 0xA670),
    (0xA674, 0xA67E),
    (0xA67F, 0xA680),
    (0xA681, 0xA682),
    (0xA683, 0xA684),
    (0xA685, 0xA686),
    (0xA687, 0xA688),
    (0xA689, 0xA68A),
    (0xA68B, 0xA68C),
    (0xA68D, 0xA68E),
    (0xA68F, 0xA690),
    (0xA691, 0xA692),
    (0xA693, 0xA694),
    (0xA695, 0xA696),
    (0xA697, 0xA698),
    (0xA699, 0xA69A),
    (0xA69B, 0xA69C),
    (0xA69E, 0xA6E6),
    (0xA6F0, 0xA6F2),
    (0xA717, 0xA720),
    (0xA723, 0xA724),
    (0xA725, 0xA726),
    (0xA727, 0xA728),
    (0xA729, 0xA72A),
    (0xA72B, 0xA72C),
    (0xA72D, 0xA72E),
    (0xA72F, 0xA732),
    (0xA733, 0xA734),
    (0xA735, 0xA736),
    (0xA737, 0xA738),
    (0xA739, 0xA73A),
    (0xA73B, 0xA73C),
    (0xA73D, 0xA73E),
    (0xA73F, 0xA740),
    (0xA741, 0xA742),
    (0xA743, 0xA744),
    (0xA745, 0xA746),
    (0xA747, 0xA748),
    (0xA749, 0xA74A),
    (0xA74B, 0xA74C),
    (0xA74D, 0xA74E),
    (0xA74F, 0xA750),
    (0xA751, 0xA752),
    (0xA753, 0xA754),
    (0xA755, 0xA756),
    (0xA757, 0xA758),
    (0xA759, 0xA75A),
    (0xA75B, 0xA75C),
    (0xA75D, 0xA75E),
    (0xA75F, 0xA760),
    (0xA761, 0xA762),
    (0xA763, 0xA764),
    (0xA765, 0xA766),
    (0xA767, 0xA768),
    (0xA769, 0xA76A),
    (0xA76B, 0xA76C),
    (0xA76D, 0xA76E),
    (0xA76F, 0xA770),
    (0xA771, 0xA779),
    (0xA77A, 0xA77B),
    (0xA77C, 0xA77D),
    (0xA77F, 0xA780),
    (0xA781, 0xA782),
    (0xA783, 0xA784),
    (0xA785, 0xA786),
    (0xA787, 0xA789),
    (0xA78C, 0xA78D),
    (0xA78E, 0xA790),
    (0xA791, 0xA792),
    (0xA793, 0xA796),
    (0xA797, 0xA798),
    (0xA799, 0xA79A),
    (0xA79B, 0xA79C),
    (0xA79D, 0xA79E),
    (0xA79F, 0xA7A0),
    (0xA7A1, 0xA7A2),
    (0xA7A3, 0xA7A4),
    (0xA7A5, 0xA7A6),
    (0xA7A7, 0xA7A8),
    (0xA7A9, 0xA7AA),
    (0xA7AF, 0xA7B0),
    (0xA7B5, 0xA7B6),
    (0xA7B7, 0xA7B8),
    (0xA7B9, 0xA7BA),
    (0xA7BB, 0xA7BC),
    (0xA7BD, 0xA7BE),
    (0xA7BF, 0xA7C0),
    (0xA7C1, 0xA7C2),
    (0xA7C3, 0xA7C4),
    (0xA7C8, 0xA7C9),
    (0xA7CA, 0xA7CB),
    (0xA7CD, 0xA7CE),
    (0xA7CF, 0xA7D0),
    (0xA7D1, 0xA7D2),
    (0xA7D3, 0xA7D4),
    (0xA7D5, 0xA7D6),
    (0xA7D7, 0xA7D8),
    (0xA7D9, 0xA7DA),
    (0xA7DB, 0xA7DC),
    (0xA7F6, 0xA7F8),
    (0xA7FA, 0xA828),
    (0xA82C, 0xA82D),
    (0xA840, 0xA874),
    (0xA880, 0xA8C6),
    (0xA8D0, 0xA8DA),
    (0xA8E0, 0xA8F8),
    (0xA8FB, 0xA8FC),
    (0xA8FD, 0xA92E),
    (0xA930, 0xA954),
    (0xA980, 0xA9C1),
    (0xA9CF, 0xA9DA),
    (0xA9E0, 0xA9FF),
    (0xAA00, 0xAA37),
    (0xAA40, 0xAA4E),
    (0xAA50, 0xAA5A),
    (0xAA60, 0xAA77),
    (0xAA7A, 0xAAC3),
    (0xAADB, 0xAADE),
    (0xAAE0, 0xAAF0),
    (0xAAF2, 0xAAF7),
    (0xAB01, 0xAB07),
    (0xAB09, 0xAB0F),
    (0xAB11, 0xAB17),
    (0xAB20, 0xAB27),
    (0xAB28, 0xAB2F),
    (0xAB30, 0xAB5B),
    (0xAB60, 0xAB69),
    (0xABC0, 0xABEB),
    (0xABEC, 0xABEE),
    (0xABF0, 0xABFA),
    (0xAC00, 0xD7A4),
    (0xFA0E, 0xFA10),
    (0xFA11, 0xFA12),
    (0xFA13, 0xFA15),
    (0xFA1F, 0xFA20),
    (0xFA21, 0xFA22),
    (0xFA23, 0xFA25),
    (0xFA27, 0xFA2A),
    (0xFB1E, 0xFB1F),
    (0xFE20, 0xFE30),
    (0xFE73, 0xFE74),
    (0x10000, 0x1000C),
    (0x1000D, 0x10027),
    (0x10028, 0x1003B),
    (0x1003C, 0x1003E),
    (0x1003F, 0x1004E),
    (0x10050, 0x1005E),
    (0x10080, 0x100FB),
    (0x101FD, 0x101FE),
    (0x10280, 0x1029D),
    (0x102A0, 0x102D1),
    (0x102E0, 0x102E1),
    (0x10300, 0x10320),
    (0x1032D, 0x10341),
    (0x10342, 0x1034A),
    (0x10350, 0x1037B),
    (0x10380, 0x1039E),
    (0x103A0, 0x103C4),
    (0x103C8, 0x103D0),
    (0x10428, 0x1049E),
    (0x104A0, 0x104AA),
    (0x104D8, 0x104FC),
    (0x10500, 0x10528),
    (0x10530, 0x10564),
    (0x10597, 0x105A2),
    (0x105A3, 0x105B2),
    (0x105B3, 0x105BA),
    (0x105BB, 0x105BD),
    (0x105C0, 0x105F4),
    (0x10600, 0x10737),
    (0x10740, 0x10756),
    (0x10760, 0x10768),
    (0x10780, 0x10781),
    (0x10800, 0x10806),
    (0x10808, 0x10809),
    (0x1080A, 0x10836),
    (0x10837, 0x10839),
    (0x1083C, 0x1083D),
    (0x1083F, 0x10856),
    (0x10860, 0x10877),
    (0x10880, 0x1089F),
    (0x108E0, 0x108F3),
    (0x108F4, 0x108F6),
    (0x10900, 0x10916),
    (0x10920, 0x1093A),
    (0x10940, 0x1095A),
    (0x10980, 0x109B8),
    (0x109BE, 0x109C0),
    (0x10A00, 0x10A04),
    (0x10A05, 0x10A07),
    (0x10A0C, 0x10A14),
    (0x10A15, 0x10A18),
    (0x10A19, 0x10A36),
    (0x10A38, 0x10A3B),
    (0x10A3F, 0x10A40),
    (0x10A60, 0x10A7D),
    (0x10A80, 0x10A9D),
    (0x10AC0, 0x10AC8),
    (0x10AC9, 0x10AE7),
    (0x10B00, 0x10B36),
    (0x10B40, 0x10B56),
    (0x10B60, 0x10B73),
    (0x10B80, 0x10B92),
    (0x10C00, 0x10C49),
    (0x10CC0, 0x10CF3),
    (0x10D00, 0x10D28),
    (0x10D30, 0x10D3A),
    (0x10D40, 0x10D50),
    (0x10D69, 0x10D6E),
    (0x10D6F, 0x10D86),
    (0x10E80, 0x10EAA),
    (0x10EAB, 0x10EAD),
    (0x10EB0, 0x10EB2),
    (0x10EC2, 0x10EC8),
    (0x10EFA, 0x10F1D),
    (0x10F27, 0x10F28),
    (0x10F30, 0x10F51),
    (0x10F70, 0x10F86),
    (0x10FB0, 0x10FC5),
    (0x10FE0, 0x10FF7),
    (0x11000, 0x11047),
    (0x11066, 0x11076),
    (0x1107F, 0x110BB),
    (0x110C2, 0x110C3),
    (0x110D0, 0x110E9),
    (0x110F0, 0x110FA),
    (0x11100, 0x11135),
    (0x11136, 0x11140),
    (0x11144, 0x11148),
    (0x11150, 0x11174),
    (0x11176, 0x11177),
    (0x11180, 0x111C5),
    (0x111C9, 0x111CD),
    (0x111CE, 0x111DB),
    (0x111DC, 0x111DD),
    (0x11200, 0x11212),
    (0x11213, 0x11238),
    (0x1123E, 0x11242),
    (0x11280, 0x11287),
    (0x11288, 0x11289),
    (0x1128A, 0x1128E),
    (0x1128F, 0x1129E),
    (0x1129F, 0x112A9),
    (0x112B0, 0x112EB),
    (0x112F0, 0x112FA),
    (0x11300, 0x11304),
    (0x11305, 0x1130D),
    (0x1130F, 0x11311),
    (0x11313, 0x11329),
    (0x1132A, 0x11331),
    (0x11332, 0x11334),
    (0x11335, 0x1133A),
    (0x1133B, 0x11345),
    (0x11347, 0x11349),
    (0x1134B, 0x1134E),
    (0x11350, 0x11351),
    (0x11357, 0x11358),
    (0x1135D, 0x11364),
    (0x11366, 0x1136D),
    (0x11370, 0x11375),
    (0x11380, 0x1138A),
    (0x1138B, 0x1138C),
    (0x1138E, 0x1138F),
    (0x11390, 0x113B6),
    (0x113B7, 0x113C1),
    (0x113C2, 0x113C3),
    (0x113C5, 0x113C6),
    (0x113C7, 0x113CB),
    (0x113CC, 0x113D4),
    (0x113E1, 0x113E3),
    (0x11400, 0x1144B),
    (0x11450, 0x1145A),
    (0x1145E, 0x11462),
    (0x11480, 0x114C6),
    (0x114C7, 0x114C8),
    (0x114D0, 0x114DA),
    (0x11580, 0x115B6),
    (0x115B8, 0x115C1),
    (0x115D8, 0x115DE),
    (0x11600, 0x11641),
    (0x11644, 0x11645),
    (0x11650, 0x1165A),
    (0x11680, 0x116B9),
    (0x116C0, 0x116CA),
    (0x116D0, 0x116E4),
    (0x11700, 0x1171B),
    (0x1171D, 0x1172C),
    (0x11730, 0x1173A),
    (0x11740, 0x11747),
    (0x11800, 0x1183B),
    (0x118C0, 0x118EA),
    (0x118FF, 0x11907),
    (0x11909, 0x1190A),
    (0x1190C, 0x11914),
    (0x11915, 0x11917),
    (0x11918, 0x11936),
    (0x11937, 0x11939),
    (0x1193B, 0x11944),
    (0x11950, 0x1195A),
    (0x119A0, 0x119A8),
    (0x119AA, 0x119D8),
    (0x119DA, 0x119E2),
    (0x119E3, 0x119E5),
    (0x11A00, 0x11A3F),
    (0x11A47, 0x11A48),
    (0x11A50, 0x11A9A),
    (0x11A9D, 0x11A9E),
    (0x11AB0, 0x11AF9),
    (0x11B60, 0x11B68),
    (0x11BC0, 0x11BE1),
    (0x11BF0, 0x11BFA),
    (0x11C00, 0x11C09),
    (0x11C0A, 0x11C37),
    (0x11C38, 0x11C41),
    (0x11C50, 0x11C5A),
    (0x11C72, 0x11C90),
    (0x11C92, 0x11CA8),
    (0x11CA9, 0x11CB7),
    (0x11D00, 0x11D07),
    (0x11D08, 0x11D0A),
    (0x11D0B, 0x11D37),
    (0x11D3A, 0x11D3B),
    (0x11D3C, 0x11D3E),
    (0x11D3F, 0x11D48),
    (0x11D50, 0x11D5A),
    (0x11D60, 0x11D66),
    (0x11D67, 0x11D69),
    (0x11D6A, 0x11D8F),
    (0x11D90, 0x11D92),
    (0x11D93, 0x11D99),
    (0x11DA0, 0x11DAA),
    (0x11DB0, 0x11DDC),
    (0x11DE0, 0x11DEA),
    (0x11EE0, 0x11EF7),
    (0x11F00, 0x11F11),
    (0x11F12, 0x11F3B),
    (0x11F3E, 0x11F43),
    (0x11F50, 0x11F5B),
    (0x11FB0, 0x11FB1),
    (0x12000, 0x1239A),
    (0x12480, 0x12544),
    (0x12F90, 0x12FF1),
    (0x13000, 0x13430),
    (0x13440, 0x13456),
    (0x13460, 0x143FB),
    (0x14400, 0x14647),
    (0x16100, 0x1613A),
    (0x16800, 0x16A39),
    (0x16A40, 0x16A5F),
    (0x16A60, 0x16A6A),
    (0x16A70, 0x16ABF),
    (0x16AC0, 0x16ACA),
    (0x16AD0, 0x16AEE),
    (0x16AF0, 0x16AF5),
    (0x16B00, 0x16B37),
    (0x16B40, 0x16B44),
    (0x16B50, 0x16B5A),
    (0x16B63, 0x16B78),
    (0x16B7D, 0x16B90),
    (0x16D40, 0x16D6D),
    (0x16D70, 0x16D7A),
    (0x16E60, 0x16E80),
    (0x16EBB, 0x16ED4),
    (0x16F00, 0x16F4B),
    (0x16F4F, 0x16F88),
    (0x16F8F, 0x16FA0),
    (0x16FE0, 0x16FE2),
    (0x16FE3, 0x16FE5),
    (0x16FF0, 0x16FF4),
    (0x17000, 0x18CD6),
    (0x18CFF, 0x18D1F),
    (0x18D80, 0x18DF3),
    (0x1AFF0, 0x1AFF4),
    (0x1AFF5, 0x1AFFC),
    (0x1AFFD, 0x1AFFF),
    (0x1B000, 0x1B123),
    (0x1B132, 0x1B133),
    (0x1B150, 0x1B153),
    (0x1B155, 0x1B156),
    (0x1B164, 0x1B168),
    (0x1B170, 0x1B2FC),
    (0x1BC00, 0x1BC6B),
    (0x1BC70, 0x1BC7D),
    (0x1BC80, 0x1BC89),
    (0x1BC90, 0x1BC9A),
    (0x1BC9D, 0x1BC9F),
    (0x1CF00, 0x1CF2E),
    (0x1CF30, 0x1CF47),
    (0x1DA00, 0x1DA37),
    (0x1DA3B, 0x1DA6D),
    (0x1DA75, 0x1DA76),
    (0x1DA84, 0x1DA85),
    (0x1DA9B, 0x1DAA0),
    (0x1DAA1, 0x1DAB0),
    (0x1DF00, 0x1DF1F),
    (0x1DF25, 0x1DF2B),
    (0x1E000, 0x1E007),
    (0x1E008, 0x1E019),
    (0x1E01B, 0x1E022),
    (0x1E023, 0x1E025),
    (0x1E026, 0x1E02B),
    (0x1E08F, 0x1E090),
    (0x1E100, 0x1E12D),
    (0x1E130, 0x1E13E),
    (0x1E140, 0x1E14A),
    (0x1E14E, 0x1E14F),
    (0x1E290, 0x1E2AF),
    (0x1E2C0, 0x1E2FA),
    (0x1E4D0, 0x1E4FA),
    (0x1E5D0, 0x1E5FB),
    (0x1E6C0, 0x1E6DF),
    (0x1E6E0, 0x1E6F6),
    (0x1E6FE, 0x1E700),
    (0x1E7E0, 0x1E7E7),
    (0x1E7E8, 0x1E7EC),
    (0x1E7ED, 0x1E7EF),
    (0x1E7F0, 0x1E7FF),
    (0x1E800, 0x1E8C5),
    (0x1E8D0, 0x1E8D7),
    (0x1E922, 0x1E94C),
    (0x1E950, 0x1E95A),
    (0x20000, 0x2A6E0),
    (0x2A700, 0x2B81E),
    (0x2B820, 0x2CEAE),
    (0x2CEB0, 0x2EBE1),
    (0x2EBF0, 0x2EE5E),
    (0x30000, 0x3134B),
    (0x31350, 0x3347A),
];

#[rustfmt::skip]
static CONTEXTJ: &[(u32, u32)] = &[
    (0x200C, 0x200E),
];

#[rustfmt::skip]
static CONTEXTO: &[(u32, u32)] = &[
    (0x00B7, 0x00B8),
    (0x0375, 0x0376),
    (0x05F3, 0x05F5),
    (0x0660, 0x066A),
    (0x06F0, 0x06FA),
    (0x30FB, 0x30FC),
];

#[rustfmt::skip]
static COMBINING_MARKS: &[(u32, u32)] = &[
    (0x0300, 0x0370),
    (0x0483, 0x048A),
    (0x0591, 0x05BE),
    (0x05BF, 0x05C0),
    (0x05C1, 0x05C3),
    (0x05C4, 0x05C6),
    (0x05C7, 0x05C8),
    (0x0610, 0x061B),
    (0x064B, 0x0660),
    (0x0670, 0x0671),
    (0x06D6, 0x06DD),
    (0x06DF, 0x06E5),
    (0x06E7, 0x06E9),
    (0x06EA, 0x06EE),
    (0x0711, 0x0712),
    (0x0730, 0x074B),
    (0x07A6, 0x07B1),
    (0x07EB, 0x07F4),
    (0x07FD, 0x07FE),
    (0x0816, 0x081A),
    (0x081B, 0x0824),
    (0x0825, 0x0828),
    (0x0829, 0x082E),
    (0x0859, 0x085C),
    (0x0898, 0x08A0),
    (0x08CA, 0x08E2),
    (0x08E3, 0x0904),
    (0x093A, 0x093D),
    (0x093E, 0x0950),
    (0x0951, 0x0958),
    (0x0962, 0x0964),
    (0x0981, 0x0984),
    (0x09BC, 0x09BD),
    (0x09BE, 0x09C5),
    (0x09C7, 0x09C9),
    (0x09CB, 0x09CE),
    (0x09D7, 0x09D8),
    (0x09E2, 0x09E4),
    (0x09FE, 0x09FF),
    (0x0A01, 0x0A04),
    (0x0A3C, 0x0A3D),
    (0x0A3E, 0x0A43),
    (0x0A47, 0x0A49),
    (0x0A4B, 0x0A4E),
    (0x0A51, 0x0A52),
    (0x0A70, 0x0A72),
    (0x0A75, 0x0A76),
    (0x0A81, 0x0A84),
    (0x0ABC, 0x0ABD),
    (0x0ABE, 0x0AC6),
    (0x0AC7, 0x0ACA),
    (0x0ACB, 0x0ACE),
    (0x0AE2, 0x0AE4),
    (0x0AFA, 0x0B00),
    (0x0B01, 0x0B04),
    (0x0B3C, 0x0B3D),
    (0x0B3E, 0x0B45),
    (0x0B47, 0x0B49),
    (0x0B4B, 0x0B4E),
    (0x0B55, 0x0B58),
    (0x0B62, 0x0B64),
    (0x0B82, 0x0B83),
    (0x0BBE, 0x0BC3),
    (0x0BC6, 0x0BC9),
    (0x0BCA, 0x0BCE),
    (0x0BD7, 0x0BD8),
    (0x0C00, 0x0C05),
    (0x0C3C, 0x0C3D),
    (0x0C3E, 0x0C45),
    (0x0C46, 0x0C49),
    (0x0C4A, 0x0C4E),
    (0x0C55, 0x0C57),
    (0x0C62, 0x0C64),
    (0x0C81, 0x0C84),
    (0x0CBC, 0x0CBD),
    (0x0CBE, 0x0CC5),
    (0x0CC6, 0x0CC9),
    (0x0CCA, 0x0CCE),
    (0x0CD5, 0x0CD7),
    (0x0CE2, 0x0CE4),
    (0x0D00, 0x0D04),
    (0x0D3B, 0x0D3D),
    (0x0D3E, 0x0D45),
    (0x0D46, 0x0D49),
    (0x0D4A, 0x0D4E),
    (0x0D57, 0x0D58),
    (0x0D62, 0x0D64),
    (0x0D81, 0x0D84),
    (0x0DCA, 0x0DCB),
    (0x0DCF, 0x0DD5),
    (0x0DD6, 0x0DD7),
    (0x0DD8, 0x0DE0),
    (0x0DF2, 0x0DF4),
    (0x0E31, 0x0E32),
    (0x0E34, 0x0E3B),
    (0x0E47, 0x0E4F),
    (0x0EB1, 0x0EB2),
    (0x0EB4, 0x0EBD),
    (0x0EC8, 0x0ECE),
    (0x0F18, 0x0F1A),
    (0x0F35, 0x0F36),
    (0x0F37, 0x0F38),
    (0x0F39, 0x0F3A),
    (0x0F3E, 0x0F40),
    (0x0F71, 0x0F85),
    (0x0F86, 0x0F88),
    (0x0F8D, 0x0F98),
    (0x0F99, 0x0FBD),
    (0x0FC6, 0x0FC7),
    (0x102B, 0x103F),
    (0x1056, 0x105A),
    (0x105E, 0x1061),
    (0x1062, 0x1065),
    (0x1067, 0x106E),
    (0x1071, 0x1075),
    (0x1082, 0x108E),
    (0x108F, 0x1090),
    (0x109A, 0x109E),
    (0x135D, 0x1360),
    (0x1712, 0x1716),
    (0x1732, 0x1735),
    (0x1752, 0x1754),
    (0x1772, 0x1774),
    (0x17B4, 0x17D4),
    (0x17DD, 0x17DE),
    (0x180B, 0x180E),
    (0x180F, 0x1810),
    (0x1885, 0x1887),
    (0x18A9, 0x18AA),
    (0x1920, 0x192C),
    (0x1930, 0x193C),
    (0x1A17, 0x1A1C),
    (0x1A55, 0x1A5F),
    (0x1A60, 0x1A7D),
    (0x1A7F, 0x1A80),
    (0x1AB0, 0x1ACF),
    (0x1B00, 0x1B05),
    (0x1B34, 0x1B45),
    (0x1B6B, 0x1B74),
    (0x1B80, 0x1B83),
    (0x1BA1, 0x1BAE),
    (0x1BE6, 0x1BF4),
    (0x1C24, 0x1C38),
    (0x1CD0, 0x1CD3),
    (0x1CD4, 0x1CE9),
    (0x1CED, 0x1CEE),
    (0x1CF4, 0x1CF5),
    (0x1CF7, 0x1CFA),
    (0x1DC0, 0x1E00),
    (0x20D0, 0x20F1),
    (0x2CEF, 0x2CF2),
    (0x2D7F, 0x2D80),
    (0x2DE0, 0x2E00),
    (0x302A, 0x3030),
    (0x3099, 0x309B),
    (0xA66F, 0xA673),
    (0xA674, 0xA67E),
    (0xA69E, 0xA6A0),
    (0xA6F0, 0xA6F2),
    (0xA802, 0xA803),
    (0xA806, 0xA807),
    (0xA80B, 0xA80C),
    (0xA823, 0xA828),
    (0xA82C, 0xA82D),
    (0xA880, 0xA882),
    (0xA8B4, 0xA8C6),
    (0xA8E0, 0xA8F2),
    (0xA8FF, 0xA900),
    (0xA926, 0xA92E),
    (0xA947, 0xA954),
    (0xA980, 0xA984),
    (0xA9B3, 0xA9C1),
    (0xA9E5, 0xA9E6),
    (0xAA29, 0xAA37),
    (0xAA43, 0xAA44),
    (0xAA4C, 0xAA4E),
    (0xAA7B, 0xAA7E),
    (0xAAB0, 0xAAB1),
    (0xAAB2, 0xAAB5),
    (0xAAB7, 0xAAB9),
    (0xAABE, 0xAAC0),
    (0xAAC1, 0xAAC2),
    (0xAAEB, 0xAAF0),
    (0xAAF5, 0xAAF7),
    (0xABE3, 0xABEB),
    (0xABEC, 0xABEE),
    (0xFB1E, 0xFB1F),
    (0xFE00, 0xFE10),
    (0xFE20, 0xFE30),
    (0x101FD, 0x101FE),
    (0x102E0, 0x102E1),
    (0x10376, 0x1037B),
    (0x10A01, 0x10A04),
    (0x10A05, 0x10A07),
    (0x10A0C, 0x10A10),
    (0x10A38, 0x10A3B),
    (0x10A3F, 0x10A40),
    (0x10AE5, 0x10AE7),
    (0x10D24, 0x10D28),
    (0x10EAB, 0x10EAD),
    (0x10F46, 0x10F51),
    (0x10F82, 0x10F86),
    (0x11000, 0x11003),
    (0x11038, 0x11047),
    (0x11070, 0x11071),
    (0x11073, 0x11075),
    (0x1107F, 0x11083),
    (0x110B0, 0x110BB),
    (0x110C2, 0x110C3),
    (0x11100, 0x11103),
    (0x11127, 0x11135),
    (0x11145, 0x11147),
    (0x11173, 0x11174),
    (0x11180, 0x11183),
    (0x111B3, 0x111C1),
    (0x111C9, 0x111CD),
    (0x111CE, 0x111D0),
    (0x1122C, 0x11238),
    (0x1123E, 0x1123F),
    (0x112DF, 0x112EB),
    (0x11300, 0x11304),
    (0x1133B, 0x1133D),
    (0x1133E, 0x11345),
    (0x11347, 0x11349),
    (0x1134B, 0x1134E),
    (0x11357, 0x11358),
    (0x11362, 0x11364),
    (0x11366, 0x1136D),
    (0x11370, 0x11375),
    (0x11435, 0x11447),
    (0x1145E, 0x1145F),
    (0x114B0, 0x114C4),
    (0x115AF, 0x115B6),
    (0x115B8, 0x115C1),
    (0x115DC, 0x115DE),
    (0x11630, 0x11641),
    (0x116AB, 0x116B8),
    (0x1171D, 0x1172C),
    (0x1182C, 0x1183B),
    (0x11930, 0x11936),
    (0x11937, 0x11939),
    (0x1193B, 0x1193F),
    (0x11940, 0x11941),
    (0x11942, 0x11944),
    (0x119D1, 0x119D8),
    (0x119DA, 0x119E1),
    (0x119E4, 0x119E5),
    (0x11A01, 0x11A0B),
    (0x11A33, 0x11A3A),
    (0x11A3B, 0x11A3F),
    (0x11A47, 0x11A48),
    (0x11A51, 0x11A5C),
    (0x11A8A, 0x11A9A),
    (0x11C2F, 0x11C37),
    (0x11C38, 0x11C40),
    (0x11C92, 0x11CA8),
    (0x11CA9, 0x11CB7),
    (0x11D31, 0x11D37),
    (0x11D3A, 0x11D3B),
    (0x11D3C, 0x11D3E),
    (0x11D3F, 0x11D46),
    (0x11D47, 0x11D48),
    (0x11D8A, 0x11D8F),
    (0x11D90, 0x11D92),
    (0x11D93, 0x11D98),
    (0x11EF3, 0x11EF7),
    (0x16AF0, 0x16AF5),
    (0x16B30, 0x16B37),
    (0x16F4F, 0x16F50),
    (0x16F51, 0x16F88),
    (0x16F8F, 0x16F93),
    (0x16FE4, 0x16FE5),
    (0x16FF0, 0x16FF2),
    (0x1BC9D, 0x1BC9F),
    (0x1CF00, 0x1CF2E),
    (0x1CF30, 0x1CF47),
    (0x1D165, 0x1D16A),
    (0x1D16D, 0x1D173),
    (0x1D17B, 0x1D183),
    (0x1D185, 0x1D18C),
    (0x1D1AA, 0x1D1AE),
    (0x1D242, 0x1D245),
    (0x1DA00, 0x1DA37),
    (0x1DA3B, 0x1DA6D),
    (0x1DA75, 0x1DA76),
    (0x1DA84, 0x1DA85),
    (0x1DA9B, 0x1DAA0),
    (0x1DAA1, 0x1DAB0),
    (0x1E000, 0x1E007),
    (0x1E008, 0x1E019),
    (0x1E01B, 0x1E022),
    (0x1E023, 0x1E025),
    (0x1E026, 0x1E02B),
    (0x1E130, 0x1E137),
    (0x1E2AE, 0x1E2AF),
    (0x1E2EC, 0x1E2F0),
    (0x1E8D0, 0x1E8D7),
    (0x1E944, 0x1E94B),
    (0xE0100, 0xE01F0),
];

