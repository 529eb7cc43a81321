// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! UTS #46 mapping statuses.
//!
//! Generated offline from the IDNA Mapping Table. Each row covers the
//! half-open codepoint range up to the next row's start. Do not edit by
//! hand.

/// What the mapping step does with a codepoint.
#[derive(Debug, PartialEq, Eq)]
pub enum Status {
    /// Kept as is.
    Valid,
    /// Replaced by the given string.
    Mapped(&'static str),
    /// Kept under nontransitional processing, remapped under
    /// transitional processing.
    Deviation(&'static str),
    /// Removed from the string.
    Ignored,
    /// Not permitted in a domain name at all.
    Disallowed,
}

/// Look up the mapping status of a character.
pub fn uts46_status(c: char) -> &'static Status {
    let cp = c as u32;
    let index = UTS46_MAPPINGS.partition_point(|&(start, _)| start <= cp) - 1;
    &UTS46_MAPPINGS[index].1
}

#[rustfmt::skip]
static UTS46_MAPPINGS: &[(u32, Status)] = &[
    (0x0000, Status::Valid),
    (0x0041, Status::Mapped("a")),
    (0x0042, Status::Mapped("b")),
    (0x0043, Status::Mapped("c")),
    (0x0044, Status::Mapped("d")),
    (0x0045, Status::Mapped("e")),
    (0x0046, Status::Mapped("f")),
    (0x0047, Status::Mapped("g")),
    (0x0048, Status::Mapped("h")),
    (0x0049, Status::Mapped("i")),
    (0x004A, Status::Mapped("j")),
    (0x004B, Status::Mapped("k")),
    (0x004C, Status::Mapped("l")),
    (0x004D, Status::Mapped("m")),
    (0x004E, Status::Mapped("n")),
    (0x004F, Status::Mapped("o")),
    (0x0050, Status::Mapped("p")),
    (0x0051, Status::Mapped("q")),
    (0x0052, Status::Mapped("r")),
    (0x0053, Status::Mapped("s")),
    (0x0054, Status::Mapped("t")),
    (0x0055, Status::Mapped("u")),
    (0x0056, Status::Mapped("v")),
    (0x0057, Status::Mapped("w")),
    (0x0058, Status::Mapped("x")),
    (0x0059, Status::Mapped("y")),
    (0x005A, Status::Mapped("z")),
    (0x005B, Status::Valid),
    (0x0080, Status::Disallowed),
    (0x00A0, Status::Mapped(" ")),
    (0x00A1, Status::Valid),
    (0x00A8, Status::Mapped(" \u{308}")),
    (0x00A9, Status::Valid),
    (0x00AA, Status::Mapped("a")),
    (0x00AB, Status::Valid),
    (0x00AD, Status::Ignored),
    (0x00AE, Status::Valid),
    (0x00AF, Status::Mapped(" \u{304}")),
    (0x00B0, Status::Valid),
    (0x00B2, Status::Mapped("2")),
    (0x00B3, Status::Mapped("3")),
    (0x00B4, Status::Mapped(" \u{301}")),
    (0x00B5, Status::Mapped("\u{3BC}")),
    (0x00B6, Status::Valid),
    (0x00B8, Status::Mapped(" \u{327}")),
    (0x00B9, Status::Mapped("1")),
    (0x00BA, Status::Mapped("o")),
    (0x00BB, Status::Valid),
    (0x00BC, Status::Mapped("1\u{2044}4")),
    (0x00BD, Status::Mapped("1\u{2044}2")),
    (0x00BE, Status::Mapped("3\u{2044}4")),
    (0x00BF, Status::Valid),
    (0x00C0, Status::Mapped("\u{E0}")),
    (0x00C1, Status::Mapped("\u{E1}")),
    (0x00C2, Status::Mapped("\u{E2}")),
    (0x00C3, Status::Mapped("\u{E3}")),
    (0x00C4, Status::Mapped("\u{E4}")),
    (0x00C5, Status::Mapped("\u{E5}")),
    (0x00C6, Status::Mapped("\u{E6}")),
    (0x00C7, Status::Mapped("\u{E7}")),
    (0x00C8, Status::Mapped("\u{E8}")),
    (0x00C9, Status::Mapped("\u{E9}")),
    (0x00CA, Status::Mapped("\u{EA}")),
    (0x00CB, Status::Mapped("\u{EB}")),
    (0x00CC, Status::Mapped("\u{EC}")),
    (0x00CD, Status::Mapped("\u{ED}")),
    (0x00CE, Status::Mapped("\u{EE}")),
    (0x00CF, Status::Mapped("\u{EF}")),
    (0x00D0, Status::Mapped("\u{F0}")),
    (0x00D1, Status::Mapped("\u{F1}")),
    (0x00D2, Status::Mapped("\u{F2}")),
    (0x00D3, Status::Mapped("\u{F3}")),
    (0x00D4, Status::Mapped("\u{F4}")),
    (0x00D5, Status::Mapped("\u{F5}")),
    (0x00D6, Status::Mapped("\u{F6}")),
    (0x00D7, Status::Valid),
    (0x00D8, Status::Mapped("\u{F8}")),
    (0x00D9, Status::Mapped("\u{F9}")),
    (0x00DA, Status::Mapped("\u{FA}")),
    (0x00DB, Status::Mapped("\u{FB}")),
    (0x00DC, Status::Mapped("\u{FC}")),
    (0x00DD, Status::Mapped("\u{FD}")),
    (0x00DE, Status::Mapped("\u{FE}")),
    (0x00DF, Status::Deviation("ss")),
    (0x00E0, Status::Valid),
    (0x0100, Status::Mapped("\u{101}")),
    (0x0101, Status::Valid),
    (0x0102, Status::Mapped("\u{103}")),
    (0x0103, Status::Valid),
    (0x0104, Status::Mapped("\u{105}")),
    (0x0105, Status::Valid),
    (0x0106, Status::Mapped("\u{107}")),
    (0x0107, Status::Valid),
    (0x0108, Status::Mapped("\u{109}")),
    (0x0109, Status::Valid),
    (0x010A, Status::Mapped("\u{10B}")),
    (0x010B, Status::Valid),
    (0x010C, Status::Mapped("\u{10D}")),
    (0x010D, Status::Valid),
    (0x010E, Status::Mapped("\u{10F}")),
    (0x010F, Status::Valid),
    (0x0110, Status::Mapped("\u{111}")),
    (0x0111, Status::Valid),
    (0x0112, Status::Mapped("\u{113}")),
    (0x0113, Status::Valid),
    (0x0114, Status::Mapped("\u{115}")),
    (0x0115, Status::Valid),
    (0x0116, Status::Mapped("\u{117}")),
    (0x0117, Status::Valid),
    (0x0118, Status::Mapped("\u{119}")),
    (0x0119, Status::Valid),
    (0x011A, Status::Mapped("\u{11B}")),
    (0x011B, Status::Valid),
    (0x011C, Status::Mapped("\u{11D}")),
    (0x011D, Status::Valid),
    (0x011E, Status::Mapped("\u{11F}")),
    (0x011F, Status::Valid),
    (0x0120, Status::Mapped("\u{121}")),
    (0x0121, Status::Valid),
    (0x0122, Status::Mapped("\u{123}")),
    (0x0123, Status::Valid),
    (0x0124, Status::Mapped("\u{125}")),
    (0x0125, Status::Valid),
    (0x0126, Status::Mapped("\u{127}")),
    (0x0127, Status::Valid),
    (0x0128, Status::Mapped("\u{129}")),
    (0x0129, Status::Valid),
    (0x012A, Status::Mapped("\u{12B}")),
    (0x012B, Status::Valid),
    (0x012C, Status::Mapped("\u{12D}")),
    (0x012D, Status::Valid),
    (0x012E, Status::Mapped("\u{12F}")),
    (0x012F, Status::Valid),
    (0x0130, Status::Mapped("i\u{307}")),
    (0x0131, Status::Valid),
    (0x0132, Status::Mapped("ij")),
    (0x0134, Status::Mapped("\u{135}")),
    (0x0135, Status::Valid),
    (0x0136, Status::Mapped("\u{137}")),
    (0x0137, Status::Valid),
    (0x0139, Status::Mapped("\u{13A}")),
    (0x013A, Status::Valid),
    (0x013B, Status::Mapped("\u{13C}")),
    (0x013C, Status::Valid),
    (0x013D, Status::Mapped("\u{13E}")),
    (0x013E, Status::Valid),
    (0x013F, Status::Mapped("l\u{B7}")),
    (0x0141, Status::Mapped("\u{142}")),
    (0x0142, Status::Valid),
    (0x0143, Status::Mapped("\u{144}")),
    (0x0144, Status::Valid),
    (0x0145, Status::Mapped("\u{146}")),
    (0x0146, Status::Valid),
    (0x0147, Status::Mapped("\u{148}")),
    (0x0148, Status::Valid),
    (0x0149, Status::Mapped("\u{2BC}n")),
    (0x014A, Status::Mapped("\u{14B}")),
    (0x014B, Status::Valid),
    (0x014C, Status::Mapped("\u{14D}")),
    (0x014D, Status::Valid),
    (0x014E, Status::Mapped("\u{14F}")),
    (0x014F, Status::Valid),
    (0x0150, Status::Mapped("\u{151}")),
    (0x0151, Status::Valid),
    (0x0152, Status::Mapped("\u{153}")),
    (0x0153, Status::Valid),
    (0x0154, Status::Mapped("\u{155}")),
    (0x0155, Status::Valid),
    (0x0156, Status::Mapped("\u{157}")),
    (0x0157, Status::Valid),
    (0x0158, Status::Mapped("\u{159}")),
    (0x0159, Status::Valid),
    (0x015A, Status::Mapped("\u{15B}")),
    (0x015B, Status::Valid),
    (0x015C, Status::Mapped("\u{15D}")),
    (0x015D, Status::Valid),
    (0x015E, Status::Mapped("\u{15F}")),
    (0x015F, Status::Valid),
    (0x0160, Status::Mapped("\u{161}")),
    (0x0161, Status::Valid),
    (0x0162, Status::Mapped("\u{163}")),
    (0x0163, Status::Valid),
    (0x0164, Status::Mapped("\u{165}")),
    (0x0165, Status::Valid),
    (0x0166, Status::Mapped("\u{167}")),
    (0x0167, Status::Valid),
    (0x0168, Status::Mapped("\u{169}")),
    (0x0169, Status::Valid),
    (0x016A, Status::Mapped("\u{16B}")),
    (0x016B, Status::Valid),
    (0x016C, Status::Mapped("\u{16D}")),
    (0x016D, Status::Valid),
    (0x016E, Status::Mapped("\u{16F}")),
    (0x016F, Status::Valid),
    (0x0170, Status::Mapped("\u{171}")),
    (0x0171, Status::Valid),
    (0x0172, Status::Mapped("\u{173}")),
    (0x0173, Status::Valid),
    (0x0174, Status::Mapped("\u{175}")),
    (0x0175, Status::Valid),
    (0x0176, Status::Mapped("\u{177}")),
    (0x0177, Status::Valid),
    (0x0178, Status::Mapped("\u{FF}")),
    (0x0179, Status::Mapped("\u{17A}")),
    (0x017A, Status::Valid),
    (0x017B, Status::Mapped("\u{17C}")),
    (0x017C, Status::Valid),
    (0x017D, Status::Mapped("\u{17E}")),
    (0x017E, Status::Valid),
    (0x017F, Status::Mapped("s")),
    (0x0180, Status::Valid),
    (0x0181, Status::Mapped("\u{253}")),
    (0x0182, Status::Mapped("\u{183}")),
    (0x0183, Status::Valid),
    (0x0184, Status::Mapped("\u{185}")),
    (0x0185, Status::Valid),
    (0x0186, Status::Mapped("\u{254}")),
    (0x0187, Status::Mapped("\u{188}")),
    (0x0188, Status::Valid),
    (0x0189, Status::Mapped("\u{256}")),
    (0x018A, Status::Mapped("\u{257}")),
    (0x018B, Status::Mapped("\u{18C}")),
    (0x018C, Status::Valid),
    (0x018E, Status::Mapped("\u{1DD}")),
    (0x018F, Status::Mapped("\u{259}")),
    (0x0190, Status::Mapped("\u{25B}")),
    (0x0191, Status::Mapped("\u{192}")),
    (0x0192, Status::Valid),
    (0x0193, Status::Mapped("\u{260}")),
    (0x0194, Status::Mapped("\u{263}")),
    (0x0195, Status::Valid),
    (0x0196, Status::Mapped("\u{269}")),
    (0x0197, Status::Mapped("\u{268}")),
    (0x0198, Status::Mapped("\u{199}")),
    (0x0199, Status::Valid),
    (0x019C, Status::Mapped("\u{26F}")),
    (0x019D, Status::Mapped("\u{272}")),
    (0x019E, Status::Valid),
    (0x019F, Status::Mapped("\u{275}")),
    (0x01A0, Status::Mapped("\u{1A1}")),
    (0x01A1, Status::Valid),
    (0x01A2, Status::Mapped("\u{1A3}")),
    (0x01A3, Status::Valid),
    (0x01A4, Status::Mapped("\u{1A5}")),
    (0x01A5, Status::Valid),
    (0x01A6, Status::Mapped("\u{280}")),
    (0x01A7, Status::Mapped("\u{1A8}")),
    (0x01A8, Status::Valid),
    (0x01A9, Status::Mapped("\u{283}")),
    (0x01AA, Status::Valid),
    (0x01AC, Status::Mapped("\u{1AD}")),
    (0x01AD, Status::Valid),
    (0x01AE, Status::Mapped("\u{288}")),
    (0x01AF, Status::Mapped("\u{1B0}")),
    (0x01B0, Status::Valid),
    (0x01B1, Status::Mapped("\u{28A}")),
    (0x01B2, Status::Mapped("\u{28B}")),
    (0x01B3, Status::Mapped("\u{1B4}")),
    (0x01B4, Status::Valid),
    (0x01B5, Status::Mapped("\u{1B6}")),
    (0x01B6, Status::Valid),
    (0x01B7, Status::Mapped("\u{292}")),
    (0x01B8, Status::Mapped("\u{1B9}")),
    (0x01B9, Status::Valid),
    (0x01BC, Status::Mapped("\u{1BD}")),
    (0x01BD, Status::Valid),
    (0x01C4, Status::Mapped("d\u{17E}")),
    (0x01C7, Status::Mapped("lj")),
    (0x01CA, Status::Mapped("nj")),
    (0x01CD, Status::Mapped("\u{1CE}")),
    (0x01CE, Status::Valid),
    (0x01CF, Status::Mapped("\u{1D0}")),
    (0x01D0, Status::Valid),
    (0x01D1, Status::Mapped("\u{1D2}")),
    (0x01D2, Status::Valid),
    (0x01D3, Status::Mapped("\u{1D4}")),
    (0x01D4, Status::Valid),
    (0x01D5, Status::Mapped("\u{1D6}")),
    (0x01D6, Status::Valid),
    (0x01D7, Status::Mapped("\u{1D8}")),
    (0x01D8, Status::Valid),
    (0x01D9, Status::Mapped("\u{1DA}")),
    (0x01DA, Status::Valid),
    (0x01DB, Status::Mapped("\u{1DC}")),
    (0x01DC, Status::Valid),
    (0x01DE, Status::Mapped("\u{1DF}")),
    (0x01DF, Status::Valid),
    (0x01E0, Status::Mapped("\u{1E1}")),
    (0x01E1, Status::Valid),
    (0x01E2, Status::Mapped("\u{1E3}")),
    (0x01E3, Status::Valid),
    (0x01E4, Status::Mapped("\u{1E5}")),
    (0x01E5, Status::Valid),
    (0x01E6, Status::Mapped("\u{1E7}")),
    (0x01E7, Status::Valid),
    (0x01E8, Status::Mapped("\u{1E9}")),
    (0x01E9, Status::Valid),
    (0x01EA, Status::Mapped("\u{1EB}")),
    (0x01EB, Status::Valid),
    (0x01EC, Status::Mapped("\u{1ED}")),
    (0x01ED, Status::Valid),
    (0x01EE, Status::Mapped("\u{1EF}")),
    (0x01EF, Status::Valid),
    (0x01F1, Status::Mapped("dz")),
    (0x01F4, Status::Mapped("\u{1F5}")),
    (0x01F5, Status::Valid),
    (0x01F6, Status::Mapped("\u{195}")),
    (0x01F7, Status::Mapped("\u{1BF}")),
    (0x01F8, Status::Mapped("\u{1F9}")),
    (0x01F9, Status::Valid),
    (0x01FA, Status::Mapped("\u{1FB}")),
    (0x01FB, Status::Valid),
    (0x01FC, Status::Mapped("\u{1FD}")),
    (0x01FD, Status::Valid),
    (0x01FE, Status::Mapped("\u{1FF}")),
    (0x01FF, Status::Valid),
    (0x0200, Status::Mapped("\u{201}")),
    (0x0201, Status::Valid),
    (0x0202, Status::Mapped("\u{203}")),
    (0x0203, Status::Valid),
    (0x0204, Status::Mapped("\u{205}")),
    (0x0205, Status::Valid),
    (0x0206, Status::Mapped("\u{207}")),
    (0x0207, Status::Valid),
    (0x0208, Status::Mapped("\u{209}")),
    (0x0209, Status::Valid),
    (0x020A, Status::Mapped("\u{20B}")),
    (0x020B, Status::Valid),
    (0x020C, Status::Mapped("\u{20D}")),
    (0x020D, Status::Valid),
    (0x020E, Status::Mapped("\u{20F}")),
    (0x020F, Status::Valid),
    (0x0210, Status::Mapped("\u{211}")),
    (0x0211, Status::Valid),
    (0x0212, Status::Mapped("\u{213}")),
    (0x0213, Status::Valid),
    (0x0214, Status::Mapped("\u{215}")),
    (0x0215, Status::Valid),
    (0x0216, Status::Mapped("\u{217}")),
    (0x0217, Status::Valid),
    (0x0218, Status::Mapped("\u{219}")),
    (0x0219, Status::Valid),
    (0x021A, Status::Mapped("\u{21B}")),
    (0x021B, Status::Valid),
    (0x021C, Status::Mapped("\u{21D}")),
    (0x021D, Status::Valid),
    (0x021E, Status::Mapped("\u{21F}")),
    (0x021F, Status::Valid),
    (0x0220, Status::Mapped("\u{19E}")),
    (0x0221, Status::Valid),
    (0x0222, Status::Mapped("\u{223}")),
    (0x0223, Status::Valid),
    (0x0224, Status::Mapped("\u{225}")),
    (0x0225, Status::Valid),
    (0x0226, Status::Mapped("\u{227}")),
    (0x0227, Status::Valid),
    (0x0228, Status::Mapped("\u{229}")),
    (0x0229, Status::Valid),
    (0x022A, Status::Mapped("\u{22B}")),
    (0x022B, Status::Valid),
    (0x022C, Status::Mapped("\u{22D}")),
    (0x022D, Status::Valid),
    (0x022E, Status::Mapped("\u{22F}")),
    (0x022F, Status::Valid),
    (0x0230, Status::Mapped("\u{231}")),
    (0x0231, Status::Valid),
    (0x0232, Status::Mapped("\u{233}")),
    (0x0233, Status::Valid),
    (0x023A, Status::Mapped("\u{2C65}")),
    (0x023B, Status::Mapped("\u{23C}")),
    (0x023C, Status::Valid),
    (0x023D, Status::Mapped("\u{19A}")),
    (0x023E, Status::Mapped("\u{2C66}")),
    (0x023F, Status::Valid),
    (0x0241, Status::Mapped("\u{242}")),
    (0x0242, Status::Valid),
    (0x0243, Status::Mapped("\u{180}")),
    (0x0244, Status::Mapped("\u{289}")),
    (0x0245, Status::Mapped("\u{28C}")),
    (0x0246, Status::Mapped("\u{247}")),
    (0x0247, Status::Valid),
    (0x0248, Status::Mapped("\u{249}")),
    (0x0249, Status::Valid),
    (0x024A, Status::Mapped("\u{24B}")),
    (0x024B, Status::Valid),
    (0x024C, Status::Mapped("\u{24D}")),
    (0x024D, Status::Valid),
    (0x024E, Status::Mapped("\u{24F}")),
    (0x024F, Status::Valid),
    (0x02B0, Status::Mapped("h")),
    (0x02B1, Status::Mapped("\u{266}")),
    (0x02B2, Status::Mapped("j")),
    (0x02B3, Status::Mapped("r")),
    (0x02B4, Status::Mapped("\u{279}")),
    (0x02B5, Status::Mapped("\u{27B}")),
    (0x02B6, Status::Mapped("\u{281}")),
    (0x02B7, Status::Mapped("w")),
    (0x02B8, Status::Mapped("y")),
    (0x02B9, Status::Valid),
    (0x02D8, Status::Mapped(" \u{306}")),
    (0x02D9, Status::Mapped(" \u{307}")),
    (0x02DA, Status::Mapped(" \u{30A}")),
    (0x02DB, Status::Mapped(" \u{328}")),
    (0x02DC, Status::Mapped(" \u{303}")),
    (0x02DD, Status::Mapped(" \u{30B}")),
    (0x02DE, Status::Valid),
    (0x02E0, Status::Mapped("\u{263}")),
    (0x02E1, Status::Mapped("l")),
    (0x02E2, Status::Mapped("s")),
    (0x02E3, Status::Mapped("x")),
    (0x02E4, Status::Mapped("\u{295}")),
    (0x02E5, Status::Valid),
    (0x0340, Status::Mapped("\u{300}")),
    (0x0341, Status::Mapped("\u{301}")),
    (0x0342, Status::Valid),
    (0x0343, Status::Mapped("\u{313}")),
    (0x0344, Status::Mapped("\u{308}\u{301}")),
    (0x0345, Status::Mapped("\u{3B9}")),
    (0x0346, Status::Valid),
    (0x034F, Status::Ignored),
    (0x0350, Status::Valid),
    (0x0370, Status::Mapped("\u{371}")),
    (0x0371, Status::Valid),
    (0x0372, Status::Mapped("\u{373}")),
    (0x0373, Status::Valid),
    (0x0374, Status::Mapped("\u{2B9}")),
    (0x0375, Status::Valid),
    (0x0376, Status::Mapped("\u{377}")),
    (0x0377, Status::Valid),
    (0x0378, Status::Disallowed),
    (0x037A, Status::Mapped(" \u{3B9}")),
    (0x037B, Status::Valid),
    (0x037E, Status::Mapped(";")),
    (0x037F, Status::Mapped("\u{3F3}")),
    (0x0380, Status::Disallowed),
    (0x0384, Status::Mapped(" \u{301}")),
    (0x0385, Status::Mapped(" \u{308}\u{301}")),
    (0x0386, Status::Mapped("\u{3AC}")),
    (0x0387, Status::Mapped("\u{B7}")),
    (0x0388, Status::Mapped("\u{3AD}")),
    (0x0389, Status::Mapped("\u{3AE}")),
    (0x038A, Status::Mapped("\u{3AF}")),
    (0x038B, Status::Disallowed),
    (0x038C, Status::Mapped("\u{3CC}")),
    (0x038D, Status::Disallowed),
    (0x038E, Status::Mapped("\u{3CD}")),
    (0x038F, Status::Mapped("\u{3CE}")),
    (0x0390, Status::Valid),
    (0x0391, Status::Mapped("\u{3B1}")),
    (0x0392, Status::Mapped("\u{3B2}")),
    (0x0393, Status::Mapped("\u{3B3}")),
    (0x0394, Status::Mapped("\u{3B4}")),
    (0x0395, Status::Mapped("\u{3B5}")),
    (0x0396, Status::Mapped("\u{3B6}")),
    (0x0397, Status::Mapped("\u{3B7}")),
    (0x0398, Status::Mapped("\u{3B8}")),
    (0x0399, Status::Mapped("\u{3B9}")),
    (0x039A, Status::Mapped("\u{3BA}")),
    (0x039B, Status::Mapped("\u{3BB}")),
    (0x039C, Status::Mapped("\u{3BC}")),
    (0x039D, Status::Mapped("\u{3BD}")),
    (0x039E, Status::Mapped("\u{3BE}")),
    (0x039F, Status::Mapped("\u{3BF}")),
    (0x03A0, Status::Mapped("\u{3C0}")),
    (0x03A1, Status::Mapped("\u{3C1}")),
    (0x03A2, Status::Disallowed),
    (0x03A3, Status::Mapped("\u{3C3}")),
    (0x03A4, Status::Mapped("\u{3C4}")),
    (0x03A5, Status::Mapped("\u{3C5}")),
    (0x03A6, Status::Mapped("\u{3C6}")),
    (0x03A7, Status::Mapped("\u{3C7}")),
    (0x03A8, Status::Mapped("\u{3C8}")),
    (0x03A9, Status::Mapped("\u{3C9}")),
    (0x03AA, Status::Mapped("\u{3CA}")),
    (0x03AB, Status::Mapped("\u{3CB}")),
    (0x03AC, Status::Valid),
    (0x03C2, Status::Deviation("\u{3C3}")),
    (0x03C3, Status::Valid),
    (0x03CF, Status::Mapped("\u{3D7}")),
    (0x03D0, Status::Mapped("\u{3B2}")),
    (0x03D1, Status::Mapped("\u{3B8}")),
    (0x03D2, Status::Mapped("\u{3C5}")),
    (0x03D3, Status::Mapped("\u{3CD}")),
    (0x03D4, Status::Mapped("\u{3CB}")),
    (0x03D5, Status::Mapped("\u{3C6}")),
    (0x03D6, Status::Mapped("\u{3C0}")),
    (0x03D7, Status::Valid),
    (0x03D8, Status::Mapped("\u{3D9}")),
    (0x03D9, Status::Valid),
    (0x03DA, Status::Mapped("\u{3DB}")),
    (0x03DB, Status::Valid),
    (0x03DC, Status::Mapped("\u{3DD}")),
    (0x03DD, Status::Valid),
    (0x03DE, Status::Mapped("\u{3DF}")),
    (0x03DF, Status::Valid),
    (0x03E0, Status::Mapped("\u{3E1}")),
    (0x03E1, Status::Valid),
    (0x03E2, Status::Mapped("\u{3E3}")),
    (0x03E3, Status::Valid),
    (0x03E4, Status::Mapped("\u{3E5}")),
    (0x03E5, Status::Valid),
    (0x03E6, Status::Mapped("\u{3E7}")),
    (0x03E7, Status::Valid),
    (0x03E8, Status::Mapped("\u{3E9}")),
    (0x03E9, Status::Valid),
    (0x03EA, Status::Mapped("\u{3EB}")),
    (0x03EB, Status::Valid),
    (0x03EC, Status::Mapped("\u{3ED}")),
    (0x03ED, Status::Valid),
    (0x03EE, Status::Mapped("\u{3EF}")),
    (0x03EF, Status::Valid),
    (0x03F0, Status::Mapped("\u{3BA}")),
    (0x03F1, Status::Mapped("\u{3C1}")),
    (0x03F2, Status::Mapped("\u{3C3}")),
    (0x03F3, Status::Valid),
    (0x03F4, Status::Mapped("\u{3B8}")),
    (0x03F5, Status::Mapped("\u{3B5}")),
    (0x03F6, Status::Valid),
    (0x03F7, Status::Mapped("\u{3F8}")),
    (0x03F8, Status::Valid),
    (0x03F9, Status::Mapped("\u{3C3}")),
    (0x03FA, Status::Mapped("\u{3FB}")),
    (0x03FB, Status::Valid),
    (0x03FD, Status::Mapped("\u{37B}")),
    (0x03FE, Status::Mapped("\u{37C}")),
    (0x03FF, Status::Mapped("\u{37D}")),
    (0x0400, Status::Mapped("\u{450}")),
    (0x0401, Status::Mapped("\u{451}")),
    (0x0402, Status::Mapped("\u{452}")),
    (0x0403, Status::Mapped("\u{453}")),
    (0x0404, Status::Mapped("\u{454}")),
    (0x0405, Status::Mapped("\u{455}")),
    (0x0406, Status::Mapped("\u{456}")),
    (0x0407, Status::Mapped("\u{457}")),
    (0x0408, Status::Mapped("\u{458}")),
    (0x0409, Status::Mapped("\u{459}")),
    (0x040A, Status::Mapped("\u{45A}")),
    (0x040B, Status::Mapped("\u{45B}")),
    (0x040C, Status::Mapped("\u{45C}")),
    (0x040D, Status::Mapped("\u{45D}")),
    (0x040E, Status::Mapped("\u{45E}")),
    (0x040F, Status::Mapped("\u{45F}")),
    (0x0410, Status::Mapped("\u{430}")),
    (0x0411, Status::Mapped("\u{431}")),
    (0x0412, Status::Mapped("\u{432}")),
    (0x0413, Status::Mapped("\u{433}")),
    (0x0414, Status::Mapped("\u{434}")),
    (0x0415, Status::Mapped("\u{435}")),
    (0x0416, Status::Mapped("\u{436}")),
    (0x0417, Status::Mapped("\u{437}")),
    (0x0418, Status::Mapped("\u{438}")),
    (0x0419, Status::Mapped("\u{439}")),
    (0x041A, Status::Mapped("\u{43A}")),
    (0x041B, Status::Mapped("\u{43B}")),
    (0x041C, Status::Mapped("\u{43C}")),
    (0x041D, Status::Mapped("\u{43D}")),
    (0x041E, Status::Mapped("\u{43E}")),
    (0x041F, Status::Mapped("\u{43F}")),
    (0x0420, Status::Mapped("\u{440}")),
    (0x0421, Status::Mapped("\u{441}")),
    (0x0422, Status::Mapped("\u{442}")),
    (0x0423, Status::Mapped("\u{443}")),
    (0x0424, Status::Mapped("\u{444}")),
    (0x0425, Status::Mapped("\u{445}")),
    (0x0426, Status::Mapped("\u{446}")),
    (0x0427, Status::Mapped("\u{447}")),
    (0x0428, Status::Mapped("\u{448}")),
    (0x0429, Status::Mapped("\u{449}")),
    (0x042A, Status::Mapped("\u{44A}")),
    (0x042B, Status::Mapped("\u{44B}")),
    (0x042C, Status::Mapped("\u{44C}")),
    (0x042D, Status::Mapped("\u{44D}")),
    (0x042E, Status::Mapped("\u{44E}")),
    (0x042F, Status::Mapped("\u{44F}")),
    (0x0430, Status::Valid),
    (0x0460, Status::Mapped("\u{461}")),
    (0x0461, Status::Valid),
    (0x0462, Status::Mapped("\u{463}")),
    (0x0463, Status::Valid),
    (0x0464, Status::Mapped("\u{465}")),
    (0x0465, Status::Valid),
    (0x0466, Status::Mapped("\u{467}")),
    (0x0467, Status::Valid),
    (0x0468, Status::Mapped("\u{469}")),
    (0x0469, Status::Valid),
    (0x046A, Status::Mapped("\u{46B}")),
    (0x046B, Status::Valid),
    (0x046C, Status::Mapped("\u{46D}")),
    (0x046D, Status::Valid),
    (0x046E, Status::Mapped("\u{46F}")),
    (0x046F, Status::Valid),
    (0x0470, Status::Mapped("\u{471}")),
    (0x0471, Status::Valid),
    (0x0472, Status::Mapped("\u{473}")),
    (0x0473, Status::Valid),
    (0x0474, Status::Mapped("\u{475}")),
    (0x0475, Status::Valid),
    (0x0476, Status::Mapped("\u{477}")),
    (0x0477, Status::Valid),
    (0x0478, Status::Mapped("\u{479}")),
    (0x0479, Status::Valid),
    (0x047A, Status::Mapped("\u{47B}")),
    (0x047B, Status::Valid),
    (0x047C, Status::Mapped("\u{47D}")),
    (0x047D, Status::Valid),
    (0x047E, Status::Mapped("\u{47F}")),
    (0x047F, Status::Valid),
    (0x0480, Status::Mapped("\u{481}")),
    (0x0481, Status::Valid),
    (0x048A, Status::Mapped("\u{48B}")),
    (0x048B, Status::Valid),
    (0x048C, Status::Mapped("\u{48D}")),
    (0x048D, Status::Valid),
    (0x048E, Status::Mapped("\u{48F}")),
    (0x048F, Status::Valid),
    (0x0490, Status::Mapped("\u{491}")),
    (0x0491, Status::Valid),
    (0x0492, Status::Mapped("\u{493}")),
    (0x0493, Status::Valid),
    (0x0494, Status::Mapped("\u{495}")),
    (0x0495, Status::Valid),
    (0x0496, Status::Mapped("\u{497}")),
    (0x0497, Status::Valid),
    (0x0498, Status::Mapped("\u{499}")),
    (0x0499, Status::Valid),
    (0x049A, Status::Mapped("\u{49B}")),
    (0x049B, Status::Valid),
    (0x049C, Status::Mapped("\u{49D}")),
    (0x049D, Status::Valid),
    (0x049E, Status::Mapped("\u{49F}")),
    (0x049F, Status::Valid),
    (0x04A0, Status::Mapped("\u{4A1}")),
    (0x04A1, Status::Valid),
    (0x04A2, Status::Mapped("\u{4A3}")),
    (0x04A3, Status::Valid),
    (0x04A4, Status::Mapped("\u{4A5}")),
    (0x04A5, Status::Valid),
    (0x04A6, Status::Mapped("\u{4A7}")),
    (0x04A7, Status::Valid),
    (0x04A8, Status::Mapped("\u{4A9}")),
    (0x04A9, Status::Valid),
    (0x04AA, Status::Mapped("\u{4AB}")),
    (0x04AB, Status::Valid),
    (0x04AC, Status::Mapped("\u{4AD}")),
    (0x04AD, Status::Valid),
    (0x04AE, Status::Mapped("\u{4AF}")),
    (0x04AF, Status::Valid),
    (0x04B0, Status::Mapped("\u{4B1}")),
    (0x04B1, Status::Valid),
    (0x04B2, Status::Mapped("\u{4B3}")),
    (0x04B3, Status::Valid),
    (0x04B4, Status::Mapped("\u{4B5}")),
    (0x04B5, Status::Valid),
    (0x04B6, Status::Mapped("\u{4B7}")),
    (0x04B7, Status::Valid),
    (0x04B8, Status::Mapped("\u{4B9}")),
    (0x04B9, Status::Valid),
    (0x04BA, Status::Mapped("\u{4BB}")),
    (0x04BB, Status::Valid),
    (0x04BC, Status::Mapped("\u{4BD}")),
    (0x04BD, Status::Valid),
    (0x04BE, Status::Mapped("\u{4BF}")),
    (0x04BF, Status::Valid),
    (0x04C0, Status::Mapped("\u{4CF}")),
    (0x04C1, Status::Mapped("\u{4C2}")),
    (0x04C2, Status::Valid),
    (0x04C3, Status::Mapped("\u{4C4}")),
    (0x04C4, Status::Valid),
    (0x04C5, Status::Mapped("\u{4C6}")),
    (0x04C6, Status::Valid),
    (0x04C7, Status::Mapped("\u{4C8}")),
    (0x04C8, Status::Valid),
    (0x04C9, Status::Mapped("\u{4CA}")),
    (0x04CA, Status::Valid),
    (0x04CB, Status::Mapped("\u{4CC}")),
    (0x04CC, Status::Valid),
    (0x04CD, Status::Mapped("\u{4CE}")),
    (0x04CE, Status::Valid),
    (0x04D0, Status::Mapped("\u{4D1}")),
    (0x04D1, Status::Valid),
    (0x04D2, Status::Mapped("\u{4D3}")),
    (0x04D3, Status::Valid),
    (0x04D4, Status::Mapped("\u{4D5}")),
    (0x04D5, Status::Valid),
    (0x04D6, Status::Mapped("\u{4D7}")),
    (0x04D7, Status::Valid),
    (0x04D8, Status::Mapped("\u{4D9}")),
    (0x04D9, Status::Valid),
    (0x04DA, Status::Mapped("\u{4DB}")),
    (0x04DB, Status::Valid),
    (0x04DC, Status::Mapped("\u{4DD}")),
    (0x04DD, Status::Valid),
    (0x04DE, Status::Mapped("\u{4DF}")),
    (0x04DF, Status::Valid),
    (0x04E0, Status::Mapped("\u{4E1}")),
    (0x04E1, Status::Valid),
    (0x04E2, Status::Mapped("\u{4E3}")),
    (0x04E3, Status::Valid),
    (0x04E4, Status::Mapped("\u{4E5}")),
    (0x04E5, Status::Valid),
    (0x04E6, Status::Mapped("\u{4E7}")),
    (0x04E7, Status::Valid),
    (0x04E8, Status::Mapped("\u{4E9}")),
    (0x04E9, Status::Valid),
    (0x04EA, Status::Mapped("\u{4EB}")),
    (0x04EB, Status::Valid),
    (0x04EC, Status::Mapped("\u{4ED}")),
    (0x04ED, Status::Valid),
    (0x04EE, Status::Mapped("\u{4EF}")),
    (0x04EF, Status::Valid),
    (0x04F0, Status::Mapped("\u{4F1}")),
    (0x04F1, Status::Valid),
    (0x04F2, Status::Mapped("\u{4F3}")),
    (0x04F3, Status::Valid),
    (0x04F4, Status::Mapped("\u{4F5}")),
    (0x04F5, Status::Valid),
    (0x04F6, Status::Mapped("\u{4F7}")),
    (0x04F7, Status::Valid),
    (0x04F8, Status::Mapped("\u{4F9}")),
    (0x04F9, Status::Valid),
    (0x04FA, Status::Mapped("\u{4FB}")),
    (0x04FB, Status::Valid),
    (0x04FC, Status::Mapped("\u{4FD}")),
    (0x04FD, Status::Valid),
    (0x04FE, Status::Mapped("\u{4FF}")),
    (0x04FF, Status::Valid),
    (0x0500, Status::Mapped("\u{501}")),
    (0x0501, Status::Valid),
    (0x0502, Status::Mapped("\u{503}")),
    (0x0503, Status::Valid),
    (0x0504, Status::Mapped("\u{505}")),
    (0x0505, Status::Valid),
    (0x0506, Status::Mapped("\u{507}")),
    (0x0507, Status::Valid),
    (0x0508, Status::Mapped("\u{509}")),
    (0x0509, Status::Valid),
    (0x050A, Status::Mapped("\u{50B}")),
    (0x050B, Status::Valid),
    (0x050C, Status::Mapped("\u{50D}")),
    (0x050D, Status::Valid),
    (0x050E, Status::Mapped("\u{50F}")),
    (0x050F, Status::Valid),
    (0x0510, Status::Mapped("\u{511}")),
    (0x0511, Status::Valid),
    (0x0512, Status::Mapped("\u{513}")),
    (0x0513, Status::Valid),
    (0x0514, Status::Mapped("\u{515}")),
    (0x0515, Status::Valid),
    (0x0516, Status::Mapped("\u{517}")),
    (0x0517, Status::Valid),
    (0x0518, Status::Mapped("\u{519}")),
    (0x0519, Status::Valid),
    (0x051A, Status::Mapped("\u{51B}")),
    (0x051B, Status::Valid),
    (0x051C, Status::Mapped("\u{51D}")),
    (0x051D, Status::Valid),
    (0x051E, Status::Mapped("\u{51F}")),
    (0x051F, Status::Valid),
    (0x0520, Status::Mapped("\u{521}")),
    (0x0521, Status::Valid),
    (0x0522, Status::Mapped("\u{523}")),
    (0x0523, Status::Valid),
    (0x0524, Status::Mapped("\u{525}")),
    (0x0525, Status::Valid),
    (0x0526, Status::Mapped("\u{527}")),
    (0x0527, Status::Valid),
    (0x0528, Status::Mapped("\u{529}")),
    (0x0529, Status::Valid),
    (0x052A, Status::Mapped("\u{52B}")),
    (0x052B, Status::Valid),
    (0x052C, Status::Mapped("\u{52D}")),
    (0x052D, Status::Valid),
    (0x052E, Status::Mapped("\u{52F}")),
    (0x052F, Status::Valid),
    (0x0530, Status::Disallowed),
    (0x0531, Status::Mapped("\u{561}")),
    (0x0532, Status::Mapped("\u{562}")),
    (0x0533, Status::Mapped("\u{563}")),
    (0x0534, Status::Mapped("\u{564}")),
    (0x0535, Status::Mapped("\u{565}")),
    (0x0536, Status::Mapped("\u{566}")),
    (0x0537, Status::Mapped("\u{567}")),
    (0x0538, Status::Mapped("\u{568}")),
    (0x0539, Status::Mapped("\u{569}")),
    (0x053A, Status::Mapped("\u{56A}")),
    (0x053B, Status::Mapped("\u{56B}")),
    (0x053C, Status::Mapped("\u{56C}")),
    (0x053D, Status::Mapped("\u{56D}")),
    (0x053E, Status::Mapped("\u{56E}")),
    (0x053F, Status::Mapped("\u{56F}")),
    (0x0540, Status::Mapped("\u{570}")),
    (0x0541, Status::Mapped("\u{571}")),
    (0x0542, Status::Mapped("\u{572}")),
    (0x0543, Status::Mapped("\u{573}")),
    (0x0544, Status::Mapped("\u{574}")),
    (0x0545, Status::Mapped("\u{575}")),
    (0x0546, Status::Mapped("\u{576}")),
    (0x0547, Status::Mapped("\u{577}")),
    (0x0548, Status::Mapped("\u{578}")),
    (0x0549, Status::Mapped("\u{579}")),
    (0x054A, Status::Mapped("\u{57A}")),
    (0x054B, Status::Mapped("\u{57B}")),
    (0x054C, Status::Mapped("\u{57C}")),
    (0x054D, Status::Mapped("\u{57D}")),
    (0x054E, Status::Mapped("\u{57E}")),
    (0x054F, Status::Mapped("\u{57F}")),
    (0x0550, Status::Mapped("\u{580}")),
    (0x0551, Status::Mapped("\u{581}")),
    (0x0552, Status::Mapped("\u{582}")),
    (0x0553, Status::Mapped("\u{583}")),
    (0x0554, Status::Mapped("\u{584}")),
    (0x0555, Status::Mapped("\u{585}")),
    (0x0556, Status::Mapped("\u{586}")),
    (0x0557, Status::Disallowed),
    (0x0559, Status::Valid),
    (0x0587, Status::Mapped("\u{565}\u{582}")),
    (0x0588, Status::Valid),
    (0x058B, Status::Disallowed),
    (0x058D, Status::Valid),
    (0x0590, Status::Disallowed),
    (0x0591, Status::Valid),
    (0x05C8, Status::Disallowed),
    (0x05D0, Status::Valid),
    (0x05EB, Status::Disallowed),
    (0x05EF, Status::Valid),
    (0x05F5, Status::Disallowed),
    (0x0606, Status::Valid),
    (0x061C, Status::Disallowed),
    (0x061D, Status::Valid),
    (0x0675, Status::Mapped("\u{627}\u{674}")),
    (0x0676, Status::Mapped("\u{648}\u{674}")),
    (0x0677, Status::Mapped("\u{6C7}\u{674}")),
    (0x0678, Status::Mapped("\u{64A}\u{674}")),
    (0x0679, Status::Valid),
    (0x06DD, Status::Disallowed),
    (0x06DE, Status::Valid),
    (0x070E, Status::Disallowed),
    (0x0710, Status::Valid),
    (0x074B, Status::Disallowed),
    (0x074D, Status::Valid),
    (0x07B2, Status::Disallowed),
    (0x07C0, Status::Valid),
    (0x07FB, Status::Disallowed),
    (0x07FD, Status::Valid),
    (0x082E, Status::Disallowed),
    (0x0830, Status::Valid),
    (0x083F, Status::Disallowed),
    (0x0840, Status::Valid),
    (0x085C, Status::Disallowed),
    (0x085E, Status::Valid),
    (0x085F, Status::Disallowed),
    (0x0860, Status::Valid),
    (0x086B, Status::Disallowed),
    (0x0870, Status::Valid),
    (0x0890, Status::Disallowed),
    (0x0897, Status::Valid),
    (0x08E2, Status::Disallowed),
    (0x08E3, Status::Valid),
    (0x0958, Status::Mapped("\u{915}\u{93C}")),
    (0x0959, Status::Mapped("\u{916}\u{93C}")),
    (0x095A, Status::Mapped("\u{917}\u{93C}")),
    (0x095B, Status::Mapped("\u{91C}\u{93C}")),
    (0x095C, Status::Mapped("\u{921}\u{93C}")),
    (0x095D, Status::Mapped("\u{922}\u{93C}")),
    (0x095E, Status::Mapped("\u{92B}\u{93C}")),
    (0x095F, Status::Mapped("\u{92F}\u{93C}")),
    (0x0960, Status::Valid),
    (0x0984, Status::Disallowed),
    (0x0985, Status::Valid),
    (0x098D, Status::Disallowed),
    (0x098F, Status::Valid),
    (0x0991, Status::Disallowed),
    (0x0993, Status::Valid),
    (0x09A9, Status::Disallowed),
    (0x09AA, Status::Valid),
    (0x09B1, Status::Disallowed),
    (0x09B2, Status::Valid),
    (0x09B3, Status::Disallowed),
    (0x09B6, Status::Valid),
    (0x09BA, Status::Disallowed),
    (0x09BC, Status::Valid),
    (0x09C5, Status::Disallowed),
    (0x09C7, Status::Valid),
    (0x09C9, Status::Disallowed),
    (0x09CB, Status::Valid),
    (0x09CF, Status::Disallowed),
    (0x09D7, Status::Valid),
    (0x09D8, Status::Disallowed),
    (0x09DC, Status::Mapped("\u{9A1}\u{9BC}")),
    (0x09DD, Status::Mapped("\u{9A2}\u{9BC}")),
    (0x09DE, Status::Disallowed),
    (0x09DF, Status::Mapped("\u{9AF}\u{9BC}")),
    (0x09E0, Status::Valid),
    (0x09E4, Status::Disallowed),
    (0x09E6, Status::Valid),
    (0x09FF, Status::Disallowed),
    (0x0A01, Status::Valid),
    (0x0A04, Status::Disallowed),
    (0x0A05, Status::Valid),
    (0x0A0B, Status::Disallowed),
    (0x0A0F, Status::Valid),
    (0x0A11, Status::Disallowed),
    (0x0A13, Status::Valid),
    (0x0A29, Status::Disallowed),
    (0x0A2A, Status::Valid),
    (0x0A31, Status::Disallowed),
    (0x0A32, Status::Valid),
    (0x0A33, Status::Mapped("\u{A32}\u{A3C}")),
    (0x0A34, Status::Disallowed),
    (0x0A35, Status::Valid),
    (0x0A36, Status::Mapped("\u{A38}\u{A3C}")),
    (0x0A37, Status::Disallowed),
    (0x0A38, Status::Valid),
    (0x0A3A, Status::Disallowed),
    (0x0A3C, Status::Valid),
    (0x0A3D, Status::Disallowed),
    (0x0A3E, Status::Valid),
    (0x0A43, Status::Disallowed),
    (0x0A47, Status::Valid),
    (0x0A49, Status::Disallowed),
    (0x0A4B, Status::Valid),
    (0x0A4E, Status::Disallowed),
    (0x0A51, Status::Valid),
    (0x0A52, Status::Disallowed),
    (0x0A59, Status::Mapped("\u{A16}\u{A3C}")),
    (0x0A5A, Status::Mapped("\u{A17}\u{A3C}")),
    (0x0A5B, Status::Mapped("\u{A1C}\u{A3C}")),
    (0x0A5C, Status::Valid),
    (0x0A5D, Status::Disallowed),
    (0x0A5E, Status::Mapped("\u{A2B}\u{A3C}")),
    (0x0A5F, Status::Disallowed),
    (0x0A66, Status::Valid),
    (0x0A77, Status::Disallowed),
    (0x0A81, Status::Valid),
    (0x0A84, Status::Disallowed),
    (0x0A85, Status::Valid),
    (0x0A8E, Status::Disallowed),
    (0x0A8F, Status::Valid),
    (0x0A92, Status::Disallowed),
    (0x0A93, Status::Valid),
    (0x0AA9, Status::Disallowed),
    (0x0AAA, Status::Valid),
    (0x0AB1, Status::Disallowed),
    (0x0AB2, Status::Valid),
    (0x0AB4, Status::Disallowed),
    (0x0AB5, Status::Valid),
    (0x0ABA, Status::Disallowed),
    (0x0ABC, Status::Valid),
    (0x0AC6, Status::Disallowed),
    (0x0AC7, Status::Valid),
    (0x0ACA, Status::Disallowed),
    (0x0ACB, Status::Valid),
    (0x0ACE, Status::Disallowed),
    (0x0AD0, Status::Valid),
    (0x0AD1, Status::Disallowed),
    (0x0AE0, Status::Valid),
    (0x0AE4, Status::Disallowed),
    (0x0AE6, Status::Valid),
    (0x0AF2, Status::Disallowed),
    (0x0AF9, Status::Valid),
    (0x0B00, Status::Disallowed),
    (0x0B01, Status::Valid),
    (0x0B04, Status::Disallowed),
    (0x0B05, Status::Valid),
    (0x0B0D, Status::Disallowed),
    (0x0B0F, Status::Valid),
    (0x0B11, Status::Disallowed),
    (0x0B13, Status::Valid),
    (0x0B29, Status::Disallowed),
    (0x0B2A, Status::Valid),
    (0x0B31, Status::Disallowed),
    (0x0B32, Status::Valid),
    (0x0B34, Status::Disallowed),
    (0x0B35, Status::Valid),
    (0x0B3A, Status::Disallowed),
    (0x0B3C, Status::Valid),
    (0x0B45, Status::Disallowed),
    (0x0B47, Status::Valid),
    (0x0B49, Status::Disallowed),
    (0x0B4B, Status::Valid),
    (0x0B4E, Status::Disallowed),
    (0x0B55, Status::Valid),
    (0x0B58, Status::Disallowed),
    (0x0B5C, Status::Mapped("\u{B21}\u{B3C}")),
    (0x0B5D, Status::Mapped("\u{B22}\u{B3C}")),
    (0x0B5E, Status::Disallowed),
    (0x0B5F, Status::Valid),
    (0x0B64, Status::Disallowed),
    (0x0B66, Status::Valid),
    (0x0B78, Status::Disallowed),
    (0x0B82, Status::Valid),
    (0x0B84, Status::Disallowed),
    (0x0B85, Status::Valid),
    (0x0B8B, Status::Disallowed),
    (0x0B8E, Status::Valid),
    (0x0B91, Status::Disallowed),
    (0x0B92, Status::Valid),
    (0x0B96, Status::Disallowed),
    (0x0B99, Status::Valid),
    (0x0B9B, Status::Disallowed),
    (0x0B9C, Status::Valid),
    (0x0B9D, Status::Disallowed),
    (0x0B9E, Status::Valid),
    (0x0BA0, Status::Disallowed),
    (0x0BA3, Status::Valid),
    (0x0BA5, Status::Disallowed),
    (0x0BA8, Status::Valid),
    (0x0BAB, Status::Disallowed),
    (0x0BAE, Status::Valid),
    (0x0BBA, Status::Disallowed),
    (0x0BBE, Status::Valid),
    (0x0BC3, Status::Disallowed),
    (0x0BC6, Status::Valid),
    (0x0BC9, Status::Disallowed),
    (0x0BCA, Status::Valid),
    (0x0BCE, Status::Disallowed),
    (0x0BD0, Status::Valid),
    (0x0BD1, Status::Disallowed),
    (0x0BD7, Status::Valid),
    (0x0BD8, Status::Disallowed),
    (0x0BE6, Status::Valid),
    (0x0BFB, Status::Disallowed),
    (0x0C00, Status::Valid),
    (0x0C0D, Status::Disallowed),
    (0x0C0E, Status::Valid),
    (0x0C11, Status::Disallowed),
    (0x0C12, Status::Valid),
    (0x0C29, Status::Disallowed),
    (0x0C2A, Status::Valid),
    (0x0C3A, Status::Disallowed),
    (0x0C3C, Status::Valid),
    (0x0C45, Status::Disallowed),
    (0x0C46, Status::Valid),
    (0x0C49, Status::Disallowed),
    (0x0C4A, Status::Valid),
    (0x0C4E, Status::Disallowed),
    (0x0C55, Status::Valid),
    (0x0C57, Status::Disallowed),
    (0x0C58, Status::Valid),
    (0x0C5B, Status::Disallowed),
    (0x0C5C, Status::Valid),
    (0x0C5E, Status::Disallowed),
    (0x0C60, Status::Valid),
    (0x0C64, Status::Disallowed),
    (0x0C66, Status::Valid),
    (0x0C70, Status::Disallowed),
    (0x0C77, Status::Valid),
    (0x0C8D, Status::Disallowed),
    (0x0C8E, Status::Valid),
    (0x0C91, Status::Disallowed),
    (0x0C92, Status::Valid),
    (0x0CA9, Status::Disallowed),
    (0x0CAA, Status::Valid),
    (0x0CB4, Status::Disallowed),
    (0x0CB5, Status::Valid),
    (0x0CBA, Status::Disallowed),
    (0x0CBC, Status::Valid),
    (0x0CC5, Status::Disallowed),
    (0x0CC6, Status::Valid),
    (0x0CC9, Status::Disallowed),
    (0x0CCA, Status::Valid),
    (0x0CCE, Status::Disallowed),
    (0x0CD5, Status::Valid),
    (0x0CD7, Status::Disallowed),
    (0x0CDC, Status::Valid),
    (0x0CDF, Status::Disallowed),
    (0x0CE0, Status::Valid),
    (0x0CE4, Status::Disallowed),
    (0x0CE6, Status::Valid),
    (0x0CF0, Status::Disallowed),
    (0x0CF1, Status::Valid),
    (0x0CF4, Status::Disallowed),
    (0x0D00, Status::Valid),
    (0x0D0D, Status::Disallowed),
    (0x0D0E, Status::Valid),
    (0x0D11, Status::Disallowed),
    (0x0D12, Status::Valid),
    (0x0D45, Status::Disallowed),
    (0x0D46, Status::Valid),
    (0x0D49, Status::Disallowed),
    (0x0D4A, Status::Valid),
    (0x0D50, Status::Disallowed),
    (0x0D54, Status::Valid),
    (0x0D64, Status::Disallowed),
    (0x0D66, Status::Valid),
    (0x0D80, Status::Disallowed),
    (0x0D81, Status::Valid),
    (0x0D84, Status::Disallowed),
    (0x0D85, Status::Valid),
    (0x0D97, Status::Disallowed),
    (0x0D9A, Status::Valid),
    (0x0DB2, Status::Disallowed),
    (0x0DB3, Status::Valid),
    (0x0DBC, Status::Disallowed),
    (0x0DBD, Status::Valid),
    (0x0DBE, Status::Disallowed),
    (0x0DC0, Status::Valid),
    (0x0DC7, Status::Disallowed),
    (0x0DCA, Status::Valid),
    (0x0DCB, Status::Disallowed),
    (0x0DCF, Status::Valid),
    (0x0DD5, Status::Disallowed),
    (0x0DD6, Status::Valid),
    (0x0DD7, Status::Disallowed),
    (0x0DD8, Status::Valid),
    (0x0DE0, Status::Disallowed),
    (0x0DE6, Status::Valid),
    (0x0DF0, Status::Disallowed),
    (0x0DF2, Status::Valid),
    (0x0DF5, Status::Disallowed),
    (0x0E01, Status::Valid),
    (0x0E33, Status::Mapped("\u{E4D}\u{E32}")),
    (0x0E34, Status::Valid),
    (0x0E3B, Status::Disallowed),
    (0x0E3F, Status::Valid),
    (0x0E5C, Status::Disallowed),
    (0x0E81, Status::Valid),
    (0x0E83, Status::Disallowed),
    (0x0E84, Status::Valid),
    (0x0E85, Status::Disallowed),
    (0x0E86, Status::Valid),
    (0x0E8B, Status::Disallowed),
    (0x0E8C, Status::Valid),
    (0x0EA4, Status::Disallowed),
    (0x0EA5, Status::Valid),
    (0x0EA6, Status::Disallowed),
    (0x0EA7, Status::Valid),
    (0x0EB3, Status::Mapped("\u{ECD}\u{EB2}")),
    (0x0EB4, Status::Valid),
    (0x0EBE, Status::Disallowed),
    (0x0EC0, Status::Valid),
    (0x0EC5, Status::Disallowed),
    (0x0EC6, Status::Valid),
    (0x0EC7, Status::Disallowed),
    (0x0EC8, Status::Valid),
    (0x0ECF, Status::Disallowed),
    (0x0ED0, Status::Valid),
    (0x0EDA, Status::Disallowed),
    (0x0EDC, Status::Mapped("\u{EAB}\u{E99}")),
    (0x0EDD, Status::Mapped("\u{EAB}\u{EA1}")),
    (0x0EDE, Status::Valid),
    (0x0EE0, Status::Disallowed),
    (0x0F00, Status::Valid),
    (0x0F0C, Status::Mapped("\u{F0B}")),
    (0x0F0D, Status::Valid),
    (0x0F43, Status::Mapped("\u{F42}\u{FB7}")),
    (0x0F44, Status::Valid),
    (0x0F48, Status::Disallowed),
    (0x0F49, Status::Valid),
    (0x0F4D, Status::Mapped("\u{F4C}\u{FB7}")),
    (0x0F4E, Status::Valid),
    (0x0F52, Status::Mapped("\u{F51}\u{FB7}")),
    (0x0F53, Status::Valid),
    (0x0F57, Status::Mapped("\u{F56}\u{FB7}")),
    (0x0F58, Status::Valid),
    (0x0F5C, Status::Mapped("\u{F5B}\u{FB7}")),
    (0x0F5D, Status::Valid),
    (0x0F69, Status::Mapped("\u{F40}\u{FB5}")),
    (0x0F6A, Status::Valid),
    (0x0F6D, Status::Disallowed),
    (0x0F71, Status::Valid),
    (0x0F73, Status::Mapped("\u{F71}\u{F72}")),
    (0x0F74, Status::Valid),
    (0x0F75, Status::Mapped("\u{F71}\u{F74}")),
    (0x0F76, Status::Mapped("\u{FB2}\u{F80}")),
    (0x0F77, Status::Mapped("\u{FB2}\u{F71}\u{F80}")),
    (0x0F78, Status::Mapped("\u{FB3}\u{F80}")),
    (0x0F79, Status::Mapped("\u{FB3}\u{F71}\u{F80}")),
    (0x0F7A, Status::Valid),
    (0x0F81, Status::Mapped("\u{F71}\u{F80}")),
    (0x0F82, Status::Valid),
    (0x0F93, Status::Mapped("\u{F92}\u{FB7}")),
    (0x0F94, Status::Valid),
    (0x0F98, Status::Disallowed),
    (0x0F99, Status::Valid),
    (0x0F9D, Status::Mapped("\u{F9C}\u{FB7}")),
    (0x0F9E, Status::Valid),
    (0x0FA2, Status::Mapped("\u{FA1}\u{FB7}")),
    (0x0FA3, Status::Valid),
    (0x0FA7, Status::Mapped("\u{FA6}\u{FB7}")),
    (0x0FA8, Status::Valid),
    (0x0FAC, Status::Mapped("\u{FAB}\u{FB7}")),
    (0x0FAD, Status::Valid),
    (0x0FB9, Status::Mapped("\u{F90}\u{FB5}")),
    (0x0FBA, Status::Valid),
    (0x0FBD, Status::Disallowed),
    (0x0FBE, Status::Valid),
    (0x0FCD, Status::Disallowed),
    (0x0FCE, Status::Valid),
    (0x0FDB, Status::Disallowed),
    (0x1000, Status::Valid),
    (0x10A0, Status::Mapped("\u{2D00}")),
    (0x10A1, Status::Mapped("\u{2D01}")),
    (0x10A2, Status::Mapped("\u{2D02}")),
    (0x10A3, Status::Mapped("\u{2D03}")),
    (0x10A4, Status::Mapped("\u{2D04}")),
    (0x10A5, Status::Mapped("\u{2D05}")),
    (0x10A6, Status::Mapped("\u{2D06}")),
    (0x10A7, Status::Mapped("\u{2D07}")),
    (0x10A8, Status::Mapped("\u{2D08}")),
    (0x10A9, Status::Mapped("\u{2D09}")),
    (0x10AA, Status::Mapped("\u{2D0A}")),
    (0x10AB, Status::Mapped("\u{2D0B}")),
    (0x10AC, Status::Mapped("\u{2D0C}")),
    (0x10AD, Status::Mapped("\u{2D0D}")),
    (0x10AE, Status::Mapped("\u{2D0E}")),
    (0x10AF, Status::Mapped("\u{2D0F}")),
    (0x10B0, Status::Mapped("\u{2D10}")),
    (0x10B1, Status::Mapped("\u{2D11}")),
    (0x10B2, Status::Mapped("\u{2D12}")),
    (0x10B3, Status::Mapped("\u{2D13}")),
    (0x10B4, Status::Mapped("\u{2D14}")),
    (0x10B5, Status::Mapped("\u{2D15}")),
    (0x10B6, Status::Mapped("\u{2D16}")),
    (0x10B7, Status::Mapped("\u{2D17}")),
    (0x10B8, Status::Mapped("\u{2D18}")),
    (0x10B9, Status::Mapped("\u{2D19}")),
    (0x10BA, Status::Mapped("\u{2D1A}")),
    (0x10BB, Status::Mapped("\u{2D1B}")),
    (0x10BC, Status::Mapped("\u{2D1C}")),
    (0x10BD, Status::Mapped("\u{2D1D}")),
    (0x10BE, Status::Mapped("\u{2D1E}")),
    (0x10BF, Status::Mapped("\u{2D1F}")),
    (0x10C0, Status::Mapped("\u{2D20}")),
    (0x10C1, Status::Mapped("\u{2D21}")),
    (0x10C2, Status::Mapped("\u{2D22}")),
    (0x10C3, Status::Mapped("\u{2D23}")),
    (0x10C4, Status::Mapped("\u{2D24}")),
    (0x10C5, Status::Mapped("\u{2D25}")),
    (0x10C6, Status::Disallowed),
    (0x10C7, Status::Mapped("\u{2D27}")),
    (0x10C8, Status::Disallowed),
    (0x10CD, Status::Mapped("\u{2D2D}")),
    (0x10CE, Status::Disallowed),
    (0x10D0, Status::Valid),
    (0x10FC, Status::Mapped("\u{10DC}")),
    (0x10FD, Status::Valid),
    (0x115F, Status::Ignored),
    (0x1161, Status::Valid),
    (0x1249, Status::Disallowed),
    (0x124A, Status::Valid),
    (0x124E, Status::Disallowed),
    (0x1250, Status::Valid),
    (0x1257, Status::Disallowed),
    (0x1258, Status::Valid),
    (0x1259, Status::Disallowed),
    (0x125A, Status::Valid),
    (0x125E, Status::Disallowed),
    (0x1260, Status::Valid),
    (0x1289, Status::Disallowed),
    (0x128A, Status::Valid),
    (0x128E, Status::Disallowed),
    (0x1290, Status::Valid),
    (0x12B1, Status::Disallowed),
    (0x12B2, Status::Valid),
    (0x12B6, Status::Disallowed),
    (0x12B8, Status::Valid),
    (0x12BF, Status::Disallowed),
    (0x12C0, Status::Valid),
    (0x12C1, Status::Disallowed),
    (0x12C2, Status::Valid),
    (0x12C6, Status::Disallowed),
    (0x12C8, Status::Valid),
    (0x12D7, Status::Disallowed),
    (0x12D8, Status::Valid),
    (0x1311, Status::Disallowed),
    (0x1312, Status::Valid),
    (0x1316, Status::Disallowed),
    (0x1318, Status::Valid),
    (0x135B, Status::Disallowed),
    (0x135D, Status::Valid),
    (0x137D, Status::Disallowed),
    (0x1380, Status::Valid),
    (0x139A, Status::Disallowed),
    (0x13A0, Status::Valid),
    (0x13F6, Status::Disallowed),
    (0x13F8, Status::Mapped("\u{13F0}")),
    (0x13F9, Status::Mapped("\u{13F1}")),
    (0x13FA, Status::Mapped("\u{13F2}")),
    (0x13FB, Status::Mapped("\u{13F3}")),
    (0x13FC, Status::Mapped("\u{13F4}")),
    (0x13FD, Status::Mapped("\u{13F5}")),
    (0x13FE, Status::Disallowed),
    (0x1400, Status::Valid),
    (0x1680, Status::Disallowed),
    (0x1681, Status::Valid),
    (0x169D, Status::Disallowed),
    (0x16A0, Status::Valid),
    (0x16F9, Status::Disallowed),
    (0x1700, Status::Valid),
    (0x1716, Status::Disallowed),
    (0x171F, Status::Valid),
    (0x1737, Status::Disallowed),
    (0x1740, Status::Valid),
    (0x1754, Status::Disallowed),
    (0x1760, Status::Valid),
    (0x176D, Status::Disallowed),
    (0x176E, Status::Valid),
    (0x1771, Status::Disallowed),
    (0x1772, Status::Valid),
    (0x1774, Status::Disallowed),
    (0x1780, Status::Valid),
    (0x17B4, Status::Ignored),
    (0x17B6, Status::Valid),
    (0x17DE, Status::Disallowed),
    (0x17E0, Status::Valid),
    (0x17EA, Status::Disallowed),
    (0x17F0, Status::Valid),
    (0x17FA, Status::Disallowed),
    (0x1800, Status::Valid),
    (0x180B, Status::Ignored),
    (0x1810, Status::Valid),
    (0x181A, Status::Disallowed),
    (0x1820, Status::Valid),
    (0x1879, Status::Disallowed),
    (0x1880, Status::Valid),
    (0x18AB, Status::Disallowed),
    (0x18B0, Status::Valid),
    (0x18F6, Status::Disallowed),
    (0x1900, Status::Valid),
    (0x191F, Status::Disallowed),
    (0x1920, Status::Valid),
    (0x192C, Status::Disallowed),
    (0x1930, Status::Valid),
    (0x193C, Status::Disallowed),
    (0x1940, Status::Valid),
    (0x1941, Status::Disallowed),
    (0x1944, Status::Valid),
    (0x196E, Status::Disallowed),
    (0x1970, Status::Valid),
    (0x1975, Status::Disallowed),
    (0x1980, Status::Valid),
    (0x19AC, Status::Disallowed),
    (0x19B0, Status::Valid),
    (0x19CA, Status::Disallowed),
    (0x19D0, Status::Valid),
    (0x19DB, Status::Disallowed),
    (0x19DE, Status::Valid),
    (0x1A1C, Status::Disallowed),
    (0x1A1E, Status::Valid),
    (0x1A5F, Status::Disallowed),
    (0x1A60, Status::Valid),
    (0x1A7D, Status::Disallowed),
    (0x1A7F, Status::Valid),
    (0x1A8A, Status::Disallowed),
    (0x1A90, Status::Valid),
    (0x1A9A, Status::Disallowed),
    (0x1AA0, Status::Valid),
    (0x1AAE, Status::Disallowed),
    (0x1AB0, Status::Valid),
    (0x1ADE, Status::Disallowed),
    (0x1AE0, Status::Valid),
    (0x1AEC, Status::Disallowed),
    (0x1B00, Status::Valid),
    (0x1B4D, Status::Disallowed),
    (0x1B4E, Status::Valid),
    (0x1BF4, Status::Disallowed),
    (0x1BFC, Status::Valid),
    (0x1C38, Status::Disallowed),
    (0x1C3B, Status::Valid),
    (0x1C4A, Status::Disallowed),
    (0x1C4D, Status::Valid),
    (0x1C80, Status::Mapped("\u{432}")),
    (0x1C81, Status::Mapped("\u{434}")),
    (0x1C82, Status::Mapped("\u{43E}")),
    (0x1C83, Status::Mapped("\u{441}")),
    (0x1C84, Status::Mapped("\u{442}")),
    (0x1C86, Status::Mapped("\u{44A}")),
    (0x1C87, Status::Mapped("\u{463}")),
    (0x1C88, Status::Mapped("\u{A64B}")),
    (0x1C89, Status::Mapped("\u{1C8A}")),
    (0x1C8A, Status::Valid),
    (0x1C8B, Status::Disallowed),
    (0x1C90, Status::Mapped("\u{10D0}")),
    (0x1C91, Status::Mapped("\u{10D1}")),
    (0x1C92, Status::Mapped("\u{10D2}")),
    (0x1C93, Status::Mapped("\u{10D3}")),
    (0x1C94, Status::Mapped("\u{10D4}")),
    (0x1C95, Status::Mapped("\u{10D5}")),
    (0x1C96, Status::Mapped("\u{10D6}")),
    (0x1C97, Status::Mapped("\u{10D7}")),
    (0x1C98, Status::Mapped("\u{10D8}")),
    (0x1C99, Status::Mapped("\u{10D9}")),
    (0x1C9A, Status::Mapped("\u{10DA}")),
    (0x1C9B, Status::Mapped("\u{10DB}")),
    (0x1C9C, Status::Mapped("\u{10DC}")),
    (0x1C9D, Status::Mapped("\u{10DD}")),
    (0x1C9E, Status::Mapped("\u{10DE}")),
    (0x1C9F, Status::Mapped("\u{10DF}")),
    (0x1CA0, Status::Mapped("\u{10E0}")),
    (0x1CA1, Status::Mapped("\u{10E1}")),
    (0x1CA2, Status::Mapped("\u{10E2}")),
    (0x1CA3, Status::Mapped("\u{10E3}")),
    (0x1CA4, Status::Mapped("\u{10E4}")),
    (0x1CA5, Status::Mapped("\u{10E5}")),
    (0x1CA6, Status::Mapped("\u{10E6}")),
    (0x1CA7, Status::Mapped("\u{10E7}")),
    (0x1CA8, Status::Mapped("\u{10E8}")),
    (0x1CA9, Status::Mapped("\u{10E9}")),
    (0x1CAA, Status::Mapped("\u{10EA}")),
    (0x1CAB, Status::Mapped("\u{10EB}")),
    (0x1CAC, Status::Mapped("\u{10EC}")),
    (0x1CAD, Status::Mapped("\u{10ED}")),
    (0x1CAE, Status::Mapped("\u{10EE}")),
    (0x1CAF, Status::Mapped("\u{10EF}")),
    (0x1CB0, Status::Mapped("\u{10F0}")),
    (0x1CB1, Status::Mapped("\u{10F1}")),
    (0x1CB2, Status::Mapped("\u{10F2}")),
    (0x1CB3, Status::Mapped("\u{10F3}")),
    (0x1CB4, Status::Mapped("\u{10F4}")),
    (0x1CB5, Status::Mapped("\u{10F5}")),
    (0x1CB6, Status::Mapped("\u{10F6}")),
    (0x1CB7, Status::Mapped("\u{10F7}")),
    (0x1CB8, Status::Mapped("\u{10F8}")),
    (0x1CB9, Status::Mapped("\u{10F9}")),
    (0x1CBA, Status::Mapped("\u{10FA}")),
    (0x1CBB, Status::Disallowed),
    (0x1CBD, Status::Mapped("\u{10FD}")),
    (0x1CBE, Status::Mapped("\u{10FE}")),
    (0x1CBF, Status::Mapped("\u{10FF}")),
    (0x1CC0, Status::Valid),
    (0x1CC8, Status::Disallowed),
    (0x1CD0, Status::Valid),
    (0x1CFB, Status::Disallowed),
    (0x1D00, Status::Valid),
    (0x1D2C, Status::Mapped("a")),
    (0x1D2D, Status::Mapped("\u{E6}")),
    (0x1D2E, Status::Mapped("b")),
    (0x1D2F, Status::Valid),
    (0x1D30, Status::Mapped("d")),
    (0x1D31, Status::Mapped("e")),
    (0x1D32, Status::Mapped("\u{1DD}")),
    (0x1D33, Status::Mapped("g")),
    (0x1D34, Status::Mapped("h")),
    (0x1D35, Status::Mapped("i")),
    (0x1D36, Status::Mapped("j")),
    (0x1D37, Status::Mapped("k")),
    (0x1D38, Status::Mapped("l")),
    (0x1D39, Status::Mapped("m")),
    (0x1D3A, Status::Mapped("n")),
    (0x1D3B, Status::Valid),
    (0x1D3C, Status::Mapped("o")),
    (0x1D3D, Status::Mapped("\u{223}")),
    (0x1D3E, Status::Mapped("p")),
    (0x1D3F, Status::Mapped("r")),
    (0x1D40, Status::Mapped("t")),
    (0x1D41, Status::Mapped("u")),
    (0x1D42, Status::Mapped("w")),
    (0x1D43, Status::Mapped("a")),
    (0x1D44, Status::Mapped("\u{250}")),
    (0x1D45, Status::Mapped("\u{251}")),
    (0x1D46, Status::Mapped("\u{1D02}")),
    (0x1D47, Status::Mapped("b")),
    (0x1D48, Status::Mapped("d")),
    (0x1D49, Status::Mapped("e")),
    (0x1D4A, Status::Mapped("\u{259}")),
    (0x1D4B, Status::Mapped("\u{25B}")),
    (0x1D4C, Status::Mapped("\u{25C}")),
    (0x1D4D, Status::Mapped("g")),
    (0x1D4E, Status::Valid),
    (0x1D4F, Status::Mapped("k")),
    (0x1D50, Status::Mapped("m")),
    (0x1D51, Status::Mapped("\u{14B}")),
    (0x1D52, Status::Mapped("o")),
    (0x1D53, Status::Mapped("\u{254}")),
    (0x1D54, Status::Mapped("\u{1D16}")),
    (0x1D55, Status::Mapped("\u{1D17}")),
    (0x1D56, Status::Mapped("p")),
    (0x1D57, Status::Mapped("t")),
    (0x1D58, Status::Mapped("u")),
    (0x1D59, Status::Mapped("\u{1D1D}")),
    (0x1D5A, Status::Mapped("\u{26F}")),
    (0x1D5B, Status::Mapped("v")),
    (0x1D5C, Status::Mapped("\u{1D25}")),
    (0x1D5D, Status::Mapped("\u{3B2}")),
    (0x1D5E, Status::Mapped("\u{3B3}")),
    (0x1D5F, Status::Mapped("\u{3B4}")),
    (0x1D60, Status::Mapped("\u{3C6}")),
    (0x1D61, Status::Mapped("\u{3C7}")),
    (0x1D62, Status::Mapped("i")),
    (0x1D63, Status::Mapped("r")),
    (0x1D64, Status::Mapped("u")),
    (0x1D65, Status::Mapped("v")),
    (0x1D66, Status::Mapped("\u{3B2}")),
    (0x1D67, Status::Mapped("\u{3B3}")),
    (0x1D68, Status::Mapped("\u{3C1}")),
    (0x1D69, Status::Mapped("\u{3C6}")),
    (0x1D6A, Status::Mapped("\u{3C7}")),
    (0x1D6B, Status::Valid),
    (0x1D78, Status::Mapped("\u{43D}")),
    (0x1D79, Status::Valid),
    (0x1D9B, Status::Mapped("\u{252}")),
    (0x1D9C, Status::Mapped("c")),
    (0x1D9D, Status::Mapped("\u{255}")),
    (0x1D9E, Status::Mapped("\u{F0}")),
    (0x1D9F, Status::Mapped("\u{25C}")),
    (0x1DA0, Status::Mapped("f")),
    (0x1DA1, Status::Mapped("\u{25F}")),
    (0x1DA2, Status::Mapped("\u{261}")),
    (0x1DA3, Status::Mapped("\u{265}")),
    (0x1DA4, Status::Mapped("\u{268}")),
    (0x1DA5, Status::Mapped("\u{269}")),
    (0x1DA6, Status::Mapped("\u{26A}")),
    (0x1DA7, Status::Mapped("\u{1D7B}")),
    (0x1DA8, Status::Mapped("\u{29D}")),
    (0x1DA9, Status::Mapped("\u{26D}")),
    (0x1DAA, Status::Mapped("\u{1D85}")),
    (0x1DAB, Status::Mapped("\u{29F}")),
    (0x1DAC, Status::Mapped("\u{271}")),
    (0x1DAD, Status::Mapped("\u{270}")),
    (0x1DAE, Status::Mapped("\u{272}")),
    (0x1DAF, Status::Mapped("\u{273}")),
    (0x1DB0, Status::Mapped("\u{274}")),
    (0x1DB1, Status::Mapped("\u{275}")),
    (0x1DB2, Status::Mapped("\u{278}")),
    (0x1DB3, Status::Mapped("\u{282}")),
    (0x1DB4, Status::Mapped("\u{283}")),
    (0x1DB5, Status::Mapped("\u{1AB}")),
    (0x1DB6, Status::Mapped("\u{289}")),
    (0x1DB7, Status::Mapped("\u{28A}")),
    (0x1DB8, Status::Mapped("\u{1D1C}")),
    (0x1DB9, Status::Mapped("\u{28B}")),
    (0x1DBA, Status::Mapped("\u{28C}")),
    (0x1DBB, Status::Mapped("z")),
    (0x1DBC, Status::Mapped("\u{290}")),
    (0x1DBD, Status::Mapped("\u{291}")),
    (0x1DBE, Status::Mapped("\u{292}")),
    (0x1DBF, Status::Mapped("\u{3B8}")),
    (0x1DC0, Status::Valid),
    (0x1E00, Status::Mapped("\u{1E01}")),
    (0x1E01, Status::Valid),
    (0x1E02, Status::Mapped("\u{1E03}")),
    (0x1E03, Status::Valid),
    (0x1E04, Status::Mapped("\u{1E05}")),
    (0x1E05, Status::Valid),
    (0x1E06, Status::Mapped("\u{1E07}")),
    (0x1E07, Status::Valid),
    (0x1E08, Status::Mapped("\u{1E09}")),
    (0x1E09, Status::Valid),
    (0x1E0A, Status::Mapped("\u{1E0B}")),
    (0x1E0B, Status::Valid),
    (0x1E0C, Status::Mapped("\u{1E0D}")),
    (0x1E0D, Status::Valid),
    (0x1E0E, Status::Mapped("\u{1E0F}")),
    (0x1E0F, Status::Valid),
    (0x1E10, Status::Mapped("\u{1E11}")),
    (0x1E11, Status::Valid),
    (0x1E12, Status::Mapped("\u{1E13}")),
    (0x1E13, Status::Valid),
    (0x1E14, Status::Mapped("\u{1E15}")),
    (0x1E15, Status::Valid),
    (0x1E16, Status::Mapped("\u{1E17}")),
    (0x1E17, Status::Valid),
    (0x1E18, Status::Mapped("\u{1E19}")),
    (0x1E19, Status::Valid),
    (0x1E1A, Status::Mapped("\u{1E1B}")),
    (0x1E1B, Status::Valid),
    (0x1E1C, Status::Mapped("\u{1E1D}")),
    (0x1E1D, Status::Valid),
    (0x1E1E, Status::Mapped("\u{1E1F}")),
    (0x1E1F, Status::Valid),
    (0x1E20, Status::Mapped("\u{1E21}")),
    (0x1E21, Status::Valid),
    (0x1E22, Status::Mapped("\u{1E23}")),
    (0x1E23, Status::Valid),
    (0x1E24, Status::Mapped("\u{1E25}")),
    (0x1E25, Status::Valid),
    (0x1E26, Status::Mapped("\u{1E27}")),
    (0x1E27, Status::Valid),
    (0x1E28, Status::Mapped("\u{1E29}")),
    (0x1E29, Status::Valid),
    (0x1E2A, Status::Mapped("\u{1E2B}")),
    (0x1E2B, Status::Valid),
    (0x1E2C, Status::Mapped("\u{1E2D}")),
    (0x1E2D, Status::Valid),
    (0x1E2E, Status::Mapped("\u{1E2F}")),
    (0x1E2F, Status::Valid),
    (0x1E30, Status::Mapped("\u{1E31}")),
    (0x1E31, Status::Valid),
    (0x1E32, Status::Mapped("\u{1E33}")),
    (0x1E33, Status::Valid),
    (0x1E34, Status::Mapped("\u{1E35}")),
    (0x1E35, Status::Valid),
    (0x1E36, Status::Mapped("\u{1E37}")),
    (0x1E37, Status::Valid),
    (0x1E38, Status::Mapped("\u{1E39}")),
    (0x1E39, Status::Valid),
    (0x1E3A, Status::Mapped("\u{1E3B}")),
    (0x1E3B, Status::Valid),
    (0x1E3C, Status::Mapped("\u{1E3D}")),
    (0x1E3D, Status::Valid),
    (0x1E3E, Status::Mapped("\u{1E3F}")),
    (0x1E3F, Status::Valid),
    (0x1E40, Status::Mapped("\u{1E41}")),
    (0x1E41, Status::Valid),
    (0x1E42, Status::Mapped("\u{1E43}")),
    (0x1E43, Status::Valid),
    (0x1E44, Status::Mapped("\u{1E45}")),
    (0x1E45, Status::Valid),
    (0x1E46, Status::Mapped("\u{1E47}")),
    (0x1E47, Status::Valid),
    (0x1E48, Status::Mapped("\u{1E49}")),
    (0x1E49, Status::Valid),
    (0x1E4A, Status::Mapped("\u{1E4B}")),
    (0x1E4B, Status::Valid),
    (0x1E4C, Status::Mapped("\u{1E4D}")),
    (0x1E4D, Status::Valid),
    (0x1E4E, Status::Mapped("\u{1E4F}")),
    (0x1E4F, Status::Valid),
    (0x1E50, Status::Mapped("\u{1E51}")),
    (0x1E51, Status::Valid),
    (0x1E52, Status::Mapped("\u{1E53}")),
    (0x1E53, Status::Valid),
    (0x1E54, Status::Mapped("\u{1E55}")),
    (0x1E55, Status::Valid),
    (0x1E56, Status::Mapped("\u{1E57}")),
    (0x1E57, Status::Valid),
    (0x1E58, Status::Mapped("\u{1E59}")),
    (0x1E59, Status::Valid),
    (0x1E5A, Status::Mapped("\u{1E5B}")),
    (0x1E5B, Status::Valid),
    (0x1E5C, Status::Mapped("\u{1E5D}")),
    (0x1E5D, Status::Valid),
    (0x1E5E, Status::Mapped("\u{1E5F}")),
    (0x1E5F, Status::Valid),
    (0x1E60, Status::Mapped("\u{1E61}")),
    (0x1E61, Status::Valid),
    (0x1E62, Status::Mapped("\u{1E63}")),
    (0x1E63, Status::Valid),
    (0x1E64, Status::Mapped("\u{1E65}")),
    (0x1E65, Status::Valid),
    (0x1E66, Status::Mapped("\u{1E67}")),
    (0x1E67, Status::Valid),
    (0x1E68, Status::Mapped("\u{1E69}")),
    (0x1E69, Status::Valid),
    (0x1E6A, Status::Mapped("\u{1E6B}")),
    (0x1E6B, Status::Valid),
    (0x1E6C, Status::Mapped("\u{1E6D}")),
    (0x1E6D, Status::Valid),
    (0x1E6E, Status::Mapped("\u{1E6F}")),
    (0x1E6F, Status::Valid),
    (0x1E70, Status::Mapped("\u{1E71}")),
    (0x1E71, Status::Valid),
    (0x1E72, Status::Mapped("\u{1E73}")),
    (0x1E73, Status::Valid),
    (0x1E74, Status::Mapped("\u{1E75}")),
    (0x1E75, Status::Valid),
    (0x1E76, Status::Mapped("\u{1E77}")),
    (0x1E77, Status::Valid),
    (0x1E78, Status::Mapped("\u{1E79}")),
    (0x1E79, Status::Valid),
    (0x1E7A, Status::Mapped("\u{1E7B}")),
    (0x1E7B, Status::Valid),
    (0x1E7C, Status::Mapped("\u{1E7D}")),
    (0x1E7D, Status::Valid),
    (0x1E7E, Status::Mapped("\u{1E7F}")),
    (0x1E7F, Status::Valid),
    (0x1E80, Status::Mapped("\u{1E81}")),
    (0x1E81, Status::Valid),
    (0x1E82, Status::Mapped("\u{1E83}")),
    (0x1E83, Status::Valid),
    (0x1E84, Status::Mapped("\u{1E85}")),
    (0x1E85, Status::Valid),
    (0x1E86, Status::Mapped("\u{1E87}")),
    (0x1E87, Status::Valid),
    (0x1E88, Status::Mapped("\u{1E89}")),
    (0x1E89, Status::Valid),
    (0x1E8A, Status::Mapped("\u{1E8B}")),
    (0x1E8B, Status::Valid),
    (0x1E8C, Status::Mapped("\u{1E8D}")),
    (0x1E8D, Status::Valid),
    (0x1E8E, Status::Mapped("\u{1E8F}")),
    (0x1E8F, Status::Valid),
    (0x1E90, Status::Mapped("\u{1E91}")),
    (0x1E91, Status::Valid),
    (0x1E92, Status::Mapped("\u{1E93}")),
    (0x1E93, Status::Valid),
    (0x1E94, Status::Mapped("\u{1E95}")),
    (0x1E95, Status::Valid),
    (0x1E9A, Status::Mapped("a\u{2BE}")),
    (0x1E9B, Status::Mapped("\u{1E61}")),
    (0x1E9C, Status::Valid),
    (0x1E9E, Status::Mapped("\u{DF}")),
    (0x1E9F, Status::Valid),
    (0x1EA0, Status::Mapped("\u{1EA1}")),
    (0x1EA1, Status::Valid),
    (0x1EA2, Status::Mapped("\u{1EA3}")),
    (0x1EA3, Status::Valid),
    (0x1EA4, Status::Mapped("\u{1EA5}")),
    (0x1EA5, Status::Valid),
    (0x1EA6, Status::Mapped("\u{1EA7}")),
    (0x1EA7, Status::Valid),
    (0x1EA8, Status::Mapped("\u{1EA9}")),
    (0x1EA9, Status::Valid),
    (0x1EAA, Status::Mapped("\u{1EAB}")),
    (0x1EAB, Status::Valid),
    (0x1EAC, Status::Mapped("\u{1EAD}")),
    (0x1EAD, Status::Valid),
    (0x1EAE, Status::Mapped("\u{1EAF}")),
    (0x1EAF, Status::Valid),
    (0x1EB0, Status::Mapped("\u{1EB1}")),
    (0x1EB1, Status::Valid),
    (0x1EB2, Status::Mapped("\u{1EB3}")),
    (0x1EB3, Status::Valid),
    (0x1EB4, Status::Mapped("\u{1EB5}")),
    (0x1EB5, Status::Valid),
    (0x1EB6, Status::Mapped("\u{1EB7}")),
    (0x1EB7, Status::Valid),
    (0x1EB8, Status::Mapped("\u{1EB9}")),
    (0x1EB9, Status::Valid),
    (0x1EBA, Status::Mapped("\u{1EBB}")),
    (0x1EBB, Status::Valid),
    (0x1EBC, Status::Mapped("\u{1EBD}")),
    (0x1EBD, Status::Valid),
    (0x1EBE, Status::Mapped("\u{1EBF}")),
    (0x1EBF, Status::Valid),
    (0x1EC0, Status::Mapped("\u{1EC1}")),
    (0x1EC1, Status::Valid),
    (0x1EC2, Status::Mapped("\u{1EC3}")),
    (0x1EC3, Status::Valid),
    (0x1EC4, Status::Mapped("\u{1EC5}")),
    (0x1EC5, Status::Valid),
    (0x1EC6, Status::Mapped("\u{1EC7}")),
    (0x1EC7, Status::Valid),
    (0x1EC8, Status::Mapped("\u{1EC9}")),
    (0x1EC9, Status::Valid),
    (0x1ECA, Status::Mapped("\u{1ECB}")),
    (0x1ECB, Status::Valid),
    (0x1ECC, Status::Mapped("\u{1ECD}")),
    (0x1ECD, Status::Valid),
    (0x1ECE, Status::Mapped("\u{1ECF}")),
    (0x1ECF, Status::Valid),
    (0x1ED0, Status::Mapped("\u{1ED1}")),
    (0x1ED1, Status::Valid),
    (0x1ED2, Status::Mapped("\u{1ED3}")),
    (0x1ED3, Status::Valid),
    (0x1ED4, Status::Mapped("\u{1ED5}")),
    (0x1ED5, Status::Valid),
    (0x1ED6, Status::Mapped("\u{1ED7}")),
    (0x1ED7, Status::Valid),
    (0x1ED8, Status::Mapped("\u{1ED9}")),
    (0x1ED9, Status::Valid),
    (0x1EDA, Status::Mapped("\u{1EDB}")),
    (0x1EDB, Status::Valid),
    (0x1EDC, Status::Mapped("\u{1EDD}")),
    (0x1EDD, Status::Valid),
    (0x1EDE, Status::Mapped("\u{1EDF}")),
    (0x1EDF, Status::Valid),
    (0x1EE0, Status::Mapped("\u{1EE1}")),
    (0x1EE1, Status::Valid),
    (0x1EE2, Status::Mapped("\u{1EE3}")),
    (0x1EE3, Status::Valid),
    (0x1EE4, Status::Mapped("\u{1EE5}")),
    (0x1EE5, Status::Valid),
    (0x1EE6, Status::Mapped("\u{1EE7}")),
    (0x1EE7, Status::Valid),
    (0x1EE8, Status::Mapped("\u{1EE9}")),
    (0x1EE9, Status::Valid),
    (0x1EEA, Status::Mapped("\u{1EEB}")),
    (0x1EEB, Status::Valid),
    (0x1EEC, Status::Mapped("\u{1EED}")),
    (0x1EED, Status::Valid),
    (0x1EEE, Status::Mapped("\u{1EEF}")),
    (0x1EEF, Status::Valid),
    (0x1EF0, Status::Mapped("\u{1EF1}")),
    (0x1EF1, Status::Valid),
    (0x1EF2, Status::Mapped("\u{1EF3}")),
    (0x1EF3, Status::Valid),
    (0x1EF4, Status::Mapped("\u{1EF5}")),
    (0x1EF5, Status::Valid),
    (0x1EF6, Status::Mapped("\u{1EF7}")),
    (0x1EF7, Status::Valid),
    (0x1EF8, Status::Mapped("\u{1EF9}")),
    (0x1EF9, Status::Valid),
    (0x1EFA, Status::Mapped("\u{1EFB}")),
    (0x1EFB, Status::Valid),
    (0x1EFC, Status::Mapped("\u{1EFD}")),
    (0x1EFD, Status::Valid),
    (0x1EFE, Status::Mapped("\u{1EFF}")),
    (0x1EFF, Status::Valid),
    (0x1F08, Status::Mapped("\u{1F00}")),
    (0x1F09, Status::Mapped("\u{1F01}")),
    (0x1F0A, Status::Mapped("\u{1F02}")),
    (0x1F0B, Status::Mapped("\u{1F03}")),
    (0x1F0C, Status::Mapped("\u{1F04}")),
    (0x1F0D, Status::Mapped("\u{1F05}")),
    (0x1F0E, Status::Mapped("\u{1F06}")),
    (0x1F0F, Status::Mapped("\u{1F07}")),
    (0x1F10, Status::Valid),
    (0x1F16, Status::Disallowed),
    (0x1F18, Status::Mapped("\u{1F10}")),
    (0x1F19, Status::Mapped("\u{1F11}")),
    (0x1F1A, Status::Mapped("\u{1F12}")),
    (0x1F1B, Status::Mapped("\u{1F13}")),
    (0x1F1C, Status::Mapped("\u{1F14}")),
    (0x1F1D, Status::Mapped("\u{1F15}")),
    (0x1F1E, Status::Disallowed),
    (0x1F20, Status::Valid),
    (0x1F28, Status::Mapped("\u{1F20}")),
    (0x1F29, Status::Mapped("\u{1F21}")),
    (0x1F2A, Status::Mapped("\u{1F22}")),
    (0x1F2B, Status::Mapped("\u{1F23}")),
    (0x1F2C, Status::Mapped("\u{1F24}")),
    (0x1F2D, Status::Mapped("\u{1F25}")),
    (0x1F2E, Status::Mapped("\u{1F26}")),
    (0x1F2F, Status::Mapped("\u{1F27}")),
    (0x1F30, Status::Valid),
    (0x1F38, Status::Mapped("\u{1F30}")),
    (0x1F39, Status::Mapped("\u{1F31}")),
    (0x1F3A, Status::Mapped("\u{1F32}")),
    (0x1F3B, Status::Mapped("\u{1F33}")),
    (0x1F3C, Status::Mapped("\u{1F34}")),
    (0x1F3D, Status::Mapped("\u{1F35}")),
    (0x1F3E, Status::Mapped("\u{1F36}")),
    (0x1F3F, Status::Mapped("\u{1F37}")),
    (0x1F40, Status::Valid),
    (0x1F46, Status::Disallowed),
    (0x1F48, Status::Mapped("\u{1F40}")),
    (0x1F49, Status::Mapped("\u{1F41}")),
    (0x1F4A, Status::Mapped("\u{1F42}")),
    (0x1F4B, Status::Mapped("\u{1F43}")),
    (0x1F4C, Status::Mapped("\u{1F44}")),
    (0x1F4D, Status::Mapped("\u{1F45}")),
    (0x1F4E, Status::Disallowed),
    (0x1F50, Status::Valid),
    (0x1F58, Status::Disallowed),
    (0x1F59, Status::Mapped("\u{1F51}")),
    (0x1F5A, Status::Disallowed),
    (0x1F5B, Status::Mapped("\u{1F53}")),
    (0x1F5C, Status::Disallowed),
    (0x1F5D, Status::Mapped("\u{1F55}")),
    (0x1F5E, Status::Disallowed),
    (0x1F5F, Status::Mapped("\u{1F57}")),
    (0x1F60, Status::Valid),
    (0x1F68, Status::Mapped("\u{1F60}")),
    (0x1F69, Status::Mapped("\u{1F61}")),
    (0x1F6A, Status::Mapped("\u{1F62}")),
    (0x1F6B, Status::Mapped("\u{1F63}")),
    (0x1F6C, Status::Mapped("\u{1F64}")),
    (0x1F6D, Status::Mapped("\u{1F65}")),
    (0x1F6E, Status::Mapped("\u{1F66}")),
    (0x1F6F, Status::Mapped("\u{1F67}")),
    (0x1F70, Status::Valid),
    (0x1F71, Status::Mapped("\u{3AC}")),
    (0x1F72, Status::Valid),
    (0x1F73, Status::Mapped("\u{3AD}")),
    (0x1F74, Status::Valid),
    (0x1F75, Status::Mapped("\u{3AE}")),
    (0x1F76, Status::Valid),
    (0x1F77, Status::Mapped("\u{3AF}")),
    (0x1F78, Status::Valid),
    (0x1F79, Status::Mapped("\u{3CC}")),
    (0x1F7A, Status::Valid),
    (0x1F7B, Status::Mapped("\u{3CD}")),
    (0x1F7C, Status::Valid),
    (0x1F7D, Status::Mapped("\u{3CE}")),
    (0x1F7E, Status::Disallowed),
    (0x1F80, Status::Mapped("\u{1F00}\u{3B9}")),
    (0x1F81, Status::Mapped("\u{1F01}\u{3B9}")),
    (0x1F82, Status::Mapped("\u{1F02}\u{3B9}")),
    (0x1F83, Status::Mapped("\u{1F03}\u{3B9}")),
    (0x1F84, Status::Mapped("\u{1F04}\u{3B9}")),
    (0x1F85, Status::Mapped("\u{1F05}\u{3B9}")),
    (0x1F86, Status::Mapped("\u{1F06}\u{3B9}")),
    (0x1F87, Status::Mapped("\u{1F07}\u{3B9}")),
    (0x1F88, Status::Mapped("\u{1F00}\u{3B9}")),
    (0x1F89, Status::Mapped("\u{1F01}\u{3B9}")),
    (0x1F8A, Status::Mapped("\u{1F02}\u{3B9}")),
    (0x1F8B, Status::Mapped("\u{1F03}\u{3B9}")),
    (0x1F8C, Status::Mapped("\u{1F04}\u{3B9}")),
    (0x1F8D, Status::Mapped("\u{1F05}\u{3B9}")),
    (0x1F8E, Status::Mapped("\u{1F06}\u{3B9}")),
    (0x1F8F, Status::Mapped("\u{1F07}\u{3B9}")),
    (0x1F90, Status::Mapped("\u{1F20}\u{3B9}")),
    (0x1F91, Status::Mapped("\u{1F21}\u{3B9}")),
    (0x1F92, Status::Mapped("\u{1F22}\u{3B9}")),
    (0x1F93, Status::Mapped("\u{1F23}\u{3B9}")),
    (0x1F94, Status::Mapped("\u{1F24}\u{3B9}")),
    (0x1F95, Status::Mapped("\u{1F25}\u{3B9}")),
    (0x1F96, Status::Mapped("\u{1F26}\u{3B9}")),
    (0x1F97, Status::Mapped("\u{1F27}\u{3B9}")),
    (0x1F98, Status::Mapped("\u{1F20}\u{3B9}")),
    (0x1F99, Status::Mapped("\u{1F21}\u{3B9}")),
    (0x1F9A, Status::Mapped("\u{1F22}\u{3B9}")),
    (0x1F9B, Status::Mapped("\u{1F23}\u{3B9}")),
    (0x1F9C, Status::Mapped("\u{1F24}\u{3B9}")),
    (0x1F9D, Status::Mapped("\u{1F25}\u{3B9}")),
    (0x1F9E, Status::Mapped("\u{1F26}\u{3B9}")),
    (0x1F9F, Status::Mapped("\u{1F27}\u{3B9}")),
    (0x1FA0, Status::Mapped("\u{1F60}\u{3B9}")),
    (0x1FA1, Status::Mapped("\u{1F61}\u{3B9}")),
    (0x1FA2, Status::Mapped("\u{1F62}\u{3B9}")),
    (0x1FA3, Status::Mapped("\u{1F63}\u{3B9}")),
    (0x1FA4, Status::Mapped("\u{1F64}\u{3B9}")),
    (0x1FA5, Status::Mapped("\u{1F65}\u{3B9}")),
    (0x1FA6, Status::Mapped("\u{1F66}\u{3B9}")),
    (0x1FA7, Status::Mapped("\u{1F67}\u{3B9}")),
    (0x1FA8, Status::Mapped("\u{1F60}\u{3B9}")),
    (0x1FA9, Status::Mapped("\u{1F61}\u{3B9}")),
    (0x1FAA, Status::Mapped("\u{1F62}\u{3B9}")),
    (0x1FAB, Status::Mapped("\u{1F63}\u{3B9}")),
    (0x1FAC, Status::Mapped("\u{1F64}\u{3B9}")),
    (0x1FAD, Status::Mapped("\u{1F65}\u{3B9}")),
    (0x1FAE, Status::Mapped("\u{1F66}\u{3B9}")),
    (0x1FAF, Status::Mapped("\u{1F67}\u{3B9}")),
    (0x1FB0, Status::Valid),
    (0x1FB2, Status::Mapped("\u{1F70}\u{3B9}")),
    (0x1FB3, Status::Mapped("\u{3B1}\u{3B9}")),
    (0x1FB4, Status::Mapped("\u{3AC}\u{3B9}")),
    (0x1FB5, Status::Disallowed),
    (0x1FB6, Status::Valid),
    (0x1FB7, Status::Mapped("\u{1FB6}\u{3B9}")),
    (0x1FB8, Status::Mapped("\u{1FB0}")),
    (0x1FB9, Status::Mapped("\u{1FB1}")),
    (0x1FBA, Status::Mapped("\u{1F70}")),
    (0x1FBB, Status::Mapped("\u{3AC}")),
    (0x1FBC, Status::Mapped("\u{3B1}\u{3B9}")),
    (0x1FBD, Status::Mapped(" \u{313}")),
    (0x1FBE, Status::Mapped("\u{3B9}")),
    (0x1FBF, Status::Mapped(" \u{313}")),
    (0x1FC0, Status::Mapped(" \u{342}")),
    (0x1FC1, Status::Mapped(" \u{308}\u{342}")),
    (0x1FC2, Status::Mapped("\u{1F74}\u{3B9}")),
    (0x1FC3, Status::Mapped("\u{3B7}\u{3B9}")),
    (0x1FC4, Status::Mapped("\u{3AE}\u{3B9}")),
    (0x1FC5, Status::Disallowed),
    (0x1FC6, Status::Valid),
    (0x1FC7, Status::Mapped("\u{1FC6}\u{3B9}")),
    (0x1FC8, Status::Mapped("\u{1F72}")),
    (0x1FC9, Status::Mapped("\u{3AD}")),
    (0x1FCA, Status::Mapped("\u{1F74}")),
    (0x1FCB, Status::Mapped("\u{3AE}")),
    (0x1FCC, Status::Mapped("\u{3B7}\u{3B9}")),
    (0x1FCD, Status::Mapped(" \u{313}\u{300}")),
    (0x1FCE, Status::Mapped(" \u{313}\u{301}")),
    (0x1FCF, Status::Mapped(" \u{313}\u{342}")),
    (0x1FD0, Status::Valid),
    (0x1FD3, Status::Mapped("\u{390}")),
    (0x1FD4, Status::Disallowed),
    (0x1FD6, Status::Valid),
    (0x1FD8, Status::Mapped("\u{1FD0}")),
    (0x1FD9, Status::Mapped("\u{1FD1}")),
    (0x1FDA, Status::Mapped("\u{1F76}")),
    (0x1FDB, Status::Mapped("\u{3AF}")),
    (0x1FDC, Status::Disallowed),
    (0x1FDD, Status::Mapped(" \u{314}\u{300}")),
    (0x1FDE, Status::Mapped(" \u{314}\u{301}")),
    (0x1FDF, Status::Mapped(" \u{314}\u{342}")),
    (0x1FE0, Status::Valid),
    (0x1FE3, Status::Mapped("\u{3B0}")),
    (0x1FE4, Status::Valid),
    (0x1FE8, Status::Mapped("\u{1FE0}")),
    (0x1FE9, Status::Mapped("\u{1FE1}")),
    (0x1FEA, Status::Mapped("\u{1F7A}")),
    (0x1FEB, Status::Mapped("\u{3CD}")),
    (0x1FEC, Status::Mapped("\u{1FE5}")),
    (0x1FED, Status::Mapped(" \u{308}\u{300}")),
    (0x1FEE, Status::Mapped(" \u{308}\u{301}")),
    (0x1FEF, Status::Mapped("`")),
    (0x1FF0, Status::Disallowed),
    (0x1FF2, Status::Mapped("\u{1F7C}\u{3B9}")),
    (0x1FF3, Status::Mapped("\u{3C9}\u{3B9}")),
    (0x1FF4, Status::Mapped("\u{3CE}\u{3B9}")),
    (0x1FF5, Status::Disallowed),
    (0x1FF6, Status::Valid),
    (0x1FF7, Status::Mapped("\u{1FF6}\u{3B9}")),
    (0x1FF8, Status::Mapped("\u{1F78}")),
    (0x1FF9, Status::Mapped("\u{3CC}")),
    (0x1FFA, Status::Mapped("\u{1F7C}")),
    (0x1FFB, Status::Mapped("\u{3CE}")),
    (0x1FFC, Status::Mapped("\u{3C9}\u{3B9}")),
    (0x1FFD, Status::Mapped(" \u{301}")),
    (0x1FFE, Status::Mapped(" \u{314}")),
    (0x1FFF, Status::Disallowed),
    (0x2000, Status::Mapped(" ")),
    (0x200B, Status::Ignored),
    (0x200C, Status::Deviation("")),
    (0x200E, Status::Disallowed),
    (0x2010, Status::Valid),
    (0x2011, Status::Mapped("\u{2010}")),
    (0x2012, Status::Valid),
    (0x2017, Status::Mapped(" \u{333}")),
    (0x2018, Status::Valid),
    (0x2024, Status::Disallowed),
    (0x2027, Status::Valid),
    (0x2028, Status::Disallowed),
    (0x202F, Status::Mapped(" ")),
    (0x2030, Status::Valid),
    (0x2033, Status::Mapped("\u{2032}\u{2032}")),
    (0x2034, Status::Mapped("\u{2032}\u{2032}\u{2032}")),
    (0x2035, Status::Valid),
    (0x2036, Status::Mapped("\u{2035}\u{2035}")),
    (0x2037, Status::Mapped("\u{2035}\u{2035}\u{2035}")),
    (0x2038, Status::Valid),
    (0x203C, Status::Mapped("!!")),
    (0x203D, Status::Valid),
    (0x203E, Status::Mapped(" \u{305}")),
    (0x203F, Status::Valid),
    (0x2047, Status::Mapped("??")),
    (0x2048, Status::Mapped("?!")),
    (0x2049, Status::Mapped("!?")),
    (0x204A, Status::Valid),
    (0x2057, Status::Mapped("\u{2032}\u{2032}\u{2032}\u{2032}")),
    (0x2058, Status::Valid),
    (0x205F, Status::Mapped(" ")),
    (0x2060, Status::Ignored),
    (0x2065, Status::Disallowed),
    (0x206A, Status::Ignored),
    (0x2070, Status::Mapped("0")),
    (0x2071, Status::Mapped("i")),
    (0x2072, Status::Disallowed),
    (0x2074, Status::Mapped("4")),
    (0x2075, Status::Mapped("5")),
    (0x2076, Status::Mapped("6")),
    (0x2077, Status::Mapped("7")),
    (0x2078, Status::Mapped("8")),
    (0x2079, Status::Mapped("9")),
    (0x207A, Status::Mapped("+")),
    (0x207B, Status::Mapped("\u{2212}")),
    (0x207C, Status::Mapped("=")),
    (0x207D, Status::Mapped("(")),
    (0x207E, Status::Mapped(")")),
    (0x207F, Status::Mapped("n")),
    (0x2080, Status::Mapped("0")),
    (0x2081, Status::Mapped("1")),
    (0x2082, Status::Mapped("2")),
    (0x2083, Status::Mapped("3")),
    (0x2084, Status::Mapped("4")),
    (0x2085, Status::Mapped("5")),
    (0x2086, Status::Mapped("6")),
    (0x2087, Status::Mapped("7")),
    (0x2088, Status::Mapped("8")),
    (0x2089, Status::Mapped("9")),
    (0x208A, Status::Mapped("+")),
    (0x208B, Status::Mapped("\u{2212}")),
    (0x208C, Status::Mapped("=")),
    (0x208D, Status::Mapped("(")),
    (0x208E, Status::Mapped(")")),
    (0x208F, Status::Disallowed),
    (0x2090, Status::Mapped("a")),
    (0x2091, Status::Mapped("e")),
    (0x2092, Status::Mapped("o")),
    (0x2093, Status::Mapped("x")),
    (0x2094, Status::Mapped("\u{259}")),
    (0x2095, Status::Mapped("h")),
    (0x2096, Status::Mapped("k")),
    (0x2097, Status::Mapped("l")),
    (0x2098, Status::Mapped("m")),
    (0x2099, Status::Mapped("n")),
    (0x209A, Status::Mapped("p")),
    (0x209B, Status::Mapped("s")),
    (0x209C, Status::Mapped("t")),
    (0x209D, Status::Disallowed),
    (0x20A0, Status::Valid),
    (0x20A8, Status::Mapped("rs")),
    (0x20A9, Status::Valid),
    (0x20C2, Status::Disallowed),
    (0x20D0, Status::Valid),
    (0x20F1, Status::Disallowed),
    (0x2100, Status::Mapped("a/c")),
    (0x2101, Status::Mapped("a/s")),
    (0x2102, Status::Mapped("c")),
    (0x2103, Status::Mapped("\u{B0}c")),
    (0x2104, Status::Valid),
    (0x2105, Status::Mapped("c/o")),
    (0x2106, Status::Mapped("c/u")),
    (0x2107, Status::Mapped("\u{25B}")),
    (0x2108, Status::Valid),
    (0x2109, Status::Mapped("\u{B0}f")),
    (0x210A, Status::Mapped("g")),
    (0x210B, Status::Mapped("h")),
    (0x210F, Status::Mapped("\u{127}")),
    (0x2110, Status::Mapped("i")),
    (0x2112, Status::Mapped("l")),
    (0x2114, Status::Valid),
    (0x2115, Status::Mapped("n")),
    (0x2116, Status::Mapped("no")),
    (0x2117, Status::Valid),
    (0x2119, Status::Mapped("p")),
    (0x211A, Status::Mapped("q")),
    (0x211B, Status::Mapped("r")),
    (0x211E, Status::Valid),
    (0x2120, Status::Mapped("sm")),
    (0x2121, Status::Mapped("tel")),
    (0x2122, Status::Mapped("tm")),
    (0x2123, Status::Valid),
    (0x2124, Status::Mapped("z")),
    (0x2125, Status::Valid),
    (0x2126, Status::Mapped("\u{3C9}")),
    (0x2127, Status::Valid),
    (0x2128, Status::Mapped("z")),
    (0x2129, Status::Valid),
    (0x212A, Status::Mapped("k")),
    (0x212B, Status::Mapped("\u{E5}")),
    (0x212C, Status::Mapped("b")),
    (0x212D, Status::Mapped("c")),
    (0x212E, Status::Valid),
    (0x212F, Status::Mapped("e")),
    (0x2131, Status::Mapped("f")),
    (0x2132, Status::Mapped("\u{214E}")),
    (0x2133, Status::Mapped("m")),
    (0x2134, Status::Mapped("o")),
    (0x2135, Status::Mapped("\u{5D0}")),
    (0x2136, Status::Mapped("\u{5D1}")),
    (0x2137, Status::Mapped("\u{5D2}")),
    (0x2138, Status::Mapped("\u{5D3}")),
    (0x2139, Status::Mapped("i")),
    (0x213A, Status::Valid),
    (0x213B, Status::Mapped("fax")),
    (0x213C, Status::Mapped("\u{3C0}")),
    (0x213D, Status::Mapped("\u{3B3}")),
    (0x213F, Status::Mapped("\u{3C0}")),
    (0x2140, Status::Mapped("\u{2211}")),
    (0x2141, Status::Valid),
    (0x2145, Status::Mapped("d")),
    (0x2147, Status::Mapped("e")),
    (0x2148, Status::Mapped("i")),
    (0x2149, Status::Mapped("j")),
    (0x214A, Status::Valid),
    (0x2150, Status::Mapped("1\u{2044}7")),
    (0x2151, Status::Mapped("1\u{2044}9")),
    (0x2152, Status::Mapped("1\u{2044}10")),
    (0x2153, Status::Mapped("1\u{2044}3")),
    (0x2154, Status::Mapped("2\u{2044}3")),
    (0x2155, Status::Mapped("1\u{2044}5")),
    (0x2156, Status::Mapped("2\u{2044}5")),
    (0x2157, Status::Mapped("3\u{2044}5")),
    (0x2158, Status::Mapped("4\u{2044}5")),
    (0x2159, Status::Mapped("1\u{2044}6")),
    (0x215A, Status::Mapped("5\u{2044}6")),
    (0x215B, Status::Mapped("1\u{2044}8")),
    (0x215C, Status::Mapped("3\u{2044}8")),
    (0x215D, Status::Mapped("5\u{2044}8")),
    (0x215E, Status::Mapped("7\u{2044}8")),
    (0x215F, Status::Mapped("1\u{2044}")),
    (0x2160, Status::Mapped("i")),
    (0x2161, Status::Mapped("ii")),
    (0x2162, Status::Mapped("iii")),
    (0x2163, Status::Mapped("iv")),
    (0x2164, Status::Mapped("v")),
    (0x2165, Status::Mapped("vi")),
    (0x2166, Status::Mapped("vii")),
    (0x2167, Status::Mapped("viii")),
    (0x2168, Status::Mapped("ix")),
    (0x2169, Status::Mapped("x")),
    (0x216A, Status::Mapped("xi")),
    (0x216B, Status::Mapped("xii")),
    (0x216C, Status::Mapped("l")),
    (0x216D, Status::Mapped("c")),
    (0x216E, Status::Mapped("d")),
    (0x216F, Status::Mapped("m")),
    (0x2170, Status::Mapped("i")),
    (0x2171, Status::Mapped("ii")),
    (0x2172, Status::Mapped("iii")),
    (0x2173, Status::Mapped("iv")),
    (0x2174, Status::Mapped("v")),
    (0x2175, Status::Mapped("vi")),
    (0x2176, Status::Mapped("vii")),
    (0x2177, Status::Mapped("viii")),
    (0x2178, Status::Mapped("ix")),
    (0x2179, Status::Mapped("x")),
    (0x217A, Status::Mapped("xi")),
    (0x217B, Status::Mapped("xii")),
    (0x217C, Status::Mapped("l")),
    (0x217D, Status::Mapped("c")),
    (0x217E, Status::Mapped("d")),
    (0x217F, Status::Mapped("m")),
    (0x2180, Status::Valid),
    (0x2183, Status::Mapped("\u{2184}")),
    (0x2184, Status::Valid),
    (0x2189, Status::Mapped("0\u{2044}3")),
    (0x218A, Status::Valid),
    (0x218C, Status::Disallowed),
    (0x2190, Status::Valid),
    (0x222C, Status::Mapped("\u{222B}\u{222B}")),
    (0x222D, Status::Mapped("\u{222B}\u{222B}\u{222B}")),
    (0x222E, Status::Valid),
    (0x222F, Status::Mapped("\u{222E}\u{222E}")),
    (0x2230, Status::Mapped("\u{222E}\u{222E}\u{222E}")),
    (0x2231, Status::Valid),
    (0x2329, Status::Mapped("\u{3008}")),
    (0x232A, Status::Mapped("\u{3009}")),
    (0x232B, Status::Valid),
    (0x242A, Status::Disallowed),
    (0x2440, Status::Valid),
    (0x244B, Status::Disallowed),
    (0x2460, Status::Mapped("1")),
    (0x2461, Status::Mapped("2")),
    (0x2462, Status::Mapped("3")),
    (0x2463, Status::Mapped("4")),
    (0x2464, Status::Mapped("5")),
    (0x2465, Status::Mapped("6")),
    (0x2466, Status::Mapped("7")),
    (0x2467, Status::Mapped("8")),
    (0x2468, Status::Mapped("9")),
    (0x2469, Status::Mapped("10")),
    (0x246A, Status::Mapped("11")),
    (0x246B, Status::Mapped("12")),
    (0x246C, Status::Mapped("13")),
    (0x246D, Status::Mapped("14")),
    (0x246E, Status::Mapped("15")),
    (0x246F, Status::Mapped("16")),
    (0x2470, Status::Mapped("17")),
    (0x2471, Status::Mapped("18")),
    (0x2472, Status::Mapped("19")),
    (0x2473, Status::Mapped("20")),
    (0x2474, Status::Mapped("(1)")),
    (0x2475, Status::Mapped("(2)")),
    (0x2476, Status::Mapped("(3)")),
    (0x2477, Status::Mapped("(4)")),
    (0x2478, Status::Mapped("(5)")),
    (0x2479, Status::Mapped("(6)")),
    (0x247A, Status::Mapped("(7)")),
    (0x247B, Status::Mapped("(8)")),
    (0x247C, Status::Mapped("(9)")),
    (0x247D, Status::Mapped("(10)")),
    (0x247E, Status::Mapped("(11)")),
    (0x247F, Status::Mapped("(12)")),
    (0x2480, Status::Mapped("(13)")),
    (0x2481, Status::Mapped("(14)")),
    (0x2482, Status::Mapped("(15)")),
    (0x2483, Status::Mapped("(16)")),
    (0x2484, Status::Mapped("(17)")),
    (0x2485, Status::Mapped("(18)")),
    (0x2486, Status::Mapped("(19)")),
    (0x2487, Status::Mapped("(20)")),
    (0x2488, Status::Disallowed),
    (0x249C, Status::Mapped("(a)")),
    (0x249D, Status::Mapped("(b)")),
    (0x249E, Status::Mapped("(c)")),
    (0x249F, Status::Mapped("(d)")),
    (0x24A0, Status::Mapped("(e)")),
    (0x24A1, Status::Mapped("(f)")),
    (0x24A2, Status::Mapped("(g)")),
    (0x24A3, Status::Mapped("(h)")),
    (0x24A4, Status::Mapped("(i)")),
    (0x24A5, Status::Mapped("(j)")),
    (0x24A6, Status::Mapped("(k)")),
    (0x24A7, Status::Mapped("(l)")),
    (0x24A8, Status::Mapped("(m)")),
    (0x24A9, Status::Mapped("(n)")),
    (0x24AA, Status::Mapped("(o)")),
    (0x24AB, Status::Mapped("(p)")),
    (0x24AC, Status::Mapped("(q)")),
    (0x24AD, Status::Mapped("(r)")),
    (0x24AE, Status::Mapped("(s)")),
    (0x24AF, Status::Mapped("(t)")),
    (0x24B0, Status::Mapped("(u)")),
    (0x24B1, Status::Mapped("(v)")),
    (0x24B2, Status::Mapped("(w)")),
    (0x24B3, Status::Mapped("(x)")),
    (0x24B4, Status::Mapped("(y)")),
    (0x24B5, Status::Mapped("(z)")),
    (0x24B6, Status::Mapped("a")),
    (0x24B7, Status::Mapped("b")),
    (0x24B8, Status::Mapped("c")),
    (0x24B9, Status::Mapped("d")),
    (0x24BA, Status::Mapped("e")),
    (0x24BB, Status::Mapped("f")),
    (0x24BC, Status::Mapped("g")),
    (0x24BD, Status::Mapped("h")),
    (0x24BE, Status::Mapped("i")),
    (0x24BF, Status::Mapped("j")),
    (0x24C0, Status::Mapped("k")),
    (0x24C1, Status::Mapped("l")),
    (0x24C2, Status::Mapped("m")),
    (0x24C3, Status::Mapped("n")),
    (0x24C4, Status::Mapped("o")),
    (0x24C5, Status::Mapped("p")),
    (0x24C6, Status::Mapped("q")),
    (0x24C7, Status::Mapped("r")),
    (0x24C8, Status::Mapped("s")),
    (0x24C9, Status::Mapped("t")),
    (0x24CA, Status::Mapped("u")),
    (0x24CB, Status::Mapped("v")),
    (0x24CC, Status::Mapped("w")),
    (0x24CD, Status::Mapped("x")),
    (0x24CE, Status::Mapped("y")),
    (0x24CF, Status::Mapped("z")),
    (0x24D0, Status::Mapped("a")),
    (0x24D1, Status::Mapped("b")),
    (0x24D2, Status::Mapped("c")),
    (0x24D3, Status::Mapped("d")),
    (0x24D4, Status::Mapped("e")),
    (0x24D5, Status::Mapped("f")),
    (0x24D6, Status::Mapped("g")),
    (0x24D7, Status::Mapped("h")),
    (0x24D8, Status::Mapped("i")),
    (0x24D9, Status::Mapped("j")),
    (0x24DA, Status::Mapped("k")),
    (0x24DB, Status::Mapped("l")),
    (0x24DC, Status::Mapped("m")),
    (0x24DD, Status::Mapped("n")),
    (0x24DE, Status::Mapped("o")),
    (0x24DF, Status::Mapped("p")),
    (0x24E0, Status::Mapped("q")),
    (0x24E1, Status::Mapped("r")),
    (0x24E2, Status::Mapped("s")),
    (0x24E3, Status::Mapped("t")),
    (0x24E4, Status::Mapped("u")),
    (0x24E5, Status::Mapped("v")),
    (0x24E6, Status::Mapped("w")),
    (0x24E7, Status::Mapped("x")),
    (0x24E8, Status::Mapped("y")),
    (0x24E9, Status::Mapped("z")),
    (0x24EA, Status::Mapped("0")),
    (0x24EB, Status::Valid),
    (0x2A0C, Status::Mapped("\u{222B}\u{222B}\u{222B}\u{222B}")),
    (0x2A0D, Status::Valid),
    (0x2A74, Status::Mapped("::=")),
    (0x2A75, Status::Mapped("==")),
    (0x2A76, Status::Mapped("===")),
    (0x2A77, Status::Valid),
    (0x2ADC, Status::Mapped("\u{2ADD}\u{338}")),
    (0x2ADD, Status::Valid),
    (0x2B74, Status::Disallowed),
    (0x2B76, Status::Valid),
    (0x2C00, Status::Mapped("\u{2C30}")),
    (0x2C01, Status::Mapped("\u{2C31}")),
    (0x2C02, Status::Mapped("\u{2C32}")),
    (0x2C03, Status::Mapped("\u{2C33}")),
    (0x2C04, Status::Mapped("\u{2C34}")),
    (0x2C05, Status::Mapped("\u{2C35}")),
    (0x2C06, Status::Mapped("\u{2C36}")),
    (0x2C07, Status::Mapped("\u{2C37}")),
    (0x2C08, Status::Mapped("\u{2C38}")),
    (0x2C09, Status::Mapped("\u{2C39}")),
    (0x2C0A, Status::Mapped("\u{2C3A}")),
    (0x2C0B, Status::Mapped("\u{2C3B}")),
    (0x2C0C, Status::Mapped("\u{2C3C}")),
    (0x2C0D, Status::Mapped("\u{2C3D}")),
    (0x2C0E, Status::Mapped("\u{2C3E}")),
    (0x2C0F, Status::Mapped("\u{2C3F}")),
    (0x2C10, Status::Mapped("\u{2C40}")),
    (0x2C11, Status::Mapped("\u{2C41}")),
    (0x2C12, Status::Mapped("\u{2C42}")),
    (0x2C13, Status::Mapped("\u{2C43}")),
    (0x2C14, Status::Mapped("\u{2C44}")),
    (0x2C15, Status::Mapped("\u{2C45}")),
    (0x2C16, Status::Mapped("\u{2C46}")),
    (0x2C17, Status::Mapped("\u{2C47}")),
    (0x2C18, Status::Mapped("\u{2C48}")),
    (0x2C19, Status::Mapped("\u{2C49}")),
    (0x2C1A, Status::Mapped("\u{2C4A}")),
    (0x2C1B, Status::Mapped("\u{2C4B}")),
    (0x2C1C, Status::Mapped("\u{2C4C}")),
    (0x2C1D, Status::Mapped("\u{2C4D}")),
    (0x2C1E, Status::Mapped("\u{2C4E}")),
    (0x2C1F, Status::Mapped("\u{2C4F}")),
    (0x2C20, Status::Mapped("\u{2C50}")),
    (0x2C21, Status::Mapped("\u{2C51}")),
    (0x2C22, Status::Mapped("\u{2C52}")),
    (0x2C23, Status::Mapped("\u{2C53}")),
    (0x2C24, Status::Mapped("\u{2C54}")),
    (0x2C25, Status::Mapped("\u{2C55}")),
    (0x2C26, Status::Mapped("\u{2C56}")),
    (0x2C27, Status::Mapped("\u{2C57}")),
    (0x2C28, Status::Mapped("\u{2C58}")),
    (0x2C29, Status::Mapped("\u{2C59}")),
    (0x2C2A, Status::Mapped("\u{2C5A}")),
    (0x2C2B, Status::Mapped("\u{2C5B}")),
    (0x2C2C, Status::Mapped("\u{2C5C}")),
    (0x2C2D, Status::Mapped("\u{2C5D}")),
    (0x2C2E, Status::Mapped("\u{2C5E}")),
    (0x2C2F, Status::Mapped("\u{2C5F}")),
    (0x2C30, Status::Valid),
    (0x2C60, Status::Mapped("\u{2C61}")),
    (0x2C61, Status::Valid),
    (0x2C62, Status::Mapped("\u{26B}")),
    (0x2C63, Status::Mapped("\u{1D7D}")),
    (0x2C64, Status::Mapped("\u{27D}")),
    (0x2C65, Status::Valid),
    (0x2C67, Status::Mapped("\u{2C68}")),
    (0x2C68, Status::Valid),
    (0x2C69, Status::Mapped("\u{2C6A}")),
    (0x2C6A, Status::Valid),
    (0x2C6B, Status::Mapped("\u{2C6C}")),
    (0x2C6C, Status::Valid),
    (0x2C6D, Status::Mapped("\u{251}")),
    (0x2C6E, Status::Mapped("\u{271}")),
    (0x2C6F, Status::Mapped("\u{250}")),
    (0x2C70, Status::Mapped("\u{252}")),
    (0x2C71, Status::Valid),
    (0x2C72, Status::Mapped("\u{2C73}")),
    (0x2C73, Status::Valid),
    (0x2C75, Status::Mapped("\u{2C76}")),
    (0x2C76, Status::Valid),
    (0x2C7C, Status::Mapped("j")),
    (0x2C7D, Status::Mapped("v")),
    (0x2C7E, Status::Mapped("\u{23F}")),
    (0x2C7F, Status::Mapped("\u{240}")),
    (0x2C80, Status::Mapped("\u{2C81}")),
    (0x2C81, Status::Valid),
    (0x2C82, Status::Mapped("\u{2C83}")),
    (0x2C83, Status::Valid),
    (0x2C84, Status::Mapped("\u{2C85}")),
    (0x2C85, Status::Valid),
    (0x2C86, Status::Mapped("\u{2C87}")),
    (0x2C87, Status::Valid),
    (0x2C88, Status::Mapped("\u{2C89}")),
    (0x2C89, Status::Valid),
    (0x2C8A, Status::Mapped("\u{2C8B}")),
    (0x2C8B, Status::Valid),
    (0x2C8C, Status::Mapped("\u{2C8D}")),
    (0x2C8D, Status::Valid),
    (0x2C8E, Status::Mapped("\u{2C8F}")),
    (0x2C8F, Status::Valid),
    (0x2C90, Status::Mapped("\u{2C91}")),
    (0x2C91, Status::Valid),
    (0x2C92, Status::Mapped("\u{2C93}")),
    (0x2C93, Status::Valid),
    (0x2C94, Status::Mapped("\u{2C95}")),
    (0x2C95, Status::Valid),
    (0x2C96, Status::Mapped("\u{2C97}")),
    (0x2C97, Status::Valid),
    (0x2C98, Status::Mapped("\u{2C99}")),
    (0x2C99, Status::Valid),
    (0x2C9A, Status::Mapped("\u{2C9B}")),
    (0x2C9B, Status::Valid),
    (0x2C9C, Status::Mapped("\u{2C9D}")),
    (0x2C9D, Status::Valid),
    (0x2C9E, Status::Mapped("\u{2C9F}")),
    (0x2C9F, Status::Valid),
    (0x2CA0, Status::Mapped("\u{2CA1}")),
    (0x2CA1, Status::Valid),
    (0x2CA2, Status::Mapped("\u{2CA3}")),
    (0x2CA3, Status::Valid),
    (0x2CA4, Status::Mapped("\u{2CA5}")),
    (0x2CA5, Status::Valid),
    (0x2CA6, Status::Mapped("\u{2CA7}")),
    (0x2CA7, Status::Valid),
    (0x2CA8, Status::Mapped("\u{2CA9}")),
    (0x2CA9, Status::Valid),
    (0x2CAA, Status::Mapped("\u{2CAB}")),
    (0x2CAB, Status::Valid),
    (0x2CAC, Status::Mapped("\u{2CAD}")),
    (0x2CAD, Status::Valid),
    (0x2CAE, Status::Mapped("\u{2CAF}")),
    (0x2CAF, Status::Valid),
    (0x2CB0, Status::Mapped("\u{2CB1}")),
    (0x2CB1, Status::Valid),
    (0x2CB2, Status::Mapped("\u{2CB3}")),
    (0x2CB3, Status::Valid),
    (0x2CB4, Status::Mapped("\u{2CB5}")),
    (0x2CB5, Status::Valid),
    (0x2CB6, Status::Mapped("\u{2CB7}")),
    (0x2CB7, Status::Valid),
    (0x2CB8, Status::Mapped("\u{2CB9}")),
    (0x2CB9, Status::Valid),
    (0x2CBA, Status::Mapped("\u{2CBB}")),
    (0x2CBB, Status::Valid),
    (0x2CBC, Status::Mapped("\u{2CBD}")),
    (0x2CBD, Status::Valid),
    (0x2CBE, Status::Mapped("\u{2CBF}")),
    (0x2CBF, Status::Valid),
    (0x2CC0, Status::Mapped("\u{2CC1}")),
    (0x2CC1, Status::Valid),
    (0x2CC2, Status::Mapped("\u{2CC3}")),
    (0x2CC3, Status::Valid),
    (0x2CC4, Status::Mapped("\u{2CC5}")),
    (0x2CC5, Status::Valid),
    (0x2CC6, Status::Mapped("\u{2CC7}")),
    (0x2CC7, Status::Valid),
    (0x2CC8, Status::Mapped("\u{2CC9}")),
    (0x2CC9, Status::Valid),
    (0x2CCA, Status::Mapped("\u{2CCB}")),
    (0x2CCB, Status::Valid),
    (0x2CCC, Status::Mapped("\u{2CCD}")),
    (0x2CCD, Status::Valid),
    (0x2CCE, Status::Mapped("\u{2CCF}")),
    (0x2CCF, Status::Valid),
    (0x2CD0, Status::Mapped("\u{2CD1}")),
    (0x2CD1, Status::Valid),
    (0x2CD2, Status::Mapped("\u{2CD3}")),
    (0x2CD3, Status::Valid),
    (0x2CD4, Status::Mapped("\u{2CD5}")),
    (0x2CD5, Status::Valid),
    (0x2CD6, Status::Mapped("\u{2CD7}")),
    (0x2CD7, Status::Valid),
    (0x2CD8, Status::Mapped("\u{2CD9}")),
    (0x2CD9, Status::Valid),
    (0x2CDA, Status::Mapped("\u{2CDB}")),
    (0x2CDB, Status::Valid),
    (0x2CDC, Status::Mapped("\u{2CDD}")),
    (0x2CDD, Status::Valid),
    (0x2CDE, Status::Mapped("\u{2CDF}")),
    (0x2CDF, Status::Valid),
    (0x2CE0, Status::Mapped("\u{2CE1}")),
    (0x2CE1, Status::Valid),
    (0x2CE2, Status::Mapped("\u{2CE3}")),
    (0x2CE3, Status::Valid),
    (0x2CEB, Status::Mapped("\u{2CEC}")),
    (0x2CEC, Status::Valid),
    (0x2CED, Status::Mapped("\u{2CEE}")),
    (0x2CEE, Status::Valid),
    (0x2CF2, Status::Mapped("\u{2CF3}")),
    (0x2CF3, Status::Valid),
    (0x2CF4, Status::Disallowed),
    (0x2CF9, Status::Valid),
    (0x2D26, Status::Disallowed),
    (0x2D27, Status::Valid),
    (0x2D28, Status::Disallowed),
    (0x2D2D, Status::Valid),
    (0x2D2E, Status::Disallowed),
    (0x2D30, Status::Valid),
    (0x2D68, Status::Disallowed),
    (0x2D6F, Status::Mapped("\u{2D61}")),
    (0x2D70, Status::Valid),
    (0x2D71, Status::Disallowed),
    (0x2D7F, Status::Valid),
    (0x2D97, Status::Disallowed),
    (0x2DA0, Status::Valid),
    (0x2DA7, Status::Disallowed),
    (0x2DA8, Status::Valid),
    (0x2DAF, Status::Disallowed),
    (0x2DB0, Status::Valid),
    (0x2DB7, Status::Disallowed),
    (0x2DB8, Status::Valid),
    (0x2DBF, Status::Disallowed),
    (0x2DC0, Status::Valid),
    (0x2DC7, Status::Disallowed),
    (0x2DC8, Status::Valid),
    (0x2DCF, Status::Disallowed),
    (0x2DD0, Status::Valid),
    (0x2DD7, Status::Disallowed),
    (0x2DD8, Status::Valid),
    (0x2DDF, Status::Disallowed),
    (0x2DE0, Status::Valid),
    (0x2E5E, Status::Disallowed),
    (0x2E80, Status::Valid),
    (0x2E9A, Status::Disallowed),
    (0x2E9B, Status::Valid),
    (0x2E9F, Status::Mapped("\u{6BCD}")),
    (0x2EA0, Status::Valid),
    (0x2EF3, Status::Mapped("\u{9F9F}")),
    (0x2EF4, Status::Disallowed),
    (0x2F00, Status::Mapped("\u{4E00}")),
    (0x2F01, Status::Mapped("\u{4E28}")),
    (0x2F02, Status::Mapped("\u{4E36}")),
    (0x2F03, Status::Mapped("\u{4E3F}")),
    (0x2F04, Status::Mapped("\u{4E59}")),
    (0x2F05, Status::Mapped("\u{4E85}")),
    (0x2F06, Status::Mapped("\u{4E8C}")),
    (0x2F07, Status::Mapped("\u{4EA0}")),
    (0x2F08, Status::Mapped("\u{4EBA}")),
    (0x2F09, Status::Mapped("\u{513F}")),
    (0x2F0A, Status::Mapped("\u{5165}")),
    (0x2F0B, Status::Mapped("\u{516B}")),
    (0x2F0C, Status::Mapped("\u{5182}")),
    (0x2F0D, Status::Mapped("\u{5196}")),
    (0x2F0E, Status::Mapped("\u{51AB}")),
    (0x2F0F, Status::Mapped("\u{51E0}")),
    (0x2F10, Status::Mapped("\u{51F5}")),
    (0x2F11, Status::Mapped("\u{5200}")),
    (0x2F12, Status::Mapped("\u{529B}")),
    (0x2F13, Status::Mapped("\u{52F9}")),
    (0x2F14, Status::Mapped("\u{5315}")),
    (0x2F15, Status::Mapped("\u{531A}")),
    (0x2F16, Status::Mapped("\u{5338}")),
    (0x2F17, Status::Mapped("\u{5341}")),
    (0x2F18, Status::Mapped("\u{535C}")),
    (0x2F19, Status::Mapped("\u{5369}")),
    (0x2F1A, Status::Mapped("\u{5382}")),
    (0x2F1B, Status::Mapped("\u{53B6}")),
    (0x2F1C, Status::Mapped("\u{53C8}")),
    (0x2F1D, Status::Mapped("\u{53E3}")),
    (0x2F1E, Status::Mapped("\u{56D7}")),
    (0x2F1F, Status::Mapped("\u{571F}")),
    (0x2F20, Status::Mapped("\u{58EB}")),
    (0x2F21, Status::Mapped("\u{5902}")),
    (0x2F22, Status::Mapped("\u{590A}")),
    (0x2F23, Status::Mapped("\u{5915}")),
    (0x2F24, Status::Mapped("\u{5927}")),
    (0x2F25, Status::Mapped("\u{5973}")),
    (0x2F26, Status::Mapped("\u{5B50}")),
    (0x2F27, Status::Mapped("\u{5B80}")),
    (0x2F28, Status::Mapped("\u{5BF8}")),
    (0x2F29, Status::Mapped("\u{5C0F}")),
    (0x2F2A, Status::Mapped("\u{5C22}")),
    (0x2F2B, Status::Mapped("\u{5C38}")),
    (0x2F2C, Status::Mapped("\u{5C6E}")),
    (0x2F2D, Status::Mapped("\u{5C71}")),
    (0x2F2E, Status::Mapped("\u{5DDB}")),
    (0x2F2F, Status::Mapped("\u{5DE5}")),
    (0x2F30, Status::Mapped("\u{5DF1}")),
    (0x2F31, Status::Mapped("\u{5DFE}")),
    (0x2F32, Status::Mapped("\u{5E72}")),
    (0x2F33, Status::Mapped("\u{5E7A}")),
    (0x2F34, Status::Mapped("\u{5E7F}")),
    (0x2F35, Status::Mapped("\u{5EF4}")),
    (0x2F36, Status::Mapped("\u{5EFE}")),
    (0x2F37, Status::Mapped("\u{5F0B}")),
    (0x2F38, Status::Mapped("\u{5F13}")),
    (0x2F39, Status::Mapped("\u{5F50}")),
    (0x2F3A, Status::Mapped("\u{5F61}")),
    (0x2F3B, Status::Mapped("\u{5F73}")),
    (0x2F3C, Status::Mapped("\u{5FC3}")),
    (0x2F3D, Status::Mapped("\u{6208}")),
    (0x2F3E, Status::Mapped("\u{6236}")),
    (0x2F3F, Status::Mapped("\u{624B}")),
    (0x2F40, Status::Mapped("\u{652F}")),
    (0x2F41, Status::Mapped("\u{6534}")),
    (0x2F42, Status::Mapped("\u{6587}")),
    (0x2F43, Status::Mapped("\u{6597}")),
    (0x2F44, Status::Mapped("\u{65A4}")),
    (0x2F45, Status::Mapped("\u{65B9}")),
    (0x2F46, Status::Mapped("\u{65E0}")),
    (0x2F47, Status::Mapped("\u{65E5}")),
    (0x2F48, Status::Mapped("\u{66F0}")),
    (0x2F49, Status::Mapped("\u{6708}")),
    (0x2F4A, Status::Mapped("\u{6728}")),
    (0x2F4B, Status::Mapped("\u{6B20}")),
    (0x2F4C, Status::Mapped("\u{6B62}")),
    (0x2F4D, Status::Mapped("\u{6B79}")),
    (0x2F4E, Status::Mapped("\u{6BB3}")),
    (0x2F4F, Status::Mapped("\u{6BCB}")),
    (0x2F50, Status::Mapped("\u{6BD4}")),
    (0x2F51, Status::Mapped("\u{6BDB}")),
    (0x2F52, Status::Mapped("\u{6C0F}")),
    (0x2F53, Status::Mapped("\u{6C14}")),
    (0x2F54, Status::Mapped("\u{6C34}")),
    (0x2F55, Status::Mapped("\u{706B}")),
    (0x2F56, Status::Mapped("\u{722A}")),
    (0x2F57, Status::Mapped("\u{7236}")),
    (0x2F58, Status::Mapped("\u{723B}")),
    (0x2F59, Status::Mapped("\u{723F}")),
    (0x2F5A, Status::Mapped("\u{7247}")),
    (0x2F5B, Status::Mapped("\u{7259}")),
    (0x2F5C, Status::Mapped("\u{725B}")),
    (0x2F5D, Status::Mapped("\u{72AC}")),
    (0x2F5E, Status::Mapped("\u{7384}")),
    (0x2F5F, Status::Mapped("\u{7389}")),
    (0x2F60, Status::Mapped("\u{74DC}")),
    (0x2F61, Status::Mapped("\u{74E6}")),
    (0x2F62, Status::Mapped("\u{7518}")),
    (0x2F63, Status::Mapped("\u{751F}")),
    (0x2F64, Status::Mapped("\u{7528}")),
    (0x2F65, Status::Mapped("\u{7530}")),
    (0x2F66, Status::Mapped("\u{758B}")),
    (0x2F67, Status::Mapped("\u{7592}")),
    (0x2F68, Status::Mapped("\u{7676}")),
    (0x2F69, Status::Mapped("\u{767D}")),
    (0x2F6A, Status::Mapped("\u{76AE}")),
    (0x2F6B, Status::Mapped("\u{76BF}")),
    (0x2F6C, Status::Mapped("\u{76EE}")),
    (0x2F6D, Status::Mapped("\u{77DB}")),
    (0x2F6E, Status::Mapped("\u{77E2}")),
    (0x2F6F, Status::Mapped("\u{77F3}")),
    (0x2F70, Status::Mapped("\u{793A}")),
    (0x2F71, Status::Mapped("\u{79B8}")),
    (0x2F72, Status::Mapped("\u{79BE}")),
    (0x2F73, Status::Mapped("\u{7A74}")),
    (0x2F74, Status::Mapped("\u{7ACB}")),
    (0x2F75, Status::Mapped("\u{7AF9}")),
    (0x2F76, Status::Mapped("\u{7C73}")),
    (0x2F77, Status::Mapped("\u{7CF8}")),
    (0x2F78, Status::Mapped("\u{7F36}")),
    (0x2F79, Status::Mapped("\u{7F51}")),
    (0x2F7A, Status::Mapped("\u{7F8A}")),
    (0x2F7B, Status::Mapped("\u{7FBD}")),
    (0x2F7C, Status::Mapped("\u{8001}")),
    (0x2F7D, Status::Mapped("\u{800C}")),
    (0x2F7E, Status::Mapped("\u{8012}")),
    (0x2F7F, Status::Mapped("\u{8033}")),
    (0x2F80, Status::Mapped("\u{807F}")),
    (0x2F81, Status::Mapped("\u{8089}")),
    (0x2F82, Status::Mapped("\u{81E3}")),
    (0x2F83, Status::Mapped("\u{81EA}")),
    (0x2F84, Status::Mapped("\u{81F3}")),
    (0x2F85, Status::Mapped("\u{81FC}")),
    (0x2F86, Status::Mapped("\u{820C}")),
    (0x2F87, Status::Mapped("\u{821B}")),
    (0x2F88, Status::Mapped("\u{821F}")),
    (0x2F89, Status::Mapped("\u{826E}")),
    (0x2F8A, Status::Mapped("\u{8272}")),
    (0x2F8B, Status::Mapped("\u{8278}")),
    (0x2F8C, Status::Mapped("\u{864D}")),
    (0x2F8D, Status::Mapped("\u{866B}")),
    (0x2F8E, Status::Mapped("\u{8840}")),
    (0x2F8F, Status::Mapped("\u{884C}")),
    (0x2F90, Status::Mapped("\u{8863}")),
    (0x2F91, Status::Mapped("\u{897E}")),
    (0x2F92, Status::Mapped("\u{898B}")),
    (0x2F93, Status::Mapped("\u{89D2}")),
    (0x2F94, Status::Mapped("\u{8A00}")),
    (0x2F95, Status::Mapped("\u{8C37}")),
    (0x2F96, Status::Mapped("\u{8C46}")),
    (0x2F97, Status::Mapped("\u{8C55}")),
    (0x2F98, Status::Mapped("\u{8C78}")),
    (0x2F99, Status::Mapped("\u{8C9D}")),
    (0x2F9A, Status::Mapped("\u{8D64}")),
    (0x2F9B, Status::Mapped("\u{8D70}")),
    (0x2F9C, Status::Mapped("\u{8DB3}")),
    (0x2F9D, Status::Mapped("\u{8EAB}")),
    (0x2F9E, Status::Mapped("\u{8ECA}")),
    (0x2F9F, Status::Mapped("\u{8F9B}")),
    (0x2FA0, Status::Mapped("\u{8FB0}")),
    (0x2FA1, Status::Mapped("\u{8FB5}")),
    (0x2FA2, Status::Mapped("\u{9091}")),
    (0x2FA3, Status::Mapped("\u{9149}")),
    (0x2FA4, Status::Mapped("\u{91C6}")),
    (0x2FA5, Status::Mapped("\u{91CC}")),
    (0x2FA6, Status::Mapped("\u{91D1}")),
    (0x2FA7, Status::Mapped("\u{9577}")),
    (0x2FA8, Status::Mapped("\u{9580}")),
    (0x2FA9, Status::Mapped("\u{961C}")),
    (0x2FAA, Status::Mapped("\u{96B6}")),
    (0x2FAB, Status::Mapped("\u{96B9}")),
    (0x2FAC, Status::Mapped("\u{96E8}")),
    (0x2FAD, Status::Mapped("\u{9751}")),
    (0x2FAE, Status::Mapped("\u{975E}")),
    (0x2FAF, Status::Mapped("\u{9762}")),
    (0x2FB0, Status::Mapped("\u{9769}")),
    (0x2FB1, Status::Mapped("\u{97CB}")),
    (0x2FB2, Status::Mapped("\u{97ED}")),
    (0x2FB3, Status::Mapped("\u{97F3}")),
    (0x2FB4, Status::Mapped("\u{9801}")),
    (0x2FB5, Status::Mapped("\u{98A8}")),
    (0x2FB6, Status::Mapped("\u{98DB}")),
    (0x2FB7, Status::Mapped("\u{98DF}")),
    (0x2FB8, Status::Mapped("\u{9996}")),
    (0x2FB9, Status::Mapped("\u{9999}")),
    (0x2FBA, Status::Mapped("\u{99AC}")),
    (0x2FBB, Status::Mapped("\u{9AA8}")),
    (0x2FBC, Status::Mapped("\u{9AD8}")),
    (0x2FBD, Status::Mapped("\u{9ADF}")),
    (0x2FBE, Status::Mapped("\u{9B25}")),
    (0x2FBF, Status::Mapped("\u{9B2F}")),
    (0x2FC0, Status::Mapped("\u{9B32}")),
    (0x2FC1, Status::Mapped("\u{9B3C}")),
    (0x2FC2, Status::Mapped("\u{9B5A}")),
    (0x2FC3, Status::Mapped("\u{9CE5}")),
    (0x2FC4, Status::Mapped("\u{9E75}")),
    (0x2FC5, Status::Mapped("\u{9E7F}")),
    (0x2FC6, Status::Mapped("\u{9EA5}")),
    (0x2FC7, Status::Mapped("\u{9EBB}")),
    (0x2FC8, Status::Mapped("\u{9EC3}")),
    (0x2FC9, Status::Mapped("\u{9ECD}")),
    (0x2FCA, Status::Mapped("\u{9ED1}")),
    (0x2FCB, Status::Mapped("\u{9EF9}")),
    (0x2FCC, Status::Mapped("\u{9EFD}")),
    (0x2FCD, Status::Mapped("\u{9F0E}")),
    (0x2FCE, Status::Mapped("\u{9F13}")),
    (0x2FCF, Status::Mapped("\u{9F20}")),
    (0x2FD0, Status::Mapped("\u{9F3B}")),
    (0x2FD1, Status::Mapped("\u{9F4A}")),
    (0x2FD2, Status::Mapped("\u{9F52}")),
    (0x2FD3, Status::Mapped("\u{9F8D}")),
    (0x2FD4, Status::Mapped("\u{9F9C}")),
    (0x2FD5, Status::Mapped("\u{9FA0}")),
    (0x2FD6, Status::Disallowed),
    (0x3000, Status::Mapped(" ")),
    (0x3001, Status::Valid),
    (0x3002, Status::Mapped(".")),
    (0x3003, Status::Valid),
    (0x3036, Status::Mapped("\u{3012}")),
    (0x3037, Status::Valid),
    (0x3038, Status::Mapped("\u{5341}")),
    (0x3039, Status::Mapped("\u{5344}")),
    (0x303A, Status::Mapped("\u{5345}")),
    (0x303B, Status::Valid),
    (0x3040, Status::Disallowed),
    (0x3041, Status::Valid),
    (0x3097, Status::Disallowed),
    (0x3099, Status::Valid),
    (0x309B, Status::Mapped(" \u{3099}")),
    (0x309C, Status::Mapped(" \u{309A}")),
    (0x309D, Status::Valid),
    (0x309F, Status::Mapped("\u{3088}\u{308A}")),
    (0x30A0, Status::Valid),
    (0x30FF, Status::Mapped("\u{30B3}\u{30C8}")),
    (0x3100, Status::Disallowed),
    (0x3105, Status::Valid),
    (0x3130, Status::Disallowed),
    (0x3131, Status::Mapped("\u{1100}")),
    (0x3132, Status::Mapped("\u{1101}")),
    (0x3133, Status::Mapped("\u{11AA}")),
    (0x3134, Status::Mapped("\u{1102}")),
    (0x3135, Status::Mapped("\u{11AC}")),
    (0x3136, Status::Mapped("\u{11AD}")),
    (0x3137, Status::Mapped("\u{1103}")),
    (0x3138, Status::Mapped("\u{1104}")),
    (0x3139, Status::Mapped("\u{1105}")),
    (0x313A, Status::Mapped("\u{11B0}")),
    (0x313B, Status::Mapped("\u{11B1}")),
    (0x313C, Status::Mapped("\u{11B2}")),
    (0x313D, Status::Mapped("\u{11B3}")),
    (0x313E, Status::Mapped("\u{11B4}")),
    (0x313F, Status::Mapped("\u{11B5}")),
    (0x3140, Status::Mapped("\u{111A}")),
    (0x3141, Status::Mapped("\u{1106}")),
    (0x3142, Status::Mapped("\u{1107}")),
    (0x3143, Status::Mapped("\u{1108}")),
    (0x3144, Status::Mapped("\u{1121}")),
    (0x3145, Status::Mapped("\u{1109}")),
    (0x3146, Status::Mapped("\u{110A}")),
    (0x3147, Status::Mapped("\u{110B}")),
    (0x3148, Status::Mapped("\u{110C}")),
    (0x3149, Status::Mapped("\u{110D}")),
    (0x314A, Status::Mapped("\u{110E}")),
    (0x314B, Status::Mapped("\u{110F}")),
    (0x314C, Status::Mapped("\u{1110}")),
    (0x314D, Status::Mapped("\u{1111}")),
    (0x314E, Status::Mapped("\u{1112}")),
    (0x314F, Status::Mapped("\u{1161}")),
    (0x3150, Status::Mapped("\u{1162}")),
    (0x3151, Status::Mapped("\u{1163}")),
    (0x3152, Status::Mapped("\u{1164}")),
    (0x3153, Status::Mapped("\u{1165}")),
    (0x3154, Status::Mapped("\u{1166}")),
    (0x3155, Status::Mapped("\u{1167}")),
    (0x3156, Status::Mapped("\u{1168}")),
    (0x3157, Status::Mapped("\u{1169}")),
    (0x3158, Status::Mapped("\u{116A}")),
    (0x3159, Status::Mapped("\u{116B}")),
    (0x315A, Status::Mapped("\u{116C}")),
    (0x315B, Status::Mapped("\u{116D}")),
    (0x315C, Status::Mapped("\u{116E}")),
    (0x315D, Status::Mapped("\u{116F}")),
    (0x315E, Status::Mapped("\u{1170}")),
    (0x315F, Status::Mapped("\u{1171}")),
    (0x3160, Status::Mapped("\u{1172}")),
    (0x3161, Status::Mapped("\u{1173}")),
    (0x3162, Status::Mapped("\u{1174}")),
    (0x3163, Status::Mapped("\u{1175}")),
    (0x3164, Status::Ignored),
    (0x3165, Status::Mapped("\u{1114}")),
    (0x3166, Status::Mapped("\u{1115}")),
    (0x3167, Status::Mapped("\u{11C7}")),
    (0x3168, Status::Mapped("\u{11C8}")),
    (0x3169, Status::Mapped("\u{11CC}")),
    (0x316A, Status::Mapped("\u{11CE}")),
    (0x316B, Status::Mapped("\u{11D3}")),
    (0x316C, Status::Mapped("\u{11D7}")),
    (0x316D, Status::Mapped("\u{11D9}")),
    (0x316E, Status::Mapped("\u{111C}")),
    (0x316F, Status::Mapped("\u{11DD}")),
    (0x3170, Status::Mapped("\u{11DF}")),
    (0x3171, Status::Mapped("\u{111D}")),
    (0x3172, Status::Mapped("\u{111E}")),
    (0x3173, Status::Mapped("\u{1120}")),
    (0x3174, Status::Mapped("\u{1122}")),
    (0x3175, Status::Mapped("\u{1123}")),
    (0x3176, Status::Mapped("\u{1127}")),
    (0x3177, Status::Mapped("\u{1129}")),
    (0x3178, Status::Mapped("\u{112B}")),
    (0x3179, Status::Mapped("\u{112C}")),
    (0x317A, Status::Mapped("\u{112D}")),
    (0x317B, Status::Mapped("\u{112E}")),
    (0x317C, Status::Mapped("\u{112F}")),
    (0x317D, Status::Mapped("\u{1132}")),
    (0x317E, Status::Mapped("\u{1136}")),
    (0x317F, Status::Mapped("\u{1140}")),
    (0x3180, Status::Mapped("\u{1147}")),
    (0x3181, Status::Mapped("\u{114C}")),
    (0x3182, Status::Mapped("\u{11F1}")),
    (0x3183, Status::Mapped("\u{11F2}")),
    (0x3184, Status::Mapped("\u{1157}")),
    (0x3185, Status::Mapped("\u{1158}")),
    (0x3186, Status::Mapped("\u{1159}")),
    (0x3187, Status::Mapped("\u{1184}")),
    (0x3188, Status::Mapped("\u{1185}")),
    (0x3189, Status::Mapped("\u{1188}")),
    (0x318A, Status::Mapped("\u{1191}")),
    (0x318B, Status::Mapped("\u{1192}")),
    (0x318C, Status::Mapped("\u{1194}")),
    (0x318D, Status::Mapped("\u{119E}")),
    (0x318E, Status::Mapped("\u{11A1}")),
    (0x318F, Status::Disallowed),
    (0x3190, Status::Valid),
    (0x3192, Status::Mapped("\u{4E00}")),
    (0x3193, Status::Mapped("\u{4E8C}")),
    (0x3194, Status::Mapped("\u{4E09}")),
    (0x3195, Status::Mapped("\u{56DB}")),
    (0x3196, Status::Mapped("\u{4E0A}")),
    (0x3197, Status::Mapped("\u{4E2D}")),
    (0x3198, Status::Mapped("\u{4E0B}")),
    (0x3199, Status::Mapped("\u{7532}")),
    (0x319A, Status::Mapped("\u{4E59}")),
    (0x319B, Status::Mapped("\u{4E19}")),
    (0x319C, Status::Mapped("\u{4E01}")),
    (0x319D, Status::Mapped("\u{5929}")),
    (0x319E, Status::Mapped("\u{5730}")),
    (0x319F, Status::Mapped("\u{4EBA}")),
    (0x31A0, Status::Valid),
    (0x31E6, Status::Disallowed),
    (0x31F0, Status::Valid),
    (0x3200, Status::Mapped("(\u{1100})")),
    (0x3201, Status::Mapped("(\u{1102})")),
    (0x3202, Status::Mapped("(\u{1103})")),
    (0x3203, Status::Mapped("(\u{1105})")),
    (0x3204, Status::Mapped("(\u{1106})")),
    (0x3205, Status::Mapped("(\u{1107})")),
    (0x3206, Status::Mapped("(\u{1109})")),
    (0x3207, Status::Mapped("(\u{110B})")),
    (0x3208, Status::Mapped("(\u{110C})")),
    (0x3209, Status::Mapped("(\u{110E})")),
    (0x320A, Status::Mapped("(\u{110F})")),
    (0x320B, Status::Mapped("(\u{1110})")),
    (0x320C, Status::Mapped("(\u{1111})")),
    (0x320D, Status::Mapped("(\u{1112})")),
    (0x320E, Status::Mapped("(\u{AC00})")),
    (0x320F, Status::Mapped("(\u{B098})")),
    (0x3210, Status::Mapped("(\u{B2E4})")),
    (0x3211, Status::Mapped("(\u{B77C})")),
    (0x3212, Status::Mapped("(\u{B9C8})")),
    (0x3213, Status::Mapped("(\u{BC14})")),
    (0x3214, Status::Mapped("(\u{C0AC})")),
    (0x3215, Status::Mapped("(\u{C544})")),
    (0x3216, Status::Mapped("(\u{C790})")),
    (0x3217, Status::Mapped("(\u{CC28})")),
    (0x3218, Status::Mapped("(\u{CE74})")),
    (0x3219, Status::Mapped("(\u{D0C0})")),
    (0x321A, Status::Mapped("(\u{D30C})")),
    (0x321B, Status::Mapped("(\u{D558})")),
    (0x321C, Status::Mapped("(\u{C8FC})")),
    (0x321D, Status::Mapped("(\u{C624}\u{C804})")),
    (0x321E, Status::Mapped("(\u{C624}\u{D6C4})")),
    (0x321F, Status::Disallowed),
    (0x3220, Status::Mapped("(\u{4E00})")),
    (0x3221, Status::Mapped("(\u{4E8C})")),
    (0x3222, Status::Mapped("(\u{4E09})")),
    (0x3223, Status::Mapped("(\u{56DB})")),
    (0x3224, Status::Mapped("(\u{4E94})")),
    (0x3225, Status::Mapped("(\u{516D})")),
    (0x3226, Status::Mapped("(\u{4E03})")),
    (0x3227, Status::Mapped("(\u{516B})")),
    (0x3228, Status::Mapped("(\u{4E5D})")),
    (0x3229, Status::Mapped("(\u{5341})")),
    (0x322A, Status::Mapped("(\u{6708})")),
    (0x322B, Status::Mapped("(\u{706B})")),
    (0x322C, Status::Mapped("(\u{6C34})")),
    (0x322D, Status::Mapped("(\u{6728})")),
    (0x322E, Status::Mapped("(\u{91D1})")),
    (0x322F, Status::Mapped("(\u{571F})")),
    (0x3230, Status::Mapped("(\u{65E5})")),
    (0x3231, Status::Mapped("(\u{682A})")),
    (0x3232, Status::Mapped("(\u{6709})")),
    (0x3233, Status::Mapped("(\u{793E})")),
    (0x3234, Status::Mapped("(\u{540D})")),
    (0x3235, Status::Mapped("(\u{7279})")),
    (0x3236, Status::Mapped("(\u{8CA1})")),
    (0x3237, Status::Mapped("(\u{795D})")),
    (0x3238, Status::Mapped("(\u{52B4})")),
    (0x3239, Status::Mapped("(\u{4EE3})")),
    (0x323A, Status::Mapped("(\u{547C})")),
    (0x323B, Status::Mapped("(\u{5B66})")),
    (0x323C, Status::Mapped("(\u{76E3})")),
    (0x323D, Status::Mapped("(\u{4F01})")),
    (0x323E, Status::Mapped("(\u{8CC7})")),
    (0x323F, Status::Mapped("(\u{5354})")),
    (0x3240, Status::Mapped("(\u{796D})")),
    (0x3241, Status::Mapped("(\u{4F11})")),
    (0x3242, Status::Mapped("(\u{81EA})")),
    (0x3243, Status::Mapped("(\u{81F3})")),
    (0x3244, Status::Mapped("\u{554F}")),
    (0x3245, Status::Mapped("\u{5E7C}")),
    (0x3246, Status::Mapped("\u{6587}")),
    (0x3247, Status::Mapped("\u{7B8F}")),
    (0x3248, Status::Valid),
    (0x3250, Status::Mapped("pte")),
    (0x3251, Status::Mapped("21")),
    (0x3252, Status::Mapped("22")),
    (0x3253, Status::Mapped("23")),
    (0x3254, Status::Mapped("24")),
    (0x3255, Status::Mapped("25")),
    (0x3256, Status::Mapped("26")),
    (0x3257, Status::Mapped("27")),
    (0x3258, Status::Mapped("28")),
    (0x3259, Status::Mapped("29")),
    (0x325A, Status::Mapped("30")),
    (0x325B, Status::Mapped("31")),
    (0x325C, Status::Mapped("32")),
    (0x325D, Status::Mapped("33")),
    (0x325E, Status::Mapped("34")),
    (0x325F, Status::Mapped("35")),
    (0x3260, Status::Mapped("\u{1100}")),
    (0x3261, Status::Mapped("\u{1102}")),
    (0x3262, Status::Mapped("\u{1103}")),
    (0x3263, Status::Mapped("\u{1105}")),
    (0x3264, Status::Mapped("\u{1106}")),
    (0x3265, Status::Mapped("\u{1107}")),
    (0x3266, Status::Mapped("\u{1109}")),
    (0x3267, Status::Mapped("\u{110B}")),
    (0x3268, Status::Mapped("\u{110C}")),
    (0x3269, Status::Mapped("\u{110E}")),
    (0x326A, Status::Mapped("\u{110F}")),
    (0x326B, Status::Mapped("\u{1110}")),
    (0x326C, Status::Mapped("\u{1111}")),
    (0x326D, Status::Mapped("\u{1112}")),
    (0x326E, Status::Mapped("\u{AC00}")),
    (0x326F, Status::Mapped("\u{B098}")),
    (0x3270, Status::Mapped("\u{B2E4}")),
    (0x3271, Status::Mapped("\u{B77C}")),
    (0x3272, Status::Mapped("\u{B9C8}")),
    (0x3273, Status::Mapped("\u{BC14}")),
    (0x3274, Status::Mapped("\u{C0AC}")),
    (0x3275, Status::Mapped("\u{C544}")),
    (0x3276, Status::Mapped("\u{C790}")),
    (0x3277, Status::Mapped("\u{CC28}")),
    (0x3278, Status::Mapped("\u{CE74}")),
    (0x3279, Status::Mapped("\u{D0C0}")),
    (0x327A, Status::Mapped("\u{D30C}")),
    (0x327B, Status::Mapped("\u{D558}")),
    (0x327C, Status::Mapped("\u{CC38}\u{ACE0}")),
    (0x327D, Status::Mapped("\u{C8FC}\u{C758}")),
    (0x327E, Status::Mapped("\u{C6B0}")),
    (0x327F, Status::Valid),
    (0x3280, Status::Mapped("\u{4E00}")),
    (0x3281, Status::Mapped("\u{4E8C}")),
    (0x3282, Status::Mapped("\u{4E09}")),
    (0x3283, Status::Mapped("\u{56DB}")),
    (0x3284, Status::Mapped("\u{4E94}")),
    (0x3285, Status::Mapped("\u{516D}")),
    (0x3286, Status::Mapped("\u{4E03}")),
    (0x3287, Status::Mapped("\u{516B}")),
    (0x3288, Status::Mapped("\u{4E5D}")),
    (0x3289, Status::Mapped("\u{5341}")),
    (0x328A, Status::Mapped("\u{6708}")),
    (0x328B, Status::Mapped("\u{706B}")),
    (0x328C, Status::Mapped("\u{6C34}")),
    (0x328D, Status::Mapped("\u{6728}")),
    (0x328E, Status::Mapped("\u{91D1}")),
    (0x328F, Status::Mapped("\u{571F}")),
    (0x3290, Status::Mapped("\u{65E5}")),
    (0x3291, Status::Mapped("\u{682A}")),
    (0x3292, Status::Mapped("\u{6709}")),
    (0x3293, Status::Mapped("\u{793E}")),
    (0x3294, Status::Mapped("\u{540D}")),
    (0x3295, Status::Mapped("\u{7279}")),
    (0x3296, Status::Mapped("\u{8CA1}")),
    (0x3297, Status::Mapped("\u{795D}")),
    (0x3298, Status::Mapped("\u{52B4}")),
    (0x3299, Status::Mapped("\u{79D8}")),
    (0x329A, Status::Mapped("\u{7537}")),
    (0x329B, Status::Mapped("\u{5973}")),
    (0x329C, Status::Mapped("\u{9069}")),
    (0x329D, Status::Mapped("\u{512A}")),
    (0x329E, Status::Mapped("\u{5370}")),
    (0x329F, Status::Mapped("\u{6CE8}")),
    (0x32A0, Status::Mapped("\u{9805}")),
    (0x32A1, Status::Mapped("\u{4F11}")),
    (0x32A2, Status::Mapped("\u{5199}")),
    (0x32A3, Status::Mapped("\u{6B63}")),
    (0x32A4, Status::Mapped("\u{4E0A}")),
    (0x32A5, Status::Mapped("\u{4E2D}")),
    (0x32A6, Status::Mapped("\u{4E0B}")),
    (0x32A7, Status::Mapped("\u{5DE6}")),
    (0x32A8, Status::Mapped("\u{53F3}")),
    (0x32A9, Status::Mapped("\u{533B}")),
    (0x32AA, Status::Mapped("\u{5B97}")),
    (0x32AB, Status::Mapped("\u{5B66}")),
    (0x32AC, Status::Mapped("\u{76E3}")),
    (0x32AD, Status::Mapped("\u{4F01}")),
    (0x32AE, Status::Mapped("\u{8CC7}")),
    (0x32AF, Status::Mapped("\u{5354}")),
    (0x32B0, Status::Mapped("\u{591C}")),
    (0x32B1, Status::Mapped("36")),
    (0x32B2, Status::Mapped("37")),
    (0x32B3, Status::Mapped("38")),
    (0x32B4, Status::Mapped("39")),
    (0x32B5, Status::Mapped("40")),
    (0x32B6, Status::Mapped("41")),
    (0x32B7, Status::Mapped("42")),
    (0x32B8, Status::Mapped("43")),
    (0x32B9, Status::Mapped("44")),
    (0x32BA, Status::Mapped("45")),
    (0x32BB, Status::Mapped("46")),
    (0x32BC, Status::Mapped("47")),
    (0x32BD, Status::Mapped("48")),
    (0x32BE, Status::Mapped("49")),
    (0x32BF, Status::Mapped("50")),
    (0x32C0, Status::Mapped("1\u{6708}")),
    (0x32C1, Status::Mapped("2\u{6708}")),
    (0x32C2, Status::Mapped("3\u{6708}")),
    (0x32C3, Status::Mapped("4\u{6708}")),
    (0x32C4, Status::Mapped("5\u{6708}")),
    (0x32C5, Status::Mapped("6\u{6708}")),
    (0x32C6, Status::Mapped("7\u{6708}")),
    (0x32C7, Status::Mapped("8\u{6708}")),
    (0x32C8, Status::Mapped("9\u{6708}")),
    (0x32C9, Status::Mapped("10\u{6708}")),
    (0x32CA, Status::Mapped("11\u{6708}")),
    (0x32CB, Status::Mapped("12\u{6708}")),
    (0x32CC, Status::Mapped("hg")),
    (0x32CD, Status::Mapped("erg")),
    (0x32CE, Status::Mapped("ev")),
    (0x32CF, Status::Mapped("ltd")),
    (0x32D0, Status::Mapped("\u{30A2}")),
    (0x32D1, Status::Mapped("\u{30A4}")),
    (0x32D2, Status::Mapped("\u{30A6}")),
    (0x32D3, Status::Mapped("\u{30A8}")),
    (0x32D4, Status::Mapped("\u{30AA}")),
    (0x32D5, Status::Mapped("\u{30AB}")),
    (0x32D6, Status::Mapped("\u{30AD}")),
    (0x32D7, Status::Mapped("\u{30AF}")),
    (0x32D8, Status::Mapped("\u{30B1}")),
    (0x32D9, Status::Mapped("\u{30B3}")),
    (0x32DA, Status::Mapped("\u{30B5}")),
    (0x32DB, Status::Mapped("\u{30B7}")),
    (0x32DC, Status::Mapped("\u{30B9}")),
    (0x32DD, Status::Mapped("\u{30BB}")),
    (0x32DE, Status::Mapped("\u{30BD}")),
    (0x32DF, Status::Mapped("\u{30BF}")),
    (0x32E0, Status::Mapped("\u{30C1}")),
    (0x32E1, Status::Mapped("\u{30C4}")),
    (0x32E2, Status::Mapped("\u{30C6}")),
    (0x32E3, Status::Mapped("\u{30C8}")),
    (0x32E4, Status::Mapped("\u{30CA}")),
    (0x32E5, Status::Mapped("\u{30CB}")),
    (0x32E6, Status::Mapped("\u{30CC}")),
    (0x32E7, Status::Mapped("\u{30CD}")),
    (0x32E8, Status::Mapped("\u{30CE}")),
    (0x32E9, Status::Mapped("\u{30CF}")),
    (0x32EA, Status::Mapped("\u{30D2}")),
    (0x32EB, Status::Mapped("\u{30D5}")),
    (0x32EC, Status::Mapped("\u{30D8}")),
    (0x32ED, Status::Mapped("\u{30DB}")),
    (0x32EE, Status::Mapped("\u{30DE}")),
    (0x32EF, Status::Mapped("\u{30DF}")),
    (0x32F0, Status::Mapped("\u{30E0}")),
    (0x32F1, Status::Mapped("\u{30E1}")),
    (0x32F2, Status::Mapped("\u{30E2}")),
    (0x32F3, Status::Mapped("\u{30E4}")),
    (0x32F4, Status::Mapped("\u{30E6}")),
    (0x32F5, Status::Mapped("\u{30E8}")),
    (0x32F6, Status::Mapped("\u{30E9}")),
    (0x32F7, Status::Mapped("\u{30EA}")),
    (0x32F8, Status::Mapped("\u{30EB}")),
    (0x32F9, Status::Mapped("\u{30EC}")),
    (0x32FA, Status::Mapped("\u{30ED}")),
    (0x32FB, Status::Mapped("\u{30EF}")),
    (0x32FC, Status::Mapped("\u{30F0}")),
    (0x32FD, Status::Mapped("\u{30F1}")),
    (0x32FE, Status::Mapped("\u{30F2}")),
    (0x32FF, Status::Mapped("\u{4EE4}\u{548C}")),
    (0x3300, Status::Mapped("\u{30A2}\u{30D1}\u{30FC}\u{30C8}")),
    (0x3301, Status::Mapped("\u{30A2}\u{30EB}\u{30D5}\u{30A1}")),
    (0x3302, Status::Mapped("\u{30A2}\u{30F3}\u{30DA}\u{30A2}")),
    (0x3303, Status::Mapped("\u{30A2}\u{30FC}\u{30EB}")),
    (0x3304, Status::Mapped("\u{30A4}\u{30CB}\u{30F3}\u{30B0}")),
    (0x3305, Status::Mapped("\u{30A4}\u{30F3}\u{30C1}")),
    (0x3306, Status::Mapped("\u{30A6}\u{30A9}\u{30F3}")),
    (0x3307, Status::Mapped("\u{30A8}\u{30B9}\u{30AF}\u{30FC}\u{30C9}")),
    (0x3308, Status::Mapped("\u{30A8}\u{30FC}\u{30AB}\u{30FC}")),
    (0x3309, Status::Mapped("\u{30AA}\u{30F3}\u{30B9}")),
    (0x330A, Status::Mapped("\u{30AA}\u{30FC}\u{30E0}")),
    (0x330B, Status::Mapped("\u{30AB}\u{30A4}\u{30EA}")),
    (0x330C, Status::Mapped("\u{30AB}\u{30E9}\u{30C3}\u{30C8}")),
    (0x330D, Status::Mapped("\u{30AB}\u{30ED}\u{30EA}\u{30FC}")),
    (0x330E, Status::Mapped("\u{30AC}\u{30ED}\u{30F3}")),
    (0x330F, Status::Mapped("\u{30AC}\u{30F3}\u{30DE}")),
    (0x3310, Status::Mapped("\u{30AE}\u{30AC}")),
    (0x3311, Status::Mapped("\u{30AE}\u{30CB}\u{30FC}")),
    (0x3312, Status::Mapped("\u{30AD}\u{30E5}\u{30EA}\u{30FC}")),
    (0x3313, Status::Mapped("\u{30AE}\u{30EB}\u{30C0}\u{30FC}")),
    (0x3314, Status::Mapped("\u{30AD}\u{30ED}")),
    (0x3315, Status::Mapped("\u{30AD}\u{30ED}\u{30B0}\u{30E9}\u{30E0}")),
    (0x3316, Status::Mapped("\u{30AD}\u{30ED}\u{30E1}\u{30FC}\u{30C8}\u{30EB}")),
    (0x3317, Status::Mapped("\u{30AD}\u{30ED}\u{30EF}\u{30C3}\u{30C8}")),
    (0x3318, Status::Mapped("\u{30B0}\u{30E9}\u{30E0}")),
    (0x3319, Status::Mapped("\u{30B0}\u{30E9}\u{30E0}\u{30C8}\u{30F3}")),
    (0x331A, Status::Mapped("\u{30AF}\u{30EB}\u{30BC}\u{30A4}\u{30ED}")),
    (0x331B, Status::Mapped("\u{30AF}\u{30ED}\u{30FC}\u{30CD}")),
    (0x331C, Status::Mapped("\u{30B1}\u{30FC}\u{30B9}")),
    (0x331D, Status::Mapped("\u{30B3}\u{30EB}\u{30CA}")),
    (0x331E, Status::Mapped("\u{30B3}\u{30FC}\u{30DD}")),
    (0x331F, Status::Mapped("\u{30B5}\u{30A4}\u{30AF}\u{30EB}")),
    (0x3320, Status::Mapped("\u{30B5}\u{30F3}\u{30C1}\u{30FC}\u{30E0}")),
    (0x3321, Status::Mapped("\u{30B7}\u{30EA}\u{30F3}\u{30B0}")),
    (0x3322, Status::Mapped("\u{30BB}\u{30F3}\u{30C1}")),
    (0x3323, Status::Mapped("\u{30BB}\u{30F3}\u{30C8}")),
    (0x3324, Status::Mapped("\u{30C0}\u{30FC}\u{30B9}")),
    (0x3325, Status::Mapped("\u{30C7}\u{30B7}")),
    (0x3326, Status::Mapped("\u{30C9}\u{30EB}")),
    (0x3327, Status::Mapped("\u{30C8}\u{30F3}")),
    (0x3328, Status::Mapped("\u{30CA}\u{30CE}")),
    (0x3329, Status::Mapped("\u{30CE}\u{30C3}\u{30C8}")),
    (0x332A, Status::Mapped("\u{30CF}\u{30A4}\u{30C4}")),
    (0x332B, Status::Mapped("\u{30D1}\u{30FC}\u{30BB}\u{30F3}\u{30C8}")),
    (0x332C, Status::Mapped("\u{30D1}\u{30FC}\u{30C4}")),
    (0x332D, Status::Mapped("\u{30D0}\u{30FC}\u{30EC}\u{30EB}")),
    (0x332E, Status::Mapped("\u{30D4}\u{30A2}\u{30B9}\u{30C8}\u{30EB}")),
    (0x332F, Status::Mapped("\u{30D4}\u{30AF}\u{30EB}")),
    (0x3330, Status::Mapped("\u{30D4}\u{30B3}")),
    (0x3331, Status::Mapped("\u{30D3}\u{30EB}")),
    (0x3332, Status::Mapped("\u{30D5}\u{30A1}\u{30E9}\u{30C3}\u{30C9}")),
    (0x3333, Status::Mapped("\u{30D5}\u{30A3}\u{30FC}\u{30C8}")),
    (0x3334, Status::Mapped("\u{30D6}\u{30C3}\u{30B7}\u{30A7}\u{30EB}")),
    (0x3335, Status::Mapped("\u{30D5}\u{30E9}\u{30F3}")),
    (0x3336, Status::Mapped("\u{30D8}\u{30AF}\u{30BF}\u{30FC}\u{30EB}")),
    (0x3337, Status::Mapped("\u{30DA}\u{30BD}")),
    (0x3338, Status::Mapped("\u{30DA}\u{30CB}\u{30D2}")),
    (0x3339, Status::Mapped("\u{30D8}\u{30EB}\u{30C4}")),
    (0x333A, Status::Mapped("\u{30DA}\u{30F3}\u{30B9}")),
    (0x333B, Status::Mapped("\u{30DA}\u{30FC}\u{30B8}")),
    (0x333C, Status::Mapped("\u{30D9}\u{30FC}\u{30BF}")),
    (0x333D, Status::Mapped("\u{30DD}\u{30A4}\u{30F3}\u{30C8}")),
    (0x333E, Status::Mapped("\u{30DC}\u{30EB}\u{30C8}")),
    (0x333F, Status::Mapped("\u{30DB}\u{30F3}")),
    (0x3340, Status::Mapped("\u{30DD}\u{30F3}\u{30C9}")),
    (0x3341, Status::Mapped("\u{30DB}\u{30FC}\u{30EB}")),
    (0x3342, Status::Mapped("\u{30DB}\u{30FC}\u{30F3}")),
    (0x3343, Status::Mapped("\u{30DE}\u{30A4}\u{30AF}\u{30ED}")),
    (0x3344, Status::Mapped("\u{30DE}\u{30A4}\u{30EB}")),
    (0x3345, Status::Mapped("\u{30DE}\u{30C3}\u{30CF}")),
    (0x3346, Status::Mapped("\u{30DE}\u{30EB}\u{30AF}")),
    (0x3347, Status::Mapped("\u{30DE}\u{30F3}\u{30B7}\u{30E7}\u{30F3}")),
    (0x3348, Status::Mapped("\u{30DF}\u{30AF}\u{30ED}\u{30F3}")),
    (0x3349, Status::Mapped("\u{30DF}\u{30EA}")),
    (0x334A, Status::Mapped("\u{30DF}\u{30EA}\u{30D0}\u{30FC}\u{30EB}")),
    (0x334B, Status::Mapped("\u{30E1}\u{30AC}")),
    (0x334C, Status::Mapped("\u{30E1}\u{30AC}\u{30C8}\u{30F3}")),
    (0x334D, Status::Mapped("\u{30E1}\u{30FC}\u{30C8}\u{30EB}")),
    (0x334E, Status::Mapped("\u{30E4}\u{30FC}\u{30C9}")),
    (0x334F, Status::Mapped("\u{30E4}\u{30FC}\u{30EB}")),
    (0x3350, Status::Mapped("\u{30E6}\u{30A2}\u{30F3}")),
    (0x3351, Status::Mapped("\u{30EA}\u{30C3}\u{30C8}\u{30EB}")),
    (0x3352, Status::Mapped("\u{30EA}\u{30E9}")),
    (0x3353, Status::Mapped("\u{30EB}\u{30D4}\u{30FC}")),
    (0x3354, Status::Mapped("\u{30EB}\u{30FC}\u{30D6}\u{30EB}")),
    (0x3355, Status::Mapped("\u{30EC}\u{30E0}")),
    (0x3356, Status::Mapped("\u{30EC}\u{30F3}\u{30C8}\u{30B2}\u{30F3}")),
    (0x3357, Status::Mapped("\u{30EF}\u{30C3}\u{30C8}")),
    (0x3358, Status::Mapped("0\u{70B9}")),
    (0x3359, Status::Mapped("1\u{70B9}")),
    (0x335A, Status::Mapped("2\u{70B9}")),
    (0x335B, Status::Mapped("3\u{70B9}")),
    (0x335C, Status::Mapped("4\u{70B9}")),
    (0x335D, Status::Mapped("5\u{70B9}")),
    (0x335E, Status::Mapped("6\u{70B9}")),
    (0x335F, Status::Mapped("7\u{70B9}")),
    (0x3360, Status::Mapped("8\u{70B9}")),
    (0x3361, Status::Mapped("9\u{70B9}")),
    (0x3362, Status::Mapped("10\u{70B9}")),
    (0x3363, Status::Mapped("11\u{70B9}")),
    (0x3364, Status::Mapped("12\u{70B9}")),
    (0x3365, Status::Mapped("13\u{70B9}")),
    (0x3366, Status::Mapped("14\u{70B9}")),
    (0x3367, Status::Mapped("15\u{70B9}")),
    (0x3368, Status::Mapped("16\u{70B9}")),
    (0x3369, Status::Mapped("17\u{70B9}")),
    (0x336A, Status::Mapped("18\u{70B9}")),
    (0x336B, Status::Mapped("19\u{70B9}")),
    (0x336C, Status::Mapped("20\u{70B9}")),
    (0x336D, Status::Mapped("21\u{70B9}")),
    (0x336E, Status::Mapped("22\u{70B9}")),
    (0x336F, Status::Mapped("23\u{70B9}")),
    (0x3370, Status::Mapped("24\u{70B9}")),
    (0x3371, Status::Mapped("hpa")),
    (0x3372, Status::Mapped("da")),
    (0x3373, Status::Mapped("au")),
    (0x3374, Status::Mapped("bar")),
    (0x3375, Status::Mapped("ov")),
    (0x3376, Status::Mapped("pc")),
    (0x3377, Status::Mapped("dm")),
    (0x3378, Status::Mapped("dm2")),
    (0x3379, Status::Mapped("dm3")),
    (0x337A, Status::Mapped("iu")),
    (0x337B, Status::Mapped("\u{5E73}\u{6210}")),
    (0x337C, Status::Mapped("\u{662D}\u{548C}")),
    (0x337D, Status::Mapped("\u{5927}\u{6B63}")),
    (0x337E, Status::Mapped("\u{660E}\u{6CBB}")),
    (0x337F, Status::Mapped("\u{682A}\u{5F0F}\u{4F1A}\u{793E}")),
    (0x3380, Status::Mapped("pa")),
    (0x3381, Status::Mapped("na")),
    (0x3382, Status::Mapped("\u{3BC}a")),
    (0x3383, Status::Mapped("ma")),
    (0x3384, Status::Mapped("ka")),
    (0x3385, Status::Mapped("kb")),
    (0x3386, Status::Mapped("mb")),
    (0x3387, Status::Mapped("gb")),
    (0x3388, Status::Mapped("cal")),
    (0x3389, Status::Mapped("kcal")),
    (0x338A, Status::Mapped("pf")),
    (0x338B, Status::Mapped("nf")),
    (0x338C, Status::Mapped("\u{3BC}f")),
    (0x338D, Status::Mapped("\u{3BC}g")),
    (0x338E, Status::Mapped("mg")),
    (0x338F, Status::Mapped("kg")),
    (0x3390, Status::Mapped("hz")),
    (0x3391, Status::Mapped("khz")),
    (0x3392, Status::Mapped("mhz")),
    (0x3393, Status::Mapped("ghz")),
    (0x3394, Status::Mapped("thz")),
    (0x3395, Status::Mapped("\u{3BC}l")),
    (0x3396, Status::Mapped("ml")),
    (0x3397, Status::Mapped("dl")),
    (0x3398, Status::Mapped("kl")),
    (0x3399, Status::Mapped("fm")),
    (0x339A, Status::Mapped("nm")),
    (0x339B, Status::Mapped("\u{3BC}m")),
    (0x339C, Status::Mapped("mm")),
    (0x339D, Status::Mapped("cm")),
    (0x339E, Status::Mapped("km")),
    (0x339F, Status::Mapped("mm2")),
    (0x33A0, Status::Mapped("cm2")),
    (0x33A1, Status::Mapped("m2")),
    (0x33A2, Status::Mapped("km2")),
    (0x33A3, Status::Mapped("mm3")),
    (0x33A4, Status::Mapped("cm3")),
    (0x33A5, Status::Mapped("m3")),
    (0x33A6, Status::Mapped("km3")),
    (0x33A7, Status::Mapped("m\u{2215}s")),
    (0x33A8, Status::Mapped("m\u{2215}s2")),
    (0x33A9, Status::Mapped("pa")),
    (0x33AA, Status::Mapped("kpa")),
    (0x33AB, Status::Mapped("mpa")),
    (0x33AC, Status::Mapped("gpa")),
    (0x33AD, Status::Mapped("rad")),
    (0x33AE, Status::Mapped("rad\u{2215}s")),
    (0x33AF, Status::Mapped("rad\u{2215}s2")),
    (0x33B0, Status::Mapped("ps")),
    (0x33B1, Status::Mapped("ns")),
    (0x33B2, Status::Mapped("\u{3BC}s")),
    (0x33B3, Status::Mapped("ms")),
    (0x33B4, Status::Mapped("pv")),
    (0x33B5, Status::Mapped("nv")),
    (0x33B6, Status::Mapped("\u{3BC}v")),
    (0x33B7, Status::Mapped("mv")),
    (0x33B8, Status::Mapped("kv")),
    (0x33B9, Status::Mapped("mv")),
    (0x33BA, Status::Mapped("pw")),
    (0x33BB, Status::Mapped("nw")),
    (0x33BC, Status::Mapped("\u{3BC}w")),
    (0x33BD, Status::Mapped("mw")),
    (0x33BE, Status::Mapped("kw")),
    (0x33BF, Status::Mapped("mw")),
    (0x33C0, Status::Mapped("k\u{3C9}")),
    (0x33C1, Status::Mapped("m\u{3C9}")),
    (0x33C2, Status::Disallowed),
    (0x33C3, Status::Mapped("bq")),
    (0x33C4, Status::Mapped("cc")),
    (0x33C5, Status::Mapped("cd")),
    (0x33C6, Status::Mapped("c\u{2215}kg")),
    (0x33C7, Status::Disallowed),
    (0x33C8, Status::Mapped("db")),
    (0x33C9, Status::Mapped("gy")),
    (0x33CA, Status::Mapped("ha")),
    (0x33CB, Status::Mapped("hp")),
    (0x33CC, Status::Mapped("in")),
    (0x33CD, Status::Mapped("kk")),
    (0x33CE, Status::Mapped("km")),
    (0x33CF, Status::Mapped("kt")),
    (0x33D0, Status::Mapped("lm")),
    (0x33D1, Status::Mapped("ln")),
    (0x33D2, Status::Mapped("log")),
    (0x33D3, Status::Mapped("lx")),
    (0x33D4, Status::Mapped("mb")),
    (0x33D5, Status::Mapped("mil")),
    (0x33D6, Status::Mapped("mol")),
    (0x33D7, Status::Mapped("ph")),
    (0x33D8, Status::Disallowed),
    (0x33D9, Status::Mapped("ppm")),
    (0x33DA, Status::Mapped("pr")),
    (0x33DB, Status::Mapped("sr")),
    (0x33DC, Status::Mapped("sv")),
    (0x33DD, Status::Mapped("wb")),
    (0x33DE, Status::Mapped("v\u{2215}m")),
    (0x33DF, Status::Mapped("a\u{2215}m")),
    (0x33E0, Status::Mapped("1\u{65E5}")),
    (0x33E1, Status::Mapped("2\u{65E5}")),
    (0x33E2, Status::Mapped("3\u{65E5}")),
    (0x33E3, Status::Mapped("4\u{65E5}")),
    (0x33E4, Status::Mapped("5\u{65E5}")),
    (0x33E5, Status::Mapped("6\u{65E5}")),
    (0x33E6, Status::Mapped("7\u{65E5}")),
    (0x33E7, Status::Mapped("8\u{65E5}")),
    (0x33E8, Status::Mapped("9\u{65E5}")),
    (0x33E9, Status::Mapped("10\u{65E5}")),
    (0x33EA, Status::Mapped("11\u{65E5}")),
    (0x33EB, Status::Mapped("12\u{65E5}")),
    (0x33EC, Status::Mapped("13\u{65E5}")),
    (0x33ED, Status::Mapped("14\u{65E5}")),
    (0x33EE, Status::Mapped("15\u{65E5}")),
    (0x33EF, Status::Mapped("16\u{65E5}")),
    (0x33F0, Status::Mapped("17\u{65E5}")),
    (0x33F1, Status::Mapped("18\u{65E5}")),
    (0x33F2, Status::Mapped("19\u{65E5}")),
    (0x33F3, Status::Mapped("20\u{65E5}")),
    (0x33F4, Status::Mapped("21\u{65E5}")),
    (0x33F5, Status::Mapped("22\u{65E5}")),
    (0x33F6, Status::Mapped("23\u{65E5}")),
    (0x33F7, Status::Mapped("24\u{65E5}")),
    (0x33F8, Status::Mapped("25\u{65E5}")),
    (0x33F9, Status::Mapped("26\u{65E5}")),
    (0x33FA, Status::Mapped("27\u{65E5}")),
    (0x33FB, Status::Mapped("28\u{65E5}")),
    (0x33FC, Status::Mapped("29\u{65E5}")),
    (0x33FD, Status::Mapped("30\u{65E5}")),
    (0x33FE, Status::Mapped("31\u{65E5}")),
    (0x33FF, Status::Mapped("gal")),
    (0x3400, Status::Valid),
    (0xA48D, Status::Disallowed),
    (0xA490, Status::Valid),
    (0xA4C7, Status::Disallowed),
    (0xA4D0, Status::Valid),
    (0xA62C, Status::Disallowed),
    (0xA640, Status::Mapped("\u{A641}")),
    (0xA641, Status::Valid),
    (0xA642, Status::Mapped("\u{A643}")),
    (0xA643, Status::Valid),
    (0xA644, Status::Mapped("\u{A645}")),
    (0xA645, Status::Valid),
    (0xA646, Status::Mapped("\u{A647}")),
    (0xA647, Status::Valid),
    (0xA648, Status::Mapped("\u{A649}")),
    (0xA649, Status::Valid),
    (0xA64A, Status::Mapped("\u{A64B}")),
    (0xA64B, Status::Valid),
    (0xA64C, Status::Mapped("\u{A64D}")),
    (0xA64D, Status::Valid),
    (0xA64E, Status::Mapped("\u{A64F}")),
    (0xA64F, Status::Valid),
    (0xA650, Status::Mapped("\u{A651}")),
    (0xA651, Status::Valid),
    (0xA652, Status::Mapped("\u{A653}")),
    (0xA653, Status::Valid),
    (0xA654, Status::Mapped("\u{A655}")),
    (0xA655, Status::Valid),
    (0xA656, Status::Mapped("\u{A657}")),
    (0xA657, Status::Valid),
    (0xA658, Status::Mapped("\u{A659}")),
    (0xA659, Status::Valid),
    (0xA65A, Status::Mapped("\u{A65B}")),
    (0xA65B, Status::Valid),
    (0xA65C, Status::Mapped("\u{A65D}")),
    (0xA65D, Status::Valid),
    (0xA65E, Status::Mapped("\u{A65F}")),
    (0xA65F, Status::Valid),
    (0xA660, Status::Mapped("\u{A661}")),
    (0xA661, Status::Valid),
    (0xA662, Status::Mapped("\u{A663}")),
    (0xA663, Status::Valid),
    (0xA664, Status::Mapped("\u{A665}")),
    (0xA665, Status::Valid),
    (0xA666, Status::Mapped("\u{A667}")),
    (0xA667, Status::Valid),
    (0xA668, Status::Mapped("\u{A669}")),
    (0xA669, Status::Valid),
    (0xA66A, Status::Mapped("\u{A66B}")),
    (0xA66B, Status::Valid),
    (0xA66C, Status::Mapped("\u{A66D}")),
    (0xA66D, Status::Valid),
    (0xA680, Status::Mapped("\u{A681}")),
    (0xA681, Status::Valid),
    (0xA682, Status::Mapped("\u{A683}")),
    (0xA683, Status::Valid),
    (0xA684, Status::Mapped("\u{A685}")),
    (0xA685, Status::Valid),
    (0xA686, Status::Mapped("\u{A687}")),
    (0xA687, Status::Valid),
    (0xA688, Status::Mapped("\u{A689}")),
    (0xA689, Status::Valid),
    (0xA68A, Status::Mapped("\u{A68B}")),
    (0xA68B, Status::Valid),
    (0xA68C, Status::Mapped("\u{A68D}")),
    (0xA68D, Status::Valid),
    (0xA68E, Status::Mapped("\u{A68F}")),
    (0xA68F, Status::Valid),
    (0xA690, Status::Mapped("\u{A691}")),
    (0xA691, Status::Valid),
    (0xA692, Status::Mapped("\u{A693}")),
    (0xA693, Status::Valid),
    (0xA694, Status::Mapped("\u{A695}")),
    (0xA695, Status::Valid),
    (0xA696, Status::Mapped("\u{A697}")),
    (0xA697, Status::Valid),
    (0xA698, Status::Mapped("\u{A699}")),
    (0xA699, Status::Valid),
    (0xA69A, Status::Mapped("\u{A69B}")),
    (0xA69B, Status::Valid),
    (0xA69C, Status::Mapped("\u{44A}")),
    (0xA69D, Status::Mapped("\u{44C}")),
    (0xA69E, Status::Valid),
    (0xA6F8, Status::Disallowed),
    (0xA700, Status::Valid),
    (0xA722, Status::Mapped("\u{A723}")),
    (0xA723, Status::Valid),
    (0xA724, Status::Mapped("\u{A725}")),
    (0xA725, Status::Valid),
    (0xA726, Status::Mapped("\u{A727}")),
    (0xA727, Status::Valid),
    (0xA728, Status::Mapped("\u{A729}")),
    (0xA729, Status::Valid),
    (0xA72A, Status::Mapped("\u{A72B}")),
    (0xA72B, Status::Valid),
    (0xA72C, Status::Mapped("\u{A72D}")),
    (0xA72D, Status::Valid),
    (0xA72E, Status::Mapped("\u{A72F}")),
    (0xA72F, Status::Valid),
    (0xA732, Status::Mapped("\u{A733}")),
    (0xA733, Status::Valid),
    (0xA734, Status::Mapped("\u{A735}")),
    (0xA735, Status::Valid),
    (0xA736, Status::Mapped("\u{A737}")),
    (0xA737, Status::Valid),
    (0xA738, Status::Mapped("\u{A739}")),
    (0xA739, Status::Valid),
    (0xA73A, Status::Mapped("\u{A73B}")),
    (0xA73B, Status::Valid),
    (0xA73C, Status::Mapped("\u{A73D}")),
    (0xA73D, Status::Valid),
    (0xA73E, Status::Mapped("\u{A73F}")),
    (0xA73F, Status::Valid),
    (0xA740, Status::Mapped("\u{A741}")),
    (0xA741, Status::Valid),
    (0xA742, Status::Mapped("\u{A743}")),
    (0xA743, Status::Valid),
    (0xA744, Status::Mapped("\u{A745}")),
    (0xA745, Status::Valid),
    (0xA746, Status::Mapped("\u{A747}")),
    (0xA747, Status::Valid),
    (0xA748, Status::Mapped("\u{A749}")),
    (0xA749, Status::Valid),
    (0xA74A, Status::Mapped("\u{A74B}")),
    (0xA74B, Status::Valid),
    (0xA74C, Status::Mapped("\u{A74D}")),
    (0xA74D, Status::Valid),
    (0xA74E, Status::Mapped("\u{A74F}")),
    (0xA74F, Status::Valid),
    (0xA750, Status::Mapped("\u{A751}")),
    (0xA751, Status::Valid),
    (0xA752, Status::Mapped("\u{A753}")),
    (0xA753, Status::Valid),
    (0xA754, Status::Mapped("\u{A755}")),
    (0xA755, Status::Valid),
    (0xA756, Status::Mapped("\u{A757}")),
    (0xA757, Status::Valid),
    (0xA758, Status::Mapped("\u{A759}")),
    (0xA759, Status::Valid),
    (0xA75A, Status::Mapped("\u{A75B}")),
    (0xA75B, Status::Valid),
    (0xA75C, Status::Mapped("\u{A75D}")),
    (0xA75D, Status::Valid),
    (0xA75E, Status::Mapped("\u{A75F}")),
    (0xA75F, Status::Valid),
    (0xA760, Status::Mapped("\u{A761}")),
    (0xA761, Status::Valid),
    (0xA762, Status::Mapped("\u{A763}")),
    (0xA763, Status::Valid),
    (0xA764, Status::Mapped("\u{A765}")),
    (0xA765, Status::Valid),
    (0xA766, Status::Mapped("\u{A767}")),
    (0xA767, Status::Valid),
    (0xA768, Status::Mapped("\u{A769}")),
    (0xA769, Status::Valid),
    (0xA76A, Status::Mapped("\u{A76B}")),
    (0xA76B, Status::Valid),
    (0xA76C, Status::Mapped("\u{A76D}")),
    (0xA76D, Status::Valid),
    (0xA76E, Status::Mapped("\u{A76F}")),
    (0xA76F, Status::Valid),
    (0xA770, Status::Mapped("\u{A76F}")),
    (0xA771, Status::Valid),
    (0xA779, Status::Mapped("\u{A77A}")),
    (0xA77A, Status::Valid),
    (0xA77B, Status::Mapped("\u{A77C}")),
    (0xA77C, Status::Valid),
    (0xA77D, Status::Mapped("\u{1D79}")),
    (0xA77E, Status::Mapped("\u{A77F}")),
    (0xA77F, Status::Valid),
    (0xA780, Status::Mapped("\u{A781}")),
    (0xA781, Status::Valid),
    (0xA782, Status::Mapped("\u{A783}")),
    (0xA783, Status::Valid),
    (0xA784, Status::Mapped("\u{A785}")),
    (0xA785, Status::Valid),
    (0xA786, Status::Mapped("\u{A787}")),
    (0xA787, Status::Valid),
    (0xA78B, Status::Mapped("\u{A78C}")),
    (0xA78C, Status::Valid),
    (0xA78D, Status::Mapped("\u{265}")),
    (0xA78E, Status::Valid),
    (0xA790, Status::Mapped("\u{A791}")),
    (0xA791, Status::Valid),
    (0xA792, Status::Mapped("\u{A793}")),
    (0xA793, Status::Valid),
    (0xA796, Status::Mapped("\u{A797}")),
    (0xA797, Status::Valid),
    (0xA798, Status::Mapped("\u{A799}")),
    (0xA799, Status::Valid),
    (0xA79A, Status::Mapped("\u{A79B}")),
    (0xA79B, Status::Valid),
    (0xA79C, Status::Mapped("\u{A79D}")),
    (0xA79D, Status::Valid),
    (0xA79E, Status::Mapped("\u{A79F}")),
    (0xA79F, Status::Valid),
    (0xA7A0, Status::Mapped("\u{A7A1}")),
    (0xA7A1, Status::Valid),
    (0xA7A2, Status::Mapped("\u{A7A3}")),
    (0xA7A3, Status::Valid),
    (0xA7A4, Status::Mapped("\u{A7A5}")),
    (0xA7A5, Status::Valid),
    (0xA7A6, Status::Mapped("\u{A7A7}")),
    (0xA7A7, Status::Valid),
    (0xA7A8, Status::Mapped("\u{A7A9}")),
    (0xA7A9, Status::Valid),
    (0xA7AA, Status::Mapped("\u{266}")),
    (0xA7AB, Status::Mapped("\u{25C}")),
    (0xA7AC, Status::Mapped("\u{261}")),
    (0xA7AD, Status::Mapped("\u{26C}")),
    (0xA7AE, Status::Mapped("\u{26A}")),
    (0xA7AF, Status::Valid),
    (0xA7B0, Status::Mapped("\u{29E}")),
    (0xA7B1, Status::Mapped("\u{287}")),
    (0xA7B2, Status::Mapped("\u{29D}")),
    (0xA7B3, Status::Mapped("\u{AB53}")),
    (0xA7B4, Status::Mapped("\u{A7B5}")),
    (0xA7B5, Status::Valid),
    (0xA7B6, Status::Mapped("\u{A7B7}")),
    (0xA7B7, Status::Valid),
    (0xA7B8, Status::Mapped("\u{A7B9}")),
    (0xA7B9, Status::Valid),
    (0xA7BA, Status::Mapped("\u{A7BB}")),
    (0xA7BB, Status::Valid),
    (0xA7BC, Status::Mapped("\u{A7BD}")),
    (0xA7BD, Status::Valid),
    (0xA7BE, Status::Mapped("\u{A7BF}")),
    (0xA7BF, Status::Valid),
    (0xA7C0, Status::Mapped("\u{A7C1}")),
    (0xA7C1, Status::Valid),
    (0xA7C2, Status::Mapped("\u{A7C3}")),
    (0xA7C3, Status::Valid),
    (0xA7C4, Status::Mapped("\u{A794}")),
    (0xA7C5, Status::Mapped("\u{282}")),
    (0xA7C6, Status::Mapped("\u{1D8E}")),
    (0xA7C7, Status::Mapped("\u{A7C8}")),
    (0xA7C8, Status::Valid),
    (0xA7C9, Status::Mapped("\u{A7CA}")),
    (0xA7CA, Status::Valid),
    (0xA7CB, Status::Mapped("\u{264}")),
    (0xA7CC, Status::Mapped("\u{A7CD}")),
    (0xA7CD, Status::Valid),
    (0xA7CE, Status::Mapped("\u{A7CF}")),
    (0xA7CF, Status::Valid),
    (0xA7D0, Status::Mapped("\u{A7D1}")),
    (0xA7D1, Status::Valid),
    (0xA7D2, Status::Mapped("\u{A7D3}")),
    (0xA7D3, Status::Valid),
    (0xA7D4, Status::Mapped("\u{A7D5}")),
    (0xA7D5, Status::Valid),
    (0xA7D6, Status::Mapped("\u{A7D7}")),
    (0xA7D7, Status::Valid),
    (0xA7D8, Status::Mapped("\u{A7D9}")),
    (0xA7D9, Status::Valid),
    (0xA7DA, Status::Mapped("\u{A7DB}")),
    (0xA7DB, Status::Valid),
    (0xA7DC, Status::Mapped("\u{19B}")),
    (0xA7DD, Status::Disallowed),
    (0xA7F1, Status::Mapped("s")),
    (0xA7F2, Status::Mapped("c")),
    (0xA7F3, Status::Mapped("f")),
    (0xA7F4, Status::Mapped("q")),
    (0xA7F5, Status::Mapped("\u{A7F6}")),
    (0xA7F6, Status::Valid),
    (0xA7F8, Status::Mapped("\u{127}")),
    (0xA7F9, Status::Mapped("\u{153}")),
    (0xA7FA, Status::Valid),
    (0xA82D, Status::Disallowed),
    (0xA830, Status::Valid),
    (0xA83A, Status::Disallowed),
    (0xA840, Status::Valid),
    (0xA878, Status::Disallowed),
    (0xA880, Status::Valid),
    (0xA8C6, Status::Disallowed),
    (0xA8CE, Status::Valid),
    (0xA8DA, Status::Disallowed),
    (0xA8E0, Status::Valid),
    (0xA954, Status::Disallowed),
    (0xA95F, Status::Valid),
    (0xA97D, Status::Disallowed),
    (0xA980, Status::Valid),
    (0xA9CE, Status::Disallowed),
    (0xA9CF, Status::Valid),
    (0xA9DA, Status::Disallowed),
    (0xA9DE, Status::Valid),
    (0xA9FF, Status::Disallowed),
    (0xAA00, Status::Valid),
    (0xAA37, Status::Disallowed),
    (0xAA40, Status::Valid),
    (0xAA4E, Status::Disallowed),
    (0xAA50, Status::Valid),
    (0xAA5A, Status::Disallowed),
    (0xAA5C, Status::Valid),
    (0xAAC3, Status::Disallowed),
    (0xAADB, Status::Valid),
    (0xAAF7, Status::Disallowed),
    (0xAB01, Status::Valid),
    (0xAB07, Status::Disallowed),
    (0xAB09, Status::Valid),
    (0xAB0F, Status::Disallowed),
    (0xAB11, Status::Valid),
    (0xAB17, Status::Disallowed),
    (0xAB20, Status::Valid),
    (0xAB27, Status::Disallowed),
    (0xAB28, Status::Valid),
    (0xAB2F, Status::Disallowed),
    (0xAB30, Status::Valid),
    (0xAB5C, Status::Mapped("\u{A727}")),
    (0xAB5D, Status::Mapped("\u{AB37}")),
    (0xAB5E, Status::Mapped("\u{26B}")),
    (0xAB5F, Status::Mapped("\u{AB52}")),
    (0xAB60, Status::Valid),
    (0xAB69, Status::Mapped("\u{28D}")),
    (0xAB6A, Status::Valid),
    (0xAB6C, Status::Disallowed),
    (0xAB70, Status::Mapped("\u{13A0}")),
    (0xAB71, Status::Mapped("\u{13A1}")),
    (0xAB72, Status::Mapped("\u{13A2}")),
    (0xAB73, Status::Mapped("\u{13A3}")),
    (0xAB74, Status::Mapped("\u{13A4}")),
    (0xAB75, Status::Mapped("\u{13A5}")),
    (0xAB76, Status::Mapped("\u{13A6}")),
    (0xAB77, Status::Mapped("\u{13A7}")),
    (0xAB78, Status::Mapped("\u{13A8}")),
    (0xAB79, Status::Mapped("\u{13A9}")),
    (0xAB7A, Status::Mapped("\u{13AA}")),
    (0xAB7B, Status::Mapped("\u{13AB}")),
    (0xAB7C, Status::Mapped("\u{13AC}")),
    (0xAB7D, Status::Mapped("\u{13AD}")),
    (0xAB7E, Status::Mapped("\u{13AE}")),
    (0xAB7F, Status::Mapped("\u{13AF}")),
    (0xAB80, Status::Mapped("\u{13B0}")),
    (0xAB81, Status::Mapped("\u{13B1}")),
    (0xAB82, Status::Mapped("\u{13B2}")),
    (0xAB83, Status::Mapped("\u{13B3}")),
    (0xAB84, Status::Mapped("\u{13B4}")),
    (0xAB85, Status::Mapped("\u{13B5}")),
    (0xAB86, Status::Mapped("\u{13B6}")),
    (0xAB87, Status::Mapped("\u{13B7}")),
    (0xAB88, Status::Mapped("\u{13B8}")),
    (0xAB89, Status::Mapped("\u{13B9}")),
    (0xAB8A, Status::Mapped("\u{13BA}")),
    (0xAB8B, Status::Mapped("\u{13BB}")),
    (0xAB8C, Status::Mapped("\u{13BC}")),
    (0xAB8D, Status::Mapped("\u{13BD}")),
    (0xAB8E, Status::Mapped("\u{13BE}")),
    (0xAB8F, Status::Mapped("\u{13BF}")),
    (0xAB90, Status::Mapped("\u{13C0}")),
    (0xAB91, Status::Mapped("\u{13C1}")),
    (0xAB92, Status::Mapped("\u{13C2}")),
    (0xAB93, Status::Mapped("\u{13C3}")),
    (0xAB94, Status::Mapped("\u{13C4}")),
    (0xAB95, Status::Mapped("\u{13C5}")),
    (0xAB96, Status::Mapped("\u{13C6}")),
    (0xAB97, Status::Mapped("\u{13C7}")),
    (0xAB98, Status::Mapped("\u{13C8}")),
    (0xAB99, Status::Mapped("\u{13C9}")),
    (0xAB9A, Status::Mapped("\u{13CA}")),
    (0xAB9B, Status::Mapped("\u{13CB}")),
    (0xAB9C, Status::Mapped("\u{13CC}")),
    (0xAB9D, Status::Mapped("\u{13CD}")),
    (0xAB9E, Status::Mapped("\u{13CE}")),
    (0xAB9F, Status::Mapped("\u{13CF}")),
    (0xABA0, Status::Mapped("\u{13D0}")),
    (0xABA1, Status::Mapped("\u{13D1}")),
    (0xABA2, Status::Mapped("\u{13D2}")),
    (0xABA3, Status::Mapped("\u{13D3}")),
    (0xABA4, Status::Mapped("\u{13D4}")),
    (0xABA5, Status::Mapped("\u{13D5}")),
    (0xABA6, Status::Mapped("\u{13D6}")),
    (0xABA7, Status::Mapped("\u{13D7}")),
    (0xABA8, Status::Mapped("\u{13D8}")),
    (0xABA9, Status::Mapped("\u{13D9}")),
    (0xABAA, Status::Mapped("\u{13DA}")),
    (0xABAB, Status::Mapped("\u{13DB}")),
    (0xABAC, Status::Mapped("\u{13DC}")),
    (0xABAD, Status::Mapped("\u{13DD}")),
    (0xABAE, Status::Mapped("\u{13DE}")),
    (0xABAF, Status::Mapped("\u{13DF}")),
    (0xABB0, Status::Mapped("\u{13E0}")),
    (0xABB1, Status::Mapped("\u{13E1}")),
    (0xABB2, Status::Mapped("\u{13E2}")),
    (0xABB3, Status::Mapped("\u{13E3}")),
    (0xABB4, Status::Mapped("\u{13E4}")),
    (0xABB5, Status::Mapped("\u{13E5}")),
    (0xABB6, Status::Mapped("\u{13E6}")),
    (0xABB7, Status::Mapped("\u{13E7}")),
    (0xABB8, Status::Mapped("\u{13E8}")),
    (0xABB9, Status::Mapped("\u{13E9}")),
    (0xABBA, Status::Mapped("\u{13EA}")),
    (0xABBB, Status::Mapped("\u{13EB}")),
    (0xABBC, Status::Mapped("\u{13EC}")),
    (0xABBD, Status::Mapped("\u{13ED}")),
    (0xABBE, Status::Mapped("\u{13EE}")),
    (0xABBF, Status::Mapped("\u{13EF}")),
    (0xABC0, Status::Valid),
    (0xABEE, Status::Disallowed),
    (0xABF0, Status::Valid),
    (0xABFA, Status::Disallowed),
    (0xAC00, Status::Valid),
    (0xD7A4, Status::Disallowed),
    (0xD7B0, Status::Valid),
    (0xD7C7, Status::Disallowed),
    (0xD7CB, Status::Valid),
    (0xD7FC, Status::Disallowed),
    (0xF900, Status::Mapped("\u{8C48}")),
    (0xF901, Status::Mapped("\u{66F4}")),
    (0xF902, Status::Mapped("\u{8ECA}")),
    (0xF903, Status::Mapped("\u{8CC8}")),
    (0xF904, Status::Mapped("\u{6ED1}")),
    (0xF905, Status::Mapped("\u{4E32}")),
    (0xF906, Status::Mapped("\u{53E5}")),
    (0xF907, Status::Mapped("\u{9F9C}")),
    (0xF909, Status::Mapped("\u{5951}")),
    (0xF90A, Status::Mapped("\u{91D1}")),
    (0xF90B, Status::Mapped("\u{5587}")),
    (0xF90C, Status::Mapped("\u{5948}")),
    (0xF90D, Status::Mapped("\u{61F6}")),
    (0xF90E, Status::Mapped("\u{7669}")),
    (0xF90F, Status::Mapped("\u{7F85}")),
    (0xF910, Status::Mapped("\u{863F}")),
    (0xF911, Status::Mapped("\u{87BA}")),
    (0xF912, Status::Mapped("\u{88F8}")),
    (0xF913, Status::Mapped("\u{908F}")),
    (0xF914, Status::Mapped("\u{6A02}")),
    (0xF915, Status::Mapped("\u{6D1B}")),
    (0xF916, Status::Mapped("\u{70D9}")),
    (0xF917, Status::Mapped("\u{73DE}")),
    (0xF918, Status::Mapped("\u{843D}")),
    (0xF919, Status::Mapped("\u{916A}")),
    (0xF91A, Status::Mapped("\u{99F1}")),
    (0xF91B, Status::Mapped("\u{4E82}")),
    (0xF91C, Status::Mapped("\u{5375}")),
    (0xF91D, Status::Mapped("\u{6B04}")),
    (0xF91E, Status::Mapped("\u{721B}")),
    (0xF91F, Status::Mapped("\u{862D}")),
    (0xF920, Status::Mapped("\u{9E1E}")),
    (0xF921, Status::Mapped("\u{5D50}")),
    (0xF922, Status::Mapped("\u{6FEB}")),
    (0xF923, Status::Mapped("\u{85CD}")),
    (0xF924, Status::Mapped("\u{8964}")),
    (0xF925, Status::Mapped("\u{62C9}")),
    (0xF926, Status::Mapped("\u{81D8}")),
    (0xF927, Status::Mapped("\u{881F}")),
    (0xF928, Status::Mapped("\u{5ECA}")),
    (0xF929, Status::Mapped("\u{6717}")),
    (0xF92A, Status::Mapped("\u{6D6A}")),
    (0xF92B, Status::Mapped("\u{72FC}")),
    (0xF92C, Status::Mapped("\u{90CE}")),
    (0xF92D, Status::Mapped("\u{4F86}")),
    (0xF92E, Status::Mapped("\u{51B7}")),
    (0xF92F, Status::Mapped("\u{52DE}")),
    (0xF930, Status::Mapped("\u{64C4}")),
    (0xF931, Status::Mapped("\u{6AD3}")),
    (0xF932, Status::Mapped("\u{7210}")),
    (0xF933, Status::Mapped("\u{76E7}")),
    (0xF934, Status::Mapped("\u{8001}")),
    (0xF935, Status::Mapped("\u{8606}")),
    (0xF936, Status::Mapped("\u{865C}")),
    (0xF937, Status::Mapped("\u{8DEF}")),
    (0xF938, Status::Mapped("\u{9732}")),
    (0xF939, Status::Mapped("\u{9B6F}")),
    (0xF93A, Status::Mapped("\u{9DFA}")),
    (0xF93B, Status::Mapped("\u{788C}")),
    (0xF93C, Status::Mapped("\u{797F}")),
    (0xF93D, Status::Mapped("\u{7DA0}")),
    (0xF93E, Status::Mapped("\u{83C9}")),
    (0xF93F, Status::Mapped("\u{9304}")),
    (0xF940, Status::Mapped("\u{9E7F}")),
    (0xF941, Status::Mapped("\u{8AD6}")),
    (0xF942, Status::Mapped("\u{58DF}")),
    (0xF943, Status::Mapped("\u{5F04}")),
    (0xF944, Status::Mapped("\u{7C60}")),
    (0xF945, Status::Mapped("\u{807E}")),
    (0xF946, Status::Mapped("\u{7262}")),
    (0xF947, Status::Mapped("\u{78CA}")),
    (0xF948, Status::Mapped("\u{8CC2}")),
    (0xF949, Status::Mapped("\u{96F7}")),
    (0xF94A, Status::Mapped("\u{58D8}")),
    (0xF94B, Status::Mapped("\u{5C62}")),
    (0xF94C, Status::Mapped("\u{6A13}")),
    (0xF94D, Status::Mapped("\u{6DDA}")),
    (0xF94E, Status::Mapped("\u{6F0F}")),
    (0xF94F, Status::Mapped("\u{7D2F}")),
    (0xF950, Status::Mapped("\u{7E37}")),
    (0xF951, Status::Mapped("\u{964B}")),
    (0xF952, Status::Mapped("\u{52D2}")),
    (0xF953, Status::Mapped("\u{808B}")),
    (0xF954, Status::Mapped("\u{51DC}")),
    (0xF955, Status::Mapped("\u{51CC}")),
    (0xF956, Status::Mapped("\u{7A1C}")),
    (0xF957, Status::Mapped("\u{7DBE}")),
    (0xF958, Status::Mapped("\u{83F1}")),
    (0xF959, Status::Mapped("\u{9675}")),
    (0xF95A, Status::Mapped("\u{8B80}")),
    (0xF95B, Status::Mapped("\u{62CF}")),
    (0xF95C, Status::Mapped("\u{6A02}")),
    (0xF95D, Status::Mapped("\u{8AFE}")),
    (0xF95E, Status::Mapped("\u{4E39}")),
    (0xF95F, Status::Mapped("\u{5BE7}")),
    (0xF960, Status::Mapped("\u{6012}")),
    (0xF961, Status::Mapped("\u{7387}")),
    (0xF962, Status::Mapped("\u{7570}")),
    (0xF963, Status::Mapped("\u{5317}")),
    (0xF964, Status::Mapped("\u{78FB}")),
    (0xF965, Status::Mapped("\u{4FBF}")),
    (0xF966, Status::Mapped("\u{5FA9}")),
    (0xF967, Status::Mapped("\u{4E0D}")),
    (0xF968, Status::Mapped("\u{6CCC}")),
    (0xF969, Status::Mapped("\u{6578}")),
    (0xF96A, Status::Mapped("\u{7D22}")),
    (0xF96B, Status::Mapped("\u{53C3}")),
    (0xF96C, Status::Mapped("\u{585E}")),
    (0xF96D, Status::Mapped("\u{7701}")),
    (0xF96E, Status::Mapped("\u{8449}")),
    (0xF96F, Status::Mapped("\u{8AAA}")),
    (0xF970, Status::Mapped("\u{6BBA}")),
    (0xF971, Status::Mapped("\u{8FB0}")),
    (0xF972, Status::Mapped("\u{6C88}")),
    (0xF973, Status::Mapped("\u{62FE}")),
    (0xF974, Status::Mapped("\u{82E5}")),
    (0xF975, Status::Mapped("\u{63A0}")),
    (0xF976, Status::Mapped("\u{7565}")),
    (0xF977, Status::Mapped("\u{4EAE}")),
    (0xF978, Status::Mapped("\u{5169}")),
    (0xF979, Status::Mapped("\u{51C9}")),
    (0xF97A, Status::Mapped("\u{6881}")),
    (0xF97B, Status::Mapped("\u{7CE7}")),
    (0xF97C, Status::Mapped("\u{826F}")),
    (0xF97D, Status::Mapped("\u{8AD2}")),
    (0xF97E, Status::Mapped("\u{91CF}")),
    (0xF97F, Status::Mapped("\u{52F5}")),
    (0xF980, Status::Mapped("\u{5442}")),
    (0xF981, Status::Mapped("\u{5973}")),
    (0xF982, Status::Mapped("\u{5EEC}")),
    (0xF983, Status::Mapped("\u{65C5}")),
    (0xF984, Status::Mapped("\u{6FFE}")),
    (0xF985, Status::Mapped("\u{792A}")),
    (0xF986, Status::Mapped("\u{95AD}")),
    (0xF987, Status::Mapped("\u{9A6A}")),
    (0xF988, Status::Mapped("\u{9E97}")),
    (0xF989, Status::Mapped("\u{9ECE}")),
    (0xF98A, Status::Mapped("\u{529B}")),
    (0xF98B, Status::Mapped("\u{66C6}")),
    (0xF98C, Status::Mapped("\u{6B77}")),
    (0xF98D, Status::Mapped("\u{8F62}")),
    (0xF98E, Status::Mapped("\u{5E74}")),
    (0xF98F, Status::Mapped("\u{6190}")),
    (0xF990, Status::Mapped("\u{6200}")),
    (0xF991, Status::Mapped("\u{649A}")),
    (0xF992, Status::Mapped("\u{6F23}")),
    (0xF993, Status::Mapped("\u{7149}")),
    (0xF994, Status::Mapped("\u{7489}")),
    (0xF995, Status::Mapped("\u{79CA}")),
    (0xF996, Status::Mapped("\u{7DF4}")),
    (0xF997, Status::Mapped("\u{806F}")),
    (0xF998, Status::Mapped("\u{8F26}")),
    (0xF999, Status::Mapped("\u{84EE}")),
    (0xF99A, Status::Mapped("\u{9023}")),
    (0xF99B, Status::Mapped("\u{934A}")),
    (0xF99C, Status::Mapped("\u{5217}")),
    (0xF99D, Status::Mapped("\u{52A3}")),
    (0xF99E, Status::Mapped("\u{54BD}")),
    (0xF99F, Status::Mapped("\u{70C8}")),
    (0xF9A0, Status::Mapped("\u{88C2}")),
    (0xF9A1, Status::Mapped("\u{8AAA}")),
    (0xF9A2, Status::Mapped("\u{5EC9}")),
    (0xF9A3, Status::Mapped("\u{5FF5}")),
    (0xF9A4, Status::Mapped("\u{637B}")),
    (0xF9A5, Status::Mapped("\u{6BAE}")),
    (0xF9A6, Status::Mapped("\u{7C3E}")),
    (0xF9A7, Status::Mapped("\u{7375}")),
    (0xF9A8, Status::Mapped("\u{4EE4}")),
    (0xF9A9, Status::Mapped("\u{56F9}")),
    (0xF9AA, Status::Mapped("\u{5BE7}")),
    (0xF9AB, Status::Mapped("\u{5DBA}")),
    (0xF9AC, Status::Mapped("\u{601C}")),
    (0xF9AD, Status::Mapped("\u{73B2}")),
    (0xF9AE, Status::Mapped("\u{7469}")),
    (0xF9AF, Status::Mapped("\u{7F9A}")),
    (0xF9B0, Status::Mapped("\u{8046}")),
    (0xF9B1, Status::Mapped("\u{9234}")),
    (0xF9B2, Status::Mapped("\u{96F6}")),
    (0xF9B3, Status::Mapped("\u{9748}")),
    (0xF9B4, Status::Mapped("\u{9818}")),
    (0xF9B5, Status::Mapped("\u{4F8B}")),
    (0xF9B6, Status::Mapped("\u{79AE}")),
    (0xF9B7, Status::Mapped("\u{91B4}")),
    (0xF9B8, Status::Mapped("\u{96B8}")),
    (0xF9B9, Status::Mapped("\u{60E1}")),
    (0xF9BA, Status::Mapped("\u{4E86}")),
    (0xF9BB, Status::Mapped("\u{50DA}")),
    (0xF9BC, Status::Mapped("\u{5BEE}")),
    (0xF9BD, Status::Mapped("\u{5C3F}")),
    (0xF9BE, Status::Mapped("\u{6599}")),
    (0xF9BF, Status::Mapped("\u{6A02}")),
    (0xF9C0, Status::Mapped("\u{71CE}")),
    (0xF9C1, Status::Mapped("\u{7642}")),
    (0xF9C2, Status::Mapped("\u{84FC}")),
    (0xF9C3, Status::Mapped("\u{907C}")),
    (0xF9C4, Status::Mapped("\u{9F8D}")),
    (0xF9C5, Status::Mapped("\u{6688}")),
    (0xF9C6, Status::Mapped("\u{962E}")),
    (0xF9C7, Status::Mapped("\u{5289}")),
    (0xF9C8, Status::Mapped("\u{677B}")),
    (0xF9C9, Status::Mapped("\u{67F3}")),
    (0xF9CA, Status::Mapped("\u{6D41}")),
    (0xF9CB, Status::Mapped("\u{6E9C}")),
    (0xF9CC, Status::Mapped("\u{7409}")),
    (0xF9CD, Status::Mapped("\u{7559}")),
    (0xF9CE, Status::Mapped("\u{786B}")),
    (0xF9CF, Status::Mapped("\u{7D10}")),
    (0xF9D0, Status::Mapped("\u{985E}")),
    (0xF9D1, Status::Mapped("\u{516D}")),
    (0xF9D2, Status::Mapped("\u{622E}")),
    (0xF9D3, Status::Mapped("\u{9678}")),
    (0xF9D4, Status::Mapped("\u{502B}")),
    (0xF9D5, Status::Mapped("\u{5D19}")),
    (0xF9D6, Status::Mapped("\u{6DEA}")),
    (0xF9D7, Status::Mapped("\u{8F2A}")),
    (0xF9D8, Status::Mapped("\u{5F8B}")),
    (0xF9D9, Status::Mapped("\u{6144}")),
    (0xF9DA, Status::Mapped("\u{6817}")),
    (0xF9DB, Status::Mapped("\u{7387}")),
    (0xF9DC, Status::Mapped("\u{9686}")),
    (0xF9DD, Status::Mapped("\u{5229}")),
    (0xF9DE, Status::Mapped("\u{540F}")),
    (0xF9DF, Status::Mapped("\u{5C65}")),
    (0xF9E0, Status::Mapped("\u{6613}")),
    (0xF9E1, Status::Mapped("\u{674E}")),
    (0xF9E2, Status::Mapped("\u{68A8}")),
    (0xF9E3, Status::Mapped("\u{6CE5}")),
    (0xF9E4, Status::Mapped("\u{7406}")),
    (0xF9E5, Status::Mapped("\u{75E2}")),
    (0xF9E6, Status::Mapped("\u{7F79}")),
    (0xF9E7, Status::Mapped("\u{88CF}")),
    (0xF9E8, Status::Mapped("\u{88E1}")),
    (0xF9E9, Status::Mapped("\u{91CC}")),
    (0xF9EA, Status::Mapped("\u{96E2}")),
    (0xF9EB, Status::Mapped("\u{533F}")),
    (0xF9EC, Status::Mapped("\u{6EBA}")),
    (0xF9ED, Status::Mapped("\u{541D}")),
    (0xF9EE, Status::Mapped("\u{71D0}")),
    (0xF9EF, Status::Mapped("\u{7498}")),
    (0xF9F0, Status::Mapped("\u{85FA}")),
    (0xF9F1, Status::Mapped("\u{96A3}")),
    (0xF9F2, Status::Mapped("\u{9C57}")),
    (0xF9F3, Status::Mapped("\u{9E9F}")),
    (0xF9F4, Status::Mapped("\u{6797}")),
    (0xF9F5, Status::Mapped("\u{6DCB}")),
    (0xF9F6, Status::Mapped("\u{81E8}")),
    (0xF9F7, Status::Mapped("\u{7ACB}")),
    (0xF9F8, Status::Mapped("\u{7B20}")),
    (0xF9F9, Status::Mapped("\u{7C92}")),
    (0xF9FA, Status::Mapped("\u{72C0}")),
    (0xF9FB, Status::Mapped("\u{7099}")),
    (0xF9FC, Status::Mapped("\u{8B58}")),
    (0xF9FD, Status::Mapped("\u{4EC0}")),
    (0xF9FE, Status::Mapped("\u{8336}")),
    (0xF9FF, Status::Mapped("\u{523A}")),
    (0xFA00, Status::Mapped("\u{5207}")),
    (0xFA01, Status::Mapped("\u{5EA6}")),
    (0xFA02, Status::Mapped("\u{62D3}")),
    (0xFA03, Status::Mapped("\u{7CD6}")),
    (0xFA04, Status::Mapped("\u{5B85}")),
    (0xFA05, Status::Mapped("\u{6D1E}")),
    (0xFA06, Status::Mapped("\u{66B4}")),
    (0xFA07, Status::Mapped("\u{8F3B}")),
    (0xFA08, Status::Mapped("\u{884C}")),
    (0xFA09, Status::Mapped("\u{964D}")),
    (0xFA0A, Status::Mapped("\u{898B}")),
    (0xFA0B, Status::Mapped("\u{5ED3}")),
    (0xFA0C, Status::Mapped("\u{5140}")),
    (0xFA0D, Status::Mapped("\u{55C0}")),
    (0xFA0E, Status::Valid),
    (0xFA10, Status::Mapped("\u{585A}")),
    (0xFA11, Status::Valid),
    (0xFA12, Status::Mapped("\u{6674}")),
    (0xFA13, Status::Valid),
    (0xFA15, Status::Mapped("\u{51DE}")),
    (0xFA16, Status::Mapped("\u{732A}")),
    (0xFA17, Status::Mapped("\u{76CA}")),
    (0xFA18, Status::Mapped("\u{793C}")),
    (0xFA19, Status::Mapped("\u{795E}")),
    (0xFA1A, Status::Mapped("\u{7965}")),
    (0xFA1B, Status::Mapped("\u{798F}")),
    (0xFA1C, Status::Mapped("\u{9756}")),
    (0xFA1D, Status::Mapped("\u{7CBE}")),
    (0xFA1E, Status::Mapped("\u{7FBD}")),
    (0xFA1F, Status::Valid),
    (0xFA20, Status::Mapped("\u{8612}")),
    (0xFA21, Status::Valid),
    (0xFA22, Status::Mapped("\u{8AF8}")),
    (0xFA23, Status::Valid),
    (0xFA25, Status::Mapped("\u{9038}")),
    (0xFA26, Status::Mapped("\u{90FD}")),
    (0xFA27, Status::Valid),
    (0xFA2A, Status::Mapped("\u{98EF}")),
    (0xFA2B, Status::Mapped("\u{98FC}")),
    (0xFA2C, Status::Mapped("\u{9928}")),
    (0xFA2D, Status::Mapped("\u{9DB4}")),
    (0xFA2E, Status::Mapped("\u{90DE}")),
    (0xFA2F, Status::Mapped("\u{96B7}")),
    (0xFA30, Status::Mapped("\u{4FAE}")),
    (0xFA31, Status::Mapped("\u{50E7}")),
    (0xFA32, Status::Mapped("\u{514D}")),
    (0xFA33, Status::Mapped("\u{52C9}")),
    (0xFA34, Status::Mapped("\u{52E4}")),
    (0xFA35, Status::Mapped("\u{5351}")),
    (0xFA36, Status::Mapped("\u{559D}")),
    (0xFA37, Status::Mapped("\u{5606}")),
    (0xFA38, Status::Mapped("\u{5668}")),
    (0xFA39, Status::Mapped("\u{5840}")),
    (0xFA3A, Status::Mapped("\u{58A8}")),
    (0xFA3B, Status::Mapped("\u{5C64}")),
    (0xFA3C, Status::Mapped("\u{5C6E}")),
    (0xFA3D, Status::Mapped("\u{6094}")),
    (0xFA3E, Status::Mapped("\u{6168}")),
    (0xFA3F, Status::Mapped("\u{618E}")),
    (0xFA40, Status::Mapped("\u{61F2}")),
    (0xFA41, Status::Mapped("\u{654F}")),
    (0xFA42, Status::Mapped("\u{65E2}")),
    (0xFA43, Status::Mapped("\u{6691}")),
    (0xFA44, Status::Mapped("\u{6885}")),
    (0xFA45, Status::Mapped("\u{6D77}")),
    (0xFA46, Status::Mapped("\u{6E1A}")),
    (0xFA47, Status::Mapped("\u{6F22}")),
    (0xFA48, Status::Mapped("\u{716E}")),
    (0xFA49, Status::Mapped("\u{722B}")),
    (0xFA4A, Status::Mapped("\u{7422}")),
    (0xFA4B, Status::Mapped("\u{7891}")),
    (0xFA4C, Status::Mapped("\u{793E}")),
    (0xFA4D, Status::Mapped("\u{7949}")),
    (0xFA4E, Status::Mapped("\u{7948}")),
    (0xFA4F, Status::Mapped("\u{7950}")),
    (0xFA50, Status::Mapped("\u{7956}")),
    (0xFA51, Status::Mapped("\u{795D}")),
    (0xFA52, Status::Mapped("\u{798D}")),
    (0xFA53, Status::Mapped("\u{798E}")),
    (0xFA54, Status::Mapped("\u{7A40}")),
    (0xFA55, Status::Mapped("\u{7A81}")),
    (0xFA56, Status::Mapped("\u{7BC0}")),
    (0xFA57, Status::Mapped("\u{7DF4}")),
    (0xFA58, Status::Mapped("\u{7E09}")),
    (0xFA59, Status::Mapped("\u{7E41}")),
    (0xFA5A, Status::Mapped("\u{7F72}")),
    (0xFA5B, Status::Mapped("\u{8005}")),
    (0xFA5C, Status::Mapped("\u{81ED}")),
    (0xFA5D, Status::Mapped("\u{8279}")),
    (0xFA5F, Status::Mapped("\u{8457}")),
    (0xFA60, Status::Mapped("\u{8910}")),
    (0xFA61, Status::Mapped("\u{8996}")),
    (0xFA62, Status::Mapped("\u{8B01}")),
    (0xFA63, Status::Mapped("\u{8B39}")),
    (0xFA64, Status::Mapped("\u{8CD3}")),
    (0xFA65, Status::Mapped("\u{8D08}")),
    (0xFA66, Status::Mapped("\u{8FB6}")),
    (0xFA67, Status::Mapped("\u{9038}")),
    (0xFA68, Status::Mapped("\u{96E3}")),
    (0xFA69, Status::Mapped("\u{97FF}")),
    (0xFA6A, Status::Mapped("\u{983B}")),
    (0xFA6B, Status::Mapped("\u{6075}")),
    (0xFA6C, Status::Mapped("\u{242EE}")),
    (0xFA6D, Status::Mapped("\u{8218}")),
    (0xFA6E, Status::Disallowed),
    (0xFA70, Status::Mapped("\u{4E26}")),
    (0xFA71, Status::Mapped("\u{51B5}")),
    (0xFA72, Status::Mapped("\u{5168}")),
    (0xFA73, Status::Mapped("\u{4F80}")),
    (0xFA74, Status::Mapped("\u{5145}")),
    (0xFA75, Status::Mapped("\u{5180}")),
    (0xFA76, Status::Mapped("\u{52C7}")),
    (0xFA77, Status::Mapped("\u{52FA}")),
    (0xFA78, Status::Mapped("\u{559D}")),
    (0xFA79, Status::Mapped("\u{5555}")),
    (0xFA7A, Status::Mapped("\u{5599}")),
    (0xFA7B, Status::Mapped("\u{55E2}")),
    (0xFA7C, Status::Mapped("\u{585A}")),
    (0xFA7D, Status::Mapped("\u{58B3}")),
    (0xFA7E, Status::Mapped("\u{5944}")),
    (0xFA7F, Status::Mapped("\u{5954}")),
    (0xFA80, Status::Mapped("\u{5A62}")),
    (0xFA81, Status::Mapped("\u{5B28}")),
    (0xFA82, Status::Mapped("\u{5ED2}")),
    (0xFA83, Status::Mapped("\u{5ED9}")),
    (0xFA84, Status::Mapped("\u{5F69}")),
    (0xFA85, Status::Mapped("\u{5FAD}")),
    (0xFA86, Status::Mapped("\u{60D8}")),
    (0xFA87, Status::Mapped("\u{614E}")),
    (0xFA88, Status::Mapped("\u{6108}")),
    (0xFA89, Status::Mapped("\u{618E}")),
    (0xFA8A, Status::Mapped("\u{6160}")),
    (0xFA8B, Status::Mapped("\u{61F2}")),
    (0xFA8C, Status::Mapped("\u{6234}")),
    (0xFA8D, Status::Mapped("\u{63C4}")),
    (0xFA8E, Status::Mapped("\u{641C}")),
    (0xFA8F, Status::Mapped("\u{6452}")),
    (0xFA90, Status::Mapped("\u{6556}")),
    (0xFA91, Status::Mapped("\u{6674}")),
    (0xFA92, Status::Mapped("\u{6717}")),
    (0xFA93, Status::Mapped("\u{671B}")),
    (0xFA94, Status::Mapped("\u{6756}")),
    (0xFA95, Status::Mapped("\u{6B79}")),
    (0xFA96, Status::Mapped("\u{6BBA}")),
    (0xFA97, Status::Mapped("\u{6D41}")),
    (0xFA98, Status::Mapped("\u{6EDB}")),
    (0xFA99, Status::Mapped("\u{6ECB}")),
    (0xFA9A, Status::Mapped("\u{6F22}")),
    (0xFA9B, Status::Mapped("\u{701E}")),
    (0xFA9C, Status::Mapped("\u{716E}")),
    (0xFA9D, Status::Mapped("\u{77A7}")),
    (0xFA9E, Status::Mapped("\u{7235}")),
    (0xFA9F, Status::Mapped("\u{72AF}")),
    (0xFAA0, Status::Mapped("\u{732A}")),
    (0xFAA1, Status::Mapped("\u{7471}")),
    (0xFAA2, Status::Mapped("\u{7506}")),
    (0xFAA3, Status::Mapped("\u{753B}")),
    (0xFAA4, Status::Mapped("\u{761D}")),
    (0xFAA5, Status::Mapped("\u{761F}")),
    (0xFAA6, Status::Mapped("\u{76CA}")),
    (0xFAA7, Status::Mapped("\u{76DB}")),
    (0xFAA8, Status::Mapped("\u{76F4}")),
    (0xFAA9, Status::Mapped("\u{774A}")),
    (0xFAAA, Status::Mapped("\u{7740}")),
    (0xFAAB, Status::Mapped("\u{78CC}")),
    (0xFAAC, Status::Mapped("\u{7AB1}")),
    (0xFAAD, Status::Mapped("\u{7BC0}")),
    (0xFAAE, Status::Mapped("\u{7C7B}")),
    (0xFAAF, Status::Mapped("\u{7D5B}")),
    (0xFAB0, Status::Mapped("\u{7DF4}")),
    (0xFAB1, Status::Mapped("\u{7F3E}")),
    (0xFAB2, Status::Mapped("\u{8005}")),
    (0xFAB3, Status::Mapped("\u{8352}")),
    (0xFAB4, Status::Mapped("\u{83EF}")),
    (0xFAB5, Status::Mapped("\u{8779}")),
    (0xFAB6, Status::Mapped("\u{8941}")),
    (0xFAB7, Status::Mapped("\u{8986}")),
    (0xFAB8, Status::Mapped("\u{8996}")),
    (0xFAB9, Status::Mapped("\u{8ABF}")),
    (0xFABA, Status::Mapped("\u{8AF8}")),
    (0xFABB, Status::Mapped("\u{8ACB}")),
    (0xFABC, Status::Mapped("\u{8B01}")),
    (0xFABD, Status::Mapped("\u{8AFE}")),
    (0xFABE, Status::Mapped("\u{8AED}")),
    (0xFABF, Status::Mapped("\u{8B39}")),
    (0xFAC0, Status::Mapped("\u{8B8A}")),
    (0xFAC1, Status::Mapped("\u{8D08}")),
    (0xFAC2, Status::Mapped("\u{8F38}")),
    (0xFAC3, Status::Mapped("\u{9072}")),
    (0xFAC4, Status::Mapped("\u{9199}")),
    (0xFAC5, Status::Mapped("\u{9276}")),
    (0xFAC6, Status::Mapped("\u{967C}")),
    (0xFAC7, Status::Mapped("\u{96E3}")),
    (0xFAC8, Status::Mapped("\u{9756}")),
    (0xFAC9, Status::Mapped("\u{97DB}")),
    (0xFACA, Status::Mapped("\u{97FF}")),
    (0xFACB, Status::Mapped("\u{980B}")),
    (0xFACC, Status::Mapped("\u{983B}")),
    (0xFACD, Status::Mapped("\u{9B12}")),
    (0xFACE, Status::Mapped("\u{9F9C}")),
    (0xFACF, Status::Mapped("\u{2284A}")),
    (0xFAD0, Status::Mapped("\u{22844}")),
    (0xFAD1, Status::Mapped("\u{233D5}")),
    (0xFAD2, Status::Mapped("\u{3B9D}")),
    (0xFAD3, Status::Mapped("\u{4018}")),
    (0xFAD4, Status::Mapped("\u{4039}")),
    (0xFAD5, Status::Mapped("\u{25249}")),
    (0xFAD6, Status::Mapped("\u{25CD0}")),
    (0xFAD7, Status::Mapped("\u{27ED3}")),
    (0xFAD8, Status::Mapped("\u{9F43}")),
    (0xFAD9, Status::Mapped("\u{9F8E}")),
    (0xFADA, Status::Disallowed),
    (0xFB00, Status::Mapped("ff")),
    (0xFB01, Status::Mapped("fi")),
    (0xFB02, Status::Mapped("fl")),
    (0xFB03, Status::Mapped("ffi")),
    (0xFB04, Status::Mapped("ffl")),
    (0xFB05, Status::Mapped("st")),
    (0xFB07, Status::Disallowed),
    (0xFB13, Status::Mapped("\u{574}\u{576}")),
    (0xFB14, Status::Mapped("\u{574}\u{565}")),
    (0xFB15, Status::Mapped("\u{574}\u{56B}")),
    (0xFB16, Status::Mapped("\u{57E}\u{576}")),
    (0xFB17, Status::Mapped("\u{574}\u{56D}")),
    (0xFB18, Status::Disallowed),
    (0xFB1D, Status::Mapped("\u{5D9}\u{5B4}")),
    (0xFB1E, Status::Valid),
    (0xFB1F, Status::Mapped("\u{5F2}\u{5B7}")),
    (0xFB20, Status::Mapped("\u{5E2}")),
    (0xFB21, Status::Mapped("\u{5D0}")),
    (0xFB22, Status::Mapped("\u{5D3}")),
    (0xFB23, Status::Mapped("\u{5D4}")),
    (0xFB24, Status::Mapped("\u{5DB}")),
    (0xFB25, Status::Mapped("\u{5DC}")),
    (0xFB26, Status::Mapped("\u{5DD}")),
    (0xFB27, Status::Mapped("\u{5E8}")),
    (0xFB28, Status::Mapped("\u{5EA}")),
    (0xFB29, Status::Mapped("+")),
    (0xFB2A, Status::Mapped("\u{5E9}\u{5C1}")),
    (0xFB2B, Status::Mapped("\u{5E9}\u{5C2}")),
    (0xFB2C, Status::Mapped("\u{5E9}\u{5BC}\u{5C1}")),
    (0xFB2D, Status::Mapped("\u{5E9}\u{5BC}\u{5C2}")),
    (0xFB2E, Status::Mapped("\u{5D0}\u{5B7}")),
    (0xFB2F, Status::Mapped("\u{5D0}\u{5B8}")),
    (0xFB30, Status::Mapped("\u{5D0}\u{5BC}")),
    (0xFB31, Status::Mapped("\u{5D1}\u{5BC}")),
    (0xFB32, Status::Mapped("\u{5D2}\u{5BC}")),
    (0xFB33, Status::Mapped("\u{5D3}\u{5BC}")),
    (0xFB34, Status::Mapped("\u{5D4}\u{5BC}")),
    (0xFB35, Status::Mapped("\u{5D5}\u{5BC}")),
    (0xFB36, Status::Mapped("\u{5D6}\u{5BC}")),
    (0xFB37, Status::Disallowed),
    (0xFB38, Status::Mapped("\u{5D8}\u{5BC}")),
    (0xFB39, Status::Mapped("\u{5D9}\u{5BC}")),
    (0xFB3A, Status::Mapped("\u{5DA}\u{5BC}")),
    (0xFB3B, Status::Mapped("\u{5DB}\u{5BC}")),
    (0xFB3C, Status::Mapped("\u{5DC}\u{5BC}")),
    (0xFB3D, Status::Disallowed),
    (0xFB3E, Status::Mapped("\u{5DE}\u{5BC}")),
    (0xFB3F, Status::Disallowed),
    (0xFB40, Status::Mapped("\u{5E0}\u{5BC}")),
    (0xFB41, Status::Mapped("\u{5E1}\u{5BC}")),
    (0xFB42, Status::Disallowed),
    (0xFB43, Status::Mapped("\u{5E3}\u{5BC}")),
    (0xFB44, Status::Mapped("\u{5E4}\u{5BC}")),
    (0xFB45, Status::Disallowed),
    (0xFB46, Status::Mapped("\u{5E6}\u{5BC}")),
    (0xFB47, Status::Mapped("\u{5E7}\u{5BC}")),
    (0xFB48, Status::Mapped("\u{5E8}\u{5BC}")),
    (0xFB49, Status::Mapped("\u{5E9}\u{5BC}")),
    (0xFB4A, Status::Mapped("\u{5EA}\u{5BC}")),
    (0xFB4B, Status::Mapped("\u{5D5}\u{5B9}")),
    (0xFB4C, Status::Mapped("\u{5D1}\u{5BF}")),
    (0xFB4D, Status::Mapped("\u{5DB}\u{5BF}")),
    (0xFB4E, Status::Mapped("\u{5E4}\u{5BF}")),
    (0xFB4F, Status::Mapped("\u{5D0}\u{5DC}")),
    (0xFB50, Status::Mapped("\u{671}")),
    (0xFB52, Status::Mapped("\u{67B}")),
    (0xFB56, Status::Mapped("\u{67E}")),
    (0xFB5A, Status::Mapped("\u{680}")),
    (0xFB5E, Status::Mapped("\u{67A}")),
    (0xFB62, Status::Mapped("\u{67F}")),
    (0xFB66, Status::Mapped("\u{679}")),
    (0xFB6A, Status::Mapped("\u{6A4}")),
    (0xFB6E, Status::Mapped("\u{6A6}")),
    (0xFB72, Status::Mapped("\u{684}")),
    (0xFB76, Status::Mapped("\u{683}")),
    (0xFB7A, Status::Mapped("\u{686}")),
    (0xFB7E, Status::Mapped("\u{687}")),
    (0xFB82, Status::Mapped("\u{68D}")),
    (0xFB84, Status::Mapped("\u{68C}")),
    (0xFB86, Status::Mapped("\u{68E}")),
    (0xFB88, Status::Mapped("\u{688}")),
    (0xFB8A, Status::Mapped("\u{698}")),
    (0xFB8C, Status::Mapped("\u{691}")),
    (0xFB8E, Status::Mapped("\u{6A9}")),
    (0xFB92, Status::Mapped("\u{6AF}")),
    (0xFB96, Status::Mapped("\u{6B3}")),
    (0xFB9A, Status::Mapped("\u{6B1}")),
    (0xFB9E, Status::Mapped("\u{6BA}")),
    (0xFBA0, Status::Mapped("\u{6BB}")),
    (0xFBA4, Status::Mapped("\u{6C0}")),
    (0xFBA6, Status::Mapped("\u{6C1}")),
    (0xFBAA, Status::Mapped("\u{6BE}")),
    (0xFBAE, Status::Mapped("\u{6D2}")),
    (0xFBB0, Status::Mapped("\u{6D3}")),
    (0xFBB2, Status::Valid),
    (0xFBD3, Status::Mapped("\u{6AD}")),
    (0xFBD7, Status::Mapped("\u{6C7}")),
    (0xFBD9, Status::Mapped("\u{6C6}")),
    (0xFBDB, Status::Mapped("\u{6C8}")),
    (0xFBDD, Status::Mapped("\u{6C7}\u{674}")),
    (0xFBDE, Status::Mapped("\u{6CB}")),
    (0xFBE0, Status::Mapped("\u{6C5}")),
    (0xFBE2, Status::Mapped("\u{6C9}")),
    (0xFBE4, Status::Mapped("\u{6D0}")),
    (0xFBE8, Status::Mapped("\u{649}")),
    (0xFBEA, Status::Mapped("\u{626}\u{627}")),
    (0xFBEC, Status::Mapped("\u{626}\u{6D5}")),
    (0xFBEE, Status::Mapped("\u{626}\u{648}")),
    (0xFBF0, Status::Mapped("\u{626}\u{6C7}")),
    (0xFBF2, Status::Mapped("\u{626}\u{6C6}")),
    (0xFBF4, Status::Mapped("\u{626}\u{6C8}")),
    (0xFBF6, Status::Mapped("\u{626}\u{6D0}")),
    (0xFBF9, Status::Mapped("\u{626}\u{649}")),
    (0xFBFC, Status::Mapped("\u{6CC}")),
    (0xFC00, Status::Mapped("\u{626}\u{62C}")),
    (0xFC01, Status::Mapped("\u{626}\u{62D}")),
    (0xFC02, Status::Mapped("\u{626}\u{645}")),
    (0xFC03, Status::Mapped("\u{626}\u{649}")),
    (0xFC04, Status::Mapped("\u{626}\u{64A}")),
    (0xFC05, Status::Mapped("\u{628}\u{62C}")),
    (0xFC06, Status::Mapped("\u{628}\u{62D}")),
    (0xFC07, Status::Mapped("\u{628}\u{62E}")),
    (0xFC08, Status::Mapped("\u{628}\u{645}")),
    (0xFC09, Status::Mapped("\u{628}\u{649}")),
    (0xFC0A, Status::Mapped("\u{628}\u{64A}")),
    (0xFC0B, Status::Mapped("\u{62A}\u{62C}")),
    (0xFC0C, Status::Mapped("\u{62A}\u{62D}")),
    (0xFC0D, Status::Mapped("\u{62A}\u{62E}")),
    (0xFC0E, Status::Mapped("\u{62A}\u{645}")),
    (0xFC0F, Status::Mapped("\u{62A}\u{649}")),
    (0xFC10, Status::Mapped("\u{62A}\u{64A}")),
    (0xFC11, Status::Mapped("\u{62B}\u{62C}")),
    (0xFC12, Status::Mapped("\u{62B}\u{645}")),
    (0xFC13, Status::Mapped("\u{62B}\u{649}")),
    (0xFC14, Status::Mapped("\u{62B}\u{64A}")),
    (0xFC15, Status::Mapped("\u{62C}\u{62D}")),
    (0xFC16, Status::Mapped("\u{62C}\u{645}")),
    (0xFC17, Status::Mapped("\u{62D}\u{62C}")),
    (0xFC18, Status::Mapped("\u{62D}\u{645}")),
    (0xFC19, Status::Mapped("\u{62E}\u{62C}")),
    (0xFC1A, Status::Mapped("\u{62E}\u{62D}")),
    (0xFC1B, Status::Mapped("\u{62E}\u{645}")),
    (0xFC1C, Status::Mapped("\u{633}\u{62C}")),
    (0xFC1D, Status::Mapped("\u{633}\u{62D}")),
    (0xFC1E, Status::Mapped("\u{633}\u{62E}")),
    (0xFC1F, Status::Mapped("\u{633}\u{645}")),
    (0xFC20, Status::Mapped("\u{635}\u{62D}")),
    (0xFC21, Status::Mapped("\u{635}\u{645}")),
    (0xFC22, Status::Mapped("\u{636}\u{62C}")),
    (0xFC23, Status::Mapped("\u{636}\u{62D}")),
    (0xFC24, Status::Mapped("\u{636}\u{62E}")),
    (0xFC25, Status::Mapped("\u{636}\u{645}")),
    (0xFC26, Status::Mapped("\u{637}\u{62D}")),
    (0xFC27, Status::Mapped("\u{637}\u{645}")),
    (0xFC28, Status::Mapped("\u{638}\u{645}")),
    (0xFC29, Status::Mapped("\u{639}\u{62C}")),
    (0xFC2A, Status::Mapped("\u{639}\u{645}")),
    (0xFC2B, Status::Mapped("\u{63A}\u{62C}")),
    (0xFC2C, Status::Mapped("\u{63A}\u{645}")),
    (0xFC2D, Status::Mapped("\u{641}\u{62C}")),
    (0xFC2E, Status::Mapped("\u{641}\u{62D}")),
    (0xFC2F, Status::Mapped("\u{641}\u{62E}")),
    (0xFC30, Status::Mapped("\u{641}\u{645}")),
    (0xFC31, Status::Mapped("\u{641}\u{649}")),
    (0xFC32, Status::Mapped("\u{641}\u{64A}")),
    (0xFC33, Status::Mapped("\u{642}\u{62D}")),
    (0xFC34, Status::Mapped("\u{642}\u{645}")),
    (0xFC35, Status::Mapped("\u{642}\u{649}")),
    (0xFC36, Status::Mapped("\u{642}\u{64A}")),
    (0xFC37, Status::Mapped("\u{643}\u{627}")),
    (0xFC38, Status::Mapped("\u{643}\u{62C}")),
    (0xFC39, Status::Mapped("\u{643}\u{62D}")),
    (0xFC3A, Status::Mapped("\u{643}\u{62E}")),
    (0xFC3B, Status::Mapped("\u{643}\u{644}")),
    (0xFC3C, Status::Mapped("\u{643}\u{645}")),
    (0xFC3D, Status::Mapped("\u{643}\u{649}")),
    (0xFC3E, Status::Mapped("\u{643}\u{64A}")),
    (0xFC3F, Status::Mapped("\u{644}\u{62C}")),
    (0xFC40, Status::Mapped("\u{644}\u{62D}")),
    (0xFC41, Status::Mapped("\u{644}\u{62E}")),
    (0xFC42, Status::Mapped("\u{644}\u{645}")),
    (0xFC43, Status::Mapped("\u{644}\u{649}")),
    (0xFC44, Status::Mapped("\u{644}\u{64A}")),
    (0xFC45, Status::Mapped("\u{645}\u{62C}")),
    (0xFC46, Status::Mapped("\u{645}\u{62D}")),
    (0xFC47, Status::Mapped("\u{645}\u{62E}")),
    (0xFC48, Status::Mapped("\u{645}\u{645}")),
    (0xFC49, Status::Mapped("\u{645}\u{649}")),
    (0xFC4A, Status::Mapped("\u{645}\u{64A}")),
    (0xFC4B, Status::Mapped("\u{646}\u{62C}")),
    (0xFC4C, Status::Mapped("\u{646}\u{62D}")),
    (0xFC4D, Status::Mapped("\u{646}\u{62E}")),
    (0xFC4E, Status::Mapped("\u{646}\u{645}")),
    (0xFC4F, Status::Mapped("\u{646}\u{649}")),
    (0xFC50, Status::Mapped("\u{646}\u{64A}")),
    (0xFC51, Status::Mapped("\u{647}\u{62C}")),
    (0xFC52, Status::Mapped("\u{647}\u{645}")),
    (0xFC53, Status::Mapped("\u{647}\u{649}")),
    (0xFC54, Status::Mapped("\u{647}\u{64A}")),
    (0xFC55, Status::Mapped("\u{64A}\u{62C}")),
    (0xFC56, Status::Mapped("\u{64A}\u{62D}")),
    (0xFC57, Status::Mapped("\u{64A}\u{62E}")),
    (0xFC58, Status::Mapped("\u{64A}\u{645}")),
    (0xFC59, Status::Mapped("\u{64A}\u{649}")),
    (0xFC5A, Status::Mapped("\u{64A}\u{64A}")),
    (0xFC5B, Status::Mapped("\u{630}\u{670}")),
    (0xFC5C, Status::Mapped("\u{631}\u{670}")),
    (0xFC5D, Status::Mapped("\u{649}\u{670}")),
    (0xFC5E, Status::Mapped(" \u{64C}\u{651}")),
    (0xFC5F, Status::Mapped(" \u{64D}\u{651}")),
    (0xFC60, Status::Mapped(" \u{64E}\u{651}")),
    (0xFC61, Status::Mapped(" \u{64F}\u{651}")),
    (0xFC62, Status::Mapped(" \u{650}\u{651}")),
    (0xFC63, Status::Mapped(" \u{651}\u{670}")),
    (0xFC64, Status::Mapped("\u{626}\u{631}")),
    (0xFC65, Status::Mapped("\u{626}\u{632}")),
    (0xFC66, Status::Mapped("\u{626}\u{645}")),
    (0xFC67, Status::Mapped("\u{626}\u{646}")),
    (0xFC68, Status::Mapped("\u{626}\u{649}")),
    (0xFC69, Status::Mapped("\u{626}\u{64A}")),
    (0xFC6A, Status::Mapped("\u{628}\u{631}")),
    (0xFC6B, Status::Mapped("\u{628}\u{632}")),
    (0xFC6C, Status::Mapped("\u{628}\u{645}")),
    (0xFC6D, Status::Mapped("\u{628}\u{646}")),
    (0xFC6E, Status::Mapped("\u{628}\u{649}")),
    (0xFC6F, Status::Mapped("\u{628}\u{64A}")),
    (0xFC70, Status::Mapped("\u{62A}\u{631}")),
    (0xFC71, Status::Mapped("\u{62A}\u{632}")),
    (0xFC72, Status::Mapped("\u{62A}\u{645}")),
    (0xFC73, Status::Mapped("\u{62A}\u{646}")),
    (0xFC74, Status::Mapped("\u{62A}\u{649}")),
    (0xFC75, Status::Mapped("\u{62A}\u{64A}")),
    (0xFC76, Status::Mapped("\u{62B}\u{631}")),
    (0xFC77, Status::Mapped("\u{62B}\u{632}")),
    (0xFC78, Status::Mapped("\u{62B}\u{645}")),
    (0xFC79, Status::Mapped("\u{62B}\u{646}")),
    (0xFC7A, Status::Mapped("\u{62B}\u{649}")),
    (0xFC7B, Status::Mapped("\u{62B}\u{64A}")),
    (0xFC7C, Status::Mapped("\u{641}\u{649}")),
    (0xFC7D, Status::Mapped("\u{641}\u{64A}")),
    (0xFC7E, Status::Mapped("\u{642}\u{649}")),
    (0xFC7F, Status::Mapped("\u{642}\u{64A}")),
    (0xFC80, Status::Mapped("\u{643}\u{627}")),
    (0xFC81, Status::Mapped("\u{643}\u{644}")),
    (0xFC82, Status::Mapped("\u{643}\u{645}")),
    (0xFC83, Status::Mapped("\u{643}\u{649}")),
    (0xFC84, Status::Mapped("\u{643}\u{64A}")),
    (0xFC85, Status::Mapped("\u{644}\u{645}")),
    (0xFC86, Status::Mapped("\u{644}\u{649}")),
    (0xFC87, Status::Mapped("\u{644}\u{64A}")),
    (0xFC88, Status::Mapped("\u{645}\u{627}")),
    (0xFC89, Status::Mapped("\u{645}\u{645}")),
    (0xFC8A, Status::Mapped("\u{646}\u{631}")),
    (0xFC8B, Status::Mapped("\u{646}\u{632}")),
    (0xFC8C, Status::Mapped("\u{646}\u{645}")),
    (0xFC8D, Status::Mapped("\u{646}\u{646}")),
    (0xFC8E, Status::Mapped("\u{646}\u{649}")),
    (0xFC8F, Status::Mapped("\u{646}\u{64A}")),
    (0xFC90, Status::Mapped("\u{649}\u{670}")),
    (0xFC91, Status::Mapped("\u{64A}\u{631}")),
    (0xFC92, Status::Mapped("\u{64A}\u{632}")),
    (0xFC93, Status::Mapped("\u{64A}\u{645}")),
    (0xFC94, Status::Mapped("\u{64A}\u{646}")),
    (0xFC95, Status::Mapped("\u{64A}\u{649}")),
    (0xFC96, Status::Mapped("\u{64A}\u{64A}")),
    (0xFC97, Status::Mapped("\u{626}\u{62C}")),
    (0xFC98, Status::Mapped("\u{626}\u{62D}")),
    (0xFC99, Status::Mapped("\u{626}\u{62E}")),
    (0xFC9A, Status::Mapped("\u{626}\u{645}")),
    (0xFC9B, Status::Mapped("\u{626}\u{647}")),
    (0xFC9C, Status::Mapped("\u{628}\u{62C}")),
    (0xFC9D, Status::Mapped("\u{628}\u{62D}")),
    (0xFC9E, Status::Mapped("\u{628}\u{62E}")),
    (0xFC9F, Status::Mapped("\u{628}\u{645}")),
    (0xFCA0, Status::Mapped("\u{628}\u{647}")),
    (0xFCA1, Status::Mapped("\u{62A}\u{62C}")),
    (0xFCA2, Status::Mapped("\u{62A}\u{62D}")),
    (0xFCA3, Status::Mapped("\u{62A}\u{62E}")),
    (0xFCA4, Status::Mapped("\u{62A}\u{645}")),
    (0xFCA5, Status::Mapped("\u{62A}\u{647}")),
    (0xFCA6, Status::Mapped("\u{62B}\u{645}")),
    (0xFCA7, Status::Mapped("\u{62C}\u{62D}")),
    (0xFCA8, Status::Mapped("\u{62C}\u{645}")),
    (0xFCA9, Status::Mapped("\u{62D}\u{62C}")),
    (0xFCAA, Status::Mapped("\u{62D}\u{645}")),
    (0xFCAB, Status::Mapped("\u{62E}\u{62C}")),
    (0xFCAC, Status::Mapped("\u{62E}\u{645}")),
    (0xFCAD, Status::Mapped("\u{633}\u{62C}")),
    (0xFCAE, Status::Mapped("\u{633}\u{62D}")),
    (0xFCAF, Status::Mapped("\u{633}\u{62E}")),
    (0xFCB0, Status::Mapped("\u{633}\u{645}")),
    (0xFCB1, Status::Mapped("\u{635}\u{62D}")),
    (0xFCB2, Status::Mapped("\u{635}\u{62E}")),
    (0xFCB3, Status::Mapped("\u{635}\u{645}")),
    (0xFCB4, Status::Mapped("\u{636}\u{62C}")),
    (0xFCB5, Status::Mapped("\u{636}\u{62D}")),
    (0xFCB6, Status::Mapped("\u{636}\u{62E}")),
    (0xFCB7, Status::Mapped("\u{636}\u{645}")),
    (0xFCB8, Status::Mapped("\u{637}\u{62D}")),
    (0xFCB9, Status::Mapped("\u{638}\u{645}")),
    (0xFCBA, Status::Mapped("\u{639}\u{62C}")),
    (0xFCBB, Status::Mapped("\u{639}\u{645}")),
    (0xFCBC, Status::Mapped("\u{63A}\u{62C}")),
    (0xFCBD, Status::Mapped("\u{63A}\u{645}")),
    (0xFCBE, Status::Mapped("\u{641}\u{62C}")),
    (0xFCBF, Status::Mapped("\u{641}\u{62D}")),
    (0xFCC0, Status::Mapped("\u{641}\u{62E}")),
    (0xFCC1, Status::Mapped("\u{641}\u{645}")),
    (0xFCC2, Status::Mapped("\u{642}\u{62D}")),
    (0xFCC3, Status::Mapped("\u{642}\u{645}")),
    (0xFCC4, Status::Mapped("\u{643}\u{62C}")),
    (0xFCC5, Status::Mapped("\u{643}\u{62D}")),
    (0xFCC6, Status::Mapped("\u{643}\u{62E}")),
    (0xFCC7, Status::Mapped("\u{643}\u{644}")),
    (0xFCC8, Status::Mapped("\u{643}\u{645}")),
    (0xFCC9, Status::Mapped("\u{644}\u{62C}")),
    (0xFCCA, Status::Mapped("\u{644}\u{62D}")),
    (0xFCCB, Status::Mapped("\u{644}\u{62E}")),
    (0xFCCC, Status::Mapped("\u{644}\u{645}")),
    (0xFCCD, Status::Mapped("\u{644}\u{647}")),
    (0xFCCE, Status::Mapped("\u{645}\u{62C}")),
    (0xFCCF, Status::Mapped("\u{645}\u{62D}")),
    (0xFCD0, Status::Mapped("\u{645}\u{62E}")),
    (0xFCD1, Status::Mapped("\u{645}\u{645}")),
    (0xFCD2, Status::Mapped("\u{646}\u{62C}")),
    (0xFCD3, Status::Mapped("\u{646}\u{62D}")),
    (0xFCD4, Status::Mapped("\u{646}\u{62E}")),
    (0xFCD5, Status::Mapped("\u{646}\u{645}")),
    (0xFCD6, Status::Mapped("\u{646}\u{647}")),
    (0xFCD7, Status::Mapped("\u{647}\u{62C}")),
    (0xFCD8, Status::Mapped("\u{647}\u{645}")),
    (0xFCD9, Status::Mapped("\u{647}\u{670}")),
    (0xFCDA, Status::Mapped("\u{64A}\u{62C}")),
    (0xFCDB, Status::Mapped("\u{64A}\u{62D}")),
    (0xFCDC, Status::Mapped("\u{64A}\u{62E}")),
    (0xFCDD, Status::Mapped("\u{64A}\u{645}")),
    (0xFCDE, Status::Mapped("\u{64A}\u{647}")),
    (0xFCDF, Status::Mapped("\u{626}\u{645}")),
    (0xFCE0, Status::Mapped("\u{626}\u{647}")),
    (0xFCE1, Status::Mapped("\u{628}\u{645}")),
    (0xFCE2, Status::Mapped("\u{628}\u{647}")),
    (0xFCE3, Status::Mapped("\u{62A}\u{645}")),
    (0xFCE4, Status::Mapped("\u{62A}\u{647}")),
    (0xFCE5, Status::Mapped("\u{62B}\u{645}")),
    (0xFCE6, Status::Mapped("\u{62B}\u{647}")),
    (0xFCE7, Status::Mapped("\u{633}\u{645}")),
    (0xFCE8, Status::Mapped("\u{633}\u{647}")),
    (0xFCE9, Status::Mapped("\u{634}\u{645}")),
    (0xFCEA, Status::Mapped("\u{634}\u{647}")),
    (0xFCEB, Status::Mapped("\u{643}\u{644}")),
    (0xFCEC, Status::Mapped("\u{643}\u{645}")),
    (0xFCED, Status::Mapped("\u{644}\u{645}")),
    (0xFCEE, Status::Mapped("\u{646}\u{645}")),
    (0xFCEF, Status::Mapped("\u{646}\u{647}")),
    (0xFCF0, Status::Mapped("\u{64A}\u{645}")),
    (0xFCF1, Status::Mapped("\u{64A}\u{647}")),
    (0xFCF2, Status::Mapped("\u{640}\u{64E}\u{651}")),
    (0xFCF3, Status::Mapped("\u{640}\u{64F}\u{651}")),
    (0xFCF4, Status::Mapped("\u{640}\u{650}\u{651}")),
    (0xFCF5, Status::Mapped("\u{637}\u{649}")),
    (0xFCF6, Status::Mapped("\u{637}\u{64A}")),
    (0xFCF7, Status::Mapped("\u{639}\u{649}")),
    (0xFCF8, Status::Mapped("\u{639}\u{64A}")),
    (0xFCF9, Status::Mapped("\u{63A}\u{649}")),
    (0xFCFA, Status::Mapped("\u{63A}\u{64A}")),
    (0xFCFB, Status::Mapped("\u{633}\u{649}")),
    (0xFCFC, Status::Mapped("\u{633}\u{64A}")),
    (0xFCFD, Status::Mapped("\u{634}\u{649}")),
    (0xFCFE, Status::Mapped("\u{634}\u{64A}")),
    (0xFCFF, Status::Mapped("\u{62D}\u{649}")),
    (0xFD00, Status::Mapped("\u{62D}\u{64A}")),
    (0xFD01, Status::Mapped("\u{62C}\u{649}")),
    (0xFD02, Status::Mapped("\u{62C}\u{64A}")),
    (0xFD03, Status::Mapped("\u{62E}\u{649}")),
    (0xFD04, Status::Mapped("\u{62E}\u{64A}")),
    (0xFD05, Status::Mapped("\u{635}\u{649}")),
    (0xFD06, Status::Mapped("\u{635}\u{64A}")),
    (0xFD07, Status::Mapped("\u{636}\u{649}")),
    (0xFD08, Status::Mapped("\u{636}\u{64A}")),
    (0xFD09, Status::Mapped("\u{634}\u{62C}")),
    (0xFD0A, Status::Mapped("\u{634}\u{62D}")),
    (0xFD0B, Status::Mapped("\u{634}\u{62E}")),
    (0xFD0C, Status::Mapped("\u{634}\u{645}")),
    (0xFD0D, Status::Mapped("\u{634}\u{631}")),
    (0xFD0E, Status::Mapped("\u{633}\u{631}")),
    (0xFD0F, Status::Mapped("\u{635}\u{631}")),
    (0xFD10, Status::Mapped("\u{636}\u{631}")),
    (0xFD11, Status::Mapped("\u{637}\u{649}")),
    (0xFD12, Status::Mapped("\u{637}\u{64A}")),
    (0xFD13, Status::Mapped("\u{639}\u{649}")),
    (0xFD14, Status::Mapped("\u{639}\u{64A}")),
    (0xFD15, Status::Mapped("\u{63A}\u{649}")),
    (0xFD16, Status::Mapped("\u{63A}\u{64A}")),
    (0xFD17, Status::Mapped("\u{633}\u{649}")),
    (0xFD18, Status::Mapped("\u{633}\u{64A}")),
    (0xFD19, Status::Mapped("\u{634}\u{649}")),
    (0xFD1A, Status::Mapped("\u{634}\u{64A}")),
    (0xFD1B, Status::Mapped("\u{62D}\u{649}")),
    (0xFD1C, Status::Mapped("\u{62D}\u{64A}")),
    (0xFD1D, Status::Mapped("\u{62C}\u{649}")),
    (0xFD1E, Status::Mapped("\u{62C}\u{64A}")),
    (0xFD1F, Status::Mapped("\u{62E}\u{649}")),
    (0xFD20, Status::Mapped("\u{62E}\u{64A}")),
    (0xFD21, Status::Mapped("\u{635}\u{649}")),
    (0xFD22, Status::Mapped("\u{635}\u{64A}")),
    (0xFD23, Status::Mapped("\u{636}\u{649}")),
    (0xFD24, Status::Mapped("\u{636}\u{64A}")),
    (0xFD25, Status::Mapped("\u{634}\u{62C}")),
    (0xFD26, Status::Mapped("\u{634}\u{62D}")),
    (0xFD27, Status::Mapped("\u{634}\u{62E}")),
    (0xFD28, Status::Mapped("\u{634}\u{645}")),
    (0xFD29, Status::Mapped("\u{634}\u{631}")),
    (0xFD2A, Status::Mapped("\u{633}\u{631}")),
    (0xFD2B, Status::Mapped("\u{635}\u{631}")),
    (0xFD2C, Status::Mapped("\u{636}\u{631}")),
    (0xFD2D, Status::Mapped("\u{634}\u{62C}")),
    (0xFD2E, Status::Mapped("\u{634}\u{62D}")),
    (0xFD2F, Status::Mapped("\u{634}\u{62E}")),
    (0xFD30, Status::Mapped("\u{634}\u{645}")),
    (0xFD31, Status::Mapped("\u{633}\u{647}")),
    (0xFD32, Status::Mapped("\u{634}\u{647}")),
    (0xFD33, Status::Mapped("\u{637}\u{645}")),
    (0xFD34, Status::Mapped("\u{633}\u{62C}")),
    (0xFD35, Status::Mapped("\u{633}\u{62D}")),
    (0xFD36, Status::Mapped("\u{633}\u{62E}")),
    (0xFD37, Status::Mapped("\u{634}\u{62C}")),
    (0xFD38, Status::Mapped("\u{634}\u{62D}")),
    (0xFD39, Status::Mapped("\u{634}\u{62E}")),
    (0xFD3A, Status::Mapped("\u{637}\u{645}")),
    (0xFD3B, Status::Mapped("\u{638}\u{645}")),
    (0xFD3C, Status::Mapped("\u{627}\u{64B}")),
    (0xFD3E, Status::Valid),
    (0xFD50, Status::Mapped("\u{62A}\u{62C}\u{645}")),
    (0xFD51, Status::Mapped("\u{62A}\u{62D}\u{62C}")),
    (0xFD53, Status::Mapped("\u{62A}\u{62D}\u{645}")),
    (0xFD54, Status::Mapped("\u{62A}\u{62E}\u{645}")),
    (0xFD55, Status::Mapped("\u{62A}\u{645}\u{62C}")),
    (0xFD56, Status::Mapped("\u{62A}\u{645}\u{62D}")),
    (0xFD57, Status::Mapped("\u{62A}\u{645}\u{62E}")),
    (0xFD58, Status::Mapped("\u{62C}\u{645}\u{62D}")),
    (0xFD5A, Status::Mapped("\u{62D}\u{645}\u{64A}")),
    (0xFD5B, Status::Mapped("\u{62D}\u{645}\u{649}")),
    (0xFD5C, Status::Mapped("\u{633}\u{62D}\u{62C}")),
    (0xFD5D, Status::Mapped("\u{633}\u{62C}\u{62D}")),
    (0xFD5E, Status::Mapped("\u{633}\u{62C}\u{649}")),
    (0xFD5F, Status::Mapped("\u{633}\u{645}\u{62D}")),
    (0xFD61, Status::Mapped("\u{633}\u{645}\u{62C}")),
    (0xFD62, Status::Mapped("\u{633}\u{645}\u{645}")),
    (0xFD64, Status::Mapped("\u{635}\u{62D}\u{62D}")),
    (0xFD66, Status::Mapped("\u{635}\u{645}\u{645}")),
    (0xFD67, Status::Mapped("\u{634}\u{62D}\u{645}")),
    (0xFD69, Status::Mapped("\u{634}\u{62C}\u{64A}")),
    (0xFD6A, Status::Mapped("\u{634}\u{645}\u{62E}")),
    (0xFD6C, Status::Mapped("\u{634}\u{645}\u{645}")),
    (0xFD6E, Status::Mapped("\u{636}\u{62D}\u{649}")),
    (0xFD6F, Status::Mapped("\u{636}\u{62E}\u{645}")),
    (0xFD71, Status::Mapped("\u{637}\u{645}\u{62D}")),
    (0xFD73, Status::Mapped("\u{637}\u{645}\u{645}")),
    (0xFD74, Status::Mapped("\u{637}\u{645}\u{64A}")),
    (0xFD75, Status::Mapped("\u{639}\u{62C}\u{645}")),
    (0xFD76, Status::Mapped("\u{639}\u{645}\u{645}")),
    (0xFD78, Status::Mapped("\u{639}\u{645}\u{649}")),
    (0xFD79, Status::Mapped("\u{63A}\u{645}\u{645}")),
    (0xFD7A, Status::Mapped("\u{63A}\u{645}\u{64A}")),
    (0xFD7B, Status::Mapped("\u{63A}\u{645}\u{649}")),
    (0xFD7C, Status::Mapped("\u{641}\u{62E}\u{645}")),
    (0xFD7E, Status::Mapped("\u{642}\u{645}\u{62D}")),
    (0xFD7F, Status::Mapped("\u{642}\u{645}\u{645}")),
    (0xFD80, Status::Mapped("\u{644}\u{62D}\u{645}")),
    (0xFD81, Status::Mapped("\u{644}\u{62D}\u{64A}")),
    (0xFD82, Status::Mapped("\u{644}\u{62D}\u{649}")),
    (0xFD83, Status::Mapped("\u{644}\u{62C}\u{62C}")),
    (0xFD85, Status::Mapped("\u{644}\u{62E}\u{645}")),
    (0xFD87, Status::Mapped("\u{644}\u{645}\u{62D}")),
    (0xFD89, Status::Mapped("\u{645}\u{62D}\u{62C}")),
    (0xFD8A, Status::Mapped("\u{645}\u{62D}\u{645}")),
    (0xFD8B, Status::Mapped("\u{645}\u{62D}\u{64A}")),
    (0xFD8C, Status::Mapped("\u{645}\u{62C}\u{62D}")),
    (0xFD8D, Status::Mapped("\u{645}\u{62C}\u{645}")),
    (0xFD8E, Status::Mapped("\u{645}\u{62E}\u{62C}")),
    (0xFD8F, Status::Mapped("\u{645}\u{62E}\u{645}")),
    (0xFD90, Status::Valid),
    (0xFD92, Status::Mapped("\u{645}\u{62C}\u{62E}")),
    (0xFD93, Status::Mapped("\u{647}\u{645}\u{62C}")),
    (0xFD94, Status::Mapped("\u{647}\u{645}\u{645}")),
    (0xFD95, Status::Mapped("\u{646}\u{62D}\u{645}")),
    (0xFD96, Status::Mapped("\u{646}\u{62D}\u{649}")),
    (0xFD97, Status::Mapped("\u{646}\u{62C}\u{645}")),
    (0xFD99, Status::Mapped("\u{646}\u{62C}\u{649}")),
    (0xFD9A, Status::Mapped("\u{646}\u{645}\u{64A}")),
    (0xFD9B, Status::Mapped("\u{646}\u{645}\u{649}")),
    (0xFD9C, Status::Mapped("\u{64A}\u{645}\u{645}")),
    (0xFD9E, Status::Mapped("\u{628}\u{62E}\u{64A}")),
    (0xFD9F, Status::Mapped("\u{62A}\u{62C}\u{64A}")),
    (0xFDA0, Status::Mapped("\u{62A}\u{62C}\u{649}")),
    (0xFDA1, Status::Mapped("\u{62A}\u{62E}\u{64A}")),
    (0xFDA2, Status::Mapped("\u{62A}\u{62E}\u{649}")),
    (0xFDA3, Status::Mapped("\u{62A}\u{645}\u{64A}")),
    (0xFDA4, Status::Mapped("\u{62A}\u{645}\u{649}")),
    (0xFDA5, Status::Mapped("\u{62C}\u{645}\u{64A}")),
    (0xFDA6, Status::Mapped("\u{62C}\u{62D}\u{649}")),
    (0xFDA7, Status::Mapped("\u{62C}\u{645}\u{649}")),
    (0xFDA8, Status::Mapped("\u{633}\u{62E}\u{649}")),
    (0xFDA9, Status::Mapped("\u{635}\u{62D}\u{64A}")),
    (0xFDAA, Status::Mapped("\u{634}\u{62D}\u{64A}")),
    (0xFDAB, Status::Mapped("\u{636}\u{62D}\u{64A}")),
    (0xFDAC, Status::Mapped("\u{644}\u{62C}\u{64A}")),
    (0xFDAD, Status::Mapped("\u{644}\u{645}\u{64A}")),
    (0xFDAE, Status::Mapped("\u{64A}\u{62D}\u{64A}")),
    (0xFDAF, Status::Mapped("\u{64A}\u{62C}\u{64A}")),
    (0xFDB0, Status::Mapped("\u{64A}\u{645}\u{64A}")),
    (0xFDB1, Status::Mapped("\u{645}\u{645}\u{64A}")),
    (0xFDB2, Status::Mapped("\u{642}\u{645}\u{64A}")),
    (0xFDB3, Status::Mapped("\u{646}\u{62D}\u{64A}")),
    (0xFDB4, Status::Mapped("\u{642}\u{645}\u{62D}")),
    (0xFDB5, Status::Mapped("\u{644}\u{62D}\u{645}")),
    (0xFDB6, Status::Mapped("\u{639}\u{645}\u{64A}")),
    (0xFDB7, Status::Mapped("\u{643}\u{645}\u{64A}")),
    (0xFDB8, Status::Mapped("\u{646}\u{62C}\u{62D}")),
    (0xFDB9, Status::Mapped("\u{645}\u{62E}\u{64A}")),
    (0xFDBA, Status::Mapped("\u{644}\u{62C}\u{645}")),
    (0xFDBB, Status::Mapped("\u{643}\u{645}\u{645}")),
    (0xFDBC, Status::Mapped("\u{644}\u{62C}\u{645}")),
    (0xFDBD, Status::Mapped("\u{646}\u{62C}\u{62D}")),
    (0xFDBE, Status::Mapped("\u{62C}\u{62D}\u{64A}")),
    (0xFDBF, Status::Mapped("\u{62D}\u{62C}\u{64A}")),
    (0xFDC0, Status::Mapped("\u{645}\u{62C}\u{64A}")),
    (0xFDC1, Status::Mapped("\u{641}\u{645}\u{64A}")),
    (0xFDC2, Status::Mapped("\u{628}\u{62D}\u{64A}")),
    (0xFDC3, Status::Mapped("\u{643}\u{645}\u{645}")),
    (0xFDC4, Status::Mapped("\u{639}\u{62C}\u{645}")),
    (0xFDC5, Status::Mapped("\u{635}\u{645}\u{645}")),
    (0xFDC6, Status::Mapped("\u{633}\u{62E}\u{64A}")),
    (0xFDC7, Status::Mapped("\u{646}\u{62C}\u{64A}")),
    (0xFDC8, Status::Valid),
    (0xFDD0, Status::Disallowed),
    (0xFDF0, Status::Mapped("\u{635}\u{644}\u{6D2}")),
    (0xFDF1, Status::Mapped("\u{642}\u{644}\u{6D2}")),
    (0xFDF2, Status::Mapped("\u{627}\u{644}\u{644}\u{647}")),
    (0xFDF3, Status::Mapped("\u{627}\u{643}\u{628}\u{631}")),
    (0xFDF4, Status::Mapped("\u{645}\u{62D}\u{645}\u{62F}")),
    (0xFDF5, Status::Mapped("\u{635}\u{644}\u{639}\u{645}")),
    (0xFDF6, Status::Mapped("\u{631}\u{633}\u{648}\u{644}")),
    (0xFDF7, Status::Mapped("\u{639}\u{644}\u{64A}\u{647}")),
    (0xFDF8, Status::Mapped("\u{648}\u{633}\u{644}\u{645}")),
    (0xFDF9, Status::Mapped("\u{635}\u{644}\u{649}")),
    (0xFDFA, Status::Mapped("\u{635}\u{644}\u{649} \u{627}\u{644}\u{644}\u{647} \u{639}\u{644}\u{64A}\u{647} \u{648}\u{633}\u{644}\u{645}")),
    (0xFDFB, Status::Mapped("\u{62C}\u{644} \u{62C}\u{644}\u{627}\u{644}\u{647}")),
    (0xFDFC, Status::Mapped("\u{631}\u{6CC}\u{627}\u{644}")),
    (0xFDFD, Status::Valid),
    (0xFE00, Status::Ignored),
    (0xFE10, Status::Mapped(",")),
    (0xFE11, Status::Mapped("\u{3001}")),
    (0xFE12, Status::Disallowed),
    (0xFE13, Status::Mapped(":")),
    (0xFE14, Status::Mapped(";")),
    (0xFE15, Status::Mapped("!")),
    (0xFE16, Status::Mapped("?")),
    (0xFE17, Status::Mapped("\u{3016}")),
    (0xFE18, Status::Mapped("\u{3017}")),
    (0xFE19, Status::Disallowed),
    (0xFE20, Status::Valid),
    (0xFE30, Status::Disallowed),
    (0xFE31, Status::Mapped("\u{2014}")),
    (0xFE32, Status::Mapped("\u{2013}")),
    (0xFE33, Status::Mapped("_")),
    (0xFE35, Status::Mapped("(")),
    (0xFE36, Status::Mapped(")")),
    (0xFE37, Status::Mapped("{")),
    (0xFE38, Status::Mapped("}")),
    (0xFE39, Status::Mapped("\u{3014}")),
    (0xFE3A, Status::Mapped("\u{3015}")),
    (0xFE3B, Status::Mapped("\u{3010}")),
    (0xFE3C, Status::Mapped("\u{3011}")),
    (0xFE3D, Status::Mapped("\u{300A}")),
    (0xFE3E, Status::Mapped("\u{300B}")),
    (0xFE3F, Status::Mapped("\u{3008}")),
    (0xFE40, Status::Mapped("\u{3009}")),
    (0xFE41, Status::Mapped("\u{300C}")),
    (0xFE42, Status::Mapped("\u{300D}")),
    (0xFE43, Status::Mapped("\u{300E}")),
    (0xFE44, Status::Mapped("\u{300F}")),
    (0xFE45, Status::Valid),
    (0xFE47, Status::Mapped("[")),
    (0xFE48, Status::Mapped("]")),
    (0xFE49, Status::Mapped(" \u{305}")),
    (0xFE4D, Status::Mapped("_")),
    (0xFE50, Status::Mapped(",")),
    (0xFE51, Status::Mapped("\u{3001}")),
    (0xFE52, Status::Disallowed),
    (0xFE54, Status::Mapped(";")),
    (0xFE55, Status::Mapped(":")),
    (0xFE56, Status::Mapped("?")),
    (0xFE57, Status::Mapped("!")),
    (0xFE58, Status::Mapped("\u{2014}")),
    (0xFE59, Status::Mapped("(")),
    (0xFE5A, Status::Mapped(")")),
    (0xFE5B, Status::Mapped("{")),
    (0xFE5C, Status::Mapped("}")),
    (0xFE5D, Status::Mapped("\u{3014}")),
    (0xFE5E, Status::Mapped("\u{3015}")),
    (0xFE5F, Status::Mapped("#")),
    (0xFE60, Status::Mapped("&")),
    (0xFE61, Status::Mapped("*")),
    (0xFE62, Status::Mapped("+")),
    (0xFE63, Status::Mapped("-")),
    (0xFE64, Status::Mapped("<")),
    (0xFE65, Status::Mapped(">")),
    (0xFE66, Status::Mapped("=")),
    (0xFE67, Status::Disallowed),
    (0xFE68, Status::Mapped("\u{5C}")),
    (0xFE69, Status::Mapped("$")),
    (0xFE6A, Status::Mapped("%")),
    (0xFE6B, Status::Mapped("@")),
    (0xFE6C, Status::Disallowed),
    (0xFE70, Status::Mapped(" \u{64B}")),
    (0xFE71, Status::Mapped("\u{640}\u{64B}")),
    (0xFE72, Status::Mapped(" \u{64C}")),
    (0xFE73, Status::Valid),
    (0xFE74, Status::Mapped(" \u{64D}")),
    (0xFE75, Status::Disallowed),
    (0xFE76, Status::Mapped(" \u{64E}")),
    (0xFE77, Status::Mapped("\u{640}\u{64E}")),
    (0xFE78, Status::Mapped(" \u{64F}")),
    (0xFE79, Status::Mapped("\u{640}\u{64F}")),
    (0xFE7A, Status::Mapped(" \u{650}")),
    (0xFE7B, Status::Mapped("\u{640}\u{650}")),
    (0xFE7C, Status::Mapped(" \u{651}")),
    (0xFE7D, Status::Mapped("\u{640}\u{651}")),
    (0xFE7E, Status::Mapped(" \u{652}")),
    (0xFE7F, Status::Mapped("\u{640}\u{652}")),
    (0xFE80, Status::Mapped("\u{621}")),
    (0xFE81, Status::Mapped("\u{622}")),
    (0xFE83, Status::Mapped("\u{623}")),
    (0xFE85, Status::Mapped("\u{624}")),
    (0xFE87, Status::Mapped("\u{625}")),
    (0xFE89, Status::Mapped("\u{626}")),
    (0xFE8D, Status::Mapped("\u{627}")),
    (0xFE8F, Status::Mapped("\u{628}")),
    (0xFE93, Status::Mapped("\u{629}")),
    (0xFE95, Status::Mapped("\u{62A}")),
    (0xFE99, Status::Mapped("\u{62B}")),
    (0xFE9D, Status::Mapped("\u{62C}")),
    (0xFEA1, Status::Mapped("\u{62D}")),
    (0xFEA5, Status::Mapped("\u{62E}")),
    (0xFEA9, Status::Mapped("\u{62F}")),
    (0xFEAB, Status::Mapped("\u{630}")),
    (0xFEAD, Status::Mapped("\u{631}")),
    (0xFEAF, Status::Mapped("\u{632}")),
    (0xFEB1, Status::Mapped("\u{633}")),
    (0xFEB5, Status::Mapped("\u{634}")),
    (0xFEB9, Status::Mapped("\u{635}")),
    (0xFEBD, Status::Mapped("\u{636}")),
    (0xFEC1, Status::Mapped("\u{637}")),
    (0xFEC5, Status::Mapped("\u{638}")),
    (0xFEC9, Status::Mapped("\u{639}")),
    (0xFECD, Status::Mapped("\u{63A}")),
    (0xFED1, Status::Mapped("\u{641}")),
    (0xFED5, Status::Mapped("\u{642}")),
    (0xFED9, Status::Mapped("\u{643}")),
    (0xFEDD, Status::Mapped("\u{644}")),
    (0xFEE1, Status::Mapped("\u{645}")),
    (0xFEE5, Status::Mapped("\u{646}")),
    (0xFEE9, Status::Mapped("\u{647}")),
    (0xFEED, Status::Mapped("\u{648}")),
    (0xFEEF, Status::Mapped("\u{649}")),
    (0xFEF1, Status::Mapped("\u{64A}")),
    (0xFEF5, Status::Mapped("\u{644}\u{622}")),
    (0xFEF7, Status::Mapped("\u{644}\u{623}")),
    (0xFEF9, Status::Mapped("\u{644}\u{625}")),
    (0xFEFB, Status::Mapped("\u{644}\u{627}")),
    (0xFEFD, Status::Disallowed),
    (0xFEFF, Status::Ignored),
    (0xFF00, Status::Disallowed),
    (0xFF01, Status::Mapped("!")),
    (0xFF02, Status::Mapped("\u{22}")),
    (0xFF03, Status::Mapped("#")),
    (0xFF04, Status::Mapped("$")),
    (0xFF05, Status::Mapped("%")),
    (0xFF06, Status::Mapped("&")),
    (0xFF07, Status::Mapped("'")),
    (0xFF08, Status::Mapped("(")),
    (0xFF09, Status::Mapped(")")),
    (0xFF0A, Status::Mapped("*")),
    (0xFF0B, Status::Mapped("+")),
    (0xFF0C, Status::Mapped(",")),
    (0xFF0D, Status::Mapped("-")),
    (0xFF0E, Status::Mapped(".")),
    (0xFF0F, Status::Mapped("/")),
    (0xFF10, Status::Mapped("0")),
    (0xFF11, Status::Mapped("1")),
    (0xFF12, Status::Mapped("2")),
    (0xFF13, Status::Mapped("3")),
    (0xFF14, Status::Mapped("4")),
    (0xFF15, Status::Mapped("5")),
    (0xFF16, Status::Mapped("6")),
    (0xFF17, Status::Mapped("7")),
    (0xFF18, Status::Mapped("8")),
    (0xFF19, Status::Mapped("9")),
    (0xFF1A, Status::Mapped(":")),
    (0xFF1B, Status::Mapped(";")),
    (0xFF1C, Status::Mapped("<")),
    (0xFF1D, Status::Mapped("=")),
    (0xFF1E, Status::Mapped(">")),
    (0xFF1F, Status::Mapped("?")),
    (0xFF20, Status::Mapped("@")),
    (0xFF21, Status::Mapped("a")),
    (0xFF22, Status::Mapped("b")),
    (0xFF23, Status::Mapped("c")),
    (0xFF24, Status::Mapped("d")),
    (0xFF25, Status::Mapped("e")),
    (0xFF26, Status::Mapped("f")),
    (0xFF27, Status::Mapped("g")),
    (0xFF28, Status::Mapped("h")),
    (0xFF29, Status::Mapped("i")),
    (0xFF2A, Status::Mapped("j")),
    (0xFF2B, Status::Mapped("k")),
    (0xFF2C, Status::Mapped("l")),
    (0xFF2D, Status::Mapped("m")),
    (0xFF2E, Status::Mapped("n")),
    (0xFF2F, Status::Mapped("o")),
    (0xFF30, Status::Mapped("p")),
    (0xFF31, Status::Mapped("q")),
    (0xFF32, Status::Mapped("r")),
    (0xFF33, Status::Mapped("s")),
    (0xFF34, Status::Mapped("t")),
    (0xFF35, Status::Mapped("u")),
    (0xFF36, Status::Mapped("v")),
    (0xFF37, Status::Mapped("w")),
    (0xFF38, Status::Mapped("x")),
    (0xFF39, Status::Mapped("y")),
    (0xFF3A, Status::Mapped("z")),
    (0xFF3B, Status::Mapped("[")),
    (0xFF3C, Status::Mapped("\u{5C}")),
    (0xFF3D, Status::Mapped("]")),
    (0xFF3E, Status::Mapped("^")),
    (0xFF3F, Status::Mapped("_")),
    (0xFF40, Status::Mapped("`")),
    (0xFF41, Status::Mapped("a")),
    (0xFF42, Status::Mapped("b")),
    (0xFF43, Status::Mapped("c")),
    (0xFF44, Status::Mapped("d")),
    (0xFF45, Status::Mapped("e")),
    (0xFF46, Status::Mapped("f")),
    (0xFF47, Status::Mapped("g")),
    (0xFF48, Status::Mapped("h")),
    (0xFF49, Status::Mapped("i")),
    (0xFF4A, Status::Mapped("j")),
    (0xFF4B, Status::Mapped("k")),
    (0xFF4C, Status::Mapped("l")),
    (0xFF4D, Status::Mapped("m")),
    (0xFF4E, Status::Mapped("n")),
    (0xFF4F, Status::Mapped("o")),
    (0xFF50, Status::Mapped("p")),
    (0xFF51, Status::Mapped("q")),
    (0xFF52, Status::Mapped("r")),
    (0xFF53, Status::Mapped("s")),
    (0xFF54, Status::Mapped("t")),
    (0xFF55, Status::Mapped("u")),
    (0xFF56, Status::Mapped("v")),
    (0xFF57, Status::Mapped("w")),
    (0xFF58, Status::Mapped("x")),
    (0xFF59, Status::Mapped("y")),
    (0xFF5A, Status::Mapped("z")),
    (0xFF5B, Status::Mapped("{")),
    (0xFF5C, Status::Mapped("|")),
    (0xFF5D, Status::Mapped("}")),
    (0xFF5E, Status::Mapped("~")),
    (0xFF5F, Status::Mapped("\u{2985}")),
    (0xFF60, Status::Mapped("\u{2986}")),
    (0xFF61, Status::Mapped(".")),
    (0xFF62, Status::Mapped("\u{300C}")),
    (0xFF63, Status::Mapped("\u{300D}")),
    (0xFF64, Status::Mapped("\u{3001}")),
    (0xFF65, Status::Mapped("\u{30FB}")),
    (0xFF66, Status::Mapped("\u{30F2}")),
    (0xFF67, Status::Mapped("\u{30A1}")),
    (0xFF68, Status::Mapped("\u{30A3}")),
    (0xFF69, Status::Mapped("\u{30A5}")),
    (0xFF6A, Status::Mapped("\u{30A7}")),
    (0xFF6B, Status::Mapped("\u{30A9}")),
    (0xFF6C, Status::Mapped("\u{30E3}")),
    (0xFF6D, Status::Mapped("\u{30E5}")),
    (0xFF6E, Status::Mapped("\u{30E7}")),
    (0xFF6F, Status::Mapped("\u{30C3}")),
    (0xFF70, Status::Mapped("\u{30FC}")),
    (0xFF71, Status::Mapped("\u{30A2}")),
    (0xFF72, Status::Mapped("\u{30A4}")),
    (0xFF73, Status::Mapped("\u{30A6}")),
    (0xFF74, Status::Mapped("\u{30A8}")),
    (0xFF75, Status::Mapped("\u{30AA}")),
    (0xFF76, Status::Mapped("\u{30AB}")),
    (0xFF77, Status::Mapped("\u{30AD}")),
    (0xFF78, Status::Mapped("\u{30AF}")),
    (0xFF79, Status::Mapped("\u{30B1}")),
    (0xFF7A, Status::Mapped("\u{30B3}")),
    (0xFF7B, Status::Mapped("\u{30B5}")),
    (0xFF7C, Status::Mapped("\u{30B7}")),
    (0xFF7D, Status::Mapped("\u{30B9}")),
    (0xFF7E, Status::Mapped("\u{30BB}")),
    (0xFF7F, Status::Mapped("\u{30BD}")),
    (0xFF80, Status::Mapped("\u{30BF}")),
    (0xFF81, Status::Mapped("\u{30C1}")),
    (0xFF82, Status::Mapped("\u{30C4}")),
    (0xFF83, Status::Mapped("\u{30C6}")),
    (0xFF84, Status::Mapped("\u{30C8}")),
    (0xFF85, Status::Mapped("\u{30CA}")),
    (0xFF86, Status::Mapped("\u{30CB}")),
    (0xFF87, Status::Mapped("\u{30CC}")),
    (0xFF88, Status::Mapped("\u{30CD}")),
    (0xFF89, Status::Mapped("\u{30CE}")),
    (0xFF8A, Status::Mapped("\u{30CF}")),
    (0xFF8B, Status::Mapped("\u{30D2}")),
    (0xFF8C, Status::Mapped("\u{30D5}")),
    (0xFF8D, Status::Mapped("\u{30D8}")),
    (0xFF8E, Status::Mapped("\u{30DB}")),
    (0xFF8F, Status::Mapped("\u{30DE}")),
    (0xFF90, Status::Mapped("\u{30DF}")),
    (0xFF91, Status::Mapped("\u{30E0}")),
    (0xFF92, Status::Mapped("\u{30E1}")),
    (0xFF93, Status::Mapped("\u{30E2}")),
    (0xFF94, Status::Mapped("\u{30E4}")),
    (0xFF95, Status::Mapped("\u{30E6}")),
    (0xFF96, Status::Mapped("\u{30E8}")),
    (0xFF97, Status::Mapped("\u{30E9}")),
    (0xFF98, Status::Mapped("\u{30EA}")),
    (0xFF99, Status::Mapped("\u{30EB}")),
    (0xFF9A, Status::Mapped("\u{30EC}")),
    (0xFF9B, Status::Mapped("\u{30ED}")),
    (0xFF9C, Status::Mapped("\u{30EF}")),
    (0xFF9D, Status::Mapped("\u{30F3}")),
    (0xFF9E, Status::Mapped("\u{3099}")),
    (0xFF9F, Status::Mapped("\u{309A}")),
    (0xFFA0, Status::Ignored),
    (0xFFA1, Status::Mapped("\u{1100}")),
    (0xFFA2, Status::Mapped("\u{1101}")),
    (0xFFA3, Status::Mapped("\u{11AA}")),
    (0xFFA4, Status::Mapped("\u{1102}")),
    (0xFFA5, Status::Mapped("\u{11AC}")),
    (0xFFA6, Status::Mapped("\u{11AD}")),
    (0xFFA7, Status::Mapped("\u{1103}")),
    (0xFFA8, Status::Mapped("\u{1104}")),
    (0xFFA9, Status::Mapped("\u{1105}")),
    (0xFFAA, Status::Mapped("\u{11B0}")),
    (0xFFAB, Status::Mapped("\u{11B1}")),
    (0xFFAC, Status::Mapped("\u{11B2}")),
    (0xFFAD, Status::Mapped("\u{11B3}")),
    (0xFFAE, Status::Mapped("\u{11B4}")),
    (0xFFAF, Status::Mapped("\u{11B5}")),
    (0xFFB0, Status::Mapped("\u{111A}")),
    (0xFFB1, Status::Mapped("\u{1106}")),
    (0xFFB2, Status::Mapped("\u{1107}")),
    (0xFFB3, Status::Mapped("\u{1108}")),
    (0xFFB4, Status::Mapped("\u{1121}")),
    (0xFFB5, Status::Mapped("\u{1109}")),
    (0xFFB6, Status::Mapped("\u{110A}")),
    (0xFFB7, Status::Mapped("\u{110B}")),
    (0xFFB8, Status::Mapped("\u{110C}")),
    (0xFFB9, Status::Mapped("\u{110D}")),
    (0xFFBA, Status::Mapped("\u{110E}")),
    (0xFFBB, Status::Mapped("\u{110F}")),
    (0xFFBC, Status::Mapped("\u{1110}")),
    (0xFFBD, Status::Mapped("\u{1111}")),
    (0xFFBE, Status::Mapped("\u{1112}")),
    (0xFFBF, Status::Disallowed),
    (0xFFC2, Status::Mapped("\u{1161}")),
    (0xFFC3, Status::Mapped("\u{1162}")),
    (0xFFC4, Status::Mapped("\u{1163}")),
    (0xFFC5, Status::Mapped("\u{1164}")),
    (0xFFC6, Status::Mapped("\u{1165}")),
    (0xFFC7, Status::Mapped("\u{1166}")),
    (0xFFC8, Status::Disallowed),
    (0xFFCA, Status::Mapped("\u{1167}")),
    (0xFFCB, Status::Mapped("\u{1168}")),
    (0xFFCC, Status::Mapped("\u{1169}")),
    (0xFFCD, Status::Mapped("\u{116A}")),
    (0xFFCE, Status::Mapped("\u{116B}")),
    (0xFFCF, Status::Mapped("\u{116C}")),
    (0xFFD0, Status::Disallowed),
    (0xFFD2, Status::Mapped("\u{116D}")),
    (0xFFD3, Status::Mapped("\u{116E}")),
    (0xFFD4, Status::Mapped("\u{116F}")),
    (0xFFD5, Status::Mapped("\u{1170}")),
    (0xFFD6, Status::Mapped("\u{1171}")),
    (0xFFD7, Status::Mapped("\u{1172}")),
    (0xFFD8, Status::Disallowed),
    (0xFFDA, Status::Mapped("\u{1173}")),
    (0xFFDB, Status::Mapped("\u{1174}")),
    (0xFFDC, Status::Mapped("\u{1175}")),
    (0xFFDD, Status::Disallowed),
    (0xFFE0, Status::Mapped("\u{A2}")),
    (0xFFE1, Status::Mapped("\u{A3}")),
    (0xFFE2, Status::Mapped("\u{AC}")),
    (0xFFE3, Status::Mapped(" \u{304}")),
    (0xFFE4, Status::Mapped("\u{A6}")),
    (0xFFE5, Status::Mapped("\u{A5}")),
    (0xFFE6, Status::Mapped("\u{20A9}")),
    (0xFFE7, Status::Disallowed),
    (0xFFE8, Status::Mapped("\u{2502}")),
    (0xFFE9, Status::Mapped("\u{2190}")),
    (0xFFEA, Status::Mapped("\u{2191}")),
    (0xFFEB, Status::Mapped("\u{2192}")),
    (0xFFEC, Status::Mapped("\u{2193}")),
    (0xFFED, Status::Mapped("\u{25A0}")),
    (0xFFEE, Status::Mapped("\u{25CB}")),
    (0xFFEF, Status::Disallowed),
    (0x10000, Status::Valid),
    (0x1000C, Status::Disallowed),
    (0x1000D, Status::Valid),
    (0x10027, Status::Disallowed),
    (0x10028, Status::Valid),
    (0x1003B, Status::Disallowed),
    (0x1003C, Status::Valid),
    (0x1003E, Status::Disallowed),
    (0x1003F, Status::Valid),
    (0x1004E, Status::Disallowed),
    (0x10050, Status::Valid),
    (0x1005E, Status::Disallowed),
    (0x10080, Status::Valid),
    (0x100FB, Status::Disallowed),
    (0x10100, Status::Valid),
    (0x10103, Status::Disallowed),
    (0x10107, Status::Valid),
    (0x10134, Status::Disallowed),
    (0x10137, Status::Valid),
    (0x1018F, Status::Disallowed),
    (0x10190, Status::Valid),
    (0x1019D, Status::Disallowed),
    (0x101A0, Status::Valid),
    (0x101A1, Status::Disallowed),
    (0x101D0, Status::Valid),
    (0x101FE, Status::Disallowed),
    (0x10280, Status::Valid),
    (0x1029D, Status::Disallowed),
    (0x102A0, Status::Valid),
    (0x102D1, Status::Disallowed),
    (0x102E0, Status::Valid),
    (0x102FC, Status::Disallowed),
    (0x10300, Status::Valid),
    (0x10324, Status::Disallowed),
    (0x1032D, Status::Valid),
    (0x1034B, Status::Disallowed),
    (0x10350, Status::Valid),
    (0x1037B, Status::Disallowed),
    (0x10380, Status::Valid),
    (0x1039E, Status::Disallowed),
    (0x1039F, Status::Valid),
    (0x103C4, Status::Disallowed),
    (0x103C8, Status::Valid),
    (0x103D6, Status::Disallowed),
    (0x10400, Status::Mapped("\u{10428}")),
    (0x10401, Status::Mapped("\u{10429}")),
    (0x10402, Status::Mapped("\u{1042A}")),
    (0x10403, Status::Mapped("\u{1042B}")),
    (0x10404, Status::Mapped("\u{1042C}")),
    (0x10405, Status::Mapped("\u{1042D}")),
    (0x10406, Status::Mapped("\u{1042E}")),
    (0x10407, Status::Mapped("\u{1042F}")),
    (0x10408, Status::Mapped("\u{10430}")),
    (0x10409, Status::Mapped("\u{10431}")),
    (0x1040A, Status::Mapped("\u{10432}")),
    (0x1040B, Status::Mapped("\u{10433}")),
    (0x1040C, Status::Mapped("\u{10434}")),
    (0x1040D, Status::Mapped("\u{10435}")),
    (0x1040E, Status::Mapped("\u{10436}")),
    (0x1040F, Status::Mapped("\u{10437}")),
    (0x10410, Status::Mapped("\u{10438}")),
    (0x10411, Status::Mapped("\u{10439}")),
    (0x10412, Status::Mapped("\u{1043A}")),
    (0x10413, Status::Mapped("\u{1043B}")),
    (0x10414, Status::Mapped("\u{1043C}")),
    (0x10415, Status::Mapped("\u{1043D}")),
    (0x10416, Status::Mapped("\u{1043E}")),
    (0x10417, Status::Mapped("\u{1043F}")),
    (0x10418, Status::Mapped("\u{10440}")),
    (0x10419, Status::Mapped("\u{10441}")),
    (0x1041A, Status::Mapped("\u{10442}")),
    (0x1041B, Status::Mapped("\u{10443}")),
    (0x1041C, Status::Mapped("\u{10444}")),
    (0x1041D, Status::Mapped("\u{10445}")),
    (0x1041E, Status::Mapped("\u{10446}")),
    (0x1041F, Status::Mapped("\u{10447}")),
    (0x10420, Status::Mapped("\u{10448}")),
    (0x10421, Status::Mapped("\u{10449}")),
    (0x10422, Status::Mapped("\u{1044A}")),
    (0x10423, Status::Mapped("\u{1044B}")),
    (0x10424, Status::Mapped("\u{1044C}")),
    (0x10425, Status::Mapped("\u{1044D}")),
    (0x10426, Status::Mapped("\u{1044E}")),
    (0x10427, Status::Mapped("\u{1044F}")),
    (0x10428, Status::Valid),
    (0x1049E, Status::Disallowed),
    (0x104A0, Status::Valid),
    (0x104AA, Status::Disallowed),
    (0x104B0, Status::Mapped("\u{104D8}")),
    (0x104B1, Status::Mapped("\u{104D9}")),
    (0x104B2, Status::Mapped("\u{104DA}")),
    (0x104B3, Status::Mapped("\u{104DB}")),
    (0x104B4, Status::Mapped("\u{104DC}")),
    (0x104B5, Status::Mapped("\u{104DD}")),
    (0x104B6, Status::Mapped("\u{104DE}")),
    (0x104B7, Status::Mapped("\u{104DF}")),
    (0x104B8, Status::Mapped("\u{104E0}")),
    (0x104B9, Status::Mapped("\u{104E1}")),
    (0x104BA, Status::Mapped("\u{104E2}")),
    (0x104BB, Status::Mapped("\u{104E3}")),
    (0x104BC, Status::Mapped("\u{104E4}")),
    (0x104BD, Status::Mapped("\u{104E5}")),
    (0x104BE, Status::Mapped("\u{104E6}")),
    (0x104BF, Status::Mapped("\u{104E7}")),
    (0x104C0, Status::Mapped("\u{104E8}")),
    (0x104C1, Status::Mapped("\u{104E9}")),
    (0x104C2, Status::Mapped("\u{104EA}")),
    (0x104C3, Status::Mapped("\u{104EB}")),
    (0x104C4, Status::Mapped("\u{104EC}")),
    (0x104C5, Status::Mapped("\u{104ED}")),
    (0x104C6, Status::Mapped("\u{104EE}")),
    (0x104C7, Status::Mapped("\u{104EF}")),
    (0x104C8, Status::Mapped("\u{104F0}")),
    (0x104C9, Status::Mapped("\u{104F1}")),
    (0x104CA, Status::Mapped("\u{104F2}")),
    (0x104CB, Status::Mapped("\u{104F3}")),
    (0x104CC, Status::Mapped("\u{104F4}")),
    (0x104CD, Status::Mapped("\u{104F5}")),
    (0x104CE, Status::Mapped("\u{104F6}")),
    (0x104CF, Status::Mapped("\u{104F7}")),
    (0x104D0, Status::Mapped("\u{104F8}")),
    (0x104D1, Status::Mapped("\u{104F9}")),
    (0x104D2, Status::Mapped("\u{104FA}")),
    (0x104D3, Status::Mapped("\u{104FB}")),
    (0x104D4, Status::Disallowed),
    (0x104D8, Status::Valid),
    (0x104FC, Status::Disallowed),
    (0x10500, Status::Valid),
    (0x10528, Status::Disallowed),
    (0x10530, Status::Valid),
    (0x10564, Status::Disallowed),
    (0x1056F, Status::Valid),
    (0x10570, Status::Mapped("\u{10597}")),
    (0x10571, Status::Mapped("\u{10598}")),
    (0x10572, Status::Mapped("\u{10599}")),
    (0x10573, Status::Mapped("\u{1059A}")),
    (0x10574, Status::Mapped("\u{1059B}")),
    (0x10575, Status::Mapped("\u{1059C}")),
    (0x10576, Status::Mapped("\u{1059D}")),
    (0x10577, Status::Mapped("\u{1059E}")),
    (0x10578, Status::Mapped("\u{1059F}")),
    (0x10579, Status::Mapped("\u{105A0}")),
    (0x1057A, Status::Mapped("\u{105A1}")),
    (0x1057B, Status::Disallowed),
    (0x1057C, Status::Mapped("\u{105A3}")),
    (0x1057D, Status::Mapped("\u{105A4}")),
    (0x1057E, Status::Mapped("\u{105A5}")),
    (0x1057F, Status::Mapped("\u{105A6}")),
    (0x10580, Status::Mapped("\u{105A7}")),
    (0x10581, Status::Mapped("\u{105A8}")),
    (0x10582, Status::Mapped("\u{105A9}")),
    (0x10583, Status::Mapped("\u{105AA}")),
    (0x10584, Status::Mapped("\u{105AB}")),
    (0x10585, Status::Mapped("\u{105AC}")),
    (0x10586, Status::Mapped("\u{105AD}")),
    (0x10587, Status::Mapped("\u{105AE}")),
    (0x10588, Status::Mapped("\u{105AF}")),
    (0x10589, Status::Mapped("\u{105B0}")),
    (0x1058A, Status::Mapped("\u{105B1}")),
    (0x1058B, Status::Disallowed),
    (0x1058C, Status::Mapped("\u{105B3}")),
    (0x1058D, Status::Mapped("\u{105B4}")),
    (0x1058E, Status::Mapped("\u{105B5}")),
    (0x1058F, Status::Mapped("\u{105B6}")),
    (0x10590, Status::Mapped("\u{105B7}")),
    (0x10591, Status::Mapped("\u{105B8}")),
    (0x10592, Status::Mapped("\u{105B9}")),
    (0x10593, Status::Disallowed),
    (0x10594, Status::Mapped("\u{105BB}")),
    (0x10595, Status::Mapped("\u{105BC}")),
    (0x10596, Status::Disallowed),
    (0x10597, Status::Valid),
    (0x105A2, Status::Disallowed),
    (0x105A3, Status::Valid),
    (0x105B2, Status::Disallowed),
    (0x105B3, Status::Valid),
    (0x105BA, Status::Disallowed),
    (0x105BB, Status::Valid),
    (0x105BD, Status::Disallowed),
    (0x105C0, Status::Valid),
    (0x105F4, Status::Disallowed),
    (0x10600, Status::Valid),
    (0x10737, Status::Disallowed),
    (0x10740, Status::Valid),
    (0x10756, Status::Disallowed),
    (0x10760, Status::Valid),
    (0x10768, Status::Disallowed),
    (0x10780, Status::Valid),
    (0x10781, Status::Mapped("\u{2D0}")),
    (0x10782, Status::Mapped("\u{2D1}")),
    (0x10783, Status::Mapped("\u{E6}")),
    (0x10784, Status::Mapped("\u{299}")),
    (0x10785, Status::Mapped("\u{253}")),
    (0x10786, Status::Disallowed),
    (0x10787, Status::Mapped("\u{2A3}")),
    (0x10788, Status::Mapped("\u{AB66}")),
    (0x10789, Status::Mapped("\u{2A5}")),
    (0x1078A, Status::Mapped("\u{2A4}")),
    (0x1078B, Status::Mapped("\u{256}")),
    (0x1078C, Status::Mapped("\u{257}")),
    (0x1078D, Status::Mapped("\u{1D91}")),
    (0x1078E, Status::Mapped("\u{258}")),
    (0x1078F, Status::Mapped("\u{25E}")),
    (0x10790, Status::Mapped("\u{2A9}")),
    (0x10791, Status::Mapped("\u{264}")),
    (0x10792, Status::Mapped("\u{262}")),
    (0x10793, Status::Mapped("\u{260}")),
    (0x10794, Status::Mapped("\u{29B}")),
    (0x10795, Status::Mapped("\u{127}")),
    (0x10796, Status::Mapped("\u{29C}")),
    (0x10797, Status::Mapped("\u{267}")),
    (0x10798, Status::Mapped("\u{284}")),
    (0x10799, Status::Mapped("\u{2AA}")),
    (0x1079A, Status::Mapped("\u{2AB}")),
    (0x1079B, Status::Mapped("\u{26C}")),
    (0x1079C, Status::Mapped("\u{1DF04}")),
    (0x1079D, Status::Mapped("\u{A78E}")),
    (0x1079E, Status::Mapped("\u{26E}")),
    (0x1079F, Status::Mapped("\u{1DF05}")),
    (0x107A0, Status::Mapped("\u{28E}")),
    (0x107A1, Status::Mapped("\u{1DF06}")),
    (0x107A2, Status::Mapped("\u{F8}")),
    (0x107A3, Status::Mapped("\u{276}")),
    (0x107A4, Status::Mapped("\u{277}")),
    (0x107A5, Status::Mapped("q")),
    (0x107A6, Status::Mapped("\u{27A}")),
    (0x107A7, Status::Mapped("\u{1DF08}")),
    (0x107A8, Status::Mapped("\u{27D}")),
    (0x107A9, Status::Mapped("\u{27E}")),
    (0x107AA, Status::Mapped("\u{280}")),
    (0x107AB, Status::Mapped("\u{2A8}")),
    (0x107AC, Status::Mapped("\u{2A6}")),
    (0x107AD, Status::Mapped("\u{AB67}")),
    (0x107AE, Status::Mapped("\u{2A7}")),
    (0x107AF, Status::Mapped("\u{288}")),
    (0x107B0, Status::Mapped("\u{2C71}")),
    (0x107B1, Status::Disallowed),
    (0x107B2, Status::Mapped("\u{28F}")),
    (0x107B3, Status::Mapped("\u{2A1}")),
    (0x107B4, Status::Mapped("\u{2A2}")),
    (0x107B5, Status::Mapped("\u{298}")),
    (0x107B6, Status::Mapped("\u{1C0}")),
    (0x107B7, Status::Mapped("\u{1C1}")),
    (0x107B8, Status::Mapped("\u{1C2}")),
    (0x107B9, Status::Mapped("\u{1DF0A}")),
    (0x107BA, Status::Mapped("\u{1DF1E}")),
    (0x107BB, Status::Disallowed),
    (0x10800, Status::Valid),
    (0x10806, Status::Disallowed),
    (0x10808, Status::Valid),
    (0x10809, Status::Disallowed),
    (0x1080A, Status::Valid),
    (0x10836, Status::Disallowed),
    (0x10837, Status::Valid),
    (0x10839, Status::Disallowed),
    (0x1083C, Status::Valid),
    (0x1083D, Status::Disallowed),
    (0x1083F, Status::Valid),
    (0x10856, Status::Disallowed),
    (0x10857, Status::Valid),
    (0x1089F, Status::Disallowed),
    (0x108A7, Status::Valid),
    (0x108B0, Status::Disallowed),
    (0x108E0, Status::Valid),
    (0x108F3, Status::Disallowed),
    (0x108F4, Status::Valid),
    (0x108F6, Status::Disallowed),
    (0x108FB, Status::Valid),
    (0x1091C, Status::Disallowed),
    (0x1091F, Status::Valid),
    (0x1093A, Status::Disallowed),
    (0x1093F, Status::Valid),
    (0x1095A, Status::Disallowed),
    (0x10980, Status::Valid),
    (0x109B8, Status::Disallowed),
    (0x109BC, Status::Valid),
    (0x109D0, Status::Disallowed),
    (0x109D2, Status::Valid),
    (0x10A04, Status::Disallowed),
    (0x10A05, Status::Valid),
    (0x10A07, Status::Disallowed),
    (0x10A0C, Status::Valid),
    (0x10A14, Status::Disallowed),
    (0x10A15, Status::Valid),
    (0x10A18, Status::Disallowed),
    (0x10A19, Status::Valid),
    (0x10A36, Status::Disallowed),
    (0x10A38, Status::Valid),
    (0x10A3B, Status::Disallowed),
    (0x10A3F, Status::Valid),
    (0x10A49, Status::Disallowed),
    (0x10A50, Status::Valid),
    (0x10A59, Status::Disallowed),
    (0x10A60, Status::Valid),
    (0x10AA0, Status::Disallowed),
    (0x10AC0, Status::Valid),
    (0x10AE7, Status::Disallowed),
    (0x10AEB, Status::Valid),
    (0x10AF7, Status::Disallowed),
    (0x10B00, Status::Valid),
    (0x10B36, Status::Disallowed),
    (0x10B39, Status::Valid),
    (0x10B56, Status::Disallowed),
    (0x10B58, Status::Valid),
    (0x10B73, Status::Disallowed),
    (0x10B78, Status::Valid),
    (0x10B92, Status::Disallowed),
    (0x10B99, Status::Valid),
    (0x10B9D, Status::Disallowed),
    (0x10BA9, Status::Valid),
    (0x10BB0, Status::Disallowed),
    (0x10C00, Status::Valid),
    (0x10C49, Status::Disallowed),
    (0x10C80, Status::Mapped("\u{10CC0}")),
    (0x10C81, Status::Mapped("\u{10CC1}")),
    (0x10C82, Status::Mapped("\u{10CC2}")),
    (0x10C83, Status::Mapped("\u{10CC3}")),
    (0x10C84, Status::Mapped("\u{10CC4}")),
    (0x10C85, Status::Mapped("\u{10CC5}")),
    (0x10C86, Status::Mapped("\u{10CC6}")),
    (0x10C87, Status::Mapped("\u{10CC7}")),
    (0x10C88, Status::Mapped("\u{10CC8}")),
    (0x10C89, Status::Mapped("\u{10CC9}")),
    (0x10C8A, Status::Mapped("\u{10CCA}")),
    (0x10C8B, Status::Mapped("\u{10CCB}")),
    (0x10C8C, Status::Mapped("\u{10CCC}")),
    (0x10C8D, Status::Mapped("\u{10CCD}")),
    (0x10C8E, Status::Mapped("\u{10CCE}")),
    (0x10C8F, Status::Mapped("\u{10CCF}")),
    (0x10C90, Status::Mapped("\u{10CD0}")),
    (0x10C91, Status::Mapped("\u{10CD1}")),
    (0x10C92, Status::Mapped("\u{10CD2}")),
    (0x10C93, Status::Mapped("\u{10CD3}")),
    (0x10C94, Status::Mapped("\u{10CD4}")),
    (0x10C95, Status::Mapped("\u{10CD5}")),
    (0x10C96, Status::Mapped("\u{10CD6}")),
    (0x10C97, Status::Mapped("\u{10CD7}")),
    (0x10C98, Status::Mapped("\u{10CD8}")),
    (0x10C99, Status::Mapped("\u{10CD9}")),
    (0x10C9A, Status::Mapped("\u{10CDA}")),
    (0x10C9B, Status::Mapped("\u{10CDB}")),
    (0x10C9C, Status::Mapped("\u{10CDC}")),
    (0x10C9D, Status::Mapped("\u{10CDD}")),
    (0x10C9E, Status::Mapped("\u{10CDE}")),
    (0x10C9F, Status::Mapped("\u{10CDF}")),
    (0x10CA0, Status::Mapped("\u{10CE0}")),
    (0x10CA1, Status::Mapped("\u{10CE1}")),
    (0x10CA2, Status::Mapped("\u{10CE2}")),
    (0x10CA3, Status::Mapped("\u{10CE3}")),
    (0x10CA4, Status::Mapped("\u{10CE4}")),
    (0x10CA5, Status::Mapped("\u{10CE5}")),
    (0x10CA6, Status::Mapped("\u{10CE6}")),
    (0x10CA7, Status::Mapped("\u{10CE7}")),
    (0x10CA8, Status::Mapped("\u{10CE8}")),
    (0x10CA9, Status::Mapped("\u{10CE9}")),
    (0x10CAA, Status::Mapped("\u{10CEA}")),
    (0x10CAB, Status::Mapped("\u{10CEB}")),
    (0x10CAC, Status::Mapped("\u{10CEC}")),
    (0x10CAD, Status::Mapped("\u{10CED}")),
    (0x10CAE, Status::Mapped("\u{10CEE}")),
    (0x10CAF, Status::Mapped("\u{10CEF}")),
    (0x10CB0, Status::Mapped("\u{10CF0}")),
    (0x10CB1, Status::Mapped("\u{10CF1}")),
    (0x10CB2, Status::Mapped("\u{10CF2}")),
    (0x10CB3, Status::Disallowed),
    (0x10CC0, Status::Valid),
    (0x10CF3, Status::Disallowed),
    (0x10CFA, Status::Valid),
    (0x10D28, Status::Disallowed),
    (0x10D30, Status::Valid),
    (0x10D3A, Status::Disallowed),
    (0x10D40, Status::Valid),
    (0x10D50, Status::Mapped("\u{10D70}")),
    (0x10D51, Status::Mapped("\u{10D71}")),
    (0x10D52, Status::Mapped("\u{10D72}")),
    (0x10D53, Status::Mapped("\u{10D73}")),
    (0x10D54, Status::Mapped("\u{10D74}")),
    (0x10D55, Status::Mapped("\u{10D75}")),
    (0x10D56, Status::Mapped("\u{10D76}")),
    (0x10D57, Status::Mapped("\u{10D77}")),
    (0x10D58, Status::Mapped("\u{10D78}")),
    (0x10D59, Status::Mapped("\u{10D79}")),
    (0x10D5A, Status::Mapped("\u{10D7A}")),
    (0x10D5B, Status::Mapped("\u{10D7B}")),
    (0x10D5C, Status::Mapped("\u{10D7C}")),
    (0x10D5D, Status::Mapped("\u{10D7D}")),
    (0x10D5E, Status::Mapped("\u{10D7E}")),
    (0x10D5F, Status::Mapped("\u{10D7F}")),
    (0x10D60, Status::Mapped("\u{10D80}")),
    (0x10D61, Status::Mapped("\u{10D81}")),
    (0x10D62, Status::Mapped("\u{10D82}")),
    (0x10D63, Status::Mapped("\u{10D83}")),
    (0x10D64, Status::Mapped("\u{10D84}")),
    (0x10D65, Status::Mapped("\u{10D85}")),
    (0x10D66, Status::Disallowed),
    (0x10D69, Status::Valid),
    (0x10D86, Status::Disallowed),
    (0x10D8E, Status::Valid),
    (0x10D90, Status::Disallowed),
    (0x10E60, Status::Valid),
    (0x10E7F, Status::Disallowed),
    (0x10E80, Status::Valid),
    (0x10EAA, Status::Disallowed),
    (0x10EAB, Status::Valid),
    (0x10EAE, Status::Disallowed),
    (0x10EB0, Status::Valid),
    (0x10EB2, Status::Disallowed),
    (0x10EC2, Status::Valid),
    (0x10EC8, Status::Disallowed),
    (0x10ED0, Status::Valid),
    (0x10ED9, Status::Disallowed),
    (0x10EFA, Status::Valid),
    (0x10F28, Status::Disallowed),
    (0x10F30, Status::Valid),
    (0x10F5A, Status::Disallowed),
    (0x10F70, Status::Valid),
    (0x10F8A, Status::Disallowed),
    (0x10FB0, Status::Valid),
    (0x10FCC, Status::Disallowed),
    (0x10FE0, Status::Valid),
    (0x10FF7, Status::Disallowed),
    (0x11000, Status::Valid),
    (0x1104E, Status::Disallowed),
    (0x11052, Status::Valid),
    (0x11076, Status::Disallowed),
    (0x1107F, Status::Valid),
    (0x110BD, Status::Disallowed),
    (0x110BE, Status::Valid),
    (0x110C3, Status::Disallowed),
    (0x110D0, Status::Valid),
    (0x110E9, Status::Disallowed),
    (0x110F0, Status::Valid),
    (0x110FA, Status::Disallowed),
    (0x11100, Status::Valid),
    (0x11135, Status::Disallowed),
    (0x11136, Status::Valid),
    (0x11148, Status::Disallowed),
    (0x11150, Status::Valid),
    (0x11177, Status::Disallowed),
    (0x11180, Status::Valid),
    (0x111E0, Status::Disallowed),
    (0x111E1, Status::Valid),
    (0x111F5, Status::Disallowed),
    (0x11200, Status::Valid),
    (0x11212, Status::Disallowed),
    (0x11213, Status::Valid),
    (0x11242, Status::Disallowed),
    (0x11280, Status::Valid),
    (0x11287, Status::Disallowed),
    (0x11288, Status::Valid),
    (0x11289, Status::Disallowed),
    (0x1128A, Status::Valid),
    (0x1128E, Status::Disallowed),
    (0x1128F, Status::Valid),
    (0x1129E, Status::Disallowed),
    (0x1129F, Status::Valid),
    (0x112AA, Status::Disallowed),
    (0x112B0, Status::Valid),
    (0x112EB, Status::Disallowed),
    (0x112F0, Status::Valid),
    (0x112FA, Status::Disallowed),
    (0x11300, Status::Valid),
    (0x11304, Status::Disallowed),
    (0x11305, Status::Valid),
    (0x1130D, Status::Disallowed),
    (0x1130F, Status::Valid),
    (0x11311, Status::Disallowed),
    (0x11313, Status::Valid),
    (0x11329, Status::Disallowed),
    (0x1132A, Status::Valid),
    (0x11331, Status::Disallowed),
    (0x11332, Status::Valid),
    (0x11334, Status::Disallowed),
    (0x11335, Status::Valid),
    (0x1133A, Status::Disallowed),
    (0x1133B, Status::Valid),
    (0x11345, Status::Disallowed),
    (0x11347, Status::Valid),
    (0x11349, Status::Disallowed),
    (0x1134B, Status::Valid),
    (0x1134E, Status::Disallowed),
    (0x11350, Status::Valid),
    (0x11351, Status::Disallowed),
    (0x11357, Status::Valid),
    (0x11358, Status::Disallowed),
    (0x1135D, Status::Valid),
    (0x11364, Status::Disallowed),
    (0x11366, Status::Valid),
    (0x1136D, Status::Disallowed),
    (0x11370, Status::Valid),
    (0x11375, Status::Disallowed),
    (0x11380, Status::Valid),
    (0x1138A, Status::Disallowed),
    (0x1138B, Status::Valid),
    (0x1138C, Status::Disallowed),
    (0x1138E, Status::Valid),
    (0x1138F, Status::Disallowed),
    (0x11390, Status::Valid),
    (0x113B6, Status::Disallowed),
    (0x113B7, Status::Valid),
    (0x113C1, Status::Disallowed),
    (0x113C2, Status::Valid),
    (0x113C3, Status::Disallowed),
    (0x113C5, Status::Valid),
    (0x113C6, Status::Disallowed),
    (0x113C7, Status::Valid),
    (0x113CB, Status::Disallowed),
    (0x113CC, Status::Valid),
    (0x113D6, Status::Disallowed),
    (0x113D7, Status::Valid),
    (0x113D9, Status::Disallowed),
    (0x113E1, Status::Valid),
    (0x113E3, Status::Disallowed),
    (0x11400, Status::Valid),
    (0x1145C, Status::Disallowed),
    (0x1145D, Status::Valid),
    (0x11462, Status::Disallowed),
    (0x11480, Status::Valid),
    (0x114C8, Status::Disallowed),
    (0x114D0, Status::Valid),
    (0x114DA, Status::Disallowed),
    (0x11580, Status::Valid),
    (0x115B6, Status::Disallowed),
    (0x115B8, Status::Valid),
    (0x115DE, Status::Disallowed),
    (0x11600, Status::Valid),
    (0x11645, Status::Disallowed),
    (0x11650, Status::Valid),
    (0x1165A, Status::Disallowed),
    (0x11660, Status::Valid),
    (0x1166D, Status::Disallowed),
    (0x11680, Status::Valid),
    (0x116BA, Status::Disallowed),
    (0x116C0, Status::Valid),
    (0x116CA, Status::Disallowed),
    (0x116D0, Status::Valid),
    (0x116E4, Status::Disallowed),
    (0x11700, Status::Valid),
    (0x1171B, Status::Disallowed),
    (0x1171D, Status::Valid),
    (0x1172C, Status::Disallowed),
    (0x11730, Status::Valid),
    (0x11747, Status::Disallowed),
    (0x11800, Status::Valid),
    (0x1183C, Status::Disallowed),
    (0x118A0, Status::Mapped("\u{118C0}")),
    (0x118A1, Status::Mapped("\u{118C1}")),
    (0x118A2, Status::Mapped("\u{118C2}")),
    (0x118A3, Status::Mapped("\u{118C3}")),
    (0x118A4, Status::Mapped("\u{118C4}")),
    (0x118A5, Status::Mapped("\u{118C5}")),
    (0x118A6, Status::Mapped("\u{118C6}")),
    (0x118A7, Status::Mapped("\u{118C7}")),
    (0x118A8, Status::Mapped("\u{118C8}")),
    (0x118A9, Status::Mapped("\u{118C9}")),
    (0x118AA, Status::Mapped("\u{118CA}")),
    (0x118AB, Status::Mapped("\u{118CB}")),
    (0x118AC, Status::Mapped("\u{118CC}")),
    (0x118AD, Status::Mapped("\u{118CD}")),
    (0x118AE, Status::Mapped("\u{118CE}")),
    (0x118AF, Status::Mapped("\u{118CF}")),
    (0x118B0, Status::Mapped("\u{118D0}")),
    (0x118B1, Status::Mapped("\u{118D1}")),
    (0x118B2, Status::Mapped("\u{118D2}")),
    (0x118B3, Status::Mapped("\u{118D3}")),
    (0x118B4, Status::Mapped("\u{118D4}")),
    (0x118B5, Status::Mapped("\u{118D5}")),
    (0x118B6, Status::Mapped("\u{118D6}")),
    (0x118B7, Status::Mapped("\u{118D7}")),
    (0x118B8, Status::Mapped("\u{118D8}")),
    (0x118B9, Status::Mapped("\u{118D9}")),
    (0x118BA, Status::Mapped("\u{118DA}")),
    (0x118BB, Status::Mapped("\u{118DB}")),
    (0x118BC, Status::Mapped("\u{118DC}")),
    (0x118BD, Status::Mapped("\u{118DD}")),
    (0x118BE, Status::Mapped("\u{118DE}")),
    (0x118BF, Status::Mapped("\u{118DF}")),
    (0x118C0, Status::Valid),
    (0x118F3, Status::Disallowed),
    (0x118FF, Status::Valid),
    (0x11907, Status::Disallowed),
    (0x11909, Status::Valid),
    (0x1190A, Status::Disallowed),
    (0x1190C, Status::Valid),
    (0x11914, Status::Disallowed),
    (0x11915, Status::Valid),
    (0x11917, Status::Disallowed),
    (0x11918, Status::Valid),
    (0x11936, Status::Disallowed),
    (0x11937, Status::Valid),
    (0x11939, Status::Disallowed),
    (0x1193B, Status::Valid),
    (0x11947, Status::Disallowed),
    (0x11950, Status::Valid),
    (0x1195A, Status::Disallowed),
    (0x119A0, Status::Valid),
    (0x119A8, Status::Disallowed),
    (0x119AA, Status::Valid),
    (0x119D8, Status::Disallowed),
    (0x119DA, Status::Valid),
    (0x119E5, Status::Disallowed),
    (0x11A00, Status::Valid),
    (0x11A48, Status::Disallowed),
    (0x11A50, Status::Valid),
    (0x11AA3, Status::Disallowed),
    (0x11AB0, Status::Valid),
    (0x11AF9, Status::Disallowed),
    (0x11B00, Status::Valid),
    (0x11B0A, Status::Disallowed),
    (0x11B60, Status::Valid),
    (0x11B68, Status::Disallowed),
    (0x11BC0, Status::Valid),
    (0x11BE2, Status::Disallowed),
    (0x11BF0, Status::Valid),
    (0x11BFA, Status::Disallowed),
    (0x11C00, Status::Valid),
    (0x11C09, Status::Disallowed),
    (0x11C0A, Status::Valid),
    (0x11C37, Status::Disallowed),
    (0x11C38, Status::Valid),
    (0x11C46, Status::Disallowed),
    (0x11C50, Status::Valid),
    (0x11C6D, Status::Disallowed),
    (0x11C70, Status::Valid),
    (0x11C90, Status::Disallowed),
    (0x11C92, Status::Valid),
    (0x11CA8, Status::Disallowed),
    (0x11CA9, Status::Valid),
    (0x11CB7, Status::Disallowed),
    (0x11D00, Status::Valid),
    (0x11D07, Status::Disallowed),
    (0x11D08, Status::Valid),
    (0x11D0A, Status::Disallowed),
    (0x11D0B, Status::Valid),
    (0x11D37, Status::Disallowed),
    (0x11D3A, Status::Valid),
    (0x11D3B, Status::Disallowed),
    (0x11D3C, Status::Valid),
    (0x11D3E, Status::Disallowed),
    (0x11D3F, Status::Valid),
    (0x11D48, Status::Disallowed),
    (0x11D50, Status::Valid),
    (0x11D5A, Status::Disallowed),
    (0x11D60, Status::Valid),
    (0x11D66, Status::Disallowed),
    (0x11D67, Status::Valid),
    (0x11D69, Status::Disallowed),
    (0x11D6A, Status::Valid),
    (0x11D8F, Status::Disallowed),
    (0x11D90, Status::Valid),
    (0x11D92, Status::Disallowed),
    (0x11D93, Status::Valid),
    (0x11D99, Status::Disallowed),
    (0x11DA0, Status::Valid),
    (0x11DAA, Status::Disallowed),
    (0x11DB0, Status::Valid),
    (0x11DDC, Status::Disallowed),
    (0x11DE0, Status::Valid),
    (0x11DEA, Status::Disallowed),
    (0x11EE0, Status::Valid),
    (0x11EF9, Status::Disallowed),
    (0x11F00, Status::Valid),
    (0x11F11, Status::Disallowed),
    (0x11F12, Status::Valid),
    (0x11F3B, Status::Disallowed),
    (0x11F3E, Status::Valid),
    (0x11F5B, Status::Disallowed),
    (0x11FB0, Status::Valid),
    (0x11FB1, Status::Disallowed),
    (0x11FC0, Status::Valid),
    (0x11FF2, Status::Disallowed),
    (0x11FFF, Status::Valid),
    (0x1239A, Status::Disallowed),
    (0x12400, Status::Valid),
    (0x1246F, Status::Disallowed),
    (0x12470, Status::Valid),
    (0x12475, Status::Disallowed),
    (0x12480, Status::Valid),
    (0x12544, Status::Disallowed),
    (0x12F90, Status::Valid),
    (0x12FF3, Status::Disallowed),
    (0x13000, Status::Valid),
    (0x13430, Status::Disallowed),
    (0x13440, Status::Valid),
    (0x13456, Status::Disallowed),
    (0x13460, Status::Valid),
    (0x143FB, Status::Disallowed),
    (0x14400, Status::Valid),
    (0x14647, Status::Disallowed),
    (0x16100, Status::Valid),
    (0x1613A, Status::Disallowed),
    (0x16800, Status::Valid),
    (0x16A39, Status::Disallowed),
    (0x16A40, Status::Valid),
    (0x16A5F, Status::Disallowed),
    (0x16A60, Status::Valid),
    (0x16A6A, Status::Disallowed),
    (0x16A6E, Status::Valid),
    (0x16ABF, Status::Disallowed),
    (0x16AC0, Status::Valid),
    (0x16ACA, Status::Disallowed),
    (0x16AD0, Status::Valid),
    (0x16AEE, Status::Disallowed),
    (0x16AF0, Status::Valid),
    (0x16AF6, Status::Disallowed),
    (0x16B00, Status::Valid),
    (0x16B46, Status::Disallowed),
    (0x16B50, Status::Valid),
    (0x16B5A, Status::Disallowed),
    (0x16B5B, Status::Valid),
    (0x16B62, Status::Disallowed),
    (0x16B63, Status::Valid),
    (0x16B78, Status::Disallowed),
    (0x16B7D, Status::Valid),
    (0x16B90, Status::Disallowed),
    (0x16D40, Status::Valid),
    (0x16D7A, Status::Disallowed),
    (0x16E40, Status::Mapped("\u{16E60}")),
    (0x16E41, Status::Mapped("\u{16E61}")),
    (0x16E42, Status::Mapped("\u{16E62}")),
    (0x16E43, Status::Mapped("\u{16E63}")),
    (0x16E44, Status::Mapped("\u{16E64}")),
    (0x16E45, Status::Mapped("\u{16E65}")),
    (0x16E46, Status::Mapped("\u{16E66}")),
    (0x16E47, Status::Mapped("\u{16E67}")),
    (0x16E48, Status::Mapped("\u{16E68}")),
    (0x16E49, Status::Mapped("\u{16E69}")),
    (0x16E4A, Status::Mapped("\u{16E6A}")),
    (0x16E4B, Status::Mapped("\u{16E6B}")),
    (0x16E4C, Status::Mapped("\u{16E6C}")),
    (0x16E4D, Status::Mapped("\u{16E6D}")),
    (0x16E4E, Status::Mapped("\u{16E6E}")),
    (0x16E4F, Status::Mapped("\u{16E6F}")),
    (0x16E50, Status::Mapped("\u{16E70}")),
    (0x16E51, Status::Mapped("\u{16E71}")),
    (0x16E52, Status::Mapped("\u{16E72}")),
    (0x16E53, Status::Mapped("\u{16E73}")),
    (0x16E54, Status::Mapped("\u{16E74}")),
    (0x16E55, Status::Mapped("\u{16E75}")),
    (0x16E56, Status::Mapped("\u{16E76}")),
    (0x16E57, Status::Mapped("\u{16E77}")),
    (0x16E58, Status::Mapped("\u{16E78}")),
    (0x16E59, Status::Mapped("\u{16E79}")),
    (0x16E5A, Status::Mapped("\u{16E7A}")),
    (0x16E5B, Status::Mapped("\u{16E7B}")),
    (0x16E5C, Status::Mapped("\u{16E7C}")),
    (0x16E5D, Status::Mapped("\u{16E7D}")),
    (0x16E5E, Status::Mapped("\u{16E7E}")),
    (0x16E5F, Status::Mapped("\u{16E7F}")),
    (0x16E60, Status::Valid),
    (0x16E9B, Status::Disallowed),
    (0x16EA0, Status::Mapped("\u{16EBB}")),
    (0x16EA1, Status::Mapped("\u{16EBC}")),
    (0x16EA2, Status::Mapped("\u{16EBD}")),
    (0x16EA3, Status::Mapped("\u{16EBE}")),
    (0x16EA4, Status::Mapped("\u{16EBF}")),
    (0x16EA5, Status::Mapped("\u{16EC0}")),
    (0x16EA6, Status::Mapped("\u{16EC1}")),
    (0x16EA7, Status::Mapped("\u{16EC2}")),
    (0x16EA8, Status::Mapped("\u{16EC3}")),
    (0x16EA9, Status::Mapped("\u{16EC4}")),
    (0x16EAA, Status::Mapped("\u{16EC5}")),
    (0x16EAB, Status::Mapped("\u{16EC6}")),
    (0x16EAC, Status::Mapped("\u{16EC7}")),
    (0x16EAD, Status::Mapped("\u{16EC8}")),
    (0x16EAE, Status::Mapped("\u{16EC9}")),
    (0x16EAF, Status::Mapped("\u{16ECA}")),
    (0x16EB0, Status::Mapped("\u{16ECB}")),
    (0x16EB1, Status::Mapped("\u{16ECC}")),
    (0x16EB2, Status::Mapped("\u{16ECD}")),
    (0x16EB3, Status::Mapped("\u{16ECE}")),
    (0x16EB4, Status::Mapped("\u{16ECF}")),
    (0x16EB5, Status::Mapped("\u{16ED0}")),
    (0x16EB6, Status::Mapped("\u{16ED1}")),
    (0x16EB7, Status::Mapped("\u{16ED2}")),
    (0x16EB8, Status::Mapped("\u{16ED3}")),
    (0x16EB9, Status::Disallowed),
    (0x16EBB, Status::Valid),
    (0x16ED4, Status::Disallowed),
    (0x16F00, Status::Valid),
    (0x16F4B, Status::Disallowed),
    (0x16F4F, Status::Valid),
    (0x16F88, Status::Disallowed),
    (0x16F8F, Status::Valid),
    (0x16FA0, Status::Disallowed),
    (0x16FE0, Status::Valid),
    (0x16FE5, Status::Disallowed),
    (0x16FF0, Status::Valid),
    (0x16FF7, Status::Disallowed),
    (0x17000, Status::Valid),
    (0x18CD6, Status::Disallowed),
    (0x18CFF, Status::Valid),
    (0x18D1F, Status::Disallowed),
    (0x18D80, Status::Valid),
    (0x18DF3, Status::Disallowed),
    (0x1AFF0, Status::Valid),
    (0x1AFF4, Status::Disallowed),
    (0x1AFF5, Status::Valid),
    (0x1AFFC, Status::Disallowed),
    (0x1AFFD, Status::Valid),
    (0x1AFFF, Status::Disallowed),
    (0x1B000, Status::Valid),
    (0x1B123, Status::Disallowed),
    (0x1B132, Status::Valid),
    (0x1B133, Status::Disallowed),
    (0x1B150, Status::Valid),
    (0x1B153, Status::Disallowed),
    (0x1B155, Status::Valid),
    (0x1B156, Status::Disallowed),
    (0x1B164, Status::Valid),
    (0x1B168, Status::Disallowed),
    (0x1B170, Status::Valid),
    (0x1B2FC, Status::Disallowed),
    (0x1BC00, Status::Valid),
    (0x1BC6B, Status::Disallowed),
    (0x1BC70, Status::Valid),
    (0x1BC7D, Status::Disallowed),
    (0x1BC80, Status::Valid),
    (0x1BC89, Status::Disallowed),
    (0x1BC90, Status::Valid),
    (0x1BC9A, Status::Disallowed),
    (0x1BC9C, Status::Valid),
    (0x1BCA0, Status::Ignored),
    (0x1BCA4, Status::Disallowed),
    (0x1CC00, Status::Valid),
    (0x1CCD6, Status::Mapped("a")),
    (0x1CCD7, Status::Mapped("b")),
    (0x1CCD8, Status::Mapped("c")),
    (0x1CCD9, Status::Mapped("d")),
    (0x1CCDA, Status::Mapped("e")),
    (0x1CCDB, Status::Mapped("f")),
    (0x1CCDC, Status::Mapped("g")),
    (0x1CCDD, Status::Mapped("h")),
    (0x1CCDE, Status::Mapped("i")),
    (0x1CCDF, Status::Mapped("j")),
    (0x1CCE0, Status::Mapped("k")),
    (0x1CCE1, Status::Mapped("l")),
    (0x1CCE2, Status::Mapped("m")),
    (0x1CCE3, Status::Mapped("n")),
    (0x1CCE4, Status::Mapped("o")),
    (0x1CCE5, Status::Mapped("p")),
    (0x1CCE6, Status::Mapped("q")),
    (0x1CCE7, Status::Mapped("r")),
    (0x1CCE8, Status::Mapped("s")),
    (0x1CCE9, Status::Mapped("t")),
    (0x1CCEA, Status::Mapped("u")),
    (0x1CCEB, Status::Mapped("v")),
    (0x1CCEC, Status::Mapped("w")),
    (0x1CCED, Status::Mapped("x")),
    (0x1CCEE, Status::Mapped("y")),
    (0x1CCEF, Status::Mapped("z")),
    (0x1CCF0, Status::Mapped("0")),
    (0x1CCF1, Status::Mapped("1")),
    (0x1CCF2, Status::Mapped("2")),
    (0x1CCF3, Status::Mapped("3")),
    (0x1CCF4, Status::Mapped("4")),
    (0x1CCF5, Status::Mapped("5")),
    (0x1CCF6, Status::Mapped("6")),
    (0x1CCF7, Status::Mapped("7")),
    (0x1CCF8, Status::Mapped("8")),
    (0x1CCF9, Status::Mapped("9")),
    (0x1CCFA, Status::Valid),
    (0x1CCFD, Status::Disallowed),
    (0x1CD00, Status::Valid),
    (0x1CEB4, Status::Disallowed),
    (0x1CEBA, Status::Valid),
    (0x1CED1, Status::Disallowed),
    (0x1CEE0, Status::Valid),
    (0x1CEF1, Status::Disallowed),
    (0x1CF00, Status::Valid),
    (0x1CF2E, Status::Disallowed),
    (0x1CF30, Status::Valid),
    (0x1CF47, Status::Disallowed),
    (0x1CF50, Status::Valid),
    (0x1CFC4, Status::Disallowed),
    (0x1D000, Status::Valid),
    (0x1D0F6, Status::Disallowed),
    (0x1D100, Status::Valid),
    (0x1D127, Status::Disallowed),
    (0x1D129, Status::Valid),
    (0x1D15E, Status::Mapped("\u{1D157}\u{1D165}")),
    (0x1D15F, Status::Mapped("\u{1D158}\u{1D165}")),
    (0x1D160, Status::Mapped("\u{1D158}\u{1D165}\u{1D16E}")),
    (0x1D161, Status::Mapped("\u{1D158}\u{1D165}\u{1D16F}")),
    (0x1D162, Status::Mapped("\u{1D158}\u{1D165}\u{1D170}")),
    (0x1D163, Status::Mapped("\u{1D158}\u{1D165}\u{1D171}")),
    (0x1D164, Status::Mapped("\u{1D158}\u{1D165}\u{1D172}")),
    (0x1D165, Status::Valid),
    (0x1D173, Status::Ignored),
    (0x1D17B, Status::Valid),
    (0x1D1BB, Status::Mapped("\u{1D1B9}\u{1D165}")),
    (0x1D1BC, Status::Mapped("\u{1D1BA}\u{1D165}")),
    (0x1D1BD, Status::Mapped("\u{1D1B9}\u{1D165}\u{1D16E}")),
    (0x1D1BE, Status::Mapped("\u{1D1BA}\u{1D165}\u{1D16E}")),
    (0x1D1BF, Status::Mapped("\u{1D1B9}\u{1D165}\u{1D16F}")),
    (0x1D1C0, Status::Mapped("\u{1D1BA}\u{1D165}\u{1D16F}")),
    (0x1D1C1, Status::Valid),
    (0x1D1EB, Status::Disallowed),
    (0x1D200, Status::Valid),
    (0x1D246, Status::Disallowed),
    (0x1D2C0, Status::Valid),
    (0x1D2D4, Status::Disallowed),
    (0x1D2E0, Status::Valid),
    (0x1D2F4, Status::Disallowed),
    (0x1D300, Status::Valid),
    (0x1D357, Status::Disallowed),
    (0x1D360, Status::Valid),
    (0x1D379, Status::Disallowed),
    (0x1D400, Status::Mapped("a")),
    (0x1D401, Status::Mapped("b")),
    (0x1D402, Status::Mapped("c")),
    (0x1D403, Status::Mapped("d")),
    (0x1D404, Status::Mapped("e")),
    (0x1D405, Status::Mapped("f")),
    (0x1D406, Status::Mapped("g")),
    (0x1D407, Status::Mapped("h")),
    (0x1D408, Status::Mapped("i")),
    (0x1D409, Status::Mapped("j")),
    (0x1D40A, Status::Mapped("k")),
    (0x1D40B, Status::Mapped("l")),
    (0x1D40C, Status::Mapped("m")),
    (0x1D40D, Status::Mapped("n")),
    (0x1D40E, Status::Mapped("o")),
    (0x1D40F, Status::Mapped("p")),
    (0x1D410, Status::Mapped("q")),
    (0x1D411, Status::Mapped("r")),
    (0x1D412, Status::Mapped("s")),
    (0x1D413, Status::Mapped("t")),
    (0x1D414, Status::Mapped("u")),
    (0x1D415, Status::Mapped("v")),
    (0x1D416, Status::Mapped("w")),
    (0x1D417, Status::Mapped("x")),
    (0x1D418, Status::Mapped("y")),
    (0x1D419, Status::Mapped("z")),
    (0x1D41A, Status::Mapped("a")),
    (0x1D41B, Status::Mapped("b")),
    (0x1D41C, Status::Mapped("c")),
    (0x1D41D, Status::Mapped("d")),
    (0x1D41E, Status::Mapped("e")),
    (0x1D41F, Status::Mapped("f")),
    (0x1D420, Status::Mapped("g")),
    (0x1D421, Status::Mapped("h")),
    (0x1D422, Status::Mapped("i")),
    (0x1D423, Status::Mapped("j")),
    (0x1D424, Status::Mapped("k")),
    (0x1D425, Status::Mapped("l")),
    (0x1D426, Status::Mapped("m")),
    (0x1D427, Status::Mapped("n")),
    (0x1D428, Status::Mapped("o")),
    (0x1D429, Status::Mapped("p")),
    (0x1D42A, Status::Mapped("q")),
    (0x1D42B, Status::Mapped("r")),
    (0x1D42C, Status::Mapped("s")),
    (0x1D42D, Status::Mapped("t")),
    (0x1D42E, Status::Mapped("u")),
    (0x1D42F, Status::Mapped("v")),
    (0x1D430, Status::Mapped("w")),
    (0x1D431, Status::Mapped("x")),
    (0x1D432, Status::Mapped("y")),
    (0x1D433, Status::Mapped("z")),
    (0x1D434, Status::Mapped("a")),
    (0x1D435, Status::Mapped("b")),
    (0x1D436, Status::Mapped("c")),
    (0x1D437, Status::Mapped("d")),
    (0x1D438, Status::Mapped("e")),
    (0x1D439, Status::Mapped("f")),
    (0x1D43A, Status::Mapped("g")),
    (0x1D43B, Status::Mapped("h")),
    (0x1D43C, Status::Mapped("i")),
    (0x1D43D, Status::Mapped("j")),
    (0x1D43E, Status::Mapped("k")),
    (0x1D43F, Status::Mapped("l")),
    (0x1D440, Status::Mapped("m")),
    (0x1D441, Status::Mapped("n")),
    (0x1D442, Status::Mapped("o")),
    (0x1D443, Status::Mapped("p")),
    (0x1D444, Status::Mapped("q")),
    (0x1D445, Status::Mapped("r")),
    (0x1D446, Status::Mapped("s")),
    (0x1D447, Status::Mapped("t")),
    (0x1D448, Status::Mapped("u")),
    (0x1D449, Status::Mapped("v")),
    (0x1D44A, Status::Mapped("w")),
    (0x1D44B, Status::Mapped("x")),
    (0x1D44C, Status::Mapped("y")),
    (0x1D44D, Status::Mapped("z")),
    (0x1D44E, Status::Mapped("a")),
    (0x1D44F, Status::Mapped("b")),
    (0x1D450, Status::Mapped("c")),
    (0x1D451, Status::Mapped("d")),
    (0x1D452, Status::Mapped("e")),
    (0x1D453, Status::Mapped("f")),
    (0x1D454, Status::Mapped("g")),
    (0x1D455, Status::Disallowed),
    (0x1D456, Status::Mapped("i")),
    (0x1D457, Status::Mapped("j")),
    (0x1D458, Status::Mapped("k")),
    (0x1D459, Status::Mapped("l")),
    (0x1D45A, Status::Mapped("m")),
    (0x1D45B, Status::Mapped("n")),
    (0x1D45C, Status::Mapped("o")),
    (0x1D45D, Status::Mapped("p")),
    (0x1D45E, Status::Mapped("q")),
    (0x1D45F, Status::Mapped("r")),
    (0x1D460, Status::Mapped("s")),
    (0x1D461, Status::Mapped("t")),
    (0x1D462, Status::Mapped("u")),
    (0x1D463, Status::Mapped("v")),
    (0x1D464, Status::Mapped("w")),
    (0x1D465, Status::Mapped("x")),
    (0x1D466, Status::Mapped("y")),
    (0x1D467, Status::Mapped("z")),
    (0x1D468, Status::Mapped("a")),
    (0x1D469, Status::Mapped("b")),
    (0x1D46A, Status::Mapped("c")),
    (0x1D46B, Status::Mapped("d")),
    (0x1D46C, Status::Mapped("e")),
    (0x1D46D, Status::Mapped("f")),
    (0x1D46E, Status::Mapped("g")),
    (0x1D46F, Status::Mapped("h")),
    (0x1D470, Status::Mapped("i")),
    (0x1D471, Status::Mapped("j")),
    (0x1D472, Status::Mapped("k")),
    (0x1D473, Status::Mapped("l")),
    (0x1D474, Status::Mapped("m")),
    (0x1D475, Status::Mapped("n")),
    (0x1D476, Status::Mapped("o")),
    (0x1D477, Status::Mapped("p")),
    (0x1D478, Status::Mapped("q")),
    (0x1D479, Status::Mapped("r")),
    (0x1D47A, Status::Mapped("s")),
    (0x1D47B, Status::Mapped("t")),
    (0x1D47C, Status::Mapped("u")),
    (0x1D47D, Status::Mapped("v")),
    (0x1D47E, Status::Mapped("w")),
    (0x1D47F, Status::Mapped("x")),
    (0x1D480, Status::Mapped("y")),
    (0x1D481, Status::Mapped("z")),
    (0x1D482, Status::Mapped("a")),
    (0x1D483, Status::Mapped("b")),
    (0x1D484, Status::Mapped("c")),
    (0x1D485, Status::Mapped("d")),
    (0x1D486, Status::Mapped("e")),
    (0x1D487, Status::Mapped("f")),
    (0x1D488, Status::Mapped("g")),
    (0x1D489, Status::Mapped("h")),
    (0x1D48A, Status::Mapped("i")),
    (0x1D48B, Status::Mapped("j")),
    (0x1D48C, Status::Mapped("k")),
    (0x1D48D, Status::Mapped("l")),
    (0x1D48E, Status::Mapped("m")),
    (0x1D48F, Status::Mapped("n")),
    (0x1D490, Status::Mapped("o")),
    (0x1D491, Status::Mapped("p")),
    (0x1D492, Status::Mapped("q")),
    (0x1D493, Status::Mapped("r")),
    (0x1D494, Status::Mapped("s")),
    (0x1D495, Status::Mapped("t")),
    (0x1D496, Status::Mapped("u")),
    (0x1D497, Status::Mapped("v")),
    (0x1D498, Status::Mapped("w")),
    (0x1D499, Status::Mapped("x")),
    (0x1D49A, Status::Mapped("y")),
    (0x1D49B, Status::Mapped("z")),
    (0x1D49C, Status::Mapped("a")),
    (0x1D49D, Status::Disallowed),
    (0x1D49E, Status::Mapped("c")),
    (0x1D49F, Status::Mapped("d")),
    (0x1D4A0, Status::Disallowed),
    (0x1D4A2, Status::Mapped("g")),
    (0x1D4A3, Status::Disallowed),
    (0x1D4A5, Status::Mapped("j")),
    (0x1D4A6, Status::Mapped("k")),
    (0x1D4A7, Status::Disallowed),
    (0x1D4A9, Status::Mapped("n")),
    (0x1D4AA, Status::Mapped("o")),
    (0x1D4AB, Status::Mapped("p")),
    (0x1D4AC, Status::Mapped("q")),
    (0x1D4AD, Status::Disallowed),
    (0x1D4AE, Status::Mapped("s")),
    (0x1D4AF, Status::Mapped("t")),
    (0x1D4B0, Status::Mapped("u")),
    (0x1D4B1, Status::Mapped("v")),
    (0x1D4B2, Status::Mapped("w")),
    (0x1D4B3, Status::Mapped("x")),
    (0x1D4B4, Status::Mapped("y")),
    (0x1D4B5, Status::Mapped("z")),
    (0x1D4B6, Status::Mapped("a")),
    (0x1D4B7, Status::Mapped("b")),
    (0x1D4B8, Status::Mapped("c")),
    (0x1D4B9, Status::Mapped("d")),
    (0x1D4BA, Status::Disallowed),
    (0x1D4BB, Status::Mapped("f")),
    (0x1D4BC, Status::Disallowed),
    (0x1D4BD, Status::Mapped("h")),
    (0x1D4BE, Status::Mapped("i")),
    (0x1D4BF, Status::Mapped("j")),
    (0x1D4C0, Status::Mapped("k")),
    (0x1D4C1, Status::Mapped("l")),
    (0x1D4C2, Status::Mapped("m")),
    (0x1D4C3, Status::Mapped("n")),
    (0x1D4C4, Status::Disallowed),
    (0x1D4C5, Status::Mapped("p")),
    (0x1D4C6, Status::Mapped("q")),
    (0x1D4C7, Status::Mapped("r")),
    (0x1D4C8, Status::Mapped("s")),
    (0x1D4C9, Status::Mapped("t")),
    (0x1D4CA, Status::Mapped("u")),
    (0x1D4CB, Status::Mapped("v")),
    (0x1D4CC, Status::Mapped("w")),
    (0x1D4CD, Status::Mapped("x")),
    (0x1D4CE, Status::Mapped("y")),
    (0x1D4CF, Status::Mapped("z")),
    (0x1D4D0, Status::Mapped("a")),
    (0x1D4D1, Status::Mapped("b")),
    (0x1D4D2, Status::Mapped("c")),
    (0x1D4D3, Status::Mapped("d")),
    (0x1D4D4, Status::Mapped("e")),
    (0x1D4D5, Status::Mapped("f")),
    (0x1D4D6, Status::Mapped("g")),
    (0x1D4D7, Status::Mapped("h")),
    (0x1D4D8, Status::Mapped("i")),
    (0x1D4D9, Status::Mapped("j")),
    (0x1D4DA, Status::Mapped("k")),
    (0x1D4DB, Status::Mapped("l")),
    (0x1D4DC, Status::Mapped("m")),
    (0x1D4DD, Status::Mapped("n")),
    (0x1D4DE, Status::Mapped("o")),
    (0x1D4DF, Status::Mapped("p")),
    (0x1D4E0, Status::Mapped("q")),
    (0x1D4E1, Status::Mapped("r")),
    (0x1D4E2, Status::Mapped("s")),
    (0x1D4E3, Status::Mapped("t")),
    (0x1D4E4, Status::Mapped("u")),
    (0x1D4E5, Status::Mapped("v")),
    (0x1D4E6, Status::Mapped("w")),
    (0x1D4E7, Status::Mapped("x")),
    (0x1D4E8, Status::Mapped("y")),
    (0x1D4E9, Status::Mapped("z")),
    (0x1D4EA, Status::Mapped("a")),
    (0x1D4EB, Status::Mapped("b")),
    (0x1D4EC, Status::Mapped("c")),
    (0x1D4ED, Status::Mapped("d")),
    (0x1D4EE, Status::Mapped("e")),
    (0x1D4EF, Status::Mapped("f")),
    (0x1D4F0, Status::Mapped("g")),
    (0x1D4F1, Status::Mapped("h")),
    (0x1D4F2, Status::Mapped("i")),
    (0x1D4F3, Status::Mapped("j")),
    (0x1D4F4, Status::Mapped("k")),
    (0x1D4F5, Status::Mapped("l")),
    (0x1D4F6, Status::Mapped("m")),
    (0x1D4F7, Status::Mapped("n")),
    (0x1D4F8, Status::Mapped("o")),
    (0x1D4F9, Status::Mapped("p")),
    (0x1D4FA, Status::Mapped("q")),
    (0x1D4FB, Status::Mapped("r")),
    (0x1D4FC, Status::Mapped("s")),
    (0x1D4FD, Status::Mapped("t")),
    (0x1D4FE, Status::Mapped("u")),
    (0x1D4FF, Status::Mapped("v")),
    (0x1D500, Status::Mapped("w")),
    (0x1D501, Status::Mapped("x")),
    (0x1D502, Status::Mapped("y")),
    (0x1D503, Status::Mapped("z")),
    (0x1D504, Status::Mapped("a")),
    (0x1D505, Status::Mapped("b")),
    (0x1D506, Status::Disallowed),
    (0x1D507, Status::Mapped("d")),
    (0x1D508, Status::Mapped("e")),
    (0x1D509, Status::Mapped("f")),
    (0x1D50A, Status::Mapped("g")),
    (0x1D50B, Status::Disallowed),
    (0x1D50D, Status::Mapped("j")),
    (0x1D50E, Status::Mapped("k")),
    (0x1D50F, Status::Mapped("l")),
    (0x1D510, Status::Mapped("m")),
    (0x1D511, Status::Mapped("n")),
    (0x1D512, Status::Mapped("o")),
    (0x1D513, Status::Mapped("p")),
    (0x1D514, Status::Mapped("q")),
    (0x1D515, Status::Disallowed),
    (0x1D516, Status::Mapped("s")),
    (0x1D517, Status::Mapped("t")),
    (0x1D518, Status::Mapped("u")),
    (0x1D519, Status::Mapped("v")),
    (0x1D51A, Status::Mapped("w")),
    (0x1D51B, Status::Mapped("x")),
    (0x1D51C, Status::Mapped("y")),
    (0x1D51D, Status::Disallowed),
    (0x1D51E, Status::Mapped("a")),
    (0x1D51F, Status::Mapped("b")),
    (0x1D520, Status::Mapped("c")),
    (0x1D521, Status::Mapped("d")),
    (0x1D522, Status::Mapped("e")),
    (0x1D523, Status::Mapped("f")),
    (0x1D524, Status::Mapped("g")),
    (0x1D525, Status::Mapped("h")),
    (0x1D526, Status::Mapped("i")),
    (0x1D527, Status::Mapped("j")),
    (0x1D528, Status::Mapped("k")),
    (0x1D529, Status::Mapped("l")),
    (0x1D52A, Status::Mapped("m")),
    (0x1D52B, Status::Mapped("n")),
    (0x1D52C, Status::Mapped("o")),
    (0x1D52D, Status::Mapped("p")),
    (0x1D52E, Status::Mapped("q")),
    (0x1D52F, Status::Mapped("r")),
    (0x1D530, Status::Mapped("s")),
    (0x1D531, Status::Mapped("t")),
    (0x1D532, Status::Mapped("u")),
    (0x1D533, Status::Mapped("v")),
    (0x1D534, Status::Mapped("w")),
    (0x1D535, Status::Mapped("x")),
    (0x1D536, Status::Mapped("y")),
    (0x1D537, Status::Mapped("z")),
    (0x1D538, Status::Mapped("a")),
    (0x1D539, Status::Mapped("b")),
    (0x1D53A, Status::Disallowed),
    (0x1D53B, Status::Mapped("d")),
    (0x1D53C, Status::Mapped("e")),
    (0x1D53D, Status::Mapped("f")),
    (0x1D53E, Status::Mapped("g")),
    (0x1D53F, Status::Disallowed),
    (0x1D540, Status::Mapped("i")),
    (0x1D541, Status::Mapped("j")),
    (0x1D542, Status::Mapped("k")),
    (0x1D543, Status::Mapped("l")),
    (0x1D544, Status::Mapped("m")),
    (0x1D545, Status::Disallowed),
    (0x1D546, Status::Mapped("o")),
    (0x1D547, Status::Disallowed),
    (0x1D54A, Status::Mapped("s")),
    (0x1D54B, Status::Mapped("t")),
    (0x1D54C, Status::Mapped("u")),
    (0x1D54D, Status::Mapped("v")),
    (0x1D54E, Status::Mapped("w")),
    (0x1D54F, Status::Mapped("x")),
    (0x1D550, Status::Mapped("y")),
    (0x1D551, Status::Disallowed),
    (0x1D552, Status::Mapped("a")),
    (0x1D553, Status::Mapped("b")),
    (0x1D554, Status::Mapped("c")),
    (0x1D555, Status::Mapped("d")),
    (0x1D556, Status::Mapped("e")),
    (0x1D557, Status::Mapped("f")),
    (0x1D558, Status::Mapped("g")),
    (0x1D559, Status::Mapped("h")),
    (0x1D55A, Status::Mapped("i")),
    (0x1D55B, Status::Mapped("j")),
    (0x1D55C, Status::Mapped("k")),
    (0x1D55D, Status::Mapped("l")),
    (0x1D55E, Status::Mapped("m")),
    (0x1D55F, Status::Mapped("n")),
    (0x1D560, Status::Mapped("o")),
    (0x1D561, Status::Mapped("p")),
    (0x1D562, Status::Mapped("q")),
    (0x1D563, Status::Mapped("r")),
    (0x1D564, Status::Mapped("s")),
    (0x1D565, Status::Mapped("t")),
    (0x1D566, Status::Mapped("u")),
    (0x1D567, Status::Mapped("v")),
    (0x1D568, Status::Mapped("w")),
    (0x1D569, Status::Mapped("x")),
    (0x1D56A, Status::Mapped("y")),
    (0x1D56B, Status::Mapped("z")),
    (0x1D56C, Status::Mapped("a")),
    (0x1D56D, Status::Mapped("b")),
    (0x1D56E, Status::Mapped("c")),
    (0x1D56F, Status::Mapped("d")),
    (0x1D570, Status::Mapped("e")),
    (0x1D571, Status::Mapped("f")),
    (0x1D572, Status::Mapped("g")),
    (0x1D573, Status::Mapped("h")),
    (0x1D574, Status::Mapped("i")),
    (0x1D575, Status::Mapped("j")),
    (0x1D576, Status::Mapped("k")),
    (0x1D577, Status::Mapped("l")),
    (0x1D578, Status::Mapped("m")),
    (0x1D579, Status::Mapped("n")),
    (0x1D57A, Status::Mapped("o")),
    (0x1D57B, Status::Mapped("p")),
    (0x1D57C, Status::Mapped("q")),
    (0x1D57D, Status::Mapped("r")),
    (0x1D57E, Status::Mapped("s")),
    (0x1D57F, Status::Mapped("t")),
    (0x1D580, Status::Mapped("u")),
    (0x1D581, Status::Mapped("v")),
    (0x1D582, Status::Mapped("w")),
    (0x1D583, Status::Mapped("x")),
    (0x1D584, Status::Mapped("y")),
    (0x1D585, Status::Mapped("z")),
    (0x1D586, Status::Mapped("a")),
    (0x1D587, Status::Mapped("b")),
    (0x1D588, Status::Mapped("c")),
    (0x1D589, Status::Mapped("d")),
    (0x1D58A, Status::Mapped("e")),
    (0x1D58B, Status::Mapped("f")),
    (0x1D58C, Status::Mapped("g")),
    (0x1D58D, Status::Mapped("h")),
    (0x1D58E, Status::Mapped("i")),
    (0x1D58F, Status::Mapped("j")),
    (0x1D590, Status::Mapped("k")),
    (0x1D591, Status::Mapped("l")),
    (0x1D592, Status::Mapped("m")),
    (0x1D593, Status::Mapped("n")),
    (0x1D594, Status::Mapped("o")),
    (0x1D595, Status::Mapped("p")),
    (0x1D596, Status::Mapped("q")),
    (0x1D597, Status::Mapped("r")),
    (0x1D598, Status::Mapped("s")),
    (0x1D599, Status::Mapped("t")),
    (0x1D59A, Status::Mapped("u")),
    (0x1D59B, Status::Mapped("v")),
    (0x1D59C, Status::Mapped("w")),
    (0x1D59D, Status::Mapped("x")),
    (0x1D59E, Status::Mapped("y")),
    (0x1D59F, Status::Mapped("z")),
    (0x1D5A0, Status::Mapped("a")),
    (0x1D5A1, Status::Mapped("b")),
    (0x1D5A2, Status::Mapped("c")),
    (0x1D5A3, Status::Mapped("d")),
    (0x1D5A4, Status::Mapped("e")),
    (0x1D5A5, Status::Mapped("f")),
    (0x1D5A6, Status::Mapped("g")),
    (0x1D5A7, Status::Mapped("h")),
    (0x1D5A8, Status::Mapped("i")),
    (0x1D5A9, Status::Mapped("j")),
    (0x1D5AA, Status::Mapped("k")),
    (0x1D5AB, Status::Mapped("l")),
    (0x1D5AC, Status::Mapped("m")),
    (0x1D5AD, Status::Mapped("n")),
    (0x1D5AE, Status::Mapped("o")),
    (0x1D5AF, Status::Mapped("p")),
    (0x1D5B0, Status::Mapped("q")),
    (0x1D5B1, Status::Mapped("r")),
    (0x1D5B2, Status::Mapped("s")),
    (0x1D5B3, Status::Mapped("t")),
    (0x1D5B4, Status::Mapped("u")),
    (0x1D5B5, Status::Mapped("v")),
    (0x1D5B6, Status::Mapped("w")),
    (0x1D5B7, Status::Mapped("x")),
    (0x1D5B8, Status::Mapped("y")),
    (0x1D5B9, Status::Mapped("z")),
    (0x1D5BA, Status::Mapped("a")),
    (0x1D5BB, Status::Mapped("b")),
    (0x1D5BC, Status::Mapped("c")),
    (0x1D5BD, Status::Mapped("d")),
    (0x1D5BE, Status::Mapped("e")),
    (0x1D5BF, Status::Mapped("f")),
    (0x1D5C0, Status::Mapped("g")),
    (0x1D5C1, Status::Mapped("h")),
    (0x1D5C2, Status::Mapped("i")),
    (0x1D5C3, Status::Mapped("j")),
    (0x1D5C4, Status::Mapped("k")),
    (0x1D5C5, Status::Mapped("l")),
    (0x1D5C6, Status::Mapped("m")),
    (0x1D5C7, Status::Mapped("n")),
    (0x1D5C8, Status::Mapped("o")),
    (0x1D5C9, Status::Mapped("p")),
    (0x1D5CA, Status::Mapped("q")),
    (0x1D5CB, Status::Mapped("r")),
    (0x1D5CC, Status::Mapped("s")),
    (0x1D5CD, Status::Mapped("t")),
    (0x1D5CE, Status::Mapped("u")),
    (0x1D5CF, Status::Mapped("v")),
    (0x1D5D0, Status::Mapped("w")),
    (0x1D5D1, Status::Mapped("x")),
    (0x1D5D2, Status::Mapped("y")),
    (0x1D5D3, Status::Mapped("z")),
    (0x1D5D4, Status::Mapped("a")),
    (0x1D5D5, Status::Mapped("b")),
    (0x1D5D6, Status::Mapped("c")),
    (0x1D5D7, Status::Mapped("d")),
    (0x1D5D8, Status::Mapped("e")),
    (0x1D5D9, Status::Mapped("f")),
    (0x1D5DA, Status::Mapped("g")),
    (0x1D5DB, Status::Mapped("h")),
    (0x1D5DC, Status::Mapped("i")),
    (0x1D5DD, Status::Mapped("j")),
    (0x1D5DE, Status::Mapped("k")),
    (0x1D5DF, Status::Mapped("l")),
    (0x1D5E0, Status::Mapped("m")),
    (0x1D5E1, Status::Mapped("n")),
    (0x1D5E2, Status::Mapped("o")),
    (0x1D5E3, Status::Mapped("p")),
    (0x1D5E4, Status::Mapped("q")),
    (0x1D5E5, Status::Mapped("r")),
    (0x1D5E6, Status::Mapped("s")),
    (0x1D5E7, Status::Mapped("t")),
    (0x1D5E8, Status::Mapped("u")),
    (0x1D5E9, Status::Mapped("v")),
    (0x1D5EA, Status::Mapped("w")),
    (0x1D5EB, Status::Mapped("x")),
    (0x1D5EC, Status::Mapped("y")),
    (0x1D5ED, Status::Mapped("z")),
    (0x1D5EE, Status::Mapped("a")),
    (0x1D5EF, Status::Mapped("b")),
    (0x1D5F0, Status::Mapped("c")),
    (0x1D5F1, Status::Mapped("d")),
    (0x1D5F2, Status::Mapped("e")),
    (0x1D5F3, Status::Mapped("f")),
    (0x1D5F4, Status::Mapped("g")),
    (0x1D5F5, Status::Mapped("h")),
    (0x1D5F6, Status::Mapped("i")),
    (0x1D5F7, Status::Mapped("j")),
    (0x1D5F8, Status::Mapped("k")),
    (0x1D5F9, Status::Mapped("l")),
    (0x1D5FA, Status::Mapped("m")),
    (0x1D5FB, Status::Mapped("n")),
    (0x1D5FC, Status::Mapped("o")),
    (0x1D5FD, Status::Mapped("p")),
    (0x1D5FE, Status::Mapped("q")),
    (0x1D5FF, Status::Mapped("r")),
    (0x1D600, Status::Mapped("s")),
    (0x1D601, Status::Mapped("t")),
    (0x1D602, Status::Mapped("u")),
    (0x1D603, Status::Mapped("v")),
    (0x1D604, Status::Mapped("w")),
    (0x1D605, Status::Mapped("x")),
    (0x1D606, Status::Mapped("y")),
    (0x1D607, Status::Mapped("z")),
    (0x1D608, Status::Mapped("a")),
    (0x1D609, Status::Mapped("b")),
    (0x1D60A, Status::Mapped("c")),
    (0x1D60B, Status::Mapped("d")),
    (0x1D60C, Status::Mapped("e")),
    (0x1D60D, Status::Mapped("f")),
    (0x1D60E, Status::Mapped("g")),
    (0x1D60F, Status::Mapped("h")),
    (0x1D610, Status::Mapped("i")),
    (0x1D611, Status::Mapped("j")),
    (0x1D612, Status::Mapped("k")),
    (0x1D613, Status::Mapped("l")),
    (0x1D614, Status::Mapped("m")),
    (0x1D615, Status::Mapped("n")),
    (0x1D616, Status::Mapped("o")),
    (0x1D617, Status::Mapped("p")),
    (0x1D618, Status::Mapped("q")),
    (0x1D619, Status::Mapped("r")),
    (0x1D61A, Status::Mapped("s")),
    (0x1D61B, Status::Mapped("t")),
    (0x1D61C, Status::Mapped("u")),
    (0x1D61D, Status::Mapped("v")),
    (0x1D61E, Status::Mapped("w")),
    (0x1D61F, Status::Mapped("x")),
    (0x1D620, Status::Mapped("y")),
    (0x1D621, Status::Mapped("z")),
    (0x1D622, Status::Mapped("a")),
    (0x1D623, Status::Mapped("b")),
    (0x1D624, Status::Mapped("c")),
    (0x1D625, Status::Mapped("d")),
    (0x1D626, Status::Mapped("e")),
    (0x1D627, Status::Mapped("f")),
    (0x1D628, Status::Mapped("g")),
    (0x1D629, Status::Mapped("h")),
    (0x1D62A, Status::Mapped("i")),
    (0x1D62B, Status::Mapped("j")),
    (0x1D62C, Status::Mapped("k")),
    (0x1D62D, Status::Mapped("l")),
    (0x1D62E, Status::Mapped("m")),
    (0x1D62F, Status::Mapped("n")),
    (0x1D630, Status::Mapped("o")),
    (0x1D631, Status::Mapped("p")),
    (0x1D632, Status::Mapped("q")),
    (0x1D633, Status::Mapped("r")),
    (0x1D634, Status::Mapped("s")),
    (0x1D635, Status::Mapped("t")),
    (0x1D636, Status::Mapped("u")),
    (0x1D637, Status::Mapped("v")),
    (0x1D638, Status::Mapped("w")),
    (0x1D639, Status::Mapped("x")),
    (0x1D63A, Status::Mapped("y")),
    (0x1D63B, Status::Mapped("z")),
    (0x1D63C, Status::Mapped("a")),
    (0x1D63D, Status::Mapped("b")),
    (0x1D63E, Status::Mapped("c")),
    (0x1D63F, Status::Mapped("d")),
    (0x1D640, Status::Mapped("e")),
    (0x1D641, Status::Mapped("f")),
    (0x1D642, Status::Mapped("g")),
    (0x1D643, Status::Mapped("h")),
    (0x1D644, Status::Mapped("i")),
    (0x1D645, Status::Mapped("j")),
    (0x1D646, Status::Mapped("k")),
    (0x1D647, Status::Mapped("l")),
    (0x1D648, Status::Mapped("m")),
    (0x1D649, Status::Mapped("n")),
    (0x1D64A, Status::Mapped("o")),
    (0x1D64B, Status::Mapped("p")),
    (0x1D64C, Status::Mapped("q")),
    (0x1D64D, Status::Mapped("r")),
    (0x1D64E, Status::Mapped("s")),
    (0x1D64F, Status::Mapped("t")),
    (0x1D650, Status::Mapped("u")),
    (0x1D651, Status::Mapped("v")),
    (0x1D652, Status::Mapped("w")),
    (0x1D653, Status::Mapped("x")),
    (0x1D654, Status::Mapped("y")),
    (0x1D655, Status::Mapped("z")),
    (0x1D656, Status::Mapped("a")),
    (0x1D657, Status::Mapped("b")),
    (0x1D658, Status::Mapped("c")),
    (0x1D659, Status::Mapped("d")),
    (0x1D65A, Status::Mapped("e")),
    (0x1D65B, Status::Mapped("f")),
    (0x1D65C, Status::Mapped("g")),
    (0x1D65D, Status::Mapped("h")),
    (0x1D65E, Status::Mapped("i")),
    (0x1D65F, Status::Mapped("j")),
    (0x1D660, Status::Mapped("k")),
    (0x1D661, Status::Mapped("l")),
    (0x1D662, Status::Mapped("m")),
    (0x1D663, Status::Mapped("n")),
    (0x1D664, Status::Mapped("o")),
    (0x1D665, Status::Mapped("p")),
    (0x1D666, Status::Mapped("q")),
    (0x1D667, Status::Mapped("r")),
    (0x1D668, Status::Mapped("s")),
    (0x1D669, Status::Mapped("t")),
    (0x1D66A, Status::Mapped("u")),
    (0x1D66B, Status::Mapped("v")),
    (0x1D66C, Status::Mapped("w")),
    (0x1D66D, Status::Mapped("x")),
    (0x1D66E, Status::Mapped("y")),
    (0x1D66F, Status::Mapped("z")),
    (0x1D670, Status::Mapped("a")),
    (0x1D671, Status::Mapped("b")),
    (0x1D672, Status::Mapped("c")),
    (0x1D673, Status::Mapped("d")),
    (0x1D674, Status::Mapped("e")),
    (0x1D675, Status::Mapped("f")),
    (0x1D676, Status::Mapped("g")),
    (0x1D677, Status::Mapped("h")),
    (0x1D678, Status::Mapped("i")),
    (0x1D679, Status::Mapped("j")),
    (0x1D67A, Status::Mapped("k")),
    (0x1D67B, Status::Mapped("l")),
    (0x1D67C, Status::Mapped("m")),
    (0x1D67D, Status::Mapped("n")),
    (0x1D67E, Status::Mapped("o")),
    (0x1D67F, Status::Mapped("p")),
    (0x1D680, Status::Mapped("q")),
    (0x1D681, Status::Mapped("r")),
    (0x1D682, Status::Mapped("s")),
    (0x1D683, Status::Mapped("t")),
    (0x1D684, Status::Mapped("u")),
    (0x1D685, Status::Mapped("v")),
    (0x1D686, Status::Mapped("w")),
    (0x1D687, Status::Mapped("x")),
    (0x1D688, Status::Mapped("y")),
    (0x1D689, Status::Mapped("z")),
    (0x1D68A, Status::Mapped("a")),
    (0x1D68B, Status::Mapped("b")),
    (0x1D68C, Status::Mapped("c")),
    (0x1D68D, Status::Mapped("d")),
    (0x1D68E, Status::Mapped("e")),
    (0x1D68F, Status::Mapped("f")),
    (0x1D690, Status::Mapped("g")),
    (0x1D691, Status::Mapped("h")),
    (0x1D692, Status::Mapped("i")),
    (0x1D693, Status::Mapped("j")),
    (0x1D694, Status::Mapped("k")),
    (0x1D695, Status::Mapped("l")),
    (0x1D696, Status::Mapped("m")),
    (0x1D697, Status::Mapped("n")),
    (0x1D698, Status::Mapped("o")),
    (0x1D699, Status::Mapped("p")),
    (0x1D69A, Status::Mapped("q")),
    (0x1D69B, Status::Mapped("r")),
    (0x1D69C, Status::Mapped("s")),
    (0x1D69D, Status::Mapped("t")),
    (0x1D69E, Status::Mapped("u")),
    (0x1D69F, Status::Mapped("v")),
    (0x1D6A0, Status::Mapped("w")),
    (0x1D6A1, Status::Mapped("x")),
    (0x1D6A2, Status::Mapped("y")),
    (0x1D6A3, Status::Mapped("z")),
    (0x1D6A4, Status::Mapped("\u{131}")),
    (0x1D6A5, Status::Mapped("\u{237}")),
    (0x1D6A6, Status::Disallowed),
    (0x1D6A8, Status::Mapped("\u{3B1}")),
    (0x1D6A9, Status::Mapped("\u{3B2}")),
    (0x1D6AA, Status::Mapped("\u{3B3}")),
    (0x1D6AB, Status::Mapped("\u{3B4}")),
    (0x1D6AC, Status::Mapped("\u{3B5}")),
    (0x1D6AD, Status::Mapped("\u{3B6}")),
    (0x1D6AE, Status::Mapped("\u{3B7}")),
    (0x1D6AF, Status::Mapped("\u{3B8}")),
    (0x1D6B0, Status::Mapped("\u{3B9}")),
    (0x1D6B1, Status::Mapped("\u{3BA}")),
    (0x1D6B2, Status::Mapped("\u{3BB}")),
    (0x1D6B3, Status::Mapped("\u{3BC}")),
    (0x1D6B4, Status::Mapped("\u{3BD}")),
    (0x1D6B5, Status::Mapped("\u{3BE}")),
    (0x1D6B6, Status::Mapped("\u{3BF}")),
    (0x1D6B7, Status::Mapped("\u{3C0}")),
    (0x1D6B8, Status::Mapped("\u{3C1}")),
    (0x1D6B9, Status::Mapped("\u{3B8}")),
    (0x1D6BA, Status::Mapped("\u{3C3}")),
    (0x1D6BB, Status::Mapped("\u{3C4}")),
    (0x1D6BC, Status::Mapped("\u{3C5}")),
    (0x1D6BD, Status::Mapped("\u{3C6}")),
    (0x1D6BE, Status::Mapped("\u{3C7}")),
    (0x1D6BF, Status::Mapped("\u{3C8}")),
    (0x1D6C0, Status::Mapped("\u{3C9}")),
    (0x1D6C1, Status::Mapped("\u{2207}")),
    (0x1D6C2, Status::Mapped("\u{3B1}")),
    (0x1D6C3, Status::Mapped("\u{3B2}")),
    (0x1D6C4, Status::Mapped("\u{3B3}")),
    (0x1D6C5, Status::Mapped("\u{3B4}")),
    (0x1D6C6, Status::Mapped("\u{3B5}")),
    (0x1D6C7, Status::Mapped("\u{3B6}")),
    (0x1D6C8, Status::Mapped("\u{3B7}")),
    (0x1D6C9, Status::Mapped("\u{3B8}")),
    (0x1D6CA, Status::Mapped("\u{3B9}")),
    (0x1D6CB, Status::Mapped("\u{3BA}")),
    (0x1D6CC, Status::Mapped("\u{3BB}")),
    (0x1D6CD, Status::Mapped("\u{3BC}")),
    (0x1D6CE, Status::Mapped("\u{3BD}")),
    (0x1D6CF, Status::Mapped("\u{3BE}")),
    (0x1D6D0, Status::Mapped("\u{3BF}")),
    (0x1D6D1, Status::Mapped("\u{3C0}")),
    (0x1D6D2, Status::Mapped("\u{3C1}")),
    (0x1D6D3, Status::Mapped("\u{3C3}")),
    (0x1D6D5, Status::Mapped("\u{3C4}")),
    (0x1D6D6, Status::Mapped("\u{3C5}")),
    (0x1D6D7, Status::Mapped("\u{3C6}")),
    (0x1D6D8, Status::Mapped("\u{3C7}")),
    (0x1D6D9, Status::Mapped("\u{3C8}")),
    (0x1D6DA, Status::Mapped("\u{3C9}")),
    (0x1D6DB, Status::Mapped("\u{2202}")),
    (0x1D6DC, Status::Mapped("\u{3B5}")),
    (0x1D6DD, Status::Mapped("\u{3B8}")),
    (0x1D6DE, Status::Mapped("\u{3BA}")),
    (0x1D6DF, Status::Mapped("\u{3C6}")),
    (0x1D6E0, Status::Mapped("\u{3C1}")),
    (0x1D6E1, Status::Mapped("\u{3C0}")),
    (0x1D6E2, Status::Mapped("\u{3B1}")),
    (0x1D6E3, Status::Mapped("\u{3B2}")),
    (0x1D6E4, Status::Mapped("\u{3B3}")),
    (0x1D6E5, Status::Mapped("\u{3B4}")),
    (0x1D6E6, Status::Mapped("\u{3B5}")),
    (0x1D6E7, Status::Mapped("\u{3B6}")),
    (0x1D6E8, Status::Mapped("\u{3B7}")),
    (0x1D6E9, Status::Mapped("\u{3B8}")),
    (0x1D6EA, Status::Mapped("\u{3B9}")),
    (0x1D6EB, Status::Mapped("\u{3BA}")),
    (0x1D6EC, Status::Mapped("\u{3BB}")),
    (0x1D6ED, Status::Mapped("\u{3BC}")),
    (0x1D6EE, Status::Mapped("\u{3BD}")),
    (0x1D6EF, Status::Mapped("\u{3BE}")),
    (0x1D6F0, Status::Mapped("\u{3BF}")),
    (0x1D6F1, Status::Mapped("\u{3C0}")),
    (0x1D6F2, Status::Mapped("\u{3C1}")),
    (0x1D6F3, Status::Mapped("\u{3B8}")),
    (0x1D6F4, Status::Mapped("\u{3C3}")),
    (0x1D6F5, Status::Mapped("\u{3C4}")),
    (0x1D6F6, Status::Mapped("\u{3C5}")),
    (0x1D6F7, Status::Mapped("\u{3C6}")),
    (0x1D6F8, Status::Mapped("\u{3C7}")),
    (0x1D6F9, Status::Mapped("\u{3C8}")),
    (0x1D6FA, Status::Mapped("\u{3C9}")),
    (0x1D6FB, Status::Mapped("\u{2207}")),
    (0x1D6FC, Status::Mapped("\u{3B1}")),
    (0x1D6FD, Status::Mapped("\u{3B2}")),
    (0x1D6FE, Status::Mapped("\u{3B3}")),
    (0x1D6FF, Status::Mapped("\u{3B4}")),
    (0x1D700, Status::Mapped("\u{3B5}")),
    (0x1D701, Status::Mapped("\u{3B6}")),
    (0x1D702, Status::Mapped("\u{3B7}")),
    (0x1D703, Status::Mapped("\u{3B8}")),
    (0x1D704, Status::Mapped("\u{3B9}")),
    (0x1D705, Status::Mapped("\u{3BA}")),
    (0x1D706, Status::Mapped("\u{3BB}")),
    (0x1D707, Status::Mapped("\u{3BC}")),
    (0x1D708, Status::Mapped("\u{3BD}")),
    (0x1D709, Status::Mapped("\u{3BE}")),
    (0x1D70A, Status::Mapped("\u{3BF}")),
    (0x1D70B, Status::Mapped("\u{3C0}")),
    (0x1D70C, Status::Mapped("\u{3C1}")),
    (0x1D70D, Status::Mapped("\u{3C3}")),
    (0x1D70F, Status::Mapped("\u{3C4}")),
    (0x1D710, Status::Mapped("\u{3C5}")),
    (0x1D711, Status::Mapped("\u{3C6}")),
    (0x1D712, Status::Mapped("\u{3C7}")),
    (0x1D713, Status::Mapped("\u{3C8}")),
    (0x1D714, Status::Mapped("\u{3C9}")),
    (0x1D715, Status::Mapped("\u{2202}")),
    (0x1D716, Status::Mapped("\u{3B5}")),
    (0x1D717, Status::Mapped("\u{3B8}")),
    (0x1D718, Status::Mapped("\u{3BA}")),
    (0x1D719, Status::Mapped("\u{3C6}")),
    (0x1D71A, Status::Mapped("\u{3C1}")),
    (0x1D71B, Status::Mapped("\u{3C0}")),
    (0x1D71C, Status::Mapped("\u{3B1}")),
    (0x1D71D, Status::Mapped("\u{3B2}")),
    (0x1D71E, Status::Mapped("\u{3B3}")),
    (0x1D71F, Status::Mapped("\u{3B4}")),
    (0x1D720, Status::Mapped("\u{3B5}")),
    (0x1D721, Status::Mapped("\u{3B6}")),
    (0x1D722, Status::Mapped("\u{3B7}")),
    (0x1D723, Status::Mapped("\u{3B8}")),
    (0x1D724, Status::Mapped("\u{3B9}")),
    (0x1D725, Status::Mapped("\u{3BA}")),
    (0x1D726, Status::Mapped("\u{3BB}")),
    (0x1D727, Status::Mapped("\u{3BC}")),
    (0x1D728, Status::Mapped("\u{3BD}")),
    (0x1D729, Status::Mapped("\u{3BE}")),
    (0x1D72A, Status::Mapped("\u{3BF}")),
    (0x1D72B, Status::Mapped("\u{3C0}")),
    (0x1D72C, Status::Mapped("\u{3C1}")),
    (0x1D72D, Status::Mapped("\u{3B8}")),
    (0x1D72E, Status::Mapped("\u{3C3}")),
    (0x1D72F, Status::Mapped("\u{3C4}")),
    (0x1D730, Status::Mapped("\u{3C5}")),
    (0x1D731, Status::Mapped("\u{3C6}")),
    (0x1D732, Status::Mapped("\u{3C7}")),
    (0x1D733, Status::Mapped("\u{3C8}")),
    (0x1D734, Status::Mapped("\u{3C9}")),
    (0x1D735, Status::Mapped("\u{2207}")),
    (0x1D736, Status::Mapped("\u{3B1}")),
    (0x1D737, Status::Mapped("\u{3B2}")),
    (0x1D738, Status::Mapped("\u{3B3}")),
    (0x1D739, Status::Mapped("\u{3B4}")),
    (0x1D73A, Status::Mapped("\u{3B5}")),
    (0x1D73B, Status::Mapped("\u{3B6}")),
    (0x1D73C, Status::Mapped("\u{3B7}")),
    (0x1D73D, Status::Mapped("\u{3B8}")),
    (0x1D73E, Status::Mapped("\u{3B9}")),
    (0x1D73F, Status::Mapped("\u{3BA}")),
    (0x1D740, Status::Mapped("\u{3BB}")),
    (0x1D741, Status::Mapped("\u{3BC}")),
    (0x1D742, Status::Mapped("\u{3BD}")),
    (0x1D743, Status::Mapped("\u{3BE}")),
    (0x1D744, Status::Mapped("\u{3BF}")),
    (0x1D745, Status::Mapped("\u{3C0}")),
    (0x1D746, Status::Mapped("\u{3C1}")),
    (0x1D747, Status::Mapped("\u{3C3}")),
    (0x1D749, Status::Mapped("\u{3C4}")),
    (0x1D74A, Status::Mapped("\u{3C5}")),
    (0x1D74B, Status::Mapped("\u{3C6}")),
    (0x1D74C, Status::Mapped("\u{3C7}")),
    (0x1D74D, Status::Mapped("\u{3C8}")),
    (0x1D74E, Status::Mapped("\u{3C9}")),
    (0x1D74F, Status::Mapped("\u{2202}")),
    (0x1D750, Status::Mapped("\u{3B5}")),
    (0x1D751, Status::Mapped("\u{3B8}")),
    (0x1D752, Status::Mapped("\u{3BA}")),
    (0x1D753, Status::Mapped("\u{3C6}")),
    (0x1D754, Status::Mapped("\u{3C1}")),
    (0x1D755, Status::Mapped("\u{3C0}")),
    (0x1D756, Status::Mapped("\u{3B1}")),
    (0x1D757, Status::Mapped("\u{3B2}")),
    (0x1D758, Status::Mapped("\u{3B3}")),
    (0x1D759, Status::Mapped("\u{3B4}")),
    (0x1D75A, Status::Mapped("\u{3B5}")),
    (0x1D75B, Status::Mapped("\u{3B6}")),
    (0x1D75C, Status::Mapped("\u{3B7}")),
    (0x1D75D, Status::Mapped("\u{3B8}")),
    (0x1D75E, Status::Mapped("\u{3B9}")),
    (0x1D75F, Status::Mapped("\u{3BA}")),
    (0x1D760, Status::Mapped("\u{3BB}")),
    (0x1D761, Status::Mapped("\u{3BC}")),
    (0x1D762, Status::Mapped("\u{3BD}")),
    (0x1D763, Status::Mapped("\u{3BE}")),
    (0x1D764, Status::Mapped("\u{3BF}")),
    (0x1D765, Status::Mapped("\u{3C0}")),
    (0x1D766, Status::Mapped("\u{3C1}")),
    (0x1D767, Status::Mapped("\u{3B8}")),
    (0x1D768, Status::Mapped("\u{3C3}")),
    (0x1D769, Status::Mapped("\u{3C4}")),
    (0x1D76A, Status::Mapped("\u{3C5}")),
    (0x1D76B, Status::Mapped("\u{3C6}")),
    (0x1D76C, Status::Mapped("\u{3C7}")),
    (0x1D76D, Status::Mapped("\u{3C8}")),
    (0x1D76E, Status::Mapped("\u{3C9}")),
    (0x1D76F, Status::Mapped("\u{2207}")),
    (0x1D770, Status::Mapped("\u{3B1}")),
    (0x1D771, Status::Mapped("\u{3B2}")),
    (0x1D772, Status::Mapped("\u{3B3}")),
    (0x1D773, Status::Mapped("\u{3B4}")),
    (0x1D774, Status::Mapped("\u{3B5}")),
    (0x1D775, Status::Mapped("\u{3B6}")),
    (0x1D776, Status::Mapped("\u{3B7}")),
    (0x1D777, Status::Mapped("\u{3B8}")),
    (0x1D778, Status::Mapped("\u{3B9}")),
    (0x1D779, Status::Mapped("\u{3BA}")),
    (0x1D77A, Status::Mapped("\u{3BB}")),
    (0x1D77B, Status::Mapped("\u{3BC}")),
    (0x1D77C, Status::Mapped("\u{3BD}")),
    (0x1D77D, Status::Mapped("\u{3BE}")),
    (0x1D77E, Status::Mapped("\u{3BF}")),
    (0x1D77F, Status::Mapped("\u{3C0}")),
    (0x1D780, Status::Mapped("\u{3C1}")),
    (0x1D781, Status::Mapped("\u{3C3}")),
    (0x1D783, Status::Mapped("\u{3C4}")),
    (0x1D784, Status::Mapped("\u{3C5}")),
    (0x1D785, Status::Mapped("\u{3C6}")),
    (0x1D786, Status::Mapped("\u{3C7}")),
    (0x1D787, Status::Mapped("\u{3C8}")),
    (0x1D788, Status::Mapped("\u{3C9}")),
    (0x1D789, Status::Mapped("\u{2202}")),
    (0x1D78A, Status::Mapped("\u{3B5}")),
    (0x1D78B, Status::Mapped("\u{3B8}")),
    (0x1D78C, Status::Mapped("\u{3BA}")),
    (0x1D78D, Status::Mapped("\u{3C6}")),
    (0x1D78E, Status::Mapped("\u{3C1}")),
    (0x1D78F, Status::Mapped("\u{3C0}")),
    (0x1D790, Status::Mapped("\u{3B1}")),
    (0x1D791, Status::Mapped("\u{3B2}")),
    (0x1D792, Status::Mapped("\u{3B3}")),
    (0x1D793, Status::Mapped("\u{3B4}")),
    (0x1D794, Status::Mapped("\u{3B5}")),
    (0x1D795, Status::Mapped("\u{3B6}")),
    (0x1D796, Status::Mapped("\u{3B7}")),
    (0x1D797, Status::Mapped("\u{3B8}")),
    (0x1D798, Status::Mapped("\u{3B9}")),
    (0x1D799, Status::Mapped("\u{3BA}")),
    (0x1D79A, Status::Mapped("\u{3BB}")),
    (0x1D79B, Status::Mapped("\u{3BC}")),
    (0x1D79C, Status::Mapped("\u{3BD}")),
    (0x1D79D, Status::Mapped("\u{3BE}")),
    (0x1D79E, Status::Mapped("\u{3BF}")),
    (0x1D79F, Status::Mapped("\u{3C0}")),
    (0x1D7A0, Status::Mapped("\u{3C1}")),
    (0x1D7A1, Status::Mapped("\u{3B8}")),
    (0x1D7A2, Status::Mapped("\u{3C3}")),
    (0x1D7A3, Status::Mapped("\u{3C4}")),
    (0x1D7A4, Status::Mapped("\u{3C5}")),
    (0x1D7A5, Status::Mapped("\u{3C6}")),
    (0x1D7A6, Status::Mapped("\u{3C7}")),
    (0x1D7A7, Status::Mapped("\u{3C8}")),
    (0x1D7A8, Status::Mapped("\u{3C9}")),
    (0x1D7A9, Status::Mapped("\u{2207}")),
    (0x1D7AA, Status::Mapped("\u{3B1}")),
    (0x1D7AB, Status::Mapped("\u{3B2}")),
    (0x1D7AC, Status::Mapped("\u{3B3}")),
    (0x1D7AD, Status::Mapped("\u{3B4}")),
    (0x1D7AE, Status::Mapped("\u{3B5}")),
    (0x1D7AF, Status::Mapped("\u{3B6}")),
    (0x1D7B0, Status::Mapped("\u{3B7}")),
    (0x1D7B1, Status::Mapped("\u{3B8}")),
    (0x1D7B2, Status::Mapped("\u{3B9}")),
    (0x1D7B3, Status::Mapped("\u{3BA}")),
    (0x1D7B4, Status::Mapped("\u{3BB}")),
    (0x1D7B5, Status::Mapped("\u{3BC}")),
    (0x1D7B6, Status::Mapped("\u{3BD}")),
    (0x1D7B7, Status::Mapped("\u{3BE}")),
    (0x1D7B8, Status::Mapped("\u{3BF}")),
    (0x1D7B9, Status::Mapped("\u{3C0}")),
    (0x1D7BA, Status::Mapped("\u{3C1}")),
    (0x1D7BB, Status::Mapped("\u{3C3}")),
    (0x1D7BD, Status::Mapped("\u{3C4}")),
    (0x1D7BE, Status::Mapped("\u{3C5}")),
    (0x1D7BF, Status::Mapped("\u{3C6}")),
    (0x1D7C0, Status::Mapped("\u{3C7}")),
    (0x1D7C1, Status::Mapped("\u{3C8}")),
    (0x1D7C2, Status::Mapped("\u{3C9}")),
    (0x1D7C3, Status::Mapped("\u{2202}")),
    (0x1D7C4, Status::Mapped("\u{3B5}")),
    (0x1D7C5, Status::Mapped("\u{3B8}")),
    (0x1D7C6, Status::Mapped("\u{3BA}")),
    (0x1D7C7, Status::Mapped("\u{3C6}")),
    (0x1D7C8, Status::Mapped("\u{3C1}")),
    (0x1D7C9, Status::Mapped("\u{3C0}")),
    (0x1D7CA, Status::Mapped("\u{3DD}")),
    (0x1D7CC, Status::Disallowed),
    (0x1D7CE, Status::Mapped("0")),
    (0x1D7CF, Status::Mapped("1")),
    (0x1D7D0, Status::Mapped("2")),
    (0x1D7D1, Status::Mapped("3")),
    (0x1D7D2, Status::Mapped("4")),
    (0x1D7D3, Status::Mapped("5")),
    (0x1D7D4, Status::Mapped("6")),
    (0x1D7D5, Status::Mapped("7")),
    (0x1D7D6, Status::Mapped("8")),
    (0x1D7D7, Status::Mapped("9")),
    (0x1D7D8, Status::Mapped("0")),
    (0x1D7D9, Status::Mapped("1")),
    (0x1D7DA, Status::Mapped("2")),
    (0x1D7DB, Status::Mapped("3")),
    (0x1D7DC, Status::Mapped("4")),
    (0x1D7DD, Status::Mapped("5")),
    (0x1D7DE, Status::Mapped("6")),
    (0x1D7DF, Status::Mapped("7")),
    (0x1D7E0, Status::Mapped("8")),
    (0x1D7E1, Status::Mapped("9")),
    (0x1D7E2, Status::Mapped("0")),
    (0x1D7E3, Status::Mapped("1")),
    (0x1D7E4, Status::Mapped("2")),
    (0x1D7E5, Status::Mapped("3")),
    (0x1D7E6, Status::Mapped("4")),
    (0x1D7E7, Status::Mapped("5")),
    (0x1D7E8, Status::Mapped("6")),
    (0x1D7E9, Status::Mapped("7")),
    (0x1D7EA, Status::Mapped("8")),
    (0x1D7EB, Status::Mapped("9")),
    (0x1D7EC, Status::Mapped("0")),
    (0x1D7ED, Status::Mapped("1")),
    (0x1D7EE, Status::Mapped("2")),
    (0x1D7EF, Status::Mapped("3")),
    (0x1D7F0, Status::Mapped("4")),
    (0x1D7F1, Status::Mapped("5")),
    (0x1D7F2, Status::Mapped("6")),
    (0x1D7F3, Status::Mapped("7")),
    (0x1D7F4, Status::Mapped("8")),
    (0x1D7F5, Status::Mapped("9")),
    (0x1D7F6, Status::Mapped("0")),
    (0x1D7F7, Status::Mapped("1")),
    (0x1D7F8, Status::Mapped("2")),
    (0x1D7F9, Status::Mapped("3")),
    (0x1D7FA, Status::Mapped("4")),
    (0x1D7FB, Status::Mapped("5")),
    (0x1D7FC, Status::Mapped("6")),
    (0x1D7FD, Status::Mapped("7")),
    (0x1D7FE, Status::Mapped("8")),
    (0x1D7FF, Status::Mapped("9")),
    (0x1D800, Status::Valid),
    (0x1DA8C, Status::Disallowed),
    (0x1DA9B, Status::Valid),
    (0x1DAA0, Status::Disallowed),
    (0x1DAA1, Status::Valid),
    (0x1DAB0, Status::Disallowed),
    (0x1DF00, Status::Valid),
    (0x1DF1F, Status::Disallowed),
    (0x1DF25, Status::Valid),
    (0x1DF2B, Status::Disallowed),
    (0x1E000, Status::Valid),
    (0x1E007, Status::Disallowed),
    (0x1E008, Status::Valid),
    (0x1E019, Status::Disallowed),
    (0x1E01B, Status::Valid),
    (0x1E022, Status::Disallowed),
    (0x1E023, Status::Valid),
    (0x1E025, Status::Disallowed),
    (0x1E026, Status::Valid),
    (0x1E02B, Status::Disallowed),
    (0x1E030, Status::Mapped("\u{430}")),
    (0x1E031, Status::Mapped("\u{431}")),
    (0x1E032, Status::Mapped("\u{432}")),
    (0x1E033, Status::Mapped("\u{433}")),
    (0x1E034, Status::Mapped("\u{434}")),
    (0x1E035, Status::Mapped("\u{435}")),
    (0x1E036, Status::Mapped("\u{436}")),
    (0x1E037, Status::Mapped("\u{437}")),
    (0x1E038, Status::Mapped("\u{438}")),
    (0x1E039, Status::Mapped("\u{43A}")),
    (0x1E03A, Status::Mapped("\u{43B}")),
    (0x1E03B, Status::Mapped("\u{43C}")),
    (0x1E03C, Status::Mapped("\u{43E}")),
    (0x1E03D, Status::Mapped("\u{43F}")),
    (0x1E03E, Status::Mapped("\u{440}")),
    (0x1E03F, Status::Mapped("\u{441}")),
    (0x1E040, Status::Mapped("\u{442}")),
    (0x1E041, Status::Mapped("\u{443}")),
    (0x1E042, Status::Mapped("\u{444}")),
    (0x1E043, Status::Mapped("\u{445}")),
    (0x1E044, Status::Mapped("\u{446}")),
    (0x1E045, Status::Mapped("\u{447}")),
    (0x1E046, Status::Mapped("\u{448}")),
    (0x1E047, Status::Mapped("\u{44B}")),
    (0x1E048, Status::Mapped("\u{44D}")),
    (0x1E049, Status::Mapped("\u{44E}")),
    (0x1E04A, Status::Mapped("\u{A689}")),
    (0x1E04B, Status::Mapped("\u{4D9}")),
    (0x1E04C, Status::Mapped("\u{456}")),
    (0x1E04D, Status::Mapped("\u{458}")),
    (0x1E04E, Status::Mapped("\u{4E9}")),
    (0x1E04F, Status::Mapped("\u{4AF}")),
    (0x1E050, Status::Mapped("\u{4CF}")),
    (0x1E051, Status::Mapped("\u{430}")),
    (0x1E052, Status::Mapped("\u{431}")),
    (0x1E053, Status::Mapped("\u{432}")),
    (0x1E054, Status::Mapped("\u{433}")),
    (0x1E055, Status::Mapped("\u{434}")),
    (0x1E056, Status::Mapped("\u{435}")),
    (0x1E057, Status::Mapped("\u{436}")),
    (0x1E058, Status::Mapped("\u{437}")),
    (0x1E059, Status::Mapped("\u{438}")),
    (0x1E05A, Status::Mapped("\u{43A}")),
    (0x1E05B, Status::Mapped("\u{43B}")),
    (0x1E05C, Status::Mapped("\u{43E}")),
    (0x1E05D, Status::Mapped("\u{43F}")),
    (0x1E05E, Status::Mapped("\u{441}")),
    (0x1E05F, Status::Mapped("\u{443}")),
    (0x1E060, Status::Mapped("\u{444}")),
    (0x1E061, Status::Mapped("\u{445}")),
    (0x1E062, Status::Mapped("\u{446}")),
    (0x1E063, Status::Mapped("\u{447}")),
    (0x1E064, Status::Mapped("\u{448}")),
    (0x1E065, Status::Mapped("\u{44A}")),
    (0x1E066, Status::Mapped("\u{44B}")),
    (0x1E067, Status::Mapped("\u{491}")),
    (0x1E068, Status::Mapped("\u{456}")),
    (0x1E069, Status::Mapped("\u{455}")),
    (0x1E06A, Status::Mapped("\u{45F}")),
    (0x1E06B, Status::Mapped("\u{4AB}")),
    (0x1E06C, Status::Mapped("\u{A651}")),
    (0x1E06D, Status::Mapped("\u{4B1}")),
    (0x1E06E, Status::Disallowed),
    (0x1E08F, Status::Valid),
    (0x1E090, Status::Disallowed),
    (0x1E100, Status::Valid),
    (0x1E12D, Status::Disallowed),
    (0x1E130, Status::Valid),
    (0x1E13E, Status::Disallowed),
    (0x1E140, Status::Valid),
    (0x1E14A, Status::Disallowed),
    (0x1E14E, Status::Valid),
    (0x1E150, Status::Disallowed),
    (0x1E290, Status::Valid),
    (0x1E2AF, Status::Disallowed),
    (0x1E2C0, Status::Valid),
    (0x1E2FA, Status::Disallowed),
    (0x1E2FF, Status::Valid),
    (0x1E300, Status::Disallowed),
    (0x1E4D0, Status::Valid),
    (0x1E4FA, Status::Disallowed),
    (0x1E5D0, Status::Valid),
    (0x1E5FB, Status::Disallowed),
    (0x1E5FF, Status::Valid),
    (0x1E600, Status::Disallowed),
    (0x1E6C0, Status::Valid),
    (0x1E6DF, Status::Disallowed),
    (0x1E6E0, Status::Valid),
    (0x1E6F6, Status::Disallowed),
    (0x1E6FE, Status::Valid),
    (0x1E700, Status::Disallowed),
    (0x1E7E0, Status::Valid),
    (0x1E7E7, Status::Disallowed),
    (0x1E7E8, Status::Valid),
    (0x1E7EC, Status::Disallowed),
    (0x1E7ED, Status::Valid),
    (0x1E7EF, Status::Disallowed),
    (0x1E7F0, Status::Valid),
    (0x1E7FF, Status::Disallowed),
    (0x1E800, Status::Valid),
    (0x1E8C5, Status::Disallowed),
    (0x1E8C7, Status::Valid),
    (0x1E8D7, Status::Disallowed),
    (0x1E900, Status::Mapped("\u{1E922}")),
    (0x1E901, Status::Mapped("\u{1E923}")),
    (0x1E902, Status::Mapped("\u{1E924}")),
    (0x1E903, Status::Mapped("\u{1E925}")),
    (0x1E904, Status::Mapped("\u{1E926}")),
    (0x1E905, Status::Mapped("\u{1E927}")),
    (0x1E906, Status::Mapped("\u{1E928}")),
    (0x1E907, Status::Mapped("\u{1E929}")),
    (0x1E908, Status::Mapped("\u{1E92A}")),
    (0x1E909, Status::Mapped("\u{1E92B}")),
    (0x1E90A, Status::Mapped("\u{1E92C}")),
    (0x1E90B, Status::Mapped("\u{1E92D}")),
    (0x1E90C, Status::Mapped("\u{1E92E}")),
    (0x1E90D, Status::Mapped("\u{1E92F}")),
    (0x1E90E, Status::Mapped("\u{1E930}")),
    (0x1E90F, Status::Mapped("\u{1E931}")),
    (0x1E910, Status::Mapped("\u{1E932}")),
    (0x1E911, Status::Mapped("\u{1E933}")),
    (0x1E912, Status::Mapped("\u{1E934}")),
    (0x1E913, Status::Mapped("\u{1E935}")),
    (0x1E914, Status::Mapped("\u{1E936}")),
    (0x1E915, Status::Mapped("\u{1E937}")),
    (0x1E916, Status::Mapped("\u{1E938}")),
    (0x1E917, Status::Mapped("\u{1E939}")),
    (0x1E918, Status::Mapped("\u{1E93A}")),
    (0x1E919, Status::Mapped("\u{1E93B}")),
    (0x1E91A, Status::Mapped("\u{1E93C}")),
    (0x1E91B, Status::Mapped("\u{1E93D}")),
    (0x1E91C, Status::Mapped("\u{1E93E}")),
    (0x1E91D, Status::Mapped("\u{1E93F}")),
    (0x1E91E, Status::Mapped("\u{1E940}")),
    (0x1E91F, Status::Mapped("\u{1E941}")),
    (0x1E920, Status::Mapped("\u{1E942}")),
    (0x1E921, Status::Mapped("\u{1E943}")),
    (0x1E922, Status::Valid),
    (0x1E94C, Status::Disallowed),
    (0x1E950, Status::Valid),
    (0x1E95A, Status::Disallowed),
    (0x1E95E, Status::Valid),
    (0x1E960, Status::Disallowed),
    (0x1EC71, Status::Valid),
    (0x1ECB5, Status::Disallowed),
    (0x1ED01, Status::Valid),
    (0x1ED3E, Status::Disallowed),
    (0x1EE00, Status::Mapped("\u{627}")),
    (0x1EE01, Status::Mapped("\u{628}")),
    (0x1EE02, Status::Mapped("\u{62C}")),
    (0x1EE03, Status::Mapped("\u{62F}")),
    (0x1EE04, Status::Disallowed),
    (0x1EE05, Status::Mapped("\u{648}")),
    (0x1EE06, Status::Mapped("\u{632}")),
    (0x1EE07, Status::Mapped("\u{62D}")),
    (0x1EE08, Status::Mapped("\u{637}")),
    (0x1EE09, Status::Mapped("\u{64A}")),
    (0x1EE0A, Status::Mapped("\u{643}")),
    (0x1EE0B, Status::Mapped("\u{644}")),
    (0x1EE0C, Status::Mapped("\u{645}")),
    (0x1EE0D, Status::Mapped("\u{646}")),
    (0x1EE0E, Status::Mapped("\u{633}")),
    (0x1EE0F, Status::Mapped("\u{639}")),
    (0x1EE10, Status::Mapped("\u{641}")),
    (0x1EE11, Status::Mapped("\u{635}")),
    (0x1EE12, Status::Mapped("\u{642}")),
    (0x1EE13, Status::Mapped("\u{631}")),
    (0x1EE14, Status::Mapped("\u{634}")),
    (0x1EE15, Status::Mapped("\u{62A}")),
    (0x1EE16, Status::Mapped("\u{62B}")),
    (0x1EE17, Status::Mapped("\u{62E}")),
    (0x1EE18, Status::Mapped("\u{630}")),
    (0x1EE19, Status::Mapped("\u{636}")),
    (0x1EE1A, Status::Mapped("\u{638}")),
    (0x1EE1B, Status::Mapped("\u{63A}")),
    (0x1EE1C, Status::Mapped("\u{66E}")),
    (0x1EE1D, Status::Mapped("\u{6BA}")),
    (0x1EE1E, Status::Mapped("\u{6A1}")),
    (0x1EE1F, Status::Mapped("\u{66F}")),
    (0x1EE20, Status::Disallowed),
    (0x1EE21, Status::Mapped("\u{628}")),
    (0x1EE22, Status::Mapped("\u{62C}")),
    (0x1EE23, Status::Disallowed),
    (0x1EE24, Status::Mapped("\u{647}")),
    (0x1EE25, Status::Disallowed),
    (0x1EE27, Status::Mapped("\u{62D}")),
    (0x1EE28, Status::Disallowed),
    (0x1EE29, Status::Mapped("\u{64A}")),
    (0x1EE2A, Status::Mapped("\u{643}")),
    (0x1EE2B, Status::Mapped("\u{644}")),
    (0x1EE2C, Status::Mapped("\u{645}")),
    (0x1EE2D, Status::Mapped("\u{646}")),
    (0x1EE2E, Status::Mapped("\u{633}")),
    (0x1EE2F, Status::Mapped("\u{639}")),
    (0x1EE30, Status::Mapped("\u{641}")),
    (0x1EE31, Status::Mapped("\u{635}")),
    (0x1EE32, Status::Mapped("\u{642}")),
    (0x1EE33, Status::Disallowed),
    (0x1EE34, Status::Mapped("\u{634}")),
    (0x1EE35, Status::Mapped("\u{62A}")),
    (0x1EE36, Status::Mapped("\u{62B}")),
    (0x1EE37, Status::Mapped("\u{62E}")),
    (0x1EE38, Status::Disallowed),
    (0x1EE39, Status::Mapped("\u{636}")),
    (0x1EE3A, Status::Disallowed),
    (0x1EE3B, Status::Mapped("\u{63A}")),
    (0x1EE3C, Status::Disallowed),
    (0x1EE42, Status::Mapped("\u{62C}")),
    (0x1EE43, Status::Disallowed),
    (0x1EE47, Status::Mapped("\u{62D}")),
    (0x1EE48, Status::Disallowed),
    (0x1EE49, Status::Mapped("\u{64A}")),
    (0x1EE4A, Status::Disallowed),
    (0x1EE4B, Status::Mapped("\u{644}")),
    (0x1EE4C, Status::Disallowed),
    (0x1EE4D, Status::Mapped("\u{646}")),
    (0x1EE4E, Status::Mapped("\u{633}")),
    (0x1EE4F, Status::Mapped("\u{639}")),
    (0x1EE50, Status::Disallowed),
    (0x1EE51, Status::Mapped("\u{635}")),
    (0x1EE52, Status::Mapped("\u{642}")),
    (0x1EE53, Status::Disallowed),
    (0x1EE54, Status::Mapped("\u{634}")),
    (0x1EE55, Status::Disallowed),
    (0x1EE57, Status::Mapped("\u{62E}")),
    (0x1EE58, Status::Disallowed),
    (0x1EE59, Status::Mapped("\u{636}")),
    (0x1EE5A, Status::Disallowed),
    (0x1EE5B, Status::Mapped("\u{63A}")),
    (0x1EE5C, Status::Disallowed),
    (0x1EE5D, Status::Mapped("\u{6BA}")),
    (0x1EE5E, Status::Disallowed),
    (0x1EE5F, Status::Mapped("\u{66F}")),
    (0x1EE60, Status::Disallowed),
    (0x1EE61, Status::Mapped("\u{628}")),
    (0x1EE62, Status::Mapped("\u{62C}")),
    (0x1EE63, Status::Disallowed),
    (0x1EE64, Status::Mapped("\u{647}")),
    (0x1EE65, Status::Disallowed),
    (0x1EE67, Status::Mapped("\u{62D}")),
    (0x1EE68, Status::Mapped("\u{637}")),
    (0x1EE69, Status::Mapped("\u{64A}")),
    (0x1EE6A, Status::Mapped("\u{643}")),
    (0x1EE6B, Status::Disallowed),
    (0x1EE6C, Status::Mapped("\u{645}")),
    (0x1EE6D, Status::Mapped("\u{646}")),
    (0x1EE6E, Status::Mapped("\u{633}")),
    (0x1EE6F, Status::Mapped("\u{639}")),
    (0x1EE70, Status::Mapped("\u{641}")),
    (0x1EE71, Status::Mapped("\u{635}")),
    (0x1EE72, Status::Mapped("\u{642}")),
    (0x1EE73, Status::Disallowed),
    (0x1EE74, Status::Mapped("\u{634}")),
    (0x1EE75, Status::Mapped("\u{62A}")),
    (0x1EE76, Status::Mapped("\u{62B}")),
    (0x1EE77, Status::Mapped("\u{62E}")),
    (0x1EE78, Status::Disallowed),
    (0x1EE79, Status::Mapped("\u{636}")),
    (0x1EE7A, Status::Mapped("\u{638}")),
    (0x1EE7B, Status::Mapped("\u{63A}")),
    (0x1EE7C, Status::Mapped("\u{66E}")),
    (0x1EE7D, Status::Disallowed),
    (0x1EE7E, Status::Mapped("\u{6A1}")),
    (0x1EE7F, Status::Disallowed),
    (0x1EE80, Status::Mapped("\u{627}")),
    (0x1EE81, Status::Mapped("\u{628}")),
    (0x1EE82, Status::Mapped("\u{62C}")),
    (0x1EE83, Status::Mapped("\u{62F}")),
    (0x1EE84, Status::Mapped("\u{647}")),
    (0x1EE85, Status::Mapped("\u{648}")),
    (0x1EE86, Status::Mapped("\u{632}")),
    (0x1EE87, Status::Mapped("\u{62D}")),
    (0x1EE88, Status::Mapped("\u{637}")),
    (0x1EE89, Status::Mapped("\u{64A}")),
    (0x1EE8A, Status::Disallowed),
    (0x1EE8B, Status::Mapped("\u{644}")),
    (0x1EE8C, Status::Mapped("\u{645}")),
    (0x1EE8D, Status::Mapped("\u{646}")),
    (0x1EE8E, Status::Mapped("\u{633}")),
    (0x1EE8F, Status::Mapped("\u{639}")),
    (0x1EE90, Status::Mapped("\u{641}")),
    (0x1EE91, Status::Mapped("\u{635}")),
    (0x1EE92, Status::Mapped("\u{642}")),
    (0x1EE93, Status::Mapped("\u{631}")),
    (0x1EE94, Status::Mapped("\u{634}")),
    (0x1EE95, Status::Mapped("\u{62A}")),
    (0x1EE96, Status::Mapped("\u{62B}")),
    (0x1EE97, Status::Mapped("\u{62E}")),
    (0x1EE98, Status::Mapped("\u{630}")),
    (0x1EE99, Status::Mapped("\u{636}")),
    (0x1EE9A, Status::Mapped("\u{638}")),
    (0x1EE9B, Status::Mapped("\u{63A}")),
    (0x1EE9C, Status::Disallowed),
    (0x1EEA1, Status::Mapped("\u{628}")),
    (0x1EEA2, Status::Mapped("\u{62C}")),
    (0x1EEA3, Status::Mapped("\u{62F}")),
    (0x1EEA4, Status::Disallowed),
    (0x1EEA5, Status::Mapped("\u{648}")),
    (0x1EEA6, Status::Mapped("\u{632}")),
    (0x1EEA7, Status::Mapped("\u{62D}")),
    (0x1EEA8, Status::Mapped("\u{637}")),
    (0x1EEA9, Status::Mapped("\u{64A}")),
    (0x1EEAA, Status::Disallowed),
    (0x1EEAB, Status::Mapped("\u{644}")),
    (0x1EEAC, Status::Mapped("\u{645}")),
    (0x1EEAD, Status::Mapped("\u{646}")),
    (0x1EEAE, Status::Mapped("\u{633}")),
    (0x1EEAF, Status::Mapped("\u{639}")),
    (0x1EEB0, Status::Mapped("\u{641}")),
    (0x1EEB1, Status::Mapped("\u{635}")),
    (0x1EEB2, Status::Mapped("\u{642}")),
    (0x1EEB3, Status::Mapped("\u{631}")),
    (0x1EEB4, Status::Mapped("\u{634}")),
    (0x1EEB5, Status::Mapped("\u{62A}")),
    (0x1EEB6, Status::Mapped("\u{62B}")),
    (0x1EEB7, Status::Mapped("\u{62E}")),
    (0x1EEB8, Status::Mapped("\u{630}")),
    (0x1EEB9, Status::Mapped("\u{636}")),
    (0x1EEBA, Status::Mapped("\u{638}")),
    (0x1EEBB, Status::Mapped("\u{63A}")),
    (0x1EEBC, Status::Disallowed),
    (0x1EEF0, Status::Valid),
    (0x1EEF2, Status::Disallowed),
    (0x1F000, Status::Valid),
    (0x1F02C, Status::Disallowed),
    (0x1F030, Status::Valid),
    (0x1F094, Status::Disallowed),
    (0x1F0A0, Status::Valid),
    (0x1F0AF, Status::Disallowed),
    (0x1F0B1, Status::Valid),
    (0x1F0C0, Status::Disallowed),
    (0x1F0C1, Status::Valid),
    (0x1F0D0, Status::Disallowed),
    (0x1F0D1, Status::Valid),
    (0x1F0F6, Status::Disallowed),
    (0x1F101, Status::Mapped("0,")),
    (0x1F102, Status::Mapped("1,")),
    (0x1F103, Status::Mapped("2,")),
    (0x1F104, Status::Mapped("3,")),
    (0x1F105, Status::Mapped("4,")),
    (0x1F106, Status::Mapped("5,")),
    (0x1F107, Status::Mapped("6,")),
    (0x1F108, Status::Mapped("7,")),
    (0x1F109, Status::Mapped("8,")),
    (0x1F10A, Status::Mapped("9,")),
    (0x1F10B, Status::Valid),
    (0x1F110, Status::Mapped("(a)")),
    (0x1F111, Status::Mapped("(b)")),
    (0x1F112, Status::Mapped("(c)")),
    (0x1F113, Status::Mapped("(d)")),
    (0x1F114, Status::Mapped("(e)")),
    (0x1F115, Status::Mapped("(f)")),
    (0x1F116, Status::Mapped("(g)")),
    (0x1F117, Status::Mapped("(h)")),
    (0x1F118, Status::Mapped("(i)")),
    (0x1F119, Status::Mapped("(j)")),
    (0x1F11A, Status::Mapped("(k)")),
    (0x1F11B, Status::Mapped("(l)")),
    (0x1F11C, Status::Mapped("(m)")),
    (0x1F11D, Status::Mapped("(n)")),
    (0x1F11E, Status::Mapped("(o)")),
    (0x1F11F, Status::Mapped("(p)")),
    (0x1F120, Status::Mapped("(q)")),
    (0x1F121, Status::Mapped("(r)")),
    (0x1F122, Status::Mapped("(s)")),
    (0x1F123, Status::Mapped("(t)")),
    (0x1F124, Status::Mapped("(u)")),
    (0x1F125, Status::Mapped("(v)")),
    (0x1F126, Status::Mapped("(w)")),
    (0x1F127, Status::Mapped("(x)")),
    (0x1F128, Status::Mapped("(y)")),
    (0x1F129, Status::Mapped("(z)")),
    (0x1F12A, Status::Mapped("\u{3014}s\u{3015}")),
    (0x1F12B, Status::Mapped("c")),
    (0x1F12C, Status::Mapped("r")),
    (0x1F12D, Status::Mapped("cd")),
    (0x1F12E, Status::Mapped("wz")),
    (0x1F12F, Status::Valid),
    (0x1F130, Status::Mapped("a")),
    (0x1F131, Status::Mapped("b")),
    (0x1F132, Status::Mapped("c")),
    (0x1F133, Status::Mapped("d")),
    (0x1F134, Status::Mapped("e")),
    (0x1F135, Status::Mapped("f")),
    (0x1F136, Status::Mapped("g")),
    (0x1F137, Status::Mapped("h")),
    (0x1F138, Status::Mapped("i")),
    (0x1F139, Status::Mapped("j")),
    (0x1F13A, Status::Mapped("k")),
    (0x1F13B, Status::Mapped("l")),
    (0x1F13C, Status::Mapped("m")),
    (0x1F13D, Status::Mapped("n")),
    (0x1F13E, Status::Mapped("o")),
    (0x1F13F, Status::Mapped("p")),
    (0x1F140, Status::Mapped("q")),
    (0x1F141, Status::Mapped("r")),
    (0x1F142, Status::Mapped("s")),
    (0x1F143, Status::Mapped("t")),
    (0x1F144, Status::Mapped("u")),
    (0x1F145, Status::Mapped("v")),
    (0x1F146, Status::Mapped("w")),
    (0x1F147, Status::Mapped("x")),
    (0x1F148, Status::Mapped("y")),
    (0x1F149, Status::Mapped("z")),
    (0x1F14A, Status::Mapped("hv")),
    (0x1F14B, Status::Mapped("mv")),
    (0x1F14C, Status::Mapped("sd")),
    (0x1F14D, Status::Mapped("ss")),
    (0x1F14E, Status::Mapped("ppv")),
    (0x1F14F, Status::Mapped("wc")),
    (0x1F150, Status::Valid),
    (0x1F16A, Status::Mapped("mc")),
    (0x1F16B, Status::Mapped("md")),
    (0x1F16C, Status::Mapped("mr")),
    (0x1F16D, Status::Valid),
    (0x1F190, Status::Mapped("dj")),
    (0x1F191, Status::Valid),
    (0x1F1AE, Status::Disallowed),
    (0x1F1E6, Status::Valid),
    (0x1F200, Status::Mapped("\u{307B}\u{304B}")),
    (0x1F201, Status::Mapped("\u{30B3}\u{30B3}")),
    (0x1F202, Status::Mapped("\u{30B5}")),
    (0x1F203, Status::Disallowed),
    (0x1F210, Status::Mapped("\u{624B}")),
    (0x1F211, Status::Mapped("\u{5B57}")),
    (0x1F212, Status::Mapped("\u{53CC}")),
    (0x1F213, Status::Mapped("\u{30C7}")),
    (0x1F214, Status::Mapped("\u{4E8C}")),
    (0x1F215, Status::Mapped("\u{591A}")),
    (0x1F216, Status::Mapped("\u{89E3}")),
    (0x1F217, Status::Mapped("\u{5929}")),
    (0x1F218, Status::Mapped("\u{4EA4}")),
    (0x1F219, Status::Mapped("\u{6620}")),
    (0x1F21A, Status::Mapped("\u{7121}")),
    (0x1F21B, Status::Mapped("\u{6599}")),
    (0x1F21C, Status::Mapped("\u{524D}")),
    (0x1F21D, Status::Mapped("\u{5F8C}")),
    (0x1F21E, Status::Mapped("\u{518D}")),
    (0x1F21F, Status::Mapped("\u{65B0}")),
    (0x1F220, Status::Mapped("\u{521D}")),
    (0x1F221, Status::Mapped("\u{7D42}")),
    (0x1F222, Status::Mapped("\u{751F}")),
    (0x1F223, Status::Mapped("\u{8CA9}")),
    (0x1F224, Status::Mapped("\u{58F0}")),
    (0x1F225, Status::Mapped("\u{5439}")),
    (0x1F226, Status::Mapped("\u{6F14}")),
    (0x1F227, Status::Mapped("\u{6295}")),
    (0x1F228, Status::Mapped("\u{6355}")),
    (0x1F229, Status::Mapped("\u{4E00}")),
    (0x1F22A, Status::Mapped("\u{4E09}")),
    (0x1F22B, Status::Mapped("\u{904A}")),
    (0x1F22C, Status::Mapped("\u{5DE6}")),
    (0x1F22D, Status::Mapped("\u{4E2D}")),
    (0x1F22E, Status::Mapped("\u{53F3}")),
    (0x1F22F, Status::Mapped("\u{6307}")),
    (0x1F230, Status::Mapped("\u{8D70}")),
    (0x1F231, Status::Mapped("\u{6253}")),
    (0x1F232, Status::Mapped("\u{7981}")),
    (0x1F233, Status::Mapped("\u{7A7A}")),
    (0x1F234, Status::Mapped("\u{5408}")),
    (0x1F235, Status::Mapped("\u{6E80}")),
    (0x1F236, Status::Mapped("\u{6709}")),
    (0x1F237, Status::Mapped("\u{6708}")),
    (0x1F238, Status::Mapped("\u{7533}")),
    (0x1F239, Status::Mapped("\u{5272}")),
    (0x1F23A, Status::Mapped("\u{55B6}")),
    (0x1F23B, Status::Mapped("\u{914D}")),
    (0x1F23C, Status::Disallowed),
    (0x1F240, Status::Mapped("\u{3014}\u{672C}\u{3015}")),
    (0x1F241, Status::Mapped("\u{3014}\u{4E09}\u{3015}")),
    (0x1F242, Status::Mapped("\u{3014}\u{4E8C}\u{3015}")),
    (0x1F243, Status::Mapped("\u{3014}\u{5B89}\u{3015}")),
    (0x1F244, Status::Mapped("\u{3014}\u{70B9}\u{3015}")),
    (0x1F245, Status::Mapped("\u{3014}\u{6253}\u{3015}")),
    (0x1F246, Status::Mapped("\u{3014}\u{76D7}\u{3015}")),
    (0x1F247, Status::Mapped("\u{3014}\u{52DD}\u{3015}")),
    (0x1F248, Status::Mapped("\u{3014}\u{6557}\u{3015}")),
    (0x1F249, Status::Disallowed),
    (0x1F250, Status::Mapped("\u{5F97}")),
    (0x1F251, Status::Mapped("\u{53EF}")),
    (0x1F252, Status::Disallowed),
    (0x1F260, Status::Valid),
    (0x1F266, Status::Disallowed),
    (0x1F300, Status::Valid),
    (0x1F6D9, Status::Disallowed),
    (0x1F6DC, Status::Valid),
    (0x1F6ED, Status::Disallowed),
    (0x1F6F0, Status::Valid),
    (0x1F6FD, Status::Disallowed),
    (0x1F700, Status::Valid),
    (0x1F7DA, Status::Disallowed),
    (0x1F7E0, Status::Valid),
    (0x1F7EC, Status::Disallowed),
    (0x1F7F0, Status::Valid),
    (0x1F7F1, Status::Disallowed),
    (0x1F800, Status::Valid),
    (0x1F80C, Status::Disallowed),
    (0x1F810, Status::Valid),
    (0x1F848, Status::Disallowed),
    (0x1F850, Status::Valid),
    (0x1F85A, Status::Disallowed),
    (0x1F860, Status::Valid),
    (0x1F888, Status::Disallowed),
    (0x1F890, Status::Valid),
    (0x1F8AE, Status::Disallowed),
    (0x1F8B0, Status::Valid),
    (0x1F8BC, Status::Disallowed),
    (0x1F8C0, Status::Valid),
    (0x1F8C2, Status::Disallowed),
    (0x1F8D0, Status::Valid),
    (0x1F8D9, Status::Disallowed),
    (0x1F900, Status::Valid),
    (0x1FA58, Status::Disallowed),
    (0x1FA60, Status::Valid),
    (0x1FA6E, Status::Disallowed),
    (0x1FA70, Status::Valid),
    (0x1FA7D, Status::Disallowed),
    (0x1FA80, Status::Valid),
    (0x1FA8B, Status::Disallowed),
    (0x1FA8E, Status::Valid),
    (0x1FAC7, Status::Disallowed),
    (0x1FAC8, Status::Valid),
    (0x1FAC9, Status::Disallowed),
    (0x1FACD, Status::Valid),
    (0x1FADD, Status::Disallowed),
    (0x1FADF, Status::Valid),
    (0x1FAEB, Status::Disallowed),
    (0x1FAEF, Status::Valid),
    (0x1FAF9, Status::Disallowed),
    (0x1FB00, Status::Valid),
    (0x1FB93, Status::Disallowed),
    (0x1FB94, Status::Valid),
    (0x1FBF0, Status::Mapped("0")),
    (0x1FBF1, Status::Mapped("1")),
    (0x1FBF2, Status::Mapped("2")),
    (0x1FBF3, Status::Mapped("3")),
    (0x1FBF4, Status::Mapped("4")),
    (0x1FBF5, Status::Mapped("5")),
    (0x1FBF6, Status::Mapped("6")),
    (0x1FBF7, Status::Mapped("7")),
    (0x1FBF8, Status::Mapped("8")),
    (0x1FBF9, Status::Mapped("9")),
    (0x1FBFA, Status::Valid),
    (0x1FBFB, Status::Disallowed),
    (0x20000, Status::Valid),
    (0x2A6E0, Status::Disallowed),
    (0x2A700, Status::Valid),
    (0x2B81E, Status::Disallowed),
    (0x2B820, Status::Valid),
    (0x2CEAE, Status::Disallowed),
    (0x2CEB0, Status::Valid),
    (0x2EBE1, Status::Disallowed),
    (0x2EBF0, Status::Valid),
    (0x2EE5E, Status::Disallowed),
    (0x2F800, Status::Mapped("\u{4E3D}")),
    (0x2F801, Status::Mapped("\u{4E38}")),
    (0x2F802, Status::Mapped("\u{4E41}")),
    (0x2F803, Status::Mapped("\u{20122}")),
    (0x2F804, Status::Mapped("\u{4F60}")),
    (0x2F805, Status::Mapped("\u{4FAE}")),
    (0x2F806, Status::Mapped("\u{4FBB}")),
    (0x2F807, Status::Mapped("\u{5002}")),
    (0x2F808, Status::Mapped("\u{507A}")),
    (0x2F809, Status::Mapped("\u{5099}")),
    (0x2F80A, Status::Mapped("\u{50E7}")),
    (0x2F80B, Status::Mapped("\u{50CF}")),
    (0x2F80C, Status::Mapped("\u{349E}")),
    (0x2F80D, Status::Mapped("\u{2063A}")),
    (0x2F80E, Status::Mapped("\u{514D}")),
    (0x2F80F, Status::Mapped("\u{5154}")),
    (0x2F810, Status::Mapped("\u{5164}")),
    (0x2F811, Status::Mapped("\u{5177}")),
    (0x2F812, Status::Mapped("\u{2051C}")),
    (0x2F813, Status::Mapped("\u{34B9}")),
    (0x2F814, Status::Mapped("\u{5167}")),
    (0x2F815, Status::Mapped("\u{518D}")),
    (0x2F816, Status::Mapped("\u{2054B}")),
    (0x2F817, Status::Mapped("\u{5197}")),
    (0x2F818, Status::Mapped("\u{51A4}")),
    (0x2F819, Status::Mapped("\u{4ECC}")),
    (0x2F81A, Status::Mapped("\u{51AC}")),
    (0x2F81B, Status::Mapped("\u{51B5}")),
    (0x2F81C, Status::Mapped("\u{291DF}")),
    (0x2F81D, Status::Mapped("\u{51F5}")),
    (0x2F81E, Status::Mapped("\u{5203}")),
    (0x2F81F, Status::Mapped("\u{34DF}")),
    (0x2F820, Status::Mapped("\u{523B}")),
    (0x2F821, Status::Mapped("\u{5246}")),
    (0x2F822, Status::Mapped("\u{5272}")),
    (0x2F823, Status::Mapped("\u{5277}")),
    (0x2F824, Status::Mapped("\u{3515}")),
    (0x2F825, Status::Mapped("\u{52C7}")),
    (0x2F826, Status::Mapped("\u{52C9}")),
    (0x2F827, Status::Mapped("\u{52E4}")),
    (0x2F828, Status::Mapped("\u{52FA}")),
    (0x2F829, Status::Mapped("\u{5305}")),
    (0x2F82A, Status::Mapped("\u{5306}")),
    (0x2F82B, Status::Mapped("\u{5317}")),
    (0x2F82C, Status::Mapped("\u{5349}")),
    (0x2F82D, Status::Mapped("\u{5351}")),
    (0x2F82E, Status::Mapped("\u{535A}")),
    (0x2F82F, Status::Mapped("\u{5373}")),
    (0x2F830, Status::Mapped("\u{537D}")),
    (0x2F831, Status::Mapped("\u{537F}")),
    (0x2F834, Status::Mapped("\u{20A2C}")),
    (0x2F835, Status::Mapped("\u{7070}")),
    (0x2F836, Status::Mapped("\u{53CA}")),
    (0x2F837, Status::Mapped("\u{53DF}")),
    (0x2F838, Status::Mapped("\u{20B63}")),
    (0x2F839, Status::Mapped("\u{53EB}")),
    (0x2F83A, Status::Mapped("\u{53F1}")),
    (0x2F83B, Status::Mapped("\u{5406}")),
    (0x2F83C, Status::Mapped("\u{549E}")),
    (0x2F83D, Status::Mapped("\u{5438}")),
    (0x2F83E, Status::Mapped("\u{5448}")),
    (0x2F83F, Status::Mapped("\u{5468}")),
    (0x2F840, Status::Mapped("\u{54A2}")),
    (0x2F841, Status::Mapped("\u{54F6}")),
    (0x2F842, Status::Mapped("\u{5510}")),
    (0x2F843, Status::Mapped("\u{5553}")),
    (0x2F844, Status::Mapped("\u{5563}")),
    (0x2F845, Status::Mapped("\u{5584}")),
    (0x2F847, Status::Mapped("\u{5599}")),
    (0x2F848, Status::Mapped("\u{55AB}")),
    (0x2F849, Status::Mapped("\u{55B3}")),
    (0x2F84A, Status::Mapped("\u{55C2}")),
    (0x2F84B, Status::Mapped("\u{5716}")),
    (0x2F84C, Status::Mapped("\u{5606}")),
    (0x2F84D, Status::Mapped("\u{5717}")),
    (0x2F84E, Status::Mapped("\u{5651}")),
    (0x2F84F, Status::Mapped("\u{5674}")),
    (0x2F850, Status::Mapped("\u{5207}")),
    (0x2F851, Status::Mapped("\u{58EE}")),
    (0x2F852, Status::Mapped("\u{57CE}")),
    (0x2F853, Status::Mapped("\u{57F4}")),
    (0x2F854, Status::Mapped("\u{580D}")),
    (0x2F855, Status::Mapped("\u{578B}")),
    (0x2F856, Status::Mapped("\u{5832}")),
    (0x2F857, Status::Mapped("\u{5831}")),
    (0x2F858, Status::Mapped("\u{58AC}")),
    (0x2F859, Status::Mapped("\u{214E4}")),
    (0x2F85A, Status::Mapped("\u{58F2}")),
    (0x2F85B, Status::Mapped("\u{58F7}")),
    (0x2F85C, Status::Mapped("\u{5906}")),
    (0x2F85D, Status::Mapped("\u{591A}")),
    (0x2F85E, Status::Mapped("\u{5922}")),
    (0x2F85F, Status::Mapped("\u{5962}")),
    (0x2F860, Status::Mapped("\u{216A8}")),
    (0x2F861, Status::Mapped("\u{216EA}")),
    (0x2F862, Status::Mapped("\u{59EC}")),
    (0x2F863, Status::Mapped("\u{5A1B}")),
    (0x2F864, Status::Mapped("\u{5A27}")),
    (0x2F865, Status::Mapped("\u{59D8}")),
    (0x2F866, Status::Mapped("\u{5A66}")),
    (0x2F867, Status::Mapped("\u{36EE}")),
    (0x2F868, Status::Mapped("\u{36FC}")),
    (0x2F869, Status::Mapped("\u{5B08}")),
    (0x2F86A, Status::Mapped("\u{5B3E}")),
    (0x2F86C, Status::Mapped("\u{219C8}")),
    (0x2F86D, Status::Mapped("\u{5BC3}")),
    (0x2F86E, Status::Mapped("\u{5BD8}")),
    (0x2F86F, Status::Mapped("\u{5BE7}")),
    (0x2F870, Status::Mapped("\u{5BF3}")),
    (0x2F871, Status::Mapped("\u{21B18}")),
    (0x2F872, Status::Mapped("\u{5BFF}")),
    (0x2F873, Status::Mapped("\u{5C06}")),
    (0x2F874, Status::Mapped("\u{5F53}")),
    (0x2F875, Status::Mapped("\u{5C22}")),
    (0x2F876, Status::Mapped("\u{3781}")),
    (0x2F877, Status::Mapped("\u{5C60}")),
    (0x2F878, Status::Mapped("\u{5C6E}")),
    (0x2F879, Status::Mapped("\u{5CC0}")),
    (0x2F87A, Status::Mapped("\u{5C8D}")),
    (0x2F87B, Status::Mapped("\u{21DE4}")),
    (0x2F87C, Status::Mapped("\u{5D43}")),
    (0x2F87D, Status::Mapped("\u{21DE6}")),
    (0x2F87E, Status::Mapped("\u{5D6E}")),
    (0x2F87F, Status::Mapped("\u{5D6B}")),
    (0x2F880, Status::Mapped("\u{5D7C}")),
    (0x2F881, Status::Mapped("\u{5DE1}")),
    (0x2F882, Status::Mapped("\u{5DE2}")),
    (0x2F883, Status::Mapped("\u{382F}")),
    (0x2F884, Status::Mapped("\u{5DFD}")),
    (0x2F885, Status::Mapped("\u{5E28}")),
    (0x2F886, Status::Mapped("\u{5E3D}")),
    (0x2F887, Status::Mapped("\u{5E69}")),
    (0x2F888, Status::Mapped("\u{3862}")),
    (0x2F889, Status::Mapped("\u{22183}")),
    (0x2F88A, Status::Mapped("\u{387C}")),
    (0x2F88B, Status::Mapped("\u{5EB0}")),
    (0x2F88C, Status::Mapped("\u{5EB3}")),
    (0x2F88D, Status::Mapped("\u{5EB6}")),
    (0x2F88E, Status::Mapped("\u{5ECA}")),
    (0x2F88F, Status::Mapped("\u{2A392}")),
    (0x2F890, Status::Mapped("\u{5EFE}")),
    (0x2F891, Status::Mapped("\u{22331}")),
    (0x2F893, Status::Mapped("\u{8201}")),
    (0x2F894, Status::Mapped("\u{5F22}")),
    (0x2F896, Status::Mapped("\u{38C7}")),
    (0x2F897, Status::Mapped("\u{232B8}")),
    (0x2F898, Status::Mapped("\u{261DA}")),
    (0x2F899, Status::Mapped("\u{5F62}")),
    (0x2F89A, Status::Mapped("\u{5F6B}")),
    (0x2F89B, Status::Mapped("\u{38E3}")),
    (0x2F89C, Status::Mapped("\u{5F9A}")),
    (0x2F89D, Status::Mapped("\u{5FCD}")),
    (0x2F89E, Status::Mapped("\u{5FD7}")),
    (0x2F89F, Status::Mapped("\u{5FF9}")),
    (0x2F8A0, Status::Mapped("\u{6081}")),
    (0x2F8A1, Status::Mapped("\u{393A}")),
    (0x2F8A2, Status::Mapped("\u{391C}")),
    (0x2F8A3, Status::Mapped("\u{6094}")),
    (0x2F8A4, Status::Mapped("\u{226D4}")),
    (0x2F8A5, Status::Mapped("\u{60C7}")),
    (0x2F8A6, Status::Mapped("\u{6148}")),
    (0x2F8A7, Status::Mapped("\u{614C}")),
    (0x2F8A8, Status::Mapped("\u{614E}")),
    (0x2F8A9, Status::Mapped("\u{614C}")),
    (0x2F8AA, Status::Mapped("\u{617A}")),
    (0x2F8AB, Status::Mapped("\u{618E}")),
    (0x2F8AC, Status::Mapped("\u{61B2}")),
    (0x2F8AD, Status::Mapped("\u{61A4}")),
    (0x2F8AE, Status::Mapped("\u{61AF}")),
    (0x2F8AF, Status::Mapped("\u{61DE}")),
    (0x2F8B0, Status::Mapped("\u{61F2}")),
    (0x2F8B1, Status::Mapped("\u{61F6}")),
    (0x2F8B2, Status::Mapped("\u{6210}")),
    (0x2F8B3, Status::Mapped("\u{621B}")),
    (0x2F8B4, Status::Mapped("\u{625D}")),
    (0x2F8B5, Status::Mapped("\u{62B1}")),
    (0x2F8B6, Status::Mapped("\u{62D4}")),
    (0x2F8B7, Status::Mapped("\u{6350}")),
    (0x2F8B8, Status::Mapped("\u{22B0C}")),
    (0x2F8B9, Status::Mapped("\u{633D}")),
    (0x2F8BA, Status::Mapped("\u{62FC}")),
    (0x2F8BB, Status::Mapped("\u{6368}")),
    (0x2F8BC, Status::Mapped("\u{6383}")),
    (0x2F8BD, Status::Mapped("\u{63E4}")),
    (0x2F8BE, Status::Mapped("\u{22BF1}")),
    (0x2F8BF, Status::Mapped("\u{6422}")),
    (0x2F8C0, Status::Mapped("\u{63C5}")),
    (0x2F8C1, Status::Mapped("\u{63A9}")),
    (0x2F8C2, Status::Mapped("\u{3A2E}")),
    (0x2F8C3, Status::Mapped("\u{6469}")),
    (0x2F8C4, Status::Mapped("\u{647E}")),
    (0x2F8C5, Status::Mapped("\u{649D}")),
    (0x2F8C6, Status::Mapped("\u{6477}")),
    (0x2F8C7, Status::Mapped("\u{3A6C}")),
    (0x2F8C8, Status::Mapped("\u{654F}")),
    (0x2F8C9, Status::Mapped("\u{656C}")),
    (0x2F8CA, Status::Mapped("\u{2300A}")),
    (0x2F8CB, Status::Mapped("\u{65E3}")),
    (0x2F8CC, Status::Mapped("\u{66F8}")),
    (0x2F8CD, Status::Mapped("\u{6649}")),
    (0x2F8CE, Status::Mapped("\u{3B19}")),
    (0x2F8CF, Status::Mapped("\u{6691}")),
    (0x2F8D0, Status::Mapped("\u{3B08}")),
    (0x2F8D1, Status::Mapped("\u{3AE4}")),
    (0x2F8D2, Status::Mapped("\u{5192}")),
    (0x2F8D3, Status::Mapped("\u{5195}")),
    (0x2F8D4, Status::Mapped("\u{6700}")),
    (0x2F8D5, Status::Mapped("\u{669C}")),
    (0x2F8D6, Status::Mapped("\u{80AD}")),
    (0x2F8D7, Status::Mapped("\u{43D9}")),
    (0x2F8D8, Status::Mapped("\u{6717}")),
    (0x2F8D9, Status::Mapped("\u{671B}")),
    (0x2F8DA, Status::Mapped("\u{6721}")),
    (0x2F8DB, Status::Mapped("\u{675E}")),
    (0x2F8DC, Status::Mapped("\u{6753}")),
    (0x2F8DD, Status::Mapped("\u{233C3}")),
    (0x2F8DE, Status::Mapped("\u{3B49}")),
    (0x2F8DF, Status::Mapped("\u{67FA}")),
    (0x2F8E0, Status::Mapped("\u{6785}")),
    (0x2F8E1, Status::Mapped("\u{6852}")),
    (0x2F8E2, Status::Mapped("\u{6885}")),
    (0x2F8E3, Status::Mapped("\u{2346D}")),
    (0x2F8E4, Status::Mapped("\u{688E}")),
    (0x2F8E5, Status::Mapped("\u{681F}")),
    (0x2F8E6, Status::Mapped("\u{6914}")),
    (0x2F8E7, Status::Mapped("\u{3B9D}")),
    (0x2F8E8, Status::Mapped("\u{6942}")),
    (0x2F8E9, Status::Mapped("\u{69A3}")),
    (0x2F8EA, Status::Mapped("\u{69EA}")),
    (0x2F8EB, Status::Mapped("\u{6AA8}")),
    (0x2F8EC, Status::Mapped("\u{236A3}")),
    (0x2F8ED, Status::Mapped("\u{6ADB}")),
    (0x2F8EE, Status::Mapped("\u{3C18}")),
    (0x2F8EF, Status::Mapped("\u{6B21}")),
    (0x2F8F0, Status::Mapped("\u{238A7}")),
    (0x2F8F1, Status::Mapped("\u{6B54}")),
    (0x2F8F2, Status::Mapped("\u{3C4E}")),
    (0x2F8F3, Status::Mapped("\u{6B72}")),
    (0x2F8F4, Status::Mapped("\u{6B9F}")),
    (0x2F8F5, Status::Mapped("\u{6BBA}")),
    (0x2F8F6, Status::Mapped("\u{6BBB}")),
    (0x2F8F7, Status::Mapped("\u{23A8D}")),
    (0x2F8F8, Status::Mapped("\u{21D0B}")),
    (0x2F8F9, Status::Mapped("\u{23AFA}")),
    (0x2F8FA, Status::Mapped("\u{6C4E}")),
    (0x2F8FB, Status::Mapped("\u{23CBC}")),
    (0x2F8FC, Status::Mapped("\u{6CBF}")),
    (0x2F8FD, Status::Mapped("\u{6CCD}")),
    (0x2F8FE, Status::Mapped("\u{6C67}")),
    (0x2F8FF, Status::Mapped("\u{6D16}")),
    (0x2F900, Status::Mapped("\u{6D3E}")),
    (0x2F901, Status::Mapped("\u{6D77}")),
    (0x2F902, Status::Mapped("\u{6D41}")),
    (0x2F903, Status::Mapped("\u{6D69}")),
    (0x2F904, Status::Mapped("\u{6D78}")),
    (0x2F905, Status::Mapped("\u{6D85}")),
    (0x2F906, Status::Mapped("\u{23D1E}")),
    (0x2F907, Status::Mapped("\u{6D34}")),
    (0x2F908, Status::Mapped("\u{6E2F}")),
    (0x2F909, Status::Mapped("\u{6E6E}")),
    (0x2F90A, Status::Mapped("\u{3D33}")),
    (0x2F90B, Status::Mapped("\u{6ECB}")),
    (0x2F90C, Status::Mapped("\u{6EC7}")),
    (0x2F90D, Status::Mapped("\u{23ED1}")),
    (0x2F90E, Status::Mapped("\u{6DF9}")),
    (0x2F90F, Status::Mapped("\u{6F6E}")),
    (0x2F910, Status::Mapped("\u{23F5E}")),
    (0x2F911, Status::Mapped("\u{23F8E}")),
    (0x2F912, Status::Mapped("\u{6FC6}")),
    (0x2F913, Status::Mapped("\u{7039}")),
    (0x2F914, Status::Mapped("\u{701E}")),
    (0x2F915, Status::Mapped("\u{701B}")),
    (0x2F916, Status::Mapped("\u{3D96}")),
    (0x2F917, Status::Mapped("\u{704A}")),
    (0x2F918, Status::Mapped("\u{707D}")),
    (0x2F919, Status::Mapped("\u{7077}")),
    (0x2F91A, Status::Mapped("\u{70AD}")),
    (0x2F91B, Status::Mapped("\u{20525}")),
    (0x2F91C, Status::Mapped("\u{7145}")),
    (0x2F91D, Status::Mapped("\u{24263}")),
    (0x2F91E, Status::Mapped("\u{719C}")),
    (0x2F91F, Status::Mapped("\u{243AB}")),
    (0x2F920, Status::Mapped("\u{7228}")),
    (0x2F921, Status::Mapped("\u{7235}")),
    (0x2F922, Status::Mapped("\u{7250}")),
    (0x2F923, Status::Mapped("\u{24608}")),
    (0x2F924, Status::Mapped("\u{7280}")),
    (0x2F925, Status::Mapped("\u{7295}")),
    (0x2F926, Status::Mapped("\u{24735}")),
    (0x2F927, Status::Mapped("\u{24814}")),
    (0x2F928, Status::Mapped("\u{737A}")),
    (0x2F929, Status::Mapped("\u{738B}")),
    (0x2F92A, Status::Mapped("\u{3EAC}")),
    (0x2F92B, Status::Mapped("\u{73A5}")),
    (0x2F92C, Status::Mapped("\u{3EB8}")),
    (0x2F92E, Status::Mapped("\u{7447}")),
    (0x2F92F, Status::Mapped("\u{745C}")),
    (0x2F930, Status::Mapped("\u{7471}")),
    (0x2F931, Status::Mapped("\u{7485}")),
    (0x2F932, Status::Mapped("\u{74CA}")),
    (0x2F933, Status::Mapped("\u{3F1B}")),
    (0x2F934, Status::Mapped("\u{7524}")),
    (0x2F935, Status::Mapped("\u{24C36}")),
    (0x2F936, Status::Mapped("\u{753E}")),
    (0x2F937, Status::Mapped("\u{24C92}")),
    (0x2F938, Status::Mapped("\u{7570}")),
    (0x2F939, Status::Mapped("\u{2219F}")),
    (0x2F93A, Status::Mapped("\u{7610}")),
    (0x2F93B, Status::Mapped("\u{24FA1}")),
    (0x2F93C, Status::Mapped("\u{24FB8}")),
    (0x2F93D, Status::Mapped("\u{25044}")),
    (0x2F93E, Status::Mapped("\u{3FFC}")),
    (0x2F93F, Status::Mapped("\u{4008}")),
    (0x2F940, Status::Mapped("\u{76F4}")),
    (0x2F941, Status::Mapped("\u{250F3}")),
    (0x2F942, Status::Mapped("\u{250F2}")),
    (0x2F943, Status::Mapped("\u{25119}")),
    (0x2F944, Status::Mapped("\u{25133}")),
    (0x2F945, Status::Mapped("\u{771E}")),
    (0x2F946, Status::Mapped("\u{771F}")),
    (0x2F948, Status::Mapped("\u{774A}")),
    (0x2F949, Status::Mapped("\u{4039}")),
    (0x2F94A, Status::Mapped("\u{778B}")),
    (0x2F94B, Status::Mapped("\u{4046}")),
    (0x2F94C, Status::Mapped("\u{4096}")),
    (0x2F94D, Status::Mapped("\u{2541D}")),
    (0x2F94E, Status::Mapped("\u{784E}")),
    (0x2F94F, Status::Mapped("\u{788C}")),
    (0x2F950, Status::Mapped("\u{78CC}")),
    (0x2F951, Status::Mapped("\u{40E3}")),
    (0x2F952, Status::Mapped("\u{25626}")),
    (0x2F953, Status::Mapped("\u{7956}")),
    (0x2F954, Status::Mapped("\u{2569A}")),
    (0x2F955, Status::Mapped("\u{256C5}")),
    (0x2F956, Status::Mapped("\u{798F}")),
    (0x2F957, Status::Mapped("\u{79EB}")),
    (0x2F958, Status::Mapped("\u{412F}")),
    (0x2F959, Status::Mapped("\u{7A40}")),
    (0x2F95A, Status::Mapped("\u{7A4A}")),
    (0x2F95B, Status::Mapped("\u{7A4F}")),
    (0x2F95C, Status::Mapped("\u{2597C}")),
    (0x2F95D, Status::Mapped("\u{25AA7}")),
    (0x2F95F, Status::Mapped("\u{7AEE}")),
    (0x2F960, Status::Mapped("\u{4202}")),
    (0x2F961, Status::Mapped("\u{25BAB}")),
    (0x2F962, Status::Mapped("\u{7BC6}")),
    (0x2F963, Status::Mapped("\u{7BC9}")),
    (0x2F964, Status::Mapped("\u{4227}")),
    (0x2F965, Status::Mapped("\u{25C80}")),
    (0x2F966, Status::Mapped("\u{7CD2}")),
    (0x2F967, Status::Mapped("\u{42A0}")),
    (0x2F968, Status::Mapped("\u{7CE8}")),
    (0x2F969, Status::Mapped("\u{7CE3}")),
    (0x2F96A, Status::Mapped("\u{7D00}")),
    (0x2F96B, Status::Mapped("\u{25F86}")),
    (0x2F96C, Status::Mapped("\u{7D63}")),
    (0x2F96D, Status::Mapped("\u{4301}")),
    (0x2F96E, Status::Mapped("\u{7DC7}")),
    (0x2F96F, Status::Mapped("\u{7E02}")),
    (0x2F970, Status::Mapped("\u{7E45}")),
    (0x2F971, Status::Mapped("\u{4334}")),
    (0x2F972, Status::Mapped("\u{26228}")),
    (0x2F973, Status::Mapped("\u{26247}")),
    (0x2F974, Status::Mapped("\u{4359}")),
    (0x2F975, Status::Mapped("\u{262D9}")),
    (0x2F976, Status::Mapped("\u{7F7A}")),
    (0x2F977, Status::Mapped("\u{2633E}")),
    (0x2F978, Status::Mapped("\u{7F95}")),
    (0x2F979, Status::Mapped("\u{7FFA}")),
    (0x2F97A, Status::Mapped("\u{8005}")),
    (0x2F97B, Status::Mapped("\u{264DA}")),
    (0x2F97C, Status::Mapped("\u{26523}")),
    (0x2F97D, Status::Mapped("\u{8060}")),
    (0x2F97E, Status::Mapped("\u{265A8}")),
    (0x2F97F, Status::Mapped("\u{8070}")),
    (0x2F980, Status::Mapped("\u{2335F}")),
    (0x2F981, Status::Mapped("\u{43D5}")),
    (0x2F982, Status::Mapped("\u{80B2}")),
    (0x2F983, Status::Mapped("\u{8103}")),
    (0x2F984, Status::Mapped("\u{440B}")),
    (0x2F985, Status::Mapped("\u{813E}")),
    (0x2F986, Status::Mapped("\u{5AB5}")),
    (0x2F987, Status::Mapped("\u{267A7}")),
    (0x2F988, Status::Mapped("\u{267B5}")),
    (0x2F989, Status::Mapped("\u{23393}")),
    (0x2F98A, Status::Mapped("\u{2339C}")),
    (0x2F98B, Status::Mapped("\u{8201}")),
    (0x2F98C, Status::Mapped("\u{8204}")),
    (0x2F98D, Status::Mapped("\u{8F9E}")),
    (0x2F98E, Status::Mapped("\u{446B}")),
    (0x2F98F, Status::Mapped("\u{8291}")),
    (0x2F990, Status::Mapped("\u{828B}")),
    (0x2F991, Status::Mapped("\u{829D}")),
    (0x2F992, Status::Mapped("\u{52B3}")),
    (0x2F993, Status::Mapped("\u{82B1}")),
    (0x2F994, Status::Mapped("\u{82B3}")),
    (0x2F995, Status::Mapped("\u{82BD}")),
    (0x2F996, Status::Mapped("\u{82E6}")),
    (0x2F997, Status::Mapped("\u{26B3C}")),
    (0x2F998, Status::Mapped("\u{82E5}")),
    (0x2F999, Status::Mapped("\u{831D}")),
    (0x2F99A, Status::Mapped("\u{8363}")),
    (0x2F99B, Status::Mapped("\u{83AD}")),
    (0x2F99C, Status::Mapped("\u{8323}")),
    (0x2F99D, Status::Mapped("\u{83BD}")),
    (0x2F99E, Status::Mapped("\u{83E7}")),
    (0x2F99F, Status::Mapped("\u{8457}")),
    (0x2F9A0, Status::Mapped("\u{8353}")),
    (0x2F9A1, Status::Mapped("\u{83CA}")),
    (0x2F9A2, Status::Mapped("\u{83CC}")),
    (0x2F9A3, Status::Mapped("\u{83DC}")),
    (0x2F9A4, Status::Mapped("\u{26C36}")),
    (0x2F9A5, Status::Mapped("\u{26D6B}")),
    (0x2F9A6, Status::Mapped("\u{26CD5}")),
    (0x2F9A7, Status::Mapped("\u{452B}")),
    (0x2F9A8, Status::Mapped("\u{84F1}")),
    (0x2F9A9, Status::Mapped("\u{84F3}")),
    (0x2F9AA, Status::Mapped("\u{8516}")),
    (0x2F9AB, Status::Mapped("\u{273CA}")),
    (0x2F9AC, Status::Mapped("\u{8564}")),
    (0x2F9AD, Status::Mapped("\u{26F2C}")),
    (0x2F9AE, Status::Mapped("\u{455D}")),
    (0x2F9AF, Status::Mapped("\u{4561}")),
    (0x2F9B0, Status::Mapped("\u{26FB1}")),
    (0x2F9B1, Status::Mapped("\u{270D2}")),
    (0x2F9B2, Status::Mapped("\u{456B}")),
    (0x2F9B3, Status::Mapped("\u{8650}")),
    (0x2F9B4, Status::Mapped("\u{865C}")),
    (0x2F9B5, Status::Mapped("\u{8667}")),
    (0x2F9B6, Status::Mapped("\u{8669}")),
    (0x2F9B7, Status::Mapped("\u{86A9}")),
    (0x2F9B8, Status::Mapped("\u{8688}")),
    (0x2F9B9, Status::Mapped("\u{870E}")),
    (0x2F9BA, Status::Mapped("\u{86E2}")),
    (0x2F9BB, Status::Mapped("\u{8779}")),
    (0x2F9BC, Status::Mapped("\u{8728}")),
    (0x2F9BD, Status::Mapped("\u{876B}")),
    (0x2F9BE, Status::Mapped("\u{8786}")),
    (0x2F9BF, Status::Mapped("\u{45D7}")),
    (0x2F9C0, Status::Mapped("\u{87E1}")),
    (0x2F9C1, Status::Mapped("\u{8801}")),
    (0x2F9C2, Status::Mapped("\u{45F9}")),
    (0x2F9C3, Status::Mapped("\u{8860}")),
    (0x2F9C4, Status::Mapped("\u{8863}")),
    (0x2F9C5, Status::Mapped("\u{27667}")),
    (0x2F9C6, Status::Mapped("\u{88D7}")),
    (0x2F9C7, Status::Mapped("\u{88DE}")),
    (0x2F9C8, Status::Mapped("\u{4635}")),
    (0x2F9C9, Status::Mapped("\u{88FA}")),
    (0x2F9CA, Status::Mapped("\u{34BB}")),
    (0x2F9CB, Status::Mapped("\u{278AE}")),
    (0x2F9CC, Status::Mapped("\u{27966}")),
    (0x2F9CD, Status::Mapped("\u{46BE}")),
    (0x2F9CE, Status::Mapped("\u{46C7}")),
    (0x2F9CF, Status::Mapped("\u{8AA0}")),
    (0x2F9D0, Status::Mapped("\u{8AED}")),
    (0x2F9D1, Status::Mapped("\u{8B8A}")),
    (0x2F9D2, Status::Mapped("\u{8C55}")),
    (0x2F9D3, Status::Mapped("\u{27CA8}")),
    (0x2F9D4, Status::Mapped("\u{8CAB}")),
    (0x2F9D5, Status::Mapped("\u{8CC1}")),
    (0x2F9D6, Status::Mapped("\u{8D1B}")),
    (0x2F9D7, Status::Mapped("\u{8D77}")),
    (0x2F9D8, Status::Mapped("\u{27F2F}")),
    (0x2F9D9, Status::Mapped("\u{20804}")),
    (0x2F9DA, Status::Mapped("\u{8DCB}")),
    (0x2F9DB, Status::Mapped("\u{8DBC}")),
    (0x2F9DC, Status::Mapped("\u{8DF0}")),
    (0x2F9DD, Status::Mapped("\u{208DE}")),
    (0x2F9DE, Status::Mapped("\u{8ED4}")),
    (0x2F9DF, Status::Mapped("\u{8F38}")),
    (0x2F9E0, Status::Mapped("\u{285D2}")),
    (0x2F9E1, Status::Mapped("\u{285ED}")),
    (0x2F9E2, Status::Mapped("\u{9094}")),
    (0x2F9E3, Status::Mapped("\u{90F1}")),
    (0x2F9E4, Status::Mapped("\u{9111}")),
    (0x2F9E5, Status::Mapped("\u{2872E}")),
    (0x2F9E6, Status::Mapped("\u{911B}")),
    (0x2F9E7, Status::Mapped("\u{9238}")),
    (0x2F9E8, Status::Mapped("\u{92D7}")),
    (0x2F9E9, Status::Mapped("\u{92D8}")),
    (0x2F9EA, Status::Mapped("\u{927C}")),
    (0x2F9EB, Status::Mapped("\u{93F9}")),
    (0x2F9EC, Status::Mapped("\u{9415}")),
    (0x2F9ED, Status::Mapped("\u{28BFA}")),
    (0x2F9EE, Status::Mapped("\u{958B}")),
    (0x2F9EF, Status::Mapped("\u{4995}")),
    (0x2F9F0, Status::Mapped("\u{95B7}")),
    (0x2F9F1, Status::Mapped("\u{28D77}")),
    (0x2F9F2, Status::Mapped("\u{49E6}")),
    (0x2F9F3, Status::Mapped("\u{96C3}")),
    (0x2F9F4, Status::Mapped("\u{5DB2}")),
    (0x2F9F5, Status::Mapped("\u{9723}")),
    (0x2F9F6, Status::Mapped("\u{29145}")),
    (0x2F9F7, Status::Mapped("\u{2921A}")),
    (0x2F9F8, Status::Mapped("\u{4A6E}")),
    (0x2F9F9, Status::Mapped("\u{4A76}")),
    (0x2F9FA, Status::Mapped("\u{97E0}")),
    (0x2F9FB, Status::Mapped("\u{2940A}")),
    (0x2F9FC, Status::Mapped("\u{4AB2}")),
    (0x2F9FD, Status::Mapped("\u{29496}")),
    (0x2F9FE, Status::Mapped("\u{980B}")),
    (0x2FA00, Status::Mapped("\u{9829}")),
    (0x2FA01, Status::Mapped("\u{295B6}")),
    (0x2FA02, Status::Mapped("\u{98E2}")),
    (0x2FA03, Status::Mapped("\u{4B33}")),
    (0x2FA04, Status::Mapped("\u{9929}")),
    (0x2FA05, Status::Mapped("\u{99A7}")),
    (0x2FA06, Status::Mapped("\u{99C2}")),
    (0x2FA07, Status::Mapped("\u{99FE}")),
    (0x2FA08, Status::Mapped("\u{4BCE}")),
    (0x2FA09, Status::Mapped("\u{29B30}")),
    (0x2FA0A, Status::Mapped("\u{9B12}")),
    (0x2FA0B, Status::Mapped("\u{9C40}")),
    (0x2FA0C, Status::Mapped("\u{9CFD}")),
    (0x2FA0D, Status::Mapped("\u{4CCE}")),
    (0x2FA0E, Status::Mapped("\u{4CED}")),
    (0x2FA0F, Status::Mapped("\u{9D67}")),
    (0x2FA10, Status::Mapped("\u{2A0CE}")),
    (0x2FA11, Status::Mapped("\u{4CF8}")),
    (0x2FA12, Status::Mapped("\u{2A105}")),
    (0x2FA13, Status::Mapped("\u{2A20E}")),
    (0x2FA14, Status::Mapped("\u{2A291}")),
    (0x2FA15, Status::Mapped("\u{9EBB}")),
    (0x2FA16, Status::Mapped("\u{4D56}")),
    (0x2FA17, Status::Mapped("\u{9EF9}")),
    (0x2FA18, Status::Mapped("\u{9EFE}")),
    (0x2FA19, Status::Mapped("\u{9F05}")),
    (0x2FA1A, Status::Mapped("\u{9F0F}")),
    (0x2FA1B, Status::Mapped("\u{9F16}")),
    (0x2FA1C, Status::Mapped("\u{9F3B}")),
    (0x2FA1D, Status::Mapped("\u{2A600}")),
    (0x2FA1E, Status::Disallowed),
    (0x30000, Status::Valid),
    (0x3134B, Status::Disallowed),
    (0x31350, Status::Valid),
    (0x3347A, Status::Disallowed),
    (0xE0100, Status::Ignored),
    (0xE01F0, Status::Disallowed),
];
