// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Case mapping data.
//!
//! Generated offline from the Unicode Character Database and CaseFolding.txt,
//! version 14.0.0. Do not edit by hand.
//!
//! These are full, context-free case mappings: values may expand to multiple
//! characters. Identity mappings are omitted. The case folding table keeps
//! only the entries that differ from the full lowercase mapping, so callers
//! must fall back to `lowercase_mapping`.

/// Full uppercase mappings, as (codepoint, mapping) pairs sorted by codepoint.
#[rustfmt::skip]
static UPPERCASE: &[(u32, &str)] = &[
    (0x0061, "A"),
    (0x0062, "B"),
    (0x0063, "C"),
    (0x0064, "D"),
    (0x0065, "E"),
    (0x0066, "F"),
    (0x0067, "G"),
    (0x0068, "H"),
    (0x0069, "I"),
    (0x006A, "J"),
    (0x006B, "K"),
    (0x006C, "L"),
    (0x006D, "M"),
    (0x006E, "N"),
    (0x006F, "O"),
    (0x0070, "P"),
    (0x0071, "Q"),
    (0x0072, "R"),
    (0x0073, "S"),
    (0x0074, "T"),
    (0x0075, "U"),
    (0x0076, "V"),
    (0x0077, "W"),
    (0x0078, "X"),
    (0x0079, "Y"),
    (0x007A, "Z"),
    (0x00B5, "\u{39C}"),
    (0x00DF, "SS"),
    (0x00E0, "\u{C0}"),
    (0x00E1, "\u{C1}"),
    (0x00E2, "\u{C2}"),
    (0x00E3, "\u{C3}"),
    (0x00E4, "\u{C4}"),
    (0x00E5, "\u{C5}"),
    (0x00E6, "\u{C6}"),
    (0x00E7, "\u{C7}"),
    (0x00E8, "\u{C8}"),
    (0x00E9, "\u{C9}"),
    (0x00EA, "\u{CA}"),
    (0x00EB, "\u{CB}"),
    (0x00EC, "\u{CC}"),
    (0x00ED, "\u{CD}"),
    (0x00EE, "\u{CE}"),
    (0x00EF, "\u{CF}"),
    (0x00F0, "\u{D0}"),
    (0x00F1, "\u{D1}"),
    (0x00F2, "\u{D2}"),
    (0x00F3, "\u{D3}"),
    (0x00F4, "\u{D4}"),
    (0x00F5, "\u{D5}"),
    (0x00F6, "\u{D6}"),
    (0x00F8, "\u{D8}"),
    (0x00F9, "\u{D9}"),
    (0x00FA, "\u{DA}"),
    (0x00FB, "\u{DB}"),
    (0x00FC, "\u{DC}"),
    (0x00FD, "\u{DD}"),
    (0x00FE, "\u{DE}"),
    (0x00FF, "\u{178}"),
    (0x0101, "\u{100}"),
    (0x0103, "\u{102}"),
    (0x0105, "\u{104}"),
    (0x0107, "\u{106}"),
    (0x0109, "\u{108}"),
    (0x010B, "\u{10A}"),
    (0x010D, "\u{10C}"),
    (0x010F, "\u{10E}"),
    (0x0111, "\u{110}"),
    (0x0113, "\u{112}"),
    (0x0115, "\u{114}"),
    (0x0117, "\u{116}"),
    (0x0119, "\u{118}"),
    (0x011B, "\u{11A}"),
    (0x011D, "\u{11C}"),
    (0x011F, "\u{11E}"),
    (0x0121, "\u{120}"),
    (0x0123, "\u{122}"),
    (0x0125, "\u{124}"),
    (0x0127, "\u{126}"),
    (0x0129, "\u{128}"),
    (0x012B, "\u{12A}"),
    (0x012D, "\u{12C}"),
    (0x012F, "\u{12E}"),
    (0x0131, "I"),
    (0x0133, "\u{132}"),
    (0x0135, "\u{134}"),
    (0x0137, "\u{136}"),
    (0x013A, "\u{139}"),
    (0x013C, "\u{13B}"),
    (0x013E, "\u{13D}"),
    (0x0140, "\u{13F}"),
    (0x0142, "\u{141}"),
    (0x0144, "\u{143}"),
    (0x0146, "\u{145}"),
    (0x0148, "\u{147}"),
    (0x0149, "\u{2BC}N"),
    (0x014B, "\u{14A}"),
    (0x014D, "\u{14C}"),
    (0x014F, "\u{14E}"),
    (0x0151, "\u{150}"),
    (0x0153, "\u{152}"),
    (0x0155, "\u{154}"),
    (0x0157, "\u{156}"),
    (0x0159, "\u{158}"),
    (0x015B, "\u{15A}"),
    (0x015D, "\u{15C}"),
    (0x015F, "\u{15E}"),
    (0x0161, "\u{160}"),
    (0x0163, "\u{162}"),
    (0x0165, "\u{164}"),
    (0x0167, "\u{166}"),
    (0x0169, "\u{168}"),
    (0x016B, "\u{16A}"),
    (0x016D, "\u{16C}"),
    (0x016F, "\u{16E}"),
    (0x0171, "\u{170}"),
    (0x0173, "\u{172}"),
    (0x0175, "\u{174}"),
    (0x0177, "\u{176}"),
    (0x017A, "\u{179}"),
    (0x017C, "\u{17B}"),
    (0x017E, "\u{17D}"),
    (0x017F, "S"),
    (0x0180, "\u{243}"),
    (0x0183, "\u{182}"),
    (0x0185, "\u{184}"),
    (0x0188, "\u{187}"),
    (0x018C, "\u{18B}"),
    (0x0192, "\u{191}"),
    (0x0195, "\u{1F6}"),
    (0x0199, "\u{198}"),
    (0x019A, "\u{23D}"),
    (0x019E, "\u{220}"),
    (0x01A1, "\u{1A0}"),
    (0x01A3, "\u{1A2}"),
    (0x01A5, "\u{1A4}"),
    (0x01A8, "\u{1A7}"),
    (0x01AD, "\u{1AC}"),
    (0x01B0, "\u{1AF}"),
    (0x01B4, "\u{1B3}"),
    (0x01B6, "\u{1B5}"),
    (0x01B9, "\u{1B8}"),
    (0x01BD, "\u{1BC}"),
    (0x01BF, "\u{1F7}"),
    (0x01C5, "\u{1C4}"),
    (0x01C6, "\u{1C4}"),
    (0x01C8, "\u{1C7}"),
    (0x01C9, "\u{1C7}"),
    (0x01CB, "\u{1CA}"),
    (0x01CC, "\u{1CA}"),
    (0x01CE, "\u{1CD}"),
    (0x01D0, "\u{1CF}"),
    (0x01D2, "\u{1D1}"),
    (0x01D4, "\u{1D3}"),
    (0x01D6, "\u{1D5}"),
    (0x01D8, "\u{1D7}"),
    (0x01DA, "\u{1D9}"),
    (0x01DC, "\u{1DB}"),
    (0x01DD, "\u{18E}"),
    (0x01DF, "\u{1DE}"),
    (0x01E1, "\u{1E0}"),
    (0x01E3, "\u{1E2}"),
    (0x01E5, "\u{1E4}"),
    (0x01E7, "\u{1E6}"),
    (0x01E9, "\u{1E8}"),
    (0x01EB, "\u{1EA}"),
    (0x01ED, "\u{1EC}"),
    (0x01EF, "\u{1EE}"),
    (0x01F0, "J\u{30C}"),
    (0x01F2, "\u{1F1}"),
    (0x01F3, "\u{1F1}"),
    (0x01F5, "\u{1F4}"),
    (0x01F9, "\u{1F8}"),
    (0x01FB, "\u{1FA}"),
    (0x01FD, "\u{1FC}"),
    (0x01FF, "\u{1FE}"),
    (0x0201, "\u{200}"),
    (0x0203, "\u{202}"),
    (0x0205, "\u{204}"),
    (0x0207, "\u{206}"),
    (0x0209, "\u{208}"),
    (0x020B, "\u{20A}"),
    (0x020D, "\u{20C}"),
    (0x020F, "\u{20E}"),
    (0x0211, "\u{210}"),
    (0x0213, "\u{212}"),
    (0x0215, "\u{214}"),
    (0x0217, "\u{216}"),
    (0x0219, "\u{218}"),
    (0x021B, "\u{21A}"),
    (0x021D, "\u{21C}"),
    (0x021F, "\u{21E}"),
    (0x0223, "\u{222}"),
    (0x0225, "\u{224}"),
    (0x0227, "\u{226}"),
    (0x0229, "\u{228}"),
    (0x022B, "\u{22A}"),
    (0x022D, "\u{22C}"),
    (0x022F, "\u{22E}"),
    (0x0231, "\u{230}"),
    (0x0233, "\u{232}"),
    (0x023C, "\u{23B}"),
    (0x023F, "\u{2C7E}"),
    (0x0240, "\u{2C7F}"),
    (0x0242, "\u{241}"),
    (0x0247, "\u{246}"),
    (0x0249, "\u{248}"),
    (0x024B, "\u{24A}"),
    (0x024D, "\u{24C}"),
    (0x024F, "\u{24E}"),
    (0x0250, "\u{2C6F}"),
    (0x0251, "\u{2C6D}"),
    (0x0252, "\u{2C70}"),
    (0x0253, "\u{181}"),
    (0x0254, "\u{186}"),
    (0x0256, "\u{189}"),
    (0x0257, "\u{18A}"),
    (0x0259, "\u{18F}"),
    (0x025B, "\u{190}"),
    (0x025C, "\u{A7AB}"),
    (0x0260, "\u{193}"),
    (0x0261, "\u{A7AC}"),
    (0x0263, "\u{194}"),
    (0x0265, "\u{A78D}"),
    (0x0266, "\u{A7AA}"),
    (0x0268, "\u{197}"),
    (0x0269, "\u{196}"),
    (0x026A, "\u{A7AE}"),
    (0x026B, "\u{2C62}"),
    (0x026C, "\u{A7AD}"),
    (0x026F, "\u{19C}"),
    (0x0271, "\u{2C6E}"),
    (0x0272, "\u{19D}"),
    (0x0275, "\u{19F}"),
    (0x027D, "\u{2C64}"),
    (0x0280, "\u{1A6}"),
    (0x0282, "\u{A7C5}"),
    (0x0283, "\u{1A9}"),
    (0x0287, "\u{A7B1}"),
    (0x0288, "\u{1AE}"),
    (0x0289, "\u{244}"),
    (0x028A, "\u{1B1}"),
    (0x028B, "\u{1B2}"),
    (0x028C, "\u{245}"),
    (0x0292, "\u{1B7}"),
    (0x029D, "\u{A7B2}"),
    (0x029E, "\u{A7B0}"),
    (0x0345, "\u{399}"),
    (0x0371, "\u{370}"),
    (0x0373, "\u{372}"),
    (0x0377, "\u{376}"),
    (0x037B, "\u{3FD}"),
    (0x037C, "\u{3FE}"),
    (0x037D, "\u{3FF}"),
    (0x0390, "\u{399}\u{308}\u{301}"),
    (0x03AC, "\u{386}"),
    (0x03AD, "\u{388}"),
    (0x03AE, "\u{389}"),
    (0x03AF, "\u{38A}"),
    (0x03B0, "\u{3A5}\u{308}\u{301}"),
    (0x03B1, "\u{391}"),
    (0x03B2, "\u{392}"),
    (0x03B3, "\u{393}"),
    (0x03B4, "\u{394}"),
    (0x03B5, "\u{395}"),
    (0x03B6, "\u{396}"),
    (0x03B7, "\u{397}"),
    (0x03B8, "\u{398}"),
    (0x03B9, "\u{399}"),
    (0x03BA, "\u{39A}"),
    (0x03BB, "\u{39B}"),
    (0x03BC, "\u{39C}"),
    (0x03BD, "\u{39D}"),
    (0x03BE, "\u{39E}"),
    (0x03BF, "\u{39F}"),
    (0x03C0, "\u{3A0}"),
    (0x03C1, "\u{3A1}"),
    (0x03C2, "\u{3A3}"),
    (0x03C3, "\u{3A3}"),
    (0x03C4, "\u{3A4}"),
    (0x03C5, "\u{3A5}"),
    (0x03C6, "\u{3A6}"),
    (0x03C7, "\u{3A7}"),
    (0x03C8, "\u{3A8}"),
    (0x03C9, "\u{3A9}"),
    (0x03CA, "\u{3AA}"),
    (0x03CB, "\u{3AB}"),
    (0x03CC, "\u{38C}"),
    (0x03CD, "\u{38E}"),
    (0x03CE, "\u{38F}"),
    (0x03D0, "\u{392}"),
    (0x03D1, "\u{398}"),
    (0x03D5, "\u{3A6}"),
    (0x03D6, "\u{3A0}"),
    (0x03D7, "\u{3CF}"),
    (0x03D9, "\u{3D8}"),
    (0x03DB, "\u{3DA}"),
    (0x03DD, "\u{3DC}"),
    (0x03DF, "\u{3DE}"),
    (0x03E1, "\u{3E0}"),
    (0x03E3, "\u{3E2}"),
    (0x03E5, "\u{3E4}"),
    (0x03E7, "\u{3E6}"),
    (0x03E9, "\u{3E8}"),
    (0x03EB, "\u{3EA}"),
    (0x03ED, "\u{3EC}"),
    (0x03EF, "\u{3EE}"),
    (0x03F0, "\u{39A}"),
    (0x03F1, "\u{3A1}"),
    (0x03F2, "\u{3F9}"),
    (0x03F3, "\u{37F}"),
    (0x03F5, "\u{395}"),
    (0x03F8, "\u{3F7}"),
    (0x03FB, "\u{3FA}"),
    (0x0430, "\u{410}"),
    (0x0431, "\u{411}"),
    (0x0432, "\u{412}"),
    (0x0433, "\u{413}"),
    (0x0434, "\u{414}"),
    (0x0435, "\u{415}"),
    (0x0436, "\u{416}"),
    (0x0437, "\u{417}"),
    (0x0438, "\u{418}"),
    (0x0439, "\u{419}"),
    (0x043A, "\u{41A}"),
    (0x043B, "\u{41B}"),
    (0x043C, "\u{41C}"),
    (0x043D, "\u{41D}"),
    (0x043E, "\u{41E}"),
    (0x043F, "\u{41F}"),
    (0x0440, "\u{420}"),
    (0x0441, "\u{421}"),
    (0x0442, "\u{422}"),
    (0x0443, "\u{423}"),
    (0x0444, "\u{424}"),
    (0x0445, "\u{425}"),
    (0x0446, "\u{426}"),
    (0x0447, "\u{427}"),
    (0x0448, "\u{428}"),
    (0x0449, "\u{429}"),
    (0x044A, "\u{42A}"),
    (0x044B, "\u{42B}"),
    (0x044C, "\u{42C}"),
    (0x044D, "\u{42D}"),
    (0x044E, "\u{42E}"),
    (0x044F, "\u{42F}"),
    (0x0450, "\u{400}"),
    (0x0451, "\u{401}"),
    (0x0452, "\u{402}"),
    (0x0453, "\u{403}"),
    (0x0454, "\u{404}"),
    (0x0455, "\u{405}"),
    (0x0456, "\u{406}"),
    (0x0457, "\u{407}"),
    (0x0458, "\u{408}"),
    (0x0459, "\u{409}"),
    (0x045A, "\u{40A}"),
    (0x045B, "\u{40B}"),
    (0x045C, "\u{40C}"),
    (0x045D, "\u{40D}"),
    (0x045E, "\u{40E}"),
    (0x045F, "\u{40F}"),
    (0x0461, "\u{460}"),
    (0x0463, "\u{462}"),
    (0x0465, "\u{464}"),
    (0x0467, "\u{466}"),
    (0x0469, "\u{468}"),
    (0x046B, "\u{46A}"),
    (0x046D, "\u{46C}"),
    (0x046F, "\u{46E}"),
    (0x0471, "\u{470}"),
    (0x0473, "\u{472}"),
    (0x0475, "\u{474}"),
    (0x0477, "\u{476}"),
    (0x0479, "\u{478}"),
    (0x047B, "\u{47A}"),
    (0x047D, "\u{47C}"),
    (0x047F, "\u{47E}"),
    (0x0481, "\u{480}"),
    (0x048B, "\u{48A}"),
    (0x048D, "\u{48C}"),
    (0x048F, "\u{48E}"),
    (0x0491, "\u{490}"),
    (0x0493, "\u{492}"),
    (0x0495, "\u{494}"),
    (0x0497, "\u{496}"),
    (0x0499, "\u{498}"),
    (0x049B, "\u{49A}"),
    (0x049D, "\u{49C}"),
    (0x049F, "\u{49E}"),
    (0x04A1, "\u{4A0}"),
    (0x04A3, "\u{4A2}"),
    (0x04A5, "\u{4A4}"),
    (0x04A7, "\u{4A6}"),
    (0x04A9, "\u{4A8}"),
    (0x04AB, "\u{4AA}"),
    (0x04AD, "\u{4AC}"),
    (0x04AF, "\u{4AE}"),
    (0x04B1, "\u{4B0}"),
    (0x04B3, "\u{4B2}"),
    (0x04B5, "\u{4B4}"),
    (0x04B7, "\u{4B6}"),
    (0x04B9, "\u{4B8}"),
    (0x04BB, "\u{4BA}"),
    (0x04BD, "\u{4BC}"),
    (0x04BF, "\u{4BE}"),
    (0x04C2, "\u{4C1}"),
    (0x04C4, "\u{4C3}"),
    (0x04C6, "\u{4C5}"),
    (0x04C8, "\u{4C7}"),
    (0x04CA, "\u{4C9}"),
    (0x04CC, "\u{4CB}"),
    (0x04CE, "\u{4CD}"),
    (0x04CF, "\u{4C0}"),
    (0x04D1, "\u{4D0}"),
    (0x04D3, "\u{4D2}"),
    (0x04D5, "\u{4D4}"),
    (0x04D7, "\u{4D6}"),
    (0x04D9, "\u{4D8}"),
    (0x04DB, "\u{4DA}"),
    (0x04DD, "\u{4DC}"),
    (0x04DF, "\u{4DE}"),
    (0x04E1, "\u{4E0}"),
    (0x04E3, "\u{4E2}"),
    (0x04E5, "\u{4E4}"),
    (0x04E7, "\u{4E6}"),
    (0x04E9, "\u{4E8}"),
    (0x04EB, "\u{4EA}"),
    (0x04ED, "\u{4EC}"),
    (0x04EF, "\u{4EE}"),
    (0x04F1, "\u{4F0}"),
    (0x04F3, "\u{4F2}"),
    (0x04F5, "\u{4F4}"),
    (0x04F7, "\u{4F6}"),
    (0x04F9, "\u{4F8}"),
    (0x04FB, "\u{4FA}"),
    (0x04FD, "\u{4FC}"),
    (0x04FF, "\u{4FE}"),
    (0x0501, "\u{500}"),
    (0x0503, "\u{502}"),
    (0x0505, "\u{504}"),
    (0x0507, "\u{506}"),
    (0x0509, "\u{508}"),
    (0x050B, "\u{50A}"),
    (0x050D, "\u{50C}"),
    (0x050F, "\u{50E}"),
    (0x0511, "\u{510}"),
    (0x0513, "\u{512}"),
    (0x0515, "\u{514}"),
    (0x0517, "\u{516}"),
    (0x0519, "\u{518}"),
    (0x051B, "\u{51A}"),
    (0x051D, "\u{51C}"),
    (0x051F, "\u{51E}"),
    (0x0521, "\u{520}"),
    (0x0523, "\u{522}"),
    (0x0525, "\u{524}"),
    (0x0527, "\u{526}"),
    (0x0529, "\u{528}"),
    (0x052B, "\u{52A}"),
    (0x052D, "\u{52C}"),
    (0x052F, "\u{52E}"),
    (0x0561, "\u{531}"),
    (0x0562, "\u{532}"),
    (0x0563, "\u{533}"),
    (0x0564, "\u{534}"),
    (0x0565, "\u{535}"),
    (0x0566, "\u{536}"),
    (0x0567, "\u{537}"),
    (0x0568, "\u{538}"),
    (0x0569, "\u{539}"),
    (0x056A, "\u{53A}"),
    (0x056B, "\u{53B}"),
    (0x056C, "\u{53C}"),
    (0x056D, "\u{53D}"),
    (0x056E, "\u{53E}"),
    (0x056F, "\u{53F}"),
    (0x0570, "\u{540}"),
    (0x0571, "\u{541}"),
    (0x0572, "\u{542}"),
    (0x0573, "\u{543}"),
    (0x0574, "\u{544}"),
    (0x0575, "\u{545}"),
    (0x0576, "\u{546}"),
    (0x0577, "\u{547}"),
    (0x0578, "\u{548}"),
    (0x0579, "\u{549}"),
    (0x057A, "\u{54A}"),
    (0x057B, "\u{54B}"),
    (0x057C, "\u{54C}"),
    (0x057D, "\u{54D}"),
    (0x057E, "\u{54E}"),
    (0x057F, "\u{54F}"),
    (0x0580, "\u{550}"),
    (0x0581, "\u{551}"),
    (0x0582, "\u{552}"),
    (0x0583, "\u{553}"),
    (0x0584, "\u{554}"),
    (0x0585, "\u{555}"),
    (0x0586, "\u{556}"),
    (0x0587, "\u{535}\u{552}"),
    (0x10D0, "\u{1C90}"),
    (0x10D1, "\u{1C91}"),
    (0x10D2, "\u{1C92}"),
    (0x10D3, "\u{1C93}"),
    (0x10D4, "\u{1C94}"),
    (0x10D5, "\u{1C95}"),
    (0x10D6, "\u{1C96}"),
    (0x10D7, "\u{1C97}"),
    (0x10D8, "\u{1C98}"),
    (0x10D9, "\u{1C99}"),
    (0x10DA, "\u{1C9A}"),
    (0x10DB, "\u{1C9B}"),
    (0x10DC, "\u{1C9C}"),
    (0x10DD, "\u{1C9D}"),
    (0x10DE, "\u{1C9E}"),
    (0x10DF, "\u{1C9F}"),
    (0x10E0, "\u{1CA0}"),
    (0x10E1, "\u{1CA1}"),
    (0x10E2, "\u{1CA2}"),
    (0x10E3, "\u{1CA3}"),
    (0x10E4, "\u{1CA4}"),
    (0x10E5, "\u{1CA5}"),
    (0x10E6, "\u{1CA6}"),
    (0x10E7, "\u{1CA7}"),
    (0x10E8, "\u{1CA8}"),
    (0x10E9, "\u{1CA9}"),
    (0x10EA, "\u{1CAA}"),
    (0x10EB, "\u{1CAB}"),
    (0x10EC, "\u{1CAC}"),
    (0x10ED, "\u{1CAD}"),
    (0x10EE, "\u{1CAE}"),
    (0x10EF, "\u{1CAF}"),
    (0x10F0, "\u{1CB0}"),
    (0x10F1, "\u{1CB1}"),
    (0x10F2, "\u{1CB2}"),
    (0x10F3, "\u{1CB3}"),
    (0x10F4, "\u{1CB4}"),
    (0x10F5, "\u{1CB5}"),
    (0x10F6, "\u{1CB6}"),
    (0x10F7, "\u{1CB7}"),
    (0x10F8, "\u{1CB8}"),
    (0x10F9, "\u{1CB9}"),
    (0x10FA, "\u{1CBA}"),
    (0x10FD, "\u{1CBD}"),
    (0x10FE, "\u{1CBE}"),
    (0x10FF, "\u{1CBF}"),
    (0x13F8, "\u{13F0}"),
    (0x13F9, "\u{13F1}"),
    (0x13FA, "\u{13F2}"),
    (0x13FB, "\u{13F3}"),
    (0x13FC, "\u{13F4}"),
    (0x13FD, "\u{13F5}"),
    (0x1C80, "\u{412}"),
    (0x1C81, "\u{414}"),
    (0x1C82, "\u{41E}"),
    (0x1C83, "\u{421}"),
    (0x1C84, "\u{422}"),
    (0x1C85, "\u{422}"),
    (0x1C86, "\u{42A}"),
    (0x1C87, "\u{462}"),
    (0x1C88, "\u{A64A}"),
    (0x1D79, "\u{A77D}"),
    (0x1D7D, "\u{2C63}"),
    (0x1D8E, "\u{A7C6}"),
    (0x1E01, "\u{1E00}"),
    (0x1E03, "\u{1E02}"),
    (0x1E05, "\u{1E04}"),
    (0x1E07, "\u{1E06}"),
    (0x1E09, "\u{1E08}"),
    (0x1E0B, "\u{1E0A}"),
    (0x1E0D, "\u{1E0C}"),
    (0x1E0F, "\u{1E0E}"),
    (0x1E11, "\u{1E10}"),
    (0x1E13, "\u{1E12}"),
    (0x1E15, "\u{1E14}"),
    (0x1E17, "\u{1E16}"),
    (0x1E19, "\u{1E18}"),
    (0x1E1B, "\u{1E1A}"),
    (0x1E1D, "\u{1E1C}"),
    (0x1E1F, "\u{1E1E}"),
    (0x1E21, "\u{1E20}"),
    (0x1E23, "\u{1E22}"),
    (0x1E25, "\u{1E24}"),
    (0x1E27, "\u{1E26}"),
    (0x1E29, "\u{1E28}"),
    (0x1E2B, "\u{1E2A}"),
    (0x1E2D, "\u{1E2C}"),
    (0x1E2F, "\u{1E2E}"),
    (0x1E31, "\u{1E30}"),
    (0x1E33, "\u{1E32}"),
    (0x1E35, "\u{1E34}"),
    (0x1E37, "\u{1E36}"),
    (0x1E39, "\u{1E38}"),
    (0x1E3B, "\u{1E3A}"),
    (0x1E3D, "\u{1E3C}"),
    (0x1E3F, "\u{1E3E}"),
    (0x1E41, "\u{1E40}"),
    (0x1E43, "\u{1E42}"),
    (0x1E45, "\u{1E44}"),
    (0x1E47, "\u{1E46}"),
    (0x1E49, "\u{1E48}"),
    (0x1E4B, "\u{1E4A}"),
    (0x1E4D, "\u{1E4C}"),
    (0x1E4F, "\u{1E4E}"),
    (0x1E51, "\u{1E50}"),
    (0x1E53, "\u{1E52}"),
    (0x1E55, "\u{1E54}"),
    (0x1E57, "\u{1E56}"),
    (0x1E59, "\u{1E58}"),
    (0x1E5B, "\u{1E5A}"),
    (0x1E5D, "\u{1E5C}"),
    (0x1E5F, "\u{1E5E}"),
    (0x1E61, "\u{1E60}"),
    (0x1E63, "\u{1E62}"),
    (0x1E65, "\u{1E64}"),
    (0x1E67, "\u{1E66}"),
    (0x1E69, "\u{1E68}"),
    (0x1E6B, "\u{1E6A}"),
    (0x1E6D, "\u{1E6C}"),
    (0x1E6F, "\u{1E6E}"),
    (0x1E71, "\u{1E70}"),
    (0x1E73, "\u{1E72}"),
    (0x1E75, "\u{1E74}"),
    (0x1E77, "\u{1E76}"),
    (0x1E79, "\u{1E78}"),
    (0x1E7B, "\u{1E7A}"),
    (0x1E7D, "\u{1E7C}"),
    (0x1E7F, "\u{1E7E}"),
    (0x1E81, "\u{1E80}"),
    (0x1E83, "\u{1E82}"),
    (0x1E85, "\u{1E84}"),
    (0x1E87, "\u{1E86}"),
    (0x1E89, "\u{1E88}"),
    (0x1E8B, "\u{1E8A}"),
    (0x1E8D, "\u{1E8C}"),
    (0x1E8F, "\u{1E8E}"),
    (0x1E91, "\u{1E90}"),
    (0x1E93, "\u{1E92}"),
    (0x1E95, "\u{1E94}"),
    (0x1E96, "H\u{331}"),
    (0x1E97, "T\u{308}"),
    (0x1E98, "W\u{30A}"),
    (0x1E99, "Y\u{30A}"),
    (0x1E9A, "A\u{2BE}"),
    (0x1E9B, "\u{1E60}"),
    (0x1EA1, "\u{1EA0}"),
    (0x1EA3, "\u{1EA2}"),
    (0x1EA5, "\u{1EA4}"),
    (0x1EA7, "\u{1EA6}"),
    (0x1EA9, "\u{1EA8}"),
    (0x1EAB, "\u{1EAA}"),
    (0x1EAD, "\u{1EAC}"),
    (0x1EAF, "\u{1EAE}"),
    (0x1EB1, "\u{1EB0}"),
    (0x1EB3, "\u{1EB2}"),
    (0x1EB5, "\u{1EB4}"),
    (0x1EB7, "\u{1EB6}"),
    (0x1EB9, "\u{1EB8}"),
    (0x1EBB, "\u{1EBA}"),
    (0x1EBD, "\u{1EBC}"),
    (0x1EBF, "\u{1EBE}"),
    (0x1EC1, "\u{1EC0}"),
    (0x1EC3, "\u{1EC2}"),
    (0x1EC5, "\u{1EC4}"),
    (0x1EC7, "\u{1EC6}"),
    (0x1EC9, "\u{1EC8}"),
    (0x1ECB, "\u{1ECA}"),
    (0x1ECD, "\u{1ECC}"),
    (0x1ECF, "\u{1ECE}"),
    (0x1ED1, "\u{1ED0}"),
    (0x1ED3, "\u{1ED2}"),
    (0x1ED5, "\u{1ED4}"),
    (0x1ED7, "\u{1ED6}"),
    (0x1ED9, "\u{1ED8}"),
    (0x1EDB, "\u{1EDA}"),
    (0x1EDD, "\u{1EDC}"),
    (0x1EDF, "\u{1EDE}"),
    (0x1EE1, "\u{1EE0}"),
    (0x1EE3, "\u{1EE2}"),
    (0x1EE5, "\u{1EE4}"),
    (0x1EE7, "\u{1EE6}"),
    (0x1EE9, "\u{1EE8}"),
    (0x1EEB, "\u{1EEA}"),
    (0x1EED, "\u{1EEC}"),
    (0x1EEF, "\u{1EEE}"),
    (0x1EF1, "\u{1EF0}"),
    (0x1EF3, "\u{1EF2}"),
    (0x1EF5, "\u{1EF4}"),
    (0x1EF7, "\u{1EF6}"),
    (0x1EF9, "\u{1EF8}"),
    (0x1EFB, "\u{1EFA}"),
    (0x1EFD, "\u{1EFC}"),
    (0x1EFF, "\u{1EFE}"),
    (0x1F00, "\u{1F08}"),
    (0x1F01, "\u{1F09}"),
    (0x1F02, "\u{1F0A}"),
    (0x1F03, "\u{1F0B}"),
    (0x1F04, "\u{1F0C}"),
    (0x1F05, "\u{1F0D}"),
    (0x1F06, "\u{1F0E}"),
    (0x1F07, "\u{1F0F}"),
    (0x1F10, "\u{1F18}"),
    (0x1F11, "\u{1F19}"),
    (0x1F12, "\u{1F1A}"),
    (0x1F13, "\u{1F1B}"),
    (0x1F14, "\u{1F1C}"),
    (0x1F15, "\u{1F1D}"),
    (0x1F20, "\u{1F28}"),
    (0x1F21, "\u{1F29}"),
    (0x1F22, "\u{1F2A}"),
    (0x1F23, "\u{1F2B}"),
    (0x1F24, "\u{1F2C}"),
    (0x1F25, "\u{1F2D}"),
    (0x1F26, "\u{1F2E}"),
    (0x1F27, "\u{1F2F}"),
    (0x1F30, "\u{1F38}"),
    (0x1F31, "\u{1F39}"),
    (0x1F32, "\u{1F3A}"),
    (0x1F33, "\u{1F3B}"),
    (0x1F34, "\u{1F3C}"),
    (0x1F35, "\u{1F3D}"),
    (0x1F36, "\u{1F3E}"),
    (0x1F37, "\u{1F3F}"),
    (0x1F40, "\u{1F48}"),
    (0x1F41, "\u{1F49}"),
    (0x1F42, "\u{1F4A}"),
    (0x1F43, "\u{1F4B}"),
    (0x1F44, "\u{1F4C}"),
    (0x1F45, "\u{1F4D}"),
    (0x1F50, "\u{3A5}\u{313}"),
    (0x1F51, "\u{1F59}"),
    (0x1F52, "\u{3A5}\u{313}\u{300}"),
    (0x1F53, "\u{1F5B}"),
    (0x1F54, "\u{3A5}\u{313}\u{301}"),
    (0x1F55, "\u{1F5D}"),
    (0x1F56, "\u{3A5}\u{313}\u{342}"),
    (0x1F57, "\u{1F5F}"),
    (0x1F60, "\u{1F68}"),
    (0x1F61, "\u{1F69}"),
    (0x1F62, "\u{1F6A}"),
    (0x1F63, "\u{1F6B}"),
    (0x1F64, "\u{1F6C}"),
    (0x1F65, "\u{1F6D}"),
    (0x1F66, "\u{1F6E}"),
    (0x1F67, "\u{1F6F}"),
    (0x1F70, "\u{1FBA}"),
    (0x1F71, "\u{1FBB}"),
    (0x1F72, "\u{1FC8}"),
    (0x1F73, "\u{1FC9}"),
    (0x1F74, "\u{1FCA}"),
    (0x1F75, "\u{1FCB}"),
    (0x1F76, "\u{1FDA}"),
    (0x1F77, "\u{1FDB}"),
    (0x1F78, "\u{1FF8}"),
    (0x1F79, "\u{1FF9}"),
    (0x1F7A, "\u{1FEA}"),
    (0x1F7B, "\u{1FEB}"),
    (0x1F7C, "\u{1FFA}"),
    (0x1F7D, "\u{1FFB}"),
    (0x1F80, "\u{1F08}\u{399}"),
    (0x1F81, "\u{1F09}\u{399}"),
    (0x1F82, "\u{1F0A}\u{399}"),
    (0x1F83, "\u{1F0B}\u{399}"),
    (0x1F84, "\u{1F0C}\u{399}"),
    (0x1F85, "\u{1F0D}\u{399}"),
    (0x1F86, "\u{1F0E}\u{399}"),
    (0x1F87, "\u{1F0F}\u{399}"),
    (0x1F88, "\u{1F08}\u{399}"),
    (0x1F89, "\u{1F09}\u{399}"),
    (0x1F8A, "\u{1F0A}\u{399}"),
    (0x1F8B, "\u{1F0B}\u{399}"),
    (0x1F8C, "\u{1F0C}\u{399}"),
    (0x1F8D, "\u{1F0D}\u{399}"),
    (0x1F8E, "\u{1F0E}\u{399}"),
    (0x1F8F, "\u{1F0F}\u{399}"),
    (0x1F90, "\u{1F28}\u{399}"),
    (0x1F91, "\u{1F29}\u{399}"),
    (0x1F92, "\u{1F2A}\u{399}"),
    (0x1F93, "\u{1F2B}\u{399}"),
    (0x1F94, "\u{1F2C}\u{399}"),
    (0x1F95, "\u{1F2D}\u{399}"),
    (0x1F96, "\u{1F2E}\u{399}"),
    (0x1F97, "\u{1F2F}\u{399}"),
    (0x1F98, "\u{1F28}\u{399}"),
    (0x1F99, "\u{1F29}\u{399}"),
    (0x1F9A, "\u{1F2A}\u{399}"),
    (0x1F9B, "\u{1F2B}\u{399}"),
    (0x1F9C, "\u{1F2C}\u{399}"),
    (0x1F9D, "\u{1F2D}\u{399}"),
    (0x1F9E, "\u{1F2E}\u{399}"),
    (0x1F9F, "\u{1F2F}\u{399}"),
    (0x1FA0, "\u{1F68}\u{399}"),
    (0x1FA1, "\u{1F69}\u{399}"),
    (0x1FA2, "\u{1F6A}\u{399}"),
    (0x1FA3, "\u{1F6B}\u{399}"),
    (0x1FA4, "\u{1F6C}\u{399}"),
    (0x1FA5, "\u{1F6D}\u{399}"),
    (0x1FA6, "\u{1F6E}\u{399}"),
    (0x1FA7, "\u{1F6F}\u{399}"),
    (0x1FA8, "\u{1F68}\u{399}"),
    (0x1FA9, "\u{1F69}\u{399}"),
    (0x1FAA, "\u{1F6A}\u{399}"),
    (0x1FAB, "\u{1F6B}\u{399}"),
    (0x1FAC, "\u{1F6C}\u{399}"),
    (0x1FAD, "\u{1F6D}\u{399}"),
    (0x1FAE, "\u{1F6E}\u{399}"),
    (0x1FAF, "\u{1F6F}\u{399}"),
    (0x1FB0, "\u{1FB8}"),
    (0x1FB1, "\u{1FB9}"),
    (0x1FB2, "\u{1FBA}\u{399}"),
    (0x1FB3, "\u{391}\u{399}"),
    (0x1FB4, "\u{386}\u{399}"),
    (0x1FB6, "\u{391}\u{342}"),
    (0x1FB7, "\u{391}\u{342}\u{399}"),
    (0x1FBC, "\u{391}\u{399}"),
    (0x1FBE, "\u{399}"),
    (0x1FC2, "\u{1FCA}\u{399}"),
    (0x1FC3, "\u{397}\u{399}"),
    (0x1FC4, "\u{389}\u{399}"),
    (0x1FC6, "\u{397}\u{342}"),
    (0x1FC7, "\u{397}\u{342}\u{399}"),
    (0x1FCC, "\u{397}\u{399}"),
    (0x1FD0, "\u{1FD8}"),
    (0x1FD1, "\u{1FD9}"),
    (0x1FD2, "\u{399}\u{308}\u{300}"),
    (0x1FD3, "\u{399}\u{308}\u{301}"),
    (0x1FD6, "\u{399}\u{342}"),
    (0x1FD7, "\u{399}\u{308}\u{342}"),
    (0x1FE0, "\u{1FE8}"),
    (0x1FE1, "\u{1FE9}"),
    (0x1FE2, "\u{3A5}\u{308}\u{300}"),
    (0x1FE3, "\u{3A5}\u{308}\u{301}"),
    (0x1FE4, "\u{3A1}\u{313}"),
    (0x1FE5, "\u{1FEC}"),
    (0x1FE6, "\u{3A5}\u{342}"),
    (0x1FE7, "\u{3A5}\u{308}\u{342}"),
    (0x1FF2, "\u{1FFA}\u{399}"),
    (0x1FF3, "\u{3A9}\u{399}"),
    (0x1FF4, "\u{38F}\u{399}"),
    (0x1FF6, "\u{3A9}\u{342}"),
    (0x1FF7, "\u{3A9}\u{342}\u{399}"),
    (0x1FFC, "\u{3A9}\u{399}"),
    (0x214E, "\u{2132}"),
    (0x2170, "\u{2160}"),
    (0x2171, "\u{2161}"),
    (0x2172, "\u{2162}"),
    (0x2173, "\u{2163}"),
    (0x2174, "\u{2164}"),
    (0x2175, "\u{2165}"),
    (0x2176, "\u{2166}"),
    (0x2177, "\u{2167}"),
    (0x2178, "\u{2168}"),
    (0x2179, "\u{2169}"),
    (0x217A, "\u{216A}"),
    (0x217B, "\u{216B}"),
    (0x217C, "\u{216C}"),
    (0x217D, "\u{216D}"),
    (0x217E, "\u{216E}"),
    (0x217F, "\u{216F}"),
    (0x2184, "\u{2183}"),
    (0x24D0, "\u{24B6}"),
    (0x24D1, "\u{24B7}"),
    (0x24D2, "\u{24B8}"),
    (0x24D3, "\u{24B9}"),
    (0x24D4, "\u{24BA}"),
    (0x24D5, "\u{24BB}"),
    (0x24D6, "\u{24BC}"),
    (0x24D7, "\u{24BD}"),
    (0x24D8, "\u{24BE}"),
    (0x24D9, "\u{24BF}"),
    (0x24DA, "\u{24C0}"),
    (0x24DB, "\u{24C1}"),
    (0x24DC, "\u{24C2}"),
    (0x24DD, "\u{24C3}"),
    (0x24DE, "\u{24C4}"),
    (0x24DF, "\u{24C5}"),
    (0x24E0, "\u{24C6}"),
    (0x24E1, "\u{24C7}"),
    (0x24E2, "\u{24C8}"),
    (0x24E3, "\u{24C9}"),
    (0x24E4, "\u{24CA}"),
    (0x24E5, "\u{24CB}"),
    (0x24E6, "\u{24CC}"),
    (0x24E7, "\u{24CD}"),
    (0x24E8, "\u{24CE}"),
    (0x24E9, "\u{24CF}"),
    (0x2C30, "\u{2C00}"),
    (0x2C31, "\u{2C01}"),
    (0x2C32, "\u{2C02}"),
    (0x2C33, "\u{2C03}"),
    (0x2C34, "\u{2C04}"),
    (0x2C35, "\u{2C05}"),
    (0x2C36, "\u{2C06}"),
    (0x2C37, "\u{2C07}"),
    (0x2C38, "\u{2C08}"),
    (0x2C39, "\u{2C09}"),
    (0x2C3A, "\u{2C0A}"),
    (0x2C3B, "\u{2C0B}"),
    (0x2C3C, "\u{2C0C}"),
    (0x2C3D, "\u{2C0D}"),
    (0x2C3E, "\u{2C0E}"),
    (0x2C3F, "\u{2C0F}"),
    (0x2C40, "\u{2C10}"),
    (0x2C41, "\u{2C11}"),
    (0x2C42, "\u{2C12}"),
    (0x2C43, "\u{2C13}"),
    (0x2C44, "\u{2C14}"),
    (0x2C45, "\u{2C15}"),
    (0x2C46, "\u{2C16}"),
    (0x2C47, "\u{2C17}"),
    (0x2C48, "\u{2C18}"),
    (0x2C49, "\u{2C19}"),
    (0x2C4A, "\u{2C1A}"),
    (0x2C4B, "\u{2C1B}"),
    (0x2C4C, "\u{2C1C}"),
    (0x2C4D, "\u{2C1D}"),
    (0x2C4E, "\u{2C1E}"),
    (0x2C4F, "\u{2C1F}"),
    (0x2C50, "\u{2C20}"),
    (0x2C51, "\u{2C21}"),
    (0x2C52, "\u{2C22}"),
    (0x2C53, "\u{2C23}"),
    (0x2C54, "\u{2C24}"),
    (0x2C55, "\u{2C25}"),
    (0x2C56, "\u{2C26}"),
    (0x2C57, "\u{2C27}"),
    (0x2C58, "\u{2C28}"),
    (0x2C59, "\u{2C29}"),
    (0x2C5A, "\u{2C2A}"),
    (0x2C5B, "\u{2C2B}"),
    (0x2C5C, "\u{2C2C}"),
    (0x2C5D, "\u{2C2D}"),
    (0x2C5E, "\u{2C2E}"),
    (0x2C5F, "\u{2C2F}"),
    (0x2C61, "\u{2C60}"),
    (0x2C65, "\u{23A}"),
    (0x2C66, "\u{23E}"),
    (0x2C68, "\u{2C67}"),
    (0x2C6A, "\u{2C69}"),
    (0x2C6C, "\u{2C6B}"),
    (0x2C73, "\u{2C72}"),
    (0x2C76, "\u{2C75}"),
    (0x2C81, "\u{2C80}"),
    (0x2C83, "\u{2C82}"),
    (0x2C85, "\u{2C84}"),
    (0x2C87, "\u{2C86}"),
    (0x2C89, "\u{2C88}"),
    (0x2C8B, "\u{2C8A}"),
    (0x2C8D, "\u{2C8C}"),
    (0x2C8F, "\u{2C8E}"),
    (0x2C91, "\u{2C90}"),
    (0x2C93, "\u{2C92}"),
    (0x2C95, "\u{2C94}"),
    (0x2C97, "\u{2C96}"),
    (0x2C99, "\u{2C98}"),
    (0x2C9B, "\u{2C9A}"),
    (0x2C9D, "\u{2C9C}"),
    (0x2C9F, "\u{2C9E}"),
    (0x2CA1, "\u{2CA0}"),
    (0x2CA3, "\u{2CA2}"),
    (0x2CA5, "\u{2CA4}"),
    (0x2CA7, "\u{2CA6}"),
    (0x2CA9, "\u{2CA8}"),
    (0x2CAB, "\u{2CAA}"),
    (0x2CAD, "\u{2CAC}"),
    (0x2CAF, "\u{2CAE}"),
    (0x2CB1, "\u{2CB0}"),
    (0x2CB3, "\u{2CB2}"),
    (0x2CB5, "\u{2CB4}"),
    (0x2CB7, "\u{2CB6}"),
    (0x2CB9, "\u{2CB8}"),
    (0x2CBB, "\u{2CBA}"),
    (0x2CBD, "\u{2CBC}"),
    (0x2CBF, "\u{2CBE}"),
    (0x2CC1, "\u{2CC0}"),
    (0x2CC3, "\u{2CC2}"),
    (0x2CC5, "\u{2CC4}"),
    (0x2CC7, "\u{2CC6}"),
    (0x2CC9, "\u{2CC8}"),
    (0x2CCB, "\u{2CCA}"),
    (0x2CCD, "\u{2CCC}"),
    (0x2CCF, "\u{2CCE}"),
    (0x2CD1, "\u{2CD0}"),
    (0x2CD3, "\u{2CD2}"),
    (0x2CD5, "\u{2CD4}"),
    (0x2CD7, "\u{2CD6}"),
    (0x2CD9, "\u{2CD8}"),
    (0x2CDB, "\u{2CDA}"),
    (0x2CDD, "\u{2CDC}"),
    (0x2CDF, "\u{2CDE}"),
    (0x2CE1, "\u{2CE0}"),
    (0x2CE3, "\u{2CE2}"),
    (0x2CEC, "\u{2CEB}"),
    (0x2CEE, "\u{2CED}"),
    (0x2CF3, "\u{2CF2}"),
    (0x2D00, "\u{10A0}"),
    (0x2D01, "\u{10A1}"),
    (0x2D02, "\u{10A2}"),
    (0x2D03, "\u{10A3}"),
    (0x2D04, "\u{10A4}"),
    (0x2D05, "\u{10A5}"),
    (0x2D06, "\u{10A6}"),
    (0x2D07, "\u{10A7}"),
    (0x2D08, "\u{10A8}"),
    (0x2D09, "\u{10A9}"),
    (0x2D0A, "\u{10AA}"),
    (0x2D0B, "\u{10AB}"),
    (0x2D0C, "\u{10AC}"),
    (0x2D0D, "\u{10AD}"),
    (0x2D0E, "\u{10AE}"),
    (0x2D0F, "\u{10AF}"),
    (0x2D10, "\u{10B0}"),
    (0x2D11, "\u{10B1}"),
    (0x2D12, "\u{10B2}"),
    (0x2D13, "\u{10B3}"),
    (0x2D14, "\u{10B4}"),
    (0x2D15, "\u{10B5}"),
    (0x2D16, "\u{10B6}"),
    (0x2D17, "\u{10B7}"),
    (0x2D18, "\u{10B8}"),
    (0x2D19, "\u{10B9}"),
    (0x2D1A, "\u{10BA}"),
    (0x2D1B, "\u{10BB}"),
    (0x2D1C, "\u{10BC}"),
    (0x2D1D, "\u{10BD}"),
    (0x2D1E, "\u{10BE}"),
    (0x2D1F, "\u{10BF}"),
    (0x2D20, "\u{10C0}"),
    (0x2D21, "\u{10C1}"),
    (0x2D22, "\u{10C2}"),
    (0x2D23, "\u{10C3}"),
    (0x2D24, "\u{10C4}"),
    (0x2D25, "\u{10C5}"),
    (0x2D27, "\u{10C7}"),
    (0x2D2D, "\u{10CD}"),
    (0xA641, "\u{A640}"),
    (0xA643, "\u{A642}"),
    (0xA645, "\u{A644}"),
    (0xA647, "\u{A646}"),
    (0xA649, "\u{A648}"),
    (0xA64B, "\u{A64A}"),
    (0xA64D, "\u{A64C}"),
    (0xA64F, "\u{A64E}"),
    (0xA651, "\u{A650}"),
    (0xA653, "\u{A652}"),
    (0xA655, "\u{A654}"),
    (0xA657, "\u{A656}"),
    (0xA659, "\u{A658}"),
    (0xA65B, "\u{A65A}"),
    (0xA65D, "\u{A65C}"),
    (0xA65F, "\u{A65E}"),
    (0xA661, "\u{A660}"),
    (0xA663, "\u{A662}"),
    (0xA665, "\u{A664}"),
    (0xA667, "\u{A666}"),
    (0xA669, "\u{A668}"),
    (0xA66B, "\u{A66A}"),
    (0xA66D, "\u{A66C}"),
    (0xA681, "\u{A680}"),
    (0xA683, "\u{A682}"),
    (0xA685, "\u{A684}"),
    (0xA687, "\u{A686}"),
    (0xA689, "\u{A688}"),
    (0xA68B, "\u{A68A}"),
    (0xA68D, "\u{A68C}"),
    (0xA68F, "\u{A68E}"),
    (0xA691, "\u{A690}"),
    (0xA693, "\u{A692}"),
    (0xA695, "\u{A694}"),
    (0xA697, "\u{A696}"),
    (0xA699, "\u{A698}"),
    (0xA69B, "\u{A69A}"),
    (0xA723, "\u{A722}"),
    (0xA725, "\u{A724}"),
    (0xA727, "\u{A726}"),
    (0xA729, "\u{A728}"),
    (0xA72B, "\u{A72A}"),
    (0xA72D, "\u{A72C}"),
    (0xA72F, "\u{A72E}"),
    (0xA733, "\u{A732}"),
    (0xA735, "\u{A734}"),
    (0xA737, "\u{A736}"),
    (0xA739, "\u{A738}"),
    (0xA73B, "\u{A73A}"),
    (0xA73D, "\u{A73C}"),
    (0xA73F, "\u{A73E}"),
    (0xA741, "\u{A740}"),
    (0xA743, "\u{A742}"),
    (0xA745, "\u{A744}"),
    (0xA747, "\u{A746}"),
    (0xA749, "\u{A748}"),
    (0xA74B, "\u{A74A}"),
    (0xA74D, "\u{A74C}"),
    (0xA74F, "\u{A74E}"),
    (0xA751, "\u{A750}"),
    (0xA753, "\u{A752}"),
    (0xA755, "\u{A754}"),
    (0xA757, "\u{A756}"),
    (0xA759, "\u{A758}"),
    (0xA75B, "\u{A75A}"),
    (0xA75D, "\u{A75C}"),
    (0xA75F, "\u{A75E}"),
    (0xA761, "\u{A760}"),
    (0xA763, "\u{A762}"),
    (0xA765, "\u{A764}"),
    (0xA767, "\u{A766}"),
    (0xA769, "\u{A768}"),
    (0xA76B, "\u{A76A}"),
    (0xA76D, "\u{A76C}"),
    (0xA76F, "\u{A76E}"),
    (0xA77A, "\u{A779}"),
    (0xA77C, "\u{A77B}"),
    (0xA77F, "\u{A77E}"),
    (0xA781, "\u{A780}"),
    (0xA783, "\u{A782}"),
    (0xA785, "\u{A784}"),
    (0xA787, "\u{A786}"),
    (0xA78C, "\u{A78B}"),
    (0xA791, "\u{A790}"),
    (0xA793, "\u{A792}"),
    (0xA794, "\u{A7C4}"),
    (0xA797, "\u{A796}"),
    (0xA799, "\u{A798}"),
    (0xA79B, "\u{A79A}"),
    (0xA79D, "\u{A79C}"),
    (0xA79F, "\u{A79E}"),
    (0xA7A1, "\u{A7A0}"),
    (0xA7A3, "\u{A7A2}"),
    (0xA7A5, "\u{A7A4}"),
    (0xA7A7, "\u{A7A6}"),
    (0xA7A9, "\u{A7A8}"),
    (0xA7B5, "\u{A7B4}"),
    (0xA7B7, "\u{A7B6}"),
    (0xA7B9, "\u{A7B8}"),
    (0xA7BB, "\u{A7BA}"),
    (0xA7BD, "\u{A7BC}"),
    (0xA7BF, "\u{A7BE}"),
    (0xA7C1, "\u{A7C0}"),
    (0xA7C3, "\u{A7C2}"),
    (0xA7C8, "\u{A7C7}"),
    (0xA7CA, "\u{A7C9}"),
    (0xA7D1, "\u{A7D0}"),
    (0xA7D7, "\u{A7D6}"),
    (0xA7D9, "\u{A7D8}"),
    (0xA7F6, "\u{A7F5}"),
    (0xAB53, "\u{A7B3}"),
    (0xAB70, "\u{13A0}"),
    (0xAB71, "\u{13A1}"),
    (0xAB72, "\u{13A2}"),
    (0xAB73, "\u{13A3}"),
    (0xAB74, "\u{13A4}"),
    (0xAB75, "\u{13A5}"),
    (0xAB76, "\u{13A6}"),
    (0xAB77, "\u{13A7}"),
    (0xAB78, "\u{13A8}"),
    (0xAB79, "\u{13A9}"),
    (0xAB7A, "\u{13AA}"),
    (0xAB7B, "\u{13AB}"),
    (0xAB7C, "\u{13AC}"),
    (0xAB7D, "\u{13AD}"),
    (0xAB7E, "\u{13AE}"),
    (0xAB7F, "\u{13AF}"),
    (0xAB80, "\u{13B0}"),
    (0xAB81, "\u{13B1}"),
    (0xAB82, "\u{13B2}"),
    (0xAB83, "\u{13B3}"),
    (0xAB84, "\u{13B4}"),
    (0xAB85, "\u{13B5}"),
    (0xAB86, "\u{13B6}"),
    (0xAB87, "\u{13B7}"),
    (0xAB88, "\u{13B8}"),
    (0xAB89, "\u{13B9}"),
    (0xAB8A, "\u{13BA}"),
    (0xAB8B, "\u{13BB}"),
    (0xAB8C, "\u{13BC}"),
    (0xAB8D, "\u{13BD}"),
    (0xAB8E, "\u{13BE}"),
    (0xAB8F, "\u{13BF}"),
    (0xAB90, "\u{13C0}"),
    (0xAB91, "\u{13C1}"),
    (0xAB92, "\u{13C2}"),
    (0xAB93, "\u{13C3}"),
    (0xAB94, "\u{13C4}"),
    (0xAB95, "\u{13C5}"),
    (0xAB96, "\u{13C6}"),
    (0xAB97, "\u{13C7}"),
    (0xAB98, "\u{13C8}"),
    (0xAB99, "\u{13C9}"),
    (0xAB9A, "\u{13CA}"),
    (0xAB9B, "\u{13CB}"),
    (0xAB9C, "\u{13CC}"),
    (0xAB9D, "\u{13CD}"),
    (0xAB9E, "\u{13CE}"),
    (0xAB9F, "\u{13CF}"),
    (0xABA0, "\u{13D0}"),
    (0xABA1, "\u{13D1}"),
    (0xABA2, "\u{13D2}"),
    (0xABA3, "\u{13D3}"),
    (0xABA4, "\u{13D4}"),
    (0xABA5, "\u{13D5}"),
    (0xABA6, "\u{13D6}"),
    (0xABA7, "\u{13D7}"),
    (0xABA8, "\u{13D8}"),
    (0xABA9, "\u{13D9}"),
    (0xABAA, "\u{13DA}"),
    (0xABAB, "\u{13DB}"),
    (0xABAC, "\u{13DC}"),
    (0xABAD, "\u{13DD}"),
    (0xABAE, "\u{13DE}"),
    (0xABAF, "\u{13DF}"),
    (0xABB0, "\u{13E0}"),
    (0xABB1, "\u{13E1}"),
    (0xABB2, "\u{13E2}"),
    (0xABB3, "\u{13E3}"),
    (0xABB4, "\u{13E4}"),
    (0xABB5, "\u{13E5}"),
    (0xABB6, "\u{13E6}"),
    (0xABB7, "\u{13E7}"),
    (0xABB8, "\u{13E8}"),
    (0xABB9, "\u{13E9}"),
    (0xABBA, "\u{13EA}"),
    (0xABBB, "\u{13EB}"),
    (0xABBC, "\u{13EC}"),
    (0xABBD, "\u{13ED}"),
    (0xABBE, "\u{13EE}"),
    (0xABBF, "\u{13EF}"),
    (0xFB00, "FF"),
    (0xFB01, "FI"),
    (0xFB02, "FL"),
    (0xFB03, "FFI"),
    (0xFB04, "FFL"),
    (0xFB05, "ST"),
    (0xFB06, "ST"),
    (0xFB13, "\u{544}\u{546}"),
    (0xFB14, "\u{544}\u{535}"),
    (0xFB15, "\u{544}\u{53B}"),
    (0xFB16, "\u{54E}\u{546}"),
    (0xFB17, "\u{544}\u{53D}"),
    (0xFF41, "\u{FF21}"),
    (0xFF42, "\u{FF22}"),
    (0xFF43, "\u{FF23}"),
    (0xFF44, "\u{FF24}"),
    (0xFF45, "\u{FF25}"),
    (0xFF46, "\u{FF26}"),
    (0xFF47, "\u{FF27}"),
    (0xFF48, "\u{FF28}"),
    (0xFF49, "\u{FF29}"),
    (0xFF4A, "\u{FF2A}"),
    (0xFF4B, "\u{FF2B}"),
    (0xFF4C, "\u{FF2C}"),
    (0xFF4D, "\u{FF2D}"),
    (0xFF4E, "\u{FF2E}"),
    (0xFF4F, "\u{FF2F}"),
    (0xFF50, "\u{FF30}"),
    (0xFF51, "\u{FF31}"),
    (0xFF52, "\u{FF32}"),
    (0xFF53, "\u{FF33}"),
    (0xFF54, "\u{FF34}"),
    (0xFF55, "\u{FF35}"),
    (0xFF56, "\u{FF36}"),
    (0xFF57, "\u{FF37}"),
    (0xFF58, "\u{FF38}"),
    (0xFF59, "\u{FF39}"),
    (0xFF5A, "\u{FF3A}"),
    (0x10428, "\u{10400}"),
    (0x10429, "\u{10401}"),
    (0x1042A, "\u{10402}"),
    (0x1042B, "\u{10403}"),
    (0x1042C, "\u{10404}"),
    (0x1042D, "\u{10405}"),
    (0x1042E, "\u{10406}"),
    (0x1042F, "\u{10407}"),
    (0x10430, "\u{10408}"),
    (0x10431, "\u{10409}"),
    (0x10432, "\u{1040A}"),
    (0x10433, "\u{1040B}"),
    (0x10434, "\u{1040C}"),
    (0x10435, "\u{1040D}"),
    (0x10436, "\u{1040E}"),
    (0x10437, "\u{1040F}"),
    (0x10438, "\u{10410}"),
    (0x10439, "\u{10411}"),
    (0x1043A, "\u{10412}"),
    (0x1043B, "\u{10413}"),
    (0x1043C, "\u{10414}"),
    (0x1043D, "\u{10415}"),
    (0x1043E, "\u{10416}"),
    (0x1043F, "\u{10417}"),
    (0x10440, "\u{10418}"),
    (0x10441, "\u{10419}"),
    (0x10442, "\u{1041A}"),
    (0x10443, "\u{1041B}"),
    (0x10444, "\u{1041C}"),
    (0x10445, "\u{1041D}"),
    (0x10446, "\u{1041E}"),
    (0x10447, "\u{1041F}"),
    (0x10448, "\u{10420}"),
    (0x10449, "\u{10421}"),
    (0x1044A, "\u{10422}"),
    (0x1044B, "\u{10423}"),
    (0x1044C, "\u{10424}"),
    (0x1044D, "\u{10425}"),
    (0x1044E, "\u{10426}"),
    (0x1044F, "\u{10427}"),
    (0x104D8, "\u{104B0}"),
    (0x104D9, "\u{104B1}"),
    (0x104DA, "\u{104B2}"),
    (0x104DB, "\u{104B3}"),
    (0x104DC, "\u{104B4}"),
    (0x104DD, "\u{104B5}"),
    (0x104DE, "\u{104B6}"),
    (0x104DF, "\u{104B7}"),
    (0x104E0, "\u{104B8}"),
    (0x104E1, "\u{104B9}"),
    (0x104E2, "\u{104BA}"),
    (0x104E3, "\u{104BB}"),
    (0x104E4, "\u{104BC}"),
    (0x104E5, "\u{104BD}"),
    (0x104E6, "\u{104BE}"),
    (0x104E7, "\u{104BF}"),
    (0x104E8, "\u{104C0}"),
    (0x104E9, "\u{104C1}"),
    (0x104EA, "\u{104C2}"),
    (0x104EB, "\u{104C3}"),
    (0x104EC, "\u{104C4}"),
    (0x104ED, "\u{104C5}"),
    (0x104EE, "\u{104C6}"),
    (0x104EF, "\u{104C7}"),
    (0x104F0, "\u{104C8}"),
    (0x104F1, "\u{104C9}"),
    (0x104F2, "\u{104CA}"),
    (0x104F3, "\u{104CB}"),
    (0x104F4, "\u{104CC}"),
    (0x104F5, "\u{104CD}"),
    (0x104F6, "\u{104CE}"),
    (0x104F7, "\u{104CF}"),
    (0x104F8, "\u{104D0}"),
    (0x104F9, "\u{104D1}"),
    (0x104FA, "\u{104D2}"),
    (0x104FB, "\u{104D3}"),
    (0x10597, "\u{10570}"),
    (0x10598, "\u{10571}"),
    (0x10599, "\u{10572}"),
    (0x1059A, "\u{10573}"),
    (0x1059B, "\u{10574}"),
    (0x1059C, "\u{10575}"),
    (0x1059D, "\u{10576}"),
    (0x1059E, "\u{10577}"),
    (0x1059F, "\u{10578}"),
    (0x105A0, "\u{10579}"),
    (0x105A1, "\u{1057A}"),
    (0x105A3, "\u{1057C}"),
    (0x105A4, "\u{1057D}"),
    (0x105A5, "\u{1057E}"),
    (0x105A6, "\u{1057F}"),
    (0x105A7, "\u{10580}"),
    (0x105A8, "\u{10581}"),
    (0x105A9, "\u{10582}"),
    (0x105AA, "\u{10583}"),
    (0x105AB, "\u{10584}"),
    (0x105AC, "\u{10585}"),
    (0x105AD, "\u{10586}"),
    (0x105AE, "\u{10587}"),
    (0x105AF, "\u{10588}"),
    (0x105B0, "\u{10589}"),
    (0x105B1, "\u{1058A}"),
    (0x105B3, "\u{1058C}"),
    (0x105B4, "\u{1058D}"),
    (0x105B5, "\u{1058E}"),
    (0x105B6, "\u{1058F}"),
    (0x105B7, "\u{10590}"),
    (0x105B8, "\u{10591}"),
    (0x105B9, "\u{10592}"),
    (0x105BB, "\u{10594}"),
    (0x105BC, "\u{10595}"),
    (0x10CC0, "\u{10C80}"),
    (0x10CC1, "\u{10C81}"),
    (0x10CC2, "\u{10C82}"),
    (0x10CC3, "\u{10C83}"),
    (0x10CC4, "\u{10C84}"),
    (0x10CC5, "\u{10C85}"),
    (0x10CC6, "\u{10C86}"),
    (0x10CC7, "\u{10C87}"),
    (0x10CC8, "\u{10C88}"),
    (0x10CC9, "\u{10C89}"),
    (0x10CCA, "\u{10C8A}"),
    (0x10CCB, "\u{10C8B}"),
    (0x10CCC, "\u{10C8C}"),
    (0x10CCD, "\u{10C8D}"),
    (0x10CCE, "\u{10C8E}"),
    (0x10CCF, "\u{10C8F}"),
    (0x10CD0, "\u{10C90}"),
    (0x10CD1, "\u{10C91}"),
    (0x10CD2, "\u{10C92}"),
    (0x10CD3, "\u{10C93}"),
    (0x10CD4, "\u{10C94}"),
    (0x10CD5, "\u{10C95}"),
    (0x10CD6, "\u{10C96}"),
    (0x10CD7, "\u{10C97}"),
    (0x10CD8, "\u{10C98}"),
    (0x10CD9, "\u{10C99}"),
    (0x10CDA, "\u{10C9A}"),
    (0x10CDB, "\u{10C9B}"),
    (0x10CDC, "\u{10C9C}"),
    (0x10CDD, "\u{10C9D}"),
    (0x10CDE, "\u{10C9E}"),
    (0x10CDF, "\u{10C9F}"),
    (0x10CE0, "\u{10CA0}"),
    (0x10CE1, "\u{10CA1}"),
    (0x10CE2, "\u{10CA2}"),
    (0x10CE3, "\u{10CA3}"),
    (0x10CE4, "\u{10CA4}"),
    (0x10CE5, "\u{10CA5}"),
    (0x10CE6, "\u{10CA6}"),
    (0x10CE7, "\u{10CA7}"),
    (0x10CE8, "\u{10CA8}"),
    (0x10CE9, "\u{10CA9}"),
    (0x10CEA, "\u{10CAA}"),
    (0x10CEB, "\u{10CAB}"),
    (0x10CEC, "\u{10CAC}"),
    (0x10CED, "\u{10CAD}"),
    (0x10CEE, "\u{10CAE}"),
    (0x10CEF, "\u{10CAF}"),
    (0x10CF0, "\u{10CB0}"),
    (0x10CF1, "\u{10CB1}"),
    (0x10CF2, "\u{10CB2}"),
    (0x118C0, "\u{118A0}"),
    (0x118C1, "\u{118A1}"),
    (0x118C2, "\u{118A2}"),
    (0x118C3, "\u{118A3}"),
    (0x118C4, "\u{118A4}"),
    (0x118C5, "\u{118A5}"),
    (0x118C6, "\u{118A6}"),
    (0x118C7, "\u{118A7}"),
    (0x118C8, "\u{118A8}"),
    (0x118C9, "\u{118A9}"),
    (0x118CA, "\u{118AA}"),
    (0x118CB, "\u{118AB}"),
    (0x118CC, "\u{118AC}"),
    (0x118CD, "\u{118AD}"),
    (0x118CE, "\u{118AE}"),
    (0x118CF, "\u{118AF}"),
    (0x118D0, "\u{118B0}"),
    (0x118D1, "\u{118B1}"),
    (0x118D2, "\u{118B2}"),
    (0x118D3, "\u{118B3}"),
    (0x118D4, "\u{118B4}"),
    (0x118D5, "\u{118B5}"),
    (0x118D6, "\u{118B6}"),
    (0x118D7, "\u{118B7}"),
    (0x118D8, "\u{118B8}"),
    (0x118D9, "\u{118B9}"),
    (0x118DA, "\u{118BA}"),
    (0x118DB, "\u{118BB}"),
    (0x118DC, "\u{118BC}"),
    (0x118DD, "\u{118BD}"),
    (0x118DE, "\u{118BE}"),
    (0x118DF, "\u{118BF}"),
    (0x16E60, "\u{16E40}"),
    (0x16E61, "\u{16E41}"),
    (0x16E62, "\u{16E42}"),
    (0x16E63, "\u{16E43}"),
    (0x16E64, "\u{16E44}"),
    (0x16E65, "\u{16E45}"),
    (0x16E66, "\u{16E46}"),
    (0x16E67, "\u{16E47}"),
    (0x16E68, "\u{16E48}"),
    (0x16E69, "\u{16E49}"),
    (0x16E6A, "\u{16E4A}"),
    (0x16E6B, "\u{16E4B}"),
    (0x16E6C, "\u{16E4C}"),
    (0x16E6D, "\u{16E4D}"),
    (0x16E6E, "\u{16E4E}"),
    (0x16E6F, "\u{16E4F}"),
    (0x16E70, "\u{16E50}"),
    (0x16E71, "\u{16E51}"),
    (0x16E72, "\u{16E52}"),
    (0x16E73, "\u{16E53}"),
    (0x16E74, "\u{16E54}"),
    (0x16E75, "\u{16E55}"),
    (0x16E76, "\u{16E56}"),
    (0x16E77, "\u{16E57}"),
    (0x16E78, "\u{16E58}"),
    (0x16E79, "\u{16E59}"),
    (0x16E7A, "\u{16E5A}"),
    (0x16E7B, "\u{16E5B}"),
    (0x16E7C, "\u{16E5C}"),
    (0x16E7D, "\u{16E5D}"),
    (0x16E7E, "\u{16E5E}"),
    (0x16E7F, "\u{16E5F}"),
    (0x1E922, "\u{1E900}"),
    (0x1E923, "\u{1E901}"),
    (0x1E924, "\u{1E902}"),
    (0x1E925, "\u{1E903}"),
    (0x1E926, "\u{1E904}"),
    (0x1E927, "\u{1E905}"),
    (0x1E928, "\u{1E906}"),
    (0x1E929, "\u{1E907}"),
    (0x1E92A, "\u{1E908}"),
    (0x1E92B, "\u{1E909}"),
    (0x1E92C, "\u{1E90A}"),
    (0x1E92D, "\u{1E90B}"),
    (0x1E92E, "\u{1E90C}"),
    (0x1E92F, "\u{1E90D}"),
    (0x1E930, "\u{1E90E}"),
    (0x1E931, "\u{1E90F}"),
    (0x1E932, "\u{1E910}"),
    (0x1E933, "\u{1E911}"),
    (0x1E934, "\u{1E912}"),
    (0x1E935, "\u{1E913}"),
    (0x1E936, "\u{1E914}"),
    (0x1E937, "\u{1E915}"),
    (0x1E938, "\u{1E916}"),
    (0x1E939, "\u{1E917}"),
    (0x1E93A, "\u{1E918}"),
    (0x1E93B, "\u{1E919}"),
    (0x1E93C, "\u{1E91A}"),
    (0x1E93D, "\u{1E91B}"),
    (0x1E93E, "\u{1E91C}"),
    (0x1E93F, "\u{1E91D}"),
    (0x1E940, "\u{1E91E}"),
    (0x1E941, "\u{1E91F}"),
    (0x1E942, "\u{1E920}"),
    (0x1E943, "\u{1E921}"),
];

/// Full lowercase mappings, as (codepoint, mapping) pairs sorted by codepoint.
#[rustfmt::skip]
static LOWERCASE: &[(u32, &str)] = &[
    (0x0041, "a"),
    (0x0042, "b"),
    (0x0043, "c"),
    (0x0044, "d"),
    (0x0045, "e"),
    (0x0046, "f"),
    (0x0047, "g"),
    (0x0048, "h"),
    (0x0049, "i"),
    (0x004A, "j"),
    (0x004B, "k"),
    (0x004C, "l"),
    (0x004D, "m"),
    (0x004E, "n"),
    (0x004F, "o"),
    (0x0050, "p"),
    (0x0051, "q"),
    (0x0052, "r"),
    (0x0053, "s"),
    (0x0054, "t"),
    (0x0055, "u"),
    (0x0056, "v"),
    (0x0057, "w"),
    (0x0058, "x"),
    (0x0059, "y"),
    (0x005A, "z"),
    (0x00C0, "\u{E0}"),
    (0x00C1, "\u{E1}"),
    (0x00C2, "\u{E2}"),
    (0x00C3, "\u{E3}"),
    (0x00C4, "\u{E4}"),
    (0x00C5, "\u{E5}"),
    (0x00C6, "\u{E6}"),
    (0x00C7, "\u{E7}"),
    (0x00C8, "\u{E8}"),
    (0x00C9, "\u{E9}"),
    (0x00CA, "\u{EA}"),
    (0x00CB, "\u{EB}"),
    (0x00CC, "\u{EC}"),
    (0x00CD, "\u{ED}"),
    (0x00CE, "\u{EE}"),
    (0x00CF, "\u{EF}"),
    (0x00D0, "\u{F0}"),
    (0x00D1, "\u{F1}"),
    (0x00D2, "\u{F2}"),
    (0x00D3, "\u{F3}"),
    (0x00D4, "\u{F4}"),
    (0x00D5, "\u{F5}"),
    (0x00D6, "\u{F6}"),
    (0x00D8, "\u{F8}"),
    (0x00D9, "\u{F9}"),
    (0x00DA, "\u{FA}"),
    (0x00DB, "\u{FB}"),
    (0x00DC, "\u{FC}"),
    (0x00DD, "\u{FD}"),
    (0x00DE, "\u{FE}"),
    (0x0100, "\u{101}"),
    (0x0102, "\u{103}"),
    (0x0104, "\u{105}"),
    (0x0106, "\u{107}"),
    (0x0108, "\u{109}"),
    (0x010A, "\u{10B}"),
    (0x010C, "\u{10D}"),
    (0x010E, "\u{10F}"),
    (0x0110, "\u{111}"),
    (0x0112, "\u{113}"),
    (0x0114, "\u{115}"),
    (0x0116, "\u{117}"),
    (0x0118, "\u{119}"),
    (0x011A, "\u{11B}"),
    (0x011C, "\u{11D}"),
    (0x011E, "\u{11F}"),
    (0x0120, "\u{121}"),
    (0x0122, "\u{123}"),
    (0x0124, "\u{125}"),
    (0x0126, "\u{127}"),
    (0x0128, "\u{129}"),
    (0x012A, "\u{12B}"),
    (0x012C, "\u{12D}"),
    (0x012E, "\u{12F}"),
    (0x0130, "i\u{307}"),
    (0x0132, "\u{133}"),
    (0x0134, "\u{135}"),
    (0x0136, "\u{137}"),
    (0x0139, "\u{13A}"),
    (0x013B, "\u{13C}"),
    (0x013D, "\u{13E}"),
    (0x013F, "\u{140}"),
    (0x0141, "\u{142}"),
    (0x0143, "\u{144}"),
    (0x0145, "\u{146}"),
    (0x0147, "\u{148}"),
    (0x014A, "\u{14B}"),
    (0x014C, "\u{14D}"),
    (0x014E, "\u{14F}"),
    (0x0150, "\u{151}"),
    (0x0152, "\u{153}"),
    (0x0154, "\u{155}"),
    (0x0156, "\u{157}"),
    (0x0158, "\u{159}"),
    (0x015A, "\u{15B}"),
    (0x015C, "\u{15D}"),
    (0x015E, "\u{15F}"),
    (0x0160, "\u{161}"),
    (0x0162, "\u{163}"),
    (0x0164, "\u{165}"),
    (0x0166, "\u{167}"),
    (0x0168, "\u{169}"),
    (0x016A, "\u{16B}"),
    (0x016C, "\u{16D}"),
    (0x016E, "\u{16F}"),
    (0x0170, "\u{171}"),
    (0x0172, "\u{173}"),
    (0x0174, "\u{175}"),
    (0x0176, "\u{177}"),
    (0x0178, "\u{FF}"),
    (0x0179, "\u{17A}"),
    (0x017B, "\u{17C}"),
    (0x017D, "\u{17E}"),
    (0x0181, "\u{253}"),
    (0x0182, "\u{183}"),
    (0x0184, "\u{185}"),
    (0x0186, "\u{254}"),
    (0x0187, "\u{188}"),
    (0x0189, "\u{256}"),
    (0x018A, "\u{257}"),
    (0x018B, "\u{18C}"),
    (0x018E, "\u{1DD}"),
    (0x018F, "\u{259}"),
    (0x0190, "\u{25B}"),
    (0x0191, "\u{192}"),
    (0x0193, "\u{260}"),
    (0x0194, "\u{263}"),
    (0x0196, "\u{269}"),
    (0x0197, "\u{268}"),
    (0x0198, "\u{199}"),
    (0x019C, "\u{26F}"),
    (0x019D, "\u{272}"),
    (0x019F, "\u{275}"),
    (0x01A0, "\u{1A1}"),
    (0x01A2, "\u{1A3}"),
    (0x01A4, "\u{1A5}"),
    (0x01A6, "\u{280}"),
    (0x01A7, "\u{1A8}"),
    (0x01A9, "\u{283}"),
    (0x01AC, "\u{1AD}"),
    (0x01AE, "\u{288}"),
    (0x01AF, "\u{1B0}"),
    (0x01B1, "\u{28A}"),
    (0x01B2, "\u{28B}"),
    (0x01B3, "\u{1B4}"),
    (0x01B5, "\u{1B6}"),
    (0x01B7, "\u{292}"),
    (0x01B8, "\u{1B9}"),
    (0x01BC, "\u{1BD}"),
    (0x01C4, "\u{1C6}"),
    (0x01C5, "\u{1C6}"),
    (0x01C7, "\u{1C9}"),
    (0x01C8, "\u{1C9}"),
    (0x01CA, "\u{1CC}"),
    (0x01CB, "\u{1CC}"),
    (0x01CD, "\u{1CE}"),
    (0x01CF, "\u{1D0}"),
    (0x01D1, "\u{1D2}"),
    (0x01D3, "\u{1D4}"),
    (0x01D5, "\u{1D6}"),
    (0x01D7, "\u{1D8}"),
    (0x01D9, "\u{1DA}"),
    (0x01DB, "\u{1DC}"),
    (0x01DE, "\u{1DF}"),
    (0x01E0, "\u{1E1}"),
    (0x01E2, "\u{1E3}"),
    (0x01E4, "\u{1E5}"),
    (0x01E6, "\u{1E7}"),
    (0x01E8, "\u{1E9}"),
    (0x01EA, "\u{1EB}"),
    (0x01EC, "\u{1ED}"),
    (0x01EE, "\u{1EF}"),
    (0x01F1, "\u{1F3}"),
    (0x01F2, "\u{1F3}"),
    (0x01F4, "\u{1F5}"),
    (0x01F6, "\u{195}"),
    (0x01F7, "\u{1BF}"),
    (0x01F8, "\u{1F9}"),
    (0x01FA, "\u{1FB}"),
    (0x01FC, "\u{1FD}"),
    (0x01FE, "\u{1FF}"),
    (0x0200, "\u{201}"),
    (0x0202, "\u{203}"),
    (0x0204, "\u{205}"),
    (0x0206, "\u{207}"),
    (0x0208, "\u{209}"),
    (0x020A, "\u{20B}"),
    (0x020C, "\u{20D}"),
    (0x020E, "\u{20F}"),
    (0x0210, "\u{211}"),
    (0x0212, "\u{213}"),
    (0x0214, "\u{215}"),
    (0x0216, "\u{217}"),
    (0x0218, "\u{219}"),
    (0x021A, "\u{21B}"),
    (0x021C, "\u{21D}"),
    (0x021E, "\u{21F}"),
    (0x0220, "\u{19E}"),
    (0x0222, "\u{223}"),
    (0x0224, "\u{225}"),
    (0x0226, "\u{227}"),
    (0x0228, "\u{229}"),
    (0x022A, "\u{22B}"),
    (0x022C, "\u{22D}"),
    (0x022E, "\u{22F}"),
    (0x0230, "\u{231}"),
    (0x0232, "\u{233}"),
    (0x023A, "\u{2C65}"),
    (0x023B, "\u{23C}"),
    (0x023D, "\u{19A}"),
    (0x023E, "\u{2C66}"),
    (0x0241, "\u{242}"),
    (0x0243, "\u{180}"),
    (0x0244, "\u{289}"),
    (0x0245, "\u{28C}"),
    (0x0246, "\u{247}"),
    (0x0248, "\u{249}"),
    (0x024A, "\u{24B}"),
    (0x024C, "\u{24D}"),
    (0x024E, "\u{24F}"),
    (0x0370, "\u{371}"),
    (0x0372, "\u{373}"),
    (0x0376, "\u{377}"),
    (0x037F, "\u{3F3}"),
    (0x0386, "\u{3AC}"),
    (0x0388, "\u{3AD}"),
    (0x0389, "\u{3AE}"),
    (0x038A, "\u{3AF}"),
    (0x038C, "\u{3CC}"),
    (0x038E, "\u{3CD}"),
    (0x038F, "\u{3CE}"),
    (0x0391, "\u{3B1}"),
    (0x0392, "\u{3B2}"),
    (0x0393, "\u{3B3}"),
    (0x0394, "\u{3B4}"),
    (0x0395, "\u{3B5}"),
    (0x0396, "\u{3B6}"),
    (0x0397, "\u{3B7}"),
    (0x0398, "\u{3B8}"),
    (0x0399, "\u{3B9}"),
    (0x039A, "\u{3BA}"),
    (0x039B, "\u{3BB}"),
    (0x039C, "\u{3BC}"),
    (0x039D, "\u{3BD}"),
    (0x039E, "\u{3BE}"),
    (0x039F, "\u{3BF}"),
    (0x03A0, "\u{3C0}"),
    (0x03A1, "\u{3C1}"),
    (0x03A3, "\u{3C3}"),
    (0x03A4, "\u{3C4}"),
    (0x03A5, "\u{3C5}"),
    (0x03A6, "\u{3C6}"),
    (0x03A7, "\u{3C7}"),
    (0x03A8, "\u{3C8}"),
    (0x03A9, "\u{3C9}"),
    (0x03AA, "\u{3CA}"),
    (0x03AB, "\u{3CB}"),
    (0x03CF, "\u{3D7}"),
    (0x03D8, "\u{3D9}"),
    (0x03DA, "\u{3DB}"),
    (0x03DC, "\u{3DD}"),
    (0x03DE, "\u{3DF}"),
    (0x03E0, "\u{3E1}"),
    (0x03E2, "\u{3E3}"),
    (0x03E4, "\u{3E5}"),
    (0x03E6, "\u{3E7}"),
    (0x03E8, "\u{3E9}"),
    (0x03EA, "\u{3EB}"),
    (0x03EC, "\u{3ED}"),
    (0x03EE, "\u{3EF}"),
    (0x03F4, "\u{3B8}"),
    (0x03F7, "\u{3F8}"),
    (0x03F9, "\u{3F2}"),
    (0x03FA, "\u{3FB}"),
    (0x03FD, "\u{37B}"),
    (0x03FE, "\u{37C}"),
    (0x03FF, "\u{37D}"),
    (0x0400, "\u{450}"),
    (0x0401, "\u{451}"),
    (0x0402, "\u{452}"),
    (0x0403, "\u{453}"),
    (0x0404, "\u{454}"),
    (0x0405, "\u{455}"),
    (0x0406, "\u{456}"),
    (0x0407, "\u{457}"),
    (0x0408, "\u{458}"),
    (0x0409, "\u{459}"),
    (0x040A, "\u{45A}"),
    (0x040B, "\u{45B}"),
    (0x040C, "\u{45C}"),
    (0x040D, "\u{45D}"),
    (0x040E, "\u{45E}"),
    (0x040F, "\u{45F}"),
    (0x0410, "\u{430}"),
    (0x0411, "\u{431}"),
    (0x0412, "\u{432}"),
    (0x0413, "\u{433}"),
    (0x0414, "\u{434}"),
    (0x0415, "\u{435}"),
    (0x0416, "\u{436}"),
    (0x0417, "\u{437}"),
    (0x0418, "\u{438}"),
    (0x0419, "\u{439}"),
    (0x041A, "\u{43A}"),
    (0x041B, "\u{43B}"),
    (0x041C, "\u{43C}"),
    (0x041D, "\u{43D}"),
    (0x041E, "\u{43E}"),
    (0x041F, "\u{43F}"),
    (0x0420, "\u{440}"),
    (0x0421, "\u{441}"),
    (0x0422, "\u{442}"),
    (0x0423, "\u{443}"),
    (0x0424, "\u{444}"),
    (0x0425, "\u{445}"),
    (0x0426, "\u{446}"),
    (0x0427, "\u{447}"),
    (0x0428, "\u{448}"),
    (0x0429, "\u{449}"),
    (0x042A, "\u{44A}"),
    (0x042B, "\u{44B}"),
    (0x042C, "\u{44C}"),
    (0x042D, "\u{44D}"),
    (0x042E, "\u{44E}"),
    (0x042F, "\u{44F}"),
    (0x0460, "\u{461}"),
    (0x0462, "\u{463}"),
    (0x0464, "\u{465}"),
    (0x0466, "\u{467}"),
    (0x0468, "\u{469}"),
    (0x046A, "\u{46B}"),
    (0x046C, "\u{46D}"),
    (0x046E, "\u{46F}"),
    (0x0470, "\u{471}"),
    (0x0472, "\u{473}"),
    (0x0474, "\u{475}"),
    (0x0476, "\u{477}"),
    (0x0478, "\u{479}"),
    (0x047A, "\u{47B}"),
    (0x047C, "\u{47D}"),
    (0x047E, "\u{47F}"),
    (0x0480, "\u{481}"),
    (0x048A, "\u{48B}"),
    (0x048C, "\u{48D}"),
    (0x048E, "\u{48F}"),
    (0x0490, "\u{491}"),
    (0x0492, "\u{493}"),
    (0x0494, "\u{495}"),
    (0x0496, "\u{497}"),
    (0x0498, "\u{499}"),
    (0x049A, "\u{49B}"),
    (0x049C, "\u{49D}"),
    (0x049E, "\u{49F}"),
    (0x04A0, "\u{4A1}"),
    (0x04A2, "\u{4A3}"),
    (0x04A4, "\u{4A5}"),
    (0x04A6, "\u{4A7}"),
    (0x04A8, "\u{4A9}"),
    (0x04AA, "\u{4AB}"),
    (0x04AC, "\u{4AD}"),
    (0x04AE, "\u{4AF}"),
    (0x04B0, "\u{4B1}"),
    (0x04B2, "\u{4B3}"),
    (0x04B4, "\u{4B5}"),
    (0x04B6, "\u{4B7}"),
    (0x04B8, "\u{4B9}"),
    (0x04BA, "\u{4BB}"),
    (0x04BC, "\u{4BD}"),
    (0x04BE, "\u{4BF}"),
    (0x04C0, "\u{4CF}"),
    (0x04C1, "\u{4C2}"),
    (0x04C3, "\u{4C4}"),
    (0x04C5, "\u{4C6}"),
    (0x04C7, "\u{4C8}"),
    (0x04C9, "\u{4CA}"),
    (0x04CB, "\u{4CC}"),
    (0x04CD, "\u{4CE}"),
    (0x04D0, "\u{4D1}"),
    (0x04D2, "\u{4D3}"),
    (0x04D4, "\u{4D5}"),
    (0x04D6, "\u{4D7}"),
    (0x04D8, "\u{4D9}"),
    (0x04DA, "\u{4DB}"),
    (0x04DC, "\u{4DD}"),
    (0x04DE, "\u{4DF}"),
    (0x04E0, "\u{4E1}"),
    (0x04E2, "\u{4E3}"),
    (0x04E4, "\u{4E5}"),
    (0x04E6, "\u{4E7}"),
    (0x04E8, "\u{4E9}"),
    (0x04EA, "\u{4EB}"),
    (0x04EC, "\u{4ED}"),
    (0x04EE, "\u{4EF}"),
    (0x04F0, "\u{4F1}"),
    (0x04F2, "\u{4F3}"),
    (0x04F4, "\u{4F5}"),
    (0x04F6, "\u{4F7}"),
    (0x04F8, "\u{4F9}"),
    (0x04FA, "\u{4FB}"),
    (0x04FC, "\u{4FD}"),
    (0x04FE, "\u{4FF}"),
    (0x0500, "\u{501}"),
    (0x0502, "\u{503}"),
    (0x0504, "\u{505}"),
    (0x0506, "\u{507}"),
    (0x0508, "\u{509}"),
    (0x050A, "\u{50B}"),
    (0x050C, "\u{50D}"),
    (0x050E, "\u{50F}"),
    (0x0510, "\u{511}"),
    (0x0512, "\u{513}"),
    (0x0514, "\u{515}"),
    (0x0516, "\u{517}"),
    (0x0518, "\u{519}"),
    (0x051A, "\u{51B}"),
    (0x051C, "\u{51D}"),
    (0x051E, "\u{51F}"),
    (0x0520, "\u{521}"),
    (0x0522, "\u{523}"),
    (0x0524, "\u{525}"),
    (0x0526, "\u{527}"),
    (0x0528, "\u{529}"),
    (0x052A, "\u{52B}"),
    (0x052C, "\u{52D}"),
    (0x052E, "\u{52F}"),
    (0x0531, "\u{561}"),
    (0x0532, "\u{562}"),
    (0x0533, "\u{563}"),
    (0x0534, "\u{564}"),
    (0x0535, "\u{565}"),
    (0x0536, "\u{566}"),
    (0x0537, "\u{567}"),
    (0x0538, "\u{568}"),
    (0x0539, "\u{569}"),
    (0x053A, "\u{56A}"),
    (0x053B, "\u{56B}"),
    (0x053C, "\u{56C}"),
    (0x053D, "\u{56D}"),
    (0x053E, "\u{56E}"),
    (0x053F, "\u{56F}"),
    (0x0540, "\u{570}"),
    (0x0541, "\u{571}"),
    (0x0542, "\u{572}"),
    (0x0543, "\u{573}"),
    (0x0544, "\u{574}"),
    (0x0545, "\u{575}"),
    (0x0546, "\u{576}"),
    (0x0547, "\u{577}"),
    (0x0548, "\u{578}"),
    (0x0549, "\u{579}"),
    (0x054A, "\u{57A}"),
    (0x054B, "\u{57B}"),
    (0x054C, "\u{57C}"),
    (0x054D, "\u{57D}"),
    (0x054E, "\u{57E}"),
    (0x054F, "\u{57F}"),
    (0x0550, "\u{580}"),
    (0x0551, "\u{581}"),
    (0x0552, "\u{582}"),
    (0x0553, "\u{583}"),
    (0x0554, "\u{584}"),
    (0x0555, "\u{585}"),
    (0x0556, "\u{586}"),
    (0x10A0, "\u{2D00}"),
    (0x10A1, "\u{2D01}"),
    (0x10A2, "\u{2D02}"),
    (0x10A3, "\u{2D03}"),
    (0x10A4, "\u{2D04}"),
    (0x10A5, "\u{2D05}"),
    (0x10A6, "\u{2D06}"),
    (0x10A7, "\u{2D07}"),
    (0x10A8, "\u{2D08}"),
    (0x10A9, "\u{2D09}"),
    (0x10AA, "\u{2D0A}"),
    (0x10AB, "\u{2D0B}"),
    (0x10AC, "\u{2D0C}"),
    (0x10AD, "\u{2D0D}"),
    (0x10AE, "\u{2D0E}"),
    (0x10AF, "\u{2D0F}"),
    (0x10B0, "\u{2D10}"),
    (0x10B1, "\u{2D11}"),
    (0x10B2, "\u{2D12}"),
    (0x10B3, "\u{2D13}"),
    (0x10B4, "\u{2D14}"),
    (0x10B5, "\u{2D15}"),
    (0x10B6, "\u{2D16}"),
    (0x10B7, "\u{2D17}"),
    (0x10B8, "\u{2D18}"),
    (0x10B9, "\u{2D19}"),
    (0x10BA, "\u{2D1A}"),
    (0x10BB, "\u{2D1B}"),
    (0x10BC, "\u{2D1C}"),
    (0x10BD, "\u{2D1D}"),
    (0x10BE, "\u{2D1E}"),
    (0x10BF, "\u{2D1F}"),
    (0x10C0, "\u{2D20}"),
    (0x10C1, "\u{2D21}"),
    (0x10C2, "\u{2D22}"),
    (0x10C3, "\u{2D23}"),
    (0x10C4, "\u{2D24}"),
    (0x10C5, "\u{2D25}"),
    (0x10C7, "\u{2D27}"),
    (0x10CD, "\u{2D2D}"),
    (0x13A0, "\u{AB70}"),
    (0x13A1, "\u{AB71}"),
    (0x13A2, "\u{AB72}"),
    (0x13A3, "\u{AB73}"),
    (0x13A4, "\u{AB74}"),
    (0x13A5, "\u{AB75}"),
    (0x13A6, "\u{AB76}"),
    (0x13A7, "\u{AB77}"),
    (0x13A8, "\u{AB78}"),
    (0x13A9, "\u{AB79}"),
    (0x13AA, "\u{AB7A}"),
    (0x13AB, "\u{AB7B}"),
    (0x13AC, "\u{AB7C}"),
    (0x13AD, "\u{AB7D}"),
    (0x13AE, "\u{AB7E}"),
    (0x13AF, "\u{AB7F}"),
    (0x13B0, "\u{AB80}"),
    (0x13B1, "\u{AB81}"),
    (0x13B2, "\u{AB82}"),
    (0x13B3, "\u{AB83}"),
    (0x13B4, "\u{AB84}"),
    (0x13B5, "\u{AB85}"),
    (0x13B6, "\u{AB86}"),
    (0x13B7, "\u{AB87}"),
    (0x13B8, "\u{AB88}"),
    (0x13B9, "\u{AB89}"),
    (0x13BA, "\u{AB8A}"),
    (0x13BB, "\u{AB8B}"),
    (0x13BC, "\u{AB8C}"),
    (0x13BD, "\u{AB8D}"),
    (0x13BE, "\u{AB8E}"),
    (0x13BF, "\u{AB8F}"),
    (0x13C0, "\u{AB90}"),
    (0x13C1, "\u{AB91}"),
    (0x13C2, "\u{AB92}"),
    (0x13C3, "\u{AB93}"),
    (0x13C4, "\u{AB94}"),
    (0x13C5, "\u{AB95}"),
    (0x13C6, "\u{AB96}"),
    (0x13C7, "\u{AB97}"),
    (0x13C8, "\u{AB98}"),
    (0x13C9, "\u{AB99}"),
    (0x13CA, "\u{AB9A}"),
    (0x13CB, "\u{AB9B}"),
    (0x13CC, "\u{AB9C}"),
    (0x13CD, "\u{AB9D}"),
    (0x13CE, "\u{AB9E}"),
    (0x13CF, "\u{AB9F}"),
    (0x13D0, "\u{ABA0}"),
    (0x13D1, "\u{ABA1}"),
    (0x13D2, "\u{ABA2}"),
    (0x13D3, "\u{ABA3}"),
    (0x13D4, "\u{ABA4}"),
    (0x13D5, "\u{ABA5}"),
    (0x13D6, "\u{ABA6}"),
    (0x13D7, "\u{ABA7}"),
    (0x13D8, "\u{ABA8}"),
    (0x13D9, "\u{ABA9}"),
    (0x13DA, "\u{ABAA}"),
    (0x13DB, "\u{ABAB}"),
    (0x13DC, "\u{ABAC}"),
    (0x13DD, "\u{ABAD}"),
    (0x13DE, "\u{ABAE}"),
    (0x13DF, "\u{ABAF}"),
    (0x13E0, "\u{ABB0}"),
    (0x13E1, "\u{ABB1}"),
    (0x13E2, "\u{ABB2}"),
    (0x13E3, "\u{ABB3}"),
    (0x13E4, "\u{ABB4}"),
    (0x13E5, "\u{ABB5}"),
    (0x13E6, "\u{ABB6}"),
    (0x13E7, "\u{ABB7}"),
    (0x13E8, "\u{ABB8}"),
    (0x13E9, "\u{ABB9}"),
    (0x13EA, "\u{ABBA}"),
    (0x13EB, "\u{ABBB}"),
    (0x13EC, "\u{ABBC}"),
    (0x13ED, "\u{ABBD}"),
    (0x13EE, "\u{ABBE}"),
    (0x13EF, "\u{ABBF}"),
    (0x13F0, "\u{13F8}"),
    (0x13F1, "\u{13F9}"),
    (0x13F2, "\u{13FA}"),
    (0x13F3, "\u{13FB}"),
    (0x13F4, "\u{13FC}"),
    (0x13F5, "\u{13FD}"),
    (0x1C90, "\u{10D0}"),
    (0x1C91, "\u{10D1}"),
    (0x1C92, "\u{10D2}"),
    (0x1C93, "\u{10D3}"),
    (0x1C94, "\u{10D4}"),
    (0x1C95, "\u{10D5}"),
    (0x1C96, "\u{10D6}"),
    (0x1C97, "\u{10D7}"),
    (0x1C98, "\u{10D8}"),
    (0x1C99, "\u{10D9}"),
    (0x1C9A, "\u{10DA}"),
    (0x1C9B, "\u{10DB}"),
    (0x1C9C, "\u{10DC}"),
    (0x1C9D, "\u{10DD}"),
    (0x1C9E, "\u{10DE}"),
    (0x1C9F, "\u{10DF}"),
    (0x1CA0, "\u{10E0}"),
    (0x1CA1, "\u{10E1}"),
    (0x1CA2, "\u{10E2}"),
    (0x1CA3, "\u{10E3}"),
    (0x1CA4, "\u{10E4}"),
    (0x1CA5, "\u{10E5}"),
    (0x1CA6, "\u{10E6}"),
    (0x1CA7, "\u{10E7}"),
    (0x1CA8, "\u{10E8}"),
    (0x1CA9, "\u{10E9}"),
    (0x1CAA, "\u{10EA}"),
    (0x1CAB, "\u{10EB}"),
    (0x1CAC, "\u{10EC}"),
    (0x1CAD, "\u{10ED}"),
    (0x1CAE, "\u{10EE}"),
    (0x1CAF, "\u{10EF}"),
    (0x1CB0, "\u{10F0}"),
    (0x1CB1, "\u{10F1}"),
    (0x1CB2, "\u{10F2}"),
    (0x1CB3, "\u{10F3}"),
    (0x1CB4, "\u{10F4}"),
    (0x1CB5, "\u{10F5}"),
    (0x1CB6, "\u{10F6}"),
    (0x1CB7, "\u{10F7}"),
    (0x1CB8, "\u{10F8}"),
    (0x1CB9, "\u{10F9}"),
    (0x1CBA, "\u{10FA}"),
    (0x1CBD, "\u{10FD}"),
    (0x1CBE, "\u{10FE}"),
    (0x1CBF, "\u{10FF}"),
    (0x1E00, "\u{1E01}"),
    (0x1E02, "\u{1E03}"),
    (0x1E04, "\u{1E05}"),
    (0x1E06, "\u{1E07}"),
    (0x1E08, "\u{1E09}"),
    (0x1E0A, "\u{1E0B}"),
    (0x1E0C, "\u{1E0D}"),
    (0x1E0E, "\u{1E0F}"),
    (0x1E10, "\u{1E11}"),
    (0x1E12, "\u{1E13}"),
    (0x1E14, "\u{1E15}"),
    (0x1E16, "\u{1E17}"),
    (0x1E18, "\u{1E19}"),
    (0x1E1A, "\u{1E1B}"),
    (0x1E1C, "\u{1E1D}"),
    (0x1E1E, "\u{1E1F}"),
    (0x1E20, "\u{1E21}"),
    (0x1E22, "\u{1E23}"),
    (0x1E24, "\u{1E25}"),
    (0x1E26, "\u{1E27}"),
    (0x1E28, "\u{1E29}"),
    (0x1E2A, "\u{1E2B}"),
    (0x1E2C, "\u{1E2D}"),
    (0x1E2E, "\u{1E2F}"),
    (0x1E30, "\u{1E31}"),
    (0x1E32, "\u{1E33}"),
    (0x1E34, "\u{1E35}"),
    (0x1E36, "\u{1E37}"),
    (0x1E38, "\u{1E39}"),
    (0x1E3A, "\u{1E3B}"),
    (0x1E3C, "\u{1E3D}"),
    (0x1E3E, "\u{1E3F}"),
    (0x1E40, "\u{1E41}"),
    (0x1E42, "\u{1E43}"),
    (0x1E44, "\u{1E45}"),
    (0x1E46, "\u{1E47}"),
    (0x1E48, "\u{1E49}"),
    (0x1E4A, "\u{1E4B}"),
    (0x1E4C, "\u{1E4D}"),
    (0x1E4E, "\u{1E4F}"),
    (0x1E50, "\u{1E51}"),
    (0x1E52, "\u{1E53}"),
    (0x1E54, "\u{1E55}"),
    (0x1E56, "\u{1E57}"),
    (0x1E58, "\u{1E59}"),
    (0x1E5A, "\u{1E5B}"),
    (0x1E5C, "\u{1E5D}"),
    (0x1E5E, "\u{1E5F}"),
    (0x1E60, "\u{1E61}"),
    (0x1E62, "\u{1E63}"),
    (0x1E64, "\u{1E65}"),
    (0x1E66, "\u{1E67}"),
    (0x1E68, "\u{1E69}"),
    (0x1E6A, "\u{1E6B}"),
    (0x1E6C, "\u{1E6D}"),
    (0x1E6E, "\u{1E6F}"),
    (0x1E70, "\u{1E71}"),
    (0x1E72, "\u{1E73}"),
    (0x1E74, "\u{1E75}"),
    (0x1E76, "\u{1E77}"),
    (0x1E78, "\u{1E79}"),
    (0x1E7A, "\u{1E7B}"),
    (0x1E7C, "\u{1E7D}"),
    (0x1E7E, "\u{1E7F}"),
    (0x1E80, "\u{1E81}"),
    (0x1E82, "\u{1E83}"),
    (0x1E84, "\u{1E85}"),
    (0x1E86, "\u{1E87}"),
    (0x1E88, "\u{1E89}"),
    (0x1E8A, "\u{1E8B}"),
    (0x1E8C, "\u{1E8D}"),
    (0x1E8E, "\u{1E8F}"),
    (0x1E90, "\u{1E91}"),
    (0x1E92, "\u{1E93}"),
    (0x1E94, "\u{1E95}"),
    (0x1E9E, "\u{DF}"),
    (0x1EA0, "\u{1EA1}"),
    (0x1EA2, "\u{1EA3}"),
    (0x1EA4, "\u{1EA5}"),
    (0x1EA6, "\u{1EA7}"),
    (0x1EA8, "\u{1EA9}"),
    (0x1EAA, "\u{1EAB}"),
    (0x1EAC, "\u{1EAD}"),
    (0x1EAE, "\u{1EAF}"),
    (0x1EB0, "\u{1EB1}"),
    (0x1EB2, "\u{1EB3}"),
    (0x1EB4, "\u{1EB5}"),
    (0x1EB6, "\u{1EB7}"),
    (0x1EB8, "\u{1EB9}"),
    (0x1EBA, "\u{1EBB}"),
    (0x1EBC, "\u{1EBD}"),
    (0x1EBE, "\u{1EBF}"),
    (0x1EC0, "\u{1EC1}"),
    (0x1EC2, "\u{1EC3}"),
    (0x1EC4, "\u{1EC5}"),
    (0x1EC6, "\u{1EC7}"),
    (0x1EC8, "\u{1EC9}"),
    (0x1ECA, "\u{1ECB}"),
    (0x1ECC, "\u{1ECD}"),
    (0x1ECE, "\u{1ECF}"),
    (0x1ED0, "\u{1ED1}"),
    (0x1ED2, "\u{1ED3}"),
    (0x1ED4, "\u{1ED5}"),
    (0x1ED6, "\u{1ED7}"),
    (0x1ED8, "\u{1ED9}"),
    (0x1EDA, "\u{1EDB}"),
    (0x1EDC, "\u{1EDD}"),
    (0x1EDE, "\u{1EDF}"),
    (0x1EE0, "\u{1EE1}"),
    (0x1EE2, "\u{1EE3}"),
    (0x1EE4, "\u{1EE5}"),
    (0x1EE6, "\u{1EE7}"),
    (0x1EE8, "\u{1EE9}"),
    (0x1EEA, "\u{1EEB}"),
    (0x1EEC, "\u{1EED}"),
    (0x1EEE, "\u{1EEF}"),
    (0x1EF0, "\u{1EF1}"),
    (0x1EF2, "\u{1EF3}"),
    (0x1EF4, "\u{1EF5}"),
    (0x1EF6, "\u{1EF7}"),
    (0x1EF8, "\u{1EF9}"),
    (0x1EFA, "\u{1EFB}"),
    (0x1EFC, "\u{1EFD}"),
    (0x1EFE, "\u{1EFF}"),
    (0x1F08, "\u{1F00}"),
    (0x1F09, "\u{1F01}"),
    (0x1F0A, "\u{1F02}"),
    (0x1F0B, "\u{1F03}"),
    (0x1F0C, "\u{1F04}"),
    (0x1F0D, "\u{1F05}"),
    (0x1F0E, "\u{1F06}"),
    (0x1F0F, "\u{1F07}"),
    (0x1F18, "\u{1F10}"),
    (0x1F19, "\u{1F11}"),
    (0x1F1A, "\u{1F12}"),
    (0x1F1B, "\u{1F13}"),
    (0x1F1C, "\u{1F14}"),
    (0x1F1D, "\u{1F15}"),
    (0x1F28, "\u{1F20}"),
    (0x1F29, "\u{1F21}"),
    (0x1F2A, "\u{1F22}"),
    (0x1F2B, "\u{1F23}"),
    (0x1F2C, "\u{1F24}"),
    (0x1F2D, "\u{1F25}"),
    (0x1F2E, "\u{1F26}"),
    (0x1F2F, "\u{1F27}"),
    (0x1F38, "\u{1F30}"),
    (0x1F39, "\u{1F31}"),
    (0x1F3A, "\u{1F32}"),
    (0x1F3B, "\u{1F33}"),
    (0x1F3C, "\u{1F34}"),
    (0x1F3D, "\u{1F35}"),
    (0x1F3E, "\u{1F36}"),
    (0x1F3F, "\u{1F37}"),
    (0x1F48, "\u{1F40}"),
    (0x1F49, "\u{1F41}"),
    (0x1F4A, "\u{1F42}"),
    (0x1F4B, "\u{1F43}"),
    (0x1F4C, "\u{1F44}"),
    (0x1F4D, "\u{1F45}"),
    (0x1F59, "\u{1F51}"),
    (0x1F5B, "\u{1F53}"),
    (0x1F5D, "\u{1F55}"),
    (0x1F5F, "\u{1F57}"),
    (0x1F68, "\u{1F60}"),
    (0x1F69, "\u{1F61}"),
    (0x1F6A, "\u{1F62}"),
    (0x1F6B, "\u{1F63}"),
    (0x1F6C, "\u{1F64}"),
    (0x1F6D, "\u{1F65}"),
    (0x1F6E, "\u{1F66}"),
    (0x1F6F, "\u{1F67}"),
    (0x1F88, "\u{1F80}"),
    (0x1F89, "\u{1F81}"),
    (0x1F8A, "\u{1F82}"),
    (0x1F8B, "\u{1F83}"),
    (0x1F8C, "\u{1F84}"),
    (0x1F8D, "\u{1F85}"),
    (0x1F8E, "\u{1F86}"),
    (0x1F8F, "\u{1F87}"),
    (0x1F98, "\u{1F90}"),
    (0x1F99, "\u{1F91}"),
    (0x1F9A, "\u{1F92}"),
    (0x1F9B, "\u{1F93}"),
    (0x1F9C, "\u{1F94}"),
    (0x1F9D, "\u{1F95}"),
    (0x1F9E, "\u{1F96}"),
    (0x1F9F, "\u{1F97}"),
    (0x1FA8, "\u{1FA0}"),
    (0x1FA9, "\u{1FA1}"),
    (0x1FAA, "\u{1FA2}"),
    (0x1FAB, "\u{1FA3}"),
    (0x1FAC, "\u{1FA4}"),
    (0x1FAD, "\u{1FA5}"),
    (0x1FAE, "\u{1FA6}"),
    (0x1FAF, "\u{1FA7}"),
    (0x1FB8, "\u{1FB0}"),
    (0x1FB9, "\u{1FB1}"),
    (0x1FBA, "\u{1F70}"),
    (0x1FBB, "\u{1F71}"),
    (0x1FBC, "\u{1FB3}"),
    (0x1FC8, "\u{1F72}"),
    (0x1FC9, "\u{1F73}"),
    (0x1FCA, "\u{1F74}"),
    (0x1FCB, "\u{1F75}"),
    (0x1FCC, "\u{1FC3}"),
    (0x1FD8, "\u{1FD0}"),
    (0x1FD9, "\u{1FD1}"),
    (0x1FDA, "\u{1F76}"),
    (0x1FDB, "\u{1F77}"),
    (0x1FE8, "\u{1FE0}"),
    (0x1FE9, "\u{1FE1}"),
    (0x1FEA, "\u{1F7A}"),
    (0x1FEB, "\u{1F7B}"),
    (0x1FEC, "\u{1FE5}"),
    (0x1FF8, "\u{1F78}"),
    (0x1FF9, "\u{1F79}"),
    (0x1FFA, "\u{1F7C}"),
    (0x1FFB, "\u{1F7D}"),
    (0x1FFC, "\u{1FF3}"),
    (0x2126, "\u{3C9}"),
    (0x212A, "k"),
    (0x212B, "\u{E5}"),
    (0x2132, "\u{214E}"),
    (0x2160, "\u{2170}"),
    (0x2161, "\u{2171}"),
    (0x2162, "\u{2172}"),
    (0x2163, "\u{2173}"),
    (0x2164, "\u{2174}"),
    (0x2165, "\u{2175}"),
    (0x2166, "\u{2176}"),
    (0x2167, "\u{2177}"),
    (0x2168, "\u{2178}"),
    (0x2169, "\u{2179}"),
    (0x216A, "\u{217A}"),
    (0x216B, "\u{217B}"),
    (0x216C, "\u{217C}"),
    (0x216D, "\u{217D}"),
    (0x216E, "\u{217E}"),
    (0x216F, "\u{217F}"),
    (0x2183, "\u{2184}"),
    (0x24B6, "\u{24D0}"),
    (0x24B7, "\u{24D1}"),
    (0x24B8, "\u{24D2}"),
    (0x24B9, "\u{24D3}"),
    (0x24BA, "\u{24D4}"),
    (0x24BB, "\u{24D5}"),
    (0x24BC, "\u{24D6}"),
    (0x24BD, "\u{24D7}"),
    (0x24BE, "\u{24D8}"),
    (0x24BF, "\u{24D9}"),
    (0x24C0, "\u{24DA}"),
    (0x24C1, "\u{24DB}"),
    (0x24C2, "\u{24DC}"),
    (0x24C3, "\u{24DD}"),
    (0x24C4, "\u{24DE}"),
    (0x24C5, "\u{24DF}"),
    (0x24C6, "\u{24E0}"),
    (0x24C7, "\u{24E1}"),
    (0x24C8, "\u{24E2}"),
    (0x24C9, "\u{24E3}"),
    (0x24CA, "\u{24E4}"),
    (0x24CB, "\u{24E5}"),
    (0x24CC, "\u{24E6}"),
    (0x24CD, "\u{24E7}"),
    (0x24CE, "\u{24E8}"),
    (0x24CF, "\u{24E9}"),
    (0x2C00, "\u{2C30}"),
    (0x2C01, "\u{2C31}"),
    (0x2C02, "\u{2C32}"),
    (0x2C03, "\u{2C33}"),
    (0x2C04, "\u{2C34}"),
    (0x2C05, "\u{2C35}"),
    (0x2C06, "\u{2C36}"),
    (0x2C07, "\u{2C37}"),
    (0x2C08, "\u{2C38}"),
    (0x2C09, "\u{2C39}"),
    (0x2C0A, "\u{2C3A}"),
    (0x2C0B, "\u{2C3B}"),
    (0x2C0C, "\u{2C3C}"),
    (0x2C0D, "\u{2C3D}"),
    (0x2C0E, "\u{2C3E}"),
    (0x2C0F, "\u{2C3F}"),
    (0x2C10, "\u{2C40}"),
    (0x2C11, "\u{2C41}"),
    (0x2C12, "\u{2C42}"),
    (0x2C13, "\u{2C43}"),
    (0x2C14, "\u{2C44}"),
    (0x2C15, "\u{2C45}"),
    (0x2C16, "\u{2C46}"),
    (0x2C17, "\u{2C47}"),
    (0x2C18, "\u{2C48}"),
    (0x2C19, "\u{2C49}"),
    (0x2C1A, "\u{2C4A}"),
    (0x2C1B, "\u{2C4B}"),
    (0x2C1C, "\u{2C4C}"),
    (0x2C1D, "\u{2C4D}"),
    (0x2C1E, "\u{2C4E}"),
    (0x2C1F, "\u{2C4F}"),
    (0x2C20, "\u{2C50}"),
    (0x2C21, "\u{2C51}"),
    (0x2C22, "\u{2C52}"),
    (0x2C23, "\u{2C53}"),
    (0x2C24, "\u{2C54}"),
    (0x2C25, "\u{2C55}"),
    (0x2C26, "\u{2C56}"),
    (0x2C27, "\u{2C57}"),
    (0x2C28, "\u{2C58}"),
    (0x2C29, "\u{2C59}"),
    (0x2C2A, "\u{2C5A}"),
    (0x2C2B, "\u{2C5B}"),
    (0x2C2C, "\u{2C5C}"),
    (0x2C2D, "\u{2C5D}"),
    (0x2C2E, "\u{2C5E}"),
    (0x2C2F, "\u{2C5F}"),
    (0x2C60, "\u{2C61}"),
    (0x2C62, "\u{26B}"),
    (0x2C63, "\u{1D7D}"),
    (0x2C64, "\u{27D}"),
    (0x2C67, "\u{2C68}"),
    (0x2C69, "\u{2C6A}"),
    (0x2C6B, "\u{2C6C}"),
    (0x2C6D, "\u{251}"),
    (0x2C6E, "\u{271}"),
    (0x2C6F, "\u{250}"),
    (0x2C70, "\u{252}"),
    (0x2C72, "\u{2C73}"),
    (0x2C75, "\u{2C76}"),
    (0x2C7E, "\u{23F}"),
    (0x2C7F, "\u{240}"),
    (0x2C80, "\u{2C81}"),
    (0x2C82, "\u{2C83}"),
    (0x2C84, "\u{2C85}"),
    (0x2C86, "\u{2C87}"),
    (0x2C88, "\u{2C89}"),
    (0x2C8A, "\u{2C8B}"),
    (0x2C8C, "\u{2C8D}"),
    (0x2C8E, "\u{2C8F}"),
    (0x2C90, "\u{2C91}"),
    (0x2C92, "\u{2C93}"),
    (0x2C94, "\u{2C95}"),
    (0x2C96, "\u{2C97}"),
    (0x2C98, "\u{2C99}"),
    (0x2C9A, "\u{2C9B}"),
    (0x2C9C, "\u{2C9D}"),
    (0x2C9E, "\u{2C9F}"),
    (0x2CA0, "\u{2CA1}"),
    (0x2CA2, "\u{2CA3}"),
    (0x2CA4, "\u{2CA5}"),
    (0x2CA6, "\u{2CA7}"),
    (0x2CA8, "\u{2CA9}"),
    (0x2CAA, "\u{2CAB}"),
    (0x2CAC, "\u{2CAD}"),
    (0x2CAE, "\u{2CAF}"),
    (0x2CB0, "\u{2CB1}"),
    (0x2CB2, "\u{2CB3}"),
    (0x2CB4, "\u{2CB5}"),
    (0x2CB6, "\u{2CB7}"),
    (0x2CB8, "\u{2CB9}"),
    (0x2CBA, "\u{2CBB}"),
    (0x2CBC, "\u{2CBD}"),
    (0x2CBE, "\u{2CBF}"),
    (0x2CC0, "\u{2CC1}"),
    (0x2CC2, "\u{2CC3}"),
    (0x2CC4, "\u{2CC5}"),
    (0x2CC6, "\u{2CC7}"),
    (0x2CC8, "\u{2CC9}"),
    (0x2CCA, "\u{2CCB}"),
    (0x2CCC, "\u{2CCD}"),
    (0x2CCE, "\u{2CCF}"),
    (0x2CD0, "\u{2CD1}"),
    (0x2CD2, "\u{2CD3}"),
    (0x2CD4, "\u{2CD5}"),
    (0x2CD6, "\u{2CD7}"),
    (0x2CD8, "\u{2CD9}"),
    (0x2CDA, "\u{2CDB}"),
    (0x2CDC, "\u{2CDD}"),
    (0x2CDE, "\u{2CDF}"),
    (0x2CE0, "\u{2CE1}"),
    (0x2CE2, "\u{2CE3}"),
    (0x2CEB, "\u{2CEC}"),
    (0x2CED, "\u{2CEE}"),
    (0x2CF2, "\u{2CF3}"),
    (0xA640, "\u{A641}"),
    (0xA642, "\u{A643}"),
    (0xA644, "\u{A645}"),
    (0xA646, "\u{A647}"),
    (0xA648, "\u{A649}"),
    (0xA64A, "\u{A64B}"),
    (0xA64C, "\u{A64D}"),
    (0xA64E, "\u{A64F}"),
    (0xA650, "\u{A651}"),
    (0xA652, "\u{A653}"),
    (0xA654, "\u{A655}"),
    (0xA656, "\u{A657}"),
    (0xA658, "\u{A659}"),
    (0xA65A, "\u{A65B}"),
    (0xA65C, "\u{A65D}"),
    (0xA65E, "\u{A65F}"),
    (0xA660, "\u{A661}"),
    (0xA662, "\u{A663}"),
    (0xA664, "\u{A665}"),
    (0xA666, "\u{A667}"),
    (0xA668, "\u{A669}"),
    (0xA66A, "\u{A66B}"),
    (0xA66C, "\u{A66D}"),
    (0xA680, "\u{A681}"),
    (0xA682, "\u{A683}"),
    (0xA684, "\u{A685}"),
    (0xA686, "\u{A687}"),
    (0xA688, "\u{A689}"),
    (0xA68A, "\u{A68B}"),
    (0xA68C, "\u{A68D}"),
    (0xA68E, "\u{A68F}"),
    (0xA690, "\u{A691}"),
    (0xA692, "\u{A693}"),
    (0xA694, "\u{A695}"),
    (0xA696, "\u{A697}"),
    (0xA698, "\u{A699}"),
    (0xA69A, "\u{A69B}"),
    (0xA722, "\u{A723}"),
    (0xA724, "\u{A725}"),
    (0xA726, "\u{A727}"),
    (0xA728, "\u{A729}"),
    (0xA72A, "\u{A72B}"),
    (0xA72C, "\u{A72D}"),
    (0xA72E, "\u{A72F}"),
    (0xA732, "\u{A733}"),
    (0xA734, "\u{A735}"),
    (0xA736, "\u{A737}"),
    (0xA738, "\u{A739}"),
    (0xA73A, "\u{A73B}"),
    (0xA73C, "\u{A73D}"),
    (0xA73E, "\u{A73F}"),
    (0xA740, "\u{A741}"),
    (0xA742, "\u{A743}"),
    (0xA744, "\u{A745}"),
    (0xA746, "\u{A747}"),
    (0xA748, "\u{A749}"),
    (0xA74A, "\u{A74B}"),
    (0xA74C, "\u{A74D}"),
    (0xA74E, "\u{A74F}"),
    (0xA750, "\u{A751}"),
    (0xA752, "\u{A753}"),
    (0xA754, "\u{A755}"),
    (0xA756, "\u{A757}"),
    (0xA758, "\u{A759}"),
    (0xA75A, "\u{A75B}"),
    (0xA75C, "\u{A75D}"),
    (0xA75E, "\u{A75F}"),
    (0xA760, "\u{A761}"),
    (0xA762, "\u{A763}"),
    (0xA764, "\u{A765}"),
    (0xA766, "\u{A767}"),
    (0xA768, "\u{A769}"),
    (0xA76A, "\u{A76B}"),
    (0xA76C, "\u{A76D}"),
    (0xA76E, "\u{A76F}"),
    (0xA779, "\u{A77A}"),
    (0xA77B, "\u{A77C}"),
    (0xA77D, "\u{1D79}"),
    (0xA77E, "\u{A77F}"),
    (0xA780, "\u{A781}"),
    (0xA782, "\u{A783}"),
    (0xA784, "\u{A785}"),
    (0xA786, "\u{A787}"),
    (0xA78B, "\u{A78C}"),
    (0xA78D, "\u{265}"),
    (0xA790, "\u{A791}"),
    (0xA792, "\u{A793}"),
    (0xA796, "\u{A797}"),
    (0xA798, "\u{A799}"),
    (0xA79A, "\u{A79B}"),
    (0xA79C, "\u{A79D}"),
    (0xA79E, "\u{A79F}"),
    (0xA7A0, "\u{A7A1}"),
    (0xA7A2, "\u{A7A3}"),
    (0xA7A4, "\u{A7A5}"),
    (0xA7A6, "\u{A7A7}"),
    (0xA7A8, "\u{A7A9}"),
    (0xA7AA, "\u{266}"),
    (0xA7AB, "\u{25C}"),
    (0xA7AC, "\u{261}"),
    (0xA7AD, "\u{26C}"),
    (0xA7AE, "\u{26A}"),
    (0xA7B0, "\u{29E}"),
    (0xA7B1, "\u{287}"),
    (0xA7B2, "\u{29D}"),
    (0xA7B3, "\u{AB53}"),
    (0xA7B4, "\u{A7B5}"),
    (0xA7B6, "\u{A7B7}"),
    (0xA7B8, "\u{A7B9}"),
    (0xA7BA, "\u{A7BB}"),
    (0xA7BC, "\u{A7BD}"),
    (0xA7BE, "\u{A7BF}"),
    (0xA7C0, "\u{A7C1}"),
    (0xA7C2, "\u{A7C3}"),
    (0xA7C4, "\u{A794}"),
    (0xA7C5, "\u{282}"),
    (0xA7C6, "\u{1D8E}"),
    (0xA7C7, "\u{A7C8}"),
    (0xA7C9, "\u{A7CA}"),
    (0xA7D0, "\u{A7D1}"),
    (0xA7D6, "\u{A7D7}"),
    (0xA7D8, "\u{A7D9}"),
    (0xA7F5, "\u{A7F6}"),
    (0xFF21, "\u{FF41}"),
    (0xFF22, "\u{FF42}"),
    (0xFF23, "\u{FF43}"),
    (0xFF24, "\u{FF44}"),
    (0xFF25, "\u{FF45}"),
    (0xFF26, "\u{FF46}"),
    (0xFF27, "\u{FF47}"),
    (0xFF28, "\u{FF48}"),
    (0xFF29, "\u{FF49}"),
    (0xFF2A, "\u{FF4A}"),
    (0xFF2B, "\u{FF4B}"),
    (0xFF2C, "\u{FF4C}"),
    (0xFF2D, "\u{FF4D}"),
    (0xFF2E, "\u{FF4E}"),
    (0xFF2F, "\u{FF4F}"),
    (0xFF30, "\u{FF50}"),
    (0xFF31, "\u{FF51}"),
    (0xFF32, "\u{FF52}"),
    (0xFF33, "\u{FF53}"),
    (0xFF34, "\u{FF54}"),
    (0xFF35, "\u{FF55}"),
    (0xFF36, "\u{FF56}"),
    (0xFF37, "\u{FF57}"),
    (0xFF38, "\u{FF58}"),
    (0xFF39, "\u{FF59}"),
    (0xFF3A, "\u{FF5A}"),
    (0x10400, "\u{10428}"),
    (0x10401, "\u{10429}"),
    (0x10402, "\u{1042A}"),
    (0x10403, "\u{1042B}"),
    (0x10404, "\u{1042C}"),
    (0x10405, "\u{1042D}"),
    (0x10406, "\u{1042E}"),
    (0x10407, "\u{1042F}"),
    (0x10408, "\u{10430}"),
    (0x10409, "\u{10431}"),
    (0x1040A, "\u{10432}"),
    (0x1040B, "\u{10433}"),
    (0x1040C, "\u{10434}"),
    (0x1040D, "\u{10435}"),
    (0x1040E, "\u{10436}"),
    (0x1040F, "\u{10437}"),
    (0x10410, "\u{10438}"),
    (0x10411, "\u{10439}"),
    (0x10412, "\u{1043A}"),
    (0x10413, "\u{1043B}"),
    (0x10414, "\u{1043C}"),
    (0x10415, "\u{1043D}"),
    (0x10416, "\u{1043E}"),
    (0x10417, "\u{1043F}"),
    (0x10418, "\u{10440}"),
    (0x10419, "\u{10441}"),
    (0x1041A, "\u{10442}"),
    (0x1041B, "\u{10443}"),
    (0x1041C, "\u{10444}"),
    (0x1041D, "\u{10445}"),
    (0x1041E, "\u{10446}"),
    (0x1041F, "\u{10447}"),
    (0x10420, "\u{10448}"),
    (0x10421, "\u{10449}"),
    (0x10422, "\u{1044A}"),
    (0x10423, "\u{1044B}"),
    (0x10424, "\u{1044C}"),
    (0x10425, "\u{1044D}"),
    (0x10426, "\u{1044E}"),
    (0x10427, "\u{1044F}"),
    (0x104B0, "\u{104D8}"),
    (0x104B1, "\u{104D9}"),
    (0x104B2, "\u{104DA}"),
    (0x104B3, "\u{104DB}"),
    (0x104B4, "\u{104DC}"),
    (0x104B5, "\u{104DD}"),
    (0x104B6, "\u{104DE}"),
    (0x104B7, "\u{104DF}"),
    (0x104B8, "\u{104E0}"),
    (0x104B9, "\u{104E1}"),
    (0x104BA, "\u{104E2}"),
    (0x104BB, "\u{104E3}"),
    (0x104BC, "\u{104E4}"),
    (0x104BD, "\u{104E5}"),
    (0x104BE, "\u{104E6}"),
    (0x104BF, "\u{104E7}"),
    (0x104C0, "\u{104E8}"),
    (0x104C1, "\u{104E9}"),
    (0x104C2, "\u{104EA}"),
    (0x104C3, "\u{104EB}"),
    (0x104C4, "\u{104EC}"),
    (0x104C5, "\u{104ED}"),
    (0x104C6, "\u{104EE}"),
    (0x104C7, "\u{104EF}"),
    (0x104C8, "\u{104F0}"),
    (0x104C9, "\u{104F1}"),
    (0x104CA, "\u{104F2}"),
    (0x104CB, "\u{104F3}"),
    (0x104CC, "\u{104F4}"),
    (0x104CD, "\u{104F5}"),
    (0x104CE, "\u{104F6}"),
    (0x104CF, "\u{104F7}"),
    (0x104D0, "\u{104F8}"),
    (0x104D1, "\u{104F9}"),
    (0x104D2, "\u{104FA}"),
    (0x104D3, "\u{104FB}"),
    (0x10570, "\u{10597}"),
    (0x10571, "\u{10598}"),
    (0x10572, "\u{10599}"),
    (0x10573, "\u{1059A}"),
    (0x10574, "\u{1059B}"),
    (0x10575, "\u{1059C}"),
    (0x10576, "\u{1059D}"),
    (0x10577, "\u{1059E}"),
    (0x10578, "\u{1059F}"),
    (0x10579, "\u{105A0}"),
    (0x1057A, "\u{105A1}"),
    (0x1057C, "\u{105A3}"),
    (0x1057D, "\u{105A4}"),
    (0x1057E, "\u{105A5}"),
    (0x1057F, "\u{105A6}"),
    (0x10580, "\u{105A7}"),
    (0x10581, "\u{105A8}"),
    (0x10582, "\u{105A9}"),
    (0x10583, "\u{105AA}"),
    (0x10584, "\u{105AB}"),
    (0x10585, "\u{105AC}"),
    (0x10586, "\u{105AD}"),
    (0x10587, "\u{105AE}"),
    (0x10588, "\u{105AF}"),
    (0x10589, "\u{105B0}"),
    (0x1058A, "\u{105B1}"),
    (0x1058C, "\u{105B3}"),
    (0x1058D, "\u{105B4}"),
    (0x1058E, "\u{105B5}"),
    (0x1058F, "\u{105B6}"),
    (0x10590, "\u{105B7}"),
    (0x10591, "\u{105B8}"),
    (0x10592, "\u{105B9}"),
    (0x10594, "\u{105BB}"),
    (0x10595, "\u{105BC}"),
    (0x10C80, "\u{10CC0}"),
    (0x10C81, "\u{10CC1}"),
    (0x10C82, "\u{10CC2}"),
    (0x10C83, "\u{10CC3}"),
    (0x10C84, "\u{10CC4}"),
    (0x10C85, "\u{10CC5}"),
    (0x10C86, "\u{10CC6}"),
    (0x10C87, "\u{10CC7}"),
    (0x10C88, "\u{10CC8}"),
    (0x10C89, "\u{10CC9}"),
    (0x10C8A, "\u{10CCA}"),
    (0x10C8B, "\u{10CCB}"),
    (0x10C8C, "\u{10CCC}"),
    (0x10C8D, "\u{10CCD}"),
    (0x10C8E, "\u{10CCE}"),
    (0x10C8F, "\u{10CCF}"),
    (0x10C90, "\u{10CD0}"),
    (0x10C91, "\u{10CD1}"),
    (0x10C92, "\u{10CD2}"),
    (0x10C93, "\u{10CD3}"),
    (0x10C94, "\u{10CD4}"),
    (0x10C95, "\u{10CD5}"),
    (0x10C96, "\u{10CD6}"),
    (0x10C97, "\u{10CD7}"),
    (0x10C98, "\u{10CD8}"),
    (0x10C99, "\u{10CD9}"),
    (0x10C9A, "\u{10CDA}"),
    (0x10C9B, "\u{10CDB}"),
    (0x10C9C, "\u{10CDC}"),
    (0x10C9D, "\u{10CDD}"),
    (0x10C9E, "\u{10CDE}"),
    (0x10C9F, "\u{10CDF}"),
    (0x10CA0, "\u{10CE0}"),
    (0x10CA1, "\u{10CE1}"),
    (0x10CA2, "\u{10CE2}"),
    (0x10CA3, "\u{10CE3}"),
    (0x10CA4, "\u{10CE4}"),
    (0x10CA5, "\u{10CE5}"),
    (0x10CA6, "\u{10CE6}"),
    (0x10CA7, "\u{10CE7}"),
    (0x10CA8, "\u{10CE8}"),
    (0x10CA9, "\u{10CE9}"),
    (0x10CAA, "\u{10CEA}"),
    (0x10CAB, "\u{10CEB}"),
    (0x10CAC, "\u{10CEC}"),
    (0x10CAD, "\u{10CED}"),
    (0x10CAE, "\u{10CEE}"),
    (0x10CAF, "\u{10CEF}"),
    (0x10CB0, "\u{10CF0}"),
    (0x10CB1, "\u{10CF1}"),
    (0x10CB2, "\u{10CF2}"),
    (0x118A0, "\u{118C0}"),
    (0x118A1, "\u{118C1}"),
    (0x118A2, "\u{118C2}"),
    (0x118A3, "\u{118C3}"),
    (0x118A4, "\u{118C4}"),
    (0x118A5, "\u{118C5}"),
    (0x118A6, "\u{118C6}"),
    (0x118A7, "\u{118C7}"),
    (0x118A8, "\u{118C8}"),
    (0x118A9, "\u{118C9}"),
    (0x118AA, "\u{118CA}"),
    (0x118AB, "\u{118CB}"),
    (0x118AC, "\u{118CC}"),
    (0x118AD, "\u{118CD}"),
    (0x118AE, "\u{118CE}"),
    (0x118AF, "\u{118CF}"),
    (0x118B0, "\u{118D0}"),
    (0x118B1, "\u{118D1}"),
    (0x118B2, "\u{118D2}"),
    (0x118B3, "\u{118D3}"),
    (0x118B4, "\u{118D4}"),
    (0x118B5, "\u{118D5}"),
    (0x118B6, "\u{118D6}"),
    (0x118B7, "\u{118D7}"),
    (0x118B8, "\u{118D8}"),
    (0x118B9, "\u{118D9}"),
    (0x118BA, "\u{118DA}"),
    (0x118BB, "\u{118DB}"),
    (0x118BC, "\u{118DC}"),
    (0x118BD, "\u{118DD}"),
    (0x118BE, "\u{118DE}"),
    (0x118BF, "\u{118DF}"),
    (0x16E40, "\u{16E60}"),
    (0x16E41, "\u{16E61}"),
    (0x16E42, "\u{16E62}"),
    (0x16E43, "\u{16E63}"),
    (0x16E44, "\u{16E64}"),
    (0x16E45, "\u{16E65}"),
    (0x16E46, "\u{16E66}"),
    (0x16E47, "\u{16E67}"),
    (0x16E48, "\u{16E68}"),
    (0x16E49, "\u{16E69}"),
    (0x16E4A, "\u{16E6A}"),
    (0x16E4B, "\u{16E6B}"),
    (0x16E4C, "\u{16E6C}"),
    (0x16E4D, "\u{16E6D}"),
    (0x16E4E, "\u{16E6E}"),
    (0x16E4F, "\u{16E6F}"),
    (0x16E50, "\u{16E70}"),
    (0x16E51, "\u{16E71}"),
    (0x16E52, "\u{16E72}"),
    (0x16E53, "\u{16E73}"),
    (0x16E54, "\u{16E74}"),
    (0x16E55, "\u{16E75}"),
    (0x16E56, "\u{16E76}"),
    (0x16E57, "\u{16E77}"),
    (0x16E58, "\u{16E78}"),
    (0x16E59, "\u{16E79}"),
    (0x16E5A, "\u{16E7A}"),
    (0x16E5B, "\u{16E7B}"),
    (0x16E5C, "\u{16E7C}"),
    (0x16E5D, "\u{16E7D}"),
    (0x16E5E, "\u{16E7E}"),
    (0x16E5F, "\u{16E7F}"),
    (0x1E900, "\u{1E922}"),
    (0x1E901, "\u{1E923}"),
    (0x1E902, "\u{1E924}"),
    (0x1E903, "\u{1E925}"),
    (0x1E904, "\u{1E926}"),
    (0x1E905, "\u{1E927}"),
    (0x1E906, "\u{1E928}"),
    (0x1E907, "\u{1E929}"),
    (0x1E908, "\u{1E92A}"),
    (0x1E909, "\u{1E92B}"),
    (0x1E90A, "\u{1E92C}"),
    (0x1E90B, "\u{1E92D}"),
    (0x1E90C, "\u{1E92E}"),
    (0x1E90D, "\u{1E92F}"),
    (0x1E90E, "\u{1E930}"),
    (0x1E90F, "\u{1E931}"),
    (0x1E910, "\u{1E932}"),
    (0x1E911, "\u{1E933}"),
    (0x1E912, "\u{1E934}"),
    (0x1E913, "\u{1E935}"),
    (0x1E914, "\u{1E936}"),
    (0x1E915, "\u{1E937}"),
    (0x1E916, "\u{1E938}"),
    (0x1E917, "\u{1E939}"),
    (0x1E918, "\u{1E93A}"),
    (0x1E919, "\u{1E93B}"),
    (0x1E91A, "\u{1E93C}"),
    (0x1E91B, "\u{1E93D}"),
    (0x1E91C, "\u{1E93E}"),
    (0x1E91D, "\u{1E93F}"),
    (0x1E91E, "\u{1E940}"),
    (0x1E91F, "\u{1E941}"),
    (0x1E920, "\u{1E942}"),
    (0x1E921, "\u{1E943}"),
];

/// Full case foldings that differ from the lowercase mapping.
#[rustfmt::skip]
static CASE_FOLDING: &[(u32, &str)] = &[
    (0x00B5, "\u{3BC}"),
    (0x00DF, "ss"),
    (0x0149, "\u{2BC}n"),
    (0x017F, "s"),
    (0x01F0, "j\u{30C}"),
    (0x0345, "\u{3B9}"),
    (0x0390, "\u{3B9}\u{308}\u{301}"),
    (0x03B0, "\u{3C5}\u{308}\u{301}"),
    (0x03C2, "\u{3C3}"),
    (0x03D0, "\u{3B2}"),
    (0x03D1, "\u{3B8}"),
    (0x03D5, "\u{3C6}"),
    (0x03D6, "\u{3C0}"),
    (0x03F0, "\u{3BA}"),
    (0x03F1, "\u{3C1}"),
    (0x03F5, "\u{3B5}"),
    (0x0587, "\u{565}\u{582}"),
    (0x13F8, "\u{13F0}"),
    (0x13F9, "\u{13F1}"),
    (0x13FA, "\u{13F2}"),
    (0x13FB, "\u{13F3}"),
    (0x13FC, "\u{13F4}"),
    (0x13FD, "\u{13F5}"),
    (0x1C80, "\u{432}"),
    (0x1C81, "\u{434}"),
    (0x1C82, "\u{43E}"),
    (0x1C83, "\u{441}"),
    (0x1C84, "\u{442}"),
    (0x1C85, "\u{442}"),
    (0x1C86, "\u{44A}"),
    (0x1C87, "\u{463}"),
    (0x1C88, "\u{A64B}"),
    (0x1E96, "h\u{331}"),
    (0x1E97, "t\u{308}"),
    (0x1E98, "w\u{30A}"),
    (0x1E99, "y\u{30A}"),
    (0x1E9A, "a\u{2BE}"),
    (0x1E9B, "\u{1E61}"),
    (0x1E9E, "ss"),
    (0x1F50, "\u{3C5}\u{313}"),
    (0x1F52, "\u{3C5}\u{313}\u{300}"),
    (0x1F54, "\u{3C5}\u{313}\u{301}"),
    (0x1F56, "\u{3C5}\u{313}\u{342}"),
    (0x1F80, "\u{1F00}\u{3B9}"),
    (0x1F81, "\u{1F01}\u{3B9}"),
    (0x1F82, "\u{1F02}\u{3B9}"),
    (0x1F83, "\u{1F03}\u{3B9}"),
    (0x1F84, "\u{1F04}\u{3B9}"),
    (0x1F85, "\u{1F05}\u{3B9}"),
    (0x1F86, "\u{1F06}\u{3B9}"),
    (0x1F87, "\u{1F07}\u{3B9}"),
    (0x1F88, "\u{1F00}\u{3B9}"),
    (0x1F89, "\u{1F01}\u{3B9}"),
    (0x1F8A, "\u{1F02}\u{3B9}"),
    (0x1F8B, "\u{1F03}\u{3B9}"),
    (0x1F8C, "\u{1F04}\u{3B9}"),
    (0x1F8D, "\u{1F05}\u{3B9}"),
    (0x1F8E, "\u{1F06}\u{3B9}"),
    (0x1F8F, "\u{1F07}\u{3B9}"),
    (0x1F90, "\u{1F20}\u{3B9}"),
    (0x1F91, "\u{1F21}\u{3B9}"),
    (0x1F92, "\u{1F22}\u{3B9}"),
    (0x1F93, "\u{1F23}\u{3B9}"),
    (0x1F94, "\u{1F24}\u{3B9}"),
    (0x1F95, "\u{1F25}\u{3B9}"),
    (0x1F96, "\u{1F26}\u{3B9}"),
    (0x1F97, "\u{1F27}\u{3B9}"),
    (0x1F98, "\u{1F20}\u{3B9}"),
    (0x1F99, "\u{1F21}\u{3B9}"),
    (0x1F9A, "\u{1F22}\u{3B9}"),
    (0x1F9B, "\u{1F23}\u{3B9}"),
    (0x1F9C, "\u{1F24}\u{3B9}"),
    (0x1F9D, "\u{1F25}\u{3B9}"),
    (0x1F9E, "\u{1F26}\u{3B9}"),
    (0x1F9F, "\u{1F27}\u{3B9}"),
    (0x1FA0, "\u{1F60}\u{3B9}"),
    (0x1FA1, "\u{1F61}\u{3B9}"),
    (0x1FA2, "\u{1F62}\u{3B9}"),
    (0x1FA3, "\u{1F63}\u{3B9}"),
    (0x1FA4, "\u{1F64}\u{3B9}"),
    (0x1FA5, "\u{1F65}\u{3B9}"),
    (0x1FA6, "\u{1F66}\u{3B9}"),
    (0x1FA7, "\u{1F67}\u{3B9}"),
    (0x1FA8, "\u{1F60}\u{3B9}"),
    (0x1FA9, "\u{1F61}\u{3B9}"),
    (0x1FAA, "\u{1F62}\u{3B9}"),
    (0x1FAB, "\u{1F63}\u{3B9}"),
    (0x1FAC, "\u{1F64}\u{3B9}"),
    (0x1FAD, "\u{1F65}\u{3B9}"),
    (0x1FAE, "\u{1F66}\u{3B9}"),
    (0x1FAF, "\u{1F67}\u{3B9}"),
    (0x1FB2, "\u{1F70}\u{3B9}"),
    (0x1FB3, "\u{3B1}\u{3B9}"),
    (0x1FB4, "\u{3AC}\u{3B9}"),
    (0x1FB6, "\u{3B1}\u{342}"),
    (0x1FB7, "\u{3B1}\u{342}\u{3B9}"),
    (0x1FBC, "\u{3B1}\u{3B9}"),
    (0x1FBE, "\u{3B9}"),
    (0x1FC2, "\u{1F74}\u{3B9}"),
    (0x1FC3, "\u{3B7}\u{3B9}"),
    (0x1FC4, "\u{3AE}\u{3B9}"),
    (0x1FC6, "\u{3B7}\u{342}"),
    (0x1FC7, "\u{3B7}\u{342}\u{3B9}"),
    (0x1FCC, "\u{3B7}\u{3B9}"),
    (0x1FD2, "\u{3B9}\u{308}\u{300}"),
    (0x1FD3, "\u{3B9}\u{308}\u{301}"),
    (0x1FD6, "\u{3B9}\u{342}"),
    (0x1FD7, "\u{3B9}\u{308}\u{342}"),
    (0x1FE2, "\u{3C5}\u{308}\u{300}"),
    (0x1FE3, "\u{3C5}\u{308}\u{301}"),
    (0x1FE4, "\u{3C1}\u{313}"),
    (0x1FE6, "\u{3C5}\u{342}"),
    (0x1FE7, "\u{3C5}\u{308}\u{342}"),
    (0x1FF2, "\u{1F7C}\u{3B9}"),
    (0x1FF3, "\u{3C9}\u{3B9}"),
    (0x1FF4, "\u{3CE}\u{3B9}"),
    (0x1FF6, "\u{3C9}\u{342}"),
    (0x1FF7, "\u{3C9}\u{342}\u{3B9}"),
    (0x1FFC, "\u{3C9}\u{3B9}"),
    (0xAB70, "\u{13A0}"),
    (0xAB71, "\u{13A1}"),
    (0xAB72, "\u{13A2}"),
    (0xAB73, "\u{13A3}"),
    (0xAB74, "\u{13A4}"),
    (0xAB75, "\u{13A5}"),
    (0xAB76, "\u{13A6}"),
    (0xAB77, "\u{13A7}"),
    (0xAB78, "\u{13A8}"),
    (0xAB79, "\u{13A9}"),
    (0xAB7A, "\u{13AA}"),
    (0xAB7B, "\u{13AB}"),
    (0xAB7C, "\u{13AC}"),
    (0xAB7D, "\u{13AD}"),
    (0xAB7E, "\u{13AE}"),
    (0xAB7F, "\u{13AF}"),
    (0xAB80, "\u{13B0}"),
    (0xAB81, "\u{13B1}"),
    (0xAB82, "\u{13B2}"),
    (0xAB83, "\u{13B3}"),
    (0xAB84, "\u{13B4}"),
    (0xAB85, "\u{13B5}"),
    (0xAB86, "\u{13B6}"),
    (0xAB87, "\u{13B7}"),
    (0xAB88, "\u{13B8}"),
    (0xAB89, "\u{13B9}"),
    (0xAB8A, "\u{13BA}"),
    (0xAB8B, "\u{13BB}"),
    (0xAB8C, "\u{13BC}"),
    (0xAB8D, "\u{13BD}"),
    (0xAB8E, "\u{13BE}"),
    (0xAB8F, "\u{13BF}"),
    (0xAB90, "\u{13C0}"),
    (0xAB91, "\u{13C1}"),
    (0xAB92, "\u{13C2}"),
    (0xAB93, "\u{13C3}"),
    (0xAB94, "\u{13C4}"),
    (0xAB95, "\u{13C5}"),
    (0xAB96, "\u{13C6}"),
    (0xAB97, "\u{13C7}"),
    (0xAB98, "\u{13C8}"),
    (0xAB99, "\u{13C9}"),
    (0xAB9A, "\u{13CA}"),
    (0xAB9B, "\u{13CB}"),
    (0xAB9C, "\u{13CC}"),
    (0xAB9D, "\u{13CD}"),
    (0xAB9E, "\u{13CE}"),
    (0xAB9F, "\u{13CF}"),
    (0xABA0, "\u{13D0}"),
    (0xABA1, "\u{13D1}"),
    (0xABA2, "\u{13D2}"),
    (0xABA3, "\u{13D3}"),
    (0xABA4, "\u{13D4}"),
    (0xABA5, "\u{13D5}"),
    (0xABA6, "\u{13D6}"),
    (0xABA7, "\u{13D7}"),
    (0xABA8, "\u{13D8}"),
    (0xABA9, "\u{13D9}"),
    (0xABAA, "\u{13DA}"),
    (0xABAB, "\u{13DB}"),
    (0xABAC, "\u{13DC}"),
    (0xABAD, "\u{13DD}"),
    (0xABAE, "\u{13DE}"),
    (0xABAF, "\u{13DF}"),
    (0xABB0, "\u{13E0}"),
    (0xABB1, "\u{13E1}"),
    (0xABB2, "\u{13E2}"),
    (0xABB3, "\u{13E3}"),
    (0xABB4, "\u{13E4}"),
    (0xABB5, "\u{13E5}"),
    (0xABB6, "\u{13E6}"),
    (0xABB7, "\u{13E7}"),
    (0xABB8, "\u{13E8}"),
    (0xABB9, "\u{13E9}"),
    (0xABBA, "\u{13EA}"),
    (0xABBB, "\u{13EB}"),
    (0xABBC, "\u{13EC}"),
    (0xABBD, "\u{13ED}"),
    (0xABBE, "\u{13EE}"),
    (0xABBF, "\u{13EF}"),
    (0xFB00, "ff"),
    (0xFB01, "fi"),
    (0xFB02, "fl"),
    (0xFB03, "ffi"),
    (0xFB04, "ffl"),
    (0xFB05, "st"),
    (0xFB06, "st"),
    (0xFB13, "\u{574}\u{576}"),
    (0xFB14, "\u{574}\u{565}"),
    (0xFB15, "\u{574}\u{56B}"),
    (0xFB16, "\u{57E}\u{576}"),
    (0xFB17, "\u{574}\u{56D}"),
];

/// Look up the full uppercase mapping of a character.
pub fn uppercase_mapping(c: char) -> Option<&'static str> {
    lookup(UPPERCASE, c)
}

/// Look up the full lowercase mapping of a character.
pub fn lowercase_mapping(c: char) -> Option<&'static str> {
    lookup(LOWERCASE, c)
}

/// Look up the full case folding of a character where it differs from the
/// lowercase mapping.
pub fn case_folding(c: char) -> Option<&'static str> {
    lookup(CASE_FOLDING, c)
}

fn lookup(table: &'static [(u32, &'static str)], c: char) -> Option<&'static str> {
    table
        .binary_search_by_key(&(c as u32), |&(cp, _)| cp)
        .ok()
        .map(|index| table[index].1)
}
