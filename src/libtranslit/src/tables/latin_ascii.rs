// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Latin-to-ASCII folding data.
//!
//! Generated offline in the style of the CLDR `Latin-ASCII` transform:
//! accented Latin letters fold to their base letters, typographic
//! punctuation and enclosed/compatibility glyphs fold to ASCII
//! approximations. Do not edit by hand.

/// Folding pairs as (codepoint, replacement), sorted by codepoint.
#[rustfmt::skip]
static LATIN_ASCII: &[(u32, &str)] = &[
    (0x00A0, " "),
    (0x00A1, "!"),
    (0x00A8, " "),
    (0x00A9, "(C)"),
    (0x00AA, "a"),
    (0x00AB, "<<"),
    (0x00AE, "(R)"),
    (0x00AF, " "),
    (0x00B1, "+-"),
    (0x00B2, "2"),
    (0x00B3, "3"),
    (0x00B4, " "),
    (0x00B7, "."),
    (0x00B8, " "),
    (0x00B9, "1"),
    (0x00BA, "o"),
    (0x00BB, ">>"),
    (0x00BC, "1/4"),
    (0x00BD, "1/2"),
    (0x00BE, "3/4"),
    (0x00BF, "?"),
    (0x00C0, "A"),
    (0x00C1, "A"),
    (0x00C2, "A"),
    (0x00C3, "A"),
    (0x00C4, "A"),
    (0x00C5, "A"),
    (0x00C6, "AE"),
    (0x00C7, "C"),
    (0x00C8, "E"),
    (0x00C9, "E"),
    (0x00CA, "E"),
    (0x00CB, "E"),
    (0x00CC, "I"),
    (0x00CD, "I"),
    (0x00CE, "I"),
    (0x00CF, "I"),
    (0x00D0, "D"),
    (0x00D1, "N"),
    (0x00D2, "O"),
    (0x00D3, "O"),
    (0x00D4, "O"),
    (0x00D5, "O"),
    (0x00D6, "O"),
    (0x00D7, "x"),
    (0x00D8, "O"),
    (0x00D9, "U"),
    (0x00DA, "U"),
    (0x00DB, "U"),
    (0x00DC, "U"),
    (0x00DD, "Y"),
    (0x00DE, "TH"),
    (0x00DF, "ss"),
    (0x00E0, "a"),
    (0x00E1, "a"),
    (0x00E2, "a"),
    (0x00E3, "a"),
    (0x00E4, "a"),
    (0x00E5, "a"),
    (0x00E6, "ae"),
    (0x00E7, "c"),
    (0x00E8, "e"),
    (0x00E9, "e"),
    (0x00EA, "e"),
    (0x00EB, "e"),
    (0x00EC, "i"),
    (0x00ED, "i"),
    (0x00EE, "i"),
    (0x00EF, "i"),
    (0x00F0, "d"),
    (0x00F1, "n"),
    (0x00F2, "o"),
    (0x00F3, "o"),
    (0x00F4, "o"),
    (0x00F5, "o"),
    (0x00F6, "o"),
    (0x00F7, "/"),
    (0x00F8, "o"),
    (0x00F9, "u"),
    (0x00FA, "u"),
    (0x00FB, "u"),
    (0x00FC, "u"),
    (0x00FD, "y"),
    (0x00FE, "th"),
    (0x00FF, "y"),
    (0x0100, "A"),
    (0x0101, "a"),
    (0x0102, "A"),
    (0x0103, "a"),
    (0x0104, "A"),
    (0x0105, "a"),
    (0x0106, "C"),
    (0x0107, "c"),
    (0x0108, "C"),
    (0x0109, "c"),
    (0x010A, "C"),
    (0x010B, "c"),
    (0x010C, "C"),
    (0x010D, "c"),
    (0x010E, "D"),
    (0x010F, "d"),
    (0x0110, "D"),
    (0x0111, "d"),
    (0x0112, "E"),
    (0x0113, "e"),
    (0x0114, "E"),
    (0x0115, "e"),
    (0x0116, "E"),
    (0x0117, "e"),
    (0x0118, "E"),
    (0x0119, "e"),
    (0x011A, "E"),
    (0x011B, "e"),
    (0x011C, "G"),
    (0x011D, "g"),
    (0x011E, "G"),
    (0x011F, "g"),
    (0x0120, "G"),
    (0x0121, "g"),
    (0x0122, "G"),
    (0x0123, "g"),
    (0x0124, "H"),
    (0x0125, "h"),
    (0x0126, "H"),
    (0x0127, "h"),
    (0x0128, "I"),
    (0x0129, "i"),
    (0x012A, "I"),
    (0x012B, "i"),
    (0x012C, "I"),
    (0x012D, "i"),
    (0x012E, "I"),
    (0x012F, "i"),
    (0x0130, "I"),
    (0x0131, "i"),
    (0x0132, "IJ"),
    (0x0133, "ij"),
    (0x0134, "J"),
    (0x0135, "j"),
    (0x0136, "K"),
    (0x0137, "k"),
    (0x0138, "k"),
    (0x0139, "L"),
    (0x013A, "l"),
    (0x013B, "L"),
    (0x013C, "l"),
    (0x013D, "L"),
    (0x013E, "l"),
    (0x013F, "L."),
    (0x0140, "l."),
    (0x0141, "L"),
    (0x0142, "l"),
    (0x0143, "N"),
    (0x0144, "n"),
    (0x0145, "N"),
    (0x0146, "n"),
    (0x0147, "N"),
    (0x0148, "n"),
    (0x014A, "NG"),
    (0x014B, "ng"),
    (0x014C, "O"),
    (0x014D, "o"),
    (0x014E, "O"),
    (0x014F, "o"),
    (0x0150, "O"),
    (0x0151, "o"),
    (0x0152, "OE"),
    (0x0153, "oe"),
    (0x0154, "R"),
    (0x0155, "r"),
    (0x0156, "R"),
    (0x0157, "r"),
    (0x0158, "R"),
    (0x0159, "r"),
    (0x015A, "S"),
    (0x015B, "s"),
    (0x015C, "S"),
    (0x015D, "s"),
    (0x015E, "S"),
    (0x015F, "s"),
    (0x0160, "S"),
    (0x0161, "s"),
    (0x0162, "T"),
    (0x0163, "t"),
    (0x0164, "T"),
    (0x0165, "t"),
    (0x0166, "T"),
    (0x0167, "t"),
    (0x0168, "U"),
    (0x0169, "u"),
    (0x016A, "U"),
    (0x016B, "u"),
    (0x016C, "U"),
    (0x016D, "u"),
    (0x016E, "U"),
    (0x016F, "u"),
    (0x0170, "U"),
    (0x0171, "u"),
    (0x0172, "U"),
    (0x0173, "u"),
    (0x0174, "W"),
    (0x0175, "w"),
    (0x0176, "Y"),
    (0x0177, "y"),
    (0x0178, "Y"),
    (0x0179, "Z"),
    (0x017A, "z"),
    (0x017B, "Z"),
    (0x017C, "z"),
    (0x017D, "Z"),
    (0x017E, "z"),
    (0x017F, "s"),
    (0x0180, "b"),
    (0x0189, "D"),
    (0x0190, "E"),
    (0x0197, "I"),
    (0x019A, "l"),
    (0x01A0, "O"),
    (0x01A1, "o"),
    (0x01AF, "U"),
    (0x01B0, "u"),
    (0x01B5, "Z"),
    (0x01B6, "z"),
    (0x01C4, "DZ"),
    (0x01C5, "Dz"),
    (0x01C6, "dz"),
    (0x01C7, "LJ"),
    (0x01C8, "Lj"),
    (0x01C9, "lj"),
    (0x01CA, "NJ"),
    (0x01CB, "Nj"),
    (0x01CC, "nj"),
    (0x01CD, "A"),
    (0x01CE, "a"),
    (0x01CF, "I"),
    (0x01D0, "i"),
    (0x01D1, "O"),
    (0x01D2, "o"),
    (0x01D3, "U"),
    (0x01D4, "u"),
    (0x01D5, "U"),
    (0x01D6, "u"),
    (0x01D7, "U"),
    (0x01D8, "u"),
    (0x01D9, "U"),
    (0x01DA, "u"),
    (0x01DB, "U"),
    (0x01DC, "u"),
    (0x01DD, "e"),
    (0x01DE, "A"),
    (0x01DF, "a"),
    (0x01E0, "A"),
    (0x01E1, "a"),
    (0x01E2, "AE"),
    (0x01E3, "ae"),
    (0x01E6, "G"),
    (0x01E7, "g"),
    (0x01E8, "K"),
    (0x01E9, "k"),
    (0x01EA, "O"),
    (0x01EB, "o"),
    (0x01EC, "O"),
    (0x01ED, "o"),
    (0x01F0, "j"),
    (0x01F1, "DZ"),
    (0x01F2, "Dz"),
    (0x01F3, "dz"),
    (0x01F4, "G"),
    (0x01F5, "g"),
    (0x01F8, "N"),
    (0x01F9, "n"),
    (0x01FA, "A"),
    (0x01FB, "a"),
    (0x01FC, "AE"),
    (0x01FD, "ae"),
    (0x01FE, "O"),
    (0x01FF, "o"),
    (0x0200, "A"),
    (0x0201, "a"),
    (0x0202, "A"),
    (0x0203, "a"),
    (0x0204, "E"),
    (0x0205, "e"),
    (0x0206, "E"),
    (0x0207, "e"),
    (0x0208, "I"),
    (0x0209, "i"),
    (0x020A, "I"),
    (0x020B, "i"),
    (0x020C, "O"),
    (0x020D, "o"),
    (0x020E, "O"),
    (0x020F, "o"),
    (0x0210, "R"),
    (0x0211, "r"),
    (0x0212, "R"),
    (0x0213, "r"),
    (0x0214, "U"),
    (0x0215, "u"),
    (0x0216, "U"),
    (0x0217, "u"),
    (0x0218, "S"),
    (0x0219, "s"),
    (0x021A, "T"),
    (0x021B, "t"),
    (0x021E, "H"),
    (0x021F, "h"),
    (0x0226, "A"),
    (0x0227, "a"),
    (0x0228, "E"),
    (0x0229, "e"),
    (0x022A, "O"),
    (0x022B, "o"),
    (0x022C, "O"),
    (0x022D, "o"),
    (0x022E, "O"),
    (0x022F, "o"),
    (0x0230, "O"),
    (0x0231, "o"),
    (0x0232, "Y"),
    (0x0233, "y"),
    (0x0237, "j"),
    (0x0247, "E"),
    (0x0248, "J"),
    (0x0249, "j"),
    (0x024B, "q"),
    (0x024C, "R"),
    (0x024D, "r"),
    (0x024E, "Y"),
    (0x024F, "y"),
    (0x1E00, "A"),
    (0x1E01, "a"),
    (0x1E02, "B"),
    (0x1E03, "b"),
    (0x1E04, "B"),
    (0x1E05, "b"),
    (0x1E06, "B"),
    (0x1E07, "b"),
    (0x1E08, "C"),
    (0x1E09, "c"),
    (0x1E0A, "D"),
    (0x1E0B, "d"),
    (0x1E0C, "D"),
    (0x1E0D, "d"),
    (0x1E0E, "D"),
    (0x1E0F, "d"),
    (0x1E10, "D"),
    (0x1E11, "d"),
    (0x1E12, "D"),
    (0x1E13, "d"),
    (0x1E14, "E"),
    (0x1E15, "e"),
    (0x1E16, "E"),
    (0x1E17, "e"),
    (0x1E18, "E"),
    (0x1E19, "e"),
    (0x1E1A, "E"),
    (0x1E1B, "e"),
    (0x1E1C, "E"),
    (0x1E1D, "e"),
    (0x1E1E, "F"),
    (0x1E1F, "f"),
    (0x1E20, "G"),
    (0x1E21, "g"),
    (0x1E22, "H"),
    (0x1E23, "h"),
    (0x1E24, "H"),
    (0x1E25, "h"),
    (0x1E26, "H"),
    (0x1E27, "h"),
    (0x1E28, "H"),
    (0x1E29, "h"),
    (0x1E2A, "H"),
    (0x1E2B, "h"),
    (0x1E2C, "I"),
    (0x1E2D, "i"),
    (0x1E2E, "I"),
    (0x1E2F, "i"),
    (0x1E30, "K"),
    (0x1E31, "k"),
    (0x1E32, "K"),
    (0x1E33, "k"),
    (0x1E34, "K"),
    (0x1E35, "k"),
    (0x1E36, "L"),
    (0x1E37, "l"),
    (0x1E38, "L"),
    (0x1E39, "l"),
    (0x1E3A, "L"),
    (0x1E3B, "l"),
    (0x1E3C, "L"),
    (0x1E3D, "l"),
    (0x1E3E, "M"),
    (0x1E3F, "m"),
    (0x1E40, "M"),
    (0x1E41, "m"),
    (0x1E42, "M"),
    (0x1E43, "m"),
    (0x1E44, "N"),
    (0x1E45, "n"),
    (0x1E46, "N"),
    (0x1E47, "n"),
    (0x1E48, "N"),
    (0x1E49, "n"),
    (0x1E4A, "N"),
    (0x1E4B, "n"),
    (0x1E4C, "O"),
    (0x1E4D, "o"),
    (0x1E4E, "O"),
    (0x1E4F, "o"),
    (0x1E50, "O"),
    (0x1E51, "o"),
    (0x1E52, "O"),
    (0x1E53, "o"),
    (0x1E54, "P"),
    (0x1E55, "p"),
    (0x1E56, "P"),
    (0x1E57, "p"),
    (0x1E58, "R"),
    (0x1E59, "r"),
    (0x1E5A, "R"),
    (0x1E5B, "r"),
    (0x1E5C, "R"),
    (0x1E5D, "r"),
    (0x1E5E, "R"),
    (0x1E5F, "r"),
    (0x1E60, "S"),
    (0x1E61, "s"),
    (0x1E62, "S"),
    (0x1E63, "s"),
    (0x1E64, "S"),
    (0x1E65, "s"),
    (0x1E66, "S"),
    (0x1E67, "s"),
    (0x1E68, "S"),
    (0x1E69, "s"),
    (0x1E6A, "T"),
    (0x1E6B, "t"),
    (0x1E6C, "T"),
    (0x1E6D, "t"),
    (0x1E6E, "T"),
    (0x1E6F, "t"),
    (0x1E70, "T"),
    (0x1E71, "t"),
    (0x1E72, "U"),
    (0x1E73, "u"),
    (0x1E74, "U"),
    (0x1E75, "u"),
    (0x1E76, "U"),
    (0x1E77, "u"),
    (0x1E78, "U"),
    (0x1E79, "u"),
    (0x1E7A, "U"),
    (0x1E7B, "u"),
    (0x1E7C, "V"),
    (0x1E7D, "v"),
    (0x1E7E, "V"),
    (0x1E7F, "v"),
    (0x1E80, "W"),
    (0x1E81, "w"),
    (0x1E82, "W"),
    (0x1E83, "w"),
    (0x1E84, "W"),
    (0x1E85, "w"),
    (0x1E86, "W"),
    (0x1E87, "w"),
    (0x1E88, "W"),
    (0x1E89, "w"),
    (0x1E8A, "X"),
    (0x1E8B, "x"),
    (0x1E8C, "X"),
    (0x1E8D, "x"),
    (0x1E8E, "Y"),
    (0x1E8F, "y"),
    (0x1E90, "Z"),
    (0x1E91, "z"),
    (0x1E92, "Z"),
    (0x1E93, "z"),
    (0x1E94, "Z"),
    (0x1E95, "z"),
    (0x1E96, "h"),
    (0x1E97, "t"),
    (0x1E98, "w"),
    (0x1E99, "y"),
    (0x1E9B, "s"),
    (0x1E9E, "SS"),
    (0x1EA0, "A"),
    (0x1EA1, "a"),
    (0x1EA2, "A"),
    (0x1EA3, "a"),
    (0x1EA4, "A"),
    (0x1EA5, "a"),
    (0x1EA6, "A"),
    (0x1EA7, "a"),
    (0x1EA8, "A"),
    (0x1EA9, "a"),
    (0x1EAA, "A"),
    (0x1EAB, "a"),
    (0x1EAC, "A"),
    (0x1EAD, "a"),
    (0x1EAE, "A"),
    (0x1EAF, "a"),
    (0x1EB0, "A"),
    (0x1EB1, "a"),
    (0x1EB2, "A"),
    (0x1EB3, "a"),
    (0x1EB4, "A"),
    (0x1EB5, "a"),
    (0x1EB6, "A"),
    (0x1EB7, "a"),
    (0x1EB8, "E"),
    (0x1EB9, "e"),
    (0x1EBA, "E"),
    (0x1EBB, "e"),
    (0x1EBC, "E"),
    (0x1EBD, "e"),
    (0x1EBE, "E"),
    (0x1EBF, "e"),
    (0x1EC0, "E"),
    (0x1EC1, "e"),
    (0x1EC2, "E"),
    (0x1EC3, "e"),
    (0x1EC4, "E"),
    (0x1EC5, "e"),
    (0x1EC6, "E"),
    (0x1EC7, "e"),
    (0x1EC8, "I"),
    (0x1EC9, "i"),
    (0x1ECA, "I"),
    (0x1ECB, "i"),
    (0x1ECC, "O"),
    (0x1ECD, "o"),
    (0x1ECE, "O"),
    (0x1ECF, "o"),
    (0x1ED0, "O"),
    (0x1ED1, "o"),
    (0x1ED2, "O"),
    (0x1ED3, "o"),
    (0x1ED4, "O"),
    (0x1ED5, "o"),
    (0x1ED6, "O"),
    (0x1ED7, "o"),
    (0x1ED8, "O"),
    (0x1ED9, "o"),
    (0x1EDA, "O"),
    (0x1EDB, "o"),
    (0x1EDC, "O"),
    (0x1EDD, "o"),
    (0x1EDE, "O"),
    (0x1EDF, "o"),
    (0x1EE0, "O"),
    (0x1EE1, "o"),
    (0x1EE2, "O"),
    (0x1EE3, "o"),
    (0x1EE4, "U"),
    (0x1EE5, "u"),
    (0x1EE6, "U"),
    (0x1EE7, "u"),
    (0x1EE8, "U"),
    (0x1EE9, "u"),
    (0x1EEA, "U"),
    (0x1EEB, "u"),
    (0x1EEC, "U"),
    (0x1EED, "u"),
    (0x1EEE, "U"),
    (0x1EEF, "u"),
    (0x1EF0, "U"),
    (0x1EF1, "u"),
    (0x1EF2, "Y"),
    (0x1EF3, "y"),
    (0x1EF4, "Y"),
    (0x1EF5, "y"),
    (0x1EF6, "Y"),
    (0x1EF7, "y"),
    (0x1EF8, "Y"),
    (0x1EF9, "y"),
    (0x2010, "-"),
    (0x2011, "-"),
    (0x2012, "-"),
    (0x2013, "-"),
    (0x2014, "--"),
    (0x2015, "--"),
    (0x2017, " "),
    (0x2018, "'"),
    (0x2019, "'"),
    (0x201A, ","),
    (0x201B, "'"),
    (0x201C, "\u{22}"),
    (0x201D, "\u{22}"),
    (0x201E, ",,"),
    (0x201F, "\u{22}"),
    (0x2020, "+"),
    (0x2021, "++"),
    (0x2022, "*"),
    (0x2024, "."),
    (0x2025, ".."),
    (0x2026, "..."),
    (0x202F, " "),
    (0x2032, "'"),
    (0x2033, "\u{22}"),
    (0x2034, "'''"),
    (0x2035, "`"),
    (0x2036, "``"),
    (0x2037, "```"),
    (0x2039, "<"),
    (0x203A, ">"),
    (0x203C, "!!"),
    (0x203E, " "),
    (0x2044, "/"),
    (0x2047, "??"),
    (0x2048, "?!"),
    (0x2049, "!?"),
    (0x2052, "%"),
    (0x2057, "''''"),
    (0x2070, "0"),
    (0x2071, "i"),
    (0x2074, "4"),
    (0x2075, "5"),
    (0x2076, "6"),
    (0x2077, "7"),
    (0x2078, "8"),
    (0x2079, "9"),
    (0x207A, "+"),
    (0x207B, "-"),
    (0x207C, "="),
    (0x207D, "("),
    (0x207E, ")"),
    (0x207F, "n"),
    (0x2080, "0"),
    (0x2081, "1"),
    (0x2082, "2"),
    (0x2083, "3"),
    (0x2084, "4"),
    (0x2085, "5"),
    (0x2086, "6"),
    (0x2087, "7"),
    (0x2088, "8"),
    (0x2089, "9"),
    (0x208A, "+"),
    (0x208B, "-"),
    (0x208C, "="),
    (0x208D, "("),
    (0x208E, ")"),
    (0x2090, "a"),
    (0x2091, "e"),
    (0x2092, "o"),
    (0x2093, "x"),
    (0x2095, "h"),
    (0x2096, "k"),
    (0x2097, "l"),
    (0x2098, "m"),
    (0x2099, "n"),
    (0x209A, "p"),
    (0x209B, "s"),
    (0x209C, "t"),
    (0x2100, "a/c"),
    (0x2101, "a/s"),
    (0x2102, "C"),
    (0x2105, "c/o"),
    (0x2106, "c/u"),
    (0x2107, "E"),
    (0x210A, "g"),
    (0x210B, "H"),
    (0x210C, "H"),
    (0x210D, "H"),
    (0x210E, "h"),
    (0x210F, "h"),
    (0x2110, "I"),
    (0x2111, "I"),
    (0x2112, "L"),
    (0x2113, "l"),
    (0x2115, "N"),
    (0x2116, "No"),
    (0x2119, "P"),
    (0x211A, "Q"),
    (0x211B, "R"),
    (0x211C, "R"),
    (0x211D, "R"),
    (0x2120, "SM"),
    (0x2121, "TEL"),
    (0x2122, "(TM)"),
    (0x2124, "Z"),
    (0x2128, "Z"),
    (0x212A, "K"),
    (0x212B, "A"),
    (0x212C, "B"),
    (0x212D, "C"),
    (0x212F, "e"),
    (0x2130, "E"),
    (0x2131, "F"),
    (0x2133, "M"),
    (0x2134, "o"),
    (0x2139, "i"),
    (0x213B, "FAX"),
    (0x2145, "D"),
    (0x2146, "d"),
    (0x2147, "e"),
    (0x2148, "i"),
    (0x2149, "j"),
    (0x2150, "1/7"),
    (0x2151, "1/9"),
    (0x2152, "1/10"),
    (0x2153, "1/3"),
    (0x2154, "2/3"),
    (0x2155, "1/5"),
    (0x2156, "2/5"),
    (0x2157, "3/5"),
    (0x2158, "4/5"),
    (0x2159, "1/6"),
    (0x215A, "5/6"),
    (0x215B, "1/8"),
    (0x215C, "3/8"),
    (0x215D, "5/8"),
    (0x215E, "7/8"),
    (0x215F, "1/"),
    (0x2160, "I"),
    (0x2161, "II"),
    (0x2162, "III"),
    (0x2163, "IV"),
    (0x2164, "V"),
    (0x2165, "VI"),
    (0x2166, "VII"),
    (0x2167, "VIII"),
    (0x2168, "IX"),
    (0x2169, "X"),
    (0x216A, "XI"),
    (0x216B, "XII"),
    (0x216C, "L"),
    (0x216D, "C"),
    (0x216E, "D"),
    (0x216F, "M"),
    (0x2170, "i"),
    (0x2171, "ii"),
    (0x2172, "iii"),
    (0x2173, "iv"),
    (0x2174, "v"),
    (0x2175, "vi"),
    (0x2176, "vii"),
    (0x2177, "viii"),
    (0x2178, "ix"),
    (0x2179, "x"),
    (0x217A, "xi"),
    (0x217B, "xii"),
    (0x217C, "l"),
    (0x217D, "c"),
    (0x217E, "d"),
    (0x217F, "m"),
    (0x2189, "0/3"),
    (0x2212, "-"),
    (0x2215, "/"),
    (0x2216, "\u{5C}"),
    (0x2217, "*"),
    (0x2223, "|"),
    (0x2236, ":"),
    (0x223C, "~"),
    (0x2264, "<="),
    (0x2265, ">="),
    (0x226A, "<<"),
    (0x226B, ">>"),
    (0x2295, "(+)"),
    (0x2296, "(-)"),
    (0x2297, "(x)"),
    (0x2298, "(/)"),
    (0x2460, "1"),
    (0x2461, "2"),
    (0x2462, "3"),
    (0x2463, "4"),
    (0x2464, "5"),
    (0x2465, "6"),
    (0x2466, "7"),
    (0x2467, "8"),
    (0x2468, "9"),
    (0x2469, "10"),
    (0x246A, "11"),
    (0x246B, "12"),
    (0x246C, "13"),
    (0x246D, "14"),
    (0x246E, "15"),
    (0x246F, "16"),
    (0x2470, "17"),
    (0x2471, "18"),
    (0x2472, "19"),
    (0x2473, "20"),
    (0x2474, "(1)"),
    (0x2475, "(2)"),
    (0x2476, "(3)"),
    (0x2477, "(4)"),
    (0x2478, "(5)"),
    (0x2479, "(6)"),
    (0x247A, "(7)"),
    (0x247B, "(8)"),
    (0x247C, "(9)"),
    (0x247D, "(10)"),
    (0x247E, "(11)"),
    (0x247F, "(12)"),
    (0x2480, "(13)"),
    (0x2481, "(14)"),
    (0x2482, "(15)"),
    (0x2483, "(16)"),
    (0x2484, "(17)"),
    (0x2485, "(18)"),
    (0x2486, "(19)"),
    (0x2487, "(20)"),
    (0x2488, "1."),
    (0x2489, "2."),
    (0x248A, "3."),
    (0x248B, "4."),
    (0x248C, "5."),
    (0x248D, "6."),
    (0x248E, "7."),
    (0x248F, "8."),
    (0x2490, "9."),
    (0x2491, "10."),
    (0x2492, "11."),
    (0x2493, "12."),
    (0x2494, "13."),
    (0x2495, "14."),
    (0x2496, "15."),
    (0x2497, "16."),
    (0x2498, "17."),
    (0x2499, "18."),
    (0x249A, "19."),
    (0x249B, "20."),
    (0x249C, "(a)"),
    (0x249D, "(b)"),
    (0x249E, "(c)"),
    (0x249F, "(d)"),
    (0x24A0, "(e)"),
    (0x24A1, "(f)"),
    (0x24A2, "(g)"),
    (0x24A3, "(h)"),
    (0x24A4, "(i)"),
    (0x24A5, "(j)"),
    (0x24A6, "(k)"),
    (0x24A7, "(l)"),
    (0x24A8, "(m)"),
    (0x24A9, "(n)"),
    (0x24AA, "(o)"),
    (0x24AB, "(p)"),
    (0x24AC, "(q)"),
    (0x24AD, "(r)"),
    (0x24AE, "(s)"),
    (0x24AF, "(t)"),
    (0x24B0, "(u)"),
    (0x24B1, "(v)"),
    (0x24B2, "(w)"),
    (0x24B3, "(x)"),
    (0x24B4, "(y)"),
    (0x24B5, "(z)"),
    (0x24B6, "A"),
    (0x24B7, "B"),
    (0x24B8, "C"),
    (0x24B9, "D"),
    (0x24BA, "E"),
    (0x24BB, "F"),
    (0x24BC, "G"),
    (0x24BD, "H"),
    (0x24BE, "I"),
    (0x24BF, "J"),
    (0x24C0, "K"),
    (0x24C1, "L"),
    (0x24C2, "M"),
    (0x24C3, "N"),
    (0x24C4, "O"),
    (0x24C5, "P"),
    (0x24C6, "Q"),
    (0x24C7, "R"),
    (0x24C8, "S"),
    (0x24C9, "T"),
    (0x24CA, "U"),
    (0x24CB, "V"),
    (0x24CC, "W"),
    (0x24CD, "X"),
    (0x24CE, "Y"),
    (0x24CF, "Z"),
    (0x24D0, "a"),
    (0x24D1, "b"),
    (0x24D2, "c"),
    (0x24D3, "d"),
    (0x24D4, "e"),
    (0x24D5, "f"),
    (0x24D6, "g"),
    (0x24D7, "h"),
    (0x24D8, "i"),
    (0x24D9, "j"),
    (0x24DA, "k"),
    (0x24DB, "l"),
    (0x24DC, "m"),
    (0x24DD, "n"),
    (0x24DE, "o"),
    (0x24DF, "p"),
    (0x24E0, "q"),
    (0x24E1, "r"),
    (0x24E2, "s"),
    (0x24E3, "t"),
    (0x24E4, "u"),
    (0x24E5, "v"),
    (0x24E6, "w"),
    (0x24E7, "x"),
    (0x24E8, "y"),
    (0x24E9, "z"),
    (0x24EA, "0"),
    (0x266F, "#"),
    (0x2731, "*"),
    (0x2758, "|"),
    (0x2C7C, "j"),
    (0x2C7D, "V"),
    (0x3008, "<"),
    (0x3009, ">"),
    (0x300A, "<<"),
    (0x300B, ">>"),
    (0x301A, "["),
    (0x301B, "]"),
    (0x301D, "\u{22}"),
    (0x301E, "\u{22}"),
    (0xFB00, "ff"),
    (0xFB01, "fi"),
    (0xFB02, "fl"),
    (0xFB03, "ffi"),
    (0xFB04, "ffl"),
    (0xFB05, "st"),
    (0xFB06, "st"),
    (0xFE50, ","),
    (0xFE52, "."),
    (0xFE54, ";"),
    (0xFE55, ":"),
    (0xFE56, "?"),
    (0xFE57, "!"),
    (0xFE58, "--"),
    (0xFE59, "("),
    (0xFE5A, ")"),
    (0xFE5B, "{"),
    (0xFE5C, "}"),
    (0xFE5F, "#"),
    (0xFE60, "&"),
    (0xFE61, "*"),
    (0xFE62, "+"),
    (0xFE63, "-"),
    (0xFE64, "<"),
    (0xFE65, ">"),
    (0xFE66, "="),
    (0xFE68, "\u{5C}"),
    (0xFE69, "$"),
    (0xFE6A, "%"),
    (0xFE6B, "@"),
    (0xFF01, "!"),
    (0xFF02, "\u{22}"),
    (0xFF03, "#"),
    (0xFF04, "$"),
    (0xFF05, "%"),
    (0xFF06, "&"),
    (0xFF07, "'"),
    (0xFF08, "("),
    (0xFF09, ")"),
    (0xFF0A, "*"),
    (0xFF0B, "+"),
    (0xFF0C, ","),
    (0xFF0D, "-"),
    (0xFF0E, "."),
    (0xFF0F, "/"),
    (0xFF10, "0"),
    (0xFF11, "1"),
    (0xFF12, "2"),
    (0xFF13, "3"),
    (0xFF14, "4"),
    (0xFF15, "5"),
    (0xFF16, "6"),
    (0xFF17, "7"),
    (0xFF18, "8"),
    (0xFF19, "9"),
    (0xFF1A, ":"),
    (0xFF1B, ";"),
    (0xFF1C, "<"),
    (0xFF1D, "="),
    (0xFF1E, ">"),
    (0xFF1F, "?"),
    (0xFF20, "@"),
    (0xFF21, "A"),
    (0xFF22, "B"),
    (0xFF23, "C"),
    (0xFF24, "D"),
    (0xFF25, "E"),
    (0xFF26, "F"),
    (0xFF27, "G"),
    (0xFF28, "H"),
    (0xFF29, "I"),
    (0xFF2A, "J"),
    (0xFF2B, "K"),
    (0xFF2C, "L"),
    (0xFF2D, "M"),
    (0xFF2E, "N"),
    (0xFF2F, "O"),
    (0xFF30, "P"),
    (0xFF31, "Q"),
    (0xFF32, "R"),
    (0xFF33, "S"),
    (0xFF34, "T"),
    (0xFF35, "U"),
    (0xFF36, "V"),
    (0xFF37, "W"),
    (0xFF38, "X"),
    (0xFF39, "Y"),
    (0xFF3A, "Z"),
    (0xFF3B, "["),
    (0xFF3C, "\u{5C}"),
    (0xFF3D, "]"),
    (0xFF3E, "^"),
    (0xFF3F, "_"),
    (0xFF40, "`"),
    (0xFF41, "a"),
    (0xFF42, "b"),
    (0xFF43, "c"),
    (0xFF44, "d"),
    (0xFF45, "e"),
    (0xFF46, "f"),
    (0xFF47, "g"),
    (0xFF48, "h"),
    (0xFF49, "i"),
    (0xFF4A, "j"),
    (0xFF4B, "k"),
    (0xFF4C, "l"),
    (0xFF4D, "m"),
    (0xFF4E, "n"),
    (0xFF4F, "o"),
    (0xFF50, "p"),
    (0xFF51, "q"),
    (0xFF52, "r"),
    (0xFF53, "s"),
    (0xFF54, "t"),
    (0xFF55, "u"),
    (0xFF56, "v"),
    (0xFF57, "w"),
    (0xFF58, "x"),
    (0xFF59, "y"),
    (0xFF5A, "z"),
    (0xFF5B, "{"),
    (0xFF5C, "|"),
    (0xFF5D, "}"),
    (0xFF5E, "~"),
    (0xFFE3, " "),
];

/// Look up the ASCII folding of a character, if the table has one.
pub fn latin_ascii(c: char) -> Option<&'static str> {
    LATIN_ASCII
        .binary_search_by_key(&(c as u32), |&(cp, _)| cp)
        .ok()
        .map(|index| LATIN_ASCII[index].1)
}
