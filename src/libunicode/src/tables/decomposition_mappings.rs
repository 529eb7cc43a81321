// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Character decomposition data.
//!
//! Generated offline from the Unicode Character Database, version 14.0.0.
//! Do not edit by hand.
//!
//! Decompositions are expanded to their fixed point and canonically ordered
//! at generation time, so normalization performs a single lookup per
//! character. Hangul syllables are omitted: their decompositions are
//! computed arithmetically. Compatibility entries identical to the canonical
//! decomposition are likewise omitted.
//!
//! Mapping values are charccs in their raw u32 form (see `crate::util`).

use crate::util::charcc;

/// Full canonical decompositions, as (codepoint, expansion) pairs
/// sorted by codepoint.
#[rustfmt::skip]
static CANONICAL: &[(u32, &[u32])] = &[
    (0x00C0, &[0x00000041, 0xE6000300]),
    (0x00C1, &[0x00000041, 0xE6000301]),
    (0x00C2, &[0x00000041, 0xE6000302]),
    (0x00C3, &[0x00000041, 0xE6000303]),
    (0x00C4, &[0x00000041, 0xE6000308]),
    (0x00C5, &[0x00000041, 0xE600030A]),
    (0x00C7, &[0x00000043, 0xCA000327]),
    (0x00C8, &[0x00000045, 0xE6000300]),
    (0x00C9, &[0x00000045, 0xE6000301]),
    (0x00CA, &[0x00000045, 0xE6000302]),
    (0x00CB, &[0x00000045, 0xE6000308]),
    (0x00CC, &[0x00000049, 0xE6000300]),
    (0x00CD, &[0x00000049, 0xE6000301]),
    (0x00CE, &[0x00000049, 0xE6000302]),
    (0x00CF, &[0x00000049, 0xE6000308]),
    (0x00D1, &[0x0000004E, 0xE6000303]),
    (0x00D2, &[0x0000004F, 0xE6000300]),
    (0x00D3, &[0x0000004F, 0xE6000301]),
    (0x00D4, &[0x0000004F, 0xE6000302]),
    (0x00D5, &[0x0000004F, 0xE6000303]),
    (0x00D6, &[0x0000004F, 0xE6000308]),
    (0x00D9, &[0x00000055, 0xE6000300]),
    (0x00DA, &[0x00000055, 0xE6000301]),
    (0x00DB, &[0x00000055, 0xE6000302]),
    (0x00DC, &[0x00000055, 0xE6000308]),
    (0x00DD, &[0x00000059, 0xE6000301]),
    (0x00E0, &[0x00000061, 0xE6000300]),
    (0x00E1, &[0x00000061, 0xE6000301]),
    (0x00E2, &[0x00000061, 0xE6000302]),
    (0x00E3, &[0x00000061, 0xE6000303]),
    (0x00E4, &[0x00000061, 0xE6000308]),
    (0x00E5, &[0x00000061, 0xE600030A]),
    (0x00E7, &[0x00000063, 0xCA000327]),
    (0x00E8, &[0x00000065, 0xE6000300]),
    (0x00E9, &[0x00000065, 0xE6000301]),
    (0x00EA, &[0x00000065, 0xE6000302]),
    (0x00EB, &[0x00000065, 0xE6000308]),
    (0x00EC, &[0x00000069, 0xE6000300]),
    (0x00ED, &[0x00000069, 0xE6000301]),
    (0x00EE, &[0x00000069, 0xE6000302]),
    (0x00EF, &[0x00000069, 0xE6000308]),
    (0x00F1, &[0x0000006E, 0xE6000303]),
    (0x00F2, &[0x0000006F, 0xE6000300]),
    (0x00F3, &[0x0000006F, 0xE6000301]),
    (0x00F4, &[0x0000006F, 0xE6000302]),
    (0x00F5, &[0x0000006F, 0xE6000303]),
    (0x00F6, &[0x0000006F, 0xE6000308]),
    (0x00F9, &[0x00000075, 0xE6000300]),
    (0x00FA, &[0x00000075, 0xE6000301]),
    (0x00FB, &[0x00000075, 0xE6000302]),
    (0x00FC, &[0x00000075, 0xE6000308]),
    (0x00FD, &[0x00000079, 0xE6000301]),
    (0x00FF, &[0x00000079, 0xE6000308]),
    (0x0100, &[0x00000041, 0xE6000304]),
    (0x0101, &[0x00000061, 0xE6000304]),
    (0x0102, &[0x00000041, 0xE6000306]),
    (0x0103, &[0x00000061, 0xE6000306]),
    (0x0104, &[0x00000041, 0xCA000328]),
    (0x0105, &[0x00000061, 0xCA000328]),
    (0x0106, &[0x00000043, 0xE6000301]),
    (0x0107, &[0x00000063, 0xE6000301]),
    (0x0108, &[0x00000043, 0xE6000302]),
    (0x0109, &[0x00000063, 0xE6000302]),
    (0x010A, &[0x00000043, 0xE6000307]),
    (0x010B, &[0x00000063, 0xE6000307]),
    (0x010C, &[0x00000043, 0xE600030C]),
    (0x010D, &[0x00000063, 0xE600030C]),
    (0x010E, &[0x00000044, 0xE600030C]),
    (0x010F, &[0x00000064, 0xE600030C]),
    (0x0112, &[0x00000045, 0xE6000304]),
    (0x0113, &[0x00000065, 0xE6000304]),
    (0x0114, &[0x00000045, 0xE6000306]),
    (0x0115, &[0x00000065, 0xE6000306]),
    (0x0116, &[0x00000045, 0xE6000307]),
    (0x0117, &[0x00000065, 0xE6000307]),
    (0x0118, &[0x00000045, 0xCA000328]),
    (0x0119, &[0x00000065, 0xCA000328]),
    (0x011A, &[0x00000045, 0xE600030C]),
    (0x011B, &[0x00000065, 0xE600030C]),
    (0x011C, &[0x00000047, 0xE6000302]),
    (0x011D, &[0x00000067, 0xE6000302]),
    (0x011E, &[0x00000047, 0xE6000306]),
    (0x011F, &[0x00000067, 0xE6000306]),
    (0x0120, &[0x00000047, 0xE6000307]),
    (0x0121, &[0x00000067, 0xE6000307]),
    (0x0122, &[0x00000047, 0xCA000327]),
    (0x0123, &[0x00000067, 0xCA000327]),
    (0x0124, &[0x00000048, 0xE6000302]),
    (0x0125, &[0x00000068, 0xE6000302]),
    (0x0128, &[0x00000049, 0xE6000303]),
    (0x0129, &[0x00000069, 0xE6000303]),
    (0x012A, &[0x00000049, 0xE6000304]),
    (0x012B, &[0x00000069, 0xE6000304]),
    (0x012C, &[0x00000049, 0xE6000306]),
    (0x012D, &[0x00000069, 0xE6000306]),
    (0x012E, &[0x00000049, 0xCA000328]),
    (0x012F, &[0x00000069, 0xCA000328]),
    (0x0130, &[0x00000049, 0xE6000307]),
    (0x0134, &[0x0000004A, 0xE6000302]),
    (0x0135, &[0x0000006A, 0xE6000302]),
    (0x0136, &[0x0000004B, 0xCA000327]),
    (0x0137, &[0x0000006B, 0xCA000327]),
    (0x0139, &[0x0000004C, 0xE6000301]),
    (0x013A, &[0x0000006C, 0xE6000301]),
    (0x013B, &[0x0000004C, 0xCA000327]),
    (0x013C, &[0x0000006C, 0xCA000327]),
    (0x013D, &[0x0000004C, 0xE600030C]),
    (0x013E, &[0x0000006C, 0xE600030C]),
    (0x0143, &[0x0000004E, 0xE6000301]),
    (0x0144, &[0x0000006E, 0xE6000301]),
    (0x0145, &[0x0000004E, 0xCA000327]),
    (0x0146, &[0x0000006E, 0xCA000327]),
    (0x0147, &[0x0000004E, 0xE600030C]),
    (0x0148, &[0x0000006E, 0xE600030C]),
    (0x014C, &[0x0000004F, 0xE6000304]),
    (0x014D, &[0x0000006F, 0xE6000304]),
    (0x014E, &[0x0000004F, 0xE6000306]),
    (0x014F, &[0x0000006F, 0xE6000306]),
    (0x0150, &[0x0000004F, 0xE600030B]),
    (0x0151, &[0x0000006F, 0xE600030B]),
    (0x0154, &[0x00000052, 0xE6000301]),
    (0x0155, &[0x00000072, 0xE6000301]),
    (0x0156, &[0x00000052, 0xCA000327]),
    (0x0157, &[0x00000072, 0xCA000327]),
    (0x0158, &[0x00000052, 0xE600030C]),
    (0x0159, &[0x00000072, 0xE600030C]),
    (0x015A, &[0x00000053, 0xE6000301]),
    (0x015B, &[0x00000073, 0xE6000301]),
    (0x015C, &[0x00000053, 0xE6000302]),
    (0x015D, &[0x00000073, 0xE6000302]),
    (0x015E, &[0x00000053, 0xCA000327]),
    (0x015F, &[0x00000073, 0xCA000327]),
    (0x0160, &[0x00000053, 0xE600030C]),
    (0x0161, &[0x00000073, 0xE600030C]),
    (0x0162, &[0x00000054, 0xCA000327]),
    (0x0163, &[0x00000074, 0xCA000327]),
    (0x0164, &[0x00000054, 0xE600030C]),
    (0x0165, &[0x00000074, 0xE600030C]),
    (0x0168, &[0x00000055, 0xE6000303]),
    (0x0169, &[0x00000075, 0xE6000303]),
    (0x016A, &[0x00000055, 0xE6000304]),
    (0x016B, &[0x00000075, 0xE6000304]),
    (0x016C, &[0x00000055, 0xE6000306]),
    (0x016D, &[0x00000075, 0xE6000306]),
    (0x016E, &[0x00000055, 0xE600030A]),
    (0x016F, &[0x00000075, 0xE600030A]),
    (0x0170, &[0x00000055, 0xE600030B]),
    (0x0171, &[0x00000075, 0xE600030B]),
    (0x0172, &[0x00000055, 0xCA000328]),
    (0x0173, &[0x00000075, 0xCA000328]),
    (0x0174, &[0x00000057, 0xE6000302]),
    (0x0175, &[0x00000077, 0xE6000302]),
    (0x0176, &[0x00000059, 0xE6000302]),
    (0x0177, &[0x00000079, 0xE6000302]),
    (0x0178, &[0x00000059, 0xE6000308]),
    (0x0179, &[0x0000005A, 0xE6000301]),
    (0x017A, &[0x0000007A, 0xE6000301]),
    (0x017B, &[0x0000005A, 0xE6000307]),
    (0x017C, &[0x0000007A, 0xE6000307]),
    (0x017D, &[0x0000005A, 0xE600030C]),
    (0x017E, &[0x0000007A, 0xE600030C]),
    (0x01A0, &[0x0000004F, 0xD800031B]),
    (0x01A1, &[0x0000006F, 0xD800031B]),
    (0x01AF, &[0x00000055, 0xD800031B]),
    (0x01B0, &[0x00000075, 0xD800031B]),
    (0x01CD, &[0x00000041, 0xE600030C]),
    (0x01CE, &[0x00000061, 0xE600030C]),
    (0x01CF, &[0x00000049, 0xE600030C]),
    (0x01D0, &[0x00000069, 0xE600030C]),
    (0x01D1, &[0x0000004F, 0xE600030C]),
    (0x01D2, &[0x0000006F, 0xE600030C]),
    (0x01D3, &[0x00000055, 0xE600030C]),
    (0x01D4, &[0x00000075, 0xE600030C]),
    (0x01D5, &[0x00000055, 0xE6000308, 0xE6000304]),
    (0x01D6, &[0x00000075, 0xE6000308, 0xE6000304]),
    (0x01D7, &[0x00000055, 0xE6000308, 0xE6000301]),
    (0x01D8, &[0x00000075, 0xE6000308, 0xE6000301]),
    (0x01D9, &[0x00000055, 0xE6000308, 0xE600030C]),
    (0x01DA, &[0x00000075, 0xE6000308, 0xE600030C]),
    (0x01DB, &[0x00000055, 0xE6000308, 0xE6000300]),
    (0x01DC, &[0x00000075, 0xE6000308, 0xE6000300]),
    (0x01DE, &[0x00000041, 0xE6000308, 0xE6000304]),
    (0x01DF, &[0x00000061, 0xE6000308, 0xE6000304]),
    (0x01E0, &[0x00000041, 0xE6000307, 0xE6000304]),
    (0x01E1, &[0x00000061, 0xE6000307, 0xE6000304]),
    (0x01E2, &[0x000000C6, 0xE6000304]),
    (0x01E3, &[0x000000E6, 0xE6000304]),
    (0x01E6, &[0x00000047, 0xE600030C]),
    (0x01E7, &[0x00000067, 0xE600030C]),
    (0x01E8, &[0x0000004B, 0xE600030C]),
    (0x01E9, &[0x0000006B, 0xE600030C]),
    (0x01EA, &[0x0000004F, 0xCA000328]),
    (0x01EB, &[0x0000006F, 0xCA000328]),
    (0x01EC, &[0x0000004F, 0xCA000328, 0xE6000304]),
    (0x01ED, &[0x0000006F, 0xCA000328, 0xE6000304]),
    (0x01EE, &[0x000001B7, 0xE600030C]),
    (0x01EF, &[0x00000292, 0xE600030C]),
    (0x01F0, &[0x0000006A, 0xE600030C]),
    (0x01F4, &[0x00000047, 0xE6000301]),
    (0x01F5, &[0x00000067, 0xE6000301]),
    (0x01F8, &[0x0000004E, 0xE6000300]),
    (0x01F9, &[0x0000006E, 0xE6000300]),
    (0x01FA, &[0x00000041, 0xE600030A, 0xE6000301]),
    (0x01FB, &[0x00000061, 0xE600030A, 0xE6000301]),
    (0x01FC, &[0x000000C6, 0xE6000301]),
    (0x01FD, &[0x000000E6, 0xE6000301]),
    (0x01FE, &[0x000000D8, 0xE6000301]),
    (0x01FF, &[0x000000F8, 0xE6000301]),
    (0x0200, &[0x00000041, 0xE600030F]),
    (0x0201, &[0x00000061, 0xE600030F]),
    (0x0202, &[0x00000041, 0xE6000311]),
    (0x0203, &[0x00000061, 0xE6000311]),
    (0x0204, &[0x00000045, 0xE600030F]),
    (0x0205, &[0x00000065, 0xE600030F]),
    (0x0206, &[0x00000045, 0xE6000311]),
    (0x0207, &[0x00000065, 0xE6000311]),
    (0x0208, &[0x00000049, 0xE600030F]),
    (0x0209, &[0x00000069, 0xE600030F]),
    (0x020A, &[0x00000049, 0xE6000311]),
    (0x020B, &[0x00000069, 0xE6000311]),
    (0x020C, &[0x0000004F, 0xE600030F]),
    (0x020D, &[0x0000006F, 0xE600030F]),
    (0x020E, &[0x0000004F, 0xE6000311]),
    (0x020F, &[0x0000006F, 0xE6000311]),
    (0x0210, &[0x00000052, 0xE600030F]),
    (0x0211, &[0x00000072, 0xE600030F]),
    (0x0212, &[0x00000052, 0xE6000311]),
    (0x0213, &[0x00000072, 0xE6000311]),
    (0x0214, &[0x00000055, 0xE600030F]),
    (0x0215, &[0x00000075, 0xE600030F]),
    (0x0216, &[0x00000055, 0xE6000311]),
    (0x0217, &[0x00000075, 0xE6000311]),
    (0x0218, &[0x00000053, 0xDC000326]),
    (0x0219, &[0x00000073, 0xDC000326]),
    (0x021A, &[0x00000054, 0xDC000326]),
    (0x021B, &[0x00000074, 0xDC000326]),
    (0x021E, &[0x00000048, 0xE600030C]),
    (0x021F, &[0x00000068, 0xE600030C]),
    (0x0226, &[0x00000041, 0xE6000307]),
    (0x0227, &[0x00000061, 0xE6000307]),
    (0x0228, &[0x00000045, 0xCA000327]),
    (0x0229, &[0x00000065, 0xCA000327]),
    (0x022A, &[0x0000004F, 0xE6000308, 0xE6000304]),
    (0x022B, &[0x0000006F, 0xE6000308, 0xE6000304]),
    (0x022C, &[0x0000004F, 0xE6000303, 0xE6000304]),
    (0x022D, &[0x0000006F, 0xE6000303, 0xE6000304]),
    (0x022E, &[0x0000004F, 0xE6000307]),
    (0x022F, &[0x0000006F, 0xE6000307]),
    (0x0230, &[0x0000004F, 0xE6000307, 0xE6000304]),
    (0x0231, &[0x0000006F, 0xE6000307, 0xE6000304]),
    (0x0232, &[0x00000059, 0xE6000304]),
    (0x0233, &[0x00000079, 0xE6000304]),
    (0x0340, &[0xE6000300]),
    (0x0341, &[0xE6000301]),
    (0x0343, &[0xE6000313]),
    (0x0344, &[0xE6000308, 0xE6000301]),
    (0x0374, &[0x000002B9]),
    (0x037E, &[0x0000003B]),
    (0x0385, &[0x000000A8, 0xE6000301]),
    (0x0386, &[0x00000391, 0xE6000301]),
    (0x0387, &[0x000000B7]),
    (0x0388, &[0x00000395, 0xE6000301]),
    (0x0389, &[0x00000397, 0xE6000301]),
    (0x038A, &[0x00000399, 0xE6000301]),
    (0x038C, &[0x0000039F, 0xE6000301]),
    (0x038E, &[0x000003A5, 0xE6000301]),
    (0x038F, &[0x000003A9, 0xE6000301]),
    (0x0390, &[0x000003B9, 0xE6000308, 0xE6000301]),
    (0x03AA, &[0x00000399, 0xE6000308]),
    (0x03AB, &[0x000003A5, 0xE6000308]),
    (0x03AC, &[0x000003B1, 0xE6000301]),
    (0x03AD, &[0x000003B5, 0xE6000301]),
    (0x03AE, &[0x000003B7, 0xE6000301]),
    (0x03AF, &[0x000003B9, 0xE6000301]),
    (0x03B0, &[0x000003C5, 0xE6000308, 0xE6000301]),
    (0x03CA, &[0x000003B9, 0xE6000308]),
    (0x03CB, &[0x000003C5, 0xE6000308]),
    (0x03CC, &[0x000003BF, 0xE6000301]),
    (0x03CD, &[0x000003C5, 0xE6000301]),
    (0x03CE, &[0x000003C9, 0xE6000301]),
    (0x03D3, &[0x000003D2, 0xE6000301]),
    (0x03D4, &[0x000003D2, 0xE6000308]),
    (0x0400, &[0x00000415, 0xE6000300]),
    (0x0401, &[0x00000415, 0xE6000308]),
    (0x0403, &[0x00000413, 0xE6000301]),
    (0x0407, &[0x00000406, 0xE6000308]),
    (0x040C, &[0x0000041A, 0xE6000301]),
    (0x040D, &[0x00000418, 0xE6000300]),
    (0x040E, &[0x00000423, 0xE6000306]),
    (0x0419, &[0x00000418, 0xE6000306]),
    (0x0439, &[0x00000438, 0xE6000306]),
    (0x0450, &[0x00000435, 0xE6000300]),
    (0x0451, &[0x00000435, 0xE6000308]),
    (0x0453, &[0x00000433, 0xE6000301]),
    (0x0457, &[0x00000456, 0xE6000308]),
    (0x045C, &[0x0000043A, 0xE6000301]),
    (0x045D, &[0x00000438, 0xE6000300]),
    (0x045E, &[0x00000443, 0xE6000306]),
    (0x0476, &[0x00000474, 0xE600030F]),
    (0x0477, &[0x00000475, 0xE600030F]),
    (0x04C1, &[0x00000416, 0xE6000306]),
    (0x04C2, &[0x00000436, 0xE6000306]),
    (0x04D0, &[0x00000410, 0xE6000306]),
    (0x04D1, &[0x00000430, 0xE6000306]),
    (0x04D2, &[0x00000410, 0xE6000308]),
    (0x04D3, &[0x00000430, 0xE6000308]),
    (0x04D6, &[0x00000415, 0xE6000306]),
    (0x04D7, &[0x00000435, 0xE6000306]),
    (0x04DA, &[0x000004D8, 0xE6000308]),
    (0x04DB, &[0x000004D9, 0xE6000308]),
    (0x04DC, &[0x00000416, 0xE6000308]),
    (0x04DD, &[0x00000436, 0xE6000308]),
    (0x04DE, &[0x00000417, 0xE6000308]),
    (0x04DF, &[0x00000437, 0xE6000308]),
    (0x04E2, &[0x00000418, 0xE6000304]),
    (0x04E3, &[0x00000438, 0xE6000304]),
    (0x04E4, &[0x00000418, 0xE6000308]),
    (0x04E5, &[0x00000438, 0xE6000308]),
    (0x04E6, &[0x0000041E, 0xE6000308]),
    (0x04E7, &[0x0000043E, 0xE6000308]),
    (0x04EA, &[0x000004E8, 0xE6000308]),
    (0x04EB, &[0x000004E9, 0xE6000308]),
    (0x04EC, &[0x0000042D, 0xE6000308]),
    (0x04ED, &[0x0000044D, 0xE6000308]),
    (0x04EE, &[0x00000423, 0xE6000304]),
    (0x04EF, &[0x00000443, 0xE6000304]),
    (0x04F0, &[0x00000423, 0xE6000308]),
    (0x04F1, &[0x00000443, 0xE6000308]),
    (0x04F2, &[0x00000423, 0xE600030B]),
    (0x04F3, &[0x00000443, 0xE600030B]),
    (0x04F4, &[0x00000427, 0xE6000308]),
    (0x04F5, &[0x00000447, 0xE6000308]),
    (0x04F8, &[0x0000042B, 0xE6000308]),
    (0x04F9, &[0x0000044B, 0xE6000308]),
    (0x0622, &[0x00000627, 0xE6000653]),
    (0x0623, &[0x00000627, 0xE6000654]),
    (0x0624, &[0x00000648, 0xE6000654]),
    (0x0625, &[0x00000627, 0xDC000655]),
    (0x0626, &[0x0000064A, 0xE6000654]),
    (0x06C0, &[0x000006D5, 0xE6000654]),
    (0x06C2, &[0x000006C1, 0xE6000654]),
    (0x06D3, &[0x000006D2, 0xE6000654]),
    (0x0929, &[0x00000928, 0x0700093C]),
    (0x0931, &[0x00000930, 0x0700093C]),
    (0x0934, &[0x00000933, 0x0700093C]),
    (0x0958, &[0x00000915, 0x0700093C]),
    (0x0959, &[0x00000916, 0x0700093C]),
    (0x095A, &[0x00000917, 0x0700093C]),
    (0x095B, &[0x0000091C, 0x0700093C]),
    (0x095C, &[0x00000921, 0x0700093C]),
    (0x095D, &[0x00000922, 0x0700093C]),
    (0x095E, &[0x0000092B, 0x0700093C]),
    (0x095F, &[0x0000092F, 0x0700093C]),
    (0x09CB, &[0x000009C7, 0x000009BE]),
    (0x09CC, &[0x000009C7, 0x000009D7]),
    (0x09DC, &[0x000009A1, 0x070009BC]),
    (0x09DD, &[0x000009A2, 0x070009BC]),
    (0x09DF, &[0x000009AF, 0x070009BC]),
    (0x0A33, &[0x00000A32, 0x07000A3C]),
    (0x0A36, &[0x00000A38, 0x07000A3C]),
    (0x0A59, &[0x00000A16, 0x07000A3C]),
    (0x0A5A, &[0x00000A17, 0x07000A3C]),
    (0x0A5B, &[0x00000A1C, 0x07000A3C]),
    (0x0A5E, &[0x00000A2B, 0x07000A3C]),
    (0x0B48, &[0x00000B47, 0x00000B56]),
    (0x0B4B, &[0x00000B47, 0x00000B3E]),
    (0x0B4C, &[0x00000B47, 0x00000B57]),
    (0x0B5C, &[0x00000B21, 0x07000B3C]),
    (0x0B5D, &[0x00000B22, 0x07000B3C]),
    (0x0B94, &[0x00000B92, 0x00000BD7]),
    (0x0BCA, &[0x00000BC6, 0x00000BBE]),
    (0x0BCB, &[0x00000BC7, 0x00000BBE]),
    (0x0BCC, &[0x00000BC6, 0x00000BD7]),
    (0x0C48, &[0x00000C46, 0x5B000C56]),
    (0x0CC0, &[0x00000CBF, 0x00000CD5]),
    (0x0CC7, &[0x00000CC6, 0x00000CD5]),
    (0x0CC8, &[0x00000CC6, 0x00000CD6]),
    (0x0CCA, &[0x00000CC6, 0x00000CC2]),
    (0x0CCB, &[0x00000CC6, 0x00000CC2, 0x00000CD5]),
    (0x0D4A, &[0x00000D46, 0x00000D3E]),
    (0x0D4B, &[0x00000D47, 0x00000D3E]),
    (0x0D4C, &[0x00000D46, 0x00000D57]),
    (0x0DDA, &[0x00000DD9, 0x09000DCA]),
    (0x0DDC, &[0x00000DD9, 0x00000DCF]),
    (0x0DDD, &[0x00000DD9, 0x00000DCF, 0x09000DCA]),
    (0x0DDE, &[0x00000DD9, 0x00000DDF]),
    (0x0F43, &[0x00000F42, 0x00000FB7]),
    (0x0F4D, &[0x00000F4C, 0x00000FB7]),
    (0x0F52, &[0x00000F51, 0x00000FB7]),
    (0x0F57, &[0x00000F56, 0x00000FB7]),
    (0x0F5C, &[0x00000F5B, 0x00000FB7]),
    (0x0F69, &[0x00000F40, 0x00000FB5]),
    (0x0F73, &[0x81000F71, 0x82000F72]),
    (0x0F75, &[0x81000F71, 0x84000F74]),
    (0x0F76, &[0x00000FB2, 0x82000F80]),
    (0x0F78, &[0x00000FB3, 0x82000F80]),
    (0x0F81, &[0x81000F71, 0x82000F80]),
    (0x0F93, &[0x00000F92, 0x00000FB7]),
    (0x0F9D, &[0x00000F9C, 0x00000FB7]),
    (0x0FA2, &[0x00000FA1, 0x00000FB7]),
    (0x0FA7, &[0x00000FA6, 0x00000FB7]),
    (0x0FAC, &[0x00000FAB, 0x00000FB7]),
    (0x0FB9, &[0x00000F90, 0x00000FB5]),
    (0x1026, &[0x00001025, 0x0000102E]),
    (0x1B06, &[0x00001B05, 0x00001B35]),
    (0x1B08, &[0x00001B07, 0x00001B35]),
    (0x1B0A, &[0x00001B09, 0x00001B35]),
    (0x1B0C, &[0x00001B0B, 0x00001B35]),
    (0x1B0E, &[0x00001B0D, 0x00001B35]),
    (0x1B12, &[0x00001B11, 0x00001B35]),
    (0x1B3B, &[0x00001B3A, 0x00001B35]),
    (0x1B3D, &[0x00001B3C, 0x00001B35]),
    (0x1B40, &[0x00001B3E, 0x00001B35]),
    (0x1B41, &[0x00001B3F, 0x00001B35]),
    (0x1B43, &[0x00001B42, 0x00001B35]),
    (0x1E00, &[0x00000041, 0xDC000325]),
    (0x1E01, &[0x00000061, 0xDC000325]),
    (0x1E02, &[0x00000042, 0xE6000307]),
    (0x1E03, &[0x00000062, 0xE6000307]),
    (0x1E04, &[0x00000042, 0xDC000323]),
    (0x1E05, &[0x00000062, 0xDC000323]),
    (0x1E06, &[0x00000042, 0xDC000331]),
    (0x1E07, &[0x00000062, 0xDC000331]),
    (0x1E08, &[0x00000043, 0xCA000327, 0xE6000301]),
    (0x1E09, &[0x00000063, 0xCA000327, 0xE6000301]),
    (0x1E0A, &[0x00000044, 0xE6000307]),
    (0x1E0B, &[0x00000064, 0xE6000307]),
    (0x1E0C, &[0x00000044, 0xDC000323]),
    (0x1E0D, &[0x00000064, 0xDC000323]),
    (0x1E0E, &[0x00000044, 0xDC000331]),
    (0x1E0F, &[0x00000064, 0xDC000331]),
    (0x1E10, &[0x00000044, 0xCA000327]),
    (0x1E11, &[0x00000064, 0xCA000327]),
    (0x1E12, &[0x00000044, 0xDC00032D]),
    (0x1E13, &[0x00000064, 0xDC00032D]),
    (0x1E14, &[0x00000045, 0xE6000304, 0xE6000300]),
    (0x1E15, &[0x00000065, 0xE6000304, 0xE6000300]),
    (0x1E16, &[0x00000045, 0xE6000304, 0xE6000301]),
    (0x1E17, &[0x00000065, 0xE6000304, 0xE6000301]),
    (0x1E18, &[0x00000045, 0xDC00032D]),
    (0x1E19, &[0x00000065, 0xDC00032D]),
    (0x1E1A, &[0x00000045, 0xDC000330]),
    (0x1E1B, &[0x00000065, 0xDC000330]),
    (0x1E1C, &[0x00000045, 0xCA000327, 0xE6000306]),
    (0x1E1D, &[0x00000065, 0xCA000327, 0xE6000306]),
    (0x1E1E, &[0x00000046, 0xE6000307]),
    (0x1E1F, &[0x00000066, 0xE6000307]),
    (0x1E20, &[0x00000047, 0xE6000304]),
    (0x1E21, &[0x00000067, 0xE6000304]),
    (0x1E22, &[0x00000048, 0xE6000307]),
    (0x1E23, &[0x00000068, 0xE6000307]),
    (0x1E24, &[0x00000048, 0xDC000323]),
    (0x1E25, &[0x00000068, 0xDC000323]),
    (0x1E26, &[0x00000048, 0xE6000308]),
    (0x1E27, &[0x00000068, 0xE6000308]),
    (0x1E28, &[0x00000048, 0xCA000327]),
    (0x1E29, &[0x00000068, 0xCA000327]),
    (0x1E2A, &[0x00000048, 0xDC00032E]),
    (0x1E2B, &[0x00000068, 0xDC00032E]),
    (0x1E2C, &[0x00000049, 0xDC000330]),
    (0x1E2D, &[0x00000069, 0xDC000330]),
    (0x1E2E, &[0x00000049, 0xE6000308, 0xE6000301]),
    (0x1E2F, &[0x00000069, 0xE6000308, 0xE6000301]),
    (0x1E30, &[0x0000004B, 0xE6000301]),
    (0x1E31, &[0x0000006B, 0xE6000301]),
    (0x1E32, &[0x0000004B, 0xDC000323]),
    (0x1E33, &[0x0000006B, 0xDC000323]),
    (0x1E34, &[0x0000004B, 0xDC000331]),
    (0x1E35, &[0x0000006B, 0xDC000331]),
    (0x1E36, &[0x0000004C, 0xDC000323]),
    (0x1E37, &[0x0000006C, 0xDC000323]),
    (0x1E38, &[0x0000004C, 0xDC000323, 0xE6000304]),
    (0x1E39, &[0x0000006C, 0xDC000323, 0xE6000304]),
    (0x1E3A, &[0x0000004C, 0xDC000331]),
    (0x1E3B, &[0x0000006C, 0xDC000331]),
    (0x1E3C, &[0x0000004C, 0xDC00032D]),
    (0x1E3D, &[0x0000006C, 0xDC00032D]),
    (0x1E3E, &[0x0000004D, 0xE6000301]),
    (0x1E3F, &[0x0000006D, 0xE6000301]),
    (0x1E40, &[0x0000004D, 0xE6000307]),
    (0x1E41, &[0x0000006D, 0xE6000307]),
    (0x1E42, &[0x0000004D, 0xDC000323]),
    (0x1E43, &[0x0000006D, 0xDC000323]),
    (0x1E44, &[0x0000004E, 0xE6000307]),
    (0x1E45, &[0x0000006E, 0xE6000307]),
    (0x1E46, &[0x0000004E, 0xDC000323]),
    (0x1E47, &[0x0000006E, 0xDC000323]),
    (0x1E48, &[0x0000004E, 0xDC000331]),
    (0x1E49, &[0x0000006E, 0xDC000331]),
    (0x1E4A, &[0x0000004E, 0xDC00032D]),
    (0x1E4B, &[0x0000006E, 0xDC00032D]),
    (0x1E4C, &[0x0000004F, 0xE6000303, 0xE6000301]),
    (0x1E4D, &[0x0000006F, 0xE6000303, 0xE6000301]),
    (0x1E4E, &[0x0000004F, 0xE6000303, 0xE6000308]),
    (0x1E4F, &[0x0000006F, 0xE6000303, 0xE6000308]),
    (0x1E50, &[0x0000004F, 0xE6000304, 0xE6000300]),
    (0x1E51, &[0x0000006F, 0xE6000304, 0xE6000300]),
    (0x1E52, &[0x0000004F, 0xE6000304, 0xE6000301]),
    (0x1E53, &[0x0000006F, 0xE6000304, 0xE6000301]),
    (0x1E54, &[0x00000050, 0xE6000301]),
    (0x1E55, &[0x00000070, 0xE6000301]),
    (0x1E56, &[0x00000050, 0xE6000307]),
    (0x1E57, &[0x00000070, 0xE6000307]),
    (0x1E58, &[0x00000052, 0xE6000307]),
    (0x1E59, &[0x00000072, 0xE6000307]),
    (0x1E5A, &[0x00000052, 0xDC000323]),
    (0x1E5B, &[0x00000072, 0xDC000323]),
    (0x1E5C, &[0x00000052, 0xDC000323, 0xE6000304]),
    (0x1E5D, &[0x00000072, 0xDC000323, 0xE6000304]),
    (0x1E5E, &[0x00000052, 0xDC000331]),
    (0x1E5F, &[0x00000072, 0xDC000331]),
    (0x1E60, &[0x00000053, 0xE6000307]),
    (0x1E61, &[0x00000073, 0xE6000307]),
    (0x1E62, &[0x00000053, 0xDC000323]),
    (0x1E63, &[0x00000073, 0xDC000323]),
    (0x1E64, &[0x00000053, 0xE6000301, 0xE6000307]),
    (0x1E65, &[0x00000073, 0xE6000301, 0xE6000307]),
    (0x1E66, &[0x00000053, 0xE600030C, 0xE6000307]),
    (0x1E67, &[0x00000073, 0xE600030C, 0xE6000307]),
    (0x1E68, &[0x00000053, 0xDC000323, 0xE6000307]),
    (0x1E69, &[0x00000073, 0xDC000323, 0xE6000307]),
    (0x1E6A, &[0x00000054, 0xE6000307]),
    (0x1E6B, &[0x00000074, 0xE6000307]),
    (0x1E6C, &[0x00000054, 0xDC000323]),
    (0x1E6D, &[0x00000074, 0xDC000323]),
    (0x1E6E, &[0x00000054, 0xDC000331]),
    (0x1E6F, &[0x00000074, 0xDC000331]),
    (0x1E70, &[0x00000054, 0xDC00032D]),
    (0x1E71, &[0x00000074, 0xDC00032D]),
    (0x1E72, &[0x00000055, 0xDC000324]),
    (0x1E73, &[0x00000075, 0xDC000324]),
    (0x1E74, &[0x00000055, 0xDC000330]),
    (0x1E75, &[0x00000075, 0xDC000330]),
    (0x1E76, &[0x00000055, 0xDC00032D]),
    (0x1E77, &[0x00000075, 0xDC00032D]),
    (0x1E78, &[0x00000055, 0xE6000303, 0xE6000301]),
    (0x1E79, &[0x00000075, 0xE6000303, 0xE6000301]),
    (0x1E7A, &[0x00000055, 0xE6000304, 0xE6000308]),
    (0x1E7B, &[0x00000075, 0xE6000304, 0xE6000308]),
    (0x1E7C, &[0x00000056, 0xE6000303]),
    (0x1E7D, &[0x00000076, 0xE6000303]),
    (0x1E7E, &[0x00000056, 0xDC000323]),
    (0x1E7F, &[0x00000076, 0xDC000323]),
    (0x1E80, &[0x00000057, 0xE6000300]),
    (0x1E81, &[0x00000077, 0xE6000300]),
    (0x1E82, &[0x00000057, 0xE6000301]),
    (0x1E83, &[0x00000077, 0xE6000301]),
    (0x1E84, &[0x00000057, 0xE6000308]),
    (0x1E85, &[0x00000077, 0xE6000308]),
    (0x1E86, &[0x00000057, 0xE6000307]),
    (0x1E87, &[0x00000077, 0xE6000307]),
    (0x1E88, &[0x00000057, 0xDC000323]),
    (0x1E89, &[0x00000077, 0xDC000323]),
    (0x1E8A, &[0x00000058, 0xE6000307]),
    (0x1E8B, &[0x00000078, 0xE6000307]),
    (0x1E8C, &[0x00000058, 0xE6000308]),
    (0x1E8D, &[0x00000078, 0xE6000308]),
    (0x1E8E, &[0x00000059, 0xE6000307]),
    (0x1E8F, &[0x00000079, 0xE6000307]),
    (0x1E90, &[0x0000005A, 0xE6000302]),
    (0x1E91, &[0x0000007A, 0xE6000302]),
    (0x1E92, &[0x0000005A, 0xDC000323]),
    (0x1E93, &[0x0000007A, 0xDC000323]),
    (0x1E94, &[0x0000005A, 0xDC000331]),
    (0x1E95, &[0x0000007A, 0xDC000331]),
    (0x1E96, &[0x00000068, 0xDC000331]),
    (0x1E97, &[0x00000074, 0xE6000308]),
    (0x1E98, &[0x00000077, 0xE600030A]),
    (0x1E99, &[0x00000079, 0xE600030A]),
    (0x1E9B, &[0x0000017F, 0xE6000307]),
    (0x1EA0, &[0x00000041, 0xDC000323]),
    (0x1EA1, &[0x00000061, 0xDC000323]),
    (0x1EA2, &[0x00000041, 0xE6000309]),
    (0x1EA3, &[0x00000061, 0xE6000309]),
    (0x1EA4, &[0x00000041, 0xE6000302, 0xE6000301]),
    (0x1EA5, &[0x00000061, 0xE6000302, 0xE6000301]),
    (0x1EA6, &[0x00000041, 0xE6000302, 0xE6000300]),
    (0x1EA7, &[0x00000061, 0xE6000302, 0xE6000300]),
    (0x1EA8, &[0x00000041, 0xE6000302, 0xE6000309]),
    (0x1EA9, &[0x00000061, 0xE6000302, 0xE6000309]),
    (0x1EAA, &[0x00000041, 0xE6000302, 0xE6000303]),
    (0x1EAB, &[0x00000061, 0xE6000302, 0xE6000303]),
    (0x1EAC, &[0x00000041, 0xDC000323, 0xE6000302]),
    (0x1EAD, &[0x00000061, 0xDC000323, 0xE6000302]),
    (0x1EAE, &[0x00000041, 0xE6000306, 0xE6000301]),
    (0x1EAF, &[0x00000061, 0xE6000306, 0xE6000301]),
    (0x1EB0, &[0x00000041, 0xE6000306, 0xE6000300]),
    (0x1EB1, &[0x00000061, 0xE6000306, 0xE6000300]),
    (0x1EB2, &[0x00000041, 0xE6000306, 0xE6000309]),
    (0x1EB3, &[0x00000061, 0xE6000306, 0xE6000309]),
    (0x1EB4, &[0x00000041, 0xE6000306, 0xE6000303]),
    (0x1EB5, &[0x00000061, 0xE6000306, 0xE6000303]),
    (0x1EB6, &[0x00000041, 0xDC000323, 0xE6000306]),
    (0x1EB7, &[0x00000061, 0xDC000323, 0xE6000306]),
    (0x1EB8, &[0x00000045, 0xDC000323]),
    (0x1EB9, &[0x00000065, 0xDC000323]),
    (0x1EBA, &[0x00000045, 0xE6000309]),
    (0x1EBB, &[0x00000065, 0xE6000309]),
    (0x1EBC, &[0x00000045, 0xE6000303]),
    (0x1EBD, &[0x00000065, 0xE6000303]),
    (0x1EBE, &[0x00000045, 0xE6000302, 0xE6000301]),
    (0x1EBF, &[0x00000065, 0xE6000302, 0xE6000301]),
    (0x1EC0, &[0x00000045, 0xE6000302, 0xE6000300]),
    (0x1EC1, &[0x00000065, 0xE6000302, 0xE6000300]),
    (0x1EC2, &[0x00000045, 0xE6000302, 0xE6000309]),
    (0x1EC3, &[0x00000065, 0xE6000302, 0xE6000309]),
    (0x1EC4, &[0x00000045, 0xE6000302, 0xE6000303]),
    (0x1EC5, &[0x00000065, 0xE6000302, 0xE6000303]),
    (0x1EC6, &[0x00000045, 0xDC000323, 0xE6000302]),
    (0x1EC7, &[0x00000065, 0xDC000323, 0xE6000302]),
    (0x1EC8, &[0x00000049, 0xE6000309]),
    (0x1EC9, &[0x00000069, 0xE6000309]),
    (0x1ECA, &[0x00000049, 0xDC000323]),
    (0x1ECB, &[0x00000069, 0xDC000323]),
    (0x1ECC, &[0x0000004F, 0xDC000323]),
    (0x1ECD, &[0x0000006F, 0xDC000323]),
    (0x1ECE, &[0x0000004F, 0xE6000309]),
    (0x1ECF, &[0x0000006F, 0xE6000309]),
    (0x1ED0, &[0x0000004F, 0xE6000302, 0xE6000301]),
    (0x1ED1, &[0x0000006F, 0xE6000302, 0xE6000301]),
    (0x1ED2, &[0x0000004F, 0xE6000302, 0xE6000300]),
    (0x1ED3, &[0x0000006F, 0xE6000302, 0xE6000300]),
    (0x1ED4, &[0x0000004F, 0xE6000302, 0xE6000309]),
    (0x1ED5, &[0x0000006F, 0xE6000302, 0xE6000309]),
    (0x1ED6, &[0x0000004F, 0xE6000302, 0xE6000303]),
    (0x1ED7, &[0x0000006F, 0xE6000302, 0xE6000303]),
    (0x1ED8, &[0x0000004F, 0xDC000323, 0xE6000302]),
    (0x1ED9, &[0x0000006F, 0xDC000323, 0xE6000302]),
    (0x1EDA, &[0x0000004F, 0xD800031B, 0xE6000301]),
    (0x1EDB, &[0x0000006F, 0xD800031B, 0xE6000301]),
    (0x1EDC, &[0x0000004F, 0xD800031B, 0xE6000300]),
    (0x1EDD, &[0x0000006F, 0xD800031B, 0xE6000300]),
    (0x1EDE, &[0x0000004F, 0xD800031B, 0xE6000309]),
    (0x1EDF, &[0x0000006F, 0xD800031B, 0xE6000309]),
    (0x1EE0, &[0x0000004F, 0xD800031B, 0xE6000303]),
    (0x1EE1, &[0x0000006F, 0xD800031B, 0xE6000303]),
    (0x1EE2, &[0x0000004F, 0xD800031B, 0xDC000323]),
    (0x1EE3, &[0x0000006F, 0xD800031B, 0xDC000323]),
    (0x1EE4, &[0x00000055, 0xDC000323]),
    (0x1EE5, &[0x00000075, 0xDC000323]),
    (0x1EE6, &[0x00000055, 0xE6000309]),
    (0x1EE7, &[0x00000075, 0xE6000309]),
    (0x1EE8, &[0x00000055, 0xD800031B, 0xE6000301]),
    (0x1EE9, &[0x00000075, 0xD800031B, 0xE6000301]),
    (0x1EEA, &[0x00000055, 0xD800031B, 0xE6000300]),
    (0x1EEB, &[0x00000075, 0xD800031B, 0xE6000300]),
    (0x1EEC, &[0x00000055, 0xD800031B, 0xE6000309]),
    (0x1EED, &[0x00000075, 0xD800031B, 0xE6000309]),
    (0x1EEE, &[0x00000055, 0xD800031B, 0xE6000303]),
    (0x1EEF, &[0x00000075, 0xD800031B, 0xE6000303]),
    (0x1EF0, &[0x00000055, 0xD800031B, 0xDC000323]),
    (0x1EF1, &[0x00000075, 0xD800031B, 0xDC000323]),
    (0x1EF2, &[0x00000059, 0xE6000300]),
    (0x1EF3, &[0x00000079, 0xE6000300]),
    (0x1EF4, &[0x00000059, 0xDC000323]),
    (0x1EF5, &[0x00000079, 0xDC000323]),
    (0x1EF6, &[0x00000059, 0xE6000309]),
    (0x1EF7, &[0x00000079, 0xE6000309]),
    (0x1EF8, &[0x00000059, 0xE6000303]),
    (0x1EF9, &[0x00000079, 0xE6000303]),
    (0x1F00, &[0x000003B1, 0xE6000313]),
    (0x1F01, &[0x000003B1, 0xE6000314]),
    (0x1F02, &[0x000003B1, 0xE6000313, 0xE6000300]),
    (0x1F03, &[0x000003B1, 0xE6000314, 0xE6000300]),
    (0x1F04, &[0x000003B1, 0xE6000313, 0xE6000301]),
    (0x1F05, &[0x000003B1, 0xE6000314, 0xE6000301]),
    (0x1F06, &[0x000003B1, 0xE6000313, 0xE6000342]),
    (0x1F07, &[0x000003B1, 0xE6000314, 0xE6000342]),
    (0x1F08, &[0x00000391, 0xE6000313]),
    (0x1F09, &[0x00000391, 0xE6000314]),
    (0x1F0A, &[0x00000391, 0xE6000313, 0xE6000300]),
    (0x1F0B, &[0x00000391, 0xE6000314, 0xE6000300]),
    (0x1F0C, &[0x00000391, 0xE6000313, 0xE6000301]),
    (0x1F0D, &[0x00000391, 0xE6000314, 0xE6000301]),
    (0x1F0E, &[0x00000391, 0xE6000313, 0xE6000342]),
    (0x1F0F, &[0x00000391, 0xE6000314, 0xE6000342]),
    (0x1F10, &[0x000003B5, 0xE6000313]),
    (0x1F11, &[0x000003B5, 0xE6000314]),
    (0x1F12, &[0x000003B5, 0xE6000313, 0xE6000300]),
    (0x1F13, &[0x000003B5, 0xE6000314, 0xE6000300]),
    (0x1F14, &[0x000003B5, 0xE6000313, 0xE6000301]),
    (0x1F15, &[0x000003B5, 0xE6000314, 0xE6000301]),
    (0x1F18, &[0x00000395, 0xE6000313]),
    (0x1F19, &[0x00000395, 0xE6000314]),
    (0x1F1A, &[0x00000395, 0xE6000313, 0xE6000300]),
    (0x1F1B, &[0x00000395, 0xE6000314, 0xE6000300]),
    (0x1F1C, &[0x00000395, 0xE6000313, 0xE6000301]),
    (0x1F1D, &[0x00000395, 0xE6000314, 0xE6000301]),
    (0x1F20, &[0x000003B7, 0xE6000313]),
    (0x1F21, &[0x000003B7, 0xE6000314]),
    (0x1F22, &[0x000003B7, 0xE6000313, 0xE6000300]),
    (0x1F23, &[0x000003B7, 0xE6000314, 0xE6000300]),
    (0x1F24, &[0x000003B7, 0xE6000313, 0xE6000301]),
    (0x1F25, &[0x000003B7, 0xE6000314, 0xE6000301]),
    (0x1F26, &[0x000003B7, 0xE6000313, 0xE6000342]),
    (0x1F27, &[0x000003B7, 0xE6000314, 0xE6000342]),
    (0x1F28, &[0x00000397, 0xE6000313]),
    (0x1F29, &[0x00000397, 0xE6000314]),
    (0x1F2A, &[0x00000397, 0xE6000313, 0xE6000300]),
    (0x1F2B, &[0x00000397, 0xE6000314, 0xE6000300]),
    (0x1F2C, &[0x00000397, 0xE6000313, 0xE6000301]),
    (0x1F2D, &[0x00000397, 0xE6000314, 0xE6000301]),
    (0x1F2E, &[0x00000397, 0xE6000313, 0xE6000342]),
    (0x1F2F, &[0x00000397, 0xE6000314, 0xE6000342]),
    (0x1F30, &[0x000003B9, 0xE6000313]),
    (0x1F31, &[0x000003B9, 0xE6000314]),
    (0x1F32, &[0x000003B9, 0xE6000313, 0xE6000300]),
    (0x1F33, &[0x000003B9, 0xE6000314, 0xE6000300]),
    (0x1F34, &[0x000003B9, 0xE6000313, 0xE6000301]),
    (0x1F35, &[0x000003B9, 0xE6000314, 0xE6000301]),
    (0x1F36, &[0x000003B9, 0xE6000313, 0xE6000342]),
    (0x1F37, &[0x000003B9, 0xE6000314, 0xE6000342]),
    (0x1F38, &[0x00000399, 0xE6000313]),
    (0x1F39, &[0x00000399, 0xE6000314]),
    (0x1F3A, &[0x00000399, 0xE6000313, 0xE6000300]),
    (0x1F3B, &[0x00000399, 0xE6000314, 0xE6000300]),
    (0x1F3C, &[0x00000399, 0xE6000313, 0xE6000301]),
    (0x1F3D, &[0x00000399, 0xE6000314, 0xE6000301]),
    (0x1F3E, &[0x00000399, 0xE6000313, 0xE6000342]),
    (0x1F3F, &[0x00000399, 0xE6000314, 0xE6000342]),
    (0x1F40, &[0x000003BF, 0xE6000313]),
    (0x1F41, &[0x000003BF, 0xE6000314]),
    (0x1F42, &[0x000003BF, 0xE6000313, 0xE6000300]),
    (0x1F43, &[0x000003BF, 0xE6000314, 0xE6000300]),
    (0x1F44, &[0x000003BF, 0xE6000313, 0xE6000301]),
    (0x1F45, &[0x000003BF, 0xE6000314, 0xE6000301]),
    (0x1F48, &[0x0000039F, 0xE6000313]),
    (0x1F49, &[0x0000039F, 0xE6000314]),
    (0x1F4A, &[0x0000039F, 0xE6000313, 0xE6000300]),
    (0x1F4B, &[0x0000039F, 0xE6000314, 0xE6000300]),
    (0x1F4C, &[0x0000039F, 0xE6000313, 0xE6000301]),
    (0x1F4D, &[0x0000039F, 0xE6000314, 0xE6000301]),
    (0x1F50, &[0x000003C5, 0xE6000313]),
    (0x1F51, &[0x000003C5, 0xE6000314]),
    (0x1F52, &[0x000003C5, 0xE6000313, 0xE6000300]),
    (0x1F53, &[0x000003C5, 0xE6000314, 0xE6000300]),
    (0x1F54, &[0x000003C5, 0xE6000313, 0xE6000301]),
    (0x1F55, &[0x000003C5, 0xE6000314, 0xE6000301]),
    (0x1F56, &[0x000003C5, 0xE6000313, 0xE6000342]),
    (0x1F57, &[0x000003C5, 0xE6000314, 0xE6000342]),
    (0x1F59, &[0x000003A5, 0xE6000314]),
    (0x1F5B, &[0x000003A5, 0xE6000314, 0xE6000300]),
    (0x1F5D, &[0x000003A5, 0xE6000314, 0xE6000301]),
    (0x1F5F, &[0x000003A5, 0xE6000314, 0xE6000342]),
    (0x1F60, &[0x000003C9, 0xE6000313]),
    (0x1F61, &[0x000003C9, 0xE6000314]),
    (0x1F62, &[0x000003C9, 0xE6000313, 0xE6000300]),
    (0x1F63, &[0x000003C9, 0xE6000314, 0xE6000300]),
    (0x1F64, &[0x000003C9, 0xE6000313, 0xE6000301]),
    (0x1F65, &[0x000003C9, 0xE6000314, 0xE6000301]),
    (0x1F66, &[0x000003C9, 0xE6000313, 0xE6000342]),
    (0x1F67, &[0x000003C9, 0xE6000314, 0xE6000342]),
    (0x1F68, &[0x000003A9, 0xE6000313]),
    (0x1F69, &[0x000003A9, 0xE6000314]),
    (0x1F6A, &[0x000003A9, 0xE6000313, 0xE6000300]),
    (0x1F6B, &[0x000003A9, 0xE6000314, 0xE6000300]),
    (0x1F6C, &[0x000003A9, 0xE6000313, 0xE6000301]),
    (0x1F6D, &[0x000003A9, 0xE6000314, 0xE6000301]),
    (0x1F6E, &[0x000003A9, 0xE6000313, 0xE6000342]),
    (0x1F6F, &[0x000003A9, 0xE6000314, 0xE6000342]),
    (0x1F70, &[0x000003B1, 0xE6000300]),
    (0x1F71, &[0x000003B1, 0xE6000301]),
    (0x1F72, &[0x000003B5, 0xE6000300]),
    (0x1F73, &[0x000003B5, 0xE6000301]),
    (0x1F74, &[0x000003B7, 0xE6000300]),
    (0x1F75, &[0x000003B7, 0xE6000301]),
    (0x1F76, &[0x000003B9, 0xE6000300]),
    (0x1F77, &[0x000003B9, 0xE6000301]),
    (0x1F78, &[0x000003BF, 0xE6000300]),
    (0x1F79, &[0x000003BF, 0xE6000301]),
    (0x1F7A, &[0x000003C5, 0xE6000300]),
    (0x1F7B, &[0x000003C5, 0xE6000301]),
    (0x1F7C, &[0x000003C9, 0xE6000300]),
    (0x1F7D, &[0x000003C9, 0xE6000301]),
    (0x1F80, &[0x000003B1, 0xE6000313, 0xF0000345]),
    (0x1F81, &[0x000003B1, 0xE6000314, 0xF0000345]),
    (0x1F82, &[0x000003B1, 0xE6000313, 0xE6000300, 0xF0000345]),
    (0x1F83, &[0x000003B1, 0xE6000314, 0xE6000300, 0xF0000345]),
    (0x1F84, &[0x000003B1, 0xE6000313, 0xE6000301, 0xF0000345]),
    (0x1F85, &[0x000003B1, 0xE6000314, 0xE6000301, 0xF0000345]),
    (0x1F86, &[0x000003B1, 0xE6000313, 0xE6000342, 0xF0000345]),
    (0x1F87, &[0x000003B1, 0xE6000314, 0xE6000342, 0xF0000345]),
    (0x1F88, &[0x00000391, 0xE6000313, 0xF0000345]),
    (0x1F89, &[0x00000391, 0xE6000314, 0xF0000345]),
    (0x1F8A, &[0x00000391, 0xE6000313, 0xE6000300, 0xF0000345]),
    (0x1F8B, &[0x00000391, 0xE6000314, 0xE6000300, 0xF0000345]),
    (0x1F8C, &[0x00000391, 0xE6000313, 0xE6000301, 0xF0000345]),
    (0x1F8D, &[0x00000391, 0xE6000314, 0xE6000301, 0xF0000345]),
    (0x1F8E, &[0x00000391, 0xE6000313, 0xE6000342, 0xF0000345]),
    (0x1F8F, &[0x00000391, 0xE6000314, 0xE6000342, 0xF0000345]),
    (0x1F90, &[0x000003B7, 0xE6000313, 0xF0000345]),
    (0x1F91, &[0x000003B7, 0xE6000314, 0xF0000345]),
    (0x1F92, &[0x000003B7, 0xE6000313, 0xE6000300, 0xF0000345]),
    (0x1F93, &[0x000003B7, 0xE6000314, 0xE6000300, 0xF0000345]),
    (0x1F94, &[0x000003B7, 0xE6000313, 0xE6000301, 0xF0000345]),
    (0x1F95, &[0x000003B7, 0xE6000314, 0xE6000301, 0xF0000345]),
    (0x1F96, &[0x000003B7, 0xE6000313, 0xE6000342, 0xF0000345]),
    (0x1F97, &[0x000003B7, 0xE6000314, 0xE6000342, 0xF0000345]),
    (0x1F98, &[0x00000397, 0xE6000313, 0xF0000345]),
    (0x1F99, &[0x00000397, 0xE6000314, 0xF0000345]),
    (0x1F9A, &[0x00000397, 0xE6000313, 0xE6000300, 0xF0000345]),
    (0x1F9B, &[0x00000397, 0xE6000314, 0xE6000300, 0xF0000345]),
    (0x1F9C, &[0x00000397, 0xE6000313, 0xE6000301, 0xF0000345]),
    (0x1F9D, &[0x00000397, 0xE6000314, 0xE6000301, 0xF0000345]),
    (0x1F9E, &[0x00000397, 0xE6000313, 0xE6000342, 0xF0000345]),
    (0x1F9F, &[0x00000397, 0xE6000314, 0xE6000342, 0xF0000345]),
    (0x1FA0, &[0x000003C9, 0xE6000313, 0xF0000345]),
    (0x1FA1, &[0x000003C9, 0xE6000314, 0xF0000345]),
    (0x1FA2, &[0x000003C9, 0xE6000313, 0xE6000300, 0xF0000345]),
    (0x1FA3, &[0x000003C9, 0xE6000314, 0xE6000300, 0xF0000345]),
    (0x1FA4, &[0x000003C9, 0xE6000313, 0xE6000301, 0xF0000345]),
    (0x1FA5, &[0x000003C9, 0xE6000314, 0xE6000301, 0xF0000345]),
    (0x1FA6, &[0x000003C9, 0xE6000313, 0xE6000342, 0xF0000345]),
    (0x1FA7, &[0x000003C9, 0xE6000314, 0xE6000342, 0xF0000345]),
    (0x1FA8, &[0x000003A9, 0xE6000313, 0xF0000345]),
    (0x1FA9, &[0x000003A9, 0xE6000314, 0xF0000345]),
    (0x1FAA, &[0x000003A9, 0xE6000313, 0xE6000300, 0xF0000345]),
    (0x1FAB, &[0x000003A9, 0xE6000314, 0xE6000300, 0xF0000345]),
    (0x1FAC, &[0x000003A9, 0xE6000313, 0xE6000301, 0xF0000345]),
    (0x1FAD, &[0x000003A9, 0xE6000314, 0xE6000301, 0xF0000345]),
    (0x1FAE, &[0x000003A9, 0xE6000313, 0xE6000342, 0xF0000345]),
    (0x1FAF, &[0x000003A9, 0xE6000314, 0xE6000342, 0xF0000345]),
    (0x1FB0, &[0x000003B1, 0xE6000306]),
    (0x1FB1, &[0x000003B1, 0xE6000304]),
    (0x1FB2, &[0x000003B1, 0xE6000300, 0xF0000345]),
    (0x1FB3, &[0x000003B1, 0xF0000345]),
    (0x1FB4, &[0x000003B1, 0xE6000301, 0xF0000345]),
    (0x1FB6, &[0x000003B1, 0xE6000342]),
    (0x1FB7, &[0x000003B1, 0xE6000342, 0xF0000345]),
    (0x1FB8, &[0x00000391, 0xE6000306]),
    (0x1FB9, &[0x00000391, 0xE6000304]),
    (0x1FBA, &[0x00000391, 0xE6000300]),
    (0x1FBB, &[0x00000391, 0xE6000301]),
    (0x1FBC, &[0x00000391, 0xF0000345]),
    (0x1FBE, &[0x000003B9]),
    (0x1FC1, &[0x000000A8, 0xE6000342]),
    (0x1FC2, &[0x000003B7, 0xE6000300, 0xF0000345]),
    (0x1FC3, &[0x000003B7, 0xF0000345]),
    (0x1FC4, &[0x000003B7, 0xE6000301, 0xF0000345]),
    (0x1FC6, &[0x000003B7, 0xE6000342]),
    (0x1FC7, &[0x000003B7, 0xE6000342, 0xF0000345]),
    (0x1FC8, &[0x00000395, 0xE6000300]),
    (0x1FC9, &[0x00000395, 0xE6000301]),
    (0x1FCA, &[0x00000397, 0xE6000300]),
    (0x1FCB, &[0x00000397, 0xE6000301]),
    (0x1FCC, &[0x00000397, 0xF0000345]),
    (0x1FCD, &[0x00001FBF, 0xE6000300]),
    (0x1FCE, &[0x00001FBF, 0xE6000301]),
    (0x1FCF, &[0x00001FBF, 0xE6000342]),
    (0x1FD0, &[0x000003B9, 0xE6000306]),
    (0x1FD1, &[0x000003B9, 0xE6000304]),
    (0x1FD2, &[0x000003B9, 0xE6000308, 0xE6000300]),
    (0x1FD3, &[0x000003B9, 0xE6000308, 0xE6000301]),
    (0x1FD6, &[0x000003B9, 0xE6000342]),
    (0x1FD7, &[0x000003B9, 0xE6000308, 0xE6000342]),
    (0x1FD8, &[0x00000399, 0xE6000306]),
    (0x1FD9, &[0x00000399, 0xE6000304]),
    (0x1FDA, &[0x00000399, 0xE6000300]),
    (0x1FDB, &[0x00000399, 0xE6000301]),
    (0x1FDD, &[0x00001FFE, 0xE6000300]),
    (0x1FDE, &[0x00001FFE, 0xE6000301]),
    (0x1FDF, &[0x00001FFE, 0xE6000342]),
    (0x1FE0, &[0x000003C5, 0xE6000306]),
    (0x1FE1, &[0x000003C5, 0xE6000304]),
    (0x1FE2, &[0x000003C5, 0xE6000308, 0xE6000300]),
    (0x1FE3, &[0x000003C5, 0xE6000308, 0xE6000301]),
    (0x1FE4, &[0x000003C1, 0xE6000313]),
    (0x1FE5, &[0x000003C1, 0xE6000314]),
    (0x1FE6, &[0x000003C5, 0xE6000342]),
    (0x1FE7, &[0x000003C5, 0xE6000308, 0xE6000342]),
    (0x1FE8, &[0x000003A5, 0xE6000306]),
    (0x1FE9, &[0x000003A5, 0xE6000304]),
    (0x1FEA, &[0x000003A5, 0xE6000300]),
    (0x1FEB, &[0x000003A5, 0xE6000301]),
    (0x1FEC, &[0x000003A1, 0xE6000314]),
    (0x1FED, &[0x000000A8, 0xE6000300]),
    (0x1FEE, &[0x000000A8, 0xE6000301]),
    (0x1FEF, &[0x00000060]),
    (0x1FF2, &[0x000003C9, 0xE6000300, 0xF0000345]),
    (0x1FF3, &[0x000003C9, 0xF0000345]),
    (0x1FF4, &[0x000003C9, 0xE6000301, 0xF0000345]),
    (0x1FF6, &[0x000003C9, 0xE6000342]),
    (0x1FF7, &[0x000003C9, 0xE6000342, 0xF0000345]),
    (0x1FF8, &[0x0000039F, 0xE6000300]),
    (0x1FF9, &[0x0000039F, 0xE6000301]),
    (0x1FFA, &[0x000003A9, 0xE6000300]),
    (0x1FFB, &[0x000003A9, 0xE6000301]),
    (0x1FFC, &[0x000003A9, 0xF0000345]),
    (0x1FFD, &[0x000000B4]),
    (0x2000, &[0x00002002]),
    (0x2001, &[0x00002003]),
    (0x2126, &[0x000003A9]),
    (0x212A, &[0x0000004B]),
    (0x212B, &[0x00000041, 0xE600030A]),
    (0x219A, &[0x00002190, 0x01000338]),
    (0x219B, &[0x00002192, 0x01000338]),
    (0x21AE, &[0x00002194, 0x01000338]),
    (0x21CD, &[0x000021D0, 0x01000338]),
    (0x21CE, &[0x000021D4, 0x01000338]),
    (0x21CF, &[0x000021D2, 0x01000338]),
    (0x2204, &[0x00002203, 0x01000338]),
    (0x2209, &[0x00002208, 0x01000338]),
    (0x220C, &[0x0000220B, 0x01000338]),
    (0x2224, &[0x00002223, 0x01000338]),
    (0x2226, &[0x00002225, 0x01000338]),
    (0x2241, &[0x0000223C, 0x01000338]),
    (0x2244, &[0x00002243, 0x01000338]),
    (0x2247, &[0x00002245, 0x01000338]),
    (0x2249, &[0x00002248, 0x01000338]),
    (0x2260, &[0x0000003D, 0x01000338]),
    (0x2262, &[0x00002261, 0x01000338]),
    (0x226D, &[0x0000224D, 0x01000338]),
    (0x226E, &[0x0000003C, 0x01000338]),
    (0x226F, &[0x0000003E, 0x01000338]),
    (0x2270, &[0x00002264, 0x01000338]),
    (0x2271, &[0x00002265, 0x01000338]),
    (0x2274, &[0x00002272, 0x01000338]),
    (0x2275, &[0x00002273, 0x01000338]),
    (0x2278, &[0x00002276, 0x01000338]),
    (0x2279, &[0x00002277, 0x01000338]),
    (0x2280, &[0x0000227A, 0x01000338]),
    (0x2281, &[0x0000227B, 0x01000338]),
    (0x2284, &[0x00002282, 0x01000338]),
    (0x2285, &[0x00002283, 0x01000338]),
    (0x2288, &[0x00002286, 0x01000338]),
    (0x2289, &[0x00002287, 0x01000338]),
    (0x22AC, &[0x000022A2, 0x01000338]),
    (0x22AD, &[0x000022A8, 0x01000338]),
    (0x22AE, &[0x000022A9, 0x01000338]),
    (0x22AF, &[0x000022AB, 0x01000338]),
    (0x22E0, &[0x0000227C, 0x01000338]),
    (0x22E1, &[0x0000227D, 0x01000338]),
    (0x22E2, &[0x00002291, 0x01000338]),
    (0x22E3, &[0x00002292, 0x01000338]),
    (0x22EA, &[0x000022B2, 0x01000338]),
    (0x22EB, &[0x000022B3, 0x01000338]),
    (0x22EC, &[0x000022B4, 0x01000338]),
    (0x22ED, &[0x000022B5, 0x01000338]),
    (0x2329, &[0x00003008]),
    (0x232A, &[0x00003009]),
    (0x2ADC, &[0x00002ADD, 0x01000338]),
    (0x304C, &[0x0000304B, 0x08003099]),
    (0x304E, &[0x0000304D, 0x08003099]),
    (0x3050, &[0x0000304F, 0x08003099]),
    (0x3052, &[0x00003051, 0x08003099]),
    (0x3054, &[0x00003053, 0x08003099]),
    (0x3056, &[0x00003055, 0x08003099]),
    (0x3058, &[0x00003057, 0x08003099]),
    (0x305A, &[0x00003059, 0x08003099]),
    (0x305C, &[0x0000305B, 0x08003099]),
    (0x305E, &[0x0000305D, 0x08003099]),
    (0x3060, &[0x0000305F, 0x08003099]),
    (0x3062, &[0x00003061, 0x08003099]),
    (0x3065, &[0x00003064, 0x08003099]),
    (0x3067, &[0x00003066, 0x08003099]),
    (0x3069, &[0x00003068, 0x08003099]),
    (0x3070, &[0x0000306F, 0x08003099]),
    (0x3071, &[0x0000306F, 0x0800309A]),
    (0x3073, &[0x00003072, 0x08003099]),
    (0x3074, &[0x00003072, 0x0800309A]),
    (0x3076, &[0x00003075, 0x08003099]),
    (0x3077, &[0x00003075, 0x0800309A]),
    (0x3079, &[0x00003078, 0x08003099]),
    (0x307A, &[0x00003078, 0x0800309A]),
    (0x307C, &[0x0000307B, 0x08003099]),
    (0x307D, &[0x0000307B, 0x0800309A]),
    (0x3094, &[0x00003046, 0x08003099]),
    (0x309E, &[0x0000309D, 0x08003099]),
    (0x30AC, &[0x000030AB, 0x08003099]),
    (0x30AE, &[0x000030AD, 0x08003099]),
    (0x30B0, &[0x000030AF, 0x08003099]),
    (0x30B2, &[0x000030B1, 0x08003099]),
    (0x30B4, &[0x000030B3, 0x08003099]),
    (0x30B6, &[0x000030B5, 0x08003099]),
    (0x30B8, &[0x000030B7, 0x08003099]),
    (0x30BA, &[0x000030B9, 0x08003099]),
    (0x30BC, &[0x000030BB, 0x08003099]),
    (0x30BE, &[0x000030BD, 0x08003099]),
    (0x30C0, &[0x000030BF, 0x08003099]),
    (0x30C2, &[0x000030C1, 0x08003099]),
    (0x30C5, &[0x000030C4, 0x08003099]),
    (0x30C7, &[0x000030C6, 0x08003099]),
    (0x30C9, &[0x000030C8, 0x08003099]),
    (0x30D0, &[0x000030CF, 0x08003099]),
    (0x30D1, &[0x000030CF, 0x0800309A]),
    (0x30D3, &[0x000030D2, 0x08003099]),
    (0x30D4, &[0x000030D2, 0x0800309A]),
    (0x30D6, &[0x000030D5, 0x08003099]),
    (0x30D7, &[0x000030D5, 0x0800309A]),
    (0x30D9, &[0x000030D8, 0x08003099]),
    (0x30DA, &[0x000030D8, 0x0800309A]),
    (0x30DC, &[0x000030DB, 0x08003099]),
    (0x30DD, &[0x000030DB, 0x0800309A]),
    (0x30F4, &[0x000030A6, 0x08003099]),
    (0x30F7, &[0x000030EF, 0x08003099]),
    (0x30F8, &[0x000030F0, 0x08003099]),
    (0x30F9, &[0x000030F1, 0x08003099]),
    (0x30FA, &[0x000030F2, 0x08003099]),
    (0x30FE, &[0x000030FD, 0x08003099]),
    (0xF900, &[0x00008C48]),
    (0xF901, &[0x000066F4]),
    (0xF902, &[0x00008ECA]),
    (0xF903, &[0x00008CC8]),
    (0xF904, &[0x00006ED1]),
    (0xF905, &[0x00004E32]),
    (0xF906, &[0x000053E5]),
    (0xF907, &[0x00009F9C]),
    (0xF908, &[0x00009F9C]),
    (0xF909, &[0x00005951]),
    (0xF90A, &[0x000091D1]),
    (0xF90B, &[0x00005587]),
    (0xF90C, &[0x00005948]),
    (0xF90D, &[0x000061F6]),
    (0xF90E, &[0x00007669]),
    (0xF90F, &[0x00007F85]),
    (0xF910, &[0x0000863F]),
    (0xF911, &[0x000087BA]),
    (0xF912, &[0x000088F8]),
    (0xF913, &[0x0000908F]),
    (0xF914, &[0x00006A02]),
    (0xF915, &[0x00006D1B]),
    (0xF916, &[0x000070D9]),
    (0xF917, &[0x000073DE]),
    (0xF918, &[0x0000843D]),
    (0xF919, &[0x0000916A]),
    (0xF91A, &[0x000099F1]),
    (0xF91B, &[0x00004E82]),
    (0xF91C, &[0x00005375]),
    (0xF91D, &[0x00006B04]),
    (0xF91E, &[0x0000721B]),
    (0xF91F, &[0x0000862D]),
    (0xF920, &[0x00009E1E]),
    (0xF921, &[0x00005D50]),
    (0xF922, &[0x00006FEB]),
    (0xF923, &[0x000085CD]),
    (0xF924, &[0x00008964]),
    (0xF925, &[0x000062C9]),
    (0xF926, &[0x000081D8]),
    (0xF927, &[0x0000881F]),
    (0xF928, &[0x00005ECA]),
    (0xF929, &[0x00006717]),
    (0xF92A, &[0x00006D6A]),
    (0xF92B, &[0x000072FC]),
    (0xF92C, &[0x000090CE]),
    (0xF92D, &[0x00004F86]),
    (0xF92E, &[0x000051B7]),
    (0xF92F, &[0x000052DE]),
    (0xF930, &[0x000064C4]),
    (0xF931, &[0x00006AD3]),
    (0xF932, &[0x00007210]),
    (0xF933, &[0x000076E7]),
    (0xF934, &[0x00008001]),
    (0xF935, &[0x00008606]),
    (0xF936, &[0x0000865C]),
    (0xF937, &[0x00008DEF]),
    (0xF938, &[0x00009732]),
    (0xF939, &[0x00009B6F]),
    (0xF93A, &[0x00009DFA]),
    (0xF93B, &[0x0000788C]),
    (0xF93C, &[0x0000797F]),
    (0xF93D, &[0x00007DA0]),
    (0xF93E, &[0x000083C9]),
    (0xF93F, &[0x00009304]),
    (0xF940, &[0x00009E7F]),
    (0xF941, &[0x00008AD6]),
    (0xF942, &[0x000058DF]),
    (0xF943, &[0x00005F04]),
    (0xF944, &[0x00007C60]),
    (0xF945, &[0x0000807E]),
    (0xF946, &[0x00007262]),
    (0xF947, &[0x000078CA]),
    (0xF948, &[0x00008CC2]),
    (0xF949, &[0x000096F7]),
    (0xF94A, &[0x000058D8]),
    (0xF94B, &[0x00005C62]),
    (0xF94C, &[0x00006A13]),
    (0xF94D, &[0x00006DDA]),
    (0xF94E, &[0x00006F0F]),
    (0xF94F, &[0x00007D2F]),
    (0xF950, &[0x00007E37]),
    (0xF951, &[0x0000964B]),
    (0xF952, &[0x000052D2]),
    (0xF953, &[0x0000808B]),
    (0xF954, &[0x000051DC]),
    (0xF955, &[0x000051CC]),
    (0xF956, &[0x00007A1C]),
    (0xF957, &[0x00007DBE]),
    (0xF958, &[0x000083F1]),
    (0xF959, &[0x00009675]),
    (0xF95A, &[0x00008B80]),
    (0xF95B, &[0x000062CF]),
    (0xF95C, &[0x00006A02]),
    (0xF95D, &[0x00008AFE]),
    (0xF95E, &[0x00004E39]),
    (0xF95F, &[0x00005BE7]),
    (0xF960, &[0x00006012]),
    (0xF961, &[0x00007387]),
    (0xF962, &[0x00007570]),
    (0xF963, &[0x00005317]),
    (0xF964, &[0x000078FB]),
    (0xF965, &[0x00004FBF]),
    (0xF966, &[0x00005FA9]),
    (0xF967, &[0x00004E0D]),
    (0xF968, &[0x00006CCC]),
    (0xF969, &[0x00006578]),
    (0xF96A, &[0x00007D22]),
    (0xF96B, &[0x000053C3]),
    (0xF96C, &[0x0000585E]),
    (0xF96D, &[0x00007701]),
    (0xF96E, &[0x00008449]),
    (0xF96F, &[0x00008AAA]),
    (0xF970, &[0x00006BBA]),
    (0xF971, &[0x00008FB0]),
    (0xF972, &[0x00006C88]),
    (0xF973, &[0x000062FE]),
    (0xF974, &[0x000082E5]),
    (0xF975, &[0x000063A0]),
    (0xF976, &[0x00007565]),
    (0xF977, &[0x00004EAE]),
    (0xF978, &[0x00005169]),
    (0xF979, &[0x000051C9]),
    (0xF97A, &[0x00006881]),
    (0xF97B, &[0x00007CE7]),
    (0xF97C, &[0x0000826F]),
    (0xF97D, &[0x00008AD2]),
    (0xF97E, &[0x000091CF]),
    (0xF97F, &[0x000052F5]),
    (0xF980, &[0x00005442]),
    (0xF981, &[0x00005973]),
    (0xF982, &[0x00005EEC]),
    (0xF983, &[0x000065C5]),
    (0xF984, &[0x00006FFE]),
    (0xF985, &[0x0000792A]),
    (0xF986, &[0x000095AD]),
    (0xF987, &[0x00009A6A]),
    (0xF988, &[0x00009E97]),
    (0xF989, &[0x00009ECE]),
    (0xF98A, &[0x0000529B]),
    (0xF98B, &[0x000066C6]),
    (0xF98C, &[0x00006B77]),
    (0xF98D, &[0x00008F62]),
    (0xF98E, &[0x00005E74]),
    (0xF98F, &[0x00006190]),
    (0xF990, &[0x00006200]),
    (0xF991, &[0x0000649A]),
    (0xF992, &[0x00006F23]),
    (0xF993, &[0x00007149]),
    (0xF994, &[0x00007489]),
    (0xF995, &[0x000079CA]),
    (0xF996, &[0x00007DF4]),
    (0xF997, &[0x0000806F]),
    (0xF998, &[0x00008F26]),
    (0xF999, &[0x000084EE]),
    (0xF99A, &[0x00009023]),
    (0xF99B, &[0x0000934A]),
    (0xF99C, &[0x00005217]),
    (0xF99D, &[0x000052A3]),
    (0xF99E, &[0x000054BD]),
    (0xF99F, &[0x000070C8]),
    (0xF9A0, &[0x000088C2]),
    (0xF9A1, &[0x00008AAA]),
    (0xF9A2, &[0x00005EC9]),
    (0xF9A3, &[0x00005FF5]),
    (0xF9A4, &[0x0000637B]),
    (0xF9A5, &[0x00006BAE]),
    (0xF9A6, &[0x00007C3E]),
    (0xF9A7, &[0x00007375]),
    (0xF9A8, &[0x00004EE4]),
    (0xF9A9, &[0x000056F9]),
    (0xF9AA, &[0x00005BE7]),
    (0xF9AB, &[0x00005DBA]),
    (0xF9AC, &[0x0000601C]),
    (0xF9AD, &[0x000073B2]),
    (0xF9AE, &[0x00007469]),
    (0xF9AF, &[0x00007F9A]),
    (0xF9B0, &[0x00008046]),
    (0xF9B1, &[0x00009234]),
    (0xF9B2, &[0x000096F6]),
    (0xF9B3, &[0x00009748]),
    (0xF9B4, &[0x00009818]),
    (0xF9B5, &[0x00004F8B]),
    (0xF9B6, &[0x000079AE]),
    (0xF9B7, &[0x000091B4]),
    (0xF9B8, &[0x000096B8]),
    (0xF9B9, &[0x000060E1]),
    (0xF9BA, &[0x00004E86]),
    (0xF9BB, &[0x000050DA]),
    (0xF9BC, &[0x00005BEE]),
    (0xF9BD, &[0x00005C3F]),
    (0xF9BE, &[0x00006599]),
    (0xF9BF, &[0x00006A02]),
    (0xF9C0, &[0x000071CE]),
    (0xF9C1, &[0x00007642]),
    (0xF9C2, &[0x000084FC]),
    (0xF9C3, &[0x0000907C]),
    (0xF9C4, &[0x00009F8D]),
    (0xF9C5, &[0x00006688]),
    (0xF9C6, &[0x0000962E]),
    (0xF9C7, &[0x00005289]),
    (0xF9C8, &[0x0000677B]),
    (0xF9C9, &[0x000067F3]),
    (0xF9CA, &[0x00006D41]),
    (0xF9CB, &[0x00006E9C]),
    (0xF9CC, &[0x00007409]),
    (0xF9CD, &[0x00007559]),
    (0xF9CE, &[0x0000786B]),
    (0xF9CF, &[0x00007D10]),
    (0xF9D0, &[0x0000985E]),
    (0xF9D1, &[0x0000516D]),
    (0xF9D2, &[0x0000622E]),
    (0xF9D3, &[0x00009678]),
    (0xF9D4, &[0x0000502B]),
    (0xF9D5, &[0x00005D19]),
    (0xF9D6, &[0x00006DEA]),
    (0xF9D7, &[0x00008F2A]),
    (0xF9D8, &[0x00005F8B]),
    (0xF9D9, &[0x00006144]),
    (0xF9DA, &[0x00006817]),
    (0xF9DB, &[0x00007387]),
    (0xF9DC, &[0x00009686]),
    (0xF9DD, &[0x00005229]),
    (0xF9DE, &[0x0000540F]),
    (0xF9DF, &[0x00005C65]),
    (0xF9E0, &[0x00006613]),
    (0xF9E1, &[0x0000674E]),
    (0xF9E2, &[0x000068A8]),
    (0xF9E3, &[0x00006CE5]),
    (0xF9E4, &[0x00007406]),
    (0xF9E5, &[0x000075E2]),
    (0xF9E6, &[0x00007F79]),
    (0xF9E7, &[0x000088CF]),
    (0xF9E8, &[0x000088E1]),
    (0xF9E9, &[0x000091CC]),
    (0xF9EA, &[0x000096E2]),
    (0xF9EB, &[0x0000533F]),
    (0xF9EC, &[0x00006EBA]),
    (0xF9ED, &[0x0000541D]),
    (0xF9EE, &[0x000071D0]),
    (0xF9EF, &[0x00007498]),
    (0xF9F0, &[0x000085FA]),
    (0xF9F1, &[0x000096A3]),
    (0xF9F2, &[0x00009C57]),
    (0xF9F3, &[0x00009E9F]),
    (0xF9F4, &[0x00006797]),
    (0xF9F5, &[0x00006DCB]),
    (0xF9F6, &[0x000081E8]),
    (0xF9F7, &[0x00007ACB]),
    (0xF9F8, &[0x00007B20]),
    (0xF9F9, &[0x00007C92]),
    (0xF9FA, &[0x000072C0]),
    (0xF9FB, &[0x00007099]),
    (0xF9FC, &[0x00008B58]),
    (0xF9FD, &[0x00004EC0]),
    (0xF9FE, &[0x00008336]),
    (0xF9FF, &[0x0000523A]),
    (0xFA00, &[0x00005207]),
    (0xFA01, &[0x00005EA6]),
    (0xFA02, &[0x000062D3]),
    (0xFA03, &[0x00007CD6]),
    (0xFA04, &[0x00005B85]),
    (0xFA05, &[0x00006D1E]),
    (0xFA06, &[0x000066B4]),
    (0xFA07, &[0x00008F3B]),
    (0xFA08, &[0x0000884C]),
    (0xFA09, &[0x0000964D]),
    (0xFA0A, &[0x0000898B]),
    (0xFA0B, &[0x00005ED3]),
    (0xFA0C, &[0x00005140]),
    (0xFA0D, &[0x000055C0]),
    (0xFA10, &[0x0000585A]),
    (0xFA12, &[0x00006674]),
    (0xFA15, &[0x000051DE]),
    (0xFA16, &[0x0000732A]),
    (0xFA17, &[0x000076CA]),
    (0xFA18, &[0x0000793C]),
    (0xFA19, &[0x0000795E]),
    (0xFA1A, &[0x00007965]),
    (0xFA1B, &[0x0000798F]),
    (0xFA1C, &[0x00009756]),
    (0xFA1D, &[0x00007CBE]),
    (0xFA1E, &[0x00007FBD]),
    (0xFA20, &[0x00008612]),
    (0xFA22, &[0x00008AF8]),
    (0xFA25, &[0x00009038]),
    (0xFA26, &[0x000090FD]),
    (0xFA2A, &[0x000098EF]),
    (0xFA2B, &[0x000098FC]),
    (0xFA2C, &[0x00009928]),
    (0xFA2D, &[0x00009DB4]),
    (0xFA2E, &[0x000090DE]),
    (0xFA2F, &[0x000096B7]),
    (0xFA30, &[0x00004FAE]),
    (0xFA31, &[0x000050E7]),
    (0xFA32, &[0x0000514D]),
    (0xFA33, &[0x000052C9]),
    (0xFA34, &[0x000052E4]),
    (0xFA35, &[0x00005351]),
    (0xFA36, &[0x0000559D]),
    (0xFA37, &[0x00005606]),
    (0xFA38, &[0x00005668]),
    (0xFA39, &[0x00005840]),
    (0xFA3A, &[0x000058A8]),
    (0xFA3B, &[0x00005C64]),
    (0xFA3C, &[0x00005C6E]),
    (0xFA3D, &[0x00006094]),
    (0xFA3E, &[0x00006168]),
    (0xFA3F, &[0x0000618E]),
    (0xFA40, &[0x000061F2]),
    (0xFA41, &[0x0000654F]),
    (0xFA42, &[0x000065E2]),
    (0xFA43, &[0x00006691]),
    (0xFA44, &[0x00006885]),
    (0xFA45, &[0x00006D77]),
    (0xFA46, &[0x00006E1A]),
    (0xFA47, &[0x00006F22]),
    (0xFA48, &[0x0000716E]),
    (0xFA49, &[0x0000722B]),
    (0xFA4A, &[0x00007422]),
    (0xFA4B, &[0x00007891]),
    (0xFA4C, &[0x0000793E]),
    (0xFA4D, &[0x00007949]),
    (0xFA4E, &[0x00007948]),
    (0xFA4F, &[0x00007950]),
    (0xFA50, &[0x00007956]),
    (0xFA51, &[0x0000795D]),
    (0xFA52, &[0x0000798D]),
    (0xFA53, &[0x0000798E]),
    (0xFA54, &[0x00007A40]),
    (0xFA55, &[0x00007A81]),
    (0xFA56, &[0x00007BC0]),
    (0xFA57, &[0x00007DF4]),
    (0xFA58, &[0x00007E09]),
    (0xFA59, &[0x00007E41]),
    (0xFA5A, &[0x00007F72]),
    (0xFA5B, &[0x00008005]),
    (0xFA5C, &[0x000081ED]),
    (0xFA5D, &[0x00008279]),
    (0xFA5E, &[0x00008279]),
    (0xFA5F, &[0x00008457]),
    (0xFA60, &[0x00008910]),
    (0xFA61, &[0x00008996]),
    (0xFA62, &[0x00008B01]),
    (0xFA63, &[0x00008B39]),
    (0xFA64, &[0x00008CD3]),
    (0xFA65, &[0x00008D08]),
    (0xFA66, &[0x00008FB6]),
    (0xFA67, &[0x00009038]),
    (0xFA68, &[0x000096E3]),
    (0xFA69, &[0x000097FF]),
    (0xFA6A, &[0x0000983B]),
    (0xFA6B, &[0x00006075]),
    (0xFA6C, &[0x000242EE]),
    (0xFA6D, &[0x00008218]),
    (0xFA70, &[0x00004E26]),
    (0xFA71, &[0x000051B5]),
    (0xFA72, &[0x00005168]),
    (0xFA73, &[0x00004F80]),
    (0xFA74, &[0x00005145]),
    (0xFA75, &[0x00005180]),
    (0xFA76, &[0x000052C7]),
    (0xFA77, &[0x000052FA]),
    (0xFA78, &[0x0000559D]),
    (0xFA79, &[0x00005555]),
    (0xFA7A, &[0x00005599]),
    (0xFA7B, &[0x000055E2]),
    (0xFA7C, &[0x0000585A]),
    (0xFA7D, &[0x000058B3]),
    (0xFA7E, &[0x00005944]),
    (0xFA7F, &[0x00005954]),
    (0xFA80, &[0x00005A62]),
    (0xFA81, &[0x00005B28]),
    (0xFA82, &[0x00005ED2]),
    (0xFA83, &[0x00005ED9]),
    (0xFA84, &[0x00005F69]),
    (0xFA85, &[0x00005FAD]),
    (0xFA86, &[0x000060D8]),
    (0xFA87, &[0x0000614E]),
    (0xFA88, &[0x00006108]),
    (0xFA89, &[0x0000618E]),
    (0xFA8A, &[0x00006160]),
    (0xFA8B, &[0x000061F2]),
    (0xFA8C, &[0x00006234]),
    (0xFA8D, &[0x000063C4]),
    (0xFA8E, &[0x0000641C]),
    (0xFA8F, &[0x00006452]),
    (0xFA90, &[0x00006556]),
    (0xFA91, &[0x00006674]),
    (0xFA92, &[0x00006717]),
    (0xFA93, &[0x0000671B]),
    (0xFA94, &[0x00006756]),
    (0xFA95, &[0x00006B79]),
    (0xFA96, &[0x00006BBA]),
    (0xFA97, &[0x00006D41]),
    (0xFA98, &[0x00006EDB]),
    (0xFA99, &[0x00006ECB]),
    (0xFA9A, &[0x00006F22]),
    (0xFA9B, &[0x0000701E]),
    (0xFA9C, &[0x0000716E]),
    (0xFA9D, &[0x000077A7]),
    (0xFA9E, &[0x00007235]),
    (0xFA9F, &[0x000072AF]),
    (0xFAA0, &[0x0000732A]),
    (0xFAA1, &[0x00007471]),
    (0xFAA2, &[0x00007506]),
    (0xFAA3, &[0x0000753B]),
    (0xFAA4, &[0x0000761D]),
    (0xFAA5, &[0x0000761F]),
    (0xFAA6, &[0x000076CA]),
    (0xFAA7, &[0x000076DB]),
    (0xFAA8, &[0x000076F4]),
    (0xFAA9, &[0x0000774A]),
    (0xFAAA, &[0x00007740]),
    (0xFAAB, &[0x000078CC]),
    (0xFAAC, &[0x00007AB1]),
    (0xFAAD, &[0x00007BC0]),
    (0xFAAE, &[0x00007C7B]),
    (0xFAAF, &[0x00007D5B]),
    (0xFAB0, &[0x00007DF4]),
    (0xFAB1, &[0x00007F3E]),
    (0xFAB2, &[0x00008005]),
    (0xFAB3, &[0x00008352]),
    (0xFAB4, &[0x000083EF]),
    (0xFAB5, &[0x00008779]),
    (0xFAB6, &[0x00008941]),
    (0xFAB7, &[0x00008986]),
    (0xFAB8, &[0x00008996]),
    (0xFAB9, &[0x00008ABF]),
    (0xFABA, &[0x00008AF8]),
    (0xFABB, &[0x00008ACB]),
    (0xFABC, &[0x00008B01]),
    (0xFABD, &[0x00008AFE]),
    (0xFABE, &[0x00008AED]),
    (0xFABF, &[0x00008B39]),
    (0xFAC0, &[0x00008B8A]),
    (0xFAC1, &[0x00008D08]),
    (0xFAC2, &[0x00008F38]),
    (0xFAC3, &[0x00009072]),
    (0xFAC4, &[0x00009199]),
    (0xFAC5, &[0x00009276]),
    (0xFAC6, &[0x0000967C]),
    (0xFAC7, &[0x000096E3]),
    (0xFAC8, &[0x00009756]),
    (0xFAC9, &[0x000097DB]),
    (0xFACA, &[0x000097FF]),
    (0xFACB, &[0x0000980B]),
    (0xFACC, &[0x0000983B]),
    (0xFACD, &[0x00009B12]),
    (0xFACE, &[0x00009F9C]),
    (0xFACF, &[0x0002284A]),
    (0xFAD0, &[0x00022844]),
    (0xFAD1, &[0x000233D5]),
    (0xFAD2, &[0x00003B9D]),
    (0xFAD3, &[0x00004018]),
    (0xFAD4, &[0x00004039]),
    (0xFAD5, &[0x00025249]),
    (0xFAD6, &[0x00025CD0]),
    (0xFAD7, &[0x00027ED3]),
    (0xFAD8, &[0x00009F43]),
    (0xFAD9, &[0x00009F8E]),
    (0xFB1D, &[0x000005D9, 0x0E0005B4]),
    (0xFB1F, &[0x000005F2, 0x110005B7]),
    (0xFB2A, &[0x000005E9, 0x180005C1]),
    (0xFB2B, &[0x000005E9, 0x190005C2]),
    (0xFB2C, &[0x000005E9, 0x150005BC, 0x180005C1]),
    (0xFB2D, &[0x000005E9, 0x150005BC, 0x190005C2]),
    (0xFB2E, &[0x000005D0, 0x110005B7]),
    (0xFB2F, &[0x000005D0, 0x120005B8]),
    (0xFB30, &[0x000005D0, 0x150005BC]),
    (0xFB31, &[0x000005D1, 0x150005BC]),
    (0xFB32, &[0x000005D2, 0x150005BC]),
    (0xFB33, &[0x000005D3, 0x150005BC]),
    (0xFB34, &[0x000005D4, 0x150005BC]),
    (0xFB35, &[0x000005D5, 0x150005BC]),
    (0xFB36, &[0x000005D6, 0x150005BC]),
    (0xFB38, &[0x000005D8, 0x150005BC]),
    (0xFB39, &[0x000005D9, 0x150005BC]),
    (0xFB3A, &[0x000005DA, 0x150005BC]),
    (0xFB3B, &[0x000005DB, 0x150005BC]),
    (0xFB3C, &[0x000005DC, 0x150005BC]),
    (0xFB3E, &[0x000005DE, 0x150005BC]),
    (0xFB40, &[0x000005E0, 0x150005BC]),
    (0xFB41, &[0x000005E1, 0x150005BC]),
    (0xFB43, &[0x000005E3, 0x150005BC]),
    (0xFB44, &[0x000005E4, 0x150005BC]),
    (0xFB46, &[0x000005E6, 0x150005BC]),
    (0xFB47, &[0x000005E7, 0x150005BC]),
    (0xFB48, &[0x000005E8, 0x150005BC]),
    (0xFB49, &[0x000005E9, 0x150005BC]),
    (0xFB4A, &[0x000005EA, 0x150005BC]),
    (0xFB4B, &[0x000005D5, 0x130005B9]),
    (0xFB4C, &[0x000005D1, 0x170005BF]),
    (0xFB4D, &[0x000005DB, 0x170005BF]),
    (0xFB4E, &[0x000005E4, 0x170005BF]),
    (0x1109A, &[0x00011099, 0x070110BA]),
    (0x1109C, &[0x0001109B, 0x070110BA]),
    (0x110AB, &[0x000110A5, 0x070110BA]),
    (0x1112E, &[0x00011131, 0x00011127]),
    (0x1112F, &[0x00011132, 0x00011127]),
    (0x1134B, &[0x00011347, 0x0001133E]),
    (0x1134C, &[0x00011347, 0x00011357]),
    (0x114BB, &[0x000114B9, 0x000114BA]),
    (0x114BC, &[0x000114B9, 0x000114B0]),
    (0x114BE, &[0x000114B9, 0x000114BD]),
    (0x115BA, &[0x000115B8, 0x000115AF]),
    (0x115BB, &[0x000115B9, 0x000115AF]),
    (0x11938, &[0x00011935, 0x00011930]),
    (0x1D15E, &[0x0001D157, 0xD801D165]),
    (0x1D15F, &[0x0001D158, 0xD801D165]),
    (0x1D160, &[0x0001D158, 0xD801D165, 0xD801D16E]),
    (0x1D161, &[0x0001D158, 0xD801D165, 0xD801D16F]),
    (0x1D162, &[0x0001D158, 0xD801D165, 0xD801D170]),
    (0x1D163, &[0x0001D158, 0xD801D165, 0xD801D171]),
    (0x1D164, &[0x0001D158, 0xD801D165, 0xD801D172]),
    (0x1D1BB, &[0x0001D1B9, 0xD801D165]),
    (0x1D1BC, &[0x0001D1BA, 0xD801D165]),
    (0x1D1BD, &[0x0001D1B9, 0xD801D165, 0xD801D16E]),
    (0x1D1BE, &[0x0001D1BA, 0xD801D165, 0xD801D16E]),
    (0x1D1BF, &[0x0001D1B9, 0xD801D165, 0xD801D16F]),
    (0x1D1C0, &[0x0001D1BA, 0xD801D165, 0xD801D16F]),
    (0x2F800, &[0x00004E3D]),
    (0x2F801, &[0x00004E38]),
    (0x2F802, &[0x00004E41]),
    (0x2F803, &[0x00020122]),
    (0x2F804, &[0x00004F60]),
    (0x2F805, &[0x00004FAE]),
    (0x2F806, &[0x00004FBB]),
    (0x2F807, &[0x00005002]),
    (0x2F808, &[0x0000507A]),
    (0x2F809, &[0x00005099]),
    (0x2F80A, &[0x000050E7]),
    (0x2F80B, &[0x000050CF]),
    (0x2F80C, &[0x0000349E]),
    (0x2F80D, &[0x0002063A]),
    (0x2F80E, &[0x0000514D]),
    (0x2F80F, &[0x00005154]),
    (0x2F810, &[0x00005164]),
    (0x2F811, &[0x00005177]),
    (0x2F812, &[0x0002051C]),
    (0x2F813, &[0x000034B9]),
    (0x2F814, &[0x00005167]),
    (0x2F815, &[0x0000518D]),
    (0x2F816, &[0x0002054B]),
    (0x2F817, &[0x00005197]),
    (0x2F818, &[0x000051A4]),
    (0x2F819, &[0x00004ECC]),
    (0x2F81A, &[0x000051AC]),
    (0x2F81B, &[0x000051B5]),
    (0x2F81C, &[0x000291DF]),
    (0x2F81D, &[0x000051F5]),
    (0x2F81E, &[0x00005203]),
    (0x2F81F, &[0x000034DF]),
    (0x2F820, &[0x0000523B]),
    (0x2F821, &[0x00005246]),
    (0x2F822, &[0x00005272]),
    (0x2F823, &[0x00005277]),
    (0x2F824, &[0x00003515]),
    (0x2F825, &[0x000052C7]),
    (0x2F826, &[0x000052C9]),
    (0x2F827, &[0x000052E4]),
    (0x2F828, &[0x000052FA]),
    (0x2F829, &[0x00005305]),
    (0x2F82A, &[0x00005306]),
    (0x2F82B, &[0x00005317]),
    (0x2F82C, &[0x00005349]),
    (0x2F82D, &[0x00005351]),
    (0x2F82E, &[0x0000535A]),
    (0x2F82F, &[0x00005373]),
    (0x2F830, &[0x0000537D]),
    (0x2F831, &[0x0000537F]),
    (0x2F832, &[0x0000537F]),
    (0x2F833, &[0x0000537F]),
    (0x2F834, &[0x00020A2C]),
    (0x2F835, &[0x00007070]),
    (0x2F836, &[0x000053CA]),
    (0x2F837, &[0x000053DF]),
    (0x2F838, &[0x00020B63]),
    (0x2F839, &[0x000053EB]),
    (0x2F83A, &[0x000053F1]),
    (0x2F83B, &[0x00005406]),
    (0x2F83C, &[0x0000549E]),
    (0x2F83D, &[0x00005438]),
    (0x2F83E, &[0x00005448]),
    (0x2F83F, &[0x00005468]),
    (0x2F840, &[0x000054A2]),
    (0x2F841, &[0x000054F6]),
    (0x2F842, &[0x00005510]),
    (0x2F843, &[0x00005553]),
    (0x2F844, &[0x00005563]),
    (0x2F845, &[0x00005584]),
    (0x2F846, &[0x00005584]),
    (0x2F847, &[0x00005599]),
    (0x2F848, &[0x000055AB]),
    (0x2F849, &[0x000055B3]),
    (0x2F84A, &[0x000055C2]),
    (0x2F84B, &[0x00005716]),
    (0x2F84C, &[0x00005606]),
    (0x2F84D, &[0x00005717]),
    (0x2F84E, &[0x00005651]),
    (0x2F84F, &[0x00005674]),
    (0x2F850, &[0x00005207]),
    (0x2F851, &[0x000058EE]),
    (0x2F852, &[0x000057CE]),
    (0x2F853, &[0x000057F4]),
    (0x2F854, &[0x0000580D]),
    (0x2F855, &[0x0000578B]),
    (0x2F856, &[0x00005832]),
    (0x2F857, &[0x00005831]),
    (0x2F858, &[0x000058AC]),
    (0x2F859, &[0x000214E4]),
    (0x2F85A, &[0x000058F2]),
    (0x2F85B, &[0x000058F7]),
    (0x2F85C, &[0x00005906]),
    (0x2F85D, &[0x0000591A]),
    (0x2F85E, &[0x00005922]),
    (0x2F85F, &[0x00005962]),
    (0x2F860, &[0x000216A8]),
    (0x2F861, &[0x000216EA]),
    (0x2F862, &[0x000059EC]),
    (0x2F863, &[0x00005A1B]),
    (0x2F864, &[0x00005A27]),
    (0x2F865, &[0x000059D8]),
    (0x2F866, &[0x00005A66]),
    (0x2F867, &[0x000036EE]),
    (0x2F868, &[0x000036FC]),
    (0x2F869, &[0x00005B08]),
    (0x2F86A, &[0x00005B3E]),
    (0x2F86B, &[0x00005B3E]),
    (0x2F86C, &[0x000219C8]),
    (0x2F86D, &[0x00005BC3]),
    (0x2F86E, &[0x00005BD8]),
    (0x2F86F, &[0x00005BE7]),
    (0x2F870, &[0x00005BF3]),
    (0x2F871, &[0x00021B18]),
    (0x2F872, &[0x00005BFF]),
    (0x2F873, &[0x00005C06]),
    (0x2F874, &[0x00005F53]),
    (0x2F875, &[0x00005C22]),
    (0x2F876, &[0x00003781]),
    (0x2F877, &[0x00005C60]),
    (0x2F878, &[0x00005C6E]),
    (0x2F879, &[0x00005CC0]),
    (0x2F87A, &[0x00005C8D]),
    (0x2F87B, &[0x00021DE4]),
    (0x2F87C, &[0x00005D43]),
    (0x2F87D, &[0x00021DE6]),
    (0x2F87E, &[0x00005D6E]),
    (0x2F87F, &[0x00005D6B]),
    (0x2F880, &[0x00005D7C]),
    (0x2F881, &[0x00005DE1]),
    (0x2F882, &[0x00005DE2]),
    (0x2F883, &[0x0000382F]),
    (0x2F884, &[0x00005DFD]),
    (0x2F885, &[0x00005E28]),
    (0x2F886, &[0x00005E3D]),
    (0x2F887, &[0x00005E69]),
    (0x2F888, &[0x00003862]),
    (0x2F889, &[0x00022183]),
    (0x2F88A, &[0x0000387C]),
    (0x2F88B, &[0x00005EB0]),
    (0x2F88C, &[0x00005EB3]),
    (0x2F88D, &[0x00005EB6]),
    (0x2F88E, &[0x00005ECA]),
    (0x2F88F, &[0x0002A392]),
    (0x2F890, &[0x00005EFE]),
    (0x2F891, &[0x00022331]),
    (0x2F892, &[0x00022331]),
    (0x2F893, &[0x00008201]),
    (0x2F894, &[0x00005F22]),
    (0x2F895, &[0x00005F22]),
    (0x2F896, &[0x000038C7]),
    (0x2F897, &[0x000232B8]),
    (0x2F898, &[0x000261DA]),
    (0x2F899, &[0x00005F62]),
    (0x2F89A, &[0x00005F6B]),
    (0x2F89B, &[0x000038E3]),
    (0x2F89C, &[0x00005F9A]),
    (0x2F89D, &[0x00005FCD]),
    (0x2F89E, &[0x00005FD7]),
    (0x2F89F, &[0x00005FF9]),
    (0x2F8A0, &[0x00006081]),
    (0x2F8A1, &[0x0000393A]),
    (0x2F8A2, &[0x0000391C]),
    (0x2F8A3, &[0x00006094]),
    (0x2F8A4, &[0x000226D4]),
    (0x2F8A5, &[0x000060C7]),
    (0x2F8A6, &[0x00006148]),
    (0x2F8A7, &[0x0000614C]),
    (0x2F8A8, &[0x0000614E]),
    (0x2F8A9, &[0x0000614C]),
    (0x2F8AA, &[0x0000617A]),
    (0x2F8AB, &[0x0000618E]),
    (0x2F8AC, &[0x000061B2]),
    (0x2F8AD, &[0x000061A4]),
    (0x2F8AE, &[0x000061AF]),
    (0x2F8AF, &[0x000061DE]),
    (0x2F8B0, &[0x000061F2]),
    (0x2F8B1, &[0x000061F6]),
    (0x2F8B2, &[0x00006210]),
    (0x2F8B3, &[0x0000621B]),
    (0x2F8B4, &[0x0000625D]),
    (0x2F8B5, &[0x000062B1]),
    (0x2F8B6, &[0x000062D4]),
    (0x2F8B7, &[0x00006350]),
    (0x2F8B8, &[0x00022B0C]),
    (0x2F8B9, &[0x0000633D]),
    (0x2F8BA, &[0x000062FC]),
    (0x2F8BB, &[0x00006368]),
    (0x2F8BC, &[0x00006383]),
    (0x2F8BD, &[0x000063E4]),
    (0x2F8BE, &[0x00022BF1]),
    (0x2F8BF, &[0x00006422]),
    (0x2F8C0, &[0x000063C5]),
    (0x2F8C1, &[0x000063A9]),
    (0x2F8C2, &[0x00003A2E]),
    (0x2F8C3, &[0x00006469]),
    (0x2F8C4, &[0x0000647E]),
    (0x2F8C5, &[0x0000649D]),
    (0x2F8C6, &[0x00006477]),
    (0x2F8C7, &[0x00003A6C]),
    (0x2F8C8, &[0x0000654F]),
    (0x2F8C9, &[0x0000656C]),
    (0x2F8CA, &[0x0002300A]),
    (0x2F8CB, &[0x000065E3]),
    (0x2F8CC, &[0x000066F8]),
    (0x2F8CD, &[0x00006649]),
    (0x2F8CE, &[0x00003B19]),
    (0x2F8CF, &[0x00006691]),
    (0x2F8D0, &[0x00003B08]),
    (0x2F8D1, &[0x00003AE4]),
    (0x2F8D2, &[0x00005192]),
    (0x2F8D3, &[0x00005195]),
    (0x2F8D4, &[0x00006700]),
    (0x2F8D5, &[0x0000669C]),
    (0x2F8D6, &[0x000080AD]),
    (0x2F8D7, &[0x000043D9]),
    (0x2F8D8, &[0x00006717]),
    (0x2F8D9, &[0x0000671B]),
    (0x2F8DA, &[0x00006721]),
    (0x2F8DB, &[0x0000675E]),
    (0x2F8DC, &[0x00006753]),
    (0x2F8DD, &[0x000233C3]),
    (0x2F8DE, &[0x00003B49]),
    (0x2F8DF, &[0x000067FA]),
    (0x2F8E0, &[0x00006785]),
    (0x2F8E1, &[0x00006852]),
    (0x2F8E2, &[0x00006885]),
    (0x2F8E3, &[0x0002346D]),
    (0x2F8E4, &[0x0000688E]),
    (0x2F8E5, &[0x0000681F]),
    (0x2F8E6, &[0x00006914]),
    (0x2F8E7, &[0x00003B9D]),
    (0x2F8E8, &[0x00006942]),
    (0x2F8E9, &[0x000069A3]),
    (0x2F8EA, &[0x000069EA]),
    (0x2F8EB, &[0x00006AA8]),
    (0x2F8EC, &[0x000236A3]),
    (0x2F8ED, &[0x00006ADB]),
    (0x2F8EE, &[0x00003C18]),
    (0x2F8EF, &[0x00006B21]),
    (0x2F8F0, &[0x000238A7]),
    (0x2F8F1, &[0x00006B54]),
    (0x2F8F2, &[0x00003C4E]),
    (0x2F8F3, &[0x00006B72]),
    (0x2F8F4, &[0x00006B9F]),
    (0x2F8F5, &[0x00006BBA]),
    (0x2F8F6, &[0x00006BBB]),
    (0x2F8F7, &[0x00023A8D]),
    (0x2F8F8, &[0x00021D0B]),
    (0x2F8F9, &[0x00023AFA]),
    (0x2F8FA, &[0x00006C4E]),
    (0x2F8FB, &[0x00023CBC]),
    (0x2F8FC, &[0x00006CBF]),
    (0x2F8FD, &[0x00006CCD]),
    (0x2F8FE, &[0x00006C67]),
    (0x2F8FF, &[0x00006D16]),
    (0x2F900, &[0x00006D3E]),
    (0x2F901, &[0x00006D77]),
    (0x2F902, &[0x00006D41]),
    (0x2F903, &[0x00006D69]),
    (0x2F904, &[0x00006D78]),
    (0x2F905, &[0x00006D85]),
    (0x2F906, &[0x00023D1E]),
    (0x2F907, &[0x00006D34]),
    (0x2F908, &[0x00006E2F]),
    (0x2F909, &[0x00006E6E]),
    (0x2F90A, &[0x00003D33]),
    (0x2F90B, &[0x00006ECB]),
    (0x2F90C, &[0x00006EC7]),
    (0x2F90D, &[0x00023ED1]),
    (0x2F90E, &[0x00006DF9]),
    (0x2F90F, &[0x00006F6E]),
    (0x2F910, &[0x00023F5E]),
    (0x2F911, &[0x00023F8E]),
    (0x2F912, &[0x00006FC6]),
    (0x2F913, &[0x00007039]),
    (0x2F914, &[0x0000701E]),
    (0x2F915, &[0x0000701B]),
    (0x2F916, &[0x00003D96]),
    (0x2F917, &[0x0000704A]),
    (0x2F918, &[0x0000707D]),
    (0x2F919, &[0x00007077]),
    (0x2F91A, &[0x000070AD]),
    (0x2F91B, &[0x00020525]),
    (0x2F91C, &[0x00007145]),
    (0x2F91D, &[0x00024263]),
    (0x2F91E, &[0x0000719C]),
    (0x2F91F, &[0x000243AB]),
    (0x2F920, &[0x00007228]),
    (0x2F921, &[0x00007235]),
    (0x2F922, &[0x00007250]),
    (0x2F923, &[0x00024608]),
    (0x2F924, &[0x00007280]),
    (0x2F925, &[0x00007295]),
    (0x2F926, &[0x00024735]),
    (0x2F927, &[0x00024814]),
    (0x2F928, &[0x0000737A]),
    (0x2F929, &[0x0000738B]),
    (0x2F92A, &[0x00003EAC]),
    (0x2F92B, &[0x000073A5]),
    (0x2F92C, &[0x00003EB8]),
    (0x2F92D, &[0x00003EB8]),
    (0x2F92E, &[0x00007447]),
    (0x2F92F, &[0x0000745C]),
    (0x2F930, &[0x00007471]),
    (0x2F931, &[0x00007485]),
    (0x2F932, &[0x000074CA]),
    (0x2F933, &[0x00003F1B]),
    (0x2F934, &[0x00007524]),
    (0x2F935, &[0x00024C36]),
    (0x2F936, &[0x0000753E]),
    (0x2F937, &[0x00024C92]),
    (0x2F938, &[0x00007570]),
    (0x2F939, &[0x0002219F]),
    (0x2F93A, &[0x00007610]),
    (0x2F93B, &[0x00024FA1]),
    (0x2F93C, &[0x00024FB8]),
    (0x2F93D, &[0x00025044]),
    (0x2F93E, &[0x00003FFC]),
    (0x2F93F, &[0x00004008]),
    (0x2F940, &[0x000076F4]),
    (0x2F941, &[0x000250F3]),
    (0x2F942, &[0x000250F2]),
    (0x2F943, &[0x00025119]),
    (0x2F944, &[0x00025133]),
    (0x2F945, &[0x0000771E]),
    (0x2F946, &[0x0000771F]),
    (0x2F947, &[0x0000771F]),
    (0x2F948, &[0x0000774A]),
    (0x2F949, &[0x00004039]),
    (0x2F94A, &[0x0000778B]),
    (0x2F94B, &[0x00004046]),
    (0x2F94C, &[0x00004096]),
    (0x2F94D, &[0x0002541D]),
    (0x2F94E, &[0x0000784E]),
    (0x2F94F, &[0x0000788C]),
    (0x2F950, &[0x000078CC]),
    (0x2F951, &[0x000040E3]),
    (0x2F952, &[0x00025626]),
    (0x2F953, &[0x00007956]),
    (0x2F954, &[0x0002569A]),
    (0x2F955, &[0x000256C5]),
    (0x2F956, &[0x0000798F]),
    (0x2F957, &[0x000079EB]),
    (0x2F958, &[0x0000412F]),
    (0x2F959, &[0x00007A40]),
    (0x2F95A, &[0x00007A4A]),
    (0x2F95B, &[0x00007A4F]),
    (0x2F95C, &[0x0002597C]),
    (0x2F95D, &[0x00025AA7]),
    (0x2F95E, &[0x00025AA7]),
    (0x2F95F, &[0x00007AEE]),
    (0x2F960, &[0x00004202]),
    (0x2F961, &[0x00025BAB]),
    (0x2F962, &[0x00007BC6]),
    (0x2F963, &[0x00007BC9]),
    (0x2F964, &[0x00004227]),
    (0x2F965, &[0x00025C80]),
    (0x2F966, &[0x00007CD2]),
    (0x2F967, &[0x000042A0]),
    (0x2F968, &[0x00007CE8]),
    (0x2F969, &[0x00007CE3]),
    (0x2F96A, &[0x00007D00]),
    (0x2F96B, &[0x00025F86]),
    (0x2F96C, &[0x00007D63]),
    (0x2F96D, &[0x00004301]),
    (0x2F96E, &[0x00007DC7]),
    (0x2F96F, &[0x00007E02]),
    (0x2F970, &[0x00007E45]),
    (0x2F971, &[0x00004334]),
    (0x2F972, &[0x00026228]),
    (0x2F973, &[0x00026247]),
    (0x2F974, &[0x00004359]),
    (0x2F975, &[0x000262D9]),
    (0x2F976, &[0x00007F7A]),
    (0x2F977, &[0x0002633E]),
    (0x2F978, &[0x00007F95]),
    (0x2F979, &[0x00007FFA]),
    (0x2F97A, &[0x00008005]),
    (0x2F97B, &[0x000264DA]),
    (0x2F97C, &[0x00026523]),
    (0x2F97D, &[0x00008060]),
    (0x2F97E, &[0x000265A8]),
    (0x2F97F, &[0x00008070]),
    (0x2F980, &[0x0002335F]),
    (0x2F981, &[0x000043D5]),
    (0x2F982, &[0x000080B2]),
    (0x2F983, &[0x00008103]),
    (0x2F984, &[0x0000440B]),
    (0x2F985, &[0x0000813E]),
    (0x2F986, &[0x00005AB5]),
    (0x2F987, &[0x000267A7]),
    (0x2F988, &[0x000267B5]),
    (0x2F989, &[0x00023393]),
    (0x2F98A, &[0x0002339C]),
    (0x2F98B, &[0x00008201]),
    (0x2F98C, &[0x00008204]),
    (0x2F98D, &[0x00008F9E]),
    (0x2F98E, &[0x0000446B]),
    (0x2F98F, &[0x00008291]),
    (0x2F990, &[0x0000828B]),
    (0x2F991, &[0x0000829D]),
    (0x2F992, &[0x000052B3]),
    (0x2F993, &[0x000082B1]),
    (0x2F994, &[0x000082B3]),
    (0x2F995, &[0x000082BD]),
    (0x2F996, &[0x000082E6]),
    (0x2F997, &[0x00026B3C]),
    (0x2F998, &[0x000082E5]),
    (0x2F999, &[0x0000831D]),
    (0x2F99A, &[0x00008363]),
    (0x2F99B, &[0x000083AD]),
    (0x2F99C, &[0x00008323]),
    (0x2F99D, &[0x000083BD]),
    (0x2F99E, &[0x000083E7]),
    (0x2F99F, &[0x00008457]),
    (0x2F9A0, &[0x00008353]),
    (0x2F9A1, &[0x000083CA]),
    (0x2F9A2, &[0x000083CC]),
    (0x2F9A3, &[0x000083DC]),
    (0x2F9A4, &[0x00026C36]),
    (0x2F9A5, &[0x00026D6B]),
    (0x2F9A6, &[0x00026CD5]),
    (0x2F9A7, &[0x0000452B]),
    (0x2F9A8, &[0x000084F1]),
    (0x2F9A9, &[0x000084F3]),
    (0x2F9AA, &[0x00008516]),
    (0x2F9AB, &[0x000273CA]),
    (0x2F9AC, &[0x00008564]),
    (0x2F9AD, &[0x00026F2C]),
    (0x2F9AE, &[0x0000455D]),
    (0x2F9AF, &[0x00004561]),
    (0x2F9B0, &[0x00026FB1]),
    (0x2F9B1, &[0x000270D2]),
    (0x2F9B2, &[0x0000456B]),
    (0x2F9B3, &[0x00008650]),
    (0x2F9B4, &[0x0000865C]),
    (0x2F9B5, &[0x00008667]),
    (0x2F9B6, &[0x00008669]),
    (0x2F9B7, &[0x000086A9]),
    (0x2F9B8, &[0x00008688]),
    (0x2F9B9, &[0x0000870E]),
    (0x2F9BA, &[0x000086E2]),
    (0x2F9BB, &[0x00008779]),
    (0x2F9BC, &[0x00008728]),
    (0x2F9BD, &[0x0000876B]),
    (0x2F9BE, &[0x00008786]),
    (0x2F9BF, &[0x000045D7]),
    (0x2F9C0, &[0x000087E1]),
    (0x2F9C1, &[0x00008801]),
    (0x2F9C2, &[0x000045F9]),
    (0x2F9C3, &[0x00008860]),
    (0x2F9C4, &[0x00008863]),
    (0x2F9C5, &[0x00027667]),
    (0x2F9C6, &[0x000088D7]),
    (0x2F9C7, &[0x000088DE]),
    (0x2F9C8, &[0x00004635]),
    (0x2F9C9, &[0x000088FA]),
    (0x2F9CA, &[0x000034BB]),
    (0x2F9CB, &[0x000278AE]),
    (0x2F9CC, &[0x00027966]),
    (0x2F9CD, &[0x000046BE]),
    (0x2F9CE, &[0x000046C7]),
    (0x2F9CF, &[0x00008AA0]),
    (0x2F9D0, &[0x00008AED]),
    (0x2F9D1, &[0x00008B8A]),
    (0x2F9D2, &[0x00008C55]),
    (0x2F9D3, &[0x00027CA8]),
    (0x2F9D4, &[0x00008CAB]),
    (0x2F9D5, &[0x00008CC1]),
    (0x2F9D6, &[0x00008D1B]),
    (0x2F9D7, &[0x00008D77]),
    (0x2F9D8, &[0x00027F2F]),
    (0x2F9D9, &[0x00020804]),
    (0x2F9DA, &[0x00008DCB]),
    (0x2F9DB, &[0x00008DBC]),
    (0x2F9DC, &[0x00008DF0]),
    (0x2F9DD, &[0x000208DE]),
    (0x2F9DE, &[0x00008ED4]),
    (0x2F9DF, &[0x00008F38]),
    (0x2F9E0, &[0x000285D2]),
    (0x2F9E1, &[0x000285ED]),
    (0x2F9E2, &[0x00009094]),
    (0x2F9E3, &[0x000090F1]),
    (0x2F9E4, &[0x00009111]),
    (0x2F9E5, &[0x0002872E]),
    (0x2F9E6, &[0x0000911B]),
    (0x2F9E7, &[0x00009238]),
    (0x2F9E8, &[0x000092D7]),
    (0x2F9E9, &[0x000092D8]),
    (0x2F9EA, &[0x0000927C]),
    (0x2F9EB, &[0x000093F9]),
    (0x2F9EC, &[0x00009415]),
    (0x2F9ED, &[0x00028BFA]),
    (0x2F9EE, &[0x0000958B]),
    (0x2F9EF, &[0x00004995]),
    (0x2F9F0, &[0x000095B7]),
    (0x2F9F1, &[0x00028D77]),
    (0x2F9F2, &[0x000049E6]),
    (0x2F9F3, &[0x000096C3]),
    (0x2F9F4, &[0x00005DB2]),
    (0x2F9F5, &[0x00009723]),
    (0x2F9F6, &[0x00029145]),
    (0x2F9F7, &[0x0002921A]),
    (0x2F9F8, &[0x00004A6E]),
    (0x2F9F9, &[0x00004A76]),
    (0x2F9FA, &[0x000097E0]),
    (0x2F9FB, &[0x0002940A]),
    (0x2F9FC, &[0x00004AB2]),
    (0x2F9FD, &[0x00029496]),
    (0x2F9FE, &[0x0000980B]),
    (0x2F9FF, &[0x0000980B]),
    (0x2FA00, &[0x00009829]),
    (0x2FA01, &[0x000295B6]),
    (0x2FA02, &[0x000098E2]),
    (0x2FA03, &[0x00004B33]),
    (0x2FA04, &[0x00009929]),
    (0x2FA05, &[0x000099A7]),
    (0x2FA06, &[0x000099C2]),
    (0x2FA07, &[0x000099FE]),
    (0x2FA08, &[0x00004BCE]),
    (0x2FA09, &[0x00029B30]),
    (0x2FA0A, &[0x00009B12]),
    (0x2FA0B, &[0x00009C40]),
    (0x2FA0C, &[0x00009CFD]),
    (0x2FA0D, &[0x00004CCE]),
    (0x2FA0E, &[0x00004CED]),
    (0x2FA0F, &[0x00009D67]),
    (0x2FA10, &[0x0002A0CE]),
    (0x2FA11, &[0x00004CF8]),
    (0x2FA12, &[0x0002A105]),
    (0x2FA13, &[0x0002A20E]),
    (0x2FA14, &[0x0002A291]),
    (0x2FA15, &[0x00009EBB]),
    (0x2FA16, &[0x00004D56]),
    (0x2FA17, &[0x00009EF9]),
    (0x2FA18, &[0x00009EFE]),
    (0x2FA19, &[0x00009F05]),
    (0x2FA1A, &[0x00009F0F]),
    (0x2FA1B, &[0x00009F16]),
    (0x2FA1C, &[0x00009F3B]),
    (0x2FA1D, &[0x0002A600]),
];

/// Full compatibility decompositions, as (codepoint, expansion) pairs
/// sorted by codepoint.
#[rustfmt::skip]
static COMPATIBILITY: &[(u32, &[u32])] = &[
    (0x00A0, &[0x00000020]),
    (0x00A8, &[0x00000020, 0xE6000308]),
    (0x00AA, &[0x00000061]),
    (0x00AF, &[0x00000020, 0xE6000304]),
    (0x00B2, &[0x00000032]),
    (0x00B3, &[0x00000033]),
    (0x00B4, &[0x00000020, 0xE6000301]),
    (0x00B5, &[0x000003BC]),
    (0x00B8, &[0x00000020, 0xCA000327]),
    (0x00B9, &[0x00000031]),
    (0x00BA, &[0x0000006F]),
    (0x00BC, &[0x00000031, 0x00002044, 0x00000034]),
    (0x00BD, &[0x00000031, 0x00002044, 0x00000032]),
    (0x00BE, &[0x00000033, 0x00002044, 0x00000034]),
    (0x0132, &[0x00000049, 0x0000004A]),
    (0x0133, &[0x00000069, 0x0000006A]),
    (0x013F, &[0x0000004C, 0x000000B7]),
    (0x0140, &[0x0000006C, 0x000000B7]),
    (0x0149, &[0x000002BC, 0x0000006E]),
    (0x017F, &[0x00000073]),
    (0x01C4, &[0x00000044, 0x0000005A, 0xE600030C]),
    (0x01C5, &[0x00000044, 0x0000007A, 0xE600030C]),
    (0x01C6, &[0x00000064, 0x0000007A, 0xE600030C]),
    (0x01C7, &[0x0000004C, 0x0000004A]),
    (0x01C8, &[0x0000004C, 0x0000006A]),
    (0x01C9, &[0x0000006C, 0x0000006A]),
    (0x01CA, &[0x0000004E, 0x0000004A]),
    (0x01CB, &[0x0000004E, 0x0000006A]),
    (0x01CC, &[0x0000006E, 0x0000006A]),
    (0x01F1, &[0x00000044, 0x0000005A]),
    (0x01F2, &[0x00000044, 0x0000007A]),
    (0x01F3, &[0x00000064, 0x0000007A]),
    (0x02B0, &[0x00000068]),
    (0x02B1, &[0x00000266]),
    (0x02B2, &[0x0000006A]),
    (0x02B3, &[0x00000072]),
    (0x02B4, &[0x00000279]),
    (0x02B5, &[0x0000027B]),
    (0x02B6, &[0x00000281]),
    (0x02B7, &[0x00000077]),
    (0x02B8, &[0x00000079]),
    (0x02D8, &[0x00000020, 0xE6000306]),
    (0x02D9, &[0x00000020, 0xE6000307]),
    (0x02DA, &[0x00000020, 0xE600030A]),
    (0x02DB, &[0x00000020, 0xCA000328]),
    (0x02DC, &[0x00000020, 0xE6000303]),
    (0x02DD, &[0x00000020, 0xE600030B]),
    (0x02E0, &[0x00000263]),
    (0x02E1, &[0x0000006C]),
    (0x02E2, &[0x00000073]),
    (0x02E3, &[0x00000078]),
    (0x02E4, &[0x00000295]),
    (0x037A, &[0x00000020, 0xF0000345]),
    (0x0384, &[0x00000020, 0xE6000301]),
    (0x0385, &[0x00000020, 0xE6000308, 0xE6000301]),
    (0x03D0, &[0x000003B2]),
    (0x03D1, &[0x000003B8]),
    (0x03D2, &[0x000003A5]),
    (0x03D3, &[0x000003A5, 0xE6000301]),
    (0x03D4, &[0x000003A5, 0xE6000308]),
    (0x03D5, &[0x000003C6]),
    (0x03D6, &[0x000003C0]),
    (0x03F0, &[0x000003BA]),
    (0x03F1, &[0x000003C1]),
    (0x03F2, &[0x000003C2]),
    (0x03F4, &[0x00000398]),
    (0x03F5, &[0x000003B5]),
    (0x03F9, &[0x000003A3]),
    (0x0587, &[0x00000565, 0x00000582]),
    (0x0675, &[0x00000627, 0x00000674]),
    (0x0676, &[0x00000648, 0x00000674]),
    (0x0677, &[0x000006C7, 0x00000674]),
    (0x0678, &[0x0000064A, 0x00000674]),
    (0x0E33, &[0x00000E4D, 0x00000E32]),
    (0x0EB3, &[0x00000ECD, 0x00000EB2]),
    (0x0EDC, &[0x00000EAB, 0x00000E99]),
    (0x0EDD, &[0x00000EAB, 0x00000EA1]),
    (0x0F0C, &[0x00000F0B]),
    (0x0F77, &[0x00000FB2, 0x81000F71, 0x82000F80]),
    (0x0F79, &[0x00000FB3, 0x81000F71, 0x82000F80]),
    (0x10FC, &[0x000010DC]),
    (0x1D2C, &[0x00000041]),
    (0x1D2D, &[0x000000C6]),
    (0x1D2E, &[0x00000042]),
    (0x1D30, &[0x00000044]),
    (0x1D31, &[0x00000045]),
    (0x1D32, &[0x0000018E]),
    (0x1D33, &[0x00000047]),
    (0x1D34, &[0x00000048]),
    (0x1D35, &[0x00000049]),
    (0x1D36, &[0x0000004A]),
    (0x1D37, &[0x0000004B]),
    (0x1D38, &[0x0000004C]),
    (0x1D39, &[0x0000004D]),
    (0x1D3A, &[0x0000004E]),
    (0x1D3C, &[0x0000004F]),
    (0x1D3D, &[0x00000222]),
    (0x1D3E, &[0x00000050]),
    (0x1D3F, &[0x00000052]),
    (0x1D40, &[0x00000054]),
    (0x1D41, &[0x00000055]),
    (0x1D42, &[0x00000057]),
    (0x1D43, &[0x00000061]),
    (0x1D44, &[0x00000250]),
    (0x1D45, &[0x00000251]),
    (0x1D46, &[0x00001D02]),
    (0x1D47, &[0x00000062]),
    (0x1D48, &[0x00000064]),
    (0x1D49, &[0x00000065]),
    (0x1D4A, &[0x00000259]),
    (0x1D4B, &[0x0000025B]),
    (0x1D4C, &[0x0000025C]),
    (0x1D4D, &[0x00000067]),
    (0x1D4F, &[0x0000006B]),
    (0x1D50, &[0x0000006D]),
    (0x1D51, &[0x0000014B]),
    (0x1D52, &[0x0000006F]),
    (0x1D53, &[0x00000254]),
    (0x1D54, &[0x00001D16]),
    (0x1D55, &[0x00001D17]),
    (0x1D56, &[0x00000070]),
    (0x1D57, &[0x00000074]),
    (0x1D58, &[0x00000075]),
    (0x1D59, &[0x00001D1D]),
    (0x1D5A, &[0x0000026F]),
    (0x1D5B, &[0x00000076]),
    (0x1D5C, &[0x00001D25]),
    (0x1D5D, &[0x000003B2]),
    (0x1D5E, &[0x000003B3]),
    (0x1D5F, &[0x000003B4]),
    (0x1D60, &[0x000003C6]),
    (0x1D61, &[0x000003C7]),
    (0x1D62, &[0x00000069]),
    (0x1D63, &[0x00000072]),
    (0x1D64, &[0x00000075]),
    (0x1D65, &[0x00000076]),
    (0x1D66, &[0x000003B2]),
    (0x1D67, &[0x000003B3]),
    (0x1D68, &[0x000003C1]),
    (0x1D69, &[0x000003C6]),
    (0x1D6A, &[0x000003C7]),
    (0x1D78, &[0x0000043D]),
    (0x1D9B, &[0x00000252]),
    (0x1D9C, &[0x00000063]),
    (0x1D9D, &[0x00000255]),
    (0x1D9E, &[0x000000F0]),
    (0x1D9F, &[0x0000025C]),
    (0x1DA0, &[0x00000066]),
    (0x1DA1, &[0x0000025F]),
    (0x1DA2, &[0x00000261]),
    (0x1DA3, &[0x00000265]),
    (0x1DA4, &[0x00000268]),
    (0x1DA5, &[0x00000269]),
    (0x1DA6, &[0x0000026A]),
    (0x1DA7, &[0x00001D7B]),
    (0x1DA8, &[0x0000029D]),
    (0x1DA9, &[0x0000026D]),
    (0x1DAA, &[0x00001D85]),
    (0x1DAB, &[0x0000029F]),
    (0x1DAC, &[0x00000271]),
    (0x1DAD, &[0x00000270]),
    (0x1DAE, &[0x00000272]),
    (0x1DAF, &[0x00000273]),
    (0x1DB0, &[0x00000274]),
    (0x1DB1, &[0x00000275]),
    (0x1DB2, &[0x00000278]),
    (0x1DB3, &[0x00000282]),
    (0x1DB4, &[0x00000283]),
    (0x1DB5, &[0x000001AB]),
    (0x1DB6, &[0x00000289]),
    (0x1DB7, &[0x0000028A]),
    (0x1DB8, &[0x00001D1C]),
    (0x1DB9, &[0x0000028B]),
    (0x1DBA, &[0x0000028C]),
    (0x1DBB, &[0x0000007A]),
    (0x1DBC, &[0x00000290]),
    (0x1DBD, &[0x00000291]),
    (0x1DBE, &[0x00000292]),
    (0x1DBF, &[0x000003B8]),
    (0x1E9A, &[0x00000061, 0x000002BE]),
    (0x1E9B, &[0x00000073, 0xE6000307]),
    (0x1FBD, &[0x00000020, 0xE6000313]),
    (0x1FBF, &[0x00000020, 0xE6000313]),
    (0x1FC0, &[0x00000020, 0xE6000342]),
    (0x1FC1, &[0x00000020, 0xE6000308, 0xE6000342]),
    (0x1FCD, &[0x00000020, 0xE6000313, 0xE6000300]),
    (0x1FCE, &[0x00000020, 0xE6000313, 0xE6000301]),
    (0x1FCF, &[0x00000020, 0xE6000313, 0xE6000342]),
    (0x1FDD, &[0x00000020, 0xE6000314, 0xE6000300]),
    (0x1FDE, &[0x00000020, 0xE6000314, 0xE6000301]),
    (0x1FDF, &[0x00000020, 0xE6000314, 0xE6000342]),
    (0x1FED, &[0x00000020, 0xE6000308, 0xE6000300]),
    (0x1FEE, &[0x00000020, 0xE6000308, 0xE6000301]),
    (0x1FFD, &[0x00000020, 0xE6000301]),
    (0x1FFE, &[0x00000020, 0xE6000314]),
    (0x2000, &[0x00000020]),
    (0x2001, &[0x00000020]),
    (0x2002, &[0x00000020]),
    (0x2003, &[0x00000020]),
    (0x2004, &[0x00000020]),
    (0x2005, &[0x00000020]),
    (0x2006, &[0x00000020]),
    (0x2007, &[0x00000020]),
    (0x2008, &[0x00000020]),
    (0x2009, &[0x00000020]),
    (0x200A, &[0x00000020]),
    (0x2011, &[0x00002010]),
    (0x2017, &[0x00000020, 0xDC000333]),
    (0x2024, &[0x0000002E]),
    (0x2025, &[0x0000002E, 0x0000002E]),
    (0x2026, &[0x0000002E, 0x0000002E, 0x0000002E]),
    (0x202F, &[0x00000020]),
    (0x2033, &[0x00002032, 0x00002032]),
    (0x2034, &[0x00002032, 0x00002032, 0x00002032]),
    (0x2036, &[0x00002035, 0x00002035]),
    (0x2037, &[0x00002035, 0x00002035, 0x00002035]),
    (0x203C, &[0x00000021, 0x00000021]),
    (0x203E, &[0x00000020, 0xE6000305]),
    (0x2047, &[0x0000003F, 0x0000003F]),
    (0x2048, &[0x0000003F, 0x00000021]),
    (0x2049, &[0x00000021, 0x0000003F]),
    (0x2057, &[0x00002032, 0x00002032, 0x00002032, 0x00002032]),
    (0x205F, &[0x00000020]),
    (0x2070, &[0x00000030]),
    (0x2071, &[0x00000069]),
    (0x2074, &[0x00000034]),
    (0x2075, &[0x00000035]),
    (0x2076, &[0x00000036]),
    (0x2077, &[0x00000037]),
    (0x2078, &[0x00000038]),
    (0x2079, &[0x00000039]),
    (0x207A, &[0x0000002B]),
    (0x207B, &[0x00002212]),
    (0x207C, &[0x0000003D]),
    (0x207D, &[0x00000028]),
    (0x207E, &[0x00000029]),
    (0x207F, &[0x0000006E]),
    (0x2080, &[0x00000030]),
    (0x2081, &[0x00000031]),
    (0x2082, &[0x00000032]),
    (0x2083, &[0x00000033]),
    (0x2084, &[0x00000034]),
    (0x2085, &[0x00000035]),
    (0x2086, &[0x00000036]),
    (0x2087, &[0x00000037]),
    (0x2088, &[0x00000038]),
    (0x2089, &[0x00000039]),
    (0x208A, &[0x0000002B]),
    (0x208B, &[0x00002212]),
    (0x208C, &[0x0000003D]),
    (0x208D, &[0x00000028]),
    (0x208E, &[0x00000029]),
    (0x2090, &[0x00000061]),
    (0x2091, &[0x00000065]),
    (0x2092, &[0x0000006F]),
    (0x2093, &[0x00000078]),
    (0x2094, &[0x00000259]),
    (0x2095, &[0x00000068]),
    (0x2096, &[0x0000006B]),
    (0x2097, &[0x0000006C]),
    (0x2098, &[0x0000006D]),
    (0x2099, &[0x0000006E]),
    (0x209A, &[0x00000070]),
    (0x209B, &[0x00000073]),
    (0x209C, &[0x00000074]),
    (0x20A8, &[0x00000052, 0x00000073]),
    (0x2100, &[0x00000061, 0x0000002F, 0x00000063]),
    (0x2101, &[0x00000061, 0x0000002F, 0x00000073]),
    (0x2102, &[0x00000043]),
    (0x2103, &[0x000000B0, 0x00000043]),
    (0x2105, &[0x00000063, 0x0000002F, 0x0000006F]),
    (0x2106, &[0x00000063, 0x0000002F, 0x00000075]),
    (0x2107, &[0x00000190]),
    (0x2109, &[0x000000B0, 0x00000046]),
    (0x210A, &[0x00000067]),
    (0x210B, &[0x00000048]),
    (0x210C, &[0x00000048]),
    (0x210D, &[0x00000048]),
    (0x210E, &[0x00000068]),
    (0x210F, &[0x00000127]),
    (0x2110, &[0x00000049]),
    (0x2111, &[0x00000049]),
    (0x2112, &[0x0000004C]),
    (0x2113, &[0x0000006C]),
    (0x2115, &[0x0000004E]),
    (0x2116, &[0x0000004E, 0x0000006F]),
    (0x2119, &[0x00000050]),
    (0x211A, &[0x00000051]),
    (0x211B, &[0x00000052]),
    (0x211C, &[0x00000052]),
    (0x211D, &[0x00000052]),
    (0x2120, &[0x00000053, 0x0000004D]),
    (0x2121, &[0x00000054, 0x00000045, 0x0000004C]),
    (0x2122, &[0x00000054, 0x0000004D]),
    (0x2124, &[0x0000005A]),
    (0x2128, &[0x0000005A]),
    (0x212C, &[0x00000042]),
    (0x212D, &[0x00000043]),
    (0x212F, &[0x00000065]),
    (0x2130, &[0x00000045]),
    (0x2131, &[0x00000046]),
    (0x2133, &[0x0000004D]),
    (0x2134, &[0x0000006F]),
    (0x2135, &[0x000005D0]),
    (0x2136, &[0x000005D1]),
    (0x2137, &[0x000005D2]),
    (0x2138, &[0x000005D3]),
    (0x2139, &[0x00000069]),
    (0x213B, &[0x00000046, 0x00000041, 0x00000058]),
    (0x213C, &[0x000003C0]),
    (0x213D, &[0x000003B3]),
    (0x213E, &[0x00000393]),
    (0x213F, &[0x000003A0]),
    (0x2140, &[0x00002211]),
    (0x2145, &[0x00000044]),
    (0x2146, &[0x00000064]),
    (0x2147, &[0x00000065]),
    (0x2148, &[0x00000069]),
    (0x2149, &[0x0000006A]),
    (0x2150, &[0x00000031, 0x00002044, 0x00000037]),
    (0x2151, &[0x00000031, 0x00002044, 0x00000039]),
    (0x2152, &[0x00000031, 0x00002044, 0x00000031, 0x00000030]),
    (0x2153, &[0x00000031, 0x00002044, 0x00000033]),
    (0x2154, &[0x00000032, 0x00002044, 0x00000033]),
    (0x2155, &[0x00000031, 0x00002044, 0x00000035]),
    (0x2156, &[0x00000032, 0x00002044, 0x00000035]),
    (0x2157, &[0x00000033, 0x00002044, 0x00000035]),
    (0x2158, &[0x00000034, 0x00002044, 0x00000035]),
    (0x2159, &[0x00000031, 0x00002044, 0x00000036]),
    (0x215A, &[0x00000035, 0x00002044, 0x00000036]),
    (0x215B, &[0x00000031, 0x00002044, 0x00000038]),
    (0x215C, &[0x00000033, 0x00002044, 0x00000038]),
    (0x215D, &[0x00000035, 0x00002044, 0x00000038]),
    (0x215E, &[0x00000037, 0x00002044, 0x00000038]),
    (0x215F, &[0x00000031, 0x00002044]),
    (0x2160, &[0x00000049]),
    (0x2161, &[0x00000049, 0x00000049]),
    (0x2162, &[0x00000049, 0x00000049, 0x00000049]),
    (0x2163, &[0x00000049, 0x00000056]),
    (0x2164, &[0x00000056]),
    (0x2165, &[0x00000056, 0x00000049]),
    (0x2166, &[0x00000056, 0x00000049, 0x00000049]),
    (0x2167, &[0x00000056, 0x00000049, 0x00000049, 0x00000049]),
    (0x2168, &[0x00000049, 0x00000058]),
    (0x2169, &[0x00000058]),
    (0x216A, &[0x00000058, 0x00000049]),
    (0x216B, &[0x00000058, 0x00000049, 0x00000049]),
    (0x216C, &[0x0000004C]),
    (0x216D, &[0x00000043]),
    (0x216E, &[0x00000044]),
    (0x216F, &[0x0000004D]),
    (0x2170, &[0x00000069]),
    (0x2171, &[0x00000069, 0x00000069]),
    (0x2172, &[0x00000069, 0x00000069, 0x00000069]),
    (0x2173, &[0x00000069, 0x00000076]),
    (0x2174, &[0x00000076]),
    (0x2175, &[0x00000076, 0x00000069]),
    (0x2176, &[0x00000076, 0x00000069, 0x00000069]),
    (0x2177, &[0x00000076, 0x00000069, 0x00000069, 0x00000069]),
    (0x2178, &[0x00000069, 0x00000078]),
    (0x2179, &[0x00000078]),
    (0x217A, &[0x00000078, 0x00000069]),
    (0x217B, &[0x00000078, 0x00000069, 0x00000069]),
    (0x217C, &[0x0000006C]),
    (0x217D, &[0x00000063]),
    (0x217E, &[0x00000064]),
    (0x217F, &[0x0000006D]),
    (0x2189, &[0x00000030, 0x00002044, 0x00000033]),
    (0x222C, &[0x0000222B, 0x0000222B]),
    (0x222D, &[0x0000222B, 0x0000222B, 0x0000222B]),
    (0x222F, &[0x0000222E, 0x0000222E]),
    (0x2230, &[0x0000222E, 0x0000222E, 0x0000222E]),
    (0x2460, &[0x00000031]),
    (0x2461, &[0x00000032]),
    (0x2462, &[0x00000033]),
    (0x2463, &[0x00000034]),
    (0x2464, &[0x00000035]),
    (0x2465, &[0x00000036]),
    (0x2466, &[0x00000037]),
    (0x2467, &[0x00000038]),
    (0x2468, &[0x00000039]),
    (0x2469, &[0x00000031, 0x00000030]),
    (0x246A, &[0x00000031, 0x00000031]),
    (0x246B, &[0x00000031, 0x00000032]),
    (0x246C, &[0x00000031, 0x00000033]),
    (0x246D, &[0x00000031, 0x00000034]),
    (0x246E, &[0x00000031, 0x00000035]),
    (0x246F, &[0x00000031, 0x00000036]),
    (0x2470, &[0x00000031, 0x00000037]),
    (0x2471, &[0x00000031, 0x00000038]),
    (0x2472, &[0x00000031, 0x00000039]),
    (0x2473, &[0x00000032, 0x00000030]),
    (0x2474, &[0x00000028, 0x00000031, 0x00000029]),
    (0x2475, &[0x00000028, 0x00000032, 0x00000029]),
    (0x2476, &[0x00000028, 0x00000033, 0x00000029]),
    (0x2477, &[0x00000028, 0x00000034, 0x00000029]),
    (0x2478, &[0x00000028, 0x00000035, 0x00000029]),
    (0x2479, &[0x00000028, 0x00000036, 0x00000029]),
    (0x247A, &[0x00000028, 0x00000037, 0x00000029]),
    (0x247B, &[0x00000028, 0x00000038, 0x00000029]),
    (0x247C, &[0x00000028, 0x00000039, 0x00000029]),
    (0x247D, &[0x00000028, 0x00000031, 0x00000030, 0x00000029]),
    (0x247E, &[0x00000028, 0x00000031, 0x00000031, 0x00000029]),
    (0x247F, &[0x00000028, 0x00000031, 0x00000032, 0x00000029]),
    (0x2480, &[0x00000028, 0x00000031, 0x00000033, 0x00000029]),
    (0x2481, &[0x00000028, 0x00000031, 0x00000034, 0x00000029]),
    (0x2482, &[0x00000028, 0x00000031, 0x00000035, 0x00000029]),
    (0x2483, &[0x00000028, 0x00000031, 0x00000036, 0x00000029]),
    (0x2484, &[0x00000028, 0x00000031, 0x00000037, 0x00000029]),
    (0x2485, &[0x00000028, 0x00000031, 0x00000038, 0x00000029]),
    (0x2486, &[0x00000028, 0x00000031, 0x00000039, 0x00000029]),
    (0x2487, &[0x00000028, 0x00000032, 0x00000030, 0x00000029]),
    (0x2488, &[0x00000031, 0x0000002E]),
    (0x2489, &[0x00000032, 0x0000002E]),
    (0x248A, &[0x00000033, 0x0000002E]),
    (0x248B, &[0x00000034, 0x0000002E]),
    (0x248C, &[0x00000035, 0x0000002E]),
    (0x248D, &[0x00000036, 0x0000002E]),
    (0x248E, &[0x00000037, 0x0000002E]),
    (0x248F, &[0x00000038, 0x0000002E]),
    (0x2490, &[0x00000039, 0x0000002E]),
    (0x2491, &[0x00000031, 0x00000030, 0x0000002E]),
    (0x2492, &[0x00000031, 0x00000031, 0x0000002E]),
    (0x2493, &[0x00000031, 0x00000032, 0x0000002E]),
    (0x2494, &[0x00000031, 0x00000033, 0x0000002E]),
    (0x2495, &[0x00000031, 0x00000034, 0x0000002E]),
    (0x2496, &[0x00000031, 0x00000035, 0x0000002E]),
    (0x2497, &[0x00000031, 0x00000036, 0x0000002E]),
    (0x2498, &[0x00000031, 0x00000037, 0x0000002E]),
    (0x2499, &[0x00000031, 0x00000038, 0x0000002E]),
    (0x249A, &[0x00000031, 0x00000039, 0x0000002E]),
    (0x249B, &[0x00000032, 0x00000030, 0x0000002E]),
    (0x249C, &[0x00000028, 0x00000061, 0x00000029]),
    (0x249D, &[0x00000028, 0x00000062, 0x00000029]),
    (0x249E, &[0x00000028, 0x00000063, 0x00000029]),
    (0x249F, &[0x00000028, 0x00000064, 0x00000029]),
    (0x24A0, &[0x00000028, 0x00000065, 0x00000029]),
    (0x24A1, &[0x00000028, 0x00000066, 0x00000029]),
    (0x24A2, &[0x00000028, 0x00000067, 0x00000029]),
    (0x24A3, &[0x00000028, 0x00000068, 0x00000029]),
    (0x24A4, &[0x00000028, 0x00000069, 0x00000029]),
    (0x24A5, &[0x00000028, 0x0000006A, 0x00000029]),
    (0x24A6, &[0x00000028, 0x0000006B, 0x00000029]),
    (0x24A7, &[0x00000028, 0x0000006C, 0x00000029]),
    (0x24A8, &[0x00000028, 0x0000006D, 0x00000029]),
    (0x24A9, &[0x00000028, 0x0000006E, 0x00000029]),
    (0x24AA, &[0x00000028, 0x0000006F, 0x00000029]),
    (0x24AB, &[0x00000028, 0x00000070, 0x00000029]),
    (0x24AC, &[0x00000028, 0x00000071, 0x00000029]),
    (0x24AD, &[0x00000028, 0x00000072, 0x00000029]),
    (0x24AE, &[0x00000028, 0x00000073, 0x00000029]),
    (0x24AF, &[0x00000028, 0x00000074, 0x00000029]),
    (0x24B0, &[0x00000028, 0x00000075, 0x00000029]),
    (0x24B1, &[0x00000028, 0x00000076, 0x00000029]),
    (0x24B2, &[0x00000028, 0x00000077, 0x00000029]),
    (0x24B3, &[0x00000028, 0x00000078, 0x00000029]),
    (0x24B4, &[0x00000028, 0x00000079, 0x00000029]),
    (0x24B5, &[0x00000028, 0x0000007A, 0x00000029]),
    (0x24B6, &[0x00000041]),
    (0x24B7, &[0x00000042]),
    (0x24B8, &[0x00000043]),
    (0x24B9, &[0x00000044]),
    (0x24BA, &[0x00000045]),
    (0x24BB, &[0x00000046]),
    (0x24BC, &[0x00000047]),
    (0x24BD, &[0x00000048]),
    (0x24BE, &[0x00000049]),
    (0x24BF, &[0x0000004A]),
    (0x24C0, &[0x0000004B]),
    (0x24C1, &[0x0000004C]),
    (0x24C2, &[0x0000004D]),
    (0x24C3, &[0x0000004E]),
    (0x24C4, &[0x0000004F]),
    (0x24C5, &[0x00000050]),
    (0x24C6, &[0x00000051]),
    (0x24C7, &[0x00000052]),
    (0x24C8, &[0x00000053]),
    (0x24C9, &[0x00000054]),
    (0x24CA, &[0x00000055]),
    (0x24CB, &[0x00000056]),
    (0x24CC, &[0x00000057]),
    (0x24CD, &[0x00000058]),
    (0x24CE, &[0x00000059]),
    (0x24CF, &[0x0000005A]),
    (0x24D0, &[0x00000061]),
    (0x24D1, &[0x00000062]),
    (0x24D2, &[0x00000063]),
    (0x24D3, &[0x00000064]),
    (0x24D4, &[0x00000065]),
    (0x24D5, &[0x00000066]),
    (0x24D6, &[0x00000067]),
    (0x24D7, &[0x00000068]),
    (0x24D8, &[0x00000069]),
    (0x24D9, &[0x0000006A]),
    (0x24DA, &[0x0000006B]),
    (0x24DB, &[0x0000006C]),
    (0x24DC, &[0x0000006D]),
    (0x24DD, &[0x0000006E]),
    (0x24DE, &[0x0000006F]),
    (0x24DF, &[0x00000070]),
    (0x24E0, &[0x00000071]),
    (0x24E1, &[0x00000072]),
    (0x24E2, &[0x00000073]),
    (0x24E3, &[0x00000074]),
    (0x24E4, &[0x00000075]),
    (0x24E5, &[0x00000076]),
    (0x24E6, &[0x00000077]),
    (0x24E7, &[0x00000078]),
    (0x24E8, &[0x00000079]),
    (0x24E9, &[0x0000007A]),
    (0x24EA, &[0x00000030]),
    (0x2A0C, &[0x0000222B, 0x0000222B, 0x0000222B, 0x0000222B]),
    (0x2A74, &[0x0000003A, 0x0000003A, 0x0000003D]),
    (0x2A75, &[0x0000003D, 0x0000003D]),
    (0x2A76, &[0x0000003D, 0x0000003D, 0x0000003D]),
    (0x2C7C, &[0x0000006A]),
    (0x2C7D, &[0x00000056]),
    (0x2D6F, &[0x00002D61]),
    (0x2E9F, &[0x00006BCD]),
    (0x2EF3, &[0x00009F9F]),
    (0x2F00, &[0x00004E00]),
    (0x2F01, &[0x00004E28]),
    (0x2F02, &[0x00004E36]),
    (0x2F03, &[0x00004E3F]),
    (0x2F04, &[0x00004E59]),
    (0x2F05, &[0x00004E85]),
    (0x2F06, &[0x00004E8C]),
    (0x2F07, &[0x00004EA0]),
    (0x2F08, &[0x00004EBA]),
    (0x2F09, &[0x0000513F]),
    (0x2F0A, &[0x00005165]),
    (0x2F0B, &[0x0000516B]),
    (0x2F0C, &[0x00005182]),
    (0x2F0D, &[0x00005196]),
    (0x2F0E, &[0x000051AB]),
    (0x2F0F, &[0x000051E0]),
    (0x2F10, &[0x000051F5]),
    (0x2F11, &[0x00005200]),
    (0x2F12, &[0x0000529B]),
    (0x2F13, &[0x000052F9]),
    (0x2F14, &[0x00005315]),
    (0x2F15, &[0x0000531A]),
    (0x2F16, &[0x00005338]),
    (0x2F17, &[0x00005341]),
    (0x2F18, &[0x0000535C]),
    (0x2F19, &[0x00005369]),
    (0x2F1A, &[0x00005382]),
    (0x2F1B, &[0x000053B6]),
    (0x2F1C, &[0x000053C8]),
    (0x2F1D, &[0x000053E3]),
    (0x2F1E, &[0x000056D7]),
    (0x2F1F, &[0x0000571F]),
    (0x2F20, &[0x000058EB]),
    (0x2F21, &[0x00005902]),
    (0x2F22, &[0x0000590A]),
    (0x2F23, &[0x00005915]),
    (0x2F24, &[0x00005927]),
    (0x2F25, &[0x00005973]),
    (0x2F26, &[0x00005B50]),
    (0x2F27, &[0x00005B80]),
    (0x2F28, &[0x00005BF8]),
    (0x2F29, &[0x00005C0F]),
    (0x2F2A, &[0x00005C22]),
    (0x2F2B, &[0x00005C38]),
    (0x2F2C, &[0x00005C6E]),
    (0x2F2D, &[0x00005C71]),
    (0x2F2E, &[0x00005DDB]),
    (0x2F2F, &[0x00005DE5]),
    (0x2F30, &[0x00005DF1]),
    (0x2F31, &[0x00005DFE]),
    (0x2F32, &[0x00005E72]),
    (0x2F33, &[0x00005E7A]),
    (0x2F34, &[0x00005E7F]),
    (0x2F35, &[0x00005EF4]),
    (0x2F36, &[0x00005EFE]),
    (0x2F37, &[0x00005F0B]),
    (0x2F38, &[0x00005F13]),
    (0x2F39, &[0x00005F50]),
    (0x2F3A, &[0x00005F61]),
    (0x2F3B, &[0x00005F73]),
    (0x2F3C, &[0x00005FC3]),
    (0x2F3D, &[0x00006208]),
    (0x2F3E, &[0x00006236]),
    (0x2F3F, &[0x0000624B]),
    (0x2F40, &[0x0000652F]),
    (0x2F41, &[0x00006534]),
    (0x2F42, &[0x00006587]),
    (0x2F43, &[0x00006597]),
    (0x2F44, &[0x000065A4]),
    (0x2F45, &[0x000065B9]),
    (0x2F46, &[0x000065E0]),
    (0x2F47, &[0x000065E5]),
    (0x2F48, &[0x000066F0]),
    (0x2F49, &[0x00006708]),
    (0x2F4A, &[0x00006728]),
    (0x2F4B, &[0x00006B20]),
    (0x2F4C, &[0x00006B62]),
    (0x2F4D, &[0x00006B79]),
    (0x2F4E, &[0x00006BB3]),
    (0x2F4F, &[0x00006BCB]),
    (0x2F50, &[0x00006BD4]),
    (0x2F51, &[0x00006BDB]),
    (0x2F52, &[0x00006C0F]),
    (0x2F53, &[0x00006C14]),
    (0x2F54, &[0x00006C34]),
    (0x2F55, &[0x0000706B]),
    (0x2F56, &[0x0000722A]),
    (0x2F57, &[0x00007236]),
    (0x2F58, &[0x0000723B]),
    (0x2F59, &[0x0000723F]),
    (0x2F5A, &[0x00007247]),
    (0x2F5B, &[0x00007259]),
    (0x2F5C, &[0x0000725B]),
    (0x2F5D, &[0x000072AC]),
    (0x2F5E, &[0x00007384]),
    (0x2F5F, &[0x00007389]),
    (0x2F60, &[0x000074DC]),
    (0x2F61, &[0x000074E6]),
    (0x2F62, &[0x00007518]),
    (0x2F63, &[0x0000751F]),
    (0x2F64, &[0x00007528]),
    (0x2F65, &[0x00007530]),
    (0x2F66, &[0x0000758B]),
    (0x2F67, &[0x00007592]),
    (0x2F68, &[0x00007676]),
    (0x2F69, &[0x0000767D]),
    (0x2F6A, &[0x000076AE]),
    (0x2F6B, &[0x000076BF]),
    (0x2F6C, &[0x000076EE]),
    (0x2F6D, &[0x000077DB]),
    (0x2F6E, &[0x000077E2]),
    (0x2F6F, &[0x000077F3]),
    (0x2F70, &[0x0000793A]),
    (0x2F71, &[0x000079B8]),
    (0x2F72, &[0x000079BE]),
    (0x2F73, &[0x00007A74]),
    (0x2F74, &[0x00007ACB]),
    (0x2F75, &[0x00007AF9]),
    (0x2F76, &[0x00007C73]),
    (0x2F77, &[0x00007CF8]),
    (0x2F78, &[0x00007F36]),
    (0x2F79, &[0x00007F51]),
    (0x2F7A, &[0x00007F8A]),
    (0x2F7B, &[0x00007FBD]),
    (0x2F7C, &[0x00008001]),
    (0x2F7D, &[0x0000800C]),
    (0x2F7E, &[0x00008012]),
    (0x2F7F, &[0x00008033]),
    (0x2F80, &[0x0000807F]),
    (0x2F81, &[0x00008089]),
    (0x2F82, &[0x000081E3]),
    (0x2F83, &[0x000081EA]),
    (0x2F84, &[0x000081F3]),
    (0x2F85, &[0x000081FC]),
    (0x2F86, &[0x0000820C]),
    (0x2F87, &[0x0000821B]),
    (0x2F88, &[0x0000821F]),
    (0x2F89, &[0x0000826E]),
    (0x2F8A, &[0x00008272]),
    (0x2F8B, &[0x00008278]),
    (0x2F8C, &[0x0000864D]),
    (0x2F8D, &[0x0000866B]),
    (0x2F8E, &[0x00008840]),
    (0x2F8F, &[0x0000884C]),
    (0x2F90, &[0x00008863]),
    (0x2F91, &[0x0000897E]),
    (0x2F92, &[0x0000898B]),
    (0x2F93, &[0x000089D2]),
    (0x2F94, &[0x00008A00]),
    (0x2F95, &[0x00008C37]),
    (0x2F96, &[0x00008C46]),
    (0x2F97, &[0x00008C55]),
    (0x2F98, &[0x00008C78]),
    (0x2F99, &[0x00008C9D]),
    (0x2F9A, &[0x00008D64]),
    (0x2F9B, &[0x00008D70]),
    (0x2F9C, &[0x00008DB3]),
    (0x2F9D, &[0x00008EAB]),
    (0x2F9E, &[0x00008ECA]),
    (0x2F9F, &[0x00008F9B]),
    (0x2FA0, &[0x00008FB0]),
    (0x2FA1, &[0x00008FB5]),
    (0x2FA2, &[0x00009091]),
    (0x2FA3, &[0x00009149]),
    (0x2FA4, &[0x000091C6]),
    (0x2FA5, &[0x000091CC]),
    (0x2FA6, &[0x000091D1]),
    (0x2FA7, &[0x00009577]),
    (0x2FA8, &[0x00009580]),
    (0x2FA9, &[0x0000961C]),
    (0x2FAA, &[0x000096B6]),
    (0x2FAB, &[0x000096B9]),
    (0x2FAC, &[0x000096E8]),
    (0x2FAD, &[0x00009751]),
    (0x2FAE, &[0x0000975E]),
    (0x2FAF, &[0x00009762]),
    (0x2FB0, &[0x00009769]),
    (0x2FB1, &[0x000097CB]),
    (0x2FB2, &[0x000097ED]),
    (0x2FB3, &[0x000097F3]),
    (0x2FB4, &[0x00009801]),
    (0x2FB5, &[0x000098A8]),
    (0x2FB6, &[0x000098DB]),
    (0x2FB7, &[0x000098DF]),
    (0x2FB8, &[0x00009996]),
    (0x2FB9, &[0x00009999]),
    (0x2FBA, &[0x000099AC]),
    (0x2FBB, &[0x00009AA8]),
    (0x2FBC, &[0x00009AD8]),
    (0x2FBD, &[0x00009ADF]),
    (0x2FBE, &[0x00009B25]),
    (0x2FBF, &[0x00009B2F]),
    (0x2FC0, &[0x00009B32]),
    (0x2FC1, &[0x00009B3C]),
    (0x2FC2, &[0x00009B5A]),
    (0x2FC3, &[0x00009CE5]),
    (0x2FC4, &[0x00009E75]),
    (0x2FC5, &[0x00009E7F]),
    (0x2FC6, &[0x00009EA5]),
    (0x2FC7, &[0x00009EBB]),
    (0x2FC8, &[0x00009EC3]),
    (0x2FC9, &[0x00009ECD]),
    (0x2FCA, &[0x00009ED1]),
    (0x2FCB, &[0x00009EF9]),
    (0x2FCC, &[0x00009EFD]),
    (0x2FCD, &[0x00009F0E]),
    (0x2FCE, &[0x00009F13]),
    (0x2FCF, &[0x00009F20]),
    (0x2FD0, &[0x00009F3B]),
    (0x2FD1, &[0x00009F4A]),
    (0x2FD2, &[0x00009F52]),
    (0x2FD3, &[0x00009F8D]),
    (0x2FD4, &[0x00009F9C]),
    (0x2FD5, &[0x00009FA0]),
    (0x3000, &[0x00000020]),
    (0x3036, &[0x00003012]),
    (0x3038, &[0x00005341]),
    (0x3039, &[0x00005344]),
    (0x303A, &[0x00005345]),
    (0x309B, &[0x00000020, 0x08003099]),
    (0x309C, &[0x00000020, 0x0800309A]),
    (0x309F, &[0x00003088, 0x0000308A]),
    (0x30FF, &[0x000030B3, 0x000030C8]),
    (0x3131, &[0x00001100]),
    (0x3132, &[0x00001101]),
    (0x3133, &[0x000011AA]),
    (0x3134, &[0x00001102]),
    (0x3135, &[0x000011AC]),
    (0x3136, &[0x000011AD]),
    (0x3137, &[0x00001103]),
    (0x3138, &[0x00001104]),
    (0x3139, &[0x00001105]),
    (0x313A, &[0x000011B0]),
    (0x313B, &[0x000011B1]),
    (0x313C, &[0x000011B2]),
    (0x313D, &[0x000011B3]),
    (0x313E, &[0x000011B4]),
    (0x313F, &[0x000011B5]),
    (0x3140, &[0x0000111A]),
    (0x3141, &[0x00001106]),
    (0x3142, &[0x00001107]),
    (0x3143, &[0x00001108]),
    (0x3144, &[0x00001121]),
    (0x3145, &[0x00001109]),
    (0x3146, &[0x0000110A]),
    (0x3147, &[0x0000110B]),
    (0x3148, &[0x0000110C]),
    (0x3149, &[0x0000110D]),
    (0x314A, &[0x0000110E]),
    (0x314B, &[0x0000110F]),
    (0x314C, &[0x00001110]),
    (0x314D, &[0x00001111]),
    (0x314E, &[0x00001112]),
    (0x314F, &[0x00001161]),
    (0x3150, &[0x00001162]),
    (0x3151, &[0x00001163]),
    (0x3152, &[0x00001164]),
    (0x3153, &[0x00001165]),
    (0x3154, &[0x00001166]),
    (0x3155, &[0x00001167]),
    (0x3156, &[0x00001168]),
    (0x3157, &[0x00001169]),
    (0x3158, &[0x0000116A]),
    (0x3159, &[0x0000116B]),
    (0x315A, &[0x0000116C]),
    (0x315B, &[0x0000116D]),
    (0x315C, &[0x0000116E]),
    (0x315D, &[0x0000116F]),
    (0x315E, &[0x00001170]),
    (0x315F, &[0x00001171]),
    (0x3160, &[0x00001172]),
    (0x3161, &[0x00001173]),
    (0x3162, &[0x00001174]),
    (0x3163, &[0x00001175]),
    (0x3164, &[0x00001160]),
    (0x3165, &[0x00001114]),
    (0x3166, &[0x00001115]),
    (0x3167, &[0x000011C7]),
    (0x3168, &[0x000011C8]),
    (0x3169, &[0x000011CC]),
    (0x316A, &[0x000011CE]),
    (0x316B, &[0x000011D3]),
    (0x316C, &[0x000011D7]),
    (0x316D, &[0x000011D9]),
    (0x316E, &[0x0000111C]),
    (0x316F, &[0x000011DD]),
    (0x3170, &[0x000011DF]),
    (0x3171, &[0x0000111D]),
    (0x3172, &[0x0000111E]),
    (0x3173, &[0x00001120]),
    (0x3174, &[0x00001122]),
    (0x3175, &[0x00001123]),
    (0x3176, &[0x00001127]),
    (0x3177, &[0x00001129]),
    (0x3178, &[0x0000112B]),
    (0x3179, &[0x0000112C]),
    (0x317A, &[0x0000112D]),
    (0x317B, &[0x0000112E]),
    (0x317C, &[0x0000112F]),
    (0x317D, &[0x00001132]),
    (0x317E, &[0x00001136]),
    (0x317F, &[0x00001140]),
    (0x3180, &[0x00001147]),
    (0x3181, &[0x0000114C]),
    (0x3182, &[0x000011F1]),
    (0x3183, &[0x000011F2]),
    (0x3184, &[0x00001157]),
    (0x3185, &[0x00001158]),
    (0x3186, &[0x00001159]),
    (0x3187, &[0x00001184]),
    (0x3188, &[0x00001185]),
    (0x3189, &[0x00001188]),
    (0x318A, &[0x00001191]),
    (0x318B, &[0x00001192]),
    (0x318C, &[0x00001194]),
    (0x318D, &[0x0000119E]),
    (0x318E, &[0x000011A1]),
    (0x3192, &[0x00004E00]),
    (0x3193, &[0x00004E8C]),
    (0x3194, &[0x00004E09]),
    (0x3195, &[0x000056DB]),
    (0x3196, &[0x00004E0A]),
    (0x3197, &[0x00004E2D]),
    (0x3198, &[0x00004E0B]),
    (0x3199, &[0x00007532]),
    (0x319A, &[0x00004E59]),
    (0x319B, &[0x00004E19]),
    (0x319C, &[0x00004E01]),
    (0x319D, &[0x00005929]),
    (0x319E, &[0x00005730]),
    (0x319F, &[0x00004EBA]),
    (0x3200, &[0x00000028, 0x00001100, 0x00000029]),
    (0x3201, &[0x00000028, 0x00001102, 0x00000029]),
    (0x3202, &[0x00000028, 0x00001103, 0x00000029]),
    (0x3203, &[0x00000028, 0x00001105, 0x00000029]),
    (0x3204, &[0x00000028, 0x00001106, 0x00000029]),
    (0x3205, &[0x00000028, 0x00001107, 0x00000029]),
    (0x3206, &[0x00000028, 0x00001109, 0x00000029]),
    (0x3207, &[0x00000028, 0x0000110B, 0x00000029]),
    (0x3208, &[0x00000028, 0x0000110C, 0x00000029]),
    (0x3209, &[0x00000028, 0x0000110E, 0x00000029]),
    (0x320A, &[0x00000028, 0x0000110F, 0x00000029]),
    (0x320B, &[0x00000028, 0x00001110, 0x00000029]),
    (0x320C, &[0x00000028, 0x00001111, 0x00000029]),
    (0x320D, &[0x00000028, 0x00001112, 0x00000029]),
    (0x320E, &[0x00000028, 0x00001100, 0x00001161, 0x00000029]),
    (0x320F, &[0x00000028, 0x00001102, 0x00001161, 0x00000029]),
    (0x3210, &[0x00000028, 0x00001103, 0x00001161, 0x00000029]),
    (0x3211, &[0x00000028, 0x00001105, 0x00001161, 0x00000029]),
    (0x3212, &[0x00000028, 0x00001106, 0x00001161, 0x00000029]),
    (0x3213, &[0x00000028, 0x00001107, 0x00001161, 0x00000029]),
    (0x3214, &[0x00000028, 0x00001109, 0x00001161, 0x00000029]),
    (0x3215, &[0x00000028, 0x0000110B, 0x00001161, 0x00000029]),
    (0x3216, &[0x00000028, 0x0000110C, 0x00001161, 0x00000029]),
    (0x3217, &[0x00000028, 0x0000110E, 0x00001161, 0x00000029]),
    (0x3218, &[0x00000028, 0x0000110F, 0x00001161, 0x00000029]),
    (0x3219, &[0x00000028, 0x00001110, 0x00001161, 0x00000029]),
    (0x321A, &[0x00000028, 0x00001111, 0x00001161, 0x00000029]),
    (0x321B, &[0x00000028, 0x00001112, 0x00001161, 0x00000029]),
    (0x321C, &[0x00000028, 0x0000110C, 0x0000116E, 0x00000029]),
    (0x321D, &[0x00000028, 0x0000110B, 0x00001169, 0x0000110C, 0x00001165, 0x000011AB, 0x00000029]),
    (0x321E, &[0x00000028, 0x0000110B, 0x00001169, 0x00001112, 0x0000116E, 0x00000029]),
    (0x3220, &[0x00000028, 0x00004E00, 0x00000029]),
    (0x3221, &[0x00000028, 0x00004E8C, 0x00000029]),
    (0x3222, &[0x00000028, 0x00004E09, 0x00000029]),
    (0x3223, &[0x00000028, 0x000056DB, 0x00000029]),
    (0x3224, &[0x00000028, 0x00004E94, 0x00000029]),
    (0x3225, &[0x00000028, 0x0000516D, 0x00000029]),
    (0x3226, &[0x00000028, 0x00004E03, 0x00000029]),
    (0x3227, &[0x00000028, 0x0000516B, 0x00000029]),
    (0x3228, &[0x00000028, 0x00004E5D, 0x00000029]),
    (0x3229, &[0x00000028, 0x00005341, 0x00000029]),
    (0x322A, &[0x00000028, 0x00006708, 0x00000029]),
    (0x322B, &[0x00000028, 0x0000706B, 0x00000029]),
    (0x322C, &[0x00000028, 0x00006C34, 0x00000029]),
    (0x322D, &[0x00000028, 0x00006728, 0x00000029]),
    (0x322E, &[0x00000028, 0x000091D1, 0x00000029]),
    (0x322F, &[0x00000028, 0x0000571F, 0x00000029]),
    (0x3230, &[0x00000028, 0x000065E5, 0x00000029]),
    (0x3231, &[0x00000028, 0x0000682A, 0x00000029]),
    (0x3232, &[0x00000028, 0x00006709, 0x00000029]),
    (0x3233, &[0x00000028, 0x0000793E, 0x00000029]),
    (0x3234, &[0x00000028, 0x0000540D, 0x00000029]),
    (0x3235, &[0x00000028, 0x00007279, 0x00000029]),
    (0x3236, &[0x00000028, 0x00008CA1, 0x00000029]),
    (0x3237, &[0x00000028, 0x0000795D, 0x00000029]),
    (0x3238, &[0x00000028, 0x000052B4, 0x00000029]),
    (0x3239, &[0x00000028, 0x00004EE3, 0x00000029]),
    (0x323A, &[0x00000028, 0x0000547C, 0x00000029]),
    (0x323B, &[0x00000028, 0x00005B66, 0x00000029]),
    (0x323C, &[0x00000028, 0x000076E3, 0x00000029]),
    (0x323D, &[0x00000028, 0x00004F01, 0x00000029]),
    (0x323E, &[0x00000028, 0x00008CC7, 0x00000029]),
    (0x323F, &[0x00000028, 0x00005354, 0x00000029]),
    (0x3240, &[0x00000028, 0x0000796D, 0x00000029]),
    (0x3241, &[0x00000028, 0x00004F11, 0x00000029]),
    (0x3242, &[0x00000028, 0x000081EA, 0x00000029]),
    (0x3243, &[0x00000028, 0x000081F3, 0x00000029]),
    (0x3244, &[0x0000554F]),
    (0x3245, &[0x00005E7C]),
    (0x3246, &[0x00006587]),
    (0x3247, &[0x00007B8F]),
    (0x3250, &[0x00000050, 0x00000054, 0x00000045]),
    (0x3251, &[0x00000032, 0x00000031]),
    (0x3252, &[0x00000032, 0x00000032]),
    (0x3253, &[0x00000032, 0x00000033]),
    (0x3254, &[0x00000032, 0x00000034]),
    (0x3255, &[0x00000032, 0x00000035]),
    (0x3256, &[0x00000032, 0x00000036]),
    (0x3257, &[0x00000032, 0x00000037]),
    (0x3258, &[0x00000032, 0x00000038]),
    (0x3259, &[0x00000032, 0x00000039]),
    (0x325A, &[0x00000033, 0x00000030]),
    (0x325B, &[0x00000033, 0x00000031]),
    (0x325C, &[0x00000033, 0x00000032]),
    (0x325D, &[0x00000033, 0x00000033]),
    (0x325E, &[0x00000033, 0x00000034]),
    (0x325F, &[0x00000033, 0x00000035]),
    (0x3260, &[0x00001100]),
    (0x3261, &[0x00001102]),
    (0x3262, &[0x00001103]),
    (0x3263, &[0x00001105]),
    (0x3264, &[0x00001106]),
    (0x3265, &[0x00001107]),
    (0x3266, &[0x00001109]),
    (0x3267, &[0x0000110B]),
    (0x3268, &[0x0000110C]),
    (0x3269, &[0x0000110E]),
    (0x326A, &[0x0000110F]),
    (0x326B, &[0x00001110]),
    (0x326C, &[0x00001111]),
    (0x326D, &[0x00001112]),
    (0x326E, &[0x00001100, 0x00001161]),
    (0x326F, &[0x00001102, 0x00001161]),
    (0x3270, &[0x00001103, 0x00001161]),
    (0x3271, &[0x00001105, 0x00001161]),
    (0x3272, &[0x00001106, 0x00001161]),
    (0x3273, &[0x00001107, 0x00001161]),
    (0x3274, &[0x00001109, 0x00001161]),
    (0x3275, &[0x0000110B, 0x00001161]),
    (0x3276, &[0x0000110C, 0x00001161]),
    (0x3277, &[0x0000110E, 0x00001161]),
    (0x3278, &[0x0000110F, 0x00001161]),
    (0x3279, &[0x00001110, 0x00001161]),
    (0x327A, &[0x00001111, 0x00001161]),
    (0x327B, &[0x00001112, 0x00001161]),
    (0x327C, &[0x0000110E, 0x00001161, 0x000011B7, 0x00001100, 0x00001169]),
    (0x327D, &[0x0000110C, 0x0000116E, 0x0000110B, 0x00001174]),
    (0x327E, &[0x0000110B, 0x0000116E]),
    (0x3280, &[0x00004E00]),
    (0x3281, &[0x00004E8C]),
    (0x3282, &[0x00004E09]),
    (0x3283, &[0x000056DB]),
    (0x3284, &[0x00004E94]),
    (0x3285, &[0x0000516D]),
    (0x3286, &[0x00004E03]),
    (0x3287, &[0x0000516B]),
    (0x3288, &[0x00004E5D]),
    (0x3289, &[0x00005341]),
    (0x328A, &[0x00006708]),
    (0x328B, &[0x0000706B]),
    (0x328C, &[0x00006C34]),
    (0x328D, &[0x00006728]),
    (0x328E, &[0x000091D1]),
    (0x328F, &[0x0000571F]),
    (0x3290, &[0x000065E5]),
    (0x3291, &[0x0000682A]),
    (0x3292, &[0x00006709]),
    (0x3293, &[0x0000793E]),
    (0x3294, &[0x0000540D]),
    (0x3295, &[0x00007279]),
    (0x3296, &[0x00008CA1]),
    (0x3297, &[0x0000795D]),
    (0x3298, &[0x000052B4]),
    (0x3299, &[0x000079D8]),
    (0x329A, &[0x00007537]),
    (0x329B, &[0x00005973]),
    (0x329C, &[0x00009069]),
    (0x329D, &[0x0000512A]),
    (0x329E, &[0x00005370]),
    (0x329F, &[0x00006CE8]),
    (0x32A0, &[0x00009805]),
    (0x32A1, &[0x00004F11]),
    (0x32A2, &[0x00005199]),
    (0x32A3, &[0x00006B63]),
    (0x32A4, &[0x00004E0A]),
    (0x32A5, &[0x00004E2D]),
    (0x32A6, &[0x00004E0B]),
    (0x32A7, &[0x00005DE6]),
    (0x32A8, &[0x000053F3]),
    (0x32A9, &[0x0000533B]),
    (0x32AA, &[0x00005B97]),
    (0x32AB, &[0x00005B66]),
    (0x32AC, &[0x000076E3]),
    (0x32AD, &[0x00004F01]),
    (0x32AE, &[0x00008CC7]),
    (0x32AF, &[0x00005354]),
    (0x32B0, &[0x0000591C]),
    (0x32B1, &[0x00000033, 0x00000036]),
    (0x32B2, &[0x00000033, 0x00000037]),
    (0x32B3, &[0x00000033, 0x00000038]),
    (0x32B4, &[0x00000033, 0x00000039]),
    (0x32B5, &[0x00000034, 0x00000030]),
    (0x32B6, &[0x00000034, 0x00000031]),
    (0x32B7, &[0x00000034, 0x00000032]),
    (0x32B8, &[0x00000034, 0x00000033]),
    (0x32B9, &[0x00000034, 0x00000034]),
    (0x32BA, &[0x00000034, 0x00000035]),
    (0x32BB, &[0x00000034, 0x00000036]),
    (0x32BC, &[0x00000034, 0x00000037]),
    (0x32BD, &[0x00000034, 0x00000038]),
    (0x32BE, &[0x00000034, 0x00000039]),
    (0x32BF, &[0x00000035, 0x00000030]),
    (0x32C0, &[0x00000031, 0x00006708]),
    (0x32C1, &[0x00000032, 0x00006708]),
    (0x32C2, &[0x00000033, 0x00006708]),
    (0x32C3, &[0x00000034, 0x00006708]),
    (0x32C4, &[0x00000035, 0x00006708]),
    (0x32C5, &[0x00000036, 0x00006708]),
    (0x32C6, &[0x00000037, 0x00006708]),
    (0x32C7, &[0x00000038, 0x00006708]),
    (0x32C8, &[0x00000039, 0x00006708]),
    (0x32C9, &[0x00000031, 0x00000030, 0x00006708]),
    (0x32CA, &[0x00000031, 0x00000031, 0x00006708]),
    (0x32CB, &[0x00000031, 0x00000032, 0x00006708]),
    (0x32CC, &[0x00000048, 0x00000067]),
    (0x32CD, &[0x00000065, 0x00000072, 0x00000067]),
    (0x32CE, &[0x00000065, 0x00000056]),
    (0x32CF, &[0x0000004C, 0x00000054, 0x00000044]),
    (0x32D0, &[0x000030A2]),
    (0x32D1, &[0x000030A4]),
    (0x32D2, &[0x000030A6]),
    (0x32D3, &[0x000030A8]),
    (0x32D4, &[0x000030AA]),
    (0x32D5, &[0x000030AB]),
    (0x32D6, &[0x000030AD]),
    (0x32D7, &[0x000030AF]),
    (0x32D8, &[0x000030B1]),
    (0x32D9, &[0x000030B3]),
    (0x32DA, &[0x000030B5]),
    (0x32DB, &[0x000030B7]),
    (0x32DC, &[0x000030B9]),
    (0x32DD, &[0x000030BB]),
    (0x32DE, &[0x000030BD]),
    (0x32DF, &[0x000030BF]),
    (0x32E0, &[0x000030C1]),
    (0x32E1, &[0x000030C4]),
    (0x32E2, &[0x000030C6]),
    (0x32E3, &[0x000030C8]),
    (0x32E4, &[0x000030CA]),
    (0x32E5, &[0x000030CB]),
    (0x32E6, &[0x000030CC]),
    (0x32E7, &[0x000030CD]),
    (0x32E8, &[0x000030CE]),
    (0x32E9, &[0x000030CF]),
    (0x32EA, &[0x000030D2]),
    (0x32EB, &[0x000030D5]),
    (0x32EC, &[0x000030D8]),
    (0x32ED, &[0x000030DB]),
    (0x32EE, &[0x000030DE]),
    (0x32EF, &[0x000030DF]),
    (0x32F0, &[0x000030E0]),
    (0x32F1, &[0x000030E1]),
    (0x32F2, &[0x000030E2]),
    (0x32F3, &[0x000030E4]),
    (0x32F4, &[0x000030E6]),
    (0x32F5, &[0x000030E8]),
    (0x32F6, &[0x000030E9]),
    (0x32F7, &[0x000030EA]),
    (0x32F8, &[0x000030EB]),
    (0x32F9, &[0x000030EC]),
    (0x32FA, &[0x000030ED]),
    (0x32FB, &[0x000030EF]),
    (0x32FC, &[0x000030F0]),
    (0x32FD, &[0x000030F1]),
    (0x32FE, &[0x000030F2]),
    (0x32FF, &[0x00004EE4, 0x0000548C]),
    (0x3300, &[0x000030A2, 0x000030CF, 0x0800309A, 0x000030FC, 0x000030C8]),
    (0x3301, &[0x000030A2, 0x000030EB, 0x000030D5, 0x000030A1]),
    (0x3302, &[0x000030A2, 0x000030F3, 0x000030D8, 0x0800309A, 0x000030A2]),
    (0x3303, &[0x000030A2, 0x000030FC, 0x000030EB]),
    (0x3304, &[0x000030A4, 0x000030CB, 0x000030F3, 0x000030AF, 0x08003099]),
    (0x3305, &[0x000030A4, 0x000030F3, 0x000030C1]),
    (0x3306, &[0x000030A6, 0x000030A9, 0x000030F3]),
    (0x3307, &[0x000030A8, 0x000030B9, 0x000030AF, 0x000030FC, 0x000030C8, 0x08003099]),
    (0x3308, &[0x000030A8, 0x000030FC, 0x000030AB, 0x000030FC]),
    (0x3309, &[0x000030AA, 0x000030F3, 0x000030B9]),
    (0x330A, &[0x000030AA, 0x000030FC, 0x000030E0]),
    (0x330B, &[0x000030AB, 0x000030A4, 0x000030EA]),
    (0x330C, &[0x000030AB, 0x000030E9, 0x000030C3, 0x000030C8]),
    (0x330D, &[0x000030AB, 0x000030ED, 0x000030EA, 0x000030FC]),
    (0x330E, &[0x000030AB, 0x08003099, 0x000030ED, 0x000030F3]),
    (0x330F, &[0x000030AB, 0x08003099, 0x000030F3, 0x000030DE]),
    (0x3310, &[0x000030AD, 0x08003099, 0x000030AB, 0x08003099]),
    (0x3311, &[0x000030AD, 0x08003099, 0x000030CB, 0x000030FC]),
    (0x3312, &[0x000030AD, 0x000030E5, 0x000030EA, 0x000030FC]),
    (0x3313, &[0x000030AD, 0x08003099, 0x000030EB, 0x000030BF, 0x08003099, 0x000030FC]),
    (0x3314, &[0x000030AD, 0x000030ED]),
    (0x3315, &[0x000030AD, 0x000030ED, 0x000030AF, 0x08003099, 0x000030E9, 0x000030E0]),
    (0x3316, &[0x000030AD, 0x000030ED, 0x000030E1, 0x000030FC, 0x000030C8, 0x000030EB]),
    (0x3317, &[0x000030AD, 0x000030ED, 0x000030EF, 0x000030C3, 0x000030C8]),
    (0x3318, &[0x000030AF, 0x08003099, 0x000030E9, 0x000030E0]),
    (0x3319, &[0x000030AF, 0x08003099, 0x000030E9, 0x000030E0, 0x000030C8, 0x000030F3]),
    (0x331A, &[0x000030AF, 0x000030EB, 0x000030BB, 0x08003099, 0x000030A4, 0x000030ED]),
    (0x331B, &[0x000030AF, 0x000030ED, 0x000030FC, 0x000030CD]),
    (0x331C, &[0x000030B1, 0x000030FC, 0x000030B9]),
    (0x331D, &[0x000030B3, 0x000030EB, 0x000030CA]),
    (0x331E, &[0x000030B3, 0x000030FC, 0x000030DB, 0x0800309A]),
    (0x331F, &[0x000030B5, 0x000030A4, 0x000030AF, 0x000030EB]),
    (0x3320, &[0x000030B5, 0x000030F3, 0x000030C1, 0x000030FC, 0x000030E0]),
    (0x3321, &[0x000030B7, 0x000030EA, 0x000030F3, 0x000030AF, 0x08003099]),
    (0x3322, &[0x000030BB, 0x000030F3, 0x000030C1]),
    (0x3323, &[0x000030BB, 0x000030F3, 0x000030C8]),
    (0x3324, &[0x000030BF, 0x08003099, 0x000030FC, 0x000030B9]),
    (0x3325, &[0x000030C6, 0x08003099, 0x000030B7]),
    (0x3326, &[0x000030C8, 0x08003099, 0x000030EB]),
    (0x3327, &[0x000030C8, 0x000030F3]),
    (0x3328, &[0x000030CA, 0x000030CE]),
    (0x3329, &[0x000030CE, 0x000030C3, 0x000030C8]),
    (0x332A, &[0x000030CF, 0x000030A4, 0x000030C4]),
    (0x332B, &[0x000030CF, 0x0800309A, 0x000030FC, 0x000030BB, 0x000030F3, 0x000030C8]),
    (0x332C, &[0x000030CF, 0x0800309A, 0x000030FC, 0x000030C4]),
    (0x332D, &[0x000030CF, 0x08003099, 0x000030FC, 0x000030EC, 0x000030EB]),
    (0x332E, &[0x000030D2, 0x0800309A, 0x000030A2, 0x000030B9, 0x000030C8, 0x000030EB]),
    (0x332F, &[0x000030D2, 0x0800309A, 0x000030AF, 0x000030EB]),
    (0x3330, &[0x000030D2, 0x0800309A, 0x000030B3]),
    (0x3331, &[0x000030D2, 0x08003099, 0x000030EB]),
    (0x3332, &[0x000030D5, 0x000030A1, 0x000030E9, 0x000030C3, 0x000030C8, 0x08003099]),
    (0x3333, &[0x000030D5, 0x000030A3, 0x000030FC, 0x000030C8]),
    (0x3334, &[0x000030D5, 0x08003099, 0x000030C3, 0x000030B7, 0x000030A7, 0x000030EB]),
    (0x3335, &[0x000030D5, 0x000030E9, 0x000030F3]),
    (0x3336, &[0x000030D8, 0x000030AF, 0x000030BF, 0x000030FC, 0x000030EB]),
    (0x3337, &[0x000030D8, 0x0800309A, 0x000030BD]),
    (0x3338, &[0x000030D8, 0x0800309A, 0x000030CB, 0x000030D2]),
    (0x3339, &[0x000030D8, 0x000030EB, 0x000030C4]),
    (0x333A, &[0x000030D8, 0x0800309A, 0x000030F3, 0x000030B9]),
    (0x333B, &[0x000030D8, 0x0800309A, 0x000030FC, 0x000030B7, 0x08003099]),
    (0x333C, &[0x000030D8, 0x08003099, 0x000030FC, 0x000030BF]),
    (0x333D, &[0x000030DB, 0x0800309A, 0x000030A4, 0x000030F3, 0x000030C8]),
    (0x333E, &[0x000030DB, 0x08003099, 0x000030EB, 0x000030C8]),
    (0x333F, &[0x000030DB, 0x000030F3]),
    (0x3340, &[0x000030DB, 0x0800309A, 0x000030F3, 0x000030C8, 0x08003099]),
    (0x3341, &[0x000030DB, 0x000030FC, 0x000030EB]),
    (0x3342, &[0x000030DB, 0x000030FC, 0x000030F3]),
    (0x3343, &[0x000030DE, 0x000030A4, 0x000030AF, 0x000030ED]),
    (0x3344, &[0x000030DE, 0x000030A4, 0x000030EB]),
    (0x3345, &[0x000030DE, 0x000030C3, 0x000030CF]),
    (0x3346, &[0x000030DE, 0x000030EB, 0x000030AF]),
    (0x3347, &[0x000030DE, 0x000030F3, 0x000030B7, 0x000030E7, 0x000030F3]),
    (0x3348, &[0x000030DF, 0x000030AF, 0x000030ED, 0x000030F3]),
    (0x3349, &[0x000030DF, 0x000030EA]),
    (0x334A, &[0x000030DF, 0x000030EA, 0x000030CF, 0x08003099, 0x000030FC, 0x000030EB]),
    (0x334B, &[0x000030E1, 0x000030AB, 0x08003099]),
    (0x334C, &[0x000030E1, 0x000030AB, 0x08003099, 0x000030C8, 0x000030F3]),
    (0x334D, &[0x000030E1, 0x000030FC, 0x000030C8, 0x000030EB]),
    (0x334E, &[0x000030E4, 0x000030FC, 0x000030C8, 0x08003099]),
    (0x334F, &[0x000030E4, 0x000030FC, 0x000030EB]),
    (0x3350, &[0x000030E6, 0x000030A2, 0x000030F3]),
    (0x3351, &[0x000030EA, 0x000030C3, 0x000030C8, 0x000030EB]),
    (0x3352, &[0x000030EA, 0x000030E9]),
    (0x3353, &[0x000030EB, 0x000030D2, 0x0800309A, 0x000030FC]),
    (0x3354, &[0x000030EB, 0x000030FC, 0x000030D5, 0x08003099, 0x000030EB]),
    (0x3355, &[0x000030EC, 0x000030E0]),
    (0x3356, &[0x000030EC, 0x000030F3, 0x000030C8, 0x000030B1, 0x08003099, 0x000030F3]),
    (0x3357, &[0x000030EF, 0x000030C3, 0x000030C8]),
    (0x3358, &[0x00000030, 0x000070B9]),
    (0x3359, &[0x00000031, 0x000070B9]),
    (0x335A, &[0x00000032, 0x000070B9]),
    (0x335B, &[0x00000033, 0x000070B9]),
    (0x335C, &[0x00000034, 0x000070B9]),
    (0x335D, &[0x00000035, 0x000070B9]),
    (0x335E, &[0x00000036, 0x000070B9]),
    (0x335F, &[0x00000037, 0x000070B9]),
    (0x3360, &[0x00000038, 0x000070B9]),
    (0x3361, &[0x00000039, 0x000070B9]),
    (0x3362, &[0x00000031, 0x00000030, 0x000070B9]),
    (0x3363, &[0x00000031, 0x00000031, 0x000070B9]),
    (0x3364, &[0x00000031, 0x00000032, 0x000070B9]),
    (0x3365, &[0x00000031, 0x00000033, 0x000070B9]),
    (0x3366, &[0x00000031, 0x00000034, 0x000070B9]),
    (0x3367, &[0x00000031, 0x00000035, 0x000070B9]),
    (0x3368, &[0x00000031, 0x00000036, 0x000070B9]),
    (0x3369, &[0x00000031, 0x00000037, 0x000070B9]),
    (0x336A, &[0x00000031, 0x00000038, 0x000070B9]),
    (0x336B, &[0x00000031, 0x00000039, 0x000070B9]),
    (0x336C, &[0x00000032, 0x00000030, 0x000070B9]),
    (0x336D, &[0x00000032, 0x00000031, 0x000070B9]),
    (0x336E, &[0x00000032, 0x00000032, 0x000070B9]),
    (0x336F, &[0x00000032, 0x00000033, 0x000070B9]),
    (0x3370, &[0x00000032, 0x00000034, 0x000070B9]),
    (0x3371, &[0x00000068, 0x00000050, 0x00000061]),
    (0x3372, &[0x00000064, 0x00000061]),
    (0x3373, &[0x00000041, 0x00000055]),
    (0x3374, &[0x00000062, 0x00000061, 0x00000072]),
    (0x3375, &[0x0000006F, 0x00000056]),
    (0x3376, &[0x00000070, 0x00000063]),
    (0x3377, &[0x00000064, 0x0000006D]),
    (0x3378, &[0x00000064, 0x0000006D, 0x00000032]),
    (0x3379, &[0x00000064, 0x0000006D, 0x00000033]),
    (0x337A, &[0x00000049, 0x00000055]),
    (0x337B, &[0x00005E73, 0x00006210]),
    (0x337C, &[0x0000662D, 0x0000548C]),
    (0x337D, &[0x00005927, 0x00006B63]),
    (0x337E, &[0x0000660E, 0x00006CBB]),
    (0x337F, &[0x0000682A, 0x00005F0F, 0x00004F1A, 0x0000793E]),
    (0x3380, &[0x00000070, 0x00000041]),
    (0x3381, &[0x0000006E, 0x00000041]),
    (0x3382, &[0x000003BC, 0x00000041]),
    (0x3383, &[0x0000006D, 0x00000041]),
    (0x3384, &[0x0000006B, 0x00000041]),
    (0x3385, &[0x0000004B, 0x00000042]),
    (0x3386, &[0x0000004D, 0x00000042]),
    (0x3387, &[0x00000047, 0x00000042]),
    (0x3388, &[0x00000063, 0x00000061, 0x0000006C]),
    (0x3389, &[0x0000006B, 0x00000063, 0x00000061, 0x0000006C]),
    (0x338A, &[0x00000070, 0x00000046]),
    (0x338B, &[0x0000006E, 0x00000046]),
    (0x338C, &[0x000003BC, 0x00000046]),
    (0x338D, &[0x000003BC, 0x00000067]),
    (0x338E, &[0x0000006D, 0x00000067]),
    (0x338F, &[0x0000006B, 0x00000067]),
    (0x3390, &[0x00000048, 0x0000007A]),
    (0x3391, &[0x0000006B, 0x00000048, 0x0000007A]),
    (0x3392, &[0x0000004D, 0x00000048, 0x0000007A]),
    (0x3393, &[0x00000047, 0x00000048, 0x0000007A]),
    (0x3394, &[0x00000054, 0x00000048, 0x0000007A]),
    (0x3395, &[0x000003BC, 0x0000006C]),
    (0x3396, &[0x0000006D, 0x0000006C]),
    (0x3397, &[0x00000064, 0x0000006C]),
    (0x3398, &[0x0000006B, 0x0000006C]),
    (0x3399, &[0x00000066, 0x0000006D]),
    (0x339A, &[0x0000006E, 0x0000006D]),
    (0x339B, &[0x000003BC, 0x0000006D]),
    (0x339C, &[0x0000006D, 0x0000006D]),
    (0x339D, &[0x00000063, 0x0000006D]),
    (0x339E, &[0x0000006B, 0x0000006D]),
    (0x339F, &[0x0000006D, 0x0000006D, 0x00000032]),
    (0x33A0, &[0x00000063, 0x0000006D, 0x00000032]),
    (0x33A1, &[0x0000006D, 0x00000032]),
    (0x33A2, &[0x0000006B, 0x0000006D, 0x00000032]),
    (0x33A3, &[0x0000006D, 0x0000006D, 0x00000033]),
    (0x33A4, &[0x00000063, 0x0000006D, 0x00000033]),
    (0x33A5, &[0x0000006D, 0x00000033]),
    (0x33A6, &[0x0000006B, 0x0000006D, 0x00000033]),
    (0x33A7, &[0x0000006D, 0x00002215, 0x00000073]),
    (0x33A8, &[0x0000006D, 0x00002215, 0x00000073, 0x00000032]),
    (0x33A9, &[0x00000050, 0x00000061]),
    (0x33AA, &[0x0000006B, 0x00000050, 0x00000061]),
    (0x33AB, &[0x0000004D, 0x00000050, 0x00000061]),
    (0x33AC, &[0x00000047, 0x00000050, 0x00000061]),
    (0x33AD, &[0x00000072, 0x00000061, 0x00000064]),
    (0x33AE, &[0x00000072, 0x00000061, 0x00000064, 0x00002215, 0x00000073]),
    (0x33AF, &[0x00000072, 0x00000061, 0x00000064, 0x00002215, 0x00000073, 0x00000032]),
    (0x33B0, &[0x00000070, 0x00000073]),
    (0x33B1, &[0x0000006E, 0x00000073]),
    (0x33B2, &[0x000003BC, 0x00000073]),
    (0x33B3, &[0x0000006D, 0x00000073]),
    (0x33B4, &[0x00000070, 0x00000056]),
    (0x33B5, &[0x0000006E, 0x00000056]),
    (0x33B6, &[0x000003BC, 0x00000056]),
    (0x33B7, &[0x0000006D, 0x00000056]),
    (0x33B8, &[0x0000006B, 0x00000056]),
    (0x33B9, &[0x0000004D, 0x00000056]),
    (0x33BA, &[0x00000070, 0x00000057]),
    (0x33BB, &[0x0000006E, 0x00000057]),
    (0x33BC, &[0x000003BC, 0x00000057]),
    (0x33BD, &[0x0000006D, 0x00000057]),
    (0x33BE, &[0x0000006B, 0x00000057]),
    (0x33BF, &[0x0000004D, 0x00000057]),
    (0x33C0, &[0x0000006B, 0x000003A9]),
    (0x33C1, &[0x0000004D, 0x000003A9]),
    (0x33C2, &[0x00000061, 0x0000002E, 0x0000006D, 0x0000002E]),
    (0x33C3, &[0x00000042, 0x00000071]),
    (0x33C4, &[0x00000063, 0x00000063]),
    (0x33C5, &[0x00000063, 0x00000064]),
    (0x33C6, &[0x00000043, 0x00002215, 0x0000006B, 0x00000067]),
    (0x33C7, &[0x00000043, 0x0000006F, 0x0000002E]),
    (0x33C8, &[0x00000064, 0x00000042]),
    (0x33C9, &[0x00000047, 0x00000079]),
    (0x33CA, &[0x00000068, 0x00000061]),
    (0x33CB, &[0x00000048, 0x00000050]),
    (0x33CC, &[0x00000069, 0x0000006E]),
    (0x33CD, &[0x0000004B, 0x0000004B]),
    (0x33CE, &[0x0000004B, 0x0000004D]),
    (0x33CF, &[0x0000006B, 0x00000074]),
    (0x33D0, &[0x0000006C, 0x0000006D]),
    (0x33D1, &[0x0000006C, 0x0000006E]),
    (0x33D2, &[0x0000006C, 0x0000006F, 0x00000067]),
    (0x33D3, &[0x0000006C, 0x00000078]),
    (0x33D4, &[0x0000006D, 0x00000062]),
    (0x33D5, &[0x0000006D, 0x00000069, 0x0000006C]),
    (0x33D6, &[0x0000006D, 0x0000006F, 0x0000006C]),
    (0x33D7, &[0x00000050, 0x00000048]),
    (0x33D8, &[0x00000070, 0x0000002E, 0x0000006D, 0x0000002E]),
    (0x33D9, &[0x00000050, 0x00000050, 0x0000004D]),
    (0x33DA, &[0x00000050, 0x00000052]),
    (0x33DB, &[0x00000073, 0x00000072]),
    (0x33DC, &[0x00000053, 0x00000076]),
    (0x33DD, &[0x00000057, 0x00000062]),
    (0x33DE, &[0x00000056, 0x00002215, 0x0000006D]),
    (0x33DF, &[0x00000041, 0x00002215, 0x0000006D]),
    (0x33E0, &[0x00000031, 0x000065E5]),
    (0x33E1, &[0x00000032, 0x000065E5]),
    (0x33E2, &[0x00000033, 0x000065E5]),
    (0x33E3, &[0x00000034, 0x000065E5]),
    (0x33E4, &[0x00000035, 0x000065E5]),
    (0x33E5, &[0x00000036, 0x000065E5]),
    (0x33E6, &[0x00000037, 0x000065E5]),
    (0x33E7, &[0x00000038, 0x000065E5]),
    (0x33E8, &[0x00000039, 0x000065E5]),
    (0x33E9, &[0x00000031, 0x00000030, 0x000065E5]),
    (0x33EA, &[0x00000031, 0x00000031, 0x000065E5]),
    (0x33EB, &[0x00000031, 0x00000032, 0x000065E5]),
    (0x33EC, &[0x00000031, 0x00000033, 0x000065E5]),
    (0x33ED, &[0x00000031, 0x00000034, 0x000065E5]),
    (0x33EE, &[0x00000031, 0x00000035, 0x000065E5]),
    (0x33EF, &[0x00000031, 0x00000036, 0x000065E5]),
    (0x33F0, &[0x00000031, 0x00000037, 0x000065E5]),
    (0x33F1, &[0x00000031, 0x00000038, 0x000065E5]),
    (0x33F2, &[0x00000031, 0x00000039, 0x000065E5]),
    (0x33F3, &[0x00000032, 0x00000030, 0x000065E5]),
    (0x33F4, &[0x00000032, 0x00000031, 0x000065E5]),
    (0x33F5, &[0x00000032, 0x00000032, 0x000065E5]),
    (0x33F6, &[0x00000032, 0x00000033, 0x000065E5]),
    (0x33F7, &[0x00000032, 0x00000034, 0x000065E5]),
    (0x33F8, &[0x00000032, 0x00000035, 0x000065E5]),
    (0x33F9, &[0x00000032, 0x00000036, 0x000065E5]),
    (0x33FA, &[0x00000032, 0x00000037, 0x000065E5]),
    (0x33FB, &[0x00000032, 0x00000038, 0x000065E5]),
    (0x33FC, &[0x00000032, 0x00000039, 0x000065E5]),
    (0x33FD, &[0x00000033, 0x00000030, 0x000065E5]),
    (0x33FE, &[0x00000033, 0x00000031, 0x000065E5]),
    (0x33FF, &[0x00000067, 0x00000061, 0x0000006C]),
    (0xA69C, &[0x0000044A]),
    (0xA69D, &[0x0000044C]),
    (0xA770, &[0x0000A76F]),
    (0xA7F2, &[0x00000043]),
    (0xA7F3, &[0x00000046]),
    (0xA7F4, &[0x00000051]),
    (0xA7F8, &[0x00000126]),
    (0xA7F9, &[0x00000153]),
    (0xAB5C, &[0x0000A727]),
    (0xAB5D, &[0x0000AB37]),
    (0xAB5E, &[0x0000026B]),
    (0xAB5F, &[0x0000AB52]),
    (0xAB69, &[0x0000028D]),
    (0xFB00, &[0x00000066, 0x00000066]),
    (0xFB01, &[0x00000066, 0x00000069]),
    (0xFB02, &[0x00000066, 0x0000006C]),
    (0xFB03, &[0x00000066, 0x00000066, 0x00000069]),
    (0xFB04, &[0x00000066, 0x00000066, 0x0000006C]),
    (0xFB05, &[0x00000073, 0x00000074]),
    (0xFB06, &[0x00000073, 0x00000074]),
    (0xFB13, &[0x00000574, 0x00000576]),
    (0xFB14, &[0x00000574, 0x00000565]),
    (0xFB15, &[0x00000574, 0x0000056B]),
    (0xFB16, &[0x0000057E, 0x00000576]),
    (0xFB17, &[0x00000574, 0x0000056D]),
    (0xFB20, &[0x000005E2]),
    (0xFB21, &[0x000005D0]),
    (0xFB22, &[0x000005D3]),
    (0xFB23, &[0x000005D4]),
    (0xFB24, &[0x000005DB]),
    (0xFB25, &[0x000005DC]),
    (0xFB26, &[0x000005DD]),
    (0xFB27, &[0x000005E8]),
    (0xFB28, &[0x000005EA]),
    (0xFB29, &[0x0000002B]),
    (0xFB4F, &[0x000005D0, 0x000005DC]),
    (0xFB50, &[0x00000671]),
    (0xFB51, &[0x00000671]),
    (0xFB52, &[0x0000067B]),
    (0xFB53, &[0x0000067B]),
    (0xFB54, &[0x0000067B]),
    (0xFB55, &[0x0000067B]),
    (0xFB56, &[0x0000067E]),
    (0xFB57, &[0x0000067E]),
    (0xFB58, &[0x0000067E]),
    (0xFB59, &[0x0000067E]),
    (0xFB5A, &[0x00000680]),
    (0xFB5B, &[0x00000680]),
    (0xFB5C, &[0x00000680]),
    (0xFB5D, &[0x00000680]),
    (0xFB5E, &[0x0000067A]),
    (0xFB5F, &[0x0000067A]),
    (0xFB60, &[0x0000067A]),
    (0xFB61, &[0x0000067A]),
    (0xFB62, &[0x0000067F]),
    (0xFB63, &[0x0000067F]),
    (0xFB64, &[0x0000067F]),
    (0xFB65, &[0x0000067F]),
    (0xFB66, &[0x00000679]),
    (0xFB67, &[0x00000679]),
    (0xFB68, &[0x00000679]),
    (0xFB69, &[0x00000679]),
    (0xFB6A, &[0x000006A4]),
    (0xFB6B, &[0x000006A4]),
    (0xFB6C, &[0x000006A4]),
    (0xFB6D, &[0x000006A4]),
    (0xFB6E, &[0x000006A6]),
    (0xFB6F, &[0x000006A6]),
    (0xFB70, &[0x000006A6]),
    (0xFB71, &[0x000006A6]),
    (0xFB72, &[0x00000684]),
    (0xFB73, &[0x00000684]),
    (0xFB74, &[0x00000684]),
    (0xFB75, &[0x00000684]),
    (0xFB76, &[0x00000683]),
    (0xFB77, &[0x00000683]),
    (0xFB78, &[0x00000683]),
    (0xFB79, &[0x00000683]),
    (0xFB7A, &[0x00000686]),
    (0xFB7B, &[0x00000686]),
    (0xFB7C, &[0x00000686]),
    (0xFB7D, &[0x00000686]),
    (0xFB7E, &[0x00000687]),
    (0xFB7F, &[0x00000687]),
    (0xFB80, &[0x00000687]),
    (0xFB81, &[0x00000687]),
    (0xFB82, &[0x0000068D]),
    (0xFB83, &[0x0000068D]),
    (0xFB84, &[0x0000068C]),
    (0xFB85, &[0x0000068C]),
    (0xFB86, &[0x0000068E]),
    (0xFB87, &[0x0000068E]),
    (0xFB88, &[0x00000688]),
    (0xFB89, &[0x00000688]),
    (0xFB8A, &[0x00000698]),
    (0xFB8B, &[0x00000698]),
    (0xFB8C, &[0x00000691]),
    (0xFB8D, &[0x00000691]),
    (0xFB8E, &[0x000006A9]),
    (0xFB8F, &[0x000006A9]),
    (0xFB90, &[0x000006A9]),
    (0xFB91, &[0x000006A9]),
    (0xFB92, &[0x000006AF]),
    (0xFB93, &[0x000006AF]),
    (0xFB94, &[0x000006AF]),
    (0xFB95, &[0x000006AF]),
    (0xFB96, &[0x000006B3]),
    (0xFB97, &[0x000006B3]),
    (0xFB98, &[0x000006B3]),
    (0xFB99, &[0x000006B3]),
    (0xFB9A, &[0x000006B1]),
    (0xFB9B, &[0x000006B1]),
    (0xFB9C, &[0x000006B1]),
    (0xFB9D, &[0x000006B1]),
    (0xFB9E, &[0x000006BA]),
    (0xFB9F, &[0x000006BA]),
    (0xFBA0, &[0x000006BB]),
    (0xFBA1, &[0x000006BB]),
    (0xFBA2, &[0x000006BB]),
    (0xFBA3, &[0x000006BB]),
    (0xFBA4, &[0x000006D5, 0xE6000654]),
    (0xFBA5, &[0x000006D5, 0xE6000654]),
    (0xFBA6, &[0x000006C1]),
    (0xFBA7, &[0x000006C1]),
    (0xFBA8, &[0x000006C1]),
    (0xFBA9, &[0x000006C1]),
    (0xFBAA, &[0x000006BE]),
    (0xFBAB, &[0x000006BE]),
    (0xFBAC, &[0x000006BE]),
    (0xFBAD, &[0x000006BE]),
    (0xFBAE, &[0x000006D2]),
    (0xFBAF, &[0x000006D2]),
    (0xFBB0, &[0x000006D2, 0xE6000654]),
    (0xFBB1, &[0x000006D2, 0xE6000654]),
    (0xFBD3, &[0x000006AD]),
    (0xFBD4, &[0x000006AD]),
    (0xFBD5, &[0x000006AD]),
    (0xFBD6, &[0x000006AD]),
    (0xFBD7, &[0x000006C7]),
    (0xFBD8, &[0x000006C7]),
    (0xFBD9, &[0x000006C6]),
    (0xFBDA, &[0x000006C6]),
    (0xFBDB, &[0x000006C8]),
    (0xFBDC, &[0x000006C8]),
    (0xFBDD, &[0x000006C7, 0x00000674]),
    (0xFBDE, &[0x000006CB]),
    (0xFBDF, &[0x000006CB]),
    (0xFBE0, &[0x000006C5]),
    (0xFBE1, &[0x000006C5]),
    (0xFBE2, &[0x000006C9]),
    (0xFBE3, &[0x000006C9]),
    (0xFBE4, &[0x000006D0]),
    (0xFBE5, &[0x000006D0]),
    (0xFBE6, &[0x000006D0]),
    (0xFBE7, &[0x000006D0]),
    (0xFBE8, &[0x00000649]),
    (0xFBE9, &[0x00000649]),
    (0xFBEA, &[0x0000064A, 0xE6000654, 0x00000627]),
    (0xFBEB, &[0x0000064A, 0xE6000654, 0x00000627]),
    (0xFBEC, &[0x0000064A, 0xE6000654, 0x000006D5]),
    (0xFBED, &[0x0000064A, 0xE6000654, 0x000006D5]),
    (0xFBEE, &[0x0000064A, 0xE6000654, 0x00000648]),
    (0xFBEF, &[0x0000064A, 0xE6000654, 0x00000648]),
    (0xFBF0, &[0x0000064A, 0xE6000654, 0x000006C7]),
    (0xFBF1, &[0x0000064A, 0xE6000654, 0x000006C7]),
    (0xFBF2, &[0x0000064A, 0xE6000654, 0x000006C6]),
    (0xFBF3, &[0x0000064A, 0xE6000654, 0x000006C6]),
    (0xFBF4, &[0x0000064A, 0xE6000654, 0x000006C8]),
    (0xFBF5, &[0x0000064A, 0xE6000654, 0x000006C8]),
    (0xFBF6, &[0x0000064A, 0xE6000654, 0x000006D0]),
    (0xFBF7, &[0x0000064A, 0xE6000654, 0x000006D0]),
    (0xFBF8, &[0x0000064A, 0xE6000654, 0x000006D0]),
    (0xFBF9, &[0x0000064A, 0xE6000654, 0x00000649]),
    (0xFBFA, &[0x0000064A, 0xE6000654, 0x00000649]),
    (0xFBFB, &[0x0000064A, 0xE6000654, 0x00000649]),
    (0xFBFC, &[0x000006CC]),
    (0xFBFD, &[0x000006CC]),
    (0xFBFE, &[0x000006CC]),
    (0xFBFF, &[0x000006CC]),
    (0xFC00, &[0x0000064A, 0xE6000654, 0x0000062C]),
    (0xFC01, &[0x0000064A, 0xE6000654, 0x0000062D]),
    (0xFC02, &[0x0000064A, 0xE6000654, 0x00000645]),
    (0xFC03, &[0x0000064A, 0xE6000654, 0x00000649]),
    (0xFC04, &[0x0000064A, 0xE6000654, 0x0000064A]),
    (0xFC05, &[0x00000628, 0x0000062C]),
    (0xFC06, &[0x00000628, 0x0000062D]),
    (0xFC07, &[0x00000628, 0x0000062E]),
    (0xFC08, &[0x00000628, 0x00000645]),
    (0xFC09, &[0x00000628, 0x00000649]),
    (0xFC0A, &[0x00000628, 0x0000064A]),
    (0xFC0B, &[0x0000062A, 0x0000062C]),
    (0xFC0C, &[0x0000062A, 0x0000062D]),
    (0xFC0D, &[0x0000062A, 0x0000062E]),
    (0xFC0E, &[0x0000062A, 0x00000645]),
    (0xFC0F, &[0x0000062A, 0x00000649]),
    (0xFC10, &[0x0000062A, 0x0000064A]),
    (0xFC11, &[0x0000062B, 0x0000062C]),
    (0xFC12, &[0x0000062B, 0x00000645]),
    (0xFC13, &[0x0000062B, 0x00000649]),
    (0xFC14, &[0x0000062B, 0x0000064A]),
    (0xFC15, &[0x0000062C, 0x0000062D]),
    (0xFC16, &[0x0000062C, 0x00000645]),
    (0xFC17, &[0x0000062D, 0x0000062C]),
    (0xFC18, &[0x0000062D, 0x00000645]),
    (0xFC19, &[0x0000062E, 0x0000062C]),
    (0xFC1A, &[0x0000062E, 0x0000062D]),
    (0xFC1B, &[0x0000062E, 0x00000645]),
    (0xFC1C, &[0x00000633, 0x0000062C]),
    (0xFC1D, &[0x00000633, 0x0000062D]),
    (0xFC1E, &[0x00000633, 0x0000062E]),
    (0xFC1F, &[0x00000633, 0x00000645]),
    (0xFC20, &[0x00000635, 0x0000062D]),
    (0xFC21, &[0x00000635, 0x00000645]),
    (0xFC22, &[0x00000636, 0x0000062C]),
    (0xFC23, &[0x00000636, 0x0000062D]),
    (0xFC24, &[0x00000636, 0x0000062E]),
    (0xFC25, &[0x00000636, 0x00000645]),
    (0xFC26, &[0x00000637, 0x0000062D]),
    (0xFC27, &[0x00000637, 0x00000645]),
    (0xFC28, &[0x00000638, 0x00000645]),
    (0xFC29, &[0x00000639, 0x0000062C]),
    (0xFC2A, &[0x00000639, 0x00000645]),
    (0xFC2B, &[0x0000063A, 0x0000062C]),
    (0xFC2C, &[0x0000063A, 0x00000645]),
    (0xFC2D, &[0x00000641, 0x0000062C]),
    (0xFC2E, &[0x00000641, 0x0000062D]),
    (0xFC2F, &[0x00000641, 0x0000062E]),
    (0xFC30, &[0x00000641, 0x00000645]),
    (0xFC31, &[0x00000641, 0x00000649]),
    (0xFC32, &[0x00000641, 0x0000064A]),
    (0xFC33, &[0x00000642, 0x0000062D]),
    (0xFC34, &[0x00000642, 0x00000645]),
    (0xFC35, &[0x00000642, 0x00000649]),
    (0xFC36, &[0x00000642, 0x0000064A]),
    (0xFC37, &[0x00000643, 0x00000627]),
    (0xFC38, &[0x00000643, 0x0000062C]),
    (0xFC39, &[0x00000643, 0x0000062D]),
    (0xFC3A, &[0x00000643, 0x0000062E]),
    (0xFC3B, &[0x00000643, 0x00000644]),
    (0xFC3C, &[0x00000643, 0x00000645]),
    (0xFC3D, &[0x00000643, 0x00000649]),
    (0xFC3E, &[0x00000643, 0x0000064A]),
    (0xFC3F, &[0x00000644, 0x0000062C]),
    (0xFC40, &[0x00000644, 0x0000062D]),
    (0xFC41, &[0x00000644, 0x0000062E]),
    (0xFC42, &[0x00000644, 0x00000645]),
    (0xFC43, &[0x00000644, 0x00000649]),
    (0xFC44, &[0x00000644, 0x0000064A]),
    (0xFC45, &[0x00000645, 0x0000062C]),
    (0xFC46, &[0x00000645, 0x0000062D]),
    (0xFC47, &[0x00000645, 0x0000062E]),
    (0xFC48, &[0x00000645, 0x00000645]),
    (0xFC49, &[0x00000645, 0x00000649]),
    (0xFC4A, &[0x00000645, 0x0000064A]),
    (0xFC4B, &[0x00000646, 0x0000062C]),
    (0xFC4C, &[0x00000646, 0x0000062D]),
    (0xFC4D, &[0x00000646, 0x0000062E]),
    (0xFC4E, &[0x00000646, 0x00000645]),
    (0xFC4F, &[0x00000646, 0x00000649]),
    (0xFC50, &[0x00000646, 0x0000064A]),
    (0xFC51, &[0x00000647, 0x0000062C]),
    (0xFC52, &[0x00000647, 0x00000645]),
    (0xFC53, &[0x00000647, 0x00000649]),
    (0xFC54, &[0x00000647, 0x0000064A]),
    (0xFC55, &[0x0000064A, 0x0000062C]),
    (0xFC56, &[0x0000064A, 0x0000062D]),
    (0xFC57, &[0x0000064A, 0x0000062E]),
    (0xFC58, &[0x0000064A, 0x00000645]),
    (0xFC59, &[0x0000064A, 0x00000649]),
    (0xFC5A, &[0x0000064A, 0x0000064A]),
    (0xFC5B, &[0x00000630, 0x23000670]),
    (0xFC5C, &[0x00000631, 0x23000670]),
    (0xFC5D, &[0x00000649, 0x23000670]),
    (0xFC5E, &[0x00000020, 0x1C00064C, 0x21000651]),
    (0xFC5F, &[0x00000020, 0x1D00064D, 0x21000651]),
    (0xFC60, &[0x00000020, 0x1E00064E, 0x21000651]),
    (0xFC61, &[0x00000020, 0x1F00064F, 0x21000651]),
    (0xFC62, &[0x00000020, 0x20000650, 0x21000651]),
    (0xFC63, &[0x00000020, 0x21000651, 0x23000670]),
    (0xFC64, &[0x0000064A, 0xE6000654, 0x00000631]),
    (0xFC65, &[0x0000064A, 0xE6000654, 0x00000632]),
    (0xFC66, &[0x0000064A, 0xE6000654, 0x00000645]),
    (0xFC67, &[0x0000064A, 0xE6000654, 0x00000646]),
    (0xFC68, &[0x0000064A, 0xE6000654, 0x00000649]),
    (0xFC69, &[0x0000064A, 0xE6000654, 0x0000064A]),
    (0xFC6A, &[0x00000628, 0x00000631]),
    (0xFC6B, &[0x00000628, 0x00000632]),
    (0xFC6C, &[0x00000628, 0x00000645]),
    (0xFC6D, &[0x00000628, 0x00000646]),
    (0xFC6E, &[0x00000628, 0x00000649]),
    (0xFC6F, &[0x00000628, 0x0000064A]),
    (0xFC70, &[0x0000062A, 0x00000631]),
    (0xFC71, &[0x0000062A, 0x00000632]),
    (0xFC72, &[0x0000062A, 0x00000645]),
    (0xFC73, &[0x0000062A, 0x00000646]),
    (0xFC74, &[0x0000062A, 0x00000649]),
    (0xFC75, &[0x0000062A, 0x0000064A]),
    (0xFC76, &[0x0000062B, 0x00000631]),
    (0xFC77, &[0x0000062B, 0x00000632]),
    (0xFC78, &[0x0000062B, 0x00000645]),
    (0xFC79, &[0x0000062B, 0x00000646]),
    (0xFC7A, &[0x0000062B, 0x00000649]),
    (0xFC7B, &[0x0000062B, 0x0000064A]),
    (0xFC7C, &[0x00000641, 0x00000649]),
    (0xFC7D, &[0x00000641, 0x0000064A]),
    (0xFC7E, &[0x00000642, 0x00000649]),
    (0xFC7F, &[0x00000642, 0x0000064A]),
    (0xFC80, &[0x00000643, 0x00000627]),
    (0xFC81, &[0x00000643, 0x00000644]),
    (0xFC82, &[0x00000643, 0x00000645]),
    (0xFC83, &[0x00000643, 0x00000649]),
    (0xFC84, &[0x00000643, 0x0000064A]),
    (0xFC85, &[0x00000644, 0x00000645]),
    (0xFC86, &[0x00000644, 0x00000649]),
    (0xFC87, &[0x00000644, 0x0000064A]),
    (0xFC88, &[0x00000645, 0x00000627]),
    (0xFC89, &[0x00000645, 0x00000645]),
    (0xFC8A, &[0x00000646, 0x00000631]),
    (0xFC8B, &[0x00000646, 0x00000632]),
    (0xFC8C, &[0x00000646, 0x00000645]),
    (0xFC8D, &[0x00000646, 0x00000646]),
    (0xFC8E, &[0x00000646, 0x00000649]),
    (0xFC8F, &[0x00000646, 0x0000064A]),
    (0xFC90, &[0x00000649, 0x23000670]),
    (0xFC91, &[0x0000064A, 0x00000631]),
    (0xFC92, &[0x0000064A, 0x00000632]),
    (0xFC93, &[0x0000064A, 0x00000645]),
    (0xFC94, &[0x0000064A, 0x00000646]),
    (0xFC95, &[0x0000064A, 0x00000649]),
    (0xFC96, &[0x0000064A, 0x0000064A]),
    (0xFC97, &[0x0000064A, 0xE6000654, 0x0000062C]),
    (0xFC98, &[0x0000064A, 0xE6000654, 0x0000062D]),
    (0xFC99, &[0x0000064A, 0xE6000654, 0x0000062E]),
    (0xFC9A, &[0x0000064A, 0xE6000654, 0x00000645]),
    (0xFC9B, &[0x0000064A, 0xE6000654, 0x00000647]),
    (0xFC9C, &[0x00000628, 0x0000062C]),
    (0xFC9D, &[0x00000628, 0x0000062D]),
    (0xFC9E, &[0x00000628, 0x0000062E]),
    (0xFC9F, &[0x00000628, 0x00000645]),
    (0xFCA0, &[0x00000628, 0x00000647]),
    (0xFCA1, &[0x0000062A, 0x0000062C]),
    (0xFCA2, &[0x0000062A, 0x0000062D]),
    (0xFCA3, &[0x0000062A, 0x0000062E]),
    (0xFCA4, &[0x0000062A, 0x00000645]),
    (0xFCA5, &[0x0000062A, 0x00000647]),
    (0xFCA6, &[0x0000062B, 0x00000645]),
    (0xFCA7, &[0x0000062C, 0x0000062D]),
    (0xFCA8, &[0x0000062C, 0x00000645]),
    (0xFCA9, &[0x0000062D, 0x0000062C]),
    (0xFCAA, &[0x0000062D, 0x00000645]),
    (0xFCAB, &[0x0000062E, 0x0000062C]),
    (0xFCAC, &[0x0000062E, 0x00000645]),
    (0xFCAD, &[0x00000633, 0x0000062C]),
    (0xFCAE, &[0x00000633, 0x0000062D]),
    (0xFCAF, &[0x00000633, 0x0000062E]),
    (0xFCB0, &[0x00000633, 0x00000645]),
    (0xFCB1, &[0x00000635, 0x0000062D]),
    (0xFCB2, &[0x00000635, 0x0000062E]),
    (0xFCB3, &[0x00000635, 0x00000645]),
    (0xFCB4, &[0x00000636, 0x0000062C]),
    (0xFCB5, &[0x00000636, 0x0000062D]),
    (0xFCB6, &[0x00000636, 0x0000062E]),
    (0xFCB7, &[0x00000636, 0x00000645]),
    (0xFCB8, &[0x00000637, 0x0000062D]),
    (0xFCB9, &[0x00000638, 0x00000645]),
    (0xFCBA, &[0x00000639, 0x0000062C]),
    (0xFCBB, &[0x00000639, 0x00000645]),
    (0xFCBC, &[0x0000063A, 0x0000062C]),
    (0xFCBD, &[0x0000063A, 0x00000645]),
    (0xFCBE, &[0x00000641, 0x0000062C]),
    (0xFCBF, &[0x00000641, 0x0000062D]),
    (0xFCC0, &[0x00000641, 0x0000062E]),
    (0xFCC1, &[0x00000641, 0x00000645]),
    (0xFCC2, &[0x00000642, 0x0000062D]),
    (0xFCC3, &[0x00000642, 0x00000645]),
    (0xFCC4, &[0x00000643, 0x0000062C]),
    (0xFCC5, &[0x00000643, 0x0000062D]),
    (0xFCC6, &[0x00000643, 0x0000062E]),
    (0xFCC7, &[0x00000643, 0x00000644]),
    (0xFCC8, &[0x00000643, 0x00000645]),
    (0xFCC9, &[0x00000644, 0x0000062C]),
    (0xFCCA, &[0x00000644, 0x0000062D]),
    (0xFCCB, &[0x00000644, 0x0000062E]),
    (0xFCCC, &[0x00000644, 0x00000645]),
    (0xFCCD, &[0x00000644, 0x00000647]),
    (0xFCCE, &[0x00000645, 0x0000062C]),
    (0xFCCF, &[0x00000645, 0x0000062D]),
    (0xFCD0, &[0x00000645, 0x0000062E]),
    (0xFCD1, &[0x00000645, 0x00000645]),
    (0xFCD2, &[0x00000646, 0x0000062C]),
    (0xFCD3, &[0x00000646, 0x0000062D]),
    (0xFCD4, &[0x00000646, 0x0000062E]),
    (0xFCD5, &[0x00000646, 0x00000645]),
    (0xFCD6, &[0x00000646, 0x00000647]),
    (0xFCD7, &[0x00000647, 0x0000062C]),
    (0xFCD8, &[0x00000647, 0x00000645]),
    (0xFCD9, &[0x00000647, 0x23000670]),
    (0xFCDA, &[0x0000064A, 0x0000062C]),
    (0xFCDB, &[0x0000064A, 0x0000062D]),
    (0xFCDC, &[0x0000064A, 0x0000062E]),
    (0xFCDD, &[0x0000064A, 0x00000645]),
    (0xFCDE, &[0x0000064A, 0x00000647]),
    (0xFCDF, &[0x0000064A, 0xE6000654, 0x00000645]),
    (0xFCE0, &[0x0000064A, 0xE6000654, 0x00000647]),
    (0xFCE1, &[0x00000628, 0x00000645]),
    (0xFCE2, &[0x00000628, 0x00000647]),
    (0xFCE3, &[0x0000062A, 0x00000645]),
    (0xFCE4, &[0x0000062A, 0x00000647]),
    (0xFCE5, &[0x0000062B, 0x00000645]),
    (0xFCE6, &[0x0000062B, 0x00000647]),
    (0xFCE7, &[0x00000633, 0x00000645]),
    (0xFCE8, &[0x00000633, 0x00000647]),
    (0xFCE9, &[0x00000634, 0x00000645]),
    (0xFCEA, &[0x00000634, 0x00000647]),
    (0xFCEB, &[0x00000643, 0x00000644]),
    (0xFCEC, &[0x00000643, 0x00000645]),
    (0xFCED, &[0x00000644, 0x00000645]),
    (0xFCEE, &[0x00000646, 0x00000645]),
    (0xFCEF, &[0x00000646, 0x00000647]),
    (0xFCF0, &[0x0000064A, 0x00000645]),
    (0xFCF1, &[0x0000064A, 0x00000647]),
    (0xFCF2, &[0x00000640, 0x1E00064E, 0x21000651]),
    (0xFCF3, &[0x00000640, 0x1F00064F, 0x21000651]),
    (0xFCF4, &[0x00000640, 0x20000650, 0x21000651]),
    (0xFCF5, &[0x00000637, 0x00000649]),
    (0xFCF6, &[0x00000637, 0x0000064A]),
    (0xFCF7, &[0x00000639, 0x00000649]),
    (0xFCF8, &[0x00000639, 0x0000064A]),
    (0xFCF9, &[0x0000063A, 0x00000649]),
    (0xFCFA, &[0x0000063A, 0x0000064A]),
    (0xFCFB, &[0x00000633, 0x00000649]),
    (0xFCFC, &[0x00000633, 0x0000064A]),
    (0xFCFD, &[0x00000634, 0x00000649]),
    (0xFCFE, &[0x00000634, 0x0000064A]),
    (0xFCFF, &[0x0000062D, 0x00000649]),
    (0xFD00, &[0x0000062D, 0x0000064A]),
    (0xFD01, &[0x0000062C, 0x00000649]),
    (0xFD02, &[0x0000062C, 0x0000064A]),
    (0xFD03, &[0x0000062E, 0x00000649]),
    (0xFD04, &[0x0000062E, 0x0000064A]),
    (0xFD05, &[0x00000635, 0x00000649]),
    (0xFD06, &[0x00000635, 0x0000064A]),
    (0xFD07, &[0x00000636, 0x00000649]),
    (0xFD08, &[0x00000636, 0x0000064A]),
    (0xFD09, &[0x00000634, 0x0000062C]),
    (0xFD0A, &[0x00000634, 0x0000062D]),
    (0xFD0B, &[0x00000634, 0x0000062E]),
    (0xFD0C, &[0x00000634, 0x00000645]),
    (0xFD0D, &[0x00000634, 0x00000631]),
    (0xFD0E, &[0x00000633, 0x00000631]),
    (0xFD0F, &[0x00000635, 0x00000631]),
    (0xFD10, &[0x00000636, 0x00000631]),
    (0xFD11, &[0x00000637, 0x00000649]),
    (0xFD12, &[0x00000637, 0x0000064A]),
    (0xFD13, &[0x00000639, 0x00000649]),
    (0xFD14, &[0x00000639, 0x0000064A]),
    (0xFD15, &[0x0000063A, 0x00000649]),
    (0xFD16, &[0x0000063A, 0x0000064A]),
    (0xFD17, &[0x00000633, 0x00000649]),
    (0xFD18, &[0x00000633, 0x0000064A]),
    (0xFD19, &[0x00000634, 0x00000649]),
    (0xFD1A, &[0x00000634, 0x0000064A]),
    (0xFD1B, &[0x0000062D, 0x00000649]),
    (0xFD1C, &[0x0000062D, 0x0000064A]),
    (0xFD1D, &[0x0000062C, 0x00000649]),
    (0xFD1E, &[0x0000062C, 0x0000064A]),
    (0xFD1F, &[0x0000062E, 0x00000649]),
    (0xFD20, &[0x0000062E, 0x0000064A]),
    (0xFD21, &[0x00000635, 0x00000649]),
    (0xFD22, &[0x00000635, 0x0000064A]),
    (0xFD23, &[0x00000636, 0x00000649]),
    (0xFD24, &[0x00000636, 0x0000064A]),
    (0xFD25, &[0x00000634, 0x0000062C]),
    (0xFD26, &[0x00000634, 0x0000062D]),
    (0xFD27, &[0x00000634, 0x0000062E]),
    (0xFD28, &[0x00000634, 0x00000645]),
    (0xFD29, &[0x00000634, 0x00000631]),
    (0xFD2A, &[0x00000633, 0x00000631]),
    (0xFD2B, &[0x00000635, 0x00000631]),
    (0xFD2C, &[0x00000636, 0x00000631]),
    (0xFD2D, &[0x00000634, 0x0000062C]),
    (0xFD2E, &[0x00000634, 0x0000062D]),
    (0xFD2F, &[0x00000634, 0x0000062E]),
    (0xFD30, &[0x00000634, 0x00000645]),
    (0xFD31, &[0x00000633, 0x00000647]),
    (0xFD32, &[0x00000634, 0x00000647]),
    (0xFD33, &[0x00000637, 0x00000645]),
    (0xFD34, &[0x00000633, 0x0000062C]),
    (0xFD35, &[0x00000633, 0x0000062D]),
    (0xFD36, &[0x00000633, 0x0000062E]),
    (0xFD37, &[0x00000634, 0x0000062C]),
    (0xFD38, &[0x00000634, 0x0000062D]),
    (0xFD39, &[0x00000634, 0x0000062E]),
    (0xFD3A, &[0x00000637, 0x00000645]),
    (0xFD3B, &[0x00000638, 0x00000645]),
    (0xFD3C, &[0x00000627, 0x1B00064B]),
    (0xFD3D, &[0x00000627, 0x1B00064B]),
    (0xFD50, &[0x0000062A, 0x0000062C, 0x00000645]),
    (0xFD51, &[0x0000062A, 0x0000062D, 0x0000062C]),
    (0xFD52, &[0x0000062A, 0x0000062D, 0x0000062C]),
    (0xFD53, &[0x0000062A, 0x0000062D, 0x00000645]),
    (0xFD54, &[0x0000062A, 0x0000062E, 0x00000645]),
    (0xFD55, &[0x0000062A, 0x00000645, 0x0000062C]),
    (0xFD56, &[0x0000062A, 0x00000645, 0x0000062D]),
    (0xFD57, &[0x0000062A, 0x00000645, 0x0000062E]),
    (0xFD58, &[0x0000062C, 0x00000645, 0x0000062D]),
    (0xFD59, &[0x0000062C, 0x00000645, 0x0000062D]),
    (0xFD5A, &[0x0000062D, 0x00000645, 0x0000064A]),
    (0xFD5B, &[0x0000062D, 0x00000645, 0x00000649]),
    (0xFD5C, &[0x00000633, 0x0000062D, 0x0000062C]),
    (0xFD5D, &[0x00000633, 0x0000062C, 0x0000062D]),
    (0xFD5E, &[0x00000633, 0x0000062C, 0x00000649]),
    (0xFD5F, &[0x00000633, 0x00000645, 0x0000062D]),
    (0xFD60, &[0x00000633, 0x00000645, 0x0000062D]),
    (0xFD61, &[0x00000633, 0x00000645, 0x0000062C]),
    (0xFD62, &[0x00000633, 0x00000645, 0x00000645]),
    (0xFD63, &[0x00000633, 0x00000645, 0x00000645]),
    (0xFD64, &[0x00000635, 0x0000062D, 0x0000062D]),
    (0xFD65, &[0x00000635, 0x0000062D, 0x0000062D]),
    (0xFD66, &[0x00000635, 0x00000645, 0x00000645]),
    (0xFD67, &[0x00000634, 0x0000062D, 0x00000645]),
    (0xFD68, &[0x00000634, 0x0000062D, 0x00000645]),
    (0xFD69, &[0x00000634, 0x0000062C, 0x0000064A]),
    (0xFD6A, &[0x00000634, 0x00000645, 0x0000062E]),
    (0xFD6B, &[0x00000634, 0x00000645, 0x0000062E]),
    (0xFD6C, &[0x00000634, 0x00000645, 0x00000645]),
    (0xFD6D, &[0x00000634, 0x00000645, 0x00000645]),
    (0xFD6E, &[0x00000636, 0x0000062D, 0x00000649]),
    (0xFD6F, &[0x00000636, 0x0000062E, 0x00000645]),
    (0xFD70, &[0x00000636, 0x0000062E, 0x00000645]),
    (0xFD71, &[0x00000637, 0x00000645, 0x0000062D]),
    (0xFD72, &[0x00000637, 0x00000645, 0x0000062D]),
    (0xFD73, &[0x00000637, 0x00000645, 0x00000645]),
    (0xFD74, &[0x00000637, 0x00000645, 0x0000064A]),
    (0xFD75, &[0x00000639, 0x0000062C, 0x00000645]),
    (0xFD76, &[0x00000639, 0x00000645, 0x00000645]),
    (0xFD77, &[0x00000639, 0x00000645, 0x00000645]),
    (0xFD78, &[0x00000639, 0x00000645, 0x00000649]),
    (0xFD79, &[0x0000063A, 0x00000645, 0x00000645]),
    (0xFD7A, &[0x0000063A, 0x00000645, 0x0000064A]),
    (0xFD7B, &[0x0000063A, 0x00000645, 0x00000649]),
    (0xFD7C, &[0x00000641, 0x0000062E, 0x00000645]),
    (0xFD7D, &[0x00000641, 0x0000062E, 0x00000645]),
    (0xFD7E, &[0x00000642, 0x00000645, 0x0000062D]),
    (0xFD7F, &[0x00000642, 0x00000645, 0x00000645]),
    (0xFD80, &[0x00000644, 0x0000062D, 0x00000645]),
    (0xFD81, &[0x00000644, 0x0000062D, 0x0000064A]),
    (0xFD82, &[0x00000644, 0x0000062D, 0x00000649]),
    (0xFD83, &[0x00000644, 0x0000062C, 0x0000062C]),
    (0xFD84, &[0x00000644, 0x0000062C, 0x0000062C]),
    (0xFD85, &[0x00000644, 0x0000062E, 0x00000645]),
    (0xFD86, &[0x00000644, 0x0000062E, 0x00000645]),
    (0xFD87, &[0x00000644, 0x00000645, 0x0000062D]),
    (0xFD88, &[0x00000644, 0x00000645, 0x0000062D]),
    (0xFD89, &[0x00000645, 0x0000062D, 0x0000062C]),
    (0xFD8A, &[0x00000645, 0x0000062D, 0x00000645]),
    (0xFD8B, &[0x00000645, 0x0000062D, 0x0000064A]),
    (0xFD8C, &[0x00000645, 0x0000062C, 0x0000062D]),
    (0xFD8D, &[0x00000645, 0x0000062C, 0x00000645]),
    (0xFD8E, &[0x00000645, 0x0000062E, 0x0000062C]),
    (0xFD8F, &[0x00000645, 0x0000062E, 0x00000645]),
    (0xFD92, &[0x00000645, 0x0000062C, 0x0000062E]),
    (0xFD93, &[0x00000647, 0x00000645, 0x0000062C]),
    (0xFD94, &[0x00000647, 0x00000645, 0x00000645]),
    (0xFD95, &[0x00000646, 0x0000062D, 0x00000645]),
    (0xFD96, &[0x00000646, 0x0000062D, 0x00000649]),
    (0xFD97, &[0x00000646, 0x0000062C, 0x00000645]),
    (0xFD98, &[0x00000646, 0x0000062C, 0x00000645]),
    (0xFD99, &[0x00000646, 0x0000062C, 0x00000649]),
    (0xFD9A, &[0x00000646, 0x00000645, 0x0000064A]),
    (0xFD9B, &[0x00000646, 0x00000645, 0x00000649]),
    (0xFD9C, &[0x0000064A, 0x00000645, 0x00000645]),
    (0xFD9D, &[0x0000064A, 0x00000645, 0x00000645]),
    (0xFD9E, &[0x00000628, 0x0000062E, 0x0000064A]),
    (0xFD9F, &[0x0000062A, 0x0000062C, 0x0000064A]),
    (0xFDA0, &[0x0000062A, 0x0000062C, 0x00000649]),
    (0xFDA1, &[0x0000062A, 0x0000062E, 0x0000064A]),
    (0xFDA2, &[0x0000062A, 0x0000062E, 0x00000649]),
    (0xFDA3, &[0x0000062A, 0x00000645, 0x0000064A]),
    (0xFDA4, &[0x0000062A, 0x00000645, 0x00000649]),
    (0xFDA5, &[0x0000062C, 0x00000645, 0x0000064A]),
    (0xFDA6, &[0x0000062C, 0x0000062D, 0x00000649]),
    (0xFDA7, &[0x0000062C, 0x00000645, 0x00000649]),
    (0xFDA8, &[0x00000633, 0x0000062E, 0x00000649]),
    (0xFDA9, &[0x00000635, 0x0000062D, 0x0000064A]),
    (0xFDAA, &[0x00000634, 0x0000062D, 0x0000064A]),
    (0xFDAB, &[0x00000636, 0x0000062D, 0x0000064A]),
    (0xFDAC, &[0x00000644, 0x0000062C, 0x0000064A]),
    (0xFDAD, &[0x00000644, 0x00000645, 0x0000064A]),
    (0xFDAE, &[0x0000064A, 0x0000062D, 0x0000064A]),
    (0xFDAF, &[0x0000064A, 0x0000062C, 0x0000064A]),
    (0xFDB0, &[0x0000064A, 0x00000645, 0x0000064A]),
    (0xFDB1, &[0x00000645, 0x00000645, 0x0000064A]),
    (0xFDB2, &[0x00000642, 0x00000645, 0x0000064A]),
    (0xFDB3, &[0x00000646, 0x0000062D, 0x0000064A]),
    (0xFDB4, &[0x00000642, 0x00000645, 0x0000062D]),
    (0xFDB5, &[0x00000644, 0x0000062D, 0x00000645]),
    (0xFDB6, &[0x00000639, 0x00000645, 0x0000064A]),
    (0xFDB7, &[0x00000643, 0x00000645, 0x0000064A]),
    (0xFDB8, &[0x00000646, 0x0000062C, 0x0000062D]),
    (0xFDB9, &[0x00000645, 0x0000062E, 0x0000064A]),
    (0xFDBA, &[0x00000644, 0x0000062C, 0x00000645]),
    (0xFDBB, &[0x00000643, 0x00000645, 0x00000645]),
    (0xFDBC, &[0x00000644, 0x0000062C, 0x00000645]),
    (0xFDBD, &[0x00000646, 0x0000062C, 0x0000062D]),
    (0xFDBE, &[0x0000062C, 0x0000062D, 0x0000064A]),
    (0xFDBF, &[0x0000062D, 0x0000062C, 0x0000064A]),
    (0xFDC0, &[0x00000645, 0x0000062C, 0x0000064A]),
    (0xFDC1, &[0x00000641, 0x00000645, 0x0000064A]),
    (0xFDC2, &[0x00000628, 0x0000062D, 0x0000064A]),
    (0xFDC3, &[0x00000643, 0x00000645, 0x00000645]),
    (0xFDC4, &[0x00000639, 0x0000062C, 0x00000645]),
    (0xFDC5, &[0x00000635, 0x00000645, 0x00000645]),
    (0xFDC6, &[0x00000633, 0x0000062E, 0x0000064A]),
    (0xFDC7, &[0x00000646, 0x0000062C, 0x0000064A]),
    (0xFDF0, &[0x00000635, 0x00000644, 0x000006D2]),
    (0xFDF1, &[0x00000642, 0x00000644, 0x000006D2]),
    (0xFDF2, &[0x00000627, 0x00000644, 0x00000644, 0x00000647]),
    (0xFDF3, &[0x00000627, 0x00000643, 0x00000628, 0x00000631]),
    (0xFDF4, &[0x00000645, 0x0000062D, 0x00000645, 0x0000062F]),
    (0xFDF5, &[0x00000635, 0x00000644, 0x00000639, 0x00000645]),
    (0xFDF6, &[0x00000631, 0x00000633, 0x00000648, 0x00000644]),
    (0xFDF7, &[0x00000639, 0x00000644, 0x0000064A, 0x00000647]),
    (0xFDF8, &[0x00000648, 0x00000633, 0x00000644, 0x00000645]),
    (0xFDF9, &[0x00000635, 0x00000644, 0x00000649]),
    (0xFDFA, &[0x00000635, 0x00000644, 0x00000649, 0x00000020, 0x00000627, 0x00000644, 0x00000644, 0x00000647, 0x00000020, 0x00000639, 0x00000644, 0x0000064A, 0x00000647, 0x00000020, 0x00000648, 0x00000633, 0x00000644, 0x00000645]),
    (0xFDFB, &[0x0000062C, 0x00000644, 0x00000020, 0x0000062C, 0x00000644, 0x00000627, 0x00000644, 0x00000647]),
    (0xFDFC, &[0x00000631, 0x000006CC, 0x00000627, 0x00000644]),
    (0xFE10, &[0x0000002C]),
    (0xFE11, &[0x00003001]),
    (0xFE12, &[0x00003002]),
    (0xFE13, &[0x0000003A]),
    (0xFE14, &[0x0000003B]),
    (0xFE15, &[0x00000021]),
    (0xFE16, &[0x0000003F]),
    (0xFE17, &[0x00003016]),
    (0xFE18, &[0x00003017]),
    (0xFE19, &[0x0000002E, 0x0000002E, 0x0000002E]),
    (0xFE30, &[0x0000002E, 0x0000002E]),
    (0xFE31, &[0x00002014]),
    (0xFE32, &[0x00002013]),
    (0xFE33, &[0x0000005F]),
    (0xFE34, &[0x0000005F]),
    (0xFE35, &[0x00000028]),
    (0xFE36, &[0x00000029]),
    (0xFE37, &[0x0000007B]),
    (0xFE38, &[0x0000007D]),
    (0xFE39, &[0x00003014]),
    (0xFE3A, &[0x00003015]),
    (0xFE3B, &[0x00003010]),
    (0xFE3C, &[0x00003011]),
    (0xFE3D, &[0x0000300A]),
    (0xFE3E, &[0x0000300B]),
    (0xFE3F, &[0x00003008]),
    (0xFE40, &[0x00003009]),
    (0xFE41, &[0x0000300C]),
    (0xFE42, &[0x0000300D]),
    (0xFE43, &[0x0000300E]),
    (0xFE44, &[0x0000300F]),
    (0xFE47, &[0x0000005B]),
    (0xFE48, &[0x0000005D]),
    (0xFE49, &[0x00000020, 0xE6000305]),
    (0xFE4A, &[0x00000020, 0xE6000305]),
    (0xFE4B, &[0x00000020, 0xE6000305]),
    (0xFE4C, &[0x00000020, 0xE6000305]),
    (0xFE4D, &[0x0000005F]),
    (0xFE4E, &[0x0000005F]),
    (0xFE4F, &[0x0000005F]),
    (0xFE50, &[0x0000002C]),
    (0xFE51, &[0x00003001]),
    (0xFE52, &[0x0000002E]),
    (0xFE54, &[0x0000003B]),
    (0xFE55, &[0x0000003A]),
    (0xFE56, &[0x0000003F]),
    (0xFE57, &[0x00000021]),
    (0xFE58, &[0x00002014]),
    (0xFE59, &[0x00000028]),
    (0xFE5A, &[0x00000029]),
    (0xFE5B, &[0x0000007B]),
    (0xFE5C, &[0x0000007D]),
    (0xFE5D, &[0x00003014]),
    (0xFE5E, &[0x00003015]),
    (0xFE5F, &[0x00000023]),
    (0xFE60, &[0x00000026]),
    (0xFE61, &[0x0000002A]),
    (0xFE62, &[0x0000002B]),
    (0xFE63, &[0x0000002D]),
    (0xFE64, &[0x0000003C]),
    (0xFE65, &[0x0000003E]),
    (0xFE66, &[0x0000003D]),
    (0xFE68, &[0x0000005C]),
    (0xFE69, &[0x00000024]),
    (0xFE6A, &[0x00000025]),
    (0xFE6B, &[0x00000040]),
    (0xFE70, &[0x00000020, 0x1B00064B]),
    (0xFE71, &[0x00000640, 0x1B00064B]),
    (0xFE72, &[0x00000020, 0x1C00064C]),
    (0xFE74, &[0x00000020, 0x1D00064D]),
    (0xFE76, &[0x00000020, 0x1E00064E]),
    (0xFE77, &[0x00000640, 0x1E00064E]),
    (0xFE78, &[0x00000020, 0x1F00064F]),
    (0xFE79, &[0x00000640, 0x1F00064F]),
    (0xFE7A, &[0x00000020, 0x20000650]),
    (0xFE7B, &[0x00000640, 0x20000650]),
    (0xFE7C, &[0x00000020, 0x21000651]),
    (0xFE7D, &[0x00000640, 0x21000651]),
    (0xFE7E, &[0x00000020, 0x22000652]),
    (0xFE7F, &[0x00000640, 0x22000652]),
    (0xFE80, &[0x00000621]),
    (0xFE81, &[0x00000627, 0xE6000653]),
    (0xFE82, &[0x00000627, 0xE6000653]),
    (0xFE83, &[0x00000627, 0xE6000654]),
    (0xFE84, &[0x00000627, 0xE6000654]),
    (0xFE85, &[0x00000648, 0xE6000654]),
    (0xFE86, &[0x00000648, 0xE6000654]),
    (0xFE87, &[0x00000627, 0xDC000655]),
    (0xFE88, &[0x00000627, 0xDC000655]),
    (0xFE89, &[0x0000064A, 0xE6000654]),
    (0xFE8A, &[0x0000064A, 0xE6000654]),
    (0xFE8B, &[0x0000064A, 0xE6000654]),
    (0xFE8C, &[0x0000064A, 0xE6000654]),
    (0xFE8D, &[0x00000627]),
    (0xFE8E, &[0x00000627]),
    (0xFE8F, &[0x00000628]),
    (0xFE90, &[0x00000628]),
    (0xFE91, &[0x00000628]),
    (0xFE92, &[0x00000628]),
    (0xFE93, &[0x00000629]),
    (0xFE94, &[0x00000629]),
    (0xFE95, &[0x0000062A]),
    (0xFE96, &[0x0000062A]),
    (0xFE97, &[0x0000062A]),
    (0xFE98, &[0x0000062A]),
    (0xFE99, &[0x0000062B]),
    (0xFE9A, &[0x0000062B]),
    (0xFE9B, &[0x0000062B]),
    (0xFE9C, &[0x0000062B]),
    (0xFE9D, &[0x0000062C]),
    (0xFE9E, &[0x0000062C]),
    (0xFE9F, &[0x0000062C]),
    (0xFEA0, &[0x0000062C]),
    (0xFEA1, &[0x0000062D]),
    (0xFEA2, &[0x0000062D]),
    (0xFEA3, &[0x0000062D]),
    (0xFEA4, &[0x0000062D]),
    (0xFEA5, &[0x0000062E]),
    (0xFEA6, &[0x0000062E]),
    (0xFEA7, &[0x0000062E]),
    (0xFEA8, &[0x0000062E]),
    (0xFEA9, &[0x0000062F]),
    (0xFEAA, &[0x0000062F]),
    (0xFEAB, &[0x00000630]),
    (0xFEAC, &[0x00000630]),
    (0xFEAD, &[0x00000631]),
    (0xFEAE, &[0x00000631]),
    (0xFEAF, &[0x00000632]),
    (0xFEB0, &[0x00000632]),
    (0xFEB1, &[0x00000633]),
    (0xFEB2, &[0x00000633]),
    (0xFEB3, &[0x00000633]),
    (0xFEB4, &[0x00000633]),
    (0xFEB5, &[0x00000634]),
    (0xFEB6, &[0x00000634]),
    (0xFEB7, &[0x00000634]),
    (0xFEB8, &[0x00000634]),
    (0xFEB9, &[0x00000635]),
    (0xFEBA, &[0x00000635]),
    (0xFEBB, &[0x00000635]),
    (0xFEBC, &[0x00000635]),
    (0xFEBD, &[0x00000636]),
    (0xFEBE, &[0x00000636]),
    (0xFEBF, &[0x00000636]),
    (0xFEC0, &[0x00000636]),
    (0xFEC1, &[0x00000637]),
    (0xFEC2, &[0x00000637]),
    (0xFEC3, &[0x00000637]),
    (0xFEC4, &[0x00000637]),
    (0xFEC5, &[0x00000638]),
    (0xFEC6, &[0x00000638]),
    (0xFEC7, &[0x00000638]),
    (0xFEC8, &[0x00000638]),
    (0xFEC9, &[0x00000639]),
    (0xFECA, &[0x00000639]),
    (0xFECB, &[0x00000639]),
    (0xFECC, &[0x00000639]),
    (0xFECD, &[0x0000063A]),
    (0xFECE, &[0x0000063A]),
    (0xFECF, &[0x0000063A]),
    (0xFED0, &[0x0000063A]),
    (0xFED1, &[0x00000641]),
    (0xFED2, &[0x00000641]),
    (0xFED3, &[0x00000641]),
    (0xFED4, &[0x00000641]),
    (0xFED5, &[0x00000642]),
    (0xFED6, &[0x00000642]),
    (0xFED7, &[0x00000642]),
    (0xFED8, &[0x00000642]),
    (0xFED9, &[0x00000643]),
    (0xFEDA, &[0x00000643]),
    (0xFEDB, &[0x00000643]),
    (0xFEDC, &[0x00000643]),
    (0xFEDD, &[0x00000644]),
    (0xFEDE, &[0x00000644]),
    (0xFEDF, &[0x00000644]),
    (0xFEE0, &[0x00000644]),
    (0xFEE1, &[0x00000645]),
    (0xFEE2, &[0x00000645]),
    (0xFEE3, &[0x00000645]),
    (0xFEE4, &[0x00000645]),
    (0xFEE5, &[0x00000646]),
    (0xFEE6, &[0x00000646]),
    (0xFEE7, &[0x00000646]),
    (0xFEE8, &[0x00000646]),
    (0xFEE9, &[0x00000647]),
    (0xFEEA, &[0x00000647]),
    (0xFEEB, &[0x00000647]),
    (0xFEEC, &[0x00000647]),
    (0xFEED, &[0x00000648]),
    (0xFEEE, &[0x00000648]),
    (0xFEEF, &[0x00000649]),
    (0xFEF0, &[0x00000649]),
    (0xFEF1, &[0x0000064A]),
    (0xFEF2, &[0x0000064A]),
    (0xFEF3, &[0x0000064A]),
    (0xFEF4, &[0x0000064A]),
    (0xFEF5, &[0x00000644, 0x00000627, 0xE6000653]),
    (0xFEF6, &[0x00000644, 0x00000627, 0xE6000653]),
    (0xFEF7, &[0x00000644, 0x00000627, 0xE6000654]),
    (0xFEF8, &[0x00000644, 0x00000627, 0xE6000654]),
    (0xFEF9, &[0x00000644, 0x00000627, 0xDC000655]),
    (0xFEFA, &[0x00000644, 0x00000627, 0xDC000655]),
    (0xFEFB, &[0x00000644, 0x00000627]),
    (0xFEFC, &[0x00000644, 0x00000627]),
    (0xFF01, &[0x00000021]),
    (0xFF02, &[0x00000022]),
    (0xFF03, &[0x00000023]),
    (0xFF04, &[0x00000024]),
    (0xFF05, &[0x00000025]),
    (0xFF06, &[0x00000026]),
    (0xFF07, &[0x00000027]),
    (0xFF08, &[0x00000028]),
    (0xFF09, &[0x00000029]),
    (0xFF0A, &[0x0000002A]),
    (0xFF0B, &[0x0000002B]),
    (0xFF0C, &[0x0000002C]),
    (0xFF0D, &[0x0000002D]),
    (0xFF0E, &[0x0000002E]),
    (0xFF0F, &[0x0000002F]),
    (0xFF10, &[0x00000030]),
    (0xFF11, &[0x00000031]),
    (0xFF12, &[0x00000032]),
    (0xFF13, &[0x00000033]),
    (0xFF14, &[0x00000034]),
    (0xFF15, &[0x00000035]),
    (0xFF16, &[0x00000036]),
    (0xFF17, &[0x00000037]),
    (0xFF18, &[0x00000038]),
    (0xFF19, &[0x00000039]),
    (0xFF1A, &[0x0000003A]),
    (0xFF1B, &[0x0000003B]),
    (0xFF1C, &[0x0000003C]),
    (0xFF1D, &[0x0000003D]),
    (0xFF1E, &[0x0000003E]),
    (0xFF1F, &[0x0000003F]),
    (0xFF20, &[0x00000040]),
    (0xFF21, &[0x00000041]),
    (0xFF22, &[0x00000042]),
    (0xFF23, &[0x00000043]),
    (0xFF24, &[0x00000044]),
    (0xFF25, &[0x00000045]),
    (0xFF26, &[0x00000046]),
    (0xFF27, &[0x00000047]),
    (0xFF28, &[0x00000048]),
    (0xFF29, &[0x00000049]),
    (0xFF2A, &[0x0000004A]),
    (0xFF2B, &[0x0000004B]),
    (0xFF2C, &[0x0000004C]),
    (0xFF2D, &[0x0000004D]),
    (0xFF2E, &[0x0000004E]),
    (0xFF2F, &[0x0000004F]),
    (0xFF30, &[0x00000050]),
    (0xFF31, &[0x00000051]),
    (0xFF32, &[0x00000052]),
    (0xFF33, &[0x00000053]),
    (0xFF34, &[0x00000054]),
    (0xFF35, &[0x00000055]),
    (0xFF36, &[0x00000056]),
    (0xFF37, &[0x00000057]),
    (0xFF38, &[0x00000058]),
    (0xFF39, &[0x00000059]),
    (0xFF3A, &[0x0000005A]),
    (0xFF3B, &[0x0000005B]),
    (0xFF3C, &[0x0000005C]),
    (0xFF3D, &[0x0000005D]),
    (0xFF3E, &[0x0000005E]),
    (0xFF3F, &[0x0000005F]),
    (0xFF40, &[0x00000060]),
    (0xFF41, &[0x00000061]),
    (0xFF42, &[0x00000062]),
    (0xFF43, &[0x00000063]),
    (0xFF44, &[0x00000064]),
    (0xFF45, &[0x00000065]),
    (0xFF46, &[0x00000066]),
    (0xFF47, &[0x00000067]),
    (0xFF48, &[0x00000068]),
    (0xFF49, &[0x00000069]),
    (0xFF4A, &[0x0000006A]),
    (0xFF4B, &[0x0000006B]),
    (0xFF4C, &[0x0000006C]),
    (0xFF4D, &[0x0000006D]),
    (0xFF4E, &[0x0000006E]),
    (0xFF4F, &[0x0000006F]),
    (0xFF50, &[0x00000070]),
    (0xFF51, &[0x00000071]),
    (0xFF52, &[0x00000072]),
    (0xFF53, &[0x00000073]),
    (0xFF54, &[0x00000074]),
    (0xFF55, &[0x00000075]),
    (0xFF56, &[0x00000076]),
    (0xFF57, &[0x00000077]),
    (0xFF58, &[0x00000078]),
    (0xFF59, &[0x00000079]),
    (0xFF5A, &[0x0000007A]),
    (0xFF5B, &[0x0000007B]),
    (0xFF5C, &[0x0000007C]),
    (0xFF5D, &[0x0000007D]),
    (0xFF5E, &[0x0000007E]),
    (0xFF5F, &[0x00002985]),
    (0xFF60, &[0x00002986]),
    (0xFF61, &[0x00003002]),
    (0xFF62, &[0x0000300C]),
    (0xFF63, &[0x0000300D]),
    (0xFF64, &[0x00003001]),
    (0xFF65, &[0x000030FB]),
    (0xFF66, &[0x000030F2]),
    (0xFF67, &[0x000030A1]),
    (0xFF68, &[0x000030A3]),
    (0xFF69, &[0x000030A5]),
    (0xFF6A, &[0x000030A7]),
    (0xFF6B, &[0x000030A9]),
    (0xFF6C, &[0x000030E3]),
    (0xFF6D, &[0x000030E5]),
    (0xFF6E, &[0x000030E7]),
    (0xFF6F, &[0x000030C3]),
    (0xFF70, &[0x000030FC]),
    (0xFF71, &[0x000030A2]),
    (0xFF72, &[0x000030A4]),
    (0xFF73, &[0x000030A6]),
    (0xFF74, &[0x000030A8]),
    (0xFF75, &[0x000030AA]),
    (0xFF76, &[0x000030AB]),
    (0xFF77, &[0x000030AD]),
    (0xFF78, &[0x000030AF]),
    (0xFF79, &[0x000030B1]),
    (0xFF7A, &[0x000030B3]),
    (0xFF7B, &[0x000030B5]),
    (0xFF7C, &[0x000030B7]),
    (0xFF7D, &[0x000030B9]),
    (0xFF7E, &[0x000030BB]),
    (0xFF7F, &[0x000030BD]),
    (0xFF80, &[0x000030BF]),
    (0xFF81, &[0x000030C1]),
    (0xFF82, &[0x000030C4]),
    (0xFF83, &[0x000030C6]),
    (0xFF84, &[0x000030C8]),
    (0xFF85, &[0x000030CA]),
    (0xFF86, &[0x000030CB]),
    (0xFF87, &[0x000030CC]),
    (0xFF88, &[0x000030CD]),
    (0xFF89, &[0x000030CE]),
    (0xFF8A, &[0x000030CF]),
    (0xFF8B, &[0x000030D2]),
    (0xFF8C, &[0x000030D5]),
    (0xFF8D, &[0x000030D8]),
    (0xFF8E, &[0x000030DB]),
    (0xFF8F, &[0x000030DE]),
    (0xFF90, &[0x000030DF]),
    (0xFF91, &[0x000030E0]),
    (0xFF92, &[0x000030E1]),
    (0xFF93, &[0x000030E2]),
    (0xFF94, &[0x000030E4]),
    (0xFF95, &[0x000030E6]),
    (0xFF96, &[0x000030E8]),
    (0xFF97, &[0x000030E9]),
    (0xFF98, &[0x000030EA]),
    (0xFF99, &[0x000030EB]),
    (0xFF9A, &[0x000030EC]),
    (0xFF9B, &[0x000030ED]),
    (0xFF9C, &[0x000030EF]),
    (0xFF9D, &[0x000030F3]),
    (0xFF9E, &[0x08003099]),
    (0xFF9F, &[0x0800309A]),
    (0xFFA0, &[0x00001160]),
    (0xFFA1, &[0x00001100]),
    (0xFFA2, &[0x00001101]),
    (0xFFA3, &[0x000011AA]),
    (0xFFA4, &[0x00001102]),
    (0xFFA5, &[0x000011AC]),
    (0xFFA6, &[0x000011AD]),
    (0xFFA7, &[0x00001103]),
    (0xFFA8, &[0x00001104]),
    (0xFFA9, &[0x00001105]),
    (0xFFAA, &[0x000011B0]),
    (0xFFAB, &[0x000011B1]),
    (0xFFAC, &[0x000011B2]),
    (0xFFAD, &[0x000011B3]),
    (0xFFAE, &[0x000011B4]),
    (0xFFAF, &[0x000011B5]),
    (0xFFB0, &[0x0000111A]),
    (0xFFB1, &[0x00001106]),
    (0xFFB2, &[0x00001107]),
    (0xFFB3, &[0x00001108]),
    (0xFFB4, &[0x00001121]),
    (0xFFB5, &[0x00001109]),
    (0xFFB6, &[0x0000110A]),
    (0xFFB7, &[0x0000110B]),
    (0xFFB8, &[0x0000110C]),
    (0xFFB9, &[0x0000110D]),
    (0xFFBA, &[0x0000110E]),
    (0xFFBB, &[0x0000110F]),
    (0xFFBC, &[0x00001110]),
    (0xFFBD, &[0x00001111]),
    (0xFFBE, &[0x00001112]),
    (0xFFC2, &[0x00001161]),
    (0xFFC3, &[0x00001162]),
    (0xFFC4, &[0x00001163]),
    (0xFFC5, &[0x00001164]),
    (0xFFC6, &[0x00001165]),
    (0xFFC7, &[0x00001166]),
    (0xFFCA, &[0x00001167]),
    (0xFFCB, &[0x00001168]),
    (0xFFCC, &[0x00001169]),
    (0xFFCD, &[0x0000116A]),
    (0xFFCE, &[0x0000116B]),
    (0xFFCF, &[0x0000116C]),
    (0xFFD2, &[0x0000116D]),
    (0xFFD3, &[0x0000116E]),
    (0xFFD4, &[0x0000116F]),
    (0xFFD5, &[0x00001170]),
    (0xFFD6, &[0x00001171]),
    (0xFFD7, &[0x00001172]),
    (0xFFDA, &[0x00001173]),
    (0xFFDB, &[0x00001174]),
    (0xFFDC, &[0x00001175]),
    (0xFFE0, &[0x000000A2]),
    (0xFFE1, &[0x000000A3]),
    (0xFFE2, &[0x000000AC]),
    (0xFFE3, &[0x00000020, 0xE6000304]),
    (0xFFE4, &[0x000000A6]),
    (0xFFE5, &[0x000000A5]),
    (0xFFE6, &[0x000020A9]),
    (0xFFE8, &[0x00002502]),
    (0xFFE9, &[0x00002190]),
    (0xFFEA, &[0x00002191]),
    (0xFFEB, &[0x00002192]),
    (0xFFEC, &[0x00002193]),
    (0xFFED, &[0x000025A0]),
    (0xFFEE, &[0x000025CB]),
    (0x10781, &[0x000002D0]),
    (0x10782, &[0x000002D1]),
    (0x10783, &[0x000000E6]),
    (0x10784, &[0x00000299]),
    (0x10785, &[0x00000253]),
    (0x10787, &[0x000002A3]),
    (0x10788, &[0x0000AB66]),
    (0x10789, &[0x000002A5]),
    (0x1078A, &[0x000002A4]),
    (0x1078B, &[0x00000256]),
    (0x1078C, &[0x00000257]),
    (0x1078D, &[0x00001D91]),
    (0x1078E, &[0x00000258]),
    (0x1078F, &[0x0000025E]),
    (0x10790, &[0x000002A9]),
    (0x10791, &[0x00000264]),
    (0x10792, &[0x00000262]),
    (0x10793, &[0x00000260]),
    (0x10794, &[0x0000029B]),
    (0x10795, &[0x00000127]),
    (0x10796, &[0x0000029C]),
    (0x10797, &[0x00000267]),
    (0x10798, &[0x00000284]),
    (0x10799, &[0x000002AA]),
    (0x1079A, &[0x000002AB]),
    (0x1079B, &[0x0000026C]),
    (0x1079C, &[0x0001DF04]),
    (0x1079D, &[0x0000A78E]),
    (0x1079E, &[0x0000026E]),
    (0x1079F, &[0x0001DF05]),
    (0x107A0, &[0x0000028E]),
    (0x107A1, &[0x0001DF06]),
    (0x107A2, &[0x000000F8]),
    (0x107A3, &[0x00000276]),
    (0x107A4, &[0x00000277]),
    (0x107A5, &[0x00000071]),
    (0x107A6, &[0x0000027A]),
    (0x107A7, &[0x0001DF08]),
    (0x107A8, &[0x0000027D]),
    (0x107A9, &[0x0000027E]),
    (0x107AA, &[0x00000280]),
    (0x107AB, &[0x000002A8]),
    (0x107AC, &[0x000002A6]),
    (0x107AD, &[0x0000AB67]),
    (0x107AE, &[0x000002A7]),
    (0x107AF, &[0x00000288]),
    (0x107B0, &[0x00002C71]),
    (0x107B2, &[0x0000028F]),
    (0x107B3, &[0x000002A1]),
    (0x107B4, &[0x000002A2]),
    (0x107B5, &[0x00000298]),
    (0x107B6, &[0x000001C0]),
    (0x107B7, &[0x000001C1]),
    (0x107B8, &[0x000001C2]),
    (0x107B9, &[0x0001DF0A]),
    (0x107BA, &[0x0001DF1E]),
    (0x1D400, &[0x00000041]),
    (0x1D401, &[0x00000042]),
    (0x1D402, &[0x00000043]),
    (0x1D403, &[0x00000044]),
    (0x1D404, &[0x00000045]),
    (0x1D405, &[0x00000046]),
    (0x1D406, &[0x00000047]),
    (0x1D407, &[0x00000048]),
    (0x1D408, &[0x00000049]),
    (0x1D409, &[0x0000004A]),
    (0x1D40A, &[0x0000004B]),
    (0x1D40B, &[0x0000004C]),
    (0x1D40C, &[0x0000004D]),
    (0x1D40D, &[0x0000004E]),
    (0x1D40E, &[0x0000004F]),
    (0x1D40F, &[0x00000050]),
    (0x1D410, &[0x00000051]),
    (0x1D411, &[0x00000052]),
    (0x1D412, &[0x00000053]),
    (0x1D413, &[0x00000054]),
    (0x1D414, &[0x00000055]),
    (0x1D415, &[0x00000056]),
    (0x1D416, &[0x00000057]),
    (0x1D417, &[0x00000058]),
    (0x1D418, &[0x00000059]),
    (0x1D419, &[0x0000005A]),
    (0x1D41A, &[0x00000061]),
    (0x1D41B, &[0x00000062]),
    (0x1D41C, &[0x00000063]),
    (0x1D41D, &[0x00000064]),
    (0x1D41E, &[0x00000065]),
    (0x1D41F, &[0x00000066]),
    (0x1D420, &[0x00000067]),
    (0x1D421, &[0x00000068]),
    (0x1D422, &[0x00000069]),
    (0x1D423, &[0x0000006A]),
    (0x1D424, &[0x0000006B]),
    (0x1D425, &[0x0000006C]),
    (0x1D426, &[0x0000006D]),
    (0x1D427, &[0x0000006E]),
    (0x1D428, &[0x0000006F]),
    (0x1D429, &[0x00000070]),
    (0x1D42A, &[0x00000071]),
    (0x1D42B, &[0x00000072]),
    (0x1D42C, &[0x00000073]),
    (0x1D42D, &[0x00000074]),
    (0x1D42E, &[0x00000075]),
    (0x1D42F, &[0x00000076]),
    (0x1D430, &[0x00000077]),
    (0x1D431, &[0x00000078]),
    (0x1D432, &[0x00000079]),
    (0x1D433, &[0x0000007A]),
    (0x1D434, &[0x00000041]),
    (0x1D435, &[0x00000042]),
    (0x1D436, &[0x00000043]),
    (0x1D437, &[0x00000044]),
    (0x1D438, &[0x00000045]),
    (0x1D439, &[0x00000046]),
    (0x1D43A, &[0x00000047]),
    (0x1D43B, &[0x00000048]),
    (0x1D43C, &[0x00000049]),
    (0x1D43D, &[0x0000004A]),
    (0x1D43E, &[0x0000004B]),
    (0x1D43F, &[0x0000004C]),
    (0x1D440, &[0x0000004D]),
    (0x1D441, &[0x0000004E]),
    (0x1D442, &[0x0000004F]),
    (0x1D443, &[0x00000050]),
    (0x1D444, &[0x00000051]),
    (0x1D445, &[0x00000052]),
    (0x1D446, &[0x00000053]),
    (0x1D447, &[0x00000054]),
    (0x1D448, &[0x00000055]),
    (0x1D449, &[0x00000056]),
    (0x1D44A, &[0x00000057]),
    (0x1D44B, &[0x00000058]),
    (0x1D44C, &[0x00000059]),
    (0x1D44D, &[0x0000005A]),
    (0x1D44E, &[0x00000061]),
    (0x1D44F, &[0x00000062]),
    (0x1D450, &[0x00000063]),
    (0x1D451, &[0x00000064]),
    (0x1D452, &[0x00000065]),
    (0x1D453, &[0x00000066]),
    (0x1D454, &[0x00000067]),
    (0x1D456, &[0x00000069]),
    (0x1D457, &[0x0000006A]),
    (0x1D458, &[0x0000006B]),
    (0x1D459, &[0x0000006C]),
    (0x1D45A, &[0x0000006D]),
    (0x1D45B, &[0x0000006E]),
    (0x1D45C, &[0x0000006F]),
    (0x1D45D, &[0x00000070]),
    (0x1D45E, &[0x00000071]),
    (0x1D45F, &[0x00000072]),
    (0x1D460, &[0x00000073]),
    (0x1D461, &[0x00000074]),
    (0x1D462, &[0x00000075]),
    (0x1D463, &[0x00000076]),
    (0x1D464, &[0x00000077]),
    (0x1D465, &[0x00000078]),
    (0x1D466, &[0x00000079]),
    (0x1D467, &[0x0000007A]),
    (0x1D468, &[0x00000041]),
    (0x1D469, &[0x00000042]),
    (0x1D46A, &[0x00000043]),
    (0x1D46B, &[0x00000044]),
    (0x1D46C, &[0x00000045]),
    (0x1D46D, &[0x00000046]),
    (0x1D46E, &[0x00000047]),
    (0x1D46F, &[0x00000048]),
    (0x1D470, &[0x00000049]),
    (0x1D471, &[0x0000004A]),
    (0x1D472, &[0x0000004B]),
    (0x1D473, &[0x0000004C]),
    (0x1D474, &[0x0000004D]),
    (0x1D475, &[0x0000004E]),
    (0x1D476, &[0x0000004F]),
    (0x1D477, &[0x00000050]),
    (0x1D478, &[0x00000051]),
    (0x1D479, &[0x00000052]),
    (0x1D47A, &[0x00000053]),
    (0x1D47B, &[0x00000054]),
    (0x1D47C, &[0x00000055]),
    (0x1D47D, &[0x00000056]),
    (0x1D47E, &[0x00000057]),
    (0x1D47F, &[0x00000058]),
    (0x1D480, &[0x00000059]),
    (0x1D481, &[0x0000005A]),
    (0x1D482, &[0x00000061]),
    (0x1D483, &[0x00000062]),
    (0x1D484, &[0x00000063]),
    (0x1D485, &[0x00000064]),
    (0x1D486, &[0x00000065]),
    (0x1D487, &[0x00000066]),
    (0x1D488, &[0x00000067]),
    (0x1D489, &[0x00000068]),
    (0x1D48A, &[0x00000069]),
    (0x1D48B, &[0x0000006A]),
    (0x1D48C, &[0x0000006B]),
    (0x1D48D, &[0x0000006C]),
    (0x1D48E, &[0x0000006D]),
    (0x1D48F, &[0x0000006E]),
    (0x1D490, &[0x0000006F]),
    (0x1D491, &[0x00000070]),
    (0x1D492, &[0x00000071]),
    (0x1D493, &[0x00000072]),
    (0x1D494, &[0x00000073]),
    (0x1D495, &[0x00000074]),
    (0x1D496, &[0x00000075]),
    (0x1D497, &[0x00000076]),
    (0x1D498, &[0x00000077]),
    (0x1D499, &[0x00000078]),
    (0x1D49A, &[0x00000079]),
    (0x1D49B, &[0x0000007A]),
    (0x1D49C, &[0x00000041]),
    (0x1D49E, &[0x00000043]),
    (0x1D49F, &[0x00000044]),
    (0x1D4A2, &[0x00000047]),
    (0x1D4A5, &[0x0000004A]),
    (0x1D4A6, &[0x0000004B]),
    (0x1D4A9, &[0x0000004E]),
    (0x1D4AA, &[0x0000004F]),
    (0x1D4AB, &[0x00000050]),
    (0x1D4AC, &[0x00000051]),
    (0x1D4AE, &[0x00000053]),
    (0x1D4AF, &[0x00000054]),
    (0x1D4B0, &[0x00000055]),
    (0x1D4B1, &[0x00000056]),
    (0x1D4B2, &[0x00000057]),
    (0x1D4B3, &[0x00000058]),
    (0x1D4B4, &[0x00000059]),
    (0x1D4B5, &[0x0000005A]),
    (0x1D4B6, &[0x00000061]),
    (0x1D4B7, &[0x00000062]),
    (0x1D4B8, &[0x00000063]),
    (0x1D4B9, &[0x00000064]),
    (0x1D4BB, &[0x00000066]),
    (0x1D4BD, &[0x00000068]),
    (0x1D4BE, &[0x00000069]),
    (0x1D4BF, &[0x0000006A]),
    (0x1D4C0, &[0x0000006B]),
    (0x1D4C1, &[0x0000006C]),
    (0x1D4C2, &[0x0000006D]),
    (0x1D4C3, &[0x0000006E]),
    (0x1D4C5, &[0x00000070]),
    (0x1D4C6, &[0x00000071]),
    (0x1D4C7, &[0x00000072]),
    (0x1D4C8, &[0x00000073]),
    (0x1D4C9, &[0x00000074]),
    (0x1D4CA, &[0x00000075]),
    (0x1D4CB, &[0x00000076]),
    (0x1D4CC, &[0x00000077]),
    (0x1D4CD, &[0x00000078]),
    (0x1D4CE, &[0x00000079]),
    (0x1D4CF, &[0x0000007A]),
    (0x1D4D0, &[0x00000041]),
    (0x1D4D1, &[0x00000042]),
    (0x1D4D2, &[0x00000043]),
    (0x1D4D3, &[0x00000044]),
    (0x1D4D4, &[0x00000045]),
    (0x1D4D5, &[0x00000046]),
    (0x1D4D6, &[0x00000047]),
    (0x1D4D7, &[0x00000048]),
    (0x1D4D8, &[0x00000049]),
    (0x1D4D9, &[0x0000004A]),
    (0x1D4DA, &[0x0000004B]),
    (0x1D4DB, &[0x0000004C]),
    (0x1D4DC, &[0x0000004D]),
    (0x1D4DD, &[0x0000004E]),
    (0x1D4DE, &[0x0000004F]),
    (0x1D4DF, &[0x00000050]),
    (0x1D4E0, &[0x00000051]),
    (0x1D4E1, &[0x00000052]),
    (0x1D4E2, &[0x00000053]),
    (0x1D4E3, &[0x00000054]),
    (0x1D4E4, &[0x00000055]),
    (0x1D4E5, &[0x00000056]),
    (0x1D4E6, &[0x00000057]),
    (0x1D4E7, &[0x00000058]),
    (0x1D4E8, &[0x00000059]),
    (0x1D4E9, &[0x0000005A]),
    (0x1D4EA, &[0x00000061]),
    (0x1D4EB, &[0x00000062]),
    (0x1D4EC, &[0x00000063]),
    (0x1D4ED, &[0x00000064]),
    (0x1D4EE, &[0x00000065]),
    (0x1D4EF, &[0x00000066]),
    (0x1D4F0, &[0x00000067]),
    (0x1D4F1, &[0x00000068]),
    (0x1D4F2, &[0x00000069]),
    (0x1D4F3, &[0x0000006A]),
    (0x1D4F4, &[0x0000006B]),
    (0x1D4F5, &[0x0000006C]),
    (0x1D4F6, &[0x0000006D]),
    (0x1D4F7, &[0x0000006E]),
    (0x1D4F8, &[0x0000006F]),
    (0x1D4F9, &[0x00000070]),
    (0x1D4FA, &[0x00000071]),
    (0x1D4FB, &[0x00000072]),
    (0x1D4FC, &[0x00000073]),
    (0x1D4FD, &[0x00000074]),
    (0x1D4FE, &[0x00000075]),
    (0x1D4FF, &[0x00000076]),
    (0x1D500, &[0x00000077]),
    (0x1D501, &[0x00000078]),
    (0x1D502, &[0x00000079]),
    (0x1D503, &[0x0000007A]),
    (0x1D504, &[0x00000041]),
    (0x1D505, &[0x00000042]),
    (0x1D507, &[0x00000044]),
    (0x1D508, &[0x00000045]),
    (0x1D509, &[0x00000046]),
    (0x1D50A, &[0x00000047]),
    (0x1D50D, &[0x0000004A]),
    (0x1D50E, &[0x0000004B]),
    (0x1D50F, &[0x0000004C]),
    (0x1D510, &[0x0000004D]),
    (0x1D511, &[0x0000004E]),
    (0x1D512, &[0x0000004F]),
    (0x1D513, &[0x00000050]),
    (0x1D514, &[0x00000051]),
    (0x1D516, &[0x00000053]),
    (0x1D517, &[0x00000054]),
    (0x1D518, &[0x00000055]),
    (0x1D519, &[0x00000056]),
    (0x1D51A, &[0x00000057]),
    (0x1D51B, &[0x00000058]),
    (0x1D51C, &[0x00000059]),
    (0x1D51E, &[0x00000061]),
    (0x1D51F, &[0x00000062]),
    (0x1D520, &[0x00000063]),
    (0x1D521, &[0x00000064]),
    (0x1D522, &[0x00000065]),
    (0x1D523, &[0x00000066]),
    (0x1D524, &[0x00000067]),
    (0x1D525, &[0x00000068]),
    (0x1D526, &[0x00000069]),
    (0x1D527, &[0x0000006A]),
    (0x1D528, &[0x0000006B]),
    (0x1D529, &[0x0000006C]),
    (0x1D52A, &[0x0000006D]),
    (0x1D52B, &[0x0000006E]),
    (0x1D52C, &[0x0000006F]),
    (0x1D52D, &[0x00000070]),
    (0x1D52E, &[0x00000071]),
    (0x1D52F, &[0x00000072]),
    (0x1D530, &[0x00000073]),
    (0x1D531, &[0x00000074]),
    (0x1D532, &[0x00000075]),
    (0x1D533, &[0x00000076]),
    (0x1D534, &[0x00000077]),
    (0x1D535, &[0x00000078]),
    (0x1D536, &[0x00000079]),
    (0x1D537, &[0x0000007A]),
    (0x1D538, &[0x00000041]),
    (0x1D539, &[0x00000042]),
    (0x1D53B, &[0x00000044]),
    (0x1D53C, &[0x00000045]),
    (0x1D53D, &[0x00000046]),
    (0x1D53E, &[0x00000047]),
    (0x1D540, &[0x00000049]),
    (0x1D541, &[0x0000004A]),
    (0x1D542, &[0x0000004B]),
    (0x1D543, &[0x0000004C]),
    (0x1D544, &[0x0000004D]),
    (0x1D546, &[0x0000004F]),
    (0x1D54A, &[0x00000053]),
    (0x1D54B, &[0x00000054]),
    (0x1D54C, &[0x00000055]),
    (0x1D54D, &[0x00000056]),
    (0x1D54E, &[0x00000057]),
    (0x1D54F, &[0x00000058]),
    (0x1D550, &[0x00000059]),
    (0x1D552, &[0x00000061]),
    (0x1D553, &[0x00000062]),
    (0x1D554, &[0x00000063]),
    (0x1D555, &[0x00000064]),
    (0x1D556, &[0x00000065]),
    (0x1D557, &[0x00000066]),
    (0x1D558, &[0x00000067]),
    (0x1D559, &[0x00000068]),
    (0x1D55A, &[0x00000069]),
    (0x1D55B, &[0x0000006A]),
    (0x1D55C, &[0x0000006B]),
    (0x1D55D, &[0x0000006C]),
    (0x1D55E, &[0x0000006D]),
    (0x1D55F, &[0x0000006E]),
    (0x1D560, &[0x0000006F]),
    (0x1D561, &[0x00000070]),
    (0x1D562, &[0x00000071]),
    (0x1D563, &[0x00000072]),
    (0x1D564, &[0x00000073]),
    (0x1D565, &[0x00000074]),
    (0x1D566, &[0x00000075]),
    (0x1D567, &[0x00000076]),
    (0x1D568, &[0x00000077]),
    (0x1D569, &[0x00000078]),
    (0x1D56A, &[0x00000079]),
    (0x1D56B, &[0x0000007A]),
    (0x1D56C, &[0x00000041]),
    (0x1D56D, &[0x00000042]),
    (0x1D56E, &[0x00000043]),
    (0x1D56F, &[0x00000044]),
    (0x1D570, &[0x00000045]),
    (0x1D571, &[0x00000046]),
    (0x1D572, &[0x00000047]),
    (0x1D573, &[0x00000048]),
    (0x1D574, &[0x00000049]),
    (0x1D575, &[0x0000004A]),
    (0x1D576, &[0x0000004B]),
    (0x1D577, &[0x0000004C]),
    (0x1D578, &[0x0000004D]),
    (0x1D579, &[0x0000004E]),
    (0x1D57A, &[0x0000004F]),
    (0x1D57B, &[0x00000050]),
    (0x1D57C, &[0x00000051]),
    (0x1D57D, &[0x00000052]),
    (0x1D57E, &[0x00000053]),
    (0x1D57F, &[0x00000054]),
    (0x1D580, &[0x00000055]),
    (0x1D581, &[0x00000056]),
    (0x1D582, &[0x00000057]),
    (0x1D583, &[0x00000058]),
    (0x1D584, &[0x00000059]),
    (0x1D585, &[0x0000005A]),
    (0x1D586, &[0x00000061]),
    (0x1D587, &[0x00000062]),
    (0x1D588, &[0x00000063]),
    (0x1D589, &[0x00000064]),
    (0x1D58A, &[0x00000065]),
    (0x1D58B, &[0x00000066]),
    (0x1D58C, &[0x00000067]),
    (0x1D58D, &[0x00000068]),
    (0x1D58E, &[0x00000069]),
    (0x1D58F, &[0x0000006A]),
    (0x1D590, &[0x0000006B]),
    (0x1D591, &[0x0000006C]),
    (0x1D592, &[0x0000006D]),
    (0x1D593, &[0x0000006E]),
    (0x1D594, &[0x0000006F]),
    (0x1D595, &[0x00000070]),
    (0x1D596, &[0x00000071]),
    (0x1D597, &[0x00000072]),
    (0x1D598, &[0x00000073]),
    (0x1D599, &[0x00000074]),
    (0x1D59A, &[0x00000075]),
    (0x1D59B, &[0x00000076]),
    (0x1D59C, &[0x00000077]),
    (0x1D59D, &[0x00000078]),
    (0x1D59E, &[0x00000079]),
    (0x1D59F, &[0x0000007A]),
    (0x1D5A0, &[0x00000041]),
    (0x1D5A1, &[0x00000042]),
    (0x1D5A2, &[0x00000043]),
    (0x1D5A3, &[0x00000044]),
    (0x1D5A4, &[0x00000045]),
    (0x1D5A5, &[0x00000046]),
    (0x1D5A6, &[0x00000047]),
    (0x1D5A7, &[0x00000048]),
    (0x1D5A8, &[0x00000049]),
    (0x1D5A9, &[0x0000004A]),
    (0x1D5AA, &[0x0000004B]),
    (0x1D5AB, &[0x0000004C]),
    (0x1D5AC, &[0x0000004D]),
    (0x1D5AD, &[0x0000004E]),
    (0x1D5AE, &[0x0000004F]),
    (0x1D5AF, &[0x00000050]),
    (0x1D5B0, &[0x00000051]),
    (0x1D5B1, &[0x00000052]),
    (0x1D5B2, &[0x00000053]),
    (0x1D5B3, &[0x00000054]),
    (0x1D5B4, &[0x00000055]),
    (0x1D5B5, &[0x00000056]),
    (0x1D5B6, &[0x00000057]),
    (0x1D5B7, &[0x00000058]),
    (0x1D5B8, &[0x00000059]),
    (0x1D5B9, &[0x0000005A]),
    (0x1D5BA, &[0x00000061]),
    (0x1D5BB, &[0x00000062]),
    (0x1D5BC, &[0x00000063]),
    (0x1D5BD, &[0x00000064]),
    (0x1D5BE, &[0x00000065]),
    (0x1D5BF, &[0x00000066]),
    (0x1D5C0, &[0x00000067]),
    (0x1D5C1, &[0x00000068]),
    (0x1D5C2, &[0x00000069]),
    (0x1D5C3, &[0x0000006A]),
    (0x1D5C4, &[0x0000006B]),
    (0x1D5C5, &[0x0000006C]),
    (0x1D5C6, &[0x0000006D]),
    (0x1D5C7, &[0x0000006E]),
    (0x1D5C8, &[0x0000006F]),
    (0x1D5C9, &[0x00000070]),
    (0x1D5CA, &[0x00000071]),
    (0x1D5CB, &[0x00000072]),
    (0x1D5CC, &[0x00000073]),
    (0x1D5CD, &[0x00000074]),
    (0x1D5CE, &[0x00000075]),
    (0x1D5CF, &[0x00000076]),
    (0x1D5D0, &[0x00000077]),
    (0x1D5D1, &[0x00000078]),
    (0x1D5D2, &[0x00000079]),
    (0x1D5D3, &[0x0000007A]),
    (0x1D5D4, &[0x00000041]),
    (0x1D5D5, &[0x00000042]),
    (0x1D5D6, &[0x00000043]),
    (0x1D5D7, &[0x00000044]),
    (0x1D5D8, &[0x00000045]),
    (0x1D5D9, &[0x00000046]),
    (0x1D5DA, &[0x00000047]),
    (0x1D5DB, &[0x00000048]),
    (0x1D5DC, &[0x00000049]),
    (0x1D5DD, &[0x0000004A]),
    (0x1D5DE, &[0x0000004B]),
    (0x1D5DF, &[0x0000004C]),
    (0x1D5E0, &[0x0000004D]),
    (0x1D5E1, &[0x0000004E]),
    (0x1D5E2, &[0x0000004F]),
    (0x1D5E3, &[0x00000050]),
    (0x1D5E4, &[0x00000051]),
    (0x1D5E5, &[0x00000052]),
    (0x1D5E6, &[0x00000053]),
    (0x1D5E7, &[0x00000054]),
    (0x1D5E8, &[0x00000055]),
    (0x1D5E9, &[0x00000056]),
    (0x1D5EA, &[0x00000057]),
    (0x1D5EB, &[0x00000058]),
    (0x1D5EC, &[0x00000059]),
    (0x1D5ED, &[0x0000005A]),
    (0x1D5EE, &[0x00000061]),
    (0x1D5EF, &[0x00000062]),
    (0x1D5F0, &[0x00000063]),
    (0x1D5F1, &[0x00000064]),
    (0x1D5F2, &[0x00000065]),
    (0x1D5F3, &[0x00000066]),
    (0x1D5F4, &[0x00000067]),
    (0x1D5F5, &[0x00000068]),
    (0x1D5F6, &[0x00000069]),
    (0x1D5F7, &[0x0000006A]),
    (0x1D5F8, &[0x0000006B]),
    (0x1D5F9, &[0x0000006C]),
    (0x1D5FA, &[0x0000006D]),
    (0x1D5FB, &[0x0000006E]),
    (0x1D5FC, &[0x0000006F]),
    (0x1D5FD, &[0x00000070]),
    (0x1D5FE, &[0x00000071]),
    (0x1D5FF, &[0x00000072]),
    (0x1D600, &[0x00000073]),
    (0x1D601, &[0x00000074]),
    (0x1D602, &[0x00000075]),
    (0x1D603, &[0x00000076]),
    (0x1D604, &[0x00000077]),
    (0x1D605, &[0x00000078]),
    (0x1D606, &[0x00000079]),
    (0x1D607, &[0x0000007A]),
    (0x1D608, &[0x00000041]),
    (0x1D609, &[0x00000042]),
    (0x1D60A, &[0x00000043]),
    (0x1D60B, &[0x00000044]),
    (0x1D60C, &[0x00000045]),
    (0x1D60D, &[0x00000046]),
    (0x1D60E, &[0x00000047]),
    (0x1D60F, &[0x00000048]),
    (0x1D610, &[0x00000049]),
    (0x1D611, &[0x0000004A]),
    (0x1D612, &[0x0000004B]),
    (0x1D613, &[0x0000004C]),
    (0x1D614, &[0x0000004D]),
    (0x1D615, &[0x0000004E]),
    (0x1D616, &[0x0000004F]),
    (0x1D617, &[0x00000050]),
    (0x1D618, &[0x00000051]),
    (0x1D619, &[0x00000052]),
    (0x1D61A, &[0x00000053]),
    (0x1D61B, &[0x00000054]),
    (0x1D61C, &[0x00000055]),
    (0x1D61D, &[0x00000056]),
    (0x1D61E, &[0x00000057]),
    (0x1D61F, &[0x00000058]),
    (0x1D620, &[0x00000059]),
    (0x1D621, &[0x0000005A]),
    (0x1D622, &[0x00000061]),
    (0x1D623, &[0x00000062]),
    (0x1D624, &[0x00000063]),
    (0x1D625, &[0x00000064]),
    (0x1D626, &[0x00000065]),
    (0x1D627, &[0x00000066]),
    (0x1D628, &[0x00000067]),
    (0x1D629, &[0x00000068]),
    (0x1D62A, &[0x00000069]),
    (0x1D62B, &[0x0000006A]),
    (0x1D62C, &[0x0000006B]),
    (0x1D62D, &[0x0000006C]),
    (0x1D62E, &[0x0000006D]),
    (0x1D62F, &[0x0000006E]),
    (0x1D630, &[0x0000006F]),
    (0x1D631, &[0x00000070]),
    (0x1D632, &[0x00000071]),
    (0x1D633, &[0x00000072]),
    (0x1D634, &[0x00000073]),
    (0x1D635, &[0x00000074]),
    (0x1D636, &[0x00000075]),
    (0x1D637, &[0x00000076]),
    (0x1D638, &[0x00000077]),
    (0x1D639, &[0x00000078]),
    (0x1D63A, &[0x00000079]),
    (0x1D63B, &[0x0000007A]),
    (0x1D63C, &[0x00000041]),
    (0x1D63D, &[0x00000042]),
    (0x1D63E, &[0x00000043]),
    (0x1D63F, &[0x00000044]),
    (0x1D640, &[0x00000045]),
    (0x1D641, &[0x00000046]),
    (0x1D642, &[0x00000047]),
    (0x1D643, &[0x00000048]),
    (0x1D644, &[0x00000049]),
    (0x1D645, &[0x0000004A]),
    (0x1D646, &[0x0000004B]),
    (0x1D647, &[0x0000004C]),
    (0x1D648, &[0x0000004D]),
    (0x1D649, &[0x0000004E]),
    (0x1D64A, &[0x0000004F]),
    (0x1D64B, &[0x00000050]),
    (0x1D64C, &[0x00000051]),
    (0x1D64D, &[0x00000052]),
    (0x1D64E, &[0x00000053]),
    (0x1D64F, &[0x00000054]),
    (0x1D650, &[0x00000055]),
    (0x1D651, &[0x00000056]),
    (0x1D652, &[0x00000057]),
    (0x1D653, &[0x00000058]),
    (0x1D654, &[0x00000059]),
    (0x1D655, &[0x0000005A]),
    (0x1D656, &[0x00000061]),
    (0x1D657, &[0x00000062]),
    (0x1D658, &[0x00000063]),
    (0x1D659, &[0x00000064]),
    (0x1D65A, &[0x00000065]),
    (0x1D65B, &[0x00000066]),
    (0x1D65C, &[0x00000067]),
    (0x1D65D, &[0x00000068]),
    (0x1D65E, &[0x00000069]),
    (0x1D65F, &[0x0000006A]),
    (0x1D660, &[0x0000006B]),
    (0x1D661, &[0x0000006C]),
    (0x1D662, &[0x0000006D]),
    (0x1D663, &[0x0000006E]),
    (0x1D664, &[0x0000006F]),
    (0x1D665, &[0x00000070]),
    (0x1D666, &[0x00000071]),
    (0x1D667, &[0x00000072]),
    (0x1D668, &[0x00000073]),
    (0x1D669, &[0x00000074]),
    (0x1D66A, &[0x00000075]),
    (0x1D66B, &[0x00000076]),
    (0x1D66C, &[0x00000077]),
    (0x1D66D, &[0x00000078]),
    (0x1D66E, &[0x00000079]),
    (0x1D66F, &[0x0000007A]),
    (0x1D670, &[0x00000041]),
    (0x1D671, &[0x00000042]),
    (0x1D672, &[0x00000043]),
    (0x1D673, &[0x00000044]),
    (0x1D674, &[0x00000045]),
    (0x1D675, &[0x00000046]),
    (0x1D676, &[0x00000047]),
    (0x1D677, &[0x00000048]),
    (0x1D678, &[0x00000049]),
    (0x1D679, &[0x0000004A]),
    (0x1D67A, &[0x0000004B]),
    (0x1D67B, &[0x0000004C]),
    (0x1D67C, &[0x0000004D]),
    (0x1D67D, &[0x0000004E]),
    (0x1D67E, &[0x0000004F]),
    (0x1D67F, &[0x00000050]),
    (0x1D680, &[0x00000051]),
    (0x1D681, &[0x00000052]),
    (0x1D682, &[0x00000053]),
    (0x1D683, &[0x00000054]),
    (0x1D684, &[0x00000055]),
    (0x1D685, &[0x00000056]),
    (0x1D686, &[0x00000057]),
    (0x1D687, &[0x00000058]),
    (0x1D688, &[0x00000059]),
    (0x1D689, &[0x0000005A]),
    (0x1D68A, &[0x00000061]),
    (0x1D68B, &[0x00000062]),
    (0x1D68C, &[0x00000063]),
    (0x1D68D, &[0x00000064]),
    (0x1D68E, &[0x00000065]),
    (0x1D68F, &[0x00000066]),
    (0x1D690, &[0x00000067]),
    (0x1D691, &[0x00000068]),
    (0x1D692, &[0x00000069]),
    (0x1D693, &[0x0000006A]),
    (0x1D694, &[0x0000006B]),
    (0x1D695, &[0x0000006C]),
    (0x1D696, &[0x0000006D]),
    (0x1D697, &[0x0000006E]),
    (0x1D698, &[0x0000006F]),
    (0x1D699, &[0x00000070]),
    (0x1D69A, &[0x00000071]),
    (0x1D69B, &[0x00000072]),
    (0x1D69C, &[0x00000073]),
    (0x1D69D, &[0x00000074]),
    (0x1D69E, &[0x00000075]),
    (0x1D69F, &[0x00000076]),
    (0x1D6A0, &[0x00000077]),
    (0x1D6A1, &[0x00000078]),
    (0x1D6A2, &[0x00000079]),
    (0x1D6A3, &[0x0000007A]),
    (0x1D6A4, &[0x00000131]),
    (0x1D6A5, &[0x00000237]),
    (0x1D6A8, &[0x00000391]),
    (0x1D6A9, &[0x00000392]),
    (0x1D6AA, &[0x00000393]),
    (0x1D6AB, &[0x00000394]),
    (0x1D6AC, &[0x00000395]),
    (0x1D6AD, &[0x00000396]),
    (0x1D6AE, &[0x00000397]),
    (0x1D6AF, &[0x00000398]),
    (0x1D6B0, &[0x00000399]),
    (0x1D6B1, &[0x0000039A]),
    (0x1D6B2, &[0x0000039B]),
    (0x1D6B3, &[0x0000039C]),
    (0x1D6B4, &[0x0000039D]),
    (0x1D6B5, &[0x0000039E]),
    (0x1D6B6, &[0x0000039F]),
    (0x1D6B7, &[0x000003A0]),
    (0x1D6B8, &[0x000003A1]),
    (0x1D6B9, &[0x00000398]),
    (0x1D6BA, &[0x000003A3]),
    (0x1D6BB, &[0x000003A4]),
    (0x1D6BC, &[0x000003A5]),
    (0x1D6BD, &[0x000003A6]),
    (0x1D6BE, &[0x000003A7]),
    (0x1D6BF, &[0x000003A8]),
    (0x1D6C0, &[0x000003A9]),
    (0x1D6C1, &[0x00002207]),
    (0x1D6C2, &[0x000003B1]),
    (0x1D6C3, &[0x000003B2]),
    (0x1D6C4, &[0x000003B3]),
    (0x1D6C5, &[0x000003B4]),
    (0x1D6C6, &[0x000003B5]),
    (0x1D6C7, &[0x000003B6]),
    (0x1D6C8, &[0x000003B7]),
    (0x1D6C9, &[0x000003B8]),
    (0x1D6CA, &[0x000003B9]),
    (0x1D6CB, &[0x000003BA]),
    (0x1D6CC, &[0x000003BB]),
    (0x1D6CD, &[0x000003BC]),
    (0x1D6CE, &[0x000003BD]),
    (0x1D6CF, &[0x000003BE]),
    (0x1D6D0, &[0x000003BF]),
    (0x1D6D1, &[0x000003C0]),
    (0x1D6D2, &[0x000003C1]),
    (0x1D6D3, &[0x000003C2]),
    (0x1D6D4, &[0x000003C3]),
    (0x1D6D5, &[0x000003C4]),
    (0x1D6D6, &[0x000003C5]),
    (0x1D6D7, &[0x000003C6]),
    (0x1D6D8, &[0x000003C7]),
    (0x1D6D9, &[0x000003C8]),
    (0x1D6DA, &[0x000003C9]),
    (0x1D6DB, &[0x00002202]),
    (0x1D6DC, &[0x000003B5]),
    (0x1D6DD, &[0x000003B8]),
    (0x1D6DE, &[0x000003BA]),
    (0x1D6DF, &[0x000003C6]),
    (0x1D6E0, &[0x000003C1]),
    (0x1D6E1, &[0x000003C0]),
    (0x1D6E2, &[0x00000391]),
    (0x1D6E3, &[0x00000392]),
    (0x1D6E4, &[0x00000393]),
    (0x1D6E5, &[0x00000394]),
    (0x1D6E6, &[0x00000395]),
    (0x1D6E7, &[0x00000396]),
    (0x1D6E8, &[0x00000397]),
    (0x1D6E9, &[0x00000398]),
    (0x1D6EA, &[0x00000399]),
    (0x1D6EB, &[0x0000039A]),
    (0x1D6EC, &[0x0000039B]),
    (0x1D6ED, &[0x0000039C]),
    (0x1D6EE, &[0x0000039D]),
    (0x1D6EF, &[0x0000039E]),
    (0x1D6F0, &[0x0000039F]),
    (0x1D6F1, &[0x000003A0]),
    (0x1D6F2, &[0x000003A1]),
    (0x1D6F3, &[0x00000398]),
    (0x1D6F4, &[0x000003A3]),
    (0x1D6F5, &[0x000003A4]),
    (0x1D6F6, &[0x000003A5]),
    (0x1D6F7, &[0x000003A6]),
    (0x1D6F8, &[0x000003A7]),
    (0x1D6F9, &[0x000003A8]),
    (0x1D6FA, &[0x000003A9]),
    (0x1D6FB, &[0x00002207]),
    (0x1D6FC, &[0x000003B1]),
    (0x1D6FD, &[0x000003B2]),
    (0x1D6FE, &[0x000003B3]),
    (0x1D6FF, &[0x000003B4]),
    (0x1D700, &[0x000003B5]),
    (0x1D701, &[0x000003B6]),
    (0x1D702, &[0x000003B7]),
    (0x1D703, &[0x000003B8]),
    (0x1D704, &[0x000003B9]),
    (0x1D705, &[0x000003BA]),
    (0x1D706, &[0x000003BB]),
    (0x1D707, &[0x000003BC]),
    (0x1D708, &[0x000003BD]),
    (0x1D709, &[0x000003BE]),
    (0x1D70A, &[0x000003BF]),
    (0x1D70B, &[0x000003C0]),
    (0x1D70C, &[0x000003C1]),
    (0x1D70D, &[0x000003C2]),
    (0x1D70E, &[0x000003C3]),
    (0x1D70F, &[0x000003C4]),
    (0x1D710, &[0x000003C5]),
    (0x1D711, &[0x000003C6]),
    (0x1D712, &[0x000003C7]),
    (0x1D713, &[0x000003C8]),
    (0x1D714, &[0x000003C9]),
    (0x1D715, &[0x00002202]),
    (0x1D716, &[0x000003B5]),
    (0x1D717, &[0x000003B8]),
    (0x1D718, &[0x000003BA]),
    (0x1D719, &[0x000003C6]),
    (0x1D71A, &[0x000003C1]),
    (0x1D71B, &[0x000003C0]),
    (0x1D71C, &[0x00000391]),
    (0x1D71D, &[0x00000392]),
    (0x1D71E, &[0x00000393]),
    (0x1D71F, &[0x00000394]),
    (0x1D720, &[0x00000395]),
    (0x1D721, &[0x00000396]),
    (0x1D722, &[0x00000397]),
    (0x1D723, &[0x00000398]),
    (0x1D724, &[0x00000399]),
    (0x1D725, &[0x0000039A]),
    (0x1D726, &[0x0000039B]),
    (0x1D727, &[0x0000039C]),
    (0x1D728, &[0x0000039D]),
    (0x1D729, &[0x0000039E]),
    (0x1D72A, &[0x0000039F]),
    (0x1D72B, &[0x000003A0]),
    (0x1D72C, &[0x000003A1]),
    (0x1D72D, &[0x00000398]),
    (0x1D72E, &[0x000003A3]),
    (0x1D72F, &[0x000003A4]),
    (0x1D730, &[0x000003A5]),
    (0x1D731, &[0x000003A6]),
    (0x1D732, &[0x000003A7]),
    (0x1D733, &[0x000003A8]),
    (0x1D734, &[0x000003A9]),
    (0x1D735, &[0x00002207]),
    (0x1D736, &[0x000003B1]),
    (0x1D737, &[0x000003B2]),
    (0x1D738, &[0x000003B3]),
    (0x1D739, &[0x000003B4]),
    (0x1D73A, &[0x000003B5]),
    (0x1D73B, &[0x000003B6]),
    (0x1D73C, &[0x000003B7]),
    (0x1D73D, &[0x000003B8]),
    (0x1D73E, &[0x000003B9]),
    (0x1D73F, &[0x000003BA]),
    (0x1D740, &[0x000003BB]),
    (0x1D741, &[0x000003BC]),
    (0x1D742, &[0x000003BD]),
    (0x1D743, &[0x000003BE]),
    (0x1D744, &[0x000003BF]),
    (0x1D745, &[0x000003C0]),
    (0x1D746, &[0x000003C1]),
    (0x1D747, &[0x000003C2]),
    (0x1D748, &[0x000003C3]),
    (0x1D749, &[0x000003C4]),
    (0x1D74A, &[0x000003C5]),
    (0x1D74B, &[0x000003C6]),
    (0x1D74C, &[0x000003C7]),
    (0x1D74D, &[0x000003C8]),
    (0x1D74E, &[0x000003C9]),
    (0x1D74F, &[0x00002202]),
    (0x1D750, &[0x000003B5]),
    (0x1D751, &[0x000003B8]),
    (0x1D752, &[0x000003BA]),
    (0x1D753, &[0x000003C6]),
    (0x1D754, &[0x000003C1]),
    (0x1D755, &[0x000003C0]),
    (0x1D756, &[0x00000391]),
    (0x1D757, &[0x00000392]),
    (0x1D758, &[0x00000393]),
    (0x1D759, &[0x00000394]),
    (0x1D75A, &[0x00000395]),
    (0x1D75B, &[0x00000396]),
    (0x1D75C, &[0x00000397]),
    (0x1D75D, &[0x00000398]),
    (0x1D75E, &[0x00000399]),
    (0x1D75F, &[0x0000039A]),
    (0x1D760, &[0x0000039B]),
    (0x1D761, &[0x0000039C]),
    (0x1D762, &[0x0000039D]),
    (0x1D763, &[0x0000039E]),
    (0x1D764, &[0x0000039F]),
    (0x1D765, &[0x000003A0]),
    (0x1D766, &[0x000003A1]),
    (0x1D767, &[0x00000398]),
    (0x1D768, &[0x000003A3]),
    (0x1D769, &[0x000003A4]),
    (0x1D76A, &[0x000003A5]),
    (0x1D76B, &[0x000003A6]),
    (0x1D76C, &[0x000003A7]),
    (0x1D76D, &[0x000003A8]),
    (0x1D76E, &[0x000003A9]),
    (0x1D76F, &[0x00002207]),
    (0x1D770, &[0x000003B1]),
    (0x1D771, &[0x000003B2]),
    (0x1D772, &[0x000003B3]),
    (0x1D773, &[0x000003B4]),
    (0x1D774, &[0x000003B5]),
    (0x1D775, &[0x000003B6]),
    (0x1D776, &[0x000003B7]),
    (0x1D777, &[0x000003B8]),
    (0x1D778, &[0x000003B9]),
    (0x1D779, &[0x000003BA]),
    (0x1D77A, &[0x000003BB]),
    (0x1D77B, &[0x000003BC]),
    (0x1D77C, &[0x000003BD]),
    (0x1D77D, &[0x000003BE]),
    (0x1D77E, &[0x000003BF]),
    (0x1D77F, &[0x000003C0]),
    (0x1D780, &[0x000003C1]),
    (0x1D781, &[0x000003C2]),
    (0x1D782, &[0x000003C3]),
    (0x1D783, &[0x000003C4]),
    (0x1D784, &[0x000003C5]),
    (0x1D785, &[0x000003C6]),
    (0x1D786, &[0x000003C7]),
    (0x1D787, &[0x000003C8]),
    (0x1D788, &[0x000003C9]),
    (0x1D789, &[0x00002202]),
    (0x1D78A, &[0x000003B5]),
    (0x1D78B, &[0x000003B8]),
    (0x1D78C, &[0x000003BA]),
    (0x1D78D, &[0x000003C6]),
    (0x1D78E, &[0x000003C1]),
    (0x1D78F, &[0x000003C0]),
    (0x1D790, &[0x00000391]),
    (0x1D791, &[0x00000392]),
    (0x1D792, &[0x00000393]),
    (0x1D793, &[0x00000394]),
    (0x1D794, &[0x00000395]),
    (0x1D795, &[0x00000396]),
    (0x1D796, &[0x00000397]),
    (0x1D797, &[0x00000398]),
    (0x1D798, &[0x00000399]),
    (0x1D799, &[0x0000039A]),
    (0x1D79A, &[0x0000039B]),
    (0x1D79B, &[0x0000039C]),
    (0x1D79C, &[0x0000039D]),
    (0x1D79D, &[0x0000039E]),
    (0x1D79E, &[0x0000039F]),
    (0x1D79F, &[0x000003A0]),
    (0x1D7A0, &[0x000003A1]),
    (0x1D7A1, &[0x00000398]),
    (0x1D7A2, &[0x000003A3]),
    (0x1D7A3, &[0x000003A4]),
    (0x1D7A4, &[0x000003A5]),
    (0x1D7A5, &[0x000003A6]),
    (0x1D7A6, &[0x000003A7]),
    (0x1D7A7, &[0x000003A8]),
    (0x1D7A8, &[0x000003A9]),
    (0x1D7A9, &[0x00002207]),
    (0x1D7AA, &[0x000003B1]),
    (0x1D7AB, &[0x000003B2]),
    (0x1D7AC, &[0x000003B3]),
    (0x1D7AD, &[0x000003B4]),
    (0x1D7AE, &[0x000003B5]),
    (0x1D7AF, &[0x000003B6]),
    (0x1D7B0, &[0x000003B7]),
    (0x1D7B1, &[0x000003B8]),
    (0x1D7B2, &[0x000003B9]),
    (0x1D7B3, &[0x000003BA]),
    (0x1D7B4, &[0x000003BB]),
    (0x1D7B5, &[0x000003BC]),
    (0x1D7B6, &[0x000003BD]),
    (0x1D7B7, &[0x000003BE]),
    (0x1D7B8, &[0x000003BF]),
    (0x1D7B9, &[0x000003C0]),
    (0x1D7BA, &[0x000003C1]),
    (0x1D7BB, &[0x000003C2]),
    (0x1D7BC, &[0x000003C3]),
    (0x1D7BD, &[0x000003C4]),
    (0x1D7BE, &[0x000003C5]),
    (0x1D7BF, &[0x000003C6]),
    (0x1D7C0, &[0x000003C7]),
    (0x1D7C1, &[0x000003C8]),
    (0x1D7C2, &[0x000003C9]),
    (0x1D7C3, &[0x00002202]),
    (0x1D7C4, &[0x000003B5]),
    (0x1D7C5, &[0x000003B8]),
    (0x1D7C6, &[0x000003BA]),
    (0x1D7C7, &[0x000003C6]),
    (0x1D7C8, &[0x000003C1]),
    (0x1D7C9, &[0x000003C0]),
    (0x1D7CA, &[0x000003DC]),
    (0x1D7CB, &[0x000003DD]),
    (0x1D7CE, &[0x00000030]),
    (0x1D7CF, &[0x00000031]),
    (0x1D7D0, &[0x00000032]),
    (0x1D7D1, &[0x00000033]),
    (0x1D7D2, &[0x00000034]),
    (0x1D7D3, &[0x00000035]),
    (0x1D7D4, &[0x00000036]),
    (0x1D7D5, &[0x00000037]),
    (0x1D7D6, &[0x00000038]),
    (0x1D7D7, &[0x00000039]),
    (0x1D7D8, &[0x00000030]),
    (0x1D7D9, &[0x00000031]),
    (0x1D7DA, &[0x00000032]),
    (0x1D7DB, &[0x00000033]),
    (0x1D7DC, &[0x00000034]),
    (0x1D7DD, &[0x00000035]),
    (0x1D7DE, &[0x00000036]),
    (0x1D7DF, &[0x00000037]),
    (0x1D7E0, &[0x00000038]),
    (0x1D7E1, &[0x00000039]),
    (0x1D7E2, &[0x00000030]),
    (0x1D7E3, &[0x00000031]),
    (0x1D7E4, &[0x00000032]),
    (0x1D7E5, &[0x00000033]),
    (0x1D7E6, &[0x00000034]),
    (0x1D7E7, &[0x00000035]),
    (0x1D7E8, &[0x00000036]),
    (0x1D7E9, &[0x00000037]),
    (0x1D7EA, &[0x00000038]),
    (0x1D7EB, &[0x00000039]),
    (0x1D7EC, &[0x00000030]),
    (0x1D7ED, &[0x00000031]),
    (0x1D7EE, &[0x00000032]),
    (0x1D7EF, &[0x00000033]),
    (0x1D7F0, &[0x00000034]),
    (0x1D7F1, &[0x00000035]),
    (0x1D7F2, &[0x00000036]),
    (0x1D7F3, &[0x00000037]),
    (0x1D7F4, &[0x00000038]),
    (0x1D7F5, &[0x00000039]),
    (0x1D7F6, &[0x00000030]),
    (0x1D7F7, &[0x00000031]),
    (0x1D7F8, &[0x00000032]),
    (0x1D7F9, &[0x00000033]),
    (0x1D7FA, &[0x00000034]),
    (0x1D7FB, &[0x00000035]),
    (0x1D7FC, &[0x00000036]),
    (0x1D7FD, &[0x00000037]),
    (0x1D7FE, &[0x00000038]),
    (0x1D7FF, &[0x00000039]),
    (0x1EE00, &[0x00000627]),
    (0x1EE01, &[0x00000628]),
    (0x1EE02, &[0x0000062C]),
    (0x1EE03, &[0x0000062F]),
    (0x1EE05, &[0x00000648]),
    (0x1EE06, &[0x00000632]),
    (0x1EE07, &[0x0000062D]),
    (0x1EE08, &[0x00000637]),
    (0x1EE09, &[0x0000064A]),
    (0x1EE0A, &[0x00000643]),
    (0x1EE0B, &[0x00000644]),
    (0x1EE0C, &[0x00000645]),
    (0x1EE0D, &[0x00000646]),
    (0x1EE0E, &[0x00000633]),
    (0x1EE0F, &[0x00000639]),
    (0x1EE10, &[0x00000641]),
    (0x1EE11, &[0x00000635]),
    (0x1EE12, &[0x00000642]),
    (0x1EE13, &[0x00000631]),
    (0x1EE14, &[0x00000634]),
    (0x1EE15, &[0x0000062A]),
    (0x1EE16, &[0x0000062B]),
    (0x1EE17, &[0x0000062E]),
    (0x1EE18, &[0x00000630]),
    (0x1EE19, &[0x00000636]),
    (0x1EE1A, &[0x00000638]),
    (0x1EE1B, &[0x0000063A]),
    (0x1EE1C, &[0x0000066E]),
    (0x1EE1D, &[0x000006BA]),
    (0x1EE1E, &[0x000006A1]),
    (0x1EE1F, &[0x0000066F]),
    (0x1EE21, &[0x00000628]),
    (0x1EE22, &[0x0000062C]),
    (0x1EE24, &[0x00000647]),
    (0x1EE27, &[0x0000062D]),
    (0x1EE29, &[0x0000064A]),
    (0x1EE2A, &[0x00000643]),
    (0x1EE2B, &[0x00000644]),
    (0x1EE2C, &[0x00000645]),
    (0x1EE2D, &[0x00000646]),
    (0x1EE2E, &[0x00000633]),
    (0x1EE2F, &[0x00000639]),
    (0x1EE30, &[0x00000641]),
    (0x1EE31, &[0x00000635]),
    (0x1EE32, &[0x00000642]),
    (0x1EE34, &[0x00000634]),
    (0x1EE35, &[0x0000062A]),
    (0x1EE36, &[0x0000062B]),
    (0x1EE37, &[0x0000062E]),
    (0x1EE39, &[0x00000636]),
    (0x1EE3B, &[0x0000063A]),
    (0x1EE42, &[0x0000062C]),
    (0x1EE47, &[0x0000062D]),
    (0x1EE49, &[0x0000064A]),
    (0x1EE4B, &[0x00000644]),
    (0x1EE4D, &[0x00000646]),
    (0x1EE4E, &[0x00000633]),
    (0x1EE4F, &[0x00000639]),
    (0x1EE51, &[0x00000635]),
    (0x1EE52, &[0x00000642]),
    (0x1EE54, &[0x00000634]),
    (0x1EE57, &[0x0000062E]),
    (0x1EE59, &[0x00000636]),
    (0x1EE5B, &[0x0000063A]),
    (0x1EE5D, &[0x000006BA]),
    (0x1EE5F, &[0x0000066F]),
    (0x1EE61, &[0x00000628]),
    (0x1EE62, &[0x0000062C]),
    (0x1EE64, &[0x00000647]),
    (0x1EE67, &[0x0000062D]),
    (0x1EE68, &[0x00000637]),
    (0x1EE69, &[0x0000064A]),
    (0x1EE6A, &[0x00000643]),
    (0x1EE6C, &[0x00000645]),
    (0x1EE6D, &[0x00000646]),
    (0x1EE6E, &[0x00000633]),
    (0x1EE6F, &[0x00000639]),
    (0x1EE70, &[0x00000641]),
    (0x1EE71, &[0x00000635]),
    (0x1EE72, &[0x00000642]),
    (0x1EE74, &[0x00000634]),
    (0x1EE75, &[0x0000062A]),
    (0x1EE76, &[0x0000062B]),
    (0x1EE77, &[0x0000062E]),
    (0x1EE79, &[0x00000636]),
    (0x1EE7A, &[0x00000638]),
    (0x1EE7B, &[0x0000063A]),
    (0x1EE7C, &[0x0000066E]),
    (0x1EE7E, &[0x000006A1]),
    (0x1EE80, &[0x00000627]),
    (0x1EE81, &[0x00000628]),
    (0x1EE82, &[0x0000062C]),
    (0x1EE83, &[0x0000062F]),
    (0x1EE84, &[0x00000647]),
    (0x1EE85, &[0x00000648]),
    (0x1EE86, &[0x00000632]),
    (0x1EE87, &[0x0000062D]),
    (0x1EE88, &[0x00000637]),
    (0x1EE89, &[0x0000064A]),
    (0x1EE8B, &[0x00000644]),
    (0x1EE8C, &[0x00000645]),
    (0x1EE8D, &[0x00000646]),
    (0x1EE8E, &[0x00000633]),
    (0x1EE8F, &[0x00000639]),
    (0x1EE90, &[0x00000641]),
    (0x1EE91, &[0x00000635]),
    (0x1EE92, &[0x00000642]),
    (0x1EE93, &[0x00000631]),
    (0x1EE94, &[0x00000634]),
    (0x1EE95, &[0x0000062A]),
    (0x1EE96, &[0x0000062B]),
    (0x1EE97, &[0x0000062E]),
    (0x1EE98, &[0x00000630]),
    (0x1EE99, &[0x00000636]),
    (0x1EE9A, &[0x00000638]),
    (0x1EE9B, &[0x0000063A]),
    (0x1EEA1, &[0x00000628]),
    (0x1EEA2, &[0x0000062C]),
    (0x1EEA3, &[0x0000062F]),
    (0x1EEA5, &[0x00000648]),
    (0x1EEA6, &[0x00000632]),
    (0x1EEA7, &[0x0000062D]),
    (0x1EEA8, &[0x00000637]),
    (0x1EEA9, &[0x0000064A]),
    (0x1EEAB, &[0x00000644]),
    (0x1EEAC, &[0x00000645]),
    (0x1EEAD, &[0x00000646]),
    (0x1EEAE, &[0x00000633]),
    (0x1EEAF, &[0x00000639]),
    (0x1EEB0, &[0x00000641]),
    (0x1EEB1, &[0x00000635]),
    (0x1EEB2, &[0x00000642]),
    (0x1EEB3, &[0x00000631]),
    (0x1EEB4, &[0x00000634]),
    (0x1EEB5, &[0x0000062A]),
    (0x1EEB6, &[0x0000062B]),
    (0x1EEB7, &[0x0000062E]),
    (0x1EEB8, &[0x00000630]),
    (0x1EEB9, &[0x00000636]),
    (0x1EEBA, &[0x00000638]),
    (0x1EEBB, &[0x0000063A]),
    (0x1F100, &[0x00000030, 0x0000002E]),
    (0x1F101, &[0x00000030, 0x0000002C]),
    (0x1F102, &[0x00000031, 0x0000002C]),
    (0x1F103, &[0x00000032, 0x0000002C]),
    (0x1F104, &[0x00000033, 0x0000002C]),
    (0x1F105, &[0x00000034, 0x0000002C]),
    (0x1F106, &[0x00000035, 0x0000002C]),
    (0x1F107, &[0x00000036, 0x0000002C]),
    (0x1F108, &[0x00000037, 0x0000002C]),
    (0x1F109, &[0x00000038, 0x0000002C]),
    (0x1F10A, &[0x00000039, 0x0000002C]),
    (0x1F110, &[0x00000028, 0x00000041, 0x00000029]),
    (0x1F111, &[0x00000028, 0x00000042, 0x00000029]),
    (0x1F112, &[0x00000028, 0x00000043, 0x00000029]),
    (0x1F113, &[0x00000028, 0x00000044, 0x00000029]),
    (0x1F114, &[0x00000028, 0x00000045, 0x00000029]),
    (0x1F115, &[0x00000028, 0x00000046, 0x00000029]),
    (0x1F116, &[0x00000028, 0x00000047, 0x00000029]),
    (0x1F117, &[0x00000028, 0x00000048, 0x00000029]),
    (0x1F118, &[0x00000028, 0x00000049, 0x00000029]),
    (0x1F119, &[0x00000028, 0x0000004A, 0x00000029]),
    (0x1F11A, &[0x00000028, 0x0000004B, 0x00000029]),
    (0x1F11B, &[0x00000028, 0x0000004C, 0x00000029]),
    (0x1F11C, &[0x00000028, 0x0000004D, 0x00000029]),
    (0x1F11D, &[0x00000028, 0x0000004E, 0x00000029]),
    (0x1F11E, &[0x00000028, 0x0000004F, 0x00000029]),
    (0x1F11F, &[0x00000028, 0x00000050, 0x00000029]),
    (0x1F120, &[0x00000028, 0x00000051, 0x00000029]),
    (0x1F121, &[0x00000028, 0x00000052, 0x00000029]),
    (0x1F122, &[0x00000028, 0x00000053, 0x00000029]),
    (0x1F123, &[0x00000028, 0x00000054, 0x00000029]),
    (0x1F124, &[0x00000028, 0x00000055, 0x00000029]),
    (0x1F125, &[0x00000028, 0x00000056, 0x00000029]),
    (0x1F126, &[0x00000028, 0x00000057, 0x00000029]),
    (0x1F127, &[0x00000028, 0x00000058, 0x00000029]),
    (0x1F128, &[0x00000028, 0x00000059, 0x00000029]),
    (0x1F129, &[0x00000028, 0x0000005A, 0x00000029]),
    (0x1F12A, &[0x00003014, 0x00000053, 0x00003015]),
    (0x1F12B, &[0x00000043]),
    (0x1F12C, &[0x00000052]),
    (0x1F12D, &[0x00000043, 0x00000044]),
    (0x1F12E, &[0x00000057, 0x0000005A]),
    (0x1F130, &[0x00000041]),
    (0x1F131, &[0x00000042]),
    (0x1F132, &[0x00000043]),
    (0x1F133, &[0x00000044]),
    (0x1F134, &[0x00000045]),
    (0x1F135, &[0x00000046]),
    (0x1F136, &[0x00000047]),
    (0x1F137, &[0x00000048]),
    (0x1F138, &[0x00000049]),
    (0x1F139, &[0x0000004A]),
    (0x1F13A, &[0x0000004B]),
    (0x1F13B, &[0x0000004C]),
    (0x1F13C, &[0x0000004D]),
    (0x1F13D, &[0x0000004E]),
    (0x1F13E, &[0x0000004F]),
    (0x1F13F, &[0x00000050]),
    (0x1F140, &[0x00000051]),
    (0x1F141, &[0x00000052]),
    (0x1F142, &[0x00000053]),
    (0x1F143, &[0x00000054]),
    (0x1F144, &[0x00000055]),
    (0x1F145, &[0x00000056]),
    (0x1F146, &[0x00000057]),
    (0x1F147, &[0x00000058]),
    (0x1F148, &[0x00000059]),
    (0x1F149, &[0x0000005A]),
    (0x1F14A, &[0x00000048, 0x00000056]),
    (0x1F14B, &[0x0000004D, 0x00000056]),
    (0x1F14C, &[0x00000053, 0x00000044]),
    (0x1F14D, &[0x00000053, 0x00000053]),
    (0x1F14E, &[0x00000050, 0x00000050, 0x00000056]),
    (0x1F14F, &[0x00000057, 0x00000043]),
    (0x1F16A, &[0x0000004D, 0x00000043]),
    (0x1F16B, &[0x0000004D, 0x00000044]),
    (0x1F16C, &[0x0000004D, 0x00000052]),
    (0x1F190, &[0x00000044, 0x0000004A]),
    (0x1F200, &[0x0000307B, 0x0000304B]),
    (0x1F201, &[0x000030B3, 0x000030B3]),
    (0x1F202, &[0x000030B5]),
    (0x1F210, &[0x0000624B]),
    (0x1F211, &[0x00005B57]),
    (0x1F212, &[0x000053CC]),
    (0x1F213, &[0x000030C6, 0x08003099]),
    (0x1F214, &[0x00004E8C]),
    (0x1F215, &[0x0000591A]),
    (0x1F216, &[0x000089E3]),
    (0x1F217, &[0x00005929]),
    (0x1F218, &[0x00004EA4]),
    (0x1F219, &[0x00006620]),
    (0x1F21A, &[0x00007121]),
    (0x1F21B, &[0x00006599]),
    (0x1F21C, &[0x0000524D]),
    (0x1F21D, &[0x00005F8C]),
    (0x1F21E, &[0x0000518D]),
    (0x1F21F, &[0x000065B0]),
    (0x1F220, &[0x0000521D]),
    (0x1F221, &[0x00007D42]),
    (0x1F222, &[0x0000751F]),
    (0x1F223, &[0x00008CA9]),
    (0x1F224, &[0x000058F0]),
    (0x1F225, &[0x00005439]),
    (0x1F226, &[0x00006F14]),
    (0x1F227, &[0x00006295]),
    (0x1F228, &[0x00006355]),
    (0x1F229, &[0x00004E00]),
    (0x1F22A, &[0x00004E09]),
    (0x1F22B, &[0x0000904A]),
    (0x1F22C, &[0x00005DE6]),
    (0x1F22D, &[0x00004E2D]),
    (0x1F22E, &[0x000053F3]),
    (0x1F22F, &[0x00006307]),
    (0x1F230, &[0x00008D70]),
    (0x1F231, &[0x00006253]),
    (0x1F232, &[0x00007981]),
    (0x1F233, &[0x00007A7A]),
    (0x1F234, &[0x00005408]),
    (0x1F235, &[0x00006E80]),
    (0x1F236, &[0x00006709]),
    (0x1F237, &[0x00006708]),
    (0x1F238, &[0x00007533]),
    (0x1F239, &[0x00005272]),
    (0x1F23A, &[0x000055B6]),
    (0x1F23B, &[0x0000914D]),
    (0x1F240, &[0x00003014, 0x0000672C, 0x00003015]),
    (0x1F241, &[0x00003014, 0x00004E09, 0x00003015]),
    (0x1F242, &[0x00003014, 0x00004E8C, 0x00003015]),
    (0x1F243, &[0x00003014, 0x00005B89, 0x00003015]),
    (0x1F244, &[0x00003014, 0x000070B9, 0x00003015]),
    (0x1F245, &[0x00003014, 0x00006253, 0x00003015]),
    (0x1F246, &[0x00003014, 0x000076D7, 0x00003015]),
    (0x1F247, &[0x00003014, 0x000052DD, 0x00003015]),
    (0x1F248, &[0x00003014, 0x00006557, 0x00003015]),
    (0x1F250, &[0x00005F97]),
    (0x1F251, &[0x000053EF]),
    (0x1FBF0, &[0x00000030]),
    (0x1FBF1, &[0x00000031]),
    (0x1FBF2, &[0x00000032]),
    (0x1FBF3, &[0x00000033]),
    (0x1FBF4, &[0x00000034]),
    (0x1FBF5, &[0x00000035]),
    (0x1FBF6, &[0x00000036]),
    (0x1FBF7, &[0x00000037]),
    (0x1FBF8, &[0x00000038]),
    (0x1FBF9, &[0x00000039]),
];

/// Look up the full canonical decomposition of a character.
pub fn canonical_mapping(c: char) -> Option<&'static [charcc]> {
    lookup(CANONICAL, c)
}

/// Look up the full compatibility decomposition of a character.
///
/// Entries equal to the canonical decomposition are not duplicated here,
/// so callers must fall back to `canonical_mapping`.
pub fn compatibility_mapping(c: char) -> Option<&'static [charcc]> {
    lookup(COMPATIBILITY, c)
}

fn lookup(table: &'static [(u32, &'static [u32])], c: char) -> Option<&'static [charcc]> {
    table
        .binary_search_by_key(&(c as u32), |&(cp, _)| cp)
        .ok()
        .map(|index| charcc::from_u32_slice(table[index].1))
}
