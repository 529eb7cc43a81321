// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Canonical composition data.
//!
//! Generated offline from the Unicode Character Database, version 14.0.0.
//! Do not edit by hand.
//!
//! The table contains (starter, combining character, composite) triples
//! sorted by the character pair, derived from the first-level canonical
//! decompositions so that composition can rebuild multi-level composites
//! one pair at a time. Singleton decompositions, non-starter
//! decompositions, and pairs on the composition exclusion list are omitted,
//! so every entry is a Primary Composite (D114). Precomposed Hangul
//! syllables are composed arithmetically and are omitted as well.
//!
//! Composite values are charccs in their raw u32 form (see `crate::util`).

use crate::util::charcc;

#[rustfmt::skip]
static PAIRS: &[(u32, u32, u32)] = &[
    (0x003C, 0x0338, 0x0000226E),
    (0x003D, 0x0338, 0x00002260),
    (0x003E, 0x0338, 0x0000226F),
    (0x0041, 0x0300, 0x000000C0),
    (0x0041, 0x0301, 0x000000C1),
    (0x0041, 0x0302, 0x000000C2),
    (0x0041, 0x0303, 0x000000C3),
    (0x0041, 0x0304, 0x00000100),
    (0x0041, 0x0306, 0x00000102),
    (0x0041, 0x0307, 0x00000226),
    (0x0041, 0x0308, 0x000000C4),
    (0x0041, 0x0309, 0x00001EA2),
    (0x0041, 0x030A, 0x000000C5),
    (0x0041, 0x030C, 0x000001CD),
    (0x0041, 0x030F, 0x00000200),
    (0x0041, 0x0311, 0x00000202),
    (0x0041, 0x0323, 0x00001EA0),
    (0x0041, 0x0325, 0x00001E00),
    (0x0041, 0x0328, 0x00000104),
    (0x0042, 0x0307, 0x00001E02),
    (0x0042, 0x0323, 0x00001E04),
    (0x0042, 0x0331, 0x00001E06),
    (0x0043, 0x0301, 0x00000106),
    (0x0043, 0x0302, 0x00000108),
    (0x0043, 0x0307, 0x0000010A),
    (0x0043, 0x030C, 0x0000010C),
    (0x0043, 0x0327, 0x000000C7),
    (0x0044, 0x0307, 0x00001E0A),
    (0x0044, 0x030C, 0x0000010E),
    (0x0044, 0x0323, 0x00001E0C),
    (0x0044, 0x0327, 0x00001E10),
    (0x0044, 0x032D, 0x00001E12),
    (0x0044, 0x0331, 0x00001E0E),
    (0x0045, 0x0300, 0x000000C8),
    (0x0045, 0x0301, 0x000000C9),
    (0x0045, 0x0302, 0x000000CA),
    (0x0045, 0x0303, 0x00001EBC),
    (0x0045, 0x0304, 0x00000112),
    (0x0045, 0x0306, 0x00000114),
    (0x0045, 0x0307, 0x00000116),
    (0x0045, 0x0308, 0x000000CB),
    (0x0045, 0x0309, 0x00001EBA),
    (0x0045, 0x030C, 0x0000011A),
    (0x0045, 0x030F, 0x00000204),
    (0x0045, 0x0311, 0x00000206),
    (0x0045, 0x0323, 0x00001EB8),
    (0x0045, 0x0327, 0x00000228),
    (0x0045, 0x0328, 0x00000118),
    (0x0045, 0x032D, 0x00001E18),
    (0x0045, 0x0330, 0x00001E1A),
    (0x0046, 0x0307, 0x00001E1E),
    (0x0047, 0x0301, 0x000001F4),
    (0x0047, 0x0302, 0x0000011C),
    (0x0047, 0x0304, 0x00001E20),
    (0x0047, 0x0306, 0x0000011E),
    (0x0047, 0x0307, 0x00000120),
    (0x0047, 0x030C, 0x000001E6),
    (0x0047, 0x0327, 0x00000122),
    (0x0048, 0x0302, 0x00000124),
    (0x0048, 0x0307, 0x00001E22),
    (0x0048, 0x0308, 0x00001E26),
    (0x0048, 0x030C, 0x0000021E),
    (0x0048, 0x0323, 0x00001E24),
    (0x0048, 0x0327, 0x00001E28),
    (0x0048, 0x032E, 0x00001E2A),
    (0x0049, 0x0300, 0x000000CC),
    (0x0049, 0x0301, 0x000000CD),
    (0x0049, 0x0302, 0x000000CE),
    (0x0049, 0x0303, 0x00000128),
    (0x0049, 0x0304, 0x0000012A),
    (0x0049, 0x0306, 0x0000012C),
    (0x0049, 0x0307, 0x00000130),
    (0x0049, 0x0308, 0x000000CF),
    (0x0049, 0x0309, 0x00001EC8),
    (0x0049, 0x030C, 0x000001CF),
    (0x0049, 0x030F, 0x00000208),
    (0x0049, 0x0311, 0x0000020A),
    (0x0049, 0x0323, 0x00001ECA),
    (0x0049, 0x0328, 0x0000012E),
    (0x0049, 0x0330, 0x00001E2C),
    (0x004A, 0x0302, 0x00000134),
    (0x004B, 0x0301, 0x00001E30),
    (0x004B, 0x030C, 0x000001E8),
    (0x004B, 0x0323, 0x00001E32),
    (0x004B, 0x0327, 0x00000136),
    (0x004B, 0x0331, 0x00001E34),
    (0x004C, 0x0301, 0x00000139),
    (0x004C, 0x030C, 0x0000013D),
    (0x004C, 0x0323, 0x00001E36),
    (0x004C, 0x0327, 0x0000013B),
    (0x004C, 0x032D, 0x00001E3C),
    (0x004C, 0x0331, 0x00001E3A),
    (0x004D, 0x0301, 0x00001E3E),
    (0x004D, 0x0307, 0x00001E40),
    (0x004D, 0x0323, 0x00001E42),
    (0x004E, 0x0300, 0x000001F8),
    (0x004E, 0x0301, 0x00000143),
    (0x004E, 0x0303, 0x000000D1),
    (0x004E, 0x0307, 0x00001E44),
    (0x004E, 0x030C, 0x00000147),
    (0x004E, 0x0323, 0x00001E46),
    (0x004E, 0x0327, 0x00000145),
    (0x004E, 0x032D, 0x00001E4A),
    (0x004E, 0x0331, 0x00001E48),
    (0x004F, 0x0300, 0x000000D2),
    (0x004F, 0x0301, 0x000000D3),
    (0x004F, 0x0302, 0x000000D4),
    (0x004F, 0x0303, 0x000000D5),
    (0x004F, 0x0304, 0x0000014C),
    (0x004F, 0x0306, 0x0000014E),
    (0x004F, 0x0307, 0x0000022E),
    (0x004F, 0x0308, 0x000000D6),
    (0x004F, 0x0309, 0x00001ECE),
    (0x004F, 0x030B, 0x00000150),
    (0x004F, 0x030C, 0x000001D1),
    (0x004F, 0x030F, 0x0000020C),
    (0x004F, 0x0311, 0x0000020E),
    (0x004F, 0x031B, 0x000001A0),
    (0x004F, 0x0323, 0x00001ECC),
    (0x004F, 0x0328, 0x000001EA),
    (0x0050, 0x0301, 0x00001E54),
    (0x0050, 0x0307, 0x00001E56),
    (0x0052, 0x0301, 0x00000154),
    (0x0052, 0x0307, 0x00001E58),
    (0x0052, 0x030C, 0x00000158),
    (0x0052, 0x030F, 0x00000210),
    (0x0052, 0x0311, 0x00000212),
    (0x0052, 0x0323, 0x00001E5A),
    (0x0052, 0x0327, 0x00000156),
    (0x0052, 0x0331, 0x00001E5E),
    (0x0053, 0x0301, 0x0000015A),
    (0x0053, 0x0302, 0x0000015C),
    (0x0053, 0x0307, 0x00001E60),
    (0x0053, 0x030C, 0x00000160),
    (0x0053, 0x0323, 0x00001E62),
    (0x0053, 0x0326, 0x00000218),
    (0x0053, 0x0327, 0x0000015E),
    (0x0054, 0x0307, 0x00001E6A),
    (0x0054, 0x030C, 0x00000164),
    (0x0054, 0x0323, 0x00001E6C),
    (0x0054, 0x0326, 0x0000021A),
    (0x0054, 0x0327, 0x00000162),
    (0x0054, 0x032D, 0x00001E70),
    (0x0054, 0x0331, 0x00001E6E),
    (0x0055, 0x0300, 0x000000D9),
    (0x0055, 0x0301, 0x000000DA),
    (0x0055, 0x0302, 0x000000DB),
    (0x0055, 0x0303, 0x00000168),
    (0x0055, 0x0304, 0x0000016A),
    (0x0055, 0x0306, 0x0000016C),
    (0x0055, 0x0308, 0x000000DC),
    (0x0055, 0x0309, 0x00001EE6),
    (0x0055, 0x030A, 0x0000016E),
    (0x0055, 0x030B, 0x00000170),
    (0x0055, 0x030C, 0x000001D3),
    (0x0055, 0x030F, 0x00000214),
    (0x0055, 0x0311, 0x00000216),
    (0x0055, 0x031B, 0x000001AF),
    (0x0055, 0x0323, 0x00001EE4),
    (0x0055, 0x0324, 0x00001E72),
    (0x0055, 0x0328, 0x00000172),
    (0x0055, 0x032D, 0x00001E76),
    (0x0055, 0x0330, 0x00001E74),
    (0x0056, 0x0303, 0x00001E7C),
    (0x0056, 0x0323, 0x00001E7E),
    (0x0057, 0x0300, 0x00001E80),
    (0x0057, 0x0301, 0x00001E82),
    (0x0057, 0x0302, 0x00000174),
    (0x0057, 0x0307, 0x00001E86),
    (0x0057, 0x0308, 0x00001E84),
    (0x0057, 0x0323, 0x00001E88),
    (0x0058, 0x0307, 0x00001E8A),
    (0x0058, 0x0308, 0x00001E8C),
    (0x0059, 0x0300, 0x00001EF2),
    (0x0059, 0x0301, 0x000000DD),
    (0x0059, 0x0302, 0x00000176),
    (0x0059, 0x0303, 0x00001EF8),
    (0x0059, 0x0304, 0x00000232),
    (0x0059, 0x0307, 0x00001E8E),
    (0x0059, 0x0308, 0x00000178),
    (0x0059, 0x0309, 0x00001EF6),
    (0x0059, 0x0323, 0x00001EF4),
    (0x005A, 0x0301, 0x00000179),
    (0x005A, 0x0302, 0x00001E90),
    (0x005A, 0x0307, 0x0000017B),
    (0x005A, 0x030C, 0x0000017D),
    (0x005A, 0x0323, 0x00001E92),
    (0x005A, 0x0331, 0x00001E94),
    (0x0061, 0x0300, 0x000000E0),
    (0x0061, 0x0301, 0x000000E1),
    (0x0061, 0x0302, 0x000000E2),
    (0x0061, 0x0303, 0x000000E3),
    (0x0061, 0x0304, 0x00000101),
    (0x0061, 0x0306, 0x00000103),
    (0x0061, 0x0307, 0x00000227),
    (0x0061, 0x0308, 0x000000E4),
    (0x0061, 0x0309, 0x00001EA3),
    (0x0061, 0x030A, 0x000000E5),
    (0x0061, 0x030C, 0x000001CE),
    (0x0061, 0x030F, 0x00000201),
    (0x0061, 0x0311, 0x00000203),
    (0x0061, 0x0323, 0x00001EA1),
    (0x0061, 0x0325, 0x00001E01),
    (0x0061, 0x0328, 0x00000105),
    (0x0062, 0x0307, 0x00001E03),
    (0x0062, 0x0323, 0x00001E05),
    (0x0062, 0x0331, 0x00001E07),
    (0x0063, 0x0301, 0x00000107),
    (0x0063, 0x0302, 0x00000109),
    (0x0063, 0x0307, 0x0000010B),
    (0x0063, 0x030C, 0x0000010D),
    (0x0063, 0x0327, 0x000000E7),
    (0x0064, 0x0307, 0x00001E0B),
    (0x0064, 0x030C, 0x0000010F),
    (0x0064, 0x0323, 0x00001E0D),
    (0x0064, 0x0327, 0x00001E11),
    (0x0064, 0x032D, 0x00001E13),
    (0x0064, 0x0331, 0x00001E0F),
    (0x0065, 0x0300, 0x000000E8),
    (0x0065, 0x0301, 0x000000E9),
    (0x0065, 0x0302, 0x000000EA),
    (0x0065, 0x0303, 0x00001EBD),
    (0x0065, 0x0304, 0x00000113),
    (0x0065, 0x0306, 0x00000115),
    (0x0065, 0x0307, 0x00000117),
    (0x0065, 0x0308, 0x000000EB),
    (0x0065, 0x0309, 0x00001EBB),
    (0x0065, 0x030C, 0x0000011B),
    (0x0065, 0x030F, 0x00000205),
    (0x0065, 0x0311, 0x00000207),
    (0x0065, 0x0323, 0x00001EB9),
    (0x0065, 0x0327, 0x00000229),
    (0x0065, 0x0328, 0x00000119),
    (0x0065, 0x032D, 0x00001E19),
    (0x0065, 0x0330, 0x00001E1B),
    (0x0066, 0x0307, 0x00001E1F),
    (0x0067, 0x0301, 0x000001F5),
    (0x0067, 0x0302, 0x0000011D),
    (0x0067, 0x0304, 0x00001E21),
    (0x0067, 0x0306, 0x0000011F),
    (0x0067, 0x0307, 0x00000121),
    (0x0067, 0x030C, 0x000001E7),
    (0x0067, 0x0327, 0x00000123),
    (0x0068, 0x0302, 0x00000125),
    (0x0068, 0x0307, 0x00001E23),
    (0x0068, 0x0308, 0x00001E27),
    (0x0068, 0x030C, 0x0000021F),
    (0x0068, 0x0323, 0x00001E25),
    (0x0068, 0x0327, 0x00001E29),
    (0x0068, 0x032E, 0x00001E2B),
    (0x0068, 0x0331, 0x00001E96),
    (0x0069, 0x0300, 0x000000EC),
    (0x0069, 0x0301, 0x000000ED),
    (0x0069, 0x0302, 0x000000EE),
    (0x0069, 0x0303, 0x00000129),
    (0x0069, 0x0304, 0x0000012B),
    (0x0069, 0x0306, 0x0000012D),
    (0x0069, 0x0308, 0x000000EF),
    (0x0069, 0x0309, 0x00001EC9),
    (0x0069, 0x030C, 0x000001D0),
    (0x0069, 0x030F, 0x00000209),
    (0x0069, 0x0311, 0x0000020B),
    (0x0069, 0x0323, 0x00001ECB),
    (0x0069, 0x0328, 0x0000012F),
    (0x0069, 0x0330, 0x00001E2D),
    (0x006A, 0x0302, 0x00000135),
    (0x006A, 0x030C, 0x000001F0),
    (0x006B, 0x0301, 0x00001E31),
    (0x006B, 0x030C, 0x000001E9),
    (0x006B, 0x0323, 0x00001E33),
    (0x006B, 0x0327, 0x00000137),
    (0x006B, 0x0331, 0x00001E35),
    (0x006C, 0x0301, 0x0000013A),
    (0x006C, 0x030C, 0x0000013E),
    (0x006C, 0x0323, 0x00001E37),
    (0x006C, 0x0327, 0x0000013C),
    (0x006C, 0x032D, 0x00001E3D),
    (0x006C, 0x0331, 0x00001E3B),
    (0x006D, 0x0301, 0x00001E3F),
    (0x006D, 0x0307, 0x00001E41),
    (0x006D, 0x0323, 0x00001E43),
    (0x006E, 0x0300, 0x000001F9),
    (0x006E, 0x0301, 0x00000144),
    (0x006E, 0x0303, 0x000000F1),
    (0x006E, 0x0307, 0x00001E45),
    (0x006E, 0x030C, 0x00000148),
    (0x006E, 0x0323, 0x00001E47),
    (0x006E, 0x0327, 0x00000146),
    (0x006E, 0x032D, 0x00001E4B),
    (0x006E, 0x0331, 0x00001E49),
    (0x006F, 0x0300, 0x000000F2),
    (0x006F, 0x0301, 0x000000F3),
    (0x006F, 0x0302, 0x000000F4),
    (0x006F, 0x0303, 0x000000F5),
    (0x006F, 0x0304, 0x0000014D),
    (0x006F, 0x0306, 0x0000014F),
    (0x006F, 0x0307, 0x0000022F),
    (0x006F, 0x0308, 0x000000F6),
    (0x006F, 0x0309, 0x00001ECF),
    (0x006F, 0x030B, 0x00000151),
    (0x006F, 0x030C, 0x000001D2),
    (0x006F, 0x030F, 0x0000020D),
    (0x006F, 0x0311, 0x0000020F),
    (0x006F, 0x031B, 0x000001A1),
    (0x006F, 0x0323, 0x00001ECD),
    (0x006F, 0x0328, 0x000001EB),
    (0x0070, 0x0301, 0x00001E55),
    (0x0070, 0x0307, 0x00001E57),
    (0x0072, 0x0301, 0x00000155),
    (0x0072, 0x0307, 0x00001E59),
    (0x0072, 0x030C, 0x00000159),
    (0x0072, 0x030F, 0x00000211),
    (0x0072, 0x0311, 0x00000213),
    (0x0072, 0x0323, 0x00001E5B),
    (0x0072, 0x0327, 0x00000157),
    (0x0072, 0x0331, 0x00001E5F),
    (0x0073, 0x0301, 0x0000015B),
    (0x0073, 0x0302, 0x0000015D),
    (0x0073, 0x0307, 0x00001E61),
    (0x0073, 0x030C, 0x00000161),
    (0x0073, 0x0323, 0x00001E63),
    (0x0073, 0x0326, 0x00000219),
    (0x0073, 0x0327, 0x0000015F),
    (0x0074, 0x0307, 0x00001E6B),
    (0x0074, 0x0308, 0x00001E97),
    (0x0074, 0x030C, 0x00000165),
    (0x0074, 0x0323, 0x00001E6D),
    (0x0074, 0x0326, 0x0000021B),
    (0x0074, 0x0327, 0x00000163),
    (0x0074, 0x032D, 0x00001E71),
    (0x0074, 0x0331, 0x00001E6F),
    (0x0075, 0x0300, 0x000000F9),
    (0x0075, 0x0301, 0x000000FA),
    (0x0075, 0x0302, 0x000000FB),
    (0x0075, 0x0303, 0x00000169),
    (0x0075, 0x0304, 0x0000016B),
    (0x0075, 0x0306, 0x0000016D),
    (0x0075, 0x0308, 0x000000FC),
    (0x0075, 0x0309, 0x00001EE7),
    (0x0075, 0x030A, 0x0000016F),
    (0x0075, 0x030B, 0x00000171),
    (0x0075, 0x030C, 0x000001D4),
    (0x0075, 0x030F, 0x00000215),
    (0x0075, 0x0311, 0x00000217),
    (0x0075, 0x031B, 0x000001B0),
    (0x0075, 0x0323, 0x00001EE5),
    (0x0075, 0x0324, 0x00001E73),
    (0x0075, 0x0328, 0x00000173),
    (0x0075, 0x032D, 0x00001E77),
    (0x0075, 0x0330, 0x00001E75),
    (0x0076, 0x0303, 0x00001E7D),
    (0x0076, 0x0323, 0x00001E7F),
    (0x0077, 0x0300, 0x00001E81),
    (0x0077, 0x0301, 0x00001E83),
    (0x0077, 0x0302, 0x00000175),
    (0x0077, 0x0307, 0x00001E87),
    (0x0077, 0x0308, 0x00001E85),
    (0x0077, 0x030A, 0x00001E98),
    (0x0077, 0x0323, 0x00001E89),
    (0x0078, 0x0307, 0x00001E8B),
    (0x0078, 0x0308, 0x00001E8D),
    (0x0079, 0x0300, 0x00001EF3),
    (0x0079, 0x0301, 0x000000FD),
    (0x0079, 0x0302, 0x00000177),
    (0x0079, 0x0303, 0x00001EF9),
    (0x0079, 0x0304, 0x00000233),
    (0x0079, 0x0307, 0x00001E8F),
    (0x0079, 0x0308, 0x000000FF),
    (0x0079, 0x0309, 0x00001EF7),
    (0x0079, 0x030A, 0x00001E99),
    (0x0079, 0x0323, 0x00001EF5),
    (0x007A, 0x0301, 0x0000017A),
    (0x007A, 0x0302, 0x00001E91),
    (0x007A, 0x0307, 0x0000017C),
    (0x007A, 0x030C, 0x0000017E),
    (0x007A, 0x0323, 0x00001E93),
    (0x007A, 0x0331, 0x00001E95),
    (0x00A8, 0x0300, 0x00001FED),
    (0x00A8, 0x0301, 0x00000385),
    (0x00A8, 0x0342, 0x00001FC1),
    (0x00C2, 0x0300, 0x00001EA6),
    (0x00C2, 0x0301, 0x00001EA4),
    (0x00C2, 0x0303, 0x00001EAA),
    (0x00C2, 0x0309, 0x00001EA8),
    (0x00C4, 0x0304, 0x000001DE),
    (0x00C5, 0x0301, 0x000001FA),
    (0x00C6, 0x0301, 0x000001FC),
    (0x00C6, 0x0304, 0x000001E2),
    (0x00C7, 0x0301, 0x00001E08),
    (0x00CA, 0x0300, 0x00001EC0),
    (0x00CA, 0x0301, 0x00001EBE),
    (0x00CA, 0x0303, 0x00001EC4),
    (0x00CA, 0x0309, 0x00001EC2),
    (0x00CF, 0x0301, 0x00001E2E),
    (0x00D4, 0x0300, 0x00001ED2),
    (0x00D4, 0x0301, 0x00001ED0),
    (0x00D4, 0x0303, 0x00001ED6),
    (0x00D4, 0x0309, 0x00001ED4),
    (0x00D5, 0x0301, 0x00001E4C),
    (0x00D5, 0x0304, 0x0000022C),
    (0x00D5, 0x0308, 0x00001E4E),
    (0x00D6, 0x0304, 0x0000022A),
    (0x00D8, 0x0301, 0x000001FE),
    (0x00DC, 0x0300, 0x000001DB),
    (0x00DC, 0x0301, 0x000001D7),
    (0x00DC, 0x0304, 0x000001D5),
    (0x00DC, 0x030C, 0x000001D9),
    (0x00E2, 0x0300, 0x00001EA7),
    (0x00E2, 0x0301, 0x00001EA5),
    (0x00E2, 0x0303, 0x00001EAB),
    (0x00E2, 0x0309, 0x00001EA9),
    (0x00E4, 0x0304, 0x000001DF),
    (0x00E5, 0x0301, 0x000001FB),
    (0x00E6, 0x0301, 0x000001FD),
    (0x00E6, 0x0304, 0x000001E3),
    (0x00E7, 0x0301, 0x00001E09),
    (0x00EA, 0x0300, 0x00001EC1),
    (0x00EA, 0x0301, 0x00001EBF),
    (0x00EA, 0x0303, 0x00001EC5),
    (0x00EA, 0x0309, 0x00001EC3),
    (0x00EF, 0x0301, 0x00001E2F),
    (0x00F4, 0x0300, 0x00001ED3),
    (0x00F4, 0x0301, 0x00001ED1),
    (0x00F4, 0x0303, 0x00001ED7),
    (0x00F4, 0x0309, 0x00001ED5),
    (0x00F5, 0x0301, 0x00001E4D),
    (0x00F5, 0x0304, 0x0000022D),
    (0x00F5, 0x0308, 0x00001E4F),
    (0x00F6, 0x0304, 0x0000022B),
    (0x00F8, 0x0301, 0x000001FF),
    (0x00FC, 0x0300, 0x000001DC),
    (0x00FC, 0x0301, 0x000001D8),
    (0x00FC, 0x0304, 0x000001D6),
    (0x00FC, 0x030C, 0x000001DA),
    (0x0102, 0x0300, 0x00001EB0),
    (0x0102, 0x0301, 0x00001EAE),
    (0x0102, 0x0303, 0x00001EB4),
    (0x0102, 0x0309, 0x00001EB2),
    (0x0103, 0x0300, 0x00001EB1),
    (0x0103, 0x0301, 0x00001EAF),
    (0x0103, 0x0303, 0x00001EB5),
    (0x0103, 0x0309, 0x00001EB3),
    (0x0112, 0x0300, 0x00001E14),
    (0x0112, 0x0301, 0x00001E16),
    (0x0113, 0x0300, 0x00001E15),
    (0x0113, 0x0301, 0x00001E17),
    (0x014C, 0x0300, 0x00001E50),
    (0x014C, 0x0301, 0x00001E52),
    (0x014D, 0x0300, 0x00001E51),
    (0x014D, 0x0301, 0x00001E53),
    (0x015A, 0x0307, 0x00001E64),
    (0x015B, 0x0307, 0x00001E65),
    (0x0160, 0x0307, 0x00001E66),
    (0x0161, 0x0307, 0x00001E67),
    (0x0168, 0x0301, 0x00001E78),
    (0x0169, 0x0301, 0x00001E79),
    (0x016A, 0x0308, 0x00001E7A),
    (0x016B, 0x0308, 0x00001E7B),
    (0x017F, 0x0307, 0x00001E9B),
    (0x01A0, 0x0300, 0x00001EDC),
    (0x01A0, 0x0301, 0x00001EDA),
    (0x01A0, 0x0303, 0x00001EE0),
    (0x01A0, 0x0309, 0x00001EDE),
    (0x01A0, 0x0323, 0x00001EE2),
    (0x01A1, 0x0300, 0x00001EDD),
    (0x01A1, 0x0301, 0x00001EDB),
    (0x01A1, 0x0303, 0x00001EE1),
    (0x01A1, 0x0309, 0x00001EDF),
    (0x01A1, 0x0323, 0x00001EE3),
    (0x01AF, 0x0300, 0x00001EEA),
    (0x01AF, 0x0301, 0x00001EE8),
    (0x01AF, 0x0303, 0x00001EEE),
    (0x01AF, 0x0309, 0x00001EEC),
    (0x01AF, 0x0323, 0x00001EF0),
    (0x01B0, 0x0300, 0x00001EEB),
    (0x01B0, 0x0301, 0x00001EE9),
    (0x01B0, 0x0303, 0x00001EEF),
    (0x01B0, 0x0309, 0x00001EED),
    (0x01B0, 0x0323, 0x00001EF1),
    (0x01B7, 0x030C, 0x000001EE),
    (0x01EA, 0x0304, 0x000001EC),
    (0x01EB, 0x0304, 0x000001ED),
    (0x0226, 0x0304, 0x000001E0),
    (0x0227, 0x0304, 0x000001E1),
    (0x0228, 0x0306, 0x00001E1C),
    (0x0229, 0x0306, 0x00001E1D),
    (0x022E, 0x0304, 0x00000230),
    (0x022F, 0x0304, 0x00000231),
    (0x0292, 0x030C, 0x000001EF),
    (0x0391, 0x0300, 0x00001FBA),
    (0x0391, 0x0301, 0x00000386),
    (0x0391, 0x0304, 0x00001FB9),
    (0x0391, 0x0306, 0x00001FB8),
    (0x0391, 0x0313, 0x00001F08),
    (0x0391, 0x0314, 0x00001F09),
    (0x0391, 0x0345, 0x00001FBC),
    (0x0395, 0x0300, 0x00001FC8),
    (0x0395, 0x0301, 0x00000388),
    (0x0395, 0x0313, 0x00001F18),
    (0x0395, 0x0314, 0x00001F19),
    (0x0397, 0x0300, 0x00001FCA),
    (0x0397, 0x0301, 0x00000389),
    (0x0397, 0x0313, 0x00001F28),
    (0x0397, 0x0314, 0x00001F29),
    (0x0397, 0x0345, 0x00001FCC),
    (0x0399, 0x0300, 0x00001FDA),
    (0x0399, 0x0301, 0x0000038A),
    (0x0399, 0x0304, 0x00001FD9),
    (0x0399, 0x0306, 0x00001FD8),
    (0x0399, 0x0308, 0x000003AA),
    (0x0399, 0x0313, 0x00001F38),
    (0x0399, 0x0314, 0x00001F39),
    (0x039F, 0x0300, 0x00001FF8),
    (0x039F, 0x0301, 0x0000038C),
    (0x039F, 0x0313, 0x00001F48),
    (0x039F, 0x0314, 0x00001F49),
    (0x03A1, 0x0314, 0x00001FEC),
    (0x03A5, 0x0300, 0x00001FEA),
    (0x03A5, 0x0301, 0x0000038E),
    (0x03A5, 0x0304, 0x00001FE9),
    (0x03A5, 0x0306, 0x00001FE8),
    (0x03A5, 0x0308, 0x000003AB),
    (0x03A5, 0x0314, 0x00001F59),
    (0x03A9, 0x0300, 0x00001FFA),
    (0x03A9, 0x0301, 0x0000038F),
    (0x03A9, 0x0313, 0x00001F68),
    (0x03A9, 0x0314, 0x00001F69),
    (0x03A9, 0x0345, 0x00001FFC),
    (0x03AC, 0x0345, 0x00001FB4),
    (0x03AE, 0x0345, 0x00001FC4),
    (0x03B1, 0x0300, 0x00001F70),
    (0x03B1, 0x0301, 0x000003AC),
    (0x03B1, 0x0304, 0x00001FB1),
    (0x03B1, 0x0306, 0x00001FB0),
    (0x03B1, 0x0313, 0x00001F00),
    (0x03B1, 0x0314, 0x00001F01),
    (0x03B1, 0x0342, 0x00001FB6),
    (0x03B1, 0x0345, 0x00001FB3),
    (0x03B5, 0x0300, 0x00001F72),
    (0x03B5, 0x0301, 0x000003AD),
    (0x03B5, 0x0313, 0x00001F10),
    (0x03B5, 0x0314, 0x00001F11),
    (0x03B7, 0x0300, 0x00001F74),
    (0x03B7, 0x0301, 0x000003AE),
    (0x03B7, 0x0313, 0x00001F20),
    (0x03B7, 0x0314, 0x00001F21),
    (0x03B7, 0x0342, 0x00001FC6),
    (0x03B7, 0x0345, 0x00001FC3),
    (0x03B9, 0x0300, 0x00001F76),
    (0x03B9, 0x0301, 0x000003AF),
    (0x03B9, 0x0304, 0x00001FD1),
    (0x03B9, 0x0306, 0x00001FD0),
    (0x03B9, 0x0308, 0x000003CA),
    (0x03B9, 0x0313, 0x00001F30),
    (0x03B9, 0x0314, 0x00001F31),
    (0x03B9, 0x0342, 0x00001FD6),
    (0x03BF, 0x0300, 0x00001F78),
    (0x03BF, 0x0301, 0x000003CC),
    (0x03BF, 0x0313, 0x00001F40),
    (0x03BF, 0x0314, 0x00001F41),
    (0x03C1, 0x0313, 0x00001FE4),
    (0x03C1, 0x0314, 0x00001FE5),
    (0x03C5, 0x0300, 0x00001F7A),
    (0x03C5, 0x0301, 0x000003CD),
    (0x03C5, 0x0304, 0x00001FE1),
    (0x03C5, 0x0306, 0x00001FE0),
    (0x03C5, 0x0308, 0x000003CB),
    (0x03C5, 0x0313, 0x00001F50),
    (0x03C5, 0x0314, 0x00001F51),
    (0x03C5, 0x0342, 0x00001FE6),
    (0x03C9, 0x0300, 0x00001F7C),
    (0x03C9, 0x0301, 0x000003CE),
    (0x03C9, 0x0313, 0x00001F60),
    (0x03C9, 0x0314, 0x00001F61),
    (0x03C9, 0x0342, 0x00001FF6),
    (0x03C9, 0x0345, 0x00001FF3),
    (0x03CA, 0x0300, 0x00001FD2),
    (0x03CA, 0x0301, 0x00000390),
    (0x03CA, 0x0342, 0x00001FD7),
    (0x03CB, 0x0300, 0x00001FE2),
    (0x03CB, 0x0301, 0x000003B0),
    (0x03CB, 0x0342, 0x00001FE7),
    (0x03CE, 0x0345, 0x00001FF4),
    (0x03D2, 0x0301, 0x000003D3),
    (0x03D2, 0x0308, 0x000003D4),
    (0x0406, 0x0308, 0x00000407),
    (0x0410, 0x0306, 0x000004D0),
    (0x0410, 0x0308, 0x000004D2),
    (0x0413, 0x0301, 0x00000403),
    (0x0415, 0x0300, 0x00000400),
    (0x0415, 0x0306, 0x000004D6),
    (0x0415, 0x0308, 0x00000401),
    (0x0416, 0x0306, 0x000004C1),
    (0x0416, 0x0308, 0x000004DC),
    (0x0417, 0x0308, 0x000004DE),
    (0x0418, 0x0300, 0x0000040D),
    (0x0418, 0x0304, 0x000004E2),
    (0x0418, 0x0306, 0x00000419),
    (0x0418, 0x0308, 0x000004E4),
    (0x041A, 0x0301, 0x0000040C),
    (0x041E, 0x0308, 0x000004E6),
    (0x0423, 0x0304, 0x000004EE),
    (0x0423, 0x0306, 0x0000040E),
    (0x0423, 0x0308, 0x000004F0),
    (0x0423, 0x030B, 0x000004F2),
    (0x0427, 0x0308, 0x000004F4),
    (0x042B, 0x0308, 0x000004F8),
    (0x042D, 0x0308, 0x000004EC),
    (0x0430, 0x0306, 0x000004D1),
    (0x0430, 0x0308, 0x000004D3),
    (0x0433, 0x0301, 0x00000453),
    (0x0435, 0x0300, 0x00000450),
    (0x0435, 0x0306, 0x000004D7),
    (0x0435, 0x0308, 0x00000451),
    (0x0436, 0x0306, 0x000004C2),
    (0x0436, 0x0308, 0x000004DD),
    (0x0437, 0x0308, 0x000004DF),
    (0x0438, 0x0300, 0x0000045D),
    (0x0438, 0x0304, 0x000004E3),
    (0x0438, 0x0306, 0x00000439),
    (0x0438, 0x0308, 0x000004E5),
    (0x043A, 0x0301, 0x0000045C),
    (0x043E, 0x0308, 0x000004E7),
    (0x0443, 0x0304, 0x000004EF),
    (0x0443, 0x0306, 0x0000045E),
    (0x0443, 0x0308, 0x000004F1),
    (0x0443, 0x030B, 0x000004F3),
    (0x0447, 0x0308, 0x000004F5),
    (0x044B, 0x0308, 0x000004F9),
    (0x044D, 0x0308, 0x000004ED),
    (0x0456, 0x0308, 0x00000457),
    (0x0474, 0x030F, 0x00000476),
    (0x0475, 0x030F, 0x00000477),
    (0x04D8, 0x0308, 0x000004DA),
    (0x04D9, 0x0308, 0x000004DB),
    (0x04E8, 0x0308, 0x000004EA),
    (0x04E9, 0x0308, 0x000004EB),
    (0x0627, 0x0653, 0x00000622),
    (0x0627, 0x0654, 0x00000623),
    (0x0627, 0x0655, 0x00000625),
    (0x0648, 0x0654, 0x00000624),
    (0x064A, 0x0654, 0x00000626),
    (0x06C1, 0x0654, 0x000006C2),
    (0x06D2, 0x0654, 0x000006D3),
    (0x06D5, 0x0654, 0x000006C0),
    (0x0928, 0x093C, 0x00000929),
    (0x0930, 0x093C, 0x00000931),
    (0x0933, 0x093C, 0x00000934),
    (0x09C7, 0x09BE, 0x000009CB),
    (0x09C7, 0x09D7, 0x000009CC),
    (0x0B47, 0x0B3E, 0x00000B4B),
    (0x0B47, 0x0B56, 0x00000B48),
    (0x0B47, 0x0B57, 0x00000B4C),
    (0x0B92, 0x0BD7, 0x00000B94),
    (0x0BC6, 0x0BBE, 0x00000BCA),
    (0x0BC6, 0x0BD7, 0x00000BCC),
    (0x0BC7, 0x0BBE, 0x00000BCB),
    (0x0C46, 0x0C56, 0x00000C48),
    (0x0CBF, 0x0CD5, 0x00000CC0),
    (0x0CC6, 0x0CC2, 0x00000CCA),
    (0x0CC6, 0x0CD5, 0x00000CC7),
    (0x0CC6, 0x0CD6, 0x00000CC8),
    (0x0CCA, 0x0CD5, 0x00000CCB),
    (0x0D46, 0x0D3E, 0x00000D4A),
    (0x0D46, 0x0D57, 0x00000D4C),
    (0x0D47, 0x0D3E, 0x00000D4B),
    (0x0DD9, 0x0DCA, 0x00000DDA),
    (0x0DD9, 0x0DCF, 0x00000DDC),
    (0x0DD9, 0x0DDF, 0x00000DDE),
    (0x0DDC, 0x0DCA, 0x00000DDD),
    (0x1025, 0x102E, 0x00001026),
    (0x1B05, 0x1B35, 0x00001B06),
    (0x1B07, 0x1B35, 0x00001B08),
    (0x1B09, 0x1B35, 0x00001B0A),
    (0x1B0B, 0x1B35, 0x00001B0C),
    (0x1B0D, 0x1B35, 0x00001B0E),
    (0x1B11, 0x1B35, 0x00001B12),
    (0x1B3A, 0x1B35, 0x00001B3B),
    (0x1B3C, 0x1B35, 0x00001B3D),
    (0x1B3E, 0x1B35, 0x00001B40),
    (0x1B3F, 0x1B35, 0x00001B41),
    (0x1B42, 0x1B35, 0x00001B43),
    (0x1E36, 0x0304, 0x00001E38),
    (0x1E37, 0x0304, 0x00001E39),
    (0x1E5A, 0x0304, 0x00001E5C),
    (0x1E5B, 0x0304, 0x00001E5D),
    (0x1E62, 0x0307, 0x00001E68),
    (0x1E63, 0x0307, 0x00001E69),
    (0x1EA0, 0x0302, 0x00001EAC),
    (0x1EA0, 0x0306, 0x00001EB6),
    (0x1EA1, 0x0302, 0x00001EAD),
    (0x1EA1, 0x0306, 0x00001EB7),
    (0x1EB8, 0x0302, 0x00001EC6),
    (0x1EB9, 0x0302, 0x00001EC7),
    (0x1ECC, 0x0302, 0x00001ED8),
    (0x1ECD, 0x0302, 0x00001ED9),
    (0x1F00, 0x0300, 0x00001F02),
    (0x1F00, 0x0301, 0x00001F04),
    (0x1F00, 0x0342, 0x00001F06),
    (0x1F00, 0x0345, 0x00001F80),
    (0x1F01, 0x0300, 0x00001F03),
    (0x1F01, 0x0301, 0x00001F05),
    (0x1F01, 0x0342, 0x00001F07),
    (0x1F01, 0x0345, 0x00001F81),
    (0x1F02, 0x0345, 0x00001F82),
    (0x1F03, 0x0345, 0x00001F83),
    (0x1F04, 0x0345, 0x00001F84),
    (0x1F05, 0x0345, 0x00001F85),
    (0x1F06, 0x0345, 0x00001F86),
    (0x1F07, 0x0345, 0x00001F87),
    (0x1F08, 0x0300, 0x00001F0A),
    (0x1F08, 0x0301, 0x00001F0C),
    (0x1F08, 0x0342, 0x00001F0E),
    (0x1F08, 0x0345, 0x00001F88),
    (0x1F09, 0x0300, 0x00001F0B),
    (0x1F09, 0x0301, 0x00001F0D),
    (0x1F09, 0x0342, 0x00001F0F),
    (0x1F09, 0x0345, 0x00001F89),
    (0x1F0A, 0x0345, 0x00001F8A),
    (0x1F0B, 0x0345, 0x00001F8B),
    (0x1F0C, 0x0345, 0x00001F8C),
    (0x1F0D, 0x0345, 0x00001F8D),
    (0x1F0E, 0x0345, 0x00001F8E),
    (0x1F0F, 0x0345, 0x00001F8F),
    (0x1F10, 0x0300, 0x00001F12),
    (0x1F10, 0x0301, 0x00001F14),
    (0x1F11, 0x0300, 0x00001F13),
    (0x1F11, 0x0301, 0x00001F15),
    (0x1F18, 0x0300, 0x00001F1A),
    (0x1F18, 0x0301, 0x00001F1C),
    (0x1F19, 0x0300, 0x00001F1B),
    (0x1F19, 0x0301, 0x00001F1D),
    (0x1F20, 0x0300, 0x00001F22),
    (0x1F20, 0x0301, 0x00001F24),
    (0x1F20, 0x0342, 0x00001F26),
    (0x1F20, 0x0345, 0x00001F90),
    (0x1F21, 0x0300, 0x00001F23),
    (0x1F21, 0x0301, 0x00001F25),
    (0x1F21, 0x0342, 0x00001F27),
    (0x1F21, 0x0345, 0x00001F91),
    (0x1F22, 0x0345, 0x00001F92),
    (0x1F23, 0x0345, 0x00001F93),
    (0x1F24, 0x0345, 0x00001F94),
    (0x1F25, 0x0345, 0x00001F95),
    (0x1F26, 0x0345, 0x00001F96),
    (0x1F27, 0x0345, 0x00001F97),
    (0x1F28, 0x0300, 0x00001F2A),
    (0x1F28, 0x0301, 0x00001F2C),
    (0x1F28, 0x0342, 0x00001F2E),
    (0x1F28, 0x0345, 0x00001F98),
    (0x1F29, 0x0300, 0x00001F2B),
    (0x1F29, 0x0301, 0x00001F2D),
    (0x1F29, 0x0342, 0x00001F2F),
    (0x1F29, 0x0345, 0x00001F99),
    (0x1F2A, 0x0345, 0x00001F9A),
    (0x1F2B, 0x0345, 0x00001F9B),
    (0x1F2C, 0x0345, 0x00001F9C),
    (0x1F2D, 0x0345, 0x00001F9D),
    (0x1F2E, 0x0345, 0x00001F9E),
    (0x1F2F, 0x0345, 0x00001F9F),
    (0x1F30, 0x0300, 0x00001F32),
    (0x1F30, 0x0301, 0x00001F34),
    (0x1F30, 0x0342, 0x00001F36),
    (0x1F31, 0x0300, 0x00001F33),
    (0x1F31, 0x0301, 0x00001F35),
    (0x1F31, 0x0342, 0x00001F37),
    (0x1F38, 0x0300, 0x00001F3A),
    (0x1F38, 0x0301, 0x00001F3C),
    (0x1F38, 0x0342, 0x00001F3E),
    (0x1F39, 0x0300, 0x00001F3B),
    (0x1F39, 0x0301, 0x00001F3D),
    (0x1F39, 0x0342, 0x00001F3F),
    (0x1F40, 0x0300, 0x00001F42),
    (0x1F40, 0x0301, 0x00001F44),
    (0x1F41, 0x0300, 0x00001F43),
    (0x1F41, 0x0301, 0x00001F45),
    (0x1F48, 0x0300, 0x00001F4A),
    (0x1F48, 0x0301, 0x00001F4C),
    (0x1F49, 0x0300, 0x00001F4B),
    (0x1F49, 0x0301, 0x00001F4D),
    (0x1F50, 0x0300, 0x00001F52),
    (0x1F50, 0x0301, 0x00001F54),
    (0x1F50, 0x0342, 0x00001F56),
    (0x1F51, 0x0300, 0x00001F53),
    (0x1F51, 0x0301, 0x00001F55),
    (0x1F51, 0x0342, 0x00001F57),
    (0x1F59, 0x0300, 0x00001F5B),
    (0x1F59, 0x0301, 0x00001F5D),
    (0x1F59, 0x0342, 0x00001F5F),
    (0x1F60, 0x0300, 0x00001F62),
    (0x1F60, 0x0301, 0x00001F64),
    (0x1F60, 0x0342, 0x00001F66),
    (0x1F60, 0x0345, 0x00001FA0),
    (0x1F61, 0x0300, 0x00001F63),
    (0x1F61, 0x0301, 0x00001F65),
    (0x1F61, 0x0342, 0x00001F67),
    (0x1F61, 0x0345, 0x00001FA1),
    (0x1F62, 0x0345, 0x00001FA2),
    (0x1F63, 0x0345, 0x00001FA3),
    (0x1F64, 0x0345, 0x00001FA4),
    (0x1F65, 0x0345, 0x00001FA5),
    (0x1F66, 0x0345, 0x00001FA6),
    (0x1F67, 0x0345, 0x00001FA7),
    (0x1F68, 0x0300, 0x00001F6A),
    (0x1F68, 0x0301, 0x00001F6C),
    (0x1F68, 0x0342, 0x00001F6E),
    (0x1F68, 0x0345, 0x00001FA8),
    (0x1F69, 0x0300, 0x00001F6B),
    (0x1F69, 0x0301, 0x00001F6D),
    (0x1F69, 0x0342, 0x00001F6F),
    (0x1F69, 0x0345, 0x00001FA9),
    (0x1F6A, 0x0345, 0x00001FAA),
    (0x1F6B, 0x0345, 0x00001FAB),
    (0x1F6C, 0x0345, 0x00001FAC),
    (0x1F6D, 0x0345, 0x00001FAD),
    (0x1F6E, 0x0345, 0x00001FAE),
    (0x1F6F, 0x0345, 0x00001FAF),
    (0x1F70, 0x0345, 0x00001FB2),
    (0x1F74, 0x0345, 0x00001FC2),
    (0x1F7C, 0x0345, 0x00001FF2),
    (0x1FB6, 0x0345, 0x00001FB7),
    (0x1FBF, 0x0300, 0x00001FCD),
    (0x1FBF, 0x0301, 0x00001FCE),
    (0x1FBF, 0x0342, 0x00001FCF),
    (0x1FC6, 0x0345, 0x00001FC7),
    (0x1FF6, 0x0345, 0x00001FF7),
    (0x1FFE, 0x0300, 0x00001FDD),
    (0x1FFE, 0x0301, 0x00001FDE),
    (0x1FFE, 0x0342, 0x00001FDF),
    (0x2190, 0x0338, 0x0000219A),
    (0x2192, 0x0338, 0x0000219B),
    (0x2194, 0x0338, 0x000021AE),
    (0x21D0, 0x0338, 0x000021CD),
    (0x21D2, 0x0338, 0x000021CF),
    (0x21D4, 0x0338, 0x000021CE),
    (0x2203, 0x0338, 0x00002204),
    (0x2208, 0x0338, 0x00002209),
    (0x220B, 0x0338, 0x0000220C),
    (0x2223, 0x0338, 0x00002224),
    (0x2225, 0x0338, 0x00002226),
    (0x223C, 0x0338, 0x00002241),
    (0x2243, 0x0338, 0x00002244),
    (0x2245, 0x0338, 0x00002247),
    (0x2248, 0x0338, 0x00002249),
    (0x224D, 0x0338, 0x0000226D),
    (0x2261, 0x0338, 0x00002262),
    (0x2264, 0x0338, 0x00002270),
    (0x2265, 0x0338, 0x00002271),
    (0x2272, 0x0338, 0x00002274),
    (0x2273, 0x0338, 0x00002275),
    (0x2276, 0x0338, 0x00002278),
    (0x2277, 0x0338, 0x00002279),
    (0x227A, 0x0338, 0x00002280),
    (0x227B, 0x0338, 0x00002281),
    (0x227C, 0x0338, 0x000022E0),
    (0x227D, 0x0338, 0x000022E1),
    (0x2282, 0x0338, 0x00002284),
    (0x2283, 0x0338, 0x00002285),
    (0x2286, 0x0338, 0x00002288),
    (0x2287, 0x0338, 0x00002289),
    (0x2291, 0x0338, 0x000022E2),
    (0x2292, 0x0338, 0x000022E3),
    (0x22A2, 0x0338, 0x000022AC),
    (0x22A8, 0x0338, 0x000022AD),
    (0x22A9, 0x0338, 0x000022AE),
    (0x22AB, 0x0338, 0x000022AF),
    (0x22B2, 0x0338, 0x000022EA),
    (0x22B3, 0x0338, 0x000022EB),
    (0x22B4, 0x0338, 0x000022EC),
    (0x22B5, 0x0338, 0x000022ED),
    (0x3046, 0x3099, 0x00003094),
    (0x304B, 0x3099, 0x0000304C),
    (0x304D, 0x3099, 0x0000304E),
    (0x304F, 0x3099, 0x00003050),
    (0x3051, 0x3099, 0x00003052),
    (0x3053, 0x3099, 0x00003054),
    (0x3055, 0x3099, 0x00003056),
    (0x3057, 0x3099, 0x00003058),
    (0x3059, 0x3099, 0x0000305A),
    (0x305B, 0x3099, 0x0000305C),
    (0x305D, 0x3099, 0x0000305E),
    (0x305F, 0x3099, 0x00003060),
    (0x3061, 0x3099, 0x00003062),
    (0x3064, 0x3099, 0x00003065),
    (0x3066, 0x3099, 0x00003067),
    (0x3068, 0x3099, 0x00003069),
    (0x306F, 0x3099, 0x00003070),
    (0x306F, 0x309A, 0x00003071),
    (0x3072, 0x3099, 0x00003073),
    (0x3072, 0x309A, 0x00003074),
    (0x3075, 0x3099, 0x00003076),
    (0x3075, 0x309A, 0x00003077),
    (0x3078, 0x3099, 0x00003079),
    (0x3078, 0x309A, 0x0000307A),
    (0x307B, 0x3099, 0x0000307C),
    (0x307B, 0x309A, 0x0000307D),
    (0x309D, 0x3099, 0x0000309E),
    (0x30A6, 0x3099, 0x000030F4),
    (0x30AB, 0x3099, 0x000030AC),
    (0x30AD, 0x3099, 0x000030AE),
    (0x30AF, 0x3099, 0x000030B0),
    (0x30B1, 0x3099, 0x000030B2),
    (0x30B3, 0x3099, 0x000030B4),
    (0x30B5, 0x3099, 0x000030B6),
    (0x30B7, 0x3099, 0x000030B8),
    (0x30B9, 0x3099, 0x000030BA),
    (0x30BB, 0x3099, 0x000030BC),
    (0x30BD, 0x3099, 0x000030BE),
    (0x30BF, 0x3099, 0x000030C0),
    (0x30C1, 0x3099, 0x000030C2),
    (0x30C4, 0x3099, 0x000030C5),
    (0x30C6, 0x3099, 0x000030C7),
    (0x30C8, 0x3099, 0x000030C9),
    (0x30CF, 0x3099, 0x000030D0),
    (0x30CF, 0x309A, 0x000030D1),
    (0x30D2, 0x3099, 0x000030D3),
    (0x30D2, 0x309A, 0x000030D4),
    (0x30D5, 0x3099, 0x000030D6),
    (0x30D5, 0x309A, 0x000030D7),
    (0x30D8, 0x3099, 0x000030D9),
    (0x30D8, 0x309A, 0x000030DA),
    (0x30DB, 0x3099, 0x000030DC),
    (0x30DB, 0x309A, 0x000030DD),
    (0x30EF, 0x3099, 0x000030F7),
    (0x30F0, 0x3099, 0x000030F8),
    (0x30F1, 0x3099, 0x000030F9),
    (0x30F2, 0x3099, 0x000030FA),
    (0x30FD, 0x3099, 0x000030FE),
    (0x11099, 0x110BA, 0x0001109A),
    (0x1109B, 0x110BA, 0x0001109C),
    (0x110A5, 0x110BA, 0x000110AB),
    (0x11131, 0x11127, 0x0001112E),
    (0x11132, 0x11127, 0x0001112F),
    (0x11347, 0x1133E, 0x0001134B),
    (0x11347, 0x11357, 0x0001134C),
    (0x114B9, 0x114B0, 0x000114BC),
    (0x114B9, 0x114BA, 0x000114BB),
    (0x114B9, 0x114BD, 0x000114BE),
    (0x115B8, 0x115AF, 0x000115BA),
    (0x115B9, 0x115AF, 0x000115BB),
    (0x11935, 0x11930, 0x00011938),
];

/// Look up the Primary Composite (D114) for a pair of characters.
pub fn primary(c1: char, c2: char) -> Option<charcc> {
    PAIRS
        .binary_search_by_key(&(c1 as u32, c2 as u32), |&(a, b, _)| (a, b))
        .ok()
        .map(|index| charcc::from_u32(PAIRS[index].2))
}
