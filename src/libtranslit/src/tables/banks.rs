// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Banked codepoint-to-ASCII fallback data.
//!
//! Generated offline. The final stage of `to_ascii` resolves one codepoint
//! at a time through these tables, organized as one array per 256-codepoint
//! bank so a lookup is an index operation. `None` marks a codepoint with no
//! ASCII rendition; callers substitute a placeholder for those.

/// Look up the ASCII fallback for a codepoint, by bank.
pub fn ascii_bank(cp: u32) -> Option<&'static str> {
    let bank: &[Option<&str>; 256] = match cp >> 8 {
        0x00 => &BANK_00,
        0x01 => &BANK_01,
        0x02 => &BANK_02,
        0x03 => &BANK_03,
        0x04 => &BANK_04,
        0x1E => &BANK_1E,
        0x20 => &BANK_20,
        _ => return None,
    };
    bank[(cp & 0xFF) as usize]
}

#[rustfmt::skip]
static BANK_00: [Option<&str>; 256] = [
    Some("\u{0}"),
    Some("\u{1}"),
    Some("\u{2}"),
    Some("\u{3}"),
    Some("\u{4}"),
    Some("\u{5}"),
    Some("\u{6}"),
    Some("\u{7}"),
    Some("\u{8}"),
    Some("\u{9}"),
    Some("\u{A}"),
    Some("\u{B}"),
    Some("\u{C}"),
    Some("\u{D}"),
    Some("\u{E}"),
    Some("\u{F}"),
    Some("\u{10}"),
    Some("\u{11}"),
    Some("\u{12}"),
    Some("\u{13}"),
    Some("\u{14}"),
    Some("\u{15}"),
    Some("\u{16}"),
    Some("\u{17}"),
    Some("\u{18}"),
    Some("\u{19}"),
    Some("\u{1A}"),
    Some("\u{1B}"),
    Some("\u{1C}"),
    Some("\u{1D}"),
    Some("\u{1E}"),
    Some("\u{1F}"),
    Some(" "),
    Some("!"),
    Some("\u{22}"),
    Some("#"),
    Some("$"),
    Some("%"),
    Some("&"),
    Some("'"),
    Some("("),
    Some(")"),
    Some("*"),
    Some("+"),
    Some(","),
    Some("-"),
    Some("."),
    Some("/"),
    Some("0"),
    Some("1"),
    Some("2"),
    Some("3"),
    Some("4"),
    Some("5"),
    Some("6"),
    Some("7"),
    Some("8"),
    Some("9"),
    Some(":"),
    Some(";"),
    Some("<"),
    Some("="),
    Some(">"),
    Some("?"),
    Some("@"),
    Some("A"),
    Some("B"),
    Some("C"),
    Some("D"),
    Some("E"),
    Some("F"),
    Some("G"),
    Some("H"),
    Some("I"),
    Some("J"),
    Some("K"),
    Some("L"),
    Some("M"),
    Some("N"),
    Some("O"),
    Some("P"),
    Some("Q"),
    Some("R"),
    Some("S"),
    Some("T"),
    Some("U"),
    Some("V"),
    Some("W"),
    Some("X"),
    Some("Y"),
    Some("Z"),
    Some("["),
    Some("\u{5C}"),
    Some("]"),
    Some("^"),
    Some("_"),
    Some("`"),
    Some("a"),
    Some("b"),
    Some("c"),
    Some("d"),
    Some("e"),
    Some("f"),
    Some("g"),
    Some("h"),
    Some("i"),
    Some("j"),
    Some("k"),
    Some("l"),
    Some("m"),
    Some("n"),
    Some("o"),
    Some("p"),
    Some("q"),
    Some("r"),
    Some("s"),
    Some("t"),
    Some("u"),
    Some("v"),
    Some("w"),
    Some("x"),
    Some("y"),
    Some("z"),
    Some("{"),
    Some("|"),
    Some("}"),
    Some("~"),
    Some("\u{7F}"),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some(" "),
    Some("!"),
    None,
    None,
    None,
    None,
    None,
    None,
    Some(" "),
    Some("(C)"),
    Some("a"),
    Some("<<"),
    None,
    None,
    Some("(R)"),
    Some(" "),
    None,
    Some("+-"),
    Some("2"),
    Some("3"),
    Some(" "),
    None,
    None,
    Some("."),
    Some(" "),
    Some("1"),
    Some("o"),
    Some(">>"),
    Some("1/4"),
    Some("1/2"),
    Some("3/4"),
    Some("?"),
    Some("A"),
    Some("A"),
    Some("A"),
    Some("A"),
    Some("A"),
    Some("A"),
    Some("AE"),
    Some("C"),
    Some("E"),
    Some("E"),
    Some("E"),
    Some("E"),
    Some("I"),
    Some("I"),
    Some("I"),
    Some("I"),
    Some("D"),
    Some("N"),
    Some("O"),
    Some("O"),
    Some("O"),
    Some("O"),
    Some("O"),
    Some("x"),
    Some("O"),
    Some("U"),
    Some("U"),
    Some("U"),
    Some("U"),
    Some("Y"),
    Some("TH"),
    Some("ss"),
    Some("a"),
    Some("a"),
    Some("a"),
    Some("a"),
    Some("a"),
    Some("a"),
    Some("ae"),
    Some("c"),
    Some("e"),
    Some("e"),
    Some("e"),
    Some("e"),
    Some("i"),
    Some("i"),
    Some("i"),
    Some("i"),
    Some("d"),
    Some("n"),
    Some("o"),
    Some("o"),
    Some("o"),
    Some("o"),
    Some("o"),
    Some("/"),
    Some("o"),
    Some("u"),
    Some("u"),
    Some("u"),
    Some("u"),
    Some("y"),
    Some("th"),
    Some("y"),
];

#[rustfmt::skip]
static BANK_01: [Option<&str>; 256] = [
    Some("A"),
    Some("a"),
    Some("A"),
    Some("a"),
    Some("A"),
    Some("a"),
    Some("C"),
    Some("c"),
    Some("C"),
    Some("c"),
    Some("C"),
    Some("c"),
    Some("C"),
    Some("c"),
    Some("D"),
    Some("d"),
    Some("D"),
    Some("d"),
    Some("E"),
    Some("e"),
    Some("E"),
    Some("e"),
    Some("E"),
    Some("e"),
    Some("E"),
    Some("e"),
    Some("E"),
    Some("e"),
    Some("G"),
    Some("g"),
    Some("G"),
    Some("g"),
    Some("G"),
    Some("g"),
    Some("G"),
    Some("g"),
    Some("H"),
    Some("h"),
    Some("H"),
    Some("h"),
    Some("I"),
    Some("i"),
    Some("I"),
    Some("i"),
    Some("I"),
    Some("i"),
    Some("I"),
    Some("i"),
    Some("I"),
    Some("i"),
    Some("IJ"),
    Some("ij"),
    Some("J"),
    Some("j"),
    Some("K"),
    Some("k"),
    Some("k"),
    Some("L"),
    Some("l"),
    Some("L"),
    Some("l"),
    Some("L"),
    Some("l"),
    Some("L."),
    Some("l."),
    Some("L"),
    Some("l"),
    Some("N"),
    Some("n"),
    Some("N"),
    Some("n"),
    Some("N"),
    Some("n"),
    None,
    Some("NG"),
    Some("ng"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    Some("OE"),
    Some("oe"),
    Some("R"),
    Some("r"),
    Some("R"),
    Some("r"),
    Some("R"),
    Some("r"),
    Some("S"),
    Some("s"),
    Some("S"),
    Some("s"),
    Some("S"),
    Some("s"),
    Some("S"),
    Some("s"),
    Some("T"),
    Some("t"),
    Some("T"),
    Some("t"),
    Some("T"),
    Some("t"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("W"),
    Some("w"),
    Some("Y"),
    Some("y"),
    Some("Y"),
    Some("Z"),
    Some("z"),
    Some("Z"),
    Some("z"),
    Some("Z"),
    Some("z"),
    Some("s"),
    Some("b"),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some("D"),
    None,
    None,
    None,
    None,
    None,
    None,
    Some("E"),
    None,
    None,
    None,
    None,
    None,
    None,
    Some("I"),
    None,
    None,
    Some("l"),
    None,
    None,
    None,
    None,
    None,
    Some("O"),
    Some("o"),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some("U"),
    Some("u"),
    None,
    None,
    None,
    None,
    Some("Z"),
    Some("z"),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some("DZ"),
    Some("Dz"),
    Some("dz"),
    Some("LJ"),
    Some("Lj"),
    Some("lj"),
    Some("NJ"),
    Some("Nj"),
    Some("nj"),
    Some("A"),
    Some("a"),
    Some("I"),
    Some("i"),
    Some("O"),
    Some("o"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("e"),
    Some("A"),
    Some("a"),
    Some("A"),
    Some("a"),
    Some("AE"),
    Some("ae"),
    None,
    None,
    Some("G"),
    Some("g"),
    Some("K"),
    Some("k"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    None,
    None,
    Some("j"),
    Some("DZ"),
    Some("Dz"),
    Some("dz"),
    Some("G"),
    Some("g"),
    None,
    None,
    Some("N"),
    Some("n"),
    Some("A"),
    Some("a"),
    Some("AE"),
    Some("ae"),
    Some("O"),
    Some("o"),
];

#[rustfmt::skip]
static BANK_02: [Option<&str>; 256] = [
    Some("A"),
    Some("a"),
    Some("A"),
    Some("a"),
    Some("E"),
    Some("e"),
    Some("E"),
    Some("e"),
    Some("I"),
    Some("i"),
    Some("I"),
    Some("i"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    Some("R"),
    Some("r"),
    Some("R"),
    Some("r"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("S"),
    Some("s"),
    Some("T"),
    Some("t"),
    None,
    None,
    Some("H"),
    Some("h"),
    None,
    None,
    None,
    None,
    None,
    None,
    Some("A"),
    Some("a"),
    Some("E"),
    Some("e"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    Some("Y"),
    Some("y"),
    None,
    None,
    None,
    Some("j"),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some("E"),
    Some("J"),
    Some("j"),
    None,
    Some("q"),
    Some("R"),
    Some("r"),
    Some("Y"),
    Some("y"),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
];

#[rustfmt::skip]
static BANK_03: [Option<&str>; 256] = [
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    None,
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some(";"),
    None,
    None,
    None,
    None,
    None,
    None,
    Some(" "),
    Some("A"),
    Some("."),
    Some("E"),
    Some("I"),
    Some("I"),
    None,
    Some("O"),
    None,
    Some("Y"),
    Some("O"),
    Some("i"),
    Some("A"),
    Some("B"),
    Some("G"),
    Some("D"),
    Some("E"),
    Some("Z"),
    Some("I"),
    Some("Th"),
    Some("I"),
    Some("K"),
    Some("L"),
    Some("M"),
    Some("N"),
    Some("X"),
    Some("O"),
    Some("P"),
    Some("R"),
    None,
    Some("S"),
    Some("T"),
    Some("Y"),
    Some("F"),
    Some("Ch"),
    Some("Ps"),
    Some("O"),
    Some("I"),
    Some("Y"),
    Some("a"),
    Some("e"),
    Some("i"),
    Some("i"),
    Some("y"),
    Some("a"),
    Some("b"),
    Some("g"),
    Some("d"),
    Some("e"),
    Some("z"),
    Some("i"),
    Some("th"),
    Some("i"),
    Some("k"),
    Some("l"),
    Some("m"),
    Some("n"),
    Some("x"),
    Some("o"),
    Some("p"),
    Some("r"),
    Some("s"),
    Some("s"),
    Some("t"),
    Some("y"),
    Some("f"),
    Some("ch"),
    Some("ps"),
    Some("o"),
    Some("i"),
    Some("y"),
    Some("o"),
    Some("y"),
    Some("o"),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
];

#[rustfmt::skip]
static BANK_04: [Option<&str>; 256] = [
    Some("E"),
    Some("Yo"),
    None,
    Some("G"),
    Some("Ye"),
    None,
    Some("I"),
    Some("Yi"),
    None,
    None,
    None,
    None,
    Some("K"),
    Some("I"),
    Some("U"),
    None,
    Some("A"),
    Some("B"),
    Some("V"),
    Some("G"),
    Some("D"),
    Some("E"),
    Some("Zh"),
    Some("Z"),
    Some("I"),
    Some("I"),
    Some("K"),
    Some("L"),
    Some("M"),
    Some("N"),
    Some("O"),
    Some("P"),
    Some("R"),
    Some("S"),
    Some("T"),
    Some("U"),
    Some("F"),
    Some("Kh"),
    Some("Ts"),
    Some("Ch"),
    Some("Sh"),
    Some("Shch"),
    Some(""),
    Some("Y"),
    Some(""),
    Some("E"),
    Some("Yu"),
    Some("Ya"),
    Some("a"),
    Some("b"),
    Some("v"),
    Some("g"),
    Some("d"),
    Some("e"),
    Some("zh"),
    Some("z"),
    Some("i"),
    Some("i"),
    Some("k"),
    Some("l"),
    Some("m"),
    Some("n"),
    Some("o"),
    Some("p"),
    Some("r"),
    Some("s"),
    Some("t"),
    Some("u"),
    Some("f"),
    Some("kh"),
    Some("ts"),
    Some("ch"),
    Some("sh"),
    Some("shch"),
    Some(""),
    Some("y"),
    Some(""),
    Some("e"),
    Some("yu"),
    Some("ya"),
    Some("e"),
    Some("yo"),
    None,
    Some("g"),
    Some("ye"),
    None,
    Some("i"),
    Some("yi"),
    None,
    None,
    None,
    None,
    Some("k"),
    Some("i"),
    Some("u"),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some("G"),
    Some("g"),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some("Zh"),
    Some("zh"),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some("A"),
    Some("a"),
    Some("A"),
    Some("a"),
    None,
    None,
    Some("E"),
    Some("e"),
    None,
    None,
    None,
    None,
    Some("Zh"),
    Some("zh"),
    Some("Z"),
    Some("z"),
    None,
    None,
    Some("I"),
    Some("i"),
    Some("I"),
    Some("i"),
    Some("O"),
    Some("o"),
    None,
    None,
    None,
    None,
    Some("E"),
    Some("e"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("Ch"),
    Some("ch"),
    None,
    None,
    Some("Y"),
    Some("y"),
    None,
    None,
    None,
    None,
    None,
    None,
];

#[rustfmt::skip]
static BANK_1E: [Option<&str>; 256] = [
    Some("A"),
    Some("a"),
    Some("B"),
    Some("b"),
    Some("B"),
    Some("b"),
    Some("B"),
    Some("b"),
    Some("C"),
    Some("c"),
    Some("D"),
    Some("d"),
    Some("D"),
    Some("d"),
    Some("D"),
    Some("d"),
    Some("D"),
    Some("d"),
    Some("D"),
    Some("d"),
    Some("E"),
    Some("e"),
    Some("E"),
    Some("e"),
    Some("E"),
    Some("e"),
    Some("E"),
    Some("e"),
    Some("E"),
    Some("e"),
    Some("F"),
    Some("f"),
    Some("G"),
    Some("g"),
    Some("H"),
    Some("h"),
    Some("H"),
    Some("h"),
    Some("H"),
    Some("h"),
    Some("H"),
    Some("h"),
    Some("H"),
    Some("h"),
    Some("I"),
    Some("i"),
    Some("I"),
    Some("i"),
    Some("K"),
    Some("k"),
    Some("K"),
    Some("k"),
    Some("K"),
    Some("k"),
    Some("L"),
    Some("l"),
    Some("L"),
    Some("l"),
    Some("L"),
    Some("l"),
    Some("L"),
    Some("l"),
    Some("M"),
    Some("m"),
    Some("M"),
    Some("m"),
    Some("M"),
    Some("m"),
    Some("N"),
    Some("n"),
    Some("N"),
    Some("n"),
    Some("N"),
    Some("n"),
    Some("N"),
    Some("n"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    Some("P"),
    Some("p"),
    Some("P"),
    Some("p"),
    Some("R"),
    Some("r"),
    Some("R"),
    Some("r"),
    Some("R"),
    Some("r"),
    Some("R"),
    Some("r"),
    Some("S"),
    Some("s"),
    Some("S"),
    Some("s"),
    Some("S"),
    Some("s"),
    Some("S"),
    Some("s"),
    Some("S"),
    Some("s"),
    Some("T"),
    Some("t"),
    Some("T"),
    Some("t"),
    Some("T"),
    Some("t"),
    Some("T"),
    Some("t"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("V"),
    Some("v"),
    Some("V"),
    Some("v"),
    Some("W"),
    Some("w"),
    Some("W"),
    Some("w"),
    Some("W"),
    Some("w"),
    Some("W"),
    Some("w"),
    Some("W"),
    Some("w"),
    Some("X"),
    Some("x"),
    Some("X"),
    Some("x"),
    Some("Y"),
    Some("y"),
    Some("Z"),
    Some("z"),
    Some("Z"),
    Some("z"),
    Some("Z"),
    Some("z"),
    Some("h"),
    Some("t"),
    Some("w"),
    Some("y"),
    None,
    Some("s"),
    None,
    None,
    Some("SS"),
    None,
    Some("A"),
    Some("a"),
    Some("A"),
    Some("a"),
    Some("A"),
    Some("a"),
    Some("A"),
    Some("a"),
    Some("A"),
    Some("a"),
    Some("A"),
    Some("a"),
    Some("A"),
    Some("a"),
    Some("A"),
    Some("a"),
    Some("A"),
    Some("a"),
    Some("A"),
    Some("a"),
    Some("A"),
    Some("a"),
    Some("A"),
    Some("a"),
    Some("E"),
    Some("e"),
    Some("E"),
    Some("e"),
    Some("E"),
    Some("e"),
    Some("E"),
    Some("e"),
    Some("E"),
    Some("e"),
    Some("E"),
    Some("e"),
    Some("E"),
    Some("e"),
    Some("E"),
    Some("e"),
    Some("I"),
    Some("i"),
    Some("I"),
    Some("i"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    Some("O"),
    Some("o"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("U"),
    Some("u"),
    Some("Y"),
    Some("y"),
    Some("Y"),
    Some("y"),
    Some("Y"),
    Some("y"),
    Some("Y"),
    Some("y"),
    None,
    None,
    None,
    None,
    None,
    None,
];

#[rustfmt::skip]
static BANK_20: [Option<&str>; 256] = [
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some("-"),
    Some("-"),
    Some("-"),
    Some("-"),
    Some("--"),
    Some("--"),
    None,
    Some(" "),
    Some("'"),
    Some("'"),
    Some(","),
    Some("'"),
    Some("\u{22}"),
    Some("\u{22}"),
    Some(",,"),
    Some("\u{22}"),
    Some("+"),
    Some("++"),
    Some("*"),
    None,
    Some("."),
    Some(".."),
    Some("..."),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some(" "),
    None,
    None,
    Some("'"),
    Some("\u{22}"),
    Some("'''"),
    Some("`"),
    Some("``"),
    Some("```"),
    None,
    Some("<"),
    Some(">"),
    None,
    Some("!!"),
    None,
    Some(" "),
    None,
    None,
    None,
    None,
    None,
    Some("/"),
    None,
    None,
    Some("??"),
    Some("?!"),
    Some("!?"),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some("%"),
    None,
    None,
    None,
    None,
    Some("''''"),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some("0"),
    Some("i"),
    None,
    None,
    Some("4"),
    Some("5"),
    Some("6"),
    Some("7"),
    Some("8"),
    Some("9"),
    Some("+"),
    Some("-"),
    Some("="),
    Some("("),
    Some(")"),
    Some("n"),
    Some("0"),
    Some("1"),
    Some("2"),
    Some("3"),
    Some("4"),
    Some("5"),
    Some("6"),
    Some("7"),
    Some("8"),
    Some("9"),
    Some("+"),
    Some("-"),
    Some("="),
    Some("("),
    Some(")"),
    None,
    Some("a"),
    Some("e"),
    Some("o"),
    Some("x"),
    None,
    Some("h"),
    Some("k"),
    Some("l"),
    Some("m"),
    Some("n"),
    Some("p"),
    Some("s"),
    Some("t"),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    None,
    None,
    None,
    None,
    Some(""),
    None,
    None,
    None,
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    Some(""),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
];

