// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Transliteration data tables.
//!
//! `latin_ascii` and `banks` are generated offline from the Unicode
//! Character Database and the CLDR Latin-ASCII transform; `languages`
//! is maintained by hand.

mod banks;
pub mod languages;
mod latin_ascii;

pub use banks::ascii_bank;
pub use latin_ascii::latin_ascii;
