// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Unicode character data tables.
//!
//! The submodules here are generated offline from the Unicode Character
//! Database and are treated as read-only input artifacts: every table is a
//! pure function of the raw data files, stored as a sorted static array with
//! a binary-search accessor, and is never mutated after the program starts.

pub mod case_mappings;
pub mod character_properties;
pub mod composition_mappings;
pub mod decomposition_mappings;
pub mod grapheme_categories;

/// The version of the Unicode Character Database the tables were built from.
pub const UNICODE_VERSION: (u8, u8, u8) = (14, 0, 0);
