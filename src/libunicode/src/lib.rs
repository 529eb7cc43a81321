// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Self-contained Unicode character algorithms.
//!
//! This crate contains definitions of Unicode character properties and the
//! algorithms built on them: normalization, default case conversion and
//! folding, and grapheme cluster segmentation. Everything is backed by data
//! tables generated offline from the Unicode Character Database, so no
//! native internationalization library is required at runtime.
//!
//! All operations are synchronous pure functions over immutable inputs, safe
//! to call concurrently without locking.

mod tables;

pub use tables::character_properties::canonical_combining_class;
pub use tables::grapheme_categories::{grapheme_category, GraphemeCategory};
pub use tables::UNICODE_VERSION;

pub mod case_algorithms;
pub mod grapheme;
pub mod normalization;

mod util;
