// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! ICU-style transliteration.
//!
//! This crate compiles `;`-delimited ICU rule strings into immutable
//! [`Transliterator`] instances and applies them to text, together with
//! the standalone ASCII folding passes the rule steps are built from.

mod fold;
mod rules;
mod tables;
mod transliterator;

pub use fold::{latin_fold, to_ascii, PLACEHOLDER};
pub use rules::{CaseOp, RuleError, RuleStep};
pub use transliterator::Transliterator;
