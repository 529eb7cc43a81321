// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! The transliteration engine.
//!
//! A [`Transliterator`] owns a compiled chain of rule steps and applies
//! them strictly in order, each step seeing the output of the previous
//! one. Instances are immutable after construction and safe to share
//! across threads.

use regex::{Captures, NoExpand};

use libunicode::case_algorithms::{to_lowercase, to_uppercase};
use libunicode::normalization::{is_normalized, normalize};

use crate::fold::{latin_fold, to_ascii};
use crate::rules::{parse, CaseOp, RuleError, RuleStep};
use crate::tables::languages::language_key;

/// Transliterator identifiers this engine recognizes in [`create`].
///
/// [`create`]: Transliterator::create
static SUPPORTED_IDS: &[&str] = &[
    "Any-Latin",
    "Any-Lower",
    "Any-NFC",
    "Any-NFD",
    "Any-NFKC",
    "Any-NFKD",
    "Any-Upper",
    "Latin-ASCII",
    "at-ASCII",
    "da-ASCII",
    "de-ASCII",
];

/// A compiled, immutable transliteration rule chain.
#[derive(Debug)]
pub struct Transliterator {
    steps: Vec<RuleStep>,
}

impl Transliterator {
    /// Create a transliterator from a registered identifier, or from a
    /// locale code naming a language-tailored ASCII transform. Unknown
    /// identifiers yield `None`.
    pub fn create(id: &str) -> Option<Transliterator> {
        if let Some(&known) = SUPPORTED_IDS.iter().find(|&&s| s.eq_ignore_ascii_case(id)) {
            return Transliterator::create_from_rules(known);
        }
        let subtag = id.split(|c| c == '-' || c == '_').next()?;
        let language = language_key(subtag)?;
        Some(Transliterator {
            steps: vec![RuleStep::AsciiFold(Some(language))],
        })
    }

    /// Create a transliterator from an ICU rule string. Returns `None`
    /// when the string's outer structure cannot be parsed into steps;
    /// individual unrecognized steps are skipped, not fatal.
    pub fn create_from_rules(rules: &str) -> Option<Transliterator> {
        parse(rules, false).ok().map(|steps| Transliterator { steps })
    }

    /// Strict variant of [`create_from_rules`]: unrecognized steps are
    /// reported instead of skipped.
    ///
    /// [`create_from_rules`]: Transliterator::create_from_rules
    pub fn create_from_rules_strict(rules: &str) -> Result<Transliterator, RuleError> {
        parse(rules, true).map(|steps| Transliterator { steps })
    }

    /// The identifiers [`create`] accepts.
    ///
    /// [`create`]: Transliterator::create
    pub fn list_ids() -> &'static [&'static str] {
        SUPPORTED_IDS
    }

    /// Apply the rule chain to a whole string.
    pub fn transliterate(&self, s: &str) -> String {
        let mut text = s.to_string();
        for step in &self.steps {
            text = apply(step, &text);
        }
        text
    }

    /// Apply the rule chain to the codepoint window `[start, len - end)`
    /// of `s`, reattaching the untouched prefix and suffix verbatim.
    ///
    /// `start` and `end` both count codepoints; `end` counts from the
    /// tail. Negative or out-of-range values fail with `None`. A window
    /// that is empty after clamping returns the input unchanged.
    pub fn transliterate_range(&self, s: &str, start: isize, end: isize) -> Option<String> {
        let count = s.chars().count();
        if start < 0 || end < 0 {
            return None;
        }
        let (start, end) = (start as usize, end as usize);
        if start > count || end > count {
            return None;
        }
        let window_end = count - end;
        if window_end <= start {
            return Some(s.to_string());
        }

        let from = byte_offset(s, start);
        let to = byte_offset(s, window_end);
        let mut result = String::with_capacity(s.len());
        result.push_str(&s[..from]);
        result.push_str(&self.transliterate(&s[from..to]));
        result.push_str(&s[to..]);
        Some(result)
    }

    /// Always `U_ZERO_ERROR`: failures surface as `None` returns from
    /// construction, never as deferred error state.
    pub fn error_code(&self) -> i32 {
        0
    }

    /// See [`error_code`].
    ///
    /// [`error_code`]: Transliterator::error_code
    pub fn error_message(&self) -> &'static str {
        "U_ZERO_ERROR"
    }
}

/// Byte offset of the `index`-th codepoint of `s`.
fn byte_offset(s: &str, index: usize) -> usize {
    s.char_indices()
        .nth(index)
        .map(|(offset, _)| offset)
        .unwrap_or_else(|| s.len())
}

/// Apply one rule step to the working string.
fn apply(step: &RuleStep, text: &str) -> String {
    match step {
        RuleStep::Normalize(form) => {
            if is_normalized(text, *form) {
                text.to_string()
            } else {
                normalize(text, *form)
            }
        }
        RuleStep::Upper => to_uppercase(text),
        RuleStep::Lower => to_lowercase(text),
        RuleStep::LatinFold => latin_fold(text),
        RuleStep::AsciiFold(language) => to_ascii(text, *language),
        RuleStep::Remove(set) => set.replace_all(text, "").into_owned(),
        RuleStep::ReplaceMatches(set, replacement) => {
            set.replace_all(text, NoExpand(replacement)).into_owned()
        }
        RuleStep::CaseMatches(set, CaseOp::Upper) => set
            .replace_all(text, |captures: &Captures| to_uppercase(&captures[0]))
            .into_owned(),
        RuleStep::CaseMatches(set, CaseOp::Lower) => set
            .replace_all(text, |captures: &Captures| to_lowercase(&captures[0]))
            .into_owned(),
        RuleStep::Substitute(from, to) => {
            if from.is_empty() {
                text.to_string()
            } else {
                text.replace(from.as_str(), to)
            }
        }
    }
}
