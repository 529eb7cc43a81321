// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! ICU rule string parsing.
//!
//! A rule string is a `;`-delimited sequence of steps. Parsing is two
//! staged: the tokenizer splits the string into step texts and rejects
//! constructs we cannot honor at all (global filters, unbalanced
//! brackets), then the classifier turns each step text into a tagged
//! [`RuleStep`]. Step texts the classifier does not recognize are
//! skipped in lenient mode and rejected in strict mode.

use regex::Regex;
use thiserror::Error;

use libunicode::normalization::Form;

use crate::tables::languages::language_key;

//
// Rule Steps
//

/// One compiled step of a transliteration chain.
#[derive(Debug, Clone)]
pub enum RuleStep {
    /// Normalize the working string to the given form.
    Normalize(Form),
    /// Full Unicode uppercase mapping of the working string.
    Upper,
    /// Full Unicode lowercase mapping of the working string.
    Lower,
    /// Fold Latin letters and typographic punctuation to ASCII.
    LatinFold,
    /// Full ASCII transliteration, optionally language-tailored.
    AsciiFold(Option<&'static str>),
    /// Delete every character matching the set.
    Remove(Regex),
    /// Replace every character matching the set with a literal.
    ReplaceMatches(Regex, String),
    /// Case-map only the characters matching the set.
    CaseMatches(Regex, CaseOp),
    /// Literal substring substitution.
    Substitute(String, String),
}

/// Direction of a set-restricted case mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseOp {
    Upper,
    Lower,
}

/// Why a rule string failed to parse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    /// `:: ...` global filters select the transform's input set, which
    /// this engine does not model.
    #[error("global filters are not supported")]
    GlobalFilter,
    #[error("unbalanced bracket in rule step {0:?}")]
    UnbalancedBracket(String),
    /// Only reported in strict mode; lenient parsing skips these.
    #[error("unrecognized rule step {0:?}")]
    UnknownStep(String),
}

//
// Tokenizer
//

/// Parse a rule string into a step chain.
///
/// In lenient mode unrecognized steps are dropped with a debug log, the
/// way the reference engine tolerates unsupported ICU transforms. Strict
/// mode turns them into [`RuleError::UnknownStep`].
pub fn parse(rules: &str, strict: bool) -> Result<Vec<RuleStep>, RuleError> {
    let mut steps = Vec::new();
    for text in rules.split(';') {
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        if text.starts_with("::") {
            return Err(RuleError::GlobalFilter);
        }
        match classify(text)? {
            Some(step) => steps.push(step),
            None if strict => return Err(RuleError::UnknownStep(text.to_string())),
            None => log::debug!("skipping unrecognized transliteration step {:?}", text),
        }
    }
    Ok(steps)
}

//
// Classifier
//

/// Classify one step text. `Ok(None)` means "not recognized".
///
/// The order of checks is significant: bracketed set expressions are
/// claimed before the case and substitution checks so that a step like
/// `[AU] lower()` case-maps only its set instead of the whole string,
/// and `Latin-ASCII` is claimed by the Latin check before the generic
/// `-ASCII` suffix.
fn classify(text: &str) -> Result<Option<RuleStep>, RuleError> {
    let lower = text.to_ascii_lowercase();

    if let Some(form) = normalization_form(&lower) {
        return Ok(Some(RuleStep::Normalize(form)));
    }
    if text.starts_with('[') {
        return bracket_step(text);
    }
    if let Some(index) = text.find("<>") {
        let from = unquote(&text[..index]);
        let to = unquote(&text[index + 2..]);
        return Ok(Some(RuleStep::Substitute(from.to_string(), to.to_string())));
    }
    if let Some(index) = text.find('>') {
        let from = unquote(&text[..index]);
        let to = unquote(&text[index + 1..]);
        return Ok(Some(RuleStep::Substitute(from.to_string(), to.to_string())));
    }
    if lower.contains("upper") {
        return Ok(Some(RuleStep::Upper));
    }
    if lower.contains("lower") {
        return Ok(Some(RuleStep::Lower));
    }
    if lower.contains("latin") {
        return Ok(Some(RuleStep::LatinFold));
    }
    if let Some(language) = lower.strip_suffix("-ascii") {
        return Ok(Some(RuleStep::AsciiFold(language_key(language))));
    }
    if let Some(language) = locale_language(text) {
        return Ok(Some(RuleStep::AsciiFold(Some(language))));
    }
    Ok(None)
}

/// Recognize a normalization form step, with or without the `Any-`
/// source-set prefix.
fn normalization_form(lower: &str) -> Option<Form> {
    let name = lower.strip_prefix("any-").unwrap_or(lower);
    match name {
        "nfc" => Some(Form::Nfc),
        "nfd" => Some(Form::Nfd),
        "nfkc" => Some(Form::Nfkc),
        "nfkd" => Some(Form::Nfkd),
        _ => None,
    }
}

/// Recognize a locale code whose primary subtag names a language table.
fn locale_language(text: &str) -> Option<&'static str> {
    let subtag = text.split(|c| c == '-' || c == '_').next()?;
    language_key(subtag)
}

/// Parse a step that starts with a bracketed set expression.
fn bracket_step(text: &str) -> Result<Option<RuleStep>, RuleError> {
    let close = match text.rfind(']') {
        Some(index) => index,
        None => return Err(RuleError::UnbalancedBracket(text.to_string())),
    };
    let pattern = match set_pattern(&text[1..close]) {
        Some(pattern) => pattern,
        None => return Ok(None),
    };
    let regex = match Regex::new(&pattern) {
        Ok(regex) => regex,
        Err(_) => return Ok(None),
    };

    let rest = text[close + 1..].trim();
    let lower = rest.to_ascii_lowercase();
    if lower == "remove" {
        Ok(Some(RuleStep::Remove(regex)))
    } else if let Some(replacement) = rest.strip_prefix('>') {
        let replacement = unquote(replacement);
        Ok(Some(RuleStep::ReplaceMatches(regex, replacement.to_string())))
    } else if lower.contains("lower") {
        Ok(Some(RuleStep::CaseMatches(regex, CaseOp::Lower)))
    } else if lower.contains("upper") {
        Ok(Some(RuleStep::CaseMatches(regex, CaseOp::Upper)))
    } else {
        Ok(None)
    }
}

/// Compile a set expression body into a regex character class.
fn set_pattern(set: &str) -> Option<String> {
    let set = set.trim();
    if set.starts_with(':') && set.ends_with(':') && set.len() >= 2 {
        return posix_class(&set[1..set.len() - 1]).map(|class| format!("[{}]", class));
    }
    // Literal set. Escape the class metacharacters and pass everything
    // else through raw so that ranges like a-z keep working.
    let mut pattern = String::with_capacity(set.len() + 2);
    pattern.push('[');
    for c in set.chars() {
        if matches!(c, '[' | ']' | '\\' | '^' | '&' | '~') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push(']');
    Some(pattern)
}

/// Translate a POSIX-style set name into a regex class body.
///
/// Names are matched after dropping spaces, hyphens, and underscores,
/// so `Nonspacing Mark`, `NONSPACING-MARK`, and `NonspacingMark` are
/// all the same set.
fn posix_class(name: &str) -> Option<&'static str> {
    let normalized: String = name
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .map(|c| c.to_ascii_uppercase())
        .collect();
    match normalized.as_str() {
        "NONSPACINGMARK" => Some(r"\p{Mn}"),
        "MARK" => Some(r"\p{M}"),
        "SPACE" | "WHITESPACE" => Some(r"\s"),
        "PUNCTUATION" => Some(r"\p{P}"),
        "LETTER" => Some(r"\p{L}"),
        "DIGIT" | "NUMBER" => Some(r"\p{N}"),
        _ => None,
    }
}

/// Trim whitespace and ICU literal quotes from a substitution operand.
fn unquote(text: &str) -> &str {
    text.trim().trim_matches('\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_normalization_steps() {
        let steps = parse("NFKC; Any-NFD;", false).unwrap();
        assert!(matches!(steps[0], RuleStep::Normalize(Form::Nfkc)));
        assert!(matches!(steps[1], RuleStep::Normalize(Form::Nfd)));
    }

    #[test]
    fn bracket_beats_the_case_check() {
        let steps = parse("[AU] lower();", false).unwrap();
        assert!(matches!(steps[0], RuleStep::CaseMatches(_, CaseOp::Lower)));
    }

    #[test]
    fn latin_beats_the_ascii_suffix() {
        let steps = parse("Latin-ASCII; de-ASCII; da;", false).unwrap();
        assert!(matches!(steps[0], RuleStep::LatinFold));
        assert!(matches!(steps[1], RuleStep::AsciiFold(Some("de"))));
        assert!(matches!(steps[2], RuleStep::AsciiFold(Some("da"))));
    }

    #[test]
    fn rejects_global_filters() {
        assert_eq!(
            parse(":: [\u{164}\u{C4}] lower();", false).unwrap_err(),
            RuleError::GlobalFilter
        );
    }

    #[test]
    fn rejects_unbalanced_brackets() {
        assert_eq!(
            parse("[:Nonspacing Mark: Remove;", false).unwrap_err(),
            RuleError::UnbalancedBracket("[:Nonspacing Mark: Remove".to_string())
        );
    }

    #[test]
    fn lenient_and_strict_unknown_steps() {
        assert_eq!(parse("Frobnicate-Widdershins;", false).unwrap().len(), 0);
        assert_eq!(
            parse("Frobnicate-Widdershins;", true).unwrap_err(),
            RuleError::UnknownStep("Frobnicate-Widdershins".to_string())
        );
    }

    #[test]
    fn substitutions_strip_quotes() {
        let steps = parse("'aBc' > 'aBC'; x <> y;", false).unwrap();
        match &steps[0] {
            RuleStep::Substitute(from, to) => {
                assert_eq!(from, "aBc");
                assert_eq!(to, "aBC");
            }
            other => panic!("unexpected step {:?}", other),
        }
        assert!(matches!(&steps[1], RuleStep::Substitute(from, to) if from == "x" && to == "y"));
    }
}
