// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Grapheme cluster segmentation and cluster-oriented string operations.
//!
//! This module implements extended grapheme cluster boundaries as defined by
//! [Unicode Standard Annex #29][UAX-29], plus substring, extraction, and
//! search operations that measure strings in user-perceived characters
//! rather than bytes or codepoints.
//!
//! The boundary rules are an explicit state machine over
//! [`GraphemeCategory`], not a compiled pattern: cluster structure (CRLF,
//! Hangul syllables, extender runs, emoji joiner sequences, regional
//! indicator pairs) is fully described by the previous category plus two
//! bits of run state.
//!
//! [UAX-29]: https://www.unicode.org/reports/tr29/

use thiserror::Error;

use crate::case_algorithms::case_fold;
use crate::tables::grapheme_categories::{grapheme_category, GraphemeCategory};

//
// Errors
//

/// An invalid argument to a grapheme operation.
///
/// Semantic no-match conditions are not errors; they are reported as `None`
/// or as an empty result by the individual operations.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum GraphemeError {
    /// A start position pointing past the end of the string.
    #[error("start {start} is out of range for a string of {count} clusters")]
    StartOutOfRange {
        /// The requested start position, as given.
        start: isize,
        /// The cluster count of the subject string.
        count: usize,
    },

    /// A search offset that resolves outside of the string.
    #[error("offset {offset} is out of range")]
    OffsetOutOfRange {
        /// The requested offset, as given.
        offset: isize,
    },

    /// An empty search needle, which every search here rejects.
    #[error("search needle is empty")]
    EmptyNeedle,
}

//
// Segmentation
//

/// An iterator over the grapheme clusters of a string, lazily computed.
///
/// Created by [`clusters`]. The iterator is restartable in the sense that it
/// holds no shared state: cloning it (or calling [`clusters`] again) restarts
/// segmentation from scratch.
#[derive(Debug, Clone)]
pub struct Clusters<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Clusters<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let (cluster, rest) = self.rest.split_at(first_cluster_len(self.rest));
        self.rest = rest;
        Some(cluster)
    }
}

/// Segment a string into grapheme clusters.
pub fn clusters(s: &str) -> Clusters<'_> {
    Clusters { rest: s }
}

/// Count the grapheme clusters of a string. The empty string has zero.
pub fn count(s: &str) -> usize {
    clusters(s).count()
}

/// Compute the byte length of the first grapheme cluster of a non-empty
/// string.
fn first_cluster_len(s: &str) -> usize {
    use GraphemeCategory::*;

    let mut chars = s.char_indices();
    // The caller guarantees a non-empty string.
    let first = chars.next().map(|(_, c)| c).unwrap_or('\u{0}');
    let mut prev = grapheme_category(first);

    // Run state for GB11 (emoji ZWJ sequences) and GB12 (regional
    // indicator pairs).
    let mut ext_pic_run = prev == ExtendedPictographic;
    let mut zwj_joins_emoji = false;
    let mut ri_pair_open = prev == RegionalIndicator;

    for (index, c) in chars {
        let next = grapheme_category(c);
        if is_break(prev, next, zwj_joins_emoji, ri_pair_open) {
            return index;
        }

        zwj_joins_emoji = next == Zwj && ext_pic_run;
        ext_pic_run = next == ExtendedPictographic || (ext_pic_run && next == Extend);
        ri_pair_open = next == RegionalIndicator && !ri_pair_open;
        prev = next;
    }

    s.len()
}

/// Decide whether a grapheme cluster boundary falls between two characters,
/// given the categories on both sides and the run state of the left context.
///
/// The arms follow the numbered rules of UAX #29: earlier arms take
/// precedence, and the final arm is the "break everywhere else" default.
fn is_break(
    prev: GraphemeCategory,
    next: GraphemeCategory,
    zwj_joins_emoji: bool,
    ri_pair_open: bool,
) -> bool {
    use GraphemeCategory::*;

    match (prev, next) {
        // GB3: CR LF stays together.
        (Cr, Lf) => false,
        // GB4, GB5: controls break from everything else.
        (Cr | Lf | Control, _) => true,
        (_, Cr | Lf | Control) => true,
        // GB6, GB7, GB8: Hangul syllables compose L* V* T*.
        (HangulL, HangulL | HangulV | HangulLv | HangulLvt) => false,
        (HangulLv | HangulV, HangulV | HangulT) => false,
        (HangulLvt | HangulT, HangulT) => false,
        // GB9, GB9a: extenders, joiners, and spacing marks glue on.
        (_, Extend | Zwj | SpacingMark) => false,
        // GB9b: prepended characters glue forward.
        (Prepend, _) => false,
        // GB11: an emoji ZWJ sequence continues across the joiner.
        (Zwj, ExtendedPictographic) if zwj_joins_emoji => false,
        // GB12, GB13: regional indicators pair up two by two.
        (RegionalIndicator, RegionalIndicator) if ri_pair_open => false,
        // GB999.
        _ => true,
    }
}

/// Find the byte offset of the cluster with the given index, segmenting at
/// most `index` clusters. An index equal to the cluster count resolves to
/// the end of the string.
fn byte_offset_of_cluster(s: &str, index: usize) -> usize {
    let mut offset = 0;
    for (i, cluster) in clusters(s).enumerate() {
        if i == index {
            return offset;
        }
        offset += cluster.len();
    }
    offset
}

//
// Substring
//

/// Take a substring measured in grapheme clusters.
///
/// A negative `start` counts back from the end of the string and is clamped
/// to the beginning; a `start` beyond the last cluster is an error. A
/// negative `length` leaves that many clusters off the end. An empty window
/// is not an error: it yields the empty string.
pub fn substr(s: &str, start: isize, length: Option<isize>) -> Result<&str, GraphemeError> {
    let total = count(s);

    let begin = if start < 0 {
        (total as isize + start).max(0)
    } else {
        start
    };
    if begin > total as isize {
        return Err(GraphemeError::StartOutOfRange { start, count: total });
    }

    let end = match length {
        None => total as isize,
        Some(len) if len >= 0 => (begin + len).min(total as isize),
        Some(len) => total as isize + len,
    };
    if end <= begin {
        return Ok("");
    }

    let from = byte_offset_of_cluster(s, begin as usize);
    let to = byte_offset_of_cluster(s, end as usize);
    Ok(&s[from..to])
}

//
// Extraction
//

/// The unit in which [`extract`] measures its size budget.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ExtractUnit {
    /// Count whole grapheme clusters.
    Clusters,
    /// Count UTF-8 bytes.
    Bytes,
    /// Count codepoints.
    CodePoints,
}

/// The result of [`extract`]: the extracted clusters and the byte offset
/// where a subsequent extraction should resume.
#[derive(Debug, PartialEq, Eq)]
pub struct Extracted<'a> {
    /// The extracted substring, always a whole number of clusters.
    pub slice: &'a str,
    /// The byte offset just past the extracted substring.
    pub next: usize,
}

/// Copy whole grapheme clusters from `start` until the size budget is spent.
///
/// The budget is a stopping condition, not a truncation rule: a cluster is
/// appended only if the whole cluster fits, so a mid-cluster budget never
/// splits one (with a 2-byte budget, extracting from `"déjà"` yields `"d"`,
/// not one byte of `"é"`). A negative `start` counts back from the end in
/// bytes and is clamped to the beginning; a `start` past the last byte is an
/// error. A `start` in the middle of a cluster snaps forward to the next
/// cluster boundary.
pub fn extract(
    s: &str,
    max: usize,
    unit: ExtractUnit,
    start: isize,
) -> Result<Extracted<'_>, GraphemeError> {
    let resolved = if start < 0 {
        (s.len() as isize + start).max(0) as usize
    } else {
        start as usize
    };
    if resolved >= s.len() && !(s.is_empty() && resolved == 0) {
        return Err(GraphemeError::OffsetOutOfRange { offset: start });
    }

    // Snap forward to a cluster boundary.
    let mut begin = 0;
    for cluster in clusters(s) {
        if begin >= resolved {
            break;
        }
        begin += cluster.len();
    }

    let mut used = 0;
    let mut taken = 0;
    for cluster in clusters(&s[begin..]) {
        let cost = match unit {
            ExtractUnit::Clusters => 1,
            ExtractUnit::Bytes => cluster.len(),
            ExtractUnit::CodePoints => cluster.chars().count(),
        };
        if used + cost > max {
            break;
        }
        used += cost;
        taken += cluster.len();
    }

    Ok(Extracted {
        slice: &s[begin..begin + taken],
        next: begin + taken,
    })
}

//
// Search
//

/// The location of a search match, in both cluster and byte units.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Position {
    /// The cluster index of the match within the haystack.
    pub clusters: usize,
    /// The byte offset of the match within the haystack.
    pub bytes: usize,
}

/// Find the first occurrence of `needle`, searching forward from `offset`
/// (in cluster units, negative counting back from the end).
///
/// The match is located by byte-level search and then converted to a cluster
/// index by segmenting the preceding text. No match is `Ok(None)`.
pub fn find(haystack: &str, needle: &str, offset: isize) -> Result<Option<Position>, GraphemeError> {
    let from = resolve_search_offset(haystack, needle, offset)?;

    Ok(haystack[from..]
        .find(needle)
        .map(|at| position_at(haystack, from + at)))
}

/// Find the last occurrence of `needle` at or after `offset` (in cluster
/// units, negative counting back from the end).
pub fn rfind(haystack: &str, needle: &str, offset: isize) -> Result<Option<Position>, GraphemeError> {
    let from = resolve_search_offset(haystack, needle, offset)?;

    Ok(haystack[from..]
        .rfind(needle)
        .map(|at| position_at(haystack, from + at)))
}

/// Case-insensitive [`find`]: both sides are case folded, and the match is
/// reported against the original haystack at the enclosing cluster.
pub fn find_case_insensitive(
    haystack: &str,
    needle: &str,
    offset: isize,
) -> Result<Option<Position>, GraphemeError> {
    folded_search(haystack, needle, offset, |h, n| h.find(n))
}

/// Case-insensitive [`rfind`].
pub fn rfind_case_insensitive(
    haystack: &str,
    needle: &str,
    offset: isize,
) -> Result<Option<Position>, GraphemeError> {
    folded_search(haystack, needle, offset, |h, n| h.rfind(n))
}

/// Return the part of the haystack from the first match of `needle` onward,
/// or the part before the match if `before` is set.
pub fn find_str<'a>(haystack: &'a str, needle: &str, before: bool) -> Option<&'a str> {
    if needle.is_empty() {
        return None;
    }
    haystack.find(needle).map(|at| split_found(haystack, at, before))
}

/// Case-insensitive [`find_str`]. The returned slice keeps the original
/// casing of the haystack.
pub fn find_str_case_insensitive<'a>(
    haystack: &'a str,
    needle: &str,
    before: bool,
) -> Option<&'a str> {
    if needle.is_empty() {
        return None;
    }
    match find_case_insensitive(haystack, needle, 0) {
        Ok(found) => found.map(|position| split_found(haystack, position.bytes, before)),
        Err(_) => None,
    }
}

fn split_found(haystack: &str, at: usize, before: bool) -> &str {
    if before {
        &haystack[..at]
    } else {
        &haystack[at..]
    }
}

/// Validate a search request and resolve its cluster offset to a byte
/// offset within the haystack.
fn resolve_search_offset(
    haystack: &str,
    needle: &str,
    offset: isize,
) -> Result<usize, GraphemeError> {
    if needle.is_empty() {
        return Err(GraphemeError::EmptyNeedle);
    }

    let total = count(haystack);
    let resolved = if offset < 0 { total as isize + offset } else { offset };
    if resolved < 0 || resolved > total as isize {
        return Err(GraphemeError::OffsetOutOfRange { offset });
    }

    Ok(byte_offset_of_cluster(haystack, resolved as usize))
}

/// Convert a byte offset into a [`Position`] by segmenting the preceding
/// text. A byte offset inside a cluster reports that cluster.
fn position_at(haystack: &str, at: usize) -> Position {
    let mut bytes = 0;
    let mut index = 0;
    for cluster in clusters(haystack) {
        if bytes + cluster.len() > at {
            break;
        }
        bytes += cluster.len();
        index += 1;
    }
    Position {
        clusters: index,
        bytes,
    }
}

/// Search with both sides case folded.
///
/// The haystack is folded cluster by cluster while recording where each
/// folded cluster started in the original string, so a match in folded
/// space can be mapped back even when folding changes lengths (e.g.
/// "\u{00DF}" folding to "ss").
fn folded_search(
    haystack: &str,
    needle: &str,
    offset: isize,
    search: fn(&str, &str) -> Option<usize>,
) -> Result<Option<Position>, GraphemeError> {
    if needle.is_empty() {
        return Err(GraphemeError::EmptyNeedle);
    }

    let mut folded = String::with_capacity(haystack.len());
    // (folded byte offset, original byte offset) of each cluster start.
    let mut starts = Vec::new();
    let mut original = 0;
    for cluster in clusters(haystack) {
        starts.push((folded.len(), original));
        folded.push_str(&case_fold(cluster));
        original += cluster.len();
    }

    let total = starts.len();
    let resolved = if offset < 0 { total as isize + offset } else { offset };
    if resolved < 0 || resolved > total as isize {
        return Err(GraphemeError::OffsetOutOfRange { offset });
    }
    let folded_from = starts
        .get(resolved as usize)
        .map(|&(f, _)| f)
        .unwrap_or(folded.len());

    let found = match search(&folded[folded_from..], &case_fold(needle)) {
        Some(at) => folded_from + at,
        None => return Ok(None),
    };

    // The cluster whose folded image contains the match.
    let index = match starts.binary_search_by_key(&found, |&(f, _)| f) {
        Ok(exact) => exact,
        Err(after) => after - 1,
    };
    Ok(Some(Position {
        clusters: index,
        bytes: starts[index].1,
    }))
}
