// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Length-preserving censoring of matched spans

use std::borrow::Cow;

use super::config::fold_chars;
use super::matcher::MatchIndex;

/// Lowercased copy of a text plus a map from each of its bytes back to the
/// index of the original character that produced it
pub(crate) struct FoldedText {
    pub lowered: String,
    origins: Vec<usize>,
}

impl FoldedText {
    /// Fold case character by character, exactly as `fold_case` does for
    /// dictionary words.
    ///
    /// A character whose folded form is longer than itself (`İ` → `i̇`)
    /// maps every produced byte back to the same original index.
    pub fn new(text: &str) -> Self {
        let mut lowered = String::with_capacity(text.len());
        let mut origins = Vec::with_capacity(text.len());

        for (index, c) in text.chars().enumerate() {
            for lower in fold_chars(c) {
                lowered.push(lower);
                origins.extend(std::iter::repeat(index).take(lower.len_utf8()));
            }
        }

        Self { lowered, origins }
    }

    /// Original character range covered by lowered bytes `[start, end)`
    fn original_span(&self, start: usize, end: usize) -> Option<(usize, usize)> {
        if start >= end {
            return None;
        }
        Some((*self.origins.get(start)?, *self.origins.get(end - 1)?))
    }
}

/// Replace every match in `text` with `censor_char`, one filler per
/// original character.
///
/// Matching runs on a lowercased copy; the original casing of untouched
/// characters is kept. Returns the input borrowed when nothing matched.
pub fn censor_text<'a>(text: &'a str, index: &MatchIndex, censor_char: char) -> Cow<'a, str> {
    let folded = FoldedText::new(text);

    let mut masked: Option<Vec<bool>> = None;
    for occurrence in index.scan(&folded.lowered) {
        let Some((first, last)) = folded.original_span(occurrence.start, occurrence.end) else {
            continue;
        };
        let mask = masked.get_or_insert_with(|| vec![false; text.chars().count()]);
        mask[first..=last].fill(true);
    }

    match masked {
        None => Cow::Borrowed(text),
        Some(mask) => Cow::Owned(
            text.chars()
                .zip(mask)
                .map(|(c, hidden)| if hidden { censor_char } else { c })
                .collect(),
        ),
    }
}

/// Whether any indexed pattern occurs in `text`, case-insensitively
pub fn contains_match(text: &str, index: &MatchIndex) -> bool {
    index.is_match(&FoldedText::new(text).lowered)
}
