// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Aho-Corasick match index over the expanded pattern set
// Scans text in one pass regardless of how many variants are indexed

use aho_corasick::{AhoCorasick, MatchKind};

use super::error::Result;

/// One pattern occurrence in a scanned haystack (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence<'h> {
    pub start: usize,
    pub end: usize,
    /// Matched slice of the haystack; identical to the indexed variant
    pub pattern: &'h str,
}

/// Compiled multi-pattern search structure.
///
/// Immutable once compiled; rebuilt wholesale when the dictionary changes.
pub struct MatchIndex {
    automaton: AhoCorasick,
}

impl MatchIndex {
    /// Compile an index straight from a stream of case-folded variants.
    ///
    /// Variants are fed to the automaton builder one at a time and never
    /// collected. A variant produced by two dictionary words is indexed
    /// twice; both copies match the same span, which censoring tolerates.
    pub fn compile<I>(variants: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        // Standard semantics are required for overlapping iteration
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(variants)?;

        Ok(Self { automaton })
    }

    /// Whether any pattern occurs anywhere in `haystack`
    pub fn is_match(&self, haystack: &str) -> bool {
        self.automaton.is_match(haystack)
    }

    /// Every occurrence, overlapping ones included, ordered by end offset
    pub fn scan<'a, 'h>(&'a self, haystack: &'h str) -> impl Iterator<Item = Occurrence<'h>> + 'a
    where
        'h: 'a,
    {
        self.automaton
            .find_overlapping_iter(haystack)
            .map(move |m| Occurrence {
                start: m.start(),
                end: m.end(),
                pattern: &haystack[m.start()..m.end()],
            })
    }

    /// Number of patterns compiled into the automaton
    pub fn len(&self) -> usize {
        self.automaton.patterns_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for MatchIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchIndex")
            .field("patterns", &self.len())
            .field("memory_usage", &self.automaton.memory_usage())
            .finish()
    }
}
