// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Dictionary word collection feeding the match index

use std::collections::HashSet;

use super::config::{fold_case, CharacterClassMap, FilterConfig};
use super::error::Result;
use super::variants::DictionaryWord;

/// Words that must never be censored, compared case-insensitively.
///
/// A whitelisted word is dropped before expansion, so none of its
/// disguised spellings are indexed either.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    words: HashSet<String>,
}

impl Whitelist {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Whitelist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|word| fold_case(word.as_ref()))
                .collect(),
        }
    }
}

/// Case-folded, deduplicated, whitelist-filtered dictionary words
#[derive(Debug, Clone)]
pub struct PatternSet {
    words: Vec<DictionaryWord>,
    seen: HashSet<String>,
    whitelist: Whitelist,
    max_substitutable: usize,
}

impl PatternSet {
    /// Build a fresh pattern set from a word source
    pub fn build<I, S>(words: I, whitelist: Whitelist, config: &FilterConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self {
            words: Vec::new(),
            seen: HashSet::new(),
            whitelist,
            max_substitutable: 1,
        };
        set.extend(words, config)?;
        Ok(set)
    }

    /// Append words to the retained dictionary.
    ///
    /// Duplicates and whitelisted words are skipped. On error the set is
    /// left unchanged.
    pub fn extend<I, S>(&mut self, words: I, config: &FilterConfig) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = Vec::new();
        let mut added_seen = HashSet::new();
        let mut max_substitutable = self.max_substitutable;

        for raw in words {
            let word = DictionaryWord::new(raw.as_ref())?;
            if self.whitelist.contains(word.as_str())
                || self.seen.contains(word.as_str())
                || !added_seen.insert(word.as_str().to_string())
            {
                continue;
            }

            max_substitutable = max_substitutable.max(
                config
                    .allowed_characters
                    .count_substitutable(word.as_str()),
            );

            let variant_count = word.variant_count(&config.char_mapping);
            if variant_count > config.expansion_warning_threshold {
                tracing::warn!(
                    word = word.as_str(),
                    variant_count,
                    threshold = config.expansion_warning_threshold,
                    "dictionary word expands to a very large number of variants"
                );
            }

            added.push(word);
        }

        let count = added.len();
        self.seen.extend(added_seen);
        self.words.extend(added);
        self.max_substitutable = max_substitutable;
        Ok(count)
    }

    /// Every variant of every word, produced lazily
    pub fn variants<'a>(
        &'a self,
        map: &'a CharacterClassMap,
    ) -> impl Iterator<Item = String> + 'a {
        self.words.iter().flat_map(move |word| word.variants(map))
    }

    pub fn words(&self) -> &[DictionaryWord] {
        &self.words
    }

    pub fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }

    /// Largest count of characters outside the allowed set seen in any word
    pub fn max_substitutable(&self) -> usize {
        self.max_substitutable
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
