// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Profanity filter engine: owns the dictionary and the live match index

use std::path::Path;

use super::config::FilterConfig;
use super::error::{FilterError, Result};
use super::masking;
use super::matcher::MatchIndex;
use super::pattern_set::{PatternSet, Whitelist};
use super::wordlist;

/// Detects and censors profane substrings, including look-alike spellings.
///
/// Queries take `&self` and rebuilds take `&mut self`: any number of
/// readers may share a loaded filter, while reloading needs exclusive
/// access. Wrap the filter in a `RwLock` to reload while other threads
/// keep reading.
///
/// # Example
/// ```
/// use profanity_rust::profanity_filter::ProfanityFilter;
///
/// let filter = ProfanityFilter::with_words(["bad"]).unwrap();
/// assert!(filter.contains_profanity("this is b4d news").unwrap());
/// assert_eq!(filter.censor("this is b4d news").unwrap(), "this is *** news");
/// ```
#[derive(Debug)]
pub struct ProfanityFilter {
    config: FilterConfig,
    pattern_set: Option<PatternSet>,
    index: Option<MatchIndex>,
}

impl ProfanityFilter {
    /// Create an empty filter; queries fail until a word source is loaded
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            pattern_set: None,
            index: None,
        }
    }

    /// Filter with the default configuration, loaded from `words`
    pub fn with_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::new(FilterConfig::default());
        filter.load(words, Whitelist::default())?;
        Ok(filter)
    }

    /// Filter with the default configuration, loaded from a wordlist file
    pub fn from_wordlist_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut filter = Self::new(FilterConfig::default());
        filter.load_from_file(path, Whitelist::default())?;
        Ok(filter)
    }

    /// Replace the dictionary and rebuild the match index from scratch.
    ///
    /// The new index is fully built before it replaces the old one; on
    /// error the previous dictionary and index stay in place.
    pub fn load<I, S>(&mut self, words: I, whitelist: Whitelist) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pattern_set = PatternSet::build(words, whitelist, &self.config)?;
        self.install(pattern_set)
    }

    /// Replace the dictionary with the words of a newline-delimited file
    pub fn load_from_file(&mut self, path: impl AsRef<Path>, whitelist: Whitelist) -> Result<()> {
        let words = wordlist::read_wordlist(path.as_ref())?;
        self.load(words, whitelist)
    }

    /// Append words to the dictionary and rebuild the index.
    ///
    /// The whitelist from the last `load` still applies. Calling this on a
    /// filter that was never loaded starts a dictionary with an empty
    /// whitelist.
    pub fn add_words<I, S>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pattern_set = match &self.pattern_set {
            Some(existing) => existing.clone(),
            None => PatternSet::build(Vec::<String>::new(), Whitelist::default(), &self.config)?,
        };
        let added = pattern_set.extend(words, &self.config)?;
        tracing::debug!(added, "appending words to profanity dictionary");
        self.install(pattern_set)
    }

    /// Whether `text` contains any dictionary word or disguised variant
    pub fn contains_profanity(&self, text: &str) -> Result<bool> {
        let index = self.index()?;
        Ok(masking::contains_match(text, index))
    }

    /// Censor matches with the configured censor character
    pub fn censor(&self, text: &str) -> Result<String> {
        self.censor_with(text, self.config.censor_char)
    }

    /// Censor matches with `censor_char`, one filler per matched character
    pub fn censor_with(&self, text: &str, censor_char: char) -> Result<String> {
        let index = self.index()?;
        Ok(masking::censor_text(text, index, censor_char).into_owned())
    }

    pub fn is_loaded(&self) -> bool {
        self.index.is_some()
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Number of dictionary words retained after filtering
    pub fn word_count(&self) -> usize {
        self.pattern_set.as_ref().map_or(0, PatternSet::len)
    }

    /// Number of variants compiled into the index
    pub fn pattern_count(&self) -> usize {
        self.index.as_ref().map_or(0, MatchIndex::len)
    }

    /// Largest substitutable-character count across the dictionary
    pub fn max_substitutable(&self) -> usize {
        self.pattern_set
            .as_ref()
            .map_or(1, PatternSet::max_substitutable)
    }

    fn index(&self) -> Result<&MatchIndex> {
        self.index.as_ref().ok_or(FilterError::InvalidState)
    }

    fn install(&mut self, pattern_set: PatternSet) -> Result<()> {
        let index = MatchIndex::compile(pattern_set.variants(&self.config.char_mapping))?;

        tracing::debug!(
            words = pattern_set.len(),
            whitelisted = pattern_set.whitelist().len(),
            patterns = index.len(),
            max_substitutable = pattern_set.max_substitutable(),
            "compiled profanity index"
        );

        self.pattern_set = Some(pattern_set);
        self.index = Some(index);
        Ok(())
    }
}

impl Default for ProfanityFilter {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}
