// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Configuration types for the profanity filter

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::types::PyDict;

use super::error::{FilterError, Result};

/// Look-alike glyphs used by disguised spellings, keyed by letter.
/// The letter itself always comes first.
static STANDARD_CHAR_MAPPING: Lazy<CharacterClassMap> = Lazy::new(|| {
    let mut map = CharacterClassMap::empty();
    map.push_class('a', &['a', '@', '*', '4']);
    map.push_class('i', &['i', '*', 'l', '1']);
    map.push_class('o', &['o', '*', '0', '@']);
    map.push_class('u', &['u', '*', 'v']);
    map.push_class('v', &['v', '*', 'u']);
    map.push_class('l', &['l', '1']);
    map.push_class('e', &['e', '*', '3']);
    map.push_class('s', &['s', '$', '5']);
    map.push_class('t', &['t', '7']);
    map
});

// ASCII letters, digits and the handful of symbols words are commonly written with
static DEFAULT_ALLOWED_CHARACTERS: Lazy<HashSet<char>> = Lazy::new(|| {
    ('a'..='z')
        .chain('A'..='Z')
        .chain('0'..='9')
        .chain(['@', '$', '*', '"', '\''])
        .collect()
});

/// Case fold applied to dictionary words, whitelist entries, glyph classes
/// and scanned text alike: per-character lowercase, with final sigma
/// folded onto `σ` so `Σ`, `σ` and `ς` all compare equal.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(fold_chars).collect()
}

/// Fold one character; the result may span several characters (`İ` → `i̇`)
pub(crate) fn fold_chars(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase().map(|l| if l == 'ς' { 'σ' } else { l })
}

/// Fold a glyph that must stay a single character after folding
fn fold_glyph(c: char) -> Result<char> {
    let mut folded = fold_chars(c);
    match (folded.next(), folded.next()) {
        (Some(f), None) => Ok(f),
        _ => Err(FilterError::InvalidArgument(format!(
            "{:?} does not fold to a single character",
            c
        ))),
    }
}

/// Parse a string that must hold exactly one character
pub fn single_char(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(FilterError::InvalidArgument(format!(
            "expected a single character, got {:?}",
            value
        ))),
    }
}

/// Mapping from a lowercase letter to the ordered glyphs it may be disguised as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<char, Vec<char>>",
    into = "BTreeMap<char, Vec<char>>"
)]
pub struct CharacterClassMap {
    classes: BTreeMap<char, Vec<char>>,
}

impl CharacterClassMap {
    /// A map with no classes; every character is fixed
    pub fn empty() -> Self {
        Self {
            classes: BTreeMap::new(),
        }
    }

    /// The built-in look-alike table
    pub fn standard() -> &'static CharacterClassMap {
        &STANDARD_CHAR_MAPPING
    }

    /// Register (or replace) the class for `letter`.
    ///
    /// Glyphs are case folded and deduplicated; the letter is moved to the
    /// front so the undisguised spelling is always produced. Fails when the
    /// letter or a glyph folds to several characters, since such a key could
    /// never be looked up in folded text.
    pub fn insert(&mut self, letter: char, glyphs: impl IntoIterator<Item = char>) -> Result<()> {
        let letter = fold_glyph(letter)?;
        let glyphs = glyphs
            .into_iter()
            .map(fold_glyph)
            .collect::<Result<Vec<_>>>()?;
        self.push_class(letter, &glyphs);
        Ok(())
    }

    // Glyphs are already folded
    fn push_class(&mut self, letter: char, glyphs: &[char]) {
        let mut class = vec![letter];
        for glyph in glyphs {
            if !class.contains(glyph) {
                class.push(*glyph);
            }
        }
        self.classes.insert(letter, class);
    }

    /// Alternatives for `c`, or None if `c` is fixed
    pub fn alternatives(&self, c: char) -> Option<&[char]> {
        self.classes.get(&c).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Default for CharacterClassMap {
    fn default() -> Self {
        STANDARD_CHAR_MAPPING.clone()
    }
}

impl TryFrom<BTreeMap<char, Vec<char>>> for CharacterClassMap {
    type Error = FilterError;

    fn try_from(raw: BTreeMap<char, Vec<char>>) -> Result<Self> {
        let mut map = Self::empty();
        for (letter, glyphs) in raw {
            map.insert(letter, glyphs)?;
        }
        Ok(map)
    }
}

impl From<CharacterClassMap> for BTreeMap<char, Vec<char>> {
    fn from(map: CharacterClassMap) -> Self {
        map.classes
    }
}

/// Characters that need no substitution, used to size the expansion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowedCharacters {
    chars: HashSet<char>,
}

impl AllowedCharacters {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Add every character from a JSON array such as `["é", "ß", ...]`
    pub fn extend_from_json(&mut self, json: &str) -> Result<()> {
        let extra: Vec<char> = serde_json::from_str(json)?;
        self.chars.extend(extra);
        Ok(())
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Number of characters in `word` outside the allowed set
    pub fn count_substitutable(&self, word: &str) -> usize {
        word.chars().filter(|c| !self.contains(*c)).count()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for AllowedCharacters {
    fn default() -> Self {
        Self {
            chars: DEFAULT_ALLOWED_CHARACTERS.clone(),
        }
    }
}

/// Configuration for the profanity filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Look-alike glyph classes used to expand dictionary words
    pub char_mapping: CharacterClassMap,

    /// Characters excluded from the substitutable-character count
    pub allowed_characters: AllowedCharacters,

    /// Filler used by `censor()`
    pub censor_char: char,

    /// Per-word variant count above which a warning is logged
    pub expansion_warning_threshold: u64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            char_mapping: CharacterClassMap::default(),
            allowed_characters: AllowedCharacters::default(),
            censor_char: '*',
            expansion_warning_threshold: 100_000,
        }
    }
}

impl FilterConfig {
    /// Parse configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Extract configuration from Python dict
    #[cfg(feature = "python")]
    pub fn from_py_dict(dict: &Bound<'_, PyDict>) -> PyResult<Self> {
        let mut config = Self::default();

        if let Some(value) = dict.get_item("censor_char")? {
            let censor: String = value.extract()?;
            config.censor_char = single_char(&censor)?;
        }

        if let Some(value) = dict.get_item("chars_mapping")? {
            let raw: BTreeMap<String, Vec<String>> = value.extract()?;
            let mut mapping = CharacterClassMap::empty();
            for (letter, glyphs) in raw {
                let glyphs = glyphs
                    .iter()
                    .map(|glyph| single_char(glyph))
                    .collect::<Result<Vec<_>>>()?;
                mapping.insert(single_char(&letter)?, glyphs)?;
            }
            config.char_mapping = mapping;
        }

        if let Some(value) = dict.get_item("allowed_characters")? {
            let mut chars = HashSet::new();
            for item in value.try_iter()? {
                let item: String = item?.extract()?;
                chars.insert(single_char(&item)?);
            }
            config.allowed_characters = AllowedCharacters { chars };
        }

        if let Some(value) = dict.get_item("expansion_warning_threshold")? {
            config.expansion_warning_threshold = value.extract()?;
        }

        Ok(config)
    }
}
