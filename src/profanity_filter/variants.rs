// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Variant expansion for dictionary words
//
// A word with n substitutable positions whose classes have sizes k1..kn
// expands to k1 * ... * kn spellings. The growth is exponential and is not
// capped: a long word built entirely from substitutable letters can produce
// millions of variants. `Variants` yields them one at a time so peak memory
// stays bounded by the consumer.

use std::collections::HashSet;

use super::config::{fold_case, CharacterClassMap};
use super::error::{FilterError, Result};

/// A case-folded, non-empty source word from the dictionary
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DictionaryWord {
    word: String,
}

impl DictionaryWord {
    pub fn new(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(FilterError::InvalidArgument(
                "dictionary words must not be empty".to_string(),
            ));
        }
        Ok(Self {
            word: fold_case(raw),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.word
    }

    /// Lazily enumerate every disguised spelling of this word.
    ///
    /// The first item is always the word itself.
    pub fn variants<'a>(&'a self, map: &'a CharacterClassMap) -> Variants<'a> {
        let slots: Vec<Slot<'a>> = self
            .word
            .chars()
            .map(|c| match map.alternatives(c) {
                Some(class) => Slot::Class(class),
                None => Slot::Fixed(c),
            })
            .collect();
        let cursor = vec![0; slots.len()];

        Variants {
            slots,
            cursor,
            exhausted: false,
        }
    }

    /// Number of spellings `variants()` will yield (saturating)
    pub fn variant_count(&self, map: &CharacterClassMap) -> u64 {
        self.word
            .chars()
            .filter_map(|c| map.alternatives(c))
            .fold(1u64, |total, class| total.saturating_mul(class.len() as u64))
    }
}

/// Collect every variant of `word` into a set
pub fn expand(word: &DictionaryWord, map: &CharacterClassMap) -> HashSet<String> {
    word.variants(map).collect()
}

#[derive(Debug, Clone, Copy)]
enum Slot<'a> {
    Fixed(char),
    Class(&'a [char]),
}

impl Slot<'_> {
    fn len(&self) -> usize {
        match self {
            Slot::Fixed(_) => 1,
            Slot::Class(class) => class.len(),
        }
    }

    fn glyph(&self, index: usize) -> char {
        match self {
            Slot::Fixed(c) => *c,
            Slot::Class(class) => class[index],
        }
    }
}

/// Iterator over the Cartesian product of per-position glyph classes.
///
/// Advances like an odometer: the rightmost position turns fastest.
#[derive(Debug, Clone)]
pub struct Variants<'a> {
    slots: Vec<Slot<'a>>,
    cursor: Vec<usize>,
    exhausted: bool,
}

impl Iterator for Variants<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }

        let variant: String = self
            .slots
            .iter()
            .zip(&self.cursor)
            .map(|(slot, &index)| slot.glyph(index))
            .collect();

        self.exhausted = true;
        for pos in (0..self.slots.len()).rev() {
            self.cursor[pos] += 1;
            if self.cursor[pos] < self.slots[pos].len() {
                self.exhausted = false;
                break;
            }
            self.cursor[pos] = 0;
        }

        Some(variant)
    }
}
