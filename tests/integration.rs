// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Integration tests for the Rust profanity filter public API

use proptest::prelude::*;
use std::io::Write;

use profanity_rust::profanity_filter::{
    variants::{expand, DictionaryWord},
    CharacterClassMap, FilterConfig, FilterError, ProfanityFilter, Whitelist,
};

const CENSOR: char = '#';

fn build_filter() -> ProfanityFilter {
    ProfanityFilter::with_words(["bad", "ass", "hell", "damn"]).expect("Failed to build filter")
}

#[test]
fn test_disguised_spelling_example() {
    let mut mapping = CharacterClassMap::empty();
    mapping.insert('a', ['a', '4']).unwrap();
    let mut filter = ProfanityFilter::new(FilterConfig {
        char_mapping: mapping,
        ..Default::default()
    });
    filter.load(["bad"], Whitelist::default()).unwrap();

    let text = "this is b4d news";
    assert!(filter.contains_profanity(text).unwrap());
    assert_eq!(filter.censor_with(text, '*').unwrap(), "this is *** news");
}

#[test]
fn test_whitelist_example() {
    let mut filter = ProfanityFilter::default();
    filter
        .load(["ok"], ["ok"].into_iter().collect())
        .unwrap();

    assert!(!filter.contains_profanity("ok").unwrap());
    assert_eq!(filter.censor("ok").unwrap(), "ok");
}

#[test]
fn test_substring_match_example() {
    let filter = ProfanityFilter::with_words(["ss"]).unwrap();
    assert!(filter.contains_profanity("pass").unwrap());
    assert_eq!(filter.censor("pass").unwrap(), "pa**");
}

#[test]
fn test_non_ascii_case_pairs() {
    let filter = ProfanityFilter::with_words(["ΜΑΛΑΚΑΣ", "straße", "hİt"]).unwrap();

    // Greek final sigma: Σ, σ and ς are the same letter
    for text in ["ΜΑΛΑΚΑΣ", "μαλακας", "μαλακασ", "Μαλακας"] {
        assert!(filter.contains_profanity(text).unwrap(), "{} not matched", text);
        assert_eq!(filter.censor_with(text, CENSOR).unwrap(), "#######");
    }

    // Capital sharp s lowercases to ß
    assert_eq!(
        filter.censor_with("STRAẞE und straße", CENSOR).unwrap(),
        "###### und ######"
    );

    // Dotted capital I folds to two characters on both sides
    assert_eq!(filter.censor_with("a HİT!", CENSOR).unwrap(), "a ###!");
    assert!(!filter.contains_profanity("hit").unwrap());
}

#[test]
fn test_whitelist_suppresses_every_variant() {
    let config = FilterConfig::default();
    let mut filter = ProfanityFilter::new(config.clone());
    filter
        .load(["bad", "hell"], ["BAD"].into_iter().collect())
        .unwrap();

    let word = DictionaryWord::new("bad").unwrap();
    for variant in expand(&word, &config.char_mapping) {
        assert!(
            !filter.contains_profanity(&variant).unwrap(),
            "whitelisted variant {} matched",
            variant
        );
    }
    assert!(filter.contains_profanity("h3ll").unwrap());
}

#[test]
fn test_custom_censor_char_from_config() {
    let config = FilterConfig::from_json(r#"{"censor_char": "-"}"#).unwrap();
    let mut filter = ProfanityFilter::new(config);
    filter.load(["damn"], Whitelist::default()).unwrap();
    assert_eq!(filter.censor("D4MN it").unwrap(), "---- it");
}

#[test]
fn test_every_disguise_censored() {
    let filter = build_filter();
    let text = "You $$ and H3LL, d@mn, b4d 4$$!";
    let censored = filter.censor_with(text, CENSOR).unwrap();
    assert_eq!(censored, "You $$ and ####, ####, ### ###!");
}

#[test]
fn test_empty_and_clean_text() {
    let filter = build_filter();
    assert!(!filter.contains_profanity("").unwrap());
    assert_eq!(filter.censor("").unwrap(), "");
    assert_eq!(filter.censor("Have a good day").unwrap(), "Have a good day");
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "  heck  ").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "Darn").unwrap();

    let filter = ProfanityFilter::from_wordlist_file(file.path()).unwrap();
    assert_eq!(filter.word_count(), 2);
    assert!(filter.contains_profanity("oh h3ck").unwrap());
    assert_eq!(filter.censor("DARN!").unwrap(), "****!");
}

#[test]
fn test_load_from_missing_file() {
    let mut filter = ProfanityFilter::default();
    let err = filter
        .load_from_file("/no/such/wordlist.txt", Whitelist::default())
        .unwrap_err();
    assert!(matches!(err, FilterError::FileNotFound { .. }));
    assert!(!filter.is_loaded());
}

#[test]
fn test_shared_reads_across_threads() {
    let filter = std::sync::Arc::new(build_filter());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let filter = std::sync::Arc::clone(&filter);
            std::thread::spawn(move || filter.censor("so b4d").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "so ***");
    }
}

/// Dictionary words plus a text embedding one of them, over lowercase
/// Latin, Greek and Cyrillic letters
fn case_pair_strategy() -> impl Strategy<Value = (Vec<String>, String)> {
    (
        prop::collection::vec("[a-zα-ωа-я]{2,5}", 1..4),
        "[a-zα-ωа-я ]{0,12}",
        "[a-zα-ωа-я ]{0,12}",
        any::<prop::sample::Index>(),
    )
        .prop_map(|(words, prefix, suffix, pick)| {
            let text = format!("{}{}{}", prefix, pick.get(&words), suffix);
            (words, text)
        })
}

proptest! {
    #[test]
    fn prop_censor_preserves_length(text in "\\PC{0,64}", censor_char in any::<char>()) {
        let filter = build_filter();
        let censored = filter.censor_with(&text, censor_char).unwrap();
        prop_assert_eq!(censored.chars().count(), text.chars().count());
    }

    #[test]
    fn prop_censor_is_idempotent(text in "\\PC{0,64}") {
        let filter = build_filter();
        let once = filter.censor_with(&text, CENSOR).unwrap();
        let twice = filter.censor_with(&once, CENSOR).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_contains_iff_censor_changes(text in "[a-zA-Z0-9@$*1347 .!#]{0,48}") {
        let filter = build_filter();
        let contains = filter.contains_profanity(&text).unwrap();
        let censored = filter.censor_with(&text, CENSOR).unwrap();
        prop_assert_eq!(contains, censored != text);
    }

    #[test]
    fn prop_unicode_case_does_not_change_matched_spans((words, text) in case_pair_strategy()) {
        let upper_words: Vec<String> = words.iter().map(|w| w.to_uppercase()).collect();
        let filter = ProfanityFilter::with_words(&upper_words).unwrap();
        let upper_text = text.to_uppercase();

        prop_assert!(filter.contains_profanity(&text).unwrap());
        prop_assert!(filter.contains_profanity(&upper_text).unwrap());

        let lower = filter.censor_with(&text, CENSOR).unwrap();
        let upper = filter.censor_with(&upper_text, CENSOR).unwrap();
        let lower_mask: Vec<bool> = lower.chars().map(|c| c == CENSOR).collect();
        let upper_mask: Vec<bool> = upper.chars().map(|c| c == CENSOR).collect();
        prop_assert_eq!(lower_mask, upper_mask);

        for (original, out) in upper_text.chars().zip(upper.chars()) {
            prop_assert!(out == CENSOR || out == original);
        }
    }

    #[test]
    fn prop_case_does_not_change_matched_spans(text in "[a-zA-Z0-9@$ .!]{0,48}") {
        let filter = build_filter();
        let lower = filter.censor_with(&text, CENSOR).unwrap();
        let upper = filter.censor_with(&text.to_ascii_uppercase(), CENSOR).unwrap();

        let lower_mask: Vec<bool> = lower.chars().map(|c| c == CENSOR).collect();
        let upper_mask: Vec<bool> = upper.chars().map(|c| c == CENSOR).collect();
        prop_assert_eq!(lower_mask, upper_mask);

        for (original, out) in text.chars().zip(lower.chars()) {
            prop_assert!(out == CENSOR || out == original);
        }
    }
}
