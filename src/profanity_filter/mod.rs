// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Profanity Filter Plugin - Rust Implementation
//
// Detects and censors profanity, including look-alike spellings:
// - Each dictionary word expands into every character-substitution variant
// - All variants compile into one Aho-Corasick automaton (single-pass scan)
// - Censoring is length-preserving, so untouched text keeps its offsets

pub mod config;
pub mod error;
pub mod filter;
pub mod masking;
pub mod matcher;
pub mod pattern_set;
pub mod variants;
pub mod wordlist;

#[cfg(feature = "python")]
pub mod bindings;

pub use config::{AllowedCharacters, CharacterClassMap, FilterConfig};
pub use error::{FilterError, Result};
pub use filter::ProfanityFilter;
pub use pattern_set::Whitelist;

#[cfg(feature = "python")]
pub use bindings::ProfanityFilterRust;
