// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Newline-delimited wordlist reading

use std::path::Path;

use super::error::{FilterError, Result};

/// Words from wordlist contents: one per line, trimmed, blank lines skipped
pub fn parse_wordlist(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Read a wordlist file from disk
pub fn read_wordlist(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|source| FilterError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = parse_wordlist(&contents).map(String::from).collect();
    tracing::debug!(path = %path.display(), words = words.len(), "read wordlist");
    Ok(words)
}
