// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Rust-accelerated profanity filter plugin for MCP Gateway
// Usable as a plain Rust library or, with the `python` feature, via PyO3

// Allow non-local definitions for PyO3 macros (known issue with PyO3 0.20.x)
#![allow(non_local_definitions)]

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod profanity_filter;

/// Python module: profanity_rust
///
/// High-performance profanity detection and censoring, including
/// look-alike spellings such as "b4d" or "$h1t".
///
/// # Examples
///
/// ```python
/// from profanity_rust import ProfanityFilterRust
///
/// # Create filter from a word list (or a path to a wordlist file)
/// profanity = ProfanityFilterRust(["bad", "worse"], {"censor_char": "#"})
///
/// # Check text
/// profanity.contains_profanity("so B4D")  # True
///
/// # Censor text; every matched character becomes one censor character
/// profanity.censor("so B4D", censor_char="*")  # "so ***"
/// ```
#[cfg(feature = "python")]
#[pymodule]
fn profanity_rust(m: &Bound<'_, pyo3::types::PyModule>) -> PyResult<()> {
    // Export profanity filter Rust implementation
    m.add_class::<profanity_filter::ProfanityFilterRust>()?;

    // Module metadata
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add(
        "__doc__",
        "High-performance Rust implementation of the profanity filter plugin",
    )?;

    Ok(())
}
