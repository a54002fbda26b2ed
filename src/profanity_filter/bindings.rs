// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// PyO3 bindings for the profanity filter

use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyFrozenSet, PyList, PySet, PyString, PyTuple};

use super::config::{single_char, FilterConfig};
use super::error::FilterError;
use super::filter::ProfanityFilter;
use super::pattern_set::Whitelist;

/// Profanity filter exposed to Python
///
/// # Example (Python)
/// ```python
/// from profanity_rust import ProfanityFilterRust
///
/// profanity = ProfanityFilterRust(["bad"])
/// profanity.contains_profanity("this is b4d news")  # True
/// profanity.censor("this is b4d news")              # "this is *** news"
///
/// profanity.load_censor_words(["ok", "bad"], whitelist_words=["ok"])
/// profanity.censor("ok", censor_char="#")           # "ok"
/// ```
#[pyclass]
pub struct ProfanityFilterRust {
    inner: ProfanityFilter,
}

#[pymethods]
impl ProfanityFilterRust {
    /// Create a new profanity filter
    ///
    /// # Arguments
    /// * `words` - Iterable of words, a wordlist file path, or None to
    ///   create an empty filter that must be loaded before use
    /// * `config` - Optional dict with `censor_char`, `chars_mapping`,
    ///   `allowed_characters` and `expansion_warning_threshold`
    #[new]
    #[pyo3(signature = (words=None, config=None))]
    pub fn new(
        words: Option<&Bound<'_, PyAny>>,
        config: Option<&Bound<'_, PyDict>>,
    ) -> PyResult<Self> {
        let config = match config {
            Some(dict) => FilterConfig::from_py_dict(dict)?,
            None => FilterConfig::default(),
        };
        let mut inner = ProfanityFilter::new(config);

        if let Some(words) = words {
            if words.is_instance_of::<PyString>() {
                let path: String = words.extract()?;
                inner.load_from_file(path, Whitelist::default())?;
            } else {
                inner.load(extract_words(words)?, Whitelist::default())?;
            }
        }

        Ok(Self { inner })
    }

    /// Replace the word list and rebuild the filter
    #[pyo3(signature = (custom_words, whitelist_words=None))]
    pub fn load_censor_words(
        &mut self,
        custom_words: &Bound<'_, PyAny>,
        whitelist_words: Option<&Bound<'_, PyAny>>,
    ) -> PyResult<()> {
        let whitelist = extract_whitelist(whitelist_words)?;
        self.inner.load(extract_words(custom_words)?, whitelist)?;
        Ok(())
    }

    /// Replace the word list with the contents of a newline-delimited file
    #[pyo3(signature = (filename, whitelist_words=None))]
    pub fn load_censor_words_from_file(
        &mut self,
        filename: &str,
        whitelist_words: Option<&Bound<'_, PyAny>>,
    ) -> PyResult<()> {
        let whitelist = extract_whitelist(whitelist_words)?;
        self.inner.load_from_file(filename, whitelist)?;
        Ok(())
    }

    /// Append words to the current list; the filter is rebuilt immediately
    pub fn add_censor_words(&mut self, custom_words: &Bound<'_, PyAny>) -> PyResult<()> {
        if !is_collection(custom_words) {
            return Err(PyTypeError::new_err(
                "Function 'add_censor_words' only accepts list, tuple or set.",
            ));
        }
        self.inner.add_words(extract_words(custom_words)?)?;
        Ok(())
    }

    /// Return True if the text contains any censored word
    pub fn contains_profanity(&self, text: &str) -> PyResult<bool> {
        Ok(self.inner.contains_profanity(text)?)
    }

    /// Replace each censored word in `text` with `censor_char`
    #[pyo3(signature = (text, censor_char="*"))]
    pub fn censor(&self, text: &str, censor_char: &str) -> PyResult<String> {
        let censor_char = single_char(censor_char)?;
        Ok(self.inner.censor_with(text, censor_char)?)
    }

    #[getter]
    pub fn pattern_count(&self) -> usize {
        self.inner.pattern_count()
    }

    #[getter]
    pub fn word_count(&self) -> usize {
        self.inner.word_count()
    }
}

fn is_collection(obj: &Bound<'_, PyAny>) -> bool {
    obj.is_instance_of::<PyList>()
        || obj.is_instance_of::<PyTuple>()
        || obj.is_instance_of::<PySet>()
        || obj.is_instance_of::<PyFrozenSet>()
}

/// Convert any iterable of str into owned words
fn extract_words(obj: &Bound<'_, PyAny>) -> PyResult<Vec<String>> {
    let iter = obj
        .try_iter()
        .map_err(|_| PyTypeError::new_err("words must be of type str, list, or None"))?;

    let mut words = Vec::new();
    for item in iter {
        let item = item?;
        let word: String = item
            .extract()
            .map_err(|_| PyTypeError::new_err("each word must be of type str"))?;
        words.push(word);
    }
    Ok(words)
}

/// Validate and lowercase the whitelist (list, tuple or set of str)
fn extract_whitelist(obj: Option<&Bound<'_, PyAny>>) -> PyResult<Whitelist> {
    let Some(obj) = obj else {
        return Ok(Whitelist::default());
    };
    if !is_collection(obj) {
        return Err(PyTypeError::new_err(
            "The 'whitelist_words' keyword argument only accepts list, tuple or set.",
        ));
    }

    let mut words = Vec::new();
    for item in obj.try_iter()? {
        let item = item?;
        match item.extract::<String>() {
            Ok(word) => words.push(word),
            Err(_) => {
                return Err(FilterError::InvalidArgument(format!(
                    "Each word in 'whitelist_words' must be 'str' type, but '{}' found.",
                    item.get_type().name()?
                ))
                .into())
            }
        }
    }
    Ok(words.into_iter().collect())
}
