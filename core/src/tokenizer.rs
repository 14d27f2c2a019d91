use crate::alphabet::{ALPHABET, DIGITS};
use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::io::BufRead;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // Everything outside this class (including tabs and newlines) acts as a delimiter.
    static ref RE: Regex = Regex::new(r"[а-яё0-9]+").expect("valid regex");
}

/// Lowercase, fold `ё` to `е` and split on anything that is not a letter of the alphabet or a digit.
///
/// Leading, trailing and repeated delimiters never produce empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    RE.find_iter(&normalized).map(|m| m.as_str().to_string()).collect()
}

fn normalize(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase().replace('ё', "е")
}

/// Effective stop-word set: a word list unioned with every single letter and digit.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Only the one-character stop tokens.
    pub fn single_chars() -> Self {
        let words = ALPHABET.chars().chain(DIGITS.chars()).map(String::from).collect();
        Self { words }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::single_chars();
        for w in words {
            let w = w.as_ref().trim_start_matches('\u{feff}').trim();
            if w.is_empty() { continue; }
            set.words.insert(normalize(w));
        }
        set
    }

    /// Read a line-oriented list, one stop-word per line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        Ok(Self::from_words(lines))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::single_chars()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stop_words: StopWords,
}

impl Tokenizer {
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    /// Tokens of `text` with stop-words removed, in text order, duplicates kept.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        tokenize(text).into_iter().filter(|t| !self.stop_words.contains(t)).collect()
    }

    /// True iff at least one non-stop token remains.
    pub fn is_valid_query(&self, text: &str) -> bool {
        tokenize(text).iter().any(|t| !self.stop_words.contains(t))
    }
}
