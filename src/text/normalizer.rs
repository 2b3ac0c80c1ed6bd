// Normalizer: turns raw document text into a TokenSet.
//
// Steps run in a fixed order, each over the previous step's output:
//   1. lowercase
//   2. strip punctuation (anything not alphabetic, whitespace, or an ASCII digit)
//   3. strip ASCII digit runs
//   4. split on whitespace
//   5. drop stop words
//   6. collapse to a set
//
// Characters are deleted rather than replaced with a space, so "well-known"
// becomes "wellknown" and "abc123" becomes "abc".

use std::collections::HashSet;

use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

use super::tokens::TokenSet;

/// Converts raw text into a TokenSet against a fixed stop word list.
pub struct Normalizer {
    stop_words: HashSet<String>,
    digits: Regex,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Normalizer {
    /// Normalizer using the NLTK English stop word list (179 words).
    pub fn english() -> Self {
        let stop_words: Vec<String> = get(LANGUAGE::English);
        Self::with_stop_words(stop_words)
    }

    /// Normalizer with an explicit stop word list.
    ///
    /// Words are matched as given (lowercased) against tokens that have
    /// already lost their punctuation, so a listed "don't" never matches and
    /// the token "dont" survives.
    pub fn with_stop_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let digits = Regex::new(r"[0-9]+").expect("valid digit pattern");
        let stop_words = words
            .into_iter()
            .map(|word| word.as_ref().to_lowercase())
            .collect();
        Self { stop_words, digits }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    /// Normalize raw text into a TokenSet.
    ///
    /// Empty or all-stop-word input gives an empty set; that is a valid result.
    pub fn normalize(&self, text: &str) -> TokenSet {
        let lowered = text.to_lowercase();
        let no_punct = strip_punctuation(&lowered);
        let no_digits = self.digits.replace_all(&no_punct, "");

        no_digits
            .split_whitespace()
            .filter(|word| !self.is_stop_word(word))
            .collect()
    }
}

/// Whether a character belongs to the punctuation set removed in step 2.
pub fn is_punctuation(c: char) -> bool {
    !(c.is_alphabetic() || c.is_whitespace() || c.is_ascii_digit())
}

fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|&c| !is_punctuation(c)).collect()
}
