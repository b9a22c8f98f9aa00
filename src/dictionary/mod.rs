//! Word list with definitions
//!
//! The dictionary holds the set of valid words and their definitions, and
//! supplies random-word selection, membership testing, and definition/hint
//! lookup. Words of any length are accepted at load time; the game engine
//! derives the length in play from whichever solution it draws.

pub mod loader;

use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Default word list compiled into the binary
const EMBEDDED_WORDS: &str = include_str!("../../data/words.txt");

/// Error type for dictionary operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// No words are loaded; no game can be started
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "dictionary contains no words"),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Set of valid words mapped to their definitions
///
/// Keys are stored lowercase; lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: FxHashMap<String, String>,
    // Sorted key list, so a seeded rng draws the same word every time.
    words: Vec<String>,
}

impl Dictionary {
    /// Parse a dictionary from `word:definition` text
    ///
    /// Malformed lines are skipped; duplicate words keep the last definition.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let entries: FxHashMap<String, String> = loader::parse_entries(text).collect();
        let mut words: Vec<String> = entries.keys().cloned().collect();
        words.sort_unstable();
        Self { entries, words }
    }

    /// Load a dictionary from a word list file
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read. Malformed lines
    /// inside a readable file are skipped, not reported.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// The word list compiled into the binary (a Swahili kamusi excerpt)
    #[must_use]
    pub fn embedded() -> Self {
        Self::parse(EMBEDDED_WORDS)
    }

    /// Draw a uniformly random word
    ///
    /// # Errors
    /// Returns [`DictionaryError::Empty`] if no words are loaded. Callers
    /// must treat this as fatal for starting a game.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, DictionaryError> {
        self.words
            .choose(rng)
            .map(String::as_str)
            .ok_or(DictionaryError::Empty)
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        self.entries.contains_key(&word.to_lowercase())
    }

    /// Definition of a word, or the empty string if absent
    #[must_use]
    pub fn definition(&self, word: &str) -> &str {
        self.entries
            .get(&word.to_lowercase())
            .map_or("", String::as_str)
    }

    /// First whitespace-delimited token of the definition, as a hint
    ///
    /// Empty string if the word has no definition.
    #[must_use]
    pub fn hint(&self, word: &str) -> &str {
        self.definition(word)
            .split_whitespace()
            .next()
            .unwrap_or("")
    }

    /// Number of loaded words
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> Dictionary {
        Dictionary::parse(
            "nyumba:house - a building where people live\n\
             mbwa:dog - domestic animal that barks\n\
             kitabu:book - bound pages for reading\n",
        )
    }

    #[test]
    fn parse_counts_entries() {
        let dict = sample();
        assert_eq!(dict.len(), 3);
        assert!(!dict.is_empty());
    }

    #[test]
    fn membership_is_case_insensitive() {
        let dict = sample();
        assert!(dict.is_valid("nyumba"));
        assert!(dict.is_valid("NYUMBA"));
        assert!(dict.is_valid("Mbwa"));
        assert!(!dict.is_valid("paka"));
    }

    #[test]
    fn definition_lookup() {
        let dict = sample();
        assert_eq!(dict.definition("kitabu"), "book - bound pages for reading");
        assert_eq!(dict.definition("KITABU"), "book - bound pages for reading");
        assert_eq!(dict.definition("paka"), "");
    }

    #[test]
    fn hint_is_first_definition_token() {
        let dict = sample();
        assert_eq!(dict.hint("nyumba"), "house");
        assert_eq!(dict.hint("mbwa"), "dog");
        assert_eq!(dict.hint("paka"), "");
    }

    #[test]
    fn random_word_is_a_member() {
        let dict = sample();
        let mut rng = rand::rng();
        let word = dict.random_word(&mut rng).unwrap();
        assert!(dict.is_valid(word));
    }

    #[test]
    fn random_word_deterministic_under_seed() {
        let dict = sample();
        let first = dict
            .random_word(&mut StdRng::seed_from_u64(7))
            .unwrap()
            .to_string();
        let second = dict
            .random_word(&mut StdRng::seed_from_u64(7))
            .unwrap()
            .to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_dictionary_cannot_supply_a_word() {
        let dict = Dictionary::parse("");
        let mut rng = rand::rng();
        assert_eq!(dict.random_word(&mut rng), Err(DictionaryError::Empty));
    }

    #[test]
    fn mixed_lengths_are_accepted() {
        let dict = sample();
        assert!(dict.is_valid("mbwa")); // 4 letters
        assert!(dict.is_valid("nyumba")); // 6 letters
    }

    #[test]
    fn embedded_list_is_usable() {
        let dict = Dictionary::embedded();
        assert!(!dict.is_empty());
        assert!(dict.is_valid("nyumba"));
        assert_eq!(dict.hint("nyumba"), "house");
    }
}
