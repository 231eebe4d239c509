use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fst::automaton::Str;
use fst::{Automaton, IntoStreamer, Set, Streamer};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("word list contains no usable words")]
    Empty,
    #[error("failed to build word index: {0}")]
    Index(#[from] fst::Error),
}

/// Immutable word index answering exact-word and prefix queries. Built once
/// at startup and shared read-only by every search.
///
/// Words are normalized to uppercase before insertion. Entries shorter than
/// the minimum playable length are still indexed: they are legal prefixes of
/// longer words, and length filtering happens at search time.
pub struct Dictionary {
    set: Set<Vec<u8>>,
}

impl Dictionary {
    /// Loads a newline-delimited word list. Blank lines and lines containing
    /// anything other than ASCII letters are skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let mut words = Vec::new();
        for line in reader.lines() {
            words.push(line?);
        }
        let dict = Self::from_words(words)?;
        debug!(words = dict.len(), "dictionary loaded");
        Ok(dict)
    }

    /// Builds the index from an in-memory sequence of words, applying the
    /// same normalization as [`Dictionary::from_file`].
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: BTreeSet<String> = BTreeSet::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            entries.insert(word.to_uppercase());
        }

        if entries.is_empty() {
            return Err(DictionaryError::Empty);
        }

        let set = Set::from_iter(entries)?;
        Ok(Self { set })
    }

    /// Number of indexed words
    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Checks if the (already normalized) string is an exact indexed word
    pub fn is_word(&self, word: &str) -> bool {
        self.set.contains(word)
    }

    /// Checks if some indexed word starts with the given string. A `false`
    /// answer means no extension of the string can ever match, so the search
    /// abandons that branch.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        let matcher = Str::new(prefix).starts_with();
        let mut stream = self.set.search(matcher).into_stream();
        stream.next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::{Dictionary, DictionaryError};

    #[test]
    fn test_word_lookup() {
        let dict = Dictionary::from_words(["cat", "dog", "mouse", "moose", "laptop"]).unwrap();

        assert_eq!(dict.len(), 5);
        assert!(dict.is_word("CAT"));
        assert!(dict.is_word("MOOSE"));
        assert!(!dict.is_word("MOO"));
        assert!(!dict.is_word("CATS"));
    }

    #[test]
    fn test_prefix_lookup() {
        let dict = Dictionary::from_words(["HELLO", "QUANTUM", "PARAMETERS"]).unwrap();

        assert!(dict.has_prefix("H"));
        assert!(dict.has_prefix("HELL"));
        assert!(dict.has_prefix("QUANT"));
        // A whole word is a prefix of itself
        assert!(dict.has_prefix("HELLO"));

        assert!(!dict.has_prefix("HELLOO"));
        assert!(!dict.has_prefix("UANTUM"));
        assert!(!dict.has_prefix("B"));
    }

    #[test]
    fn test_normalization() {
        let dict = Dictionary::from_words(["  cat  ", "", "   ", "naïve", "it's", "Dog"]).unwrap();

        // Only "cat" and "Dog" survive: blank lines and words with
        // non-ASCII-letter characters are skipped
        assert_eq!(dict.len(), 2);
        assert!(dict.is_word("CAT"));
        assert!(dict.is_word("DOG"));
    }

    #[test]
    fn test_short_words_are_indexed() {
        let dict = Dictionary::from_words(["at", "a", "ate"]).unwrap();

        // Short entries stay in the index; the solver applies the length gate
        assert!(dict.is_word("A"));
        assert!(dict.is_word("AT"));
        assert!(dict.has_prefix("AT"));
    }

    #[test]
    fn test_empty_word_list() {
        assert!(matches!(
            Dictionary::from_words(Vec::<String>::new()),
            Err(DictionaryError::Empty)
        ));
        assert!(matches!(
            Dictionary::from_words(["", "  ", "123"]),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cat\n\ndog\nmo2use").unwrap();

        let dict = Dictionary::from_file(file.path()).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.is_word("DOG"));
    }

    #[test]
    fn test_missing_file() {
        let result = Dictionary::from_file("/nonexistent/word.list");
        assert!(matches!(result, Err(DictionaryError::Io(_))));
    }
}
