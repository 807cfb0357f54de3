use std::fs;
use std::path::Path;

use log::debug;

use crate::errors::SearchError;
use crate::utils::serialization;

use super::trie::Trie;

/// Normalized word list plus the trie built from it. Built once per load
/// and read-only afterwards; a changed word list means building a fresh
/// `Dictionary`, not mutating this one.
#[derive(Debug, Default)]
pub struct Dictionary {
    words: Vec<String>,
    trie: Trie,
}

impl Dictionary {
    /// Builds the dictionary and its trie from a sequence of words.
    /// Words are trimmed and uppercased; empty entries are dropped.
    pub fn from_words<I>(words: I) -> Dictionary
    where
        I: IntoIterator<Item = String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .filter_map(|raw| {
                let word = raw.trim();
                if word.is_empty() {
                    None
                } else {
                    Some(word.to_uppercase())
                }
            })
            .collect();

        let mut trie = Trie::new();
        for word in &words {
            trie.insert(word);
        }
        debug!("dictionary built with {} words", words.len());
        Dictionary { words, trie }
    }

    /// Parses newline-delimited text, one word per line. Handles CRLF and
    /// LF endings; blank lines are dropped. An empty source yields an
    /// empty dictionary, which is a valid state the caller can report as
    /// zero words rather than a failure.
    pub fn parse_from_str(contents: &str) -> Dictionary {
        Self::from_words(contents.lines().map(str::to_owned))
    }

    /// Reads a word list from a file. A missing or unreadable file is an
    /// io error; the caller decides whether to fall back to an empty
    /// dictionary.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> std::io::Result<Dictionary> {
        let data = fs::read_to_string(path)?;
        Ok(Self::parse_from_str(&data))
    }

    /// Saves the normalized word list as a binary snapshot, a faster
    /// reload path than re-parsing the raw text.
    pub fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> Result<(), SearchError> {
        serialization::save_to_disk(&self.words, path)
    }

    /// Restores a dictionary from a snapshot written by [`save_snapshot`].
    pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Dictionary, SearchError> {
        let words: Vec<String> = serialization::load_from_disk(path)?;
        Ok(Self::from_words(words))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Dictionary;

    #[test]
    fn test_parse_normalizes_and_drops_blanks() {
        let dict = Dictionary::parse_from_str("cat\n\n  dog  \r\nMOOSE\r\n\r\n");
        assert_eq!(dict.words(), ["CAT", "DOG", "MOOSE"]);
        assert!(dict.trie().is_word("CAT"));
        assert!(dict.trie().is_word("DOG"));
        assert!(dict.trie().is_prefix("MOO"));
    }

    #[test]
    fn test_empty_source_is_valid() {
        let dict = Dictionary::parse_from_str("");
        assert!(dict.is_empty());
        assert!(dict.trie().is_empty());

        let blank = Dictionary::parse_from_str("\n  \r\n\n");
        assert!(blank.is_empty());
    }

    #[test]
    fn test_duplicates_are_kept_in_list() {
        // The word list is the source of truth in input order; result
        // sets collapse duplicates later.
        let dict = Dictionary::parse_from_str("tin\ntin\n");
        assert_eq!(dict.len(), 2);
        assert!(dict.trie().is_word("TIN"));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let dict = Dictionary::parse_from_str("paint\nspain\ntin\n");
        let path = std::env::temp_dir().join("wordgames_dict_snapshot_test.bin");
        dict.save_snapshot(&path).unwrap();
        let restored = Dictionary::load_snapshot(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(restored.words(), dict.words());
        assert!(restored.trie().is_word("SPAIN"));
    }

    #[test]
    fn test_missing_snapshot_is_an_error() {
        let path = std::env::temp_dir().join("wordgames_no_such_snapshot.bin");
        assert!(Dictionary::load_snapshot(&path).is_err());
    }
}
