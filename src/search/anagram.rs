use std::collections::HashSet;

use log::debug;

use super::dictionary::Dictionary;
use super::rack::Rack;
use super::ranking::{self, FoundWord};

/// Finds every dictionary word of at least `min_len` letters that can be
/// spelled from the rack, each letter usable at most as many times as the
/// rack holds it. Arrangement does not matter, only availability.
pub fn find_words(dict: &Dictionary, rack: &Rack, min_len: usize) -> Vec<FoundWord> {
    let mut found = HashSet::new();
    for word in dict.words() {
        if word.chars().count() < min_len {
            continue;
        }
        // Cheap histogram comparison first; most words fail here without
        // the trie ever being touched.
        if !rack.can_spell(word) {
            continue;
        }
        // The trie is rebuilt from the same word list, so this lookup can
        // only fail if the two ever fall out of step.
        if !dict.trie().is_word(word) {
            continue;
        }
        found.insert(word.clone());
    }
    debug!("rack search matched {} distinct words", found.len());
    ranking::rank(found.into_iter().map(FoundWord::new).collect())
}

#[cfg(test)]
mod tests {
    use super::find_words;
    use crate::search::dictionary::Dictionary;
    use crate::search::rack::Rack;
    use crate::search::MIN_WORD_LEN;

    fn fixture() -> Dictionary {
        Dictionary::parse_from_str("PAINT\nPAINTS\nTIN\nSPAIN\nANTIPASTI\n")
    }

    #[test]
    fn test_paints_rack() {
        let rack: Rack = "PAINTS".chars().collect();
        let words: Vec<String> = find_words(&fixture(), &rack, MIN_WORD_LEN)
            .into_iter()
            .map(|f| f.word)
            .collect();
        // ANTIPASTI needs more A's, I's and T's than the rack holds
        assert_eq!(words, ["PAINTS", "PAINT", "SPAIN", "TIN"]);
    }

    #[test]
    fn test_insufficient_letter_count_is_rejected() {
        let dict = Dictionary::parse_from_str("TAINT\n");
        let rack: Rack = "PAINTS".chars().collect();
        // Every letter of TAINT is on the rack, but T only once
        assert!(find_words(&dict, &rack, MIN_WORD_LEN).is_empty());
    }

    #[test]
    fn test_min_length_filter() {
        let dict = Dictionary::parse_from_str("AT\nTIN\n");
        let rack: Rack = "PAINTS".chars().collect();
        let words: Vec<String> = find_words(&dict, &rack, MIN_WORD_LEN)
            .into_iter()
            .map(|f| f.word)
            .collect();
        assert_eq!(words, ["TIN"]);
    }

    #[test]
    fn test_short_rack_yields_nothing() {
        let rack: Rack = "TI".chars().collect();
        assert!(find_words(&fixture(), &rack, MIN_WORD_LEN).is_empty());
    }

    #[test]
    fn test_duplicate_dictionary_entries_collapse() {
        let dict = Dictionary::parse_from_str("TIN\nTIN\n");
        let rack: Rack = "PAINTS".chars().collect();
        assert_eq!(find_words(&dict, &rack, MIN_WORD_LEN).len(), 1);
    }

    #[test]
    fn test_results_have_no_path() {
        let rack: Rack = "PAINTS".chars().collect();
        for found in find_words(&fixture(), &rack, MIN_WORD_LEN) {
            assert!(found.path.is_none());
        }
    }
}
