use serde::{Deserialize, Serialize};

use super::util::Position;

/// A dictionary word discovered by one of the finders. Board searches
/// carry the cell path of the first traversal that completed the word;
/// rack searches have no path to report, and the field is left off the
/// wire entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundWord {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub path: Option<Vec<Position>>,
}

impl FoundWord {
    pub fn new(word: String) -> FoundWord {
        FoundWord { word, path: None }
    }

    pub fn with_path(word: String, path: Vec<Position>) -> FoundWord {
        FoundWord {
            word,
            path: Some(path),
        }
    }
}

/// Sorts results into presentation order: longest words first, ties
/// broken alphabetically. The order is total over distinct words, so
/// repeated runs over the same inputs render identically.
pub fn rank(mut words: Vec<FoundWord>) -> Vec<FoundWord> {
    words.sort_by(|a, b| {
        b.word
            .len()
            .cmp(&a.word.len())
            .then_with(|| a.word.cmp(&b.word))
    });
    words
}

#[cfg(test)]
mod tests {
    use super::{rank, FoundWord};

    #[test]
    fn test_rank_length_desc_then_alpha() {
        let words = ["TIN", "PAINTS", "PAINT", "SPAIN"]
            .into_iter()
            .map(|w| FoundWord::new(w.to_string()))
            .collect();
        let ranked: Vec<String> = rank(words).into_iter().map(|f| f.word).collect();
        assert_eq!(ranked, ["PAINTS", "PAINT", "SPAIN", "TIN"]);
    }

    #[test]
    fn test_rank_is_stable_across_runs() {
        let build = || {
            vec![
                FoundWord::new("BAT".to_string()),
                FoundWord::new("ABS".to_string()),
                FoundWord::new("CAB".to_string()),
            ]
        };
        assert_eq!(rank(build()), rank(build()));
    }
}
