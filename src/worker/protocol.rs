use serde::{Deserialize, Serialize};

use crate::search::ranking::FoundWord;

/// Requests accepted by the search worker. On the wire each message is a
/// `type` tag plus a `data` payload, which is the shape both game pages
/// speak.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Request {
    /// Full word list. The worker builds its dictionary and trie exactly
    /// once from this payload.
    Init { data: Vec<String> },
    /// One search over the immutable dictionary.
    Search { data: SearchInput },
}

/// Payload of a search request. The anagrams game sends its rack as a
/// list of letters; the grid game sends the whole board as one flat
/// string, so the two are distinguishable without an extra tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchInput {
    Letters(Vec<char>),
    Board(String),
}

/// Replies produced by the search worker, tagged the same way as the
/// requests they answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Response {
    Init {
        success: bool,
    },
    Search {
        words: Vec<FoundWord>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        error: Option<String>,
    },
}
