use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use log::{debug, warn};

use crate::errors::SearchError;
use crate::search::dictionary::Dictionary;
use crate::search::grid::{self, Grid};
use crate::search::rack::Rack;
use crate::search::ranking::FoundWord;
use crate::search::{anagram, MIN_WORD_LEN};

pub mod protocol;

use self::protocol::{Request, Response, SearchInput};

/// Handle to the dedicated search thread. The thread owns the dictionary
/// and trie; handle and thread share nothing but the two message
/// channels, so the caller never blocks while a dictionary loads or a
/// search runs.
///
/// The request channel doubles as the FIFO queue the games rely on:
/// searches sent while `Init` is still in flight sit in the channel and
/// are answered, in their original order, once the dictionary is ready.
/// No request is dropped. There is no cancellation; a caller that loses
/// interest in a reply discards it on arrival.
pub struct SearchWorker {
    requests: Option<Sender<Request>>,
    replies: Receiver<Response>,
    handle: Option<JoinHandle<()>>,
}

impl SearchWorker {
    /// Spawns the worker thread with no dictionary. Searches that arrive
    /// before the first `Init` get a structured "Trie not initialized"
    /// reply rather than a panic across the thread boundary.
    pub fn spawn() -> SearchWorker {
        let (req_tx, req_rx) = mpsc::channel();
        let (rep_tx, rep_rx) = mpsc::channel();
        let handle = thread::spawn(move || run(req_rx, rep_tx));
        SearchWorker {
            requests: Some(req_tx),
            replies: rep_rx,
            handle: Some(handle),
        }
    }

    /// Queues a request for the worker. Fails only when the worker thread
    /// is gone.
    pub fn send(&self, request: Request) -> Result<(), SearchError> {
        match &self.requests {
            Some(tx) => tx.send(request).map_err(|_| SearchError::WorkerClosed),
            None => Err(SearchError::WorkerClosed),
        }
    }

    /// Blocks until the next reply arrives. Replies come back in request
    /// order; the worker runs one request to completion before reading
    /// the next.
    pub fn recv(&self) -> Result<Response, SearchError> {
        self.replies.recv().map_err(|_| SearchError::WorkerClosed)
    }

    /// Non-blocking poll for a reply, for callers pumping their own event
    /// loop.
    pub fn try_recv(&self) -> Option<Response> {
        self.replies.try_recv().ok()
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        // Closing the request channel lets the worker drain and exit.
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// State owned by the worker thread. The dictionary stays `None` until an
/// `Init` arrives; it is built exactly once per `Init` and read-only
/// between them.
struct WorkerState {
    dictionary: Option<Dictionary>,
}

impl WorkerState {
    fn handle(&mut self, request: Request) -> Response {
        match request {
            Request::Init { data } => {
                let dictionary = Dictionary::from_words(data);
                debug!("worker initialized with {} words", dictionary.len());
                self.dictionary = Some(dictionary);
                Response::Init { success: true }
            }
            Request::Search { data } => match &self.dictionary {
                None => Response::Search {
                    words: Vec::new(),
                    error: Some(SearchError::NotInitialized.to_string()),
                },
                Some(dictionary) => Response::Search {
                    words: run_search(dictionary, data),
                    error: None,
                },
            },
        }
    }
}

fn run_search(dictionary: &Dictionary, input: SearchInput) -> Vec<FoundWord> {
    match input {
        SearchInput::Letters(letters) => {
            let rack: Rack = letters.into_iter().collect();
            anagram::find_words(dictionary, &rack, MIN_WORD_LEN)
        }
        SearchInput::Board(board) => match board.parse::<Grid>() {
            Ok(grid) => grid::find_words(dictionary, &grid, MIN_WORD_LEN),
            Err(err) => {
                // A half-edited board is an empty result, not a failure.
                warn!("{}", err);
                Vec::new()
            }
        },
    }
}

fn run(requests: Receiver<Request>, replies: Sender<Response>) {
    let mut state = WorkerState { dictionary: None };
    // One request is processed to completion before the next is read.
    while let Ok(request) = requests.recv() {
        let reply = state.handle(request);
        if replies.send(reply).is_err() {
            // Caller went away; nobody is left to report to.
            break;
        }
    }
    debug!("search worker shutting down");
}

#[cfg(test)]
mod tests {
    use super::protocol::{Request, Response, SearchInput};
    use super::SearchWorker;

    fn init_request() -> Request {
        Request::Init {
            data: ["PAINT", "PAINTS", "TIN", "SPAIN", "ANTIPASTI"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    #[test]
    fn test_search_before_init_is_a_structured_error() {
        let worker = SearchWorker::spawn();
        worker
            .send(Request::Search {
                data: SearchInput::Letters(vec!['T', 'I', 'N']),
            })
            .unwrap();
        match worker.recv().unwrap() {
            Response::Search { words, error } => {
                assert!(words.is_empty());
                assert_eq!(error.as_deref(), Some("Trie not initialized"));
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn test_requests_queued_during_init_are_answered_in_order() {
        let worker = SearchWorker::spawn();
        // All three go out before any reply is read; the channel keeps
        // them in order across the init boundary.
        worker.send(init_request()).unwrap();
        worker
            .send(Request::Search {
                data: SearchInput::Letters("PAINTS".chars().collect()),
            })
            .unwrap();
        worker
            .send(Request::Search {
                data: SearchInput::Letters("TIN".chars().collect()),
            })
            .unwrap();

        assert_eq!(worker.recv().unwrap(), Response::Init { success: true });

        match worker.recv().unwrap() {
            Response::Search { words, error } => {
                assert_eq!(error, None);
                let words: Vec<&str> = words.iter().map(|f| f.word.as_str()).collect();
                assert_eq!(words, ["PAINTS", "PAINT", "SPAIN", "TIN"]);
            }
            other => panic!("unexpected reply: {:?}", other),
        }

        match worker.recv().unwrap() {
            Response::Search { words, error } => {
                assert_eq!(error, None);
                let words: Vec<&str> = words.iter().map(|f| f.word.as_str()).collect();
                assert_eq!(words, ["TIN"]);
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn test_board_search_through_worker() {
        let worker = SearchWorker::spawn();
        worker
            .send(Request::Init {
                data: vec!["CAT".to_string()],
            })
            .unwrap();
        worker
            .send(Request::Search {
                data: SearchInput::Board("CATXXXXXXXXXXXXX".to_string()),
            })
            .unwrap();

        assert_eq!(worker.recv().unwrap(), Response::Init { success: true });
        match worker.recv().unwrap() {
            Response::Search { words, error } => {
                assert_eq!(error, None);
                assert_eq!(words.len(), 1);
                assert_eq!(words[0].word, "CAT");
                assert_eq!(words[0].path.as_ref().unwrap().len(), 3);
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_board_yields_zero_results() {
        let worker = SearchWorker::spawn();
        worker
            .send(Request::Init {
                data: vec!["CAT".to_string()],
            })
            .unwrap();
        worker
            .send(Request::Search {
                data: SearchInput::Board("CAT".to_string()),
            })
            .unwrap();

        assert_eq!(worker.recv().unwrap(), Response::Init { success: true });
        match worker.recv().unwrap() {
            Response::Search { words, error } => {
                assert!(words.is_empty());
                assert_eq!(error, None);
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn test_searches_are_stateless_between_requests() {
        let worker = SearchWorker::spawn();
        worker.send(init_request()).unwrap();
        let search = Request::Search {
            data: SearchInput::Letters("PAINTS".chars().collect()),
        };
        worker.send(search.clone()).unwrap();
        worker.send(search).unwrap();

        assert_eq!(worker.recv().unwrap(), Response::Init { success: true });
        let first = worker.recv().unwrap();
        let second = worker.recv().unwrap();
        assert_eq!(first, second);
    }
}
