use std::io;

/// Errors surfaced by the search core. Failures cross the worker boundary
/// as reply data, never as panics; these variants exist for the native
/// call sites (CLI, snapshots) that want a typed error instead.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A search was requested before the worker received its word list.
    #[error("Trie not initialized")]
    NotInitialized,
    #[error("malformed board: expected {expected} cells, got {got}")]
    MalformedBoard { expected: usize, got: usize },
    /// The worker thread is gone, so no request can be delivered and no
    /// reply will ever arrive.
    #[error("search worker channel closed")]
    WorkerClosed,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("snapshot encoding error: {0}")]
    Snapshot(#[from] bincode::Error),
}
