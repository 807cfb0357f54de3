use std::collections::HashSet;
use std::str::FromStr;

use log::debug;
use rayon::prelude::*;

use crate::errors::SearchError;

use super::dictionary::Dictionary;
use super::ranking::{self, FoundWord};
use super::trie::Trie;
use super::util::Position;
use super::GRID_SIZE;

/// Hard cap on search depth. No cell repeats within one path, so 16 cells
/// is already the longest possible path; the cap is a recursion guard
/// rather than a real limiter.
const MAX_DEPTH: usize = GRID_SIZE * GRID_SIZE;

/// 4x4 letter board, row-major. Cells are normalized to uppercase so they
/// compare directly against dictionary words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[char; GRID_SIZE]; GRID_SIZE],
}

impl FromStr for Grid {
    type Err = SearchError;

    /// Builds a grid from a flat 16-character string, row-major.
    fn from_str(s: &str) -> Result<Grid, SearchError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != GRID_SIZE * GRID_SIZE {
            return Err(SearchError::MalformedBoard {
                expected: GRID_SIZE * GRID_SIZE,
                got: chars.len(),
            });
        }
        let mut cells = [[' '; GRID_SIZE]; GRID_SIZE];
        for (i, c) in chars.into_iter().enumerate() {
            cells[i / GRID_SIZE][i % GRID_SIZE] = c.to_ascii_uppercase();
        }
        Ok(Grid { cells })
    }
}

impl std::ops::Index<Position> for Grid {
    type Output = char;

    fn index(&self, index: Position) -> &char {
        &self.cells[index.row][index.col]
    }
}

/// Searches the whole board. Every cell seeds an exhaustive
/// depth-first search that extends through the 8 adjacent cells, never
/// revisiting a cell within one path and abandoning any branch whose
/// accumulated string is not a trie prefix. The first traversal to
/// complete a word owns that word's path; later traversals that spell the
/// same word are ignored.
///
/// Seeds run on rayon workers, but their results merge in row-major seed
/// order with the first recorded path winning, so the output is identical
/// to a purely sequential scan of the same board.
pub fn find_words(dict: &Dictionary, grid: &Grid, min_len: usize) -> Vec<FoundWord> {
    let seeds: Vec<Position> = (0..GRID_SIZE)
        .flat_map(|row| (0..GRID_SIZE).map(move |col| Position { row, col }))
        .collect();

    let per_seed: Vec<Vec<FoundWord>> = seeds
        .into_par_iter()
        .map(|seed| {
            let mut searcher = Searcher::new(grid, dict.trie(), min_len);
            searcher.explore(seed, 1);
            searcher.found
        })
        .collect();

    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for found in per_seed {
        for entry in found {
            if seen.insert(entry.word.clone()) {
                merged.push(entry);
            }
        }
    }
    debug!("board search found {} distinct words", merged.len());
    ranking::rank(merged)
}

/// Per-seed search state. Each seed owns its buffers, so a sibling branch
/// never observes another branch's partial path, and seeds can run on
/// separate threads without sharing anything but the board and the trie.
struct Searcher<'a> {
    grid: &'a Grid,
    trie: &'a Trie,
    min_len: usize,
    visited: [[bool; GRID_SIZE]; GRID_SIZE],
    path: Vec<Position>,
    current: String,
    /// Words completed under this seed, in discovery order
    found: Vec<FoundWord>,
    recorded: HashSet<String>,
}

impl<'a> Searcher<'a> {
    fn new(grid: &'a Grid, trie: &'a Trie, min_len: usize) -> Searcher<'a> {
        Searcher {
            grid,
            trie,
            min_len,
            visited: [[false; GRID_SIZE]; GRID_SIZE],
            path: Vec::with_capacity(MAX_DEPTH),
            current: String::with_capacity(MAX_DEPTH),
            found: Vec::new(),
            recorded: HashSet::new(),
        }
    }

    fn explore(&mut self, pos: Position, depth: usize) {
        if depth > MAX_DEPTH {
            return;
        }
        if self.visited[pos.row][pos.col] {
            return;
        }
        self.current.push(self.grid[pos]);
        if !self.trie.is_prefix(&self.current) {
            // Dominant pruning step: nothing in the dictionary starts
            // this way, so the whole branch is dead.
            self.current.pop();
            return;
        }
        self.visited[pos.row][pos.col] = true;
        self.path.push(pos);

        if self.current.chars().count() >= self.min_len
            && self.trie.is_word(&self.current)
            && self.recorded.insert(self.current.clone())
        {
            // Path is copied here; the live buffer keeps mutating as the
            // branch continues.
            self.found
                .push(FoundWord::with_path(self.current.clone(), self.path.clone()));
        }

        for next in pos.neighbors() {
            self.explore(next, depth + 1);
        }

        self.visited[pos.row][pos.col] = false;
        self.path.pop();
        self.current.pop();
    }
}
