use std::process;

use clap::{Parser, Subcommand};
use log::info;

#[macro_use]
extern crate text_io;

use crate::errors::SearchError;
use crate::search::bag::Bag;
use crate::search::dictionary::Dictionary;
use crate::search::grid::{self, Grid};
use crate::search::rack::Rack;
use crate::search::ranking::FoundWord;
use crate::search::util::Position;
use crate::search::{anagram, GRID_SIZE, MIN_WORD_LEN};
use crate::worker::protocol::{Request, Response, SearchInput};
use crate::worker::SearchWorker;

mod errors;
mod search;
mod utils;
mod worker;

/// Word finder for the anagrams and grid puzzle games
#[derive(Parser)]
#[command(name = "wordgames")]
struct Cli {
    /// Path to a newline-delimited word list
    #[arg(long, default_value = "words.txt")]
    dict: String,
    /// Load the word list from a binary snapshot instead of text
    #[arg(long)]
    snapshot: Option<String>,
    /// Shortest word to report
    #[arg(long, default_value_t = MIN_WORD_LEN)]
    min_len: usize,
    /// Print results as JSON
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find every word spellable from a set of letters
    Anagrams {
        /// Available letters, e.g. PAINTS; omit to deal a random rack
        letters: Option<String>,
    },
    /// Find every word traceable on a 4x4 board
    Grid {
        /// 16 letters, row-major; omit to deal a random board
        board: Option<String>,
    },
    /// Interactive session in front of the background search worker
    Play,
    /// Write a binary snapshot of the parsed word list
    Snapshot {
        /// Output path
        out: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), SearchError> {
    let dictionary = match &cli.snapshot {
        Some(path) => Dictionary::load_snapshot(path)?,
        // An unreadable word list degrades to an empty dictionary; zero
        // words is a reportable state, not a crash.
        None => match Dictionary::load_from_path(&cli.dict) {
            Ok(dictionary) => dictionary,
            Err(err) => {
                eprintln!("could not read {}: {}", cli.dict, err);
                Dictionary::default()
            }
        },
    };
    info!("loaded {} words", dictionary.len());
    if dictionary.is_empty() {
        println!("Dictionary is empty; searches will find nothing.");
    }

    match cli.command {
        Command::Anagrams { letters } => {
            let letters = match letters {
                Some(letters) => letters.chars().collect(),
                None => {
                    let letters = Bag::new().draw_rack();
                    println!("Rack: {}", letters.iter().collect::<String>());
                    letters
                }
            };
            let rack: Rack = letters.into_iter().collect();
            let results = anagram::find_words(&dictionary, &rack, cli.min_len);
            print_results(&results, cli.json);
        }
        Command::Grid { board } => {
            let board = match board {
                Some(board) => board,
                None => {
                    let board = Bag::new().draw_board();
                    println!("Board: {}", board);
                    board
                }
            };
            let board: Grid = board.parse()?;
            let results = grid::find_words(&dictionary, &board, cli.min_len);
            print_results(&results, cli.json);
        }
        Command::Play => play(dictionary)?,
        Command::Snapshot { out } => {
            dictionary.save_snapshot(&out)?;
            println!("Snapshot written to {}", out);
        }
    }
    Ok(())
}

fn print_results(results: &[FoundWord], json: bool) {
    if json {
        match serde_json::to_string_pretty(results) {
            Ok(out) => println!("{}", out),
            Err(err) => eprintln!("error: {}", err),
        }
        return;
    }
    for found in results {
        match &found.path {
            Some(path) => println!("{:<16} {}", found.word, format_path(path)),
            None => println!("{}", found.word),
        }
    }
    println!("{} words", results.len());
}

fn format_path(path: &[Position]) -> String {
    path.iter()
        .map(|p| format!("({},{})", p.row, p.col))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Interactive loop in front of the search worker. Every search goes
/// through the worker's request channel, the same way the game pages use
/// it. Type letters to search them as a rack, 16 letters to search them
/// as a board, "r" for a random board, "q" to quit.
fn play(dictionary: Dictionary) -> Result<(), SearchError> {
    let bag = Bag::new();
    let worker = SearchWorker::spawn();
    worker.send(Request::Init {
        data: dictionary.words().to_vec(),
    })?;
    if !matches!(worker.recv()?, Response::Init { success: true }) {
        println!("Worker failed to initialize.");
        return Ok(());
    }
    println!("{} words ready.", dictionary.len());

    loop {
        println!("Letters (16 for a board), r for a random board, q to quit:");
        let line: String = read!("{}\n");
        let line = line.trim().to_string();
        if line == "q" {
            break;
        }
        let input = if line == "r" {
            let board = bag.draw_board();
            println!("Board: {}", board);
            SearchInput::Board(board)
        } else if line.chars().count() == GRID_SIZE * GRID_SIZE {
            SearchInput::Board(line)
        } else {
            SearchInput::Letters(line.chars().collect())
        };
        worker.send(Request::Search { data: input })?;
        match worker.recv()? {
            Response::Search { words, error: None } => {
                for found in words.iter().take(10) {
                    match &found.path {
                        Some(path) => println!("{:<16} {}", found.word, format_path(path)),
                        None => println!("{}", found.word),
                    }
                }
                if words.len() > 10 {
                    println!("... and {} more", words.len() - 10);
                }
                println!("{} words", words.len());
            }
            Response::Search {
                error: Some(err), ..
            } => println!("Search failed: {}", err),
            Response::Init { .. } => {}
        }
    }
    Ok(())
}
