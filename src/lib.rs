//! Hangman
//!
//! A word-guessing game: words and hints are loaded by category, the player
//! reveals the word one letter at a time, and consecutive correct guesses
//! multiply the points they earn.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::WordRecord;
//! use hangman::game::{GuessOutcome, Round, RoundConfig, RoundStatus};
//!
//! let word = WordRecord::new("cat", "A pet that purrs");
//! let mut round = Round::new(&word, RoundConfig::default()).unwrap();
//!
//! assert_eq!(round.process_guess('c'), GuessOutcome::Hit { revealed: 1, points: 10 });
//! assert_eq!(round.process_guess('x'), GuessOutcome::Miss);
//! round.process_guess('a');
//! round.process_guess('t');
//!
//! assert_eq!(round.status(), RoundStatus::Won);
//! assert_eq!(round.masked(), "c a t");
//! ```

// Core domain types
pub mod core;

// Rules, rounds and sessions
pub mod game;

// Word categories
pub mod corpus;

// Letter-picking bot
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
