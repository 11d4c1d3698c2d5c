//! Hangman solving
//!
//! Picks letters for a round from the words of its category. Used by the
//! autoplay benchmark.

mod candidates;
mod engine;
pub mod strategy;

pub use candidates::{filter_candidates, is_consistent};
pub use engine::Solver;
pub use strategy::{FrequencyStrategy, RandomStrategy, Strategy, StrategyType};
