//! Command implementations

pub mod autoplay;
pub mod check;
pub mod simple;

pub use autoplay::{AutoplayStatistics, WordPlayResult, run_autoplay};
pub use check::{CategoryReport, CorpusReport, check_corpus};
pub use simple::{LineUi, run_simple};
