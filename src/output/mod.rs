//! Terminal output formatting
//!
//! Display utilities for CLI results, board formatting and the log backend.

pub mod display;
pub mod formatters;
pub mod logger;

pub use display::{print_autoplay_statistics, print_categories, print_check_report};
