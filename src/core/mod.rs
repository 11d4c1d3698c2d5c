//! Core domain types for Hangman
//!
//! Letter classification and the word model. Everything here is pure and
//! derived from a word's text; no I/O.

mod letters;
mod word;

pub use letters::{fold_case, is_alphabetic, is_letter};
pub use word::{LetterIndex, MASK_CHAR, WordRecord};
