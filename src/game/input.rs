//! Guess input
//!
//! Turns raw player input into a validated, case-folded letter, and defines
//! the seam through which a round asks for its next guess.

use super::round::Round;
use crate::core::{fold_case, is_letter};
use std::io;
use thiserror::Error;

/// Failure to obtain a guess from the player
#[derive(Debug, Error)]
pub enum InputError {
    #[error("you must input a single character, got {0:?}")]
    NotSingleChar(String),
    #[error("you must input an alphabetic character, got {0:?}")]
    NotALetter(char),
    #[error("input closed")]
    Closed,
    #[error("no guess available")]
    Unavailable,
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

impl InputError {
    /// Whether re-prompting can fix the problem
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::NotSingleChar(_) | Self::NotALetter(_))
    }
}

/// Validate one line of player input as a guess
///
/// Surrounding whitespace is ignored. The result is folded to lowercase.
///
/// # Errors
/// `NotSingleChar` unless exactly one character remains after trimming,
/// `NotALetter` if that character is not a letter.
///
/// # Examples
/// ```
/// use hangman::game::parse_guess;
///
/// assert_eq!(parse_guess(" E\n").unwrap(), 'e');
/// assert!(parse_guess("ab").is_err());
/// assert!(parse_guess("7").is_err());
/// ```
pub fn parse_guess(input: &str) -> Result<char, InputError> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Err(InputError::NotSingleChar(trimmed.to_string()));
    };

    if !is_letter(ch) {
        return Err(InputError::NotALetter(ch));
    }

    Ok(fold_case(ch))
}

/// Supplies the next guess of a round
///
/// Implementations re-prompt on invalid input themselves; an error returned
/// from here aborts the round.
pub trait GuessSource {
    /// Block until the player provides a valid letter
    ///
    /// # Errors
    /// Returns an error when no guess can be obtained (closed input, I/O failure).
    fn next_guess(&mut self, round: &Round<'_>) -> Result<char, InputError>;

    /// Show the board; called before every prompt and once when the round ends
    fn show_turn(&mut self, _round: &Round<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_single_letters() {
        assert_eq!(parse_guess("a").unwrap(), 'a');
        assert_eq!(parse_guess("Q").unwrap(), 'q');
        assert_eq!(parse_guess("É").unwrap(), 'é');
        assert_eq!(parse_guess("  x  ").unwrap(), 'x');
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(parse_guess(""), Err(InputError::NotSingleChar(_))));
        assert!(matches!(parse_guess("   "), Err(InputError::NotSingleChar(_))));
        assert!(matches!(parse_guess("ab"), Err(InputError::NotSingleChar(_))));
    }

    #[test]
    fn rejects_non_letters() {
        assert!(matches!(parse_guess("1"), Err(InputError::NotALetter('1'))));
        assert!(matches!(parse_guess("-"), Err(InputError::NotALetter('-'))));
    }

    #[test]
    fn retryable_errors() {
        assert!(InputError::NotALetter('1').is_retryable());
        assert!(InputError::NotSingleChar(String::new()).is_retryable());
        assert!(!InputError::Closed.is_retryable());
    }
}
