//! Round engine
//!
//! Owns the state of a single round and the guess-processing algorithm.
//!
//! Scoring rewards streaks: the n-th consecutive novel correct guess earns
//! `points_per_correct_guess * n`. A miss or a repeated guess costs one
//! attempt and resets the streak.

use super::config::RoundConfig;
use super::input::GuessSource;
use crate::core::{LetterIndex, WordRecord, is_letter};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Reasons a round cannot be constructed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("word text cannot be empty")]
    InvalidWord,
    #[error("invalid round configuration: {0}")]
    InvalidConfig(String),
}

/// What a single guess did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter was guessed before
    Duplicate,
    /// The letter is not in the word
    Miss,
    /// The letter revealed `revealed` positions and scored `points`
    Hit { revealed: usize, points: u32 },
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// Terminal result of playing a round through `play_round`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Win,
    Lose,
    /// Input failed before the round finished
    Quit,
}

/// One round of hangman
///
/// Borrows the word it was created from; the round is discarded when it ends.
#[derive(Debug, Clone)]
pub struct Round<'w> {
    word: &'w WordRecord,
    letter_index: LetterIndex,
    mask: Vec<char>,
    /// Letter positions not revealed yet; kept apart from the mask so a
    /// literal `_` in the text never reads as hidden
    hidden: Vec<bool>,
    guessed: FxHashSet<char>,
    incorrect: Vec<char>,
    alphabet_length: usize,
    revealed: usize,
    remaining: usize,
    score: u32,
    streak: u32,
    points_per_correct_guess: u32,
}

impl<'w> Round<'w> {
    /// Start a round for `word`
    ///
    /// The attempt budget is the word's letter count plus
    /// `config.additional_guesses`.
    ///
    /// # Errors
    /// - `InvalidWord` if the word's text is empty
    /// - `InvalidConfig` if `additional_guesses` is negative or
    ///   `points_per_correct_guess` is zero
    ///
    /// # Examples
    /// ```
    /// use hangman::core::WordRecord;
    /// use hangman::game::{Round, RoundConfig};
    ///
    /// let word = WordRecord::new("hello", "A greeting");
    /// let round = Round::new(&word, RoundConfig::default()).unwrap();
    /// assert_eq!(round.remaining(), 8);
    /// assert_eq!(round.masked(), "_ _ _ _ _");
    /// ```
    pub fn new(word: &'w WordRecord, config: RoundConfig) -> Result<Self, RoundError> {
        if word.is_empty() {
            return Err(RoundError::InvalidWord);
        }

        let additional = usize::try_from(config.additional_guesses).map_err(|_| {
            RoundError::InvalidConfig(format!(
                "additional guesses cannot be negative, got {}",
                config.additional_guesses
            ))
        })?;

        if config.points_per_correct_guess == 0 {
            return Err(RoundError::InvalidConfig(
                "points per correct guess must be positive".to_string(),
            ));
        }

        let alphabet_length = word.alphabet_length();

        Ok(Self {
            word,
            letter_index: word.letter_index(),
            mask: word.mask_template(),
            hidden: word.text().chars().map(is_letter).collect(),
            guessed: FxHashSet::default(),
            incorrect: Vec::new(),
            alphabet_length,
            revealed: 0,
            remaining: alphabet_length.saturating_add(additional),
            score: 0,
            streak: 0,
            points_per_correct_guess: config.points_per_correct_guess,
        })
    }

    /// Apply one guess
    ///
    /// `letter` must already be a single case-folded letter; see
    /// [`parse_guess`](super::parse_guess). This never fails. Once no attempts
    /// remain, further misses leave `remaining` at zero.
    pub fn process_guess(&mut self, letter: char) -> GuessOutcome {
        if self.guessed.contains(&letter) {
            self.remaining = self.remaining.saturating_sub(1);
            self.streak = 0;
            log::warn!("already guessed '{letter}'");
            return GuessOutcome::Duplicate;
        }
        self.guessed.insert(letter);

        let positions = self.letter_index.positions_of(letter);
        if positions.is_empty() {
            self.remaining = self.remaining.saturating_sub(1);
            self.streak = 0;
            self.incorrect.push(letter);
            return GuessOutcome::Miss;
        }

        for &pos in positions {
            self.mask[pos] = letter;
            self.hidden[pos] = false;
        }
        self.revealed += positions.len();

        self.streak += 1;
        let points = self.points_per_correct_guess.saturating_mul(self.streak);
        self.score = self.score.saturating_add(points);

        GuessOutcome::Hit {
            revealed: positions.len(),
            points,
        }
    }

    /// Every letter position has been revealed
    ///
    /// A word without letters is won before any guess is made.
    #[inline]
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.revealed == self.alphabet_length
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        if self.is_win() {
            RoundStatus::Won
        } else if self.remaining == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    #[inline]
    #[must_use]
    pub fn hint(&self) -> &'w str {
        self.word.hint()
    }

    /// The answer, available only once the round has ended
    #[must_use]
    pub fn answer(&self) -> Option<&'w str> {
        match self.status() {
            RoundStatus::InProgress => None,
            RoundStatus::Won | RoundStatus::Lost => Some(self.word.text()),
        }
    }

    #[inline]
    #[must_use]
    pub fn mask(&self) -> &[char] {
        &self.mask
    }

    /// Mask tokens separated by spaces, e.g. `"h _ l l _"`
    #[must_use]
    pub fn masked(&self) -> String {
        let mut out = String::with_capacity(self.mask.len() * 2);
        for (i, ch) in self.mask.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(*ch);
        }
        out
    }

    /// Whether `pos` holds a letter that has not been revealed yet
    #[inline]
    #[must_use]
    pub fn is_hidden(&self, pos: usize) -> bool {
        self.hidden.get(pos).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    /// Wrong letters in the order they were guessed
    #[inline]
    #[must_use]
    pub fn incorrect(&self) -> &[char] {
        &self.incorrect
    }

    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    #[inline]
    #[must_use]
    pub const fn revealed(&self) -> usize {
        self.revealed
    }

    #[inline]
    #[must_use]
    pub const fn alphabet_length(&self) -> usize {
        self.alphabet_length
    }
}

/// Play a round to completion
///
/// The board is shown through `source` before every prompt and once more with
/// the final state. A failure from `source` ends the round with
/// `RoundOutcome::Quit`.
pub fn play_round<S: GuessSource + ?Sized>(round: &mut Round<'_>, source: &mut S) -> RoundOutcome {
    log::info!("Hint: {}", round.hint());

    if round.is_win() {
        source.show_turn(round);
        return RoundOutcome::Win;
    }

    while round.remaining() > 0 {
        source.show_turn(round);

        let letter = match source.next_guess(round) {
            Ok(letter) => letter,
            Err(err) => {
                log::error!("failed to input the guess letter: {err}");
                return RoundOutcome::Quit;
            }
        };

        let outcome = round.process_guess(letter);
        log::debug!("guess '{letter}': {outcome:?}");

        if round.is_win() {
            source.show_turn(round);
            return RoundOutcome::Win;
        }
    }

    source.show_turn(round);
    RoundOutcome::Lose
}
