//! Session controller
//!
//! Drives rounds back to back: pick a category, play the round, announce the
//! result, and return to the menu until the player quits.

use super::config::RoundConfig;
use super::input::{GuessSource, InputError};
use super::round::{Round, RoundOutcome, play_round};
use crate::corpus::Corpus;
use thiserror::Error;

/// Where the session stands between rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No round yet; the category menu is next
    Pending,
    Playing,
    Win,
    Lose,
    Quit,
}

/// Something that moves the session from one phase to another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    RoundStarted,
    RoundWon,
    RoundLost,
    /// Input failed or round setup failed
    Aborted,
    /// The win/lose result has been shown
    Acknowledged,
    QuitRequested,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("illegal transition from {from:?} on {event:?}")]
    IllegalTransition { from: Phase, event: Event },
}

impl Phase {
    /// Apply an event
    ///
    /// # Errors
    /// Returns `IllegalTransition` for events that make no sense in the
    /// current phase, e.g. `RoundWon` while `Pending`. `Quit` is terminal.
    ///
    /// # Examples
    /// ```
    /// use hangman::game::{Event, Phase};
    ///
    /// let phase = Phase::Pending.advance(Event::RoundStarted).unwrap();
    /// assert_eq!(phase, Phase::Playing);
    /// assert!(Phase::Pending.advance(Event::RoundWon).is_err());
    /// ```
    pub const fn advance(self, event: Event) -> Result<Self, SessionError> {
        match (self, event) {
            (Self::Pending, Event::RoundStarted) => Ok(Self::Playing),
            (Self::Playing, Event::RoundWon) => Ok(Self::Win),
            (Self::Playing, Event::RoundLost) => Ok(Self::Lose),
            (Self::Win | Self::Lose, Event::Acknowledged) => Ok(Self::Pending),
            (
                Self::Pending | Self::Playing | Self::Win | Self::Lose,
                Event::Aborted | Event::QuitRequested,
            ) => Ok(Self::Quit),
            (from, event) => Err(SessionError::IllegalTransition { from, event }),
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Quit)
    }
}

impl From<RoundOutcome> for Event {
    fn from(outcome: RoundOutcome) -> Self {
        match outcome {
            RoundOutcome::Win => Self::RoundWon,
            RoundOutcome::Lose => Self::RoundLost,
            RoundOutcome::Quit => Self::Aborted,
        }
    }
}

/// Front end used by `Session::run`
pub trait SessionUi: GuessSource {
    /// Ask the player for a category
    ///
    /// Returns the index into `categories`, or `None` to quit.
    ///
    /// # Errors
    /// Returns an error if the menu cannot be shown or answered.
    fn choose_category(&mut self, categories: &[String]) -> Result<Option<usize>, InputError>;

    /// Report the result of a finished round
    fn announce(&mut self, outcome: RoundOutcome, round: &Round<'_>);
}

/// Running totals across rounds
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub won: usize,
    pub lost: usize,
    pub total_score: u64,
}

impl SessionStats {
    pub fn record(&mut self, outcome: RoundOutcome, score: u32) {
        match outcome {
            RoundOutcome::Win => self.won += 1,
            RoundOutcome::Lose => self.lost += 1,
            RoundOutcome::Quit => return,
        }
        self.total_score += u64::from(score);
    }

    #[must_use]
    pub const fn played(&self) -> usize {
        self.won + self.lost
    }
}

/// Plays rounds from a corpus until the player quits
pub struct Session<'a> {
    corpus: &'a Corpus,
    config: RoundConfig,
    phase: Phase,
    stats: SessionStats,
}

impl<'a> Session<'a> {
    #[must_use]
    pub const fn new(corpus: &'a Corpus, config: RoundConfig) -> Self {
        Self {
            corpus,
            config,
            phase: Phase::Pending,
            stats: SessionStats {
                won: 0,
                lost: 0,
                total_score: 0,
            },
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Run the session loop until the player quits
    ///
    /// Failures to set up a round are logged and end the session.
    ///
    /// # Errors
    /// Only an internal phase inconsistency is returned.
    pub fn run<U: SessionUi>(&mut self, ui: &mut U) -> Result<SessionStats, SessionError> {
        while !self.phase.is_terminal() {
            self.phase = match self.phase {
                Phase::Pending => self.play_next(ui)?,
                Phase::Win => {
                    log::info!("🎉 You win!");
                    self.phase.advance(Event::Acknowledged)?
                }
                Phase::Lose => {
                    log::info!("😢 You lose!");
                    self.phase.advance(Event::Acknowledged)?
                }
                Phase::Playing | Phase::Quit => self.phase.advance(Event::Aborted)?,
            };
        }

        log::info!("👋 Quit...");
        Ok(self.stats)
    }

    /// Menu, round setup and round play, starting from `Pending`
    fn play_next<U: SessionUi>(&mut self, ui: &mut U) -> Result<Phase, SessionError> {
        let corpus = self.corpus;
        let categories = corpus.categories();
        let choice = match ui.choose_category(categories) {
            Ok(choice) => choice,
            Err(err) => {
                log::error!("prompt failed: {err}");
                return self.phase.advance(Event::Aborted);
            }
        };

        let Some(category) = choice.and_then(|idx| categories.get(idx)) else {
            return self.phase.advance(Event::QuitRequested);
        };

        let word = match corpus.random_word(category) {
            Ok(word) => word,
            Err(err) => {
                log::error!("failed to get random word: {err}");
                return self.phase.advance(Event::Aborted);
            }
        };

        let mut round = match Round::new(word, self.config) {
            Ok(round) => round,
            Err(err) => {
                log::error!("failed to create game: {err}");
                return self.phase.advance(Event::Aborted);
            }
        };

        let playing = self.phase.advance(Event::RoundStarted)?;
        let outcome = play_round(&mut round, ui);
        self.stats.record(outcome, round.score());
        if outcome != RoundOutcome::Quit {
            ui.announce(outcome, &round);
        }

        playing.advance(outcome.into())
    }
}
