//! Round configuration

/// Extra guesses granted on top of the word's letter count
pub const DEFAULT_ADDITIONAL_GUESSES: i32 = 3;

/// Base points for a correct guess, multiplied by the current streak
pub const POINTS_PER_CORRECT_GUESS: u32 = 10;

/// Parameters supplied when a round is constructed
///
/// `additional_guesses` is signed so that a negative budget coming from the
/// command line reaches `Round::new` and is rejected there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub additional_guesses: i32,
    pub points_per_correct_guess: u32,
}

impl RoundConfig {
    #[must_use]
    pub const fn new(additional_guesses: i32, points_per_correct_guess: u32) -> Self {
        Self {
            additional_guesses,
            points_per_correct_guess,
        }
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ADDITIONAL_GUESSES, POINTS_PER_CORRECT_GUESS)
    }
}
