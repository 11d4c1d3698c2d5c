//! Main hangman solver interface

use super::candidates::filter_candidates;
use super::strategy::Strategy;
use crate::core::WordRecord;
use crate::game::{GuessSource, InputError, Round};

/// Hangman solver
///
/// Knows the words of the round's category and picks letters with a strategy.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    pool: &'a [WordRecord],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and candidate pool
    ///
    /// # Parameters
    /// - `strategy`: The letter selection strategy to use
    /// - `pool`: Words the answer is drawn from, usually one category
    pub const fn new(strategy: S, pool: &'a [WordRecord]) -> Self {
        Self { strategy, pool }
    }

    /// Get the next letter to guess
    ///
    /// Returns `None` if no pool word fits the round or every candidate
    /// letter has been guessed.
    pub fn next_letter(&self, round: &Round<'_>) -> Option<char> {
        let candidates = self.get_candidates(round);
        if candidates.is_empty() {
            return None;
        }
        self.strategy.select_letter(round, &candidates)
    }

    /// Words from the pool still consistent with the round
    pub fn get_candidates(&self, round: &Round<'_>) -> Vec<&'a WordRecord> {
        filter_candidates(self.pool, round)
    }

    /// Count how many candidates remain
    pub fn count_candidates(&self, round: &Round<'_>) -> usize {
        self.get_candidates(round).len()
    }
}

impl<S: Strategy> GuessSource for Solver<'_, S> {
    fn next_guess(&mut self, round: &Round<'_>) -> Result<char, InputError> {
        self.next_letter(round).ok_or(InputError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{RoundConfig, RoundOutcome, play_round};
    use crate::solver::FrequencyStrategy;

    fn setup_pool() -> Vec<WordRecord> {
        ["cat", "cot", "cut", "dog"]
            .iter()
            .map(|t| WordRecord::new(*t, ""))
            .collect()
    }

    #[test]
    fn first_letter_is_most_common() {
        let pool = setup_pool();
        let solver = Solver::new(FrequencyStrategy, &pool);
        let round = Round::new(&pool[2], RoundConfig::default()).unwrap();
        assert_eq!(solver.next_letter(&round), Some('c'));
    }

    #[test]
    fn candidates_shrink_as_letters_are_revealed() {
        let pool = setup_pool();
        let solver = Solver::new(FrequencyStrategy, &pool);
        let mut round = Round::new(&pool[2], RoundConfig::default()).unwrap();
        assert_eq!(solver.count_candidates(&round), 4);

        round.process_guess('c');
        assert_eq!(solver.count_candidates(&round), 3);

        round.process_guess('a');
        assert_eq!(solver.count_candidates(&round), 2);
    }

    #[test]
    fn answer_outside_pool_yields_no_letter() {
        let pool = setup_pool();
        let solver = Solver::new(FrequencyStrategy, &pool);
        let answer = WordRecord::new("horse", "");
        let round = Round::new(&answer, RoundConfig::default()).unwrap();
        assert_eq!(solver.next_letter(&round), None);
    }

    #[test]
    fn solves_every_pool_word() {
        let pool = setup_pool();
        for answer in &pool {
            let mut solver = Solver::new(FrequencyStrategy, &pool);
            let mut round = Round::new(answer, RoundConfig::default()).unwrap();
            assert_eq!(
                play_round(&mut round, &mut solver),
                RoundOutcome::Win,
                "failed on {answer}"
            );
        }
    }

    #[test]
    fn solving_cut_takes_two_misses() {
        let pool = setup_pool();
        let mut solver = Solver::new(FrequencyStrategy, &pool);
        let mut round = Round::new(&pool[2], RoundConfig::default()).unwrap();
        play_round(&mut round, &mut solver);
        // c, t, then a and o miss before u
        assert_eq!(round.incorrect(), &['a', 'o']);
        assert!(round.is_win());
    }
}
