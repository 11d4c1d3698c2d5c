//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::{WordRecord, fold_case, is_letter};
use crate::game::Round;
use rustc_hash::FxHashMap;

/// A strategy for picking the next letter to guess
pub trait Strategy {
    /// Select a letter given the round and the words that could still be the answer
    ///
    /// Returns `None` if no unguessed letter appears in any candidate.
    fn select_letter(&self, round: &Round<'_>, candidates: &[&WordRecord]) -> Option<char>;
}

impl<S: Strategy + ?Sized> Strategy for &S {
    fn select_letter(&self, round: &Round<'_>, candidates: &[&WordRecord]) -> Option<char> {
        (**self).select_letter(round, candidates)
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Most common letter among candidates (default)
    Frequency(FrequencyStrategy),
    /// Random letter from the candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(&self, round: &Round<'_>, candidates: &[&WordRecord]) -> Option<char> {
        match self {
            Self::Frequency(s) => s.select_letter(round, candidates),
            Self::Random(s) => s.select_letter(round, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }
}

/// How many candidates contain each unguessed letter
///
/// Each word counts once per letter, however often the letter repeats.
#[must_use]
pub fn letter_coverage(round: &Round<'_>, candidates: &[&WordRecord]) -> FxHashMap<char, usize> {
    let mut coverage: FxHashMap<char, usize> = FxHashMap::default();
    for word in candidates {
        for letter in word.letter_index().letters() {
            if !round.has_guessed(letter) {
                *coverage.entry(letter).or_insert(0) += 1;
            }
        }
    }
    coverage
}

/// Most-common-letter strategy
///
/// Picks the unguessed letter found in the most candidates, so every guess
/// splits the candidate set as evenly as a single letter can. Ties go to the
/// smallest letter to keep runs reproducible.
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_letter(&self, round: &Round<'_>, candidates: &[&WordRecord]) -> Option<char> {
        letter_coverage(round, candidates)
            .into_iter()
            .max_by(|(l1, c1), (l2, c2)| c1.cmp(c2).then_with(|| l2.cmp(l1)))
            .map(|(letter, _)| letter)
    }
}

/// Random strategy
///
/// Picks uniformly among unguessed letters of the candidates. Useful as a
/// baseline for the frequency strategy.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_letter(&self, round: &Round<'_>, candidates: &[&WordRecord]) -> Option<char> {
        use rand::prelude::IndexedRandom;

        let mut letters: Vec<char> = candidates
            .iter()
            .flat_map(|word| word.text().chars())
            .filter(|&ch| is_letter(ch))
            .map(fold_case)
            .filter(|&letter| !round.has_guessed(letter))
            .collect();
        letters.sort_unstable();
        letters.dedup();

        letters.choose(&mut rand::rng()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RoundConfig;

    fn words(texts: &[&str]) -> Vec<WordRecord> {
        texts.iter().map(|t| WordRecord::new(*t, "")).collect()
    }

    #[test]
    fn coverage_counts_words_not_occurrences() {
        let answer = WordRecord::new("noon", "");
        let round = Round::new(&answer, RoundConfig::default()).unwrap();
        let pool = words(&["noon", "moon"]);
        let refs: Vec<&WordRecord> = pool.iter().collect();
        let coverage = letter_coverage(&round, &refs);
        assert_eq!(coverage.get(&'o'), Some(&2));
        assert_eq!(coverage.get(&'n'), Some(&2));
        assert_eq!(coverage.get(&'m'), Some(&1));
    }

    #[test]
    fn coverage_skips_guessed_letters() {
        let answer = WordRecord::new("noon", "");
        let mut round = Round::new(&answer, RoundConfig::default()).unwrap();
        round.process_guess('o');
        let pool = words(&["noon"]);
        let refs: Vec<&WordRecord> = pool.iter().collect();
        let coverage = letter_coverage(&round, &refs);
        assert_eq!(coverage.get(&'o'), None);
        assert_eq!(coverage.get(&'n'), Some(&1));
    }

    #[test]
    fn frequency_picks_most_common_letter() {
        let answer = WordRecord::new("cut", "");
        let round = Round::new(&answer, RoundConfig::default()).unwrap();
        let pool = words(&["cat", "cot", "cut", "dog"]);
        let refs: Vec<&WordRecord> = pool.iter().collect();
        // 'c' and 't' both cover three words; the tie goes to 'c'
        assert_eq!(FrequencyStrategy.select_letter(&round, &refs), Some('c'));
    }

    #[test]
    fn frequency_with_no_candidates() {
        let answer = WordRecord::new("cut", "");
        let round = Round::new(&answer, RoundConfig::default()).unwrap();
        assert_eq!(FrequencyStrategy.select_letter(&round, &[]), None);
    }

    #[test]
    fn random_picks_unguessed_candidate_letter() {
        let answer = WordRecord::new("cut", "");
        let mut round = Round::new(&answer, RoundConfig::default()).unwrap();
        round.process_guess('c');
        round.process_guess('u');
        let pool = words(&["cut"]);
        let refs: Vec<&WordRecord> = pool.iter().collect();
        assert_eq!(RandomStrategy.select_letter(&round, &refs), Some('t'));
    }

    #[test]
    fn from_name_defaults_to_frequency() {
        assert!(matches!(
            StrategyType::from_name("frequency"),
            StrategyType::Frequency(_)
        ));
        assert!(matches!(
            StrategyType::from_name("random"),
            StrategyType::Random(_)
        ));
        assert!(matches!(
            StrategyType::from_name("unknown"),
            StrategyType::Frequency(_)
        ));
    }
}
