//! Candidate filtering
//!
//! Narrows a category's words down to those that could still be the answer
//! given what a round has revealed.

use crate::core::{WordRecord, fold_case, is_letter};
use crate::game::Round;

/// Check whether `word` could be the answer of `round`
///
/// Revealed positions must match, separators must match literally, and a
/// hidden position cannot hold a letter that was already guessed.
#[must_use]
pub fn is_consistent(word: &WordRecord, round: &Round<'_>) -> bool {
    let mask = round.mask();
    if word.text().chars().count() != mask.len() {
        return false;
    }

    word.text()
        .chars()
        .zip(mask)
        .enumerate()
        .all(|(pos, (ch, &token))| match (is_letter(ch), round.is_hidden(pos)) {
            (true, true) => !round.has_guessed(fold_case(ch)),
            (true, false) => fold_case(ch) == token,
            (false, hidden) => !hidden && ch == token,
        })
}

/// Words from `pool` consistent with the round so far
#[must_use]
pub fn filter_candidates<'a>(pool: &'a [WordRecord], round: &Round<'_>) -> Vec<&'a WordRecord> {
    pool.iter().filter(|word| is_consistent(word, round)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RoundConfig;

    fn words(texts: &[&str]) -> Vec<WordRecord> {
        texts.iter().map(|t| WordRecord::new(*t, "")).collect()
    }

    #[test]
    fn fresh_round_keeps_same_shape() {
        let answer = WordRecord::new("cut", "");
        let round = Round::new(&answer, RoundConfig::default()).unwrap();
        let pool = words(&["cat", "dog", "horse", "ox"]);
        let candidates: Vec<&str> = filter_candidates(&pool, &round)
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(candidates, vec!["cat", "dog"]);
    }

    #[test]
    fn revealed_letters_must_match() {
        let answer = WordRecord::new("cut", "");
        let mut round = Round::new(&answer, RoundConfig::default()).unwrap();
        round.process_guess('c');
        let pool = words(&["cat", "cot", "dog"]);
        assert_eq!(filter_candidates(&pool, &round).len(), 2);
    }

    #[test]
    fn missed_letters_exclude_words() {
        let answer = WordRecord::new("cut", "");
        let mut round = Round::new(&answer, RoundConfig::default()).unwrap();
        round.process_guess('a');
        let pool = words(&["cat", "cot"]);
        let candidates = filter_candidates(&pool, &round);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text(), "cot");
    }

    #[test]
    fn separators_must_line_up() {
        let answer = WordRecord::new("sea otter", "");
        let round = Round::new(&answer, RoundConfig::default()).unwrap();
        assert!(!is_consistent(&WordRecord::new("polar bear", ""), &round));
        assert!(!is_consistent(&WordRecord::new("anteaters", ""), &round));
        assert!(is_consistent(&WordRecord::new("red panda", ""), &round));
        assert!(is_consistent(&WordRecord::new("sea lions", ""), &round));
    }

    #[test]
    fn literal_underscore_is_not_a_hidden_letter() {
        let answer = WordRecord::new("a_b", "");
        let round = Round::new(&answer, RoundConfig::default()).unwrap();
        assert!(!is_consistent(&WordRecord::new("axb", ""), &round));

        let answer = WordRecord::new("axb", "");
        let round = Round::new(&answer, RoundConfig::default()).unwrap();
        assert!(!is_consistent(&WordRecord::new("a_b", ""), &round));
    }

    #[test]
    fn answer_is_always_consistent() {
        let answer = WordRecord::new("Crème Brûlée", "");
        let mut round = Round::new(&answer, RoundConfig::default()).unwrap();
        for letter in "cxeéqb".chars() {
            round.process_guess(letter);
            assert!(is_consistent(&answer, &round));
        }
    }
}
